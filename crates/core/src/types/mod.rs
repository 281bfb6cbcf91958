pub mod go_type;
pub mod interface;
pub mod position;

// Re-export commonly used types
pub use go_type::{ChanDir, Field, GoType};
pub use interface::{InterfaceDescription, Parameter};
pub use position::Position;
