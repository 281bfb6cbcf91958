//! Interface validation, type qualification and parameter naming

pub mod extractor;
pub mod namer;
pub mod qualifier;
pub mod shape;

pub use extractor::{Signature, extract};
pub use namer::{NameRegistry, RECEIVER, generate_name, split_words};
pub use qualifier::TypeQualifier;
pub use shape::{MethodShape, validate};
