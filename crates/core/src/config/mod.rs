//! Go toolchain environment used to resolve import paths

mod go_env;

// Re-export main types
pub use go_env::GoEnv;
