// App state (configuration, paths)
pub mod state;

// Reading documents in and rendering them back out
pub mod input;

// Build information
pub mod version;

pub use input::{parse_inline, read_document, render, InputError};
pub use state::{AppConfig, AppState, StateError};
pub use version::{build_info, BuildInfo};
