//! The `silisland` site metadata, shared read-only for the whole process.

pub mod error;

mod globals;
mod metadata;

pub use error::Error;
pub use globals::*;
pub use metadata::metadata;
