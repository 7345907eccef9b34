//! The `silisland` site metadata record and its on-disk overrides.

mod config;
mod link;
mod site;

pub mod path;

pub use self::config::*;
pub use self::link::*;
pub use self::path::ContentDir;
pub use self::site::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
