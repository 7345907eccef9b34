//! Resolution of the site's `include` list against a checkout on disk.

mod content;
mod source;

pub use content::*;
pub use source::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
