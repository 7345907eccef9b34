pub(crate) use anyhow::Context as _;
pub(crate) use silisland::error::Result;
