use silisland_config::SiteMetadata;

static METADATA: once_cell::sync::Lazy<SiteMetadata> =
    once_cell::sync::Lazy::new(SiteMetadata::default);

/// The built-in site metadata, constructed on first use.
pub fn metadata() -> &'static SiteMetadata {
    &METADATA
}
