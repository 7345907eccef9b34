use std::fmt;

use liquid_core::model::KString;

use crate::Result;
use crate::Status;

/// Scheme prefixed to the plain domain to get the public site URL.
pub const TARGET_SCHEME: &str = "https://";

/// A bare hostname (`example.com`) along with the `https://` URL it is served under.
///
/// The URL is derived when the domain is built and is never read from input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Domain {
    plain: KString,
    target: KString,
}

impl Domain {
    pub fn new(plain: &str) -> Result<Self> {
        let plain = plain.trim();
        url::Host::parse(plain).map_err(|e| {
            Status::new("Invalid domain, expected a hostname without scheme or path")
                .with_source(e)
                .context_with(|c| c.insert("Domain", plain.to_owned()))
        })?;
        Ok(Self::from_unchecked(plain))
    }

    /// Build a domain from a trusted literal.
    pub fn from_unchecked(plain: &str) -> Self {
        let target = KString::from_string(format!("{TARGET_SCHEME}{plain}"));
        let plain = KString::from_ref(plain);
        Self { plain, target }
    }

    pub fn plain(&self) -> &str {
        self.plain.as_str()
    }

    pub fn target(&self) -> &str {
        self.target.as_str()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.plain, f)
    }
}

impl TryFrom<&str> for Domain {
    type Error = Status;

    fn try_from(other: &str) -> Result<Self> {
        Self::new(other)
    }
}

impl TryFrom<String> for Domain {
    type Error = Status;

    fn try_from(other: String) -> Result<Self> {
        Self::new(&other)
    }
}

impl From<Domain> for String {
    fn from(other: Domain) -> Self {
        other.plain.as_str().to_owned()
    }
}

/// An absolute `https` URL pointing off-site (repository, chat, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Link(url::Url);

impl Link {
    pub fn new(url: &str) -> Result<Self> {
        let raw = url.trim();
        let url = url::Url::parse(raw).map_err(|e| {
            Status::new("Invalid link, expected an absolute `https` URL")
                .with_source(e)
                .context_with(|c| c.insert("Link", raw.to_owned()))
        })?;
        if url.scheme() != "https" {
            return Err(Status::new("Invalid link, scheme must be `https`")
                .context_with(|c| c.insert("Link", raw.to_owned())));
        }
        if url.host_str().is_none() {
            return Err(Status::new("Invalid link, URL must have a host")
                .context_with(|c| c.insert("Link", raw.to_owned())));
        }
        Ok(Self(url))
    }

    /// Build a link from a trusted literal.
    pub fn from_unchecked(url: &str) -> Self {
        Self(url::Url::parse(url).unwrap())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<&str> for Link {
    type Error = Status;

    fn try_from(other: &str) -> Result<Self> {
        Self::new(other)
    }
}

impl TryFrom<String> for Link {
    type Error = Status;

    fn try_from(other: String) -> Result<Self> {
        Self::new(&other)
    }
}

impl From<Link> for String {
    fn from(other: Link) -> Self {
        other.as_str().to_owned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn domain_derives_target() {
        let domain = Domain::new("silisland.github.io").unwrap();
        assert_eq!(domain.plain(), "silisland.github.io");
        assert_eq!(domain.target(), "https://silisland.github.io");
    }

    #[test]
    fn domain_trims_whitespace() {
        let domain = Domain::new("  example.com\n").unwrap();
        assert_eq!(domain.plain(), "example.com");
        assert_eq!(domain.target(), "https://example.com");
    }

    #[test]
    fn domain_rejects_scheme() {
        assert!(Domain::new("https://example.com").is_err());
    }

    #[test]
    fn domain_rejects_path_and_port() {
        assert!(Domain::new("example.com/blog").is_err());
        assert!(Domain::new("example.com:8080").is_err());
    }

    #[test]
    fn domain_rejects_empty_and_whitespace() {
        assert!(Domain::new("").is_err());
        assert!(Domain::new("exa mple.com").is_err());
    }

    #[test]
    fn domain_accepts_internationalized() {
        let domain = Domain::new("博客.cn").unwrap();
        assert_eq!(domain.plain(), "博客.cn");
        assert_eq!(domain.target(), "https://博客.cn");
    }

    #[test]
    fn domain_deserialize_validates() {
        let domain: Domain = serde_yaml::from_str("example.org").unwrap();
        assert_eq!(domain.target(), "https://example.org");

        let result: std::result::Result<Domain, _> = serde_yaml::from_str("http://example.org");
        assert!(result.is_err());
    }

    #[test]
    fn domain_serializes_plain() {
        let domain = Domain::new("example.org").unwrap();
        let actual = serde_json::to_string(&domain).unwrap();
        assert_eq!(actual, r#""example.org""#);
    }

    #[test]
    fn link_accepts_https() {
        let link = Link::new("https://github.com/silisland/silisland.github.io").unwrap();
        assert_eq!(link.host(), "github.com");

        let link = Link::new("https://discord.gg/XuNFDcDZGj").unwrap();
        assert_eq!(link.host(), "discord.gg");
    }

    #[test]
    fn link_accepts_port_query_fragment() {
        let link = Link::new("https://example.com:8443/a?b=c#d").unwrap();
        assert_eq!(link.host(), "example.com");
        assert!(Link::new("https://example.com?q=1").is_ok());
    }

    #[test]
    fn link_rejects_other_schemes() {
        assert!(Link::new("http://example.com").is_err());
        assert!(Link::new("ftp://example.com").is_err());
        assert!(Link::new("//example.com").is_err());
    }

    #[test]
    fn link_rejects_relative() {
        assert!(Link::new("/about").is_err());
        assert!(Link::new("example.com").is_err());
    }

    #[test]
    fn link_rejects_missing_host() {
        assert!(Link::new("https://").is_err());
    }

    #[test]
    fn link_accepts_internationalized_host() {
        let link = Link::new("https://例子.中国/").unwrap();
        assert!(link.host().starts_with("xn--"));
    }

    #[test]
    fn link_accepts_ip_host() {
        let link = Link::new("https://[::1]/").unwrap();
        assert_eq!(link.host(), "[::1]");
    }

    #[test]
    fn link_deserialize_validates() {
        let result: std::result::Result<Link, _> = serde_yaml::from_str("http://example.com");
        assert!(result.is_err());
    }
}
