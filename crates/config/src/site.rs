use std::fmt;

use itertools::Itertools;
use liquid_core::model::KString;

use crate::ContentDir;
use crate::Domain;
use crate::Link;
use crate::Result;
use crate::Status;

pub const SITE_NAME: &str = "silisland";
pub const SITE_SHORT_NAME: &str = "silisland";
pub const SITE_DESCRIPTION: &str = "个人学习记录";

/// Content directories, in the order the site builder scans them.
pub const INCLUDE: &[&str] = &["笔记", "生活"];

pub const GITHUB_REPO_LINK: &str = "https://github.com/silisland/silisland.github.io";
pub const DISCORD_LINK: &str = "https://discord.gg/XuNFDcDZGj";

/// Domain without the scheme; the full URL is [`SiteMetadata::target_domain`].
pub const PLAIN_TARGET_DOMAIN: &str = "silisland.github.io";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteMetadata {
    pub site_name: KString,
    pub site_short_name: KString,
    pub site_description: KString,
    pub include: Vec<ContentDir>,
    pub github_repo_link: Link,
    pub discord_link: Link,
    pub plain_target_domain: Domain,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            site_name: KString::from_static(SITE_NAME),
            site_short_name: KString::from_static(SITE_SHORT_NAME),
            site_description: KString::from_static(SITE_DESCRIPTION),
            include: INCLUDE
                .iter()
                .map(|name| ContentDir::from_unchecked(name))
                .collect(),
            github_repo_link: Link::from_unchecked(GITHUB_REPO_LINK),
            discord_link: Link::from_unchecked(DISCORD_LINK),
            plain_target_domain: Domain::from_unchecked(PLAIN_TARGET_DOMAIN),
        }
    }
}

impl SiteMetadata {
    /// `https://` followed by [`SiteMetadata::plain_target_domain`].
    pub fn target_domain(&self) -> &str {
        self.plain_target_domain.target()
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("site_name", &self.site_name),
            ("site_short_name", &self.site_short_name),
            ("site_description", &self.site_description),
        ] {
            if value.trim().is_empty() {
                return Err(Status::new("Site metadata field must not be blank")
                    .context_with(|c| c.insert("Field", field)));
            }
        }

        if self.include.is_empty() {
            return Err(Status::new("At least one content directory must be included")
                .context_with(|c| c.insert("Field", "include")));
        }
        let duplicates = self.include.iter().duplicates().join(", ");
        if !duplicates.is_empty() {
            return Err(Status::new("Content directories are included more than once")
                .context_with(|c| c.insert("Field", "include"))
                .context_with(|c| c.insert("Duplicates", duplicates.clone())));
        }

        Ok(())
    }
}

impl fmt::Display for SiteMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}
