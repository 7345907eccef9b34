use std::fmt;
use std::path;

use relative_path::{Component, RelativePath, RelativePathBuf};

use crate::Result;
use crate::Status;

/// A content directory named in `include`, relative to the site root.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct ContentDir(RelativePathBuf);

impl ContentDir {
    pub fn new(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.starts_with(['/', '\\']) || path::Path::new(trimmed).is_absolute() {
            return Err(Status::new("Content directory must be relative to the site root")
                .context_with(|c| c.insert("Directory", name.to_owned())));
        }

        let normalized = RelativePath::new(trimmed).normalize();
        if normalized.as_str().is_empty() {
            return Err(Status::new("Content directory is empty")
                .context_with(|c| c.insert("Directory", name.to_owned())));
        }
        if normalized
            .components()
            .any(|part| matches!(part, Component::ParentDir))
        {
            return Err(
                Status::new("Content directory must stay inside the site root")
                    .context_with(|c| c.insert("Directory", name.to_owned())),
            );
        }

        Ok(Self(normalized))
    }

    /// Build a content directory from a trusted literal.
    pub fn from_unchecked(name: &str) -> Self {
        Self(RelativePathBuf::from(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Location of the directory under `root`.
    pub fn to_path(&self, root: &path::Path) -> path::PathBuf {
        self.0.to_path(root)
    }
}

impl fmt::Display for ContentDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for ContentDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq<str> for ContentDir {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ContentDir {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl TryFrom<&str> for ContentDir {
    type Error = Status;

    fn try_from(other: &str) -> Result<Self> {
        Self::new(other)
    }
}

impl TryFrom<String> for ContentDir {
    type Error = Status;

    fn try_from(other: String) -> Result<Self> {
        Self::new(&other)
    }
}

impl From<ContentDir> for String {
    fn from(other: ContentDir) -> Self {
        other.0.into_string()
    }
}
