use relative_path::RelativePathBuf;
use silisland_config::ContentDir;

use crate::Result;
use crate::Source;
use crate::Status;

/// A file inside one of the included content directories.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ContentFile {
    pub dir: ContentDir,
    pub abs_path: std::path::PathBuf,
    pub rel_path: RelativePathBuf,
}

impl ContentFile {
    fn from_root(dir: &ContentDir, root: &std::path::Path, path: std::path::PathBuf) -> Option<Self> {
        let rel_path = path.strip_prefix(root).ok()?;
        let rel_path = match RelativePathBuf::from_path(rel_path) {
            Ok(rel_path) => rel_path,
            Err(err) => {
                log::warn!("Skipping `{}`: {err}", path.display());
                return None;
            }
        };
        Some(Self {
            dir: dir.clone(),
            abs_path: path,
            rel_path,
        })
    }
}

/// The `include` list resolved against a site root, in declared order.
#[derive(Debug, Clone)]
pub struct ContentDirs {
    source: Source,
    dirs: Vec<(ContentDir, std::path::PathBuf)>,
}

impl ContentDirs {
    pub fn new<'i>(
        root: &std::path::Path,
        include: &[ContentDir],
        ignores: impl IntoIterator<Item = &'i str>,
    ) -> Result<Self> {
        let source = Source::new(root, ignores)?;
        let dirs = include
            .iter()
            .map(|dir| (dir.clone(), dir.to_path(root)))
            .collect();
        Ok(Self { source, dirs })
    }

    pub fn from_config(config: &silisland_config::Config) -> Result<Self> {
        Self::new(
            &config.root,
            &config.site.include,
            config.ignore.iter().map(|s| s.as_str()),
        )
    }

    pub fn root(&self) -> &std::path::Path {
        self.source.root()
    }

    pub fn dirs(&self) -> impl Iterator<Item = (&ContentDir, &std::path::Path)> + '_ {
        self.dirs.iter().map(|(dir, path)| (dir, path.as_path()))
    }

    /// Included directories that don't exist on disk.
    pub fn missing(&self) -> impl Iterator<Item = &ContentDir> + '_ {
        self.dirs
            .iter()
            .filter(|(_, path)| !path.is_dir())
            .map(|(dir, _)| dir)
    }

    /// Included directories that exist but are filtered out by `ignore`.
    pub fn ignored(&self) -> impl Iterator<Item = &ContentDir> + '_ {
        self.dirs
            .iter()
            .filter(|(_, path)| path.is_dir() && !self.source.includes_dir(path))
            .map(|(dir, _)| dir)
    }

    /// Every content file, grouped by directory in `include` order.
    pub fn files(&self) -> impl Iterator<Item = ContentFile> + '_ {
        self.dirs
            .iter()
            .flat_map(move |(dir, path)| self.files_at(dir, path))
    }

    pub fn files_in(&self, name: &str) -> Result<Vec<ContentFile>> {
        let wanted = ContentDir::new(name)?;
        let (dir, path) = self
            .dirs
            .iter()
            .find(|(dir, _)| *dir == wanted)
            .ok_or_else(|| {
                Status::new("Directory is not part of `include`")
                    .context_with(|c| c.insert("Directory", name.to_owned()))
            })?;
        Ok(self.files_at(dir, path).collect())
    }

    fn files_at<'s>(
        &'s self,
        dir: &'s ContentDir,
        path: &'s std::path::Path,
    ) -> impl Iterator<Item = ContentFile> + 's {
        if !path.is_dir() {
            log::debug!("Skipping missing content directory `{dir}`");
        } else if !self.source.includes_dir(path) {
            log::debug!("Skipping ignored content directory `{dir}`");
        }
        let root = self.root();
        self.source
            .iter_dir(path)
            .filter_map(move |file| ContentFile::from_root(dir, root, file))
    }
}
