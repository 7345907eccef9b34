use crate::Result;
use crate::Status;

/// Files under a site root, filtered by gitignore-style patterns.
#[derive(Debug, Clone)]
pub struct Source {
    root: std::path::PathBuf,
    ignore: ignore::gitignore::Gitignore,
}

impl Source {
    pub fn new<'i>(
        root: &std::path::Path,
        ignores: impl IntoIterator<Item = &'i str>,
    ) -> Result<Self> {
        let mut ignore = ignore::gitignore::GitignoreBuilder::new(root);
        for line in ignores.into_iter() {
            ignore.add_line(None, line).map_err(|e| {
                Status::new("Invalid ignore entry")
                    .with_source(e)
                    .context_with(|c| c.insert("Pattern", line.to_owned()))
            })?;
        }
        let ignore = ignore
            .build()
            .map_err(|e| Status::new("Invalid ignore entry").with_source(e))?;

        let source = Self {
            root: root.to_owned(),
            ignore,
        };
        Ok(source)
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn includes_file(&self, file: &std::path::Path) -> bool {
        let is_dir = false;
        self.includes_path(file, is_dir)
    }

    pub fn includes_dir(&self, dir: &std::path::Path) -> bool {
        let is_dir = true;
        self.includes_path(dir, is_dir)
    }

    pub fn iter(&self) -> impl Iterator<Item = std::path::PathBuf> + '_ {
        self.iter_dir(&self.root)
    }

    /// Files below `dir`, which must live under the root.
    ///
    /// Nothing is yielded when `dir` itself is ignored.
    pub fn iter_dir<'s>(
        &'s self,
        dir: &std::path::Path,
    ) -> impl Iterator<Item = std::path::PathBuf> + 's {
        let walk = self.includes_dir(dir).then(|| {
            walkdir::WalkDir::new(dir)
                .min_depth(1)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(move |e| self.includes_entry(e))
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(move |e| e.path().to_path_buf())
        });
        walk.into_iter().flatten()
    }

    fn includes_path(&self, path: &std::path::Path, is_dir: bool) -> bool {
        if path == self.root {
            return true;
        }

        let parent = path.parent();
        if let Some(parent) = parent {
            if parent.starts_with(&self.root) && !self.includes_path(parent, true) {
                return false;
            }
        }

        self.includes_path_leaf(path, is_dir)
    }

    fn includes_path_leaf(&self, path: &std::path::Path, is_dir: bool) -> bool {
        match self.ignore.matched(path, is_dir) {
            ignore::Match::None => true,
            ignore::Match::Ignore(glob) => {
                log::trace!("{:?}: ignored {:?}", path, glob.original());
                false
            }
            ignore::Match::Whitelist(glob) => {
                log::trace!("{:?}: allowed {:?}", path, glob.original());
                true
            }
        }
    }

    fn includes_entry(&self, entry: &walkdir::DirEntry) -> bool {
        let file = entry.path();

        // Parents were checked before the walk descended here.
        let is_dir = entry.file_type().is_dir();
        self.includes_path_leaf(file, is_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_includes_dir {
        ($root:expr, $ignores:expr, $test:expr, $included:expr) => {
            let root = $root;
            let ignores = $ignores.clone();
            let files = Source::new(std::path::Path::new(root), ignores).unwrap();
            assert_eq!(files.includes_dir(std::path::Path::new($test)), $included);
        };
    }
    macro_rules! assert_includes_file {
        ($root:expr, $ignores:expr, $test:expr, $included:expr) => {
            let root = $root;
            let ignores = $ignores.clone();
            let files = Source::new(std::path::Path::new(root), ignores).unwrap();
            assert_eq!(files.includes_file(std::path::Path::new($test)), $included);
        };
    }

    #[test]
    fn files_includes_root_dir() {
        assert_includes_dir!("/srv/silisland", &[], "/srv/silisland", true);

        assert_includes_dir!("./", &[], "./", true);
    }

    #[test]
    fn files_includes_content_dir() {
        assert_includes_dir!("/srv/silisland", &[], "/srv/silisland/笔记", true);

        assert_includes_dir!("./", &[], "./生活", true);
    }

    #[test]
    fn files_ignore_hidden() {
        assert_includes_file!(
            "/srv/silisland",
            &[".*"],
            "/srv/silisland/笔记/.draft.md",
            false
        );
    }

    #[test]
    fn files_ignore_underscore_dir() {
        assert_includes_dir!("/srv/silisland", &["_*"], "/srv/silisland/_drafts", false);
        assert_includes_file!(
            "/srv/silisland",
            &["_*"],
            "/srv/silisland/_drafts/post.md",
            false
        );
    }

    #[test]
    fn files_not_ignored_by_parent() {
        assert_includes_file!(
            "/tmp/.cache/silisland",
            &[".*"],
            "/tmp/.cache/silisland/笔记/rust.md",
            true
        );
    }

    #[test]
    fn invalid_ignore_pattern() {
        let result = Source::new(std::path::Path::new("/srv/silisland"), ["a/**b/{c"]);
        assert!(result.is_err());
    }

    #[test]
    fn iter_skips_hidden() {
        let root = std::path::Path::new("tests/fixtures/site");
        let source = Source::new(root, [".*"]).unwrap();
        let files: Vec<_> = source.iter_dir(&root.join("笔记")).collect();
        assert_eq!(
            files,
            vec![
                root.join("笔记").join("rust.md"),
                root.join("笔记").join("tools").join("git.md"),
            ]
        );
    }

    #[test]
    fn iter_dir_ignored() {
        let root = std::path::Path::new("tests/fixtures/site");
        let source = Source::new(root, ["笔记"]).unwrap();
        assert_eq!(source.iter_dir(&root.join("笔记")).count(), 0);
    }
}
