//! Working-tree source backed by `walkdir`.
//!
//! Entries are visited in file-name order so a fixed tree always yields the
//! same sequence. Symlinks are not followed and only regular files are
//! yielded. The `.git` directory is always skipped.
//!
//! `.gitignore` files are honored unless the policy turns them off: each
//! directory's file is loaded on entry and applies to its subtree, with deeper
//! files taking precedence.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use walkdir::WalkDir;

use crate::error::LangsizeError;
use crate::Result;

use super::filter::{IgnorePolicy, IgnoreReason, Verdict};
use super::{slash_path, CandidateFile, SourceEntry};

/// Gitignore matcher of one directory on the current walk path.
struct GitignoreFrame {
    depth: usize,
    matcher: Gitignore,
}

/// Lazy walk over the regular files under a root directory.
pub struct FilesystemSource<'p> {
    root: PathBuf,
    walker: walkdir::IntoIter,
    policy: &'p IgnorePolicy,
    gitignores: Vec<GitignoreFrame>,
}

impl<'p> FilesystemSource<'p> {
    /// Start a walk at `root`.
    pub fn new(root: impl AsRef<Path>, policy: &'p IgnorePolicy) -> Result<Self> {
        let root = root.as_ref();

        if !root.exists() {
            return Err(LangsizeError::PathNotFound(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Ok(Self {
            root: root.to_path_buf(),
            walker,
            policy,
            gitignores: Vec::new(),
        })
    }

    /// Load `dir/.gitignore`, if any, for the subtree below `depth`.
    fn enter_dir(&mut self, dir: &Path, depth: usize) {
        if !self.policy.respects_gitignore() {
            return;
        }
        let file = dir.join(".gitignore");
        if !file.is_file() {
            return;
        }

        let mut builder = GitignoreBuilder::new(dir);
        if let Some(err) = builder.add(&file) {
            tracing::warn!(path = %file.display(), error = %err, "skipping invalid .gitignore lines");
        }
        match builder.build() {
            Ok(matcher) => self.gitignores.push(GitignoreFrame { depth, matcher }),
            Err(err) => {
                tracing::warn!(path = %file.display(), error = %err, "unusable .gitignore")
            }
        }
    }

    /// Drop matchers of directories the walk has left.
    fn leave_dirs(&mut self, depth: usize) {
        while self
            .gitignores
            .last()
            .is_some_and(|frame| frame.depth >= depth)
        {
            self.gitignores.pop();
        }
    }

    fn gitignored(&self, path: &Path, is_dir: bool) -> bool {
        for frame in self.gitignores.iter().rev() {
            let matched = frame.matcher.matched(path, is_dir);
            if matched.is_ignore() {
                return true;
            }
            if matched.is_whitelist() {
                return false;
            }
        }
        false
    }

    fn relative(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => slash_path(rel),
            // The root itself, when the root is a single file
            _ => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| slash_path(path)),
        }
    }
}

impl Iterator for FilesystemSource<'_> {
    type Item = Result<SourceEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| self.relative(p))
                        .unwrap_or_default();
                    return Some(Ok(SourceEntry::Unreadable {
                        path,
                        message: err.to_string(),
                    }));
                }
            };

            let file_type = entry.file_type();
            let depth = entry.depth();
            self.leave_dirs(depth);

            if file_type.is_dir() {
                if depth > 0 {
                    if entry.file_name() == ".git" {
                        self.walker.skip_current_dir();
                        continue;
                    }
                    let path = self.relative(entry.path());
                    if self.gitignored(entry.path(), true) {
                        self.walker.skip_current_dir();
                        return Some(Ok(SourceEntry::Ignored {
                            path,
                            reason: IgnoreReason::Gitignore,
                        }));
                    }
                    if let Verdict::Ignore(reason) = self.policy.check_dir(&path) {
                        self.walker.skip_current_dir();
                        return Some(Ok(SourceEntry::Ignored { path, reason }));
                    }
                }
                self.enter_dir(entry.path(), depth);
                continue;
            }

            if !file_type.is_file() {
                continue;
            }

            let path = self.relative(entry.path());
            if self.gitignored(entry.path(), false) {
                return Some(Ok(SourceEntry::Ignored {
                    path,
                    reason: IgnoreReason::Gitignore,
                }));
            }
            if let Verdict::Ignore(reason) = self.policy.check_filename(&path) {
                return Some(Ok(SourceEntry::Ignored { path, reason }));
            }

            let item = match fs::read(entry.path()) {
                Ok(content) => SourceEntry::File(CandidateFile::new(path, content)),
                Err(err) => SourceEntry::Unreadable {
                    path,
                    message: err.to_string(),
                },
            };
            return Some(Ok(item));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_files;
    use tempfile::tempdir;

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("src/util")).unwrap();
        fs::create_dir_all(dir.join("vendor/lib")).unwrap();
        fs::create_dir_all(dir.join(".git/objects")).unwrap();

        fs::write(dir.join("src/main.go"), "package main\n").unwrap();
        fs::write(dir.join("src/util/strings.go"), "package util\n").unwrap();
        fs::write(dir.join("vendor/lib/dep.go"), "package lib\n").unwrap();
        fs::write(dir.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::write(dir.join("Cargo.lock"), "# lock\n").unwrap();
        fs::write(dir.join("notes.md"), "# Notes\n").unwrap();
    }

    fn collect(root: &Path, policy: &IgnorePolicy) -> Vec<SourceEntry> {
        FilesystemSource::new(root, policy)
            .unwrap()
            .map(|e| e.unwrap())
            .collect()
    }

    fn file_paths(entries: &[SourceEntry]) -> Vec<&str> {
        entries
            .iter()
            .filter_map(|e| match e {
                SourceEntry::File(f) => Some(f.path.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_walk_yields_relative_sorted_files() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let entries = collect(temp.path(), &IgnorePolicy::empty());

        assert_eq!(
            file_paths(&entries),
            vec![
                "Cargo.lock",
                "notes.md",
                "src/main.go",
                "src/util/strings.go",
                "vendor/lib/dep.go"
            ]
        );
    }

    #[test]
    fn test_ignored_directory_is_pruned() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let entries = collect(temp.path(), &IgnorePolicy::new());

        assert!(!file_paths(&entries).iter().any(|p| p.starts_with("vendor")));
        assert!(entries.contains(&SourceEntry::Ignored {
            path: "vendor".to_string(),
            reason: IgnoreReason::Directory,
        }));
        // Pruned once, contents never visited
        let vendor_entries = entries
            .iter()
            .filter(|e| match e {
                SourceEntry::Ignored { path, .. } => path.starts_with("vendor"),
                _ => false,
            })
            .count();
        assert_eq!(vendor_entries, 1);
    }

    #[test]
    fn test_ignored_filename_is_not_read() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let entries = collect(temp.path(), &IgnorePolicy::new());

        assert!(entries.contains(&SourceEntry::Ignored {
            path: "Cargo.lock".to_string(),
            reason: IgnoreReason::Filename,
        }));
        assert!(!file_paths(&entries).contains(&"Cargo.lock"));
    }

    #[test]
    fn test_git_dir_always_skipped() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let entries = collect(temp.path(), &IgnorePolicy::new().unignore_filenames(true));

        assert!(!entries.iter().any(|e| match e {
            SourceEntry::File(f) => f.path.starts_with(".git"),
            SourceEntry::Ignored { path, .. } => path.starts_with(".git"),
            SourceEntry::Unreadable { path, .. } => path.starts_with(".git"),
        }));
    }

    #[test]
    fn test_content_and_size_are_read() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.go"), "package a\n").unwrap();

        let entries = collect(temp.path(), &IgnorePolicy::empty());

        match &entries[..] {
            [SourceEntry::File(file)] => {
                assert_eq!(file.path, "a.go");
                assert_eq!(file.content, b"package a\n");
                assert_eq!(file.size, 10);
            }
            other => panic!("Expected one file, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_directory() {
        let temp = tempdir().unwrap();
        let entries = collect(temp.path(), &IgnorePolicy::new());
        assert!(entries.is_empty());
    }

    #[test]
    fn test_nonexistent_root() {
        let policy = IgnorePolicy::new();
        let result = FilesystemSource::new("/nonexistent/path", &policy);

        assert!(matches!(result, Err(LangsizeError::PathNotFound(_))));
    }

    #[test]
    fn test_file_removed_during_walk_is_reported_not_fatal() {
        let temp = tempdir().unwrap();
        write_files(temp.path(), &[("a.go", "package a\n"), ("b.go", "package b\n")]);

        let policy = IgnorePolicy::empty();
        let mut source = FilesystemSource::new(temp.path(), &policy).unwrap();

        // The sorted walk lists the directory before yielding its first file
        assert!(matches!(source.next(), Some(Ok(SourceEntry::File(f))) if f.path == "a.go"));
        fs::remove_file(temp.path().join("b.go")).unwrap();

        match source.next() {
            Some(Ok(SourceEntry::Unreadable { path, .. })) => assert_eq!(path, "b.go"),
            other => panic!("Expected an unreadable entry, got {other:?}"),
        }
        assert!(source.next().is_none());
    }

    #[test]
    fn test_gitignored_paths_are_ignored() {
        let temp = tempdir().unwrap();
        write_files(
            temp.path(),
            &[
                (".gitignore", "build/\n*.log\n"),
                ("main.go", "package main\n"),
                ("build/bundle.js", "console.log(1);\n"),
                ("build/nested/out.js", "console.log(2);\n"),
                ("debug.log", "trace\n"),
            ],
        );

        let entries = collect(temp.path(), &IgnorePolicy::new());

        assert_eq!(file_paths(&entries), vec![".gitignore", "main.go"]);
        let ignored: Vec<(&str, IgnoreReason)> = entries
            .iter()
            .filter_map(|e| match e {
                SourceEntry::Ignored { path, reason } => Some((path.as_str(), *reason)),
                _ => None,
            })
            .collect();
        assert_eq!(
            ignored,
            vec![
                ("build", IgnoreReason::Gitignore),
                ("debug.log", IgnoreReason::Gitignore)
            ]
        );
    }

    #[test]
    fn test_nested_gitignore_scopes_and_negation() {
        let temp = tempdir().unwrap();
        write_files(
            temp.path(),
            &[
                (".gitignore", "*.gen.go\n"),
                ("api/.gitignore", "!keep.gen.go\nlocal.go\n"),
                ("api/keep.gen.go", "package api\n"),
                ("api/drop.gen.go", "package api\n"),
                ("api/local.go", "package api\n"),
                ("web/local.go", "package web\n"),
                ("root.gen.go", "package main\n"),
            ],
        );

        let entries = collect(temp.path(), &IgnorePolicy::empty());

        assert_eq!(
            file_paths(&entries),
            vec![".gitignore", "api/.gitignore", "api/keep.gen.go", "web/local.go"]
        );
    }

    #[test]
    fn test_gitignore_can_be_disabled() {
        let temp = tempdir().unwrap();
        write_files(
            temp.path(),
            &[(".gitignore", "build/\n"), ("build/bundle.js", "x\n")],
        );

        let policy = IgnorePolicy::empty().gitignore(false);
        let entries = collect(temp.path(), &policy);

        assert_eq!(file_paths(&entries), vec![".gitignore", "build/bundle.js"]);
    }
}
