//! Source discovery: produce the files to measure.
//!
//! This module handles the first stage of the pipeline - enumerating candidate
//! files from one of two interchangeable sources:
//!
//! - **Filesystem**: regular files under a root directory (`walkdir`)
//! - **Git tree**: blobs under a resolved tree-ish (`gix`)
//!
//! Both yield the same [`SourceEntry`] stream, so everything downstream is
//! source-agnostic. Directory and filename rules from the [`IgnorePolicy`] are
//! applied inside the sources, before any content is read.
//!
//! ## Example
//!
//! ```rust,ignore
//! use langsizelib::source::{FileSource, IgnorePolicy};
//!
//! let policy = IgnorePolicy::new();
//! for entry in FileSource::filesystem(".", &policy)? {
//!     println!("{:?}", entry?);
//! }
//! ```

pub mod filesystem;
pub mod filter;
pub mod git;

use std::path::Path;

use serde::Serialize;

use crate::error::LangsizeError;
use crate::Result;

pub use filesystem::FilesystemSource;
pub use filter::{IgnorePolicy, IgnoreReason, Verdict};
pub use git::{discover_repository, is_inside_repository, GitTreeSource, DEFAULT_TREEISH};

/// A file considered for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path relative to the source root, `/`-separated
    pub path: String,
    /// Raw bytes
    pub content: Vec<u8>,
    /// Byte length of `content`
    pub size: u64,
}

impl CandidateFile {
    pub fn new(path: String, content: Vec<u8>) -> Self {
        let size = content.len() as u64;
        Self {
            path,
            content,
            size,
        }
    }
}

/// One step of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEntry {
    /// A file that passed the directory and filename rules
    File(CandidateFile),
    /// A path left out before its content was read
    Ignored { path: String, reason: IgnoreReason },
    /// A filesystem entry that could not be read
    Unreadable { path: String, message: String },
}

/// The two traversal sources, selected once before a scan.
///
/// Both variants are single-pass iterators. Fatal errors (git object access)
/// are yielded as `Err`; everything else is an `Ok` entry.
pub enum FileSource<'p> {
    Filesystem(FilesystemSource<'p>),
    Git(GitTreeSource<'p>),
}

impl<'p> FileSource<'p> {
    /// Walk the working tree under `root`.
    pub fn filesystem(root: impl AsRef<Path>, policy: &'p IgnorePolicy) -> Result<Self> {
        Ok(FileSource::Filesystem(FilesystemSource::new(root, policy)?))
    }

    /// Walk the tree that `treeish` resolves to in the repository containing `path`.
    pub fn git(path: impl AsRef<Path>, treeish: &str, policy: &'p IgnorePolicy) -> Result<Self> {
        Ok(FileSource::Git(GitTreeSource::open(path, treeish, policy)?))
    }

    /// Short name of the source kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FileSource::Filesystem(_) => "fs",
            FileSource::Git(_) => "git",
        }
    }
}

impl Iterator for FileSource<'_> {
    type Item = Result<SourceEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            FileSource::Filesystem(source) => source.next(),
            FileSource::Git(source) => source.next(),
        }
    }
}

/// Requested source mode, as given by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeRequest {
    /// Git mode asked for explicitly
    pub git: bool,
    /// Filesystem mode asked for explicitly
    pub fs: bool,
    /// Tree-ish override; `None` means the default `HEAD`
    pub treeish: Option<String>,
}

/// Resolved source mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SourceMode {
    Filesystem,
    Git { treeish: String },
}

impl SourceMode {
    /// Resolve the mode from user flags and whether the path is inside a repository.
    ///
    /// - With neither flag, git mode is used inside a repository and filesystem
    ///   mode otherwise.
    /// - A tree-ish other than the default implies git mode, and overrides an
    ///   explicit filesystem request.
    /// - Asking for both modes explicitly is a configuration error that names
    ///   the default.
    pub fn resolve(request: &ModeRequest, inside_repository: bool) -> Result<Self> {
        let default = if inside_repository { "git" } else { "fs" };
        let treeish = request
            .treeish
            .clone()
            .unwrap_or_else(|| DEFAULT_TREEISH.to_string());

        if request.git && request.fs {
            return Err(LangsizeError::Configuration { default });
        }
        if request.git || treeish != DEFAULT_TREEISH {
            return Ok(SourceMode::Git { treeish });
        }

        match (request.fs, inside_repository) {
            (true, _) | (false, false) => Ok(SourceMode::Filesystem),
            (false, true) => Ok(SourceMode::Git { treeish }),
        }
    }
}

/// Normalize a relative path to `/` separators.
pub(crate) fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(git: bool, fs: bool, treeish: Option<&str>) -> ModeRequest {
        ModeRequest {
            git,
            fs,
            treeish: treeish.map(str::to_string),
        }
    }

    #[test]
    fn test_candidate_size_is_content_length() {
        let file = CandidateFile::new("a.go".to_string(), vec![b'x'; 42]);
        assert_eq!(file.size, 42);
    }

    #[test]
    fn test_default_mode_follows_repository() {
        let inside = SourceMode::resolve(&ModeRequest::default(), true).unwrap();
        assert_eq!(
            inside,
            SourceMode::Git {
                treeish: "HEAD".to_string()
            }
        );

        let outside = SourceMode::resolve(&ModeRequest::default(), false).unwrap();
        assert_eq!(outside, SourceMode::Filesystem);
    }

    #[test]
    fn test_explicit_modes() {
        assert_eq!(
            SourceMode::resolve(&request(false, true, None), true).unwrap(),
            SourceMode::Filesystem
        );
        assert_eq!(
            SourceMode::resolve(&request(true, false, None), false).unwrap(),
            SourceMode::Git {
                treeish: "HEAD".to_string()
            }
        );
    }

    #[test]
    fn test_treeish_implies_git() {
        let mode = SourceMode::resolve(&request(false, false, Some("v1.0")), false).unwrap();
        assert_eq!(
            mode,
            SourceMode::Git {
                treeish: "v1.0".to_string()
            }
        );

        // The default tree-ish does not force anything
        let mode = SourceMode::resolve(&request(false, false, Some("HEAD")), false).unwrap();
        assert_eq!(mode, SourceMode::Filesystem);
    }

    #[test]
    fn test_both_modes_is_configuration_error() {
        let err = SourceMode::resolve(&request(true, true, None), true).unwrap_err();
        match err {
            LangsizeError::Configuration { default } => assert_eq!(default, "git"),
            other => panic!("Expected Configuration error, got {other:?}"),
        }

        let err = SourceMode::resolve(&request(true, true, Some("main")), false).unwrap_err();
        assert!(err.to_string().contains("which for the current directory is fs"));
    }

    #[test]
    fn test_treeish_overrides_fs() {
        let mode = SourceMode::resolve(&request(false, true, Some("main")), false).unwrap();
        assert_eq!(
            mode,
            SourceMode::Git {
                treeish: "main".to_string()
            }
        );

        let mode = SourceMode::resolve(&request(false, true, Some("HEAD")), true).unwrap();
        assert_eq!(mode, SourceMode::Filesystem);
    }

    #[test]
    fn test_slash_path() {
        let path = Path::new("src").join("nested").join("main.go");
        assert_eq!(slash_path(&path), "src/nested/main.go");
    }
}
