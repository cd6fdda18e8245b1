//! Error types for langsizelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a scan.
///
/// Per-file read failures in filesystem mode are not represented here: they
/// are reported as skipped entries and never stop a run.
#[derive(Error, Debug)]
pub enum LangsizeError {
    /// Conflicting source mode selection
    #[error(
        "Please choose one of --git or --fs, but not both.\n\
         You can omit the flags to get the default behavior,\n\
         which for the current directory is {default}"
    )]
    Configuration { default: &'static str },

    /// Git mode was requested but no repository contains the path
    #[error("no git repository found at or above: {0}")]
    RepositoryNotFound(PathBuf),

    /// A tree-ish could not be resolved to a tree object
    #[error("failed to resolve '{treeish}' to a tree: {message}")]
    ReferenceResolution { treeish: String, message: String },

    /// A git object could not be read
    #[error("failed to read object {id}: {message}")]
    ObjectRead { id: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },
}
