//! Git tree source backed by `gix`.
//!
//! A tree-ish is resolved once up front; the tree is then walked depth-first
//! in tree order, one tree object at a time, reading blob content only for
//! entries that pass the directory and filename rules. Submodules and
//! symlinks are skipped.
//!
//! Any failure to resolve the tree-ish or to read an object is fatal.

use std::fmt::Display;
use std::path::Path;

use crate::error::LangsizeError;
use crate::Result;

use super::filter::{IgnorePolicy, Verdict};
use super::{CandidateFile, SourceEntry};

/// Tree-ish scanned when none is given.
pub const DEFAULT_TREEISH: &str = "HEAD";

/// Open the repository that contains `path`.
pub fn discover_repository(path: impl AsRef<Path>) -> Result<gix::Repository> {
    let path = path.as_ref();
    gix::discover(path).map_err(|_| LangsizeError::RepositoryNotFound(path.to_path_buf()))
}

/// Whether `path` is inside a git repository.
pub fn is_inside_repository(path: impl AsRef<Path>) -> bool {
    gix::discover(path.as_ref()).is_ok()
}

/// Work not yet visited.
enum Pending {
    Tree { path: String, id: gix::ObjectId },
    Blob { path: String, id: gix::ObjectId },
}

/// Lazy walk over the blobs of one git tree.
pub struct GitTreeSource<'p> {
    repo: gix::Repository,
    policy: &'p IgnorePolicy,
    stack: Vec<Pending>,
}

impl<'p> GitTreeSource<'p> {
    /// Discover the repository containing `path` and resolve `treeish` in it.
    pub fn open(path: impl AsRef<Path>, treeish: &str, policy: &'p IgnorePolicy) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LangsizeError::PathNotFound(path.to_path_buf()));
        }

        let repo = discover_repository(path)?;
        Self::from_repository(repo, treeish, policy)
    }

    /// Resolve `treeish` in an already opened repository.
    pub fn from_repository(
        repo: gix::Repository,
        treeish: &str,
        policy: &'p IgnorePolicy,
    ) -> Result<Self> {
        let root = resolve_tree(&repo, treeish)?;
        tracing::debug!(treeish, tree = %root, "resolved tree");

        Ok(Self {
            repo,
            policy,
            stack: vec![Pending::Tree {
                path: String::new(),
                id: root,
            }],
        })
    }

    /// Decode one tree into its pending children, in tree order.
    fn read_tree(&self, prefix: &str, id: gix::ObjectId) -> Result<Vec<Pending>> {
        let tree = self
            .repo
            .find_object(id)
            .map_err(|e| object_error(id, e))?
            .try_into_tree()
            .map_err(|e| object_error(id, e))?;

        let mut children = Vec::new();
        for entry in tree.iter() {
            let entry = entry.map_err(|e| object_error(id, e))?;

            let name = entry.filename().to_string();
            let path = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };
            let oid = entry.oid().to_owned();
            let mode = entry.mode();

            if mode.is_tree() {
                children.push(Pending::Tree { path, id: oid });
            } else if mode.is_commit() || mode.is_link() {
                continue;
            } else {
                children.push(Pending::Blob { path, id: oid });
            }
        }
        Ok(children)
    }

    fn read_blob(&self, id: gix::ObjectId) -> Result<Vec<u8>> {
        let object = self.repo.find_object(id).map_err(|e| object_error(id, e))?;
        let blob = object.try_into_blob().map_err(|e| object_error(id, e))?;
        Ok(blob.data.to_vec())
    }
}

impl Iterator for GitTreeSource<'_> {
    type Item = Result<SourceEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Pending::Tree { path, id } => {
                    if !path.is_empty() {
                        if let Verdict::Ignore(reason) = self.policy.check_dir(&path) {
                            return Some(Ok(SourceEntry::Ignored { path, reason }));
                        }
                    }
                    match self.read_tree(&path, id) {
                        Ok(children) => self.stack.extend(children.into_iter().rev()),
                        Err(err) => {
                            self.stack.clear();
                            return Some(Err(err));
                        }
                    }
                }
                Pending::Blob { path, id } => {
                    if let Verdict::Ignore(reason) = self.policy.check_filename(&path) {
                        return Some(Ok(SourceEntry::Ignored { path, reason }));
                    }
                    let item = self
                        .read_blob(id)
                        .map(|content| SourceEntry::File(CandidateFile::new(path, content)));
                    if item.is_err() {
                        self.stack.clear();
                    }
                    return Some(item);
                }
            }
        }
    }
}

/// Resolve a tree-ish (commit, tag, branch, tree) to a tree id.
fn resolve_tree(repo: &gix::Repository, treeish: &str) -> Result<gix::ObjectId> {
    let resolution_error = |message: String| LangsizeError::ReferenceResolution {
        treeish: treeish.to_string(),
        message,
    };

    let tree = repo
        .rev_parse_single(treeish.as_bytes())
        .map_err(|e| resolution_error(e.to_string()))?
        .object()
        .map_err(|e| resolution_error(e.to_string()))?
        .peel_to_tree()
        .map_err(|e| resolution_error(e.to_string()))?;

    Ok(tree.id)
}

fn object_error(id: gix::ObjectId, err: impl Display) -> LangsizeError {
    LangsizeError::ObjectRead {
        id: id.to_string(),
        message: err.to_string(),
    }
}
