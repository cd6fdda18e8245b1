//! Ignore policy: decide which candidate files are considered at all.
//!
//! Two independent checks run before any classification work:
//!
//! - **Filename rules**: glob patterns for vendored directories, lock files,
//!   generated-code suffixes, documentation and binary-looking extensions.
//!   Directory rules are applied by the sources to prune whole subtrees.
//! - **Content heuristics**: binary, generated and minified detection on the
//!   bytes of files that passed the filename rules.
//!
//! Each check can be switched off independently with the `unignore_*` overrides.
//! Filename rules match case-insensitively, except the documentation names,
//! which are conventionally upper-case.

use std::fmt;

use glob::{MatchOptions, Pattern};
use serde::Serialize;

use crate::error::LangsizeError;
use crate::source::CandidateFile;
use crate::Result;

/// Directories pruned before descent.
pub const DEFAULT_DIR_RULES: &[&str] = &[
    "vendor",
    "vendors",
    "node_modules",
    "bower_components",
    "jspm_packages",
    "third_party",
    "third-party",
    "3rdparty",
    "Godeps",
    "Carthage",
    "Pods",
    "deps",
    "docs",
    "doc",
    "Documentation",
];

/// Files skipped by name.
pub const DEFAULT_FILE_RULES: &[&str] = &[
    // vendored bundles
    "*.min.js",
    "*-min.js",
    "*.min.css",
    "*-min.css",
    // generated code
    "*.pb.go",
    "*.pb.cc",
    "*.pb.h",
    "*_pb2.py",
    "*.designer.cs",
    // lock files
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    "go.sum",
    "Gemfile.lock",
    "composer.lock",
    "poetry.lock",
    // binary-looking extensions
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.bmp",
    "*.ico",
    "*.pdf",
    "*.zip",
    "*.gz",
    "*.tgz",
    "*.bz2",
    "*.xz",
    "*.7z",
    "*.rar",
    "*.tar",
    "*.jar",
    "*.war",
    "*.class",
    "*.exe",
    "*.dll",
    "*.so",
    "*.dylib",
    "*.o",
    "*.a",
    "*.obj",
    "*.lib",
    "*.pyc",
    "*.pyo",
    "*.woff",
    "*.woff2",
    "*.ttf",
    "*.otf",
    "*.eot",
    "*.mp3",
    "*.mp4",
    "*.wav",
    "*.ogg",
    "*.mov",
    "*.webm",
    "*.bin",
    "*.sqlite",
];

/// Documentation files skipped by name, matched case-sensitively so that
/// sources such as `changes.go` or `notice.rs` are kept.
pub const DEFAULT_DOC_RULES: &[&str] = &[
    "README*",
    "LICENSE*",
    "LICENCE*",
    "COPYING*",
    "CHANGELOG*",
    "CHANGES*",
    "CONTRIBUTING*",
    "AUTHORS*",
    "NOTICE*",
];

/// Bytes inspected when sniffing for binary content.
const BINARY_SNIFF_LEN: usize = 8000;

/// Leading lines inspected for a generated-code marker.
const GENERATED_SNIFF_LINES: usize = 5;

/// Average line length above which JavaScript/CSS counts as minified.
const MINIFIED_LINE_LENGTH: usize = 110;

const GENERATED_MARKERS: &[&str] = &[
    "Code generated",
    "DO NOT EDIT",
    "@generated",
    "<auto-generated",
    "This file was automatically generated",
    "Autogenerated by Thrift",
];

const MINIFIABLE_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "css"];

fn match_options(case_sensitive: bool) -> MatchOptions {
    MatchOptions {
        case_sensitive,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// Why a path was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnoreReason {
    /// A directory rule pruned the whole subtree
    Directory,
    /// A filename rule matched
    Filename,
    /// Content looks binary
    Binary,
    /// Content carries a generated-code marker
    Generated,
    /// JavaScript/CSS with very long average lines
    Minified,
    /// Matched by a `.gitignore` file
    Gitignore,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IgnoreReason::Directory => "directory",
            IgnoreReason::Filename => "filename",
            IgnoreReason::Binary => "binary",
            IgnoreReason::Generated => "generated",
            IgnoreReason::Minified => "minified",
            IgnoreReason::Gitignore => "gitignore",
        };
        f.write_str(name)
    }
}

/// Outcome of an ignore check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Ignore(IgnoreReason),
}

impl Verdict {
    pub fn is_keep(&self) -> bool {
        matches!(self, Verdict::Keep)
    }
}

/// A single glob rule.
///
/// Rules without a `/` match the last path component, like gitignore entries.
/// Rules with a `/` match the whole relative path.
#[derive(Debug, Clone)]
struct Rule {
    pattern: Pattern,
    anchored: bool,
    case_sensitive: bool,
}

impl Rule {
    fn new(pattern: &str) -> Result<Self> {
        Self::with_case(pattern, false)
    }

    fn with_case(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let compiled = Pattern::new(pattern).map_err(|e| LangsizeError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            pattern: compiled,
            anchored: pattern.contains('/'),
            case_sensitive,
        })
    }

    fn matches(&self, path: &str) -> bool {
        let options = match_options(self.case_sensitive);
        if self.anchored {
            self.pattern.matches_with(path, options)
        } else {
            let name = path.rsplit('/').next().unwrap_or(path);
            self.pattern.matches_with(name, options)
        }
    }
}

fn builtin(patterns: &[&str], case_sensitive: bool) -> Vec<Rule> {
    patterns
        .iter()
        .filter_map(|p| Rule::with_case(p, case_sensitive).ok())
        .collect()
}

/// Configuration for ignore filtering.
#[derive(Debug, Clone)]
pub struct IgnorePolicy {
    dir_rules: Vec<Rule>,
    file_rules: Vec<Rule>,
    unignore_filenames: bool,
    unignore_contents: bool,
    gitignore: bool,
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        let mut file_rules = builtin(DEFAULT_FILE_RULES, false);
        file_rules.extend(builtin(DEFAULT_DOC_RULES, true));

        Self {
            dir_rules: builtin(DEFAULT_DIR_RULES, true),
            file_rules,
            unignore_filenames: false,
            unignore_contents: false,
            gitignore: true,
        }
    }
}

impl IgnorePolicy {
    /// Create a policy with the built-in denylist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy with no filename rules (content heuristics and
    /// `.gitignore` files still apply).
    pub fn empty() -> Self {
        Self {
            dir_rules: Vec::new(),
            file_rules: Vec::new(),
            unignore_filenames: false,
            unignore_contents: false,
            gitignore: true,
        }
    }

    /// Add a filename rule, matched case-insensitively.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.file_rules.push(Rule::new(pattern)?);
        Ok(self)
    }

    /// Disable the filename and directory rules.
    pub fn unignore_filenames(mut self, yes: bool) -> Self {
        self.unignore_filenames = yes;
        self
    }

    /// Disable the content heuristics.
    pub fn unignore_contents(mut self, yes: bool) -> Self {
        self.unignore_contents = yes;
        self
    }

    /// Honor `.gitignore` files when walking the filesystem.
    pub fn gitignore(mut self, yes: bool) -> Self {
        self.gitignore = yes;
        self
    }

    pub fn respects_gitignore(&self) -> bool {
        self.gitignore
    }

    /// Check whether a directory (relative path, `/`-separated) is pruned.
    pub fn check_dir(&self, path: &str) -> Verdict {
        if self.unignore_filenames {
            return Verdict::Keep;
        }
        if self.dir_rules.iter().any(|rule| rule.matches(path)) {
            Verdict::Ignore(IgnoreReason::Directory)
        } else {
            Verdict::Keep
        }
    }

    /// Check a file path against the filename rules.
    pub fn check_filename(&self, path: &str) -> Verdict {
        if self.unignore_filenames {
            return Verdict::Keep;
        }
        if self.file_rules.iter().any(|rule| rule.matches(path)) {
            Verdict::Ignore(IgnoreReason::Filename)
        } else {
            Verdict::Keep
        }
    }

    /// Check file content against the binary/generated/minified heuristics.
    pub fn check_contents(&self, path: &str, content: &[u8]) -> Verdict {
        if self.unignore_contents {
            return Verdict::Keep;
        }
        if is_binary(content) {
            return Verdict::Ignore(IgnoreReason::Binary);
        }
        if is_generated(content) {
            return Verdict::Ignore(IgnoreReason::Generated);
        }
        if is_minified(path, content) {
            return Verdict::Ignore(IgnoreReason::Minified);
        }
        Verdict::Keep
    }

    /// Full check: filename rules first, then content.
    pub fn check(&self, file: &CandidateFile) -> Verdict {
        match self.check_filename(&file.path) {
            Verdict::Keep => self.check_contents(&file.path, &file.content),
            ignored => ignored,
        }
    }
}

fn is_binary(content: &[u8]) -> bool {
    let sniff = &content[..content.len().min(BINARY_SNIFF_LEN)];
    content_inspector::inspect(sniff).is_binary()
}

fn is_generated(content: &[u8]) -> bool {
    content
        .split(|b| *b == b'\n')
        .take(GENERATED_SNIFF_LINES)
        .map(String::from_utf8_lossy)
        .any(|line| GENERATED_MARKERS.iter().any(|marker| line.contains(marker)))
}

fn is_minified(path: &str, content: &[u8]) -> bool {
    let ext = match path.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return false,
    };
    if !MINIFIABLE_EXTENSIONS.contains(&ext.as_str()) || content.is_empty() {
        return false;
    }
    let lines = content.split(|b| *b == b'\n').count();
    content.len() / lines > MINIFIED_LINE_LENGTH
}
