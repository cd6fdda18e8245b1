//! Language classification.
//!
//! [`Classifier`] is the seam between the scan pipeline and whatever decides
//! what language a file is written in. [`Linguist`] is the built-in
//! implementation, driven by the static table in [`super::languages`].

use std::collections::HashMap;

use super::languages::{LanguageDef, LANGUAGES};

/// Assigns a language to a file and knows each language's display color.
///
/// Implementations must be pure: the same input always yields the same
/// answer, and a failure to decide is `None`.
pub trait Classifier {
    /// Language of the file at `path` (relative, `/`-separated) with `content`.
    fn classify(&self, path: &str, content: &[u8]) -> Option<&str>;

    /// Display color for a language name, if one is defined.
    fn color(&self, language: &str) -> Option<&str>;
}

/// Table-driven classifier in the style of GitHub Linguist.
///
/// Resolution order: exact filename, then extension (case-insensitive), then
/// the interpreter named by a `#!` line.
#[derive(Debug, Clone)]
pub struct Linguist {
    by_name: HashMap<&'static str, &'static LanguageDef>,
    by_filename: HashMap<&'static str, &'static LanguageDef>,
    by_extension: HashMap<&'static str, &'static LanguageDef>,
    by_interpreter: HashMap<&'static str, &'static LanguageDef>,
}

impl Default for Linguist {
    fn default() -> Self {
        let mut linguist = Self {
            by_name: HashMap::new(),
            by_filename: HashMap::new(),
            by_extension: HashMap::new(),
            by_interpreter: HashMap::new(),
        };

        for def in LANGUAGES {
            linguist.by_name.insert(def.name, def);
            for filename in def.filenames {
                linguist.by_filename.insert(*filename, def);
            }
            for ext in def.extensions {
                linguist.by_extension.insert(*ext, def);
            }
            for interpreter in def.interpreters {
                linguist.by_interpreter.insert(*interpreter, def);
            }
        }

        linguist
    }
}

impl Linguist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a language definition by its exact name.
    pub fn language(&self, name: &str) -> Option<&'static LanguageDef> {
        self.by_name.get(name).copied()
    }

    fn detect(&self, path: &str, content: &[u8]) -> Option<&'static LanguageDef> {
        let filename = path.rsplit('/').next().unwrap_or(path);

        if let Some(def) = self.by_filename.get(filename) {
            return Some(*def);
        }

        if let Some((stem, ext)) = filename.rsplit_once('.') {
            if !stem.is_empty() {
                if let Some(def) = self.by_extension.get(ext.to_ascii_lowercase().as_str()) {
                    return Some(*def);
                }
            }
        }

        shebang_interpreter(content).and_then(|name| self.by_interpreter.get(name).copied())
    }
}

impl Classifier for Linguist {
    fn classify(&self, path: &str, content: &[u8]) -> Option<&str> {
        self.detect(path, content).map(|def| def.name)
    }

    fn color(&self, language: &str) -> Option<&str> {
        self.language(language).and_then(|def| def.color)
    }
}

/// Interpreter named on a `#!` first line, without path or version suffix.
///
/// `#!/usr/bin/env python3` and `#!/usr/local/bin/python3.11` both give `python`.
fn shebang_interpreter(content: &[u8]) -> Option<&str> {
    let first = content.split(|b| *b == b'\n').next()?;
    let line = std::str::from_utf8(first).ok()?;
    let mut words = line.strip_prefix("#!")?.split_whitespace();

    let mut program = words.next()?.rsplit('/').next()?;
    if program == "env" {
        program = words.find(|w| !w.starts_with('-'))?;
    }

    let name = program.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
