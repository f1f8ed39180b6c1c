//! Placeholder expansion for output-file templates.
//!
//! Built-in placeholders cover the environment (`{HOME}`, `{CWD}`, `{TMP}`) and
//! the components of the current input file. Custom placeholders can be loaded
//! from a `KEY=VALUE` file; their values may use built-in and other custom
//! placeholders.

use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ImgvisError, Result};

pub const PH_HOME: &str = "HOME";
pub const PH_CWD: &str = "CWD";
pub const PH_TMP: &str = "TMP";
pub const PH_INPUT_PATH: &str = "INPUT_PATH";
pub const PH_INPUT_NAMEEXT: &str = "INPUT_NAMEEXT";
pub const PH_INPUT_NAMENOEXT: &str = "INPUT_NAMENOEXT";
pub const PH_INPUT_EXT: &str = "INPUT_EXT";
pub const PH_INPUT_PARENT_PATH: &str = "INPUT_PARENT_PATH";
pub const PH_INPUT_PARENT_NAME: &str = "INPUT_PARENT_NAME";

/// Built-in placeholders with their descriptions, in documentation order.
pub const BUILTIN_PLACEHOLDERS: &[(&str, &str)] = &[
    (PH_HOME, "The home directory of the current user."),
    (PH_CWD, "The current working directory."),
    (PH_TMP, "The temp directory."),
    (
        PH_INPUT_PATH,
        "The directory part of the current input, i.e., `/some/where` of input `/some/where/file.txt`.",
    ),
    (
        PH_INPUT_NAMEEXT,
        "The name (incl extension) of the current input, i.e., `file.txt` of input `/some/where/file.txt`.",
    ),
    (
        PH_INPUT_NAMENOEXT,
        "The name (excl extension) of the current input, i.e., `file` of input `/some/where/file.txt`.",
    ),
    (
        PH_INPUT_EXT,
        "The extension of the current input (incl dot), i.e., `.txt` of input `/some/where/file.txt`.",
    ),
    (
        PH_INPUT_PARENT_PATH,
        "The directory part of the parent directory of the current input, i.e., `/some` of input `/some/where/file.txt`.",
    ),
    (
        PH_INPUT_PARENT_NAME,
        "The name of the parent directory of the current input, i.e., `where` of input `/some/where/file.txt`.",
    ),
];

/// Help text suffix for options that accept placeholders.
#[macro_export]
macro_rules! placeholder_list {
    () => {
        "Supported placeholders: {HOME}, {CWD}, {TMP}, {INPUT_PATH}, {INPUT_NAMEEXT}, \
         {INPUT_NAMENOEXT}, {INPUT_EXT}, {INPUT_PARENT_PATH}, {INPUT_PARENT_NAME}"
    };
}

// Nesting limit for custom placeholders referring to each other
const MAX_NESTING: usize = 8;

fn token(key: &str) -> String {
    format!("{{{}}}", key)
}

fn is_builtin(key: &str) -> bool {
    BUILTIN_PLACEHOLDERS.iter().any(|(name, _)| *name == key)
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Values of the input-based placeholders for `input`.
pub fn input_values(input: &Path) -> Vec<(&'static str, String)> {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let grand_parent = parent.parent().unwrap_or_else(|| Path::new(""));
    let name_of = |p: &Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    vec![
        (PH_INPUT_PATH, path_string(parent)),
        (PH_INPUT_NAMEEXT, name_of(input)),
        (PH_INPUT_NAMENOEXT, stem),
        (PH_INPUT_EXT, ext),
        (PH_INPUT_PARENT_PATH, path_string(grand_parent)),
        (PH_INPUT_PARENT_NAME, name_of(parent)),
    ]
}

/// Values of the environment placeholders; missing ones are omitted.
pub fn environment_values() -> Vec<(&'static str, String)> {
    let mut result = Vec::new();
    match dirs::home_dir() {
        Some(home) => result.push((PH_HOME, path_string(&home))),
        None => warn!("Unable to determine home directory, {} stays unexpanded", token(PH_HOME)),
    }
    match std::env::current_dir() {
        Ok(cwd) => result.push((PH_CWD, path_string(&cwd))),
        Err(e) => warn!("Unable to determine working directory: {}", e),
    }
    result.push((PH_TMP, path_string(&std::env::temp_dir())));
    result
}

#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    custom: BTreeMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom placeholder. Built-in names cannot be redefined.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ImgvisError::invalid(
                "placeholders",
                format!("invalid placeholder name: {}", key),
            ));
        }
        if is_builtin(key) {
            return Err(ImgvisError::invalid(
                "placeholders",
                format!("cannot redefine built-in placeholder: {}", key),
            ));
        }
        self.custom.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Parses `KEY=VALUE` lines, skipping blank lines and `#` comments.
    pub fn parse(content: &str) -> Result<Self> {
        let mut result = Self::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('=') {
                Some((key, value)) => result.insert(key.trim(), value.trim())?,
                None => {
                    return Err(ImgvisError::invalid(
                        "placeholders",
                        format!("line {} is not of format KEY=VALUE: {}", index + 1, line),
                    ))
                }
            }
        }
        Ok(result)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ImgvisError::io(path, e))?;
        let result = Self::parse(&content)?;
        debug!("Loaded {} placeholder(s) from {}", result.len(), path.display());
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.custom.is_empty()
    }

    pub fn custom(&self) -> impl Iterator<Item = (&str, &str)> {
        self.custom.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replaces every known `{KEY}` token in a single scan over `template`.
    ///
    /// Custom values are expanded themselves before insertion (nesting is
    /// limited), built-in values are inserted as they are. Input-based
    /// placeholders only get replaced when `input` is known, unknown tokens
    /// are left in place.
    pub fn expand(&self, template: &str, input: Option<&Path>) -> String {
        let mut builtins: HashMap<&'static str, String> = environment_values().into_iter().collect();
        if let Some(input) = input {
            builtins.extend(input_values(input));
        }
        self.expand_with(template, &builtins, 0)
    }

    fn expand_with(&self, template: &str, builtins: &HashMap<&'static str, String>, depth: usize) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            result.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = match after.find(|c| c == '{' || c == '}') {
                Some(end) if after[end..].starts_with('}') => end,
                // unterminated or nested brace: keep it and scan on
                _ => {
                    result.push('{');
                    rest = after;
                    continue;
                }
            };
            let key = &after[..end];
            match self.resolve(key, builtins, depth) {
                Some(value) => result.push_str(&value),
                None => result.push_str(&token(key)),
            }
            rest = &after[end + 1..];
        }
        result.push_str(rest);
        result
    }

    fn resolve(&self, key: &str, builtins: &HashMap<&'static str, String>, depth: usize) -> Option<String> {
        if let Some(value) = self.custom.get(key) {
            if depth >= MAX_NESTING {
                warn!("Placeholder {} nested too deeply, left unexpanded", token(key));
                return None;
            }
            return Some(self.expand_with(value, builtins, depth + 1));
        }
        builtins.get(key).cloned()
    }

    pub fn expand_path(&self, template: &str, input: Option<&Path>) -> PathBuf {
        PathBuf::from(self.expand(template, input))
    }
}

/// Expands the built-in placeholders only.
pub fn expand_placeholders(template: &str, input: Option<&Path>) -> String {
    Placeholders::new().expand(template, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(values: &[(&'static str, String)], key: &str) -> String {
        values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
            .unwrap()
    }

    #[test]
    fn test_input_values_bare_name() {
        let values = input_values(Path::new("archive.tar.gz"));
        assert_eq!(value_of(&values, PH_INPUT_PATH), "");
        assert_eq!(value_of(&values, PH_INPUT_NAMENOEXT), "archive.tar");
        assert_eq!(value_of(&values, PH_INPUT_EXT), ".gz");
        assert_eq!(value_of(&values, PH_INPUT_PARENT_NAME), "");
    }

    #[test]
    fn test_builtin_names() {
        assert!(is_builtin("INPUT_EXT"));
        assert!(!is_builtin("OUTPUT"));
        assert_eq!(token(PH_TMP), "{TMP}");
        assert!(placeholder_list!().contains("{INPUT_PARENT_NAME}"));
    }

    #[test]
    fn test_scan_keeps_stray_braces() {
        let placeholders = Placeholders::parse("RUN=7").unwrap();
        assert_eq!(placeholders.expand("{{RUN}} {RUN", None), "{7} {RUN");
        assert_eq!(placeholders.expand("}{}", None), "}{}");
    }

    #[test]
    fn test_custom_values_may_repeat() {
        let mut placeholders = Placeholders::new();
        placeholders.insert("RUN", "7").unwrap();
        assert_eq!(placeholders.expand("{RUN}-{RUN}", None), "7-7");
        placeholders.insert("RUN", "8").unwrap();
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders.custom().next(), Some(("RUN", "8")));
    }
}
