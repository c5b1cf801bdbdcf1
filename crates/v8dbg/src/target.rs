//! Breakpoint target selection.
//!
//! The engine locates the script a breakpoint belongs to by one of three
//! strategies, in order of preference: an exact compiled-script id, a regular
//! expression over script names, or a literal script name. The regex path is
//! used for remote debuggees, where the file casing and path layout on the
//! engine host may not match the local ones.

use serde::{Deserialize, Serialize};

use crate::breakpoint::ScriptModule;

/// Wire value for the `type` field of targeted requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    ScriptId,
    ScriptRegExp,
    Script,
}

/// Wire value for the `target` field: an integer id or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetValue {
    Id(u32),
    Name(String),
}

/// One fully chosen targeting strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptTarget {
    /// Exact compiled-script id; used once the script is loaded and mapped.
    ScriptId(u32),
    /// Case-insensitive file-name pattern; used for remote debuggees.
    ScriptRegExp(String),
    /// Literal local file path.
    Script(String),
}

impl ScriptTarget {
    /// Picks the targeting strategy for a breakpoint.
    ///
    /// Selection is total and mutually exclusive, precedence
    /// `ScriptId > ScriptRegExp > Script`.
    #[must_use]
    pub fn select(module: Option<&ScriptModule>, remote: bool, path: &str) -> Self {
        if let Some(module) = module {
            ScriptTarget::ScriptId(module.id)
        } else if remote {
            ScriptTarget::ScriptRegExp(case_insensitive_file_pattern(path))
        } else {
            ScriptTarget::Script(path.to_string())
        }
    }

    #[must_use]
    pub fn kind(&self) -> TargetKind {
        match self {
            ScriptTarget::ScriptId(_) => TargetKind::ScriptId,
            ScriptTarget::ScriptRegExp(_) => TargetKind::ScriptRegExp,
            ScriptTarget::Script(_) => TargetKind::Script,
        }
    }

    #[must_use]
    pub fn value(&self) -> TargetValue {
        match self {
            ScriptTarget::ScriptId(id) => TargetValue::Id(*id),
            ScriptTarget::ScriptRegExp(pattern) | ScriptTarget::Script(pattern) => {
                TargetValue::Name(pattern.clone())
            }
        }
    }
}

/// Builds a case-sensitive pattern that matches a file name in any casing.
///
/// The engine accepts only a plain regex string for `scriptRegExp` targets,
/// with no way to pass a case-insensitivity flag, so casing classes are
/// spelled out per character. The pattern is anchored at `$`, and at the
/// front either to the string start (bare file name) or to a path separator
/// (a directory component was present).
#[must_use]
pub fn case_insensitive_file_pattern(path: &str) -> String {
    let name = path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let trailing = name != path;

    let escaped = regex::escape(name);

    let mut pattern = String::with_capacity(escaped.len() * 2 + 8);
    if trailing {
        pattern.push_str(r"[\\/]");
    } else {
        pattern.push('^');
    }

    for ch in escaped.chars() {
        let upper: String = ch.to_uppercase().collect();
        let lower: String = ch.to_lowercase().collect();
        if upper == lower {
            pattern.push(ch);
        } else {
            pattern.push('[');
            pattern.push_str(&upper);
            pattern.push_str(&lower);
            pattern.push(']');
        }
    }

    pattern.push('$');
    pattern
}
