//! Name transformations applied to the non-suffix part of a property name.
//!
//! A known type suffix is split off before transformation and reattached
//! untouched afterwards, so `last_string_str` camel-cases to `lastString_str`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::suffix::split_known_suffix;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("static regex must compile"));

/// A pure `&str → String` rewrite of a property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameTransform {
    /// `dotted.date` → `dottedDate`, `spaced real` → `spacedReal`.
    CamelCase,
    /// Drop every character outside `[A-Za-z0-9_]`.
    StripDisallowed,
}

impl NameTransform {
    pub fn apply(self, name: &str) -> String {
        match self {
            NameTransform::CamelCase => camel_case(name),
            NameTransform::StripDisallowed => strip_disallowed(name),
        }
    }
}

/// Apply `transforms` in order to the base of `key`, preserving any known
/// type suffix verbatim.
pub fn transform_name(key: &str, transforms: &[NameTransform]) -> String {
    let (base, suffix) = split_known_suffix(key);
    let base = transforms
        .iter()
        .fold(base.to_string(), |name, t| t.apply(&name));
    match suffix {
        Some(suffix) => format!("{base}_{suffix}"),
        None => base,
    }
}

pub fn strip_disallowed(name: &str) -> String {
    DISALLOWED.replace_all(name, "").into_owned()
}

/// Camel-case `name`.
///
/// Every non-alphanumeric character separates words. Words also break where
/// an uppercase letter follows a lowercase letter or digit, and before the
/// last letter of an uppercase run that is followed by a lowercase letter
/// (`XMLHttp` → `XML` + `Http`). The first word is lowercased and the rest
/// are capitalized.
///
/// A digit followed by a letter is not a word break: `user2fa id` becomes
/// `user2faId`, not `user2FaId`.
///
/// A name that is already camel-cased (alphanumeric only, not starting with
/// an uppercase letter) is returned as is. That makes the output a fixed
/// point: `x a b` becomes `xAB` and stays `xAB`, and `fooBAR` is kept.
pub fn camel_case(name: &str) -> String {
    if is_camel_cased(name) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    for (i, word) in words(name).into_iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn is_camel_cased(name: &str) -> bool {
    name.chars().all(char::is_alphanumeric) && !name.starts_with(char::is_uppercase)
}

fn words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for run in name.split(|c: char| !c.is_alphanumeric()) {
        if run.is_empty() {
            continue;
        }
        let chars: Vec<(usize, char)> = run.char_indices().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            let (at, c) = chars[i];
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|&(_, n)| n);
            let lower_to_upper = c.is_uppercase() && (prev.is_lowercase() || prev.is_numeric());
            let acronym_end = c.is_uppercase()
                && prev.is_uppercase()
                && next.is_some_and(char::is_lowercase);
            if lower_to_upper || acronym_end {
                words.push(&run[start..at]);
                start = at;
            }
        }
        words.push(&run[start..]);
    }
    words
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
