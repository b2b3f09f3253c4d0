//! Literal-syntax normalization.
//!
//! Quoting runs first so every later rule can assume double-quoted strings.
//! Collection literals convert next, before the declaration rules that embed
//! them. The single-integer bracket heuristic is deliberate: `lookup[42]`
//! cannot be told apart from a one-element integer list textually, so index
//! access wins.

use crate::pipeline::Context;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `'kotlin-android'` -> `"kotlin-android"`.
///
/// Escaped double quotes inside single-quoted strings are not rewritten;
/// matching start and end quotes safely is beyond a textual converter.
pub fn apostrophes(input: &str, _ctx: &mut Context) -> String {
    input.replace('\'', "\"")
}

static DEF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|\s)def ").unwrap());

/// `def appcompat = "1.0.0"` -> `val appcompat = "1.0.0"`.
///
/// Only `def` at a word start converts; a variable named `highdef` is left
/// alone.
pub fn def_to_val(input: &str, _ctx: &mut Context) -> String {
    DEF_RE
        .replace_all(input, |caps: &Captures| format!("{}val ", &caps[1]))
        .into_owned()
}

const KEY_PATTERN: &str = r#"(?:"[^"]*"|\w+)"#;
const VALUE_PATTERN: &str = r#"(?:"[^"]*"|[^,:\s\]]+)"#;

static MAP_RE: Lazy<Regex> = Lazy::new(|| {
    let pair = format!(r"\s*{KEY_PATTERN}\s*:\s*{VALUE_PATTERN}\s*");
    Regex::new(&format!(r"\[({pair}(?:,{pair})*)\]")).unwrap()
});

static PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?s)^\s*({KEY_PATTERN})\s*:\s*({VALUE_PATTERN})\s*(?:,(.*))?$"
    ))
    .unwrap()
});

/// `[appIcon: "@drawable/ic", "aKey": "aValue"]`
/// -> `mapOf("appIcon" to "@drawable/ic", "aKey" to "aValue")`.
pub fn map_literal(input: &str, _ctx: &mut Context) -> String {
    MAP_RE
        .replace_all(input, |caps: &Captures| {
            let mut pairs = Vec::new();
            collect_pairs(&caps[1], &mut pairs);
            format!("mapOf({})", pairs.join(", "))
        })
        .into_owned()
}

// Peels the first key/value off the front and recurses on the tail.
fn collect_pairs(rest: &str, out: &mut Vec<String>) {
    let Some(caps) = PAIR_RE.captures(rest) else {
        return;
    };
    let key = caps[1].trim_matches('"').to_string();
    out.push(format!("\"{}\" to {}", key, &caps[2]));
    if let Some(tail) = caps.get(3) {
        if !tail.as_str().is_empty() {
            collect_pairs(tail.as_str(), out);
        }
    }
}

static FILE_TREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"fileTree\(dir\s*:\s*"libs"\s*,\s*include\s*:\s*\["\*\.jar"\]\)"#).unwrap()
});

/// The conventional `fileTree(dir: "libs", include: ["*.jar"])` form becomes
/// the Kotlin map call. Runs before `array_literal` so the bracket list does
/// not get converted out from under it.
pub fn file_tree(input: &str, _ctx: &mut Context) -> String {
    FILE_TREE_RE
        .replace_all(
            input,
            r#"fileTree(mapOf("dir" to "libs", "include" to listOf("*.jar")))"#,
        )
        .into_owned()
}

static ARRAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[([^\]]*?)\]").unwrap());

/// `[1, 2]` -> `listOf(1, 2)`; `lookup[42]` stays as it is.
pub fn array_literal(input: &str, _ctx: &mut Context) -> String {
    ARRAY_RE
        .replace_all(input, |caps: &Captures| {
            if caps[1].parse::<i64>().is_ok() {
                // A lone integer is taken to be index access.
                caps[0].to_string()
            } else {
                format!("listOf({})", &caps[1])
            }
        })
        .into_owned()
}

static MANIFEST_PLACEHOLDERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)manifestPlaceholders = (mapOf\([^)]*\))").unwrap());

/// `manifestPlaceholders = mapOf(...)` -> `manifestPlaceholders.putAll(mapOf(...))`,
/// the AGP 4.1+ form. Must run after `map_literal`.
pub fn manifest_placeholders(input: &str, _ctx: &mut Context) -> String {
    MANIFEST_PLACEHOLDERS_RE
        .replace_all(input, "manifestPlaceholders.putAll($1)")
        .into_owned()
}

static VAR_DECL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:final\s+)?(\w+)(<.+>)? +(\w+)\s*=\s*(.+)").unwrap());

/// `final String<T> foo = "bar"` -> `val foo: String<T> = "bar"`.
///
/// Primitive Groovy/Java type names map through [`kotlin_type`]; anything
/// else keeps its own name. Only declarations with an assigned value match.
pub fn variable_declaration(input: &str, _ctx: &mut Context) -> String {
    VAR_DECL_RE
        .replace_all(input, |caps: &Captures| {
            let type_name = &caps[1];
            if type_name == "val" {
                return caps[0].to_string();
            }
            let generics = caps.get(2).map_or("", |m| m.as_str());
            format!(
                "val {}: {}{} = {}",
                &caps[3],
                kotlin_type(type_name),
                generics,
                &caps[4]
            )
        })
        .into_owned()
}

/// The fixed primitive-name table; unknown types pass through unchanged.
fn kotlin_type(groovy: &str) -> &str {
    match groovy {
        "byte" => "Byte",
        "short" => "Short",
        "int" => "Int",
        "long" => "Long",
        "float" => "Float",
        "double" => "Double",
        "char" => "Char",
        "boolean" => "Boolean",
        other => other,
    }
}
