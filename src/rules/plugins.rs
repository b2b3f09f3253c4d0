//! Plugin-declaration normalization.

use crate::block::rewrite_blocks;
use crate::pipeline::Context;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static APPLY_PLUGIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"apply plugin: (\S+)").unwrap());

/// `apply plugin: "kotlin-android"` -> `apply(plugin = "kotlin-android")`.
pub fn apply_plugin(input: &str, _ctx: &mut Context) -> String {
    APPLY_PLUGIN_RE
        .replace_all(input, "apply(plugin = $1)")
        .into_owned()
}

static APPLY_FROM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"apply from: (\S+)").unwrap());

/// `apply from: "other.gradle"` -> `apply(from = "other.gradle")`.
pub fn apply_from(input: &str, _ctx: &mut Context) -> String {
    APPLY_FROM_RE
        .replace_all(input, "apply(from = $1)")
        .into_owned()
}

static MULTI_APPLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:apply\(plugin\s*=\s*"[^"]*"\)(?:\n|$)){2,}"#).unwrap());

static QUOTED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*""#).unwrap());

/// Collapses two or more consecutive `apply(plugin = "…")` lines into one
/// `plugins { id("…") … }` block.
///
/// The lines must be adjacent, at column zero, with nothing in between; a
/// single apply line stays as it is.
pub fn plugins_block(input: &str, _ctx: &mut Context) -> String {
    MULTI_APPLY_RE
        .replace_all(input, |caps: &Captures| {
            let mut ids = String::new();
            for quoted in QUOTED_RE.find_iter(&caps[0]) {
                ids.push_str("    id(");
                ids.push_str(quoted.as_str());
                ids.push_str(")\n");
            }
            format!("plugins {{\n{ids}}}\n")
        })
        .into_owned()
}

static ID_CALL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\bid\b\s*"([^"]*)""#).unwrap());

/// `id "io.gitlab.arturbosch.detekt" version "1.0.0.RC8"`
/// -> `id("io.gitlab.arturbosch.detekt") version "1.0.0.RC8"`.
pub fn id_calls(input: &str, _ctx: &mut Context) -> String {
    ID_CALL_RE.replace_all(input, "id(\"$1\")").into_owned()
}

static PLUGINS_OPENER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"plugins\s*\{").unwrap());

/// Inside a `plugins { }` block, `id("java")` becomes the `java` shorthand.
pub fn java_plugin_reference(input: &str, _ctx: &mut Context) -> String {
    rewrite_blocks(input, &PLUGINS_OPENER_RE, |body| {
        body.replace("id(\"java\")", "java")
    })
}
