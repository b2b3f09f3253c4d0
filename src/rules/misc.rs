//! Settings-file and copy-task odds and ends.

use crate::pipeline::Context;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static INCLUDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"include((?:\s*"[^"]*"\s*,)*\s*"[^"]*")"#).unwrap());

static FROM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"from((?:\s*"[^"]*"\s*,)*\s*"[^"]*")"#).unwrap());

// Shared by `include` and `from`: a comma-separated run of quoted strings
// becomes one call. A multi-line run keeps its lines and gets the opening
// and closing parentheses on their own lines.
fn wrap_string_list(input: &str, re: &Regex, name: &str) -> String {
    re.replace_all(input, |caps: &Captures| {
        // `"include" to listOf(...)` from the map conversion is not a call.
        if caps[0].starts_with(&format!("{name}\"")) {
            return caps[0].to_string();
        }
        let multiline = caps[0].lines().filter(|line| !line.trim().is_empty()).count() > 1;
        let isolated = caps[1].trim();
        if multiline {
            format!("{name}(\n{isolated}\n)")
        } else {
            format!("{name}({isolated})")
        }
    })
    .into_owned()
}

/// `include ":app", ":core"` -> `include(":app", ":core")`, keeping a
/// multi-line module list multi-line.
pub fn include_calls(input: &str, _ctx: &mut Context) -> String {
    wrap_string_list(input, &INCLUDE_RE, "include")
}

/// `from "src/main/resources"` -> `from("src/main/resources")`.
pub fn from_calls(input: &str, _ctx: &mut Context) -> String {
    wrap_string_list(input, &FROM_RE, "from")
}

static EXT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"ext\.(\w+)\s*=\s*(.*)").unwrap());

/// `ext.enableCrashlytics = false` -> `extra["enableCrashlytics"] = false`.
/// An `ext { }` block has no dot and is left alone.
pub fn ext_to_extra(input: &str, _ctx: &mut Context) -> String {
    EXT_RE.replace_all(input, "extra[\"$1\"] = $2").into_owned()
}

static NAMED_ARGUMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\w+):(\s*"[^"]*")"#).unwrap());

/// `group: "junit"` -> `group = "junit"`. Only the key's own colon is
/// rewritten; colons inside the quoted value, as in a Maven coordinate,
/// stay put.
pub fn named_argument_equals(input: &str, _ctx: &mut Context) -> String {
    NAMED_ARGUMENT_RE.replace_all(input, "$1 =$2").into_owned()
}

static RENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rename\s*\{\s*String\s+(\w+)\s*->").unwrap());

/// `rename { String fileName -> ... }` -> `rename { fileName: String -> ... }`.
pub fn rename_notation(input: &str, _ctx: &mut Context) -> String {
    RENAME_RE
        .replace_all(input, "rename { $1: String ->")
        .into_owned()
}

static EXPAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"expand\((\w+:\s*[^,)]+(?:,\s*\w+:\s*[^,)]+)*)\)").unwrap());

/// `expand(version: project.version)` -> `expand(mapOf("version" to project.version))`.
pub fn expand_map(input: &str, _ctx: &mut Context) -> String {
    EXPAND_RE
        .replace_all(input, |caps: &Captures| {
            let pairs = caps[1]
                .split(',')
                .map(str::trim)
                .map(|pair| match pair.split_once(':') {
                    Some((key, value)) => format!("\"{}\" to {}", key.trim(), value.trim()),
                    None => pair.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("expand(mapOf({pairs}))")
        })
        .into_owned()
}

static NEW_FILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\b(into|srcDir)\s+new\s+File\s*\(\s*(?:project\.)?buildDir\s*,\s*"([^"]*)"\s*\)"#)
        .unwrap()
});

/// `into new File(project.buildDir, "target")` ->
/// `into(layout.buildDirectory.dir("target"))`, and the same for `srcDir`.
pub fn into_src_dir(input: &str, _ctx: &mut Context) -> String {
    NEW_FILE_RE
        .replace_all(input, "$1(layout.buildDirectory.dir(\"$2\"))")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::default()
    }

    #[test]
    fn include_single_line() {
        assert_eq!(
            include_calls("include \":app\", \":diffutils\"", &mut ctx()),
            "include(\":app\", \":diffutils\")"
        );
    }

    #[test]
    fn include_multi_line() {
        assert_eq!(
            include_calls("include \":app\",\n\":core\"", &mut ctx()),
            "include(\n\":app\",\n\":core\"\n)"
        );
    }

    #[test]
    fn include_map_key_is_skipped() {
        let input = "fileTree(mapOf(\"dir\" to \"libs\", \"include\" to listOf(\"*.jar\")))";
        assert_eq!(include_calls(input, &mut ctx()), input);
    }

    #[test]
    fn include_call_form_is_untouched() {
        let input = "include(\":app\", \":diffutils\")";
        assert_eq!(include_calls(input, &mut ctx()), input);
    }

    #[test]
    fn from_gains_parentheses() {
        assert_eq!(
            from_calls("from \"src/main/resources\"", &mut ctx()),
            "from(\"src/main/resources\")"
        );
    }

    #[test]
    fn apply_from_is_untouched() {
        let input = "apply(from = \"versions.gradle\")";
        assert_eq!(from_calls(input, &mut ctx()), input);
    }

    #[test]
    fn ext_property_becomes_extra_index() {
        assert_eq!(
            ext_to_extra("ext.enableCrashlytics = false", &mut ctx()),
            "extra[\"enableCrashlytics\"] = false"
        );
    }

    #[test]
    fn ext_block_is_untouched() {
        let input = "ext {\n    version = \"1.0\"\n}";
        assert_eq!(ext_to_extra(input, &mut ctx()), input);
    }

    #[test]
    fn named_arguments_use_equals() {
        assert_eq!(
            named_argument_equals(
                "testImplementation(group: \"junit\", name: \"junit\", version: \"4.12\")",
                &mut ctx()
            ),
            "testImplementation(group = \"junit\", name = \"junit\", version = \"4.12\")"
        );
    }

    #[test]
    fn coordinate_colons_inside_value_survive() {
        assert_eq!(
            named_argument_equals("name: \"junit:junit\"", &mut ctx()),
            "name = \"junit:junit\""
        );
    }

    #[test]
    fn rename_parameter_moves_its_type() {
        assert_eq!(
            rename_notation("rename { String fileName ->", &mut ctx()),
            "rename { fileName: String ->"
        );
    }

    #[test]
    fn expand_pairs_become_map_of() {
        assert_eq!(
            expand_map("expand(version: project.version, baseName: \"app\")", &mut ctx()),
            "expand(mapOf(\"version\" to project.version, \"baseName\" to \"app\"))"
        );
    }

    #[test]
    fn expand_conversion_is_stable() {
        let once = expand_map("expand(version: project.version)", &mut ctx());
        assert_eq!(expand_map(&once, &mut ctx()), once);
    }

    #[test]
    fn into_new_file_uses_build_directory_layout() {
        assert_eq!(
            into_src_dir("into new File(project.buildDir, \"target_resources\")", &mut ctx()),
            "into(layout.buildDirectory.dir(\"target_resources\"))"
        );
        assert_eq!(
            into_src_dir("srcDir new File(buildDir, \"generated\")", &mut ctx()),
            "srcDir(layout.buildDirectory.dir(\"generated\"))"
        );
    }
}
