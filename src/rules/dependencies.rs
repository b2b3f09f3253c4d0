//! Dependency-declaration rewrites.
//!
//! `compile_to_implementation` must run before `dependency_calls` so the
//! migrated keyword picks up parentheses like any other. The exclude rules
//! run most-specific first: the `configurations.classpath` form, then the
//! module-only form, then the group forms.

use crate::block::rewrite_blocks;
use crate::pipeline::Context;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COMPILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\b(testCompile|compile)\b(.*".*")"#).unwrap());

/// `compile "dep"` -> `implementation "dep"`, `testCompile "dep"` ->
/// `testImplementation "dep"`. Only lines carrying a quoted coordinate
/// convert; `compileOptions` and friends are protected by the word boundary.
pub fn compile_to_implementation(input: &str, _ctx: &mut Context) -> String {
    COMPILE_RE
        .replace_all(input, |caps: &Captures| {
            let keyword = if &caps[1] == "testCompile" {
                "testImplementation"
            } else {
                "implementation"
            };
            format!("{}{}", keyword, &caps[2])
        })
        .into_owned()
}

static DEPENDENCY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)(^|\s)(androidTestImplementation|testImplementation|debugImplementation|releaseImplementation|implementation|testCompileOnly|compileOnly|runtimeOnly|developmentOnly|annotationProcessor|classpath|kaptAndroidTest|kaptTest|kapt|api|check|ksp|coreLibraryDesugaring|detektPlugins|lintPublish|lintCheck|cartridgeRuntime|cartridge)\b(.*)$",
    )
    .unwrap()
});

// implementation("dep") { exclude(...) } keeps its configuration closure.
static CONFIG_CLOSURE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\)\s*\{").unwrap());

static LINE_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*//.*").unwrap());

/// `implementation ":epoxy-annotations"` -> `implementation(":epoxy-annotations")`.
///
/// The argument may itself be a call, as in `kapt project(":processor")`,
/// which wraps to `kapt(project(":processor"))`. A trailing line comment is
/// detached first and re-attached after the closing parenthesis. Skipped
/// forms: a configuration block (`kapt {`), member access (`kapt.`), a
/// keyword with nothing after it, and arguments already parenthesized.
pub fn dependency_calls(input: &str, _ctx: &mut Context) -> String {
    DEPENDENCY_RE
        .replace_all(input, |caps: &Captures| {
            let prefix = &caps[1];
            let keyword = &caps[2];
            let rest = caps.get(3).map_or("", |m| m.as_str());

            if CONFIG_CLOSURE_RE.is_match(rest) {
                return caps[0].to_string();
            }
            let trimmed = rest.trim_start();
            if trimmed.starts_with('{') || trimmed.starts_with("\")") || trimmed.starts_with('.') {
                return caps[0].to_string();
            }

            let (payload, comment) = match LINE_COMMENT_RE.find(rest) {
                Some(m) => (&rest[..m.start()], m.as_str()),
                None => (rest, ""),
            };
            let isolated = payload.trim();
            if isolated.is_empty() {
                return caps[0].to_string();
            }

            if isolated.starts_with('(') && isolated.ends_with(')') {
                format!("{prefix}{keyword}{isolated}{comment}")
            } else {
                format!("{prefix}{keyword}({isolated}){comment}")
            }
        })
        .into_owned()
}

static MAVEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"maven\s*\{\s*url\s*(.*?)\s*?\}").unwrap());

static MAVEN_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"= *uri *\(|\)|url| ").unwrap());

/// `maven { url "https://..." }` and `maven { url = uri("https://...") }`
/// both become `maven("https://...")`.
pub fn maven_url(input: &str, _ctx: &mut Context) -> String {
    MAVEN_RE
        .replace_all(input, |caps: &Captures| {
            MAVEN_STRIP_RE
                .replace_all(&caps[0], "")
                .replace('{', "(")
                .replace('}', ")")
        })
        .into_owned()
}

static CLASSPATH_EXCLUDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^.*configurations\.classpath\.exclude.*group:.*$").unwrap());

static QUOTED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*""#).unwrap());

/// `configurations.classpath.exclude group: "com.example"` becomes the
/// block form with a named argument.
pub fn exclude_classpath(input: &str, _ctx: &mut Context) -> String {
    CLASSPATH_EXCLUDE_RE
        .replace_all(input, |caps: &Captures| {
            let coordinate = QUOTED_RE.find(&caps[0]).map_or("", |m| m.as_str());
            format!(
                "configurations.classpath {{\n    exclude(group = {coordinate})\n}}"
            )
        })
        .into_owned()
}

static EXCLUDE_MODULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"exclude module:\s*(\S+)").unwrap());

/// `exclude module: "module-id"` -> `exclude(module = "module-id")`.
pub fn exclude_module(input: &str, _ctx: &mut Context) -> String {
    EXCLUDE_MODULE_RE
        .replace_all(input, "exclude(module = $1)")
        .into_owned()
}

static EXCLUDE_GROUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"exclude\s+group:\s*(\S+)\s*,\s*module:\s*(\S+)|exclude\s+group:\s*(\S+)").unwrap()
});

/// Both `exclude group: "g"` and `exclude group: "g", module: "m"` convert
/// to named-argument calls. The two-argument form is tried first so the
/// group-only alternative cannot truncate it.
pub fn exclude_group(input: &str, _ctx: &mut Context) -> String {
    EXCLUDE_GROUP_RE
        .replace_all(input, |caps: &Captures| {
            match (caps.get(1), caps.get(2)) {
                (Some(group), Some(module)) => {
                    format!("exclude(group = {}, module = {})", group.as_str(), module.as_str())
                }
                _ => format!("exclude(group = {})", &caps[3]),
            }
        })
        .into_owned()
}

static KOTLIN_COORDINATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""org\.jetbrains\.kotlin:kotlin-([^:"]*)(?::([^"]*))?"\)"#).unwrap()
});

/// JetBrains coordinates use the `kotlin()` helper:
/// `implementation("org.jetbrains.kotlin:kotlin-stdlib:1.3.61")` ->
/// `implementation(kotlin("stdlib"))`, and versioned non-stdlib modules keep
/// their version as a named argument. Requires the coordinate to already sit
/// inside a call, so this runs after `dependency_calls`.
pub fn kotlin_coordinates(input: &str, _ctx: &mut Context) -> String {
    KOTLIN_COORDINATE_RE
        .replace_all(input, |caps: &Captures| {
            let module = &caps[1];
            if module.contains("stdlib") {
                // Every stdlib flavor collapses to the plain helper; the
                // Kotlin plugin picks the right artifact.
                return String::from("kotlin(\"stdlib\"))");
            }
            match caps.get(2) {
                Some(version) => {
                    format!("kotlin(\"{}\", version = \"{}\"))", module, version.as_str())
                }
                None => format!("kotlin(\"{module}\"))"),
            }
        })
        .into_owned()
}

static DEPENDENCIES_OPENER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"dependencies\s*\{").unwrap());

/// Normalizes the padding directly inside `dependencies { }`: the body is
/// trimmed and re-opened with a four-space first line, undoing the blank
/// lines that earlier whole-line rewrites can leave behind.
pub fn dependencies_braces(input: &str, _ctx: &mut Context) -> String {
    rewrite_blocks(input, &DEPENDENCIES_OPENER_RE, |body| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            body.to_string()
        } else {
            format!("\n    {trimmed}\n")
        }
    })
}
