//! The rule catalog.
//!
//! Every rule is a pure rewrite over the whole document; input the rule does
//! not recognize passes through unchanged. The catalog order is a contract:
//! quoting is normalized before anything that matches double quotes,
//! collection literals convert before the declarations that embed them,
//! `compile` migrates to `implementation` before dependency keywords gain
//! parentheses, and the block-keyword rules run after the assignments they
//! would otherwise disturb. Reordering entries here is a behavior change,
//! not a refactor.

pub mod android;
pub mod blocks;
pub mod dependencies;
pub mod literals;
pub mod misc;
pub mod plugins;
pub mod tasks;

use crate::pipeline::Rule;

/// The full conversion catalog in application order.
pub fn catalog() -> &'static [Rule] {
    CATALOG
}

const CATALOG: &[Rule] = &[
    Rule { name: "apostrophes", apply: literals::apostrophes },
    Rule { name: "def-to-val", apply: literals::def_to_val },
    Rule { name: "map-literal", apply: literals::map_literal },
    Rule { name: "file-tree", apply: literals::file_tree },
    Rule { name: "array-literal", apply: literals::array_literal },
    Rule { name: "manifest-placeholders", apply: literals::manifest_placeholders },
    Rule { name: "variable-declaration", apply: literals::variable_declaration },
    Rule { name: "apply-plugin", apply: plugins::apply_plugin },
    Rule { name: "plugins-block", apply: plugins::plugins_block },
    Rule { name: "apply-from", apply: plugins::apply_from },
    Rule { name: "variant-filter", apply: android::variant_filter },
    Rule { name: "build-config-calls", apply: android::build_config_calls },
    Rule { name: "compile-to-implementation", apply: dependencies::compile_to_implementation },
    Rule { name: "core-library-desugaring-enabled", apply: android::core_library_desugaring },
    Rule { name: "dependency-calls", apply: dependencies::dependency_calls },
    Rule { name: "maven-url", apply: dependencies::maven_url },
    Rule { name: "sdk-version-calls", apply: android::sdk_version_calls },
    Rule { name: "assignment-equals", apply: android::assignment_equals },
    Rule { name: "java-compatibility", apply: android::java_compatibility },
    Rule { name: "clean-task", apply: tasks::clean_task },
    Rule { name: "proguard-files", apply: android::proguard_files },
    Rule { name: "is-prefix-blocks", apply: blocks::is_prefix_blocks },
    Rule { name: "include-calls", apply: misc::include_calls },
    Rule { name: "build-types", apply: blocks::build_types },
    Rule { name: "product-flavors", apply: blocks::product_flavors },
    Rule { name: "source-sets", apply: blocks::source_sets },
    Rule { name: "signing-configs", apply: blocks::signing_configs },
    Rule { name: "exclude-classpath", apply: dependencies::exclude_classpath },
    Rule { name: "exclude-module", apply: dependencies::exclude_module },
    Rule { name: "exclude-group", apply: dependencies::exclude_group },
    Rule { name: "kotlin-coordinates", apply: dependencies::kotlin_coordinates },
    Rule { name: "signing-config-get-by-name", apply: android::signing_config_get_by_name },
    Rule { name: "ext-to-extra", apply: misc::ext_to_extra },
    Rule { name: "id-calls", apply: plugins::id_calls },
    Rule { name: "named-argument-equals", apply: misc::named_argument_equals },
    Rule { name: "build-features", apply: android::build_features },
    Rule { name: "java-plugin-reference", apply: plugins::java_plugin_reference },
    Rule { name: "dependencies-braces", apply: dependencies::dependencies_braces },
    Rule { name: "task-dependencies", apply: tasks::task_dependencies },
    Rule { name: "from-calls", apply: misc::from_calls },
    Rule { name: "rename-notation", apply: misc::rename_notation },
    Rule { name: "expand-map", apply: misc::expand_map },
    Rule { name: "into-src-dir", apply: misc::into_src_dir },
    Rule { name: "typed-task-registration", apply: tasks::typed_task_registration },
    Rule { name: "tasks-with-type", apply: tasks::tasks_with_type },
    Rule { name: "dynamic-task-dependencies", apply: tasks::dynamic_task_dependencies },
];

/// Uppercases the first character, e.g. `minifyEnabled` -> `MinifyEnabled`.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_starts_with_quote_normalization() {
        assert_eq!(catalog()[0].name, "apostrophes");
    }

    #[test]
    fn compile_migration_precedes_dependency_calls() {
        let pos = |name: &str| catalog().iter().position(|r| r.name == name).unwrap();
        assert!(pos("compile-to-implementation") < pos("dependency-calls"));
        assert!(pos("map-literal") < pos("array-literal"));
        assert!(pos("file-tree") < pos("array-literal"));
        assert!(pos("apply-plugin") < pos("plugins-block"));
        assert!(pos("clean-task") < pos("typed-task-registration"));
        assert!(pos("task-dependencies") < pos("dynamic-task-dependencies"));
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<_> = catalog().iter().map(|r| r.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("experimental"), "Experimental");
        assert_eq!(capitalize(""), "");
    }
}
