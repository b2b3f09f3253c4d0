//! Container-block rewrites.
//!
//! `buildTypes`, `productFlavors`, `sourceSets` and `signingConfigs` are
//! Groovy containers whose children are bare identifiers. In Kotlin each
//! child goes through an accessor call, and which accessor depends on the
//! container: existing build types and source sets are `named`, flavors are
//! `create`d, signing configs are `register`ed. The `is`-prefix rules only
//! apply inside their own block, located with the brace scanner, so a
//! `transitive`-like word elsewhere in the file is not renamed.

use crate::block::rewrite_blocks;
use crate::pipeline::Context;
use crate::rules::capitalize;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BUILD_TYPES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"buildTypes\s*\{").unwrap());
static PRODUCT_FLAVORS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"productFlavors\s*\{").unwrap());
static SOURCE_SETS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"sourceSets\s*\{").unwrap());
static SIGNING_CONFIGS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"signingConfigs\s*\{").unwrap());

// An identifier that opens its own sub-block, e.g. `release {`.
static NESTED_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)(\s*)\{").unwrap());

// An identifier alone on its line (or alone in a one-line body).
static BARE_IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\s*)([A-Za-z_][A-Za-z0-9_]*)(\s*)$").unwrap());

fn wrap_children(input: &str, opener: &Regex, accessor: &str, keep: &[&str]) -> String {
    rewrite_blocks(input, opener, |body| {
        let with_blocks = NESTED_OPEN_RE.replace_all(body, |caps: &Captures| {
            let ident = &caps[1];
            if keep.contains(&ident) {
                caps[0].to_string()
            } else {
                format!("{accessor}(\"{ident}\"){}{{", &caps[2])
            }
        });
        BARE_IDENT_RE
            .replace_all(&with_blocks, |caps: &Captures| {
                let ident = &caps[2];
                if keep.contains(&ident) {
                    caps[0].to_string()
                } else {
                    format!("{}{accessor}(\"{ident}\"){}", &caps[1], &caps[3])
                }
            })
            .into_owned()
    })
}

/// `buildTypes { release { ... } }` -> `buildTypes { named("release") { ... } }`.
pub fn build_types(input: &str, _ctx: &mut Context) -> String {
    wrap_children(input, &BUILD_TYPES_RE, "named", &[])
}

/// `productFlavors { demo { ... } }` -> `productFlavors { create("demo") { ... } }`.
pub fn product_flavors(input: &str, _ctx: &mut Context) -> String {
    wrap_children(input, &PRODUCT_FLAVORS_RE, "create", &[])
}

/// `sourceSets { test { ... } }` -> `sourceSets { named("test") { ... } }`.
/// The `resources` child is a property of a source set, not a source set
/// itself, so it stays bare.
pub fn source_sets(input: &str, _ctx: &mut Context) -> String {
    wrap_children(input, &SOURCE_SETS_RE, "named", &["resources"])
}

/// `signingConfigs { release { ... } }` -> `signingConfigs { register("release") { ... } }`.
pub fn signing_configs(input: &str, _ctx: &mut Context) -> String {
    wrap_children(input, &SIGNING_CONFIGS_RE, "register", &[])
}

struct IsPrefixScope {
    /// Block the rename is confined to; `None` applies document-wide.
    opener: Option<Regex>,
    field: &'static str,
    field_re: Regex,
}

static IS_PREFIX_SCOPES: Lazy<Vec<IsPrefixScope>> = Lazy::new(|| {
    let scoped = [
        ("androidExtensions", "experimental"),
        ("dataBinding", "enabled"),
        ("lintOptions", "abortOnError"),
        ("buildTypes", "debuggable"),
        ("buildTypes", "minifyEnabled"),
        ("buildTypes", "shrinkResources"),
    ];
    let mut scopes: Vec<IsPrefixScope> = scoped
        .iter()
        .map(|(block, field)| IsPrefixScope {
            opener: Some(Regex::new(&format!(r"{block}\s*\{{")).unwrap()),
            field,
            field_re: Regex::new(&format!(r"\b{field}\b(.*)")).unwrap(),
        })
        .collect();
    // `transitive` shows up on dependency declarations anywhere.
    scopes.push(IsPrefixScope {
        opener: None,
        field: "transitive",
        field_re: Regex::new(r"\btransitive\b(.*)").unwrap(),
    });
    scopes
});

fn prefix_field(body: &str, field: &str, field_re: &Regex) -> String {
    field_re
        .replace_all(body, |caps: &Captures| {
            let tokens: Vec<&str> = caps[0].split_whitespace().collect();
            if tokens.len() < 2 {
                return caps[0].to_string();
            }
            format!("is{} = {}", capitalize(field), tokens[tokens.len() - 1])
        })
        .into_owned()
}

/// Boolean properties that carry an `is` prefix in Kotlin:
/// `minifyEnabled false` inside `buildTypes { }` becomes
/// `isMinifyEnabled = false`, `dataBinding { enabled true }` becomes
/// `dataBinding { isEnabled = true }`, and so on per scope.
pub fn is_prefix_blocks(input: &str, _ctx: &mut Context) -> String {
    let mut text = input.to_string();
    for scope in IS_PREFIX_SCOPES.iter() {
        text = match &scope.opener {
            Some(opener) => {
                rewrite_blocks(&text, opener, |body| {
                    prefix_field(body, scope.field, &scope.field_re)
                })
            }
            None => prefix_field(&text, scope.field, &scope.field_re),
        };
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::default()
    }

    #[test]
    fn build_type_child_blocks_are_named() {
        assert_eq!(
            build_types("buildTypes {\n    release {\n    }\n}", &mut ctx()),
            "buildTypes {\n    named(\"release\") {\n    }\n}"
        );
    }

    #[test]
    fn bare_build_type_is_named() {
        assert_eq!(
            build_types("buildTypes { release }", &mut ctx()),
            "buildTypes { named(\"release\") }"
        );
    }

    #[test]
    fn wrapping_is_stable() {
        let once = build_types("buildTypes {\n    release {\n    }\n}", &mut ctx());
        assert_eq!(build_types(&once, &mut ctx()), once);
    }

    #[test]
    fn flavors_are_created() {
        assert_eq!(
            product_flavors("productFlavors {\n    demo {\n    }\n    full {\n    }\n}", &mut ctx()),
            "productFlavors {\n    create(\"demo\") {\n    }\n    create(\"full\") {\n    }\n}"
        );
    }

    #[test]
    fn source_set_resources_stays_bare() {
        assert_eq!(
            source_sets(
                "sourceSets {\n    main {\n        resources {\n        }\n    }\n}",
                &mut ctx()
            ),
            "sourceSets {\n    named(\"main\") {\n        resources {\n        }\n    }\n}"
        );
    }

    #[test]
    fn signing_configs_are_registered() {
        assert_eq!(
            signing_configs("signingConfigs {\n    release {\n    }\n}", &mut ctx()),
            "signingConfigs {\n    register(\"release\") {\n    }\n}"
        );
    }

    #[test]
    fn identifiers_outside_the_container_are_untouched() {
        let input = "android {\n    release {\n    }\n}";
        assert_eq!(build_types(input, &mut ctx()), input);
    }

    #[test]
    fn minify_enabled_inside_build_types() {
        assert_eq!(
            is_prefix_blocks("buildTypes {\n    release {\n        minifyEnabled false\n    }\n}", &mut ctx()),
            "buildTypes {\n    release {\n        isMinifyEnabled = false\n    }\n}"
        );
    }

    #[test]
    fn data_binding_enabled() {
        assert_eq!(
            is_prefix_blocks("dataBinding {\n    enabled true\n}", &mut ctx()),
            "dataBinding {\n    isEnabled = true\n}"
        );
    }

    #[test]
    fn enabled_outside_its_block_is_untouched() {
        let input = "someFeature {\n    enabled true\n}";
        assert_eq!(is_prefix_blocks(input, &mut ctx()), input);
    }

    #[test]
    fn transitive_is_renamed_anywhere() {
        assert_eq!(
            is_prefix_blocks("    transitive = true", &mut ctx()),
            "    isTransitive = true"
        );
    }

    #[test]
    fn is_prefix_rewrite_is_stable() {
        let once = is_prefix_blocks("dataBinding {\n    enabled true\n}", &mut ctx());
        assert_eq!(is_prefix_blocks(&once, &mut ctx()), once);
    }
}
