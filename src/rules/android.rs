//! Android-plugin DSL rewrites.

use crate::pipeline::Context;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static VARIANT_FILTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)variantFilter\s*\{\s*(\w+\s*->)").unwrap());

/// `variantFilter { variant -> ... }` has no mechanical Kotlin equivalent;
/// the lambda parameter is commented out with a migration note so the file
/// still parses and the author sees what is left to do.
pub fn variant_filter(input: &str, _ctx: &mut Context) -> String {
    VARIANT_FILTER_RE
        .replace_all(input, |caps: &Captures| {
            format!(
                "variantFilter {{ // {} - TODO Manually replace '{}' variable with this, and setIgnore(true) with ignore = true\n",
                &caps[1], &caps[1]
            )
        })
        .into_owned()
}

static BUILD_CONFIG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(buildConfigField|resValue|flavorDimensions|exclude|java\.srcDir)\s+(".*")"#)
        .unwrap()
});

/// Quoted-argument Android calls gain parentheses:
/// `buildConfigField "String", "name", "value"` ->
/// `buildConfigField("String", "name", "value")`.
pub fn build_config_calls(input: &str, _ctx: &mut Context) -> String {
    BUILD_CONFIG_RE.replace_all(input, "$1($2)").into_owned()
}

/// `coreLibraryDesugaringEnabled` carries the `is` prefix in Kotlin.
pub fn core_library_desugaring(input: &str, _ctx: &mut Context) -> String {
    input.replace("coreLibraryDesugaringEnabled", "isCoreLibraryDesugaringEnabled")
}

static SDK_CALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(compileSdkVersion|minSdkVersion|targetSdkVersion|consumerProguardFiles)[ \t]*([^\s(][^\s]*)(.*)",
    )
    .unwrap()
});

/// `compileSdkVersion 28` -> `compileSdkVersion(28)`.
///
/// The value may be any word, since it is often a Groovy ext variable; a
/// value that does not read as an integer literal raises the per-run
/// non-literal flag so the caller can print a hint. Values already in
/// parentheses are left alone.
pub fn sdk_version_calls(input: &str, ctx: &mut Context) -> String {
    SDK_CALL_RE
        .replace_all(input, |caps: &Captures| {
            if caps[2].parse::<i64>().is_err() {
                ctx.non_literal_version = true;
            }
            // Group 3 keeps a trailing comment in place.
            format!("{}({}){}", &caps[1], &caps[2], &caps[3])
        })
        .into_owned()
}

static ASSIGN_RE: Lazy<Regex> = Lazy::new(|| {
    let signing = "keyAlias|keyPassword|storeFile|storePassword";
    let default_config =
        "applicationId|minSdk|targetSdk|versionCode|versionName|testInstrumentationRunner|namespace";
    let other = "multiDexEnabled|correctErrorTypes|javaMaxHeapSize|jumboMode|dimension|useSupportLibrary|kotlinCompilerExtensionVersion|isCoreLibraryDesugaringEnabled";
    let binding = "dataBinding|viewBinding";
    // The class after the keyword refuses `{` (a configuration block) and
    // the letters of "Version", which keeps `compileSdk` from eating into
    // `compileSdkVersion(...)`.
    Regex::new(&format!(
        r"\b(compileSdk|{default_config}|{signing}|{other}|{binding})[ \t]*([^\{{Version\s].*)"
    ))
    .unwrap()
});

/// Property-style settings become assignments: `versionCode 4` ->
/// `versionCode = 4`, `applicationId "com.example"` ->
/// `applicationId = "com.example"`. Already-assigned lines re-match but
/// rewrite to themselves.
pub fn assignment_equals(input: &str, _ctx: &mut Context) -> String {
    ASSIGN_RE
        .replace_all(input, |caps: &Captures| {
            let tokens: Vec<&str> = caps[0].split_whitespace().collect();
            if tokens.len() < 2 {
                return caps[0].to_string();
            }
            format!("{} = {}", tokens[0], tokens[tokens.len() - 1])
        })
        .into_owned()
}

static COMPATIBILITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(sourceCompatibility|targetCompatibility).*").unwrap());

/// `sourceCompatibility = "1.8"` and `sourceCompatibility JavaVersion.VERSION_1_8`
/// both become `sourceCompatibility = JavaVersion.VERSION_1_8`.
pub fn java_compatibility(input: &str, _ctx: &mut Context) -> String {
    COMPATIBILITY_RE
        .replace_all(input, |caps: &Captures| {
            let cleaned = caps[0].replace('"', "");
            let tokens: Vec<&str> = cleaned.split_whitespace().collect();
            if tokens.len() < 2 {
                return caps[0].to_string();
            }
            let value = tokens[tokens.len() - 1];
            if value.contains("JavaVersion") {
                format!("{} = {}", tokens[0], value)
            } else {
                format!("{} = JavaVersion.VERSION_{}", tokens[0], value.replace('.', "_"))
            }
        })
        .into_owned()
}

static PROGUARD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"proguardFiles\s+(.*)").unwrap());

/// `proguardFiles getDefaultProguardFile("a.txt"), "rules.pro"` ->
/// `setProguardFiles(listOf(getDefaultProguardFile("a.txt"), "rules.pro"))`.
pub fn proguard_files(input: &str, _ctx: &mut Context) -> String {
    PROGUARD_RE
        .replace_all(input, "setProguardFiles(listOf($1))")
        .into_owned()
}

static SIGNING_CONFIG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"signingConfig\s+signingConfigs\.(\w+)").unwrap());

/// `signingConfig signingConfigs.release` ->
/// `signingConfig = signingConfigs.getByName("release")`.
pub fn signing_config_get_by_name(input: &str, _ctx: &mut Context) -> String {
    SIGNING_CONFIG_RE
        .replace_all(input, "signingConfig = signingConfigs.getByName(\"$1\")")
        .into_owned()
}

static BUILD_FEATURES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(dataBinding|viewBinding|aidl|buildConfig|prefab|renderScript|resValues|shaders|compose)\s(false|true)",
    )
    .unwrap()
});

/// Feature toggles inside `buildFeatures { }` become assignments:
/// `compose true` -> `compose = true`.
pub fn build_features(input: &str, _ctx: &mut Context) -> String {
    BUILD_FEATURES_RE.replace_all(input, "$1 = $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::default()
    }

    #[test]
    fn variant_filter_parameter_is_commented_out() {
        let out = variant_filter("variantFilter { variant ->\n    something\n}", &mut ctx());
        assert!(out.starts_with("variantFilter { // variant ->"));
        assert!(out.contains("something"));
    }

    #[test]
    fn variant_filter_conversion_is_stable() {
        let once = variant_filter("variantFilter { variant ->\n}", &mut ctx());
        assert_eq!(variant_filter(&once, &mut ctx()), once);
    }

    #[test]
    fn build_config_field_gains_parentheses() {
        assert_eq!(
            build_config_calls(
                "buildConfigField \"String\", \"FOO\", \"\\\"bar\\\"\"",
                &mut ctx()
            ),
            "buildConfigField(\"String\", \"FOO\", \"\\\"bar\\\"\")"
        );
        assert_eq!(
            build_config_calls("java.srcDir \"src/test/kotlin\"", &mut ctx()),
            "java.srcDir(\"src/test/kotlin\")"
        );
    }

    #[test]
    fn literal_sdk_version_leaves_flag_unset() {
        let mut context = ctx();
        assert_eq!(
            sdk_version_calls("compileSdkVersion 28", &mut context),
            "compileSdkVersion(28)"
        );
        assert!(!context.non_literal_version);
    }

    #[test]
    fn variable_sdk_version_sets_flag() {
        let mut context = ctx();
        assert_eq!(
            sdk_version_calls("minSdkVersion rootProject.sdkVersion", &mut context),
            "minSdkVersion(rootProject.sdkVersion)"
        );
        assert!(context.non_literal_version);
    }

    #[test]
    fn parenthesized_sdk_version_is_untouched() {
        let mut context = ctx();
        let input = "compileSdkVersion(28)";
        assert_eq!(sdk_version_calls(input, &mut context), input);
        assert!(!context.non_literal_version);
    }

    #[test]
    fn settings_become_assignments() {
        assert_eq!(assignment_equals("versionCode 4", &mut ctx()), "versionCode = 4");
        assert_eq!(
            assignment_equals("applicationId \"com.example.app\"", &mut ctx()),
            "applicationId = \"com.example.app\""
        );
        assert_eq!(
            assignment_equals("keyAlias \"alias\"", &mut ctx()),
            "keyAlias = \"alias\""
        );
    }

    #[test]
    fn sdk_version_call_is_not_reassigned() {
        // `compileSdk` must not eat into the converted call form.
        let input = "compileSdkVersion(28)";
        assert_eq!(assignment_equals(input, &mut ctx()), input);
    }

    #[test]
    fn assignment_rewrite_is_stable() {
        let once = assignment_equals("versionName \"1.0\"", &mut ctx());
        assert_eq!(once, "versionName = \"1.0\"");
        assert_eq!(assignment_equals(&once, &mut ctx()), once);
    }

    #[test]
    fn quoted_compatibility_becomes_java_version() {
        assert_eq!(
            java_compatibility("sourceCompatibility = \"1.8\"", &mut ctx()),
            "sourceCompatibility = JavaVersion.VERSION_1_8"
        );
    }

    #[test]
    fn java_version_compatibility_passes_through() {
        assert_eq!(
            java_compatibility("targetCompatibility JavaVersion.VERSION_11", &mut ctx()),
            "targetCompatibility = JavaVersion.VERSION_11"
        );
    }

    #[test]
    fn proguard_list_is_wrapped() {
        assert_eq!(
            proguard_files(
                "proguardFiles getDefaultProguardFile(\"proguard-android.txt\"), \"proguard-rules.pro\"",
                &mut ctx()
            ),
            "setProguardFiles(listOf(getDefaultProguardFile(\"proguard-android.txt\"), \"proguard-rules.pro\"))"
        );
    }

    #[test]
    fn signing_config_reference_uses_get_by_name() {
        assert_eq!(
            signing_config_get_by_name("signingConfig signingConfigs.release", &mut ctx()),
            "signingConfig = signingConfigs.getByName(\"release\")"
        );
    }

    #[test]
    fn desugaring_toggle_gains_is_prefix() {
        assert_eq!(
            core_library_desugaring("coreLibraryDesugaringEnabled = true", &mut ctx()),
            "isCoreLibraryDesugaringEnabled = true"
        );
    }

    #[test]
    fn build_feature_toggles_become_assignments() {
        assert_eq!(build_features("compose true", &mut ctx()), "compose = true");
        assert_eq!(
            build_features("dataBinding false", &mut ctx()),
            "dataBinding = false"
        );
    }
}
