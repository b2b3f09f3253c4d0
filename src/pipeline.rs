//! The conversion pipeline.
//!
//! A conversion is a fold of the full rule catalog over one owned text
//! buffer: each rule receives the previous rule's output and returns a new
//! document. The catalog order is part of the contract — several rules only
//! produce correct output once earlier rules have normalized quoting,
//! collection literals, or parenthesization — so the order lives in one place
//! (`rules::catalog`) as inspectable data rather than a call chain.
//!
//! The only cross-rule state is the non-literal-version flag, carried on a
//! per-call [`Context`]. Nothing is global, so independent documents can be
//! converted concurrently and the caller merges flags however it likes.

use crate::rules;

/// Mutable per-conversion state threaded through every rule.
#[derive(Debug, Default)]
pub struct Context {
    /// Set when an SDK-version style value could not be read as an integer
    /// literal (e.g. a Groovy ext variable). Advisory only.
    pub non_literal_version: bool,
}

/// One named rewrite step. Non-matching input passes through unchanged;
/// rules never fail.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&str, &mut Context) -> String,
}

/// The result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The rewritten document.
    pub text: String,
    /// True when any rule saw a version value it could not safely type.
    pub non_literal_version: bool,
}

/// Converts one Groovy-DSL build file to the Kotlin DSL.
pub fn convert(input: &str) -> Conversion {
    let mut ctx = Context::default();
    let mut text = input.to_string();

    for rule in rules::catalog() {
        text = (rule.apply)(&text, &mut ctx);
    }

    Conversion {
        text,
        non_literal_version: ctx.non_literal_version,
    }
}
