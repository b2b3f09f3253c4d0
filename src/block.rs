//! Brace-balanced block scanning.
//!
//! Several rules only apply inside a named `keyword { ... }` block. This
//! module locates such blocks by matching an opener pattern whose final
//! character is `{`, then scanning forward with a depth counter until the
//! matching `}`. Rewrites are applied in descending offset order so earlier
//! spans stay valid, the same discipline used for position-aware replacement
//! elsewhere in the tool.
//!
//! The scan is not quote-aware: a brace inside a string literal counts as a
//! real brace. That is a documented limitation of the conversion approach,
//! not something this module papers over.

use regex::Regex;

/// A located block: the opener match plus the balanced brace pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where the opener match begins.
    pub start: usize,
    /// Byte offset of the opening `{`.
    pub open: usize,
    /// Byte offset one past the closing `}` (or the document end when the
    /// input is unbalanced).
    pub end: usize,
    /// Byte range of the inner body, exclusive of both braces.
    pub body_start: usize,
    pub body_end: usize,
}

impl Span {
    /// The inner body text, exclusive of the delimiting braces.
    pub fn body<'a>(&self, document: &'a str) -> &'a str {
        &document[self.body_start..self.body_end]
    }
}

/// Finds every block introduced by `opener` in `document`.
///
/// `opener` must match a token sequence ending in `{`, e.g. `dependencies\s*\{`.
/// For each non-overlapping match, the closing brace is found by counting
/// depth from the opener's `{`. If depth never returns to zero the block
/// degrades to ending at the document end rather than scanning past it.
pub fn find_blocks(document: &str, opener: &Regex) -> Vec<Span> {
    let bytes = document.as_bytes();
    let mut spans = Vec::new();

    for m in opener.find_iter(document) {
        // The opener pattern ends in `{`, so the brace sits at the last byte
        // of the match.
        let open = m.end() - 1;
        if bytes.get(open) != Some(&b'{') {
            continue;
        }

        let mut depth = 0usize;
        let mut close = None;
        for (i, &b) in bytes.iter().enumerate().skip(open) {
            match b {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }

        let (body_end, end) = match close {
            Some(i) => (i, i + 1),
            // Unbalanced input: treat the document end as the block end.
            None => (bytes.len(), bytes.len()),
        };

        spans.push(Span {
            start: m.start(),
            open,
            end,
            body_start: open + 1,
            body_end,
        });
    }

    spans
}

/// Rewrites the body of every `opener` block through `transform`.
///
/// Spans are collected against the original document and replaced from the
/// last match to the first, so that rewriting one block never invalidates the
/// offsets of the blocks before it. A document with no opener match is
/// returned unchanged.
pub fn rewrite_blocks<F>(document: &str, opener: &Regex, mut transform: F) -> String
where
    F: FnMut(&str) -> String,
{
    let spans = find_blocks(document, opener);
    if spans.is_empty() {
        return document.to_string();
    }

    let mut result = document.to_string();
    for span in spans.iter().rev() {
        let new_body = transform(span.body(document));
        result.replace_range(span.body_start..span.body_end, &new_body);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opener(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn finds_flat_block() {
        let doc = "buildTypes { release }";
        let spans = find_blocks(doc, &opener(r"buildTypes\s*\{"));
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].body(doc), " release ");
        assert_eq!(spans[0].end, doc.len());
    }

    #[test]
    fn finds_block_with_one_nested_pair() {
        let doc = "android { defaultConfig { minSdk 21 } }\ntail";
        let spans = find_blocks(doc, &opener(r"android\s*\{"));
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].body(doc), " defaultConfig { minSdk 21 } ");
    }

    #[test]
    fn finds_block_with_three_nested_levels() {
        let doc = "outer { a { b { c { x } } } }";
        let spans = find_blocks(doc, &opener(r"outer\s*\{"));
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].body(doc), " a { b { c { x } } } ");
        assert_eq!(spans[0].end, doc.len());
    }

    #[test]
    fn unbalanced_block_degrades_to_document_end() {
        let doc = "deps { implementation(\"x\")";
        let spans = find_blocks(doc, &opener(r"deps\s*\{"));
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].body_end, doc.len());
        assert_eq!(spans[0].body(doc), " implementation(\"x\")");
    }

    #[test]
    fn no_match_returns_input_unchanged() {
        let doc = "plugins { id(\"java\") }";
        let out = rewrite_blocks(doc, &opener(r"dependencies\s*\{"), |body| {
            format!("CHANGED{}", body)
        });
        assert_eq!(out, doc);
    }

    #[test]
    fn rewrites_single_body() {
        let doc = "buildTypes {\n    release {\n    }\n}";
        let out = rewrite_blocks(doc, &opener(r"buildTypes\s*\{"), |body| {
            body.replace("release", "debug")
        });
        assert_eq!(out, "buildTypes {\n    debug {\n    }\n}");
    }

    #[test]
    fn rewrites_two_sibling_blocks_back_to_front() {
        // Growing the second block must not corrupt the first block's span.
        let doc = "sourceSets { a }\nmiddle\nsourceSets { b }";
        let out = rewrite_blocks(doc, &opener(r"sourceSets\s*\{"), |body| {
            format!(" wrapped({}) ", body.trim())
        });
        assert_eq!(out, "sourceSets { wrapped(a) }\nmiddle\nsourceSets { wrapped(b) }");
    }

    #[test]
    fn nested_braces_inside_body_survive_rewrite() {
        let doc = "android { buildTypes { release { minifyEnabled true } } }";
        let out = rewrite_blocks(doc, &opener(r"android\s*\{"), |body| body.to_uppercase());
        assert!(out.starts_with("android {"));
        assert!(out.ends_with('}'));
        assert!(out.contains("MINIFYENABLED TRUE"));
    }
}
