//! gradle2kts library for converting Gradle Groovy-DSL build files to the
//! Kotlin DSL.
//!
//! This library provides programmatic access to the conversion
//! functionality. The core workflow involves three phases:
//!
//! 1. **Discovery**: Collect `build.gradle` files under a root
//! 2. **Conversion**: Fold the ordered rule catalog over each document
//! 3. **Persistence**: Write each result next to its input as `.kts`
//!
//! # Example
//!
//! ```
//! let conversion = gradle2kts::convert("apply plugin: 'kotlin-android'");
//! assert_eq!(conversion.text, "apply(plugin = \"kotlin-android\")");
//! assert!(!conversion.non_literal_version);
//! ```

pub mod block;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod writer;

// Re-export commonly used types at crate root
pub use pipeline::{Context, Conversion, Rule, convert};
