//! HTML Retrofit: idempotent mobile-responsiveness fixes for legacy HTML
//!
//! A small patching tool built on literal substring operations: insert a
//! viewport meta tag anchored on a page's charset declaration, and rewrite a
//! fixed set of jQuery script references (HTTP to HTTPS, or replacing an
//! outdated duplicate with a comment).
//!
//! # Architecture
//!
//! Everything compiles down to two primitives in [`rule`]: document-wide
//! literal replacement and guarded line insertion after an exact anchor.
//! [`patch::apply_rules`] runs an ordered [`rule::RuleSet`] over an in-memory
//! buffer as a pure function, and [`process`] drives that over an ordered
//! file list with conditional write-back. There is deliberately no HTML
//! parsing and no pattern engine; the edits are exact literals.
//!
//! # Idempotence
//!
//! Applying the full rule set twice yields the same result as applying it
//! once. [`rule::RuleSet::validate`] checks the structural preconditions
//! (a replacement never contains its own search text; an inserted line
//! always trips its guard), so the driver can be re-run safely against
//! files it has already touched.
//!
//! # Example
//!
//! ```
//! use html_retrofit::{mobile, patch};
//!
//! let page = r#"<meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />"#;
//! let outcome = patch::apply_rules(page, &mobile::retrofit_rules());
//! assert!(outcome.content.contains("viewport"));
//! ```

pub mod event;
pub mod mobile;
pub mod patch;
pub mod process;
pub mod rule;

// Re-exports
pub use event::{FileOutcome, FileReport, RuleEvent, RuleOutcome};
pub use patch::{apply_rules, PatchOutcome};
pub use process::{apply_files, check_files, ProcessError};
pub use rule::{Rule, RuleSet, ValidationError, ValidationIssue};
