//! The built-in mobile-responsiveness rule set.
//!
//! These are the exact literal edits needed to retrofit the legacy site
//! pages: add a viewport meta tag anchored on the page's charset declaration,
//! move the two self-hosted script references to HTTPS, and strip the stale
//! jQuery 1.3.2 reference that duplicates the CDN copy loaded above it.

use crate::rule::{Rule, RuleSet};

/// Exact charset declaration used as the insertion anchor. Attribute order
/// and quoting must match the pages byte-for-byte; a page with a different
/// charset spelling gets no viewport insertion.
pub const CHARSET_ANCHOR: &str =
    r#"<meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />"#;

/// Canonical viewport declaration inserted after [`CHARSET_ANCHOR`].
pub const VIEWPORT_TAG: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#;

const OLD_JQUERY: &str = "http://www.asiapacific.my/mobilehosting/durafloor/jquery.js";
const CDN_JQUERY: &str = "https://ajax.googleapis.com/ajax/libs/jquery/3.6.0/jquery.min.js";

const OLD_MOBILE_SCRIPT: &str =
    "http://www.asiapacific.my/mobilehosting/durafloor/mobileversion_encrypted.js";
const HTTPS_MOBILE_SCRIPT: &str =
    "https://www.asiapacific.my/mobilehosting/durafloor/mobileversion_encrypted.js";

const DUPLICATE_JQUERY: &str = "http://ajax.googleapis.com/ajax/libs/jquery/1.3.2/jquery.min.js";
const DUPLICATE_JQUERY_COMMENT: &str = "<!-- jQuery already loaded above -->";

/// The ten legacy pages the retrofit was written for, in processing order.
/// Used by the CLI as the default when no paths are given; the processor
/// itself takes any path list.
pub const DEFAULT_FILES: [&str; 10] = [
    "akirasport.html",
    "antistatic.html",
    "deluxecommercial.html",
    "duratilexlmarblin.html",
    "hetrogrnous.html",
    "profile.html",
    "r10.html",
    "rubberfloor.html",
    "uniquecommercial.html",
    "index1.html",
];

/// Build the retrofit rule set.
///
/// Order is load-bearing: the CDN jQuery reference is rewritten to HTTPS
/// before the duplicate 1.3.2 reference is replaced with a comment, so a page
/// carrying both ends up with exactly one live jQuery reference.
pub fn retrofit_rules() -> RuleSet {
    RuleSet::new(vec![
        Rule::InsertLineAfter {
            label: "viewport-meta".to_string(),
            guard: "viewport".to_string(),
            anchor: CHARSET_ANCHOR.to_string(),
            line: VIEWPORT_TAG.to_string(),
        },
        Rule::ReplaceAll {
            label: "jquery-cdn-https".to_string(),
            search: OLD_JQUERY.to_string(),
            replace: CDN_JQUERY.to_string(),
        },
        Rule::ReplaceAll {
            label: "mobile-script-https".to_string(),
            search: OLD_MOBILE_SCRIPT.to_string(),
            replace: HTTPS_MOBILE_SCRIPT.to_string(),
        },
        Rule::ReplaceAll {
            label: "jquery-duplicate".to_string(),
            search: DUPLICATE_JQUERY.to_string(),
            replace: DUPLICATE_JQUERY_COMMENT.to_string(),
        },
    ])
}
