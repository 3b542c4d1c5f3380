//! TextPatcher: apply an ordered rule set to an in-memory document.
//!
//! The patcher is a pure function of the input text and the rule table. It
//! consults no external state, raises no errors, and runs every rule in
//! sequence over the same buffer; a rule whose pattern is absent is a no-op
//! recorded as a skip. Applying the full rule set a second time produces no
//! further change, which is what allows the driver to be re-run safely
//! against files it has already touched.

use crate::event::{RuleEvent, RuleOutcome};
use crate::rule::RuleSet;

/// Result of running a rule set over one document buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "PatchOutcome carries the rewritten content"]
pub struct PatchOutcome {
    /// The (possibly unmodified) document text after all rules ran.
    pub content: String,
    /// One event per rule, in rule order.
    pub events: Vec<RuleEvent>,
}

impl PatchOutcome {
    /// True when at least one rule rewrote the buffer.
    pub fn changed(&self) -> bool {
        self.events.iter().any(RuleEvent::applied)
    }
}

/// Apply every rule in `rules` to `content`, in order.
///
/// Rules run unconditionally and independently: an earlier rule skipping does
/// not short-circuit later ones, and each rule sees the buffer as left by its
/// predecessors.
pub fn apply_rules(content: &str, rules: &RuleSet) -> PatchOutcome {
    let mut buffer = content.to_string();
    let mut events = Vec::with_capacity(rules.len());

    for rule in rules {
        let outcome = match rule.apply(&buffer) {
            Some((rewritten, occurrences)) => {
                buffer = rewritten;
                RuleOutcome::Applied { occurrences }
            }
            None => RuleOutcome::Skipped,
        };
        events.push(RuleEvent {
            rule: rule.label().to_string(),
            outcome,
        });
    }

    PatchOutcome {
        content: buffer,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn two_rule_set() -> RuleSet {
        RuleSet::new(vec![
            Rule::ReplaceAll {
                label: "old-to-mid".to_string(),
                search: "old".to_string(),
                replace: "mid".to_string(),
            },
            Rule::ReplaceAll {
                label: "mid-to-new".to_string(),
                search: "mid".to_string(),
                replace: "new".to_string(),
            },
        ])
    }

    #[test]
    fn test_rules_run_in_order_on_same_buffer() {
        // The second rule sees the first rule's output.
        let outcome = apply_rules("old text", &two_rule_set());
        assert_eq!(outcome.content, "new text");
        assert!(outcome.events[0].applied());
        assert!(outcome.events[1].applied());
    }

    #[test]
    fn test_skip_does_not_short_circuit() {
        let outcome = apply_rules("mid text", &two_rule_set());
        assert_eq!(outcome.content, "new text");
        assert_eq!(outcome.events[0].outcome, RuleOutcome::Skipped);
        assert!(outcome.events[1].applied());
    }

    #[test]
    fn test_unchanged_buffer_reports_no_change() {
        let outcome = apply_rules("nothing to do", &two_rule_set());
        assert_eq!(outcome.content, "nothing to do");
        assert!(!outcome.changed());
        assert_eq!(outcome.events.len(), 2);
    }

    #[test]
    fn test_events_follow_rule_order() {
        let outcome = apply_rules("", &two_rule_set());
        assert_eq!(outcome.events[0].rule, "old-to-mid");
        assert_eq!(outcome.events[1].rule, "mid-to-new");
    }
}
