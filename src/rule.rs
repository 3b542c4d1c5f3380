use std::fmt;

/// A single literal text transformation.
///
/// Rules are deliberately restricted to plain substring operations. The
/// transformations this tool performs are exact literal substitutions, so a
/// pattern engine would only obscure the idempotence argument: a rule either
/// finds its literal text or it does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Replace every occurrence of `search` with `replace`, document-wide.
    ReplaceAll {
        label: String,
        search: String,
        replace: String,
    },
    /// Insert `line` on a new line after every occurrence of the exact
    /// `anchor`, unless `guard` already occurs anywhere in the document.
    ///
    /// When the anchor is absent the rule is a silent no-op even if the guard
    /// is missing too.
    InsertLineAfter {
        label: String,
        guard: String,
        anchor: String,
        line: String,
    },
}

impl Rule {
    /// Human-readable label used in events and console output.
    pub fn label(&self) -> &str {
        match self {
            Rule::ReplaceAll { label, .. } => label,
            Rule::InsertLineAfter { label, .. } => label,
        }
    }

    /// Apply this rule to a document buffer.
    ///
    /// Returns the rewritten buffer and the number of occurrences touched,
    /// or `None` when the rule's pattern is absent (or its guard suppressed
    /// the insertion). A `None` result always means the buffer is unchanged.
    pub fn apply(&self, content: &str) -> Option<(String, usize)> {
        match self {
            Rule::ReplaceAll {
                search, replace, ..
            } => {
                let occurrences = content.matches(search.as_str()).count();
                if occurrences == 0 {
                    return None;
                }
                Some((content.replace(search.as_str(), replace), occurrences))
            }
            Rule::InsertLineAfter {
                guard,
                anchor,
                line,
                ..
            } => {
                if content.contains(guard.as_str()) {
                    return None;
                }
                let occurrences = content.matches(anchor.as_str()).count();
                if occurrences == 0 {
                    return None;
                }
                let expanded = format!("{anchor}\n{line}");
                Some((content.replace(anchor.as_str(), &expanded), occurrences))
            }
        }
    }
}

/// An ordered sequence of rules.
///
/// Order matters: later rules may depend on earlier rules having already run
/// (the built-in set inserts an HTTPS jQuery reference before stripping the
/// outdated duplicate HTTP reference).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check the structural preconditions every rule must satisfy for the
    /// full set to be idempotent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if self.rules.is_empty() {
            issues.push(ValidationIssue::EmptyRuleSet);
        }

        for rule in &self.rules {
            if rule.label().trim().is_empty() {
                issues.push(ValidationIssue::MissingField {
                    rule_label: None,
                    field: "label",
                });
            }
            let label = || Some(rule.label().to_string());

            match rule {
                Rule::ReplaceAll {
                    search, replace, ..
                } => {
                    if search.is_empty() {
                        issues.push(ValidationIssue::MissingField {
                            rule_label: label(),
                            field: "search",
                        });
                    } else if replace.contains(search.as_str()) {
                        // A replacement containing its own search text would
                        // fire again on every run.
                        issues.push(ValidationIssue::BreaksIdempotence {
                            rule_label: label(),
                            message: "replacement text contains the search text".to_string(),
                        });
                    }
                }
                Rule::InsertLineAfter {
                    guard,
                    anchor,
                    line,
                    ..
                } => {
                    if guard.is_empty() {
                        issues.push(ValidationIssue::MissingField {
                            rule_label: label(),
                            field: "guard",
                        });
                    }
                    if anchor.is_empty() {
                        issues.push(ValidationIssue::MissingField {
                            rule_label: label(),
                            field: "anchor",
                        });
                    }
                    if line.is_empty() {
                        issues.push(ValidationIssue::MissingField {
                            rule_label: label(),
                            field: "line",
                        });
                    } else if !guard.is_empty() && !line.contains(guard.as_str()) {
                        // The inserted line must trip the guard on the next
                        // run, otherwise every run inserts another copy.
                        issues.push(ValidationIssue::BreaksIdempotence {
                            rule_label: label(),
                            message: "inserted line does not contain the guard text".to_string(),
                        });
                    }
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone)]
pub enum ValidationIssue {
    EmptyRuleSet,
    MissingField {
        rule_label: Option<String>,
        field: &'static str,
    },
    BreaksIdempotence {
        rule_label: Option<String>,
        message: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyRuleSet => write!(f, "rule set contains no rules"),
            ValidationIssue::MissingField { rule_label, field } => match rule_label {
                Some(label) => write!(f, "rule '{label}' missing required field '{field}'"),
                None => write!(f, "rule missing required field '{field}'"),
            },
            ValidationIssue::BreaksIdempotence {
                rule_label,
                message,
            } => match rule_label {
                Some(label) => write!(f, "rule '{label}' is not idempotent: {message}"),
                None => write!(f, "rule is not idempotent: {message}"),
            },
        }
    }
}
