//! Document-type rule registry.
//!
//! Maps a lower-cased document-type key to its required-keyword list and any
//! extra type-specific rules. The table comes from configuration, so a new
//! document type is a registry entry, not a code branch.

use std::collections::BTreeMap;

use crate::models::config::{TypeProfile, TypeRule};
use crate::models::result::{ExtractedField, FieldValue};

/// Outcome of one type-specific rule.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    /// Name of the field the rule attaches.
    pub field: String,
    /// The attached field.
    pub value: ExtractedField,
    /// Flag to raise, when the rule's condition is not met.
    pub flag: Option<String>,
}

/// Registry of per-type profiles.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    profiles: BTreeMap<String, TypeProfile>,
}

impl RuleRegistry {
    /// Build a registry from a configured type table. Keys are lower-cased
    /// so lookups with any input casing resolve consistently.
    pub fn new(doc_types: &BTreeMap<String, TypeProfile>) -> Self {
        let profiles = doc_types
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.clone()))
            .collect();
        Self { profiles }
    }

    /// Profile for a document type, if one is registered.
    pub fn profile(&self, doc_type: &str) -> Option<&TypeProfile> {
        self.profiles.get(doc_type)
    }

    /// Required keywords for a document type; empty for unknown types.
    pub fn required_keywords(&self, doc_type: &str) -> &[String] {
        self.profile(doc_type)
            .map(|p| p.required_keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Run the type-specific rules for a document type over normalized text.
    pub fn run_rules(&self, doc_type: &str, text: &str) -> Vec<RuleOutcome> {
        let Some(profile) = self.profile(doc_type) else {
            return Vec::new();
        };

        profile
            .rules
            .iter()
            .map(|rule| apply_rule(rule, text))
            .collect()
    }
}

fn apply_rule(rule: &TypeRule, text: &str) -> RuleOutcome {
    match rule {
        TypeRule::KeywordPresence {
            field,
            keywords,
            present_value,
            confidence,
            missing_flag,
        } => {
            let text_lc = text.to_lowercase();
            let found = keywords.iter().any(|kw| text_lc.contains(&kw.to_lowercase()));

            if found {
                RuleOutcome {
                    field: field.clone(),
                    value: ExtractedField::new(
                        FieldValue::Text(present_value.clone()),
                        *confidence,
                    ),
                    flag: None,
                }
            } else {
                RuleOutcome {
                    field: field.clone(),
                    value: ExtractedField::absent(),
                    flag: Some(missing_flag.clone()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::DssConfig;
    use pretty_assertions::assert_eq;

    fn registry() -> RuleRegistry {
        RuleRegistry::new(&DssConfig::default().doc_types)
    }

    #[test]
    fn test_required_keywords_lookup() {
        let reg = registry();
        assert_eq!(reg.required_keywords("affidavit").len(), 5);
        assert!(reg.required_keywords("unheard_of_type").is_empty());
    }

    #[test]
    fn test_fire_safety_authority_present() {
        let reg = registry();
        let outcomes = reg.run_rules(
            "fire_safety_certificate",
            "issued by the fire department of pune",
        );

        assert_eq!(outcomes.len(), 1);
        let outcome = &outcomes[0];
        assert_eq!(outcome.field, "issuing_authority");
        assert_eq!(outcome.value.value, FieldValue::Text("present".to_string()));
        assert_eq!(outcome.value.confidence, 0.85);
        assert_eq!(outcome.flag, None);
    }

    #[test]
    fn test_fire_safety_authority_missing() {
        let reg = registry();
        let outcomes = reg.run_rules("fire_safety_certificate", "just a plain certificate");

        assert_eq!(outcomes.len(), 1);
        let outcome = &outcomes[0];
        assert_eq!(outcome.value.value, FieldValue::Null);
        assert_eq!(outcome.value.confidence, 0.0);
        assert_eq!(outcome.flag.as_deref(), Some("no_issuing_authority_found"));
    }

    #[test]
    fn test_types_without_rules_produce_nothing() {
        let reg = registry();
        assert!(reg.run_rules("affidavit", "sworn before the notary").is_empty());
        assert!(reg.run_rules("unknown", "whatever").is_empty());
    }

    #[test]
    fn test_registry_extension_via_config() {
        let mut config = DssConfig::default();
        config.doc_types.insert(
            "affiliation_letter".to_string(),
            TypeProfile {
                required_keywords: vec!["affiliation".to_string(), "university".to_string()],
                rules: vec![TypeRule::KeywordPresence {
                    field: "university_seal".to_string(),
                    keywords: vec!["seal".to_string()],
                    present_value: "present".to_string(),
                    confidence: 0.8,
                    missing_flag: "no_university_seal_found".to_string(),
                }],
            },
        );

        let reg = RuleRegistry::new(&config.doc_types);
        let outcomes = reg.run_rules("affiliation_letter", "bearing the official seal");
        assert_eq!(outcomes[0].field, "university_seal");
        assert_eq!(outcomes[0].flag, None);
    }
}
