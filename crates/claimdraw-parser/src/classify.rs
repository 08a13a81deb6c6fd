//! Maps descriptive phrases to symbol categories.

use log::debug;

use claimdraw_core::semantic::Category;

use crate::rules::ClassifierRules;

/// Ordered, case-insensitive substring classifier.
///
/// Triggers are lowercased once at construction. Classification walks the
/// rules in priority order and stops at the first trigger contained in the
/// normalized phrase; a phrase matching nothing is [`Category::Default`].
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<(Category, Vec<String>)>,
}

impl Classifier {
    pub fn new(rules: &ClassifierRules) -> Self {
        let rules = rules
            .iter()
            .map(|rule| {
                let triggers = rule
                    .triggers()
                    .iter()
                    .map(|trigger| normalize(trigger))
                    .filter(|trigger| !trigger.is_empty())
                    .collect();
                (rule.category(), triggers)
            })
            .collect();
        Self { rules }
    }

    /// Classify a descriptive phrase. Total and deterministic.
    pub fn classify(&self, phrase: &str) -> Category {
        match self.matching_trigger(phrase) {
            Some((category, trigger)) => {
                debug!(phrase, trigger, category:% = category; "Classified component");
                category
            }
            None => {
                debug!(phrase; "No trigger matched, using default category");
                Category::Default
            }
        }
    }

    /// The first rule and trigger matching `phrase`, if any.
    pub fn matching_trigger(&self, phrase: &str) -> Option<(Category, &str)> {
        let phrase = normalize(phrase);
        self.rules.iter().find_map(|(category, triggers)| {
            triggers
                .iter()
                .find(|trigger| phrase.contains(trigger.as_str()))
                .map(|trigger| (*category, trigger.as_str()))
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ClassifierRules::default())
    }
}

/// Lowercase and collapse runs of whitespace to a single space.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
