//! Lexical tables that drive extraction.
//!
//! Everything the extractor knows about claim language lives here as data:
//! stop-words, the ordered classification rules and the connective-phrase
//! vocabulary. All of it can be overridden through [`ExtractConfig`] without
//! touching the extraction code.
//!
//! ```toml
//! max_phrase_words = 5
//!
//! [[classifier]]
//! category = "display"
//! triggers = ["display", "screen", "touchscreen"]
//!
//! [[connectives]]
//! phrase = "electrically coupled to"
//! label = "Electrical"
//! style = "solid"
//! ```

use serde::Deserialize;

use claimdraw_core::semantic::{Category, LineStyle};

/// One row of the classification table: every trigger maps to `category`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRule {
    category: Category,
    triggers: Vec<String>,
}

impl CategoryRule {
    /// Create a rule mapping each trigger to `category`.
    pub fn new<I, S>(category: Category, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            triggers: triggers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }
}

/// Classification rules in priority order.
///
/// The first rule with a matching trigger decides the category, so order is
/// significant and kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ClassifierRules(Vec<CategoryRule>);

impl ClassifierRules {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self(rules)
    }

    /// Rules in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryRule> {
        self.0.iter()
    }
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self(vec![
            CategoryRule::new(
                Category::Display,
                ["display", "screen", "monitor", "output device"],
            ),
            CategoryRule::new(
                Category::Decision,
                ["decision", "logic gate", "comparator", "determination unit"],
            ),
            CategoryRule::new(
                Category::Io,
                [
                    "interface",
                    "sensor",
                    "input",
                    "detector",
                    "measurement device",
                    "keyboard",
                    "camera",
                    "microphone",
                ],
            ),
            CategoryRule::new(
                Category::Network,
                ["network", "node", "connection", "router", "gateway"],
            ),
            CategoryRule::new(
                Category::Storage,
                [
                    "database",
                    "memory",
                    "storage",
                    "data store",
                    "repository",
                    "cache",
                    "buffer",
                ],
            ),
            CategoryRule::new(
                Category::Process,
                [
                    "processor",
                    "processing",
                    "controller",
                    "control unit",
                    "control system",
                    "module",
                    "computing device",
                    "engine",
                ],
            ),
        ])
    }
}

/// A connective phrase that licenses a relationship between two mentions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Connective {
    phrase: String,
    label: String,
    #[serde(default)]
    style: LineStyle,
    /// The later mention is the source (`A configured to receive from B` is `B → A`).
    #[serde(default)]
    reversed: bool,
}

impl Connective {
    /// Create a connective drawn from the earlier mention to the later one.
    pub fn new(phrase: impl Into<String>, label: impl Into<String>, style: LineStyle) -> Self {
        Self {
            phrase: phrase.into(),
            label: label.into(),
            style,
            reversed: false,
        }
    }

    /// Draw this connective from the later mention to the earlier one.
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// The phrase split into lowercase words.
    pub fn words(&self) -> Vec<String> {
        self.phrase
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }
}

/// Connective phrases in priority order; the first one found wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ConnectiveVocabulary(Vec<Connective>);

impl ConnectiveVocabulary {
    pub fn new(connectives: Vec<Connective>) -> Self {
        Self(connectives)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connective> {
        self.0.iter()
    }
}

impl Default for ConnectiveVocabulary {
    fn default() -> Self {
        use LineStyle::{Dotted, Solid};

        Self(vec![
            Connective::new("in communication with", "Communication", Dotted),
            Connective::new("communicatively coupled", "Communication", Dotted),
            Connective::new("connected to", "Connection", Solid),
            Connective::new("coupled to", "Connection", Solid),
            Connective::new("configured to receive", "Data Flow", Dotted).reversed(),
            Connective::new("receives from", "Data Flow", Dotted).reversed(),
            Connective::new("configured to send", "Data Flow", Dotted),
            Connective::new("configured to transmit", "Data Flow", Dotted),
            Connective::new("transmits to", "Data Flow", Dotted),
            Connective::new("configured to process", "Processing", Dotted),
            Connective::new("configured to store", "Storage", Dotted),
            Connective::new("configured to control", "Control", Solid),
        ])
    }
}

const DEFAULT_STOP_WORDS: &[&str] = &[
    // Articles and quantifiers
    "a", "an", "the", "said", "each", "every", "any", "some", "all", "at", "least", "one", "more",
    "plurality", "respective",
    // Prepositions and conjunctions
    "of", "to", "from", "with", "by", "in", "on", "into", "onto", "for", "and", "or", "between",
    "via", "through", "within", "wherein", "whereby", "which", "that", "such", "as",
    // Claim verbs
    "is", "are", "be", "being", "has", "have", "having", "comprising", "comprises", "including",
    "includes", "configured", "adapted", "operable", "coupled", "connected", "operatively",
    "communicatively", "electrically", "further", "also", "receive", "receives", "send", "sends",
    "transmit", "transmits", "process", "processes", "store", "stores", "control", "controls",
    "provide", "provides", "generate", "generates",
    // Pronouns
    "it", "its", "their", "thereof",
];

fn default_max_phrase_words() -> usize {
    4
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_true() -> bool {
    true
}

/// Configuration for the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractConfig {
    /// Maximum number of words before a numeral considered part of its phrase.
    #[serde(default = "default_max_phrase_words")]
    max_phrase_words: usize,

    /// Words that never belong to a component name.
    #[serde(default = "default_stop_words")]
    stop_words: Vec<String>,

    /// Classification rules in priority order.
    #[serde(default)]
    classifier: ClassifierRules,

    /// Connective phrases in priority order.
    #[serde(default)]
    connectives: ConnectiveVocabulary,

    /// When no numbered components exist, number trigger-word occurrences
    /// 10, 12, 14, ...
    #[serde(default)]
    infer_unnumbered: bool,

    /// Collapse relationships with identical source, target and label.
    #[serde(default = "default_true")]
    dedupe_relationships: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_phrase_words: default_max_phrase_words(),
            stop_words: default_stop_words(),
            classifier: ClassifierRules::default(),
            connectives: ConnectiveVocabulary::default(),
            infer_unnumbered: false,
            dedupe_relationships: true,
        }
    }
}

impl ExtractConfig {
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Returns `true` if `word` is a stop-word, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words
            .iter()
            .any(|stop| stop.eq_ignore_ascii_case(word))
    }

    pub fn classifier(&self) -> &ClassifierRules {
        &self.classifier
    }

    pub fn connectives(&self) -> &ConnectiveVocabulary {
        &self.connectives
    }

    pub fn infer_unnumbered(&self) -> bool {
        self.infer_unnumbered
    }

    pub fn dedupe_relationships(&self) -> bool {
        self.dedupe_relationships
    }

    pub fn with_max_phrase_words(mut self, max_phrase_words: usize) -> Self {
        self.max_phrase_words = max_phrase_words;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierRules) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_connectives(mut self, connectives: ConnectiveVocabulary) -> Self {
        self.connectives = connectives;
        self
    }

    pub fn with_infer_unnumbered(mut self, infer: bool) -> Self {
        self.infer_unnumbered = infer;
        self
    }

    pub fn with_dedupe_relationships(mut self, dedupe: bool) -> Self {
        self.dedupe_relationships = dedupe;
        self
    }

    /// Check the configuration for values extraction cannot work with.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_phrase_words == 0 {
            return Err("max_phrase_words must be greater than zero".to_string());
        }
        if let Some(rule) = self
            .classifier
            .iter()
            .find(|rule| rule.triggers().iter().any(|t| t.trim().is_empty()))
        {
            return Err(format!(
                "classifier rule for `{}` has an empty trigger",
                rule.category()
            ));
        }
        if let Some(connective) = self.connectives.iter().find(|c| c.words().is_empty()) {
            return Err(format!(
                "connective labeled `{}` has an empty phrase",
                connective.label()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_priority_order() {
        let priority: Vec<_> = ClassifierRules::default()
            .iter()
            .map(CategoryRule::category)
            .collect();
        assert_eq!(
            priority,
            vec![
                Category::Display,
                Category::Decision,
                Category::Io,
                Category::Network,
                Category::Storage,
                Category::Process,
            ]
        );
    }

    #[test]
    fn test_stop_words_ignore_case() {
        let config = ExtractConfig::default();
        assert!(config.is_stop_word("The"));
        assert!(config.is_stop_word("wherein"));
        assert!(!config.is_stop_word("processor"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ExtractConfig = toml::from_str(
            r#"
            max_phrase_words = 6

            [[connectives]]
            phrase = "bolted to"
            label = "Mechanical"
            "#,
        )
        .unwrap();

        assert_eq!(config.max_phrase_words(), 6);
        assert_eq!(config.classifier(), &ClassifierRules::default());
        assert!(config.dedupe_relationships());

        let connectives: Vec<_> = config.connectives().iter().collect();
        assert_eq!(connectives.len(), 1);
        assert_eq!(connectives[0].style(), LineStyle::Solid);
        assert!(!connectives[0].is_reversed());
    }

    #[test]
    fn test_classifier_table_from_toml_keeps_order() {
        let config: ExtractConfig = toml::from_str(
            r#"
            [[classifier]]
            category = "storage"
            triggers = ["memory"]

            [[classifier]]
            category = "process"
            triggers = ["memory controller"]
            "#,
        )
        .unwrap();

        let priority: Vec<_> = config
            .classifier()
            .iter()
            .map(CategoryRule::category)
            .collect();
        assert_eq!(priority, vec![Category::Storage, Category::Process]);
    }

    #[test]
    fn test_validate() {
        assert!(ExtractConfig::default().validate().is_ok());
        assert!(
            ExtractConfig::default()
                .with_max_phrase_words(0)
                .validate()
                .is_err()
        );

        let empty_trigger = ClassifierRules::new(vec![CategoryRule::new(Category::Io, ["  "])]);
        assert!(
            ExtractConfig::default()
                .with_classifier(empty_trigger)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_connective_words() {
        let connective = Connective::new("In  Communication with", "Communication", LineStyle::Dotted);
        assert_eq!(connective.words(), vec!["in", "communication", "with"]);
    }
}
