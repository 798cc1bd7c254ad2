//! Bag-of-words topic matching

use crate::error::{Result, TreeError};
use crate::model::ClassifierConfig;
use serde::{Deserialize, Serialize};

/// One qualifying topic for a fact, scored by depth weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicHit {
    pub topic: String,
    pub depth: u32,
    pub score: f64,
}

/// Pure classifier over an immutable [`ClassifierConfig`].
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Validates the configuration up front; classification never runs
    /// against a model the loader has not accepted.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one fact into zero or more topic hits.
    ///
    /// Every topic with at least one trigger contained in the fact's
    /// normalized text qualifies; the containment test is
    /// case-insensitive, so a "cat" trigger matches "Cats" too. A
    /// topic's own identifier also counts as a trigger for itself. Hits
    /// are ordered by descending score, then ascending topic identifier
    /// for a deterministic tie-break. An empty result is a normal
    /// outcome, not an error.
    pub fn classify(&self, fact: &str) -> Result<Vec<TopicHit>> {
        let normalized = normalize(fact);
        let mut hits = Vec::new();

        for topic in self.config.topics.iter() {
            let matched = normalized.contains(&topic.id)
                || self
                    .config
                    .matches
                    .triggers_for(&topic.id)
                    .is_some_and(|triggers| triggers.iter().any(|t| normalized.contains(t)));
            if !matched {
                continue;
            }

            let score =
                self.config
                    .weights
                    .get(topic.depth)
                    .ok_or_else(|| TreeError::UnknownDepthWeight {
                        topic: topic.id.clone(),
                        depth: topic.depth,
                    })?;
            hits.push(TopicHit {
                topic: topic.id.clone(),
                depth: topic.depth,
                score,
            });
        }

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.topic.cmp(&b.topic))
        });
        Ok(hits)
    }
}

/// Normalize a fact for trigger containment checks.
///
/// Lowercases, strips punctuation (including the curly quotes the
/// upstream fact feed is fond of), and turns hyphens into spaces, so
/// "short-haired" still matches a "haired" trigger.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c == '-' || c.is_whitespace() {
                ' '
            } else {
                c
            }
        })
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{cat_facts_config, ClassifierConfig, MatchSet, Topic, TopicModel, WeightTable};

    fn animal_config() -> ClassifierConfig {
        ClassifierConfig::new(
            TopicModel::new([Topic::root("animal"), Topic::child("cat", 2, "animal")]),
            MatchSet::new([("animal", vec!["animal"]), ("cat", vec!["cat", "feline"])]),
            WeightTable::new([(1, 1.0), (2, 2.0)]),
        )
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        let normalized = normalize("A cat’s \"whiskers\" (and short-haired fur).");
        assert_eq!(normalized, "a cats whiskers and short haired fur");
    }

    #[test]
    fn test_triggers_match_as_substrings() {
        let classifier = Classifier::new(animal_config()).unwrap();
        // Plural forms qualify through containment: "cats" carries the
        // "cat" trigger, "felines" carries "feline", "animals" carries
        // "animal".
        let hits = classifier.classify("Cats are felines and animals").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].topic, "cat");
        assert_eq!(hits[0].score, 2.0);
        assert_eq!(hits[1].topic, "animal");
        assert_eq!(hits[1].score, 1.0);
    }

    #[test]
    fn test_deeper_topic_outscores_root() {
        let classifier = Classifier::new(animal_config()).unwrap();
        let hits = classifier.classify("Cat lovers know every animal is unique").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].topic, "cat");
        assert_eq!(hits[0].depth, 2);
        assert_eq!(hits[0].score, 2.0);
        assert_eq!(hits[1].topic, "animal");
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let classifier = Classifier::new(animal_config()).unwrap();
        let hits = classifier.classify("Dogs bark").unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let classifier = Classifier::new(animal_config()).unwrap();
        let hits = classifier.classify("FELINES are great").unwrap();
        assert_eq!(hits[0].topic, "cat");
    }

    #[test]
    fn test_topic_id_matches_itself() {
        let config = ClassifierConfig::new(
            TopicModel::new([Topic::root("animal")]),
            MatchSet::default(),
            WeightTable::new([(1, 1.0)]),
        );
        let classifier = Classifier::new(config).unwrap();
        // No trigger list at all, yet the bare identifier still matches.
        let hits = classifier.classify("What an animal!").unwrap();
        assert_eq!(hits[0].topic, "animal");
    }

    #[test]
    fn test_equal_score_breaks_ties_lexicographically() {
        let config = ClassifierConfig::new(
            TopicModel::new([Topic::root("bird"), Topic::root("beast")]),
            MatchSet::new([("bird", vec!["wings"]), ("beast", vec!["wings"])]),
            WeightTable::new([(1, 1.0)]),
        );
        let classifier = Classifier::new(config).unwrap();
        let hits = classifier.classify("it has wings").unwrap();
        assert_eq!(hits[0].topic, "beast");
        assert_eq!(hits[1].topic, "bird");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = Classifier::new(cat_facts_config()).unwrap();
        let fact = "Healthy cats love to run, play and hunt small prey";
        let first = classifier.classify(fact).unwrap();
        let second = classifier.classify(fact).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = ClassifierConfig::new(
            TopicModel::new([Topic::root("animal"), Topic::child("cat", 2, "animal")]),
            MatchSet::default(),
            WeightTable::new([(1, 1.0)]),
        );
        assert!(Classifier::new(config).is_err());
    }
}
