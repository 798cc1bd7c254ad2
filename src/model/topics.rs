//! Data types for the topic hierarchy and startup validation

use crate::error::{Result, TreeError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Depth assigned to topics without a parent.
pub const ROOT_DEPTH: u32 = 1;

/// A named category node in the classification hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    /// Hierarchical level; shallower = more general. Roots sit at depth 1.
    pub depth: u32,
    /// Direct parent identifier. `None` for root topics, so the model
    /// forms a forest rather than a single tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Topic {
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            depth: ROOT_DEPTH,
            parent: None,
        }
    }

    pub fn child(id: impl Into<String>, depth: u32, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            depth,
            parent: Some(parent.into()),
        }
    }
}

/// The topic forest, keyed by identifier.
///
/// A `BTreeMap` keeps iteration order deterministic, which the classifier
/// relies on for stable output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicModel {
    topics: BTreeMap<String, Topic>,
}

impl TopicModel {
    pub fn new(topics: impl IntoIterator<Item = Topic>) -> Self {
        Self {
            topics: topics.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Topic> {
        self.topics.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.values()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Walk parent links from `id` up to its root, returning identifiers
    /// in root-to-direct-parent order. Empty for root topics.
    pub fn ancestor_chain(&self, id: &str) -> Result<Vec<String>> {
        let mut chain = Vec::new();
        let mut current = self
            .get(id)
            .ok_or_else(|| TreeError::Internal(format!("unknown topic '{}'", id)))?;
        while let Some(parent_id) = &current.parent {
            let parent = self.get(parent_id).ok_or_else(|| TreeError::BrokenTopicChain {
                topic: current.id.clone(),
                parent: parent_id.clone(),
            })?;
            chain.push(parent.id.clone());
            current = parent;
        }
        chain.reverse();
        Ok(chain)
    }
}

/// Mapping from depth to the score a match at that depth earns.
///
/// Deeper topics are more specific and by design intent carry higher
/// weights, but monotonicity is not enforced; the engine consumes
/// whatever table it is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightTable {
    weights: BTreeMap<u32, f64>,
}

impl WeightTable {
    pub fn new(weights: impl IntoIterator<Item = (u32, f64)>) -> Self {
        Self {
            weights: weights.into_iter().collect(),
        }
    }

    pub fn get(&self, depth: u32) -> Option<f64> {
        self.weights.get(&depth).copied()
    }
}

/// Per-topic trigger tokens. A fact containing any of a topic's triggers
/// qualifies for that topic. An empty set is legal and means the topic
/// can never be matched directly from fact text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSet {
    triggers: BTreeMap<String, BTreeSet<String>>,
}

impl MatchSet {
    pub fn new<I, T, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triggers: entries
                .into_iter()
                .map(|(topic, words)| {
                    (
                        topic.into(),
                        words.into_iter().map(|w| w.into().to_lowercase()).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn triggers_for(&self, topic: &str) -> Option<&BTreeSet<String>> {
        self.triggers.get(topic)
    }

    pub fn topics(&self) -> impl Iterator<Item = &String> {
        self.triggers.keys()
    }
}

/// The complete, immutable configuration the engine runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub topics: TopicModel,
    pub matches: MatchSet,
    pub weights: WeightTable,
}

impl ClassifierConfig {
    pub fn new(topics: TopicModel, matches: MatchSet, weights: WeightTable) -> Self {
        Self {
            topics,
            matches,
            weights,
        }
    }

    /// Validate the static configuration before any classification runs.
    ///
    /// Checks, each fatal if violated:
    /// - every topic's depth equals its parent's depth + 1 (roots sit at
    ///   depth 1) and every parent link resolves
    /// - every match-set key references an existing topic
    /// - the weight table covers every depth present in the topic model
    pub fn validate(&self) -> Result<()> {
        for topic in self.topics.iter() {
            match &topic.parent {
                Some(parent_id) => {
                    let parent =
                        self.topics
                            .get(parent_id)
                            .ok_or_else(|| TreeError::BrokenTopicChain {
                                topic: topic.id.clone(),
                                parent: parent_id.clone(),
                            })?;
                    if topic.depth != parent.depth + 1 {
                        return Err(TreeError::DepthMismatch {
                            topic: topic.id.clone(),
                            depth: topic.depth,
                            expected: parent.depth + 1,
                        });
                    }
                }
                None => {
                    if topic.depth != ROOT_DEPTH {
                        return Err(TreeError::DepthMismatch {
                            topic: topic.id.clone(),
                            depth: topic.depth,
                            expected: ROOT_DEPTH,
                        });
                    }
                }
            }

            if self.weights.get(topic.depth).is_none() {
                return Err(TreeError::UnknownDepthWeight {
                    topic: topic.id.clone(),
                    depth: topic.depth,
                });
            }

            // Chains are bounded by depth, so a full walk also proves the
            // model is acyclic.
            self.topics.ancestor_chain(&topic.id)?;
        }

        for topic_id in self.matches.topics() {
            if self.topics.get(topic_id).is_none() {
                return Err(TreeError::UnknownMatchTopic(topic_id.clone()));
            }
        }

        Ok(())
    }
}
