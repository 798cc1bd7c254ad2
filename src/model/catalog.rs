//! Built-in cat-facts topic catalog
//!
//! The default hierarchy the service ships with: two real roots (`cat`
//! and `person`) plus a `misc` root reserved as a catch-all label.
//! Sentiment leaves under the depth-2 cat topics share the positive and
//! negative trigger lists. Breed-specific topics are deliberately left
//! out rather than giving every breed its own subtree.
//!
//! Trigger words are not necessarily synonyms of the topic name, just
//! words that fall under the topic at the same level of relation.
//! Plurals and word forms are spelled out; stemming would be the real
//! fix. TODO: replace the repeated word-form variants with a stemmer.

use super::topics::{ClassifierConfig, MatchSet, Topic, TopicModel, WeightTable};

const CAT: &[&str] = &[
    "animal", "animals", "pet", "pets", "feline", "felines", "cat", "cats", "kitten", "kittens",
    "kitty",
];

const PERSON: &[&str] = &[
    "people", "human", "humans", "person", "persons", "caretaker", "caretakers", "owner", "owners",
];

const APPEARANCE: &[&str] = &[
    "cute", "look", "color", "hair", "adorable", "small", "big", "large", "size", "fat", "skinny",
    "strong", "robust", "muscular", "muscle", "hard", "soft", "breed", "breeds", "type", "bred",
    "grown", "grow", "head", "largest", "smallest", "larger", "smaller", "biggest", "bigger",
    "softest", "softer", "hairiest", "hairier", "fluffiest", "fluffier", "hardest", "harder",
    "paw", "paws", "feet", "foot", "arm", "tail", "tails", "claw", "claws", "fluff", "fur",
    "finger", "fingers", "toe", "toes", "nail", "nails",
];

const TRAITS: &[&str] = &[
    "cute", "look", "color", "adorable", "small", "big", "large", "size", "fat", "skinny",
    "strong", "robust", "muscular", "muscle", "hard", "soft",
];

const HEALTH: &[&str] = &[
    "cute", "look", "color", "hair", "adorable", "small", "big", "large", "size", "fat", "skinny",
    "strong", "robust", "muscular", "muscle", "hard", "soft", "life", "live", "expectancy",
    "normal",
];

const ACTIVITIES: &[&str] = &[
    "run", "runs", "ran", "running", "play", "plays", "played", "playing", "walk", "walks",
    "walked", "walking", "stalk", "stalks", "stalked", "stalking", "talk", "talks", "talked",
    "talking", "hunt", "hunts", "hunted", "hunting", "catch", "catches", "caught", "catching",
    "bite", "bites", "bit", "prey", "preys", "preyed", "preying", "meow", "meows", "meowed",
    "meowing", "cry", "cries", "cried", "crying", "yell", "yells", "yelled", "yelling", "yawn",
    "yawns", "yawning", "kill", "kills", "killed", "killing",
];

const POSITIVE: &[&str] = &[
    "good", "great", "best", "fantastic", "incredible", "wonderful", "amazing", "powerful",
    "smart", "intelligent", "better", "healthy", "beautiful", "super", "superb", "awesome",
    "love", "loving", "fast", "faster", "fastest",
];

const NEGATIVE: &[&str] = &[
    "bad", "lame", "worst", "worse", "stupid", "dumb", "pointless", "idiotic", "moronic", "weird",
    "odd", "goofy", "terrible", "awful", "unhealthy", "ugly", "hate", "hateful", "slow", "slower",
    "slowest",
];

/// Build the default cat-facts classifier configuration.
///
/// Weight table: depth 1 -> 1.0, depth 2 -> 2.0, depth 3 -> 3.0, so the
/// deepest (most specific) matching topic wins the placement. `misc` has
/// no triggers and is never matched directly.
pub fn cat_facts_config() -> ClassifierConfig {
    let topics = TopicModel::new([
        Topic::root("cat"),
        Topic::root("person"),
        Topic::root("misc"),
        Topic::child("appearance", 2, "cat"),
        Topic::child("personality", 2, "cat"),
        Topic::child("intelligence", 2, "cat"),
        Topic::child("health", 2, "cat"),
        Topic::child("activities", 2, "cat"),
        Topic::child("positive_health", 3, "health"),
        Topic::child("negative_health", 3, "health"),
        Topic::child("positive_intelligence", 3, "intelligence"),
        Topic::child("negative_intelligence", 3, "intelligence"),
        Topic::child("positive_personality", 3, "personality"),
        Topic::child("negative_personality", 3, "personality"),
        Topic::child("positive_activities", 3, "activities"),
        Topic::child("negative_activities", 3, "activities"),
    ]);

    let matches = MatchSet::new([
        ("cat", CAT.to_vec()),
        ("person", PERSON.to_vec()),
        ("appearance", APPEARANCE.to_vec()),
        ("personality", TRAITS.to_vec()),
        ("intelligence", TRAITS.to_vec()),
        ("health", HEALTH.to_vec()),
        ("activities", ACTIVITIES.to_vec()),
        ("positive_health", POSITIVE.to_vec()),
        ("negative_health", NEGATIVE.to_vec()),
        ("positive_intelligence", POSITIVE.to_vec()),
        ("negative_intelligence", NEGATIVE.to_vec()),
        ("positive_personality", POSITIVE.to_vec()),
        ("negative_personality", NEGATIVE.to_vec()),
        ("positive_activities", POSITIVE.to_vec()),
        ("negative_activities", NEGATIVE.to_vec()),
    ]);

    let weights = WeightTable::new([(1, 1.0), (2, 2.0), (3, 3.0)]);

    ClassifierConfig::new(topics, matches, weights)
}
