//! End-to-end engine and store scenarios

use fact_tree::{
    cat_facts_config, Classifier, ClassifierConfig, MatchSet, NodeRecord, RecordStore, Topic,
    TopicModel, TreeBuilder, TreeError, WeightTable,
};

fn animal_config() -> ClassifierConfig {
    ClassifierConfig::new(
        TopicModel::new([Topic::root("animal"), Topic::child("cat", 2, "animal")]),
        MatchSet::new([("animal", vec!["animal"]), ("cat", vec!["cat", "feline"])]),
        WeightTable::new([(1, 1.0), (2, 2.0)]),
    )
}

#[test]
fn cat_fact_lands_on_deepest_match() {
    let classifier = Classifier::new(animal_config()).unwrap();
    let hits = classifier.classify("Cats are felines and animals").unwrap();
    assert_eq!(hits[0].topic, "cat");
    assert_eq!(hits[0].score, 2.0);
    assert_eq!(hits[1].topic, "animal");
    assert_eq!(hits[1].score, 1.0);

    let builder = TreeBuilder::new(Classifier::new(animal_config()).unwrap());
    let records = builder
        .build(&["Cats are felines and animals".to_string()])
        .unwrap();
    assert_eq!(
        records,
        vec![NodeRecord {
            depth: 2,
            parents: vec!["animal".to_string()],
            topic: "cat".to_string(),
            fact: "Cats are felines and animals".to_string(),
        }]
    );
}

#[test]
fn unmatched_fact_produces_nothing() {
    let classifier = Classifier::new(animal_config()).unwrap();
    assert!(classifier.classify("Dogs bark").unwrap().is_empty());

    let builder = TreeBuilder::new(classifier);
    let records = builder.build(&["Dogs bark".to_string()]).unwrap();
    assert!(records.is_empty());
}

#[test]
fn missing_weight_aborts_before_classification() {
    let config = ClassifierConfig::new(
        TopicModel::new([Topic::root("animal"), Topic::child("cat", 2, "animal")]),
        MatchSet::new([("cat", vec!["cat"])]),
        WeightTable::new([(1, 1.0)]),
    );
    match Classifier::new(config) {
        Err(TreeError::UnknownDepthWeight { depth: 2, .. }) => {}
        other => panic!("expected UnknownDepthWeight, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn build_is_deterministic_over_the_catalog() {
    let facts: Vec<String> = [
        "Cats are felines and animals",
        "A healthy cat can live for many years",
        "Owners love their amazing pets",
        "Dogs bark",
        "Kittens play and hunt small prey",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let builder = TreeBuilder::new(Classifier::new(cat_facts_config()).unwrap());
    let first = builder.build(&facts).unwrap();
    let second = builder.build(&facts).unwrap();
    assert_eq!(first, second);
    // "Dogs bark" is dropped, the other four place somewhere
    assert_eq!(first.len(), 4);
}

#[test]
fn ancestor_chains_step_depth_by_one() {
    let config = cat_facts_config();
    let builder = TreeBuilder::new(Classifier::new(config.clone()).unwrap());
    let facts: Vec<String> = [
        "Cats are wonderful animals",
        "A cat's fur and paws are soft",
        "Unhealthy cats live shorter lives",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for record in builder.build(&facts).unwrap() {
        assert_eq!(record.parents.len() as u32 + 1, record.depth);
        for (i, parent) in record.parents.iter().enumerate() {
            assert_eq!(config.topics.get(parent).unwrap().depth, i as u32 + 1);
        }
        let chain = config.topics.ancestor_chain(&record.topic).unwrap();
        assert_eq!(chain, record.parents);
    }
}

#[test]
fn equal_scores_resolve_to_lexicographically_smaller_topic() {
    let config = ClassifierConfig::new(
        TopicModel::new([Topic::root("beta"), Topic::root("alpha")]),
        MatchSet::new([("beta", vec!["shared"]), ("alpha", vec!["shared"])]),
        WeightTable::new([(1, 1.0)]),
    );
    let builder = TreeBuilder::new(Classifier::new(config).unwrap());
    let records = builder.build(&["a shared trigger".to_string()]).unwrap();
    assert_eq!(records[0].topic, "alpha");
}

#[test]
fn classified_batch_round_trips_through_the_store() {
    let builder = TreeBuilder::new(Classifier::new(cat_facts_config()).unwrap());
    let facts: Vec<String> = [
        "Cats are felines",
        "People adore their cats",
        "A cat's tail is expressive",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let records = builder.build(&facts).unwrap();
    let store = RecordStore::new();
    let report = store.replace_all(records.clone());
    assert!(report.is_complete());
    assert_eq!(report.written.len(), records.len());

    // Everything classified under the cat subtree is reachable from the
    // "cat" key, directly or through the parent chain.
    let results = store.fetch(Some(&["cat".to_string()]));
    let under_cat = &results["cat"];
    assert_eq!(
        under_cat.len(),
        records
            .iter()
            .filter(|r| r.topic == "cat" || r.parents.iter().any(|p| p == "cat"))
            .count()
    );

    let all = store.fetch(None);
    assert_eq!(all["all"].len(), records.len());
}

#[test]
fn rebuilding_from_stored_facts_does_not_move_them() {
    let builder = TreeBuilder::new(Classifier::new(cat_facts_config()).unwrap());
    let facts = vec!["Cats are felines and animals".to_string()];

    let records = builder.build(&facts).unwrap();
    let refacts: Vec<String> = records.iter().map(|r| r.fact.clone()).collect();
    let rebuilt = builder.build(&refacts).unwrap();
    assert_eq!(records, rebuilt);
}
