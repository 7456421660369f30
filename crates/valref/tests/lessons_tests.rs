//! Lesson replay tests

use pretty_assertions::assert_eq;
use valref::*;

#[test]
fn test_arrays_and_mutability_lesson() {
    let report = Lesson::ArraysAndMutability.run().unwrap();

    assert_eq!(report.value_of("originalArray"), Some("[1, 2, 3]"));
    assert_eq!(report.value_of("copyOfArray"), Some("[1, 2]"));
    assert_eq!(
        report.value_of("copyOfArray.append(4)"),
        Some("error: Immutable violation: cannot append on an immutable container")
    );
    assert_eq!(
        report.value_of("copyOfArray[3]"),
        Some("error: Index out of range: index 3, count 2")
    );
    assert_eq!(
        report.value_of("copyOfWindowManager.windows"),
        Some("[Window(id: 1), Window(id: 2), Window(id: 3)]")
    );
    assert_eq!(
        report.value_of("copyOfWindowManager === originalWindowManager"),
        Some("true")
    );
}

#[test]
fn test_copy_shares_storage_until_append() {
    let report = Lesson::ArraysAndMutability.run().unwrap();
    let sharing: Vec<&str> = report
        .annotations
        .iter()
        .filter(|a| a.expression == "copyOfArray shares storage")
        .map(|a| a.value.as_str())
        .collect();
    assert_eq!(sharing, vec!["true", "false"]);
}

#[test]
fn test_mutable_array_view_lesson() {
    let report = Lesson::ArraysAndMutability.run().unwrap();
    let last_objects: Vec<&str> = report
        .annotations
        .iter()
        .filter(|a| a.expression == "copyOfMutableArray.lastObject")
        .map(|a| a.value.as_str())
        .collect();
    assert_eq!(last_objects, vec!["bar", "baz"]);
}

#[test]
fn test_transforming_arrays_lesson() {
    let report = Lesson::TransformingArrays.run().unwrap();

    assert_eq!(report.value_of("squared(12)"), Some("144"));
    assert_eq!(report.value_of("cubed(3)"), Some("27"));
    assert_eq!(report.value_of("fourthPower(10)"), Some("10000"));
    assert_eq!(report.value_of("someThing"), Some("[1, 16, 81]"));
    assert_eq!(report.value_of("someThing.last"), Some("81"));
    assert_eq!(report.value_of("divisibleByThree"), Some("[6, 12, 18]"));
    assert_eq!(report.value_of("total (hours)"), Some("272.00"));
    assert_eq!(report.value_of("total (price)"), Some("222.24"));
}

#[test]
fn test_collection_protocols_lesson() {
    let report = Lesson::CollectionProtocols.run().unwrap();

    assert_eq!(
        report.value_of("aConstantGenerator.next() x5"),
        Some("1, 1, 1, 1, 1")
    );
    assert_eq!(
        report.value_of("aFibonacciGenerator.next() x10"),
        Some("0, 1, 1, 2, 3, 5, 8, 13, 21, 34")
    );
    assert_eq!(report.value_of("while let i = g.next()"), Some("1, 2, 3"));
    assert_eq!(
        report.value_of("anyGenerator.next() x10"),
        report.value_of("aFibonacciGenerator.next() x10")
    );
}

#[test]
fn test_dictionaries_and_sets_lesson() {
    let report = Lesson::DictionariesAndSets.run().unwrap();

    assert_eq!(
        report.value_of("shakespeareWords"),
        Some("[afeard, anon, apace, apparel, arrant]")
    );
    assert_eq!(
        report.value_of("shakespeareDictionary[\"arrant\"]"),
        Some("downright, absolute, unmitigated")
    );
    assert_eq!(
        report.value_of("firstWordAndDefinition.0 (insertion order)"),
        Some("afeard")
    );
    assert_eq!(report.value_of("firstWordAndDefinition.0"), None);
    assert_eq!(
        report.value_of("shakespeareDictionary[\"anon\"] = \"later\""),
        Some("error: Immutable violation: cannot insert on an immutable dictionary")
    );
    assert_eq!(report.value_of("physicistDictionary.count"), Some("3"));
    assert_eq!(report.value_of("shakespeareWordsAsSet.count"), Some("5"));
    assert_eq!(
        report.value_of("shakespeareWordsAsSet.contains(\"anon\")"),
        Some("true")
    );
    assert_eq!(
        report.value_of("shakespeareWordsAsSet.insert(\"forsooth\")"),
        Some("error: Immutable violation: cannot insert on an immutable set")
    );
    assert_eq!(
        report.value_of("physicistWordsAsSet.insert(\"interesting\")"),
        Some("true")
    );
    assert_eq!(
        report.value_of("physicistWordsAsSet.contains(\"counter-intuitive\")"),
        Some("Counter-intuitive needs to be added.")
    );
}

#[test]
fn test_reports_serialize_to_json() {
    let report = Lesson::CollectionProtocols.run().unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["lesson"], "collection-protocols");
    assert_eq!(json["title"], "3.4 Collections and Protocols");
    assert_eq!(
        json["annotations"][0]["expression"],
        "aConstantGenerator.next() x5"
    );
}

#[test]
fn test_all_lessons_listed_once() {
    let mut all = Lesson::ALL.to_vec();
    all.sort_by_key(|l| l.title());
    all.dedup();
    assert_eq!(all.len(), 4);
}
