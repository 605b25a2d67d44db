use serde::de::DeserializeSeed;

use super::*;
use crate::compare::{fold_case, natural};

#[test]
fn test_serialize() {
    let set = TreeSet::load_from(natural::<i64>, vec![3, 1, 2]);
    assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3]");

    let empty = TreeSet::new(natural::<i64>);
    assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");

    let words = TreeSet::load_from(fold_case::<String>, vec!["b".to_string(), "A".to_string()]);
    assert_eq!(serde_json::to_string(&words).unwrap(), r#"["A","b"]"#);
}

#[test]
fn test_deserialize_seed() {
    let mut set = TreeSet::load_from(natural::<i64>, vec![100, 200]);

    let mut de = serde_json::Deserializer::from_str("[5, 3, 8, 3, 1]");
    (&mut set).deserialize(&mut de).unwrap();
    de.end().unwrap();

    // previous content is dropped, duplicates collapse.
    assert_eq!(set.values(), vec![1, 3, 5, 8]);
    set.validate().unwrap();
}

#[test]
fn test_deserialize_with() {
    let mut de = serde_json::Deserializer::from_str("[\"pear\", \"Apple\", \"apple\"]");
    let set = TreeSet::deserialize_with(fold_case::<String>, &mut de).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.peek_head().map(String::as_str), Some("Apple"));
    assert_eq!(set.peek_tail().map(String::as_str), Some("pear"));

    let mut de = serde_json::Deserializer::from_str("{\"a\": 1}");
    assert!(TreeSet::deserialize_with(natural::<i64>, &mut de).is_err());

    let mut de = serde_json::Deserializer::from_str("[1, \"two\"]");
    assert!(TreeSet::deserialize_with(natural::<i64>, &mut de).is_err());
}

#[test]
fn test_serialize_round_trip() {
    let set = TreeSet::load_from(natural::<i64>, (0..500).map(|i| (i * 7919) % 1000));
    let text = serde_json::to_string(&set).unwrap();

    let mut de = serde_json::Deserializer::from_str(&text);
    let other = TreeSet::deserialize_with(natural::<i64>, &mut de).unwrap();
    assert_eq!(other.len(), set.len());
    assert_eq!(other.values(), set.values());
    other.validate().unwrap();
}
