use std::cmp::Ordering;

use crate::compare::{float32, float64, fold_case, natural, Compare, Reverse};
use crate::tree::TreeSet;

#[test]
fn test_natural() {
    assert_eq!(natural(&1, &2), Ordering::Less);
    assert_eq!(natural(&2, &2), Ordering::Equal);
    assert_eq!(natural("b", "a"), Ordering::Greater);
}

#[test]
fn test_fold_case() {
    assert_eq!(fold_case("Apple", "apple"), Ordering::Equal);
    assert_eq!(fold_case("apple", "BANANA"), Ordering::Less);
    assert_eq!(fold_case("Zeta", "alpha"), Ordering::Greater);
    assert_eq!(fold_case("ab", "AbC"), Ordering::Less);
    assert_eq!(fold_case(&"x".to_string(), &"X".to_string()), Ordering::Equal);
}

#[test]
fn test_float() {
    assert_eq!(float64(&1.0, &2.0), Ordering::Less);
    assert_eq!(float64(&f64::NAN, &f64::NAN), Ordering::Equal);
    assert_eq!(float64(&f64::NAN, &f64::NEG_INFINITY), Ordering::Less);
    assert_eq!(float64(&0.0, &f64::NAN), Ordering::Greater);
    assert_eq!(float32(&-0.5, &0.5), Ordering::Less);
    assert_eq!(float32(&f32::NAN, &1.0), Ordering::Less);

    let mut set = TreeSet::new(float64);
    for value in [2.5, f64::NAN, -1.0, f64::NAN, 0.0].iter() {
        set.add(*value);
    }
    assert_eq!(set.len(), 4);
    assert!(set.peek_head().unwrap().is_nan());
    assert_eq!(set.peek_tail(), Some(&2.5));
    assert_eq!(set.floor(&1.0), Some(&0.0));
}

#[test]
fn test_reverse() {
    let cmp = Reverse(natural::<i64>);
    assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
    assert_eq!(cmp.compare(&2, &2), Ordering::Equal);

    let twice = Reverse(Reverse(natural::<i64>));
    assert_eq!(twice.compare(&1, &2), Ordering::Less);
}

#[test]
fn test_closure() {
    // order by length, then bytes.
    let by_len = |a: &String, b: &String| a.len().cmp(&b.len()).then_with(|| a.cmp(b));
    let mut set = TreeSet::new(by_len);
    for word in ["ccc", "a", "bb", "aa", "b"].iter() {
        set.add(word.to_string());
    }
    assert_eq!(set.values(), vec!["a", "b", "aa", "bb", "ccc"]);
    assert_eq!(set.comparator().compare(&"zz".to_string(), &"aaa".to_string()), Ordering::Less);
}
