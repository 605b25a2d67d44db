use std::cmp::Ordering;

use super::*;
use crate::compare::{fold_case, natural};

type IntSet = TreeSet<i64, fn(&i64, &i64) -> Ordering>;

fn int_set<I: IntoIterator<Item = i64>>(values: I) -> IntSet {
    TreeSet::load_from(natural::<i64> as fn(&i64, &i64) -> Ordering, values)
}

// remove the cursor's entry, then overwrite the detached value, the set
// must not see the overwrite.
fn remove_and_check(cursor: &mut Cursor<i64, fn(&i64, &i64) -> Ordering>, want: &mut Vec<i64>) -> i64 {
    cursor.remove().unwrap();
    let value = *cursor.value().unwrap();
    want.retain(|v| *v != value);
    cursor.set_value(9999).unwrap();
    assert_eq!(cursor.value(), Some(&9999));
    value
}

#[test]
fn test_cursor_walk() {
    let mut set = int_set(0..10);

    let mut cursor = set.cursor();
    assert_eq!(cursor.value(), None);
    let mut forward = vec![];
    while cursor.move_next() {
        forward.push(*cursor.value().unwrap());
    }
    assert_eq!(forward, (0..10).collect::<Vec<i64>>());
    // stays on the last entry.
    assert_eq!(cursor.value(), Some(&9));

    cursor.reset();
    let mut backward = vec![];
    while cursor.move_prev() {
        backward.push(*cursor.value().unwrap());
    }
    assert_eq!(backward, (0..10).rev().collect::<Vec<i64>>());
    assert_eq!(cursor.value(), Some(&0));

    let mut empty = int_set(vec![]);
    let mut cursor = empty.cursor();
    assert!(!cursor.move_next());
    assert!(!cursor.move_prev());
    assert_eq!(cursor.value(), None);
}

#[test]
fn test_cursor_unset() {
    let mut set = int_set(0..5);
    {
        let mut cursor = set.cursor();
        assert_eq!(cursor.remove(), Err(Error::CursorUnset));
        assert_eq!(cursor.set_value(100), Err(Error::CursorUnset));
        assert!(cursor.move_next());
        assert!(cursor.remove().is_ok());
        assert_eq!(cursor.remove(), Err(Error::AlreadyRemoved));
        cursor.reset();
        assert_eq!(cursor.remove(), Err(Error::CursorUnset));
    }
    assert_eq!(set.values(), vec![1, 2, 3, 4]);
}

#[test]
fn test_cursor_remove() {
    for n in 20..50 {
        let mut set = int_set(0..n);
        let mut want: Vec<i64> = (0..n).collect();
        {
            let mut cursor = set.cursor();
            for _ in 0..=(n / 2) {
                cursor.move_next();
            }

            let middle = remove_and_check(&mut cursor, &mut want);
            assert!(cursor.move_next());
            assert_eq!(cursor.value(), Some(&(middle + 1)));
            remove_and_check(&mut cursor, &mut want);
            assert!(cursor.move_prev());
            assert_eq!(cursor.value(), Some(&(middle - 1)));
            remove_and_check(&mut cursor, &mut want);

            while cursor.move_prev() {}
            assert_eq!(remove_and_check(&mut cursor, &mut want), 0);
            while cursor.move_next() {}
            assert_eq!(remove_and_check(&mut cursor, &mut want), n - 1);

            cursor.reset();
            if n % 2 == 0 {
                while cursor.move_prev() {
                    remove_and_check(&mut cursor, &mut want);
                }
            } else {
                while cursor.move_next() {
                    remove_and_check(&mut cursor, &mut want);
                }
            }
        }
        assert!(want.is_empty(), "n:{} left:{:?}", n, want);
        assert!(set.is_empty());
        set.validate().unwrap();
    }
}

#[test]
fn test_cursor_remove_validate() {
    let mut set = int_set(0..200);
    let mut want: Vec<i64> = (0..200).collect();
    {
        let mut cursor = set.cursor();
        while cursor.move_next() {
            let value = *cursor.value().unwrap();
            if value % 3 == 1 {
                remove_and_check(&mut cursor, &mut want);
            }
        }
    }
    set.validate().unwrap();
    assert_eq!(set.values(), want);
}

#[test]
fn test_cursor_remove_neighbours() {
    let mut set = int_set(1..=5);
    let mut seen = vec![];
    {
        let mut cursor = set.cursor();
        while cursor.move_next() {
            let value = *cursor.value().unwrap();
            seen.push(value);
            if value % 2 == 0 {
                cursor.remove().unwrap();
            }
        }
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    assert_eq!(set.values(), vec![1, 3, 5]);

    let mut set = int_set(vec![1, 2, 3]);
    {
        let mut cursor = set.cursor();
        cursor.move_next();
        cursor.remove().unwrap();
        // nothing before the removed head.
        assert!(!cursor.move_prev());
        assert_eq!(cursor.value(), Some(&1));
        assert!(cursor.move_next());
        assert_eq!(cursor.value(), Some(&2));
    }
    assert_eq!(set.values(), vec![2, 3]);
}

#[test]
fn test_cursor_set_value() {
    let mut set = int_set(1..=100);
    loop {
        let mut cursor = set.cursor();
        if !cursor.move_next() || *cursor.value().unwrap() > 100 {
            break;
        }
        let value = *cursor.value().unwrap();
        cursor.set_value(value + 100).unwrap();
        assert_eq!(cursor.value(), Some(&(value + 100)));
    }
    assert_eq!(set.values(), (101..=200).collect::<Vec<i64>>());
    set.validate().unwrap();

    {
        let mut cursor = set.cursor();
        while cursor.move_prev() && *cursor.value().unwrap() <= 200 {
            let value = *cursor.value().unwrap();
            cursor.set_value(value + 100).unwrap();
        }
    }
    assert_eq!(set.values(), (201..=300).collect::<Vec<i64>>());
    set.validate().unwrap();
}

#[test]
fn test_cursor_set_value_merge() {
    let mut set = int_set(vec![10, 20, 30]);
    {
        let mut cursor = set.cursor();
        cursor.move_next();
        // moving onto an existing value collapses the two entries.
        cursor.set_value(30).unwrap();
        assert_eq!(cursor.value(), Some(&30));
        assert!(!cursor.move_next());
        assert!(cursor.move_prev());
        assert_eq!(cursor.value(), Some(&20));
    }
    assert_eq!(set.values(), vec![20, 30]);
    set.validate().unwrap();
}

#[test]
fn test_cursor_set_value_in_place() {
    let mut set = TreeSet::new(fold_case::<String>);
    set.add("apple".to_string());
    set.add("Banana".to_string());
    set.add("cherry".to_string());
    {
        let mut cursor = set.cursor();
        cursor.move_next();
        cursor.move_next();
        cursor.set_value("BANANA".to_string()).unwrap();
        assert_eq!(cursor.value().map(String::as_str), Some("BANANA"));
        assert!(cursor.move_prev());
        assert_eq!(cursor.value().map(String::as_str), Some("apple"));
    }
    assert_eq!(set.len(), 3);
    assert_eq!(set.get(&"banana".to_string()).map(String::as_str), Some("BANANA"));
    set.validate().unwrap();
}
