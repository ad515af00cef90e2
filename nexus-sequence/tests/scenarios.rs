use nexus_sequence::{OutOfRange, Sequence};

fn values<T: Copy>(seq: &Sequence<T>) -> Vec<T> {
    std::iter::successors(seq.head_link(), |link| link.next())
        .map(|link| *link.value())
        .collect()
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn insert_at_position_one() {
    let mut seq = Sequence::from([1, 2, 3]);
    seq.insert(1, 4).unwrap();
    assert_eq!(values(&seq), vec![1, 4, 2, 3]);
    assert_eq!(seq.len(), 4);
}

#[test]
fn remove_middle_value() {
    let mut seq = Sequence::from([1, 2, 3]);
    assert_eq!(seq.remove_value(&2), Some(2));
    assert_eq!(values(&seq), vec![1, 3]);
    assert_eq!(seq.len(), 2);
}

#[test]
fn get_on_empty_is_out_of_range() {
    let seq: Sequence<i32> = Sequence::from([]);
    assert_eq!(seq.get(0), Err(OutOfRange::Index { index: 0, len: 0 }));
}

#[test]
fn concatenation_leaves_operands_unchanged() {
    let left = Sequence::from([1, 2, 3]);
    let right = Sequence::from([4, 5]);

    let joined = &left + &right;

    assert_eq!(values(&joined), vec![1, 2, 3, 4, 5]);
    assert_eq!(values(&left), vec![1, 2, 3]);
    assert_eq!(values(&right), vec![4, 5]);
}

#[test]
fn swap_ends_then_same_index() {
    let mut seq = Sequence::from([1, 2, 3]);
    seq.swap(0, 2).unwrap();
    assert_eq!(values(&seq), vec![3, 2, 1]);
    seq.swap(0, 0).unwrap();
    assert_eq!(values(&seq), vec![3, 2, 1]);
}

#[test]
fn count_and_find() {
    let seq = Sequence::from([5, 5, 2]);
    assert_eq!(seq.count(&5), 2);
    assert_eq!(seq.find(&2).map(|link| *link.value()), Some(2));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn length_matches_chain_after_mixed_mutations() {
    let mut seq = Sequence::new();
    seq.append(1);
    seq.push_front(0);
    seq.insert(2, 2).unwrap();
    seq.append(3);
    seq.remove(1).unwrap();
    seq.remove_value(&3);
    seq.swap(0, 1).unwrap();
    seq.reverse();

    assert_eq!(values(&seq).len(), seq.len());
    assert_eq!(values(&seq), vec![0, 2]);
}

#[test]
fn vec_round_trip() {
    let original = Sequence::from([4, 8, 15, 16, 23, 42]);
    let rebuilt = Sequence::from(original.to_vec());
    assert_eq!(rebuilt, original);
    assert_eq!(rebuilt.len(), original.len());
}

#[test]
fn boxed_slice_round_trip() {
    let original = Sequence::from([4, 8, 15, 16, 23, 42]);
    let buf = original.to_boxed_slice();
    let rebuilt = Sequence::from(&buf[..]);
    assert_eq!(rebuilt, original);
}

#[test]
fn empty_round_trip() {
    let original: Sequence<i32> = Sequence::new();
    assert!(original.to_vec().is_empty());
    assert!(original.to_boxed_slice().is_empty());
    assert!(Sequence::from(original.to_vec()).is_empty());
}

#[test]
fn copy_independence() {
    let mut original = Sequence::from([1, 2, 3]);
    let mut copy = original.clone();

    copy.append(4);
    copy.update(0, 100).unwrap();
    assert_eq!(values(&original), vec![1, 2, 3]);

    original.remove(2).unwrap();
    original.reverse();
    assert_eq!(values(&copy), vec![100, 2, 3, 4]);
}

#[test]
fn move_empties_source() {
    let mut source = Sequence::from([1, 2, 3]);
    let dest = std::mem::take(&mut source);

    assert_eq!(source.len(), 0);
    assert!(source.head_link().is_none());
    assert_eq!(values(&dest), vec![1, 2, 3]);

    // The emptied source is still fully usable
    source.append(9);
    assert_eq!(values(&source), vec![9]);
}

#[test]
fn reverse_twice_restores_order() {
    let mut seq: Sequence<u32> = (0..50).collect();
    let before = seq.to_vec();
    seq.reverse();
    assert_ne!(seq.to_vec(), before);
    seq.reverse();
    assert_eq!(seq.to_vec(), before);
}

#[test]
fn insert_then_remove_restores() {
    let mut seq = Sequence::from([1, 2, 3, 4]);
    let before = seq.to_vec();

    for index in 0..=seq.len() {
        seq.insert(index, 99).unwrap();
        assert_eq!(seq.len(), before.len() + 1);
        assert_eq!(seq.remove(index), Ok(99));
        assert_eq!(seq.to_vec(), before);
    }

    seq.append(99);
    assert_eq!(seq.remove(seq.len() - 1), Ok(99));
    assert_eq!(seq.to_vec(), before);
}

#[test]
fn out_of_range_leaves_state_untouched() {
    let mut seq = Sequence::from([1, 2, 3]);

    assert!(seq.get(3).is_err());
    assert!(seq.get_mut(7).is_err());
    assert!(seq.update(3, 0).is_err());
    assert!(seq.insert(4, 0).is_err());
    assert!(seq.remove(3).is_err());
    assert!(seq.swap(1, 3).is_err());
    assert!(seq.print_range(1, 4).is_err());

    assert_eq!(values(&seq), vec![1, 2, 3]);
    assert_eq!(seq.len(), 3);
}

#[test]
fn errors_propagate_with_question_mark() {
    fn second_plus_third(seq: &Sequence<i32>) -> Result<i32, OutOfRange> {
        Ok(seq.get(1)? + seq.get(2)?)
    }

    assert_eq!(second_plus_third(&Sequence::from([1, 2, 3])), Ok(5));
    assert_eq!(
        second_plus_third(&Sequence::from([1, 2])),
        Err(OutOfRange::Index { index: 2, len: 2 })
    );
}

#[test]
fn works_with_non_copy_values() {
    let mut seq: Sequence<String> = ["b", "c"].iter().map(|s| s.to_string()).collect();
    seq.push_front("a".to_string());

    assert_eq!(seq.count(&"b".to_string()), 1);
    assert_eq!(seq.to_string(), "a b c");
    assert_eq!(seq.remove_value(&"c".to_string()).as_deref(), Some("c"));
    assert_eq!(format!("{seq:?}"), r#"["a", "b"]"#);
}
