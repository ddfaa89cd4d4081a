//! Property tests: the array against a `Vec` reference model, plus the
//! ordering, capacity, and search laws.

use dynarray::policy::rounded_capacity;
use dynarray::{ArrayError, DynamicArray};
use dynarray_test_utils::assert_invariants;
use proptest::prelude::*;

/// A mutation with indices drawn independently of the current length,
/// so both valid and invalid calls are generated.
#[derive(Clone, Debug)]
enum Step {
    Push(i32),
    Insert(usize, i32),
    Prepend(i32),
    Pop,
    Remove(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => any::<i32>().prop_map(Step::Push),
        2 => (0usize..80, any::<i32>()).prop_map(|(i, v)| Step::Insert(i, v)),
        1 => any::<i32>().prop_map(Step::Prepend),
        2 => Just(Step::Pop),
        2 => (0usize..80).prop_map(Step::Remove),
    ]
}

fn model_step(model: &mut Vec<i32>, step: &Step) -> Result<Option<i32>, ArrayError> {
    let len = model.len();
    match *step {
        Step::Push(v) => {
            model.push(v);
            Ok(None)
        }
        Step::Insert(index, v) => {
            if index > len {
                return Err(ArrayError::OutOfRange { index, len });
            }
            model.insert(index, v);
            Ok(None)
        }
        Step::Prepend(v) => {
            model.insert(0, v);
            Ok(None)
        }
        Step::Pop => model.pop().map(Some).ok_or(ArrayError::Empty),
        Step::Remove(index) => {
            if len == 0 {
                Err(ArrayError::Empty)
            } else if index >= len {
                Err(ArrayError::OutOfRange { index, len })
            } else {
                Ok(Some(model.remove(index)))
            }
        }
    }
}

fn array_step(array: &mut DynamicArray<i32>, step: &Step) -> Result<Option<i32>, ArrayError> {
    match *step {
        Step::Push(v) => array.push(v).map(|()| None),
        Step::Insert(index, v) => array.insert(index, v).map(|()| None),
        Step::Prepend(v) => array.prepend(v).map(|()| None),
        Step::Pop => array.pop().map(Some),
        Step::Remove(index) => array.remove(index).map(Some),
    }
}

proptest! {
    #[test]
    fn matches_vec_model(steps in proptest::collection::vec(step_strategy(), 0..300)) {
        let mut array = DynamicArray::new();
        let mut model = Vec::new();
        for step in &steps {
            let before_capacity = array.capacity();
            let expected = model_step(&mut model, step);
            let actual = array_step(&mut array, step);
            prop_assert_eq!(&actual, &expected, "step {:?}", step);
            if actual.is_err() {
                prop_assert_eq!(array.capacity(), before_capacity);
            }
            prop_assert_eq!(array.to_vec(), model.clone());
            assert_invariants(&array);
        }
    }

    #[test]
    fn pops_reverse_pushes(values in proptest::collection::vec(any::<u16>(), 0..200)) {
        let mut array = DynamicArray::new();
        for &v in &values {
            array.push(v).unwrap();
        }
        prop_assert_eq!(array.size(), values.len());

        let mut popped = Vec::new();
        while let Ok(v) = array.pop() {
            popped.push(v);
        }
        popped.reverse();
        prop_assert_eq!(popped, values);
        prop_assert_eq!(array.size(), 0);
        prop_assert!(array.capacity() >= 16);
    }

    #[test]
    fn capacity_after_pushes_is_smallest_covering(n in 0usize..3_000) {
        let mut array = DynamicArray::new();
        for v in 0..n {
            array.push(v).unwrap();
        }
        prop_assert_eq!(Some(array.capacity()), rounded_capacity(n));
    }

    #[test]
    fn capacity_after_pushes_doubles_from_construction(
        requested in 0usize..3_000,
        n in 0usize..3_000,
    ) {
        let mut array = DynamicArray::with_capacity(requested);
        let start = array.capacity();
        prop_assert_eq!(Some(start), rounded_capacity(requested));
        for v in 0..n {
            array.push(v).unwrap();
        }
        let expected = rounded_capacity(n).map(|covering| covering.max(start));
        prop_assert_eq!(Some(array.capacity()), expected);
        prop_assert_eq!(array.capacity() % start, 0);
    }

    #[test]
    fn relocation_cost_is_linear(n in 1usize..3_000) {
        let mut array = DynamicArray::new();
        for v in 0..n {
            array.push(v).unwrap();
        }
        // Each growth moves at most the current length and the final
        // capacity is below 2n, so total moves stay below 2n.
        prop_assert!(array.stats().relocated < 2 * n as u64);
    }

    #[test]
    fn insert_places_item_and_shifts_tail(
        values in proptest::collection::vec(any::<i32>(), 0..100),
        raw_index in any::<usize>(),
        item in any::<i32>(),
    ) {
        let index = raw_index % (values.len() + 1);
        let mut array = DynamicArray::from_slice(&values).unwrap();
        array.insert(index, item).unwrap();

        prop_assert_eq!(array.at(index), Ok(item));
        for j in 0..values.len() {
            let shifted = if j < index { j } else { j + 1 };
            prop_assert_eq!(array.at(shifted), Ok(values[j]));
        }
        prop_assert_eq!(array.len(), values.len() + 1);
    }

    #[test]
    fn remove_returns_old_value_and_shifts_tail(
        values in proptest::collection::vec(any::<i32>(), 1..100),
        raw_index in any::<usize>(),
    ) {
        let index = raw_index % values.len();
        let mut array = DynamicArray::from_slice(&values).unwrap();
        let expected = array.at(index).unwrap();

        prop_assert_eq!(array.remove(index), Ok(expected));
        prop_assert_eq!(array.size(), values.len() - 1);

        let mut remaining = values.clone();
        remaining.remove(index);
        prop_assert_eq!(array.to_vec(), remaining);
    }

    #[test]
    fn at_rejects_every_index_past_len(
        values in proptest::collection::vec(any::<u8>(), 0..50),
        past in 0usize..1_000,
    ) {
        let array = DynamicArray::from_slice(&values).unwrap();
        let index = values.len() + past;
        prop_assert_eq!(
            array.at(index),
            Err(ArrayError::OutOfRange { index, len: values.len() })
        );
    }

    #[test]
    fn find_returns_first_occurrence(
        values in proptest::collection::vec((0u8..8, any::<u32>()), 0..60),
        key in 0u8..8,
    ) {
        // Equality on the key only, so duplicates carry distinct payloads.
        #[derive(Clone, Debug)]
        struct Keyed(u8, u32);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        let items: Vec<Keyed> = values.iter().map(|&(k, p)| Keyed(k, p)).collect();
        let array = DynamicArray::from_slice(&items).unwrap();
        let found = array.find(&Keyed(key, 0));
        let expected = values.iter().find(|(k, _)| *k == key).map(|&(_, p)| p);
        prop_assert_eq!(found.map(|k| k.1), expected);
        prop_assert_eq!(
            array.position(&Keyed(key, 0)),
            values.iter().position(|(k, _)| *k == key)
        );
    }
}
