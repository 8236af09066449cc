// Property tests: every list operation is mirrored on a Vec model, and the two must agree.

use proptest::prelude::*;
use singly_linked_list::{ListError, SinglyLinkedList};

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    Append(i32),
    Insert(i32, usize),
    Remove(i32),
    Pop(usize),
}

// Small value and index ranges so duplicates and boundary indices show up often.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..8i32).prop_map(Op::Add),
        (0..8i32).prop_map(Op::Append),
        (0..8i32, 0..12usize).prop_map(|(value, index)| Op::Insert(value, index)),
        (0..8i32).prop_map(Op::Remove),
        (0..12usize).prop_map(Op::Pop),
    ]
}

prop_compose! {
    fn populated_list()(values in prop::collection::vec(0..8i32, 1..20)) -> (SinglyLinkedList<i32>, Vec<i32>) {
        let mut list = SinglyLinkedList::new();
        for &value in &values {
            list.append(value);
        }
        (list, values)
    }
}

fn contents(list: &SinglyLinkedList<i32>) -> Vec<i32> {
    std::iter::successors(list.head(), |node| node.next())
        .map(|node| *node.data())
        .collect()
}

proptest! {
    #[test]
    fn test_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut list = SinglyLinkedList::new();
        let mut model: Vec<i32> = Vec::new();
        let mut added = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::Add(value) => {
                    list.add(value);
                    model.insert(0, value);
                    added += 1;
                }
                Op::Append(value) => {
                    list.append(value);
                    model.push(value);
                    added += 1;
                }
                Op::Insert(value, index) => {
                    let result = list.insert(value, index);
                    if index < model.len() {
                        prop_assert_eq!(result, Ok(()));
                        model.insert(index, value);
                        added += 1;
                    } else {
                        prop_assert_eq!(result, Err(ListError::IndexOutOfRange { index }));
                    }
                }
                Op::Remove(value) => {
                    let result = list.remove(&value);
                    match model.iter().position(|&item| item == value) {
                        Some(position) => {
                            prop_assert_eq!(result, Ok(()));
                            model.remove(position);
                            removed += 1;
                        }
                        None => prop_assert_eq!(result, Err(ListError::ValueNotFound)),
                    }
                }
                Op::Pop(index) => {
                    let result = list.pop(index);
                    if index < model.len() {
                        let node = result.map_err(|err| TestCaseError::fail(err.to_string()))?;
                        prop_assert!(node.next().is_none());
                        prop_assert_eq!(node.into_data(), model.remove(index));
                        removed += 1;
                    } else {
                        prop_assert_eq!(result.err(), Some(ListError::IndexOutOfRange { index }));
                    }
                }
            }

            prop_assert_eq!(contents(&list), model.clone());
            prop_assert_eq!(list.size(), added - removed);
            prop_assert_eq!(list.is_empty(), list.size() == 0);
        }
    }

    #[test]
    fn test_insert_then_index((mut list, values) in populated_list(), value in 100..200i32, seed in any::<prop::sample::Index>()) {
        let index = seed.index(values.len());
        list.insert(value, index).unwrap();
        prop_assert_eq!(list.index(&value), Some(index));
        prop_assert_eq!(list.size(), values.len() + 1);
    }

    #[test]
    fn test_pop_returns_value_at_position((mut list, values) in populated_list(), seed in any::<prop::sample::Index>()) {
        let index = seed.index(values.len());
        let node = list.pop(index).unwrap();
        prop_assert_eq!(*node.data(), values[index]);
        prop_assert_eq!(list.size(), values.len() - 1);
    }

    #[test]
    fn test_insert_at_size_always_fails((mut list, values) in populated_list()) {
        let size = values.len();
        prop_assert_eq!(list.insert(0, size), Err(ListError::IndexOutOfRange { index: size }));
        prop_assert!(list.pop(size).is_err());
        prop_assert_eq!(contents(&list), values);
    }

    #[test]
    fn test_remove_leaves_later_duplicates((mut list, values) in populated_list()) {
        let target = values[0];
        let occurrences = values.iter().filter(|&&value| value == target).count();
        list.remove(&target).unwrap();
        prop_assert_eq!(list.search(&target), occurrences > 1);
    }

    #[test]
    fn test_display_matches_vec_rendering((list, values) in populated_list()) {
        let expected = format!(
            "[{}]",
            values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(", ")
        );
        prop_assert_eq!(list.to_string(), expected);
    }
}
