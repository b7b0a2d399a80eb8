extern crate rand;
extern crate splay_memo;

use rand::Rng;
use splay_memo::memo::fibonacci;
use splay_memo::splay_tree::SplayTree;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100_000;

fn assert_ordered(tree: &SplayTree<u32, u32>) {
    let keys = tree.iter().map(|(key, _)| *key).collect::<Vec<u32>>();
    assert_eq!(keys.len(), tree.len());
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn int_test_splay_tree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = SplayTree::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 10_000);
        let val = rng.gen::<u32>();

        if rng.gen_range(0, 2) == 0 {
            let rejected = tree.insert(key, val);
            if expected.contains_key(&key) {
                assert_eq!(rejected, Some((key, val)));
            } else {
                assert_eq!(rejected, None);
                expected.insert(key, val);
            }
            assert_eq!(tree.root(), Some((&key, &expected[&key])));
        } else {
            assert_eq!(tree.search(&key), expected.get(&key));
            if expected.contains_key(&key) {
                assert_eq!(tree.root().map(|(key, _)| *key), Some(key));
            }
        }
    }

    assert_ordered(&tree);
    assert_eq!(
        tree.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );
}

#[test]
fn int_test_splay_tree_sequential() {
    let mut tree = SplayTree::new();
    for key in 0..NUM_OF_OPERATIONS as u32 {
        tree.insert(key, key);
    }
    for key in (0..NUM_OF_OPERATIONS as u32).rev() {
        assert_eq!(tree.search(&key), Some(&key));
        assert_eq!(tree.root(), Some((&key, &key)));
    }
    assert_ordered(&tree);
}

#[test]
fn test_search_empty_tree() {
    let mut tree: SplayTree<u32, u32> = SplayTree::new();
    assert_eq!(tree.search(&1), None);
    assert_eq!(tree.root(), None);
}

#[test]
fn test_miss_keeps_order() {
    let mut tree = SplayTree::new();
    for key in &[50, 30, 70, 20, 40, 60, 80] {
        tree.insert(*key, *key);
    }
    for key in &[0, 25, 45, 65, 100] {
        assert_eq!(tree.search(key), None);
        assert_ordered(&tree);
        assert_eq!(tree.len(), 7);
    }
}

#[test]
fn test_concrete_scenario() {
    let mut tree = SplayTree::new();
    for key in &[5, 3, 8, 1] {
        tree.insert(*key, *key);
    }

    assert_eq!(tree.search(&3), Some(&3));
    assert_eq!(tree.root(), Some((&3, &3)));

    assert_eq!(tree.search(&1), Some(&1));
    assert_eq!(tree.root(), Some((&1, &1)));

    assert_eq!(tree.search(&99), None);
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.iter().count(), 4);
    assert_ordered(&tree);
}

#[test]
fn test_first_writer_wins() {
    let mut tree = SplayTree::new();
    tree.insert(7, 1);
    tree.insert(7, 2);
    assert_eq!(tree.search(&7), Some(&1));
}

#[test]
fn test_fibonacci_memoization() {
    let mut tree = SplayTree::new();
    assert_eq!(fibonacci::<u64, _>(10, &mut tree), 55);
    assert_eq!(
        tree.into_iter().collect::<Vec<(u64, u64)>>(),
        vec![
            (0, 0),
            (1, 1),
            (2, 1),
            (3, 2),
            (4, 3),
            (5, 5),
            (6, 8),
            (7, 13),
            (8, 21),
            (9, 34),
            (10, 55),
        ],
    );
}
