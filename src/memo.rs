//! Memoized recursion over a pluggable cache.

use crate::splay_tree::SplayTree;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;

/// A store of previously computed results keyed by the sub-problem they answer.
///
/// `store` never overwrites: if a key is already cached, the first value written for it is kept.
pub trait MemoCache<K, V> {
    /// Returns a copy of the cached value for `key`, if there is one.
    fn lookup(&mut self, key: &K) -> Option<V>;

    /// Caches `value` for `key` unless the key is already cached.
    fn store(&mut self, key: K, value: V);
}

impl<K, V> MemoCache<K, V> for SplayTree<K, V>
where
    K: Ord,
    V: Clone,
{
    fn lookup(&mut self, key: &K) -> Option<V> {
        self.search(key).cloned()
    }

    fn store(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> MemoCache<K, V> for HashMap<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn lookup(&mut self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn store(&mut self, key: K, value: V) {
        self.entry(key).or_insert(value);
    }
}

/// Computes the `n`-th Fibonacci number, consulting `cache` before each sub-problem and storing
/// every result computed on a miss.
///
/// # Examples
///
/// ```
/// use splay_memo::memo::fibonacci;
/// use splay_memo::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// assert_eq!(fibonacci::<u64, _>(10, &mut tree), 55);
/// assert_eq!(tree.len(), 11);
/// ```
pub fn fibonacci<V, C>(n: u64, cache: &mut C) -> V
where
    V: Clone + Add<Output = V> + From<u8>,
    C: MemoCache<u64, V>,
{
    if let Some(value) = cache.lookup(&n) {
        return value;
    }
    trace!("fibonacci({}) not cached", n);

    if n < 2 {
        let value = V::from(n as u8);
        cache.store(n, value.clone());
        return value;
    }

    let result = fibonacci::<V, C>(n - 1, cache) + fibonacci::<V, C>(n - 2, cache);
    cache.store(n, result.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::{fibonacci, MemoCache};
    use crate::splay_tree::SplayTree;
    use std::collections::HashMap;

    #[test]
    fn test_fibonacci_base_cases() {
        let mut tree = SplayTree::new();
        assert_eq!(fibonacci::<u64, _>(0, &mut tree), 0);
        assert_eq!(fibonacci::<u64, _>(1, &mut tree), 1);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_fibonacci_ten() {
        let mut tree = SplayTree::new();
        assert_eq!(fibonacci::<u64, _>(10, &mut tree), 55);

        let expected = [0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        assert_eq!(tree.len(), expected.len());
        for (key, value) in tree.iter() {
            assert_eq!(*value, expected[*key as usize]);
        }
        assert_eq!(tree.min(), Some(&0));
        assert_eq!(tree.max(), Some(&10));
    }

    #[test]
    fn test_fibonacci_reuses_tree() {
        let mut tree = SplayTree::new();
        assert_eq!(fibonacci::<u64, _>(20, &mut tree), 6765);
        assert_eq!(fibonacci::<u64, _>(15, &mut tree), 610);
        assert_eq!(tree.len(), 21);
        assert_eq!(tree.root(), Some((&15, &610)));
    }

    #[test]
    fn test_fibonacci_caches_agree() {
        let mut tree = SplayTree::new();
        let mut map = HashMap::new();
        for n in 0..90 {
            assert_eq!(
                fibonacci::<u64, _>(n, &mut tree),
                fibonacci::<u64, _>(n, &mut map),
            );
        }
        assert_eq!(tree.len(), map.len());
    }

    #[test]
    fn test_hash_map_store_keeps_first() {
        let mut map = HashMap::new();
        map.store(1, 1);
        map.store(1, 2);
        assert_eq!(map.lookup(&1), Some(1));
        assert_eq!(map.lookup(&2), None);
    }
}
