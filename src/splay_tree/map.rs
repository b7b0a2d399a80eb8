use crate::entry::Entry;
use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Index;

/// An ordered map implemented using a splay tree, intended for use as a memoization cache.
///
/// A splay tree is a self-adjusting binary tree with the additional property that recently
/// accessed items are quick to access again. Both `insert` and `search` "splay" the accessed key
/// to the root of the tree, so a recursive computation that repeatedly revisits the same few
/// sub-problems finds them near the top.
///
/// Keys are never removed individually. Inserting a key that is already present leaves the stored
/// value untouched: the first value written for a key is the one that is kept.
///
/// # Examples
///
/// ```
/// use splay_memo::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(0, 1);
/// tree.insert(3, 4);
///
/// assert_eq!(tree.search(&0), Some(&1));
/// assert_eq!(tree.root(), Some((&0, &1)));
/// assert_eq!(tree.search(&1), None);
/// assert_eq!(tree.len(), 2);
///
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.max(), Some(&3));
///
/// assert_eq!(tree.insert(0, 2), Some((0, 2)));
/// assert_eq!(tree[&0], 1);
/// ```
pub struct SplayTree<K, V> {
    tree: tree::Tree<K, V>,
    len: usize,
}

impl<K, V> SplayTree<K, V> {
    /// Constructs a new, empty `SplayTree<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::new();
    /// ```
    pub fn new() -> Self {
        SplayTree { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the tree and splays its key to the root. If the key already
    /// exists, the tree keeps the existing value and the rejected key-value pair is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.insert(1, 1), None);
    /// assert_eq!(tree.insert(1, 2), Some((1, 2)));
    /// assert_eq!(tree.search(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Ord,
    {
        let SplayTree {
            ref mut tree,
            ref mut len,
        } = self;
        let new_node = Node::new(key, value);
        *len += 1;
        tree::insert(tree, new_node).map(|entry| {
            let Entry { key, value } = entry;
            *len -= 1;
            (key, value)
        })
    }

    /// Returns an immutable reference to the value associated with a particular key, or `None`
    /// if the key does not exist. The key, or the last node visited while looking for it, is
    /// splayed to the root in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.root(), Some((&1, &1)));
    /// assert_eq!(tree.search(&3), None);
    /// ```
    pub fn search<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::search(&mut self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key, splaying the
    /// tree the same way `search` does.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// *tree.search_mut(&1).unwrap() = 2;
    /// assert_eq!(tree.search(&1), Some(&2));
    /// ```
    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::search(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the key-value pair at the root of the tree, which is the most recently accessed
    /// one. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.root(), None);
    /// tree.insert(1, 2);
    /// assert_eq!(tree.root(), Some((&1, &2)));
    /// ```
    pub fn root(&self) -> Option<(&K, &V)> {
        self.tree.as_ref().map(|node| (&node.entry.key, &node.entry.value))
    }

    /// Checks if a key exists in the tree. Note that `contains_key` does not splay the tree in
    /// order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert!(!tree.contains_key(&0));
    /// assert!(tree.contains_key(&1));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. Unlike
    /// `search`, `get` does not splay the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.root(), Some((&2, &2)));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, dropping every key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(3, 3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(3, 3);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&K> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns an iterator over the tree. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(2, 2);
    /// tree.insert(1, 1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplayTreeIter<K, V> {
        SplayTreeIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the tree. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_memo::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    ///
    /// for (_, value) in &mut tree {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = tree.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> SplayTreeIterMut<K, V> {
        SplayTreeIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<K, V> Drop for SplayTree<K, V> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<K, V> IntoIterator for SplayTree<K, V> {
    type IntoIter = SplayTreeIntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SplayTree<K, V>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = SplayTreeIter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut SplayTree<K, V>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = SplayTreeIterMut<'a, K, V>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `SplayTree<K, V>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned entries.
pub struct SplayTreeIntoIter<K, V> {
    current: tree::Tree<K, V>,
    stack: Vec<Node<K, V>>,
}

impl<K, V> Iterator for SplayTreeIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { key, value },
                right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

impl<K, V> Drop for SplayTreeIntoIter<K, V> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

/// An iterator for `SplayTree<K, V>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct SplayTreeIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    current: &'a tree::Tree<K, V>,
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for SplayTreeIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

type BorrowedIterEntryMut<'a, K, V> = (&'a mut Entry<K, V>, BorrowedTreeMut<'a, K, V>);
type BorrowedTreeMut<'a, K, V> = Option<&'a mut Node<K, V>>;

/// A mutable iterator for `SplayTree<K, V>`.
///
/// This iterator traverses the elements of the tree in-order and yields mutable references.
pub struct SplayTreeIterMut<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    current: BorrowedTreeMut<'a, K, V>,
    stack: Vec<BorrowedIterEntryMut<'a, K, V>>,
}

impl<'a, K, V> Iterator for SplayTreeIterMut<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let SplayTreeIterMut { current, stack } = self;
        while let Some(node) = current.take() {
            let Node { entry, left, right } = node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((entry, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(entry, right)| {
            let Entry { key, value } = entry;
            *current = right;
            (&*key, value)
        })
    }
}

impl<K, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for SplayTree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> PartialEq for SplayTree<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &SplayTree<K, V>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V> Eq for SplayTree<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<'a, K, V, Q> Index<&'a Q> for SplayTree<K, V>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}
