use crate::entry::Entry;
use crate::splay_tree::tree;
use std::mem;

pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub left: tree::Tree<K, V>,
    pub right: tree::Tree<K, V>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Node {
            entry: Entry { key, value },
            left: None,
            right: None,
        }
    }

    // The node at `self`'s position becomes the old right child; `self` moves into its left.
    pub fn rotate_left(&mut self) {
        let mut child = self.right.take().expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.left = Some(child);
    }

    pub fn rotate_right(&mut self) {
        let mut child = self.left.take().expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.right = Some(child);
    }

    pub fn left_mut(&mut self) -> &mut Node<K, V> {
        self.left.as_mut().expect("Expected left child node to be `Some`.")
    }

    pub fn right_mut(&mut self) -> &mut Node<K, V> {
        self.right.as_mut().expect("Expected right child node to be `Some`.")
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    fn leaf(key: u32) -> Option<Box<Node<u32, u32>>> {
        Some(Box::new(Node::new(key, key)))
    }

    #[test]
    fn test_rotate_left() {
        let mut node = Node::new(2, 2);
        node.left = leaf(1);
        node.right = Some(Box::new(Node {
            left: leaf(3),
            right: leaf(5),
            ..Node::new(4, 4)
        }));

        node.rotate_left();

        assert_eq!(node.entry.key, 4);
        assert_eq!(node.right.as_ref().map(|n| n.entry.key), Some(5));
        let left = node.left.as_ref().expect("rotated node");
        assert_eq!(left.entry.key, 2);
        assert_eq!(left.left.as_ref().map(|n| n.entry.key), Some(1));
        assert_eq!(left.right.as_ref().map(|n| n.entry.key), Some(3));
    }

    #[test]
    fn test_rotate_right() {
        let mut node = Node::new(4, 4);
        node.right = leaf(5);
        node.left = Some(Box::new(Node {
            left: leaf(1),
            right: leaf(3),
            ..Node::new(2, 2)
        }));

        node.rotate_right();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.left.as_ref().map(|n| n.entry.key), Some(1));
        let right = node.right.as_ref().expect("rotated node");
        assert_eq!(right.entry.key, 4);
        assert_eq!(right.left.as_ref().map(|n| n.entry.key), Some(3));
        assert_eq!(right.right.as_ref().map(|n| n.entry.key), Some(5));
    }

    #[test]
    #[should_panic]
    fn test_rotate_left_without_child() {
        let mut node: Node<u32, u32> = Node::new(1, 1);
        node.rotate_left();
    }
}
