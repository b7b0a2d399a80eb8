use crate::entry::Entry;
use crate::splay_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<K, V> = Option<Box<Node<K, V>>>;

// The grandchild a splay descends into, named after the rotation pattern it will apply.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Descent {
    ZigZigLeft,
    ZigZagLeft,
    ZigZigRight,
    ZigZagRight,
}

enum Step {
    Stop,
    ZigLeft,
    ZigRight,
    Descend(Descent),
}

fn classify<K, V, Q>(node: &Node<K, V>, key: &Q) -> Step
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => match &node.left {
            Some(child) => match key.cmp(child.entry.key.borrow()) {
                Ordering::Less => Step::Descend(Descent::ZigZigLeft),
                Ordering::Greater => Step::Descend(Descent::ZigZagLeft),
                Ordering::Equal => Step::ZigLeft,
            },
            None => Step::Stop,
        },
        Ordering::Greater => match &node.right {
            Some(child) => match key.cmp(child.entry.key.borrow()) {
                Ordering::Greater => Step::Descend(Descent::ZigZigRight),
                Ordering::Less => Step::Descend(Descent::ZigZagRight),
                Ordering::Equal => Step::ZigRight,
            },
            None => Step::Stop,
        },
        Ordering::Equal => Step::Stop,
    }
}

// Splays `key` (or the last node on its search path) to the root of `subtree`.
//
// Every level that descends two nodes applies its own rotations once the grandchild subtree has
// been splayed: a zig-zig rotates the level's root and then rotates again if the splayed subtree
// came back non-empty, and a zig-zag rotates the child only if the splayed subtree is non-empty
// before rotating the level's root. The levels are kept on an explicit stack so that a
// degenerate tree cannot exhaust the call stack.
fn splay_subtree<K, V, Q>(subtree: Tree<K, V>, key: &Q) -> Tree<K, V>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut path: Vec<(Box<Node<K, V>>, Descent)> = Vec::new();
    let mut current = subtree;

    let mut splayed = loop {
        let mut node = match current {
            Some(node) => node,
            None => break None,
        };
        let descent = match classify(&node, key) {
            Step::Stop => break Some(node),
            Step::ZigLeft => {
                node.rotate_right();
                break Some(node);
            },
            Step::ZigRight => {
                node.rotate_left();
                break Some(node);
            },
            Step::Descend(descent) => descent,
        };
        current = match descent {
            Descent::ZigZigLeft => node.left_mut().left.take(),
            Descent::ZigZagLeft => node.left_mut().right.take(),
            Descent::ZigZigRight => node.right_mut().right.take(),
            Descent::ZigZagRight => node.right_mut().left.take(),
        };
        path.push((node, descent));
    };

    while let Some((mut node, descent)) = path.pop() {
        match descent {
            Descent::ZigZigLeft => {
                node.left_mut().left = splayed;
                node.rotate_right();
                if node.left.is_some() {
                    node.rotate_right();
                }
            },
            Descent::ZigZagLeft => {
                {
                    let child = node.left_mut();
                    child.right = splayed;
                    if child.right.is_some() {
                        child.rotate_left();
                    }
                }
                node.rotate_right();
            },
            Descent::ZigZigRight => {
                node.right_mut().right = splayed;
                node.rotate_left();
                if node.right.is_some() {
                    node.rotate_left();
                }
            },
            Descent::ZigZagRight => {
                {
                    let child = node.right_mut();
                    child.left = splayed;
                    if child.left.is_some() {
                        child.rotate_right();
                    }
                }
                node.rotate_left();
            },
        }
        splayed = Some(node);
    }

    splayed
}

pub fn splay<K, V, Q>(tree: &mut Tree<K, V>, key: &Q)
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let subtree = tree.take();
    *tree = splay_subtree(subtree, key);
}

// Returns the rejected entry if the key is already present; the existing entry is kept.
pub fn insert<K, V>(tree: &mut Tree<K, V>, mut new_node: Node<K, V>) -> Option<Entry<K, V>>
where
    K: Ord,
{
    splay(tree, &new_node.entry.key);
    match tree {
        Some(ref mut node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => {
                new_node.left = node.left.take();
                mem::swap(&mut **node, &mut new_node);
                node.right = Some(Box::new(new_node));
                None
            },
            Ordering::Greater => {
                new_node.right = node.right.take();
                mem::swap(&mut **node, &mut new_node);
                node.left = Some(Box::new(new_node));
                None
            },
            Ordering::Equal => Some(new_node.entry),
        },
        None => {
            *tree = Some(Box::new(new_node));
            None
        },
    }
}

pub fn search<'a, K, V, Q>(tree: &'a mut Tree<K, V>, key: &Q) -> Option<&'a mut Entry<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    splay(tree, key);
    match tree {
        Some(ref mut node) if node.entry.key.borrow() == key => Some(&mut node.entry),
        _ => None,
    }
}

pub fn get<'a, K, V, Q>(tree: &'a Tree<K, V>, key: &Q) -> Option<&'a Entry<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn min<K, V>(tree: &Tree<K, V>) -> Option<&Entry<K, V>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<K, V>(tree: &Tree<K, V>) -> Option<&Entry<K, V>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

// Drops every node without recursing, since a splay tree can degrade into a path of any length.
pub fn clear<K, V>(tree: &mut Tree<K, V>) {
    let mut stack: Vec<Box<Node<K, V>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
