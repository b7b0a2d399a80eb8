//! A splay tree used as an ordered memoization cache, together with the memoized recursion that
//! drives it.

#[macro_use]
extern crate log;
extern crate serde;

mod entry;
pub mod memo;
pub mod splay_tree;
