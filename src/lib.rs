//! A byte-keyed prefix tree with a payload on every node.
//!
//! Edges are labelled with single bytes, so any `[u8]`-shaped key works,
//! embedded zeros included. The trie holds a node for every byte prefix of
//! every inserted key, and each node owns a caller-chosen payload. There is
//! no separate "a key ends here" marker: reaching a node is the only notion
//! of presence, so a key and the prefixes beneath it are indistinguishable
//! once inserted.
//!
//! ```
//! use bytetrie::Trie;
//!
//! let mut trie: Trie<u32> = Trie::new();
//! trie.insert_or_find("wind").value = 4;
//! trie.insert_or_find("window").value = 6;
//!
//! assert_eq!(trie.get("window"), Some(&6));
//! assert!(trie.find("windo").is_some()); // created on the way to "window"
//! assert!(trie.find("wand").is_none());
//! ```

mod drop;
mod error;
pub mod iter;
mod keys;
mod node;

pub use error::{Error, Result};

/// A key is anything that can spell itself out as a sequence of bytes.
///
/// Byte values are used directly as edge labels, so the full `0..=255` range
/// is legal and a zero byte carries no terminator meaning.
pub trait Key {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_;
}

const CHILDREN: usize = 256;

/// A node of the trie, which doubles as the trie rooted at that node.
///
/// The root stands for the empty key; each child edge appends one byte.
/// Every node carries a payload, including nodes that only exist because a
/// longer key passed through them (those hold `V::default()`).
#[derive(Clone, PartialEq, Eq)]
pub struct Trie<V> {
    /// Payload of this node. The trie never inspects it.
    pub value: V,
    children: node::Table<V>,
}
