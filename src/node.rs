use super::{iter::Children, Error, Key, Result, Trie, CHILDREN};
use std::any::type_name;

const _: () = assert!(
    CHILDREN == u8::MAX as usize + 1,
    "key bytes index the child table directly"
);

/// Child slots of a node, one owning slot per possible byte value.
///
/// The iterative teardown [`Drop`] hangs off this type rather than [`Trie`]
/// itself, which leaves `Trie` free to be destructured by value.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Table<V>(pub(crate) [Option<Box<Trie<V>>>; CHILDREN]);

impl<V> Table<V> {
    pub(crate) fn new() -> Self {
        Table([const { None }; CHILDREN])
    }

    pub(crate) fn get(&self, byte: u8) -> Option<&Trie<V>> {
        self.0[usize::from(byte)].as_deref()
    }

    pub(crate) fn get_mut(&mut self, byte: u8) -> Option<&mut Trie<V>> {
        self.0[usize::from(byte)].as_deref_mut()
    }

    /// The child for `byte`, materializing a fresh node if the slot is empty.
    pub(crate) fn get_or_insert(&mut self, byte: u8) -> &mut Trie<V>
    where
        V: Default,
    {
        self.0[usize::from(byte)].get_or_insert_with(Default::default)
    }
}

impl<V> core::fmt::Debug for Trie<V>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Trie<V>>())
            .field("value", &self.value)
            .field("children", &self.children)
            .finish()
    }
}

impl<V> core::fmt::Debug for Table<V>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .iter()
                    .enumerate()
                    .filter_map(|(byte, slot)| slot.as_deref().map(|child| (byte, child))),
            )
            .finish()
    }
}

impl<V: Default> Default for Trie<V> {
    fn default() -> Self {
        Trie {
            value: V::default(),
            children: Table::new(),
        }
    }
}

impl<V> From<V> for Trie<V> {
    /// A lone root node holding `value`.
    fn from(value: V) -> Self {
        Trie {
            value,
            children: Table::new(),
        }
    }
}

impl<V> Trie<V> {
    /// An empty trie: a single root node with a default payload.
    pub fn new() -> Self
    where
        V: Default,
    {
        Trie::default()
    }

    /// Follows `key` one byte at a time and returns the node it lands on.
    ///
    /// The empty key lands on `self`. A node is present whenever its path
    /// exists, whether the key was inserted directly or materialized as the
    /// prefix of a longer one; the two are indistinguishable here. Never
    /// allocates.
    #[must_use]
    pub fn find<K: Key + ?Sized>(&self, key: &K) -> Option<&Self> {
        let mut node = self;
        for byte in key.as_bytes() {
            node = node.children.get(byte)?;
        }
        Some(node)
    }

    #[must_use]
    pub fn find_mut<K: Key + ?Sized>(&mut self, key: &K) -> Option<&mut Self> {
        let mut node = self;
        for byte in key.as_bytes() {
            node = node.children.get_mut(byte)?;
        }
        Some(node)
    }

    /// The payload at `key`, if its path exists.
    #[must_use]
    pub fn get<K: Key + ?Sized>(&self, key: &K) -> Option<&V> {
        self.find(key).map(|node| &node.value)
    }

    #[must_use]
    pub fn get_mut<K: Key + ?Sized>(&mut self, key: &K) -> Option<&mut V> {
        self.find_mut(key).map(|node| &mut node.value)
    }

    /// Inserts `key`, creating every node missing along its path, and
    /// returns the node the final byte lands on.
    ///
    /// Fails with [`Error::Occupied`] when that final node already exists.
    /// The trie is untouched on failure: a conflict can only arise when the
    /// whole path was already in place. Prefixes and extensions of existing
    /// keys are not conflicts, only the exact key is. The empty key returns
    /// the root.
    pub fn insert<K: Key + ?Sized>(&mut self, key: &K) -> Result<&mut Self>
    where
        V: Default,
    {
        let mut node = self;
        let mut bytes = key.as_bytes().into_iter().peekable();
        while let Some(byte) = bytes.next() {
            if bytes.peek().is_none() && node.children.get(byte).is_some() {
                return Err(Error::Occupied);
            }
            node = node.children.get_or_insert(byte);
        }
        Ok(node)
    }

    /// Like [`insert`](Trie::insert), except an existing final node is
    /// returned instead of reported as a conflict. Idempotent.
    pub fn insert_or_find<K: Key + ?Sized>(&mut self, key: &K) -> &mut Self
    where
        V: Default,
    {
        let mut node = self;
        for byte in key.as_bytes() {
            node = node.children.get_or_insert(byte);
        }
        node
    }

    /// The child one `byte` edge below this node.
    #[must_use]
    pub fn child(&self, byte: u8) -> Option<&Self> {
        self.children.get(byte)
    }

    #[must_use]
    pub fn child_mut(&mut self, byte: u8) -> Option<&mut Self> {
        self.children.get_mut(byte)
    }

    /// Occupied child slots of this node in ascending byte order.
    pub fn children(&self) -> Children<'_, V> {
        Children::new(self)
    }

    /// True when no child slot is occupied.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.0.iter().all(Option::is_none)
    }
}
