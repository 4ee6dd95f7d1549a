use super::{Key, Trie};

/// Iterator over the occupied child slots of a single node.
///
/// Yields `(byte, child)` pairs in ascending byte order. It covers one level
/// only and does not descend.
#[derive(Debug, Clone)]
pub struct Children<'a, V> {
    slots: std::iter::Enumerate<std::slice::Iter<'a, Option<Box<Trie<V>>>>>,
}

impl<'a, V> Children<'a, V> {
    pub fn new(trie: &'a Trie<V>) -> Self {
        Self {
            slots: trie.children.0.iter().enumerate(),
        }
    }
}

impl<'a, V> Iterator for Children<'a, V> {
    type Item = (u8, &'a Trie<V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .find_map(|(byte, slot)| slot.as_deref().map(|child| (byte as u8, child)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len()))
    }
}

impl<K: Key, V: Default> FromIterator<K> for Trie<V> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut trie = Trie::new();
        for key in iter {
            trie.insert_or_find(&key);
        }
        trie
    }
}

impl<K: Key, V: Default> Extend<K> for Trie<V> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert_or_find(&key);
        }
    }
}
