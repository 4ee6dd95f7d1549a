use super::{node::Table, Trie};
use smallvec::SmallVec;

/// Work items for the explicit teardown stack.
///
/// A `Visit` node still has children to detach; an `Emit` node has been
/// fully drained and only its payload remains to hand out.
enum Frame<V> {
    Visit(Box<Trie<V>>),
    Emit(Box<Trie<V>>),
}

impl<V> Table<V> {
    /// Detaches every subtree and feeds each node's payload to `hook`,
    /// children strictly before their parent, siblings in ascending byte
    /// order. Runs on an explicit stack, so the depth of the trie never
    /// becomes depth of the call stack.
    pub(crate) fn drain_with<F: FnMut(V)>(&mut self, hook: &mut F) {
        let mut stack: SmallVec<[Frame<V>; 32]> = SmallVec::new();
        stack.extend(self.take_rev().map(Frame::Visit));
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Visit(mut node) => {
                    // The node re-enters the stack beneath its children, so
                    // it pops again, as Emit, only once they are all gone.
                    let below = stack.len();
                    stack.extend(node.children.take_rev().map(Frame::Visit));
                    stack.insert(below, Frame::Emit(node));
                }
                Frame::Emit(node) => {
                    let Trie { value, .. } = *node;
                    hook(value);
                }
            }
        }
    }

    /// Empties the slots back to front, yielding the detached children.
    ///
    /// Reversed so that stacked frames pop in ascending byte order.
    fn take_rev(&mut self) -> impl Iterator<Item = Box<Trie<V>>> + '_ {
        self.0.iter_mut().rev().filter_map(Option::take)
    }
}

impl<V> Drop for Table<V> {
    fn drop(&mut self) {
        // Nodes destructured by drain_with land here with their slots
        // already empty, so the drop glue never recurses past one level.
        self.drain_with(&mut drop);
    }
}

impl<V> Trie<V> {
    /// Drops every descendant node. The node itself and its payload stay.
    pub fn clear(&mut self) {
        self.children.drain_with(&mut drop);
    }

    /// Removes every descendant, handing each payload to `hook` exactly
    /// once: children strictly before their parent, siblings in ascending
    /// byte order. The payload of `self` stays put.
    pub fn clear_with<F: FnMut(V)>(&mut self, mut hook: F) {
        self.children.drain_with(&mut hook);
    }

    /// Consumes the trie, handing every payload to `hook` in
    /// [`clear_with`](Trie::clear_with) order and finishing with the
    /// payload of `self`.
    pub fn release_with<F: FnMut(V)>(mut self, mut hook: F) {
        self.children.drain_with(&mut hook);
        hook(self.value);
    }
}
