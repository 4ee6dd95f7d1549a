use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The exact key is already present, so a strict insert has nothing to
    /// create. The trie is left untouched.
    #[error("key is already present in the trie")]
    Occupied,
}

pub type Result<T> = std::result::Result<T, Error>;
