use crate::Key;

/// A single delete within a heterogeneous batch request.
#[derive(Clone, Debug)]
pub struct BatchDelete {
    /// Key.
    pub key: Key,

    /// Whether the record existed prior to the delete. Filled in after execution.
    pub existed: bool,
}

impl BatchDelete {
    /// Create a new `BatchDelete` instance for the given key.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            existed: false,
        }
    }
}
