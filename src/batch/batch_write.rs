use crate::{Bin, Key, Record, Value};

/// A single write within a heterogeneous batch request.
///
/// Bin data is copied out of the `Bin<'_>` slice passed to [`Self::new`] rather than borrowed,
/// since a batch write is split across nodes and executed on separate tasks.
#[derive(Clone, Debug)]
pub struct BatchWrite {
    /// Key.
    pub key: Key,

    /// Bin names and values to write.
    pub bins: Vec<(String, Value)>,

    /// Will contain the record after the batch write operation, if the server returned one.
    pub record: Option<Record>,
}

impl BatchWrite {
    /// Create a new `BatchWrite` instance for the given key and bins.
    #[must_use]
    pub fn new(key: Key, bins: &[Bin<'_>]) -> Self {
        let bins = bins
            .iter()
            .map(|bin| (bin.name.to_owned(), bin.value.clone()))
            .collect();
        Self {
            key,
            bins,
            record: None,
        }
    }

    #[must_use]
    pub(crate) fn repeats(&self, other: &Self) -> bool {
        self.bins.len() == other.bins.len()
            && self
                .bins
                .iter()
                .zip(&other.bins)
                .all(|((name, _), (other_name, _))| name == other_name)
    }
}
