use crate::{
    batch::{BatchDelete, BatchRead, BatchUdf, BatchWrite},
    Key,
};

/// A single entry in a heterogeneous batch request: a read, write, delete or UDF call against one
/// key, dispatched alongside the rest of the batch and routed to whichever node owns its key.
#[derive(Clone, Debug)]
pub enum BatchRecord {
    /// Read one or more bins (or just metadata) of a record.
    Read(BatchRead),
    /// Write bin(s) of a record.
    Write(BatchWrite),
    /// Delete a record.
    Delete(BatchDelete),
    /// Invoke a UDF against a record.
    Udf(BatchUdf),
}

impl BatchRecord {
    #[must_use]
    pub(crate) const fn key(&self) -> &Key {
        match self {
            Self::Read(r) => &r.key,
            Self::Write(w) => &w.key,
            Self::Delete(d) => &d.key,
            Self::Udf(u) => &u.key,
        }
    }

    /// Whether this record can be wire-encoded as a one-byte repeat of `prev` rather than a full
    /// header: same record kind, same namespace (and set, if `match_set`), and the same
    /// ops/policy/function-name identity within that kind.
    #[must_use]
    pub(crate) fn repeats(&self, prev: &Self, match_set: bool) -> bool {
        let key = self.key();
        let prev_key = prev.key();
        if key.namespace != prev_key.namespace {
            return false;
        }
        if match_set && key.set_name != prev_key.set_name {
            return false;
        }

        match (self, prev) {
            (Self::Read(a), Self::Read(b)) => a.bins == b.bins,
            (Self::Write(a), Self::Write(b)) => a.repeats(b),
            (Self::Delete(_), Self::Delete(_)) => true,
            (Self::Udf(a), Self::Udf(b)) => a.repeats(b),
            _ => false,
        }
    }

    #[must_use]
    pub(crate) const fn is_write(&self) -> bool {
        !matches!(self, Self::Read(_))
    }
}
