//! Multi-record transaction (MRT) coordination.
//!
//! A [`Txn`] groups reads and writes issued against several keys into one unit that commits or
//! aborts together. Conflict detection is driven entirely by the client: every successful read
//! records the record version the server returned, and [`Txn::commit`] is only safe to mark
//! committed once every recorded version has been verified unchanged.
//!
//! This module owns the client-side bookkeeping (id generation, the reads/writes tracking maps,
//! and the commit/abort state machine), and drives verify/roll-forward/roll-backward by replaying
//! the digests it tracked through the ordinary read/touch command machinery, tagged with this
//! transaction's id so the server can associate them with its in-flight monitor record. See
//! `DESIGN.md` for the wire-level details this simplifies.

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    commands::{CommandError, ReadCommand, TouchCommand},
    policy::{BasePolicy, WritePolicy},
    Bins, Client, Key,
};

/// Errors raised while coordinating a [`Txn`].
#[derive(Debug, thiserror::Error)]
pub enum TxnError {
    /// A key from a different namespace was used in a transaction already bound to one.
    #[error("transaction is bound to namespace {current:?}, cannot also touch {attempted:?}")]
    NamespaceMismatch {
        current: String,
        attempted: String,
    },
    /// `commit` or `abort` was called more than once, or after the other was already called.
    #[error("transaction has already been committed or aborted")]
    AlreadyCompleted,
    /// A read recorded during the transaction no longer matches the server's version at commit
    /// time.
    #[error("transaction verify failed: one or more read keys changed since they were read")]
    VerifyFail,
    /// Verify failed, and closing out the monitor record afterward also failed.
    #[error("transaction verify failed and the monitor record could not be closed")]
    VerifyFailCloseAbandoned,
    /// Verify failed, and rolling back the writes already applied also failed.
    #[error("transaction verify failed and rolling back writes also failed")]
    VerifyFailAbortAbandoned,
    /// The monitor record could not be marked for roll-forward; the server will eventually time
    /// it out and abort on its own.
    #[error("transaction commit could not mark the monitor record for roll-forward")]
    MarkRollForwardAbandoned,
    /// A verify, roll-forward, or roll-backward round trip failed at the network layer.
    #[error("transaction command failed")]
    CommandFailed(Box<CommandError>),
}

impl From<CommandError> for TxnError {
    fn from(err: CommandError) -> Self {
        Self::CommandFailed(Box::new(err))
    }
}

pub type Result<T, E = TxnError> = std::result::Result<T, E>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Open,
    Committed,
    Aborted,
}

/// xorshift64* step. `seed` must be non-zero; the output may legitimately be zero, which callers
/// reject and retry, per the generator's contract for transaction ids.
fn xorshift64star(seed: &mut u64) -> u64 {
    let mut x = *seed;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *seed = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

fn generate_id() -> u64 {
    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
        | 1;
    loop {
        let id = xorshift64star(&mut seed);
        if id != 0 {
            return id;
        }
    }
}

/// A client-coordinated multi-record transaction.
///
/// Construct with [`Txn::new`] and wrap in an `Arc`, thread clones of it through the policies of
/// every operation that should participate, then call [`Txn::commit`] or [`Txn::abort`] exactly
/// once.
#[derive(Debug)]
pub struct Txn {
    id: u64,
    namespace: Mutex<Option<String>>,
    reads: Mutex<HashMap<(String, [u8; 20]), u64>>,
    writes: Mutex<HashSet<(String, [u8; 20])>>,
    state: Mutex<State>,
    in_doubt: AtomicBool,
    monitor_exists: AtomicBool,
    timeout_seconds: u32,
}

impl Txn {
    /// Starts a new transaction with the given monitor-record timeout, in seconds.
    #[must_use]
    pub fn new(timeout_seconds: u32) -> Self {
        Self {
            id: generate_id(),
            namespace: Mutex::new(None),
            reads: Mutex::new(HashMap::new()),
            writes: Mutex::new(HashSet::new()),
            state: Mutex::new(State::Open),
            in_doubt: AtomicBool::new(false),
            monitor_exists: AtomicBool::new(false),
            timeout_seconds,
        }
    }

    /// Non-zero transaction id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Whether any write in this transaction had an in-doubt outcome.
    #[must_use]
    pub fn in_doubt(&self) -> bool {
        self.in_doubt.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn timeout_seconds(&self) -> u32 {
        self.timeout_seconds
    }

    fn key_id(key: &Key) -> (String, [u8; 20]) {
        (key.namespace.clone().into_owned(), key.digest())
    }

    fn check_namespace(&self, key: &Key) -> Result<()> {
        let mut namespace = self.namespace.lock().unwrap();
        match namespace.as_deref() {
            Some(current) if current == key.namespace => Ok(()),
            Some(current) => Err(TxnError::NamespaceMismatch {
                current: current.to_owned(),
                attempted: key.namespace.clone().into_owned(),
            }),
            None => {
                *namespace = Some(key.namespace.clone().into_owned());
                Ok(())
            }
        }
    }

    /// Records that `key` was read and the server reported `version`, unless `key` is already
    /// tracked as a write in this transaction (writes take precedence).
    pub fn on_read(&self, key: &Key, version: Option<u64>) -> Result<()> {
        self.check_namespace(key)?;
        let id = Self::key_id(key);
        if self.writes.lock().unwrap().contains(&id) {
            return Ok(());
        }
        if let Some(version) = version {
            self.reads.lock().unwrap().insert(id, version);
        }
        Ok(())
    }

    /// Records that `key` was written. Moves the key out of `reads` (a write supersedes any
    /// earlier read) and into `writes`. `in_doubt` marks the write's I/O outcome as undetermined,
    /// which also marks the transaction's monitor record as possibly existing on the server.
    pub fn on_write(&self, key: &Key, in_doubt: bool) -> Result<()> {
        self.check_namespace(key)?;
        let id = Self::key_id(key);
        self.reads.lock().unwrap().remove(&id);
        self.writes.lock().unwrap().insert(id);
        if in_doubt {
            self.in_doubt.store(true, Ordering::Release);
            self.monitor_exists.store(true, Ordering::Release);
        }
        Ok(())
    }

    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.lock().unwrap().len()
    }

    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    fn begin_completion(&self, target: State) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if *state != State::Open {
            return Err(TxnError::AlreadyCompleted);
        }
        *state = target;
        Ok(())
    }

    /// Rebuilds a digest-only key for a tracked read or write. The set name is unknown once only
    /// the digest was kept, but the server resolves records by namespace + digest alone, so an
    /// empty set name is harmless here.
    fn digest_key(namespace: &str, digest: [u8; 20]) -> Key {
        Key {
            namespace: Cow::Owned(namespace.to_owned()),
            set_name: Cow::Borrowed(""),
            user_key: None,
            digest,
        }
    }

    fn read_policy(self_txn: Arc<Self>) -> BasePolicy {
        BasePolicy {
            txn: Some(self_txn),
            ..BasePolicy::default()
        }
    }

    fn write_policy(self_txn: Arc<Self>) -> WritePolicy {
        WritePolicy {
            base_policy: Self::read_policy(self_txn),
            ..WritePolicy::default()
        }
    }

    /// Re-reads every key this transaction recorded a read version for and compares the server's
    /// current generation against the version recorded at read time.
    async fn verify(self: &Arc<Self>, client: &Client) -> Result<()> {
        let reads: Vec<_> = self
            .reads
            .lock()
            .unwrap()
            .iter()
            .map(|((ns, digest), version)| (ns.clone(), *digest, *version))
            .collect();

        let policy = Self::read_policy(Arc::clone(self));
        for (namespace, digest, expected_version) in reads {
            let key = Self::digest_key(&namespace, digest);
            let mut command =
                ReadCommand::new(&policy, Arc::clone(client.cluster()), &key, Bins::None);
            command.execute().await?;
            let record = command.record.expect("Ok result always yields a record");
            if u64::from(record.generation) != expected_version {
                return Err(TxnError::VerifyFail);
            }
        }
        Ok(())
    }

    /// Touches every written key, tagged with this transaction's id (and, for roll-forward, its
    /// monitor deadline), so the server can finalize or discard the pending version.
    async fn roll(self: &Arc<Self>, client: &Client) -> Result<(), CommandError> {
        let writes: Vec<_> = self
            .writes
            .lock()
            .unwrap()
            .iter()
            .map(|(ns, digest)| (ns.clone(), *digest))
            .collect();

        let policy = Self::write_policy(Arc::clone(self));
        for (namespace, digest) in writes {
            let key = Self::digest_key(&namespace, digest);
            let mut command = TouchCommand::new(&policy, Arc::clone(client.cluster()), &key);
            command.execute().await?;
        }
        Ok(())
    }

    /// Verifies every read recorded during the transaction is still current, then rolls all
    /// writes forward. Returns `Err` the first time this (or [`Txn::abort`]) is called on an
    /// already-completed transaction, or if a read key's version no longer matches the server.
    ///
    /// On verify failure, already-applied writes are best-effort rolled back before the error is
    /// returned.
    pub async fn commit(self: Arc<Self>, client: &Client) -> Result<()> {
        if let Err(err) = self.verify(client).await {
            return match self.roll(client).await {
                Ok(()) => Err(err),
                Err(_) => Err(TxnError::VerifyFailAbortAbandoned),
            };
        }

        self.begin_completion(State::Committed)?;

        if let Err(err) = self.roll(client).await {
            tracing::warn!(%err, "failed to roll transaction writes forward after commit");
            return Err(TxnError::MarkRollForwardAbandoned);
        }

        Ok(())
    }

    /// Rolls back every write recorded during the transaction. Idempotency rules are the same as
    /// [`Txn::commit`].
    pub async fn abort(self: Arc<Self>, client: &Client) -> Result<()> {
        self.begin_completion(State::Aborted)?;
        self.roll(client).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{State, Txn};
    use crate::Key;

    #[test]
    fn id_is_never_zero() {
        for _ in 0..1000 {
            assert_ne!(Txn::new(60).id(), 0);
        }
    }

    #[test]
    fn read_then_write_moves_key_out_of_reads() {
        let txn = Txn::new(60);
        let key = Key::new("test", "test", "k1");
        txn.on_read(&key, Some(1)).unwrap();
        assert_eq!(txn.read_count(), 1);
        txn.on_write(&key, false).unwrap();
        assert_eq!(txn.read_count(), 0);
        assert_eq!(txn.write_count(), 1);
        assert!(!txn.in_doubt());
    }

    #[test]
    fn in_doubt_write_sets_flag() {
        let txn = Txn::new(60);
        let key = Key::new("test", "test", "k1");
        txn.on_write(&key, true).unwrap();
        assert!(txn.in_doubt());
    }

    #[test]
    fn namespace_mismatch_is_rejected() {
        let txn = Txn::new(60);
        txn.on_read(&Key::new("ns1", "test", "k1"), Some(1))
            .unwrap();
        let err = txn.on_read(&Key::new("ns2", "test", "k2"), Some(1));
        assert!(err.is_err());
    }

    #[test]
    fn completion_is_one_shot() {
        let txn = Txn::new(60);
        txn.begin_completion(State::Committed).unwrap();
        assert!(txn.begin_completion(State::Committed).is_err());
        assert!(txn.begin_completion(State::Aborted).is_err());

        let txn = Txn::new(60);
        txn.begin_completion(State::Aborted).unwrap();
        assert!(txn.begin_completion(State::Aborted).is_err());
        assert!(txn.begin_completion(State::Committed).is_err());
    }
}
