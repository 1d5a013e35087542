/// Replica selection algorithm: chooses which member of a partition's replica set (the master
/// copy and its prole copies) a read is sent to.
///
/// Writes always target the master replica regardless of this setting; it only affects read-class
/// commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Replica {
    /// Always read from the partition's master replica.
    #[default]
    Master,
    /// Distribute reads across the prole replicas, falling back to master when no prole copy is
    /// known for the partition.
    MasterProles,
    /// Round-robin across the whole replica set, master included.
    Sequence,
    /// Prefer a replica hosted in one of [`crate::policy::ClientPolicy::rack_ids`]; fall back to
    /// [`Self::Sequence`] when no replica is in a matching rack.
    PreferRack,
}
