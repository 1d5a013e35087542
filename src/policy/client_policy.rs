use std::{collections::HashMap, time::Duration};

use crate::commands::{self, CommandError};

/// `ClientPolicy` encapsulates parameters for client policy command.
#[derive(Clone, Debug)]
pub struct ClientPolicy {
    /// Username and password pair to authenticate against the cluster. A value of [`None`]
    /// disables authentication altogether.
    pub user_password: Option<(String, String)>,

    /// Initial timeout when creating a new connection to the server.
    pub timeout: Option<Duration>,

    /// Idling time after which unused connections are closed.
    pub idle_timeout: Option<Duration>,

    /// Maximum amount of socket connections per node in the cluster.
    pub max_conns_per_node: usize,

    /// Number of connection pools per node that the client should maintain. For transaction
    /// heavy workloads with many concurrent operations, increasing this value reduces lock
    /// contention on each pool.
    pub conn_pools_per_node: usize,

    /// Return an error if the client is not initially connected to any nodes after creating a new
    /// instance.
    pub fail_if_not_connected: bool,

    /// Threshold after which the data buffer for each node connection will be shrunk to only the
    /// currently used memory size.
    ///
    /// Each buffer will grow over time, depending on the amount of raw response data, and re-use
    /// any allocated memory for future operations. This setting allows reducing the used memory
    /// by shrinking the buffer again after it has passed the threshold.
    pub buffer_reclaim_threshold: usize,

    /// Interval at which to check for changes in the cluster (like addition or removal of nodes).
    pub tend_interval: Duration,

    /// Translation table for cluster node IPs that allows remapping advertised nodes from info
    /// commands to their real IP.
    ///
    /// This setting is relevant when a mix of clients from both internal and external network
    /// access the cluster, as IPs can be different.
    pub ip_map: Option<HashMap<String, String>>,

    /// Alternative to [`Self::ip_map`], which instead uses the cluster servers' own configured
    /// external IP addresses to determine the proper address for each server.
    pub use_services_alternate: bool,

    /// Expected name of the cluster. If set, all nodes must return this name to be allowed to join
    /// the list of nodes on the client side.
    ///
    /// This should only be set if all servers support the `cluster-name` info command.
    pub cluster_name: Option<String>,

    /// Enables rack-aware replica selection. When set, each node's rack id per namespace is
    /// queried during cluster tend so that [`crate::policy::Replica::PreferRack`] reads can be
    /// routed to a replica in one of [`Self::rack_ids`].
    ///
    /// This should only be set if the cluster has rack awareness configured server-side.
    pub rack_aware: bool,

    /// Rack ids the client itself belongs to, consulted by [`crate::policy::Replica::PreferRack`].
    /// Has no effect unless [`Self::rack_aware`] is also set.
    pub rack_ids: Vec<i32>,
}

impl ClientPolicy {
    /// Default value for the [`Self::buffer_reclaim_threshold`] parameter.
    pub const DEFAULT_BUFFER_RECLAIM_THRESHOLD: usize = 65536;
    /// Default value for the [`Self::conn_pools_per_node`] parameter.
    pub const DEFAULT_CONN_POOLS_PER_NODE: usize = 1;
    /// Default value for the [`Self::fail_if_not_connected`] parameter.
    pub const DEFAULT_FAIL_IF_NOT_CONNECTED: bool = true;
    /// Default value for the [`Self::idle_timeout`] parameter.
    pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(5);
    /// Default value for the [`Self::max_conns_per_node`] parameter.
    pub const DEFAULT_MAX_CONNS_PER_NODE: usize = 256;
    /// Default value for the [`Self::tend_interval`] parameter.
    pub const DEFAULT_TEND_INTERVAL: Duration = Duration::from_secs(1);
    /// Default value for the [`Self::timeout`] parameter.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    /// Default value for the [`Self::use_services_alternate`] parameter.
    pub const DEFAULT_USE_SERVICES_ALTERNATE: bool = false;

    /// Enable authentication and use the given username and password as credentials.
    ///
    /// # Errors
    /// Returns an error if the password cannot be hashed.
    pub fn set_user_password(
        &mut self,
        username: String,
        password: &str,
    ) -> Result<(), CommandError> {
        let password = commands::hash_password(password)?;
        self.user_password = Some((username, password));
        Ok(())
    }
}

impl Default for ClientPolicy {
    fn default() -> Self {
        Self {
            user_password: None,
            timeout: Some(Self::DEFAULT_TIMEOUT),
            idle_timeout: Some(Self::DEFAULT_IDLE_TIMEOUT),
            max_conns_per_node: Self::DEFAULT_MAX_CONNS_PER_NODE,
            conn_pools_per_node: Self::DEFAULT_CONN_POOLS_PER_NODE,
            fail_if_not_connected: Self::DEFAULT_FAIL_IF_NOT_CONNECTED,
            buffer_reclaim_threshold: Self::DEFAULT_BUFFER_RECLAIM_THRESHOLD,
            tend_interval: Self::DEFAULT_TEND_INTERVAL,
            ip_map: None,
            use_services_alternate: Self::DEFAULT_USE_SERVICES_ALTERNATE,
            cluster_name: None,
            rack_aware: false,
            rack_ids: Vec::new(),
        }
    }
}
