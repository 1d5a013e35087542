// Copyright 2015-2018 Aerospike, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    collections::{
        hash_map::Entry::{Occupied, Vacant},
        HashMap,
    },
    str,
    sync::Arc,
    vec::Vec,
};

use base64::engine::{general_purpose, Engine};
use tokio::sync::RwLock;

use super::{node, ClusterError, Node, Result};
use crate::{commands::Message, net::Connection};

const REPLICAS_NAME: &str = "replicas";

// Validates a Database server node
#[derive(Debug, Clone)]
pub struct PartitionTokenizer {
    buffer: Vec<u8>,
    _length: usize,
    _offset: usize,
}

impl PartitionTokenizer {
    pub async fn new(conn: &mut Connection) -> Result<Self> {
        let info_map = Message::info(conn, &[REPLICAS_NAME]).await?;
        if let Some(buf) = info_map.get(REPLICAS_NAME) {
            return Ok(Self {
                _length: info_map.len(),
                buffer: buf.as_bytes().to_owned(),
                _offset: 0,
            });
        }
        Err(ClusterError::MissingReplicas)
    }

    /// Merges this node's view of the `replicas` info command into `nmap`, returning the new
    /// combined map.
    ///
    /// Response format: `<ns>:<regime>,<base64 bitmap for replica 0>,<base64 bitmap for replica
    /// 1>,...;<ns>:...`, where replica 0 is the partition's master copy, replica 1 its first prole
    /// copy, and so on. A set bit at index `i` of a rank's bitmap means this node holds that copy
    /// of partition `i`.
    pub async fn update_partition(
        &self,
        nmap: Arc<RwLock<HashMap<String, Vec<Vec<Arc<Node>>>>>>,
        node: Arc<Node>,
    ) -> Result<HashMap<String, Vec<Vec<Arc<Node>>>>> {
        let mut amap = nmap.read().await.clone();

        let part_str = str::from_utf8(&self.buffer)?;
        for ns_entry in part_str.trim_end().split(';').filter(|s| !s.is_empty()) {
            let mut fields = ns_entry.splitn(2, ':');
            let ns = fields.next().ok_or(ClusterError::InvalidPartitionInfo)?;
            let rest = fields.next().ok_or(ClusterError::InvalidPartitionInfo)?;

            // First comma-separated field is the replication regime, not a bitmap.
            let mut ranks = rest.split(',');
            ranks.next().ok_or(ClusterError::InvalidPartitionInfo)?;

            let bitmaps = ranks
                .map(|b64| general_purpose::STANDARD.decode(b64))
                .collect::<std::result::Result<Vec<_>, _>>()?;

            let partitions = match amap.entry(ns.to_string()) {
                Vacant(entry) => entry.insert(vec![Vec::new(); node::PARTITIONS]),
                Occupied(entry) => entry.into_mut(),
            };

            for (rank, bitmap) in bitmaps.iter().enumerate() {
                for (idx, replicas) in partitions.iter_mut().enumerate() {
                    if bitmap[idx >> 3] & (0x80 >> (idx & 7) as u8) == 0 {
                        continue;
                    }
                    if replicas.len() <= rank {
                        // A lower rank hasn't reported for this partition yet in this tend pass;
                        // approximate it with the same node until its own bitmap arrives.
                        replicas.resize(rank + 1, Arc::clone(&node));
                    }
                    replicas[rank] = Arc::clone(&node);
                }
            }
        }

        Ok(amap)
    }
}
