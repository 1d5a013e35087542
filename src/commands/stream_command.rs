// Copyright 2015-2020 Aerospike, Inc.
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

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{mpsc, Mutex};
use tracing::warn;

use super::{
    buffer::{InfoAttr, ProtoHeader},
    field_type::FieldType,
    Command, CommandError, Result,
};
use crate::{
    cluster::{partition, partition_tracker::PartitionTracker, Node},
    net::Connection,
    value::bytes_to_particle,
    Key, Record, ResultCode, Value,
};

pub struct StreamCommand {
    node: Arc<Node>,
    tx: mpsc::Sender<Result<Record>>,
    task_id: u64,
    /// Scan partition cursor state, shared across every node a scan was split across, so a
    /// partition can resume from its last delivered record if the node serving it disappears.
    tracker: Arc<Mutex<PartitionTracker>>,
}

impl StreamCommand {
    pub fn new(
        node: Arc<Node>,
        tx: mpsc::Sender<Result<Record>>,
        task_id: u64,
        tracker: Arc<Mutex<PartitionTracker>>,
    ) -> Self {
        Self {
            node,
            tx,
            task_id,
            tracker,
        }
    }

    async fn parse_record(
        &self,
        conn: &mut Connection,
        proto: ProtoHeader,
        size: usize,
    ) -> Result<(Option<Record>, bool)> {
        let header = conn.read_stream_header(proto).await?;

        if header.result_code != ResultCode::Ok {
            if conn.bytes_read() < size {
                let remaining = size - conn.bytes_read();
                conn.read_buffer(remaining).await?;
            }

            return match header.result_code {
                ResultCode::KeyNotFoundError => Ok((None, false)),
                rc => Err(CommandError::ServerError(rc)),
            };
        }

        // if cmd is the end marker of the response, do not proceed further
        if header.info_attr.contains(InfoAttr::LAST) {
            return Ok((None, false));
        }

        let generation = header.generation;
        let expiration = header.expiration;
        let field_count = header.field_count as usize;
        let op_count = header.operation_count as usize;

        let key = Self::parse_key(conn, field_count).await?;
        let partition_id = partition::id_from_digest(&key.digest) as u16;

        // Partition is done, don't go further
        if header.info_attr.contains(InfoAttr::PARTITION_DONE) {
            self.tracker.lock().await.mark_done(partition_id);
            return Ok((None, true));
        }

        let mut bins: HashMap<String, Value> = HashMap::with_capacity(op_count);

        for _ in 0..op_count {
            conn.read_buffer(8).await?;
            let op_size = conn.buffer().read_u32() as usize;
            conn.buffer().advance(1);
            let particle_type = conn.buffer().read_u8();
            conn.buffer().advance(1);
            let name_size = conn.buffer().read_u8() as usize;
            conn.read_buffer(name_size).await?;
            let name: String = conn.buffer().read_str(name_size)?;

            let particle_bytes_size = op_size - (4 + name_size);
            conn.read_buffer(particle_bytes_size).await?;
            let value = bytes_to_particle(particle_type, conn.buffer(), particle_bytes_size)?;

            bins.insert(name, value);
        }

        self.tracker
            .lock()
            .await
            .set_cursor(partition_id, key.digest, i64::from(generation));

        let record = Record::new(Some(key), bins, generation, expiration);
        Ok((Some(record), true))
    }

    async fn parse_stream(
        &mut self,
        conn: &mut Connection,
        proto: ProtoHeader,
        size: usize,
    ) -> Result<bool> {
        while !self.tx.is_closed() && conn.bytes_read() < size {
            let res = self.parse_record(conn, proto, size).await;
            match res {
                Ok((Some(rec), _)) => {
                    if self.tx.send(Ok(rec)).await.is_err() {
                        break;
                    }
                }
                Ok((None, cont)) => return Ok(cont),
                Err(err) => {
                    self.tx.send(Err(err)).await.ok();
                    return Ok(false);
                }
            };
        }

        Ok(true)
    }

    pub async fn parse_key(conn: &mut Connection, field_count: usize) -> Result<Key> {
        let mut digest = [0; 20];
        let mut namespace = String::new();
        let mut set_name = String::new();
        let mut orig_key = None;

        for _ in 0..field_count {
            conn.read_buffer(4).await?;
            let field_len = conn.buffer().read_u32() as usize;
            conn.read_buffer(field_len).await?;
            let field_type = conn.buffer().read_u8();

            match field_type {
                x if x == FieldType::DigestRipe as u8 => {
                    digest.copy_from_slice(conn.buffer().read_slice(field_len - 1));
                }
                x if x == FieldType::Namespace as u8 => {
                    namespace = conn.buffer().read_str(field_len - 1)?;
                }
                x if x == FieldType::Table as u8 => {
                    set_name = conn.buffer().read_str(field_len - 1)?;
                }
                x if x == FieldType::Key as u8 => {
                    let particle_type = conn.buffer().read_u8();
                    let particle_bytes_size = field_len - 2;
                    orig_key = Some(bytes_to_particle(
                        particle_type,
                        conn.buffer(),
                        particle_bytes_size,
                    )?);
                }
                _ => unreachable!(),
            }
        }

        Ok(Key {
            namespace,
            set_name,
            user_key: orig_key,
            digest,
        })
    }

    pub(super) fn task_id(&self) -> u64 {
        self.task_id
    }
}

#[async_trait::async_trait]
impl Command for StreamCommand {
    #[allow(unused_variables)]
    fn prepare_buffer(&mut self, conn: &mut Connection) -> Result<()> {
        // should be implemented downstream
        unreachable!()
    }

    async fn get_node(&self) -> Option<Arc<Node>> {
        Some(self.node.clone())
    }

    async fn parse_result(&mut self, conn: &mut Connection) -> Result<()> {
        let mut status = true;

        while status {
            let proto = conn.read_proto_header().await.map_err(|err| {
                warn!(%err, "Parse result error");
                err
            })?;
            conn.bookmark();

            status = false;
            if proto.size > 0 {
                status = self.parse_stream(conn, proto, proto.size).await?;
            }
        }

        Ok(())
    }
}
