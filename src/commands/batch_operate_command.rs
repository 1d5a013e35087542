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

use std::{collections::HashMap, sync::Arc};

use tokio::time::Instant;
use tracing::warn;

use super::{buffer::InfoAttr, Command, CommandError, Result, StreamCommand};
use crate::{
    cluster::Node,
    net::Connection,
    policy::{BatchPolicy, Policy},
    value, BatchRecord, Record, ResultCode, Value,
};

struct ParsedBatchRecord {
    batch_index: usize,
    found_key: bool,
    record: Option<Record>,
}

/// Executes a heterogeneous batch of reads, writes, deletes and UDF calls against a single node.
///
/// The wire encoding is a generalization of the homogeneous batch-read protocol: each record
/// carries its own read/write attribute byte instead of assuming every entry is a read.
#[derive(Clone, Debug)]
pub struct BatchOperateCommand {
    policy: BatchPolicy,
    pub node: Arc<Node>,
    pub records: Vec<BatchRecord>,
}

impl BatchOperateCommand {
    pub fn new(policy: &BatchPolicy, node: Arc<Node>, records: Vec<BatchRecord>) -> Self {
        Self {
            policy: policy.clone(),
            node,
            records,
        }
    }

    pub async fn execute(&mut self) -> Result<()> {
        let mut iterations = 0;
        let mut sent_count = 0_u32;
        let base_policy = self.policy.as_ref().clone();
        let is_write = self.records.iter().any(BatchRecord::is_write);

        let deadline = base_policy.deadline();

        loop {
            iterations += 1;

            if let Some(max_retries) = base_policy.max_retries() {
                if iterations > max_retries + 1 {
                    return Err(super::wrap_failed(
                        CommandError::Timeout,
                        iterations,
                        sent_count,
                        is_write,
                        Some(self.node.name().to_owned()),
                    ));
                }
            }

            if iterations > 1 {
                if base_policy.sleep_between_retries.is_zero() {
                    tokio::task::yield_now().await;
                } else {
                    tokio::time::sleep(base_policy.sleep_between_retries).await;
                }
            }

            if let Some(deadline) = deadline {
                if Instant::now() > deadline {
                    break;
                }
            }

            let node = match self.get_node().await {
                Some(node) => node,
                None => continue,
            };

            let mut conn = match node.get_connection().await {
                Ok(conn) => conn,
                Err(err) => {
                    warn!(%node, %err, "failed to get a new connection");
                    continue;
                }
            };

            self.prepare_buffer(&mut conn)
                .map_err(|e| CommandError::PrepareBuffer(Box::new(e)))?;

            if let Err(err) = conn.flush().await {
                warn!(%node, %err, "failed to flush remaining buffer to connection");
                conn.invalidate().await;
                continue;
            }
            sent_count += 1;

            if let Err(err) = self.parse_result(&mut conn).await {
                if !super::keep_connection(&err) {
                    conn.invalidate().await;
                }

                if super::is_retryable(&err) {
                    warn!(%node, %err, iterations, "retrying batch command after retryable error");
                    continue;
                }

                return Err(super::wrap_failed(
                    err,
                    iterations,
                    sent_count,
                    is_write,
                    Some(node.name().to_owned()),
                ));
            }

            return Ok(());
        }

        Err(super::wrap_failed(
            CommandError::Timeout,
            iterations,
            sent_count,
            is_write,
            Some(self.node.name().to_owned()),
        ))
    }

    async fn parse_group(
        &mut self,
        conn: &mut Connection,
        proto: super::buffer::ProtoHeader,
        size: usize,
    ) -> Result<bool> {
        while conn.bytes_read() < size {
            match self.parse_record(conn, proto).await? {
                None => return Ok(false),
                Some(parsed) => {
                    let record = self
                        .records
                        .get_mut(parsed.batch_index)
                        .expect("Invalid batch index");
                    match record {
                        BatchRecord::Read(r) => r.record = parsed.record,
                        BatchRecord::Write(w) => w.record = parsed.record,
                        BatchRecord::Delete(d) => d.existed = parsed.found_key,
                        BatchRecord::Udf(u) => u.record = parsed.record,
                    }
                }
            }
        }
        Ok(true)
    }

    async fn parse_record(
        &mut self,
        conn: &mut Connection,
        proto: super::buffer::ProtoHeader,
    ) -> Result<Option<ParsedBatchRecord>> {
        let header = conn.read_stream_header(proto).await?;

        let found_key = match header.result_code {
            ResultCode::Ok => true,
            ResultCode::KeyNotFoundError => false,
            rc => return Err(CommandError::ServerError(rc)),
        };

        if header.info_attr.contains(InfoAttr::LAST) {
            return Ok(None);
        }

        let generation = header.generation;
        let expiration = header.expiration;
        let batch_index = header.value as usize;
        let field_count = header.field_count as usize;
        let op_count = header.operation_count as usize;

        let key = StreamCommand::parse_key(conn, field_count).await?;

        let record = if found_key {
            let mut bins: HashMap<String, Value> = HashMap::with_capacity(op_count);

            for _ in 0..op_count {
                conn.read_buffer(8).await?;
                let op_size = conn.buffer().read_u32() as usize;
                conn.buffer().advance(1);
                let particle_type = conn.buffer().read_u8();
                conn.buffer().advance(1);
                let name_size = conn.buffer().read_u8() as usize;
                conn.read_buffer(name_size).await?;
                let name = conn.buffer().read_str(name_size)?;
                let particle_bytes_size = op_size - (4 + name_size);
                conn.read_buffer(particle_bytes_size).await?;
                let value =
                    value::bytes_to_particle(particle_type, conn.buffer(), particle_bytes_size)?;
                bins.insert(name, value);
            }

            Some(Record::new(Some(key), bins, generation, expiration))
        } else {
            None
        };

        Ok(Some(ParsedBatchRecord {
            batch_index,
            found_key,
            record,
        }))
    }
}

#[async_trait::async_trait]
impl Command for BatchOperateCommand {
    fn prepare_buffer(&mut self, conn: &mut Connection) -> Result<()> {
        conn.buffer()
            .set_batch_operate(&self.policy, &self.records)
            .map_err(Into::into)
    }

    async fn get_node(&self) -> Option<Arc<Node>> {
        Some(Arc::clone(&self.node))
    }

    async fn parse_result(&mut self, conn: &mut Connection) -> Result<()> {
        loop {
            let proto = conn.read_proto_header().await.map_err(|err| {
                warn!(%err, "Parse result error");
                err
            })?;
            conn.bookmark();
            if proto.size > 0 && !self.parse_group(conn, proto, proto.size).await? {
                break;
            }
        }
        Ok(())
    }

    fn is_write(&self) -> bool {
        self.records.iter().any(BatchRecord::is_write)
    }
}
