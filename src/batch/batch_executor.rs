use std::{cmp, collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{
    batch::{BatchRead, BatchRecord},
    cluster::{partition::Partition, Cluster, Node},
    commands::{BatchOperateCommand, BatchReadCommand},
    errors::{Error, Result},
    policy::{BatchPolicy, Concurrency, Policy, Replica},
    Key,
};

pub struct BatchExecutor {
    cluster: Arc<Cluster>,
}

impl BatchExecutor {
    pub fn new(cluster: Arc<Cluster>) -> Self {
        Self { cluster }
    }

    /// Executes a batch read, preserving the input order of `batch_reads` in the returned vector
    /// regardless of which node answers first or how many nodes the batch was split across.
    pub async fn execute_batch_read(
        &self,
        policy: &BatchPolicy,
        batch_reads: Vec<BatchRead>,
    ) -> Result<Vec<BatchRead>> {
        let total = batch_reads.len();
        let (mut batch_nodes, unresolved) =
            self.get_batch_nodes(batch_reads, policy.replica()).await;

        let mut indices_by_node: HashMap<Arc<Node>, Vec<usize>> = HashMap::new();
        let jobs = batch_nodes
            .drain()
            .map(|(node, (indices, reads))| {
                indices_by_node.insert(Arc::clone(&node), indices);
                BatchReadCommand::new(policy, node, reads)
            })
            .collect();
        let completed = self.execute_batch_jobs(jobs, &policy.concurrency).await?;

        let mut ordered: Vec<Option<BatchRead>> = (0..total).map(|_| None).collect();
        for (index, batch_read) in unresolved {
            ordered[index] = Some(batch_read);
        }
        for mut cmd in completed {
            let indices = indices_by_node
                .remove(&cmd.node)
                .expect("every dispatched node has a recorded index list");
            for (original_index, batch_read) in indices.into_iter().zip(cmd.batch_reads.drain(..))
            {
                ordered[original_index] = Some(batch_read);
            }
        }

        Ok(ordered
            .into_iter()
            .map(|slot| slot.expect("every input key is assigned exactly one output slot"))
            .collect())
    }

    /// Executes a heterogeneous batch of reads, writes, deletes and UDF calls, preserving the
    /// input order of `records` in the returned vector the same way `execute_batch_read` does.
    pub async fn execute_batch(
        &self,
        policy: &BatchPolicy,
        records: Vec<BatchRecord>,
    ) -> Result<Vec<BatchRecord>> {
        let total = records.len();
        let (mut batch_nodes, unresolved) = self
            .get_batch_record_nodes(records, policy.replica())
            .await;

        let mut indices_by_node: HashMap<Arc<Node>, Vec<usize>> = HashMap::new();
        let jobs = batch_nodes
            .drain()
            .map(|(node, (indices, recs))| {
                indices_by_node.insert(Arc::clone(&node), indices);
                BatchOperateCommand::new(policy, node, recs)
            })
            .collect();
        let completed = self.execute_batch_operate_jobs(jobs, &policy.concurrency).await?;

        let mut ordered: Vec<Option<BatchRecord>> = (0..total).map(|_| None).collect();
        for (index, record) in unresolved {
            ordered[index] = Some(record);
        }
        for mut cmd in completed {
            let indices = indices_by_node
                .remove(&cmd.node)
                .expect("every dispatched node has a recorded index list");
            for (original_index, record) in indices.into_iter().zip(cmd.records.drain(..)) {
                ordered[original_index] = Some(record);
            }
        }

        Ok(ordered
            .into_iter()
            .map(|slot| slot.expect("every input key is assigned exactly one output slot"))
            .collect())
    }

    async fn execute_batch_operate_jobs(
        &self,
        jobs: Vec<BatchOperateCommand>,
        concurrency: &Concurrency,
    ) -> Result<Vec<BatchOperateCommand>> {
        let threads = match *concurrency {
            Concurrency::Sequential => 1,
            Concurrency::Parallel => jobs.len(),
            Concurrency::MaxThreads(max) => cmp::min(max, jobs.len()),
        };
        let size = jobs.len() / threads;
        let mut overhead = jobs.len() % threads;
        let last_err = Arc::<Mutex<Option<Error>>>::default();
        let mut slice_index = 0;
        let mut handles = vec![];
        let res = Arc::new(Mutex::new(vec![]));
        for _ in 0..threads {
            let mut thread_size = size;
            if overhead >= 1 {
                thread_size += 1;
                overhead -= 1;
            }
            let slice = Vec::from(&jobs[slice_index..slice_index + thread_size]);
            slice_index = thread_size + 1;
            let last_err = Arc::clone(&last_err);
            let res = Arc::clone(&res);
            let handle = tokio::spawn(async move {
                for mut cmd in slice {
                    if let Err(err) = cmd.execute().await {
                        *last_err.lock().await = Some(err.into());
                    };
                    res.lock().await.push(cmd);
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.ok();
        }

        match Arc::try_unwrap(last_err).unwrap().into_inner() {
            None => Ok(res.lock().await.to_vec()),
            Some(err) => Err(err),
        }
    }

    /// Writes (and deletes, UDF calls) within a heterogeneous batch always resolve to the
    /// partition's master, regardless of `replica`, since only master accepts writes.
    async fn get_batch_record_nodes(
        &self,
        records: Vec<BatchRecord>,
        replica: Replica,
    ) -> (
        HashMap<Arc<Node>, (Vec<usize>, Vec<BatchRecord>)>,
        Vec<(usize, BatchRecord)>,
    ) {
        let mut map: HashMap<Arc<Node>, (Vec<usize>, Vec<BatchRecord>)> = HashMap::new();
        let mut unresolved = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            let record_replica = if record.is_write() {
                Replica::Master
            } else {
                replica
            };
            match self.node_for_key(record.key(), record_replica).await {
                Some(node) => {
                    let entry = map.entry(node).or_insert_with(|| (Vec::new(), Vec::new()));
                    entry.0.push(index);
                    entry.1.push(record);
                }
                None => unresolved.push((index, record)),
            }
        }
        (map, unresolved)
    }

    async fn execute_batch_jobs(
        &self,
        jobs: Vec<BatchReadCommand>,
        concurrency: &Concurrency,
    ) -> Result<Vec<BatchReadCommand>> {
        let threads = match *concurrency {
            Concurrency::Sequential => 1,
            Concurrency::Parallel => jobs.len(),
            Concurrency::MaxThreads(max) => cmp::min(max, jobs.len()),
        };
        let size = jobs.len() / threads;
        let mut overhead = jobs.len() % threads;
        let last_err = Arc::<Mutex<Option<Error>>>::default();
        let mut slice_index = 0;
        let mut handles = vec![];
        let res = Arc::new(Mutex::new(vec![]));
        for _ in 0..threads {
            let mut thread_size = size;
            if overhead >= 1 {
                thread_size += 1;
                overhead -= 1;
            }
            let slice = Vec::from(&jobs[slice_index..slice_index + thread_size]);
            slice_index = thread_size + 1;
            let last_err = Arc::clone(&last_err);
            let res = Arc::clone(&res);
            let handle = tokio::spawn(async move {
                //let next_job = async { jobs.lock().await.next().await};
                for mut cmd in slice {
                    if let Err(err) = cmd.execute().await {
                        *last_err.lock().await = Some(err.into());
                    };
                    res.lock().await.push(cmd);
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.ok();
        }

        match Arc::try_unwrap(last_err).unwrap().into_inner() {
            None => Ok(res.lock().await.to_vec()),
            Some(err) => Err(err),
        }
    }

    /// Groups batch reads by destination node, remembering the original index of each so results
    /// can be reassembled in input order afterward. Reads whose key can't be resolved to a node
    /// are returned separately, keyed by their original index, and left untouched (no record).
    async fn get_batch_nodes(
        &self,
        batch_reads: Vec<BatchRead>,
        replica: Replica,
    ) -> (
        HashMap<Arc<Node>, (Vec<usize>, Vec<BatchRead>)>,
        Vec<(usize, BatchRead)>,
    ) {
        let mut map: HashMap<Arc<Node>, (Vec<usize>, Vec<BatchRead>)> = HashMap::new();
        let mut unresolved = Vec::new();
        for (index, batch_read) in batch_reads.into_iter().enumerate() {
            match self.node_for_key(&batch_read.key, replica).await {
                Some(node) => {
                    let entry = map.entry(node).or_insert_with(|| (Vec::new(), Vec::new()));
                    entry.0.push(index);
                    entry.1.push(batch_read);
                }
                None => unresolved.push((index, batch_read)),
            }
        }
        (map, unresolved)
    }

    async fn node_for_key(&self, key: &Key, replica: Replica) -> Option<Arc<Node>> {
        let partition = Partition::new_by_key(key);
        self.cluster.get_node_for_replica(&partition, replica).await
    }
}
