use crate::job::{JobId, JobRecord, Link};
use std::collections::HashMap;
use tracing::debug;

/// Forward and backward adjacency built from parsed job records.
///
/// `forward[job]` holds the successor of `job` and the edge runtime,
/// `backward[job]` holds the predecessor. Each job keeps at most one link in
/// either direction; a later record for the same key replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobLinks {
    pub forward: HashMap<JobId, Link>,
    pub backward: HashMap<JobId, Link>,
}

impl JobLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = JobRecord>,
    {
        let mut links = Self::new();
        for record in records {
            links.insert(&record);
        }
        links
    }

    pub fn insert(&mut self, record: &JobRecord) {
        let forward = Link::new(record.next_job_id, record.runtime_secs);
        if let Some(prev) = self.forward.insert(record.job_id, forward) {
            debug!(
                job = record.job_id,
                replaced_next = prev.job,
                next = record.next_job_id,
                "job declared twice, keeping the later successor"
            );
        }

        // The sentinel is never walked into, so it gets no predecessor.
        if record.is_terminal() {
            return;
        }
        let backward = Link::new(record.job_id, record.runtime_secs);
        if let Some(prev) = self.backward.insert(record.next_job_id, backward) {
            debug!(
                job = record.next_job_id,
                replaced_prev = prev.job,
                prev = record.job_id,
                "job has several predecessors, keeping the later one"
            );
        }
    }

    pub fn successor(&self, job: JobId) -> Option<Link> {
        self.forward.get(&job).copied()
    }

    pub fn predecessor(&self, job: JobId) -> Option<Link> {
        self.backward.get(&job).copied()
    }

    /// Jobs that declare a successor, in ascending id order.
    pub fn jobs(&self) -> Vec<JobId> {
        let mut ids: Vec<JobId> = self.forward.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
