pub type JobId = i64;

/// Successor id marking the end of a chain. Never a real job.
pub const NO_SUCCESSOR: JobId = 0;

/// One side of a `job -> next` edge together with the edge's runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub job: JobId,
    pub runtime_secs: u64,
}

impl Link {
    pub fn new(job: JobId, runtime_secs: u64) -> Self {
        Self { job, runtime_secs }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub line: u64,
    pub job_id: JobId,
    pub next_job_id: JobId,
    pub runtime_secs: u64,
}

impl JobRecord {
    pub fn new(job_id: JobId, next_job_id: JobId, runtime_secs: u64) -> Self {
        Self {
            line: 0,
            job_id,
            next_job_id,
            runtime_secs,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next_job_id == NO_SUCCESSOR
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStats {
    pub start_job: JobId,
    pub last_job: JobId,
    pub job_len: usize,
    pub total_runtime_secs: u64,
    pub avg_runtime_secs: u64,
}

impl ChainStats {
    pub fn new(start_job: JobId, last_job: JobId, job_len: usize, total_runtime_secs: u64) -> Self {
        let avg_runtime_secs = if job_len == 0 {
            0
        } else {
            total_runtime_secs / job_len as u64
        };
        Self {
            start_job,
            last_job,
            job_len,
            total_runtime_secs,
            avg_runtime_secs,
        }
    }
}
