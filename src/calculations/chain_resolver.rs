use crate::graph::JobLinks;
use crate::job::{ChainStats, JobId, NO_SUCCESSOR};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, info, trace};

/// Chain statistics keyed by the chain's first job, ascending.
pub type ChainTable = BTreeMap<JobId, ChainStats>;

/// Heads found so far, plus scratch space for the current backward walk.
#[derive(Default)]
struct HeadIndex {
    heads: HashMap<JobId, JobId>,
    trail: Vec<JobId>,
    on_trail: HashSet<JobId>,
}

pub struct ChainResolver<'a> {
    links: &'a JobLinks,
}

impl<'a> ChainResolver<'a> {
    pub fn new(links: &'a JobLinks) -> Self {
        Self { links }
    }

    pub fn execute(&self) -> ChainTable {
        let mut chains = ChainTable::new();
        let mut visited: HashSet<JobId> = HashSet::with_capacity(self.links.len());
        let mut index = HeadIndex::default();

        // Ascending entry order keeps the result independent of hash order
        // when a cycle or a shared successor makes the entry point matter.
        for job in self.links.jobs() {
            if visited.contains(&job) {
                continue;
            }
            let head = self.find_head(job, &mut index);
            if !visited.insert(head) {
                trace!(job, head, "chain already resolved");
                continue;
            }
            if let Some(stats) = self.walk_from(head, &mut visited) {
                chains.insert(head, stats);
            }
        }

        info!(chains = chains.len(), "resolved job chains");
        chains
    }

    /// Follows predecessors until a job without one. A predecessor cycle has
    /// no such job; the entry job is used as the head instead. Every job on
    /// the walk remembers its head, so each backward link is followed once.
    fn find_head(&self, job: JobId, index: &mut HeadIndex) -> JobId {
        index.trail.clear();
        index.on_trail.clear();

        let mut node = job;
        let head = loop {
            if let Some(&head) = index.heads.get(&node) {
                break head;
            }
            index.trail.push(node);
            index.on_trail.insert(node);
            match self.links.predecessor(node) {
                None => break node,
                Some(pred) if index.on_trail.contains(&pred.job) => {
                    debug!(job, "predecessor cycle, starting chain at entry job");
                    break job;
                }
                Some(pred) => node = pred.job,
            }
        };

        for &seen in &index.trail {
            index.heads.insert(seen, head);
        }
        head
    }

    fn walk_from(&self, head: JobId, visited: &mut HashSet<JobId>) -> Option<ChainStats> {
        let mut total: u64 = 0;
        let mut count: usize = 0;
        let mut node = head;

        while let Some(link) = self.links.successor(node) {
            if link.job != NO_SUCCESSOR && visited.contains(&link.job) {
                debug!(
                    head,
                    job = node,
                    next = link.job,
                    "successor already belongs to a chain, truncating"
                );
                break;
            }
            total = total.saturating_add(link.runtime_secs);
            count += 1;
            if link.job == NO_SUCCESSOR {
                break;
            }
            node = link.job;
            visited.insert(node);
        }

        if count == 0 {
            trace!(head, "no edges from head, skipping");
            return None;
        }
        Some(ChainStats::new(head, node, count, total))
    }
}

pub fn resolve_chains(links: &JobLinks) -> ChainTable {
    ChainResolver::new(links).execute()
}
