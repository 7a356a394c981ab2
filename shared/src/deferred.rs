use std::collections::HashMap;
use std::hash::Hash;

/// Named, individually cancellable deferred tasks.
///
/// At most one task is outstanding per key: arming a key that is already
/// pending replaces its deadline. Deadlines are milliseconds on whatever
/// clock the caller advances with.
#[derive(Debug, Clone)]
pub struct DeferredTasks<K> {
    pending: HashMap<K, f64>,
}

impl<K> Default for DeferredTasks<K> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash + Ord> DeferredTasks<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire at `deadline`, replacing any pending instance.
    /// Returns the deadline that was replaced.
    pub fn arm(&mut self, key: K, deadline: f64) -> Option<f64> {
        self.pending.insert(key, deadline)
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn deadline(&self, key: K) -> Option<f64> {
        self.pending.get(&key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return the earliest task due at `now`.
    /// Ties on the deadline resolve by key order.
    pub fn pop_due(&mut self, now: f64) -> Option<(K, f64)> {
        let (key, deadline) = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .min_by(|a, b| a.1.total_cmp(b.1).then_with(|| a.0.cmp(b.0)))
            .map(|(key, deadline)| (*key, *deadline))?;
        self.pending.remove(&key);
        Some((key, deadline))
    }

    /// Pending tasks sorted by key.
    pub fn snapshot(&self) -> Vec<(K, f64)> {
        let mut tasks: Vec<(K, f64)> = self.pending.iter().map(|(k, d)| (*k, *d)).collect();
        tasks.sort_by(|a, b| a.0.cmp(&b.0));
        tasks
    }
}
