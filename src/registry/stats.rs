use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RegistryMetrics {
    pub total_patterns_registered: usize,
    pub total_patterns_rejected: usize,
    lookups: AtomicU64,
    misses: AtomicU64,
}

impl RegistryMetrics {
    pub fn record_insert(&mut self) {
        self.total_patterns_registered += 1;
    }

    pub fn record_rejection(&mut self) {
        self.total_patterns_rejected += 1;
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// `(lookups, misses)`
    pub fn snapshot(&self) -> (u64, u64) {
        (
            self.lookups.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}

impl Clone for RegistryMetrics {
    fn clone(&self) -> Self {
        let (lookups, misses) = self.snapshot();
        Self {
            total_patterns_registered: self.total_patterns_registered,
            total_patterns_rejected: self.total_patterns_rejected,
            lookups: AtomicU64::new(lookups),
            misses: AtomicU64::new(misses),
        }
    }
}
