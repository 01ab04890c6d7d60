// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Deprecation notices for legacy calling conventions.
//!
//! Legacy entry points keep working but report here: each use is logged
//! and counted in a process-wide collector that tools and tests can
//! inspect or drain.

use std::sync::OnceLock;

use parking_lot::RwLock;

/// A deprecated behaviour that was used at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// What was used.
    pub behaviour: &'static str,
    /// What to use instead.
    pub replacement: &'static str,
    /// How many times it was used since the last drain.
    pub occurrences: u64,
}

/// Collector of deprecation notices (one entry per behaviour).
pub struct DeprecationCollector {
    notices: RwLock<Vec<DeprecationNotice>>,
}

impl DeprecationCollector {
    pub fn new() -> Self {
        Self {
            notices: RwLock::new(Vec::new()),
        }
    }

    pub fn record(&self, behaviour: &'static str, replacement: &'static str) {
        let mut notices = self.notices.write();
        match notices.iter_mut().find(|n| n.behaviour == behaviour) {
            Some(notice) => {
                notice.occurrences += 1;
                log::debug!("[DEPRECATED] {} (again, {} uses)", behaviour, notice.occurrences);
            }
            None => {
                log::warn!("[DEPRECATED] {} -- {}", behaviour, replacement);
                notices.push(DeprecationNotice {
                    behaviour,
                    replacement,
                    occurrences: 1,
                });
            }
        }
    }

    pub fn notices(&self) -> Vec<DeprecationNotice> {
        self.notices.read().clone()
    }

    pub fn drain(&self) -> Vec<DeprecationNotice> {
        let mut notices = self.notices.write();
        std::mem::take(&mut *notices)
    }
}

impl Default for DeprecationCollector {
    fn default() -> Self {
        Self::new()
    }
}

static COLLECTOR: OnceLock<DeprecationCollector> = OnceLock::new();

fn collector() -> &'static DeprecationCollector {
    COLLECTOR.get_or_init(DeprecationCollector::new)
}

pub(crate) fn deprecated(behaviour: &'static str, replacement: &'static str) {
    collector().record(behaviour, replacement);
}

/// Notices recorded so far in this process.
pub fn notices() -> Vec<DeprecationNotice> {
    collector().notices()
}

/// Take and clear the recorded notices.
pub fn drain_notices() -> Vec<DeprecationNotice> {
    collector().drain()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_per_behaviour() {
        let collector = DeprecationCollector::new();
        collector.record("old()", "use new()");
        collector.record("old()", "use new()");
        collector.record("older()", "use new()");

        let notices = collector.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].behaviour, "old()");
        assert_eq!(notices[0].occurrences, 2);
        assert_eq!(notices[1].occurrences, 1);
    }

    #[test]
    fn test_drain_clears() {
        let collector = DeprecationCollector::new();
        collector.record("old()", "use new()");
        assert_eq!(collector.drain().len(), 1);
        assert!(collector.notices().is_empty());
    }
}
