//! Constants lifecycle: load once, freeze, signal readiness.
//!
//! The host application owns a [`ConstantsLoader`] and publishes the table
//! exactly once after reading it from its external source. Everything else
//! holds a [`ConstantsHandle`] and either peeks ([`ConstantsHandle::try_get`])
//! or blocks with a bounded wait ([`ConstantsHandle::wait_ready`]).
//!
//! The wait is a condition-variable signal resolved by the loader, not a
//! poll loop, but the timeout contract of the legacy gate is preserved:
//! [`GateConfig`] still expresses the bound as `poll_interval x max_attempts`
//! (reference 200 ms x 100, about a 20 s ceiling) so existing tuning carries
//! over unchanged. A handle dropped mid-wait abandons the wait with no side
//! effects; there are no partial writes to undo.

use crate::constants::ConstantTable;
use crate::errors::{EngineError, EngineResult};
use log::warn;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Bound on how long a calculation run waits for the constants to be ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub poll_interval: Duration,
    pub max_attempts: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(200),
            max_attempts: 100,
        }
    }
}

impl GateConfig {
    /// Total wait bound before the gate reports a timeout.
    pub fn deadline(&self) -> Duration {
        self.poll_interval * self.max_attempts
    }
}

#[derive(Debug, Default)]
struct Slot {
    table: Mutex<Option<Arc<ConstantTable>>>,
    ready: Condvar,
}

/// Owner of the constant table lifecycle.
///
/// Publishing freezes the table behind an `Arc`; the engine side only ever
/// sees the frozen snapshot.
#[derive(Debug, Default)]
pub struct ConstantsLoader {
    slot: Arc<Slot>,
}

impl ConstantsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle readers use to await or peek at the table.
    pub fn handle(&self) -> ConstantsHandle {
        ConstantsHandle {
            slot: Arc::clone(&self.slot),
        }
    }

    /// Publish the loaded table and wake every waiting handle.
    ///
    /// The first publish wins; a second one is ignored so that readers never
    /// observe the table changing underneath them. Returns whether this call
    /// was the one that published.
    pub fn publish(&self, table: ConstantTable) -> bool {
        let mut guard = self.slot.table.lock().expect("constants slot poisoned");
        if guard.is_some() {
            warn!("constants already published; keeping the first table");
            return false;
        }
        *guard = Some(Arc::new(table));
        drop(guard);
        self.slot.ready.notify_all();
        true
    }
}

/// Read-side handle to the constants slot.
#[derive(Debug, Clone)]
pub struct ConstantsHandle {
    slot: Arc<Slot>,
}

impl ConstantsHandle {
    /// The frozen table, if the loader has published it.
    pub fn try_get(&self) -> Option<Arc<ConstantTable>> {
        self.slot
            .table
            .lock()
            .expect("constants slot poisoned")
            .clone()
    }

    /// Block until the loader publishes, bounded by `gate.deadline()`.
    ///
    /// Resolves with [`EngineError::ConstantsTimeout`] if the table never
    /// becomes ready within the bound.
    pub fn wait_ready(&self, gate: &GateConfig) -> EngineResult<Arc<ConstantTable>> {
        let deadline = gate.deadline();
        let started = Instant::now();
        let mut guard = self.slot.table.lock().expect("constants slot poisoned");
        loop {
            if let Some(table) = guard.as_ref() {
                return Ok(Arc::clone(table));
            }
            let elapsed = started.elapsed();
            if elapsed >= deadline {
                return Err(EngineError::ConstantsTimeout {
                    waited_ms: deadline.as_millis(),
                });
            }
            let (reacquired, _timed_out) = self
                .slot
                .ready
                .wait_timeout(guard, deadline - elapsed)
                .expect("constants slot poisoned");
            guard = reacquired;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_support::complete_table;
    use std::thread;

    fn short_gate() -> GateConfig {
        GateConfig {
            poll_interval: Duration::from_millis(5),
            max_attempts: 4,
        }
    }

    #[test]
    fn test_default_gate_matches_reference_bound() {
        let gate = GateConfig::default();
        assert_eq!(gate.poll_interval, Duration::from_millis(200));
        assert_eq!(gate.max_attempts, 100);
        assert_eq!(gate.deadline(), Duration::from_secs(20));
    }

    #[test]
    fn test_try_get_before_publish_is_none() {
        let loader = ConstantsLoader::new();
        assert!(loader.handle().try_get().is_none());
    }

    #[test]
    fn test_wait_ready_after_publish_returns_immediately() {
        let loader = ConstantsLoader::new();
        let handle = loader.handle();
        assert!(loader.publish(complete_table()));

        let table = handle.wait_ready(&short_gate()).unwrap();
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_wait_ready_times_out_when_never_published() {
        let loader = ConstantsLoader::new();
        let handle = loader.handle();

        let err = handle.wait_ready(&short_gate()).unwrap_err();
        match err {
            EngineError::ConstantsTimeout { waited_ms } => assert_eq!(waited_ms, 20),
            other => panic!("expected ConstantsTimeout, got {:?}", other),
        }
    }

    #[test]
    fn test_wait_ready_sees_publish_from_another_thread() {
        let loader = ConstantsLoader::new();
        let handle = loader.handle();

        let publisher = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            loader.publish(complete_table())
        });

        let table = handle
            .wait_ready(&GateConfig {
                poll_interval: Duration::from_millis(50),
                max_attempts: 20,
            })
            .unwrap();
        assert_eq!(table.resolve(crate::constants::keys::U_PISO), 2.7);
        assert!(publisher.join().unwrap());
    }

    #[test]
    fn test_second_publish_is_ignored() {
        let loader = ConstantsLoader::new();
        let handle = loader.handle();

        assert!(loader.publish(ConstantTable::from_values([("AUX_U_Value_Piso", 2.7)])));
        assert!(!loader.publish(ConstantTable::from_values([("AUX_U_Value_Piso", 9.9)])));

        let table = handle.try_get().unwrap();
        assert_eq!(table.get("AUX_U_Value_Piso"), Some(2.7));
    }
}
