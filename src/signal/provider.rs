//! Memoizing signal providers
//!
//! [`CachedSignalProvider`] wraps a [`SignalComputation`] and guarantees that
//! the computation runs at most once per project while its value is cached.
//! Each project gets its own slot: callers asking for the same project wait
//! for the one computation in flight, callers asking for different projects do
//! not block each other. A computation that fails leaves its slot empty, so
//! the next request computes again.

use super::{Signal, SignalSet, SignalValue};
use crate::error::SignalError;
use crate::project::ProjectIdentity;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use tracing::{debug, warn};

/// Computes one signal for a project, uncached
pub trait SignalComputation: Send + Sync {
    fn signal(&self) -> Signal;

    fn compute(&self, project: &ProjectIdentity) -> Result<SignalValue, SignalError>;
}

/// Object-safe view of a provider, for running several signals together
pub trait SignalProvider: Send + Sync {
    fn signal(&self) -> Signal;

    fn value_for(&self, project: &ProjectIdentity) -> Result<SignalValue, SignalError>;

    /// Computes (or reuses) the value for `project` and stores it in `values`
    fn update(&self, project: &ProjectIdentity, values: &mut SignalSet) -> Result<(), SignalError> {
        values.insert(self.value_for(project)?);
        Ok(())
    }
}

type Slot = Arc<Mutex<Option<SignalValue>>>;

pub struct CachedSignalProvider<C> {
    computation: C,
    slots: Mutex<HashMap<ProjectIdentity, Slot>>,
}

impl<C: SignalComputation> CachedSignalProvider<C> {
    pub fn new(computation: C) -> Self {
        Self {
            computation,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn computation(&self) -> &C {
        &self.computation
    }

    pub fn value_for(&self, project: &ProjectIdentity) -> Result<SignalValue, SignalError> {
        let signal = self.computation.signal();
        let slot = self.slot(project);
        let mut cached = lock(&slot);

        if let Some(value) = cached.as_ref() {
            debug!(%signal, project = %project, "Signal value served from cache");
            return Ok(*value);
        }

        debug!(%signal, project = %project, "Computing signal value");
        match self.computation.compute(project) {
            Ok(value) => {
                *cached = Some(value);
                Ok(value)
            }
            Err(e) => {
                warn!(%signal, project = %project, error = %e, "Signal computation failed");
                Err(e)
            }
        }
    }

    /// The cached value, if any. Does not wait for a computation in flight.
    pub fn cached(&self, project: &ProjectIdentity) -> Option<SignalValue> {
        let slot = lock(&self.slots).get(project).cloned()?;
        peek(&slot)
    }

    /// Drops the cached value so the next request computes again
    pub fn invalidate(&self, project: &ProjectIdentity) {
        lock(&self.slots).remove(project);
    }

    pub fn clear(&self) {
        lock(&self.slots).clear();
    }

    /// Number of projects with a cached value
    pub fn len(&self) -> usize {
        lock(&self.slots)
            .values()
            .filter(|slot| peek(slot).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, project: &ProjectIdentity) -> Slot {
        lock(&self.slots)
            .entry(project.clone())
            .or_default()
            .clone()
    }
}

impl<C: SignalComputation> SignalProvider for CachedSignalProvider<C> {
    fn signal(&self) -> Signal {
        self.computation.signal()
    }

    fn value_for(&self, project: &ProjectIdentity) -> Result<SignalValue, SignalError> {
        CachedSignalProvider::value_for(self, project)
    }
}

/// Runs every provider for `project`, stopping at the first failure
pub fn collect(
    project: &ProjectIdentity,
    providers: &[&dyn SignalProvider],
) -> Result<SignalSet, SignalError> {
    let mut values = SignalSet::new();
    for provider in providers {
        provider.update(project, &mut values)?;
    }
    Ok(values)
}

// A panic inside one computation must not disable the provider for everyone.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Value in `slot` without waiting. `None` while a computation holds it.
fn peek(slot: &Slot) -> Option<SignalValue> {
    match slot.try_lock() {
        Ok(value) => *value,
        Err(TryLockError::Poisoned(poisoned)) => *poisoned.into_inner(),
        Err(TryLockError::WouldBlock) => None,
    }
}
