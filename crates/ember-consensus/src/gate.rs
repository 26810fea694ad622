use std::sync::Arc;

use parking_lot::Mutex;

type Checker = Arc<dyn Fn() -> bool + Send + Sync>;

/// Handle for one registration in a `ValidationGate`. Registering the same
/// closure twice yields two distinct handles, each removable on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckerId(u64);

/// Combines a dynamic set of go/no-go checks into a single verdict: the
/// logical AND of every registered checker, vacuously true when none are
/// registered.
///
/// All methods take `&self`; the registration set is guarded by a mutex,
/// so the gate can be shared across validation threads as-is.
pub struct ValidationGate {
    inner: Mutex<GateInner>,
}

struct GateInner {
    next_id: u64,
    checkers: Vec<(u64, Checker)>,
}

impl ValidationGate {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(GateInner {
                next_id: 0,
                checkers: Vec::new(),
            }),
        }
    }

    /// Adds a checker to the active set and returns the handle that
    /// removes exactly this registration.
    pub fn register<F>(&self, checker: F) -> CheckerId
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.checkers.push((id, Arc::new(checker)));
        CheckerId(id)
    }

    /// Removes the registration behind `id`. Returns `false` if the handle
    /// is unknown or already removed; the remaining set is untouched
    /// either way.
    pub fn unregister(&self, id: CheckerId) -> bool {
        let mut inner = self.inner.lock();
        match inner.checkers.iter().position(|(cid, _)| *cid == id.0) {
            Some(pos) => {
                inner.checkers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// ANDs every checker registered at call time, short-circuiting on the
    /// first denial.
    ///
    /// The set is snapshotted under the lock and the checkers run outside
    /// it, so a checker may itself register or unregister without
    /// deadlocking, and concurrent unregistration cannot invalidate the
    /// snapshot mid-evaluation.
    pub fn evaluate(&self) -> bool {
        let snapshot: Vec<Checker> = {
            let inner = self.inner.lock();
            inner.checkers.iter().map(|(_, c)| Arc::clone(c)).collect()
        };
        snapshot.iter().all(|checker| checker())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self::new()
    }
}
