use async_trait::async_trait;
use shortwave_core::{AllocationError, KeyAllocator};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// An in-process sequential [`KeyAllocator`].
///
/// Produces keys like "sw000000", "sw000001", and so on. Keys are unique
/// within a single instance, which is all tests and local single-node
/// runs need. Released keys are recorded but never reissued.
#[derive(Debug)]
pub struct InMemoryAllocator {
    counter: AtomicU64,
    prefix: String,
    released: Mutex<Vec<String>>,
}

impl InMemoryAllocator {
    /// Creates an allocator with the default "sw" prefix.
    pub fn new() -> Self {
        Self::with_prefix("sw")
    }

    /// Creates an allocator with a custom prefix.
    ///
    /// Give each node its own prefix when several instances must not
    /// collide (e.g. "node-a", "node-b").
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            counter: AtomicU64::new(0),
            prefix: prefix.into(),
            released: Mutex::new(Vec::new()),
        }
    }

    /// Number of keys handed out so far.
    pub fn allocated(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Keys returned through [`KeyAllocator::release`], in call order.
    pub fn released(&self) -> Vec<String> {
        self.released
            .lock()
            .expect("released keys lock poisoned")
            .clone()
    }
}

impl Default for InMemoryAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyAllocator for InMemoryAllocator {
    async fn allocate(&self) -> Result<String, AllocationError> {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}{:06}", self.prefix, count))
    }

    async fn release(&self, key: &str) -> Result<(), AllocationError> {
        self.released
            .lock()
            .expect("released keys lock poisoned")
            .push(key.to_string());
        Ok(())
    }
}
