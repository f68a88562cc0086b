use std::sync::{Arc, PoisonError, RwLock};

/// A thread-safe, reference-counted value that is copied in and out.
///
/// `SharedValue` wraps an `Arc<RwLock<T>>` for small `Copy` data (offsets,
/// counters) that several owners need to observe. Clones point at the same
/// value, so a write through one handle is visible through every other.
///
/// # Type Parameters
/// - `T`: The contained value, must be `Copy + Send + Sync`
///
/// # Examples
///
/// ```
/// use engine_stopwatch::core::SharedValue;
///
/// let offset = SharedValue::new(1u64);
/// let observer = offset.clone();
///
/// offset.update(|value| *value += 1);
/// assert_eq!(observer.get(), 2);
/// ```
///
/// # Poisoning
/// The contained value is plain data, so a lock poisoned by a panicking writer is
/// recovered rather than propagated.
pub struct SharedValue<T: Copy + Send + Sync> {
    value: Arc<RwLock<T>>,
}

impl<T: Copy + Send + Sync> SharedValue<T> {
    /// Creates a new `SharedValue` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrites the current value.
    ///
    /// # Arguments
    /// * `value` - The new value seen by every handle
    pub fn set(&self, value: T) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;
    }

    /// Applies `f` to the value while holding the write lock.
    ///
    /// # Arguments
    /// * `f` - Mutation applied in place
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.value.write().unwrap_or_else(PoisonError::into_inner));
    }
}

impl<T: Copy + Send + Sync> Clone for SharedValue<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T: Copy + Send + Sync + std::fmt::Debug> std::fmt::Debug for SharedValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedValue").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SharedValue;
    use std::thread;

    #[test]
    fn clones_share_writes() {
        let value = SharedValue::new(0u32);
        let clone = value.clone();

        clone.set(7);
        assert_eq!(value.get(), 7);
    }

    #[test]
    fn update_is_visible_across_threads() {
        let value = SharedValue::new(0u32);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let value = value.clone();
                thread::spawn(move || value.update(|v| *v += 1))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(value.get(), 4);
    }
}
