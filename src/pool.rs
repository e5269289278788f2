//! Free lists for the byte buffers lines are rendered into and for the encoder's
//! scratch part lists, so steady-state logging does not allocate per entry.

use std::fmt;
use std::io;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

/// Buffers that grew past this are dropped on release instead of being kept.
const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

/// Upper bound on idle objects held by one pool.
const MAX_FREE: usize = 256;

static GLOBAL: BufferPool = BufferPool::new();

/// Pool shared by every core in the process.
#[must_use]
pub fn global() -> &'static BufferPool {
    &GLOBAL
}

/// Objects a [`Pool`] can hand out again after being cleared.
pub trait Recycle: Default {
    /// Empties the object while keeping its allocation.
    fn reset(&mut self);

    /// Heap capacity currently held, used to decide whether to keep it.
    fn capacity(&self) -> usize;
}

/// A `Mutex`-guarded free list.
#[derive(Debug)]
pub struct Pool<T> {
    free: Mutex<Vec<T>>,
}

impl<T: Recycle> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Recycle> Pool<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            free: Mutex::new(Vec::new()),
        }
    }

    /// Returns an empty object, reused if one is idle.
    #[must_use]
    pub fn acquire(&self) -> T {
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_default()
    }

    /// Clears `item` and makes it available to a later [`Pool::acquire`].
    pub fn release(&self, mut item: T) {
        if item.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        item.reset();
        let mut free = self.free.lock().unwrap_or_else(PoisonError::into_inner);
        if free.len() < MAX_FREE {
            free.push(item);
        }
    }

    /// Acquires an object that goes back to this pool when the guard drops,
    /// including on early returns and `?` propagation.
    #[must_use]
    pub fn scoped(&self) -> Pooled<'_, T> {
        Pooled {
            pool: self,
            item: Some(self.acquire()),
        }
    }

    /// Number of idle objects.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.free.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Guard returned by [`Pool::scoped`].
pub struct Pooled<'a, T: Recycle> {
    pool: &'a Pool<T>,
    item: Option<T>,
}

impl<T: Recycle> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Only `Drop` takes the item out.
        self.item.as_ref().unwrap_or_else(|| unreachable!())
    }
}

impl<T: Recycle> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.item.as_mut().unwrap_or_else(|| unreachable!())
    }
}

impl<T: Recycle> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        if let Some(item) = self.item.take() {
            self.pool.release(item);
        }
    }
}

/// Bytes of one rendered line.
///
/// Whoever holds a `Buffer` owns it exclusively; hand it back with
/// [`Pool::release`] once the bytes have been written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn push_str(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    pub fn push_bytes(&mut self, b: &[u8]) {
        self.bytes.extend_from_slice(b);
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lossy view for tests and diagnostics.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Recycle for Buffer {
    fn reset(&mut self) {
        self.bytes.clear();
    }

    fn capacity(&self) -> usize {
        self.bytes.capacity()
    }
}

impl fmt::Write for Buffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Pool of line buffers.
pub type BufferPool = Pool<Buffer>;
