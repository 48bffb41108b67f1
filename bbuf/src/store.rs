//! Byte stores backing a [`BlockingBuffer`](crate::BlockingBuffer).
//!
//! A store is plain single-threaded storage. All synchronization lives in the
//! buffer, which holds its store behind a mutex and checks capacity before
//! every append.

/// Fixed-capacity FIFO byte storage.
///
/// Implementations must deliver bytes from [`consume`](ByteStore::consume) in
/// exactly the order they were given to [`append`](ByteStore::append).
pub trait ByteStore: Send {
    /// Appends `data` to the back of the store.
    ///
    /// Callers guarantee `self.len() + data.len() <= self.capacity()`.
    fn append(&mut self, data: &[u8]);

    /// Moves up to `dst.len()` bytes from the front of the store into `dst`.
    ///
    /// Returns the number of bytes transferred.
    fn consume(&mut self, dst: &mut [u8]) -> usize;

    /// Returns the number of bytes currently held.
    fn len(&self) -> usize;

    /// Returns the maximum number of bytes the store can hold.
    fn capacity(&self) -> usize;

    /// Returns true if the store holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of bytes that can still be appended.
    fn available(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }
}

impl<S: ByteStore + ?Sized> ByteStore for Box<S> {
    fn append(&mut self, data: &[u8]) {
        (**self).append(data)
    }

    fn consume(&mut self, dst: &mut [u8]) -> usize {
        (**self).consume(dst)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}

// ============================================================================
// RingStore
// ============================================================================

/// Circular byte store over a preallocated array.
///
/// Appends and consumes never move buffered bytes; a wrapped region is copied
/// with two slice copies.
#[derive(Debug, Clone)]
pub struct RingStore {
    buf: Vec<u8>,
    head: usize,  // read position
    count: usize, // bytes held
}

impl RingStore {
    /// Creates an empty ring store holding at most `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        RingStore {
            buf: vec![0; capacity],
            head: 0,
            count: 0,
        }
    }

    /// Creates a full ring store from existing bytes.
    ///
    /// The vector's length becomes the capacity, so nothing more can be
    /// appended until some bytes are consumed.
    pub fn from_vec(data: Vec<u8>) -> Self {
        let count = data.len();
        RingStore {
            buf: data,
            head: 0,
            count,
        }
    }
}

impl ByteStore for RingStore {
    fn append(&mut self, data: &[u8]) {
        debug_assert!(data.len() <= self.available(), "ring store overflow");
        let capacity = self.buf.len();
        let n = data.len().min(capacity - self.count);
        if n == 0 {
            return;
        }

        let tail = (self.head + self.count) % capacity;
        let first = n.min(capacity - tail);
        self.buf[tail..tail + first].copy_from_slice(&data[..first]);
        self.buf[..n - first].copy_from_slice(&data[first..n]);
        self.count += n;
    }

    fn consume(&mut self, dst: &mut [u8]) -> usize {
        let n = dst.len().min(self.count);
        if n == 0 {
            return 0;
        }

        let capacity = self.buf.len();
        let first = n.min(capacity - self.head);
        dst[..first].copy_from_slice(&self.buf[self.head..self.head + first]);
        dst[first..n].copy_from_slice(&self.buf[..n - first]);
        self.head = (self.head + n) % capacity;
        self.count -= n;
        if self.count == 0 {
            self.head = 0;
        }
        n
    }

    fn len(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> usize {
        self.buf.len()
    }
}

// ============================================================================
// LinearStore
// ============================================================================

/// Contiguous byte store with a read offset.
///
/// Consumed bytes are reclaimed lazily: the unread tail is shifted to the
/// front only when an append would otherwise run past the capacity.
#[derive(Debug, Clone)]
pub struct LinearStore {
    data: Vec<u8>,
    off: usize,
    cap: usize,
}

impl LinearStore {
    /// Creates an empty linear store holding at most `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        LinearStore {
            data: Vec::with_capacity(capacity),
            off: 0,
            cap: capacity,
        }
    }

    /// Creates a linear store that already holds `data`.
    ///
    /// The capacity is raised to `data.len()` if it is smaller.
    pub fn with_contents(data: Vec<u8>, capacity: usize) -> Self {
        let cap = capacity.max(data.len());
        LinearStore { data, off: 0, cap }
    }
}

impl ByteStore for LinearStore {
    fn append(&mut self, data: &[u8]) {
        debug_assert!(data.len() <= self.available(), "linear store overflow");
        let n = data.len().min(self.available());
        if n == 0 {
            return;
        }

        if self.data.len() + n > self.cap {
            self.data.drain(..self.off);
            self.off = 0;
        }
        self.data.extend_from_slice(&data[..n]);
    }

    fn consume(&mut self, dst: &mut [u8]) -> usize {
        let n = dst.len().min(self.len());
        dst[..n].copy_from_slice(&self.data[self.off..self.off + n]);
        self.off += n;
        if self.off == self.data.len() {
            self.data.clear();
            self.off = 0;
        }
        n
    }

    fn len(&self) -> usize {
        self.data.len() - self.off
    }

    fn capacity(&self) -> usize {
        self.cap
    }
}
