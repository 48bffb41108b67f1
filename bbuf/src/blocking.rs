//! Bounded blocking byte buffer.

use std::fmt;
use std::io;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace};

use crate::error::{BufferError, Result};
use crate::store::{ByteStore, RingStore};

/// A thread-safe bounded byte buffer with non-blocking writes and blocking
/// reads.
///
/// `BlockingBuffer` decouples a producer that must never stall (for example a
/// child process's output pump) from a consumer that reads on its own
/// schedule.
///
/// # Semantics
///
/// - **Write**: Never blocks. Fails with [`BufferError::Overflow`] if the
///   bytes do not fit, leaving the buffer unchanged.
/// - **Read**: Blocks while the buffer is open and empty, then returns up to
///   `buf.len()` bytes in FIFO order.
/// - **Close**: Rejects further writes and wakes every blocked reader.
///   Buffered bytes can still be drained; once empty, reads return
///   [`BufferError::EndOfStream`].
///
/// Cloning shares the same underlying buffer.
///
/// # Example
///
/// ```
/// use giztoy_bbuf::{BlockingBuffer, BufferError};
/// use std::thread;
///
/// let buf = BlockingBuffer::new(1024);
/// let producer_buf = buf.clone();
///
/// let producer = thread::spawn(move || {
///     producer_buf.write(b"hello ").unwrap();
///     producer_buf.write(b"world").unwrap();
///     producer_buf.close().unwrap();
/// });
///
/// let mut out = Vec::new();
/// let mut chunk = [0u8; 4];
/// loop {
///     match buf.read(&mut chunk) {
///         Ok(n) => out.extend_from_slice(&chunk[..n]),
///         Err(BufferError::EndOfStream) => break,
///         Err(e) => panic!("unexpected error: {e}"),
///     }
/// }
///
/// producer.join().unwrap();
/// assert_eq!(out, b"hello world");
/// ```
pub struct BlockingBuffer<S = RingStore> {
    inner: Arc<BlockingBufferInner<S>>,
}

struct BlockingBufferInner<S> {
    state: Mutex<BlockingBufferState<S>>,
    readable: Condvar,
}

struct BlockingBufferState<S> {
    store: S,
    closed: bool,
}

impl<S> Clone for BlockingBuffer<S> {
    fn clone(&self) -> Self {
        BlockingBuffer {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl BlockingBuffer<RingStore> {
    /// Creates an open, empty buffer holding at most `capacity` bytes.
    ///
    /// A capacity of zero is allowed: every non-empty write overflows and
    /// reads block until the buffer is closed.
    pub fn new(capacity: usize) -> Self {
        Self::with_store(RingStore::new(capacity))
    }
}

impl<S: ByteStore> BlockingBuffer<S> {
    /// Creates an open buffer over an existing store.
    ///
    /// The capacity is the one the store reports, and the store is expected
    /// to keep `len() <= capacity()`. A store holding more than that accepts
    /// no writes until it has been drained below its capacity. Bytes already
    /// held by the store are readable immediately.
    pub fn with_store(store: S) -> Self {
        BlockingBuffer {
            inner: Arc::new(BlockingBufferInner {
                state: Mutex::new(BlockingBufferState {
                    store,
                    closed: false,
                }),
                readable: Condvar::new(),
            }),
        }
    }

    /// Returns the number of unread bytes.
    pub fn len(&self) -> usize {
        self.inner.state.lock().store.len()
    }

    /// Returns true if no bytes are buffered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.inner.state.lock().store.capacity()
    }

    /// Returns how many more bytes a write could currently accept.
    pub fn available(&self) -> usize {
        self.inner.state.lock().store.available()
    }

    /// Returns true once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.state.lock().closed
    }

    /// Writes all of `data` or nothing.
    ///
    /// Returns `data.len()` on success and wakes every blocked reader.
    /// Fails with [`BufferError::Closed`] after close, or with
    /// [`BufferError::Overflow`] when the bytes do not fit in the remaining
    /// capacity. Never blocks waiting for space.
    pub fn write(&self, data: &[u8]) -> Result<usize> {
        let mut state = self.inner.state.lock();
        if state.closed {
            return Err(BufferError::Closed);
        }
        if data.is_empty() {
            return Ok(0);
        }

        let available = state.store.available();
        if data.len() > available {
            return Err(BufferError::Overflow {
                requested: data.len(),
                available,
            });
        }

        state.store.append(data);
        self.inner.readable.notify_all();
        Ok(data.len())
    }

    /// Reads up to `buf.len()` bytes, blocking while the buffer is open and
    /// empty.
    ///
    /// A short read is normal whenever fewer bytes are buffered than
    /// requested. After close, remaining bytes are still returned; once they
    /// are gone the read fails with [`BufferError::EndOfStream`].
    pub fn read(&self, buf: &mut [u8]) -> Result<usize> {
        let mut state = self.inner.state.lock();

        // Wait for data
        while !buf.is_empty() && !state.closed && state.store.is_empty() {
            trace!("bbuf: reader waiting for data");
            self.inner.readable.wait(&mut state);
        }

        Self::consume(&mut state, buf)
    }

    /// Reads without blocking.
    ///
    /// Returns `Ok(None)` when the buffer is open and empty, where
    /// [`read`](Self::read) would wait. Otherwise behaves like `read`.
    pub fn try_read(&self, buf: &mut [u8]) -> Result<Option<usize>> {
        let mut state = self.inner.state.lock();
        if !buf.is_empty() && !state.closed && state.store.is_empty() {
            return Ok(None);
        }
        Self::consume(&mut state, buf).map(Some)
    }

    /// Closes the buffer.
    ///
    /// Further writes fail with [`BufferError::Closed`]. Every blocked reader
    /// is woken; readers drain what is left and then see
    /// [`BufferError::EndOfStream`]. Closing again is a no-op.
    pub fn close(&self) -> Result<()> {
        let mut state = self.inner.state.lock();
        if state.closed {
            return Ok(());
        }
        state.closed = true;
        debug!(
            capacity = state.store.capacity(),
            pending = state.store.len(),
            "bbuf: closed"
        );
        self.inner.readable.notify_all();
        Ok(())
    }

    fn consume(state: &mut BlockingBufferState<S>, buf: &mut [u8]) -> Result<usize> {
        if state.store.is_empty() {
            return if state.closed {
                Err(BufferError::EndOfStream)
            } else {
                Ok(0)
            };
        }
        Ok(state.store.consume(buf))
    }
}

impl<S: ByteStore> fmt::Debug for BlockingBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("BlockingBuffer")
            .field("capacity", &state.store.capacity())
            .field("len", &state.store.len())
            .field("closed", &state.closed)
            .finish()
    }
}

// ============================================================================
// std::io adapters
// ============================================================================

impl<S: ByteStore> io::Read for &BlockingBuffer<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match BlockingBuffer::read(*self, buf) {
            Ok(n) => Ok(n),
            Err(BufferError::EndOfStream) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

impl<S: ByteStore> io::Read for BlockingBuffer<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut &*self, buf)
    }
}

impl<S: ByteStore> io::Write for &BlockingBuffer<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        BlockingBuffer::write(*self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: ByteStore> io::Write for BlockingBuffer<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
