//! Bounded blocking byte buffer.
//!
//! This crate bridges an asynchronous producer with a synchronous consumer:
//! writers deposit bytes without ever blocking, and readers block until data
//! is available or the buffer is closed.
//!
//! - [`BlockingBuffer`]: the shared, size-bounded buffer
//! - [`ByteStore`]: the storage it wraps, with [`RingStore`] (default) and
//!   [`LinearStore`] implementations
//!
//! # Writing
//!
//! A write either stores every byte or none of them. When the bytes do not
//! fit in the remaining capacity the write fails with
//! [`BufferError::Overflow`] and the caller decides whether to retry, shrink
//! or drop the payload.
//!
//! ```
//! use giztoy_bbuf::{BlockingBuffer, BufferError};
//!
//! let buf = BlockingBuffer::new(16);
//! assert_eq!(buf.write(&[0; 16]).unwrap(), 16);
//! assert!(matches!(buf.write(&[0; 16]), Err(BufferError::Overflow { .. })));
//! ```
//!
//! # Reading and closing
//!
//! Reads block while the buffer is open and empty. Closing wakes every
//! blocked reader; bytes written before the close are still delivered, after
//! which reads fail with [`BufferError::EndOfStream`].
//!
//! ```
//! use giztoy_bbuf::{BlockingBuffer, BufferError};
//!
//! let buf = BlockingBuffer::new(1024);
//! buf.write(&[1, 2, 3]).unwrap();
//! buf.close().unwrap();
//!
//! let mut data = [0; 8];
//! assert_eq!(buf.read(&mut data).unwrap(), 3);
//! assert_eq!(buf.read(&mut data), Err(BufferError::EndOfStream));
//! assert_eq!(buf.write(&[4]), Err(BufferError::Closed));
//! ```
//!
//! # Thread Safety
//!
//! [`BlockingBuffer`] is `Send + Sync` and `Clone`; clones share the same
//! buffer through an `Arc`. It also implements [`std::io::Read`] and
//! [`std::io::Write`], with end of stream reported as `Ok(0)`.

mod blocking;
mod bytes;
mod error;
mod store;

pub use blocking::BlockingBuffer;
pub use bytes::*;
pub use error::{BufferError, Result};
pub use store::{ByteStore, LinearStore, RingStore};
