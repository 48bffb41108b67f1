//! Convenience constructors for common buffer sizes.

use crate::BlockingBuffer;

/// Creates a 256B blocking buffer.
pub fn blocking_bytes_256b() -> BlockingBuffer {
    BlockingBuffer::new(256)
}

/// Creates a 1KB blocking buffer.
pub fn blocking_bytes_1kb() -> BlockingBuffer {
    BlockingBuffer::new(1024)
}

/// Creates a 4KB blocking buffer.
pub fn blocking_bytes_4kb() -> BlockingBuffer {
    BlockingBuffer::new(4096)
}

/// Creates a 16KB blocking buffer.
pub fn blocking_bytes_16kb() -> BlockingBuffer {
    BlockingBuffer::new(16384)
}

/// Creates a 64KB blocking buffer.
pub fn blocking_bytes_64kb() -> BlockingBuffer {
    BlockingBuffer::new(65536)
}

/// Creates a blocking buffer with the specified capacity.
pub fn blocking_bytes(size: usize) -> BlockingBuffer {
    BlockingBuffer::new(size)
}

/// Creates a default 1KB blocking buffer.
pub fn blocking_bytes_default() -> BlockingBuffer {
    blocking_bytes_1kb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_constructors() {
        assert_eq!(blocking_bytes_256b().capacity(), 256);
        assert_eq!(blocking_bytes_1kb().capacity(), 1024);
        assert_eq!(blocking_bytes_4kb().capacity(), 4096);
        assert_eq!(blocking_bytes_16kb().capacity(), 16384);
        assert_eq!(blocking_bytes_64kb().capacity(), 65536);
        assert_eq!(blocking_bytes(100).capacity(), 100);
        assert_eq!(blocking_bytes_default().capacity(), 1024);
    }

    #[test]
    fn test_sized_buffers_start_open_and_empty() {
        let buf = blocking_bytes_4kb();
        assert!(buf.is_empty());
        assert!(!buf.is_closed());
        assert_eq!(buf.write(&[1, 2, 3]).unwrap(), 3);
    }
}
