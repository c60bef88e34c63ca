//! Message framing over a byte stream.
//!
//! # Responsibilities
//! - Accumulate chunks read from a socket into one buffer
//! - Detect the end of the head (CRLFCRLF)
//! - Complete the body using the declared `Content-Length`
//!
//! # Design Decisions
//! - `Framer` is sans-io: it only sees chunks, `read_message` drives it
//! - Until the head is complete, a chunk shorter than the read capacity is
//!   taken as end of stream. There is no way to tell a closed peer from a
//!   slow one here, so framing is best-effort under network delay.
//! - The short-chunk rule applies only while the head is incomplete. After
//!   CRLFCRLF only the declared length or a closed stream ends the read, so
//!   short chunks carrying the rest of a body are still collected.
//! - A missing or unparsable `Content-Length` counts as zero

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::headers::{find_head_end, CRLF, HEAD_TERMINATOR};

/// Default read buffer capacity.
pub const DEFAULT_READ_CAPACITY: usize = 2048;

/// Outcome of feeding one chunk to the framer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Keep reading.
    NeedMore,
    /// A full message (head and declared body) has arrived.
    Complete,
    /// The stream looks exhausted before the message completed.
    Exhausted,
}

/// Incremental message accumulator.
#[derive(Debug)]
pub struct Framer {
    buf: Vec<u8>,
    capacity: usize,
}

impl Framer {
    /// Create a framer for chunks read with a buffer of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::new(),
            capacity,
        }
    }

    /// Append a chunk and report whether reading should continue.
    ///
    /// An empty chunk means the peer closed the stream.
    pub fn push(&mut self, chunk: &[u8]) -> Progress {
        if chunk.is_empty() {
            return Progress::Exhausted;
        }
        self.buf.extend_from_slice(chunk);

        match find_head_end(&self.buf) {
            Some(head_end) => {
                let declared = content_length(&self.buf[..head_end]);
                let received = self.buf.len() - (head_end + HEAD_TERMINATOR.len());
                if declared == 0 || received >= declared {
                    Progress::Complete
                } else {
                    Progress::NeedMore
                }
            }
            None if chunk.len() < self.capacity => Progress::Exhausted,
            None => Progress::NeedMore,
        }
    }

    /// Bytes accumulated so far.
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Declared body length from a raw head; first occurrence wins.
fn content_length(head: &[u8]) -> usize {
    let head = String::from_utf8_lossy(head);
    head.split(CRLF)
        .find(|line| line.to_ascii_lowercase().starts_with("content-length:"))
        .and_then(|line| line.split_once(':'))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Read from `reader` until one message has been framed.
///
/// Returns whatever was accumulated if the stream ends early; the caller's
/// decoder degrades on partial input instead of failing.
pub async fn read_message<R>(reader: &mut R, capacity: usize) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut framer = Framer::new(capacity);
    let mut chunk = vec![0u8; capacity];

    loop {
        let n = reader.read(&mut chunk).await?;
        match framer.push(&chunk[..n]) {
            Progress::NeedMore => continue,
            progress => {
                tracing::trace!(
                    bytes = framer.buffered().len(),
                    complete = progress == Progress::Complete,
                    "Message framed"
                );
                return Ok(framer.into_bytes());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tokio::io::ReadBuf;

    /// Reader that hands out pre-split chunks and counts reads.
    struct ChunkedReader {
        chunks: VecDeque<Vec<u8>>,
        reads: usize,
    }

    impl ChunkedReader {
        fn new(chunks: Vec<Vec<u8>>) -> Self {
            Self {
                chunks: chunks.into(),
                reads: 0,
            }
        }
    }

    impl AsyncRead for ChunkedReader {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            self.reads += 1;
            if let Some(chunk) = self.chunks.pop_front() {
                buf.put_slice(&chunk);
            }
            Poll::Ready(Ok(()))
        }
    }

    #[test]
    fn request_without_body_completes_at_terminator() {
        let mut framer = Framer::new(64);
        assert_eq!(framer.push(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n"), Progress::Complete);
    }

    #[test]
    fn waits_for_declared_body() {
        let mut framer = Framer::new(8);
        assert_eq!(
            framer.push(b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nab"),
            Progress::NeedMore
        );
        // A short chunk does not end the body once the head is known.
        assert_eq!(framer.push(b"c"), Progress::NeedMore);
        assert_eq!(framer.push(b"de"), Progress::Complete);
    }

    #[test]
    fn short_chunk_without_terminator_is_exhausted() {
        let mut framer = Framer::new(16);
        assert_eq!(framer.push(b"GET / HTTP/1.1\r\n"), Progress::Exhausted);
        assert_eq!(framer.into_bytes(), b"GET / HTTP/1.1\r\n");
    }

    #[test]
    fn full_chunk_without_terminator_needs_more() {
        let mut framer = Framer::new(4);
        assert_eq!(framer.push(b"GET "), Progress::NeedMore);
    }

    #[test]
    fn empty_chunk_means_closed() {
        let mut framer = Framer::new(4);
        assert_eq!(framer.push(b""), Progress::Exhausted);
    }

    #[test]
    fn content_length_is_case_insensitive_and_first_wins() {
        let head = b"HTTP/1.1 200 OK\r\ncontent-LENGTH:  3 \r\nContent-Length: 9";
        assert_eq!(content_length(head), 3);
    }

    #[test]
    fn unparsable_content_length_is_zero() {
        assert_eq!(content_length(b"HTTP/1.1 200 OK\r\nContent-Length: lots"), 0);
        assert_eq!(content_length(b"HTTP/1.1 200 OK"), 0);
    }

    #[tokio::test]
    async fn three_chunks_stop_without_fourth_read() {
        let capacity = 16;
        let message = b"HTTP/1.1 200 OK\r\nContent-Length: 3\r\n\r\nabc".to_vec();
        // Two full-capacity chunks, then a short tail.
        let chunks = vec![
            message[..16].to_vec(),
            message[16..32].to_vec(),
            message[32..].to_vec(),
        ];
        assert!(chunks[2].len() < capacity);

        let mut reader = ChunkedReader::new(chunks.clone());
        let framed = read_message(&mut reader, capacity).await.unwrap();

        assert_eq!(framed, chunks.concat());
        assert_eq!(reader.reads, 3);
    }

    #[tokio::test]
    async fn closed_stream_returns_partial_bytes() {
        let mut reader = ChunkedReader::new(vec![b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\nab".to_vec()]);
        let framed = read_message(&mut reader, 4096).await.unwrap();
        assert!(framed.ends_with(b"ab"));
        assert_eq!(reader.reads, 2);
    }

    #[tokio::test]
    async fn short_chunks_after_head_keep_reading() {
        let capacity = 64;
        let head = b"HTTP/1.1 200 OK\r\nContent-Length: 6\r\n\r\nab".to_vec();
        assert!(head.len() < capacity);
        let chunks = vec![head, b"cd".to_vec(), b"ef".to_vec()];

        let mut reader = ChunkedReader::new(chunks.clone());
        let framed = read_message(&mut reader, capacity).await.unwrap();

        assert_eq!(framed, chunks.concat());
        assert_eq!(reader.reads, 3);
    }
}
