//! Bounded queue connecting pipeline stages.
//!
//! [`bounded`] returns a writer and a reader. `push` waits while the queue is
//! full, `pop` waits while it is empty and yields `None` once the queue is
//! closed and drained.
//!
//! Closing is structural: a queue is closed when its last [`QueueWriter`] is
//! dropped (or consumed by [`QueueWriter::close`]). Writers are owned by the
//! tasks that push, so pushing after close cannot be written and closing twice
//! is impossible.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};

/// Every reader of the queue has been dropped
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("queue has no remaining readers")]
pub struct QueueClosed;

/// Create a bounded queue holding at most `capacity` items
#[must_use]
pub fn bounded<T>(capacity: NonZeroUsize) -> (QueueWriter<T>, QueueReader<T>) {
    let (tx, rx) = mpsc::channel(capacity.get());
    (
        QueueWriter { tx },
        QueueReader {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

/// Push half of a bounded queue.
///
/// Clones share the queue; it stays open until every clone is gone.
pub struct QueueWriter<T> {
    tx: mpsc::Sender<T>,
}

impl<T> QueueWriter<T> {
    /// Push an item, waiting for space if the queue is full
    pub async fn push(&self, item: T) -> Result<(), QueueClosed> {
        self.tx.send(item).await.map_err(|_| QueueClosed)
    }

    /// Close this writer's side of the queue.
    ///
    /// The queue itself closes once no other writer remains.
    pub fn close(self) {
        drop(self);
    }

    /// Returns true if every reader has been dropped
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Maximum number of buffered items
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tx.max_capacity()
    }
}

impl<T> Clone for QueueWriter<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> fmt::Debug for QueueWriter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueWriter")
            .field("capacity", &self.capacity())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Pop half of a bounded queue.
///
/// Clones share one underlying receiver, so each item is handed to exactly one
/// reader.
pub struct QueueReader<T> {
    rx: Arc<Mutex<mpsc::Receiver<T>>>,
}

impl<T> QueueReader<T> {
    /// Pop the next item, waiting while the queue is empty.
    ///
    /// Returns `None` once the queue is closed and drained.
    pub async fn pop(&self) -> Option<T> {
        self.rx.lock().await.recv().await
    }
}

impl<T> Clone for QueueReader<T> {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<T> fmt::Debug for QueueReader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueReader")
            .field("readers", &Arc::strong_count(&self.rx))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready};

    fn capacity(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[tokio::test]
    async fn fifo_then_end_of_stream() {
        let (writer, reader) = bounded(capacity(4));
        for i in 0..3 {
            writer.push(i).await.unwrap();
        }
        writer.close();

        assert_eq!(reader.pop().await, Some(0));
        assert_eq!(reader.pop().await, Some(1));
        assert_eq!(reader.pop().await, Some(2));
        assert_eq!(reader.pop().await, None);
        assert_eq!(reader.pop().await, None);
    }

    #[tokio::test]
    async fn push_waits_while_full() {
        let (writer, reader) = bounded(capacity(2));
        assert_eq!(writer.capacity(), 2);
        writer.push(1).await.unwrap();
        writer.push(2).await.unwrap();

        let mut blocked = tokio_test::task::spawn(writer.push(3));
        assert_pending!(blocked.poll());

        assert_eq!(reader.pop().await, Some(1));
        assert!(blocked.is_woken());
        assert_ready!(blocked.poll()).unwrap();
    }

    #[tokio::test]
    async fn stays_open_until_last_writer_drops() {
        let (writer, reader) = bounded(capacity(2));
        let lent = writer.clone();
        writer.close();

        lent.push("late").await.unwrap();
        drop(lent);

        assert_eq!(reader.pop().await, Some("late"));
        assert_eq!(reader.pop().await, None);
    }

    #[tokio::test]
    async fn push_fails_without_readers() {
        let (writer, reader) = bounded::<u8>(capacity(1));
        drop(reader);
        assert!(writer.is_closed());
        assert_eq!(writer.push(1).await, Err(QueueClosed));
    }

    #[tokio::test]
    async fn shared_readers_never_duplicate() {
        let (writer, reader) = bounded(capacity(8));
        let producer = tokio::spawn(async move {
            for i in 0..1000u32 {
                writer.push(i).await.unwrap();
            }
        });

        let mut consumers = Vec::new();
        for _ in 0..4 {
            let reader = reader.clone();
            consumers.push(tokio::spawn(async move {
                let mut seen = Vec::new();
                while let Some(i) = reader.pop().await {
                    seen.push(i);
                }
                seen
            }));
        }
        drop(reader);

        producer.await.unwrap();
        let mut all = Vec::new();
        for consumer in consumers {
            all.extend(consumer.await.unwrap());
        }
        all.sort_unstable();
        assert_eq!(all, (0..1000).collect::<Vec<_>>());
    }
}
