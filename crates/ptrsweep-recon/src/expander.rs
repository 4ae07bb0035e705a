//! Address Expander: input lines in, individual addresses out.

use ptrsweep_core::{Address, InputLine};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::queue::QueueWriter;

/// Counters from one expansion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandStats {
    /// Input lines read
    pub lines: u64,
    /// Addresses pushed onto the address queue
    pub addresses: u64,
    /// Lines rejected as invalid CIDR blocks
    pub rejected: u64,
}

/// Read `input` to the end, pushing every address onto `queue`.
///
/// Lines with a `/` are expanded from network to broadcast address inclusive.
/// Invalid blocks are reported to `diagnostics` as `Invalid CIDR block: <line>`
/// and skipped. Every other line is pushed verbatim, with undecodable bytes
/// replaced, and left for the lookup to reject.
///
/// The queue is closed when this returns: at end of input, on a read error,
/// or early if every reader of the queue has gone away.
pub async fn expand<R, D>(
    mut input: R,
    diagnostics: &mut D,
    queue: QueueWriter<Address>,
) -> ExpandStats
where
    R: AsyncBufRead + Unpin,
    D: AsyncWrite + Unpin,
{
    let mut stats = ExpandStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "failed to read input, closing address queue");
                break;
            }
        }
        stats.lines += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        let parsed = match std::str::from_utf8(raw) {
            Ok(line) => InputLine::parse(line).ok(),
            Err(_) if raw.contains(&b'/') => None,
            Err(_) => Some(InputLine::Single(Address::new(String::from_utf8_lossy(raw)))),
        };

        let Some(line) = parsed else {
            stats.rejected += 1;
            report_invalid(diagnostics, &String::from_utf8_lossy(raw)).await;
            continue;
        };

        let delivered = match line {
            InputLine::Single(address) => push(&queue, address, &mut stats).await,
            InputLine::Block(block) => {
                debug!(block = %block, count = block.len(), "expanding CIDR block");
                let mut delivered = true;
                for ip in block.addresses() {
                    if !push(&queue, Address::from(ip), &mut stats).await {
                        delivered = false;
                        break;
                    }
                }
                delivered
            }
        };

        if !delivered {
            debug!("address queue has no readers, stopping expansion");
            break;
        }
    }

    queue.close();
    debug!(
        lines = stats.lines,
        addresses = stats.addresses,
        rejected = stats.rejected,
        "input exhausted"
    );
    stats
}

async fn push(queue: &QueueWriter<Address>, address: Address, stats: &mut ExpandStats) -> bool {
    if queue.push(address).await.is_err() {
        return false;
    }
    stats.addresses += 1;
    true
}

async fn report_invalid<D: AsyncWrite + Unpin>(diagnostics: &mut D, line: &str) {
    let message = format!("Invalid CIDR block: {line}\n");
    let written = async {
        diagnostics.write_all(message.as_bytes()).await?;
        diagnostics.flush().await
    };
    if let Err(e) = written.await {
        warn!(error = %e, "failed to write diagnostic");
    }
}
