//! Collector: drains the result queue into an output stream.

use std::io::ErrorKind;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::ReconResult;
use crate::queue::QueueReader;

/// Write each result as one line, in arrival order, until the queue closes.
///
/// Each line is flushed as it is written. A closed output (`BrokenPipe`) ends
/// collection quietly; dropping the reader then lets the upstream stages wind
/// down. Returns the number of lines written.
pub async fn collect<W>(results: QueueReader<String>, mut output: W) -> ReconResult<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;

    while let Some(line) = results.pop().await {
        match write_line(&mut output, &line).await {
            Ok(()) => written += 1,
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!(written, "output closed, stopping collector");
                return Ok(written);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(written)
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> std::io::Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
