use anyhow::{Context, Result};
use time::OffsetDateTime;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tokio_serial::{SerialPortBuilderExt, SerialStream};

use crate::framer::{Framer, FramerStats};
use crate::position::Fix;

/// How many bytes one read may deliver. Kept well below the framer
/// capacity so a full read is never dropped.
pub const READ_CHUNK: usize = 256;

/// A timestamped fix as delivered to the consumer.
#[derive(Debug, Clone)]
pub struct SourcedFix {
    pub lat: f64,
    pub lon: f64,
    pub ts: OffsetDateTime,
}

enum Reader {
    Serial(SerialStream),
    File(File),
}

/// Raw-chunk byte source (serial device or recorded file) wired to a
/// framer. Reads arrive with arbitrary fragmentation, exactly as the
/// framer expects them from a receiver.
pub struct FixSource {
    reader: Reader,
    framer: Framer,
    chunk: [u8; READ_CHUNK],
}

impl FixSource {
    pub fn serial(dev: &str, baud: u32) -> Result<Self> {
        let port = tokio_serial::new(dev, baud)
            .open_native_async()
            .with_context(|| format!("open serial {}", dev))?;
        Ok(Self::new(Reader::Serial(port)))
    }

    pub fn file(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path).with_context(|| format!("open nmea file {}", path))?;
        Ok(Self::new(Reader::File(File::from_std(f))))
    }

    fn new(reader: Reader) -> Self {
        Self {
            reader,
            framer: Framer::new(),
            chunk: [0u8; READ_CHUNK],
        }
    }

    pub fn stats(&self) -> FramerStats {
        self.framer.stats()
    }

    /// Read chunks until a fresh fix is decoded.
    pub async fn next_fix(&mut self) -> Result<SourcedFix> {
        loop {
            let n = match &mut self.reader {
                Reader::Serial(r) => r.read(&mut self.chunk).await?,
                Reader::File(r) => {
                    let n = r.read(&mut self.chunk).await?;
                    if n == 0 {
                        // EOF: poll for an appended tail
                        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
                        continue;
                    }
                    n
                }
            };
            if n == 0 {
                continue;
            }
            self.framer.feed(&self.chunk[..n]);
            if let Some(Fix { lat, lon }) = self.framer.take_fix() {
                return Ok(SourcedFix {
                    lat,
                    lon,
                    ts: OffsetDateTime::now_utc(),
                });
            }
        }
    }
}
