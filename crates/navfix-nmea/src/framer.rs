use tracing::{debug, trace};

use crate::checksum;
use crate::position::{Fix, PositionState};
use crate::sentence::{self, Decode};
use crate::Reject;

/// Capacity of the staging and working buffers. A chunk at or above this
/// size is dropped whole: a truncated chunk has no trustworthy sentence
/// boundary.
pub const WORKING_BUF_CAPACITY: usize = 512;

/// Running totals across the life of a framer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FramerStats {
    pub chunks: u64,
    pub chunks_dropped: u64,
    pub sentences: u64,
    pub fixes: u64,
    pub rejects: u64,
}

/// Sentence framer: stages raw chunks from the receiver and slices them
/// into candidate sentences for validation and decode.
///
/// Hand-off contract: the producer calls [`Framer::stage`] whenever bytes
/// arrive; the staged chunk belongs to the framer until
/// [`Framer::process_pending`] has copied it into the working buffer and
/// cleared the ready flag, after which the next `stage` may overwrite it.
/// Nothing here blocks or awaits; one `process_pending` call is a
/// complete pass over the staged chunk.
#[derive(Debug)]
pub struct Framer {
    staging: Vec<u8>,
    ready: bool,
    work: Vec<u8>,
    position: PositionState,
    stats: FramerStats,
}

impl Default for Framer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framer {
    pub fn new() -> Self {
        Self {
            staging: Vec::with_capacity(WORKING_BUF_CAPACITY),
            ready: false,
            work: Vec::with_capacity(WORKING_BUF_CAPACITY),
            position: PositionState::default(),
            stats: FramerStats::default(),
        }
    }

    /// Stage one raw chunk (the receiver's bytes-arrived callback).
    ///
    /// A chunk of [`WORKING_BUF_CAPACITY`] bytes or more is rejected
    /// whole. A previously staged, not-yet-processed chunk is
    /// overwritten; the receiver outpacing the consumer loses the older
    /// chunk, never half of each.
    pub fn stage(&mut self, bytes: &[u8]) -> Result<(), Reject> {
        self.stats.chunks += 1;
        if bytes.len() >= WORKING_BUF_CAPACITY {
            self.stats.chunks_dropped += 1;
            debug!(
                "framer: dropped {} byte chunk (capacity {})",
                bytes.len(),
                WORKING_BUF_CAPACITY
            );
            return Err(Reject::ChunkTooLarge { len: bytes.len() });
        }
        self.staging.clear();
        self.staging.extend_from_slice(bytes);
        self.ready = true;
        Ok(())
    }

    /// Drain the staged chunk, if any: copy it into the working buffer,
    /// then scan left to right for `$`-to-terminator spans, running each
    /// through checksum validation and decode and folding the outcomes
    /// into the position record in arrival order.
    ///
    /// Returns the per-sentence outcomes for observability. A no-op
    /// (empty list) when nothing is staged. An unterminated sentence at
    /// the end of the chunk is discarded, not carried over.
    pub fn process_pending(&mut self) -> Vec<Result<Decode, Reject>> {
        if !self.ready {
            return Vec::new();
        }
        self.ready = false;
        self.work.clear();
        self.work.extend_from_slice(&self.staging);

        let mut outcomes = Vec::new();
        let mut at = 0;
        while let Some(rel) = self.work[at..].iter().position(|&b| b == b'$') {
            let start = at + rel;
            let Some(len) = self.work[start..]
                .iter()
                .position(|&b| b == b'\r' || b == b'\n')
            else {
                trace!("framer: unterminated sentence at end of chunk, discarded");
                break;
            };
            let end = start + len;

            let outcome = run_sentence(&self.work[start..end]);
            self.stats.sentences += 1;
            match outcome {
                Ok(decoded) => {
                    if matches!(decoded, Decode::Fix(_)) {
                        self.stats.fixes += 1;
                    }
                    self.position.apply(decoded);
                }
                Err(reject) => {
                    self.stats.rejects += 1;
                    debug!("framer: sentence rejected: {}", reject);
                }
            }
            outcomes.push(outcome);
            at = end + 1;
        }
        outcomes
    }

    /// Stage and immediately process one chunk.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Result<Decode, Reject>> {
        match self.stage(bytes) {
            Ok(()) => self.process_pending(),
            Err(reject) => vec![Err(reject)],
        }
    }

    /// The latest fix, if one was decoded since the last call.
    pub fn take_fix(&mut self) -> Option<Fix> {
        self.position.take_fix()
    }

    pub fn has_fix(&self) -> bool {
        self.position.has_fix()
    }

    pub fn stats(&self) -> FramerStats {
        self.stats
    }
}

/// One candidate sentence span, `$` through the byte before the
/// terminator: checksum first, then classify and decode.
fn run_sentence(span: &[u8]) -> Result<Decode, Reject> {
    let line = std::str::from_utf8(span).map_err(|_| Reject::BadEncoding)?;
    checksum::validate(line)?;
    sentence::decode(line)
}
