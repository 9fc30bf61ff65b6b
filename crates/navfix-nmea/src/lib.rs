pub mod checksum;
pub mod coord;
pub mod doctor;
pub mod fields;
pub mod framer;
pub mod position;
pub mod sentence;
pub mod source;

use thiserror::Error;

pub use framer::Framer;
pub use position::{Fix, PositionState};
pub use sentence::Decode;

/// Why a chunk or candidate sentence was ignored.
///
/// Every variant is local and recoverable: the framer skips the offender
/// and keeps scanning, and the position record is never partially
/// mutated on the way to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reject {
    #[error("sentence does not start with '$'")]
    MissingStart,
    #[error("no '*' checksum delimiter before end of sentence")]
    MissingChecksum,
    #[error("checksum suffix is not two hex digits")]
    BadChecksumDigits,
    #[error("checksum mismatch: computed {computed:02X}, stated {stated:02X}")]
    ChecksumMismatch { computed: u8, stated: u8 },
    #[error("sentence is not valid text")]
    BadEncoding,
    #[error("unrecognized sentence type")]
    UnknownType,
    #[error("required field {0} missing, empty, or overlong")]
    MissingField(usize),
    #[error("field {0} is not a number")]
    BadNumber(usize),
    #[error("chunk of {len} bytes at or above working buffer capacity")]
    ChunkTooLarge { len: usize },
}
