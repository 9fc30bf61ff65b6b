use crate::coord::to_decimal;
use crate::fields::field;
use crate::position::Fix;
use crate::Reject;

/// Position-fix-bearing sentence types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    Rmc,
    Gga,
    Gll,
}

/// Outcome of decoding one checksum-valid sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decode {
    /// The sentence carried an active fix.
    Fix(Fix),
    /// The sentence was recognized but reports no fix.
    NoFix,
}

/// Classify a sentence by its identifier.
///
/// Substring match anywhere in the line, not an exact five-character
/// type code: `$GPRMC`, `$GNRMC` and friends all land on [`SentenceKind::Rmc`].
pub fn classify(line: &str) -> Option<SentenceKind> {
    if line.contains("RMC") {
        Some(SentenceKind::Rmc)
    } else if line.contains("GGA") {
        Some(SentenceKind::Gga)
    } else if line.contains("GLL") {
        Some(SentenceKind::Gll)
    } else {
        None
    }
}

/// Decode a complete, checksum-valid sentence.
///
/// No variant mutates anything; the caller folds the outcome into its
/// position record. Field errors reject the whole sentence rather than
/// apply a partial update.
pub fn decode(line: &str) -> Result<Decode, Reject> {
    match classify(line).ok_or(Reject::UnknownType)? {
        SentenceKind::Rmc => decode_rmc(line),
        SentenceKind::Gga => decode_gga(line),
        SentenceKind::Gll => decode_gll(line),
    }
}

// RMC: field 2 is the status flag; `A` means active. Fields 3-6 are
// lat, N/S, lon, E/W.
fn decode_rmc(line: &str) -> Result<Decode, Reject> {
    match field(line, 2) {
        Some("A") => latlon(line, 3).map(Decode::Fix),
        _ => Ok(Decode::NoFix),
    }
}

// GGA: field 6 is fix quality, 0 = no fix. Fields 2-5 are lat, N/S,
// lon, E/W. An unparsable quality reads as 0.
fn decode_gga(line: &str) -> Result<Decode, Reject> {
    let quality: u8 = field(line, 6).and_then(|f| f.parse().ok()).unwrap_or(0);
    if quality > 0 {
        latlon(line, 2).map(Decode::Fix)
    } else {
        Ok(Decode::NoFix)
    }
}

// GLL: fields 1-4 are lat, N/S, lon, E/W; field 6 is the status flag.
fn decode_gll(line: &str) -> Result<Decode, Reject> {
    match field(line, 6) {
        Some("A") => latlon(line, 1).map(Decode::Fix),
        _ => Ok(Decode::NoFix),
    }
}

/// Four consecutive fields starting at `start`: latitude, N/S
/// hemisphere, longitude, E/W hemisphere.
fn latlon(line: &str, start: usize) -> Result<Fix, Reject> {
    let lat_raw = numeric(line, start)?;
    let ns = hemisphere(line, start + 1)?;
    let lon_raw = numeric(line, start + 2)?;
    let ew = hemisphere(line, start + 3)?;
    Ok(Fix {
        lat: to_decimal(lat_raw, ns),
        lon: to_decimal(lon_raw, ew),
    })
}

fn numeric(line: &str, index: usize) -> Result<f64, Reject> {
    let f = field(line, index).ok_or(Reject::MissingField(index))?;
    f.parse().map_err(|_| Reject::BadNumber(index))
}

fn hemisphere(line: &str, index: usize) -> Result<char, Reject> {
    let f = field(line, index).ok_or(Reject::MissingField(index))?;
    f.chars().next().ok_or(Reject::MissingField(index))
}
