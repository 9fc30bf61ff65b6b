use crate::Reject;

/// XOR fold over a sentence body (the text between `$` and `*`).
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |acc, b| acc ^ b)
}

/// Validate a `$...*HH` sentence against its stated checksum.
///
/// The fold covers every byte strictly between the leading `$` and the
/// first `*`; the two characters after `*` are the stated value, base 16.
pub fn validate(sentence: &str) -> Result<(), Reject> {
    let body = sentence.strip_prefix('$').ok_or(Reject::MissingStart)?;
    let (body, suffix) = body.split_once('*').ok_or(Reject::MissingChecksum)?;
    let stated = suffix
        .get(..2)
        .and_then(|h| u8::from_str_radix(h, 16).ok())
        .ok_or(Reject::BadChecksumDigits)?;
    let computed = checksum(body);
    if computed == stated {
        Ok(())
    } else {
        Err(Reject::ChecksumMismatch { computed, stated })
    }
}
