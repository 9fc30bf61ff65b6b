/// Longest field the decoder accepts. Longer text is treated as corrupt
/// rather than truncated.
pub const MAX_FIELD_LEN: usize = 31;

/// Returns the `index`-th comma-delimited field of `sentence`.
///
/// Field 0 is the text before the first comma. The terminal field is
/// bounded by the next comma or the `*` checksum delimiter, whichever
/// comes first. Empty fields and fields longer than [`MAX_FIELD_LEN`]
/// are reported as absent, as is any index past the last delimiter.
///
/// The returned slice borrows from `sentence`, so fields extracted from
/// the same sentence may be held simultaneously.
pub fn field(sentence: &str, index: usize) -> Option<&str> {
    let mut rest = sentence;
    for _ in 0..index {
        let (_, tail) = rest.split_once(',')?;
        rest = tail;
    }
    let end = rest.find([',', '*'])?;
    let f = &rest[..end];
    if f.is_empty() || f.len() > MAX_FIELD_LEN {
        return None;
    }
    Some(f)
}
