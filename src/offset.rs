//! Character-offset helpers.
//!
//! Recognizer spans are **character** offsets, not byte offsets. The upstream
//! token-classification model counts Unicode scalar values, so `"café"` has a
//! span of width 4 even though it occupies 5 bytes of UTF-8. Rust string
//! slicing works in bytes, so every place the pipeline needs
//! `text[start..end]` goes through [`char_slice`] instead.

/// Number of characters in `text`.
///
/// This is the upper bound for entity character offsets, not `text.len()`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the character at `char_offset`, or `Some(text.len())` when
/// `char_offset` equals the character count (the one-past-the-end position).
///
/// Returns `None` when `char_offset` lies beyond the text.
#[must_use]
pub fn byte_offset(text: &str, char_offset: usize) -> Option<usize> {
    if char_offset == 0 {
        return Some(0);
    }
    let mut seen = 0usize;
    for (byte_idx, _) in text.char_indices() {
        if seen == char_offset {
            return Some(byte_idx);
        }
        seen += 1;
    }
    (seen == char_offset).then_some(text.len())
}

/// Slice `text` by the half-open character range `[start, end)`.
///
/// Returns `None` when the range is inverted or out of bounds.
///
/// # Example
///
/// ```rust
/// use medner::offset::char_slice;
///
/// assert_eq!(char_slice("chest pain", 6, 10), Some("pain"));
/// assert_eq!(char_slice("café au lait", 0, 4), Some("café"));
/// assert_eq!(char_slice("short", 2, 99), None);
/// ```
#[must_use]
pub fn char_slice(text: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }
    let byte_start = byte_offset(text, start)?;
    let byte_end = byte_offset(text, end)?;
    text.get(byte_start..byte_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_ascii() {
        assert_eq!(char_len("chest pain"), 10);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_char_len_multibyte() {
        assert_eq!(char_len("café"), 4);
        assert_eq!("café".len(), 5); // bytes differ
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("café au lait", 0), Some(0));
        assert_eq!(byte_offset("café au lait", 4), Some(5)); // é is 2 bytes
        assert_eq!(byte_offset("abc", 3), Some(3)); // one past end
        assert_eq!(byte_offset("abc", 4), None);
    }

    #[test]
    fn test_char_slice_ascii() {
        let text = "Patient has chest pain";
        assert_eq!(char_slice(text, 12, 17), Some("chest"));
        assert_eq!(char_slice(text, 18, 22), Some("pain"));
    }

    #[test]
    fn test_char_slice_multibyte() {
        assert_eq!(char_slice("café au lait", 5, 7), Some("au"));
        assert_eq!(char_slice("douleur à l'épaule", 8, 9), Some("à"));
    }

    #[test]
    fn test_char_slice_bounds() {
        assert_eq!(char_slice("abc", 0, 3), Some("abc"));
        assert_eq!(char_slice("abc", 0, 4), None);
        assert_eq!(char_slice("abc", 2, 1), None);
        assert_eq!(char_slice("abc", 1, 1), Some(""));
    }
}
