//! Fixed-capacity text lines.
//!
//! Alert and log lines are limited by character count, while `heapless::String`
//! capacity is in bytes. Buffers are sized with [`line_capacity`] so a line of
//! the maximum length fits even when every character is four UTF-8 bytes.

use heapless::String;

/// Byte capacity needed for `chars` characters of UTF-8.
pub const fn line_capacity(chars: usize) -> usize {
    chars * 4
}

/// Copy at most `max_chars` characters of `msg` into a fixed buffer.
///
/// Stops early if the buffer fills up first.
pub fn truncate_line<const N: usize>(msg: &str, max_chars: usize) -> String<N> {
    let mut line = String::new();
    for c in msg.chars().take(max_chars) {
        if line.push(c).is_err() {
            break;
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 8;

    #[test]
    fn test_short_line_kept_whole() {
        let line: String<{ line_capacity(MAX) }> = truncate_line("Low", MAX);
        assert_eq!(line.as_str(), "Low");
    }

    #[test]
    fn test_ascii_cut_at_char_limit() {
        let line: String<{ line_capacity(MAX) }> = truncate_line("Brush motor stall", MAX);
        assert_eq!(line.as_str(), "Brush mo");
    }

    #[test]
    fn test_multibyte_counted_as_chars() {
        // 2-byte, 3-byte and 4-byte characters all count as one
        let line: String<{ line_capacity(MAX) }> = truncate_line(&"é€😀".repeat(4), MAX);
        assert_eq!(line.chars().count(), MAX, "Limit applies to characters, not bytes");
        assert_eq!(line.as_str(), "é€😀é€😀é€");
    }

    #[test]
    fn test_small_buffer_stops_on_char_boundary() {
        let line: String<5> = truncate_line("ééé", MAX);
        assert_eq!(line.as_str(), "éé", "A character that does not fit is dropped whole");
    }
}
