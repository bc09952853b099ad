//! In-place removal of ASCII whitespace.

use crate::buffer::StrBuf;

/// Space, tab, newline, carriage return, vertical tab and form feed.
///
/// Unlike `u8::is_ascii_whitespace`, vertical tab counts as whitespace here.
#[inline]
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

impl StrBuf {
    /// Drops trailing whitespace.
    pub fn trim_right(&mut self) {
        let keep = self
            .as_bytes()
            .iter()
            .rposition(|&b| !is_space(b))
            .map_or(0, |last| last + 1);
        self.truncate(keep);
    }

    /// Drops leading whitespace, shifting the rest of the content and the
    /// terminator to the front.
    pub fn trim_left(&mut self) {
        let len = self.len();
        let skip = self.as_bytes().iter().take_while(|&&b| is_space(b)).count();
        if skip == 0 {
            return;
        }
        self.raw_mut().copy_within(skip..=len, 0);
        self.truncate(len - skip);
    }

    /// Drops whitespace from both ends.
    pub fn trim(&mut self) {
        self.trim_right();
        self.trim_left();
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::StrBuf;

    #[rstest]
    #[case("  hi  ", "hi")]
    #[case("", "")]
    #[case("   ", "")]
    #[case("\t\n\r\x0B\x0Cx\x0C\x0B\r\n\t", "x")]
    #[case("no-trim", "no-trim")]
    #[case(" inner space kept ", "inner space kept")]
    fn trim_both_ends(#[case] input: &str, #[case] expected: &str) {
        let mut buf = StrBuf::from(input);
        buf.trim();
        assert_eq!(buf, expected);
        assert_eq!(buf.len(), expected.len());
        assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn trim_left_moves_terminator() {
        let mut buf = StrBuf::from("   abc");
        let cap = buf.capacity();
        buf.trim_left();
        assert_eq!(buf.as_bytes_with_nul(), b"abc\0");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn trim_right_only_touches_tail() {
        let mut buf = StrBuf::from("  abc \n");
        buf.trim_right();
        assert_eq!(buf.as_bytes_with_nul(), b"  abc\0");
    }

    #[test]
    fn trim_released_buffer_is_noop() {
        let mut buf = StrBuf::from(" x ");
        buf.release();
        buf.trim();
        assert!(buf.is_released());
    }

    #[test]
    fn non_ascii_bytes_are_not_whitespace() {
        // U+00A0 NO-BREAK SPACE encodes as C2 A0.
        let mut buf = StrBuf::from("\u{a0}x\u{a0}");
        buf.trim();
        assert_eq!(buf, "\u{a0}x\u{a0}");
    }
}
