use crate::StrBuf;

/// Checks the length/capacity/terminator invariants that must hold after
/// every public operation.
pub fn invariants_hold(buf: &StrBuf) -> bool {
    if buf.is_released() {
        return buf.len() == 0 && buf.capacity() == 0;
    }
    let with_nul = buf.as_bytes_with_nul();
    buf.capacity() > buf.len()
        && with_nul.len() == buf.len() + 1
        && with_nul[buf.len()] == 0
}

/// Number of property test cases to run, larger on CI.
pub fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
