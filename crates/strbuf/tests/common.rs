#![allow(missing_docs, dead_code)]

use strbuf::StrBuf;

/// Routes the crate's `log` output through the test harness. Safe to call
/// from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small `key = value` document with uneven whitespace and blank lines.
pub const SETTINGS: &str = "  name = demo  \n\n\tlevel=3\n   path = /var/lib/demo\t\n";

/// Renders tokens one per line for snapshotting.
pub fn render_tokens(tokens: &[StrBuf]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
