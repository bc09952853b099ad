#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strbuf::{BufferOptions, StrBuf};

/// One mutation or query against the buffer under test.
#[derive(Debug, Arbitrary)]
enum Op {
    Append(Vec<u8>),
    AppendChar(u8),
    Prepend(Vec<u8>),
    Resize(u16),
    Truncate(u16),
    Clear,
    Trim,
    TrimLeft,
    TrimRight,
    Release,
    CopyFrom(Vec<u8>),
    Find(Vec<u8>),
    Tokenize(Vec<u8>),
    Replace(Vec<u8>, Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    min_capacity: u8,
    seed: Vec<u8>,
    ops: Vec<Op>,
}

fn check(buf: &StrBuf, model: &[u8]) {
    assert_eq!(buf.as_bytes(), model);
    if buf.is_released() {
        assert_eq!(buf.capacity(), 0);
        return;
    }
    assert!(buf.capacity() > buf.len());
    assert_eq!(buf.as_bytes_with_nul()[buf.len()], 0);
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

fn run(input: Input) {
    let options = BufferOptions {
        min_capacity: usize::from(input.min_capacity),
        ..Default::default()
    };
    let mut buf = StrBuf::with_options(&input.seed, options).unwrap();
    let mut model = input.seed.clone();
    check(&buf, &model);

    for op in input.ops {
        let capacity_before = buf.capacity();
        match op {
            Op::Append(bytes) => {
                buf.append_bytes(&bytes).unwrap();
                model.extend_from_slice(&bytes);
            }
            Op::AppendChar(b) => {
                buf.append_char(b).unwrap();
                model.push(b);
            }
            Op::Prepend(bytes) => {
                buf.prepend_bytes(&bytes).unwrap();
                model.splice(0..0, bytes).for_each(drop);
            }
            Op::Resize(n) => {
                buf.resize(usize::from(n)).unwrap();
                model.resize(usize::from(n), 0);
            }
            Op::Truncate(n) => {
                buf.truncate(usize::from(n));
                model.truncate(usize::from(n));
            }
            Op::Clear => {
                buf.clear();
                model.clear();
            }
            op @ (Op::Trim | Op::TrimLeft | Op::TrimRight) => {
                let left = !matches!(op, Op::TrimRight);
                let right = !matches!(op, Op::TrimLeft);
                match op {
                    Op::Trim => buf.trim(),
                    Op::TrimLeft => buf.trim_left(),
                    _ => buf.trim_right(),
                }
                if right {
                    while model.last().is_some_and(|&b| is_space(b)) {
                        model.pop();
                    }
                }
                if left {
                    let skip = model.iter().take_while(|&&b| is_space(b)).count();
                    model.drain(..skip);
                }
            }
            Op::Release => {
                buf.release();
                model.clear();
                check(&buf, &model);
                continue;
            }
            Op::CopyFrom(bytes) => {
                buf.copy_from(&StrBuf::from(bytes.as_slice())).unwrap();
                model = bytes;
            }
            Op::Find(pattern) => {
                let expected = if pattern.is_empty() {
                    None
                } else {
                    model.windows(pattern.len()).position(|w| w == pattern.as_slice())
                };
                assert_eq!(buf.find(&pattern), expected);
            }
            Op::Tokenize(delimiters) => match buf.tokenize(&delimiters) {
                Ok(tokens) => {
                    let expected: Vec<&[u8]> = model
                        .split(|b| delimiters.contains(b))
                        .filter(|t| !t.is_empty())
                        .collect();
                    let got: Vec<&[u8]> = tokens.iter().map(StrBuf::as_bytes).collect();
                    assert_eq!(got, expected);
                }
                Err(_) => assert!(delimiters.is_empty()),
            },
            Op::Replace(old, new) => match buf.replace_first(&old, &new) {
                Ok(Some(out)) => {
                    let at = buf.find(&old).unwrap();
                    let mut expected = model[..at].to_vec();
                    expected.extend_from_slice(&new);
                    expected.extend_from_slice(&model[at + old.len()..]);
                    check(&out, &expected);
                }
                Ok(None) => assert!(buf.find(&old).is_none()),
                Err(_) => assert!(old.is_empty()),
            },
        }
        assert!(buf.capacity() >= capacity_before || capacity_before == 0);
        check(&buf, &model);
    }
}

fuzz_target!(|input: Input| run(input));
