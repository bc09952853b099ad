//! Whole-file persistence. A buffer's on-disk form is exactly its content
//! bytes: no header, no length prefix, no terminator.

use std::{
    fs::OpenOptions,
    io::{ErrorKind, Read, Write},
    path::Path,
};

use alloc::vec;
use log::{debug, warn};

use crate::{
    buffer::StrBuf,
    error::BufferError,
    options::{BufferOptions, WriteMode},
};

impl StrBuf {
    /// Reads the entire file at `path` into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Io`] if the file cannot be opened or read, or
    /// [`BufferError::Allocation`] if the buffer cannot grow.
    pub fn read_file(path: impl AsRef<Path>) -> Result<StrBuf, BufferError> {
        Self::read_file_with_options(path, BufferOptions::default())
    }

    /// Reads the entire file at `path`, growing the buffer per `options`.
    ///
    /// The file is consumed in `options.read_chunk_size` pieces, each one
    /// appended through [`StrBuf::append_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Io`] if the file cannot be opened or read, or
    /// [`BufferError::Allocation`] if the buffer cannot grow.
    pub fn read_file_with_options(
        path: impl AsRef<Path>,
        options: BufferOptions,
    ) -> Result<StrBuf, BufferError> {
        let path = path.as_ref();
        let mut file = OpenOptions::new().read(true).open(path).inspect_err(|err| {
            warn!("cannot open {} for reading: {err}", path.display());
        })?;

        let buf = read_chunks(&mut file, options, path)?;
        debug!("read {} bytes from {}", buf.len(), path.display());
        Ok(buf)
    }

    /// Writes the content (without terminator) to the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Io`] if the file cannot be opened, or if fewer
    /// than `len()` bytes could be written.
    pub fn write_file(&self, path: impl AsRef<Path>, mode: WriteMode) -> Result<(), BufferError> {
        let path = path.as_ref();
        let mut open = OpenOptions::new();
        open.create(true);
        match mode {
            WriteMode::Truncate => open.write(true).truncate(true),
            WriteMode::Append => open.append(true),
        };
        let mut file = open.open(path).inspect_err(|err| {
            warn!("cannot open {} for writing: {err}", path.display());
        })?;

        let written = write_content(&mut file, self.as_bytes(), path)?;
        debug!("wrote {written} bytes to {} ({mode:?})", path.display());
        Ok(())
    }
}

/// Drains `reader` into a new buffer, `read_chunk_size` bytes at a time.
/// `path` is only used for log lines.
fn read_chunks<R: Read>(
    reader: &mut R,
    options: BufferOptions,
    path: &Path,
) -> Result<StrBuf, BufferError> {
    let mut buf = StrBuf::with_options(&[], options)?;
    let mut chunk = vec![0u8; options.effective_read_chunk_size()];
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                warn!(
                    "read from {} failed after {} bytes: {err}",
                    path.display(),
                    buf.len()
                );
                return Err(err.into());
            }
        };
        buf.append_bytes(&chunk[..n])?;
    }
    Ok(buf)
}

/// Writes all of `bytes`, retrying on `Interrupted`, then flushes.
/// A writer that accepts zero bytes is reported as `WriteZero`.
fn write_content<W: Write>(
    writer: &mut W,
    bytes: &[u8],
    path: &Path,
) -> Result<usize, BufferError> {
    let mut written = 0;
    while written < bytes.len() {
        match writer.write(&bytes[written..]) {
            Ok(0) => {
                warn!(
                    "short write to {}: {written} of {} bytes",
                    path.display(),
                    bytes.len()
                );
                return Err(std::io::Error::from(ErrorKind::WriteZero).into());
            }
            Ok(n) => written += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => {
                warn!("write to {} failed: {err}", path.display());
                return Err(err.into());
            }
        }
    }
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, ErrorKind, Read, Write},
        path::Path,
    };

    use super::{read_chunks, write_content};
    use crate::{BufferError, BufferOptions, StrBuf, WriteMode};

    /// Accepts `limit` bytes, then refuses everything with `Ok(0)`.
    struct StalledWriter {
        accepted: std::vec::Vec<u8>,
        limit: usize,
    }

    impl Write for StalledWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.accepted.len();
            let n = room.min(data.len());
            self.accepted.extend_from_slice(&data[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Hands out `data` in one piece, is interrupted once, then fails.
    struct FailingReader {
        data: &'static [u8],
        interrupted: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            if !self.data.is_empty() {
                let n = self.data.len().min(out.len());
                out[..n].copy_from_slice(&self.data[..n]);
                self.data = &self.data[n..];
                return Ok(n);
            }
            if !self.interrupted {
                self.interrupted = true;
                return Err(ErrorKind::Interrupted.into());
            }
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.txt");
        StrBuf::from("payload")
            .write_file(&path, WriteMode::Truncate)
            .unwrap();
        let read = StrBuf::read_file(&path).unwrap();
        assert_eq!(read, "payload");
        assert_eq!(std::fs::read(&path).unwrap(), b"payload");
    }

    #[test]
    fn append_mode_extends_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        StrBuf::from("one\n").write_file(&path, WriteMode::Append).unwrap();
        StrBuf::from("two\n").write_file(&path, WriteMode::Append).unwrap();
        assert_eq!(StrBuf::read_file(&path).unwrap(), "one\ntwo\n");

        StrBuf::from("reset").write_file(&path, WriteMode::Truncate).unwrap();
        assert_eq!(StrBuf::read_file(&path).unwrap(), "reset");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StrBuf::read_file(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, BufferError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn open_failure_on_write_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StrBuf::from("x")
            .write_file(dir.path().join("no/such/dir"), WriteMode::Truncate)
            .unwrap_err();
        assert!(matches!(err, BufferError::Io(_)));
    }

    #[test]
    fn small_chunks_still_read_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        let content: std::vec::Vec<u8> = (0..=255u8).cycle().take(5000).collect();
        std::fs::write(&path, &content).unwrap();

        let options = BufferOptions {
            read_chunk_size: 7,
            ..Default::default()
        };
        let buf = StrBuf::read_file_with_options(&path, options).unwrap();
        assert_eq!(buf.as_bytes(), content.as_slice());
        assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));
    }

    #[test]
    fn empty_file_gives_empty_buffer() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let buf = StrBuf::read_file(file.path()).unwrap();
        assert!(buf.is_empty());
        assert!(!buf.is_released());
    }

    #[test]
    fn writer_that_stops_accepting_is_write_zero() {
        let mut writer = StalledWriter {
            accepted: std::vec::Vec::new(),
            limit: 3,
        };
        let err = write_content(&mut writer, b"truncated", Path::new("stalled")).unwrap_err();
        assert!(matches!(err, BufferError::Io(ref e) if e.kind() == ErrorKind::WriteZero));
        assert_eq!(writer.accepted, b"tru");
    }

    #[test]
    fn writer_with_room_takes_everything() {
        let mut writer = StalledWriter {
            accepted: std::vec::Vec::new(),
            limit: 64,
        };
        let written = write_content(&mut writer, b"all of it", Path::new("roomy")).unwrap();
        assert_eq!(written, 9);
        assert_eq!(writer.accepted, b"all of it");
    }

    #[test]
    fn read_error_mid_stream_is_io_error() {
        let mut reader = FailingReader {
            data: b"partial",
            interrupted: false,
        };
        let err =
            read_chunks(&mut reader, BufferOptions::default(), Path::new("flaky")).unwrap_err();
        assert!(matches!(err, BufferError::Io(ref e) if e.kind() == ErrorKind::Other));
        assert!(reader.interrupted);
    }
}
