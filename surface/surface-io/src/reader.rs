//! Byte-level reading helpers for the big-endian surface formats.

use std::io::{BufRead, ErrorKind};

use crate::{IoError, IoResult};

/// A position-tracking wrapper over a buffered reader.
///
/// All multi-byte reads decode big-endian. The tracked position names
/// the start of the field a failed read was attempting, which is what
/// ends up in [`IoError::UnexpectedEof`].
pub(crate) struct ByteReader<R> {
    inner: R,
    position: u64,
}

impl<R: BufRead> ByteReader<R> {
    pub(crate) const fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    pub(crate) fn read_exact(&mut self, buf: &mut [u8]) -> IoResult<()> {
        self.inner.read_exact(buf).map_err(|error| {
            if error.kind() == ErrorKind::UnexpectedEof {
                IoError::UnexpectedEof {
                    position: self.position,
                }
            } else {
                IoError::Io(error)
            }
        })?;
        self.position += buf.len() as u64;
        Ok(())
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut bytes = [0_u8; N];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    pub(crate) fn read_u32(&mut self) -> IoResult<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub(crate) fn read_i32(&mut self) -> IoResult<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub(crate) fn read_u64(&mut self) -> IoResult<u64> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    pub(crate) fn read_f32(&mut self) -> IoResult<f32> {
        Ok(f32::from_be_bytes(self.read_array()?))
    }

    /// Read a `u32`, or `None` when the stream ends exactly before it.
    ///
    /// An end inside the four bytes is an error.
    pub(crate) fn read_u32_or_eof(&mut self) -> IoResult<Option<u32>> {
        let mut bytes = [0_u8; 4];
        let mut filled = 0;
        while filled < bytes.len() {
            let read = self.inner.read(&mut bytes[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
            self.position += read as u64;
        }
        match filled {
            0 => Ok(None),
            4 => Ok(Some(u32::from_be_bytes(bytes))),
            _ => Err(IoError::UnexpectedEof {
                position: self.position,
            }),
        }
    }

    /// Whether the underlying stream has no bytes left.
    pub(crate) fn at_eof(&mut self) -> IoResult<bool> {
        Ok(self.inner.fill_buf()?.is_empty())
    }

    /// Read one line including its `\n` terminator.
    pub(crate) fn read_line_raw(&mut self) -> IoResult<Vec<u8>> {
        let mut bytes = Vec::new();
        let read = self.inner.read_until(b'\n', &mut bytes)?;
        self.position += read as u64;
        if bytes.last() == Some(&b'\n') {
            Ok(bytes)
        } else {
            Err(IoError::UnexpectedEof {
                position: self.position,
            })
        }
    }

    /// Read one line without its `\n` terminator.
    pub(crate) fn read_line_bytes(&mut self) -> IoResult<Vec<u8>> {
        let mut bytes = self.read_line_raw()?;
        bytes.pop();
        Ok(bytes)
    }

    /// Read a length-prefixed string field whose last byte is NUL,
    /// returning the bytes before the terminator.
    pub(crate) fn read_nul_terminated(&mut self, length: u64) -> IoResult<Vec<u8>> {
        if length == 0 {
            return Err(IoError::invalid_content("zero-length string field"));
        }
        let length = usize::try_from(length)
            .map_err(|_| IoError::invalid_content("string field length out of range"))?;
        let mut bytes = vec![0_u8; length];
        self.read_exact(&mut bytes)?;
        match bytes.pop() {
            Some(0) => Ok(bytes),
            _ => Err(IoError::invalid_content(
                "string field missing its NUL terminator",
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_integers() {
        let bytes = [0x00, 0x00, 0x01, 0x02, 0xff, 0xff, 0xff, 0xfe];
        let mut reader = ByteReader::new(&bytes[..]);
        assert_eq!(reader.read_u32().unwrap(), 258);
        assert_eq!(reader.read_i32().unwrap(), -2);
    }

    #[test]
    fn optional_u32_distinguishes_clean_and_truncated_ends() {
        let mut reader = ByteReader::new(&[][..]);
        assert!(reader.read_u32_or_eof().unwrap().is_none());

        let mut reader = ByteReader::new(&[0x00, 0x00][..]);
        assert!(matches!(
            reader.read_u32_or_eof(),
            Err(IoError::UnexpectedEof { position: 2 })
        ));
    }

    #[test]
    fn eof_error_names_the_field_start() {
        let mut reader = ByteReader::new(&[0x01, 0x02, 0x03, 0x04, 0x05][..]);
        reader.read_u32().unwrap();
        assert!(matches!(
            reader.read_u32(),
            Err(IoError::UnexpectedEof { position: 4 })
        ));
    }

    #[test]
    fn line_reads_stop_at_newline() {
        let mut reader = ByteReader::new(&b"first\nsecond\n"[..]);
        assert_eq!(reader.read_line_bytes().unwrap(), b"first");
        assert_eq!(reader.read_line_raw().unwrap(), b"second\n");
    }

    #[test]
    fn unterminated_line_is_an_error() {
        let mut reader = ByteReader::new(&b"no newline"[..]);
        assert!(matches!(
            reader.read_line_bytes(),
            Err(IoError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn nul_terminated_field_drops_the_terminator() {
        let mut reader = ByteReader::new(&b"path\0"[..]);
        assert_eq!(reader.read_nul_terminated(5).unwrap(), b"path");
    }

    #[test]
    fn nul_terminated_field_requires_the_terminator() {
        let mut reader = ByteReader::new(&b"path!"[..]);
        assert!(matches!(
            reader.read_nul_terminated(5),
            Err(IoError::InvalidContent { .. })
        ));
    }
}
