//! Byte sinks and sources the codec reads and writes through.
//!
//! The encoder and decoder only ever need "write these bytes" and "fill this
//! buffer completely", so both directions are one-method traits with an
//! in-memory implementation and, with `std`, an adapter over `Read`/`Write`.

use alloc::vec::Vec;

use crate::error::BmpError;

/// Destination for encoded bytes.
pub(crate) trait Sink {
    fn put(&mut self, bytes: &[u8]) -> Result<(), BmpError>;
}

impl Sink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) -> Result<(), BmpError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Origin of bytes to decode.
pub(crate) trait Source {
    /// Fill `buf` entirely or fail with [`BmpError::UnexpectedEof`].
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), BmpError>;

    /// Bytes left, when known up front.
    fn remaining(&self) -> Option<usize> {
        None
    }
}

/// Cursor over an in-memory byte slice.
pub(crate) struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl Source for SliceSource<'_> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        let end = self
            .pos
            .checked_add(buf.len())
            .ok_or(BmpError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BmpError::UnexpectedEof)?;
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.data.len() - self.pos)
    }
}

#[cfg(feature = "std")]
pub(crate) struct WriteSink<W>(pub(crate) W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for WriteSink<W> {
    fn put(&mut self, bytes: &[u8]) -> Result<(), BmpError> {
        self.0.write_all(bytes)?;
        Ok(())
    }
}

#[cfg(feature = "std")]
pub(crate) struct ReadSource<R>(pub(crate) R);

#[cfg(feature = "std")]
impl<R: std::io::Read> Source for ReadSource<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        self.0.read_exact(buf).map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => BmpError::UnexpectedEof,
            _ => BmpError::Io(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_reads_in_order() {
        let mut src = SliceSource::new(&[1, 2, 3, 4, 5]);
        let mut a = [0u8; 2];
        let mut b = [0u8; 3];
        src.fill(&mut a).unwrap();
        src.fill(&mut b).unwrap();
        assert_eq!(a, [1, 2]);
        assert_eq!(b, [3, 4, 5]);
        assert_eq!(src.remaining(), Some(0));
        assert!(matches!(src.fill(&mut [0u8; 1]), Err(BmpError::UnexpectedEof)));
    }

    #[test]
    fn slice_source_short_read() {
        let mut src = SliceSource::new(&[1, 2]);
        assert!(matches!(src.fill(&mut [0u8; 3]), Err(BmpError::UnexpectedEof)));
    }

    #[test]
    fn empty_fill_always_succeeds() {
        let mut src = SliceSource::new(&[]);
        assert!(src.fill(&mut []).is_ok());
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_source_maps_eof() {
        let mut src = ReadSource(&[1u8, 2][..]);
        assert!(matches!(src.fill(&mut [0u8; 3]), Err(BmpError::UnexpectedEof)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn write_sink_propagates_errors() {
        struct Full;
        impl std::io::Write for Full {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let mut sink = WriteSink(Full);
        assert!(matches!(sink.put(&[1]), Err(BmpError::Io(_))));
    }
}
