use alloc::string::String;

/// Errors from BMP encoding and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The sink or source failed for a reason other than running out of bytes.
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid BMP header: {field} is {actual}, expected {expected}")]
    InvalidHeader {
        field: &'static str,
        expected: i64,
        actual: i64,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

/// Coarse classification of a [`BmpError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bytes could not be read from the source or written to the sink.
    Io,
    /// Bytes were available but do not describe a supported BMP file.
    Format,
}

impl BmpError {
    pub(crate) fn invalid(field: &'static str, expected: i64, actual: i64) -> Self {
        BmpError::InvalidHeader {
            field,
            expected,
            actual,
        }
    }

    /// Which of the two failure kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "std")]
            BmpError::Io(_) => ErrorKind::Io,
            BmpError::UnexpectedEof => ErrorKind::Io,
            BmpError::InvalidHeader { .. }
            | BmpError::DimensionsTooLarge { .. }
            | BmpError::LimitExceeded(_) => ErrorKind::Format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(BmpError::UnexpectedEof.kind(), ErrorKind::Io);
        assert_eq!(BmpError::invalid("planes", 1, 2).kind(), ErrorKind::Format);
        assert_eq!(
            BmpError::DimensionsTooLarge {
                width: 1,
                height: 1
            }
            .kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn invalid_header_message_names_field() {
        let msg = alloc::format!("{}", BmpError::invalid("bits per pixel", 24, 32));
        assert_eq!(msg, "invalid BMP header: bits per pixel is 32, expected 24");
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_error_converts() {
        let err: BmpError = std::io::Error::other("disk full").into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
