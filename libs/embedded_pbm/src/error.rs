use core::fmt;

/// Header level problems. These are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer than the three required content lines in a `P1` file.
    MissingLines,
    BadMagic,
    BadDimensions,
    /// Declared `width * height` exceeds [`crate::MAX_PIXELS`].
    TooLarge,
    /// The `P4` header ran out before its terminating linefeed.
    NoNewline,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingLines => f.write_str("invalid PBM file format"),
            FormatError::BadMagic => f.write_str("unexpected magic number"),
            FormatError::BadDimensions => f.write_str("malformed dimension line"),
            FormatError::TooLarge => f.write_str("image too large"),
            FormatError::NoNewline => f.write_str("no newline found"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PbmError {
    IoError(embedded_io::ErrorKind),
    Utf8Error(core::str::Utf8Error),
    Format(FormatError),
}

impl PbmError {
    pub fn from_io_error(error: impl embedded_io::Error) -> Self {
        PbmError::IoError(error.kind())
    }
}

impl From<FormatError> for PbmError {
    fn from(err: FormatError) -> Self {
        PbmError::Format(err)
    }
}

impl From<core::str::Utf8Error> for PbmError {
    fn from(err: core::str::Utf8Error) -> Self {
        PbmError::Utf8Error(err)
    }
}

impl fmt::Display for PbmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PbmError::IoError(kind) => write!(f, "i/o error: {:?}", kind),
            PbmError::Utf8Error(err) => write!(f, "not text: {}", err),
            PbmError::Format(err) => write!(f, "invalid PBM file: {}", err),
        }
    }
}

impl embedded_io::Error for PbmError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            PbmError::IoError(kind) => *kind,
            PbmError::Utf8Error(_) | PbmError::Format(_) => embedded_io::ErrorKind::InvalidData,
        }
    }
}
