use embedded_io::{ErrorKind, ErrorType, Read};

/// A file opened for reading.
pub trait File: ErrorType + Read {
    fn size(&self) -> usize;
}

/// Read-only view of the badge storage, paths are relative to its root.
pub trait Filesystem {
    type File: File;

    fn open_file(&self, path: &str) -> Result<Self::File, ErrorKind>;
}
