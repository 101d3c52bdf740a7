use std::{fs, io::Seek, path::PathBuf};

use embedded_io::ErrorKind;
use log::{info, warn};

/// Serves badge paths from a directory on the host, like the badge's SD card.
pub struct StdFilesystem {
    base_path: PathBuf,
}

impl StdFilesystem {
    pub fn new_with_base_path(base_path: PathBuf) -> Self {
        info!("Using StdFilesystem with base path: {:?}", base_path);
        StdFilesystem { base_path }
    }
}

impl badge_core::fs::Filesystem for StdFilesystem {
    type File = StdFileReader;

    fn open_file(&self, path: &str) -> Result<StdFileReader, ErrorKind> {
        let path = self.base_path.join(path);
        let file = fs::File::open(&path).map_err(|err| {
            warn!("Failed to open {:?}: {}", path, err);
            ErrorKind::NotFound
        })?;
        StdFileReader::new(file).map_err(|_| ErrorKind::InvalidInput)
    }
}

pub struct StdFileReader {
    file: std::io::BufReader<fs::File>,
    size: usize,
}

impl StdFileReader {
    pub fn new(mut file: fs::File) -> std::io::Result<Self> {
        let size = file.seek(std::io::SeekFrom::End(0))? as usize;
        file.seek(std::io::SeekFrom::Start(0))?;
        Ok(StdFileReader {
            file: std::io::BufReader::new(file),
            size,
        })
    }
}

impl badge_core::fs::File for StdFileReader {
    fn size(&self) -> usize {
        self.size
    }
}

impl embedded_io::ErrorType for StdFileReader {
    type Error = std::io::Error;
}

impl embedded_io::Read for StdFileReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        use std::io::Read;
        self.file.read(buf)
    }
}
