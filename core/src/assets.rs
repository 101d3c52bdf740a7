use alloc::vec::Vec;
use embedded_pbm::{PbmError, PixelGrid};
use log::{error, info};

use crate::{
    config::Config,
    fs::{File, Filesystem},
};

pub type Path = heapless::String<128>;

/// `apps/<app name>/assets/<file>`, `None` if it does not fit a [`Path`].
pub fn asset_path(config: &Config, file: &str) -> Option<Path> {
    heapless::format!("apps/{}/assets/{}", config.app_name, file).ok()
}

fn read_asset<Fs: Filesystem>(filesystem: &Fs, path: &str) -> embedded_pbm::Result<Vec<u8>> {
    let mut file = filesystem
        .open_file(path)
        .map_err(PbmError::IoError)?;
    let size = file.size();
    embedded_pbm::read_to_end(&mut file, size)
}

/// Loads and decodes a bitmap asset.
///
/// The file is read as plain text first; when that fails for any reason it
/// is read again and parsed as a raw bitmap. `None` means neither worked, the
/// reason has been logged.
pub fn load_pbm<Fs: Filesystem>(filesystem: &Fs, config: &Config, file: &str) -> Option<PixelGrid> {
    let Some(path) = asset_path(config, file) else {
        error!("Asset path too long for {}", file);
        return None;
    };
    info!("Opening PBM file at: {}", path);

    let text = read_asset(filesystem, &path).and_then(|data| embedded_pbm::parse_ascii(&data));
    let err = match text {
        Ok(grid) => {
            info!("Decoded {} as plain PBM", path);
            return Some(grid);
        }
        Err(err) => err,
    };

    info!("Text reading failed ({}), trying binary format for: {}", err, path);
    match read_asset(filesystem, &path).and_then(|data| embedded_pbm::parse_binary(&data)) {
        Ok(grid) => Some(grid),
        Err(err) => {
            error!("Error parsing PBM file {}: {}", file, err);
            None
        }
    }
}
