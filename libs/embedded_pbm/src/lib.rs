/*!
A no_std portable bitmap reader and writer using embedded-io.

## Features
- no_std, requires alloc
- plain (`P1`) and raw (`P4`) sub-formats
- lenient decoding: short `P1` pixel data is zero padded, excess is dropped

## Usage
```
# use embedded_pbm as pbm;
# fn main() -> Result<(), pbm::PbmError> {
let data = b"P1\n# a tiny arrow\n3 2\n010\n111\n";
let grid = pbm::decode(data)?;
assert_eq!((grid.width(), grid.height()), (3, 2));
assert_eq!(grid.get(1, 0), Some(1));
# Ok(())
# }
```

## Limitations & non-goals
- no `P2`/`P3`/`P5`/`P6`
- only one image per file
- header tokens have to be on their own lines
*/

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    };
}

mod ascii;
mod binary;
mod encode;
mod error;
mod grid;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

pub use ascii::parse_ascii;
pub use binary::parse_binary;
pub use encode::{write_p1, write_p4};
pub use error::{FormatError, PbmError};
pub use grid::PixelGrid;

pub type Result<T> = core::result::Result<T, PbmError>;

/// Upper bound on `width * height` accepted from a header.
pub const MAX_PIXELS: usize = 4 * 1024 * 1024;

/// Decodes an in-memory bitmap.
///
/// The data is tried as plain text (`P1`) first. Any failure of that attempt
/// falls back to the raw (`P4`) parser, whose error is returned if it fails
/// as well.
pub fn decode(data: &[u8]) -> Result<PixelGrid> {
    match parse_ascii(data) {
        Ok(grid) => Ok(grid),
        Err(err) => {
            debug!("Text decoding failed ({}), trying raw format", err);
            parse_binary(data)
        }
    }
}

/// Reads everything from `reader` into a fresh buffer.
pub fn read_to_end<R: embedded_io::Read>(reader: &mut R, size_hint: usize) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(size_hint);
    let mut chunk = [0u8; 256];
    loop {
        let read = reader.read(&mut chunk).map_err(PbmError::from_io_error)?;
        if read == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..read]);
    }
    Ok(data)
}

pub(crate) fn parse_dimensions(line: &str) -> core::result::Result<(u32, u32), FormatError> {
    let mut parts = line.split_whitespace();
    let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FormatError::BadDimensions);
    };
    let width: u32 = width.parse().map_err(|_| FormatError::BadDimensions)?;
    let height: u32 = height.parse().map_err(|_| FormatError::BadDimensions)?;
    if width == 0 || height == 0 {
        return Err(FormatError::BadDimensions);
    }
    match (width as usize).checked_mul(height as usize) {
        Some(pixels) if pixels <= MAX_PIXELS => Ok((width, height)),
        _ => Err(FormatError::TooLarge),
    }
}
