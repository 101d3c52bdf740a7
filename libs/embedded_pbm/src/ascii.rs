use alloc::vec::Vec;

use crate::{FormatError, PixelGrid, Result, parse_dimensions};

const MAGIC: &str = "P1";

/// Parses a plain (`P1`) bitmap.
///
/// Blank lines and `#` comment lines are dropped before anything else is
/// looked at. Every `0` or `1` after the dimension line is a pixel; all other
/// characters are ignored.
pub fn parse_ascii(data: &[u8]) -> Result<PixelGrid> {
    let text = core::str::from_utf8(data)?;
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if lines.len() < 3 {
        return Err(FormatError::MissingLines.into());
    }
    if !lines[0].starts_with(MAGIC) {
        debug!("Not a plain PBM file - magic number is {}", lines[0]);
        return Err(FormatError::BadMagic.into());
    }

    let (width, height) = parse_dimensions(lines[1])?;
    debug!("PBM dimensions: {}x{}", width, height);

    let pixels: Vec<u8> = lines[2..]
        .iter()
        .flat_map(|line| line.bytes())
        .filter_map(|c| match c {
            b'0' => Some(0),
            b'1' => Some(1),
            _ => None,
        })
        .collect();

    let expected = width as usize * height as usize;
    if pixels.len() < expected {
        debug!("Padding {} missing pixels", expected - pixels.len());
    }

    Ok(PixelGrid::from_flat(width, height, &pixels))
}
