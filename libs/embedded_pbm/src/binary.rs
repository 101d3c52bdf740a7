use alloc::vec::Vec;

use crate::{FormatError, PixelGrid, Result, parse_dimensions};

const MAGIC: &[u8] = b"P4";

/// Splits the two header lines off a raw bitmap.
/// Returns them together with the offset of the first pixel byte.
fn split_header(data: &[u8]) -> Result<([&[u8]; 2], usize)> {
    let mut header: [&[u8]; 2] = [&[], &[]];
    let mut found = 0;
    let mut idx = 0;
    while found < header.len() {
        let eol = memchr::memchr(b'\n', &data[idx..])
            .map(|pos| idx + pos)
            .ok_or(FormatError::NoNewline)?;
        let line = data[idx..eol].trim_ascii();
        idx = eol + 1;
        if !line.is_empty() && !line.starts_with(b"#") {
            header[found] = line;
            found += 1;
        }
    }
    Ok((header, idx))
}

/// Parses a raw (`P4`) bitmap.
///
/// Pixel rows are packed MSB first and padded to whole bytes. Rows missing
/// from truncated data come out as paper.
pub fn parse_binary(data: &[u8]) -> Result<PixelGrid> {
    let ([magic, dimensions], offset) = split_header(data)?;
    if magic != MAGIC {
        return Err(FormatError::BadMagic.into());
    }

    let dimensions = core::str::from_utf8(dimensions).map_err(|_| FormatError::BadDimensions)?;
    let (width, height) = parse_dimensions(dimensions)?;
    debug!("Raw PBM dimensions: {}x{}", width, height);

    let pixels = &data[offset..];
    let width = width as usize;
    let row_bytes = width.div_ceil(8);

    let rows = (0..height as usize)
        .map(|y| {
            let start = (y * row_bytes).min(pixels.len());
            let end = (start + row_bytes).min(pixels.len());
            let mut row: Vec<u8> = pixels[start..end]
                .iter()
                .flat_map(|byte| (0..8).rev().map(move |bit| (byte >> bit) & 1))
                .take(width)
                .collect();
            row.resize(width, 0);
            row
        })
        .collect();

    Ok(PixelGrid::from_rows(width as u32, height, rows))
}
