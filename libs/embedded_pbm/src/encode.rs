use alloc::{format, vec, vec::Vec};
use embedded_io::Write;

use crate::{PbmError, PixelGrid, Result};

// Netpbm asks for plain lines of at most 70 characters.
const P1_LINE_LEN: usize = 70;

fn write_header<W: Write>(out: &mut W, magic: &str, grid: &PixelGrid) -> Result<()> {
    let header = format!("{}\n{} {}\n", magic, grid.width(), grid.height());
    out.write_all(header.as_bytes())
        .map_err(PbmError::from_io_error)
}

/// Writes `grid` as a plain (`P1`) bitmap.
pub fn write_p1<W: Write>(out: &mut W, grid: &PixelGrid) -> Result<()> {
    write_header(out, "P1", grid)?;
    let mut line = Vec::with_capacity(P1_LINE_LEN + 1);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            line.push(if grid.get(x, y) == Some(1) { b'1' } else { b'0' });
            if line.len() == P1_LINE_LEN {
                line.push(b'\n');
                out.write_all(&line).map_err(PbmError::from_io_error)?;
                line.clear();
            }
        }
        if !line.is_empty() {
            line.push(b'\n');
            out.write_all(&line).map_err(PbmError::from_io_error)?;
            line.clear();
        }
    }
    out.flush().map_err(PbmError::from_io_error)
}

/// Writes `grid` as a raw (`P4`) bitmap.
pub fn write_p4<W: Write>(out: &mut W, grid: &PixelGrid) -> Result<()> {
    write_header(out, "P4", grid)?;
    let mut row = vec![0u8; (grid.width() as usize).div_ceil(8)];
    for y in 0..grid.height() {
        row.fill(0);
        for x in 0..grid.width() {
            if grid.get(x, y) == Some(1) {
                row[x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
        out.write_all(&row).map_err(PbmError::from_io_error)?;
    }
    out.flush().map_err(PbmError::from_io_error)
}
