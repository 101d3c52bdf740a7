use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};

pub const WIDTH: usize = 200;
pub const HEIGHT: usize = 200;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

/// Double buffered 1bpp frame, MSB first.
/// A set bit (`BinaryColor::On`) is paper, a cleared bit is ink.
pub struct DisplayBuffers {
    framebuffer: [[u8; BUFFER_SIZE]; 2],
    active: bool,
}

impl Default for DisplayBuffers {
    fn default() -> Self {
        // Clear screen to white
        Self {
            framebuffer: [[0xFF; BUFFER_SIZE]; 2],
            active: false,
        }
    }
}

impl DisplayBuffers {
    pub fn get_active_buffer_mut(&mut self) -> &mut [u8; BUFFER_SIZE] {
        if self.active {
            &mut self.framebuffer[1]
        } else {
            &mut self.framebuffer[0]
        }
    }

    pub fn get_active_buffer(&self) -> &[u8; BUFFER_SIZE] {
        if self.active {
            &self.framebuffer[1]
        } else {
            &self.framebuffer[0]
        }
    }

    pub fn get_inactive_buffer(&self) -> &[u8; BUFFER_SIZE] {
        if self.active {
            &self.framebuffer[0]
        } else {
            &self.framebuffer[1]
        }
    }

    pub fn clear_screen(&mut self, color: u8) {
        self.get_active_buffer_mut().fill(color);
    }

    pub fn swap_buffers(&mut self) {
        self.active = !self.active;
    }

    fn index(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return None;
        }
        let index = y as usize * WIDTH + x as usize;
        Some((index / 8, 7 - (index % 8) as u8))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        let Some((byte_index, bit_index)) = Self::index(x, y) else {
            return;
        };
        match color {
            BinaryColor::On => {
                self.get_active_buffer_mut()[byte_index] |= 1 << bit_index;
            }
            BinaryColor::Off => {
                self.get_active_buffer_mut()[byte_index] &= !(1 << bit_index);
            }
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<BinaryColor> {
        let (byte_index, bit_index) = Self::index(x, y)?;
        let bit = (self.get_active_buffer()[byte_index] >> bit_index) & 1;
        Some(BinaryColor::from(bit == 1))
    }
}

impl OriginDimensions for DisplayBuffers {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for DisplayBuffers {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}
