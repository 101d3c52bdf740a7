use alloc::format;
use embedded_graphics::{
    mono_font::ascii::{FONT_9X15, FONT_10X20},
    prelude::{Point, Size},
    primitives::Rectangle,
    text::Alignment,
};
use embedded_pbm::PixelGrid;

use super::{UpdateResult, hline, text};
use crate::{
    blit,
    emoji::Emoji,
    framebuffer::{DisplayBuffers, WIDTH},
    input::Buttons,
};

const EMOJI_AREA: Rectangle = Rectangle::new(Point::new(0, 27), Size::new(WIDTH as u32, 148));
const ERROR_NOTICE: Point = Point::new(10, 70);

/// Full screen view of the emoji that was just sent.
pub struct SelectedActivity {
    emoji: Emoji,
    image: Option<PixelGrid>,
}

impl SelectedActivity {
    pub fn new(emoji: Emoji, image: Option<PixelGrid>) -> Self {
        Self { emoji, image }
    }
}

impl super::Activity for SelectedActivity {
    fn start(&mut self) {
        log::info!("SelectedActivity started for {}", self.emoji.key());
    }

    fn update(&mut self, state: &super::ApplicationState) -> UpdateResult {
        if state.input.is_pressed(Buttons::BACK) {
            UpdateResult::PopActivity
        } else {
            UpdateResult::None
        }
    }

    fn draw(&mut self, buffers: &mut DisplayBuffers) {
        buffers.clear_screen(0xFF);
        let width = WIDTH as i32;

        // The image may overlap the header rule, which is drawn on top.
        blit::render_or_placeholder(self.image.as_ref(), &EMOJI_AREA, ERROR_NOTICE, buffers);

        text(buffers, self.emoji.label(), Point::new(10, 2), &FONT_10X20, Alignment::Left);
        hline(buffers, 32, 0, width);

        hline(buffers, 175, 0, width);
        text(buffers, "Go Back", Point::new(10, 182), &FONT_9X15, Alignment::Left);
        let back = format!("[{}]", Buttons::BACK.label());
        text(buffers, &back, Point::new(width - 10, 182), &FONT_9X15, Alignment::Right);
    }
}
