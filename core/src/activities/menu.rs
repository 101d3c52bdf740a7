use alloc::{format, string::String};

use embedded_graphics::{
    mono_font::ascii::{FONT_9X15, FONT_10X20},
    prelude::Point,
    text::Alignment,
};
use strum::IntoEnumIterator;

use super::{ActivityType, UpdateResult, hline, text};
use crate::{
    emoji::Emoji,
    framebuffer::{DisplayBuffers, WIDTH},
};

const FIRST_ROW: i32 = 40;
const ROW_HEIGHT: i32 = 19;
/// Separators are only drawn above this line.
const SEPARATOR_LIMIT: i32 = 185;

/// Lists every emoji next to the button that sends it.
pub struct MenuActivity {
    title: String,
}

impl MenuActivity {
    pub fn new(title: &str) -> Self {
        Self { title: String::from(title) }
    }
}

impl super::Activity for MenuActivity {
    fn start(&mut self) {
        log::info!("MenuActivity started");
    }

    fn update(&mut self, state: &super::ApplicationState) -> UpdateResult {
        match Emoji::iter().find(|emoji| state.input.is_pressed(emoji.button())) {
            Some(emoji) => UpdateResult::PushActivity(ActivityType::Selected(emoji)),
            None => UpdateResult::None,
        }
    }

    fn draw(&mut self, buffers: &mut DisplayBuffers) {
        buffers.clear_screen(0xFF);
        let width = WIDTH as i32;

        text(buffers, &self.title, Point::new(50, 5), &FONT_10X20, Alignment::Left);
        hline(buffers, 30, 0, width);

        let mut y = FIRST_ROW;
        for emoji in Emoji::iter() {
            text(buffers, emoji.label(), Point::new(10, y), &FONT_9X15, Alignment::Left);
            let button = format!("[{}]", emoji.button().label());
            text(buffers, &button, Point::new(width - 10, y), &FONT_9X15, Alignment::Right);

            y += ROW_HEIGHT;
            if y < SEPARATOR_LIMIT {
                hline(buffers, y - 2, 0, width);
            }
        }
    }
}
