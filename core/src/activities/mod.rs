use core::time::Duration;

use embedded_graphics::{
    Drawable,
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::{Point, Primitive},
    primitives::{Line, PrimitiveStyle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::{emoji::Emoji, framebuffer::DisplayBuffers, input::ButtonState, radio::ReceivedEmoji};

pub mod menu;
pub mod received;
pub mod selected;

/// Screens that can be pushed on top of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityType {
    Selected(Emoji),
    Received(ReceivedEmoji),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    None,
    Redraw,
    PopActivity,
    PushActivity(ActivityType),
}

pub struct ApplicationState {
    pub input: ButtonState,
    /// Time since boot.
    pub now: Duration,
}

pub trait Activity {
    fn start(&mut self);
    fn update(&mut self, state: &ApplicationState) -> UpdateResult;
    /// Renders the whole screen into the active buffer.
    fn draw(&mut self, buffers: &mut DisplayBuffers);
    /// Transient screens are replaced, not stacked, by the next transient one.
    fn is_transient(&self) -> bool {
        false
    }
}

fn text(
    buffers: &mut DisplayBuffers,
    text: &str,
    position: Point,
    font: &'static MonoFont<'static>,
    alignment: Alignment,
) {
    let character_style = MonoTextStyle::new(font, BinaryColor::Off);
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(text, position, character_style, text_style)
        .draw(buffers)
        .ok();
}

/// Horizontal rule covering `x` in `[from, to)`.
fn hline(buffers: &mut DisplayBuffers, y: i32, from: i32, to: i32) {
    Line::new(Point::new(from, y), Point::new(to - 1, y))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::Off, 1))
        .draw(buffers)
        .ok();
}
