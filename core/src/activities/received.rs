use alloc::format;
use core::time::Duration;

use embedded_graphics::{
    mono_font::ascii::{FONT_6X10, FONT_9X15, FONT_10X20},
    prelude::{Point, Size},
    primitives::Rectangle,
    text::Alignment,
};
use embedded_pbm::PixelGrid;

use super::{UpdateResult, hline, text};
use crate::{
    blit,
    framebuffer::{DisplayBuffers, WIDTH},
    input::Buttons,
    radio::ReceivedEmoji,
};

const EMOJI_AREA: Rectangle = Rectangle::new(Point::new(0, 80), Size::new(WIDTH as u32, 90));
const ERROR_NOTICE: Point = Point::new(60, 100);

/// An emoji sent by another badge. Closes itself after a while.
pub struct ReceivedActivity {
    received: ReceivedEmoji,
    image: Option<PixelGrid>,
    shown_at: Duration,
    auto_dismiss: Duration,
}

impl ReceivedActivity {
    pub fn new(
        received: ReceivedEmoji,
        image: Option<PixelGrid>,
        shown_at: Duration,
        auto_dismiss: Duration,
    ) -> Self {
        Self { received, image, shown_at, auto_dismiss }
    }
}

impl super::Activity for ReceivedActivity {
    fn start(&mut self) {
        log::info!(
            "ReceivedActivity started for '{}' from {}",
            self.received.emoji,
            self.received.sender
        );
    }

    fn update(&mut self, state: &super::ApplicationState) -> UpdateResult {
        if state.input.is_pressed(Buttons::BACK) {
            UpdateResult::PopActivity
        } else if state.now.saturating_sub(self.shown_at) >= self.auto_dismiss {
            log::info!("Auto-closing received emoji from {}", self.received.sender);
            UpdateResult::PopActivity
        } else {
            UpdateResult::None
        }
    }

    fn draw(&mut self, buffers: &mut DisplayBuffers) {
        buffers.clear_screen(0xFF);
        let width = WIDTH as i32;
        let center = width / 2;

        let says = format!("{} says", self.received.display_sender());
        text(buffers, &says, Point::new(center, 15), &FONT_10X20, Alignment::Center);
        hline(buffers, 45, 20, width - 20);

        match self.received.known_emoji() {
            Some(emoji) => {
                text(buffers, emoji.label(), Point::new(center, 55), &FONT_9X15, Alignment::Center);
                blit::render_or_placeholder(self.image.as_ref(), &EMOJI_AREA, ERROR_NOTICE, buffers);
            }
            None => text(buffers, "Unknown Emoji", Point::new(60, 80), &FONT_9X15, Alignment::Left),
        }

        hline(buffers, 175, 0, width);
        let back = format!("Back [{}]", Buttons::BACK.label());
        text(buffers, &back, Point::new(10, 182), &FONT_6X10, Alignment::Left);
        let countdown = format!("Auto-close {}s", self.auto_dismiss.as_secs());
        text(buffers, &countdown, Point::new(width - 10, 182), &FONT_6X10, Alignment::Right);
    }

    fn is_transient(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        activities::{Activity, ApplicationState},
        input::ButtonState,
    };
    use alloc::string::String;
    use embedded_graphics::pixelcolor::BinaryColor;

    fn received(emoji: &str) -> ReceivedEmoji {
        ReceivedEmoji {
            emoji: String::from(emoji),
            sender: String::from("ferris"),
            badge_id: 0x0042,
        }
    }

    fn at(secs: u64, buttons: u16) -> ApplicationState {
        let mut input = ButtonState::default();
        input.update(buttons);
        ApplicationState { input, now: Duration::from_secs(secs) }
    }

    #[test]
    fn test_auto_dismiss() {
        let mut activity =
            ReceivedActivity::new(received("heart"), None, Duration::from_secs(100), Duration::from_secs(25));
        assert_eq!(activity.update(&at(100, 0)), UpdateResult::None);
        assert_eq!(activity.update(&at(124, 0)), UpdateResult::None);
        assert_eq!(activity.update(&at(125, 0)), UpdateResult::PopActivity);
    }

    #[test]
    fn test_back_closes_early() {
        let mut activity =
            ReceivedActivity::new(received("heart"), None, Duration::ZERO, Duration::from_secs(25));
        assert_eq!(activity.update(&at(1, Buttons::BACK.mask())), UpdateResult::PopActivity);
    }

    #[test]
    fn test_unknown_emoji_skips_image() {
        let image = PixelGrid::from_flat(1, 1, &[1]);
        let mut activity =
            ReceivedActivity::new(received("wave"), Some(image), Duration::ZERO, Duration::from_secs(25));
        let mut buffers = DisplayBuffers::default();
        activity.draw(&mut buffers);
        // a known emoji would have filled the area below the label
        assert!((100..170).all(|y| buffers.pixel(100, y) == Some(BinaryColor::On)));
    }

    #[test]
    fn test_known_emoji_image() {
        let image = PixelGrid::from_flat(1, 1, &[1]);
        let mut activity =
            ReceivedActivity::new(received("heart"), Some(image), Duration::ZERO, Duration::from_secs(25));
        let mut buffers = DisplayBuffers::default();
        activity.draw(&mut buffers);
        // 1x1 scales to 90x90 at (55, 80)
        assert_eq!(buffers.pixel(55, 80), Some(BinaryColor::Off));
        assert_eq!(buffers.pixel(144, 169), Some(BinaryColor::Off));
        assert_eq!(buffers.pixel(54, 120), Some(BinaryColor::On));
    }
}
