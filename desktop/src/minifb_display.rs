use badge_core::{
    display::RefreshMode,
    emoji::Emoji,
    framebuffer::{BUFFER_SIZE, DisplayBuffers, HEIGHT, WIDTH},
    input::{ButtonState, Buttons},
};
use log::{debug, info};
use strum::IntoEnumIterator;

const DISPLAY_BUFFER_SIZE: usize = WIDTH * HEIGHT;

const WHITE: u32 = 0xFFFFFFFF;
const BLACK: u32 = 0xFF000000;

/// Number keys in menu order, one per emoji.
const EMOJI_KEYS: [minifb::Key; 8] = [
    minifb::Key::Key1,
    minifb::Key::Key2,
    minifb::Key::Key3,
    minifb::Key::Key4,
    minifb::Key::Key5,
    minifb::Key::Key6,
    minifb::Key::Key7,
    minifb::Key::Key8,
];

pub struct MinifbDisplay {
    // Simulated panel memory: the frame being shown and the one before it
    current: Box<[u8; BUFFER_SIZE]>,
    previous: Box<[u8; BUFFER_SIZE]>,
    // Actual display buffer
    display_buffer: Box<[u32; DISPLAY_BUFFER_SIZE]>,
    window: minifb::Window,
    buttons: ButtonState,
    scale: minifb::Scale,
    title: String,
}

#[derive(PartialEq, Eq, Debug)]
enum BlitMode {
    // Blit the active framebuffer as full black/white
    Full,
    // Only touch pixels that changed since the previous frame
    Partial,
}

impl MinifbDisplay {
    pub fn new(title: &str) -> Self {
        let scale = minifb::Scale::X4;
        let mut ret = Self {
            current: Box::new([0xFF; BUFFER_SIZE]),
            previous: Box::new([0xFF; BUFFER_SIZE]),
            display_buffer: Box::new([WHITE; DISPLAY_BUFFER_SIZE]),
            window: Self::create_window(title, scale),
            buttons: ButtonState::default(),
            scale,
            title: String::from(title),
        };
        ret.update_display();
        ret
    }

    fn create_window(title: &str, scale: minifb::Scale) -> minifb::Window {
        let options = minifb::WindowOptions {
            borderless: false,
            title: true,
            resize: true,
            scale,
            ..minifb::WindowOptions::default()
        };
        let mut window = minifb::Window::new(title, WIDTH, HEIGHT, options).unwrap_or_else(|e| {
            panic!("Unable to open window: {}", e);
        });

        window.set_target_fps(20);
        window
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    fn update_display(&mut self) {
        if let Err(err) = self
            .window
            .update_with_buffer(&*self.display_buffer, WIDTH, HEIGHT)
        {
            log::error!("Failed to update window: {}", err);
        }
    }

    /// Polls the keyboard. Number keys 1 to 8 press the emoji buttons in menu
    /// order, backspace is the back button.
    pub fn update(&mut self) {
        self.window.update();
        let mut current: u16 = 0;
        for (key, emoji) in EMOJI_KEYS.into_iter().zip(Emoji::iter()) {
            if self.window.is_key_down(key) {
                current |= emoji.button().mask();
            }
        }
        if self.window.is_key_down(minifb::Key::Backspace) {
            current |= Buttons::BACK.mask();
        }
        if self.window.is_key_pressed(minifb::Key::S, minifb::KeyRepeat::No) {
            info!("Toggling scale");
            self.scale = match self.scale {
                minifb::Scale::X1 => minifb::Scale::X2,
                minifb::Scale::X2 => minifb::Scale::X4,
                minifb::Scale::X4 => minifb::Scale::X1,
                _ => minifb::Scale::X2,
            };
            self.window = Self::create_window(&self.title, self.scale);
            self.update_display();
        }
        self.buttons.update(current);
    }

    pub fn get_buttons(&self) -> ButtonState {
        self.buttons
    }

    fn blit_internal(&mut self, mode: BlitMode) {
        debug!("Blitting with mode: {:?}", mode);
        for i in 0..BUFFER_SIZE {
            let curr_byte = self.current[i];
            let prev_byte = self.previous[i];
            for bit in 0..8 {
                let current_bit = (curr_byte >> (7 - bit)) & 0x01;
                let previous_bit = (prev_byte >> (7 - bit)) & 0x01;
                if mode == BlitMode::Partial && current_bit == previous_bit {
                    continue;
                }
                self.display_buffer[i * 8 + bit] = if current_bit == 1 { WHITE } else { BLACK };
            }
        }
        self.update_display();
    }
}

impl badge_core::display::Display for MinifbDisplay {
    fn display(&mut self, buffers: &mut DisplayBuffers, mode: RefreshMode) {
        self.current.copy_from_slice(&buffers.get_active_buffer()[..]);
        self.previous.copy_from_slice(&buffers.get_inactive_buffer()[..]);
        if mode == RefreshMode::Fast {
            self.blit_internal(BlitMode::Partial);
        } else {
            self.blit_internal(BlitMode::Full);
        }
        buffers.swap_buffers();
    }
}
