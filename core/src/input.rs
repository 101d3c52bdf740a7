/// Badge switches, in bit order of the raw button mask.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buttons {
    Sw5,
    Sw6,
    Sw7,
    Sw9,
    Sw10,
    Sw13,
    Sw14,
    Sw17,
    Sw18,
}

impl Buttons {
    pub const BACK: Buttons = Buttons::Sw5;

    pub fn label(self) -> &'static str {
        match self {
            Buttons::Sw5 => "SW5",
            Buttons::Sw6 => "SW6",
            Buttons::Sw7 => "SW7",
            Buttons::Sw9 => "SW9",
            Buttons::Sw10 => "SW10",
            Buttons::Sw13 => "SW13",
            Buttons::Sw14 => "SW14",
            Buttons::Sw17 => "SW17",
            Buttons::Sw18 => "SW18",
        }
    }

    pub fn mask(self) -> u16 {
        1 << (self as u16)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    current: u16,
    previous: u16,
}

impl ButtonState {
    pub fn update(&mut self, current: u16) {
        self.previous = self.current;
        self.current = current;
    }

    fn held(&self) -> u16 {
        self.current & self.previous
    }

    fn pressed(&self) -> u16 {
        self.current & !self.previous
    }

    fn released(&self) -> u16 {
        !self.current & self.previous
    }

    pub fn is_held(&self, button: Buttons) -> bool {
        (self.held() & button.mask()) != 0
    }

    pub fn is_pressed(&self, button: Buttons) -> bool {
        (self.pressed() & button.mask()) != 0
    }

    pub fn is_released(&self, button: Buttons) -> bool {
        (self.released() & button.mask()) != 0
    }

    pub fn any_pressed(&self, buttons: &[Buttons]) -> bool {
        let mask = buttons.iter().fold(0, |acc, &button| acc | button.mask());
        (self.pressed() & mask) != 0
    }
}
