use strum::IntoEnumIterator;

use crate::input::Buttons;

/// The emojis on offer, in menu order.
///
/// The snake case name doubles as the key sent over the radio.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Emoji {
    Smile,
    ThumbsUp,
    Laugh,
    Rose,
    Peace,
    Heart,
    Skull,
    Poo,
}

impl Emoji {
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    pub fn label(self) -> &'static str {
        match self {
            Emoji::Smile => "Smile",
            Emoji::ThumbsUp => "Thumbs Up",
            Emoji::Laugh => "Laugh",
            Emoji::Rose => "Tilted Rose",
            Emoji::Peace => "Peace",
            Emoji::Heart => "Heart",
            Emoji::Skull => "Skull",
            Emoji::Poo => "Poo",
        }
    }

    pub fn button(self) -> Buttons {
        match self {
            Emoji::Smile => Buttons::Sw9,
            Emoji::ThumbsUp => Buttons::Sw18,
            Emoji::Laugh => Buttons::Sw10,
            Emoji::Rose => Buttons::Sw17,
            Emoji::Peace => Buttons::Sw7,
            Emoji::Heart => Buttons::Sw13,
            Emoji::Skull => Buttons::Sw6,
            Emoji::Poo => Buttons::Sw14,
        }
    }

    /// File name below the application's asset directory.
    pub fn asset(self) -> &'static str {
        match self {
            Emoji::Smile => "smile.pbm",
            Emoji::ThumbsUp => "thumbs_up.pbm",
            Emoji::Laugh => "laugh.pbm",
            Emoji::Rose => "rose.pbm",
            Emoji::Peace => "peace.pbm",
            Emoji::Heart => "love.pbm",
            Emoji::Skull => "skull.pbm",
            Emoji::Poo => "poo.pbm",
        }
    }

    pub fn from_button(button: Buttons) -> Option<Self> {
        Emoji::iter().find(|emoji| emoji.button() == button)
    }
}
