use alloc::{format, string::String, vec::Vec};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::emoji::Emoji;

/// Destination id that reaches every badge in range.
pub const BROADCAST: u16 = 0xFFFF;

const UNKNOWN_SENDER: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub source: u16,
    pub data: Vec<u8>,
}

pub trait Radio {
    type Error: core::fmt::Debug;

    fn send(&mut self, dest: u16, data: &[u8]) -> Result<(), Self::Error>;
    /// Next pending packet, never blocks.
    fn receive(&mut self) -> Option<Packet>;
}

pub trait Contacts {
    fn my_handle(&self) -> Option<String>;
    fn handle_of(&self, badge_id: u16) -> Option<String>;
}

/// The JSON envelope exchanged between badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiMessage {
    pub emoji: String,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedEmoji {
    /// Key as sent, may not name an emoji this badge knows.
    pub emoji: String,
    pub sender: String,
    pub badge_id: u16,
}

impl ReceivedEmoji {
    pub fn known_emoji(&self) -> Option<Emoji> {
        Emoji::from_key(&self.emoji)
    }

    /// Sender handle with a leading `@`.
    pub fn display_sender(&self) -> String {
        if self.sender.starts_with('@') {
            self.sender.clone()
        } else {
            format!("@{}", self.sender)
        }
    }
}

#[derive(Debug)]
pub enum RadioError<E> {
    Send(E),
    Json(serde_json::Error),
}

impl<E> From<serde_json::Error> for RadioError<E> {
    fn from(err: serde_json::Error) -> Self {
        RadioError::Json(err)
    }
}

pub fn encode_message(emoji: Emoji, sender: &str) -> Result<Vec<u8>, serde_json::Error> {
    let message = EmojiMessage {
        emoji: String::from(emoji.key()),
        sender: String::from(sender),
    };
    serde_json::to_vec(&message)
}

/// Sends `emoji` to every badge in range, signed with our own handle.
pub fn broadcast<R: Radio, C: Contacts>(
    radio: &mut R,
    contacts: &C,
    emoji: Emoji,
) -> Result<(), RadioError<R::Error>> {
    let sender = contacts
        .my_handle()
        .filter(|handle| !handle.is_empty())
        .unwrap_or_else(|| String::from(UNKNOWN_SENDER));
    let data = encode_message(emoji, &sender)?;
    radio.send(BROADCAST, &data).map_err(RadioError::Send)?;
    info!("Broadcasted emoji '{}' from {}", emoji.key(), sender);
    Ok(())
}

/// Decodes an incoming packet. Invalid packets are logged and dropped.
///
/// The sender is resolved through the contact list first, then the handle
/// inside the message, and finally the badge id.
pub fn handle_packet<C: Contacts>(contacts: &C, packet: &Packet) -> Option<ReceivedEmoji> {
    let message: EmojiMessage = match serde_json::from_slice(&packet.data) {
        Ok(message) => message,
        Err(err) => {
            error!("Error handling radio packet from {:04X}: {}", packet.source, err);
            return None;
        }
    };

    let sender = contacts
        .handle_of(packet.source)
        .or_else(|| Some(message.sender).filter(|s| !s.is_empty() && s != UNKNOWN_SENDER))
        .filter(|handle| !handle.is_empty())
        .unwrap_or_else(|| format!("Badge {:04X}", packet.source));

    if Emoji::from_key(&message.emoji).is_none() {
        warn!("Received unknown emoji '{}' from {}", message.emoji, sender);
    }

    Some(ReceivedEmoji {
        emoji: message.emoji,
        sender,
        badge_id: packet.source,
    })
}
