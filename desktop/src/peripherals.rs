use std::{collections::HashMap, convert::Infallible, str::FromStr, time::Duration};

use badge_core::{radio::Contacts, sound::Buzzer};
use log::info;

/// A badge known by handle, given on the command line as `<hex id>=<handle>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub badge_id: u16,
    pub handle: String,
}

impl FromStr for Contact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, handle) = s
            .split_once('=')
            .ok_or_else(|| format!("expected <hex id>=<handle>, got '{}'", s))?;
        let badge_id = parse_badge_id(id)?;
        if handle.is_empty() {
            return Err(format!("empty handle for badge {:04X}", badge_id));
        }
        Ok(Contact { badge_id, handle: handle.to_string() })
    }
}

/// Parses a badge id such as `0042` or `0x0042`.
pub fn parse_badge_id(s: &str) -> Result<u16, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(digits, 16).map_err(|err| format!("invalid badge id '{}': {}", s, err))
}

#[derive(Default)]
pub struct StaticContacts {
    me: Option<String>,
    known: HashMap<u16, String>,
}

impl StaticContacts {
    pub fn new(me: Option<String>, contacts: Vec<Contact>) -> Self {
        let known = contacts
            .into_iter()
            .map(|contact| (contact.badge_id, contact.handle))
            .collect();
        StaticContacts { me, known }
    }
}

impl Contacts for StaticContacts {
    fn my_handle(&self) -> Option<String> {
        self.me.clone()
    }

    fn handle_of(&self, badge_id: u16) -> Option<String> {
        self.known.get(&badge_id).cloned()
    }
}

/// The desktop has no buzzer, tones end up in the log.
pub struct LogBuzzer;

impl Buzzer for LogBuzzer {
    type Error = Infallible;

    fn tone(&mut self, frequency: u16, duration: Duration) -> Result<(), Infallible> {
        info!("Beep {} Hz for {} ms", frequency, duration.as_millis());
        Ok(())
    }
}
