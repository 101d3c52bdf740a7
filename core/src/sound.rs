use core::time::Duration;
use log::{error, trace};

pub trait Buzzer {
    type Error: core::fmt::Debug;

    /// Plays a tone, blocking for `duration`.
    fn tone(&mut self, frequency: u16, duration: Duration) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// An emoji was picked from the menu.
    Selected,
    /// Another badge sent an emoji.
    Notification,
}

impl Cue {
    /// `(frequency in Hz, length in ms)` pairs.
    pub fn notes(self) -> &'static [(u16, u64)] {
        match self {
            Cue::Selected => &[(880, 100), (1109, 200)],
            Cue::Notification => &[(800, 100), (1000, 150)],
        }
    }
}

/// Plays `cue`. A failing buzzer is logged and otherwise ignored.
pub fn play(buzzer: &mut impl Buzzer, cue: Cue) {
    trace!("Playing {:?}", cue);
    for &(frequency, millis) in cue.notes() {
        if let Err(err) = buzzer.tone(frequency, Duration::from_millis(millis)) {
            error!("Buzzer error: {:?}", err);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBuzzer;

    struct BrokenBuzzer(usize);

    impl Buzzer for BrokenBuzzer {
        type Error = ();

        fn tone(&mut self, _: u16, _: Duration) -> Result<(), ()> {
            self.0 += 1;
            Err(())
        }
    }

    #[test]
    fn test_notification() {
        let mut buzzer = RecordingBuzzer::default();
        play(&mut buzzer, Cue::Notification);
        assert_eq!(
            buzzer.tones,
            [(800, Duration::from_millis(100)), (1000, Duration::from_millis(150))]
        );
    }

    #[test]
    fn test_failure_stops_cue() {
        let mut buzzer = BrokenBuzzer(0);
        play(&mut buzzer, Cue::Selected);
        assert_eq!(buzzer.0, 1);
    }
}
