use alloc::{boxed::Box, vec::Vec};
use core::time::Duration;

use log::{error, info};

use crate::{
    activities::{
        Activity, ActivityType, ApplicationState, UpdateResult, menu::MenuActivity,
        received::ReceivedActivity, selected::SelectedActivity,
    },
    assets,
    config::Config,
    display::{Display, RefreshMode},
    framebuffer::DisplayBuffers,
    fs::Filesystem,
    input::ButtonState,
    radio::{self, Contacts, Radio},
    sound::{self, Buzzer, Cue},
};

/// Owns the badge peripherals and the activity stack.
///
/// The menu sits at the bottom of the stack and is never popped.
pub struct Application<'a, Fs, R, C, B>
where
    Fs: Filesystem,
    R: Radio,
    C: Contacts,
    B: Buzzer,
{
    dirty: bool,
    full_refresh: bool,
    display_buffers: &'a mut DisplayBuffers,
    filesystem: Fs,
    radio: R,
    contacts: C,
    buzzer: B,
    config: Config,
    activities: Vec<Box<dyn Activity>>,
    state: ApplicationState,
    input_blocked_until: Duration,
}

impl<'a, Fs, R, C, B> Application<'a, Fs, R, C, B>
where
    Fs: Filesystem,
    R: Radio,
    C: Contacts,
    B: Buzzer,
{
    pub fn new(
        display_buffers: &'a mut DisplayBuffers,
        filesystem: Fs,
        radio: R,
        contacts: C,
        buzzer: B,
        config: Config,
    ) -> Self {
        let mut menu = MenuActivity::new(&config.app_name);
        menu.start();
        info!("{} started", config.app_name);
        Application {
            dirty: true,
            full_refresh: true,
            display_buffers,
            filesystem,
            radio,
            contacts,
            buzzer,
            config,
            activities: alloc::vec![Box::new(menu) as Box<dyn Activity>],
            state: ApplicationState {
                input: ButtonState::default(),
                now: Duration::ZERO,
            },
            input_blocked_until: Duration::ZERO,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn running(&self) -> bool {
        !self.activities.is_empty()
    }

    /// One iteration of the control loop: radio poll, input, timers.
    pub fn update(&mut self, buttons: &ButtonState, now: Duration) {
        self.state.now = now;
        self.poll_radio();

        self.state.input = if now < self.input_blocked_until {
            ButtonState::default()
        } else {
            *buttons
        };

        let Some(activity) = self.activities.last_mut() else {
            return;
        };
        match activity.update(&self.state) {
            UpdateResult::None => {}
            UpdateResult::Redraw => self.dirty = true,
            UpdateResult::PopActivity => self.pop_activity(),
            UpdateResult::PushActivity(next) => self.push_activity(next),
        }
    }

    pub fn draw(&mut self, display: &mut impl Display) {
        if !self.dirty {
            return;
        }
        let Some(activity) = self.activities.last_mut() else {
            return;
        };
        self.dirty = false;
        activity.draw(self.display_buffers);
        let mode = if self.full_refresh {
            RefreshMode::Full
        } else {
            RefreshMode::Fast
        };
        self.full_refresh = false;
        display.display(self.display_buffers, mode);
    }

    fn poll_radio(&mut self) {
        let Some(packet) = self.radio.receive() else {
            return;
        };
        if let Some(received) = radio::handle_packet(&self.contacts, &packet) {
            sound::play(&mut self.buzzer, Cue::Notification);
            self.push_activity(ActivityType::Received(received));
        }
    }

    fn push_activity(&mut self, next: ActivityType) {
        let mut activity: Box<dyn Activity> = match next {
            ActivityType::Selected(emoji) => {
                sound::play(&mut self.buzzer, Cue::Selected);
                if let Err(err) = radio::broadcast(&mut self.radio, &self.contacts, emoji) {
                    error!("Error broadcasting emoji: {:?}", err);
                }
                let image = assets::load_pbm(&self.filesystem, &self.config, emoji.asset());
                Box::new(SelectedActivity::new(emoji, image))
            }
            ActivityType::Received(received) => {
                let image = received
                    .known_emoji()
                    .and_then(|emoji| assets::load_pbm(&self.filesystem, &self.config, emoji.asset()));
                Box::new(ReceivedActivity::new(
                    received,
                    image,
                    self.state.now,
                    self.config.auto_dismiss,
                ))
            }
        };

        if activity.is_transient()
            && self.activities.len() > 1
            && self.activities.last().is_some_and(|top| top.is_transient())
        {
            self.activities.pop();
        }
        activity.start();
        self.activities.push(activity);
        self.screen_changed();
    }

    fn pop_activity(&mut self) {
        if self.activities.len() > 1 {
            self.activities.pop();
            self.screen_changed();
        }
    }

    fn screen_changed(&mut self) {
        self.dirty = true;
        self.full_refresh = true;
        self.input_blocked_until = self.state.now + self.config.input_cooldown;
    }
}
