//! In-memory stand-ins for the badge peripherals.

use alloc::{
    collections::{BTreeMap, VecDeque},
    string::String,
    vec::Vec,
};
use core::{cell::RefCell, time::Duration};
use embedded_io::{ErrorKind, ErrorType, Read};

use crate::{
    display::{Display, RefreshMode},
    framebuffer::DisplayBuffers,
    fs::{self, Filesystem},
    radio::{Contacts, Packet, Radio},
    sound::Buzzer,
};

#[derive(Default)]
pub struct MemFilesystem {
    files: BTreeMap<String, Vec<u8>>,
    opened: RefCell<BTreeMap<String, usize>>,
}

impl MemFilesystem {
    pub fn insert(&mut self, path: &str, data: &[u8]) {
        self.files.insert(String::from(path), data.to_vec());
    }

    pub fn opened(&self, path: &str) -> usize {
        self.opened.borrow().get(path).copied().unwrap_or(0)
    }
}

pub struct MemFile {
    data: Vec<u8>,
    pos: usize,
}

impl ErrorType for MemFile {
    type Error = ErrorKind;
}

impl Read for MemFile {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ErrorKind> {
        let len = buf.len().min(self.data.len() - self.pos);
        buf[..len].copy_from_slice(&self.data[self.pos..self.pos + len]);
        self.pos += len;
        Ok(len)
    }
}

impl fs::File for MemFile {
    fn size(&self) -> usize {
        self.data.len()
    }
}

impl Filesystem for MemFilesystem {
    type File = MemFile;

    fn open_file(&self, path: &str) -> Result<MemFile, ErrorKind> {
        *self.opened.borrow_mut().entry(String::from(path)).or_default() += 1;
        let data = self.files.get(path).ok_or(ErrorKind::NotFound)?;
        Ok(MemFile { data: data.clone(), pos: 0 })
    }
}

#[derive(Default)]
pub struct LoopbackRadio {
    pub inbox: VecDeque<Packet>,
    pub sent: Vec<(u16, Vec<u8>)>,
    pub fail: bool,
}

impl Radio for LoopbackRadio {
    type Error = ErrorKind;

    fn send(&mut self, dest: u16, data: &[u8]) -> Result<(), ErrorKind> {
        if self.fail {
            return Err(ErrorKind::BrokenPipe);
        }
        self.sent.push((dest, data.to_vec()));
        Ok(())
    }

    fn receive(&mut self) -> Option<Packet> {
        self.inbox.pop_front()
    }
}

#[derive(Default)]
pub struct AddressBook {
    pub me: Option<String>,
    pub known: BTreeMap<u16, String>,
}

impl Contacts for AddressBook {
    fn my_handle(&self) -> Option<String> {
        self.me.clone()
    }

    fn handle_of(&self, badge_id: u16) -> Option<String> {
        self.known.get(&badge_id).cloned()
    }
}

#[derive(Default)]
pub struct RecordingBuzzer {
    pub tones: Vec<(u16, Duration)>,
}

impl Buzzer for RecordingBuzzer {
    type Error = ErrorKind;

    fn tone(&mut self, frequency: u16, duration: Duration) -> Result<(), ErrorKind> {
        self.tones.push((frequency, duration));
        Ok(())
    }
}

#[derive(Default)]
pub struct CountingDisplay {
    pub frames: Vec<RefreshMode>,
}

impl Display for CountingDisplay {
    fn display(&mut self, buffers: &mut DisplayBuffers, mode: RefreshMode) {
        self.frames.push(mode);
        buffers.swap_buffers();
    }
}
