#![no_std]

pub mod activities;
pub mod application;
pub mod assets;
pub mod blit;
pub mod config;
pub mod display;
pub mod emoji;
pub mod framebuffer;
pub mod fs;
pub mod input;
pub mod radio;
pub mod sound;

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(test)]
mod testing;
