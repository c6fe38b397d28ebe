// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;
pub mod timetable;

pub use timetable::{Lesson, RawCell, Slot, TimetableDecoder};
