// src/timetable/mod.rs
//! Lesson decoding for a single timetable slot.
//!
//! ```text
//! RawCell ─ segment ─▶ Segments ─ classify ─▶ CellPlan + Templates
//!         ─ reconstruct ─▶ LessonFields ─ merge_warning ─▶ Lesson
//! ```
//!
//! Every stage is a pure function of its input. Nothing here fetches, caches or logs in.
pub mod classify;
pub mod decoder;
pub mod error;
pub mod reconstruct;
pub mod segment;
pub mod types;
pub mod warning;

pub use decoder::TimetableDecoder;
pub use error::{DecodeError, Shape};
pub use types::{Block, Lesson, LessonFields, Marker, RawCell, RoleTag, RoleTags, Segments, Slot, Template};
