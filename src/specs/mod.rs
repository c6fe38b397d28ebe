// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific readers: each spec knows *where the ground truth lives in one page's
//! HTML* and cuts it into the units the rest of the crate works on.
//!
//! ## What lives here
//! - **Pure HTML parsing** of saved pages, through `scraper` selectors.
//! - **Tolerant extraction**: malformed rows are logged and skipped, not fatal.
//!
//! ## What does **not** live here
//! - **Fetching, sessions, login.** Callers hand over page text.
//! - **Lesson decoding.** Cells go to `timetable::TimetableDecoder`.
//!
//! ## Typical call chain
//! ```text
//! caller (page text) → specs::timetable::split_page → RawCell<String> × N
//!                    → TimetableDecoder::decode_batch → Option<Lesson> × N
//! ```
pub mod timetable;
