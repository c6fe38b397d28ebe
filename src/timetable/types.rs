// src/timetable/types.rs
use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/* ---------------- Input ---------------- */

/// Slot identity. Copied onto the decoded lesson untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub date: NaiveDate,
    pub number: u32,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One timetable slot as scraped: its identity plus the slot's markup.
///
/// `M` is either a parsed tree handle (anything implementing `MarkupNode`)
/// or the cell's inner HTML as an owned `String`.
#[derive(Clone, Debug)]
pub struct RawCell<M> {
    pub slot: Slot,
    pub markup: M,
}

impl<M> RawCell<M> {
    pub fn new(slot: Slot, markup: M) -> Self {
        Self { slot, markup }
    }
}

/* ---------------- Segments ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoleTag {
    Planned,
    Realized,
    Changed,
    MovedOrCanceled,
}

impl RoleTag {
    pub const ALL: [RoleTag; 4] = [
        RoleTag::Planned,
        RoleTag::Realized,
        RoleTag::Changed,
        RoleTag::MovedOrCanceled,
    ];

    const fn bit(self) -> u8 {
        match self {
            RoleTag::Planned => 1,
            RoleTag::Realized => 1 << 1,
            RoleTag::Changed => 1 << 2,
            RoleTag::MovedOrCanceled => 1 << 3,
        }
    }

    fn short(self) -> &'static str {
        match self {
            RoleTag::Planned => "PLANNED",
            RoleTag::Realized => "REALIZED",
            RoleTag::Changed => "CHANGED",
            RoleTag::MovedOrCanceled => "MOVED_OR_CANCELED",
        }
    }
}

/// Set of role tags on one marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoleTags(u8);

impl RoleTags {
    pub const EMPTY: RoleTags = RoleTags(0);

    pub const fn with(self, tag: RoleTag) -> Self {
        RoleTags(self.0 | tag.bit())
    }

    pub fn insert(&mut self, tag: RoleTag) {
        self.0 |= tag.bit();
    }

    pub const fn contains(self, tag: RoleTag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = RoleTag> {
        RoleTag::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl FromIterator<RoleTag> for RoleTags {
    fn from_iter<I: IntoIterator<Item = RoleTag>>(iter: I) -> Self {
        let mut tags = RoleTags::EMPTY;
        for t in iter { tags.insert(t); }
        tags
    }
}

impl fmt::Display for RoleTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, tag) in self.iter().enumerate() {
            if i > 0 { f.write_str(",")?; }
            f.write_str(tag.short())?;
        }
        f.write_str("}")
    }
}

/// Inline text span inside a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pub text: String,
    pub tags: RoleTags,
}

impl Marker {
    pub fn new(text: impl Into<String>, tags: RoleTags) -> Self {
        Self { text: text.into(), tags }
    }

    pub fn has(&self, tag: RoleTag) -> bool {
        self.tags.contains(tag)
    }
}

/// One lesson layer (current or superseded) within a cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub markers: Vec<Marker>,
    pub own_text: String,
}

impl Block {
    /// Tags on the first marker; `None` when the block has no markers.
    pub fn lead_tags(&self) -> Option<RoleTags> {
        self.markers.first().map(|m| m.tags)
    }
}

/// Output of the segmenter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segments {
    pub blocks: Vec<Block>,
    pub warning: Option<String>,
}

/* ---------------- Templates ---------------- */

/// Field-extraction rule for a single block, picked from its marker shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Template {
    /// subject, room
    Light,
    /// subject, teacher, room, [info]; info read `info_offset` markers later than usual
    Simple { info_offset: usize },
    /// subject, group, teacher, room, [info]
    Group,
    /// old subject, old teacher, old room, subject, teacher, room, info
    SimpleWithReplacement,
    /// as `SimpleWithReplacement`, with a group marker ahead of each triple
    GroupWithReplacement,
}

/* ---------------- Output ---------------- */

/// Everything a lesson carries apart from its slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonFields {
    pub subject: String,
    pub group: String,
    pub teacher: String,
    pub room: String,
    pub info: String,
    pub canceled: bool,
    pub changes: bool,
    pub subject_old: Option<String>,
    pub teacher_old: Option<String>,
    pub room_old: Option<String>,
}

impl LessonFields {
    /// Record `old` as the superseded state of `self`.
    pub fn superseding(mut self, old: &LessonFields) -> Self {
        self.changes = true;
        self.subject_old = Some(old.subject.clone());
        self.teacher_old = Some(old.teacher.clone());
        self.room_old = Some(old.room.clone());
        self
    }
}

/// Decoded timetable slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub number: u32,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub date: NaiveDate,
    pub subject: String,
    pub group: String,
    pub teacher: String,
    pub room: String,
    pub info: String,
    pub canceled: bool,
    pub changes: bool,
    pub subject_old: Option<String>,
    pub teacher_old: Option<String>,
    pub room_old: Option<String>,
}

impl Lesson {
    pub fn new(slot: Slot, fields: LessonFields) -> Self {
        let LessonFields {
            subject, group, teacher, room, info,
            canceled, changes,
            subject_old, teacher_old, room_old,
        } = fields;
        Self {
            number: slot.number,
            start: slot.start,
            end: slot.end,
            date: slot.date,
            subject, group, teacher, room, info,
            canceled, changes,
            subject_old, teacher_old, room_old,
        }
    }

    pub fn slot(&self) -> Slot {
        Slot { date: self.date, number: self.number, start: self.start, end: self.end }
    }
}
