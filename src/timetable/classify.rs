// src/timetable/classify.rs
//! Shape → template selection.
//!
//! Two levels, both first-match-wins:
//! - **cell**: block count plus the role tags on each block's *first* marker decide
//!   which block is current and which (if any) is the superseded one;
//! - **block**: marker count plus a few tag checks pick the field-extraction template.
//!
//! The arms below overlap on purpose and their order is part of the contract.
//! Moving an arm changes which layer is treated as current.

use super::error::{DecodeError, DecodeResult, Shape};
use super::types::{Block, RoleTag, RoleTag::*, RoleTags, Template};

/// How a cell's blocks combine into one lesson. Indices point into the block list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellPlan {
    /// Decode one block on its own.
    Single { current: usize },
    /// A planned lesson was moved or canceled and replaced: current fields from
    /// `current`, info merged from both layers with site boilerplate removed.
    PlannedMerge { current: usize, old: usize },
    /// Substitution: `old` supplies the superseded subject/teacher/room,
    /// `changes` forced on and `canceled` forced off.
    Substitution { current: usize, old: usize },
    /// Like `Substitution`, with info rewritten to "Poprzednio: <old subject> (<old info>)".
    Previously { current: usize, old: usize },
    /// No rule matched; `current` picked by position. Callers should log the gap.
    Fallback { current: usize },
}

/// `lead` is `Some` only when the block has a first marker, so a marker-less
/// block never satisfies a tag condition.
fn tagged(lead: &Option<RoleTags>, wanted: &[RoleTag]) -> bool {
    lead.is_some_and(|tags| wanted.iter().all(|t| tags.contains(*t)))
}

pub fn classify_cell(blocks: &[Block]) -> DecodeResult<CellPlan> {
    let leads: Vec<Option<RoleTags>> = blocks.iter().map(Block::lead_tags).collect();

    let plan = match leads.as_slice() {
        [] => return Err(DecodeError::ShapeUnrecognized(Shape::Cell { blocks: 0 })),

        [_] => CellPlan::Single { current: 0 },

        [_, b1] if tagged(b1, &[MovedOrCanceled, Planned]) => {
            CellPlan::PlannedMerge { current: 0, old: 1 }
        }
        [_, b1] if tagged(b1, &[MovedOrCanceled]) => CellPlan::Single { current: 1 },
        [_, b1] if tagged(b1, &[Changed]) => CellPlan::Substitution { current: 1, old: 0 },
        // untagged = no role tag; classes outside the vocabulary don't count
        [b0, Some(b1)] if tagged(b0, &[MovedOrCanceled, Planned]) && b1.is_empty() => {
            CellPlan::Previously { current: 1, old: 0 }
        }
        [_, _] => CellPlan::Fallback { current: 1 },

        [b0, b1, b2]
            if tagged(b0, &[Changed])
                && tagged(b1, &[MovedOrCanceled])
                && tagged(b2, &[MovedOrCanceled]) =>
        {
            CellPlan::Substitution { current: 0, old: 1 }
        }
        [b0, b1, b2]
            if tagged(b0, &[MovedOrCanceled])
                && tagged(b1, &[MovedOrCanceled])
                && tagged(b2, &[Changed]) =>
        {
            CellPlan::Substitution { current: 2, old: 0 }
        }
        [_, _, _] => CellPlan::Fallback { current: 1 },

        more => {
            return Err(DecodeError::ShapeUnrecognized(Shape::Cell { blocks: more.len() }));
        }
    };
    Ok(plan)
}

/// Describe the lead tags of every block, for fallback diagnostics.
pub fn describe_leads(blocks: &[Block]) -> String {
    let parts: Vec<String> = blocks
        .iter()
        .map(|b| match b.lead_tags() {
            Some(tags) => tags.to_string(),
            None => s!("-"),
        })
        .collect();
    join!("[", &parts.join(" "), "]")
}

pub fn classify_block(block: &Block) -> DecodeResult<Template> {
    let markers = &block.markers;
    let first_has = |tag: RoleTag| markers.first().is_some_and(|m| m.has(tag));
    let last_has = |tag: RoleTag| markers.last().is_some_and(|m| m.has(tag));
    let realized = markers.iter().filter(|m| m.has(Realized)).count();

    let template = match markers.len() {
        2 => Template::Light,
        3 => Template::Simple { info_offset: 0 },
        4 if last_has(Realized) => Template::Simple { info_offset: 0 },
        4 => Template::Group,
        5 if first_has(Changed) && realized == 2 => Template::Simple { info_offset: 1 },
        5 if last_has(Realized) => Template::Group,
        7 => Template::SimpleWithReplacement,
        9 => Template::GroupWithReplacement,
        n => return Err(DecodeError::ShapeUnrecognized(Shape::Block { markers: n })),
    };
    Ok(template)
}
