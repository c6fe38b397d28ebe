// src/timetable/error.rs
use std::fmt;

use thiserror::Error;

use super::types::Template;

/// Which level of the cell failed to match a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Cell { blocks: usize },
    Block { markers: usize },
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Cell { blocks } => write!(f, "cell with {blocks} block(s)"),
            Shape::Block { markers } => write!(f, "block with {markers} marker(s)"),
        }
    }
}

/// Why a cell or one of its blocks could not be decoded.
///
/// None of these abort a batch: a cell-level failure yields no lesson,
/// a block-level failure yields empty fields for that block.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unrecognized shape: {0}")]
    ShapeUnrecognized(Shape),

    #[error("{template:?} needs marker #{index} but the block has {len}")]
    MarkerIndexOutOfRange { template: Template, index: usize, len: usize },

    #[error("no rule for lead tags {leads} across {blocks} blocks; using block #{chosen}")]
    AmbiguousTagCombination { blocks: usize, leads: String, chosen: usize },
}

pub type DecodeResult<T> = Result<T, DecodeError>;
