// src/timetable/decoder.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use crate::config::DecodeOptions;
use crate::core::MarkupNode;
use crate::core::html::parse_fragment;

use super::classify::{classify_cell, describe_leads, CellPlan};
use super::error::{DecodeError, DecodeResult};
use super::reconstruct::{assemble, block_fields};
use super::segment::segment;
use super::types::{Lesson, LessonFields, RawCell, Segments, Slot};
use super::warning::merge_warning;

/// Cell → lesson, one slot at a time.
///
/// Holds nothing but options, so one decoder can be shared by any number of threads.
#[derive(Clone, Debug, Default)]
pub struct TimetableDecoder {
    opts: DecodeOptions,
}

impl TimetableDecoder {
    pub fn new(opts: DecodeOptions) -> Self {
        Self { opts }
    }

    /// Decode a cell, reporting why when no lesson comes out.
    pub fn try_decode<N: MarkupNode>(&self, cell: &RawCell<N>) -> DecodeResult<Lesson> {
        let segments = segment(&cell.markup, &self.opts);
        self.decode_segments(cell.slot, &segments)
    }

    /// Decode a cell. Empty or unrecognized cells give `None`.
    pub fn decode<N: MarkupNode>(&self, cell: &RawCell<N>) -> Option<Lesson> {
        self.try_decode(cell)
            .inspect_err(|e| logd!("slot {} on {}: {e}", cell.slot.number, cell.slot.date))
            .ok()
    }

    /// Decode a cell held as its inner HTML.
    pub fn decode_html(&self, cell: &RawCell<String>) -> Option<Lesson> {
        let html = parse_fragment(&cell.markup);
        self.decode(&RawCell::new(cell.slot, html.root_element()))
    }

    /// Decode many cells on `DecodeOptions::workers` threads.
    /// The output lines up with `cells`, one entry per cell.
    pub fn decode_batch(&self, cells: &[RawCell<String>]) -> Vec<Option<Lesson>> {
        let mut out: Vec<Option<Lesson>> = vec![None; cells.len()];
        if cells.is_empty() {
            return out;
        }

        let workers = self.opts.workers.min(cells.len()).max(1);
        let next = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel::<(usize, Option<Lesson>)>();

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let next = &next;
                scope.spawn(move || {
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        if i >= cells.len() {
                            break;
                        }
                        if tx.send((i, self.decode_html(&cells[i]))).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(tx); // receiver ends once every worker is done

            for (i, lesson) in rx {
                out[i] = lesson;
            }
        });

        logd!(
            "batch: {} cells, {} lessons, {workers} workers",
            cells.len(),
            out.iter().flatten().count()
        );
        out
    }

    fn decode_segments(&self, slot: Slot, segments: &Segments) -> DecodeResult<Lesson> {
        let blocks = &segments.blocks;
        let plan = classify_cell(blocks)?;

        if let CellPlan::Fallback { current } = plan {
            let gap = DecodeError::AmbiguousTagCombination {
                blocks: blocks.len(),
                leads: describe_leads(blocks),
                chosen: current,
            };
            logw!("slot {} on {}: {gap}", slot.number, slot.date);
        }

        let fields = assemble(
            plan,
            |i| {
                block_fields(&blocks[i], &self.opts).unwrap_or_else(|e| {
                    logd!("slot {} on {}, block #{i}: {e}", slot.number, slot.date);
                    LessonFields::default()
                })
            },
            &self.opts,
        );
        let fields = merge_warning(fields, segments.warning.as_deref());
        Ok(Lesson::new(slot, fields))
    }
}
