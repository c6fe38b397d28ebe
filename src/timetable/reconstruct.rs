// src/timetable/reconstruct.rs
// Blocks + plan → lesson fields.

use crate::config::DecodeOptions;
use crate::core::sanitize::{capitalise, is_blank, strip_boilerplate, strip_parens};

use super::classify::{classify_block, CellPlan};
use super::error::{DecodeError, DecodeResult};
use super::types::{Block, LessonFields, Marker, RoleTag, Template};

/// Marker access that reports which template asked for what.
struct Markers<'a> {
    list: &'a [Marker],
    template: Template,
}

impl<'a> Markers<'a> {
    fn at(&self, index: usize) -> DecodeResult<&'a Marker> {
        self.list.get(index).ok_or(DecodeError::MarkerIndexOutOfRange {
            template: self.template,
            index,
            len: self.list.len(),
        })
    }

    fn text(&self, index: usize) -> DecodeResult<String> {
        self.at(index).map(|m| m.text.clone())
    }
}

/// `"Matematyka [gr.2]"` → `("Matematyka", "gr.2")`; no bracket → empty group.
pub fn split_subject_group(text: &str) -> (String, String) {
    let subject = match text.find(" [") {
        Some(i) => &text[..i],
        None => text,
    };
    let group = if text.contains('[') {
        let last = text.rsplit(" [").next().unwrap_or(text);
        last.strip_suffix(']').unwrap_or(last)
    } else {
        ""
    };
    (s!(subject), s!(group))
}

/// Decode one block on its own.
pub fn block_fields(block: &Block, opts: &DecodeOptions) -> DecodeResult<LessonFields> {
    let template = classify_block(block)?;
    apply_template(template, block, opts)
}

pub fn apply_template(template: Template, block: &Block, opts: &DecodeOptions) -> DecodeResult<LessonFields> {
    let markers = Markers { list: &block.markers, template };
    match template {
        Template::Light => light(&markers, &block.own_text),
        Template::Simple { info_offset } => plain(&markers, 0, info_offset, &block.own_text),
        Template::Group => plain(&markers, 1, 0, ""),
        Template::SimpleWithReplacement => with_replacement(&markers, 0, opts),
        Template::GroupWithReplacement => with_replacement(&markers, 1, opts),
    }
}

fn canceled_and_changes(lead: &Marker, change_text: &str) -> (bool, bool) {
    let canceled = lead.has(RoleTag::MovedOrCanceled);
    let changes = (!is_blank(change_text) && !canceled) || lead.has(RoleTag::Changed);
    (canceled, changes)
}

fn light(markers: &Markers<'_>, own_text: &str) -> DecodeResult<LessonFields> {
    let lead = markers.at(0)?;
    let (subject, group) = split_subject_group(&lead.text);
    let (canceled, changes) = canceled_and_changes(lead, own_text);
    Ok(LessonFields {
        subject,
        group,
        room: markers.text(1)?,
        info: s!(strip_parens(own_text)),
        canceled,
        changes,
        ..Default::default()
    })
}

/// Simple and Group lessons. `offset` shifts teacher/room/info right by one
/// for the group marker; `info_offset` shifts info alone.
fn plain(markers: &Markers<'_>, offset: usize, info_offset: usize, change_text: &str) -> DecodeResult<LessonFields> {
    let lead = markers.at(0)?;
    let (subject, group) = split_subject_group(&lead.text);
    let (canceled, changes) = canceled_and_changes(lead, change_text);
    let info = match markers.list.get(3 + offset + info_offset) {
        Some(m) => m.text.as_str(),
        None => change_text,
    };
    Ok(LessonFields {
        subject,
        group,
        teacher: markers.text(1 + offset)?,
        room: markers.text(2 + offset)?,
        info: s!(strip_parens(info)),
        canceled,
        changes,
        ..Default::default()
    })
}

/// Old triple first, new triple after it, trailing info marker last.
fn with_replacement(markers: &Markers<'_>, o: usize, opts: &DecodeOptions) -> DecodeResult<LessonFields> {
    let (subject_old, _) = split_subject_group(&markers.at(0)?.text);
    let (subject, group) = split_subject_group(&markers.at(3 + o)?.text);
    let last = markers.list.last().map(|m| m.text.as_str()).unwrap_or_default();
    let info = join!(strip_parens(last), ", ", &opts.previously_label, ": ", &subject_old);
    Ok(LessonFields {
        subject,
        group,
        teacher: markers.text(4 + 2 * o)?,
        room: markers.text(5 + 2 * o)?,
        info,
        changes: true,
        subject_old: Some(subject_old),
        teacher_old: Some(markers.text(1 + o)?),
        room_old: Some(markers.text(2 + o)?),
        ..Default::default()
    })
}

/// Combine the planned cell's blocks into one set of fields.
///
/// `decode` supplies per-block fields; a block that failed to decode arrives as
/// empty fields, so this never fails.
pub fn assemble<F>(plan: CellPlan, mut decode: F, opts: &DecodeOptions) -> LessonFields
where
    F: FnMut(usize) -> LessonFields,
{
    match plan {
        CellPlan::Single { current } | CellPlan::Fallback { current } => decode(current),

        CellPlan::PlannedMerge { current, old } => {
            let cur = decode(current);
            let old = decode(old);
            let merged = join!(strip_parens(&cur.info), ", ", &old.info);
            let stripped = strip_boilerplate(&merged, &opts.boilerplate);
            let info = capitalise(&stripped.replace(&join!(&cur.subject, " "), ""));
            LessonFields { info, ..cur.superseding(&old) }
        }

        CellPlan::Substitution { current, old } => {
            let old = decode(old);
            LessonFields { canceled: false, ..decode(current).superseding(&old) }
        }

        CellPlan::Previously { current, old } => {
            let old = decode(old);
            let label = capitalise(&opts.previously_label);
            let info = join!(&label, ": ", &old.subject, " (", &old.info, ")");
            LessonFields { canceled: false, info, ..decode(current).superseding(&old) }
        }
    }
}
