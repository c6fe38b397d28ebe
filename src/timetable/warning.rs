// src/timetable/warning.rs
use crate::core::sanitize::is_blank;

use super::types::LessonFields;

/// Fold the cell's warning panel text into `info`.
pub fn merge_warning(mut fields: LessonFields, warning: Option<&str>) -> LessonFields {
    if let Some(warn) = warning {
        fields.info = if is_blank(&fields.info) {
            s!(warn)
        } else {
            join!(&fields.info, ": ", warn)
        };
    }
    fields
}
