// tests/decode_cells.rs
//
// Cell-level decoding against real markup, one test per cell shape.
//
use chrono::{NaiveDate, NaiveTime};
use timetable_scrape::{RawCell, Slot, TimetableDecoder};
use timetable_scrape::timetable::Lesson;

const PPL: &str = "x-treelabel-ppl";
const RLZ: &str = "x-treelabel-rlz";
const ZAS: &str = "x-treelabel-zas";
const INV: &str = "x-treelabel-inv";

fn slot() -> Slot {
    Slot {
        date: NaiveDate::from_ymd_opt(2018, 10, 1).unwrap(),
        number: 4,
        start: NaiveTime::from_hms_opt(10, 45, 0).unwrap(),
        end: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
    }
}

fn decode(html: &str) -> Option<Lesson> {
    TimetableDecoder::default().decode_html(&RawCell::new(slot(), html.to_string()))
}

fn span(class: &str, text: &str) -> String {
    if class.is_empty() {
        format!("<span>{text}</span>")
    } else {
        format!(r#"<span class="{class}">{text}</span>"#)
    }
}

fn div(spans: &[String], own: &str) -> String {
    format!("<div>{}{own}</div>", spans.concat())
}

#[test]
fn empty_cell_decodes_to_nothing() {
    assert_eq!(decode(""), None);
    assert_eq!(decode("&nbsp;"), None);
    assert_eq!(decode(r#"<div class="uwaga-panel">Uwaga</div>"#), None);
}

#[test]
fn four_blocks_decode_to_nothing() {
    let block = div(&[span("", "Fizyka"), span("", "12")], "");
    assert_eq!(decode(&block.repeat(4)), None);
}

#[test]
fn light_lesson_plain() {
    let lesson = decode(&div(&[span("", "Matematyka [gr.2]"), span("", "21")], "")).unwrap();
    assert_eq!(lesson.number, 4);
    assert_eq!(lesson.date, slot().date);
    assert_eq!(lesson.subject, "Matematyka");
    assert_eq!(lesson.group, "gr.2");
    assert_eq!(lesson.room, "21");
    assert_eq!(lesson.info, "");
    assert!(!lesson.canceled);
    assert!(!lesson.changes);
    assert_eq!(lesson.subject_old, None);
}

#[test]
fn simple_lesson_with_note() {
    let html = div(
        &[span("", "Biologia"), span("", "Kowalska Anna"), span("", "104")],
        " (zastępstwo)",
    );
    let lesson = decode(&html).unwrap();
    assert_eq!(lesson.teacher, "Kowalska Anna");
    assert_eq!(lesson.room, "104");
    assert_eq!(lesson.info, "zastępstwo");
    assert!(lesson.changes);
}

#[test]
fn canceled_lesson() {
    let html = div(
        &[span(INV, "Biologia"), span(INV, "Kowalska Anna"), span(INV, "104")],
        " (odwołana)",
    );
    let lesson = decode(&html).unwrap();
    assert!(lesson.canceled);
    assert!(!lesson.changes);
    assert_eq!(lesson.info, "odwołana");
}

#[test]
fn moved_planned_second_block_merges_into_first() {
    let current = div(
        &[span("", "Fizyka"), span("", "Nowak Jan"), span("", "12")],
        " (Fizyka przeniesiona z lekcji 2)",
    );
    let old = div(
        &[
            span(&format!("{PPL} {INV}"), "Chemia"),
            span(&format!("{PPL} {INV}"), "Wiśniewski Piotr"),
            span(&format!("{PPL} {INV}"), "7"),
        ],
        " (przeniesiona na lekcję 6)",
    );
    let lesson = decode(&format!("{current}{old}")).unwrap();
    assert!(lesson.changes);
    assert!(!lesson.canceled);
    assert_eq!(lesson.subject, "Fizyka");
    assert_eq!(lesson.teacher, "Nowak Jan");
    assert_eq!(lesson.room, "12");
    assert_eq!(lesson.subject_old.as_deref(), Some("Chemia"));
    assert_eq!(lesson.teacher_old.as_deref(), Some("Wiśniewski Piotr"));
    assert_eq!(lesson.room_old.as_deref(), Some("7"));
    assert_eq!(lesson.info, "Przeniesiona z lekcji 2, przeniesiona na lekcję 6");
}

#[test]
fn moved_second_block_alone_wins() {
    let first = div(&[span("", "Fizyka"), span("", "12")], "");
    let second = div(&[span(INV, "Chemia"), span(INV, "7")], " (przeniesiona)");
    let lesson = decode(&format!("{first}{second}")).unwrap();
    assert_eq!(lesson.subject, "Chemia");
    assert!(lesson.canceled);
    assert!(!lesson.changes);
    assert_eq!(lesson.subject_old, None);
}

#[test]
fn changed_second_block_is_a_substitution() {
    let first = div(&[span(INV, "Fizyka"), span(INV, "Nowak Jan"), span(INV, "12")], "");
    let second = div(
        &[span(ZAS, "Chemia"), span(ZAS, "Wiśniewski Piotr"), span(ZAS, "7")],
        " (zastępstwo)",
    );
    let lesson = decode(&format!("{first}{second}")).unwrap();
    assert_eq!(lesson.subject, "Chemia");
    assert_eq!(lesson.subject_old.as_deref(), Some("Fizyka"));
    assert_eq!(lesson.teacher_old.as_deref(), Some("Nowak Jan"));
    assert!(lesson.changes);
    assert!(!lesson.canceled);
    assert_eq!(lesson.info, "zastępstwo");
}

#[test]
fn planned_first_block_then_untagged_reads_previously() {
    let first = div(
        &[span(&format!("{PPL} {INV}"), "Fizyka"), span(&format!("{PPL} {INV}"), "12")],
        " (przeniesiona)",
    );
    let second = div(&[span("", "Chemia"), span("", "7")], "");
    let lesson = decode(&format!("{first}{second}")).unwrap();
    assert_eq!(lesson.subject, "Chemia");
    assert_eq!(lesson.room, "7");
    assert_eq!(lesson.subject_old.as_deref(), Some("Fizyka"));
    assert_eq!(lesson.room_old.as_deref(), Some("12"));
    assert_eq!(lesson.info, "Poprzednio: Fizyka (przeniesiona)");
    assert!(lesson.changes);
    assert!(!lesson.canceled);
}

#[test]
fn unknown_classes_still_count_as_untagged() {
    let first = div(
        &[span(&format!("{PPL} {INV}"), "Fizyka"), span(&format!("{PPL} {INV}"), "12")],
        "",
    );
    let second = div(&[span("bold", "Chemia"), span("", "7")], "");
    let lesson = decode(&format!("{first}{second}")).unwrap();
    assert_eq!(lesson.subject, "Chemia");
    assert_eq!(lesson.subject_old.as_deref(), Some("Fizyka"));
    assert_eq!(lesson.info, "Poprzednio: Fizyka ()");
    assert!(lesson.changes);
}

#[test]
fn two_blocks_without_rule_fall_back_to_second() {
    let first = div(&[span("", "Fizyka"), span("", "12")], "");
    let second = div(&[span(RLZ, "Chemia"), span("", "7")], "");
    let lesson = decode(&format!("{first}{second}")).unwrap();
    assert_eq!(lesson.subject, "Chemia");
    assert_eq!(lesson.subject_old, None);
}

#[test]
fn three_blocks_changed_first() {
    let cur = div(&[span(ZAS, "Chemia"), span(ZAS, "Wiśniewski Piotr"), span(ZAS, "7")], "");
    let old = div(&[span(INV, "Fizyka"), span(INV, "Nowak Jan"), span(INV, "12")], "");
    let other = div(&[span(INV, "Biologia"), span(INV, "Kowalska Anna"), span(INV, "104")], "");
    let lesson = decode(&format!("{cur}{old}{other}")).unwrap();
    assert_eq!(lesson.subject, "Chemia");
    assert_eq!(lesson.teacher, "Wiśniewski Piotr");
    assert_eq!(lesson.subject_old.as_deref(), Some("Fizyka"));
    assert_eq!(lesson.room_old.as_deref(), Some("12"));
    assert!(lesson.changes);
    assert!(!lesson.canceled);
}

#[test]
fn three_blocks_changed_last() {
    let old = div(&[span(INV, "Fizyka"), span(INV, "Nowak Jan"), span(INV, "12")], "");
    let mid = div(&[span(INV, "Biologia"), span(INV, "Kowalska Anna"), span(INV, "104")], "");
    let cur = div(&[span(ZAS, "Chemia"), span(ZAS, "Wiśniewski Piotr"), span(ZAS, "7")], "");
    let lesson = decode(&format!("{old}{mid}{cur}")).unwrap();
    assert_eq!(lesson.subject, "Chemia");
    assert_eq!(lesson.subject_old.as_deref(), Some("Fizyka"));
    assert!(lesson.changes);
    assert!(!lesson.canceled);
}

#[test]
fn three_blocks_without_rule_fall_back_to_middle() {
    let a = div(&[span("", "Fizyka"), span("", "12")], "");
    let b = div(&[span("", "Chemia"), span("", "7")], "");
    let c = div(&[span("", "Biologia"), span("", "104")], "");
    let lesson = decode(&format!("{a}{b}{c}")).unwrap();
    assert_eq!(lesson.subject, "Chemia");
}

#[test]
fn replacement_within_one_block() {
    let html = div(
        &[
            span(INV, "Fizyka"), span(INV, "Nowak Jan"), span(INV, "12"),
            span("", "Chemia"), span("", "Wiśniewski Piotr"), span("", "7"),
            span("", "(zastępstwo)"),
        ],
        "",
    );
    let lesson = decode(&html).unwrap();
    assert_eq!(lesson.subject, "Chemia");
    assert_eq!(lesson.teacher, "Wiśniewski Piotr");
    assert_eq!(lesson.room, "7");
    assert_eq!(lesson.subject_old.as_deref(), Some("Fizyka"));
    assert_eq!(lesson.teacher_old.as_deref(), Some("Nowak Jan"));
    assert_eq!(lesson.room_old.as_deref(), Some("12"));
    assert_eq!(lesson.info, "zastępstwo, poprzednio: Fizyka");
    assert!(lesson.changes);
}

#[test]
fn warning_panel_fills_blank_info() {
    let html = format!(
        r#"{}<div class="uwaga-panel">Uwaga: sala zmieniona</div>"#,
        div(&[span("", "Fizyka"), span("", "12")], "")
    );
    let lesson = decode(&html).unwrap();
    assert_eq!(lesson.info, "Uwaga: sala zmieniona");
}

#[test]
fn warning_panel_appends_to_info() {
    let html = format!(
        r#"{}<div class="uwaga-panel">X</div>"#,
        div(&[span("", "Fizyka"), span("", "12")], " (zastępstwo)")
    );
    let lesson = decode(&html).unwrap();
    assert_eq!(lesson.info, "zastępstwo: X");
}

#[test]
fn decoding_is_repeatable() {
    let html = div(&[span(ZAS, "Chemia"), span("", "Wiśniewski Piotr"), span("", "7")], " (zastępstwo)");
    let dec = TimetableDecoder::default();
    let cell = RawCell::new(slot(), html);
    assert_eq!(dec.decode_html(&cell), dec.decode_html(&cell));
}
