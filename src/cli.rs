// src/cli.rs
// Offline decoder for saved week pages. Prints one line per lesson.
use std::{env, fs, path::PathBuf};

use chrono::NaiveDate;

use crate::config::DecodeOptions;
use crate::specs::timetable::decode_page;
use crate::timetable::{Lesson, TimetableDecoder};

pub struct Params {
    pub page: PathBuf,
    pub day: Option<NaiveDate>,
    pub changes_only: bool,
    pub workers: Option<usize>,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli(env::args().skip(1))?;

    let doc = fs::read_to_string(&params.page)?;
    let mut opts = DecodeOptions::default();
    if let Some(w) = params.workers {
        opts = opts.with_workers(w);
    }
    let decoder = TimetableDecoder::new(opts);

    let lessons = decode_page(&decoder, &doc)
        .inspect_err(|e| loge!("{}: {e}", params.page.display()))?;
    for lesson in lessons.iter().filter(|l| keep(&params, l)) {
        println!("{}", render(lesson));
    }
    Ok(())
}

fn keep(params: &Params, lesson: &Lesson) -> bool {
    params.day.is_none_or(|d| d == lesson.date) && (!params.changes_only || lesson.changes || lesson.canceled)
}

pub fn parse_cli<I: Iterator<Item = String>>(mut args: I) -> Result<Params, Box<dyn std::error::Error>> {
    let mut page = None;
    let mut day = None;
    let mut changes_only = false;
    let mut workers = None;

    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--day" => {
                let v = args.next().ok_or("Missing value for --day")?;
                day = Some(NaiveDate::parse_from_str(&v, "%Y-%m-%d")?);
            }
            "-c" | "--changes-only" => changes_only = true,
            "-j" | "--workers" => {
                let v: usize = args.next().ok_or("Missing value for --workers")?.parse()?;
                workers = Some(v);
            }
            "-h" | "--help" => {
                eprintln!("Usage: cli <page.html> [--day YYYY-MM-DD] [--changes-only] [--workers N]");
                std::process::exit(0);
            }
            other if other.starts_with('-') => return Err(format!("Unknown arg: {other}").into()),
            path => {
                if page.is_some() {
                    return Err(format!("Unexpected extra path: {path}").into());
                }
                page = Some(PathBuf::from(path));
            }
        }
    }

    let page = page.ok_or("Missing page path")?;
    Ok(Params { page, day, changes_only, workers })
}

/// `2018-10-01 #3 09:50-10:35 | Fizyka [gr.1] | Nowak Jan | 12 | info [canceled] (was: ...)`
pub fn render(l: &Lesson) -> String {
    let mut line = format!(
        "{} #{} {}-{} | {}",
        l.date,
        l.number,
        l.start.format("%H:%M"),
        l.end.format("%H:%M"),
        l.subject
    );
    if !l.group.is_empty() {
        line.push_str(&format!(" [{}]", l.group));
    }
    line.push_str(&join!(" | ", &l.teacher, " | ", &l.room));
    if !l.info.is_empty() {
        line.push_str(&join!(" | ", &l.info));
    }
    if l.canceled {
        line.push_str(" [canceled]");
    }
    if l.changes {
        line.push_str(" [changed]");
    }
    if let Some(old) = &l.subject_old {
        let teacher = l.teacher_old.as_deref().unwrap_or_default();
        let room = l.room_old.as_deref().unwrap_or_default();
        line.push_str(&format!(" (was: {old} | {teacher} | {room})"));
    }
    line
}
