// src/specs/timetable.rs
//! Scraping *spec* for the week timetable page.
//!
//! Purpose:
//! - Read a saved week view (`table.presentData`) and cut it into one `RawCell` per
//!   (lesson row × day column), each carrying its slot identity and the cell's inner HTML.
//! - Day dates come from the header cells after the two leading ones ("Lp", "Godziny"):
//!   the last whitespace-separated token, `dd.mm.yyyy`.
//! - Each body row: cell 0 = lesson number, cell 1 = `"HH:MM HH:MM"`, then one cell per day.
//!
//! Non-Responsibilities:
//! - **No fetching.** The caller hands over the page text.
//! - **No lesson decoding.** That's `timetable::TimetableDecoder`; `decode_page` only wires the two.
//!
//! Malformed body rows are logged and skipped; a page whose table or day headers
//! can't be read is an error.

use chrono::{NaiveDate, NaiveTime};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::config::consts::{
    DATE_FORMAT, DAY_HEADER_SELECTOR, LEADING_COLUMNS, ROW_SELECTOR, TABLE_SELECTOR, TIME_FORMAT,
};
use crate::core::sanitize::normalize_ws;
use crate::timetable::{Lesson, RawCell, Slot, TimetableDecoder};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("timetable table not found")]
    MissingTable,
    #[error("bad selector {selector}: {reason}")]
    Selector { selector: &'static str, reason: String },
    #[error("unreadable day header: {0:?}")]
    DayHeader(String),
}

fn selector(css: &'static str) -> Result<Selector, PageError> {
    Selector::parse(css).map_err(|e| PageError::Selector { selector: css, reason: format!("{e:?}") })
}

fn cell_text(el: &ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// "Poniedziałek 01.10.2018" → 2018-10-01
pub fn parse_day_header(text: &str) -> Result<NaiveDate, PageError> {
    let token = text.split_whitespace().last().unwrap_or_default();
    NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|_| PageError::DayHeader(s!(text)))
}

/// "08:00 08:45" → (08:00, 08:45)
pub fn parse_hours(text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let mut parts = text.split_whitespace();
    let start = NaiveTime::parse_from_str(parts.next()?, TIME_FORMAT).ok()?;
    let end = NaiveTime::parse_from_str(parts.next()?, TIME_FORMAT).ok()?;
    Some((start, end))
}

/// Split a week page into cells, row by row, day by day.
pub fn split_page(doc: &str) -> Result<Vec<RawCell<String>>, PageError> {
    let html = Html::parse_document(doc);

    if html.select(&selector(TABLE_SELECTOR)?).next().is_none() {
        return Err(PageError::MissingTable);
    }

    let days = html
        .select(&selector(DAY_HEADER_SELECTOR)?)
        .skip(LEADING_COLUMNS)
        .map(|th| parse_day_header(&cell_text(&th)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut cells = Vec::new();
    for (row_idx, tr) in html.select(&selector(ROW_SELECTOR)?).enumerate() {
        let tds: Vec<ElementRef<'_>> = tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name().eq_ignore_ascii_case("td"))
            .collect();
        if tds.len() < LEADING_COLUMNS {
            logd!("timetable row {row_idx}: {} cells, skipped", tds.len());
            continue;
        }

        let number_text = cell_text(&tds[0]);
        let Ok(number) = number_text.parse::<u32>() else {
            logw!("timetable row {row_idx}: bad lesson number {number_text:?}, skipped");
            continue;
        };
        let hours_text = cell_text(&tds[1]);
        let Some((start, end)) = parse_hours(&hours_text) else {
            logw!("timetable row {row_idx}: bad hours {hours_text:?}, skipped");
            continue;
        };

        let day_cells = &tds[LEADING_COLUMNS..];
        if day_cells.len() > days.len() {
            logw!(
                "timetable row {row_idx}: {} day cells for {} days, extra ignored",
                day_cells.len(),
                days.len()
            );
        }
        for (td, date) in day_cells.iter().zip(&days) {
            let slot = Slot { date: *date, number, start, end };
            cells.push(RawCell::new(slot, td.inner_html()));
        }
    }

    logf!("timetable page: {} days, {} cells", days.len(), cells.len());
    Ok(cells)
}

/// Split and decode a week page. Lessons come back sorted by date, then number.
pub fn decode_page(decoder: &TimetableDecoder, doc: &str) -> Result<Vec<Lesson>, PageError> {
    let cells = split_page(doc)?;
    let mut lessons: Vec<Lesson> = decoder.decode_batch(&cells).into_iter().flatten().collect();
    lessons.sort_by_key(|l| (l.date, l.number));
    Ok(lessons)
}
