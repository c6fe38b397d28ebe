// benches/decode.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use timetable_scrape::config::DecodeOptions;
use timetable_scrape::specs::timetable::{decode_page, split_page};
use timetable_scrape::TimetableDecoder;

const CELLS: [&str; 4] = [
    "<div><span>Matematyka [gr.2]</span><span>21</span></div>",
    "<div><span>Biologia</span><span>Kowalska Anna</span><span>104</span> (zmiana sali)</div>",
    r#"<div><span class="x-treelabel-inv">Fizyka</span><span class="x-treelabel-inv">Nowak Jan</span><span class="x-treelabel-inv">12</span></div><div><span class="x-treelabel-zas">Chemia</span><span class="x-treelabel-zas">Wiśniewski Piotr</span><span class="x-treelabel-zas">7</span> (zastępstwo)</div>"#,
    "",
];

/// Five days, ten lessons a day, cycling through the cell shapes above.
fn synthetic_week() -> String {
    let mut head = String::from("<th>Lp</th><th>Godziny</th>");
    for d in 1..=5 {
        head.push_str(&format!("<th>Dzień {d:02}.10.2018</th>"));
    }
    let mut body = String::new();
    for n in 1..=10u32 {
        body.push_str(&format!("<tr><td>{n}</td><td>{:02}:00 {:02}:45</td>", 7 + n, 7 + n));
        for d in 0..5 {
            body.push_str(&format!("<td>{}</td>", CELLS[(n as usize + d) % CELLS.len()]));
        }
        body.push_str("</tr>");
    }
    format!(r#"<table class="presentData"><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>"#)
}

fn bench_decode(c: &mut Criterion) {
    let doc = synthetic_week();
    let cells = split_page(&doc).unwrap_or_default();
    let single = TimetableDecoder::new(DecodeOptions::default().with_workers(1));
    let pooled = TimetableDecoder::default();

    c.bench_function("split_page", |b| {
        b.iter(|| black_box(split_page(black_box(&doc)).map(|c| c.len())))
    });

    c.bench_function("decode_cells_serial", |b| {
        b.iter(|| {
            let n = cells.iter().filter_map(|c| single.decode_html(black_box(c))).count();
            black_box(n)
        })
    });

    c.bench_function("decode_batch_pooled", |b| {
        b.iter(|| black_box(pooled.decode_batch(black_box(&cells)).len()))
    });

    c.bench_function("decode_page", |b| {
        b.iter(|| black_box(decode_page(&pooled, black_box(&doc)).map(|l| l.len())))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
