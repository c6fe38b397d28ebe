// src/config/consts.rs

// Role-tag classes on lesson markers
pub const CLASS_PLANNED: &str = "x-treelabel-ppl";
pub const CLASS_REALIZED: &str = "x-treelabel-rlz";
pub const CLASS_CHANGED: &str = "x-treelabel-zas";
pub const CLASS_MOVED_OR_CANCELED: &str = "x-treelabel-inv";

// Cell furniture
pub const CLASS_WARNING_PANEL: &str = "uwaga-panel";

// Info text
pub const BOILERPLATE_PHRASES: &[&str] = &["okienko dla uczniów", "zmiana organizacji zajęć"];
pub const PREVIOUSLY_LABEL: &str = "poprzednio";

// Week page
pub const TABLE_SELECTOR: &str = "table.presentData";
pub const DAY_HEADER_SELECTOR: &str = "table.presentData thead th";
pub const ROW_SELECTOR: &str = "table.presentData tbody tr";
pub const LEADING_COLUMNS: usize = 2; // number, hours
pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const TIME_FORMAT: &str = "%H:%M";

// Concurrency
pub const WORKERS: usize = 4;
