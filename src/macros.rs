// src/macros.rs

/// `String` shorthand.
///
/// `s!()` is an empty string, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String`.
///
/// ```
/// use timetable_scrape::join;
/// assert_eq!(join!("Matematyka", ", ", "poprzednio"), "Matematyka, poprzednio");
/// ```
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}
