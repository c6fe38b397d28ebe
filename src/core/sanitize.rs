// src/core/sanitize.rs

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Remove one `(` prefix and one `)` suffix, only when both are present.
/// `"(zastępstwo)"` → `"zastępstwo"`, `"(a"` stays as is.
pub fn strip_parens(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Upper-case the first character, leave the rest alone.
pub fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

/// Drop site boilerplate from an info line, then the separator debris it leaves:
/// every `" ,"` and one leading `", "`.
pub fn strip_boilerplate<S: AsRef<str>>(info: &str, phrases: &[S]) -> String {
    let mut out = s!(info);
    for phrase in phrases {
        let phrase = phrase.as_ref();
        if !phrase.is_empty() {
            out = out.replace(phrase, "");
        }
    }
    out = out.replace(" ,", "");
    match out.strip_prefix(", ") {
        Some(rest) => s!(rest),
        None => out,
    }
}
