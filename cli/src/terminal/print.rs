use std::cell::Cell;
use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub fn print(msg: &str) {
    println!("{msg}");
}

/// Sets the key column width used by [`aligned_line`] to fit the longest of `keys`.
pub fn set_key_width<'a>(keys: impl IntoIterator<Item = &'a str>) {
    let width: usize = keys.into_iter().map(UnicodeWidthStr::width).max().unwrap_or(0);
    KEY_WIDTH.set(width);
}

/// `── ⟦ TITLE ⟧ ──` centred in [`TOTAL_WIDTH`] columns.
pub fn header(title: &str) {
    let (left, label, right) = header_parts(title);
    let line: String = format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        label.color(colors::PRIMARY),
        right.color(colors::SEPARATOR)
    );
    print(&line);
}

fn header_parts(title: &str) -> (String, String, String) {
    let label: String = format!("⟦ {} ⟧", title.to_uppercase());
    let dashes: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(label.as_str()));
    let left: usize = dashes / 2;
    ("─".repeat(left), label, "─".repeat(dashes - left))
}

/// `> key.....: value`, with keys padded to the width set by [`set_key_width`].
///
/// Plain strings are shown in the default text colour; pre-coloured values keep theirs.
pub fn aligned_line(key: &str, value: impl Into<ColoredString>) {
    let value: ColoredString = value.into();
    let value: ColoredString = if value.fgcolor.is_none() {
        value.color(colors::TEXT_DEFAULT)
    } else {
        value
    };

    let dots: String = key_padding(key, KEY_WIDTH.get());
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

fn key_padding(key: &str, width: usize) -> String {
    ".".repeat((width + 1).saturating_sub(UnicodeWidthStr::width(key)))
}

pub fn print_status(msg: impl Display) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg));
}

pub fn end_of_program() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}
