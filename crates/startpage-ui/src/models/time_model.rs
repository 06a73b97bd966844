//! Clock and calendar strings in the ru-RU locale.

use chrono::{Datelike, Timelike};

/// Long month names, nominative case, January first
pub const MONTHS: [&str; 12] = [
    "январь",
    "февраль",
    "март",
    "апрель",
    "май",
    "июнь",
    "июль",
    "август",
    "сентябрь",
    "октябрь",
    "ноябрь",
    "декабрь",
];

/// Long weekday names, Monday first
pub const WEEKDAYS: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];

/// Genitive ending for each month
pub const MONTH_ENDINGS: [(&str, &str); 12] = [
    ("январь", "я"),
    ("февраль", "я"),
    ("март", "а"),
    ("апрель", "я"),
    ("май", "я"),
    ("июнь", "я"),
    ("июль", "я"),
    ("август", "а"),
    ("сентябрь", "я"),
    ("октябрь", "я"),
    ("ноябрь", "я"),
    ("декабрь", "я"),
];

const SOFT_ENDINGS: &[char] = &['я', 'ь', 'й'];

/// `"HH:MM:SS"`, 24-hour, zero padded
pub fn format_time<T: Timelike>(t: &T) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

/// `"<day> <month-genitive>, <weekday>"`, e.g. `"3 мая, пятница"`
pub fn format_date<T: Datelike>(t: &T) -> String {
    let month = MONTHS[t.month0() as usize];
    let weekday = WEEKDAYS[t.weekday().num_days_from_monday() as usize];
    format_date_parts(t.day(), month, weekday)
}

pub fn format_date_parts(day: u32, month: &str, weekday: &str) -> String {
    format!("{} {}, {}", day, genitive_month(month), weekday)
}

/// Put a nominative month name into genitive case.
///
/// A final `я`, `ь` or `й` is replaced by the month's ending; consonant
/// endings get it appended. Names outside the table come back unchanged.
pub fn genitive_month(month: &str) -> String {
    let Some(ending) = MONTH_ENDINGS
        .iter()
        .find(|(name, _)| *name == month)
        .map(|(_, ending)| *ending)
    else {
        return month.to_string();
    };

    match month.strip_suffix(SOFT_ENDINGS) {
        Some(stem) => format!("{}{}", stem, ending),
        None => format!("{}{}", month, ending),
    }
}
