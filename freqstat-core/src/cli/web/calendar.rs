use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

/// English month abbreviations as written in access logs.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month number (1-12) for an exact, case-sensitive abbreviation.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|index| index as u32 + 1)
}

/// English short weekday name for a log date, e.g. `Fri` for `10/Jan/2020`.
///
/// Days past the end of the month (or day 0) roll over into the
/// neighbouring month. Returns `None` for an unknown month, fields that are
/// not 32-bit integers, or dates the calendar cannot represent.
pub fn weekday_name(day: &str, month: &str, year: &str) -> Option<&'static str> {
    let month = month_number(month)?;
    let day: i32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_signed(TimeDelta::try_days(i64::from(day) - 1)?)?;

    Some(short_name(date.weekday()))
}

fn short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
