//! Date-time patterns in the conventional letter notation (`yyyyMMddHHmmssSSS`).
//!
//! Supported fields:
//!
//! | Letters        | Meaning                                  |
//! |----------------|------------------------------------------|
//! | `y`, `u`       | year (`yy` is the two-digit year)        |
//! | `M`, `L`       | month: `M`/`MM` numeric, `MMM` short, `MMMM` full, `MMMMM` initial |
//! | `d`            | day of month                             |
//! | `D`            | day of year                              |
//! | `E`            | weekday: up to `EEE` short, `EEEE` full, `EEEEE` initial |
//! | `a`            | `AM` / `PM`                              |
//! | `H` / `k`      | hour 0-23 / 1-24                         |
//! | `h` / `K`      | hour 1-12 / 0-11                         |
//! | `m`, `s`       | minute, second                           |
//! | `S`            | fraction of second, truncated to the letter count (max 9) |
//!
//! Text inside single quotes is literal and `''` is a single quote. Other
//! non-letter characters are copied as-is; `[`, `]`, `{`, `}` and `#` are
//! reserved and rejected.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::{Error, Result};
use crate::ports::clock::Clock;

const RESERVED: &[char] = &['[', ']', '{', '}', '#'];

/// Widest year field accepted (`yyyyyyyyyyyyyyyyyyy`).
const MAX_YEAR_LETTERS: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year(usize),
    YearOfCentury,
    Month(usize),
    MonthShort,
    MonthFull,
    MonthInitial,
    DayOfMonth(usize),
    DayOfYear(usize),
    WeekdayShort,
    WeekdayFull,
    WeekdayInitial,
    AmPm,
    Hour0To23(usize),
    Hour1To24(usize),
    Hour1To12(usize),
    Hour0To11(usize),
    Minute(usize),
    Second(usize),
    Fraction(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Literal(String),
    Field(Field),
}

/// A parsed date-time pattern, ready to render any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    items: Vec<Item>,
}

impl DatePattern {
    /// Parses `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormatPattern`] for unknown letters, too many
    /// letters for a field, reserved characters, or an unterminated quote.
    pub fn parse(pattern: &str) -> Result<Self> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c == '\'' {
                i = read_quoted(pattern, &chars, i, &mut literal)?;
            } else if c.is_ascii_alphabetic() {
                let run = chars[i..].iter().take_while(|&&x| x == c).count();
                let field = field_for(pattern, c, run)?;
                if !literal.is_empty() {
                    items.push(Item::Literal(std::mem::take(&mut literal)));
                }
                items.push(Item::Field(field));
                i += run;
            } else if RESERVED.contains(&c) {
                return Err(Error::pattern(pattern, format!("reserved character '{c}'")));
            } else {
                literal.push(c);
                i += 1;
            }
        }
        if !literal.is_empty() {
            items.push(Item::Literal(literal));
        }
        Ok(Self { items })
    }

    /// Renders `at` with this pattern.
    #[must_use]
    pub fn format(&self, at: &NaiveDateTime) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                Item::Literal(text) => out.push_str(text),
                Item::Field(field) => out.push_str(&render_field(*field, at)),
            }
        }
        out
    }
}

/// Renders `at` with `pattern`.
///
/// # Errors
///
/// Returns [`Error::InvalidFormatPattern`] if `pattern` cannot be parsed.
pub fn format(at: &NaiveDateTime, pattern: &str) -> Result<String> {
    Ok(DatePattern::parse(pattern)?.format(at))
}

/// Renders the clock's current time with `pattern`.
///
/// The moment is captured once per call.
///
/// # Errors
///
/// Returns [`Error::InvalidFormatPattern`] if `pattern` cannot be parsed.
pub fn format_now(clock: &dyn Clock, pattern: &str) -> Result<String> {
    let parsed = DatePattern::parse(pattern)?;
    Ok(parsed.format(&clock.now()))
}

/// Consumes a quoted section starting at `start` (the opening quote) and
/// returns the index just past it.
fn read_quoted(pattern: &str, chars: &[char], start: usize, out: &mut String) -> Result<usize> {
    if chars.get(start + 1) == Some(&'\'') {
        out.push('\'');
        return Ok(start + 2);
    }
    let mut i = start + 1;
    while i < chars.len() {
        if chars[i] == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            return Ok(i + 1);
        }
        out.push(chars[i]);
        i += 1;
    }
    Err(Error::pattern(pattern, "unterminated quoted literal"))
}

fn field_for(pattern: &str, letter: char, count: usize) -> Result<Field> {
    let too_many = || Error::pattern(pattern, format!("too many pattern letters: '{letter}'"));
    let field = match letter {
        'y' | 'u' if count == 2 => Field::YearOfCentury,
        'y' | 'u' if count <= MAX_YEAR_LETTERS => Field::Year(count),
        'M' | 'L' => match count {
            1 | 2 => Field::Month(count),
            3 => Field::MonthShort,
            4 => Field::MonthFull,
            5 => Field::MonthInitial,
            _ => return Err(too_many()),
        },
        'E' => match count {
            1..=3 => Field::WeekdayShort,
            4 => Field::WeekdayFull,
            5 => Field::WeekdayInitial,
            _ => return Err(too_many()),
        },
        'a' if count == 1 => Field::AmPm,
        'D' if count <= 3 => Field::DayOfYear(count),
        'd' if count <= 2 => Field::DayOfMonth(count),
        'H' if count <= 2 => Field::Hour0To23(count),
        'k' if count <= 2 => Field::Hour1To24(count),
        'h' if count <= 2 => Field::Hour1To12(count),
        'K' if count <= 2 => Field::Hour0To11(count),
        'm' if count <= 2 => Field::Minute(count),
        's' if count <= 2 => Field::Second(count),
        'S' if count <= 9 => Field::Fraction(count),
        'y' | 'u' | 'a' | 'D' | 'd' | 'H' | 'k' | 'h' | 'K' | 'm' | 's' | 'S' => {
            return Err(too_many())
        }
        _ => {
            return Err(Error::pattern(pattern, format!("unsupported pattern letter '{letter}'")))
        }
    };
    Ok(field)
}

fn render_field(field: Field, at: &NaiveDateTime) -> String {
    let hour = at.hour();
    match field {
        Field::Year(width) => format!("{:0width$}", at.year()),
        Field::YearOfCentury => format!("{:02}", at.year().rem_euclid(100)),
        Field::Month(width) => format!("{:0width$}", at.month()),
        Field::MonthShort => at.format("%b").to_string(),
        Field::MonthFull => at.format("%B").to_string(),
        Field::MonthInitial => at.format("%B").to_string()[..1].to_string(),
        Field::DayOfMonth(width) => format!("{:0width$}", at.day()),
        Field::DayOfYear(width) => format!("{:0width$}", at.ordinal()),
        Field::WeekdayShort => at.format("%a").to_string(),
        Field::WeekdayFull => at.format("%A").to_string(),
        Field::WeekdayInitial => at.format("%A").to_string()[..1].to_string(),
        Field::AmPm => (if hour < 12 { "AM" } else { "PM" }).to_string(),
        Field::Hour0To23(width) => format!("{hour:0width$}"),
        Field::Hour1To24(width) => format!("{:0width$}", if hour == 0 { 24 } else { hour }),
        Field::Hour1To12(width) => {
            let h = hour % 12;
            format!("{:0width$}", if h == 0 { 12 } else { h })
        }
        Field::Hour0To11(width) => format!("{:0width$}", hour % 12),
        Field::Minute(width) => format!("{:0width$}", at.minute()),
        Field::Second(width) => format!("{:0width$}", at.second()),
        Field::Fraction(digits) => {
            let nanos = format!("{:09}", at.nanosecond() % 1_000_000_000);
            nanos[..digits].to_string()
        }
    }
}
