//! Custom date patterns: `yyyy-MM-dd`, `dddd, MMMM d, yyyy` and friends.
//!
//! A pattern is a run of field tokens (repeated letters), placeholders
//! (`/` for the culture's date separator, `:` for the time separator) and
//! literals (quoted text, `\`-escaped characters, anything else). Time
//! fields render the midnight values since a date carries no time of day.

use std::{iter::Peekable, str::Chars};

use chrono::{Datelike, NaiveDate};

use crate::{
    Culture,
    consts::{DATE_SEPARATOR_PLACEHOLDER, ERA_DESIGNATOR, TIME_SEPARATOR},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Day(usize),
    Month(usize),
    Year(usize),
    Era,
    Hour12(usize),
    Hour24(usize),
    Minute(usize),
    Second(usize),
    Fraction(usize),
    TrimmedFraction(usize),
    AmPm(usize),
    DateSeparator,
    TimeSeparator,
    Literal(String),
}

impl Token {
    pub(crate) fn scan(pattern: &str) -> Scanner<'_> {
        Scanner {
            chars: pattern.chars().peekable(),
        }
    }
}

pub(crate) struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Scanner<'_> {
    /// Consumes the rest of a run of `c`, returning the run length.
    fn run_of(&mut self, c: char) -> usize {
        let mut len = 1;
        while self.chars.next_if_eq(&c).is_some() {
            len += 1;
        }
        len
    }

    fn quoted(&mut self, quote: char) -> String {
        let mut text = String::new();
        while let Some(c) = self.chars.next() {
            match c {
                c if c == quote => break,
                '\\' => text.extend(self.chars.next()),
                c => text.push(c),
            }
        }
        text
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.chars.next()?;
        let token = match c {
            'd' => Token::Day(self.run_of(c)),
            'M' => Token::Month(self.run_of(c)),
            'y' => Token::Year(self.run_of(c)),
            'g' => {
                self.run_of(c);
                Token::Era
            }
            'h' => Token::Hour12(self.run_of(c)),
            'H' => Token::Hour24(self.run_of(c)),
            'm' => Token::Minute(self.run_of(c)),
            's' => Token::Second(self.run_of(c)),
            'f' => Token::Fraction(self.run_of(c)),
            'F' => Token::TrimmedFraction(self.run_of(c)),
            't' => Token::AmPm(self.run_of(c)),
            DATE_SEPARATOR_PLACEHOLDER => Token::DateSeparator,
            TIME_SEPARATOR => Token::TimeSeparator,
            '\'' | '"' => Token::Literal(self.quoted(c)),
            '\\' => Token::Literal(self.chars.next().map_or_else(|| c.to_string(), String::from)),
            // `%d` marks a one-character custom pattern; the marker itself renders nothing
            '%' => match self.chars.peek() {
                Some(_) => return self.next(),
                None => Token::Literal(c.to_string()),
            },
            c => Token::Literal(c.to_string()),
        };
        Some(token)
    }
}

/// Renders `date` with a custom pattern under `culture`.
pub(crate) fn render(date: NaiveDate, pattern: &str, culture: &Culture) -> String {
    let names = culture.names();
    let mut out = String::with_capacity(pattern.len() + 8);

    for token in Token::scan(pattern) {
        match token {
            Token::Day(1) => out.push_str(&date.day().to_string()),
            Token::Day(2) => out.push_str(&format!("{:02}", date.day())),
            Token::Day(n) => {
                let weekday = date.weekday().num_days_from_sunday() as usize;
                let table = if n == 3 { &names.abbreviated_days } else { &names.days };
                out.push_str(table[weekday]);
            }
            Token::Month(1) => out.push_str(&date.month().to_string()),
            Token::Month(2) => out.push_str(&format!("{:02}", date.month())),
            Token::Month(n) => {
                let index = date.month0() as usize;
                let table = if n == 3 { &names.abbreviated_months } else { &names.months };
                out.push_str(table[index]);
            }
            Token::Year(1) => out.push_str(&date.year().rem_euclid(100).to_string()),
            Token::Year(2) => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            Token::Year(width) => out.push_str(&padded_year(date.year(), width)),
            Token::Era => out.push_str(ERA_DESIGNATOR),
            Token::Hour12(_) => out.push_str("12"),
            Token::Hour24(1) | Token::Minute(1) | Token::Second(1) => out.push('0'),
            Token::Hour24(n) | Token::Minute(n) | Token::Second(n) => out.push_str(&"0".repeat(n.min(2))),
            Token::Fraction(n) => out.push_str(&"0".repeat(n)),
            Token::TrimmedFraction(_) => {}
            Token::AmPm(1) => out.extend(culture.am_designator().chars().next()),
            Token::AmPm(_) => out.push_str(culture.am_designator()),
            Token::DateSeparator => out.push_str(culture.date_separator()),
            Token::TimeSeparator => out.push(TIME_SEPARATOR),
            Token::Literal(text) => out.push_str(&text),
        }
    }

    out
}

fn padded_year(year: i32, width: usize) -> String {
    if year < 0 {
        format!("-{:0width$}", year.unsigned_abs())
    } else {
        format!("{year:0width$}")
    }
}
