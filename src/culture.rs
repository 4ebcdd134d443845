//! Culture data: the date patterns and calendar names used to format and
//! parse dates for a locale.

use std::{fmt, str::FromStr};

use crate::{FormatError, format::Token};

/// Month and day names for a culture. Days start at Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarNames {
    pub months: [&'static str; 12],
    pub abbreviated_months: [&'static str; 12],
    pub days: [&'static str; 7],
    pub abbreviated_days: [&'static str; 7],
}

/// Order in which day, month and year appear in a culture's numeric dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

/// Formatting and parsing conventions for a locale.
///
/// Patterns use the custom date pattern syntax understood by
/// [`Date::format`](crate::Date::format); `/` in a pattern stands for
/// [`Culture::date_separator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Culture {
    name: &'static str,
    short_date_pattern: &'static str,
    long_date_pattern: &'static str,
    date_separator: &'static str,
    am_designator: &'static str,
    pm_designator: &'static str,
    names: &'static CalendarNames,
}

const ENGLISH_NAMES: CalendarNames = CalendarNames {
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    abbreviated_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    days: ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    abbreviated_days: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
};

const GERMAN_NAMES: CalendarNames = CalendarNames {
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    abbreviated_months: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    days: ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
    abbreviated_days: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
};

const FRENCH_NAMES: CalendarNames = CalendarNames {
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    abbreviated_months: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    days: ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
    abbreviated_days: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
};

const SPANISH_NAMES: CalendarNames = CalendarNames {
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    abbreviated_months: [
        "ene.", "feb.", "mar.", "abr.", "may.", "jun.", "jul.", "ago.", "sept.", "oct.", "nov.",
        "dic.",
    ],
    days: ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"],
    abbreviated_days: ["dom.", "lun.", "mar.", "mié.", "jue.", "vie.", "sáb."],
};

impl Culture {
    /// Culture-neutral conventions, used when the host locale is unknown.
    pub const INVARIANT: Self = Self::new(
        "",
        "MM/dd/yyyy",
        "dddd, dd MMMM yyyy",
        "/",
        ("AM", "PM"),
        &ENGLISH_NAMES,
    );
    /// English (United States)
    pub const EN_US: Self = Self::new(
        "en-US",
        "M/d/yyyy",
        "dddd, MMMM d, yyyy",
        "/",
        ("AM", "PM"),
        &ENGLISH_NAMES,
    );
    /// English (United Kingdom)
    pub const EN_GB: Self = Self::new(
        "en-GB",
        "dd/MM/yyyy",
        "dd MMMM yyyy",
        "/",
        ("am", "pm"),
        &ENGLISH_NAMES,
    );
    /// German (Germany)
    pub const DE_DE: Self = Self::new(
        "de-DE",
        "dd.MM.yyyy",
        "dddd, d. MMMM yyyy",
        ".",
        ("", ""),
        &GERMAN_NAMES,
    );
    /// French (France)
    pub const FR_FR: Self = Self::new(
        "fr-FR",
        "dd/MM/yyyy",
        "dddd d MMMM yyyy",
        "/",
        ("", ""),
        &FRENCH_NAMES,
    );
    /// Spanish (Spain)
    pub const ES_ES: Self = Self::new(
        "es-ES",
        "dd/MM/yyyy",
        "dddd, d 'de' MMMM 'de' yyyy",
        "/",
        ("a. m.", "p. m."),
        &SPANISH_NAMES,
    );

    /// Every culture the crate ships with.
    pub const BUILT_IN: [Self; 6] = [
        Self::INVARIANT,
        Self::EN_US,
        Self::EN_GB,
        Self::DE_DE,
        Self::FR_FR,
        Self::ES_ES,
    ];

    /// Defines a culture. No validation is performed on the patterns.
    ///
    /// `designators` is the (AM, PM) pair; empty strings mean the culture
    /// writes times on a 24-hour clock.
    pub const fn new(
        name: &'static str,
        short_date_pattern: &'static str,
        long_date_pattern: &'static str,
        date_separator: &'static str,
        designators: (&'static str, &'static str),
        names: &'static CalendarNames,
    ) -> Self {
        Self {
            name,
            short_date_pattern,
            long_date_pattern,
            date_separator,
            am_designator: designators.0,
            pm_designator: designators.1,
            names,
        }
    }

    /// Looks up a built-in culture by name.
    ///
    /// Matching is case-insensitive, `_` is accepted in place of `-`, and a
    /// bare language (`"de"`) selects the first culture for that language.
    /// The empty name selects [`Culture::INVARIANT`].
    ///
    /// # Errors
    /// Returns `FormatError::UnknownCulture` if no built-in culture matches.
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        let wanted = name.trim().replace('_', "-");

        if let Some(culture) = Self::BUILT_IN.iter().find(|c| c.name.eq_ignore_ascii_case(&wanted)) {
            return Ok(*culture);
        }

        Self::BUILT_IN
            .iter()
            .filter(|c| !c.name.is_empty())
            .find(|c| c.language().eq_ignore_ascii_case(&wanted))
            .copied()
            .ok_or_else(|| FormatError::UnknownCulture(name.to_owned()))
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Language part of the name (`"de"` for `"de-DE"`)
    pub fn language(&self) -> &'static str {
        self.name.split('-').next().unwrap_or(self.name)
    }

    pub const fn short_date_pattern(&self) -> &'static str {
        self.short_date_pattern
    }

    pub const fn long_date_pattern(&self) -> &'static str {
        self.long_date_pattern
    }

    pub const fn date_separator(&self) -> &'static str {
        self.date_separator
    }

    pub const fn am_designator(&self) -> &'static str {
        self.am_designator
    }

    pub const fn pm_designator(&self) -> &'static str {
        self.pm_designator
    }

    pub const fn names(&self) -> &'static CalendarNames {
        self.names
    }

    /// Field order of the short date pattern, used to read numeric dates.
    pub fn date_order(&self) -> DateOrder {
        let fields: Vec<char> = Token::scan(self.short_date_pattern)
            .filter_map(|token| match token {
                Token::Day(n) if n <= 2 => Some('d'),
                Token::Month(_) => Some('M'),
                Token::Year(_) => Some('y'),
                _ => None,
            })
            .collect();

        match fields.as_slice() {
            ['d', ..] => DateOrder::DayMonthYear,
            ['y', ..] => DateOrder::YearMonthDay,
            _ => DateOrder::MonthDayYear,
        }
    }

    /// 1-based month for a full or abbreviated month name.
    ///
    /// Case is ignored, as is a trailing `.` on either side.
    pub(crate) fn month_from_name(&self, word: &str) -> Option<u32> {
        let word = normalize_word(word);
        self.names
            .months
            .iter()
            .zip(self.names.abbreviated_months.iter())
            .position(|(full, short)| normalize_word(full) == word || normalize_word(short) == word)
            .and_then(|index| u32::try_from(index + 1).ok())
    }

    /// True for day names and for the quoted literals of the long date pattern.
    pub(crate) fn is_ignorable_word(&self, word: &str) -> bool {
        self.is_day_name(word)
            || Token::scan(self.long_date_pattern).any(|token| match token {
                Token::Literal(text) => normalize_word(&text) == normalize_word(word),
                _ => false,
            })
    }

    /// True for day names only.
    pub(crate) fn is_day_name(&self, word: &str) -> bool {
        let word = normalize_word(word);
        self.names
            .days
            .iter()
            .chain(self.names.abbreviated_days.iter())
            .any(|day| normalize_word(day) == word)
    }

    /// How many of the leading `words` spell an AM or PM designator. A
    /// culture's designator may span several words (`p. m.`).
    pub(crate) fn am_pm_designator_len(&self, words: &[&str]) -> Option<usize> {
        ["AM", "PM", "A.M.", "P.M.", self.am_designator, self.pm_designator]
            .into_iter()
            .filter_map(|designator| {
                let parts: Vec<&str> = designator.split_whitespace().collect();
                let matched = !parts.is_empty()
                    && parts.len() <= words.len()
                    && parts
                        .iter()
                        .zip(words)
                        .all(|(part, word)| normalize_word(part) == normalize_word(word));
                matched.then_some(parts.len())
            })
            .max()
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str("(invariant)")
        } else {
            f.write_str(self.name)
        }
    }
}

impl FromStr for Culture {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

fn normalize_word(word: &str) -> String {
    word.trim().trim_end_matches('.').to_lowercase()
}
