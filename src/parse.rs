//! Lenient, culture-aware reading of date strings.
//!
//! Accepts numeric dates in the culture's field order (`6/8/2011`,
//! `08.06.2011`), ISO dates (`2011-06-08`), dates with month and day names
//! (`Wednesday, June 8, 2011`) and an optional trailing time of day, which is
//! validated and then discarded.

use tracing::trace;

use crate::{
    Culture, Date, DateOrder, FormatError,
    consts::{ISO_TIME_DESIGNATOR, TIME_SEPARATOR, TWO_DIGIT_YEAR_MAX},
};

const MINUS_SIGN: char = '-';
const SEPARATORS: &[char] = &[MINUS_SIGN, '/', '.', ','];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece<'a> {
    Number(&'a str),
    Word(&'a str),
    Colon,
}

/// Parses `input` as a date under `culture`.
pub(crate) fn parse(input: &str, culture: &Culture) -> Result<Date, FormatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormatError::EmptyInput);
    }

    let unrecognized = || {
        trace!(input, culture = %culture, "rejected date string");
        FormatError::Unrecognized {
            input: input.to_owned(),
            culture: culture.name(),
        }
    };

    let pieces = split(trimmed, culture).ok_or_else(unrecognized)?;
    let fields = Fields::collect(&pieces, culture).ok_or_else(unrecognized)?;
    let (year, month, day) = fields.arrange(culture).ok_or_else(unrecognized)?;

    Date::from_components(year, month, day).map_err(|source| {
        trace!(input, culture = %culture, %source, "date string names no calendar date");
        FormatError::InvalidDate {
            input: input.to_owned(),
            source,
        }
    })
}

/// Breaks the input into digit runs, letter runs and colons, dropping
/// separators. Returns `None` on any other character.
///
/// A `-` at the start or after a separator that runs straight into a digit
/// is a minus sign and stays on the number.
fn split<'a>(input: &'a str, culture: &Culture) -> Option<Vec<Piece<'a>>> {
    let mut pieces = Vec::new();
    let mut rest = input;
    let mut previous: Option<char> = None;

    while let Some(c) = rest.chars().next() {
        let signed = c == MINUS_SIGN
            && rest[1..].starts_with(|ch: char| ch.is_ascii_digit())
            && !previous.is_some_and(char::is_alphanumeric);

        let len = if c.is_ascii_digit() || signed {
            let start = usize::from(signed);
            let len = rest[start..]
                .find(|ch: char| !ch.is_ascii_digit())
                .map_or(rest.len(), |end| start + end);
            pieces.push(Piece::Number(&rest[..len]));
            len
        } else if c.is_alphabetic() {
            let len = rest
                .find(|ch: char| !(ch.is_alphabetic() || ch == '.'))
                .unwrap_or(rest.len());
            pieces.push(Piece::Word(&rest[..len]));
            len
        } else if c == TIME_SEPARATOR {
            pieces.push(Piece::Colon);
            c.len_utf8()
        } else if c.is_whitespace() || SEPARATORS.contains(&c) || culture.date_separator().contains(c) {
            c.len_utf8()
        } else {
            return None;
        };
        previous = rest[..len].chars().next_back();
        rest = &rest[len..];
    }

    Some(pieces)
}

#[derive(Debug, Default)]
struct Fields<'a> {
    numbers: Vec<&'a str>,
    month_name: Option<u32>,
    // The month came from a word that is also a day name (es `mar.`).
    month_is_day_name: bool,
}

impl<'a> Fields<'a> {
    fn collect(pieces: &[Piece<'a>], culture: &Culture) -> Option<Self> {
        let mut fields = Self::default();
        let mut hour = None;
        let mut saw_designator = false;
        let mut index = 0;

        while index < pieces.len() {
            match pieces[index] {
                Piece::Number(_) if pieces.get(index + 1) == Some(&Piece::Colon) => {
                    if hour.is_some() {
                        return None;
                    }
                    let (len, value) = read_time(&pieces[index..])?;
                    hour = Some(value);
                    index += len;
                    continue;
                }
                Piece::Number(text) => fields.numbers.push(text),
                Piece::Word(word) => {
                    if let Some(month) = culture.month_from_name(word) {
                        let day_name = culture.is_day_name(word);
                        if fields.month_name.is_none() || fields.month_is_day_name {
                            fields.month_name = Some(month);
                            fields.month_is_day_name = day_name;
                        } else if !day_name {
                            return None;
                        }
                    } else if is_time_designator(word) {
                        if !matches!(pieces.get(index + 1..index + 3), Some([Piece::Number(_), Piece::Colon])) {
                            return None;
                        }
                    } else if let Some(len) = culture.am_pm_designator_len(&words_from(&pieces[index..])) {
                        if saw_designator || !hour.is_some_and(|hour| hour <= 12) {
                            return None;
                        }
                        saw_designator = true;
                        index += len;
                        continue;
                    } else if !culture.is_ignorable_word(word) {
                        return None;
                    }
                }
                Piece::Colon => return None,
            }
            index += 1;
        }

        Some(fields)
    }

    /// Orders the collected fields into (year, month, day).
    fn arrange(&self, culture: &Culture) -> Option<(i32, u32, u32)> {
        // A day name that doubles as a month abbreviation next to a full
        // numeric date names no month.
        let month_name = self
            .month_name
            .filter(|_| !(self.month_is_day_name && self.numbers.len() == 3));
        let (year, month, day) = match (month_name, self.numbers.as_slice()) {
            (Some(month), &[first, second]) => {
                if is_leading_year(first) {
                    (first, month, second)
                } else {
                    (second, month, first)
                }
            }
            (None, &[first, second, third]) => {
                let order = if is_leading_year(first) {
                    DateOrder::YearMonthDay
                } else {
                    culture.date_order()
                };
                let (year, month, day) = match order {
                    DateOrder::MonthDayYear => (third, first, second),
                    DateOrder::DayMonthYear => (third, second, first),
                    DateOrder::YearMonthDay => (first, second, third),
                };
                (year, month.parse::<u32>().ok()?, day)
            }
            _ => return None,
        };

        Some((parse_year(year)?, month, day.parse().ok()?))
    }
}

/// A first field that can only be a year: signed, or three digits or more.
fn is_leading_year(field: &str) -> bool {
    field.starts_with(MINUS_SIGN) || field.len() >= 3
}

fn words_from<'a>(pieces: &[Piece<'a>]) -> Vec<&'a str> {
    pieces
        .iter()
        .map_while(|piece| match piece {
            Piece::Word(word) => Some(*word),
            _ => None,
        })
        .collect()
}

fn is_time_designator(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next() == Some(ISO_TIME_DESIGNATOR) && chars.next().is_none()
}

/// Validates `H:mm` or `H:mm:ss` at the start of `pieces`, returning how many
/// pieces it spans and the hour.
fn read_time(pieces: &[Piece<'_>]) -> Option<(usize, u32)> {
    let (hour, minute, second, len) = match pieces {
        [Piece::Number(h), Piece::Colon, Piece::Number(m), Piece::Colon, Piece::Number(s), ..] => {
            (*h, *m, Some(*s), 5)
        }
        [Piece::Number(h), Piece::Colon, Piece::Number(m), ..] => (*h, *m, None, 3),
        _ => return None,
    };

    let in_range = |text: &str, limit: u32| text.parse::<u32>().ok().filter(|value| *value < limit);
    let hour = in_range(hour, 24)?;
    in_range(minute, 60)?;
    if let Some(second) = second {
        in_range(second, 60)?;
    }

    Some((len, hour))
}

/// Reads a year field; unsigned one- and two-digit years land in the
/// hundred years ending at [`TWO_DIGIT_YEAR_MAX`].
fn parse_year(text: &str) -> Option<i32> {
    let year: i32 = text.parse().ok()?;
    if text.starts_with(MINUS_SIGN) || text.len() > 2 {
        return Some(year);
    }

    let candidate = TWO_DIGIT_YEAR_MAX - TWO_DIGIT_YEAR_MAX.rem_euclid(100) + year;
    Some(if candidate > TWO_DIGIT_YEAR_MAX { candidate - 100 } else { candidate })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RangeError, test_utils::date};

    #[test]
    fn test_parse_cases() {
        struct TestCase {
            input: &'static str,
            culture: Culture,
            expected: (i32, u32, u32),
        }

        let cases = [
            TestCase {
                input: "10-31-99",
                culture: Culture::EN_US,
                expected: (1999, 10, 31),
            },
            TestCase {
                input: "6/8/2011",
                culture: Culture::EN_US,
                expected: (2011, 6, 8),
            },
            TestCase {
                input: "08/06/2011",
                culture: Culture::EN_GB,
                expected: (2011, 6, 8),
            },
            TestCase {
                input: "08.06.2011",
                culture: Culture::DE_DE,
                expected: (2011, 6, 8),
            },
            TestCase {
                input: "2011-06-30",
                culture: Culture::DE_DE,
                expected: (2011, 6, 30),
            },
            TestCase {
                input: "Wednesday, June 8, 2011",
                culture: Culture::EN_US,
                expected: (2011, 6, 8),
            },
            TestCase {
                input: "8 June 2011",
                culture: Culture::EN_GB,
                expected: (2011, 6, 8),
            },
            TestCase {
                input: "Mittwoch, 8. Juni 2011",
                culture: Culture::DE_DE,
                expected: (2011, 6, 8),
            },
            TestCase {
                input: "miércoles, 8 de junio de 2011",
                culture: Culture::ES_ES,
                expected: (2011, 6, 8),
            },
            TestCase {
                input: "2011 Jun 8",
                culture: Culture::EN_US,
                expected: (2011, 6, 8),
            },
            TestCase {
                input: "2011-06-30T13:45:10",
                culture: Culture::INVARIANT,
                expected: (2011, 6, 30),
            },
            TestCase {
                input: "6/30/2011 1:45 PM",
                culture: Culture::EN_US,
                expected: (2011, 6, 30),
            },
            TestCase {
                input: "  1/2/30  ",
                culture: Culture::EN_US,
                expected: (1930, 1, 2),
            },
            TestCase {
                input: "1/2/29",
                culture: Culture::EN_US,
                expected: (2029, 1, 2),
            },
            TestCase {
                input: "3/15/-0044",
                culture: Culture::EN_US,
                expected: (-44, 3, 15),
            },
            TestCase {
                input: "15.03.-44",
                culture: Culture::DE_DE,
                expected: (-44, 3, 15),
            },
            TestCase {
                input: "-0044-03-15",
                culture: Culture::INVARIANT,
                expected: (-44, 3, 15),
            },
            TestCase {
                input: "6/30/2011 12:45 PM",
                culture: Culture::EN_US,
                expected: (2011, 6, 30),
            },
            TestCase {
                input: "30/06/2011 1:45 p. m.",
                culture: Culture::ES_ES,
                expected: (2011, 6, 30),
            },
            TestCase {
                input: "30/06/2011 9:05 a. m.",
                culture: Culture::ES_ES,
                expected: (2011, 6, 30),
            },
            TestCase {
                input: "mar., 8 de junio de 2011",
                culture: Culture::ES_ES,
                expected: (2011, 6, 8),
            },
            TestCase {
                input: "8 de mar. de 2011",
                culture: Culture::ES_ES,
                expected: (2011, 3, 8),
            },
            TestCase {
                input: "mar., 08/06/2011",
                culture: Culture::ES_ES,
                expected: (2011, 6, 8),
            },
        ];

        for case in &cases {
            let (y, m, d) = case.expected;
            assert_eq!(
                parse(case.input, &case.culture),
                Ok(date(y, m, d)),
                "input {:?} under {}",
                case.input,
                case.culture
            );
        }
    }

    #[test]
    fn test_day_first_culture_rejects_month_first_text() {
        let result = parse("10-31-99", &Culture::EN_GB);
        assert_eq!(
            result,
            Err(FormatError::InvalidDate {
                input: "10-31-99".to_owned(),
                source: RangeError::InvalidMonth(31),
            })
        );
    }

    #[test]
    fn test_non_leap_year_rejected() {
        for culture in Culture::BUILT_IN {
            let result = parse("2011-02-29", &culture);
            assert!(
                matches!(result, Err(FormatError::InvalidDate { .. })),
                "2011-02-29 should fail under {culture}"
            );
        }
    }

    #[test]
    fn test_unrecognized_inputs() {
        let inputs = [
            "not a date",
            "2011-06",
            "2011-06-30-01",
            "June 2011",
            "June July 8 2011",
            "6/8/2011 #",
            "6/8/2011 25:00",
            "6/8/2011 PM",
            "6/8/2011 10:00 11:00",
            "Juni 8 2011",
            "6/30/2011 13:45 PM",
            "6/30/2011 1:45 PM PM",
            "PM 6/30/2011 1:45",
            "6/-30/2011",
            "6/30/2011 -1:45",
        ];

        for input in inputs {
            assert!(
                matches!(parse(input, &Culture::EN_US), Err(FormatError::Unrecognized { .. })),
                "{input:?} should be unrecognized"
            );
        }
    }

    #[test]
    fn test_negative_years_read_back() {
        for culture in Culture::BUILT_IN {
            for expected in [date(-44, 3, 15), date(-1, 12, 31), Date::EMPTY, Date::MAX] {
                for text in [
                    expected.to_short_date_string_in(&culture),
                    expected.to_long_date_string_in(&culture),
                    expected.format(Some("yyyy-MM-dd"), Some(&culture)),
                ] {
                    assert_eq!(parse(&text, &culture), Ok(expected), "{text:?} under {culture}");
                }
            }
        }
    }

    #[test]
    fn test_designator_needs_twelve_hour_clock() {
        assert!(parse("30/06/2011 13:45 p. m.", &Culture::ES_ES).is_err());
        assert!(parse("30/06/2011 0:45", &Culture::ES_ES).is_ok());
        assert!(parse("30/06/2011 p. m.", &Culture::ES_ES).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("   ", &Culture::EN_US), Err(FormatError::EmptyInput));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("99"), Some(1999));
        assert_eq!(parse_year("30"), Some(1930));
        assert_eq!(parse_year("29"), Some(2029));
        assert_eq!(parse_year("5"), Some(2005));
        assert_eq!(parse_year("099"), Some(99));
        assert_eq!(parse_year("2011"), Some(2011));
        assert_eq!(parse_year("-5"), Some(-5));
        assert_eq!(parse_year("-0044"), Some(-44));
    }
}
