use std::str::FromStr;

use crate::{Paginator, error::ParseError};

impl FromStr for Paginator {
    type Err = ParseError;

    // `[epp:<entries_per_page> tot:<total_entries> cur:<current_page>]`
    fn from_str(s: &str) -> Result<Self, ParseError> {
        let inner = s
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| ParseError::MissingBrackets(s.to_owned()))?;

        let mut segments = inner.split(' ');
        let entries_per_page = parse_field(&mut segments, "epp")?;
        let total_entries = parse_field(&mut segments, "tot")?;
        let current_page = parse_field(&mut segments, "cur")?;

        if let Some(segment) = segments.next() {
            return Err(ParseError::UnexpectedField(segment.to_owned()));
        }

        Ok(Self {
            entries_per_page,
            total_entries,
            current_page,
        })
    }
}

/// Parse the next `<key>:<value>` segment, which must have the given key.
fn parse_field<'a>(
    segments: &mut impl Iterator<Item = &'a str>,
    key: &'static str,
) -> Result<i64, ParseError> {
    let value = segments
        .next()
        .and_then(|segment| segment.strip_prefix(key))
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or(ParseError::MissingField(key))?;

    value.parse().map_err(|_| ParseError::InvalidNumber {
        key,
        value: value.to_owned(),
    })
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
