use crate::series::SeriesParseError;
use winnow::{
    ascii::digit1,
    combinator::{cut_err, opt, preceded, separated},
    error::{FromExternalError, ModalResult as GenericModalResult, ParseError, ParserError},
    Parser,
};

type ModalResult<T> = GenericModalResult<T, SeriesParseError>;

impl ParserError<&str> for SeriesParseError {
    type Inner = Self;

    fn from_input(input: &&str) -> Self {
        SeriesParseError::Format(input.to_string())
    }

    fn into_inner(self) -> Result<Self::Inner, Self> {
        Ok(self)
    }
}

impl From<ParseError<&str, SeriesParseError>> for SeriesParseError {
    fn from(e: ParseError<&str, SeriesParseError>) -> Self {
        e.into_inner()
    }
}

impl<E> FromExternalError<&str, E> for SeriesParseError
where
    E: Into<SeriesParseError>,
{
    fn from_external_error(_: &&str, error: E) -> Self {
        error.into()
    }
}

/// Characters the notation is made of, besides the sentinels
pub(crate) fn is_series_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == ','
}

/// One token of the notation: a single value or an inclusive `start-end` range
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct ValueRange {
    pub start: u32,
    pub end: u32,
}

impl ValueRange {
    pub(crate) fn contains(&self, value: u32) -> bool {
        self.start <= value && value <= self.end
    }
}

fn value_range(i: &mut &str) -> ModalResult<ValueRange> {
    (digit1, opt(preceded("-", digit1)))
        .try_map(
            |(start, end): (&str, Option<&str>)| -> Result<ValueRange, SeriesParseError> {
                let s = start.parse::<u32>()?;
                let Some(end) = end else {
                    return Ok(ValueRange { start: s, end: s });
                };
                let e = end.parse::<u32>()?;
                if e < s {
                    return Err(SeriesParseError::Range(format!("{}-{}", start, end)));
                }
                Ok(ValueRange { start: s, end: e })
            },
        )
        .parse_next(i)
}

/// Keep descending-range and overflow reports, everything else is a
/// malformed series
fn structural_error(e: SeriesParseError, input: &str) -> SeriesParseError {
    match e {
        err @ (SeriesParseError::Range(_) | SeriesParseError::Value(_)) => err,
        _ => SeriesParseError::Format(input.to_string()),
    }
}

/// Parses a full comma-separated token list, without materializing the values
pub(crate) fn series_ranges(series: &str) -> Result<Vec<ValueRange>, SeriesParseError> {
    let mut tokens = separated(1.., cut_err(value_range), ",");
    let ranges: Vec<ValueRange> = tokens
        .parse(series)
        .map_err(|e| structural_error(SeriesParseError::from(e), series))?;
    Ok(ranges)
}

/// Parses a single token of the notation
pub(crate) fn range_token(token: &str) -> Result<ValueRange, SeriesParseError> {
    value_range
        .parse(token)
        .map_err(|e| structural_error(SeriesParseError::from(e), token))
}
