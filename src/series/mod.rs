pub(crate) mod parsers;

use crate::IntSet;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when parsing or editing series notation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeriesParseError {
    /// The string contains characters outside `[0-9\-,]` and is not one of
    /// the `ALL`/`NONE`/`""` sentinels, or a token does not match the
    /// `N`/`N-M` grammar
    #[error("invalid series '{0}'")]
    Format(String),
    /// A range token is descending (`9-7`)
    #[error("invalid range '{0}'")]
    Range(String),
    /// A token value does not fit the id type
    #[error("unable to parse value: {0}")]
    Value(#[from] std::num::ParseIntError),
    /// The `ALL` sentinel cannot be materialized without a maximum value
    #[error("cannot materialize 'ALL' without a maximum value")]
    Unbounded,
}

/// A set of non-negative integers described by series notation
///
/// The notation string (`"1,3,5-10"`, `"ALL"`, `"NONE"`/`""`) is only the
/// serialization boundary: parsing yields one of these variants and every
/// operation works on the variant, not on the string.
///
/// `All` stands for every integer from 0 up to an externally supplied
/// maximum. The bound is not part of the value, so operations that need to
/// materialize it take it as an argument.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum IntSeries {
    #[default]
    Empty,
    All,
    Set(IntSet),
}

impl IntSeries {
    /// Returns whether the series contains the given value
    pub fn contains(&self, value: u32) -> bool {
        match self {
            IntSeries::Empty => false,
            IntSeries::All => true,
            IntSeries::Set(set) => set.contains(value),
        }
    }

    /// Returns whether both series share at least one value
    ///
    /// The empty series intersects nothing, `All` included: the `Empty`
    /// check comes first.
    pub fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (IntSeries::Empty, _) | (_, IntSeries::Empty) => false,
            (IntSeries::All, _) | (_, IntSeries::All) => true,
            (IntSeries::Set(set), IntSeries::Set(oset)) => set.intersects(oset),
        }
    }

    /// Adds a value to the series. Adding to `All` is a no-op.
    pub fn insert(&mut self, value: u32) {
        match self {
            IntSeries::Empty => *self = IntSeries::Set(IntSet::from(value)),
            IntSeries::All => {}
            IntSeries::Set(set) => {
                set.insert(value);
            }
        }
    }

    /// Removes a value from the series, materializing `All` up to
    /// `max_value`. A set emptied by the removal becomes `Empty`.
    pub fn remove(&mut self, max_value: u32, value: u32) {
        match self {
            IntSeries::Empty => {}
            IntSeries::All => {
                let mut set = self.materialize(max_value);
                set.remove(value);
                *self = IntSeries::Set(set);
            }
            IntSeries::Set(set) => {
                set.remove(value);
                if set.is_empty() {
                    *self = IntSeries::Empty;
                }
            }
        }
    }

    /// Converts the series into an explicit set, expanding `All` to
    /// `0..=max_value`
    pub fn materialize(&self, max_value: u32) -> IntSet {
        match self {
            IntSeries::Empty => IntSet::new(),
            IntSeries::All => (0..=max_value).collect(),
            IntSeries::Set(set) => set.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, IntSeries::Empty)
    }
}

impl FromStr for IntSeries {
    type Err = SeriesParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;
        if is_none_sentinel(s) {
            return Ok(IntSeries::Empty);
        }
        if is_all_sentinel(s) {
            return Ok(IntSeries::All);
        }

        let mut set = IntSet::new();
        for range in parsers::series_ranges(s)? {
            set.push_range(&range);
        }
        Ok(IntSeries::Set(set))
    }
}

impl fmt::Display for IntSeries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntSeries::Empty => f.write_str("NONE"),
            IntSeries::All => f.write_str("ALL"),
            IntSeries::Set(set) => write!(f, "{}", set),
        }
    }
}

impl Serialize for IntSeries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IntSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

fn is_none_sentinel(series: &str) -> bool {
    series.is_empty() || series.eq_ignore_ascii_case("none")
}

fn is_all_sentinel(series: &str) -> bool {
    series.eq_ignore_ascii_case("all")
}

/// Checks that a string is well-formed series notation
///
/// The check is purely lexical: the string must be made of digits, `-` and
/// `,` only, or case-insensitively equal `ALL`, `NONE` or the empty string.
/// A descending range such as `"9-7"` passes and only fails once a token is
/// actually used.
pub fn validate(series: &str) -> Result<(), SeriesParseError> {
    if series.chars().all(parsers::is_series_char)
        || is_all_sentinel(series)
        || series.eq_ignore_ascii_case("none")
    {
        return Ok(());
    }
    Err(SeriesParseError::Format(series.to_string()))
}

/// Materializes a series into its set of values
///
/// `"NONE"` and `""` yield the empty set. The `"ALL"` sentinel is not
/// supported here: materializing it needs a maximum value, so callers must
/// substitute `0-max` beforehand (as [`remove_value`] does) or use
/// [`IntSeries::materialize`].
///
/// # Examples
///
/// ```rust
/// let set = intseries::to_set("0-5,10").unwrap();
/// assert_eq!(set.len(), 7);
/// assert!(set.contains(3));
/// ```
pub fn to_set(series: &str) -> Result<IntSet, SeriesParseError> {
    match series.parse::<IntSeries>()? {
        IntSeries::Empty => Ok(IntSet::new()),
        IntSeries::All => Err(SeriesParseError::Unbounded),
        IntSeries::Set(set) => Ok(set),
    }
}

/// Renders any finite collection of values as canonical series notation
///
/// Duplicates and input order are immaterial. The empty collection renders
/// as the empty string.
///
/// # Examples
///
/// ```rust
/// assert_eq!(intseries::to_series([0, 1, 2, 3, 4, 50, 52]), "0-4,50,52");
/// ```
pub fn to_series<I>(values: I) -> String
where
    I: IntoIterator<Item = u32>,
{
    values.into_iter().collect::<IntSet>().to_string()
}

/// Returns the series with `value` added, in canonical notation
///
/// Adding to `"ALL"` returns the series unchanged.
pub fn add_value(series: &str, value: u32) -> Result<String, SeriesParseError> {
    let mut set = match series.parse::<IntSeries>()? {
        IntSeries::All => return Ok(series.to_string()),
        IntSeries::Empty => IntSet::new(),
        IntSeries::Set(set) => set,
    };
    set.insert(value);
    Ok(set.to_string())
}

/// Returns the series with `value` removed, in canonical notation
///
/// A missing series defaults to `"NONE"`, and `"NONE"` is returned
/// unchanged. `"ALL"` is first substituted with `0-max_value`; `max_value`
/// is not consulted otherwise. Removing an absent value is not an error.
pub fn remove_value(
    max_value: u32,
    series: Option<&str>,
    value: u32,
) -> Result<String, SeriesParseError> {
    let series = series.unwrap_or("NONE");
    validate(series)?;
    if series.eq_ignore_ascii_case("none") {
        return Ok(series.to_string());
    }

    let mut set = if is_all_sentinel(series) {
        to_set(&format!("0-{}", max_value))?
    } else {
        to_set(series)?
    };
    set.remove(value);
    Ok(set.to_string())
}

/// Returns whether the series contains the given value
///
/// Tokens are scanned left to right without materializing the set, so the
/// cost is bounded by the number of tokens, not by the width of the ranges.
/// The scan short-circuits on the first matching token; a descending token
/// reached before a match fails with [`SeriesParseError::Range`].
pub fn has(series: &str, value: u32) -> Result<bool, SeriesParseError> {
    validate(series)?;
    if is_all_sentinel(series) {
        return Ok(true);
    }
    if is_none_sentinel(series) {
        return Ok(false);
    }

    for token in series.split(',') {
        if parsers::range_token(token)?.contains(value) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns whether two series share at least one value
///
/// An empty series (`"NONE"`/`""`) overlaps nothing, even `"ALL"`: the
/// empty check comes first. Sentinels are decided before any token is
/// parsed, so a descending range in the other argument is never reached.
pub fn overlap(first: &str, second: &str) -> Result<bool, SeriesParseError> {
    validate(first)?;
    validate(second)?;
    if is_none_sentinel(first) || is_none_sentinel(second) {
        return Ok(false);
    }
    if is_all_sentinel(first) || is_all_sentinel(second) {
        return Ok(true);
    }
    Ok(to_set(first)?.intersects(&to_set(second)?))
}
