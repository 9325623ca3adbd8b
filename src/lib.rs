#![doc = include_str!("../README.md")]
mod intset;
mod series;

pub use intset::IntSet;
pub use series::add_value;
pub use series::has;
pub use series::overlap;
pub use series::remove_value;
pub use series::to_series;
pub use series::to_set;
pub use series::validate;
pub use series::IntSeries;
pub use series::SeriesParseError;
