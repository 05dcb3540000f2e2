//! Number formatting helpers built on plural rules and ICU decimal data.

mod number;
mod plural;
mod relative;

pub use icu_decimal::options::GroupingStrategy;
pub use number::format_number;
pub use plural::{NUMBER_PLACEHOLDER, english_ordinal_suffixes, format_cardinal, format_ordinal};
pub use relative::{
    DEFAULT_RELATIVE_TIME_UNITS, RelativeTimeUnit, english_relative_time,
    format_relative_time_sections, relative_time_sections,
};
