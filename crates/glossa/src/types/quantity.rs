use std::fmt::{Display, Formatter, Result as FmtResult};
use std::num::ParseFloatError;
use std::str::FromStr;

use fixed_decimal::Decimal;
use icu_plurals::PluralOperands;
use serde::{Deserialize, Serialize};

/// A count used for plural selection and the `{{quantity}}` placeholder.
///
/// Integers and fractions select plural forms differently: French treats
/// `1.5` as `one`, English treats it as `other`.
///
/// # Example
///
/// ```
/// use glossa::Quantity;
///
/// assert_eq!(Quantity::from(3).to_string(), "3");
/// assert_eq!(Quantity::from(1.5).to_string(), "1.5");
/// assert_eq!(Quantity::from(2.0).to_string(), "2");
/// assert_eq!("0.25".parse::<Quantity>().unwrap(), Quantity::Fraction(0.25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// A whole number.
    Integer(i64),

    /// A number that may have a fractional part.
    Fraction(f64),
}

impl Quantity {
    /// Whether this quantity is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Quantity::Integer(n) => *n == 0,
            Quantity::Fraction(n) => *n == 0.0,
        }
    }

    /// This quantity as a float.
    pub fn as_f64(&self) -> f64 {
        match self {
            Quantity::Integer(n) => *n as f64,
            Quantity::Fraction(n) => *n,
        }
    }

    /// CLDR plural operands, or `None` for a non-finite fraction.
    ///
    /// Fractions go through their shortest decimal representation, so `1.5`
    /// has one visible fraction digit and `2.0` has none.
    pub fn operands(&self) -> Option<PluralOperands> {
        match self {
            Quantity::Integer(n) => Some(PluralOperands::from(*n)),
            Quantity::Fraction(n) => Decimal::try_from_str(&n.to_string())
                .ok()
                .map(|decimal| PluralOperands::from(&decimal)),
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Quantity::Integer(n) => write!(f, "{n}"),
            Quantity::Fraction(n) if n.is_infinite() => {
                let sign = if n.is_sign_negative() { "-" } else { "" };
                write!(f, "{sign}Infinity")
            }
            Quantity::Fraction(n) if *n == 0.0 => f.write_str("0"),
            Quantity::Fraction(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Quantity {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(n) => Ok(Quantity::Integer(n)),
            Err(_) => s.parse::<f64>().map(Quantity::Fraction),
        }
    }
}

macro_rules! quantity_from_integer {
    ($($ty:ty)+) => {
        $(impl From<$ty> for Quantity {
            fn from(n: $ty) -> Self {
                Quantity::Integer(i64::from(n))
            }
        })+
    };
}

quantity_from_integer!(i8 i16 i32 i64 u8 u16 u32);

impl From<f64> for Quantity {
    fn from(n: f64) -> Self {
        Quantity::Fraction(n)
    }
}

impl From<f32> for Quantity {
    fn from(n: f32) -> Self {
        Quantity::Fraction(f64::from(n))
    }
}
