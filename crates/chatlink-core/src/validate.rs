use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::scalar::ScalarValue;

/// Digit-count constraint applied by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthRule {
    /// No constraint; anything numeric and non-negative passes.
    Any,
    /// The decimal rendering must have exactly this many digits.
    Exact(u32),
    /// Bounds on the digit count, each optional.
    ///
    /// Evaluation is a majority vote over the present bounds, not a
    /// conjunction: a signed counter starts at 0 and each bound adds 1 when
    /// its comparison holds and subtracts 1 otherwise; the value is accepted
    /// only when the counter ends strictly positive. With two bounds, one
    /// passing and one failing therefore rejects. This asymmetry is kept for
    /// compatibility with the deployed link format checker.
    Between { min: Option<u32>, max: Option<u32> },
}

impl LengthRule {
    pub fn between(min: u32, max: u32) -> Self {
        Self::Between {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Builds a `Between` rule from keyed bound pairs, the shape bounds take
    /// in loosely-structured sources. Keys other than `min` and `max` fail
    /// with `InvalidOption`.
    pub fn from_bounds<'a, I>(name: &str, bounds: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut min = None;
        let mut max = None;
        for (key, value) in bounds {
            match key {
                "min" => min = Some(value),
                "max" => max = Some(value),
                other => {
                    return Err(DomainError::InvalidOption {
                        name: name.to_string(),
                        key: other.to_string(),
                    })
                }
            }
        }
        Ok(Self::Between { min, max })
    }
}

/// Number of digits in the base-10 rendering of `value`; 0 has one digit.
pub fn digit_count(value: u64) -> u32 {
    if value == 0 {
        1
    } else {
        value.ilog10() + 1
    }
}

/// Checks `value` against `rule` and returns the numeric payload unchanged.
///
/// Non-numeric shapes fail with `InvalidType`, negative numbers with
/// `InvalidRange`, and digit-count mismatches with `InvalidLength`. `name`
/// appears only in error messages.
pub fn validate(name: &str, value: &ScalarValue, rule: &LengthRule) -> Result<u64, DomainError> {
    let number = match value {
        ScalarValue::Int(n) if *n < 0 => {
            return Err(DomainError::InvalidRange {
                name: name.to_string(),
                value: *n,
            })
        }
        ScalarValue::Int(n) => *n as u64,
        other => {
            return Err(DomainError::InvalidType {
                name: name.to_string(),
                value: other.to_string(),
            })
        }
    };

    let digits = digit_count(number);
    let accepted = match rule {
        LengthRule::Any => true,
        LengthRule::Exact(len) => digits == *len,
        LengthRule::Between { min, max } => {
            let mut counter: i32 = 0;
            if let Some(min) = min {
                if digits >= *min {
                    counter += 1;
                } else {
                    counter -= 1;
                }
            }
            if let Some(max) = max {
                if digits <= *max {
                    counter += 1;
                } else {
                    counter -= 1;
                }
            }
            counter > 0
        }
    };

    if accepted {
        Ok(number)
    } else {
        Err(DomainError::InvalidLength {
            name: name.to_string(),
            value: number,
        })
    }
}
