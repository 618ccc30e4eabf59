use std::{
    fmt,
    ops::{Add, AddAssign},
};

use crate::EngineError;

/// Money amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the engine (entry amounts,
/// category totals) to avoid floating-point drift: summation and comparison
/// stay exact to the cent, and conversion to a display float happens only at
/// the boundary.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Converting a JSON number (accepts at most 2 decimals):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!(MoneyCents::try_from_major(7.99).unwrap().cents(), 799);
/// assert!(MoneyCents::try_from_major(12.345).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }

    /// Converts a major-unit float (e.g. a JSON `amount`) into cents.
    ///
    /// Validation rules:
    /// - rejects NaN and infinities
    /// - rejects more than 2 fractional digits (`12.345`)
    /// - rejects values whose cents do not fit in `i64`
    ///
    /// The sign is preserved; positivity is a separate, caller-side check.
    pub fn try_from_major(value: f64) -> Result<Self, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::InvalidAmount(
                "amount must be a finite number".to_string(),
            ));
        }

        let scaled = value * 100.0;
        let rounded = scaled.round();
        // Tolerate only the float representation error of a 2-decimal value.
        if (scaled - rounded).abs() > 1e-6 {
            return Err(EngineError::InvalidAmount(
                "amount has more than two decimals".to_string(),
            ));
        }
        if rounded.abs() >= i64::MAX as f64 {
            return Err(EngineError::InvalidAmount("amount too large".to_string()));
        }

        Ok(MoneyCents(rounded as i64))
    }

    /// Returns the amount in major units for display/serialization.
    ///
    /// Cents always fit a mantissa step of 0.01, so this is exact for any
    /// total the engine can produce from valid entries.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}{major}.{cents:02}")
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 + rhs.0)
    }
}

impl AddAssign for MoneyCents {
    fn add_assign(&mut self, rhs: MoneyCents) {
        self.0 += rhs.0;
    }
}
