//! Type-safe price representation using decimal arithmetic.
//!
//! The storefront sells in Indonesian rupiah, which has no minor unit in
//! practice, so prices are whole amounts rendered as `Rp 199,000`.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (whole rupiah).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a rupiah price from a whole amount.
    #[must_use]
    pub fn idr(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::IDR)
    }

    /// A zero rupiah price.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::IDR)
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// This price scaled by `factor` and rounded down to a whole unit.
    ///
    /// A factor that is not finite yields zero.
    #[must_use]
    pub fn scaled_down(self, factor: f64) -> Self {
        let factor = Decimal::try_from(factor).unwrap_or(Decimal::ZERO);
        Self::new((self.amount * factor).floor(), self.currency_code)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Format for display (e.g., "Rp 199,000").
    #[must_use]
    pub fn display(&self) -> String {
        let whole = self.amount.round_dp(0).to_string();
        let (sign, digits) = whole
            .strip_prefix('-')
            .map_or(("", whole.as_str()), |rest| ("-", rest));
        format!(
            "{sign}{} {}",
            self.currency_code.symbol(),
            group_thousands(digits)
        )
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// Insert `,` separators every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    IDR,
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::IDR => "Rp",
            Self::USD => "$",
        }
    }
}
