//! Monetary amounts.
//!
//! Amounts are kept in the smallest currency unit (e.g. cents) so arithmetic is
//! exact. A zero amount is currency-neutral when combined with another value:
//! `Money::ZERO` plus 10 USD is 10 USD.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
    Pln,
    Chf,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Pln => "PLN",
            Currency::Chf => "CHF",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            "PLN" => Ok(Currency::Pln),
            "CHF" => Ok(Currency::Chf),
            other => Err(DomainError::validation(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}

/// Currency used when none is given explicitly.
pub const DEFAULT_CURRENCY: Currency = Currency::Eur;

/// Amount of money in a given currency.
///
/// Equality compares amount and currency together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Zero in the default currency.
    pub const ZERO: Money = Money {
        amount: 0,
        currency: DEFAULT_CURRENCY,
    };

    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Amount in the default currency.
    pub const fn of(amount: i64) -> Self {
        Self::new(amount, DEFAULT_CURRENCY)
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn checked_add(&self, other: &Money) -> DomainResult<Money> {
        let currency = self.combined_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Money::new(amount, currency))
    }

    pub fn checked_sub(&self, other: &Money) -> DomainResult<Money> {
        let currency = self.combined_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Money::new(amount, currency))
    }

    /// Multiply by a whole factor (e.g. a line quantity).
    pub fn multiply_by(&self, factor: i64) -> DomainResult<Money> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Money::new(amount, self.currency))
    }

    pub fn greater_than(&self, other: &Money) -> DomainResult<bool> {
        self.combined_currency(other)?;
        Ok(self.amount > other.amount)
    }

    fn combined_currency(&self, other: &Money) -> DomainResult<Currency> {
        if self.currency == other.currency || self.is_zero() {
            Ok(other.currency)
        } else if other.is_zero() {
            Ok(self.currency)
        } else {
            Err(DomainError::validation(format!(
                "currency mismatch: {} vs {}",
                self.currency, other.currency
            )))
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        write!(f, "{sign}{}.{:02} {}", abs / 100, abs % 100, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_default_currency() {
        assert_eq!(Money::ZERO, Money::new(0, DEFAULT_CURRENCY));
        assert_eq!(Money::default(), Money::ZERO);
        assert!(Money::ZERO.is_zero());
    }

    #[test]
    fn equality_includes_currency() {
        assert_eq!(Money::of(10), Money::new(10, Currency::Eur));
        assert_ne!(Money::new(10, Currency::Eur), Money::new(10, Currency::Usd));
        assert_ne!(Money::of(10), Money::of(12));
    }

    #[test]
    fn zero_adopts_the_other_currency() {
        let usd = Money::new(250, Currency::Usd);
        assert_eq!(Money::ZERO.checked_add(&usd).unwrap(), usd);
        assert_eq!(usd.checked_add(&Money::ZERO).unwrap(), usd);
    }

    #[test]
    fn mixing_currencies_is_rejected() {
        let err = Money::new(1, Currency::Eur)
            .checked_add(&Money::new(1, Currency::Pln))
            .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("currency mismatch") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert!(Money::of(5).greater_than(&Money::new(1, Currency::Gbp)).is_err());
    }

    #[test]
    fn overflow_is_an_invariant_violation() {
        let err = Money::of(i64::MAX).checked_add(&Money::of(1)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(Money::of(i64::MAX).multiply_by(2).is_err());
    }

    #[test]
    fn subtract_and_compare() {
        let diff = Money::of(1200).checked_sub(&Money::of(1000)).unwrap();
        assert_eq!(diff, Money::of(200));
        assert!(Money::of(1200).greater_than(&Money::of(1000)).unwrap());
        assert!(!Money::of(1000).greater_than(&Money::of(1000)).unwrap());
    }

    #[test]
    fn displays_major_and_minor_units() {
        assert_eq!(Money::of(1234).to_string(), "12.34 EUR");
        assert_eq!(Money::new(-5, Currency::Usd).to_string(), "-0.05 USD");
    }

    #[test]
    fn currency_parses_case_insensitively() {
        assert_eq!("pln".parse::<Currency>().unwrap(), Currency::Pln);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: zero is an identity for addition, whatever the currency.
        #[test]
        fn zero_is_additive_identity(amount in -1_000_000_000i64..1_000_000_000i64) {
            let usd = Money::new(amount, Currency::Usd);
            prop_assert_eq!(Money::ZERO.checked_add(&usd).unwrap(), usd);
        }

        /// Property: adding then subtracting the same amount is a no-op.
        #[test]
        fn add_then_sub_round_trips(
            a in -1_000_000_000i64..1_000_000_000i64,
            b in -1_000_000_000i64..1_000_000_000i64
        ) {
            let x = Money::new(a, Currency::Chf);
            let y = Money::new(b, Currency::Chf);
            let back = x.checked_add(&y).unwrap().checked_sub(&y).unwrap();
            prop_assert_eq!(back.amount(), a);
        }
    }
}
