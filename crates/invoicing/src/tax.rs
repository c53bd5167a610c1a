//! Tax determinations and the policy seam that produces them.

use serde::{Deserialize, Serialize};

use salesbook_core::{Money, ValueObject};
use salesbook_products::ProductType;

/// Result of applying a tax rule to a line: the amount and which rule applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    amount: Money,
    description: String,
}

impl Tax {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ValueObject for Tax {}

/// Decides how much tax a line carries.
///
/// Implementations are supplied by the caller of
/// [`BookKeeper::issuance`](crate::BookKeeper::issuance); closures of the
/// matching shape work as policies too.
pub trait TaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> Tax;
}

impl<F> TaxPolicy for F
where
    F: Fn(ProductType, &Money) -> Tax,
{
    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> Tax {
        self(product_type, net)
    }
}
