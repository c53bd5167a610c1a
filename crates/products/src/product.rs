use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use salesbook_core::{Id, Money, ValueObject};

/// Product category, used by tax policies to pick a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Standard,
    Food,
    Drug,
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ProductType::Standard => "STANDARD",
            ProductType::Food => "FOOD",
            ProductType::Drug => "DRUG",
        };
        f.write_str(s)
    }
}

/// Snapshot of a catalog product at the moment it was put on a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    product_id: Id,
    /// Unit price at snapshot time.
    price: Money,
    name: String,
    product_type: ProductType,
    snapshot_date: Option<DateTime<Utc>>,
}

impl ProductData {
    pub fn new(
        product_id: Id,
        price: Money,
        name: impl Into<String>,
        product_type: ProductType,
        snapshot_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            product_id,
            price,
            name: name.into(),
            product_type,
            snapshot_date,
        }
    }

    pub fn product_id(&self) -> Id {
        self.product_id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn snapshot_date(&self) -> Option<DateTime<Utc>> {
        self.snapshot_date
    }
}

impl ValueObject for ProductData {}
