//! Fluent construction of [`ProductData`] snapshots, mostly for fixtures.

use chrono::{DateTime, Utc};

use salesbook_core::{Id, Money};

use crate::product::{ProductData, ProductType};

/// Builder for [`ProductData`].
///
/// Unset fields fall back to: a freshly generated id, `Money::ZERO`, an empty
/// name, `ProductType::Standard` and no snapshot date.
#[derive(Debug, Clone, Default)]
pub struct ProductDataBuilder {
    product_id: Option<Id>,
    price: Option<Money>,
    name: Option<String>,
    snapshot_date: Option<DateTime<Utc>>,
    product_type: Option<ProductType>,
}

impl ProductDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product_id(mut self, product_id: Id) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_snapshot_date(mut self, snapshot_date: Option<DateTime<Utc>>) -> Self {
        self.snapshot_date = snapshot_date;
        self
    }

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn build(self) -> ProductData {
        ProductData::new(
            self.product_id.unwrap_or_else(Id::generate),
            self.price.unwrap_or(Money::ZERO),
            self.name.unwrap_or_default(),
            self.product_type.unwrap_or(ProductType::Standard),
            self.snapshot_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn builds_with_every_field_set() {
        let id = Id::generate();
        let taken_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let product = ProductDataBuilder::new()
            .with_product_id(id)
            .with_price(Money::of(499))
            .with_name("Sample product name")
            .with_product_type(ProductType::Food)
            .with_snapshot_date(Some(taken_at))
            .build();

        assert_eq!(product.product_id(), id);
        assert_eq!(product.price(), Money::of(499));
        assert_eq!(product.name(), "Sample product name");
        assert_eq!(product.product_type(), ProductType::Food);
        assert_eq!(product.snapshot_date(), Some(taken_at));
    }

    #[test]
    fn unset_fields_use_defaults() {
        let product = ProductDataBuilder::new().build();

        assert_eq!(product.price(), Money::ZERO);
        assert_eq!(product.name(), "");
        assert_eq!(product.product_type(), ProductType::Standard);
        assert_eq!(product.snapshot_date(), None);
    }

    #[test]
    fn same_inputs_build_equal_snapshots() {
        let builder = ProductDataBuilder::new()
            .with_product_id(Id::generate())
            .with_name("Aspirin")
            .with_product_type(ProductType::Drug);

        assert_eq!(builder.clone().build(), builder.build());
    }
}
