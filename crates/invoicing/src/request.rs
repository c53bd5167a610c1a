//! What a client asks to be invoiced for.

use serde::{Deserialize, Serialize};

use salesbook_core::{ClientData, DomainError, DomainResult, Money, ValueObject};
use salesbook_products::{ProductData, ProductType};

/// One requested line: a product snapshot, how many, and the line's net cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    product: ProductData,
    quantity: u32,
    /// Net cost of the whole line (not per unit).
    total_cost: Money,
}

impl RequestItem {
    pub fn new(product: ProductData, quantity: u32, total_cost: Money) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "request item quantity must be positive",
            ));
        }
        Ok(Self {
            product,
            quantity,
            total_cost,
        })
    }

    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn product_type(&self) -> ProductType {
        self.product.product_type()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }
}

impl ValueObject for RequestItem {}

/// Client plus the ordered items to invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    /// Append an item; items keep insertion order.
    pub fn add(&mut self, item: RequestItem) {
        self.items.push(item);
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }
}
