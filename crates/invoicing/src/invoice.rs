use serde::{Deserialize, Serialize};

use salesbook_core::{ClientData, DomainResult, Entity, Id, Money};
use salesbook_products::ProductData;

use crate::tax::Tax;

/// Priced, taxed line of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    product: ProductData,
    quantity: u32,
    net: Money,
    tax: Tax,
    gross: Money,
}

impl InvoiceLine {
    /// Lines are only built while issuing; `gross` is `net + tax`.
    pub(crate) fn new(
        product: ProductData,
        quantity: u32,
        net: Money,
        tax: Tax,
    ) -> DomainResult<Self> {
        let gross = net.checked_add(&tax.amount())?;
        Ok(Self {
            product,
            quantity,
            net,
            tax,
            gross,
        })
    }

    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn net(&self) -> Money {
        self.net
    }

    pub fn tax(&self) -> &Tax {
        &self.tax
    }

    pub fn gross(&self) -> Money {
        self.gross
    }
}

/// Invoice issued to a client.
///
/// Starts empty; `net` and `gross` totals follow the lines as they are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: Id,
    client: ClientData,
    lines: Vec<InvoiceLine>,
    net: Money,
    gross: Money,
}

impl Invoice {
    pub fn new(id: Id, client: ClientData) -> Self {
        Self {
            id,
            client,
            lines: Vec::new(),
            net: Money::ZERO,
            gross: Money::ZERO,
        }
    }

    pub fn id_typed(&self) -> Id {
        self.id
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    pub fn net(&self) -> Money {
        self.net
    }

    pub fn gross(&self) -> Money {
        self.gross
    }

    /// Append a line and roll its amounts into the totals.
    ///
    /// Totals are computed before anything is mutated, so a failure leaves the
    /// invoice unchanged.
    pub(crate) fn add_line(&mut self, line: InvoiceLine) -> DomainResult<()> {
        let net = self.net.checked_add(&line.net)?;
        let gross = self.gross.checked_add(&line.gross)?;
        self.net = net;
        self.gross = gross;
        self.lines.push(line);
        Ok(())
    }
}

impl Entity for Invoice {
    type Id = Id;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Creates the empty invoice shell a [`BookKeeper`](crate::BookKeeper) fills in.
pub trait InvoiceFactory {
    fn create(&self, client: &ClientData) -> Invoice;
}

impl<F> InvoiceFactory for F
where
    F: Fn(&ClientData) -> Invoice,
{
    fn create(&self, client: &ClientData) -> Invoice {
        self(client)
    }
}

/// Factory assigning a freshly generated id to every invoice.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInvoiceFactory;

impl InvoiceFactory for DefaultInvoiceFactory {
    fn create(&self, client: &ClientData) -> Invoice {
        Invoice::new(Id::generate(), client.clone())
    }
}
