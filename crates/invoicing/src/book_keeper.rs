use salesbook_core::{DomainError, DomainResult};

use crate::invoice::{Invoice, InvoiceFactory, InvoiceLine};
use crate::request::InvoiceRequest;
use crate::tax::TaxPolicy;

/// Issues invoices from invoice requests.
///
/// Holds only its factory; every call to [`issuance`](Self::issuance) is
/// independent of the others.
#[derive(Debug, Clone)]
pub struct BookKeeper<F> {
    factory: F,
}

impl<F: InvoiceFactory> BookKeeper<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Build an invoice for `request`, asking `tax_policy` for each line's tax.
    ///
    /// The factory is called exactly once, with the request's client. The tax
    /// policy is called once per item, in request order, and never when the
    /// request is empty. The invoice the factory produced is the one returned.
    pub fn issuance<T>(&self, request: &InvoiceRequest, tax_policy: &T) -> DomainResult<Invoice>
    where
        T: TaxPolicy + ?Sized,
    {
        let mut invoice = self.factory.create(request.client());
        if !invoice.lines().is_empty() {
            return Err(DomainError::invariant(
                "invoice factory must produce an empty invoice",
            ));
        }

        for item in request.items() {
            let net = item.total_cost();
            let tax = tax_policy.calculate_tax(item.product_type(), &net);
            tracing::debug!(
                invoice_id = %invoice.id_typed(),
                product_id = %item.product().product_id(),
                product_type = %item.product_type(),
                net = %net,
                tax = %tax.amount(),
                "invoice line taxed"
            );

            let line = InvoiceLine::new(item.product().clone(), item.quantity(), net, tax)?;
            invoice.add_line(line)?;
        }

        tracing::info!(
            invoice_id = %invoice.id_typed(),
            client_id = %invoice.client().id(),
            lines = invoice.lines().len(),
            gross = %invoice.gross(),
            "invoice issued"
        );

        Ok(invoice)
    }
}
