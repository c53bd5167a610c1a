//! Invoicing domain module.
//!
//! This crate turns a client's invoice request into an invoice, delegating the
//! per-line tax decision to a pluggable [`TaxPolicy`]. Business rules only: no IO,
//! no HTTP, no storage.

pub mod book_keeper;
pub mod invoice;
pub mod request;
pub mod tax;

pub use book_keeper::BookKeeper;
pub use invoice::{DefaultInvoiceFactory, Invoice, InvoiceFactory, InvoiceLine};
pub use request::{InvoiceRequest, RequestItem};
pub use tax::{Tax, TaxPolicy};
