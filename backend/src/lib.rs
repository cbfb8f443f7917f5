//! Backend of the shared household-budgeting application.
//!
//! Members register and receive a personal book (ledger); books are shared
//! via invite codes, and members track named balances (assets) inside a
//! book. The crate is laid out hexagonally: `domain` holds entities,
//! ports, and services; `inbound::http` the REST adapter; and
//! `outbound::persistence` the Diesel/PostgreSQL adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use doc::ApiDoc;
