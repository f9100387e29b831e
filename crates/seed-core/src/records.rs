//! Rows of the `pessoa` and `venda` tables.
//!
//! `New*` types are what the seeder sends; the store assigns the `id`.
//! Field names follow the column names of the store schema.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store to a person row.
pub type PersonId = i64;

/// A person about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub nome: String,
    /// Tax id formatted as `ddd.ddd.ddd-dd`
    pub cpf: String,
    pub idade: u8,
    pub email: String,
}

/// A person as stored, with its assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    #[serde(flatten)]
    pub fields: NewPerson,
}

/// Amount of goods in a sale.
///
/// Bulk-mode sales carry a fractional quantity; the incremental modes
/// sell whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Units(i64),
    Decimal(#[serde(with = "rust_decimal::serde::float")] Decimal),
}

/// A sale about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    /// Buyer
    pub cliente_id: PersonId,
    /// Seller
    pub vendedor_id: PersonId,
    pub quantidade: Quantity,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub data: NaiveDate,
}
