//! ViaCEP postal-code service client.
//!
//! - `GET /ws/{cep}/json/` answers with one address, or with an `erro`
//!   sentinel object when the code does not exist
//! - `GET /ws/{uf}/{city}/{street}/json/` answers with an array of
//!   addresses, empty when nothing matches

mod client;

pub use client::{ViaCepClient, ViaCepConfig};
