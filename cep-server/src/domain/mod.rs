//! Domain types for postal-code and area-code lookups.
//!
//! Codes are validated at construction time, so code that receives a `Uf`,
//! `Ddd` or `Cep` can trust its shape.

mod cep;
mod ddd;
mod table;
mod text;
mod uf;

pub use cep::{Cep, InvalidCep};
pub use ddd::{Ddd, InvalidDdd};
pub use table::{StateEntry, area_codes, state, state_name, states};
pub use text::{compare_pt_br, normalize_city, sort_pt_br};
pub use uf::{InvalidUf, Uf};
