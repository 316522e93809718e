//! The four lookups the page offers.
//!
//! Each query validates its input, calls the lookup client and returns
//! plain data; rendering is the web layer's job.

mod address;
mod cities;
mod city;
mod config;
mod error;
mod listing;
mod postal;

pub use address::search_address;
pub use cities::CityList;
pub use city::{AreaCodeMatch, CityResolution, resolve_city};
pub use config::QueryConfig;
pub use error::QueryError;
pub use listing::{AreaCodeCard, StateHeader, StateListing, list_state};
pub use postal::search_cep;
