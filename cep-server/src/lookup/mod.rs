//! Remote lookup client for the postal-code and area-code services.
//!
//! The services sit behind the [`AddressSource`] and [`AreaCodeSource`]
//! traits so the query layer can run against [`MockLookup`] in tests.

mod client;
mod error;
pub(crate) mod http;
mod mock;
mod source;
mod types;

pub use client::LookupClient;
pub use error::{LookupError, Upstream};
pub use mock::{MockCall, MockLookup};
pub use source::{AddressSource, AreaCodeSource};
pub use types::{Address, AreaCodeInfo};
