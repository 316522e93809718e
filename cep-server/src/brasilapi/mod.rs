//! BrasilAPI area-code service client.
//!
//! `GET /api/ddd/v1/{ddd}` answers with `{state, cities}`. Requests ask for
//! JSON and forbid intermediate caches; the session cache lives in
//! [`crate::cache`].

mod client;

pub use client::{BrasilApiClient, BrasilApiConfig, public_area_code_url};
