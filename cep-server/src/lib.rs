//! Brazilian postal-code and area-code lookup server.
//!
//! A web application that answers: "what address is this CEP?", "what is
//! the CEP of this street?", and "which DDD serves this state or city?"

pub mod brasilapi;
pub mod cache;
pub mod domain;
pub mod lookup;
pub mod query;
pub mod viacep;
pub mod web;
