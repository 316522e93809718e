//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Ddd, Uf};
use crate::lookup::Address;
use crate::query::{AreaCodeCard, CityResolution, StateHeader};

/// Postal-code search parameters.
#[derive(Debug, Deserialize)]
pub struct CepRequest {
    #[serde(default)]
    pub cep: String,
}

/// Address search parameters.
#[derive(Debug, Deserialize)]
pub struct AddressRequest {
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub rua: String,
}

/// State listing parameters. An empty `uf` clears the results.
#[derive(Debug, Deserialize)]
pub struct StateRequest {
    #[serde(default)]
    pub uf: String,
}

/// City resolution parameters.
#[derive(Debug, Deserialize)]
pub struct CityRequest {
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub cidade: String,
}

/// Response for both address searches.
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub addresses: Vec<Address>,
}

/// One area code in a state listing.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AreaCodeResult {
    Ok {
        ddd: Ddd,
        state: String,
        cities: Vec<String>,
    },
    Empty {
        ddd: Ddd,
    },
    Error {
        ddd: Ddd,
        error: String,
    },
}

impl AreaCodeResult {
    /// Create from a listing card.
    pub fn from_card(card: &AreaCodeCard) -> Self {
        match card {
            AreaCodeCard::Cities { ddd, state, cities } => AreaCodeResult::Ok {
                ddd: *ddd,
                state: state.clone(),
                cities: cities.all().to_vec(),
            },
            AreaCodeCard::Empty { ddd } => AreaCodeResult::Empty { ddd: *ddd },
            AreaCodeCard::Failed { ddd, detail } => AreaCodeResult::Error {
                ddd: *ddd,
                error: detail.clone(),
            },
        }
    }
}

/// Response for the state listing.
#[derive(Debug, Serialize)]
pub struct StateListingResponse {
    pub uf: Uf,
    pub state_name: String,
    pub area_codes: Vec<Ddd>,
    pub results: Vec<AreaCodeResult>,
}

impl StateListingResponse {
    /// Create from a completed listing.
    pub fn from_listing(header: &StateHeader, cards: &[AreaCodeCard]) -> Self {
        Self {
            uf: header.uf,
            state_name: header.state_name.to_string(),
            area_codes: header.area_codes.to_vec(),
            results: cards.iter().map(AreaCodeResult::from_card).collect(),
        }
    }
}

/// A matching area code in a city resolution.
#[derive(Debug, Serialize)]
pub struct AreaCodeMatchResult {
    pub ddd: Ddd,
    pub state: String,
    pub cities: Vec<String>,
}

/// Response for the city resolution.
#[derive(Debug, Serialize)]
pub struct CityResponse {
    pub city: String,
    pub uf: Uf,
    pub state_name: String,
    pub area_codes: Vec<Ddd>,
    pub matches: Vec<AreaCodeMatchResult>,
}

impl CityResponse {
    /// Create from a domain CityResolution.
    pub fn from_resolution(resolution: &CityResolution) -> Self {
        Self {
            city: resolution.city.clone(),
            uf: resolution.uf,
            state_name: resolution.state_name.to_string(),
            area_codes: resolution.area_codes(),
            matches: resolution
                .matches
                .iter()
                .map(|m| AreaCodeMatchResult {
                    ddd: m.ddd,
                    state: m.state.clone(),
                    cities: m.cities.clone(),
                })
                .collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
