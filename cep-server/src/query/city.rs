//! City → area-code resolution.
//!
//! Scans the state's area codes in table order and keeps those whose city
//! list contains the queried city, compared by `normalize_city`. The scan is
//! best-effort: an area code whose lookup fails is logged and left out.

use futures::StreamExt;
use futures::stream;

use crate::domain::{self, Ddd, Uf, normalize_city, sort_pt_br};
use crate::lookup::LookupClient;

use super::config::QueryConfig;
use super::error::QueryError;

/// An area code serving the queried city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCodeMatch {
    pub ddd: Ddd,
    /// State as reported by the service
    pub state: String,
    /// Every city of the area code, in Portuguese order
    pub cities: Vec<String>,
}

/// The area codes serving a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityResolution {
    /// The city as the user typed it (trimmed)
    pub city: String,
    pub uf: Uf,
    pub state_name: &'static str,
    /// At least one match, in table order
    pub matches: Vec<AreaCodeMatch>,
}

impl CityResolution {
    /// The matching area codes.
    pub fn area_codes(&self) -> Vec<Ddd> {
        self.matches.iter().map(|m| m.ddd).collect()
    }
}

/// Find which area codes of a state serve a city.
pub async fn resolve_city(
    client: &LookupClient,
    uf: &str,
    city: &str,
    config: &QueryConfig,
) -> Result<CityResolution, QueryError> {
    let uf = uf.trim();
    let city = city.trim();
    if uf.is_empty() || city.is_empty() {
        return Err(QueryError::MissingCityQuery);
    }

    let entry = Uf::parse_normalized(uf)
        .ok()
        .and_then(domain::state)
        .filter(|s| !s.area_codes().is_empty())
        .ok_or(QueryError::NoAreaCodes)?;

    let wanted = normalize_city(city);

    let matches: Vec<AreaCodeMatch> = stream::iter(entry.area_codes().iter().copied())
        .map(|ddd| async move { (ddd, client.lookup_area_code(ddd).await) })
        .buffered(config.concurrency.max(1))
        .filter_map(|(ddd, result)| {
            let found = match result {
                Ok(info) if info.cities.iter().any(|c| normalize_city(c) == wanted) => {
                    let mut cities = info.cities.clone();
                    sort_pt_br(&mut cities);
                    Some(AreaCodeMatch {
                        ddd,
                        state: info.state.clone(),
                        cities,
                    })
                }
                Ok(_) => None,
                Err(err) => {
                    tracing::warn!(uf = %entry.uf(), %ddd, error = %err, "skipping area code during city scan");
                    None
                }
            };
            async move { found }
        })
        .collect()
        .await;

    if matches.is_empty() {
        return Err(QueryError::CityNotFound {
            city: city.to_string(),
            state_name: entry.name(),
            uf: entry.uf(),
        });
    }

    Ok(CityResolution {
        city: city.to_string(),
        uf: entry.uf(),
        state_name: entry.name(),
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::AreaCodeCache;
    use crate::lookup::{LookupError, MockLookup, Upstream};

    fn ddd(s: &str) -> Ddd {
        Ddd::parse(s).unwrap()
    }

    fn client(mock: &MockLookup) -> LookupClient {
        LookupClient::new(mock.clone(), mock.clone(), AreaCodeCache::default())
    }

    fn minas_mock() -> MockLookup {
        MockLookup::new()
            .with_area_code(ddd("31"), "MG", &["Belo Horizonte", "Contagem"])
            .with_area_code(ddd("32"), "MG", &["Juiz de Fora", "Ubá"])
            .with_area_code(ddd("33"), "MG", &["Governador Valadares"])
            .with_area_code(ddd("34"), "MG", &["Uberlândia", "Uberaba", "Araxá"])
            .with_area_code(ddd("35"), "MG", &["Poços de Caldas"])
            .with_area_code(ddd("37"), "MG", &["Divinópolis"])
            .with_area_code(ddd("38"), "MG", &["Montes Claros"])
    }

    #[tokio::test]
    async fn unaccented_lowercase_query_matches() {
        let mock = minas_mock();
        let found = resolve_city(&client(&mock), "MG", "uberaba", &QueryConfig::default())
            .await
            .unwrap();

        assert_eq!(found.area_codes(), [ddd("34")]);
        assert_eq!(found.city, "uberaba");
        assert_eq!(found.state_name, "Minas Gerais");
        assert_eq!(found.matches[0].cities, ["Araxá", "Uberaba", "Uberlândia"]);
    }

    #[tokio::test]
    async fn accents_and_case_do_not_matter() {
        let mock = minas_mock();
        let client = client(&mock);
        for query in ["Ubá", "uba", "UBÁ", "  Uba  "] {
            let found = resolve_city(&client, "mg", query, &QueryConfig::default())
                .await
                .unwrap();
            assert_eq!(found.area_codes(), [ddd("32")], "{query}");
        }
    }

    #[tokio::test]
    async fn every_matching_area_code_is_reported() {
        let mock = MockLookup::new()
            .with_area_code(ddd("21"), "RJ", &["Rio de Janeiro", "Niterói"])
            .with_area_code(ddd("22"), "RJ", &["Campos dos Goytacazes"])
            .with_area_code(ddd("24"), "RJ", &["Niterói", "Petrópolis"]);

        let found = resolve_city(&client(&mock), "RJ", "niteroi", &QueryConfig::default())
            .await
            .unwrap();
        assert_eq!(found.area_codes(), [ddd("21"), ddd("24")]);
    }

    #[tokio::test]
    async fn failed_area_codes_are_skipped() {
        let mock = minas_mock().with_area_code_failure(
            ddd("31"),
            LookupError::Network {
                upstream: Upstream::BrasilApi,
                message: "timeout".into(),
            },
        );

        let found = resolve_city(&client(&mock), "MG", "Uberaba", &QueryConfig::default())
            .await
            .unwrap();
        assert_eq!(found.area_codes(), [ddd("34")]);
        // Every area code was tried despite the failure.
        assert_eq!(mock.call_count(), 7);
    }

    #[tokio::test]
    async fn unknown_city() {
        let mock = minas_mock();
        let err = resolve_city(&client(&mock), "MG", "Gotham", &QueryConfig::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Nenhum DDD encontrado para \"Gotham\" em Minas Gerais (MG)."
        );
    }

    #[tokio::test]
    async fn missing_fields() {
        let mock = MockLookup::new();
        let client = client(&mock);
        for (uf, city) in [("", "Uberaba"), ("MG", " "), ("", "")] {
            assert_eq!(
                resolve_city(&client, uf, city, &QueryConfig::default())
                    .await
                    .unwrap_err(),
                QueryError::MissingCityQuery
            );
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn state_without_area_codes() {
        let mock = MockLookup::new();
        let err = resolve_city(&client(&mock), "XX", "Atlântida", &QueryConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err, QueryError::NoAreaCodes);
        assert_eq!(mock.call_count(), 0);
    }
}
