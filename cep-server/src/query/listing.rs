//! State → area-code listing.
//!
//! The header (state name and area codes) comes from the reference table and
//! is ready before any request is made. Each area code then gets a card,
//! produced by an ordered pipeline over the table's area codes: with
//! concurrency 1 the lookups run strictly one after another, and for any
//! concurrency the cards come out in table order. A failed lookup becomes a
//! failure card for that area code only.

use futures::StreamExt;
use futures::stream::{self, BoxStream};

use crate::domain::{self, Ddd, Uf};
use crate::lookup::LookupClient;

use super::cities::CityList;
use super::config::QueryConfig;
use super::error::QueryError;

/// Header card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateHeader {
    pub uf: Uf,
    pub state_name: &'static str,
    pub area_codes: &'static [Ddd],
}

/// The outcome for one area code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaCodeCard {
    /// Cities served by the area code
    Cities {
        ddd: Ddd,
        /// State as reported by the service, or the selected UF
        state: String,
        cities: CityList,
    },

    /// The service knows the area code but lists no cities
    Empty { ddd: Ddd },

    /// The lookup failed
    Failed { ddd: Ddd, detail: String },
}

impl AreaCodeCard {
    /// The area code this card is about.
    pub fn ddd(&self) -> Ddd {
        match self {
            AreaCodeCard::Cities { ddd, .. }
            | AreaCodeCard::Empty { ddd }
            | AreaCodeCard::Failed { ddd, .. } => *ddd,
        }
    }
}

/// A state listing: the header now, the cards as they arrive.
pub struct StateListing {
    pub header: StateHeader,
    pub cards: BoxStream<'static, AreaCodeCard>,
}

impl StateListing {
    /// Wait for every card.
    pub async fn collect(self) -> (StateHeader, Vec<AreaCodeCard>) {
        let cards = self.cards.collect().await;
        (self.header, cards)
    }
}

/// Start listing the area codes of a state.
///
/// An empty selection returns `Ok(None)`: nothing to show, not an error.
/// No request is made until `cards` is polled.
pub fn list_state(
    client: &LookupClient,
    selection: &str,
    config: &QueryConfig,
) -> Result<Option<StateListing>, QueryError> {
    let selection = selection.trim();
    if selection.is_empty() {
        return Ok(None);
    }

    let entry = Uf::parse_normalized(selection)
        .ok()
        .and_then(domain::state)
        .ok_or_else(|| QueryError::UnknownState(selection.to_string()))?;

    let header = StateHeader {
        uf: entry.uf(),
        state_name: entry.name(),
        area_codes: entry.area_codes(),
    };

    let uf = header.uf;
    let preview_len = config.preview_len;
    let client = client.clone();
    let cards = stream::iter(header.area_codes.iter().copied())
        .map(move |ddd| {
            let client = client.clone();
            async move { area_code_card(&client, uf, ddd, preview_len).await }
        })
        .buffered(config.concurrency.max(1))
        .boxed();

    Ok(Some(StateListing { header, cards }))
}

/// Fetch one area code and turn the outcome into a card.
async fn area_code_card(client: &LookupClient, uf: Uf, ddd: Ddd, preview_len: usize) -> AreaCodeCard {
    match client.lookup_area_code(ddd).await {
        Ok(info) if info.cities.is_empty() => AreaCodeCard::Empty { ddd },
        Ok(info) => AreaCodeCard::Cities {
            ddd,
            state: if info.state.is_empty() {
                uf.to_string()
            } else {
                info.state.clone()
            },
            cities: CityList::new(info.cities.clone(), preview_len),
        },
        Err(err) => {
            tracing::warn!(%uf, %ddd, error = %err, "failed to load cities for area code");
            AreaCodeCard::Failed {
                ddd,
                detail: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::AreaCodeCache;
    use crate::lookup::{LookupError, MockCall, MockLookup, Upstream};

    fn ddd(s: &str) -> Ddd {
        Ddd::parse(s).unwrap()
    }

    fn client(mock: &MockLookup) -> LookupClient {
        LookupClient::new(mock.clone(), mock.clone(), AreaCodeCache::default())
    }

    fn sao_paulo_mock() -> MockLookup {
        let mut mock = MockLookup::new();
        for code in 11..=19 {
            let d = Ddd::new(code).unwrap();
            mock = mock.with_area_code(d, "SP", &[&format!("Cidade {code}")]);
        }
        mock
    }

    #[tokio::test]
    async fn header_is_ready_before_any_request() {
        let mock = sao_paulo_mock();
        let listing = list_state(&client(&mock), "SP", &QueryConfig::default())
            .unwrap()
            .unwrap();

        let codes: Vec<String> = listing.header.area_codes.iter().map(Ddd::to_string).collect();
        assert_eq!(codes, ["11", "12", "13", "14", "15", "16", "17", "18", "19"]);
        assert_eq!(listing.header.state_name, "São Paulo");
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn cards_follow_table_order() {
        let mock = sao_paulo_mock();
        let listing = list_state(&client(&mock), "sp", &QueryConfig::default())
            .unwrap()
            .unwrap();

        let (_, cards) = listing.collect().await;
        let order: Vec<u8> = cards.iter().map(|c| c.ddd().value()).collect();
        assert_eq!(order, [11, 12, 13, 14, 15, 16, 17, 18, 19]);

        let calls: Vec<MockCall> = (11..=19).map(|c| MockCall::AreaCode(Ddd::new(c).unwrap())).collect();
        assert_eq!(mock.calls(), calls);
    }

    #[tokio::test]
    async fn order_holds_with_more_concurrency() {
        let mock = sao_paulo_mock();
        let config = QueryConfig::default().with_concurrency(4);
        let (_, cards) = list_state(&client(&mock), "SP", &config)
            .unwrap()
            .unwrap()
            .collect()
            .await;
        let order: Vec<u8> = cards.iter().map(|c| c.ddd().value()).collect();
        assert_eq!(order, [11, 12, 13, 14, 15, 16, 17, 18, 19]);
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_the_rest() {
        let mock = sao_paulo_mock().with_area_code_failure(
            ddd("13"),
            LookupError::Service {
                upstream: Upstream::BrasilApi,
                status: 500,
                body: "erro interno".into(),
            },
        );
        let (_, cards) = list_state(&client(&mock), "SP", &QueryConfig::default())
            .unwrap()
            .unwrap()
            .collect()
            .await;

        assert_eq!(cards.len(), 9);
        assert!(matches!(
            &cards[2],
            AreaCodeCard::Failed { ddd: d, detail } if *d == ddd("13") && detail.contains("HTTP 500")
        ));
        assert!(matches!(cards[3], AreaCodeCard::Cities { .. }));
        assert!(matches!(cards[8], AreaCodeCard::Cities { .. }));
    }

    #[tokio::test]
    async fn cities_are_sorted_and_previewed() {
        let cities: Vec<String> = (0..30).rev().map(|i| format!("Município {i:02}")).collect();
        let refs: Vec<&str> = cities.iter().map(String::as_str).collect();
        let mock = MockLookup::new()
            .with_area_code(ddd("68"), "", &refs);

        let (_, cards) = list_state(&client(&mock), "AC", &QueryConfig::default())
            .unwrap()
            .unwrap()
            .collect()
            .await;

        match &cards[0] {
            AreaCodeCard::Cities { state, cities, .. } => {
                // Empty state from the service falls back to the selection.
                assert_eq!(state, "AC");
                assert_eq!(cities.len(), 30);
                assert_eq!(cities.preview().len(), 20);
                assert_eq!(cities.preview()[0], "Município 00");
                assert!(cities.has_more());
            }
            other => panic!("unexpected card {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_city_set() {
        let mock = MockLookup::new().with_area_code(ddd("95"), "RR", &[]);
        let (_, cards) = list_state(&client(&mock), "RR", &QueryConfig::default())
            .unwrap()
            .unwrap()
            .collect()
            .await;
        assert_eq!(cards, [AreaCodeCard::Empty { ddd: ddd("95") }]);
    }

    #[tokio::test]
    async fn empty_selection_clears() {
        let mock = MockLookup::new();
        assert!(list_state(&client(&mock), "  ", &QueryConfig::default()).unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_state() {
        let mock = MockLookup::new();
        let err = list_state(&client(&mock), "XX", &QueryConfig::default())
            .err()
            .unwrap();
        assert_eq!(err, QueryError::UnknownState("XX".into()));
    }

    #[tokio::test]
    async fn second_listing_uses_the_cache() {
        let mock = sao_paulo_mock();
        let client = client(&mock);
        for _ in 0..2 {
            list_state(&client, "SP", &QueryConfig::default())
                .unwrap()
                .unwrap()
                .collect()
                .await;
        }
        assert_eq!(mock.call_count(), 9);
    }
}
