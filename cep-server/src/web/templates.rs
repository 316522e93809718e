//! Askama templates for the web frontend.
//!
//! Every card the page shows is rendered here. The queries decide what to
//! show; these functions only turn it into markup.

use askama::Template;

use crate::brasilapi::public_area_code_url;
use crate::domain::{self, Ddd};
use crate::lookup::Address;
use crate::query::{AreaCodeCard, CityResolution, StateHeader};

/// Terminates each fragment of a streamed response, so the page script
/// can tell where one card ends.
pub const FRAGMENT_END: &str = "<!--/fragment-->\n";

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the four search tabs.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub states: Vec<StateOption>,
}

impl IndexTemplate {
    /// Build the page with the state selects filled from the reference table.
    pub fn new() -> Self {
        Self {
            states: domain::states()
                .iter()
                .map(|s| StateOption {
                    code: s.uf().to_string(),
                    name: s.name(),
                })
                .collect(),
        }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// One `<option>` of a state select.
#[derive(Debug, Clone)]
pub struct StateOption {
    pub code: String,
    pub name: &'static str,
}

// ============================================================================
// Fragment Templates (fetch responses, no base.html)
// ============================================================================

/// A single error card; replaces everything in the results container.
#[derive(Template)]
#[template(path = "error_card.html")]
pub struct ErrorCardTemplate {
    pub message: String,
}

/// One card per address.
#[derive(Template)]
#[template(path = "address_list.html")]
pub struct AddressListTemplate {
    pub addresses: Vec<AddressView>,
}

/// State header card followed by one placeholder per area code.
#[derive(Template)]
#[template(path = "state_header.html")]
pub struct StateHeaderTemplate {
    pub state_name: String,
    pub uf: String,
    pub area_codes: String,
    pub placeholders: Vec<String>,
}

/// One area-code card. With `replaces` set it is wrapped so the page script
/// swaps it in for the placeholder of the same area code.
#[derive(Template)]
#[template(path = "area_code_card.html")]
pub struct AreaCodeCardTemplate {
    pub card: AreaCodeCardView,
    pub replaces: bool,
}

/// Error card standing in for an area-code card that could not be rendered.
#[derive(Template)]
#[template(path = "card_failure.html")]
pub struct CardFailureTemplate {
    pub ddd: String,
    /// Already rendered error card
    pub error_card: String,
}

/// Summary card plus one card per matching area code.
#[derive(Template)]
#[template(path = "city_resolution.html")]
pub struct CityResolutionTemplate {
    pub city: String,
    pub state_name: String,
    pub uf: String,
    pub area_codes: String,
    pub matches: Vec<MatchView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Address view model.
#[derive(Debug, Clone)]
pub struct AddressView {
    pub cep: String,
    pub street: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub uf: String,
    pub ddd: Option<String>,
}

impl AddressView {
    /// Create from an address record.
    pub fn from_address(address: &Address) -> Self {
        Self {
            cep: address.cep.clone(),
            street: address.street.clone(),
            complement: Some(address.complement.clone()).filter(|c| !c.is_empty()),
            neighborhood: address.neighborhood.clone(),
            city: address.city.clone(),
            uf: address.uf.clone(),
            ddd: address.ddd().map(str::to_string),
        }
    }
}

/// Area-code card view model.
#[derive(Debug, Clone)]
pub struct AreaCodeCardView {
    pub ddd: String,
    pub state: String,
    pub total: usize,
    /// Leading cities, comma separated
    pub preview: String,
    /// Every city, comma separated
    pub full: String,
    pub has_more: bool,
    pub is_empty: bool,
    /// Failure detail, for failed lookups
    pub failure: Option<String>,
    /// Public service URL, offered on failure
    pub api_url: String,
}

impl AreaCodeCardView {
    fn base(ddd: Ddd) -> Self {
        Self {
            ddd: ddd.to_string(),
            state: String::new(),
            total: 0,
            preview: String::new(),
            full: String::new(),
            has_more: false,
            is_empty: false,
            failure: None,
            api_url: public_area_code_url(ddd),
        }
    }

    /// Create from a listing card.
    pub fn from_card(card: &AreaCodeCard) -> Self {
        match card {
            AreaCodeCard::Cities { ddd, state, cities } => Self {
                state: state.clone(),
                total: cities.len(),
                preview: cities.preview().join(", "),
                full: cities.all().join(", "),
                has_more: cities.has_more(),
                ..Self::base(*ddd)
            },
            AreaCodeCard::Empty { ddd } => Self {
                is_empty: true,
                ..Self::base(*ddd)
            },
            AreaCodeCard::Failed { ddd, detail } => Self {
                failure: Some(detail.clone()),
                ..Self::base(*ddd)
            },
        }
    }
}

/// Matching area code view model.
#[derive(Debug, Clone)]
pub struct MatchView {
    pub ddd: String,
    pub state: String,
    pub total: usize,
    pub cities: String,
}

// ============================================================================
// Render functions
// ============================================================================

/// Content of a cleared results container.
pub fn render_cleared() -> String {
    String::new()
}

/// A single error card.
pub fn render_error(message: &str) -> Result<String, askama::Error> {
    ErrorCardTemplate {
        message: message.to_string(),
    }
    .render()
}

/// One card per address, in the given order.
pub fn render_addresses(addresses: &[Address]) -> Result<String, askama::Error> {
    AddressListTemplate {
        addresses: addresses.iter().map(AddressView::from_address).collect(),
    }
    .render()
}

/// The header card of a state listing and its placeholders.
pub fn render_state_header(header: &StateHeader) -> Result<String, askama::Error> {
    StateHeaderTemplate {
        state_name: header.state_name.to_string(),
        uf: header.uf.to_string(),
        area_codes: join_ddds(header.area_codes),
        placeholders: header.area_codes.iter().map(Ddd::to_string).collect(),
    }
    .render()
}

/// An area-code card.
pub fn render_area_code_card(card: &AreaCodeCard, replaces: bool) -> Result<String, askama::Error> {
    AreaCodeCardTemplate {
        card: AreaCodeCardView::from_card(card),
        replaces,
    }
    .render()
}

/// An error card that replaces the placeholder of `ddd`.
pub fn render_card_failure(ddd: Ddd, message: &str) -> Result<String, askama::Error> {
    CardFailureTemplate {
        ddd: ddd.to_string(),
        error_card: render_error(message)?,
    }
    .render()
}

/// The result of a city resolution.
pub fn render_city_resolution(resolution: &CityResolution) -> Result<String, askama::Error> {
    CityResolutionTemplate {
        city: resolution.city.clone(),
        state_name: resolution.state_name.to_string(),
        uf: resolution.uf.to_string(),
        area_codes: join_ddds(&resolution.area_codes()),
        matches: resolution
            .matches
            .iter()
            .map(|m| MatchView {
                ddd: m.ddd.to_string(),
                state: m.state.clone(),
                total: m.cities.len(),
                cities: m.cities.join(", "),
            })
            .collect(),
    }
    .render()
}

fn join_ddds(ddds: &[Ddd]) -> String {
    ddds.iter().map(Ddd::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Uf;
    use crate::query::{AreaCodeMatch, CityList};

    fn ddd(s: &str) -> Ddd {
        Ddd::parse(s).unwrap()
    }

    #[test]
    fn cleared_is_empty() {
        assert!(render_cleared().is_empty());
    }

    #[test]
    fn error_card_escapes_message() {
        let html = render_error("<script>x</script>").unwrap();
        assert!(html.contains("Erro"));
        assert!(!html.contains("<script>x"));
    }

    #[test]
    fn index_lists_every_state() {
        let html = IndexTemplate::new().render().unwrap();
        assert!(html.contains(r#"value="SP""#));
        assert!(html.contains("Mato Grosso do Sul"));
        assert_eq!(IndexTemplate::new().states.len(), 27);
    }

    #[test]
    fn header_lists_area_codes_and_placeholders() {
        let header = StateHeader {
            uf: Uf::parse("RJ").unwrap(),
            state_name: "Rio de Janeiro",
            area_codes: domain::area_codes(Uf::parse("RJ").unwrap()),
        };
        let html = render_state_header(&header).unwrap();
        assert!(html.contains("DDDs de Rio de Janeiro (RJ)"));
        assert!(html.contains("21, 22, 24"));
        assert!(html.contains(r#"id="ddd-24""#));
        assert!(html.contains("Carregando cidades"));
    }

    #[test]
    fn card_preview_and_toggle() {
        let cities: Vec<String> = (0..25).map(|i| format!("Cidade {i:02}")).collect();
        let card = AreaCodeCard::Cities {
            ddd: ddd("11"),
            state: "SP".into(),
            cities: CityList::new(cities, 20),
        };
        let view = AreaCodeCardView::from_card(&card);
        assert!(view.has_more);
        assert_eq!(view.total, 25);
        assert!(view.preview.ends_with("Cidade 19"));
        assert!(view.full.ends_with("Cidade 24"));

        let html = render_area_code_card(&card, true).unwrap();
        assert!(html.contains(r#"data-replaces="ddd-11""#));
        assert!(html.contains("ver todas"));
        assert!(html.contains("Cidades (25)"));
    }

    #[test]
    fn failed_card_is_localized() {
        let card = AreaCodeCard::Failed {
            ddd: ddd("12"),
            detail: "HTTP 500 ao consultar BrasilAPI.".into(),
        };
        let html = render_area_code_card(&card, false).unwrap();
        assert!(html.contains("Não foi possível carregar as cidades agora."));
        assert!(html.contains("HTTP 500"));
        assert!(html.contains("https://brasilapi.com.br/api/ddd/v1/12"));
        assert!(!html.contains("data-replaces"));
    }

    #[test]
    fn card_failure_replaces_placeholder() {
        let html = render_card_failure(ddd("14"), "sem cidades").unwrap();
        assert!(html.contains(r#"data-replaces="ddd-14""#));
        assert!(html.contains(r#"class="card error""#));
        assert!(html.contains("sem cidades"));
        assert!(!html.contains("&lt;div"));
    }

    #[test]
    fn empty_card() {
        let html = render_area_code_card(&AreaCodeCard::Empty { ddd: ddd("95") }, false).unwrap();
        assert!(html.contains("Nenhuma cidade encontrada para este DDD."));
    }

    #[test]
    fn address_cards() {
        let address: Address = serde_json::from_value(serde_json::json!({
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ddd": "11"
        }))
        .unwrap();
        let html = render_addresses(&[address]).unwrap();
        assert!(html.contains("Avenida Paulista"));
        assert!(html.contains("01310-100"));
        assert!(!html.contains("Complemento"));
    }

    #[test]
    fn city_resolution_cards() {
        let resolution = CityResolution {
            city: "uberaba".into(),
            uf: Uf::parse("MG").unwrap(),
            state_name: "Minas Gerais",
            matches: vec![AreaCodeMatch {
                ddd: ddd("34"),
                state: "MG".into(),
                cities: vec!["Araxá".into(), "Uberaba".into()],
            }],
        };
        let html = render_city_resolution(&resolution).unwrap();
        assert!(html.contains("DDD por Cidade"));
        assert!(html.contains("Minas Gerais (MG)"));
        assert!(html.contains("Araxá, Uberaba"));
    }
}
