//! Records returned by the external services.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An address as returned by the postal-code service.
///
/// The known fields are typed; everything else the service sends (IBGE
/// code, region, ...) is carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Postal code, formatted `NNNNN-NNN`
    #[serde(default)]
    pub cep: String,

    #[serde(rename = "logradouro", default)]
    pub street: String,

    #[serde(rename = "complemento", default)]
    pub complement: String,

    #[serde(rename = "bairro", default)]
    pub neighborhood: String,

    #[serde(rename = "localidade", default)]
    pub city: String,

    #[serde(default)]
    pub uf: String,

    /// Remaining fields, passed through as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    /// The area code the service reports for this address, if any.
    pub fn ddd(&self) -> Option<&str> {
        self.extra
            .get("ddd")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
    }
}

/// Cities served by one area code, as returned by the area-code service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCodeInfo {
    /// State the area code belongs to (may be empty)
    #[serde(default)]
    pub state: String,

    /// City names, in whatever order the service sends them
    #[serde(default)]
    pub cities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_keeps_unknown_fields() {
        let json = r#"{
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "de 612 a 1510 - lado par",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "ddd": "11"
        }"#;

        let addr: Address = serde_json::from_str(json).unwrap();
        assert_eq!(addr.street, "Avenida Paulista");
        assert_eq!(addr.city, "São Paulo");
        assert_eq!(addr.ddd(), Some("11"));
        assert_eq!(addr.extra.get("ibge"), Some(&Value::from("3550308")));

        let back = serde_json::to_value(&addr).unwrap();
        assert_eq!(back["logradouro"], "Avenida Paulista");
        assert_eq!(back["ibge"], "3550308");
    }

    #[test]
    fn address_tolerates_missing_fields() {
        let addr: Address = serde_json::from_str(r#"{"cep": "35700-000"}"#).unwrap();
        assert_eq!(addr.street, "");
        assert_eq!(addr.ddd(), None);
    }

    #[test]
    fn area_code_info() {
        let info: AreaCodeInfo =
            serde_json::from_str(r#"{"state": "MG", "cities": ["UBERABA", "UBÁ"]}"#).unwrap();
        assert_eq!(info.state, "MG");
        assert_eq!(info.cities.len(), 2);
    }
}
