//! Query error types.
//!
//! The messages are what the user reads on the error card.

use crate::domain::Uf;
use crate::lookup::LookupError;

/// Errors from the four queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Postal code does not have 8 digits
    #[error("Por favor, digite um CEP válido com 8 dígitos.")]
    InvalidCep,

    /// Address form incomplete (any of UF, city, street)
    #[error("Por favor, preencha os campos UF (2 letras), Cidade e Rua.")]
    IncompleteAddress,

    /// Postal code unknown to the service
    #[error("CEP não encontrado. Verifique o número e tente novamente.")]
    CepNotFound,

    /// Address search matched nothing
    #[error("Nenhum endereço encontrado com os dados fornecidos.")]
    NoAddressFound,

    /// City query without a state or a city
    #[error("Selecione o estado e informe a cidade.")]
    MissingCityQuery,

    /// State selection is not one of the 27 units
    #[error("Estado desconhecido: {0}.")]
    UnknownState(String),

    /// The state has no area codes in the reference table
    #[error("Não há DDDs cadastrados para este estado.")]
    NoAreaCodes,

    /// No area code of the state serves the city
    #[error("Nenhum DDD encontrado para \"{city}\" em {state_name} ({uf}).")]
    CityNotFound {
        city: String,
        state_name: &'static str,
        uf: Uf,
    },

    /// The lookup itself failed
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
