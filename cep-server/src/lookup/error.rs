//! Lookup error types.

use std::fmt;

/// The external service a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// Postal-code service.
    ViaCep,
    /// Area-code service.
    BrasilApi,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::ViaCep => f.write_str("ViaCEP"),
            Upstream::BrasilApi => f.write_str("BrasilAPI"),
        }
    }
}

/// Errors from the remote lookup client.
///
/// Messages are user-facing and in Portuguese: they end up on error cards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Input rejected before any request was made
    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    /// The postal-code service answered with its not-found sentinel
    #[error("CEP não encontrado")]
    NotFound,

    /// The address search returned an empty collection
    #[error("nenhum resultado")]
    NoResults,

    /// The service answered with a non-success status
    #[error("HTTP {status} ao consultar {upstream}. {body}")]
    Service {
        upstream: Upstream,
        status: u16,
        body: String,
    },

    /// The request could not complete (DNS, timeout, offline)
    #[error("falha na comunicação com {upstream}: {message}")]
    Network { upstream: Upstream, message: String },

    /// A success response whose body is not the expected JSON
    #[error("resposta inválida de {upstream}: {message}")]
    Decode { upstream: Upstream, message: String },

    /// The client could not be built
    #[error("configuração inválida: {0}")]
    Config(String),
}

impl LookupError {
    /// Wrap a transport failure, keeping the whole cause chain in the message.
    pub fn network(upstream: Upstream, err: &reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        LookupError::Network { upstream, message }
    }

    /// Whether this failure came from talking to a service, as opposed to
    /// validation or an empty answer.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            LookupError::Service { .. } | LookupError::Network { .. } | LookupError::Decode { .. }
        )
    }
}
