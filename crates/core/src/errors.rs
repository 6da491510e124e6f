use thiserror::Error;

use crate::config::ConfigError;

/// Failure modes of bid evaluation. Every variant is a structured result
/// handed back to the caller; evaluation never panics on malformed data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// An argument could not be interpreted as structured data of the
    /// expected shape. Nothing is computed past the first malformed
    /// argument.
    #[error("invalid {argument} input: {reason}")]
    InvalidInput { argument: &'static str, reason: String },
    #[error("product catalog is empty")]
    EmptyCatalog,
    /// Every catalog entry failed coercion, so no candidate was eligible.
    #[error("no viable product meets the requested specification")]
    NoViableProduct,
    /// Context wrapper naming the bid line a failure occurred on.
    #[error("bid line `{label}`: {source}")]
    BidLine {
        label: String,
        #[source]
        source: Box<EvaluationError>,
    },
}

impl EvaluationError {
    pub fn invalid_input(argument: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidInput { argument, reason: reason.to_string() }
    }

    pub fn for_line(label: impl Into<String>, source: EvaluationError) -> Self {
        Self::BidLine { label: label.into(), source: Box::new(source) }
    }

    /// Stable machine-readable class for host error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::EmptyCatalog => "empty_catalog",
            Self::NoViableProduct => "no_viable_product",
            Self::BidLine { source, .. } => source.kind(),
        }
    }

    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        InterfaceError::from(self).with_correlation_id(correlation_id)
    }
}

/// Host-facing error surface: a user-safe message plus the correlation id
/// the host logged the failure under.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The bid inputs could not be processed. Check the uploaded data and try again."
            }
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        match &mut self {
            Self::BadRequest { correlation_id: id, .. }
            | Self::Internal { correlation_id: id, .. } => *id = correlation_id.into(),
        }
        self
    }
}

impl From<EvaluationError> for InterfaceError {
    fn from(value: EvaluationError) -> Self {
        // Every evaluation failure traces back to caller-supplied data.
        Self::BadRequest { message: value.to_string(), correlation_id: "unassigned".to_owned() }
    }
}

impl From<ConfigError> for InterfaceError {
    fn from(value: ConfigError) -> Self {
        Self::Internal { message: value.to_string(), correlation_id: "unassigned".to_owned() }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigError;
    use crate::errors::{EvaluationError, InterfaceError};

    #[test]
    fn evaluation_errors_map_to_bad_request_with_correlation_id() {
        let interface = EvaluationError::EmptyCatalog.into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest {
                ref correlation_id,
                ..
            } if correlation_id == "req-1"
        ));
        assert_eq!(
            interface.user_message(),
            "The bid inputs could not be processed. Check the uploaded data and try again."
        );
    }

    #[test]
    fn config_errors_map_to_internal() {
        let interface = InterfaceError::from(ConfigError::Validation(
            "weights must sum to 1.0".to_owned(),
        ))
        .with_correlation_id("req-2");

        assert!(matches!(interface, InterfaceError::Internal { .. }));
        assert_eq!(interface.user_message(), "An unexpected internal error occurred.");
    }

    #[test]
    fn line_wrapper_reports_the_inner_kind() {
        let error = EvaluationError::for_line("Material 2", EvaluationError::NoViableProduct);

        assert_eq!(error.kind(), "no_viable_product");
        assert_eq!(
            error.to_string(),
            "bid line `Material 2`: no viable product meets the requested specification"
        );
    }

    #[test]
    fn invalid_input_names_the_offending_argument() {
        let error = EvaluationError::invalid_input("catalog", "expected an array");

        assert_eq!(error.kind(), "invalid_input");
        assert_eq!(error.to_string(), "invalid catalog input: expected an array");
    }
}
