use std::panic::Location;

use thiserror::Error;
use tonic::Code;

use crate::cache::CacheError;

/// Gateway error taxonomy.
///
/// Leaf variants describe what went wrong; [`MetaError::Api`] wraps a cause with
/// the public operation that failed, the salient request fields and the call
/// site. [`MetaError::code`] decides the status a caller finally sees.
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("rpc error ({}): {}", .0.code(), .0.message())]
    Rpc(#[from] tonic::Status),

    #[error("transport error: {0}")]
    Transport(#[from] core_grpc::GrpcError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("{api} failed [{message}] at {location}: {source}")]
    Api {
        api: &'static str,
        code: Code,
        message: String,
        location: &'static Location<'static>,
        #[source]
        source: Box<MetaError>,
    },

    #[error("{}", display_chain(.0))]
    Chain(Vec<MetaError>),
}

pub type MetaResult<T> = Result<T, MetaError>;

fn display_chain(errors: &[MetaError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn is_cancellation(code: Code) -> bool {
    matches!(code, Code::Cancelled | Code::DeadlineExceeded)
}

impl MetaError {
    /// Wrap `source` as a failure of the public operation `api`.
    #[track_caller]
    pub fn api(api: &'static str, code: Code, message: impl Into<String>, source: MetaError) -> Self {
        MetaError::Api {
            api,
            code,
            message: message.into(),
            location: Location::caller(),
            source: Box::new(source),
        }
    }

    #[track_caller]
    pub fn internal(api: &'static str, message: impl Into<String>, source: MetaError) -> Self {
        Self::api(api, Code::Internal, message, source)
    }

    #[track_caller]
    pub fn not_found(api: &'static str, message: impl Into<String>, source: MetaError) -> Self {
        Self::api(api, Code::NotFound, message, source)
    }

    #[track_caller]
    pub fn already_exists(api: &'static str, key: impl Into<String>) -> Self {
        let key = key.into();
        Self::api(
            api,
            Code::AlreadyExists,
            format!("key={key}"),
            MetaError::AlreadyExists(key),
        )
    }

    /// Wrap a vector backend failure. A backend `NotFound` stays `NotFound`,
    /// anything else is reported as `Internal`.
    #[track_caller]
    pub fn backend(api: &'static str, message: impl Into<String>, source: MetaError) -> Self {
        let code = if source.code() == Code::NotFound {
            Code::NotFound
        } else {
            Code::Internal
        };
        Self::api(api, code, message, source)
    }

    /// Status code for this error.
    ///
    /// Cancellation and deadline expiry anywhere in the cause chain win over
    /// the wrapping code.
    pub fn code(&self) -> Code {
        match self {
            MetaError::NotFound(_) => Code::NotFound,
            MetaError::AlreadyExists(_) => Code::AlreadyExists,
            MetaError::InvalidArgument(_) => Code::InvalidArgument,
            MetaError::Rpc(status) => status.code(),
            MetaError::Transport(_) => Code::Unavailable,
            MetaError::Cache(_) | MetaError::Internal(_) => Code::Internal,
            MetaError::Api { code, source, .. } => {
                let inner = source.code();
                if is_cancellation(inner) { inner } else { *code }
            }
            MetaError::Chain(errors) => {
                let codes: Vec<Code> = errors.iter().map(MetaError::code).collect();
                codes
                    .iter()
                    .copied()
                    .find(|c| is_cancellation(*c))
                    .or_else(|| codes.first().copied())
                    .unwrap_or(Code::Internal)
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == Code::NotFound
    }

    /// Append `other` to this error, flattening nested chains.
    pub fn append(self, other: MetaError) -> MetaError {
        let mut errors = match self {
            MetaError::Chain(errors) => errors,
            single => vec![single],
        };
        match other {
            MetaError::Chain(more) => errors.extend(more),
            single => errors.push(single),
        }
        MetaError::Chain(errors)
    }

    /// Fold a list of errors into one, `None` when the list is empty.
    pub fn chain(errors: Vec<MetaError>) -> Option<MetaError> {
        let mut iter = errors.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, MetaError::append))
    }
}

impl From<MetaError> for tonic::Status {
    fn from(err: MetaError) -> Self {
        tonic::Status::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_uses_wrapping_code() {
        let err = MetaError::internal("Insert", "key=k1", MetaError::Rpc(tonic::Status::unavailable("down")));
        assert_eq!(err.code(), Code::Internal);
        let msg = err.to_string();
        assert!(msg.contains("Insert"));
        assert!(msg.contains("key=k1"));
        assert!(msg.contains("down"));
    }

    #[test]
    fn test_cancellation_propagates_unmodified() {
        let err = MetaError::internal("Search", "", MetaError::Rpc(tonic::Status::cancelled("gone")));
        assert_eq!(err.code(), Code::Cancelled);

        let err = MetaError::not_found(
            "SearchByID",
            "",
            MetaError::internal("", "", MetaError::Rpc(tonic::Status::deadline_exceeded("late"))),
        );
        assert_eq!(err.code(), Code::DeadlineExceeded);
    }

    #[test]
    fn test_backend_keeps_not_found() {
        let err = MetaError::backend("GetObject", "id=x", MetaError::Rpc(tonic::Status::not_found("x")));
        assert_eq!(err.code(), Code::NotFound);
        let err = MetaError::backend("GetObject", "id=x", MetaError::Rpc(tonic::Status::aborted("x")));
        assert_eq!(err.code(), Code::Internal);
    }

    #[test]
    fn test_chain_flattens_in_order() {
        let err = MetaError::chain(vec![
            MetaError::NotFound("a".into()),
            MetaError::AlreadyExists("b".into()).append(MetaError::Internal("c".into())),
        ])
        .unwrap();
        match &err {
            MetaError::Chain(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected chain, got {other:?}"),
        }
        assert_eq!(err.code(), Code::NotFound);
        assert_eq!(
            err.to_string(),
            "not found: a; already exists: b; internal error: c"
        );
    }

    #[test]
    fn test_chain_of_nothing_is_none() {
        assert!(MetaError::chain(Vec::new()).is_none());
    }

    #[test]
    fn test_location_points_at_caller() {
        let err = MetaError::already_exists("Insert", "k1");
        match err {
            MetaError::Api { location, .. } => assert!(location.file().ends_with("error.rs")),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_conversion() {
        let status: tonic::Status = MetaError::already_exists("Insert", "k1").into();
        assert_eq!(status.code(), Code::AlreadyExists);
        assert!(status.message().contains("k1"));
    }
}
