//! Error types and S3 error codes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use s3mock_core::CoreError;
use thiserror::Error;

/// S3 error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum S3ErrorCode {
    BucketAlreadyExists,
    BucketNotEmpty,
    InternalError,
    InvalidArgument,
    InvalidBucketName,
    NoSuchBucket,
}

impl S3ErrorCode {
    /// Get the error code string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BucketAlreadyExists => "BucketAlreadyExists",
            Self::BucketNotEmpty => "BucketNotEmpty",
            Self::InternalError => "InternalError",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidBucketName => "InvalidBucketName",
            Self::NoSuchBucket => "NoSuchBucket",
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BucketAlreadyExists | Self::BucketNotEmpty => StatusCode::CONFLICT,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidArgument | Self::InvalidBucketName => StatusCode::BAD_REQUEST,
            Self::NoSuchBucket => StatusCode::NOT_FOUND,
        }
    }
}

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("S3 error: {code:?} - {message}")]
    S3Error {
        code: S3ErrorCode,
        message: String,
        resource: Option<String>,
        request_id: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl ApiError {
    /// Create a new S3 error
    pub fn s3(code: S3ErrorCode, message: impl Into<String>) -> Self {
        Self::S3Error {
            code,
            message: message.into(),
            resource: None,
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Create with resource
    pub fn s3_with_resource(
        code: S3ErrorCode,
        message: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self::S3Error {
            code,
            message: message.into(),
            resource: Some(resource.into()),
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Get the error code
    pub fn error_code(&self) -> S3ErrorCode {
        match self {
            Self::S3Error { code, .. } => *code,
            Self::Internal(_) => S3ErrorCode::InternalError,
            Self::Core(e) => match e {
                CoreError::InvalidBucketName(_) => S3ErrorCode::InvalidBucketName,
                CoreError::BucketAlreadyExists(_) => S3ErrorCode::BucketAlreadyExists,
                CoreError::BucketNotFound(_) => S3ErrorCode::NoSuchBucket,
                CoreError::BucketNotEmpty(_) => S3ErrorCode::BucketNotEmpty,
                CoreError::InvalidTag(_) => S3ErrorCode::InvalidArgument,
                CoreError::Io(_)
                | CoreError::Serialization(_)
                | CoreError::Deserialization(_)
                | CoreError::KeyRegistry(_) => S3ErrorCode::InternalError,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.error_code();
        let status = code.status_code();
        let request_id = match &self {
            ApiError::S3Error { request_id, .. } => request_id.clone(),
            _ => uuid::Uuid::new_v4().to_string(),
        };
        let resource = match &self {
            ApiError::S3Error {
                resource: Some(resource),
                ..
            } => format!("\n    <Resource>{}</Resource>", escape_xml(resource)),
            _ => String::new(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, request_id = %request_id, "Request failed");
        }

        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
    <Code>{}</Code>
    <Message>{}</Message>{}
    <RequestId>{}</RequestId>
</Error>"#,
            code.as_str(),
            escape_xml(&self.to_string()),
            resource,
            request_id
        );

        // x-amz-error-code lets clients classify HEAD failures, which carry no body
        (
            status,
            [
                ("Content-Type", "application/xml"),
                ("x-amz-request-id", request_id.as_str()),
                ("x-amz-error-code", code.as_str()),
            ],
            xml,
        )
            .into_response()
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_s3_codes() {
        let cases = [
            (CoreError::InvalidBucketName("x".into()), S3ErrorCode::InvalidBucketName, 400),
            (CoreError::BucketAlreadyExists("x".into()), S3ErrorCode::BucketAlreadyExists, 409),
            (CoreError::BucketNotEmpty("x".into()), S3ErrorCode::BucketNotEmpty, 409),
            (CoreError::BucketNotFound("x".into()), S3ErrorCode::NoSuchBucket, 404),
            (CoreError::InvalidTag("x".into()), S3ErrorCode::InvalidArgument, 400),
            (
                CoreError::Io(std::io::Error::other("disk full")),
                S3ErrorCode::InternalError,
                500,
            ),
        ];

        for (core, code, status) in cases {
            let err = ApiError::from(core);
            assert_eq!(err.error_code(), code);
            assert_eq!(err.error_code().status_code().as_u16(), status);
        }
    }

    #[test]
    fn test_error_response_headers() {
        let response = ApiError::s3_with_resource(
            S3ErrorCode::NoSuchBucket,
            "The specified bucket does not exist",
            "/missing",
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-amz-error-code"], "NoSuchBucket");
        assert!(response.headers().contains_key("x-amz-request-id"));
    }
}
