//! Backend-facing services.
//!
//! Views never touch [`crate::api::ApiClient`] directly; each service
//! owns one slice of the API and reduces every failure to a single
//! Korean message fit to render.

mod auth;
mod test;

pub use auth::{
    AuthService, OauthCallback, SOCIAL_LOGIN_FAILED, SocialProvider, parse_oauth_callback,
};
pub use test::TestService;

use thiserror::Error;

use crate::api::ApiError;

/// One human-readable failure message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ServiceError(pub String);

impl ServiceError {
    /// Backend `message` bodies win; transport noise collapses to the
    /// operation's own fallback text.
    fn from_api(error: ApiError, fallback: &str) -> Self {
        match error {
            ApiError::Status {
                message: Some(message),
                ..
            } => Self(message),
            ApiError::Status { message: None, .. }
            | ApiError::Network(_)
            | ApiError::Timeout { .. }
            | ApiError::Decode(_) => Self(fallback.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_message_wins_over_the_fallback() {
        let error = ApiError::Status {
            status: 401,
            message: Some("아이디 또는 비밀번호가 올바르지 않습니다.".to_string()),
        };
        assert_eq!(
            ServiceError::from_api(error, "로그인에 실패했습니다.").0,
            "아이디 또는 비밀번호가 올바르지 않습니다."
        );
    }

    #[test]
    fn bare_status_collapses_to_the_fallback() {
        let error = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(
            ServiceError::from_api(error, "로그인에 실패했습니다.").0,
            "로그인에 실패했습니다."
        );
    }

    #[test]
    fn transport_failures_collapse_to_the_fallback() {
        let failures = [
            ApiError::Network("connection refused".to_string()),
            ApiError::Timeout { ms: 10_000 },
            ApiError::Decode("unexpected end of input".to_string()),
        ];
        for error in failures {
            assert_eq!(
                ServiceError::from_api(error, "테스트 제출에 실패했습니다.").0,
                "테스트 제출에 실패했습니다."
            );
        }
    }
}
