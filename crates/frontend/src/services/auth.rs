//! Login, logout and the social sign-in redirect flow.

use std::fmt;
use std::str::FromStr;

use api_types::{LoginRequest, LoginResponse};

use super::ServiceError;
use crate::api::{self, ApiClient};
use crate::log;
use crate::session::SessionStore;

const LOGIN_PATH: &str = "/api/members/login";
const LOGOUT_PATH: &str = "/api/members/logout";

const LOGIN_FAILED: &str = "로그인에 실패했습니다.";
const UNSUPPORTED_PROVIDER: &str = "지원하지 않는 소셜 로그인입니다.";

/// Shown when a provider redirect lands back with an error marker.
pub const SOCIAL_LOGIN_FAILED: &str = "소셜 로그인에 실패했습니다.";

/// Identity providers the backend has OAuth registrations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Kakao,
    Naver,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 3] = [
        SocialProvider::Google,
        SocialProvider::Kakao,
        SocialProvider::Naver,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::Kakao => "kakao",
            SocialProvider::Naver => "naver",
        }
    }

    /// Korean label shown on the login buttons.
    pub fn label(self) -> &'static str {
        match self {
            SocialProvider::Google => "구글",
            SocialProvider::Kakao => "카카오",
            SocialProvider::Naver => "네이버",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialProvider {
    type Err = ServiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "google" => Ok(SocialProvider::Google),
            "kakao" => Ok(SocialProvider::Kakao),
            "naver" => Ok(SocialProvider::Naver),
            _ => Err(ServiceError(UNSUPPORTED_PROVIDER.to_string())),
        }
    }
}

/// Outcome of scanning the login page's query string for an OAuth
/// redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OauthCallback {
    /// Plain visit, no redirect parameters.
    None,
    /// The provider bounced back with an error marker.
    Failed,
    /// The provider handed over a token and nickname.
    Success { token: String, nickname: String },
}

/// Parses the query string (`?token=..&nickname=..` or `?error=..`) a
/// social provider redirect lands with. An error marker wins over
/// anything else; a success needs both values present and non-empty.
pub fn parse_oauth_callback(query: &str) -> OauthCallback {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut token = None;
    let mut nickname = None;
    let mut failed = false;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "error" => failed = true,
            "token" => token = Some(value.into_owned()),
            "nickname" => nickname = Some(value.into_owned()),
            _ => {}
        }
    }

    if failed {
        return OauthCallback::Failed;
    }
    match (token, nickname) {
        (Some(token), Some(nickname)) if !token.is_empty() && !nickname.is_empty() => {
            OauthCallback::Success { token, nickname }
        }
        _ => OauthCallback::None,
    }
}

/// Credential and social sign-in against the member API.
pub struct AuthService {
    client: ApiClient,
    session: SessionStore,
}

impl AuthService {
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Exchanges credentials for a token. The session is untouched
    /// until the caller runs [`AuthService::complete_login`].
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        self.client
            .post_json(LOGIN_PATH, request)
            .await
            .map_err(|error| ServiceError::from_api(error, LOGIN_FAILED))
    }

    /// Commits a login to the session. The nickname lands before the
    /// token; subscribers fire on the token change and must find the
    /// name already readable.
    pub fn complete_login(&self, response: &LoginResponse) {
        self.session.set_nickname(&response.nickname);
        self.session.set_token(Some(response.access_token.clone()));
    }

    /// Tells the backend, then forgets the session locally no matter
    /// what the backend answered.
    pub async fn logout(&self) {
        let result = self.client.post_empty(LOGOUT_PATH).await;
        self.finish_logout(result);
    }

    fn finish_logout(&self, result: api::Result<()>) {
        if let Err(error) = result {
            log::warn(&format!("logout request failed: {error}"));
        }
        self.session.clear_all();
    }

    /// Full-page redirect into the backend's OAuth flow.
    pub fn social_login(&self, provider: &str) -> Result<(), ServiceError> {
        let provider: SocialProvider = provider.parse()?;
        redirect_to(&self.authorization_url(provider));
        Ok(())
    }

    /// `{base}/oauth2/authorization/{provider}`, resolved against the
    /// backend origin rather than the SPA's own.
    pub fn authorization_url(&self, provider: SocialProvider) -> String {
        format!(
            "{}/oauth2/authorization/{}",
            self.client.base_url(),
            provider
        )
    }
}

fn redirect_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(url).is_err() {
        log::error("failed to start the social login redirect");
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::api::ApiError;
    use crate::config::ApiConfig;
    use crate::session::ClientStorage;
    use crate::session::testing::MemoryStorage;

    fn service(storage: &Rc<MemoryStorage>) -> AuthService {
        let session = SessionStore::new(Rc::clone(storage));
        let client = ApiClient::new(
            ApiConfig {
                base_url: "http://localhost:8090".to_string(),
                timeout_ms: 10_000,
            },
            session.reader(),
        );
        AuthService::new(client, session)
    }

    fn login_response() -> LoginResponse {
        LoginResponse {
            nickname: "홍길동".to_string(),
            access_token: "jwt.token".to_string(),
        }
    }

    #[test]
    fn provider_allow_list_accepts_known_names() {
        assert_eq!(
            "google".parse::<SocialProvider>().unwrap(),
            SocialProvider::Google
        );
        assert_eq!(
            "kakao".parse::<SocialProvider>().unwrap(),
            SocialProvider::Kakao
        );
        assert_eq!(
            "naver".parse::<SocialProvider>().unwrap(),
            SocialProvider::Naver
        );
    }

    #[test]
    fn provider_allow_list_rejects_unknown_names() {
        let error = "facebook".parse::<SocialProvider>().unwrap_err();
        assert_eq!(error.0, "지원하지 않는 소셜 로그인입니다.");
    }

    #[test]
    fn authorization_url_targets_the_backend_origin() {
        let service = service(&MemoryStorage::shared());
        assert_eq!(
            service.authorization_url(SocialProvider::Kakao),
            "http://localhost:8090/oauth2/authorization/kakao"
        );
    }

    #[test]
    fn complete_login_persists_both_session_halves() {
        let storage = MemoryStorage::shared();
        let service = service(&storage);

        service.complete_login(&login_response());
        assert_eq!(storage.token().as_deref(), Some("jwt.token"));
        assert_eq!(storage.nickname().as_deref(), Some("홍길동"));
    }

    #[test]
    fn finish_logout_clears_the_session_on_success() {
        let storage = MemoryStorage::shared();
        let service = service(&storage);
        service.complete_login(&login_response());

        service.finish_logout(Ok(()));
        assert_eq!(storage.token(), None);
        assert_eq!(storage.nickname(), None);
    }

    #[test]
    fn finish_logout_clears_the_session_even_when_the_call_failed() {
        let storage = MemoryStorage::shared();
        let service = service(&storage);
        service.complete_login(&login_response());

        service.finish_logout(Err(ApiError::Network("connection reset".to_string())));
        assert_eq!(storage.token(), None);
        assert_eq!(storage.nickname(), None);
    }

    #[test]
    fn callback_parses_success_parameters() {
        let outcome = parse_oauth_callback("?token=jwt.abc&nickname=%ED%99%8D%EA%B8%B8%EB%8F%99");
        assert_eq!(
            outcome,
            OauthCallback::Success {
                token: "jwt.abc".to_string(),
                nickname: "홍길동".to_string(),
            }
        );
    }

    #[test]
    fn callback_error_marker_wins_over_credentials() {
        let outcome = parse_oauth_callback("?error=access_denied&token=x&nickname=y");
        assert_eq!(outcome, OauthCallback::Failed);
    }

    #[test]
    fn callback_requires_both_values_non_empty() {
        assert_eq!(parse_oauth_callback("?token=jwt.abc"), OauthCallback::None);
        assert_eq!(
            parse_oauth_callback("?token=&nickname=%ED%99%8D"),
            OauthCallback::None
        );
        assert_eq!(parse_oauth_callback(""), OauthCallback::None);
    }
}
