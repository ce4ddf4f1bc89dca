use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::ports::outgoing::token_provider::{
    InvalidTokenReason, TokenClaims, TokenError, TokenProvider, TOKEN_ISSUER,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::topic::application::domain::entities::{TopicId, TopicStatus};
use crate::topic::application::ports::incoming::use_cases::{
    DeleteTopicError, DeleteTopicUseCase, GetTopicError, GetTopicUseCase, ListTopicsError,
    ListTopicsUseCase, RegisterTopicCommand, RegisterTopicError, RegisterTopicUseCase,
    UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{PageRequest, PageResult, TopicView};

// ============================================================
// Fixtures
// ============================================================

pub fn sample_topic_view(id: i64, title: &str) -> TopicView {
    TopicView {
        id: TopicId::from(id),
        title: title.to_string(),
        message: format!("Message for {}", title),
        created_at: Utc::now(),
        status: TopicStatus::Active,
        author: "ana".to_string(),
        course: "Rust".to_string(),
    }
}

// ============================================================
// Token providers
// ============================================================

/// Accepts any token and reports it as belonging to `login`.
#[derive(Clone)]
pub struct StubTokenProvider {
    pub login: String,
}

impl StubTokenProvider {
    pub fn for_login(login: &str) -> Self {
        Self {
            login: login.to_string(),
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_token(&self, subject: &str) -> Result<String, TokenError> {
        Ok(format!("stub-token-for-{}", subject))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            iss: TOKEN_ISSUER.to_string(),
            sub: self.login.clone(),
            iat: now,
            exp: now + 3600,
        })
    }
}

/// Rejects every token as expired.
#[derive(Clone, Default)]
pub struct RejectingTokenProvider;

impl TokenProvider for RejectingTokenProvider {
    fn generate_token(&self, _subject: &str) -> Result<String, TokenError> {
        unimplemented!("Not used in this test")
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Err(TokenError::Invalid(InvalidTokenReason::Expired))
    }
}

// ============================================================
// Login
// ============================================================

#[derive(Clone)]
pub struct StubLoginUserUseCase {
    result: Result<LoginUserResponse, LoginError>,
}

impl StubLoginUserUseCase {
    pub fn success(token: &str) -> Self {
        Self {
            result: Ok(LoginUserResponse::bearer(token.to_string())),
        }
    }

    pub fn failure(error: LoginError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubLoginUserUseCase {
    fn default() -> Self {
        Self::failure(LoginError::InvalidCredentials)
    }
}

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        self.result.clone()
    }
}

// ============================================================
// Topics
// ============================================================

#[derive(Clone)]
pub struct StubRegisterTopicUseCase {
    result: Result<TopicView, RegisterTopicError>,
}

impl StubRegisterTopicUseCase {
    pub fn success(view: TopicView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn failure(error: RegisterTopicError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubRegisterTopicUseCase {
    fn default() -> Self {
        Self::failure(RegisterTopicError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl RegisterTopicUseCase for StubRegisterTopicUseCase {
    async fn execute(
        &self,
        _command: RegisterTopicCommand,
    ) -> Result<TopicView, RegisterTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListTopicsUseCase {
    items: Result<Vec<TopicView>, ListTopicsError>,
    total_items: u64,
}

impl StubListTopicsUseCase {
    /// Echoes the requested page back with `items`.
    pub fn success(items: Vec<TopicView>, total_items: u64) -> Self {
        Self {
            items: Ok(items),
            total_items,
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            items: Err(ListTopicsError::QueryFailed(msg.to_string())),
            total_items: 0,
        }
    }
}

impl Default for StubListTopicsUseCase {
    fn default() -> Self {
        Self::success(vec![], 0)
    }
}

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<TopicView>, ListTopicsError> {
        let items = self.items.clone()?;
        Ok(PageResult::new(items, page, self.total_items))
    }
}

#[derive(Clone)]
pub struct StubGetTopicUseCase {
    result: Result<TopicView, GetTopicError>,
}

impl StubGetTopicUseCase {
    pub fn success(view: TopicView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn failure(error: GetTopicError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubGetTopicUseCase {
    fn default() -> Self {
        Self::failure(GetTopicError::NotFound)
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _topic_id: TopicId) -> Result<TopicView, GetTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateTopicUseCase {
    result: Result<TopicView, UpdateTopicError>,
}

impl StubUpdateTopicUseCase {
    pub fn success(view: TopicView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn failure(error: UpdateTopicError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubUpdateTopicUseCase {
    fn default() -> Self {
        Self::failure(UpdateTopicError::NotFound)
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, _command: UpdateTopicCommand) -> Result<TopicView, UpdateTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteTopicUseCase {
    result: Result<(), DeleteTopicError>,
}

impl StubDeleteTopicUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failure(error: DeleteTopicError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubDeleteTopicUseCase {
    fn default() -> Self {
        Self::failure(DeleteTopicError::NotFound)
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: TopicId) -> Result<(), DeleteTopicError> {
        self.result.clone()
    }
}
