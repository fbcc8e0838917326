use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::AdminUser;
use crate::modules::auth::application::ports::incoming::use_cases::AuthUseCase;
use crate::modules::auth::application::services::mock_auth_service::{
    AdminCredentials, MockAuthService,
};
use crate::modules::auth::application::services::session_store::SessionStore;
use crate::modules::chat::application::ports::incoming::use_cases::ChatUseCase;
use crate::modules::chat::application::ports::outgoing::chat_agent::{ChatAgent, ChatAgentError};
use crate::modules::chat::application::services::chat_service::ChatService;
use crate::modules::contact::adapter::outgoing::log_notifier::LogContactNotifier;
use crate::modules::contact::application::ports::incoming::use_cases::ContactUseCase;
use crate::modules::contact::application::services::contact_service::ContactService;
use crate::modules::content::adapter::outgoing::snapshot_store_memory::MemorySnapshotStore;
use crate::modules::content::application::ports::incoming::use_cases::{
    HomeContentUseCase, PortfolioContentUseCase,
};
use crate::modules::content::application::services::home_content_service::HomeContentService;
use crate::modules::content::application::services::portfolio_content_service::PortfolioContentService;
use crate::modules::multimedia::adapter::outgoing::image_store_memory::MemoryImageStore;
use crate::modules::multimedia::application::ports::incoming::use_cases::UploadUseCase;
use crate::modules::multimedia::application::services::upload_service::UploadService;
use crate::AppState;

struct StaticAgent;

#[async_trait]
impl ChatAgent for StaticAgent {
    async fn reply(&self, _message: &str) -> Result<String, ChatAgentError> {
        Ok("He is a software developer.".to_string())
    }
}

/// Builds an `AppState` wired to in-memory adapters, with per-test overrides.
pub struct TestAppStateBuilder {
    store: Arc<MemorySnapshotStore>,
    sessions: Arc<SessionStore>,
    home: Arc<dyn HomeContentUseCase>,
    portfolio: Arc<dyn PortfolioContentUseCase>,
    auth: Arc<dyn AuthUseCase>,
    chat: Arc<dyn ChatUseCase>,
    contact: Arc<dyn ContactUseCase>,
    uploads: Arc<dyn UploadUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let store = Arc::new(MemorySnapshotStore::new());
        let sessions = Arc::new(SessionStore::new());
        let credentials = AdminCredentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };

        Self {
            home: Arc::new(HomeContentService::new(store.clone())),
            portfolio: Arc::new(PortfolioContentService::new(store.clone())),
            auth: Arc::new(MockAuthService::new(credentials, sessions.clone())),
            chat: Arc::new(ChatService::new(Arc::new(StaticAgent))),
            contact: Arc::new(ContactService::new(Arc::new(LogContactNotifier))),
            uploads: Arc::new(UploadService::new(Arc::new(MemoryImageStore::new()))),
            store,
            sessions,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_home_content(mut self, home: impl HomeContentUseCase + 'static) -> Self {
        self.home = Arc::new(home);
        self
    }

    pub fn with_portfolio_content(
        mut self,
        portfolio: impl PortfolioContentUseCase + 'static,
    ) -> Self {
        self.portfolio = Arc::new(portfolio);
        self
    }

    pub fn with_auth(mut self, auth: impl AuthUseCase + 'static) -> Self {
        self.auth = Arc::new(auth);
        self
    }

    pub fn with_chat(mut self, chat: impl ChatUseCase + 'static) -> Self {
        self.chat = Arc::new(chat);
        self
    }

    pub fn with_contact(mut self, contact: impl ContactUseCase + 'static) -> Self {
        self.contact = Arc::new(contact);
        self
    }

    pub fn with_uploads(mut self, uploads: impl UploadUseCase + 'static) -> Self {
        self.uploads = Arc::new(uploads);
        self
    }

    /// The snapshot store behind the default content services.
    pub fn store(&self) -> Arc<MemorySnapshotStore> {
        self.store.clone()
    }

    pub fn sessions(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    /// The session map as route `app_data`, for secure-route tests.
    pub fn session_data(&self) -> web::Data<Arc<SessionStore>> {
        web::Data::new(self.sessions.clone())
    }

    /// Mint a valid admin token directly into the session store.
    pub fn issue_token(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions
            .insert(token.clone(), AdminUser::admin("admin"));
        token
    }

    pub fn uploads(&self) -> Arc<dyn UploadUseCase> {
        self.uploads.clone()
    }

    pub fn build(&self) -> web::Data<AppState> {
        web::Data::new(AppState {
            home_content: self.home.clone(),
            portfolio_content: self.portfolio.clone(),
            auth: self.auth.clone(),
            chat: self.chat.clone(),
            contact: self.contact.clone(),
            uploads: self.uploads.clone(),
        })
    }
}
