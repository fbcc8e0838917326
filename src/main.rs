pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::modules::auth::application::ports::incoming::use_cases::AuthUseCase;
use crate::modules::auth::application::services::mock_auth_service::{
    AdminCredentials, MockAuthService,
};
use crate::modules::auth::application::services::session_store::SessionStore;
use crate::modules::chat::adapter::outgoing::chat_agent_disabled::DisabledChatAgent;
use crate::modules::chat::adapter::outgoing::chat_agent_http::HttpChatAgent;
use crate::modules::chat::application::ports::incoming::use_cases::ChatUseCase;
use crate::modules::chat::application::ports::outgoing::chat_agent::ChatAgent;
use crate::modules::chat::application::services::chat_service::ChatService;
use crate::modules::contact::adapter::outgoing::log_notifier::LogContactNotifier;
use crate::modules::contact::adapter::outgoing::smtp_notifier::SmtpContactNotifier;
use crate::modules::contact::application::ports::incoming::use_cases::ContactUseCase;
use crate::modules::contact::application::ports::outgoing::contact_notifier::ContactNotifier;
use crate::modules::contact::application::services::contact_service::ContactService;
use crate::modules::content::adapter::outgoing::snapshot_store_memory::MemorySnapshotStore;
use crate::modules::content::adapter::outgoing::snapshot_store_redb::RedbSnapshotStore;
use crate::modules::content::application::ports::incoming::use_cases::{
    HomeContentUseCase, PortfolioContentUseCase,
};
use crate::modules::content::application::ports::outgoing::snapshot_store::SnapshotStore;
use crate::modules::content::application::services::home_content_service::HomeContentService;
use crate::modules::content::application::services::portfolio_content_service::PortfolioContentService;
use crate::modules::multimedia::adapter::outgoing::image_store_fs::FsImageStore;
use crate::modules::multimedia::application::ports::incoming::use_cases::UploadUseCase;
use crate::modules::multimedia::application::services::upload_service::UploadService;
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

// Upload bodies above this never reach the handler; the per-file policy
// inside the upload service enforces the real (smaller) limit so the client
// sees the JSON error envelope instead of a bare 413.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub home_content: Arc<dyn HomeContentUseCase>,
    pub portfolio_content: Arc<dyn PortfolioContentUseCase>,
    pub auth: Arc<dyn AuthUseCase>,
    pub chat: Arc<dyn ChatUseCase>,
    pub contact: Arc<dyn ContactUseCase>,
    pub uploads: Arc<dyn UploadUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env();
    std::fs::create_dir_all(&config.data_dir)?;
    std::fs::create_dir_all(&config.uploads_dir)?;

    // Durable redb file, in-memory fallback when it cannot be opened. The
    // fallback keeps the site serving defaults but loses admin edits on
    // restart.
    let store: Arc<dyn SnapshotStore> = match RedbSnapshotStore::open(config.snapshot_db_path()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("snapshot store unavailable, falling back to memory: {}", e);
            Arc::new(MemorySnapshotStore::new())
        }
    };

    let home_content = Arc::new(HomeContentService::new(Arc::clone(&store)));
    home_content.start_carousel().await;
    let portfolio_content = PortfolioContentService::new(Arc::clone(&store));

    let sessions = Arc::new(SessionStore::new());
    let auth_service = MockAuthService::new(AdminCredentials::from_env(), Arc::clone(&sessions));

    let agent: Arc<dyn ChatAgent> = match &config.chat_agent_url {
        Some(url) => Arc::new(HttpChatAgent::new(url.clone())),
        None => {
            warn!("CHAT_AGENT_URL not set, chat replies degrade to the fallback message");
            Arc::new(DisabledChatAgent)
        }
    };
    let chat_service = ChatService::new(agent);

    // SMTP SETUPS
    let notifier: Arc<dyn ContactNotifier> = match std::env::var("SMTP_SERVER") {
        Ok(smtp_server) => {
            let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
            let owner_email = std::env::var("CONTACT_EMAIL").expect("CONTACT_EMAIL not set");

            if env == "test" {
                // Local Mailpit
                let port: u16 = std::env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "1025".to_string())
                    .parse()
                    .expect("Invalid SMTP_PORT");

                Arc::new(SmtpContactNotifier::new_local(
                    &smtp_server,
                    port,
                    &from_email,
                    &owner_email,
                ))
            } else {
                let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
                let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

                match SmtpContactNotifier::new(
                    &smtp_server,
                    &smtp_user,
                    &smtp_pass,
                    &from_email,
                    &owner_email,
                ) {
                    Ok(notifier) => Arc::new(notifier),
                    Err(e) => {
                        warn!(
                            "SMTP relay setup failed, contact messages go to the log: {}",
                            e
                        );
                        Arc::new(LogContactNotifier)
                    }
                }
            }
        }
        Err(_) => {
            warn!("SMTP_SERVER not set, contact messages go to the log");
            Arc::new(LogContactNotifier)
        }
    };
    let contact_service = ContactService::new(notifier);

    let image_store = Arc::new(FsImageStore::new(config.uploads_dir.clone()));
    let upload_service = UploadService::new(image_store);

    let state = AppState {
        home_content,
        portfolio_content: Arc::new(portfolio_content),
        auth: Arc::new(auth_service),
        chat: Arc::new(chat_service),
        contact: Arc::new(contact_service),
        uploads: Arc::new(upload_service),
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    let config_for_server = config.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&sessions)))
            .app_data(web::Data::new(Arc::clone(&store)))
            .app_data(web::Data::new(config_for_server.clone()))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Home page
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_home_page_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_carousel_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::save_gallery_item_handler);
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::delete_gallery_item_handler,
    );
    cfg.service(crate::modules::content::adapter::incoming::web::routes::save_achievement_handler);
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::delete_achievement_handler,
    );
    cfg.service(crate::modules::content::adapter::incoming::web::routes::save_home_section_handler);
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::delete_home_section_handler,
    );
    cfg.service(crate::modules::content::adapter::incoming::web::routes::update_bio_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::update_headings_handler);
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::update_profile_images_handler,
    );
    cfg.service(crate::modules::content::adapter::incoming::web::routes::start_home_draft_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::cancel_home_draft_handler);
    // Portfolio page
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::patch_profile_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::save_skill_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::delete_skill_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::save_project_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::delete_project_handler);
    // The fixed /order segment must be registered before the {id} matcher.
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::reorder_portfolio_sections_handler,
    );
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::save_portfolio_section_handler,
    );
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::delete_portfolio_section_handler,
    );
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::start_portfolio_draft_handler,
    );
    cfg.service(
        crate::modules::content::adapter::incoming::web::routes::cancel_portfolio_draft_handler,
    );
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::logout_handler);
    // Chat
    cfg.service(crate::modules::chat::adapter::incoming::web::routes::send_message_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler);
    // Images
    cfg.service(crate::modules::multimedia::adapter::incoming::web::routes::upload_image_handler);
    cfg.service(crate::modules::multimedia::adapter::incoming::web::routes::serve_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
