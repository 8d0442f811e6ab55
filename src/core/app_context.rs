//! 서비스 조립과 `app_data` 등록

use std::sync::Arc;

use actix_web::web;

use crate::{
    config::{EntraIdConfig, RecoveryConfig, ServerConfig, SessionConfig},
    middlewares::SessionManager,
    repositories::users::UserStore,
    services::{
        auth::{EntraIdAuthService, PasswordRecoveryService},
        mail::{LogMailer, Mailer},
        users::{PasswordHasher, UserService},
    },
};

#[derive(Clone)]
pub struct AppContext {
    pub users: web::Data<UserService>,
    pub recovery: web::Data<PasswordRecoveryService>,
    pub sessions: web::Data<SessionManager>,
    /// `ENTRA_CLIENT_ID`가 없으면 `None` (SSO 비활성화)
    pub entra_id: Option<web::Data<EntraIdAuthService>>,
}

impl AppContext {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        mailer: Arc<dyn Mailer>,
        session_config: SessionConfig,
        recovery_config: RecoveryConfig,
        entra_id_config: Option<EntraIdConfig>,
    ) -> Self {
        let users = Arc::new(UserService::new(store.clone(), hasher));
        let recovery = PasswordRecoveryService::new(store, hasher, mailer, recovery_config);
        let entra_id = entra_id_config
            .map(|config| web::Data::new(EntraIdAuthService::new(config, users.clone())));

        Self {
            users: web::Data::from(users),
            recovery: web::Data::new(recovery),
            sessions: web::Data::new(SessionManager::new(session_config)),
            entra_id,
        }
    }

    /// 환경 변수 설정과 로그 메일러로 구성합니다.
    pub fn from_env(store: Arc<dyn UserStore>) -> Self {
        let base_url = ServerConfig::public_base_url();
        let entra_id = EntraIdConfig::from_env(&base_url);

        match &entra_id {
            Some(config) => log::info!("🔐 Entra ID SSO 활성화 (tenant: {})", config.tenant_id),
            None => log::info!("Entra ID SSO 비활성화 (ENTRA_CLIENT_ID 없음)"),
        }

        Self::new(
            store,
            PasswordHasher::from_env(),
            Arc::new(LogMailer),
            SessionConfig::from_env(),
            RecoveryConfig::from_env(base_url),
            entra_id,
        )
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.recovery.clone())
            .app_data(self.sessions.clone());

        if let Some(entra_id) = &self.entra_id {
            cfg.app_data(entra_id.clone());
        }
    }
}
