//! OAuth 콜백 쿼리 DTO

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "authorization code is missing"))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "state is missing"))]
    pub state: String,

    /// 사용자가 동의를 거부하면 프로바이더가 채워서 보냄
    pub error: Option<String>,
    pub error_description: Option<String>,
}
