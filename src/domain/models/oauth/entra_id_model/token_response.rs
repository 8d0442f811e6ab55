//! Entra ID 토큰 엔드포인트 응답

use serde::Deserialize;

/// Authorization Code 교환 결과
#[derive(Debug, Deserialize)]
pub struct EntraTokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// 토큰 엔드포인트 에러 응답 (`error`, `error_description`)
#[derive(Debug, Deserialize)]
pub struct EntraErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}
