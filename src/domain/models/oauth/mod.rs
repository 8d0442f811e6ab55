//! OAuth 프로바이더별 도메인 모델
//!
//! 현재는 Microsoft Entra ID만 지원합니다. 프로바이더가 추가되면
//! `{provider}_model` 모듈을 만들고 `ExternalIdentity`로 변환하는
//! 메서드를 제공하면 됩니다.

pub mod entra_id_model;
