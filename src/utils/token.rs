//! 무작위 토큰 및 다이제스트 유틸리티
//!
//! 비밀번호 재설정 토큰, OAuth state, SSO 사용자의 임의 비밀번호 생성에 사용됩니다.
//! 난수원은 `rand::rng()` (OS 엔트로피로 시드되는 CSPRNG)입니다.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// 기본 토큰 길이
pub const FRIENDLY_TOKEN_LENGTH: usize = 20;

/// 읽을 때 헷갈리는 문자
const AMBIGUOUS: [char; 4] = ['l', 'I', 'O', '0'];

/// 3의 배수라서 base64 문자 하나하나가 온전한 6비트를 담음
const CHUNK_BYTES: usize = 30;

/// URL에 안전하고 헷갈리는 문자(`l`, `I`, `O`, `0`)가 없는 무작위 토큰
///
/// 무작위 바이트를 base64url로 인코딩한 뒤 헷갈리는 문자를 버리므로 남은 60개
/// 문자가 균등하게 나옵니다. 문자당 약 5.9비트, 기본 길이 20이면 약 118비트입니다.
pub fn friendly_token(length: usize) -> String {
    let mut rng = rand::rng();
    let mut token = String::with_capacity(length);

    while token.len() < length {
        let mut bytes = [0u8; CHUNK_BYTES];
        rng.fill_bytes(&mut bytes);

        let encoded = URL_SAFE_NO_PAD.encode(bytes);
        token.extend(encoded.chars().filter(|c| !AMBIGUOUS.contains(c)));
    }

    token.truncate(length);
    token
}

/// 저장용 SHA-256 다이제스트 (16진수 소문자)
///
/// 원본 토큰은 메일로만 전달되고 DB에는 다이제스트만 저장됩니다.
pub fn token_digest(raw: &str) -> String {
    format!("{:x}", Sha256::digest(raw.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_friendly_token_length_and_alphabet() {
        for length in [1, 20, 64] {
            let token = friendly_token(length);
            assert_eq!(token.len(), length);
            assert!(token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
            assert!(!token.contains(['l', 'I', 'O', '0']));
        }
    }

    #[test]
    fn test_friendly_token_symbols_are_balanced() {
        let sample: String = (0..500).map(|_| friendly_token(FRIENDLY_TOKEN_LENGTH)).collect();

        let distinct: HashSet<char> = sample.chars().collect();
        assert_eq!(distinct.len(), 60);

        // 10,000자 중 한 문자의 기대 빈도는 약 167
        for c in ['s', 'x', 'y', 'z'] {
            let count = sample.chars().filter(|&s| s == c).count();
            assert!(count < 250, "{} appeared {} times", c, count);
        }
    }

    #[test]
    fn test_friendly_token_uniqueness() {
        let tokens: HashSet<String> = (0..500).map(|_| friendly_token(FRIENDLY_TOKEN_LENGTH)).collect();

        assert_eq!(tokens.len(), 500);
    }

    #[test]
    fn test_token_digest_is_stable_hex() {
        let digest = token_digest("abc");

        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(digest, token_digest("abc"));
        assert_ne!(digest, token_digest("abd"));
    }
}
