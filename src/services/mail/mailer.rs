//! 메일 발송
//!
//! SMTP 연동은 범위 밖이므로 개발/운영 모두 [`LogMailer`]가 메일 내용을 로그로 남기고,
//! 테스트는 [`MemoryMailer`]로 발송된 메일을 검사합니다.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, message: MailMessage) -> Result<(), AppError>;
}

/// 메일을 발송하지 않고 로그로 출력
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn deliver(&self, message: MailMessage) -> Result<(), AppError> {
        log::info!(
            "📧 메일 발송: from={} to={} subject={:?}\n{}",
            message.from,
            message.to,
            message.subject,
            message.body
        );
        Ok(())
    }
}

/// 발송된 메일을 메모리에 쌓아 두는 메일러
#[derive(Debug, Default)]
pub struct MemoryMailer {
    deliveries: Mutex<Vec<MailMessage>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<MailMessage> {
        self.deliveries
            .lock()
            .map(|deliveries| deliveries.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.deliveries.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn last(&self) -> Option<MailMessage> {
        self.deliveries().pop()
    }

    pub fn clear(&self) {
        if let Ok(mut deliveries) = self.deliveries.lock() {
            deliveries.clear();
        }
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn deliver(&self, message: MailMessage) -> Result<(), AppError> {
        self.deliveries
            .lock()
            .map_err(|_| AppError::InternalError("mailer lock poisoned".to_string()))?
            .push(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> MailMessage {
        MailMessage {
            from: "from@example.com".to_string(),
            to: "to@example.com".to_string(),
            subject: "Subject".to_string(),
            body: "Body".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_memory_mailer_records_deliveries() {
        let mailer = MemoryMailer::new();
        assert_eq!(mailer.count(), 0);

        mailer.deliver(message()).await.unwrap();

        assert_eq!(mailer.count(), 1);
        assert_eq!(mailer.last(), Some(message()));

        mailer.clear();
        assert!(mailer.deliveries().is_empty());
    }

    #[actix_web::test]
    async fn test_log_mailer_accepts_message() {
        assert!(LogMailer.deliver(message()).await.is_ok());
    }
}
