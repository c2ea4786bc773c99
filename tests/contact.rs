mod common;

#[cfg(test)]
mod tests {
    use super::*;

    use common::*;
    use shinelix::ContactOptions;
    use shinelix::contact::{
        ContactDrafts, ContactField, ContactForm, ContactService, Error, FieldError,
        SUBMITTED_MESSAGE,
    };
    use shinelix::store::{MemoryStore, SnapshotStore};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::{Instant, sleep};

    fn form(message: &str) -> ContactForm {
        ContactForm {
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            phone: String::new(),
            subject: "Custom order".to_string(),
            message: message.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_draft_saved_after_quiet_period() {
        setup_tracing();
        let store = Arc::new(MemoryStore::new());
        let drafts = ContactDrafts::new(store.clone(), ContactOptions::default());

        drafts.schedule_save(form("H"));
        sleep(Duration::from_millis(400)).await;
        drafts.schedule_save(form("Hello"));
        sleep(Duration::from_millis(400)).await;
        assert!(drafts.is_save_pending());
        assert!(store.get("contact-form-data").unwrap().is_none());

        sleep(Duration::from_millis(700)).await;
        assert!(!drafts.is_save_pending());
        assert_eq!(drafts.load(), Some(form("Hello")));
    }

    #[tokio::test]
    async fn test_unreadable_draft_is_ignored() {
        let store = Arc::new(MemoryStore::new());
        store.set("contact-form-data", "not json").unwrap();
        let drafts = ContactDrafts::new(store, ContactOptions::default());
        assert_eq!(drafts.load(), None);
    }

    #[tokio::test]
    async fn test_partial_draft_fills_defaults() {
        let store = Arc::new(MemoryStore::new());
        store
            .set("contact-form-data", r#"{"name":"Meera","message":"Hi"}"#)
            .unwrap();
        let drafts = ContactDrafts::new(store, ContactOptions::default());

        let restored = drafts.load().unwrap();
        assert_eq!(restored.name, "Meera");
        assert_eq!(restored.message, "Hi");
        assert!(restored.email.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_then_discards_draft() {
        setup_tracing();
        let store = Arc::new(MemoryStore::new());
        let service = ContactService::new(store.clone(), ContactOptions::default());

        service.drafts().save_now(&form("Hello"));
        service.drafts().schedule_save(form("Hello again"));

        let started = Instant::now();
        let message = service.submit(&form("Hello again")).await.unwrap();
        assert_eq!(message, SUBMITTED_MESSAGE);
        assert!(started.elapsed() >= Duration::from_secs(2));

        sleep(Duration::from_secs(5)).await;
        assert!(store.get("contact-form-data").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_submission_keeps_draft() {
        let store = Arc::new(MemoryStore::new());
        let options = ContactOptions::build().submit_delay(Duration::ZERO);
        let service = ContactService::new(store.clone(), options);

        let invalid = ContactForm {
            email: "meera@".to_string(),
            ..form("")
        };
        service.drafts().save_now(&invalid);

        let Err(Error::Invalid(errors)) = service.submit(&invalid).await else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.get(ContactField::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.get(ContactField::Message), Some(&FieldError::Required));
        assert!(store.get("contact-form-data").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_counter_uses_configured_limit() {
        let service = ContactService::new(
            Arc::new(MemoryStore::new()),
            ContactOptions::build().max_message_length(200),
        );
        assert_eq!(service.counter(&form("x")).remaining, 199);
    }
}
