use std::sync::Arc;

use crate::coalesce::Coalescer;
use crate::store::{SnapshotStore, deserialize_value, serialize_value};
use crate::ContactOptions;

use super::ContactForm;

/// Autosaves an in-progress contact form so a reload does not lose it.
///
/// Saves are coalesced: typing schedules a write that only lands after the
/// configured quiet period.
#[derive(Debug)]
pub struct ContactDrafts<S: SnapshotStore> {
    store: Arc<S>,
    key: &'static str,
    coalescer: Coalescer,
}

impl<S: SnapshotStore> ContactDrafts<S> {
    pub fn new(store: Arc<S>, options: ContactOptions) -> Self {
        Self {
            store,
            key: options.draft_key,
            coalescer: Coalescer::new(options.autosave_quiet_period),
        }
    }

    /// Restores the saved draft. Unreadable drafts are treated as absent.
    #[tracing::instrument(name = "loading contact draft", skip(self))]
    pub fn load(&self) -> Option<ContactForm> {
        let raw = self
            .store
            .get(self.key)
            .map_err(|err| {
                tracing::warn!(err = %err, "failed to read contact draft");
                err
            })
            .ok()??;

        deserialize_value(&raw)
            .map_err(|err| {
                tracing::warn!(err = %err, "could not load saved form data");
                err
            })
            .ok()
    }

    /// Saves `form` once edits have paused.
    pub fn schedule_save(&self, form: ContactForm) {
        let store = self.store.clone();
        let key = self.key;
        self.coalescer.trigger(move || write(store.as_ref(), key, &form));
    }

    /// Saves `form` immediately, superseding any scheduled save.
    pub fn save_now(&self, form: &ContactForm) {
        self.coalescer.cancel();
        write(self.store.as_ref(), self.key, form);
    }

    pub fn is_save_pending(&self) -> bool {
        self.coalescer.is_pending()
    }

    /// Cancels pending saves and deletes the stored draft.
    #[tracing::instrument(name = "discarding contact draft", skip(self))]
    pub fn discard(&self) {
        self.coalescer.cancel();
        if let Err(err) = self.store.remove(self.key) {
            tracing::error!(err = %err, "failed to remove contact draft");
        }
    }
}

fn write<S: SnapshotStore>(store: &S, key: &str, form: &ContactForm) {
    let result = serialize_value(form).and_then(|raw| store.set(key, &raw));
    match result {
        Ok(()) => tracing::debug!(key, "contact draft saved"),
        Err(err) => tracing::error!(err = %err, "failed to save contact draft"),
    }
}
