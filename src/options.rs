//! Builder-style configuration.

use std::time::Duration;

/// Configuration for a [`CartManager`](crate::cart::CartManager).
///
/// # Example
///
/// ```rust
/// use shinelix::CartOptions;
///
/// let options = CartOptions::build()
///     .storage_key("my-cart")
///     .channel_capacity(32);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CartOptions {
    /// Key the cart snapshot is stored under.
    pub storage_key: &'static str,
    /// Buffered events per subscriber before the slowest one starts lagging.
    pub channel_capacity: usize,
}

impl Default for CartOptions {
    fn default() -> Self {
        Self {
            storage_key: "shinelix-cart",
            channel_capacity: 16,
        }
    }
}

impl CartOptions {
    /// Creates a new `CartOptions` with default values.
    pub fn build() -> Self {
        Self::default()
    }

    pub fn storage_key(mut self, key: &'static str) -> Self {
        self.storage_key = key;
        self
    }

    /// Clamped to at least one; a broadcast channel cannot be empty.
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}

/// Configuration for [`LiveSearch`](crate::search::LiveSearch).
#[derive(Clone, Copy, Debug)]
pub struct SearchOptions {
    pub quiet_period: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(300),
        }
    }
}

impl SearchOptions {
    pub fn build() -> Self {
        Self::default()
    }

    pub fn quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }
}

/// Configuration for the contact form's drafts and submission.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shinelix::ContactOptions;
///
/// let options = ContactOptions::build()
///     .autosave_quiet_period(Duration::from_millis(500))
///     .submit_delay(Duration::ZERO);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ContactOptions {
    pub draft_key: &'static str,
    pub autosave_quiet_period: Duration,
    /// Simulated round trip of a submission.
    pub submit_delay: Duration,
    pub max_message_length: usize,
}

impl Default for ContactOptions {
    fn default() -> Self {
        Self {
            draft_key: "contact-form-data",
            autosave_quiet_period: Duration::from_millis(1000),
            submit_delay: Duration::from_secs(2),
            max_message_length: 1000,
        }
    }
}

impl ContactOptions {
    pub fn build() -> Self {
        Self::default()
    }

    pub fn draft_key(mut self, key: &'static str) -> Self {
        self.draft_key = key;
        self
    }

    pub fn autosave_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.autosave_quiet_period = quiet_period;
        self
    }

    pub fn submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn max_message_length(mut self, length: usize) -> Self {
        self.max_message_length = length;
        self
    }
}
