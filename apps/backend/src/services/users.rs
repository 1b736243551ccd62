//! Guest identity allocation.
//!
//! There is no account system; a client presents a previously issued id to
//! re-attach to its seat, or 0 to be issued a fresh one. The resolver only
//! guarantees that freshly issued ids never collide with re-presented ones.

use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: i64,
    pub display_name: String,
}

const MAX_NAME_LEN: usize = 32;

pub struct IdentityResolver {
    next_id: AtomicI64,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
        }
    }

    pub fn resolve(&self, requested_id: i64, display_name: &str) -> UserIdentity {
        let user_id = if requested_id > 0 {
            // Keep the counter ahead of any id a client brings back.
            self.next_id.fetch_max(requested_id + 1, Ordering::Relaxed);
            requested_id
        } else {
            self.next_id.fetch_add(1, Ordering::Relaxed)
        };

        let trimmed = display_name.trim();
        let display_name = if trimmed.is_empty() {
            format!("player-{user_id}")
        } else {
            trimmed.chars().take(MAX_NAME_LEN).collect()
        };

        UserIdentity {
            user_id,
            display_name,
        }
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}
