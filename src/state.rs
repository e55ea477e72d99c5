//! Application state management
//!
//! This module defines the AppState structure that holds:
//! - The in-memory playback token store
//! - The numeric media-id route guard
//! - Server configuration

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use regex::Regex;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::registry::ServerLabel;

/// A stored association between a playback token and the
/// (server label, media id) pair it authorizes.
///
/// Bindings are immutable once created. Validity is purely a function
/// of wall-clock time at read time: a binding is valid iff the current
/// time is strictly before `expires_at`.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Opaque token granting time-limited access to this binding
    pub token: String,
    /// Which embed template the binding resolves through
    pub label: ServerLabel,
    /// Caller-supplied media identifier, stored verbatim
    pub media_id: String,
    /// Creation time (informational, surfaced on the debug endpoint)
    pub created_at: DateTime<Utc>,
    /// Absolute expiry time
    pub expires_at: DateTime<Utc>,
}

impl Binding {
    /// Create a new binding valid for `ttl_secs` from now.
    ///
    /// The token is a UUIDv4 rendered as 32 lowercase hex characters.
    /// 122 bits of CSPRNG-seeded randomness make guessing infeasible
    /// within the binding's validity window.
    pub fn new(label: ServerLabel, media_id: &str, ttl_secs: u64) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4().simple().to_string(),
            label,
            media_id: media_id.to_string(),
            created_at: now,
            expires_at: now + Duration::seconds(ttl_secs as i64),
        }
    }

    /// Whether this binding has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Store statistics, surfaced on the debug endpoint
#[derive(Debug, serde::Serialize)]
pub struct BindingStats {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
}

/// Application state shared across all handlers
pub struct AppState {
    /// Active bindings (token -> Binding)
    pub bindings: DashMap<String, Binding>,

    /// Route guard for the default-server redirect (`/play/{id}`)
    numeric_id: Regex,

    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self {
            bindings: DashMap::new(),
            // The pattern is a literal and cannot fail to compile.
            numeric_id: Regex::new(r"^[0-9]+$").unwrap(),
            config,
        }
    }

    /// Create AppState with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ServerConfig::default())
    }

    /// Whether `id` is acceptable for the default-server redirect route.
    pub fn is_numeric_id(&self, id: &str) -> bool {
        self.numeric_id.is_match(id)
    }

    /// Mint a token and record a binding for (label, media_id).
    ///
    /// Every call produces a fresh token, even for identical arguments;
    /// each resolves independently.
    pub fn create_binding(&self, label: ServerLabel, media_id: &str) -> Binding {
        let binding = Binding::new(label, media_id, self.config.tokens.ttl_secs);
        self.bindings.insert(binding.token.clone(), binding.clone());
        binding
    }

    /// Look up a binding by token.
    ///
    /// Returns `None` for unknown tokens and for expired ones. An entry
    /// found expired is removed on the way out, so a lookup never
    /// resurrects it and the store sheds dead weight between sweeps.
    /// Resolving a valid binding does not mutate or invalidate it.
    pub fn resolve_binding(&self, token: &str) -> Option<Binding> {
        match self.bindings.get(token) {
            Some(entry) if !entry.is_expired() => Some(entry.clone()),
            Some(entry) => {
                // The shard read guard must be released before remove()
                // touches the same shard.
                drop(entry);
                self.bindings.remove(token);
                None
            }
            None => None,
        }
    }

    /// Remove expired bindings
    /// Returns number of removed bindings
    pub fn cleanup_expired_bindings(&self) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|_, binding| !binding.is_expired());
        before.saturating_sub(self.bindings.len())
    }

    /// Number of stored bindings, expired entries included
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Get store statistics
    pub fn binding_stats(&self) -> BindingStats {
        let total = self.bindings.len();
        let expired = self
            .bindings
            .iter()
            .filter(|entry| entry.is_expired())
            .count();
        BindingStats {
            total,
            active: total - expired,
            expired,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_defaults()
    }
}
