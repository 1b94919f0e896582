use gloo_storage::{SessionStorage, Storage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, warn};

use super::errors::SessionError;

/// Get current time in seconds since UNIX epoch (WASM compatible)
#[cfg(target_arch = "wasm32")]
pub(crate) fn current_time_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn current_time_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Applicant,
    Reviewer,
    Admin,
}

/// What the signed-in user is allowed to do in the portal
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    ViewApplications,
    CreateApplications,
    EditApplications,
    ReviewApplications,
}

impl Role {
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Applicant => &[
                Capability::ViewApplications,
                Capability::CreateApplications,
                Capability::EditApplications,
            ],
            Role::Reviewer => &[Capability::ViewApplications, Capability::ReviewApplications],
            Role::Admin => &[
                Capability::ViewApplications,
                Capability::CreateApplications,
                Capability::EditApplications,
                Capability::ReviewApplications,
            ],
        }
    }
}

/// Capabilities resolved once from a session's roles
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub fn for_roles(roles: &[Role]) -> Self {
        Self(
            roles
                .iter()
                .flat_map(|role| role.capabilities().iter().copied())
                .collect(),
        )
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Signed-in user as issued by the authentication service.
///
/// Passed explicitly to every page and gateway; there is no global session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(rename = "accessToken", alias = "access_token")]
    pub access_token: String,
    /// Seconds since UNIX epoch
    #[serde(default)]
    pub expires_at: Option<u64>,
    #[serde(skip)]
    capabilities: CapabilitySet,
}

impl Session {
    pub fn new(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        roles: Vec<Role>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            email: String::new(),
            capabilities: CapabilitySet::for_roles(&roles),
            roles,
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    pub fn with_expiry(mut self, expires_at: u64) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Recomputes the capability set; used after deserialization
    fn with_resolved_capabilities(mut self) -> Self {
        self.capabilities = CapabilitySet::for_roles(&self.roles);
        self
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.allows(capability)
    }

    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        match self.expires_at {
            Some(expires_at) => now_secs >= expires_at,
            None => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_time_secs())
    }
}

/// Reads and writes the session in `sessionStorage`
pub struct SessionManager {
    storage_key: String,
}

impl SessionManager {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
        }
    }

    pub fn store_session(&self, session: &Session) -> Result<(), SessionError> {
        SessionStorage::set(&self.storage_key, session).map_err(|e| SessionError::Storage {
            message: format!("Failed to store session in sessionStorage: {:?}", e),
        })?;
        info!("Session stored for user: {}", session.user_id);
        Ok(())
    }

    /// Stored session with capabilities resolved; expired sessions are cleared
    pub fn get_session(&self) -> Result<Option<Session>, SessionError> {
        let session: Session = match SessionStorage::get(&self.storage_key) {
            Ok(session) => session,
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => return Ok(None),
            Err(e) => {
                return Err(SessionError::Storage {
                    message: format!("Failed to read session: {:?}", e),
                })
            }
        };

        if session.is_expired() {
            warn!("Stored session is expired for user: {}", session.user_id);
            self.clear_session();
            return Ok(None);
        }

        Ok(Some(session.with_resolved_capabilities()))
    }

    pub fn clear_session(&self) {
        SessionStorage::delete(&self.storage_key);
        info!("Session cleared");
    }
}
