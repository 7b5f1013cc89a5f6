use once_cell::sync::Lazy;
use std::sync::RwLock;

use crate::auth::claims;

/// Read-only snapshot of the session, threaded into every gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub token: String,
    /// Tenant the admin is working under. Superadmin-scope operations
    /// do not need one.
    pub company_id: Option<String>,
}

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    company_id: Option<String>,
}

/// Process-wide session state. Only the authentication subsystem writes
/// here; the core reads atomic snapshots.
static SESSION: Lazy<RwLock<SessionState>> = Lazy::new(|| RwLock::new(SessionState::default()));

pub fn store_token(token: impl Into<String>) {
    let mut state = SESSION.write().expect("session state lock poisoned");
    state.token = Some(token.into());
}

pub fn select_company(company_id: impl Into<String>) {
    let mut state = SESSION.write().expect("session state lock poisoned");
    state.company_id = Some(company_id.into());
}

/// Drop the stored credential and tenant selection (logout).
pub fn clear() {
    let mut state = SESSION.write().expect("session state lock poisoned");
    *state = SessionState::default();
}

pub fn current_token() -> Option<String> {
    SESSION
        .read()
        .expect("session state lock poisoned")
        .token
        .clone()
}

pub fn current_company() -> Option<String> {
    SESSION
        .read()
        .expect("session state lock poisoned")
        .company_id
        .clone()
}

/// Snapshot the session for one command. Absent or expired credentials
/// yield `None`; the dispatcher turns that into the auth guard path.
pub fn snapshot() -> Option<SessionContext> {
    let state = SESSION.read().expect("session state lock poisoned");
    let token = state.token.clone()?;

    if let Err(e) = claims::inspect_token(&token) {
        log::debug!("Stored credential rejected: {}", e);
        return None;
    }

    Some(SessionContext {
        token,
        company_id: state.company_id.clone(),
    })
}

/// Where a dispatcher reads its session from.
///
/// Production code uses [`ProcessSession`]; tests inject a fixed context
/// so they never touch process-wide state.
pub trait SessionSource: Send + Sync {
    fn snapshot(&self) -> Option<SessionContext>;
}

/// The process-wide session storage above, as a `SessionSource`.
pub struct ProcessSession;

impl SessionSource for ProcessSession {
    fn snapshot(&self) -> Option<SessionContext> {
        snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn live_token() -> String {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize
            + 900;
        let claims = claims::Claims {
            sub: "hradmin".to_string(),
            role: 2,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap()
    }

    // One sequential scenario; the state under test is process-wide.
    #[test]
    fn session_lifecycle() {
        clear();
        assert_eq!(snapshot(), None);

        store_token(live_token());
        select_company("c1");

        let ctx = snapshot().expect("live session");
        assert_eq!(ctx.company_id.as_deref(), Some("c1"));
        assert_eq!(current_company().as_deref(), Some("c1"));
        assert!(current_token().is_some());

        store_token("not-a-jwt");
        assert_eq!(snapshot(), None, "unreadable credential counts as absent");

        clear();
        assert_eq!(current_token(), None);
        assert_eq!(current_company(), None);
    }
}
