/// Navigation boundary owned by the presentation shell.
///
/// The dispatcher calls this exactly once per command that settles
/// `Unauthenticated`, whether the server answered 401/403 or no usable
/// credential was found locally.
pub trait Navigator: Send + Sync {
    /// Force the user back to the login page.
    fn redirect_to_login(&self);
}

/// Fallback guard used when no shell is attached; only logs.
pub struct LoginRedirect;

impl Navigator for LoginRedirect {
    fn redirect_to_login(&self) {
        tracing::warn!("Session rejected, redirecting to login");
    }
}
