//! Hand-off point from the external auth collaborator.
//!
//! The session token is owned elsewhere (login lives outside this app); it
//! is picked up from localStorage once at startup and travels down the
//! component tree through a `ContextProvider<AuthCtx>`. API calls receive
//! it as an explicit argument, so the client layer stays free of ambient
//! storage reads.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthCtx {
    /// Opaque bearer credential. Never inspected or refreshed here.
    pub token: Option<String>,
    /// Display name of the signed-in viewer, if any.
    pub user: Option<String>,
}

impl AuthCtx {
    /// Reads the stored session once. Absence of a token is a valid state:
    /// free lessons are viewable anonymously.
    pub fn from_storage() -> Self {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return AuthCtx::default();
        };
        AuthCtx {
            token: storage
                .get_item("token")
                .ok()
                .flatten()
                .filter(|t| !t.is_empty()),
            user: storage.get_item("user").ok().flatten(),
        }
    }
}
