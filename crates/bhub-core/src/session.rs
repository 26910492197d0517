//! The signed-in user, owned explicitly and persisted through a [`SessionStore`].

use std::sync::Mutex;

use bhub_domain::UserSession;

use crate::CoreError;

/// Persistence backend for the single `user` record.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<UserSession>, CoreError>;
    fn save(&self, user: &UserSession) -> Result<(), CoreError>;
    fn clear(&self) -> Result<(), CoreError>;
}

/// Store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    slot: Mutex<Option<UserSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<UserSession>>, CoreError> {
        self.slot
            .lock()
            .map_err(|_| CoreError::Storage("session slot poisoned".into()))
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<UserSession>, CoreError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, user: &UserSession) -> Result<(), CoreError> {
        *self.lock()? = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        *self.lock()? = None;
        Ok(())
    }
}

/// Current user plus the store backing it.
pub struct SessionContext<S: SessionStore> {
    store: S,
    user: Option<UserSession>,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store, user: None }
    }

    /// Restores a previously persisted user, if any.
    pub fn load(store: S) -> Result<Self, CoreError> {
        let user = store.load()?;
        if let Some(user) = &user {
            tracing::info!(user = %user.email, role = %user.role, "session restored");
        }
        Ok(Self { store, user })
    }

    pub fn user(&self) -> Option<&UserSession> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn require_user(&self) -> Result<&UserSession, CoreError> {
        self.user.as_ref().ok_or(CoreError::NotAuthenticated)
    }

    pub fn sign_in(&mut self, user: UserSession) -> Result<(), CoreError> {
        self.store.save(&user)?;
        tracing::info!(user = %user.email, role = %user.role, "signed in");
        self.user = Some(user);
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<(), CoreError> {
        self.store.clear()?;
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.email, "signed out");
        }
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhub_domain::UserRole;

    fn organizer() -> UserSession {
        UserSession::new("3", "Event Organizer", "organizer@example.com", UserRole::Organizer)
    }

    #[test]
    fn sign_in_persists_and_reload_restores() {
        let mut context = SessionContext::new(InMemorySessionStore::new());
        assert!(!context.is_authenticated());
        context.sign_in(organizer()).unwrap();

        let store = context.store;
        let restored = SessionContext::load(store).unwrap();
        assert_eq!(restored.user(), Some(&organizer()));
    }

    #[test]
    fn sign_out_clears_store() {
        let mut context = SessionContext::new(InMemorySessionStore::new());
        context.sign_in(organizer()).unwrap();
        context.sign_out().unwrap();
        assert!(context.user().is_none());
        assert_eq!(context.store().load().unwrap(), None);
        assert!(matches!(context.require_user(), Err(CoreError::NotAuthenticated)));
    }
}
