//! Login and registration against a pluggable [`Authenticator`].

use bhub_domain::{UserRole, UserSession};
use uuid::Uuid;

use crate::{
    error::AuthError,
    session::{SessionContext, SessionStore},
    submission::{SimulatedLatency, SubmissionGuard},
    surface::{Route, Surface},
    CoreError,
};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: UserRole,
}

impl Registration {
    /// Checks, in order: every field present, passwords equal, minimum length.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserSession, AuthError>;
    fn register(&mut self, registration: &Registration) -> Result<UserSession, AuthError>;
}

#[derive(Debug, Clone)]
struct Account {
    user: UserSession,
    password: String,
}

/// In-memory accounts seeded with one demo login per role.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    accounts: Vec<Account>,
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        let seed = [
            ("1", "Admin User", "admin@example.com", "admin123", UserRole::Admin),
            ("2", "Client User", "client@example.com", "client123", UserRole::Client),
            (
                "3",
                "Event Organizer",
                "organizer@example.com",
                "organizer123",
                UserRole::Organizer,
            ),
        ];
        Self {
            accounts: seed
                .into_iter()
                .map(|(id, name, email, password, role)| Account {
                    user: UserSession::new(id, name, email, role),
                    password: password.to_string(),
                })
                .collect(),
        }
    }
}

impl DemoAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, email: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.user.email.eq_ignore_ascii_case(email.trim()))
    }
}

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserSession, AuthError> {
        credentials.validate()?;
        match self.find(&credentials.email) {
            Some(account) if account.password == credentials.password => Ok(account.user.clone()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    fn register(&mut self, registration: &Registration) -> Result<UserSession, AuthError> {
        registration.validate()?;
        if self.find(&registration.email).is_some() {
            return Err(AuthError::EmailTaken(registration.email.trim().to_string()));
        }
        let user = UserSession::new(
            Uuid::new_v4().to_string(),
            registration.name.trim(),
            registration.email.trim(),
            registration.role,
        );
        self.accounts.push(Account {
            user: user.clone(),
            password: registration.password.clone(),
        });
        Ok(user)
    }
}

/// Greeting shown after a successful login.
pub fn welcome_message(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Welcome back, Admin!",
        UserRole::Organizer => "Welcome back, Organizer!",
        UserRole::Client => "Welcome back!",
    }
}

/// Token for a submission that has passed validation and holds the in-flight flag.
#[derive(Debug)]
pub struct PendingSubmission<T> {
    payload: T,
}

impl<T> PendingSubmission<T> {
    pub(crate) fn new(payload: T) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

pub struct AuthService<A: Authenticator> {
    authenticator: A,
    guard: SubmissionGuard,
    latency: SimulatedLatency,
}

impl<A: Authenticator> AuthService<A> {
    pub fn new(authenticator: A, latency: SimulatedLatency) -> Self {
        Self {
            authenticator,
            guard: SubmissionGuard::new(),
            latency,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.is_in_flight()
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    pub fn set_latency(&mut self, latency: SimulatedLatency) {
        self.latency = latency;
    }

    pub fn submit_login(
        &mut self,
        credentials: Credentials,
    ) -> Result<PendingSubmission<Credentials>, CoreError> {
        credentials.validate()?;
        self.guard.begin()?;
        tracing::debug!(email = %credentials.email, "login submitted");
        Ok(PendingSubmission::new(credentials))
    }

    pub fn resolve_login<S: SessionStore>(
        &mut self,
        pending: PendingSubmission<Credentials>,
        session: &mut SessionContext<S>,
        surface: &mut dyn Surface,
    ) -> Result<UserSession, CoreError> {
        self.guard.complete();
        let user = match self.authenticator.authenticate(&pending.payload) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(email = %pending.payload.email, "login rejected");
                surface.notify_error(&err.to_string());
                return Err(err.into());
            }
        };
        session.sign_in(user.clone())?;
        surface.notify_success(welcome_message(user.role));
        surface.navigate_to(Route::Dashboard);
        Ok(user)
    }

    /// Submit, wait out the simulated latency, then resolve.
    pub fn login<S: SessionStore>(
        &mut self,
        credentials: Credentials,
        session: &mut SessionContext<S>,
        surface: &mut dyn Surface,
    ) -> Result<UserSession, CoreError> {
        let pending = self.submit_login(credentials).map_err(|err| report(err, surface))?;
        self.latency.wait();
        self.resolve_login(pending, session, surface)
    }

    pub fn submit_registration(
        &mut self,
        registration: Registration,
    ) -> Result<PendingSubmission<Registration>, CoreError> {
        registration.validate()?;
        self.guard.begin()?;
        tracing::debug!(email = %registration.email, role = %registration.role, "registration submitted");
        Ok(PendingSubmission::new(registration))
    }

    pub fn resolve_registration<S: SessionStore>(
        &mut self,
        pending: PendingSubmission<Registration>,
        session: &mut SessionContext<S>,
        surface: &mut dyn Surface,
    ) -> Result<UserSession, CoreError> {
        self.guard.complete();
        let user = match self.authenticator.register(&pending.payload) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(email = %pending.payload.email, "registration rejected");
                surface.notify_error(&err.to_string());
                return Err(err.into());
            }
        };
        session.sign_in(user.clone())?;
        surface.notify_success("Registration successful!");
        surface.navigate_to(Route::Dashboard);
        Ok(user)
    }

    pub fn register<S: SessionStore>(
        &mut self,
        registration: Registration,
        session: &mut SessionContext<S>,
        surface: &mut dyn Surface,
    ) -> Result<UserSession, CoreError> {
        let pending = self
            .submit_registration(registration)
            .map_err(|err| report(err, surface))?;
        self.latency.wait();
        self.resolve_registration(pending, session, surface)
    }
}

/// Surfaces user-input failures; other errors pass through silently.
fn report(err: CoreError, surface: &mut dyn Surface) -> CoreError {
    if let CoreError::Auth(auth) = &err {
        surface.notify_error(&auth.to_string());
    }
    err
}
