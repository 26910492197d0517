use std::path::{Path, PathBuf};

use bhub_config::{Config, ConfigManager};
use bhub_core::format::LocaleFormat;
use bhub_core::{
    AuthService, BookingWizard, ContactService, DashboardService,
    DemoAuthenticator, PricingPolicy, SessionContext, SimulatedLatency, StaticCatalog,
};
use bhub_domain::BookingConfirmation;
use bhub_storage_json::JsonSessionStore;
use dialoguer::theme::ColorfulTheme;

use crate::cli::commands;
use crate::cli::console_surface::ConsoleSurface;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::test_mode;
use crate::errors::CliError;
use crate::utils::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything one shell session works with.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) theme: ColorfulTheme,
    pub(crate) home: PathBuf,
    pub(crate) config_manager: ConfigManager,
    pub(crate) config: Config,
    pub(crate) catalog: StaticCatalog,
    pub(crate) session: SessionContext<JsonSessionStore>,
    pub(crate) auth: AuthService<DemoAuthenticator>,
    pub(crate) contact: ContactService,
    pub(crate) wizard: Option<BookingWizard>,
    pub(crate) dashboard: Option<DashboardService>,
    pub(crate) confirmed: Vec<BookingConfirmation>,
    pub(crate) surface: ConsoleSurface,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_home(mode, paths::app_data_dir())
    }

    /// Builds a context rooted at `home` (config and session live below it).
    pub fn with_home(mode: CliMode, home: PathBuf) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(home.clone())?;
        let config = config_manager.load()?;
        output::set_color_enabled(config.ui_color_enabled);

        let store = JsonSessionStore::new(config.resolve_session_dir(&home))?;
        let session = SessionContext::load(store)?;

        let auth = AuthService::new(
            DemoAuthenticator::new(),
            SimulatedLatency::from_millis(config.latency.login_ms),
        );
        let contact = ContactService::new(SimulatedLatency::from_millis(config.latency.contact_ms));

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            home,
            config_manager,
            config,
            catalog: StaticCatalog::demo(),
            session,
            auth,
            contact,
            wizard: None,
            dashboard: None,
            confirmed: Vec::new(),
            surface: ConsoleSurface::new(),
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn home(&self) -> &Path {
        &self.home
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    /// Prompts are possible on a terminal or when answers are scripted.
    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive || test_mode::is_enabled()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn locale(&self) -> LocaleFormat {
        LocaleFormat::new(self.config.currency.as_str())
    }

    pub(crate) fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy {
            duration_hours: self.config.pricing.duration_hours,
            attendee_estimate: self.config.pricing.attendee_estimate,
            deposit_rate: self.config.pricing.deposit_rate,
        }
    }

    /// Validates and stores `config`, then applies it to the running session.
    pub(crate) fn replace_config(&mut self, config: Config) -> CommandResult {
        self.config_manager.save(&config)?;
        self.config = config;
        output::set_color_enabled(self.config.ui_color_enabled);
        self.auth
            .set_latency(SimulatedLatency::from_millis(self.config.latency.login_ms));
        self.contact
            .set_latency(SimulatedLatency::from_millis(self.config.latency.contact_ms));
        Ok(())
    }

    /// Dashboard for the signed-in user, rebuilt when the role changes.
    pub(crate) fn dashboard_mut(&mut self) -> Result<&mut DashboardService, CommandError> {
        let user = self
            .session
            .user()
            .cloned()
            .ok_or(CommandError::NotSignedIn)?;
        let stale = self
            .dashboard
            .as_ref()
            .map_or(true, |dashboard| dashboard.role() != user.role);
        if stale {
            let mut dashboard = DashboardService::demo(&user);
            for confirmation in &self.confirmed {
                dashboard.add_confirmation(confirmation);
            }
            self.dashboard = Some(dashboard);
        }
        self.dashboard.as_mut().ok_or(CommandError::NotSignedIn)
    }

    pub(crate) fn reset_dashboard(&mut self) {
        self.dashboard = None;
    }

    pub(crate) fn record_confirmation(&mut self, confirmation: BookingConfirmation) {
        if let Some(dashboard) = self.dashboard.as_mut() {
            dashboard.add_confirmation(&confirmation);
        }
        self.confirmed.push(confirmation);
    }
}
