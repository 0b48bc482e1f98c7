//! Environment-based bot configuration.
//!
//! Configuration is read once at startup. `main` loads an optional `.env` file with
//! `dotenvy` before calling `Config::from_env`.

use serenity::all::{ChannelId, RoleId};
use std::time::Duration;

use crate::{
    error::{config::ConfigError, AppError},
    model::ticket::TicketKind,
    util::parse::parse_snowflake,
};

const DEFAULT_ROLE_SWEEP_INTERVAL_SECS: u64 = 60;
const DEFAULT_EXTERNAL_CALL_TIMEOUT_SECS: u64 = 10;
const DEFAULT_COMMUNITY_NAME: &str = "Community";

/// Ticket workflow settings.
#[derive(Debug, Clone)]
pub struct TicketConfig {
    /// Role that can see every ticket channel and close tickets.
    pub staff_role_id: RoleId,
    /// Parent category of application tickets.
    pub application_category_id: ChannelId,
    /// Parent category of help tickets.
    pub help_category_id: ChannelId,
    /// Channel where the application ticket panel is posted on startup.
    pub application_panel_channel_id: Option<ChannelId>,
    /// Channel where the help ticket panel is posted on startup.
    pub help_panel_channel_id: Option<ChannelId>,
}

impl TicketConfig {
    /// Parent category for tickets of the given kind.
    pub fn category_for(&self, kind: TicketKind) -> ChannelId {
        match kind {
            TicketKind::Application => self.application_category_id,
            TicketKind::Help => self.help_category_id,
        }
    }

    /// Panel channel for tickets of the given kind, if one is configured.
    pub fn panel_channel_for(&self, kind: TicketKind) -> Option<ChannelId> {
        match kind {
            TicketKind::Application => self.application_panel_channel_id,
            TicketKind::Help => self.help_panel_channel_id,
        }
    }

    /// Returns `true` if `category_id` is one of the ticket categories.
    pub fn is_ticket_category(&self, category_id: ChannelId) -> bool {
        category_id == self.application_category_id || category_id == self.help_category_id
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,
    /// Name used in greetings and embed footers.
    pub community_name: String,

    pub welcome_channel_id: Option<ChannelId>,
    pub farewell_channel_id: Option<ChannelId>,

    pub tickets: TicketConfig,

    /// Period of the temporary role expiry sweep.
    pub role_sweep_interval: Duration,
    /// Upper bound for every individual Discord call made by the services.
    pub external_call_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let env = EnvReader { lookup };

        Ok(Self {
            discord_bot_token: env.required("DISCORD_BOT_TOKEN")?,
            community_name: env
                .optional("COMMUNITY_NAME")
                .unwrap_or_else(|| DEFAULT_COMMUNITY_NAME.to_string()),
            welcome_channel_id: env.optional_id("WELCOME_CHANNEL_ID")?.map(ChannelId::new),
            farewell_channel_id: env.optional_id("FAREWELL_CHANNEL_ID")?.map(ChannelId::new),
            tickets: TicketConfig {
                staff_role_id: RoleId::new(env.required_id("TICKET_STAFF_ROLE_ID")?),
                application_category_id: ChannelId::new(
                    env.required_id("TICKET_APPLICATION_CATEGORY_ID")?,
                ),
                help_category_id: ChannelId::new(env.required_id("TICKET_HELP_CATEGORY_ID")?),
                application_panel_channel_id: env
                    .optional_id("TICKET_APPLICATION_PANEL_CHANNEL_ID")?
                    .map(ChannelId::new),
                help_panel_channel_id: env
                    .optional_id("TICKET_HELP_PANEL_CHANNEL_ID")?
                    .map(ChannelId::new),
            },
            role_sweep_interval: env
                .seconds("ROLE_SWEEP_INTERVAL_SECS", DEFAULT_ROLE_SWEEP_INTERVAL_SECS)?,
            external_call_timeout: env
                .seconds("EXTERNAL_CALL_TIMEOUT_SECS", DEFAULT_EXTERNAL_CALL_TIMEOUT_SECS)?,
        })
    }
}

struct EnvReader<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> EnvReader<F> {
    fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn required_id(&self, name: &str) -> Result<u64, ConfigError> {
        let value = self.required(name)?;
        parse_snowflake(&value).ok_or_else(|| invalid(name, value))
    }

    fn optional_id(&self, name: &str) -> Result<Option<u64>, ConfigError> {
        self.optional(name)
            .map(|value| parse_snowflake(&value).ok_or_else(|| invalid(name, value)))
            .transpose()
    }

    fn seconds(&self, name: &str, default: u64) -> Result<Duration, ConfigError> {
        let Some(value) = self.optional(name) else {
            return Ok(Duration::from_secs(default));
        };

        match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(invalid(name, value)),
        }
    }
}

fn invalid(name: &str, value: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    }
}
