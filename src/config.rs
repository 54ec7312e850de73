use crate::{
    error::{config::ConfigError, AppError},
    service::booking::BookingPolicy,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

// Operating hours (UTC) used when OPEN_HOUR / CLOSE_HOUR are not set
const DEFAULT_OPEN_HOUR: u32 = 8;
const DEFAULT_CLOSE_HOUR: u32 = 22;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_origin: String,

    /// First hour of the day (UTC) at which a booking may start.
    pub open_hour: u32,
    /// Hour of the day (UTC) by which a booking must end.
    pub close_hour: u32,

    /// Credentials for the bootstrap admin account, created at startup
    /// when the database contains no admin user.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = parse_env_or("PORT", DEFAULT_PORT)?;
        let open_hour = parse_env_or("OPEN_HOUR", DEFAULT_OPEN_HOUR)?;
        let close_hour = parse_env_or("CLOSE_HOUR", DEFAULT_CLOSE_HOUR)?;

        validate_hours(open_hour, close_hour)?;

        Ok(Self {
            database_url,
            port,
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            open_hour,
            close_hour,
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }

    /// Booking window rules derived from the configured operating hours.
    pub fn booking_policy(&self) -> BookingPolicy {
        BookingPolicy::new(self.open_hour, self.close_hour)
    }
}

/// Checks that the operating hours describe a non-empty range of whole
/// hours within one day: `open < close` and `close <= 23`.
fn validate_hours(open_hour: u32, close_hour: u32) -> Result<(), ConfigError> {
    if open_hour >= close_hour || close_hour > 23 {
        return Err(ConfigError::InvalidEnvVar {
            name: "OPEN_HOUR/CLOSE_HOUR".to_string(),
            value: format!("{}..{}", open_hour, close_hour),
        });
    }

    Ok(())
}

/// Reads an env var and parses it, falling back to `default` when unset.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }
            .into()
        }),
        Err(_) => Ok(default),
    }
}
