use dioxus_logger::tracing::Level;

pub static APP_NAME: &str = "GigLens";

/// localStorage key holding the session JWT issued by the account service.
pub static TOKEN_STORAGE_KEY: &str = match option_env!("GIGLENS_TOKEN_KEY") {
    Some(x) => x,
    None => "jwt_token",
};

static LOG_LEVEL: Option<&str> = option_env!("GIGLENS_LOG");

// milliseconds
pub const TOAST_TIMEOUT: u32 = 4000;

pub fn log_level() -> Level {
    LOG_LEVEL.map(parse_level).unwrap_or(Level::INFO)
}

fn parse_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
