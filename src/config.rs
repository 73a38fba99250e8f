use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose frame/observer logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where waitlist sign-ups are delivered. Set `WAITLIST_ENDPOINT` when
/// building to wire a real collector; without it submissions are only logged.
pub fn waitlist_endpoint() -> Option<&'static str> {
    option_env!("WAITLIST_ENDPOINT").filter(|url| !url.trim().is_empty())
}
