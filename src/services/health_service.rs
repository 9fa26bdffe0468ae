use crate::{dto::health::HealthStatus, state::AppState};

/// Build the liveness payload. Performs no I/O and cannot fail.
pub fn health_status(state: &AppState) -> HealthStatus {
    HealthStatus::running(state.config().service_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn default_config_reports_tp_foyer() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(health_status(&state).message, "TP Foyer is running ✅");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let state = AppState::new(AppConfig::with_service_name("Foyer Sud"));
        let first = health_status(&state);
        for _ in 0..10 {
            assert_eq!(health_status(&state), first);
        }
    }
}
