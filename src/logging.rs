//! # Structured Logging Module
//!
//! Environment-aware structured logging for following transformation services
//! through the startup phases.
//!
//! Diagnostic events are keyed by service name and phase (see
//! [`crate::constants::phases`]) rather than free-form text, so a launcher can
//! trace one service across load, initialize, gather, and scan without
//! parsing messages.

use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(EnvFilter::new(log_level)),
        );

        // Use try_init to avoid panic if a global subscriber already exists
        // (the surrounding launcher may have installed its own)
        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            "Structured logging initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("LAUNCHER_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "test" => "debug".to_string(),
        "development" => "debug".to_string(),
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log structured data for service lifecycle operations
pub fn log_service_operation(phase: &str, service: &str, status: &str, details: Option<&str>) {
    tracing::info!(
        phase = %phase,
        service = %service,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "SERVICE_OPERATION"
    );
}

/// Log structured data for registry operations
pub fn log_registry_operation(
    operation: &str,
    service: Option<&str>,
    transformer: Option<&str>,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        service = service,
        transformer = transformer,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "REGISTRY_OPERATION"
    );
}

/// Log error with full context
pub fn log_error(component: &str, operation: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        component = %component,
        operation = %operation,
        error = %error,
        context = context,
        timestamp = %Utc::now().to_rfc3339(),
        "ERROR"
    );
}
