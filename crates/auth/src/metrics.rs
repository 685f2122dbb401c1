//! Authentication Call Counters
//!
//! One counter family, `authentication_calls_total`, tagged with
//! `status` (successful/unsuccessful) and, when unsuccessful, the stable
//! error code in `error`.

use prometheus::{IntCounterVec, Opts, Registry};
use protocol::AuthErrorCode;

/// Counter family name
pub const AUTHENTICATION_CALLS: &str = "authentication_calls_total";

const STATUS_SUCCESSFUL: &str = "successful";
const STATUS_UNSUCCESSFUL: &str = "unsuccessful";

/// Per-outcome authentication counters
///
/// Children of the counter vector are created lazily and atomically on
/// first use (`with_label_values` is a concurrent get-or-create), so
/// racing first increments for the same kind never lose updates or
/// double-register. The registry is supplied by the caller: the process
/// registry in the binary, a private one in tests.
#[derive(Clone)]
pub struct AuthCallMetrics {
    calls: IntCounterVec,
}

impl AuthCallMetrics {
    /// Create the counter family and register it
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let calls = IntCounterVec::new(
            Opts::new(AUTHENTICATION_CALLS, "Authentication attempts by outcome"),
            &["status", "error"],
        )?;
        registry.register(Box::new(calls.clone()))?;

        Ok(Self { calls })
    }

    /// Count one successful authentication
    pub fn record_success(&self) {
        self.calls
            .with_label_values(&[STATUS_SUCCESSFUL, ""])
            .inc();
    }

    /// Count one failed authentication under its error code
    pub fn record_failure(&self, error: AuthErrorCode) {
        self.calls
            .with_label_values(&[STATUS_UNSUCCESSFUL, error.code()])
            .inc();
    }

    /// Current success count
    pub fn successful_count(&self) -> u64 {
        self.calls
            .with_label_values(&[STATUS_SUCCESSFUL, ""])
            .get()
    }

    /// Current failure count for one error code
    pub fn failure_count(&self, error: AuthErrorCode) -> u64 {
        self.calls
            .with_label_values(&[STATUS_UNSUCCESSFUL, error.code()])
            .get()
    }

    /// Sum across every outcome kind
    pub fn total_count(&self) -> u64 {
        let failures: u64 = AuthErrorCode::ALL
            .into_iter()
            .map(|code| self.failure_count(code))
            .sum();
        self.successful_count() + failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = AuthCallMetrics::new(&Registry::new()).unwrap();
        assert_eq!(metrics.total_count(), 0);
    }

    #[test]
    fn test_success_and_failure_counted_separately() {
        let metrics = AuthCallMetrics::new(&Registry::new()).unwrap();

        metrics.record_success();
        metrics.record_failure(AuthErrorCode::BadPassword);
        metrics.record_failure(AuthErrorCode::BadPassword);

        assert_eq!(metrics.successful_count(), 1);
        assert_eq!(metrics.failure_count(AuthErrorCode::BadPassword), 2);
        assert_eq!(metrics.failure_count(AuthErrorCode::SystemIdUnknown), 0);
        assert_eq!(metrics.total_count(), 3);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let metrics = AuthCallMetrics::new(&Registry::new()).unwrap();

        std::thread::scope(|s| {
            for _ in 0..8 {
                let metrics = metrics.clone();
                s.spawn(move || {
                    for _ in 0..1000 {
                        metrics.record_failure(AuthErrorCode::StoreUnavailable);
                    }
                });
            }
        });

        assert_eq!(metrics.failure_count(AuthErrorCode::StoreUnavailable), 8000);
    }
}
