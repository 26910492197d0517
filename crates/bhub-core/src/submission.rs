//! In-flight tracking for submissions that resolve after a simulated delay.

use std::time::Duration;

use crate::CoreError;

/// Single boolean flag: set on submit, cleared on completion.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    in_flight: bool,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Marks a submission as started, refusing a second one while the first is pending.
    pub fn begin(&mut self) -> Result<(), CoreError> {
        if self.in_flight {
            tracing::warn!("submission rejected: another one is in flight");
            return Err(CoreError::SubmissionInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    pub fn complete(&mut self) {
        self.in_flight = false;
    }
}

/// Delay applied between the submit and resolve phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency(pub Duration);

impl SimulatedLatency {
    pub const LOGIN: SimulatedLatency = SimulatedLatency(Duration::from_millis(1000));
    pub const CONTACT: SimulatedLatency = SimulatedLatency(Duration::from_millis(1500));

    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn duration(self) -> Duration {
        self.0
    }

    /// Blocks the calling thread for the configured delay.
    pub fn wait(self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_until_complete() {
        let mut guard = SubmissionGuard::new();
        guard.begin().unwrap();
        assert!(guard.is_in_flight());
        assert!(matches!(guard.begin(), Err(CoreError::SubmissionInFlight)));

        guard.complete();
        assert!(!guard.is_in_flight());
        assert!(guard.begin().is_ok());
    }

    #[test]
    fn default_latencies() {
        assert_eq!(SimulatedLatency::LOGIN.duration(), Duration::from_millis(1000));
        assert_eq!(SimulatedLatency::CONTACT.duration(), Duration::from_millis(1500));
        assert!(SimulatedLatency::default().duration().is_zero());
    }
}
