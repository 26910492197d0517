use bhub_domain::ContactMessage;

use crate::{
    auth_service::PendingSubmission,
    submission::{SimulatedLatency, SubmissionGuard},
    surface::Surface,
    CoreError,
};

pub const MESSAGE_SENT_TITLE: &str = "Message Sent";
pub const MESSAGE_SENT_BODY: &str = "We've received your message and will respond shortly.";

/// Delivers contact-page messages after the simulated latency.
pub struct ContactService {
    guard: SubmissionGuard,
    latency: SimulatedLatency,
    last_sent: Option<ContactMessage>,
}

impl ContactService {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self {
            guard: SubmissionGuard::new(),
            latency,
            last_sent: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.is_in_flight()
    }

    pub fn set_latency(&mut self, latency: SimulatedLatency) {
        self.latency = latency;
    }

    /// Most recently delivered message.
    pub fn last_sent(&self) -> Option<&ContactMessage> {
        self.last_sent.as_ref()
    }

    pub fn submit(
        &mut self,
        message: ContactMessage,
    ) -> Result<PendingSubmission<ContactMessage>, CoreError> {
        if !message.is_complete() {
            return Err(CoreError::Validation(
                "Please fill out all required fields".into(),
            ));
        }
        self.guard.begin()?;
        Ok(PendingSubmission::new(message))
    }

    pub fn resolve(&mut self, pending: PendingSubmission<ContactMessage>, surface: &mut dyn Surface) {
        self.guard.complete();
        let message = pending.into_payload();
        tracing::info!(from = %message.email, subject = %message.subject, "contact message sent");
        self.last_sent = Some(message);
        surface.notify_success(MESSAGE_SENT_TITLE);
    }

    pub fn send(&mut self, message: ContactMessage, surface: &mut dyn Surface) -> Result<(), CoreError> {
        let pending = match self.submit(message) {
            Ok(pending) => pending,
            Err(err) => {
                if let CoreError::Validation(reason) = &err {
                    surface.notify_error(reason);
                }
                return Err(err);
            }
        };
        self.latency.wait();
        self.resolve(pending, surface);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn complete_message_is_sent() {
        let mut service = ContactService::new(SimulatedLatency::none());
        let mut surface = RecordingSurface::new();
        service
            .send(
                ContactMessage::new("Ada", "ada@example.com", "Venue tour", "Can I visit?"),
                &mut surface,
            )
            .unwrap();
        assert_eq!(surface.successes(), vec!["Message Sent"]);
        assert_eq!(
            service.last_sent().map(|sent| sent.subject.as_str()),
            Some("Venue tour")
        );
        assert!(!service.is_submitting());
    }

    #[test]
    fn missing_message_body_is_reported() {
        let mut service = ContactService::new(SimulatedLatency::none());
        let mut surface = RecordingSurface::new();
        let err = service
            .send(ContactMessage::new("Ada", "ada@example.com", "", ""), &mut surface)
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(surface.errors(), vec!["Please fill out all required fields"]);
        assert!(service.last_sent().is_none());
    }

    #[test]
    fn only_the_latest_message_is_kept() {
        let mut service = ContactService::new(SimulatedLatency::none());
        let mut surface = RecordingSurface::new();
        for body in ["First question", "Second question"] {
            service
                .send(ContactMessage::new("Ada", "ada@example.com", "", body), &mut surface)
                .unwrap();
        }
        assert_eq!(surface.successes().len(), 2);
        assert_eq!(
            service.last_sent().map(|sent| sent.message.as_str()),
            Some("Second question")
        );
    }

    #[test]
    fn pending_message_blocks_resubmission() {
        let mut service = ContactService::new(SimulatedLatency::none());
        let message = ContactMessage::new("Ada", "ada@example.com", "", "Hi");
        let pending = service.submit(message.clone()).unwrap();
        assert!(matches!(service.submit(message), Err(CoreError::SubmissionInFlight)));

        let mut surface = RecordingSurface::new();
        service.resolve(pending, &mut surface);
        assert!(!service.is_submitting());
    }
}
