// Host-side tests for the waitlist form flags and backend boundary.

use obvix_core::*;

#[derive(Default)]
struct RecordingBackend {
    seen: Vec<String>,
    fail: bool,
}

impl WaitlistBackend for RecordingBackend {
    fn submit(&mut self, email: &EmailAddress) -> Result<(), WaitlistError> {
        if self.fail {
            return Err(WaitlistError::Backend("unreachable".into()));
        }
        self.seen.push(email.to_string());
        Ok(())
    }
}

#[test]
fn successful_submit_sets_flag_once() {
    let mut form = WaitlistForm::new();
    let mut backend = RecordingBackend::default();
    assert!(!form.is_submitted());
    form.submit_with(&mut backend, "dev@obvix.ai").unwrap();
    assert!(form.is_submitted());
    assert!(!form.is_loading());
    assert_eq!(backend.seen, vec!["dev@obvix.ai".to_string()]);

    assert_eq!(
        form.submit_with(&mut backend, "other@obvix.ai"),
        Err(WaitlistError::AlreadySubmitted)
    );
    assert!(form.is_submitted());
    assert_eq!(backend.seen.len(), 1);
}

#[test]
fn invalid_email_never_reaches_backend() {
    let mut form = WaitlistForm::new();
    let mut backend = RecordingBackend::default();
    assert!(matches!(
        form.submit_with(&mut backend, "not-an-email"),
        Err(WaitlistError::Invalid(_))
    ));
    assert!(backend.seen.is_empty());
    assert!(!form.is_loading());
    assert!(!form.is_submitted());
}

#[test]
fn backend_failure_allows_retry() {
    let mut form = WaitlistForm::new();
    let mut backend = RecordingBackend {
        fail: true,
        ..Default::default()
    };
    assert!(matches!(
        form.submit_with(&mut backend, "dev@obvix.ai"),
        Err(WaitlistError::Backend(_))
    ));
    assert!(!form.is_submitted());
    backend.fail = false;
    form.submit_with(&mut backend, "dev@obvix.ai").unwrap();
    assert!(form.is_submitted());
}

#[test]
fn loading_blocks_a_second_submission() {
    let mut form = WaitlistForm::new();
    let email = form.begin_submit("dev@obvix.ai").unwrap();
    assert!(form.is_loading());
    assert_eq!(form.begin_submit("dev@obvix.ai"), Err(WaitlistError::InFlight));
    let mut backend = LogOnlyBackend;
    let result = backend.submit(&email);
    form.finish_submit(result).unwrap();
    assert!(!form.is_loading());
    assert!(form.is_submitted());
}
