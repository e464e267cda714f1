//! Submission controller
//!
//! A [`Session`] owns everything one user sees: the URL being typed, the
//! submission state, the last error or result and the capped history. A
//! check runs in two halves so UI code can release its borrow across the
//! network call: [`Session::begin_submit`] validates and enters
//! `Submitting`, [`Session::complete`] applies the outcome and always leaves
//! `Submitting`. [`Session::submit`] chains both over a [`CheckApi`].

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::history::History;
use crate::model::{CheckRequest, CheckResult};
use crate::validation::validate_url;
use crate::{CheckApi, SubmitError, SubmitResult, REQUEST_FAILED_MESSAGE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    state: SubmissionState,
    error: Option<String>,
    result: Option<CheckResult>,
    history: History,
    in_flight: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Validation or request message to show under the form
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&CheckResult> {
        self.result.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Validate the current input and enter `Submitting`.
    ///
    /// Clears the previous error and result. On a validation failure the
    /// message is stored and no request should be sent.
    pub fn begin_submit(&mut self) -> SubmitResult<CheckRequest> {
        if self.is_submitting() {
            debug!("Submit ignored, a check is already in flight");
            return Err(SubmitError::Busy);
        }

        self.error = None;
        self.result = None;

        let url = match validate_url(&self.input) {
            Ok(url) => url.to_string(),
            Err(e) => {
                self.state = SubmissionState::Idle;
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        info!("Checking URL: {}", url);
        self.state = SubmissionState::Submitting;
        self.in_flight = Some(url.clone());
        Ok(CheckRequest::url(url))
    }

    /// Apply the outcome of the request started by [`Session::begin_submit`].
    ///
    /// Any failure collapses into one generic message; the cause is only
    /// logged. Calling this without a check in flight changes nothing and
    /// returns `Ok`.
    pub fn complete<E>(
        &mut self,
        outcome: Result<CheckResult, E>,
        now: DateTime<Utc>,
    ) -> SubmitResult<()>
    where
        E: std::error::Error,
    {
        let Some(raw_input) = self.in_flight.take() else {
            warn!("Check outcome received with no check in flight");
            return Ok(());
        };

        match outcome {
            Ok(result) => {
                let result = result.with_submission(&raw_input, now);
                info!(
                    "Check completed: {} (verdict {})",
                    raw_input,
                    result.verdict_token()
                );
                self.history.push(result.clone());
                self.result = Some(result);
                self.state = SubmissionState::Success;
                Ok(())
            }
            Err(e) => {
                error!("Check failed for {}: {}", raw_input, e);
                self.error = Some(REQUEST_FAILED_MESSAGE.to_string());
                self.state = SubmissionState::Failure;
                Err(SubmitError::Request)
            }
        }
    }

    /// Run one full check against `api`
    pub async fn submit<A>(&mut self, api: &A) -> SubmitResult<()>
    where
        A: CheckApi + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = api.check(&request).await;
        self.complete(outcome, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Debug, thiserror::Error)]
    #[error("backend returned {0}")]
    struct FakeError(u16);

    struct FakeApi {
        response: Result<CheckResult, u16>,
        requests: RefCell<Vec<CheckRequest>>,
    }

    impl FakeApi {
        fn ok(result: CheckResult) -> Self {
            Self {
                response: Ok(result),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                response: Err(status),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl CheckApi for FakeApi {
        type Error = FakeError;

        async fn check(&self, request: &CheckRequest) -> Result<CheckResult, FakeError> {
            self.requests.borrow_mut().push(request.clone());
            self.response.clone().map_err(FakeError)
        }
    }

    fn suspect() -> CheckResult {
        CheckResult {
            verdict: Some("SUSPECT".into()),
            score: Some(0.7),
            rule_hits: vec!["domain_similarity".into()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_input_sends_nothing() {
        let api = FakeApi::ok(suspect());
        let mut session = Session::new();
        session.set_input("   ");

        let outcome = session.submit(&api).await;

        assert_eq!(outcome, Err(SubmitError::Invalid(ValidationError::Empty)));
        assert_eq!(session.error(), Some("Por favor, insira uma URL para análise."));
        assert_eq!(session.state(), SubmissionState::Idle);
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_wrong_scheme_sends_nothing() {
        let api = FakeApi::ok(suspect());
        let mut session = Session::new();
        session.set_input("ftp://x.com");

        let outcome = session.submit(&api).await;

        assert_eq!(outcome, Err(SubmitError::Invalid(ValidationError::MissingScheme)));
        assert_eq!(api.calls(), 0);
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn test_success_enriches_and_records() {
        let api = FakeApi::ok(suspect());
        let mut session = Session::new();
        session.set_input("  https://banco-exemplo.com/valores-a-receber  ");

        session.submit(&api).await.unwrap();

        assert_eq!(session.state(), SubmissionState::Success);
        assert!(session.error().is_none());
        let result = session.result().unwrap();
        assert_eq!(
            result.raw_input.as_deref(),
            Some("https://banco-exemplo.com/valores-a-receber")
        );
        assert!(result.submitted_at.is_some());
        assert_eq!(session.history().len(), 1);

        let sent = &api.requests.borrow()[0];
        assert_eq!(sent.raw_input, "https://banco-exemplo.com/valores-a-receber");
    }

    #[tokio::test]
    async fn test_failure_uses_generic_message() {
        let api = FakeApi::failing(500);
        let mut session = Session::new();
        session.set_input("https://x.com");

        let outcome = session.submit(&api).await;

        assert_eq!(outcome, Err(SubmitError::Request));
        assert_eq!(session.state(), SubmissionState::Failure);
        assert_eq!(session.error(), Some(REQUEST_FAILED_MESSAGE));
        assert!(session.result().is_none());
        assert!(session.history().is_empty());
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn test_new_submit_clears_previous_result() {
        let api = FakeApi::ok(suspect());
        let mut session = Session::new();
        session.set_input("https://x.com");
        session.submit(&api).await.unwrap();

        session.set_input("");
        let _ = session.submit(&api).await;

        assert!(session.result().is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test]
    async fn test_history_is_capped() {
        let api = FakeApi::ok(suspect());
        let mut session = Session::new();

        for n in 0..10 {
            session.set_input(format!("https://site{}.com", n));
            session.submit(&api).await.unwrap();
        }

        let inputs: Vec<_> = session
            .history()
            .iter()
            .filter_map(|r| r.raw_input.clone())
            .collect();
        assert_eq!(inputs.len(), 8);
        assert_eq!(inputs.first().map(String::as_str), Some("https://site9.com"));
        assert_eq!(inputs.last().map(String::as_str), Some("https://site2.com"));
    }

    #[test]
    fn test_busy_while_in_flight() {
        let mut session = Session::new();
        session.set_input("https://x.com");

        let request = session.begin_submit().unwrap();
        assert_eq!(request.raw_input, "https://x.com");
        assert!(session.is_submitting());
        assert_eq!(session.begin_submit(), Err(SubmitError::Busy));

        session
            .complete(Err::<CheckResult, _>(FakeError(502)), Utc::now())
            .unwrap_err();
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut session = Session::new();
        let outcome = session.complete(Ok::<_, FakeError>(suspect()), Utc::now());
        assert_eq!(outcome, Ok(()));
        assert!(session.history().is_empty());
        assert!(session.result().is_none());
        assert_eq!(session.state(), SubmissionState::Idle);

        let outcome = session.complete(Err::<CheckResult, _>(FakeError(500)), Utc::now());
        assert_eq!(outcome, Ok(()));
        assert!(session.error().is_none());
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_second_completion_after_success_is_ignored() {
        let mut session = Session::new();
        session.set_input("https://x.com");
        session.begin_submit().unwrap();
        session
            .complete(Ok::<_, FakeError>(suspect()), Utc::now())
            .unwrap();

        session
            .complete(Err::<CheckResult, _>(FakeError(500)), Utc::now())
            .unwrap();
        assert_eq!(session.state(), SubmissionState::Success);
        assert!(session.error().is_none());
        assert_eq!(session.history().len(), 1);
    }
}
