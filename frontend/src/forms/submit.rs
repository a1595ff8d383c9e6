//! Two-call submission to EmailJS under a wall-clock deadline.

use std::collections::BTreeMap;
use std::future::Future;

use futures::future::{self, AbortHandle, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::Request;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, EmailJsConfig};
use crate::forms::draft::DraftStore;
use crate::forms::validate::ValidationErrors;
use crate::storage::KeyValueStore;

pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please check your connection and try again.";
const NETWORK_MESSAGE: &str = "Network error. Please check your internet connection and try again.";
const BAD_REQUEST_MESSAGE: &str = "Invalid form data. Please check your entries and try again.";
const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable. Please contact us directly.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("email service answered {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("email service credentials are not configured")]
    NotConfigured,
    #[error("no answer within {0} ms")]
    TimedOut(u32),
}

impl SubmitError {
    /// What the visitor is told; `fallback` covers statuses we have no hint for.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            SubmitError::Network(_) => NETWORK_MESSAGE,
            SubmitError::Rejected { status: 400, .. } => BAD_REQUEST_MESSAGE,
            SubmitError::Rejected { status: 401 | 403, .. } | SubmitError::NotConfigured => {
                UNAVAILABLE_MESSAGE
            }
            SubmitError::TimedOut(_) => TIMEOUT_MESSAGE,
            SubmitError::Rejected { .. } => fallback,
        };
        message.to_string()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionOutcome::Pending)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Flat template variables, as EmailJS expects them.
pub type TemplateParams = BTreeMap<&'static str, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailRequest {
    pub template_id: &'static str,
    pub params: TemplateParams,
}

pub trait Mailer {
    fn send<'a>(&'a self, request: &'a EmailRequest) -> LocalBoxFuture<'a, Result<(), SubmitError>>;
}

#[derive(Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS REST client.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJs {
    config: EmailJsConfig,
}

impl EmailJs {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }

    pub fn from_build_env() -> Self {
        Self::new(config::emailjs())
    }

    async fn post(&self, request: &EmailRequest) -> Result<(), SubmitError> {
        let (Some(service_id), Some(user_id)) = (self.config.service_id, self.config.public_key)
        else {
            return Err(SubmitError::NotConfigured);
        };
        let payload = SendPayload {
            service_id,
            template_id: request.template_id,
            user_id,
            template_params: &request.params,
        };
        let response = Request::post(config::EMAILJS_SEND_URL)
            .json(&payload)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Rejected {
            status: response.status(),
            body,
        })
    }
}

impl Mailer for EmailJs {
    fn send<'a>(&'a self, request: &'a EmailRequest) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
        self.post(request).boxed_local()
    }
}

/// Sends `requests` in order, stopping at the first failure.
///
/// Whichever of the sends and `deadline` finishes first decides the result;
/// when the deadline wins the in-flight send is dropped and whatever it
/// later produces is never observed.
pub async fn dispatch<M, D>(
    mailer: &M,
    requests: &[EmailRequest],
    deadline: D,
    timeout_ms: u32,
) -> Result<(), SubmitError>
where
    M: Mailer + ?Sized,
    D: Future<Output = ()>,
{
    let sends = async {
        for request in requests {
            mailer.send(request).await?;
        }
        Ok::<(), SubmitError>(())
    };
    futures::pin_mut!(sends);
    futures::pin_mut!(deadline);
    match future::select(sends, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(SubmitError::TimedOut(timeout_ms)),
    }
}

/// [`dispatch`] that can be called off with the returned handle.
///
/// A submission called off this way resolves to `None`; its deadline and
/// in-flight send are dropped with it.
pub fn abortable_dispatch<M, D>(
    mailer: M,
    requests: [EmailRequest; 2],
    deadline: D,
    timeout_ms: u32,
) -> (impl Future<Output = Option<Result<(), SubmitError>>>, AbortHandle)
where
    M: Mailer,
    D: Future<Output = ()>,
{
    let (run, handle) = future::abortable(async move {
        dispatch(&mailer, &requests, deadline, timeout_ms).await
    });
    (run.map(Result::ok), handle)
}

/// One of the site's forms.
pub trait FormKind: Clone + PartialEq + Default + Serialize + DeserializeOwned + 'static {
    /// Storage key for the in-progress draft; `None` keeps nothing.
    const DRAFT_KEY: Option<&'static str>;
    const FALLBACK_MESSAGE: &'static str;

    fn validate(&self) -> ValidationErrors;

    /// Whether the draft carries enough user input to be worth saving.
    fn worth_saving(&self) -> bool;

    /// Where the current draft should be saved, if anywhere.
    fn save_key(&self) -> Option<&'static str> {
        Self::DRAFT_KEY.filter(|_| self.worth_saving())
    }

    /// Operator notification first, visitor confirmation second.
    fn requests(&self, submitted_at: &str) -> [EmailRequest; 2];
}

/// Draft, field errors and submission outcome of one form instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<F> {
    pub draft: F,
    pub errors: ValidationErrors,
    pub outcome: SubmissionOutcome,
}

impl<F: FormKind> FormState<F> {
    pub fn restored<S: KeyValueStore>(store: &DraftStore<S>) -> Self {
        let draft = F::DRAFT_KEY.map(|key| store.restore(key)).unwrap_or_default();
        Self {
            draft,
            ..Self::default()
        }
    }

    /// Applies an edit and drops the stale error for `field`.
    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut F)) {
        apply(&mut self.draft);
        self.errors.clear_field(field);
    }

    /// Validates and, when the form is clean, moves to `Pending` and returns
    /// the requests to send. A submit while already pending is ignored.
    pub fn begin_submit(&mut self, submitted_at: &str) -> Option<[EmailRequest; 2]> {
        if self.outcome.is_pending() {
            return None;
        }
        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            self.outcome = SubmissionOutcome::Idle;
            return None;
        }
        self.outcome = SubmissionOutcome::Pending;
        Some(self.draft.requests(submitted_at))
    }

    /// Records the result of [`dispatch`]. Results arriving after the form
    /// has left `Pending` are discarded.
    pub fn finish<S: KeyValueStore>(&mut self, result: Result<(), SubmitError>, store: &DraftStore<S>) {
        if !self.outcome.is_pending() {
            return;
        }
        match result {
            Ok(()) => {
                info!("Form submitted");
                if let Some(key) = F::DRAFT_KEY {
                    store.clear(key);
                }
                self.draft = F::default();
                self.outcome = SubmissionOutcome::Succeeded;
            }
            Err(e) => {
                // Rejection bodies can echo form fields; dev builds only.
                if config::is_dev() {
                    error!("Form submission failed: {}", e);
                } else {
                    warn!("Form submission failed");
                }
                self.outcome = SubmissionOutcome::Failed(e.user_message(F::FALLBACK_MESSAGE));
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use futures::channel::oneshot;

    use super::*;

    pub enum Script {
        Ok,
        Fail(SubmitError),
        /// Never answers.
        Hang,
        /// Answers once the paired sender fires.
        Wait(oneshot::Receiver<()>),
    }

    /// Mailer that replays one scripted answer per call and records calls.
    #[derive(Default)]
    pub struct ScriptedMailer {
        script: RefCell<Vec<Script>>,
        pub sent: RefCell<Vec<&'static str>>,
    }

    impl ScriptedMailer {
        pub fn new(script: Vec<Script>) -> Self {
            Self {
                script: RefCell::new(script),
                sent: RefCell::default(),
            }
        }
    }

    impl Mailer for ScriptedMailer {
        fn send<'a>(&'a self, request: &'a EmailRequest) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
            self.sent.borrow_mut().push(request.template_id);
            let next = {
                let mut script = self.script.borrow_mut();
                if script.is_empty() {
                    Script::Ok
                } else {
                    script.remove(0)
                }
            };
            match next {
                Script::Ok => future::ready(Ok(())).boxed_local(),
                Script::Fail(e) => future::ready(Err(e)).boxed_local(),
                Script::Hang => future::pending().boxed_local(),
                Script::Wait(rx) => async move {
                    rx.await.map_err(|_| SubmitError::Network("dropped".into()))
                }
                .boxed_local(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::channel::oneshot;
    use futures::executor::block_on;

    use super::testing::{Script, ScriptedMailer};
    use super::*;
    use crate::config::{CONTACT_CONFIRMATION_TEMPLATE, CONTACT_OPERATOR_TEMPLATE, SUBMIT_TIMEOUT_MS};
    use crate::forms::contact::ContactDraft;
    use crate::forms::newsletter::NewsletterDraft;
    use crate::storage::memory::MemoryStore;

    const KEY: &str = "contact_form_data";

    fn filled_contact() -> ContactDraft {
        ContactDraft {
            name: "Jane Doe".into(),
            email: "jane@biz.com".into(),
            business_name: "Jane's Bakery".into(),
            business_type: "Restaurant/Food Service".into(),
            ..ContactDraft::default()
        }
    }

    fn never() -> future::Pending<()> {
        future::pending()
    }

    fn run(
        state: &mut FormState<ContactDraft>,
        mailer: &ScriptedMailer,
        store: &DraftStore<&MemoryStore>,
        deadline: impl Future<Output = ()>,
    ) {
        let requests = state.begin_submit("10/16/2026, 9:00:00 AM").expect("form is valid");
        let result = block_on(dispatch(mailer, &requests, deadline, SUBMIT_TIMEOUT_MS));
        state.finish(result, store);
    }

    #[test]
    fn success_sends_operator_then_confirmation_and_clears_draft() {
        let memory = MemoryStore::new();
        let store = DraftStore::new(&memory);
        let mut state = FormState { draft: filled_contact(), ..FormState::default() };
        store.persist(KEY, &state.draft);

        let mailer = ScriptedMailer::new(vec![Script::Ok, Script::Ok]);
        run(&mut state, &mailer, &store, never());

        assert_eq!(state.outcome, SubmissionOutcome::Succeeded);
        assert_eq!(
            *mailer.sent.borrow(),
            vec![CONTACT_OPERATOR_TEMPLATE, CONTACT_CONFIRMATION_TEMPLATE]
        );
        assert!(!memory.contains(KEY));
        assert_eq!(state.draft, ContactDraft::default());
    }

    #[test]
    fn first_failure_skips_confirmation_and_keeps_draft() {
        let memory = MemoryStore::new();
        let store = DraftStore::new(&memory);
        let draft = filled_contact();
        let mut state = FormState { draft: draft.clone(), ..FormState::default() };
        store.persist(KEY, &draft);

        let mailer = ScriptedMailer::new(vec![Script::Fail(SubmitError::Rejected {
            status: 400,
            body: "The template ID is invalid".into(),
        })]);
        run(&mut state, &mailer, &store, never());

        assert_eq!(state.outcome.failure(), Some(BAD_REQUEST_MESSAGE));
        assert_eq!(mailer.sent.borrow().len(), 1);
        assert_eq!(store.restore::<ContactDraft>(KEY), draft);
        assert_eq!(state.draft, draft);
    }

    #[test]
    fn second_failure_still_fails_the_whole_submission() {
        let memory = MemoryStore::new();
        let store = DraftStore::new(&memory);
        let mut state = FormState { draft: filled_contact(), ..FormState::default() };

        let mailer = ScriptedMailer::new(vec![
            Script::Ok,
            Script::Fail(SubmitError::Network("Failed to fetch".into())),
        ]);
        run(&mut state, &mailer, &store, never());

        assert_eq!(state.outcome.failure(), Some(NETWORK_MESSAGE));
        assert_eq!(mailer.sent.borrow().len(), 2);
    }

    #[test]
    fn hanging_call_times_out() {
        let memory = MemoryStore::new();
        let store = DraftStore::new(&memory);
        let mut state = FormState { draft: filled_contact(), ..FormState::default() };

        let mailer = ScriptedMailer::new(vec![Script::Hang]);
        run(&mut state, &mailer, &store, future::ready(()));

        assert_eq!(state.outcome.failure(), Some(TIMEOUT_MESSAGE));
    }

    #[test]
    fn late_answer_after_timeout_is_discarded() {
        let memory = MemoryStore::new();
        let store = DraftStore::new(&memory);
        let mut state = FormState { draft: filled_contact(), ..FormState::default() };
        store.persist(KEY, &state.draft);

        let (tx, rx) = oneshot::channel();
        let mailer = ScriptedMailer::new(vec![Script::Wait(rx)]);
        run(&mut state, &mailer, &store, future::ready(()));
        assert_eq!(state.outcome.failure(), Some(TIMEOUT_MESSAGE));

        // The waiting send was dropped along with its receiver.
        assert!(tx.send(()).is_err());
        state.finish(Ok(()), &store);
        assert_eq!(state.outcome.failure(), Some(TIMEOUT_MESSAGE));
        assert!(memory.contains(KEY));
    }

    #[test]
    fn invalid_form_never_reaches_the_mailer() {
        let mut state = FormState::<ContactDraft>::default();
        assert!(state.begin_submit("now").is_none());
        assert_eq!(state.outcome, SubmissionOutcome::Idle);
        assert!(state.errors.contains("name"));
        assert!(state.errors.contains("email"));
        assert!(state.errors.contains("businessName"));
        assert!(state.errors.contains("businessType"));
    }

    #[test]
    fn submit_while_pending_is_ignored() {
        let mut state = FormState { draft: filled_contact(), ..FormState::default() };
        assert!(state.begin_submit("now").is_some());
        assert!(state.begin_submit("now").is_none());
        assert!(state.outcome.is_pending());
    }

    #[test]
    fn retry_after_failure_is_allowed() {
        let mut state = FormState {
            draft: filled_contact(),
            outcome: SubmissionOutcome::Failed(NETWORK_MESSAGE.into()),
            ..FormState::default()
        };
        assert!(state.begin_submit("now").is_some());
        assert!(state.outcome.is_pending());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = FormState::<ContactDraft>::default();
        state.begin_submit("now");
        state.edit("name", |d| d.name = "J".into());
        assert!(!state.errors.contains("name"));
        assert!(state.errors.contains("email"));
    }

    #[test]
    fn error_messages_follow_status() {
        let fallback = "generic";
        let rejected = |status| SubmitError::Rejected { status, body: String::new() };
        assert_eq!(rejected(400).user_message(fallback), BAD_REQUEST_MESSAGE);
        assert_eq!(rejected(401).user_message(fallback), UNAVAILABLE_MESSAGE);
        assert_eq!(rejected(403).user_message(fallback), UNAVAILABLE_MESSAGE);
        assert_eq!(rejected(500).user_message(fallback), fallback);
        assert_eq!(SubmitError::NotConfigured.user_message(fallback), UNAVAILABLE_MESSAGE);
        assert_eq!(SubmitError::TimedOut(30_000).user_message(fallback), TIMEOUT_MESSAGE);
    }

    #[test]
    fn abandoned_submission_resolves_to_none_and_drops_the_send() {
        let (tx, rx) = oneshot::channel();
        let mailer = ScriptedMailer::new(vec![Script::Wait(rx)]);
        let requests = filled_contact().requests("now");
        let (run, handle) = abortable_dispatch(mailer, requests, never(), SUBMIT_TIMEOUT_MS);

        handle.abort();
        assert_eq!(block_on(run), None);
        assert!(tx.send(()).is_err());
    }

    #[test]
    fn uninterrupted_submission_passes_its_result_through() {
        let mailer = ScriptedMailer::new(vec![Script::Ok, Script::Ok]);
        let requests = filled_contact().requests("now");
        let (run, _handle) = abortable_dispatch(mailer, requests, never(), SUBMIT_TIMEOUT_MS);
        assert_eq!(block_on(run), Some(Ok(())));

        let mailer = ScriptedMailer::new(vec![Script::Hang]);
        let requests = filled_contact().requests("now");
        let (run, _handle) = abortable_dispatch(mailer, requests, future::ready(()), SUBMIT_TIMEOUT_MS);
        assert_eq!(block_on(run), Some(Err(SubmitError::TimedOut(SUBMIT_TIMEOUT_MS))));
    }

    #[test]
    fn drafts_are_saved_only_once_they_hold_input() {
        assert_eq!(ContactDraft::default().save_key(), None);
        let typed = ContactDraft { email: "jane@biz.com".into(), ..ContactDraft::default() };
        assert_eq!(typed.save_key(), Some(KEY));

        let memory = MemoryStore::new();
        let store = DraftStore::new(&memory);
        if let Some(key) = typed.save_key() {
            store.persist(key, &typed);
        }
        assert_eq!(store.restore::<ContactDraft>(KEY).email, "jane@biz.com");

        let newsletter = NewsletterDraft { email: "jane@biz.com".into() };
        assert_eq!(newsletter.save_key(), None);
    }

    #[test]
    fn unconfigured_client_fails_without_network() {
        let mailer = EmailJs::new(EmailJsConfig { service_id: None, public_key: Some("key") });
        let request = EmailRequest { template_id: "t", params: TemplateParams::new() };
        assert_eq!(block_on(mailer.send(&request)), Err(SubmitError::NotConfigured));
    }
}
