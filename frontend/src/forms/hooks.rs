use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use futures::future::AbortHandle;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{DRAFT_DEBOUNCE_MS, SUBMIT_TIMEOUT_MS};
use crate::forms::draft::DraftStore;
use crate::forms::submit::{abortable_dispatch, EmailJs, FormKind, FormState, SubmissionOutcome, SubmitError};
use crate::forms::validate::ValidationErrors;

pub enum FormAction<F> {
    Edit {
        field: &'static str,
        apply: Box<dyn FnOnce(&mut F)>,
    },
    Submit {
        submitted_at: String,
    },
    Finish(Result<(), SubmitError>),
}

impl<F: FormKind> Reducible for FormState<F> {
    type Action = FormAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit { field, apply } => next.edit(field, apply),
            FormAction::Submit { submitted_at } => {
                next.begin_submit(&submitted_at);
            }
            FormAction::Finish(result) => next.finish(result, &DraftStore::browser()),
        }
        Rc::new(next)
    }
}

/// Handle returned by [`use_form`].
#[derive(Clone)]
pub struct UseFormHandle<F: FormKind> {
    state: UseReducerHandle<FormState<F>>,
    in_flight: Rc<RefCell<Option<AbortHandle>>>,
    on_success: Callback<()>,
}

impl<F: FormKind> UseFormHandle<F> {
    pub fn draft(&self) -> &F {
        &self.state.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.state.outcome
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.state.errors.get(field).map(str::to_string)
    }

    pub fn edit(&self, field: &'static str, apply: impl FnOnce(&mut F) + 'static) {
        self.state.dispatch(FormAction::Edit {
            field,
            apply: Box::new(apply),
        });
    }

    /// Validates and, if clean, sends the form. Callable from any button,
    /// not only the form's submit event.
    pub fn submit(&self) {
        if self.in_flight.borrow().is_some() {
            return;
        }
        let submitted_at = Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string();
        let mut next = (*self.state).clone();
        let requests = next.begin_submit(&submitted_at);
        self.state.dispatch(FormAction::Submit { submitted_at });
        let Some(requests) = requests else {
            if !next.errors.is_empty() {
                info!("Form not sent, invalid fields: {:?}", next.errors.fields().collect::<Vec<_>>());
            }
            return;
        };
        info!("Submitting form ({} requests)", requests.len());

        let (run, handle) = abortable_dispatch(
            EmailJs::from_build_env(),
            requests,
            TimeoutFuture::new(SUBMIT_TIMEOUT_MS),
            SUBMIT_TIMEOUT_MS,
        );
        *self.in_flight.borrow_mut() = Some(handle);

        let state = self.state.clone();
        let in_flight = self.in_flight.clone();
        let on_success = self.on_success.clone();
        spawn_local(async move {
            let Some(result) = run.await else {
                return;
            };
            in_flight.borrow_mut().take();
            let succeeded = result.is_ok();
            state.dispatch(FormAction::Finish(result));
            if succeeded {
                on_success.emit(());
            }
        });
    }
}

/// Form state restored from storage on mount and written back one
/// debounce interval after the last edit. A submission still in flight
/// when the form unmounts is abandoned.
#[hook]
pub fn use_form<F: FormKind>(on_success: Callback<()>) -> UseFormHandle<F> {
    let state = use_reducer(|| FormState::<F>::restored(&DraftStore::browser()));
    let in_flight = use_mut_ref(|| None::<AbortHandle>);

    {
        let in_flight = in_flight.clone();
        use_unmount(move || {
            if let Some(handle) = in_flight.borrow_mut().take() {
                info!("Form left while sending, abandoning the submission");
                handle.abort();
            }
        });
    }

    {
        let draft = state.draft.clone();
        use_effect_with_deps(
            move |draft: &F| {
                let pending = draft.save_key().map(|key| {
                    let draft = draft.clone();
                    Timeout::new(DRAFT_DEBOUNCE_MS, move || {
                        DraftStore::browser().persist(key, &draft);
                    })
                });
                // Dropping the timeout cancels it.
                move || drop(pending)
            },
            draft,
        );
    }

    UseFormHandle {
        state,
        in_flight,
        on_success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::ContactDraft;

    fn filled_contact() -> ContactDraft {
        ContactDraft {
            name: "Jane Doe".into(),
            email: "jane@biz.com".into(),
            business_name: "Jane's Bakery".into(),
            business_type: "Restaurant/Food Service".into(),
            ..ContactDraft::default()
        }
    }

    fn pending() -> Rc<FormState<ContactDraft>> {
        let state = Rc::new(FormState {
            draft: filled_contact(),
            ..FormState::default()
        });
        let state = state.reduce(FormAction::Submit {
            submitted_at: "now".into(),
        });
        assert!(state.outcome.is_pending());
        state
    }

    fn type_description(text: &'static str) -> FormAction<ContactDraft> {
        FormAction::Edit {
            field: "description",
            apply: Box::new(move |d: &mut ContactDraft| d.description = text.into()),
        }
    }

    #[test]
    fn edits_made_while_sending_survive_a_failed_send() {
        let state = pending().reduce(type_description("typed while pending"));
        let state = state.reduce(FormAction::Finish(Err(SubmitError::Network(
            "Failed to fetch".into(),
        ))));

        assert_eq!(state.draft.description, "typed while pending");
        assert_eq!(state.draft.name, "Jane Doe");
        assert!(state.outcome.failure().is_some());
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let state = pending().reduce(type_description("more detail"));
        let state = state.reduce(FormAction::Submit {
            submitted_at: "later".into(),
        });
        assert!(state.outcome.is_pending());
        assert_eq!(state.draft.description, "more detail");
    }

    #[test]
    fn invalid_submit_reports_errors_and_stays_idle() {
        let state = Rc::new(FormState::<ContactDraft>::default());
        let state = state.reduce(FormAction::Submit {
            submitted_at: "now".into(),
        });
        assert_eq!(state.outcome, SubmissionOutcome::Idle);
        assert!(state.errors.contains("email"));

        let state = state.reduce(FormAction::Edit {
            field: "email",
            apply: Box::new(|d: &mut ContactDraft| d.email = "jane@biz.com".into()),
        });
        assert!(!state.errors.contains("email"));
        assert!(state.errors.contains("name"));
    }
}
