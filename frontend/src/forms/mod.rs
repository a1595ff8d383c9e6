pub mod contact;
pub mod draft;
pub mod hooks;
pub mod newsletter;
pub mod review;
pub mod submit;
pub mod validate;

pub use hooks::{use_form, UseFormHandle};
pub use submit::SubmissionOutcome;
