//! Reactive validation state for nested data models.
//!
//! A [`Validator`] holds the current list of validation messages for one
//! concern (typically one form or data model) and broadcasts it with
//! latest-value, distinct-change semantics: subscribers see the most recent
//! list immediately, then each change, and never a backlog. Messages carry
//! the same path identifiers that inspectors produce, so consumers can match
//! a message to the exact piece of state it concerns by string equality.
//!
//! # Example
//!
//! ```ignore
//! let validator: Validator<Person, PersonMessage, ()> = Validator::new(|p, _| {
//!     let mut msgs = Vec::new();
//!     if !rules::required(&p.name) {
//!         msgs.push(PersonMessage::empty_name());
//!     }
//!     msgs
//! });
//!
//! let mut msgs = validator.msgs();
//! validator.publish(validator.run(&person, &()));
//!
//! while let Some(messages) = msgs.recv().await {
//!     // highlight the fields whose inspector ids appear in `messages`
//! }
//! ```

mod message;
mod validator;

pub mod rules;

pub use message::ValidationMessage;
pub use validator::{MessageStream, Validation, Validator};
