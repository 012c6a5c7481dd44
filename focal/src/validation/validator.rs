//! Conflated broadcast of the current validation message list.

use futures::{Stream, StreamExt};
use log::{debug, trace};
use tokio::sync::watch;

use super::message::ValidationMessage;

type ValidateFn<D, M, T> = Box<dyn Fn(&D, &T) -> Vec<M> + Send + Sync>;

/// Holder of the current validation messages for one concern.
///
/// The state is a single slot with last-write-wins semantics: publishing
/// replaces the held list, subscribers observe the latest value and each
/// subsequent distinct one, and a slow subscriber skips intermediate lists
/// instead of buffering them. Publishing never blocks on subscribers.
///
/// The validation function itself is pure and pluggable; it is supplied at
/// construction and invoked via [`Validator::run`] (or through the
/// [`Validation`] trait, which also publishes the result).
pub struct Validator<D, M: ValidationMessage, T> {
    tx: watch::Sender<Option<Vec<M>>>,
    validate: ValidateFn<D, M, T>,
}

impl<D, M: ValidationMessage, T> Validator<D, M, T> {
    /// Create a validator around a pure validation function.
    pub fn new(validate: impl Fn(&D, &T) -> Vec<M> + Send + Sync + 'static) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx,
            validate: Box::new(validate),
        }
    }

    /// Run the validation function. Pure; does not publish.
    pub fn run(&self, data: &D, metadata: &T) -> Vec<M> {
        (self.validate)(data, metadata)
    }

    /// Replace the current message list.
    ///
    /// Subscribers are notified unless the list equals the one already held,
    /// so republishing an unchanged result is silent.
    pub fn publish(&self, messages: Vec<M>) {
        self.tx.send_if_modified(|current| {
            if current.as_deref() == Some(messages.as_slice()) {
                trace!("identical message list republished, not notifying");
                false
            } else {
                debug!("publishing {} validation message(s)", messages.len());
                *current = Some(messages);
                true
            }
        });
    }

    /// Snapshot of the most recently published list, if any.
    pub fn current(&self) -> Option<Vec<M>> {
        self.tx.borrow().clone()
    }

    /// Whether no currently-held message reports a failure.
    ///
    /// Vacuously true before the first publish.
    pub fn is_valid(&self) -> bool {
        match self.tx.borrow().as_ref() {
            Some(messages) => messages.iter().all(|m| !m.failed()),
            None => true,
        }
    }

    /// Subscribe to the message state.
    ///
    /// The stream first replays the current list if one has been published,
    /// then yields subsequent lists in publish order, skipping any list
    /// equal to the one it delivered last.
    pub fn msgs(&self) -> MessageStream<M> {
        MessageStream {
            rx: self.tx.subscribe(),
            last: None,
        }
    }

    /// [`Validator::msgs`] mapped to "no message failed".
    pub fn is_valid_stream(&self) -> impl Stream<Item = bool> + Send + use<D, M, T> {
        self.msgs()
            .into_stream()
            .map(|messages| messages.iter().all(|m| !m.failed()))
    }
}

/// Subscription handle to a [`Validator`]'s message state.
///
/// Distinct-until-changed is enforced per subscriber: the stream remembers
/// the last list it yielded, so even when intermediate lists are skipped by
/// conflation, a list equal to the previously delivered one is never
/// delivered twice in a row.
pub struct MessageStream<M: ValidationMessage> {
    rx: watch::Receiver<Option<Vec<M>>>,
    last: Option<Vec<M>>,
}

impl<M: ValidationMessage> MessageStream<M> {
    /// Receive the next message list.
    ///
    /// The first call returns the currently-held list when a publish has
    /// already happened; afterwards each call waits until the latest held
    /// list differs from the one delivered last and returns it. Returns
    /// `None` once the validator has been dropped.
    pub async fn recv(&mut self) -> Option<Vec<M>> {
        loop {
            let current = self.rx.borrow_and_update().clone();
            if let Some(current) = current {
                if self.last.as_ref() != Some(&current) {
                    self.last = Some(current.clone());
                    return Some(current);
                }
            }
            if self.rx.changed().await.is_err() {
                return None;
            }
        }
    }

    /// Adapt this subscription into a [`futures::Stream`] of message lists.
    pub fn into_stream(self) -> impl Stream<Item = Vec<M>> + Send {
        futures::stream::unfold(self, |mut stream| async move {
            stream.recv().await.map(|messages| (messages, stream))
        })
    }
}

/// A validation concern: a [`Validator`] plus the convention that running it
/// publishes the freshly computed messages.
///
/// Implementors only supply [`Validation::validator`]; `validate` gives a
/// synchronous pass/fail answer while the published list reaches stream
/// subscribers asynchronously.
pub trait Validation<D, M: ValidationMessage, T> {
    /// The validator holding this concern's message state.
    fn validator(&self) -> &Validator<D, M, T>;

    /// Validate `data`, publish the exact resulting message list, and
    /// return whether none of the messages failed.
    fn validate(&self, data: &D, metadata: &T) -> bool {
        let messages = self.validator().run(data, metadata);
        let valid = messages.iter().all(|m| !m.failed());
        self.validator().publish(messages);
        valid
    }

    /// Subscribe to the validator's message state.
    fn msgs(&self) -> MessageStream<M> {
        self.validator().msgs()
    }
}
