//! Scoped scroll subscriptions.
//!
//! A [`ScrollSubscription`] registers one listener on a [`ScrollSource`] when
//! acquired and deregisters it when dropped, so a torn-down page never keeps
//! receiving scroll offsets.

use crate::error::PageError;

pub type OffsetHandler = Box<dyn FnMut(f64)>;

pub trait ScrollSource {
    /// Whatever the source needs back to remove the listener.
    type Listener;

    fn offset(&self) -> f64;
    fn subscribe(&self, on_offset: OffsetHandler) -> Result<Self::Listener, PageError>;
    fn unsubscribe(&self, listener: Self::Listener);
}

pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    listener: Option<S::Listener>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn acquire(source: S, on_offset: impl FnMut(f64) + 'static) -> Result<Self, PageError> {
        let listener = source.subscribe(Box::new(on_offset))?;
        Ok(Self {
            source,
            listener: Some(listener),
        })
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.source.unsubscribe(listener);
        }
    }
}
