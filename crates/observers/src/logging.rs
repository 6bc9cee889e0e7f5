use log::Level;
use plumb_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// Forwards every solver event to the [`log`] facade.
///
/// Each event is logged at the configured level under the `label`, with a
/// running event count kept by the observer itself. The observer never
/// requests an action.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: &'static str,
    level: Level,
    events: usize,
}

impl LogObserver {
    /// Creates an observer that logs at `Level::Debug`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self::with_level(label, Level::Debug)
    }

    /// Creates an observer that logs at the given level.
    #[must_use]
    pub fn with_level(label: &'static str, level: Level) -> Self {
        Self {
            label,
            level,
            events: 0,
        }
    }

    /// Returns the number of events seen so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        log::log!(
            self.level,
            "{} #{}: x = {}, f(x) = {}, next = {}",
            self.label,
            self.events,
            event.x(),
            event.residual(),
            event.next()
        );
        None
    }
}
