//! Cancellable delivery of scheduled assistant replies.
//!
//! Requires a browser environment: timers are `gloo-timers` `Timeout`
//! handles and dropping a handle cancels it. SSR paths keep nothing and
//! never fire.

#[cfg(test)]
#[path = "reply_timer_test.rs"]
mod reply_timer_test;

use crate::state::assistant::ScheduledReply;

/// Timers for the replies of the most recent exchange.
#[derive(Default)]
pub struct ReplyTimers {
    #[cfg(feature = "hydrate")]
    handles: Vec<gloo_timers::callback::Timeout>,
}

impl ReplyTimers {
    /// Cancel anything still pending and schedule `replies`; `on_fire` runs
    /// once per reply when its delay elapses.
    pub fn replace<F>(&mut self, replies: Vec<ScheduledReply>, on_fire: F)
    where
        F: Fn(ScheduledReply) + Clone + 'static,
    {
        self.cancel();
        #[cfg(feature = "hydrate")]
        {
            for reply in replies {
                let millis = u32::try_from(reply.delay.as_millis()).unwrap_or(u32::MAX);
                let deliver = on_fire.clone();
                self.handles
                    .push(gloo_timers::callback::Timeout::new(millis, move || deliver(reply)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (replies, on_fire);
        }
    }

    /// Drop every pending timer without firing it.
    pub fn cancel(&mut self) {
        #[cfg(feature = "hydrate")]
        self.handles.clear();
    }

    /// Number of timers still held.
    #[must_use]
    pub fn pending(&self) -> usize {
        #[cfg(feature = "hydrate")]
        {
            self.handles.len()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0
        }
    }
}
