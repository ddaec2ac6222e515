use std::sync::mpsc;
use std::time::Duration;
use tokio::task::JoinHandle;

use super::event::Event;
use crate::logging::log_debug;

/// A one-shot delayed event with an explicit cancellation handle.
///
/// The event is posted to `sender` after `delay` unless [`cancel`] runs
/// first. Dropping the task cancels it. Must be created inside a tokio
/// runtime.
///
/// [`cancel`]: ScheduledTask::cancel
#[derive(Debug)]
pub struct ScheduledTask {
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    pub fn schedule(delay: Duration, sender: mpsc::Sender<Event>, event: Event) -> Self {
        log_debug(&format!("Scheduling {:?} in {}ms", event, delay.as_millis()));

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(event);
        });

        Self { handle: Some(handle) }
    }

    /// Still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                log_debug("Cancelling scheduled task");
            }
            handle.abort();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
