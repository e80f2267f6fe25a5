use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use leptos::{prelude::*, task::spawn_local};

use crate::contact::{
    EmailParams, FollowUpAction, FormController, FormFields, PendingSubmission,
    SubmissionFailure, SubmissionGateway, SubmissionStatus, SubmissionTiming,
};

#[server]
pub async fn send_email(params: EmailParams) -> Result<(), ServerFnError> {
    use crate::relay::EmailRelay;

    let relay = EmailRelay::global().ok_or_else(|| {
        tracing::error!("email relay is not configured");
        ServerFnError::new("Email delivery is unavailable")
    })?;
    relay.deliver(&params).await.map_err(|err| {
        tracing::error!(%err, "email delivery failed");
        ServerFnError::new("Email delivery failed")
    })
}

/// Browser side of the gateway: forwards the payload to the `send_email` server function.
pub struct ServerFnGateway;

#[async_trait(?Send)]
impl SubmissionGateway for ServerFnGateway {
    async fn send(&self, params: EmailParams) -> Result<(), SubmissionFailure> {
        send_email(params)
            .await
            .map_err(|err| SubmissionFailure::new(err.to_string()))
    }
}

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Source of one-shot delayed callbacks.
pub trait Timer: Send + Sync + 'static {
    type Handle: Send + 'static;

    /// Runs `task` once after `delay`. `None` means it could not be scheduled.
    fn start(&self, delay: Duration, task: Task) -> Option<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout` on the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowTimer;

impl Timer for WindowTimer {
    type Handle = TimeoutHandle;

    fn start(&self, delay: Duration, task: Task) -> Option<TimeoutHandle> {
        set_timeout_with_handle(task, delay)
            .map_err(|err| log::error!("couldn't schedule follow-up: {err:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

struct Pending<T: Timer> {
    timer: T,
    handles: Vec<T::Handle>,
}

/// Timeouts owned by a component; whatever is still pending is cancelled on cleanup.
pub struct DeferredTasks<T: Timer> {
    inner: Arc<Mutex<Pending<T>>>,
}

impl<T: Timer> Clone for DeferredTasks<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Timer> DeferredTasks<T> {
    /// Must be called under the owner whose cleanup should cancel the tasks.
    pub fn new(timer: T) -> Self {
        let tasks = Self {
            inner: Arc::new(Mutex::new(Pending {
                timer,
                handles: Vec::new(),
            })),
        };
        let on_dispose = tasks.clone();
        on_cleanup(move || on_dispose.cancel_all());
        tasks
    }

    pub fn schedule(&self, delay: Duration, task: impl FnOnce() + Send + 'static) {
        let mut pending = self.inner.lock().expect("deferred tasks lock poisoned");
        if let Some(handle) = pending.timer.start(delay, Box::new(task)) {
            pending.handles.push(handle);
        }
    }

    pub fn cancel_all(&self) {
        let mut pending = self.inner.lock().expect("deferred tasks lock poisoned");
        let handles = std::mem::take(&mut pending.handles);
        handles
            .into_iter()
            .for_each(|handle| pending.timer.cancel(handle));
    }
}

/// Reactive wrapper around a [`FormController`]: status signal, follow-up timers and
/// the overlay close callback.
pub struct FormHandle<F: FormFields + Send + Sync + 'static, T: Timer = WindowTimer> {
    pub controller: RwSignal<FormController<F>>,
    tasks: StoredValue<DeferredTasks<T>>,
    on_close: Option<Callback<()>>,
}

impl<F: FormFields + Send + Sync + 'static, T: Timer> Clone for FormHandle<F, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormFields + Send + Sync + 'static, T: Timer> Copy for FormHandle<F, T> {}

impl<F: FormFields + Send + Sync + 'static> FormHandle<F> {
    pub fn new(timing: SubmissionTiming, on_close: Option<Callback<()>>) -> Self {
        Self::with_timer(timing, on_close, WindowTimer)
    }

    /// Sends the current form through the `send_email` server function.
    pub fn submit(&self) {
        if let Some(task) = self.submit_via(ServerFnGateway) {
            spawn_local(task);
        }
    }
}

impl<F: FormFields + Send + Sync + 'static, T: Timer> FormHandle<F, T> {
    pub fn with_timer(timing: SubmissionTiming, on_close: Option<Callback<()>>, timer: T) -> Self {
        Self {
            controller: RwSignal::new(FormController::new(timing)),
            tasks: StoredValue::new(DeferredTasks::new(timer)),
            on_close,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.controller.with(|c| c.status())
    }

    pub fn is_submitting(&self) -> bool {
        self.status().is_submitting()
    }

    pub fn set_field(&self, name: &str, value: String) {
        self.controller.update(|c| {
            if let Err(err) = c.set_field(name, value) {
                log::error!("{err}");
            }
        });
    }

    pub fn toggle_list_field(&self, name: &str, value: &str, included: bool) {
        self.controller.update(|c| {
            if let Err(err) = c.toggle_list_field(name, value, included) {
                log::error!("{err}");
            }
        });
    }

    /// Starts an attempt right away and returns the send to drive, or `None` while one is
    /// already in flight.
    pub fn submit_via<G: SubmissionGateway + 'static>(
        &self,
        gateway: G,
    ) -> Option<impl Future<Output = ()> + 'static> {
        let pending = self.begin()?;
        let handle = *self;
        Some(async move {
            let outcome = gateway.send(pending.params).await;
            handle.settle(pending.attempt, outcome);
        })
    }

    fn begin(&self) -> Option<PendingSubmission> {
        let now = chrono::Local::now().naive_local();
        let pending = self
            .controller
            .try_update(|c| c.begin_submit(now))
            .flatten()?;
        // a fresh attempt makes any earlier follow-ups meaningless
        self.tasks.try_with_value(|tasks| tasks.cancel_all());
        Some(pending)
    }

    fn settle(&self, attempt: u64, outcome: Result<(), SubmissionFailure>) {
        // the component may have been unmounted while the send was in flight
        let Some(follow_ups) = self.controller.try_update(|c| c.finish(attempt, outcome)) else {
            return;
        };
        let Some(tasks) = self.tasks.try_get_value() else {
            return;
        };
        let handle = *self;
        for follow_up in follow_ups {
            tasks.schedule(follow_up.delay, move || {
                let action = handle
                    .controller
                    .try_update(|c| c.apply(follow_up))
                    .flatten();
                if action == Some(FollowUpAction::CloseOverlay) {
                    if let Some(on_close) = handle.on_close {
                        on_close.run(());
                    }
                }
            });
        }
    }
}
