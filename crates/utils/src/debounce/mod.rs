//! Debounced functions.
//!
//! A [`Debouncer`] wraps a target function so a burst of calls separated by
//! less than the configured delay collapses into one trailing call carrying
//! the latest argument. With `immediate` set, the first call of a burst also
//! fires right away.
//!
//! Timers run as tasks on the tokio runtime the debouncer was created on.

mod config;
mod handle;

pub use config::DebounceConfig;
pub use handle::TimerHandle;

use crate::async_runtime::current_runtime;
use fnkit_core::Result;
use handle::TimerOwner;
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::{debug, trace, warn};

/// Wrap `target` in a debouncer configured by `config`
pub fn debounce<A, F>(target: F, config: DebounceConfig) -> Result<Debouncer<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debouncer::new(config, target)
}

struct State<A> {
    generation: u64,
    timer: Option<AbortHandle>,
    pending: Option<A>,
}

struct Inner<A> {
    config: DebounceConfig,
    target: Box<dyn Fn(A) + Send + Sync>,
    runtime: Handle,
    state: Mutex<State<A>>,
}

impl<A: Send + 'static> Inner<A> {
    async fn expire(self: Arc<Self>, generation: u64) {
        tokio::time::sleep(self.config.delay).await;

        let args = {
            let mut state = self.state.lock();
            if state.generation != generation {
                return;
            }
            state.timer = None;
            state.pending.take()
        };

        match args {
            Some(args) => {
                debug!(generation, "debounce window closed, firing trailing call");
                (self.target)(args);
            }
            None => trace!(generation, "debounce window closed with nothing pending"),
        }
    }
}

impl<A: Send> TimerOwner for Inner<A> {
    fn cancel_generation(&self, generation: u64) -> bool {
        let mut state = self.state.lock();
        if state.generation != generation {
            return false;
        }
        match state.timer.take() {
            Some(timer) => {
                timer.abort();
                state.pending = None;
                trace!(generation, "debounce timer cancelled");
                true
            }
            None => false,
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        let state = self.state.lock();
        state.generation == generation && state.timer.is_some()
    }
}

/// A debounced function. Cloning yields another handle to the same
/// debouncer.
pub struct Debouncer<A> {
    inner: Arc<Inner<A>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Create a debouncer on the current tokio runtime. Calling this outside
    /// a runtime is a usage error.
    pub fn new<F>(config: DebounceConfig, target: F) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let runtime = current_runtime("debounce")?;
        Self::with_runtime(config, target, runtime)
    }

    /// Create a debouncer whose timers run on `runtime`
    pub fn with_runtime<F>(config: DebounceConfig, target: F, runtime: Handle) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                target: Box::new(target),
                runtime,
                state: Mutex::new(State {
                    generation: 0,
                    timer: None,
                    pending: None,
                }),
            }),
        })
    }

    /// Invoke the debounced function.
    ///
    /// Re-arms the timer; the previous call's handle is retired. Fires the
    /// target synchronously if `immediate` is set and no window is open.
    pub fn call(&self, args: A) -> TimerHandle {
        let mut state = self.inner.state.lock();
        let window_open = match state.timer.take() {
            Some(previous) => {
                previous.abort();
                true
            }
            None => false,
        };

        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;

        let fire_now = self.inner.config.immediate && !window_open;
        let leading = if fire_now {
            state.pending = None;
            Some(args)
        } else {
            state.pending = Some(args);
            None
        };

        let task = self
            .inner
            .runtime
            .spawn(Arc::clone(&self.inner).expire(generation));
        // The timer cannot complete while the state lock is held, so a finished
        // task here was rejected by a runtime that has shut down.
        if task.is_finished() {
            if state.pending.take().is_some() {
                warn!(generation, "runtime has shut down, dropping trailing call");
            }
        } else {
            state.timer = Some(task.abort_handle());
        }
        drop(state);

        if let Some(args) = leading {
            debug!(generation, "debounce window opened, firing leading call");
            (self.inner.target)(args);
        }

        let owner: Weak<Inner<A>> = Arc::downgrade(&self.inner);
        TimerHandle::new(generation, owner)
    }

    /// Drop the pending trailing call, if any, and close the window
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        if let Some(timer) = state.timer.take() {
            timer.abort();
            trace!(generation = state.generation, "debouncer cancelled");
        }
        state.pending = None;
    }

    /// Whether a debounce window is currently open
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().timer.is_some()
    }

    pub fn config(&self) -> &DebounceConfig {
        &self.inner.config
    }
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
