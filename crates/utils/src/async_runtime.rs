//! Glue between plain functions and futures

use fnkit_core::{Error, Result};
use futures::future::{BoxFuture, FutureExt};
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Check if we're already in an async context
#[must_use]
pub fn is_in_async_context() -> bool {
    Handle::try_current().is_ok()
}

/// Handle to the current tokio runtime, or a usage error naming `operation`
pub fn current_runtime(operation: &str) -> Result<Handle> {
    Handle::try_current().map_err(|e| {
        Error::usage(
            operation,
            format!("must be called from within a tokio runtime: {e}"),
        )
    })
}

/// Lift `T -> U` into `(pending T) -> (pending U)`.
///
/// The returned function awaits its input and then calls `f` on the result.
/// Use it to put an async stage in front of synchronous ones:
///
/// ```
/// use fnkit_utils::bind_p;
///
/// let add3 = bind_p(|x: i32| x + 3);
/// assert_eq!(futures::executor::block_on(add3(async { 2 })), 5);
/// ```
pub fn bind_p<T, U, P, F>(f: F) -> impl Fn(P) -> BoxFuture<'static, U>
where
    F: Fn(T) -> U + Send + Sync + 'static,
    P: IntoFuture<Output = T>,
    P::IntoFuture: Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
{
    let f = Arc::new(f);
    move |pending: P| {
        let f = Arc::clone(&f);
        let pending = pending.into_future();
        async move {
            let value = pending.await;
            f(value)
        }
        .boxed()
    }
}

/// Lift `T -> pending U` into `(pending T) -> (pending U)`, awaiting both
/// the input and the future `f` returns
pub fn bind_p_async<T, U, P, F, Fut>(f: F) -> impl Fn(P) -> BoxFuture<'static, U>
where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = U> + Send + 'static,
    P: IntoFuture<Output = T>,
    P::IntoFuture: Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
{
    let f = Arc::new(f);
    move |pending: P| {
        let f = Arc::clone(&f);
        let pending = pending.into_future();
        async move {
            let value = pending.await;
            f(value).await
        }
        .boxed()
    }
}

/// Lift a method-like `Fn(&C, T) -> U`. `ctx` stays bound across the await,
/// so the method sees the same receiver it was lifted with.
pub fn bind_p_with<C, T, U, P, F>(ctx: Arc<C>, f: F) -> impl Fn(P) -> BoxFuture<'static, U>
where
    C: Send + Sync + 'static,
    F: Fn(&C, T) -> U + Send + Sync + 'static,
    P: IntoFuture<Output = T>,
    P::IntoFuture: Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
{
    let f = Arc::new(f);
    move |pending: P| {
        let f = Arc::clone(&f);
        let ctx = Arc::clone(&ctx);
        let pending = pending.into_future();
        async move {
            let value = pending.await;
            f(&ctx, value)
        }
        .boxed()
    }
}
