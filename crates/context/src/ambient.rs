//! Ambient propagation of the current [`ExecutionContext`].
//!
//! Hosts that already thread a context value through their call chain can
//! ignore this module. For async code that does not, a context can be
//! installed for the duration of a future (task-local) or a closure, and
//! read back anywhere below it with [`ExecutionContext::current`].

use crate::store::ExecutionContext;
use std::future::Future;

tokio::task_local! {
    static CURRENT: ExecutionContext;
}

impl ExecutionContext {
    /// The context installed by the innermost enclosing scope, or root.
    #[must_use]
    pub fn current() -> Self {
        CURRENT
            .try_with(Clone::clone)
            .unwrap_or_else(|_| Self::root())
    }

    /// Run `future` with `self` installed as the current context.
    pub async fn scope<F>(self, future: F) -> F::Output
    where
        F: Future,
    {
        CURRENT.scope(self, future).await
    }

    /// Run `op` synchronously with `self` installed as the current context.
    pub fn sync_scope<R>(self, op: impl FnOnce() -> R) -> R {
        CURRENT.sync_scope(self, op)
    }
}
