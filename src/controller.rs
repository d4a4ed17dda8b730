//! Async flows of the access page: the mount-time health probe and the
//! login submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both flows are plain futures over an [`ApiClient`] and a [`ViewStore`];
//! the page spawns them on the browser event loop and tests drive them on a
//! tokio runtime.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::future::Future;

use futures::future::{AbortHandle, Aborted, abortable};

use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::state::health::HealthState;
use crate::state::login::LoginView;
use crate::state::store::ViewStore;

/// Abort signal for work started at mount.
///
/// Call [`MountGuard::unmount`] from the component cleanup; any probe still
/// in flight is dropped without touching state.
#[derive(Clone, Debug)]
pub struct MountGuard {
    handle: AbortHandle,
}

impl MountGuard {
    pub fn unmount(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.handle.is_aborted()
    }
}

/// Build the mount-time health probe.
///
/// The returned future records the probe result in `store` unless the
/// guard was released first.
pub fn health_check<T, S>(client: ApiClient<T>, store: S) -> (impl Future<Output = ()>, MountGuard)
where
    T: Transport,
    S: ViewStore<LoginView>,
{
    let (probe, handle) = abortable(async move { client.check_health().await });
    let task = async move {
        match probe.await {
            Ok(result) => {
                let health = HealthState::from_probe(&result);
                log::debug!("health: {:?} ({})", health.status, health.message);
                store.apply(|view| view.apply_health(health));
            }
            Err(Aborted) => log::debug!("health check dropped after unmount"),
        }
    };
    (task, MountGuard { handle })
}

/// Run one form submission.
///
/// Local checks happen synchronously in [`LoginView::begin_submit`]; only a
/// valid attempt reaches the network.
pub async fn submit<T, S>(client: &ApiClient<T>, store: &S)
where
    T: Transport,
    S: ViewStore<LoginView>,
{
    let Some(attempt) = store.apply(LoginView::begin_submit).flatten() else {
        return;
    };
    let result = client.login(&attempt.username, &attempt.password).await;
    store.apply(|view| view.finish_submit(result));
}
