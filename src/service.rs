// SPDX-License-Identifier: MPL-2.0
//! Process-wide toast functions for code outside the widget tree.
//!
//! A mounted [`Provider`](crate::ui::notifications::Provider) registers its
//! show and hide functions here. The most recent registration wins. Calling
//! [`show`] or [`hide`] before any provider mounted is an integration error
//! and returns [`Error::ProviderNotMounted`].
//!
//! Code that can be handed a [`ToastHandle`](crate::ui::notifications::ToastHandle)
//! should prefer it over these globals.
//!
//! ```
//! use iced_toast::service;
//! use iced_toast::ui::notifications::ToastRequest;
//!
//! service::register_show(|request: ToastRequest| println!("{}", request.message()));
//! service::register_hide(|| {});
//! service::show(ToastRequest::new("Saved")).expect("provider registered");
//! ```

use crate::error::{Error, Result};
use crate::ui::notifications::ToastRequest;
use std::sync::{Arc, PoisonError, RwLock};

type ShowFn = Arc<dyn Fn(ToastRequest) + Send + Sync>;
type HideFn = Arc<dyn Fn() + Send + Sync>;

static SHOW: RwLock<Option<ShowFn>> = RwLock::new(None);
static HIDE: RwLock<Option<HideFn>> = RwLock::new(None);

/// Replaces the global show function.
pub fn register_show(show_fn: impl Fn(ToastRequest) + Send + Sync + 'static) {
    *SHOW.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(show_fn));
}

/// Replaces the global hide function.
pub fn register_hide(hide_fn: impl Fn() + Send + Sync + 'static) {
    *HIDE.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(hide_fn));
}

/// Shows a toast through the registered provider.
pub fn show(request: ToastRequest) -> Result<()> {
    // Clone out of the lock so the registered function may re-register.
    let show_fn = SHOW
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(Error::ProviderNotMounted)?;
    show_fn(request);
    Ok(())
}

/// Hides the visible toast through the registered provider.
pub fn hide() -> Result<()> {
    let hide_fn = HIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(Error::ProviderNotMounted)?;
    hide_fn();
    Ok(())
}

/// Returns whether both functions have been registered.
#[must_use]
pub fn is_registered() -> bool {
    SHOW.read().unwrap_or_else(PoisonError::into_inner).is_some()
        && HIDE.read().unwrap_or_else(PoisonError::into_inner).is_some()
}

#[cfg(test)]
pub(crate) fn registry_lock() -> &'static std::sync::Mutex<()> {
    use std::sync::{Mutex, OnceLock};

    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

#[cfg(test)]
pub(crate) fn reset() {
    *SHOW.write().unwrap_or_else(PoisonError::into_inner) = None;
    *HIDE.write().unwrap_or_else(PoisonError::into_inner) = None;
}
