//! Process-wide logger slot.
//!
//! Starts out holding nothing, in which case [`logger`] hands back a no-op
//! logger. [`replace`] swaps in a new one; the last call wins, and loggers
//! already handed out stay valid until their holders drop them.

use crate::logger::Logger;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

static GLOBAL: RwLock<Option<Arc<Logger>>> = RwLock::new(None);
static NOP: LazyLock<Arc<Logger>> = LazyLock::new(|| Arc::new(Logger::nop()));

/// Installs `logger` and returns the one it displaced, if any.
pub fn replace(logger: Arc<Logger>) -> Option<Arc<Logger>> {
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    slot.replace(logger)
}

/// The installed logger, or a shared no-op logger before the first install.
#[must_use]
pub fn logger() -> Arc<Logger> {
    let slot = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
    slot.as_ref().map_or_else(|| Arc::clone(&*NOP), Arc::clone)
}

/// True once something has been installed.
#[must_use]
pub fn is_installed() -> bool {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}
