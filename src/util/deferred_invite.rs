//! Single-slot durable storage for a pending community invite token.
//!
//! SYSTEM CONTEXT
//! ==============
//! An invite link opened while signed out parks its token here; the session
//! gate replays it exactly once after the next login. At most one invite is
//! outstanding at a time; a newer link silently supersedes an older one.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures degrade to "no pending invite" on read and best-effort
//! on write, with a log line. Losing a deferred invite is acceptable;
//! corrupting navigation state is not, so nothing here propagates errors.
//!
//! Non-browser builds (SSR, native tests) back the same API with a
//! thread-local slot so the read-and-clear contract is exercised unchanged.

#[cfg(test)]
#[path = "deferred_invite_test.rs"]
mod deferred_invite_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "waypool_pending_invite";

#[cfg(not(feature = "hydrate"))]
use std::cell::RefCell;

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static SLOT: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Persist `token` as the pending invite, overwriting any previous value.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("deferred invite dropped: localStorage unavailable");
            return;
        };
        if storage.set_item(STORAGE_KEY, token).is_err() {
            log::warn!("deferred invite dropped: localStorage write failed");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SLOT.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
    }
}

/// Read the pending invite and unconditionally clear it, returning the
/// previous value.
///
/// Read-and-clear is one logical step on the single-threaded event loop:
/// no caller can observe a token without also being the one that consumed
/// it, which is what makes invite processing at-most-once.
pub fn take() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let value = storage.get_item(STORAGE_KEY).ok().flatten();
        let _ = storage.remove_item(STORAGE_KEY);
        value
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SLOT.with(|slot| slot.borrow_mut().take())
    }
}
