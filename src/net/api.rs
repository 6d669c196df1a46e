//! REST API helpers for the Waypool backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning `None`/error since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session and
//! invite flows degrade without crashing hydration. The session gate and
//! join screen rely on every failure here being an ordinary value.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{InviteAcceptance, SharedRide, User};

#[cfg(any(test, feature = "hydrate"))]
fn shared_ride_endpoint(ride_id: &str) -> String {
    format!("/api/rides/shared/{ride_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_code_failed_message(status: u16) -> String {
    format!("code request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_code_failed_message(status: u16) -> String {
    format!("code verification failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn accept_invite_failed_message(status: u16) -> String {
    format!("invite acceptance failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Request an SMS login code via `POST /api/auth/request-code`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn request_login_code(phone: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "phone": phone });
        let resp = gloo_net::http::Request::post("/api/auth/request-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_code_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = phone;
        Err("not available on server".to_owned())
    }
}

/// Verify an SMS login code via `POST /api/auth/verify-code`, returning the
/// signed-in user on success.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the payload cannot be parsed.
pub async fn verify_login_code(phone: &str, code: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "phone": phone, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(verify_code_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (phone, code);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Record that the KYC prompt was shown via `POST /api/auth/kyc-prompt-ack`.
///
/// Best-effort and idempotent; a failed acknowledgment only risks the
/// prompt reappearing after the next login.
pub async fn acknowledge_kyc_prompt() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/kyc-prompt-ack")
            .send()
            .await;
    }
}

/// Redeem a community invite token via `POST /api/communities/invites/accept`.
///
/// # Errors
///
/// Returns an error string for transport failures and for rejected tokens
/// (invalid, expired, already a member) alike; the caller treats both the
/// same way.
pub async fn accept_community_invite(token: &str) -> Result<InviteAcceptance, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": token });
        let resp = gloo_net::http::Request::post("/api/communities/invites/accept")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(accept_invite_failed_message(resp.status()));
        }
        resp.json::<InviteAcceptance>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch a publicly shared ride from `/api/rides/shared/{ride_id}`.
/// Returns `None` if the link is dead or on the server.
pub async fn fetch_shared_ride(ride_id: &str) -> Option<SharedRide> {
    #[cfg(feature = "hydrate")]
    {
        let url = shared_ride_endpoint(ride_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SharedRide>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ride_id;
        None
    }
}
