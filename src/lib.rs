//! Security-profile driven session cookies for `tower`.
//!
//! This crate builds session-identifying cookies from a named
//! [`SecurityProfile`] and provides a layer that issues them on responses.
//! Routing, session storage, and authentication stay with the surrounding
//! framework; the crate only decides which protection attributes the
//! `Set-Cookie` header carries and generates the random token inside it.
//!
//! # Security
//! The default profile is [`SecurityProfile::Hardened`]: `Secure`, `HttpOnly`,
//! and `SameSite=Lax`, and a hardened policy can never be weakened below that.
//!
//! [`SecurityProfile::Minimal`] emits a cookie with **no protection
//! attributes**. It exists for local HTTP development and testing; never use
//! it in a real application, where it exposes the session token to script
//! access and plaintext transport.

mod cookie;
pub mod layer;
mod policy;
mod token;

pub use tower_cookies::cookie::SameSite;

pub use crate::cookie::{DEFAULT_COOKIE_NAME, SessionCookie};
pub use crate::layer::SessionCookieLayer;
pub use crate::policy::{CookiePolicy, SecurityProfile, build};
pub use crate::token::{InvalidTokenError, TokenGenerator};
