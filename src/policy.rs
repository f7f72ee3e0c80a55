use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::SameSite;
use crate::cookie::{DEFAULT_COOKIE_NAME, SessionCookie};
use crate::token::{self, InvalidTokenError};

/// Named security profile selecting which protection attributes a session
/// cookie carries by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityProfile {
    /// No protection attributes. The caller bears responsibility for the
    /// resulting exposure; only suitable for local development over HTTP.
    Minimal,
    /// `Secure`, `HttpOnly`, and `SameSite=Lax`. A hardened policy never
    /// emits a cookie without `Secure` and `HttpOnly`, and never with
    /// `SameSite=None`.
    #[default]
    Hardened,
}

/// Attribute policy for session cookies.
///
/// Starts from a [`SecurityProfile`]'s defaults; individual attributes can be
/// overridden with the `with_*` methods before calling [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct CookiePolicy {
    profile: SecurityProfile,
    name: Cow<'static, str>,
    secure: bool,
    http_only: bool,
    same_site: SameSite,
    path: Cow<'static, str>,
    domain: Option<Cow<'static, str>>,
    max_age: Option<Duration>,
}

impl CookiePolicy {
    #[must_use]
    pub fn from_profile(profile: SecurityProfile) -> Self {
        let (secure, http_only, same_site) = match profile {
            SecurityProfile::Hardened => (true, true, SameSite::Lax),
            SecurityProfile::Minimal => (false, false, SameSite::None),
        };

        Self {
            profile,
            name: DEFAULT_COOKIE_NAME.into(),
            secure,
            http_only,
            same_site,
            path: "/".into(),
            domain: None,
            max_age: None,
        }
    }

    pub fn profile(&self) -> SecurityProfile {
        self.profile
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn with_name<N: Into<Cow<'static, str>>>(mut self, name: N) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[must_use]
    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    #[must_use]
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    #[must_use]
    pub fn with_path<P: Into<Cow<'static, str>>>(mut self, path: P) -> Self {
        self.path = path.into();
        self
    }

    #[must_use]
    pub fn with_domain<D: Into<Cow<'static, str>>>(mut self, domain: D) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn without_domain(mut self) -> Self {
        self.domain = None;
        self
    }

    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Build a [`SessionCookie`] carrying `value`.
    ///
    /// Rejects empty or implausible token values with [`InvalidTokenError`].
    /// Under [`SecurityProfile::Hardened`] the result always has `Secure` and
    /// `HttpOnly` set and `SameSite` of `Lax` or `Strict`, regardless of any
    /// weaker overrides.
    pub fn build<V: Into<String>>(&self, value: V) -> Result<SessionCookie, InvalidTokenError> {
        let value = value.into();
        token::validate(&value)?;

        let mut secure = self.secure;
        let mut http_only = self.http_only;
        let mut same_site = self.same_site;

        if self.profile == SecurityProfile::Hardened {
            secure = true;
            http_only = true;
            if same_site == SameSite::None {
                same_site = SameSite::Lax;
            }
        }

        Ok(SessionCookie {
            name: self.name.clone(),
            value,
            secure,
            http_only,
            same_site,
            path: self.path.clone(),
            domain: self.domain.clone(),
            max_age: self.max_age,
        })
    }
}

impl Default for CookiePolicy {
    fn default() -> Self {
        Self::from_profile(SecurityProfile::default())
    }
}

/// Build a session cookie for `value` using `profile`'s default attributes.
pub fn build<V: Into<String>>(
    value: V,
    profile: SecurityProfile,
) -> Result<SessionCookie, InvalidTokenError> {
    CookiePolicy::from_profile(profile).build(value)
}
