use std::borrow::Cow;

use time::Duration;
use tower_cookies::Cookie;

use crate::SameSite;

/// Cookie name used when a policy does not override it.
pub const DEFAULT_COOKIE_NAME: &str = "sessionid";

/// A fully-resolved session cookie, ready to be serialized into a
/// `Set-Cookie` header.
///
/// Instances are produced by [`CookiePolicy::build`](crate::CookiePolicy::build)
/// and are not mutated afterwards; a session rotation supersedes the cookie by
/// building a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub(crate) name: Cow<'static, str>,
    pub(crate) value: String,
    pub(crate) secure: bool,
    pub(crate) http_only: bool,
    pub(crate) same_site: SameSite,
    pub(crate) path: Cow<'static, str>,
    pub(crate) domain: Option<Cow<'static, str>>,
    pub(crate) max_age: Option<Duration>,
}

impl SessionCookie {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }

    pub fn same_site(&self) -> SameSite {
        self.same_site
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn max_age(&self) -> Option<Duration> {
        self.max_age
    }

    /// Convert into a [`tower_cookies::Cookie`] for the framework to attach to
    /// a response.
    pub fn into_cookie(self) -> Cookie<'static> {
        let mut cookie_builder = Cookie::build((self.name, self.value))
            .http_only(self.http_only)
            .same_site(self.same_site)
            .secure(self.secure)
            .path(self.path);

        if let Some(max_age) = self.max_age {
            cookie_builder = cookie_builder.max_age(std::cmp::max(max_age, Duration::ZERO));
        }

        if let Some(domain) = self.domain {
            cookie_builder = cookie_builder.domain(domain);
        }

        cookie_builder.build()
    }
}
