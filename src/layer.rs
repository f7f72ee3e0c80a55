use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use http::{Request, Response};
use tower_cookies::CookieManager;
use tower_layer::Layer;
use tower_service::Service;

use crate::{policy::CookiePolicy, token::TokenGenerator};

/// Issues a session cookie on responses according to a [`CookiePolicy`].
///
/// The wrapped service sees the request unchanged; once it responds, a fresh
/// token is generated and the policy cookie added to the jar when the request
/// did not already carry one.
#[derive(Debug, Clone, Default)]
pub struct SessionCookieLayer {
    policy: CookiePolicy,
    generator: TokenGenerator,
    always_issue: bool,
}

impl SessionCookieLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(mut self, policy: CookiePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_generator(mut self, generator: TokenGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Re-issue a fresh cookie on every response, superseding any previous
    /// one, instead of only when the request carried no session cookie.
    #[must_use]
    pub fn with_always_issue(mut self, always_issue: bool) -> Self {
        self.always_issue = always_issue;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SessionCookieIssuer<S> {
    inner: S,
    policy: CookiePolicy,
    generator: TokenGenerator,
    always_issue: bool,
}

impl<S> Layer<S> for SessionCookieLayer {
    type Service = CookieManager<SessionCookieIssuer<S>>;

    fn layer(&self, inner: S) -> Self::Service {
        CookieManager::new(SessionCookieIssuer {
            inner,
            policy: self.policy.clone(),
            generator: self.generator.clone(),
            always_issue: self.always_issue,
        })
    }
}

impl<ReqBody, ResBody, S> Service<Request<ReqBody>> for SessionCookieIssuer<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Default + Send,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let policy = self.policy.clone();
        let generator = self.generator.clone();
        let always_issue = self.always_issue;

        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let cookies = match req.extensions().get::<tower_cookies::Cookies>().cloned() {
                Some(cookies) => cookies,
                None => {
                    let mut res = Response::default();
                    *res.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
                    return Ok(res);
                }
            };

            let had_cookie = cookies.get(policy.name()).is_some();

            let res = inner.call(req).await?;

            if res.status().is_server_error() || (had_cookie && !always_issue) {
                return Ok(res);
            }

            match policy.build(generator.generate()) {
                Ok(session_cookie) => cookies.add(session_cookie.into_cookie()),
                Err(err) => {
                    tracing::error!(err = %err, "session cookie build failed");
                    let mut res = Response::default();
                    *res.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
                    return Ok(res);
                }
            }

            Ok(res)
        })
    }
}
