use std::net::SocketAddr;

use axum::{Router, routing::get};
use time::Duration;
use tower_session_cookie_policy::{CookiePolicy, SameSite, SecurityProfile, SessionCookieLayer};

async fn index() -> &'static str {
    "hello"
}

#[tokio::main]
async fn main() {
    let policy = CookiePolicy::from_profile(SecurityProfile::Hardened)
        // Default: "sessionid"
        .with_name("sessionid")
        // Default: SameSite::Lax
        .with_same_site(SameSite::Strict)
        // Default: no Max-Age (session cookie)
        .with_max_age(Duration::hours(1))
        // Default: "/"
        .with_path("/")
        // Default: None
        .without_domain();
    let session_layer = SessionCookieLayer::new().with_policy(policy);

    let app = Router::new().route("/", get(index)).layer(session_layer);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("tcp listener binds successfully");
    let local_addr = listener.local_addr().expect("local address is available");
    println!("listening at http://{local_addr}");

    axum::serve(listener, app)
        .await
        .expect("server runs successfully");
}
