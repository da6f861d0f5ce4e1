use dotenvy::dotenv;
use std::env;
use worklog::config::SiteConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        unsafe {
            // Concurrent writing of set_var is not permitted,
            // but we're in main, so that shouldn't be a problem.
            env::set_var("RUST_LOG", "INFO");
        }
    }
    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env();
    let app = worklog::server::router(&config);

    tracing::info!(addr = %config.addr, site_root = %config.site_root, "serving worklog");
    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .expect("failed to bind the tcp address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("failed to serve on the address");
}
