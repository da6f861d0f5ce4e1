use crate::config::SiteConfig;
use crate::notfoundpage;
use crate::theme;
use axum::Router;
use axum::routing::get;
use maud::Markup;
use tower_http::services::ServeDir;

/// Client routes; each one gets the same shell and the router in the bundle
/// takes over.
pub const CLIENT_ROUTES: &[&str] = &["/", "/profile"];

async fn app_shell() -> Markup {
    theme::app_shell()
}

pub fn router(config: &SiteConfig) -> Router {
    let app = CLIENT_ROUTES
        .iter()
        .fold(Router::new(), |app, path| app.route(path, get(app_shell)));

    app.nest_service("/pkg", ServeDir::new(config.pkg_dir()))
        .nest_service("/userIcons", ServeDir::new(config.avatar_dir()))
        .fallback(notfoundpage::not_found_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router(&SiteConfig::from_lookup(|_| None))
    }

    #[tokio::test]
    async fn test_client_routes_serve_shell() {
        for path in CLIENT_ROUTES {
            let response = app()
                .oneshot(
                    Request::get(*path)
                        .body(Body::empty())
                        .expect("request should build"),
                )
                .await
                .expect("router should respond");

            assert_eq!(response.status(), StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(
                Request::get("/journal")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
