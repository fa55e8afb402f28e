use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::handler::AppModule;

static GREETING: &str = "Hello from the backend!";

pub trait IndexRouter {
    fn route_index(self, static_dir: Option<&Path>) -> Self;
}

impl IndexRouter for Router<AppModule> {
    /// Health greeting plus, when a bundle directory is configured, the
    /// frontend fallback. The fallback only sees requests no API route
    /// matched, and unknown paths inside it resolve to index.html so
    /// client-side routing keeps working.
    fn route_index(self, static_dir: Option<&Path>) -> Self {
        let router = self.route("/api", get(|| async { GREETING }));
        match static_dir {
            Some(dir) => {
                let index = dir.join("index.html");
                router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
            }
            None => router.route("/", get(|| async { GREETING })),
        }
    }
}
