use axum::{Router, http::StatusCode, routing::get};
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub const FIXTURE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../tests/fixtures/youbike_immediate.json"
));

/// Stand-in for the open data platform, bound to an ephemeral port.
pub struct Upstream {
    addr: SocketAddr,
}

impl Upstream {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

pub async fn spawn_upstream() -> Upstream {
    let app = Router::new()
        .route("/feed", get(|| async { FIXTURE }))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/accepted", get(|| async { (StatusCode::ACCEPTED, FIXTURE) }))
        .route("/garbage", get(|| async { "<html>502 Bad Gateway</html>" }));
    Upstream {
        addr: serve(app).await,
    }
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    addr
}
