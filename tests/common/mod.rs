#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use link_shortener::api::routes::routes;
use link_shortener::application::services::ClickRecording;
use link_shortener::domain::entities::{Link, NewLink};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const CODE_LENGTH: usize = 4;
pub const PEER_ADDR: &str = "127.0.0.1:12345";

/// Inserts `ConnectInfo`, standing in for `into_make_service_with_connect_info`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// App state over a fresh in-memory store with inline click recording.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    create_test_state_with(Arc::new(InMemoryLinkRepository::new()), ClickRecording::Inline)
}

pub fn create_test_state_with<R>(repo: Arc<R>, recording: ClickRecording) -> (AppState, Arc<R>)
where
    R: LinkRepository + 'static,
{
    let state = AppState::new(repo.clone(), CODE_LENGTH, 10, recording);
    (state, repo)
}

/// Full route table behind the mock peer address.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = routes().with_state(state).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.insert(NewLink {
        short_code: code.to_string(),
        long_url: url.to_string(),
    })
    .await
    .unwrap()
}
