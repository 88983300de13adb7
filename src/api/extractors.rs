//! Request extractors.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::header;
use axum::http::request::Parts;

use crate::domain::entities::Click;
use crate::utils::client_ip::resolve_client_ip;

/// Who followed a link: user agent and best-effort client address.
///
/// Never rejects. A missing `User-Agent` is recorded as absent and an
/// unresolvable address as `"unknown"`. The peer address comes from
/// `ConnectInfo`, which is only present when the server is started with
/// `into_make_service_with_connect_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub user_agent: Option<String>,
    pub ip_address: String,
}

impl ClientInfo {
    /// A click for this client, stamped now.
    pub fn into_click(self) -> Click {
        Click::new(self.user_agent, self.ip_address)
    }
}

impl<S> FromRequestParts<S> for ClientInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(ClientInfo {
            user_agent,
            ip_address: resolve_client_ip(&parts.headers, peer),
        })
    }
}
