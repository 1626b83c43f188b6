use std::net::IpAddr;

use poem::Request;

use super::request_id::RequestId;

/// Where an operation was started from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    Api,
    Cli,
}

/// Request context that flows from the API layer into coordinators
///
/// Carries the correlation id and caller address used in log lines.
/// Authentication is handled outside this service, so the context holds
/// no identity.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Unique identifier for this request (for tracing across layers)
    pub request_id: RequestId,

    /// Source of the request (API or CLI)
    pub source: RequestSource,
}

impl RequestContext {
    /// Build the context for an incoming HTTP request
    pub fn from_request(req: &Request) -> Self {
        let ctx = Self {
            ip_address: Self::extract_ip_address(req),
            request_id: RequestId::generate(),
            source: RequestSource::Api,
        };

        tracing::trace!("Request context created: {:?}", ctx);

        ctx
    }

    /// Create a RequestContext for CLI operations
    pub fn for_cli() -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::generate(),
            source: RequestSource::Cli,
        }
    }

    /// Extract IP address from request headers
    ///
    /// Checks X-Forwarded-For, X-Real-IP, and falls back to remote address.
    fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Check X-Forwarded-For header (proxy/load balancer)
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // Check X-Real-IP header (nginx)
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.parse().ok();
        }

        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }
}
