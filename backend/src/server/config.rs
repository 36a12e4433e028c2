//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) force_utf8: bool,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Bind to `bind_addr` with the UTF-8 charset middleware enabled.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            force_utf8: true,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Toggle the middleware that appends `charset=utf-8` to responses.
    #[must_use]
    pub fn with_force_utf8(mut self, enabled: bool) -> Self {
        self.force_utf8 = enabled;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether responses get an explicit UTF-8 charset.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "read by server tests; create_server destructures")
    )]
    #[must_use]
    pub fn force_utf8(&self) -> bool {
        self.force_utf8
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
