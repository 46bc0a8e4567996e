//! Default timeout values for network operations

/// HTTP timeouts used by the API client and the identity provider
pub mod http {
    /// Default TCP connect timeout (10 seconds)
    pub const CONNECT_SECS: u64 = 10;

    /// Default whole-request timeout (30 seconds)
    pub const REQUEST_SECS: u64 = 30;
}
