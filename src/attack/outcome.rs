/// Classification of a single finished request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 2xx response.
    Success,
    /// Response with status >= 400.
    HttpFailure(u16),
    /// DNS, connect, TLS or timeout failure before a status was received.
    TransportFailure,
    /// 1xx or 3xx response; dispatched but not tallied.
    Uncounted(u16),
    /// Redirect chain longer than `--redirect-limit`; not tallied, like any other 3xx.
    RedirectLimitExceeded,
}

impl RequestOutcome {
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Success,
            400..=u16::MAX => Self::HttpFailure(status),
            0..=199 | 300..=399 => Self::Uncounted(status),
        }
    }
}
