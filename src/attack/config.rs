use std::time::Duration;

use url::Url;

use crate::args::{AttackArgs, PositiveU64};
use crate::error::ValidationError;

/// Immutable settings for one attack run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackConfig {
    pub target_url: Url,
    pub requests_per_second: PositiveU64,
    pub request_timeout: Option<Duration>,
    pub redirect_limit: u32,
}

impl TryFrom<&AttackArgs> for AttackConfig {
    type Error = ValidationError;

    fn try_from(args: &AttackArgs) -> Result<Self, Self::Error> {
        let requests_per_second =
            PositiveU64::try_from(args.rps).map_err(|_zero| ValidationError::RateZero)?;

        let target_url =
            Url::parse(args.url.trim()).map_err(|err| ValidationError::InvalidUrl {
                url: args.url.clone(),
                source: err,
            })?;
        match target_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ValidationError::UnsupportedScheme {
                    scheme: other.to_owned(),
                });
            }
        }

        Ok(Self {
            target_url,
            requests_per_second,
            request_timeout: args.request_timeout,
            redirect_limit: args.redirect_limit,
        })
    }
}
