use futures_util::StreamExt;
use reqwest::{Client, Request, redirect};
use tracing::{debug, error, trace};
use url::Url;

use crate::error::{AppError, AppResult, HttpError};

use super::config::AttackConfig;
use super::counters::AttackCounters;
use super::outcome::RequestOutcome;

const USER_AGENT: &str = concat!("volley/", env!("CARGO_PKG_VERSION"));

/// Builds the client shared by every dispatched request.
///
/// # Errors
///
/// Returns an error when the TLS backend or client configuration cannot be
/// initialized.
pub fn build_client(config: &AttackConfig) -> AppResult<Client> {
    let mut client_builder = Client::builder().user_agent(USER_AGENT);

    if let Some(timeout) = config.request_timeout {
        client_builder = client_builder.timeout(timeout);
    }

    if config.redirect_limit == 0 {
        client_builder = client_builder.redirect(redirect::Policy::none());
    } else {
        client_builder = client_builder.redirect(redirect::Policy::limited(
            usize::try_from(config.redirect_limit).unwrap_or(usize::MAX),
        ));
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}

/// Builds the GET request every dispatch clones.
///
/// # Errors
///
/// Returns an error when the request cannot be built from the URL.
pub fn build_request_template(client: &Client, url: &Url) -> AppResult<Request> {
    client.get(url.clone()).build().map_err(AppError::from)
}

/// Performs one GET and records its outcome.
///
/// Failures are only traced at debug level; they never propagate past the
/// counters.
pub async fn issue_request(
    client: &Client,
    request_template: &Request,
    counters: &AttackCounters,
) -> RequestOutcome {
    let Some(request) = request_template.try_clone() else {
        error!("Failed to clone request template.");
        counters.record(RequestOutcome::TransportFailure);
        return RequestOutcome::TransportFailure;
    };

    let outcome = match client.execute(request).await {
        Ok(response) => {
            let outcome = RequestOutcome::from_status(response.status().as_u16());
            counters.record(outcome);
            if let Err(err) = drain_response_body(response).await {
                debug!("Failed to drain response body: {}", err);
            }
            outcome
        }
        Err(err) if err.is_redirect() => {
            debug!("Redirect limit exceeded: {}", err);
            counters.record(RequestOutcome::RedirectLimitExceeded);
            RequestOutcome::RedirectLimitExceeded
        }
        Err(err) => {
            debug!("Request failed: {}", err);
            counters.record(RequestOutcome::TransportFailure);
            RequestOutcome::TransportFailure
        }
    };

    match outcome {
        RequestOutcome::HttpFailure(status) => debug!(status, "request failed with HTTP status"),
        RequestOutcome::Uncounted(status) => trace!(status, "request finished uncounted"),
        RequestOutcome::Success
        | RequestOutcome::TransportFailure
        | RequestOutcome::RedirectLimitExceeded => trace!(?outcome, "request finished"),
    }
    outcome
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
