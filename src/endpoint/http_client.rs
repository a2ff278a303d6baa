use std::time::Duration;

use reqwest::StatusCode;

use super::*;

const ATTEMPTS: u32 = 3;

/// A failed request attempt, classified by whether another attempt can help.
#[derive(Debug)]
pub(super) enum Failure {
    /// Connection errors, timeouts, throttling and server errors.
    Transient(anyhow::Error),
    Fatal(anyhow::Error),
}

impl Failure {
    pub(super) fn into_error(self) -> anyhow::Error {
        match self {
            Self::Transient(err) | Self::Fatal(err) => err,
        }
    }
}

impl From<reqwest::Error> for Failure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Transient(err.into())
        } else {
            Self::Fatal(err.into())
        }
    }
}

pub(super) fn retry_delay(attempt: u32) -> Duration {
    Duration::from_millis(200 << attempt)
}

/// Runs `attempt_once` until it succeeds, fails fatally or the attempts run
/// out. `label` only names the request in retry logs.
pub(super) fn with_retries<T>(
    label: &str,
    mut attempt_once: impl FnMut() -> Result<T, Failure>,
) -> Result<T> {
    let mut attempt = 0;
    loop {
        match attempt_once() {
            Ok(value) => return Ok(value),
            Err(Failure::Transient(err)) if attempt + 1 < ATTEMPTS => {
                let delay = retry_delay(attempt);
                tracing::warn!(
                    request = label,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    error = %format!("{:#}", err),
                    "transient failure, retrying"
                );
                std::thread::sleep(delay);
                attempt += 1;
            }
            Err(failure) => return Err(failure.into_error()),
        }
    }
}

pub(super) fn check_status(status: StatusCode) -> Result<(), Failure> {
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::UNAUTHORIZED {
        Err(Failure::Fatal(anyhow::anyhow!(
            "unauthorized (token invalid or expired; pass a fresh --token or FABRIC_TOKEN)"
        )))
    } else if status == StatusCode::FORBIDDEN {
        Err(Failure::Fatal(anyhow::anyhow!(
            "forbidden (identity lacks access to the workspace)"
        )))
    } else if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        Err(Failure::Transient(anyhow::anyhow!("server answered {}", status)))
    } else {
        Err(Failure::Fatal(anyhow::anyhow!("server answered {}", status)))
    }
}

#[cfg(test)]
#[path = "../tests/endpoint/http_client_tests.rs"]
mod tests;
