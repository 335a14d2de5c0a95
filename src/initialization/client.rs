//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{DEFAULT_USER_AGENT, FETCH_TIMEOUT};

/// Builds the HTTP client used to fetch the report resource.
///
/// The timeout bounds the whole request; there is no retry policy, so a
/// failed or timed-out fetch aborts the load.
pub fn init_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
