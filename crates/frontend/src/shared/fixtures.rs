//! Fixture loading
//!
//! Pages fetch static JSON documents from `/fixtures/` with a plain GET at
//! mount. There is no retry or cancellation: a failed fetch is logged and
//! the page renders its empty state.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Full path of a fixture document under the web root
pub fn fixture_url(name: &str) -> String {
    format!("/fixtures/{}", name)
}

/// One-shot GET + JSON decode of a fixture
pub async fn fetch_fixture<T: DeserializeOwned>(name: &str) -> Result<T, String> {
    let response = Request::get(&fixture_url(name))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!(
            "GET {} failed: HTTP {}",
            fixture_url(name),
            response.status()
        ));
    }

    response.json().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_url_is_rooted() {
        assert_eq!(fixture_url("customers.json"), "/fixtures/customers.json");
    }
}
