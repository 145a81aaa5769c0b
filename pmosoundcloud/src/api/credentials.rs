//! Client id discovery
//!
//! SoundCloud's web client embeds its API client id in one of the page's
//! crossorigin script bundles. Scanning fetches each candidate bundle and
//! matches it against a fixed pattern; the id is almost always in the
//! most-recently-loaded bundle, so candidates are walked in reverse.

use super::SoundCloudApi;
use crate::error::{Error, Result};
use regex::Regex;
use tracing::{debug, info, warn};

/// Pattern matching the embedded client id: a 32-character alphanumeric
/// token right behind the `client_id:"` marker
const CLIENT_ID_PATTERN: &str = r#"client_id:"([a-zA-Z0-9]{32})","#;

/// Extract the client id from a script bundle body
fn extract_client_id(re: &Regex, body: &str) -> Option<String> {
    re.captures(body).map(|captures| captures[1].to_string())
}

impl SoundCloudApi {
    /// Discover the API client id by scanning candidate script bundles
    ///
    /// `script_urls` is the page's candidate list in document order; the
    /// scan walks it from the last entry to the first and stops at the
    /// first bundle containing a match. Bundles are fetched one at a time,
    /// and a failed fetch aborts the scan.
    ///
    /// # Errors
    ///
    /// * [`Error::CredentialNotFound`] - no candidate yielded a match
    pub async fn discover_client_id(&self, script_urls: &[String]) -> Result<String> {
        let re = Regex::new(CLIENT_ID_PATTERN)?;

        for url in script_urls.iter().rev() {
            debug!("Searching {} for client id", url);
            let body = self.get_text(url).await?;
            if let Some(client_id) = extract_client_id(&re, &body) {
                info!("Client id found in {}", url);
                return Ok(client_id);
            }
        }

        warn!(
            "No client id found in {} script bundle(s)",
            script_urls.len()
        );
        Err(Error::CredentialNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re() -> Regex {
        Regex::new(CLIENT_ID_PATTERN).unwrap()
    }

    #[test]
    fn test_extracts_embedded_client_id() {
        let body = r#"var f=function(){},client_id:"iZIs9mchVcX5lhVRyQGGAYlNPVldzAoX",env:"production""#;
        assert_eq!(
            extract_client_id(&re(), body),
            Some("iZIs9mchVcX5lhVRyQGGAYlNPVldzAoX".to_string())
        );
    }

    #[test]
    fn test_rejects_wrong_length_token() {
        // 31 characters: one short of a client id
        let body = r#"client_id:"iZIs9mchVcX5lhVRyQGGAYlNPVldzAo","#;
        assert_eq!(extract_client_id(&re(), body), None);
    }

    #[test]
    fn test_requires_marker_prefix() {
        let body = r#"some_id:"iZIs9mchVcX5lhVRyQGGAYlNPVldzAoX","#;
        assert_eq!(extract_client_id(&re(), body), None);
    }
}
