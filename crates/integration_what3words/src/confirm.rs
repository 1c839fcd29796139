//! Address confirmation
//!
//! Escalates a syntactically plausible candidate to the API to decide
//! whether it names a real registered square. The lexical grammar gate runs
//! first, so text that cannot be an address never produces network traffic.

use domain::validation::is_possible_3wa;
use tracing::debug;

use crate::client::W3wClient;
use crate::error::W3wError;
use crate::models::AutosuggestOptions;

/// Check whether `text` is a real, registered three-word address
///
/// Returns `Ok(false)` immediately, without calling the API, when `text`
/// fails [`is_possible_3wa`]. Otherwise requests a single autosuggest
/// candidate and confirms only an exact match: the top suggestion's words
/// must equal `text` byte for byte.
///
/// # Errors
///
/// Remote failures (authentication, quota, network) propagate as `Err`,
/// distinct from a legitimate `Ok(false)`. Callers that prefer to degrade
/// silently can `.unwrap_or(false)` the result.
pub async fn is_valid_3wa<C>(client: &C, text: &str) -> Result<bool, W3wError>
where
    C: W3wClient + ?Sized,
{
    if !is_possible_3wa(text) {
        debug!(candidate = %text, "Candidate fails the lexical grammar, skipping confirmation");
        return Ok(false);
    }

    let options = AutosuggestOptions::new().with_n_results(1);
    let response = client.autosuggest(text, &options).await?;

    let confirmed = response
        .suggestions
        .first()
        .is_some_and(|suggestion| suggestion.words == text);

    debug!(candidate = %text, confirmed, "Confirmation completed");
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockW3wClient;
    use crate::models::{AutosuggestResponse, Suggestion};

    fn suggestion(words: &str) -> Suggestion {
        Suggestion {
            words: words.to_string(),
            country: "GB".to_string(),
            nearest_place: "Bayswater, London".to_string(),
            rank: 1,
            language: "en".to_string(),
            distance_to_focus_km: None,
        }
    }

    #[tokio::test]
    async fn test_impossible_candidate_never_calls_the_api() {
        let mut client = MockW3wClient::new();
        client.expect_autosuggest().times(0);

        let valid = is_valid_3wa(&client, "index.home").await.unwrap();
        assert!(!valid);
    }

    #[tokio::test]
    async fn test_empty_candidate_never_calls_the_api() {
        let mut client = MockW3wClient::new();
        client.expect_autosuggest().times(0);

        let valid = is_valid_3wa(&client, "").await.unwrap();
        assert!(!valid);
    }

    #[tokio::test]
    async fn test_exact_top_suggestion_confirms() {
        let mut client = MockW3wClient::new();
        client
            .expect_autosuggest()
            .withf(|input, options| input == "index.home.raft" && options.n_results == Some(1))
            .times(1)
            .returning(|input, _| {
                Ok(AutosuggestResponse {
                    suggestions: vec![suggestion(input)],
                })
            });

        let valid = is_valid_3wa(&client, "index.home.raft").await.unwrap();
        assert!(valid);
    }

    #[tokio::test]
    async fn test_differing_top_suggestion_does_not_confirm() {
        let mut client = MockW3wClient::new();
        client
            .expect_autosuggest()
            .times(1)
            .returning(|_, _| {
                Ok(AutosuggestResponse {
                    suggestions: vec![suggestion("index.home.shelf")],
                })
            });

        let valid = is_valid_3wa(&client, "index.home.raft").await.unwrap();
        assert!(!valid);
    }

    #[tokio::test]
    async fn test_no_suggestions_does_not_confirm() {
        let mut client = MockW3wClient::new();
        client.expect_autosuggest().times(1).returning(|_, _| {
            Ok(AutosuggestResponse {
                suggestions: Vec::new(),
            })
        });

        let valid = is_valid_3wa(&client, "index.home.raft").await.unwrap();
        assert!(!valid);
    }

    #[tokio::test]
    async fn test_remote_failure_propagates() {
        let mut client = MockW3wClient::new();
        client.expect_autosuggest().times(1).returning(|_, _| {
            Err(W3wError::QuotaExceeded(
                "Quota Exceeded. Please upgrade your usage plan".to_string(),
            ))
        });

        let result = is_valid_3wa(&client, "index.home.raft").await;
        assert!(matches!(result, Err(W3wError::QuotaExceeded(_))));
    }
}
