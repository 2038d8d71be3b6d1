use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    error::{Error, Result},
    spotify::{SpotifyClient, describe_failure, describe_transport},
    types::{MAX_LIMIT, TopItemsQuery},
};

impl SpotifyClient {
    /// Retrieves the user's top tracks or top artists as raw JSON items.
    ///
    /// Issues one `GET {api}/me/top/{type}?time_range=..&limit=..` with the
    /// bearer token. Items are returned in the order Spotify ranks them. A
    /// user without listening history for the window gets an empty list.
    ///
    /// # Errors
    ///
    /// - [`Error::Unauthorized`] if the token is empty or Spotify answers 401
    /// - [`Error::ApiRequest`] for any other non-2xx status, a transport
    ///   failure (including timeouts) or a body that is not JSON
    ///
    /// # Example
    ///
    /// ```
    /// let query = TopItemsQuery::new(ItemType::Tracks, TimeRange::ShortTerm);
    /// let items = client.fetch_top_items(&token.access_token, &query).await?;
    /// let tracks = shape::shape_tracks(&items)?;
    /// ```
    pub async fn fetch_top_items(&self, token: &str, query: &TopItemsQuery) -> Result<Vec<Value>> {
        if token.trim().is_empty() {
            return Err(Error::Unauthorized("no access token".to_string()));
        }

        let url = format!(
            "{api}/me/top/{item_type}",
            api = self.config.api_url,
            item_type = query.item_type
        );
        let limit = query.limit.clamp(1, MAX_LIMIT).to_string();
        tracing::debug!(%url, time_range = %query.time_range, %limit, "fetching top items");

        let res = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("time_range", query.time_range.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::ApiRequest(describe_transport(&e)))?;

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::Unauthorized(describe_failure(status, &body)));
        }
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(%status, %url, "top items request failed");
            return Err(Error::ApiRequest(describe_failure(status, &body)));
        }

        let json: Value = res
            .json()
            .await
            .map_err(|e| Error::ApiRequest(format!("invalid top items response: {}", e)))?;

        Ok(json
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }
}
