use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::api::error::ApiError;
use crate::api::types::{Book, BookCreate, BookId, BookUpdate, Genre, Review, ReviewCreate};
use crate::config::ServerConfig;

/// Typed wrapper over the catalog REST API.
///
/// One method per operation, each a single independent request. Nothing
/// here caches, retries, or serializes calls; sequencing lives with the
/// callers that need it.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client for the configured server origin.
    pub fn new(server: &ServerConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(server.connect_timeout_seconds)))
            .build()
            .expect("Failed to build catalog HTTP client");

        Self {
            client,
            base_url: server.rest_base_url(),
        }
    }

    /// Fetch the full catalog.
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let response = self
            .client
            .get(format!("{}/books", self.base_url))
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch the catalog filtered to one genre.
    pub async fn list_books_by_genre(&self, genre: Genre) -> Result<Vec<Book>, ApiError> {
        let response = self
            .client
            .get(format!("{}/books", self.base_url))
            .query(&[("genre", genre.as_str())])
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch one book together with its reviews.
    pub async fn get_book(&self, id: BookId) -> Result<Book, ApiError> {
        let response = self
            .client
            .get(format!("{}/books/{id}", self.base_url))
            .send()
            .await?;
        decode(response).await
    }

    /// Create a book. The returned entity carries the server-assigned id.
    pub async fn create_book(&self, draft: &BookCreate) -> Result<Book, ApiError> {
        let response = self
            .client
            .post(format!("{}/books", self.base_url))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    /// Apply a partial update and return the resulting book.
    pub async fn update_book(&self, id: BookId, patch: &BookUpdate) -> Result<Book, ApiError> {
        let response = self
            .client
            .put(format!("{}/books/{id}", self.base_url))
            .json(patch)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete a book. The server's acknowledgement body carries nothing the
    /// client needs, so success is just `Ok(())`.
    pub async fn delete_book(&self, id: BookId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/books/{id}", self.base_url))
            .send()
            .await?;
        expect_success(response).await
    }

    /// Attach a review to a book.
    pub async fn add_review(
        &self,
        book_id: BookId,
        draft: &ReviewCreate,
    ) -> Result<Review, ApiError> {
        let response = self
            .client
            .post(format!("{}/reviews/{book_id}", self.base_url))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }
}

/// Decode a JSON success body, or classify the failure by status.
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        Err(classify(status, response).await)
    }
}

/// Success check for operations whose response body is ignored.
async fn expect_success(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(classify(status, response).await)
    }
}

async fn classify(status: StatusCode, response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    ApiError::from_response(status.as_u16(), body)
}
