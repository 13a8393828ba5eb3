//! Typed client for the recipe API.
//!
//! Maps the server's "200 with an empty body" answer for unknown ids back to
//! `None`, and the literal `true`/`false` DELETE body to a `bool`.

use log::debug;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::{RecipeShareError, Result};
use crate::model::{NewRecipe, Recipe, RecipePatch};

/// Async client for the `/api/recipes` endpoints.
#[derive(Debug)]
pub struct RecipeClient {
    client: Client,
    base_url: String,
}

impl RecipeClient {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipeshare/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client using the request timeout from `config`.
    pub fn from_config(base_url: impl Into<String>, config: &ServerConfig) -> Result<Self> {
        Self::new(base_url, Some(config.request_timeout()))
    }

    fn collection_url(&self) -> String {
        format!("{}/api/recipes", self.base_url)
    }

    fn recipe_url(&self, id: u64) -> String {
        format!("{}/api/recipes/{}", self.base_url, id)
    }

    pub async fn create(&self, fields: &NewRecipe) -> Result<Recipe> {
        let response = self
            .client
            .post(self.collection_url())
            .json(fields)
            .send()
            .await?;
        let body = success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn list(&self) -> Result<Vec<Recipe>> {
        let response = self.client.get(self.collection_url()).send().await?;
        let body = success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get(&self, id: u64) -> Result<Option<Recipe>> {
        let response = self.client.get(self.recipe_url(id)).send().await?;
        optional_recipe(&success_body(response).await?)
    }

    pub async fn replace(&self, id: u64, fields: &NewRecipe) -> Result<Option<Recipe>> {
        let response = self
            .client
            .put(self.recipe_url(id))
            .json(fields)
            .send()
            .await?;
        optional_recipe(&success_body(response).await?)
    }

    pub async fn patch(&self, id: u64, patch: &RecipePatch) -> Result<Option<Recipe>> {
        let response = self
            .client
            .patch(self.recipe_url(id))
            .json(patch)
            .send()
            .await?;
        optional_recipe(&success_body(response).await?)
    }

    pub async fn delete(&self, id: u64) -> Result<bool> {
        let response = self.client.delete(self.recipe_url(id)).send().await?;
        let body = success_body(response).await?;
        Ok(serde_json::from_str(body.trim())?)
    }

    /// Returns true if the server answers its health probe.
    pub async fn health(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(response.status().is_success())
    }
}

async fn success_body(response: Response) -> Result<String> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await?;
    debug!("{} -> {} ({} bytes)", url, status, body.len());

    if !status.is_success() {
        return Err(RecipeShareError::UnexpectedStatus { status, body });
    }
    Ok(body)
}

fn optional_recipe(body: &str) -> Result<Option<Recipe>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(body)?))
}
