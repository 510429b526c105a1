use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    domain::{CreatureRecord, CreatureSummary},
    error::FetchError,
    protocol::{PokemonPage, PokemonResource},
};
use tracing::debug;
use url::Url;

use crate::config::Settings;

/// Remote provider of creature data.
#[async_trait]
pub trait CreatureSource: Send + Sync {
    /// First page of the default listing, in provider order.
    async fn list_page(&self, limit: u32) -> Result<Vec<CreatureSummary>, FetchError>;
    /// Resolves one summary's detail url into a full record.
    async fn fetch_detail(&self, url: &str) -> Result<CreatureRecord, FetchError>;
    /// Looks a creature up by name or numeric id.
    async fn fetch_by_name(&self, name: &str) -> Result<CreatureRecord, FetchError>;
}

pub struct HttpCreatureSource {
    http: Client,
    base_url: Url,
}

impl HttpCreatureSource {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let base_url = Url::parse(&settings.api_base_url)
            .with_context(|| format!("invalid api base url '{}'", settings.api_base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("api base url '{}' cannot carry a path", settings.api_base_url);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build http client")?;

        Ok(Self { http, base_url })
    }

    fn pokemon_url(&self, name: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("pokemon");
            if let Some(name) = name {
                segments.push(name);
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(url = %url, "creature api request");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| FetchError::network(url.as_str(), err.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::not_found(url.as_str()));
        }
        if !status.is_success() {
            return Err(FetchError::status(url.as_str(), status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::network(url.as_str(), err.to_string()))?;
        serde_json::from_slice(&body)
            .map_err(|err| FetchError::malformed(url.as_str(), err.to_string()))
    }
}

#[async_trait]
impl CreatureSource for HttpCreatureSource {
    async fn list_page(&self, limit: u32) -> Result<Vec<CreatureSummary>, FetchError> {
        let mut url = self.pokemon_url(None);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        let page: PokemonPage = self.get_json(url).await?;
        Ok(page.results.into_iter().map(CreatureSummary::from).collect())
    }

    async fn fetch_detail(&self, url: &str) -> Result<CreatureRecord, FetchError> {
        let url = Url::parse(url)
            .map_err(|err| FetchError::malformed(url, format!("invalid detail url: {err}")))?;
        let resource: PokemonResource = self.get_json(url).await?;
        Ok(resource.into())
    }

    async fn fetch_by_name(&self, name: &str) -> Result<CreatureRecord, FetchError> {
        let resource: PokemonResource = self.get_json(self.pokemon_url(Some(name))).await?;
        Ok(resource.into())
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
