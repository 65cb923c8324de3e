//! `reqwest` implementation of [`Backend`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};

use super::Backend;
use crate::{
    error::{HttpResultExt, Result, WeeknightError},
    models::{
        FeatureFlags, FlagSource, GroceryList, Leftover, Recipe, RecipePage, Step,
        TonightResponse,
    },
    params::{
        ConsumeLeftover, CreateLeftover, GroceryRequest, ListLeftovers, RecipeSearch,
        TelemetryReport, TonightRequest,
    },
};

/// `{ ok, data }` wrapper used by most endpoints.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    ok: bool,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct FlagsEnvelope {
    ok: bool,
    #[serde(default)]
    flags: BTreeMap<String, bool>,
    #[serde(default)]
    source: FlagSource,
}

#[derive(Debug, Deserialize)]
struct GroceryEnvelope {
    ok: bool,
    #[serde(flatten)]
    list: GroceryList,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    ok: bool,
    #[serde(flatten)]
    page: RecipePage,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the backend API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Wraps a configured client. Use [`super::ClientBuilder`] to create one.
    pub(crate) fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and turns non-2xx statuses into `Api` errors.
    async fn send(&self, builder: RequestBuilder, endpoint: &str) -> Result<Response> {
        debug!("Calling {endpoint}");
        let response = builder
            .send()
            .await
            .http_context(&format!("Request to {endpoint} failed"))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        warn!("{endpoint} answered {status}: {message}");
        Err(WeeknightError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        endpoint: &str,
    ) -> Result<T> {
        self.send(builder, endpoint)
            .await?
            .json::<T>()
            .await
            .http_context(&format!("Invalid response from {endpoint}"))
    }

    /// Unwraps `{ ok, data }`, treating `ok: false` or a missing payload as a
    /// rejection.
    async fn send_data<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        endpoint: &str,
    ) -> Result<T> {
        let envelope: DataEnvelope<T> = self.send_json(builder, endpoint).await?;
        match envelope {
            DataEnvelope {
                ok: true,
                data: Some(data),
            } => Ok(data),
            _ => Err(WeeknightError::Rejected {
                endpoint: endpoint.to_string(),
            }),
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_recipe(&self, recipe_id: &str, token: Option<&str>) -> Result<Recipe> {
        let path = format!("/recipes/{recipe_id}");
        self.send_data(self.request(Method::GET, &path, token), &path)
            .await
    }

    async fn fetch_timeline(&self, recipe_id: &str, token: Option<&str>) -> Result<Vec<Step>> {
        let path = format!("/recipes/{recipe_id}/timeline");
        self.send_data(self.request(Method::GET, &path, token), &path)
            .await
    }

    async fn search_recipes(
        &self,
        params: &RecipeSearch,
        token: Option<&str>,
    ) -> Result<RecipePage> {
        let builder = self
            .request(Method::GET, "/recipes/search", token)
            .query(&params.query_pairs());
        let envelope: SearchEnvelope = self.send_json(builder, "/recipes/search").await?;
        if !envelope.ok {
            return Err(WeeknightError::Rejected {
                endpoint: "/recipes/search".to_string(),
            });
        }
        Ok(envelope.page)
    }

    async fn report_event(&self, report: &TelemetryReport, token: Option<&str>) -> Result<()> {
        let builder = self.request(Method::POST, "/telemetry", token).json(report);
        self.send(builder, "/telemetry").await?;
        Ok(())
    }

    async fn create_leftover(
        &self,
        input: &CreateLeftover,
        token: Option<&str>,
    ) -> Result<Leftover> {
        if input.servings == 0 {
            return Err(WeeknightError::invalid_input("servings")
                .with_reason("a leftover needs at least one serving"));
        }
        let builder = self
            .request(Method::POST, "/api/leftovers", token)
            .json(input);
        self.send_data(builder, "/api/leftovers").await
    }

    async fn get_feature_flags(
        &self,
        keys: Option<&[String]>,
        token: Option<&str>,
    ) -> Result<FeatureFlags> {
        let mut builder = self.request(Method::GET, "/api/flags", token);
        if let Some(keys) = keys.filter(|k| !k.is_empty()) {
            builder = builder.query(&[("keys", keys.join(","))]);
        }

        let envelope: FlagsEnvelope = self.send_json(builder, "/api/flags").await?;
        if !envelope.ok {
            return Err(WeeknightError::Rejected {
                endpoint: "/api/flags".to_string(),
            });
        }
        Ok(FeatureFlags::with_overrides(envelope.flags, envelope.source))
    }

    async fn tonight(
        &self,
        request: &TonightRequest,
        token: Option<&str>,
    ) -> Result<TonightResponse> {
        let builder = self.request(Method::POST, "/api/tonight", token).json(request);
        let response: TonightResponse = self.send_json(builder, "/api/tonight").await?;
        if !response.ok {
            return Err(WeeknightError::Rejected {
                endpoint: "/api/tonight".to_string(),
            });
        }
        Ok(response)
    }

    async fn list_leftovers(
        &self,
        params: &ListLeftovers,
        token: Option<&str>,
    ) -> Result<Vec<Leftover>> {
        let builder = self
            .request(Method::GET, "/api/leftovers", token)
            .query(&params.query_pairs());
        self.send_data(builder, "/api/leftovers").await
    }

    async fn consume_leftover(
        &self,
        params: &ConsumeLeftover,
        token: Option<&str>,
    ) -> Result<Leftover> {
        let path = format!("/api/leftovers/{}/consume", params.id);
        let builder = self.request(Method::PUT, &path, token).json(params);
        self.send_data(builder, &path).await
    }

    async fn generate_grocery_list(
        &self,
        request: &GroceryRequest,
        token: Option<&str>,
    ) -> Result<GroceryList> {
        if request.recipes.is_empty() {
            return Err(WeeknightError::invalid_input("recipes")
                .with_reason("at least one recipe is required"));
        }
        let builder = self
            .request(Method::POST, "/api/groceries", token)
            .json(request);
        let envelope: GroceryEnvelope = self.send_json(builder, "/api/groceries").await?;
        if !envelope.ok {
            return Err(WeeknightError::Rejected {
                endpoint: "/api/groceries".to_string(),
            });
        }
        Ok(envelope.list)
    }
}
