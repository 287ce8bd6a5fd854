//! Food Commands
//!
//! HTTP bindings for the `/foods` resource.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use menu_core::{ApiConfig, ApiError, Food, FoodApi, FoodId, NewFood};
use tracing::debug;

/// Resource client talking JSON to the food backend
#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    config: ApiConfig,
}

impl HttpFoodApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// Any non-2xx answer is a failure; the status only ends up in the message
fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            text: response.status_text(),
        })
    }
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list_all(&self) -> Result<Vec<Food>, ApiError> {
        let url = self.config.foods_url();
        debug!(%url, "GET");

        let response = Request::get(&url).send().await.map_err(transport)?;
        check_status(response)?.json::<Vec<Food>>().await.map_err(decode)
    }

    async fn create(&self, food: &NewFood) -> Result<Food, ApiError> {
        let url = self.config.foods_url();
        debug!(%url, "POST");

        let response = Request::post(&url)
            .json(food)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(transport)?;
        check_status(response)?.json::<Food>().await.map_err(decode)
    }

    async fn update(&self, id: FoodId, food: &Food) -> Result<Food, ApiError> {
        let url = self.config.food_url(id);
        debug!(%url, "PUT");

        let response = Request::put(&url)
            .json(food)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(transport)?;
        check_status(response)?.json::<Food>().await.map_err(decode)
    }

    async fn remove(&self, id: FoodId) -> Result<(), ApiError> {
        let url = self.config.food_url(id);
        debug!(%url, "DELETE");

        let response = Request::delete(&url).send().await.map_err(transport)?;
        check_status(response)?;
        Ok(())
    }
}
