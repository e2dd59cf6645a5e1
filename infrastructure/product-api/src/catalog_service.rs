use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use business::domain::errors::ServiceError;
use business::domain::product::model::{Product, ProductDraft, ProductPatch, RemoteProduct};
use business::domain::product::service::ProductCatalogService;
use business::domain::product::value_objects::ProductId;

use crate::client::ProductApiClient;

#[derive(Debug, Deserialize)]
struct ProductListResponse {
    products: Vec<Product>,
}

pub struct ProductCatalogHttp {
    client: ProductApiClient,
}

impl ProductCatalogHttp {
    pub fn new(client: ProductApiClient) -> Self {
        Self { client }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ServiceError> {
        let response = request.send().await.map_err(|_| ServiceError::unreachable())?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::http_status(status.as_u16()));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
        let body = response
            .text()
            .await
            .map_err(|_| ServiceError::unreachable())?;
        parse_body(&body)
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|_| ServiceError::invalid_payload())
}

#[async_trait]
impl ProductCatalogService for ProductCatalogHttp {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let response = Self::send(self.client.client.get(self.client.products_url())).await?;
        let list: ProductListResponse = Self::decode(response).await?;
        Ok(list.products)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<RemoteProduct, ServiceError> {
        let request = self
            .client
            .client
            .post(self.client.create_url())
            .header("Content-Type", "application/json")
            .json(draft);

        Self::decode(Self::send(request).await?).await
    }

    async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<RemoteProduct, ServiceError> {
        let request = self
            .client
            .client
            .put(self.client.product_url(id))
            .header("Content-Type", "application/json")
            .json(patch);

        Self::decode(Self::send(request).await?).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), ServiceError> {
        // The deleted product is echoed back; nothing in it is needed.
        Self::send(self.client.client.delete(self.client.product_url(id))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_BODY: &str = r#"{
        "products": [
            {
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "description": "Popular mascara",
                "category": "beauty",
                "price": 9.99,
                "rating": 4.94,
                "tags": ["beauty", "mascara"],
                "brand": "Essence",
                "reviews": [{"rating": 2, "comment": "Very unhappy"}],
                "images": ["https://cdn.dummyjson.com/1/1.png"],
                "thumbnail": "https://cdn.dummyjson.com/1/thumbnail.png"
            },
            {
                "id": 2,
                "title": "Eyeshadow Palette",
                "description": "Twelve shades",
                "rating": 2.5,
                "thumbnail": "https://cdn.dummyjson.com/2/thumbnail.png"
            }
        ],
        "total": 194,
        "skip": 0,
        "limit": 30
    }"#;

    #[test]
    fn should_decode_recorded_product_list() {
        let products = parse_body::<ProductListResponse>(LIST_BODY).unwrap().products;

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::new(1));
        assert_eq!(products[0].brand.as_deref(), Some("Essence"));
        assert_eq!(products[0].gallery().len(), 1);
        assert_eq!(products[1].brand, None);
        assert_eq!(products[1].images, None);
    }

    #[test]
    fn should_report_invalid_payload_when_products_key_missing() {
        let result = parse_body::<ProductListResponse>(r#"{"items": []}"#);
        assert_eq!(result.unwrap_err(), ServiceError::InvalidPayload);
    }

    #[test]
    fn should_decode_create_echo_with_remote_id() {
        let echo: RemoteProduct = parse_body(
            r#"{"id": 195, "title": "Lamp", "description": "Desk lamp", "thumbnail": "lamp.png"}"#,
        )
        .unwrap();

        assert_eq!(echo.id, Some(ProductId::new(195)));
        assert_eq!(echo.fields.title.as_deref(), Some("Lamp"));
        assert_eq!(echo.fields.rating, None);
    }

    #[test]
    fn should_serialize_only_changed_fields_in_update_body() {
        let patch = ProductPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Renamed"}));
    }
}
