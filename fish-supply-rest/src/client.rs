//! Thin PostgREST client.
//!
//! Every request carries the project key both as `apikey` and as a bearer
//! token. Filters use PostgREST's `column=op.value` query syntax.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::RestConfig;
use crate::error::{RestError, RestResult};

/// Build once and clone freely; clones share the connection pool.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    pub fn new(config: &RestConfig) -> RestResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_http_client(http, config))
    }

    pub fn with_http_client(http: reqwest::Client, config: &RestConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// `GET /{table}?select={columns}&order={order}.asc`
    pub async fn select_all<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        order: Option<&str>,
    ) -> RestResult<Vec<T>> {
        let mut query = vec![("select", columns.to_string())];
        if let Some(order) = order {
            query.push(("order", format!("{order}.asc")));
        }
        let request = self.request(Method::GET, self.table_url(table)).query(&query);
        Self::send(request).await
    }

    /// Rows where `column` matches `value` under the PostgREST operator `op`
    /// (`eq`, `ilike`, ...).
    pub async fn select_where<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        op: &str,
        value: &str,
    ) -> RestResult<Vec<T>> {
        let request = self
            .request(Method::GET, self.table_url(table))
            .query(&[("select", "*".to_string()), (column, format!("{op}.{value}"))]);
        Self::send(request).await
    }

    pub async fn select_eq<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> RestResult<Vec<T>> {
        self.select_where(table, column, "eq", value).await
    }

    /// Insert rows and get them back as stored.
    pub async fn insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> RestResult<Vec<T>> {
        let request = self
            .request(Method::POST, self.table_url(table))
            .header("Prefer", "return=representation")
            .json(body);
        Self::send(request).await
    }

    /// `PATCH` the rows where `column = value`; returns the updated rows.
    pub async fn update_eq<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        body: &B,
    ) -> RestResult<Vec<T>> {
        let request = self
            .request(Method::PATCH, self.table_url(table))
            .query(&[(column, format!("eq.{value}"))])
            .header("Prefer", "return=representation")
            .json(body);
        Self::send(request).await
    }

    /// Delete the rows where `column = value`; returns how many went.
    pub async fn delete_eq(&self, table: &str, column: &str, value: &str) -> RestResult<usize> {
        let request = self
            .request(Method::DELETE, self.table_url(table))
            .query(&[(column, format!("eq.{value}"))])
            .header("Prefer", "return=representation");
        let removed: Vec<serde_json::Value> = Self::send(request).await?;
        Ok(removed.len())
    }

    /// Call a database function through `POST /rpc/{function}`.
    pub async fn rpc<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        function: &str,
        args: &B,
    ) -> RestResult<T> {
        let url = format!("{}/rest/v1/rpc/{function}", self.base_url);
        let request = self.request(Method::POST, url).json(args);
        Self::send(request).await
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> RestResult<T> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "PostgREST response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "PostgREST request failed");
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        client_id: String,
        name: String,
    }

    fn client_for(server: &MockServer) -> RestClient {
        RestClient::new(&RestConfig::new(format!("{}/", server.uri()), "test-key")).unwrap()
    }

    #[tokio::test]
    async fn test_sends_key_headers_and_decodes_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/client"))
            .and(header("apikey", "test-key"))
            .and(header("Authorization", "Bearer test-key"))
            .and(query_param("select", "*"))
            .and(query_param("order", "client_id.asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "client_id": "CID-00001", "name": "Acme Fresh" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let rows: Vec<Row> = client_for(&server)
            .select_all("client", "*", Some("client_id"))
            .await
            .unwrap();
        assert_eq!(
            rows,
            vec![Row { client_id: "CID-00001".into(), name: "Acme Fresh".into() }]
        );
    }

    #[tokio::test]
    async fn test_filters_with_eq() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/client"))
            .and(query_param("client_id", "eq.CID-00002"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let rows: Vec<Row> = client_for(&server)
            .select_eq("client", "client_id", "CID-00002")
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_insert_asks_for_representation() {
        let server = MockServer::start().await;
        let row = json!({ "client_id": "CID-00003", "name": "Bay Traders" });
        Mock::given(method("POST"))
            .and(path("/rest/v1/client"))
            .and(header("Prefer", "return=representation"))
            .and(body_json(json!([row.clone()])))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([row])))
            .mount(&server)
            .await;

        let rows: Vec<Row> = client_for(&server)
            .insert("client", &[json!({ "client_id": "CID-00003", "name": "Bay Traders" })])
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].client_id, "CID-00003");
    }

    #[tokio::test]
    async fn test_delete_counts_returned_rows() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/client"))
            .and(query_param("client_id", "eq.CID-00004"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "client_id": "CID-00004", "name": "Gone" }])),
            )
            .mount(&server)
            .await;

        let removed = client_for(&server)
            .delete_eq("client", "client_id", "CID-00004")
            .await
            .unwrap();
        assert_eq!(removed, 1);
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/rpc/st_adjust_product_quantity"))
            .respond_with(ResponseTemplate::new(409).set_body_string("duplicate key"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .rpc::<_, serde_json::Value>("st_adjust_product_quantity", &json!({}))
            .await
            .unwrap_err();
        match err {
            RestError::Status { status, body } => {
                assert_eq!(status, 409);
                assert_eq!(body, "duplicate key");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/client"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .select_all::<Row>("client", "*", None)
            .await
            .unwrap_err();
        assert!(matches!(err, RestError::Decode(_)));
    }
}
