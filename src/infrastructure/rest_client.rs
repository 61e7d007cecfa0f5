// JSON REST client with a base URL and basic-auth credentials
use crate::error::MigrationError;
use crate::infrastructure::config::ServiceSettings;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    username: String,
    password: String,
    client: reqwest::Client,
}

impl RestClient {
    pub fn new(settings: &ServiceSettings) -> Self {
        Self {
            base_url: settings.url.trim_end_matches('/').to_string(),
            username: settings.user.clone(),
            password: settings.password.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, MigrationError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let request = self.client.get(&url);
        self.send(url, request).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, MigrationError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let request = self.client.post(&url).json(body);
        self.send(url, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<T, MigrationError> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| MigrationError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MigrationError::Http { url, status, body });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| MigrationError::Transport { url, source })
    }
}
