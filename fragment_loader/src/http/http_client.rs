use async_trait::async_trait;
use hyper::{Body, Client, Request, Response};
use hyper::client::HttpConnector;
use hyper_tls::HttpsConnector;
use log::debug;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClient: Sync + Send {
    async fn get(&self, uri: String) -> Result<Response<Body>, String>;
}

pub struct HttpClientImpl {
    user_agent: String,
    client: Client<HttpsConnector<HttpConnector>>,
}

impl HttpClientImpl {
    pub fn new(user_agent: String) -> HttpClientImpl {
        let connector = HttpsConnector::new();
        HttpClientImpl {
            user_agent,
            client: Client::builder().build::<_, hyper::Body>(connector),
        }
    }
}

#[async_trait]
impl HttpClient for HttpClientImpl {
    async fn get(&self, uri: String) -> Result<Response<Body>, String> {
        let req = Request::builder()
            .header("user-agent", self.user_agent.clone())
            .method("GET")
            .uri(uri.clone())
            .body(Body::empty())
            .map_err(|error| format!("Could not build GET request for {}: {}", uri, error))?;

        debug!("GET {}", uri);
        self.client.request(req).await.map_err(|error| error.to_string())
    }
}
