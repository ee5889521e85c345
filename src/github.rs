use futures::future::{FutureExt, LocalBoxFuture};
use headers::{HeaderMapExt, UserAgent};
use hyper::client::HttpConnector;
use hyper::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use hyper::{Body, Client, Method, Request, Uri};
use hyper_tls::HttpsConnector;
use tracing::debug;

use crate::config::Config;
use crate::errors::{Error, Result};
use crate::model;

pub trait MilestoneApi {
    fn open_milestones(&self) -> LocalBoxFuture<'_, Result<Vec<model::Milestone>>>;

    fn open_issues(&self, number: u64) -> LocalBoxFuture<'_, Result<Vec<model::Issue>>>;
}

pub struct Github {
    client: Client<HttpsConnector<HttpConnector>>,
    endpoint: String,
    user_agent: UserAgent,
    token: HeaderValue,
    owner: String,
    repository: String,
}

impl Github {
    pub const API_ENDPOINT: &'static str = "https://api.github.com";

    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoint(config, Self::API_ENDPOINT)
    }

    pub fn with_endpoint(config: &Config, endpoint: impl Into<String>) -> Result<Self> {
        let mut token = HeaderValue::from_str(&format!("token {}", config.token))
            .map_err(Error::InvalidToken)?;
        token.set_sensitive(true);
        Ok(Self {
            client: Client::builder().build(HttpsConnector::new()),
            endpoint: endpoint.into(),
            user_agent: UserAgent::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
            token,
            owner: config.owner.clone(),
            repository: config.repository.clone(),
        })
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url: Uri = format!("{}{}", self.endpoint, path).parse()?;
        debug!(%url, "GET");
        let mut req = Request::builder()
            .method(Method::GET)
            .uri(url)
            .header(AUTHORIZATION, self.token.clone())
            .header(ACCEPT, "application/vnd.github+json")
            .body(Body::empty())?;
        req.headers_mut().typed_insert(self.user_agent.clone());

        let resp = self.client.request(req).await?;
        let status = resp.status();
        let body = hyper::body::to_bytes(resp.into_body()).await?;
        debug!(%status, len = body.len(), "response");
        if !status.is_success() {
            return Err(Error::Request {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn milestones(&self) -> Result<Vec<model::Milestone>> {
        self.get(&format!(
            "/repos/{owner}/{repo}/milestones?state=open",
            owner = self.owner,
            repo = self.repository,
        ))
        .await
    }

    pub async fn issues(&self, milestone: u64) -> Result<Vec<model::Issue>> {
        self.get(&format!(
            "/repos/{owner}/{repo}/issues?state=open&milestone={milestone}",
            owner = self.owner,
            repo = self.repository,
            milestone = milestone,
        ))
        .await
    }
}

impl MilestoneApi for Github {
    fn open_milestones(&self) -> LocalBoxFuture<'_, Result<Vec<model::Milestone>>> {
        self.milestones().boxed_local()
    }

    fn open_issues(&self, number: u64) -> LocalBoxFuture<'_, Result<Vec<model::Issue>>> {
        self.issues(number).boxed_local()
    }
}
