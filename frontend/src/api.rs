use gloo_net::http::{Request, Response};
use shared::config::ClientConfig;
use shared::{DepartmentsPayload, Error, Result, UploadResponse, VoteRecord, VotesResponse};
use tracing::{debug, info};
use crate::config::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCall {
    pub verb: Verb,
    pub url: String,
    pub body: Option<String>,
}

impl ApiCall {
    fn get(config: &ClientConfig, path: &str) -> Self {
        Self { verb: Verb::Get, url: config.endpoint(path), body: None }
    }

    fn post(config: &ClientConfig, path: &str) -> Self {
        Self { verb: Verb::Post, url: config.endpoint(path), body: None }
    }

    fn with_json(mut self, body: &impl serde::Serialize) -> Result<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    async fn send(self) -> Result<Response> {
        let request = match self.verb {
            Verb::Get => Request::get(&self.url),
            Verb::Post => Request::post(&self.url),
        };
        let request = match self.body {
            Some(body) => request.header("Content-Type", "application/json").body(body),
            None => request,
        };
        let response = request.send().await.map_err(Error::network)?;
        if response.ok() {
            Ok(response)
        } else {
            Err(Error::status(response.status()))
        }
    }
}

pub fn vote_call(config: &ClientConfig, record: &VoteRecord) -> Result<ApiCall> {
    ApiCall::post(config, "/votes").with_json(record)
}

pub fn list_votes_call(config: &ClientConfig) -> ApiCall {
    ApiCall::get(config, "/votes")
}

pub fn clear_votes_call(config: &ClientConfig) -> ApiCall {
    ApiCall::post(config, "/votes/clear")
}

pub fn upload_departments_call(config: &ClientConfig, departments: &[String]) -> Result<ApiCall> {
    ApiCall::post(config, "/departments/upload")
        .with_json(&DepartmentsPayload { departments: departments.to_vec() })
}

pub fn export_call(config: &ClientConfig) -> ApiCall {
    ApiCall::get(config, "/export")
}

// The reply only acknowledges; the vote list changes on the next broadcast.
pub async fn submit_vote(record: &VoteRecord) -> Result<()> {
    debug!(department = %record.department, vote = %record.vote, "submitting vote");
    vote_call(config(), record)?.send().await.map(|_| ())
}

pub async fn list_votes() -> Result<Vec<VoteRecord>> {
    let body = list_votes_call(config())
        .send()
        .await?
        .json::<VotesResponse>()
        .await
        .map_err(Error::decode)?;
    info!("loaded {} votes", body.votes.len());
    Ok(body.votes)
}

pub async fn clear_votes() -> Result<()> {
    clear_votes_call(config()).send().await.map(|_| ())
}

pub async fn upload_departments(departments: &[String]) -> Result<UploadResponse> {
    let response = upload_departments_call(config(), departments)?.send().await?;
    Ok(response.json::<UploadResponse>().await.unwrap_or_default())
}

pub async fn export_csv() -> Result<Vec<u8>> {
    export_call(config())
        .send()
        .await?
        .binary()
        .await
        .map_err(Error::decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{VoteChoice, VoteRecord};
    use serde_json::{json, Value};

    fn remote() -> ClientConfig {
        ClientConfig { api_url: "https://votes.example/api".into(), socket_url: String::new() }
    }

    fn body(call: &ApiCall) -> Value {
        serde_json::from_str(call.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn vote_posts_exactly_the_record() {
        let record = VoteRecord::new("SGA", VoteChoice::Dislike);
        let call = vote_call(&remote(), &record).unwrap();
        assert_eq!(call.verb, Verb::Post);
        assert_eq!(call.url, "https://votes.example/api/votes");
        assert_eq!(body(&call), json!({
            "department": "SGA",
            "vote": "Dislike",
            "timestamp": record.timestamp,
        }));
    }

    #[test]
    fn export_is_a_plain_get() {
        let call = export_call(&ClientConfig::default());
        assert_eq!(call, ApiCall { verb: Verb::Get, url: "/api/export".into(), body: None });
    }

    #[test]
    fn list_and_clear_paths() {
        assert_eq!(list_votes_call(&remote()).verb, Verb::Get);
        assert_eq!(list_votes_call(&remote()).url, "https://votes.example/api/votes");

        let clear = clear_votes_call(&remote());
        assert_eq!(clear.verb, Verb::Post);
        assert_eq!(clear.url, "https://votes.example/api/votes/clear");
        assert!(clear.body.is_none());
    }

    #[test]
    fn upload_wraps_departments() {
        let departments = vec!["MT100".to_string(), "Front Desk".to_string()];
        let call = upload_departments_call(&remote(), &departments).unwrap();
        assert_eq!(call.verb, Verb::Post);
        assert_eq!(call.url, "https://votes.example/api/departments/upload");
        assert_eq!(body(&call), json!({"departments": ["MT100", "Front Desk"]}));
    }
}
