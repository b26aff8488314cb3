use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use shared::{SpinError, SpinResult, SpinSource, WheelOption, WheelStats};

use crate::config::api_url;

/// Fetches spin results from the wheel server.
pub struct HttpSpinSource {
    url: String,
}

impl HttpSpinSource {
    pub fn new(path: &str) -> Self {
        Self { url: api_url(path) }
    }
}

#[async_trait(?Send)]
impl SpinSource for HttpSpinSource {
    async fn spin(&self) -> Result<SpinResult, SpinError> {
        let (status, body) = send(Request::get(&self.url)).await?;
        SpinResult::from_response(status, &body)
    }
}

pub async fn fetch_wheel_stats(path: String) -> Result<WheelStats, SpinError> {
    let (status, body) = send(Request::get(&api_url(&path))).await?;
    WheelStats::from_response(status, &body)
}

pub async fn fetch_revealed(path: String) -> Result<Vec<WheelOption>, SpinError> {
    let (status, body) = send(Request::get(&api_url(&path))).await?;
    WheelOption::list_from_response(status, &body)
}

pub async fn complete_option(path: String) -> Result<WheelOption, SpinError> {
    let (status, body) = send(Request::post(&api_url(&path))).await?;
    WheelOption::from_response(status, &body)
}

/// Only transport failures are reported here; the status is left to the caller.
async fn send(request: RequestBuilder) -> Result<(u16, String), SpinError> {
    let response = request
        .send()
        .await
        .map_err(|e| SpinError::Request(format!("{:?}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SpinError::Request(format!("{:?}", e)))?;
    Ok((status, body))
}
