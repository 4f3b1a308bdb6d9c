use care_contracts::domain::a003_external_result::ExternalResultDto;
use care_contracts::domain::geo::{LocalBodyRef, WardRef};
use care_contracts::shared::list_response::ListResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, api_url_with_filters, error_text, read_json};
use crate::shared::filters::FilterSet;

const RESULTS_PATH: &str = "/api/v1/external_result/";

pub async fn list_results(params: &FilterSet) -> Result<ListResponse<ExternalResultDto>, String> {
    let url = api_url_with_filters(RESULTS_PATH, params);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch results: {}", e))?;
    read_json(response).await
}

/// CSV text of every result matching `params`
pub async fn export_csv(params: &FilterSet) -> Result<String, String> {
    let url = api_url_with_filters(RESULTS_PATH, &params.clone().with("csv", true));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to export results: {}", e))?;
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read export: {}", e))
}

pub async fn fetch_local_bodies() -> Result<Vec<LocalBodyRef>, String> {
    let response = Request::get(&api_url("/api/v1/local_body/?limit=500"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch local bodies: {}", e))?;
    let list: ListResponse<LocalBodyRef> = read_json(response).await?;
    Ok(list.results)
}

pub async fn fetch_wards(local_body: &str) -> Result<Vec<WardRef>, String> {
    let url = api_url(&format!(
        "/api/v1/ward/?local_body={}",
        urlencoding::encode(local_body)
    ));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch wards: {}", e))?;
    let list: ListResponse<WardRef> = read_json(response).await?;
    Ok(list.results)
}
