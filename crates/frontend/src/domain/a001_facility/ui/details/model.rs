use care_contracts::domain::a001_facility::{FacilityDto, FacilityRequest};
use care_contracts::domain::geo::{DistrictRef, LocalBodyRef, StateRef, WardRef};
use care_contracts::shared::list_response::{CreatedResponse, ListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json};

pub async fn fetch_by_id(id: &str) -> Result<FacilityDto, String> {
    let url = api_url(&format!("/api/v1/getallfacilities/{}/", urlencoding::encode(id)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch facility: {}", e))?;
    read_json(response).await
}

/// Create (no id) or update a facility; returns the facility id
pub async fn save(id: Option<&str>, request: &FacilityRequest) -> Result<String, String> {
    let builder = match id {
        Some(id) => Request::put(&api_url(&format!(
            "/api/v1/facility/{}/",
            urlencoding::encode(id)
        ))),
        None => Request::post(&api_url("/api/v1/facility/")),
    };
    let response = builder
        .json(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to save facility: {}", e))?;
    let created: CreatedResponse = read_json(response).await?;
    Ok(created.id)
}

pub async fn fetch_states() -> Result<Vec<StateRef>, String> {
    let response = Request::get(&api_url("/api/v1/state/"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch states: {}", e))?;
    let list: ListResponse<StateRef> = read_json(response).await?;
    Ok(list.results)
}

pub async fn fetch_districts(state: i64) -> Result<Vec<DistrictRef>, String> {
    let url = api_url(&format!("/api/v1/state/{}/districts/", state));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch districts: {}", e))?;
    read_json(response).await
}

pub async fn fetch_local_bodies(district: i64) -> Result<Vec<LocalBodyRef>, String> {
    let url = api_url(&format!("/api/v1/district/{}/local_bodies/", district));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch local bodies: {}", e))?;
    read_json(response).await
}

pub async fn fetch_wards(local_body: i64) -> Result<Vec<WardRef>, String> {
    let url = api_url(&format!("/api/v1/ward/?local_body={}", local_body));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch wards: {}", e))?;
    let list: ListResponse<WardRef> = read_json(response).await?;
    Ok(list.results)
}
