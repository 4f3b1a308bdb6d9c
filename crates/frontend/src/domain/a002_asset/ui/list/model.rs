use care_contracts::domain::a001_facility::FacilityDto;
use care_contracts::domain::a002_asset::{AssetDto, AssetLocationDto};
use care_contracts::shared::list_response::ListResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, api_url_with_filters, read_json};
use crate::shared::filters::FilterSet;

pub async fn list_assets(params: &FilterSet) -> Result<ListResponse<AssetDto>, String> {
    let url = api_url_with_filters("/api/v1/asset/", params);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch assets: {}", e))?;
    read_json(response).await
}

pub async fn fetch_facility_name(facility: &str) -> Result<String, String> {
    let url = api_url(&format!(
        "/api/v1/getallfacilities/{}/",
        urlencoding::encode(facility)
    ));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch facility: {}", e))?;
    let facility: FacilityDto = read_json(response).await?;
    Ok(facility.name)
}

pub async fn fetch_location_name(facility: &str, location: &str) -> Result<String, String> {
    let url = api_url(&format!(
        "/api/v1/facility/{}/asset_location/{}/",
        urlencoding::encode(facility),
        urlencoding::encode(location)
    ));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch location: {}", e))?;
    let location: AssetLocationDto = read_json(response).await?;
    Ok(location.name)
}
