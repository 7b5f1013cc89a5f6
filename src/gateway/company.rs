use serde_json::Value;

use super::{Api, ApiTransport, Method};
use crate::auth::session::SessionContext;
use crate::error::ApiError;
use crate::model::Company;

// Superadmin scope, so no tenant in the path.
const COLLECTION: &str = "/superadmin/companies";

pub async fn list<T: ApiTransport>(
    api: &Api<T>,
    ctx: &SessionContext,
) -> Result<Vec<Company>, ApiError> {
    api.request(ctx, Method::Get, COLLECTION.to_string(), None)
        .await
}

pub async fn create<T: ApiTransport>(
    api: &Api<T>,
    ctx: &SessionContext,
    draft: Value,
) -> Result<Company, ApiError> {
    api.request(ctx, Method::Post, COLLECTION.to_string(), Some(draft))
        .await
}

pub async fn update<T: ApiTransport>(
    api: &Api<T>,
    ctx: &SessionContext,
    id: &str,
    patch: Value,
) -> Result<Company, ApiError> {
    api.request(ctx, Method::Put, format!("{COLLECTION}/{id}"), Some(patch))
        .await
}

pub async fn delete<T: ApiTransport>(
    api: &Api<T>,
    ctx: &SessionContext,
    id: &str,
) -> Result<String, ApiError> {
    let _: Value = api
        .request(ctx, Method::Delete, format!("{COLLECTION}/{id}"), None)
        .await?;
    Ok(id.to_string())
}
