use serde_json::Value;

use super::{Api, ApiTransport, Method, encode_body};
use crate::auth::session::SessionContext;
use crate::error::ApiError;
use crate::model::{LeavePolicy, LeavePolicyDraft};

fn collection_path(company_id: &str) -> String {
    format!("/hradmin/company/{company_id}/leave-policies")
}

pub async fn list<T: ApiTransport>(
    api: &Api<T>,
    ctx: &SessionContext,
    company_id: &str,
) -> Result<Vec<LeavePolicy>, ApiError> {
    api.request(ctx, Method::Get, collection_path(company_id), None)
        .await
}

pub async fn create<T: ApiTransport>(
    api: &Api<T>,
    ctx: &SessionContext,
    company_id: &str,
    draft: &LeavePolicyDraft,
) -> Result<LeavePolicy, ApiError> {
    api.request(
        ctx,
        Method::Post,
        collection_path(company_id),
        Some(encode_body(draft)?),
    )
    .await
}

pub async fn update<T: ApiTransport>(
    api: &Api<T>,
    ctx: &SessionContext,
    company_id: &str,
    id: &str,
    patch: &LeavePolicyDraft,
) -> Result<LeavePolicy, ApiError> {
    api.request(
        ctx,
        Method::Put,
        format!("{}/{id}", collection_path(company_id)),
        Some(encode_body(patch)?),
    )
    .await
}

pub async fn delete<T: ApiTransport>(
    api: &Api<T>,
    ctx: &SessionContext,
    company_id: &str,
    id: &str,
) -> Result<String, ApiError> {
    let _: Value = api
        .request(
            ctx,
            Method::Delete,
            format!("{}/{id}", collection_path(company_id)),
            None,
        )
        .await?;
    Ok(id.to_string())
}
