use super::{Api, ApiTransport, Method};
use crate::auth::session::SessionContext;
use crate::error::ApiError;
use crate::model::Employee;

/// The overview dashboard only ever reads employees; writes go through
/// a different surface.
pub async fn list<T: ApiTransport>(
    api: &Api<T>,
    ctx: &SessionContext,
    company_id: &str,
) -> Result<Vec<Employee>, ApiError> {
    api.request(
        ctx,
        Method::Get,
        format!("/hradmin/company/{company_id}/employees"),
        None,
    )
    .await
}
