use std::future::Future;
use std::sync::{Arc, RwLock};

use derive_more::Display;
use serde_json::Value;
use tracing::{debug, error};
use uuid::Uuid;

use crate::auth::guard::{LoginRedirect, Navigator};
use crate::auth::session::{ProcessSession, SessionContext, SessionSource};
use crate::config::Config;
use crate::error::ApiError;
use crate::gateway::{self, Api, ApiTransport, HttpTransport};
use crate::model::{
    Company, Employee, Entity, LeavePolicy, LeavePolicyDraft, LeaveType, LeaveTypeDraft,
    PublicHoliday, PublicHolidayDraft,
};
use crate::store::{ConsoleStore, ResourceState, Transition};

/// Slice a command settles into, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResourceKind {
    #[display(fmt = "leave-type")]
    LeaveType,
    #[display(fmt = "leave-policy")]
    LeavePolicy,
    #[display(fmt = "public-holiday")]
    PublicHoliday,
    #[display(fmt = "company")]
    Company,
    #[display(fmt = "employee")]
    Employee,
}

/// Command dispatcher over the console store.
///
/// Every command runs the same three-phase lifecycle: a `Pending`
/// transition on its slice, one gateway call, then exactly one terminal
/// transition (`Fulfilled` mutation or `Rejected`). Commands against the
/// same slice may overlap; each settles independently and the slice
/// reflects whichever settled last. Nothing is cancelled or retried
/// automatically.
pub struct Console<T: ApiTransport, S: SessionSource, N: Navigator> {
    api: Api<T>,
    session: S,
    navigator: N,
    store: Arc<RwLock<ConsoleStore>>,
}

/// Production wiring: reqwest transport, process-wide session, logging
/// redirect fallback.
pub type HttpConsole = Console<HttpTransport, ProcessSession, LoginRedirect>;

impl HttpConsole {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Console::new(
            Api::from_config(config)?,
            ProcessSession,
            LoginRedirect,
        ))
    }
}

impl<T: ApiTransport, S: SessionSource, N: Navigator> Console<T, S, N> {
    pub fn new(api: Api<T>, session: S, navigator: N) -> Self {
        Self {
            api,
            session,
            navigator,
            store: Arc::new(RwLock::new(ConsoleStore::default())),
        }
    }

    /// Shared handle to the normalized store, for presentation queries.
    pub fn store(&self) -> Arc<RwLock<ConsoleStore>> {
        Arc::clone(&self.store)
    }

    /// Run a read-only query against the store.
    pub fn with_store<R>(&self, f: impl FnOnce(&ConsoleStore) -> R) -> R {
        let store = self.store.read().expect("console store lock poisoned");
        f(&store)
    }

    fn apply<E: Entity>(
        &self,
        select: fn(&mut ConsoleStore) -> &mut ResourceState<E>,
        transition: Transition<E>,
    ) {
        let mut store = self.store.write().expect("console store lock poisoned");
        select(&mut store).apply(transition);
    }

    fn require_session(&self) -> Result<SessionContext, ApiError> {
        self.session.snapshot().ok_or(ApiError::Unauthenticated)
    }

    /// Tenant-scoped commands additionally need a selected company; an
    /// admin without one is sent back through the login boundary.
    fn require_company(&self) -> Result<(SessionContext, String), ApiError> {
        let ctx = self.require_session()?;
        let company = ctx.company_id.clone().ok_or(ApiError::Unauthenticated)?;
        Ok((ctx, company))
    }

    /// Record a draft failure on the slice without touching the gateway.
    fn reject_invalid<E: Entity>(
        &self,
        kind: ResourceKind,
        select: fn(&mut ConsoleStore) -> &mut ResourceState<E>,
        err: ApiError,
    ) -> ApiError {
        debug!(resource = %kind, error = %err, "Draft rejected before submission");
        self.apply(select, Transition::Rejected(err.clone()));
        err
    }

    /// Drive one command through Pending to its terminal transition.
    async fn settle<E, P, Fut>(
        &self,
        kind: ResourceKind,
        select: fn(&mut ConsoleStore) -> &mut ResourceState<E>,
        outcome: Fut,
        fulfilled: impl FnOnce(&P) -> Transition<E>,
    ) -> Result<P, ApiError>
    where
        E: Entity,
        Fut: Future<Output = Result<P, ApiError>>,
    {
        let command_id = Uuid::new_v4();
        self.apply(select, Transition::Pending);

        match outcome.await {
            Ok(payload) => {
                self.apply(select, fulfilled(&payload));
                debug!(%command_id, resource = %kind, "Command fulfilled");
                Ok(payload)
            }
            Err(err) => {
                // The guard fires before the slice sees the rejection.
                if err.requires_login() {
                    self.navigator.redirect_to_login();
                }
                error!(%command_id, resource = %kind, error = %err, "Command rejected");
                self.apply(select, Transition::Rejected(err.clone()));
                Err(err)
            }
        }
    }

    /* =========================
    Leave types
    ========================= */

    pub async fn list_leave_types(&self) -> Result<Vec<LeaveType>, ApiError> {
        let session = self.require_company();
        self.settle(
            ResourceKind::LeaveType,
            |s| &mut s.leave_types,
            async move {
                let (ctx, company) = session?;
                gateway::leave_type::list(&self.api, &ctx, &company).await
            },
            |items| Transition::Loaded(items.clone()),
        )
        .await
    }

    pub async fn create_leave_type(&self, draft: LeaveTypeDraft) -> Result<LeaveType, ApiError> {
        if let Err(err) = draft.validate() {
            return Err(self.reject_invalid(ResourceKind::LeaveType, |s| &mut s.leave_types, err));
        }

        let session = self.require_company();
        self.settle(
            ResourceKind::LeaveType,
            |s| &mut s.leave_types,
            async move {
                let (ctx, company) = session?;
                gateway::leave_type::create(&self.api, &ctx, &company, &draft).await
            },
            |created| Transition::Created(created.clone()),
        )
        .await
    }

    pub async fn update_leave_type(
        &self,
        id: &str,
        patch: LeaveTypeDraft,
    ) -> Result<LeaveType, ApiError> {
        if let Err(err) = patch.validate() {
            return Err(self.reject_invalid(ResourceKind::LeaveType, |s| &mut s.leave_types, err));
        }

        let session = self.require_company();
        let id = id.to_string();
        self.settle(
            ResourceKind::LeaveType,
            |s| &mut s.leave_types,
            async move {
                let (ctx, company) = session?;
                gateway::leave_type::update(&self.api, &ctx, &company, &id, &patch).await
            },
            |updated| Transition::Updated(updated.clone()),
        )
        .await
    }

    pub async fn delete_leave_type(&self, id: &str) -> Result<String, ApiError> {
        let session = self.require_company();
        let id = id.to_string();
        self.settle(
            ResourceKind::LeaveType,
            |s| &mut s.leave_types,
            async move {
                let (ctx, company) = session?;
                gateway::leave_type::delete(&self.api, &ctx, &company, &id).await
            },
            |deleted| Transition::Removed(deleted.clone()),
        )
        .await
    }

    /* =========================
    Leave policies
    ========================= */

    /// Allocations must point at leave types the tenant actually has.
    fn check_allocations(&self, draft: &LeavePolicyDraft) -> Result<(), ApiError> {
        let unknown = self.with_store(|s| {
            draft.leave_allocations.iter().any(|item| {
                !item.leave_type_id.is_empty() && s.leave_types.find(&item.leave_type_id).is_none()
            })
        });

        if unknown {
            Err(ApiError::validation(
                "leaveAllocation",
                "Leave allocation references an unknown leave type",
            ))
        } else {
            Ok(())
        }
    }

    pub async fn list_leave_policies(&self) -> Result<Vec<LeavePolicy>, ApiError> {
        let session = self.require_company();
        self.settle(
            ResourceKind::LeavePolicy,
            |s| &mut s.leave_policies,
            async move {
                let (ctx, company) = session?;
                gateway::leave_policy::list(&self.api, &ctx, &company).await
            },
            |items| Transition::Loaded(items.clone()),
        )
        .await
    }

    pub async fn create_leave_policy(
        &self,
        draft: LeavePolicyDraft,
    ) -> Result<LeavePolicy, ApiError> {
        if let Err(err) = draft.validate().and_then(|_| self.check_allocations(&draft)) {
            return Err(self.reject_invalid(
                ResourceKind::LeavePolicy,
                |s| &mut s.leave_policies,
                err,
            ));
        }

        let session = self.require_company();
        self.settle(
            ResourceKind::LeavePolicy,
            |s| &mut s.leave_policies,
            async move {
                let (ctx, company) = session?;
                gateway::leave_policy::create(&self.api, &ctx, &company, &draft).await
            },
            |created| Transition::Created(created.clone()),
        )
        .await
    }

    pub async fn update_leave_policy(
        &self,
        id: &str,
        patch: LeavePolicyDraft,
    ) -> Result<LeavePolicy, ApiError> {
        if let Err(err) = patch.validate().and_then(|_| self.check_allocations(&patch)) {
            return Err(self.reject_invalid(
                ResourceKind::LeavePolicy,
                |s| &mut s.leave_policies,
                err,
            ));
        }

        let session = self.require_company();
        let id = id.to_string();
        self.settle(
            ResourceKind::LeavePolicy,
            |s| &mut s.leave_policies,
            async move {
                let (ctx, company) = session?;
                gateway::leave_policy::update(&self.api, &ctx, &company, &id, &patch).await
            },
            |updated| Transition::Updated(updated.clone()),
        )
        .await
    }

    pub async fn delete_leave_policy(&self, id: &str) -> Result<String, ApiError> {
        let session = self.require_company();
        let id = id.to_string();
        self.settle(
            ResourceKind::LeavePolicy,
            |s| &mut s.leave_policies,
            async move {
                let (ctx, company) = session?;
                gateway::leave_policy::delete(&self.api, &ctx, &company, &id).await
            },
            |deleted| Transition::Removed(deleted.clone()),
        )
        .await
    }

    /// Clear the policy slice's error/success markers. The settings page
    /// calls this on unmount.
    pub fn reset_leave_policy_state(&self) {
        self.apply(|s| &mut s.leave_policies, Transition::Reset);
    }

    /* =========================
    Public holidays
    ========================= */

    pub async fn list_public_holidays(&self) -> Result<Vec<PublicHoliday>, ApiError> {
        let session = self.require_company();
        self.settle(
            ResourceKind::PublicHoliday,
            |s| &mut s.public_holidays,
            async move {
                let (ctx, company) = session?;
                gateway::public_holiday::list(&self.api, &ctx, &company).await
            },
            |items| Transition::Loaded(items.clone()),
        )
        .await
    }

    pub async fn create_public_holiday(
        &self,
        draft: PublicHolidayDraft,
    ) -> Result<PublicHoliday, ApiError> {
        if let Err(err) = draft.validate() {
            return Err(self.reject_invalid(
                ResourceKind::PublicHoliday,
                |s| &mut s.public_holidays,
                err,
            ));
        }

        let session = self.require_company();
        self.settle(
            ResourceKind::PublicHoliday,
            |s| &mut s.public_holidays,
            async move {
                let (ctx, company) = session?;
                gateway::public_holiday::create(&self.api, &ctx, &company, &draft).await
            },
            |created| Transition::Created(created.clone()),
        )
        .await
    }

    pub async fn update_public_holiday(
        &self,
        id: &str,
        patch: PublicHolidayDraft,
    ) -> Result<PublicHoliday, ApiError> {
        if let Err(err) = patch.validate() {
            return Err(self.reject_invalid(
                ResourceKind::PublicHoliday,
                |s| &mut s.public_holidays,
                err,
            ));
        }

        let session = self.require_company();
        let id = id.to_string();
        self.settle(
            ResourceKind::PublicHoliday,
            |s| &mut s.public_holidays,
            async move {
                let (ctx, company) = session?;
                gateway::public_holiday::update(&self.api, &ctx, &company, &id, &patch).await
            },
            |updated| Transition::Updated(updated.clone()),
        )
        .await
    }

    pub async fn delete_public_holiday(&self, id: &str) -> Result<String, ApiError> {
        let session = self.require_company();
        let id = id.to_string();
        self.settle(
            ResourceKind::PublicHoliday,
            |s| &mut s.public_holidays,
            async move {
                let (ctx, company) = session?;
                gateway::public_holiday::delete(&self.api, &ctx, &company, &id).await
            },
            |deleted| Transition::Removed(deleted.clone()),
        )
        .await
    }

    /* =========================
    Companies (superadmin)
    ========================= */

    pub async fn list_companies(&self) -> Result<Vec<Company>, ApiError> {
        let session = self.require_session();
        self.settle(
            ResourceKind::Company,
            |s| &mut s.companies,
            async move {
                let ctx = session?;
                gateway::company::list(&self.api, &ctx).await
            },
            |items| Transition::Loaded(items.clone()),
        )
        .await
    }

    pub async fn create_company(&self, draft: Value) -> Result<Company, ApiError> {
        let session = self.require_session();
        self.settle(
            ResourceKind::Company,
            |s| &mut s.companies,
            async move {
                let ctx = session?;
                gateway::company::create(&self.api, &ctx, draft).await
            },
            |created| Transition::Created(created.clone()),
        )
        .await
    }

    pub async fn update_company(&self, id: &str, patch: Value) -> Result<Company, ApiError> {
        let session = self.require_session();
        let id = id.to_string();
        self.settle(
            ResourceKind::Company,
            |s| &mut s.companies,
            async move {
                let ctx = session?;
                gateway::company::update(&self.api, &ctx, &id, patch).await
            },
            |updated| Transition::Updated(updated.clone()),
        )
        .await
    }

    pub async fn delete_company(&self, id: &str) -> Result<String, ApiError> {
        let session = self.require_session();
        let id = id.to_string();
        self.settle(
            ResourceKind::Company,
            |s| &mut s.companies,
            async move {
                let ctx = session?;
                gateway::company::delete(&self.api, &ctx, &id).await
            },
            |deleted| Transition::Removed(deleted.clone()),
        )
        .await
    }

    /* =========================
    Employees (overview)
    ========================= */

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let session = self.require_company();
        self.settle(
            ResourceKind::Employee,
            |s| &mut s.employees,
            async move {
                let (ctx, company) = session?;
                gateway::employee::list(&self.api, &ctx, &company).await
            },
            |items| Transition::Loaded(items.clone()),
        )
        .await
    }

    /// Load everything the leave settings page shows, concurrently.
    /// Failures stay on their slices; nothing here short-circuits.
    pub async fn refresh_leave_settings(&self) {
        let (types, policies, holidays) = futures::join!(
            self.list_leave_types(),
            self.list_leave_policies(),
            self.list_public_holidays()
        );

        for outcome in [
            types.map(|_| ()),
            policies.map(|_| ()),
            holidays.map(|_| ()),
        ] {
            if let Err(err) = outcome {
                debug!(error = %err, "Settings refresh left an error on its slice");
            }
        }
    }
}
