pub mod company;
pub mod employee;
pub mod leave_policy;
pub mod leave_type;
pub mod public_holiday;

pub use company::Company;
pub use employee::Employee;
pub use leave_policy::{LeaveAllocation, LeaveAllocationDraft, LeavePolicy, LeavePolicyDraft};
pub use leave_type::{AccrualPeriod, LeaveType, LeaveTypeDraft};
pub use public_holiday::{PublicHoliday, PublicHolidayDraft};

/// Identity every stored entity exposes to its slice.
///
/// Ids are opaque strings, unique within a tenant.
pub trait Entity: Clone + Send + Sync + 'static {
    fn entity_id(&self) -> &str;
}
