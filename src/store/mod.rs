pub mod resource;

pub use resource::{ResourceState, Transition};

use crate::model::{Company, Employee, LeavePolicy, LeaveType, PublicHoliday};

/// The whole normalized client store, one slice per resource type.
///
/// Slices own their collections exclusively; the only cross-slice
/// relationship is referential (policy allocations point at leave type
/// ids), checked by the dispatcher before submission.
#[derive(Debug, Clone, Default)]
pub struct ConsoleStore {
    pub leave_types: ResourceState<LeaveType>,
    pub leave_policies: ResourceState<LeavePolicy>,
    pub public_holidays: ResourceState<PublicHoliday>,
    pub companies: ResourceState<Company>,
    pub employees: ResourceState<Employee>,
}
