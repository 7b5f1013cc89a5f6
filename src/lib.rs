//! Client-side orchestration core for the HR administration console.
//!
//! Commands from the presentation shell (create/update/delete/list over
//! leave types, leave policies, public holidays, companies, and the
//! employee overview) are driven through a three-phase async lifecycle:
//! a `Pending` transition on the owning store slice, one gateway call
//! over HTTP, then a single terminal `Fulfilled` or `Rejected`
//! transition. 401/403 responses and missing credentials short-circuit
//! through the auth guard to the login boundary.

pub mod auth;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod model;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use dispatch::{Console, HttpConsole, ResourceKind};
pub use error::{ApiError, FieldError};
