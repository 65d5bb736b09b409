//! Display formatting for plans and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); operation
//! outcomes and collections get newtype wrappers so each interface prints
//! them the same way. All output is markdown.
//!
//! - [`collections`]: `PlanSummaries`, `CatalogListing`
//! - [`results`]: `GenerateResult`, `ProgressResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: `LocalDateTime`, `LongDate`, `MonthYear`
//!
//! ```rust
//! use trailhead_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Plan saved");
//! assert_eq!(status.to_string(), "Success: Plan saved\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{CatalogListing, PlanSummaries};
pub use datetime::{LocalDateTime, LongDate, MonthYear};
pub use results::{DeleteResult, GenerateResult, PhaseChange, ProgressResult};
pub use status::OperationStatus;
