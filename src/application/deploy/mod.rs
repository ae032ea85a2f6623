//! Deploy Module
//!
//! Orchestrates one deployment run.
//!
//! ## Structure
//!
//! - `options` - The immutable run input (`DeployPlan`, `ExtraUpload`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Stage sequencing (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use ferry::application::deploy::{DeployPlan, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(fs, disk, invoker, runner, archiver);
//! let result = use_case.execute(&DeployPlan::new("production", root, url))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployPlan, ExtraUpload};
pub use result::DeployResult;
pub use use_case::DeployUseCase;
