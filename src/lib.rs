//! # webapi_checker
//!
//! Host-independent core of the web API checker page.
//!
//! The crate answers two questions about a browser environment:
//!
//! - which of a fixed set of platform features are observably present
//!   ([`probe::probe_features`]), and
//! - what state each of a fixed set of permission categories is in
//!   ([`probe::probe_permissions`]).
//!
//! Both go through small host traits ([`probe::FeatureHost`],
//! [`probe::PermissionHost`]) so the logic runs and is tested natively. The
//! browser bindings live in the `webapi_checker_web` crate.
//!
//! ## Quick Start
//!
//! ```ignore
//! use webapi_checker::prelude::*;
//!
//! let config = ProbeConfig::default();
//! let features = probe_features(&host);
//! let permissions = probe_permissions(&host, &config).await;
//! let report = Report::new(features, permissions);
//! ```
//!
//! ## Modules
//!
//! - [`status`]: result records and their state enums
//! - [`catalog`]: the fixed feature and permission tables
//! - [`probe`]: host traits and the probing operations
//! - [`error`]: the probe error type
//! - [`config`]: deployment configuration
//! - [`report`]: aggregated results and summary counts

#[path = "core/status.rs"]
pub mod status;

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/probe.rs"]
pub mod probe;

pub mod report;

/// Prelude module for convenient imports.
///
/// ```
/// use webapi_checker::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{Feature, PermissionDescriptor, PresenceTest, FEATURES, PERMISSIONS};
    pub use crate::config::ProbeConfig;
    pub use crate::error::{ConfigError, ProbeError};
    pub use crate::probe::{
        probe_feature, probe_features, probe_permissions, query_one, FeatureHost, PermissionHost,
    };
    pub use crate::report::{Report, Summary};
    pub use crate::status::{
        FeatureFlag, FeatureState, OutcomeStatus, PermissionOutcome, PermissionState,
    };
}
