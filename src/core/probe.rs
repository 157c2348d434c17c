//! Feature and permission probing.
//!
//! Feature probes are synchronous presence tests. Permission probing issues
//! one query per catalog entry and waits for all of them to settle; a failed
//! query becomes an `error` row and never affects its siblings.

use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::catalog::{Feature, PermissionDescriptor, PresenceTest, FEATURES, PERMISSIONS};
use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::status::{FeatureFlag, OutcomeStatus, PermissionOutcome, PermissionState};

/// Evaluates presence tests against the host environment.
pub trait FeatureHost {
    fn evaluate(&self, test: PresenceTest) -> Result<bool, ProbeError>;
}

/// The platform's permission subsystem.
pub trait PermissionHost {
    fn query(
        &self,
        descriptor: PermissionDescriptor,
    ) -> LocalBoxFuture<'_, Result<PermissionState, ProbeError>>;

    /// Completes after `after` has elapsed. Only used when a query deadline
    /// is configured; the default never completes.
    fn sleep(&self, after: Duration) -> LocalBoxFuture<'_, ()> {
        let _ = after;
        future::pending().boxed_local()
    }
}

pub fn probe_feature<H: FeatureHost + ?Sized>(host: &H, feature: &Feature) -> FeatureFlag {
    let present = match host.evaluate(feature.test) {
        Ok(v) => v,
        Err(e) => {
            warn!(feature = feature.name, error = %e, "presence test failed; reporting denied");
            false
        }
    };

    FeatureFlag {
        rank: feature.rank,
        name: feature.name,
        expression: feature.expression,
        status: present.into(),
    }
}

pub fn probe_features<H: FeatureHost + ?Sized>(host: &H) -> Vec<FeatureFlag> {
    FEATURES.iter().map(|f| probe_feature(host, f)).collect()
}

/// Query a single category and fold any failure into the outcome.
pub async fn query_one<H: PermissionHost + ?Sized>(
    host: &H,
    descriptor: PermissionDescriptor,
    timeout: Option<Duration>,
) -> PermissionOutcome {
    let result = match timeout {
        None => host.query(descriptor).await,
        Some(after) => match future::select(host.query(descriptor), host.sleep(after)).await {
            Either::Left((res, _)) => res,
            Either::Right(((), _)) => Err(ProbeError::QueryTimedOut {
                name: descriptor.name.to_string(),
                after_ms: after.as_millis().min(u32::MAX as u128) as u32,
            }),
        },
    };

    match result {
        Ok(state) => PermissionOutcome::settled(descriptor.name, state),
        Err(e) => {
            info!(name = descriptor.name, detail = %e, "permission query failed");
            PermissionOutcome::failed(descriptor.name, e.to_string())
        }
    }
}

/// Query every catalog category concurrently and return one outcome per
/// category, in catalog order.
pub async fn probe_permissions<H: PermissionHost + ?Sized>(
    host: &H,
    config: &ProbeConfig,
) -> Vec<PermissionOutcome> {
    let timeout = config.query_timeout();
    debug!(count = PERMISSIONS.len(), ?timeout, "issuing permission queries");

    // join_all keeps input order no matter which query settles first.
    let outcomes =
        future::join_all(PERMISSIONS.iter().map(|d| query_one(host, *d, timeout))).await;

    let errors = outcomes
        .iter()
        .filter(|o| o.status() == OutcomeStatus::Error)
        .count();
    debug!(count = outcomes.len(), errors, "permission queries settled");
    outcomes
}
