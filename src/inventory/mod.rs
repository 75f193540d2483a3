//! Inventory sources the audit reads from. The traits keep the AWS client
//! behind a seam so the run can be exercised against in-memory data.

use async_trait::async_trait;

use crate::error::AuditError;
use crate::model::{InstanceRecord, VolumeRecord};

pub mod ec2;

#[async_trait]
pub trait VolumeSource {
    /// Returns every unencrypted volume visible to the session.
    async fn unencrypted_volumes(&self) -> Result<Vec<VolumeRecord>, AuditError>;
}

#[async_trait]
pub trait InstanceSource {
    /// Returns the instances matching `ids`, tags included. An empty id set
    /// yields an empty result without touching the provider.
    async fn describe_instances(&self, ids: &[String]) -> Result<Vec<InstanceRecord>, AuditError>;
}
