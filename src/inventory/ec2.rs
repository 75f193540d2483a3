use async_trait::async_trait;
use aws_sdk_ec2 as ec2;
use tracing::debug;

use crate::error::AuditError;
use crate::inventory::{InstanceSource, VolumeSource};
use crate::model::{InstanceRecord, VolumeRecord};

/// EC2-backed implementation of both inventory sources, sharing one client.
pub struct Ec2Inventory {
    client: ec2::Client,
}

impl Ec2Inventory {
    pub fn new(conf: &aws_config::SdkConfig) -> Self {
        Self {
            client: ec2::Client::new(conf),
        }
    }
}

// The SDK error's Display is just the outer layer ("service error"); the
// service diagnostic lives further down the source chain.
fn source_error(query: &'static str, err: impl std::error::Error) -> AuditError {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(c) = cause {
        message.push_str(": ");
        message.push_str(&c.to_string());
        cause = c.source();
    }
    AuditError::Source { query, message }
}

#[async_trait]
impl VolumeSource for Ec2Inventory {
    async fn unencrypted_volumes(&self) -> Result<Vec<VolumeRecord>, AuditError> {
        let filter = ec2::types::Filter::builder()
            .name("encrypted")
            .values("false")
            .build();

        let resp = self
            .client
            .describe_volumes()
            .filters(filter)
            .send()
            .await
            .map_err(|e| source_error("DescribeVolumes", e))?;

        let volumes: Vec<VolumeRecord> = resp.volumes().iter().map(VolumeRecord::from).collect();
        debug!(count = volumes.len(), "fetched unencrypted volumes");
        Ok(volumes)
    }
}

#[async_trait]
impl InstanceSource for Ec2Inventory {
    async fn describe_instances(&self, ids: &[String]) -> Result<Vec<InstanceRecord>, AuditError> {
        // DescribeInstances rejects an empty id list
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let resp = self
            .client
            .describe_instances()
            .set_instance_ids(Some(ids.to_vec()))
            .send()
            .await
            .map_err(|e| source_error("DescribeInstances", e))?;

        let mut instances = Vec::new();
        for reservation in resp.reservations() {
            for inst in reservation.instances() {
                instances.push(InstanceRecord::from(inst));
            }
        }
        debug!(count = instances.len(), "fetched instances");
        Ok(instances)
    }
}
