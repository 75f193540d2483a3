//! The audit run: fetch volumes, resolve the instances they are attached to,
//! join and order for display. Stages run once, in sequence.

use tracing::info;

use crate::error::AuditError;
use crate::inventory::{InstanceSource, VolumeSource};
use crate::pipeline;

pub async fn run_audit<S>(source: &S) -> Result<Vec<Vec<String>>, AuditError>
where
    S: VolumeSource + InstanceSource,
{
    // 1) Unencrypted volumes
    let volumes = source.unencrypted_volumes().await?;
    info!(volumes = volumes.len(), "unencrypted volumes found");

    // 2) Instance ids referenced by each volume's first attachment
    let ids: Vec<String> = volumes
        .iter()
        .filter_map(|vol| vol.attachments.first())
        .map(|att| att.instance_id.clone())
        .collect();

    // 3) Name tags for those instances
    let instances = source.describe_instances(&ids).await?;

    // 4) Join and order for display
    Ok(pipeline::audit_table(&volumes, &instances))
}
