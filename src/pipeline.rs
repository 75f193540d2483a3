//! Joins unencrypted volumes with their attached instances' `Name` tags and
//! orders the result for display.
//!
//! Pure data transformation: no I/O, no shared state. One output row per
//! input volume, always.

use std::collections::HashMap;

use crate::model::{InstanceRecord, VolumeRecord};
use crate::sort::{self, Order};

pub const HEADER: [&str; 4] = ["volume_id", "instance_id", "device", "instance_name"];

/// Column the output is ordered by.
pub const INSTANCE_NAME_COL: usize = 3;

/// Instance id -> value of its `Name` tag, if any. Duplicate ids overwrite,
/// so the last record in source order wins.
type NameIndex = HashMap<String, Option<String>>;

fn name_index(instances: &[InstanceRecord]) -> NameIndex {
    let mut index = NameIndex::with_capacity(instances.len());
    for inst in instances {
        let name = inst
            .tags
            .iter()
            .find(|t| t.key == "Name")
            .map(|t| t.value.clone());
        index.insert(inst.instance_id.clone(), name);
    }
    index
}

/// Builds the display table: one row of
/// `[volume_id, instance_id, device, instance_name]` per volume, sorted
/// ascending by instance name. Empty strings stand for "not present" --
/// an unattached volume, or an instance without a `Name` tag.
pub fn audit_table(volumes: &[VolumeRecord], instances: &[InstanceRecord]) -> Vec<Vec<String>> {
    let index = name_index(instances);

    let mut rows: Vec<Vec<String>> = volumes
        .iter()
        .map(|vol| {
            // only the first attachment counts; volumes normally have one
            let (instance_id, device) = match vol.attachments.first() {
                Some(att) => (att.instance_id.clone(), att.device.clone()),
                None => (String::new(), String::new()),
            };
            let instance_name = index
                .get(&instance_id)
                .and_then(|name| name.clone())
                .unwrap_or_default();
            vec![vol.volume_id.clone(), instance_id, device, instance_name]
        })
        .collect();

    sort::by_column(&mut rows, INSTANCE_NAME_COL, Order::Ascending);
    rows
}
