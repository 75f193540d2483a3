//! Plain-data records for the audit, decoupled from the SDK's option-heavy
//! output types. Conversions drop malformed entries instead of failing.

use aws_sdk_ec2::types as ec2types;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRecord {
    pub instance_id: String,
    pub device: String,
}

/// One block-storage volume. Attachments keep the provider's order; only the
/// first is consulted downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeRecord {
    pub volume_id: String,
    pub attachments: Vec<AttachmentRecord>,
}

/// One compute instance with its tags in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    pub instance_id: String,
    pub tags: Vec<TagRecord>,
}

impl From<&ec2types::Volume> for VolumeRecord {
    fn from(vol: &ec2types::Volume) -> Self {
        let attachments = vol
            .attachments()
            .iter()
            .filter_map(|a| {
                let instance_id = a.instance_id()?.to_string();
                let device = a.device().unwrap_or_default().to_string();
                Some(AttachmentRecord {
                    instance_id,
                    device,
                })
            })
            .collect();
        Self {
            volume_id: vol.volume_id().unwrap_or_default().to_string(),
            attachments,
        }
    }
}

impl From<&ec2types::Instance> for InstanceRecord {
    fn from(inst: &ec2types::Instance) -> Self {
        let tags = inst
            .tags()
            .iter()
            .filter_map(|t| {
                let key = t.key()?.to_string();
                let value = t.value()?.to_string();
                Some(TagRecord { key, value })
            })
            .collect();
        Self {
            instance_id: inst.instance_id().unwrap_or_default().to_string(),
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_conversion_keeps_attachment_order() {
        let vol = ec2types::Volume::builder()
            .volume_id("vol-0aa")
            .attachments(
                ec2types::VolumeAttachment::builder()
                    .instance_id("i-1")
                    .device("/dev/sda1")
                    .build(),
            )
            .attachments(
                ec2types::VolumeAttachment::builder()
                    .instance_id("i-2")
                    .device("/dev/sdb")
                    .build(),
            )
            .build();

        let rec = VolumeRecord::from(&vol);
        assert_eq!(rec.volume_id, "vol-0aa");
        assert_eq!(rec.attachments.len(), 2);
        assert_eq!(rec.attachments[0].instance_id, "i-1");
        assert_eq!(rec.attachments[0].device, "/dev/sda1");
        assert_eq!(rec.attachments[1].instance_id, "i-2");
    }

    #[test]
    fn attachment_without_instance_id_is_dropped() {
        let vol = ec2types::Volume::builder()
            .volume_id("vol-0bb")
            .attachments(ec2types::VolumeAttachment::builder().device("/dev/sdc").build())
            .build();

        let rec = VolumeRecord::from(&vol);
        assert!(rec.attachments.is_empty());
    }

    #[test]
    fn attachment_without_device_keeps_empty_device() {
        let vol = ec2types::Volume::builder()
            .volume_id("vol-0cc")
            .attachments(ec2types::VolumeAttachment::builder().instance_id("i-9").build())
            .build();

        let rec = VolumeRecord::from(&vol);
        assert_eq!(rec.attachments[0].instance_id, "i-9");
        assert_eq!(rec.attachments[0].device, "");
    }

    #[test]
    fn instance_conversion_keeps_tag_order_and_skips_incomplete_tags() {
        let inst = ec2types::Instance::builder()
            .instance_id("i-1")
            .tags(ec2types::Tag::builder().key("env").value("dev").build())
            .tags(ec2types::Tag::builder().key("orphan").build())
            .tags(ec2types::Tag::builder().key("Name").value("web-1").build())
            .build();

        let rec = InstanceRecord::from(&inst);
        assert_eq!(rec.instance_id, "i-1");
        assert_eq!(
            rec.tags,
            vec![
                TagRecord {
                    key: "env".into(),
                    value: "dev".into()
                },
                TagRecord {
                    key: "Name".into(),
                    value: "web-1".into()
                },
            ]
        );
    }
}
