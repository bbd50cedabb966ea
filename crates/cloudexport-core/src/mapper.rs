//! Record mapper
//!
//! Converts between [`CloudExport`] records and host attribute maps. The
//! host's one-element-list encoding of nested objects is wrapped and unwrapped
//! here and nowhere else.

use crate::attributes::{Attributes, AttributesExt};
use crate::error::{CloudExportError, Result};
use crate::model::{
    AwsProperties, AzureProperties, BgpProperties, CloudExport, CloudExportType, CloudProvider,
    CurrentStatus, GceProperties, IbmProperties, ProviderProperties,
};
use crate::schema::{CLOUD_PROVIDER, CURRENT_STATUS};
use serde_json::{Value, json};

/// A record type written out as a nested block
trait ToBlock {
    fn to_block(&self) -> Value;
}

/// A record type read back from a nested block
trait FromBlock: Sized {
    fn from_block(block: &Attributes) -> Result<Self>;
}

impl ToBlock for AwsProperties {
    fn to_block(&self) -> Value {
        json!({
            "bucket": self.bucket,
            "iam_role_arn": self.iam_role_arn,
            "region": self.region,
            "delete_after_read": self.delete_after_read,
            "multiple_buckets": self.multiple_buckets,
        })
    }
}

impl FromBlock for AwsProperties {
    fn from_block(block: &Attributes) -> Result<Self> {
        Ok(Self {
            bucket: block.require_string("bucket")?,
            iam_role_arn: block.require_string("iam_role_arn")?,
            region: block.require_string("region")?,
            delete_after_read: block.require_bool("delete_after_read")?,
            multiple_buckets: block.require_bool("multiple_buckets")?,
        })
    }
}

impl ToBlock for AzureProperties {
    fn to_block(&self) -> Value {
        json!({
            "location": self.location,
            "resource_group": self.resource_group,
            "storage_account": self.storage_account,
            "subscription_id": self.subscription_id,
            "security_principal_enabled": self.security_principal_enabled,
        })
    }
}

impl FromBlock for AzureProperties {
    fn from_block(block: &Attributes) -> Result<Self> {
        Ok(Self {
            location: block.require_string("location")?,
            resource_group: block.require_string("resource_group")?,
            storage_account: block.require_string("storage_account")?,
            subscription_id: block.require_string("subscription_id")?,
            security_principal_enabled: block.require_bool("security_principal_enabled")?,
        })
    }
}

impl ToBlock for BgpProperties {
    fn to_block(&self) -> Value {
        json!({
            "apply_bgp": self.apply_bgp,
            "use_bgp_device_id": self.use_bgp_device_id,
            "device_bgp_type": self.device_bgp_type,
        })
    }
}

impl FromBlock for BgpProperties {
    fn from_block(block: &Attributes) -> Result<Self> {
        Ok(Self {
            apply_bgp: block.require_bool("apply_bgp")?,
            use_bgp_device_id: block.require_string("use_bgp_device_id")?,
            device_bgp_type: block.require_string("device_bgp_type")?,
        })
    }
}

impl ToBlock for GceProperties {
    fn to_block(&self) -> Value {
        json!({
            "project": self.project,
            "subscription": self.subscription,
        })
    }
}

impl FromBlock for GceProperties {
    fn from_block(block: &Attributes) -> Result<Self> {
        Ok(Self {
            project: block.require_string("project")?,
            subscription: block.require_string("subscription")?,
        })
    }
}

impl ToBlock for IbmProperties {
    fn to_block(&self) -> Value {
        json!({ "bucket": self.bucket })
    }
}

impl FromBlock for IbmProperties {
    fn from_block(block: &Attributes) -> Result<Self> {
        Ok(Self {
            bucket: block.require_string("bucket")?,
        })
    }
}

impl ToBlock for CurrentStatus {
    fn to_block(&self) -> Value {
        json!({
            "status": self.status,
            "error_message": self.error_message,
            "flow_found": self.flow_found,
            "api_access": self.api_access,
            "storage_account_access": self.storage_account_access,
        })
    }
}

fn wrap(block: &impl ToBlock) -> Value {
    Value::Array(vec![block.to_block()])
}

/// Fill host attributes from a record, for read operations
pub fn to_external(export: &CloudExport) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.insert("id".into(), json!(export.id));
    attrs.insert("type".into(), json!(export.export_type.as_str()));
    attrs.insert("enabled".into(), json!(export.enabled));
    attrs.insert("name".into(), json!(export.name));
    attrs.insert("description".into(), json!(export.description));
    attrs.insert("api_root".into(), json!(export.api_root));
    attrs.insert("flow_dest".into(), json!(export.flow_dest));
    attrs.insert("plan_id".into(), json!(export.plan_id));
    attrs.insert(CLOUD_PROVIDER.into(), json!(export.cloud_provider().as_str()));

    let block = match &export.properties {
        ProviderProperties::Aws(p) => wrap(p),
        ProviderProperties::Azure(p) => wrap(p),
        ProviderProperties::Bgp(p) => wrap(p),
        ProviderProperties::Gce(p) => wrap(p),
        ProviderProperties::Ibm(p) => wrap(p),
    };
    attrs.insert(export.cloud_provider().as_str().into(), block);

    if let Some(status) = &export.current_status {
        attrs.insert(CURRENT_STATUS.into(), wrap(status));
    }

    attrs
}

/// Build a record from host attributes, for create and update operations
///
/// Only the block named by `cloud_provider` is read; blocks for other
/// providers are ignored. `current_status` never flows in this direction.
pub fn from_external(attrs: &Attributes) -> Result<CloudExport> {
    let provider: CloudProvider = attrs.string_or_default(CLOUD_PROVIDER)?.parse()?;
    let block = provider_block(attrs, provider)?;

    let properties = match provider {
        CloudProvider::Aws => ProviderProperties::Aws(AwsProperties::from_block(block)?),
        CloudProvider::Azure => ProviderProperties::Azure(AzureProperties::from_block(block)?),
        CloudProvider::Bgp => ProviderProperties::Bgp(BgpProperties::from_block(block)?),
        CloudProvider::Gce => ProviderProperties::Gce(GceProperties::from_block(block)?),
        CloudProvider::Ibm => ProviderProperties::Ibm(IbmProperties::from_block(block)?),
    };

    let export_type = CloudExportType::from(attrs.require_string("type")?);

    Ok(CloudExport {
        id: attrs.string_or_default("id")?,
        export_type,
        enabled: attrs.bool_or_default("enabled")?,
        name: attrs.string_or_default("name")?,
        description: attrs.string_or_default("description")?,
        api_root: attrs.string_or_default("api_root")?,
        flow_dest: attrs.string_or_default("flow_dest")?,
        plan_id: attrs.string_or_default("plan_id")?,
        properties,
        current_status: None,
    })
}

fn provider_block(attrs: &Attributes, provider: CloudProvider) -> Result<&Attributes> {
    let blocks = attrs.block_list(provider.as_str())?;
    match blocks.as_slice() {
        [] => Err(CloudExportError::MissingProviderConfiguration(provider)),
        [block] => Ok(*block),
        _ => Err(CloudExportError::MultipleProviderConfigurations {
            provider,
            count: blocks.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(value: Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    fn aws_export() -> CloudExport {
        CloudExport::new(
            CloudExportType::KentikManaged,
            "aws-export",
            "11467",
            AwsProperties {
                bucket: "b".to_string(),
                iam_role_arn: "arn".to_string(),
                region: "us-east-1".to_string(),
                delete_after_read: true,
                multiple_buckets: false,
            },
        )
    }

    fn all_variants() -> Vec<ProviderProperties> {
        vec![
            aws_export().properties,
            AzureProperties {
                location: "eastus".to_string(),
                resource_group: "rg".to_string(),
                storage_account: "sa".to_string(),
                subscription_id: "sub-1".to_string(),
                security_principal_enabled: true,
            }
            .into(),
            BgpProperties {
                apply_bgp: true,
                use_bgp_device_id: "1234".to_string(),
                device_bgp_type: "device".to_string(),
            }
            .into(),
            GceProperties {
                project: "proj".to_string(),
                subscription: "flows".to_string(),
            }
            .into(),
            IbmProperties {
                bucket: "ibm-bucket".to_string(),
            }
            .into(),
        ]
    }

    #[test]
    fn test_to_external_aws() {
        let out = to_external(&aws_export());

        assert_eq!(
            out["aws"],
            json!([{
                "bucket": "b",
                "iam_role_arn": "arn",
                "region": "us-east-1",
                "delete_after_read": true,
                "multiple_buckets": false,
            }])
        );
        for key in ["azure", "bgp", "gce", "ibm", CURRENT_STATUS] {
            assert!(!out.contains_key(key), "unexpected {key}");
        }
        assert_eq!(out[CLOUD_PROVIDER], "aws");
        assert_eq!(out["type"], "CLOUD_EXPORT_TYPE_KENTIK_MANAGED");
    }

    #[test]
    fn test_to_external_current_status() {
        let export = aws_export().with_id("7").with_current_status(CurrentStatus {
            status: "ERROR".to_string(),
            error_message: "access denied".to_string(),
            flow_found: false,
            api_access: true,
            storage_account_access: false,
        });

        let out = to_external(&export);
        assert_eq!(out["id"], "7");
        assert_eq!(out[CURRENT_STATUS][0]["error_message"], "access denied");
        assert_eq!(out[CURRENT_STATUS][0]["api_access"], true);
        assert_eq!(
            out[CURRENT_STATUS],
            json!([{
                "status": "ERROR",
                "error_message": "access denied",
                "flow_found": false,
                "api_access": true,
                "storage_account_access": false,
            }])
        );
    }

    #[test]
    fn test_from_external_ibm() {
        let input = attrs(json!({
            "cloud_provider": "ibm",
            "ibm": [{ "bucket": "my-bucket" }],
            "type": "CLOUD_EXPORT_TYPE_CUSTOMER_MANAGED",
            "name": "export1",
            "plan_id": "42",
        }));

        let export = from_external(&input).unwrap();
        assert_eq!(
            export.properties,
            ProviderProperties::Ibm(IbmProperties {
                bucket: "my-bucket".to_string()
            })
        );
        assert_eq!(export.cloud_provider(), CloudProvider::Ibm);
        assert_eq!(export.export_type, CloudExportType::CustomerManaged);
        assert_eq!(export.name, "export1");
        assert_eq!(export.plan_id, "42");
        assert!(!export.enabled);
        assert_eq!(export.description, "");
        assert!(export.current_status.is_none());
    }

    #[test]
    fn test_round_trip_all_providers() {
        for properties in all_variants() {
            let export = CloudExport {
                properties,
                ..aws_export()
            }
            .with_id("99")
            .with_enabled(true)
            .with_description("round trip");

            let back = from_external(&to_external(&export)).unwrap();
            assert_eq!(back, export);
            assert_eq!(back.cloud_provider(), export.cloud_provider());
        }
    }

    #[test]
    fn test_round_trip_drops_status() {
        let export = aws_export().with_current_status(CurrentStatus::default());
        let back = from_external(&to_external(&export)).unwrap();
        assert!(back.current_status.is_none());
        assert_eq!(back.properties, export.properties);
    }

    #[test]
    fn test_missing_provider_block() {
        let input = attrs(json!({
            "cloud_provider": "aws",
            "type": "CLOUD_EXPORT_TYPE_KENTIK_MANAGED",
            "name": "export1",
            "plan_id": "42",
            "ibm": [{ "bucket": "wrong-block" }],
        }));

        let err = from_external(&input).unwrap_err();
        assert_eq!(
            err,
            CloudExportError::MissingProviderConfiguration(CloudProvider::Aws)
        );
        assert_eq!(
            err.to_string(),
            "for cloud_provider=aws, there should also be aws{...} attribute provided"
        );
    }

    #[test]
    fn test_empty_provider_block_list() {
        let input = attrs(json!({
            "cloud_provider": "gce",
            "type": "CLOUD_EXPORT_TYPE_KENTIK_MANAGED",
            "gce": [],
        }));
        assert_eq!(
            from_external(&input).unwrap_err(),
            CloudExportError::MissingProviderConfiguration(CloudProvider::Gce)
        );
    }

    #[test]
    fn test_unsupported_provider() {
        let input = attrs(json!({
            "cloud_provider": "digitalocean",
            "type": "CLOUD_EXPORT_TYPE_KENTIK_MANAGED",
            "digitalocean": [{}],
        }));
        assert_eq!(
            from_external(&input).unwrap_err(),
            CloudExportError::UnsupportedProvider("digitalocean".to_string())
        );
    }

    #[test]
    fn test_multiple_blocks_rejected() {
        let input = attrs(json!({
            "cloud_provider": "ibm",
            "type": "CLOUD_EXPORT_TYPE_KENTIK_MANAGED",
            "ibm": [{ "bucket": "a" }, { "bucket": "b" }],
        }));
        assert_eq!(
            from_external(&input).unwrap_err(),
            CloudExportError::MultipleProviderConfigurations {
                provider: CloudProvider::Ibm,
                count: 2
            }
        );
    }

    #[test]
    fn test_missing_inner_field() {
        let input = attrs(json!({
            "cloud_provider": "gce",
            "type": "CLOUD_EXPORT_TYPE_KENTIK_MANAGED",
            "gce": [{ "project": "proj" }],
        }));
        assert_eq!(
            from_external(&input).unwrap_err(),
            CloudExportError::MissingAttribute("subscription".to_string())
        );
    }

    #[test]
    fn test_unspecified_export_type_passes_through() {
        let input = attrs(json!({
            "cloud_provider": "ibm",
            "type": "CLOUD_EXPORT_TYPE_UNSPECIFIED",
            "ibm": [{ "bucket": "a" }],
        }));

        let export = from_external(&input).unwrap();
        assert_eq!(
            export.export_type,
            CloudExportType::Other("CLOUD_EXPORT_TYPE_UNSPECIFIED".to_string())
        );
        assert_eq!(to_external(&export)["type"], "CLOUD_EXPORT_TYPE_UNSPECIFIED");
    }

    #[test]
    fn test_only_selected_block_is_read() {
        let input = attrs(json!({
            "cloud_provider": "ibm",
            "type": "CLOUD_EXPORT_TYPE_KENTIK_MANAGED",
            "ibm": [{ "bucket": "a" }],
            "aws": [{ "bucket": "ignored" }],
        }));

        let export = from_external(&input).unwrap();
        assert_eq!(export.cloud_provider(), CloudProvider::Ibm);
        let out = to_external(&export);
        assert!(!out.contains_key("aws"));
    }
}
