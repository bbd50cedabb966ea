//! Schema descriptor
//!
//! One logical record shape serves three operations. Whether a field is
//! computed by the server, required from the user or optional is decided
//! per field by a [`FieldPolicy`] and resolved against the [`SchemaMode`].

use crate::model::CloudProvider;
use serde::Serialize;
use std::collections::BTreeMap;

/// Attribute name of the provider discriminator
pub const CLOUD_PROVIDER: &str = "cloud_provider";

/// Attribute name of the server-reported status block
pub const CURRENT_STATUS: &str = "current_status";

/// Attribute name of the list data source's element list
pub const ITEMS: &str = "items";

/// Operation a schema is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaMode {
    /// Read one item: the user supplies `id`, the server supplies the rest
    ReadSingle,
    /// Read all items: everything is supplied by the server
    ReadList,
    /// Create an item: the user supplies the configuration
    Create,
}

/// Who supplies an attribute's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Computed,
    Required,
    Optional,
}

/// Value type of an attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    /// Nested objects encoded as a list
    List {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_items: Option<usize>,
        element: FieldMap,
    },
}

/// Description of one attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(flatten)]
    pub attribute_type: AttributeType,
    pub access: Access,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    /// Environment variable consulted when the attribute is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_default: Option<String>,
}

impl Attribute {
    pub fn new(attribute_type: AttributeType, access: Access) -> Self {
        Self {
            attribute_type,
            access,
            description: None,
            sensitive: false,
            env_default: None,
        }
    }

    pub fn string(access: Access) -> Self {
        Self::new(AttributeType::String, access)
    }

    pub fn bool(access: Access) -> Self {
        Self::new(AttributeType::Bool, access)
    }

    /// A single nested object (list capped at one element)
    pub fn block(access: Access, element: FieldMap) -> Self {
        Self::new(
            AttributeType::List {
                max_items: Some(1),
                element,
            },
            access,
        )
    }

    /// An unbounded list of nested objects
    pub fn list(access: Access, element: FieldMap) -> Self {
        Self::new(
            AttributeType::List {
                max_items: None,
                element,
            },
            access,
        )
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_env_default(mut self, var: impl Into<String>) -> Self {
        self.env_default = Some(var.into());
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn is_computed(&self) -> bool {
        self.access == Access::Computed
    }

    pub fn is_required(&self) -> bool {
        self.access == Access::Required
    }

    pub fn is_optional(&self) -> bool {
        self.access == Access::Optional
    }

    /// Element schema of a list attribute
    pub fn element(&self) -> Option<&FieldMap> {
        match &self.attribute_type {
            AttributeType::List { element, .. } => Some(element),
            _ => None,
        }
    }
}

/// Attribute descriptions keyed by attribute name
pub type FieldMap = BTreeMap<String, Attribute>;

/// Access rule of a field across modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldPolicy {
    /// Lookup key on single reads, assigned by the server otherwise
    LookupKey,
    /// Supplied by the user on create
    UserRequired,
    /// May be supplied by the user on create
    UserOptional,
    /// Always assigned by the server
    ServerOnly,
}

impl FieldPolicy {
    fn access(self, mode: SchemaMode) -> Access {
        match (self, mode) {
            (FieldPolicy::LookupKey, SchemaMode::ReadSingle) => Access::Required,
            (FieldPolicy::UserRequired, SchemaMode::Create) => Access::Required,
            (FieldPolicy::UserOptional, SchemaMode::Create) => Access::Optional,
            _ => Access::Computed,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    String,
    Bool,
}

struct Field {
    name: &'static str,
    kind: Kind,
    policy: FieldPolicy,
    description: Option<&'static str>,
}

const fn field(name: &'static str, kind: Kind, policy: FieldPolicy) -> Field {
    Field {
        name,
        kind,
        policy,
        description: None,
    }
}

const SCALAR_FIELDS: &[Field] = &[
    field("id", Kind::String, FieldPolicy::LookupKey),
    Field {
        name: "type",
        kind: Kind::String,
        policy: FieldPolicy::UserRequired,
        description: Some(
            "One of [CLOUD_EXPORT_TYPE_KENTIK_MANAGED, CLOUD_EXPORT_TYPE_CUSTOMER_MANAGED]",
        ),
    },
    field("enabled", Kind::Bool, FieldPolicy::UserOptional),
    field("name", Kind::String, FieldPolicy::UserRequired),
    field("description", Kind::String, FieldPolicy::UserOptional),
    field("api_root", Kind::String, FieldPolicy::ServerOnly),
    field("flow_dest", Kind::String, FieldPolicy::ServerOnly),
    field("plan_id", Kind::String, FieldPolicy::UserRequired),
    Field {
        name: CLOUD_PROVIDER,
        kind: Kind::String,
        policy: FieldPolicy::UserRequired,
        description: Some("One of [aws, azure, ibm, gce, bgp]"),
    },
];

const AWS_FIELDS: &[(&str, Kind)] = &[
    ("bucket", Kind::String),
    ("iam_role_arn", Kind::String),
    ("region", Kind::String),
    ("delete_after_read", Kind::Bool),
    ("multiple_buckets", Kind::Bool),
];

const AZURE_FIELDS: &[(&str, Kind)] = &[
    ("location", Kind::String),
    ("resource_group", Kind::String),
    ("storage_account", Kind::String),
    ("subscription_id", Kind::String),
    ("security_principal_enabled", Kind::Bool),
];

const BGP_FIELDS: &[(&str, Kind)] = &[
    ("apply_bgp", Kind::Bool),
    ("use_bgp_device_id", Kind::String),
    ("device_bgp_type", Kind::String),
];

const GCE_FIELDS: &[(&str, Kind)] = &[("project", Kind::String), ("subscription", Kind::String)];

const IBM_FIELDS: &[(&str, Kind)] = &[("bucket", Kind::String)];

const STATUS_FIELDS: &[(&str, Kind)] = &[
    ("status", Kind::String),
    ("error_message", Kind::String),
    ("flow_found", Kind::Bool),
    ("api_access", Kind::Bool),
    ("storage_account_access", Kind::Bool),
];

fn provider_fields(provider: CloudProvider) -> &'static [(&'static str, Kind)] {
    match provider {
        CloudProvider::Aws => AWS_FIELDS,
        CloudProvider::Azure => AZURE_FIELDS,
        CloudProvider::Bgp => BGP_FIELDS,
        CloudProvider::Gce => GCE_FIELDS,
        CloudProvider::Ibm => IBM_FIELDS,
    }
}

fn scalar(kind: Kind, access: Access) -> Attribute {
    match kind {
        Kind::String => Attribute::string(access),
        Kind::Bool => Attribute::bool(access),
    }
}

fn nested(fields: &[(&str, Kind)], access: Access) -> FieldMap {
    fields
        .iter()
        .map(|(name, kind)| (name.to_string(), scalar(*kind, access)))
        .collect()
}

/// Describe a cloud export item for the given operation
pub fn describe(mode: SchemaMode) -> FieldMap {
    let mut fields: FieldMap = SCALAR_FIELDS
        .iter()
        .map(|f| {
            let mut attr = scalar(f.kind, f.policy.access(mode));
            if let Some(description) = f.description {
                attr = attr.with_description(description);
            }
            (f.name.to_string(), attr)
        })
        .collect();

    // The block itself is optional on create, its contents are not.
    let block_access = FieldPolicy::UserOptional.access(mode);
    let inner_access = FieldPolicy::UserRequired.access(mode);
    for provider in CloudProvider::ALL {
        fields.insert(
            provider.as_str().to_string(),
            Attribute::block(block_access, nested(provider_fields(provider), inner_access)),
        );
    }

    fields.insert(
        CURRENT_STATUS.to_string(),
        Attribute::block(
            Access::Computed,
            nested(STATUS_FIELDS, FieldPolicy::ServerOnly.access(mode)),
        ),
    );

    fields
}

/// Describe the list data source: a computed list of items in read-list shape
pub fn describe_list() -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert(
        ITEMS.to_string(),
        Attribute::list(Access::Computed, describe(SchemaMode::ReadList)),
    );
    fields
}
