//! Opaque references to deploy-time values.
//!
//! ARNs, physical names and stream ARNs are only known once CloudFormation
//! creates a resource. Constructs hand out [`Reference`]s instead, which
//! serialize to the intrinsic functions CloudFormation resolves.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A CloudFormation intrinsic pointing at another resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// `{"Ref": "<logicalId>"}`.
    Ref {
        /// Logical id of the referenced resource.
        logical_id: String,
    },
    /// `{"Fn::GetAtt": ["<logicalId>", "<attribute>"]}`.
    GetAtt {
        /// Logical id of the referenced resource.
        logical_id: String,
        /// Attribute name, e.g. `Arn`.
        attribute: String,
    },
}

impl Reference {
    /// Reference the resource itself (its physical id).
    #[must_use]
    pub fn resource(logical_id: impl Into<String>) -> Self {
        Self::Ref {
            logical_id: logical_id.into(),
        }
    }

    /// Reference an attribute of the resource.
    #[must_use]
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }

    /// Logical id of the resource this reference points at.
    #[must_use]
    pub fn logical_id(&self) -> &str {
        match self {
            Self::Ref { logical_id } | Self::GetAtt { logical_id, .. } => logical_id,
        }
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Ref { logical_id } => map.serialize_entry("Ref", logical_id)?,
            Self::GetAtt {
                logical_id,
                attribute,
            } => map.serialize_entry("Fn::GetAtt", &[logical_id, attribute])?,
        }
        map.end()
    }
}

impl From<Reference> for serde_json::Value {
    fn from(reference: Reference) -> Self {
        match reference {
            Reference::Ref { logical_id } => serde_json::json!({ "Ref": logical_id }),
            Reference::GetAtt {
                logical_id,
                attribute,
            } => serde_json::json!({ "Fn::GetAtt": [logical_id, attribute] }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_ref() {
        let r = Reference::resource("UsersA1B2C3D4");
        let json = serde_json::to_string(&r).expect("serialize Ref");
        assert_eq!(json, r#"{"Ref":"UsersA1B2C3D4"}"#);
    }

    #[test]
    fn test_should_serialize_get_att() {
        let r = Reference::get_att("UsersA1B2C3D4", "StreamArn");
        let json = serde_json::to_string(&r).expect("serialize GetAtt");
        assert_eq!(json, r#"{"Fn::GetAtt":["UsersA1B2C3D4","StreamArn"]}"#);
        assert_eq!(r.logical_id(), "UsersA1B2C3D4");
    }

    #[test]
    fn test_should_convert_into_json_value() {
        let value: serde_json::Value = Reference::get_att("Users", "Arn").into();
        assert_eq!(value, serde_json::json!({ "Fn::GetAtt": ["Users", "Arn"] }));
    }
}
