//! Serializable snapshots of descriptors, for diagnostics.

use arcstr::ArcStr;
use serde::Serialize;

use super::{
    enums::EnumMapping,
    meta::{CallingConvention, DeprecationStatus, Field},
    model::Schema,
    object::Object,
    union::UnionObject,
};

/// Snapshot of a [`Field`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSummary {
    /// Field name.
    pub name: ArcStr,
    /// Type name of the field function.
    pub function: &'static str,
    /// Whether the non-nullable override is set.
    pub non_nullable: bool,
    /// Field description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<ArcStr>,
    /// Field deprecation status.
    pub deprecation: DeprecationStatus,
    /// Calling convention bound by the schema compiler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convention: Option<CallingConvention>,
}

impl FieldSummary {
    fn new(name: &ArcStr, field: &Field) -> Self {
        Self {
            name: name.clone(),
            function: field.func().type_name(),
            non_nullable: field.is_non_nullable(),
            description: field.description().cloned(),
            deprecation: field.deprecation_status().clone(),
            convention: field.func().convention(),
        }
    }
}

/// Snapshot of an [`Object`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    /// Display name, if set.
    pub name: Option<ArcStr>,
    /// Object description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<ArcStr>,
    /// Name of the described native type.
    pub native_type: &'static str,
    /// Ordinary fields, sorted by name.
    pub fields: Vec<FieldSummary>,
    /// Names of paginated fields, in registration order.
    pub paginated_fields: Vec<ArcStr>,
    /// Key field name.
    pub key: Option<ArcStr>,
}

/// Snapshot of a [`UnionObject`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionSummary {
    /// Union name.
    pub name: ArcStr,
    /// Name of the declared native type.
    pub native_type: &'static str,
}

/// Snapshot of an [`EnumMapping`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumSummary {
    /// Enum name.
    pub name: ArcStr,
    /// Name of the native value type.
    pub native_type: &'static str,
    /// Value names, in registration order.
    pub values: Vec<ArcStr>,
}

/// Snapshot of a whole [`Schema`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaSummary {
    /// Objects, in registration order.
    pub objects: Vec<ObjectSummary>,
    /// Unions, in declaration order.
    pub unions: Vec<UnionSummary>,
    /// Enums, in registration order.
    pub enums: Vec<EnumSummary>,
}

impl Object {
    /// Takes a serializable snapshot of this [`Object`].
    pub fn summary(&self) -> ObjectSummary {
        let mut fields = self
            .methods()
            .iter()
            .map(|(name, field)| FieldSummary::new(name, field))
            .collect::<Vec<_>>();
        fields.sort_by(|a, b| a.name.cmp(&b.name));

        ObjectSummary {
            name: self.name().cloned(),
            description: self.description().cloned(),
            native_type: self.native_type().type_name(),
            fields,
            paginated_fields: self
                .paginated_fields()
                .iter()
                .map(|p| p.name.clone())
                .collect(),
            key: self.key_field().cloned(),
        }
    }
}

impl UnionObject {
    /// Takes a serializable snapshot of this [`UnionObject`].
    pub fn summary(&self) -> UnionSummary {
        UnionSummary {
            name: self.name().clone(),
            native_type: self.native_type().type_name(),
        }
    }
}

impl EnumMapping {
    /// Takes a serializable snapshot of this [`EnumMapping`].
    pub fn summary(&self) -> EnumSummary {
        EnumSummary {
            name: self.name().clone(),
            native_type: self.native_type().type_name(),
            values: self.value_names().cloned().collect(),
        }
    }
}

impl Schema {
    /// Takes a serializable snapshot of this [`Schema`].
    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            objects: self.objects().map(Object::summary).collect(),
            unions: self.unions().map(UnionObject::summary).collect(),
            enums: self.enums().map(EnumMapping::summary).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use arcstr::ArcStr;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::schema::{
        meta::CallingConvention,
        model::Schema,
        object::Object,
        options::{deprecated, description, non_nullable},
    };

    struct Post;

    fn title(_: &Post) -> String {
        "Hello".into()
    }

    #[test]
    fn object_summary_sorts_fields() {
        let mut post = Object::new::<Post>().with_name("Post");
        post.field_func("title", title as fn(&Post) -> String);
        post.field_func_with(
            "body",
            |_: &Post| String::new(),
            [non_nullable(), description("Post body.")],
        );
        post.paginated_field_func("comments", |_: &Post| Vec::<String>::new());
        post.key("title");

        let summary = post.summary();
        let names = summary
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["body", "title"]);
        assert!(summary.fields[0].non_nullable);
        assert!(summary.fields[1].function.contains("Post"));
        assert_eq!(summary.paginated_fields, vec![ArcStr::from("comments")]);
        assert_eq!(summary.key.as_deref(), Some("title"));
    }

    #[test]
    fn serializes_to_json() {
        let mut schema = Schema::new();
        let mut query = schema.query();
        query.field_func_with("version", || "1.0", [deprecated(Some("use `info`"))]);
        query
            .field("version")
            .unwrap()
            .func()
            .bind(CallingConvention::new())
            .unwrap();
        schema.enum_type("Color", [("RED", 0_u8), ("BLUE", 1)]);

        let value = serde_json::to_value(schema.summary()).unwrap();
        assert_eq!(value["objects"][0]["name"], json!("Query"));

        let mut field = value["objects"][0]["fields"][0].clone();
        assert!(field.as_object_mut().unwrap().remove("function").is_some());
        assert_eq!(
            field,
            json!({
                "name": "version",
                "nonNullable": false,
                "deprecation": {"Deprecated": "use `info`"},
                "convention": {
                    "context": false,
                    "receiver": false,
                    "args": false,
                    "returns_error": false,
                },
            }),
        );
        assert_eq!(value["objects"][0]["paginatedFields"], json!([]));
        assert_eq!(value["objects"][0]["key"], json!(null));
        assert_eq!(value["enums"][0]["values"], json!(["RED", "BLUE"]));
        assert_eq!(value["unions"], json!([]));
    }
}
