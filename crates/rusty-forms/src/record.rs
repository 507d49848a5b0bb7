// File: src/record.rs
// Purpose: Records, record type descriptors, and the JSON-backed record

use crate::value::FieldValue;
use serde_json::{Map, Value};

/// Name and field list of a record type.
///
/// The registry checks every declared field against this list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    name: String,
    fields: Vec<String>,
}

impl RecordType {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// A structured value with named fields that the engine can validate.
pub trait Record {
    /// Name of the record type, used to find its registry.
    fn type_name(&self) -> &str;

    /// Current value of a field. `None` means the record has no such field,
    /// which the engine treats as null.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// A record type whose descriptor is known statically.
///
/// Implemented by [`impl_record!`](crate::impl_record) for plain structs.
pub trait RecordSchema: Record {
    fn record_type() -> RecordType;
}

/// Implements [`Record`] and [`RecordSchema`] for a struct with named fields.
///
/// Each listed field must be `Clone` and convert into [`FieldValue`]. The
/// record type is named after the struct unless a name is given with `as`.
/// Two structs sharing a name in different modules need distinct names to
/// register side by side.
///
/// ```
/// use rusty_forms::{impl_record, Record, RecordSchema, FieldValue};
///
/// struct Login {
///     username: String,
///     remember_me: bool,
/// }
///
/// impl_record!(Login { username, remember_me });
///
/// let login = Login { username: "alice".into(), remember_me: true };
/// assert_eq!(login.type_name(), "Login");
/// assert_eq!(login.field("remember_me"), Some(FieldValue::Bool(true)));
/// assert!(Login::record_type().has_field("username"));
///
/// mod admin {
///     pub struct Login {
///         pub username: String,
///     }
/// }
///
/// impl_record!(admin::Login as "admin::Login" { username });
/// assert_eq!(admin::Login::record_type().name(), "admin::Login");
/// ```
#[macro_export]
macro_rules! impl_record {
    (@impl $ty:path, $name:expr, $($field:ident),*) => {
        impl $crate::Record for $ty {
            fn type_name(&self) -> &str {
                $name
            }

            fn field(&self, name: &str) -> ::std::option::Option<$crate::FieldValue> {
                match name {
                    $(
                        stringify!($field) => ::std::option::Option::Some(
                            $crate::FieldValue::from(::std::clone::Clone::clone(&self.$field)),
                        ),
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl $crate::RecordSchema for $ty {
            fn record_type() -> $crate::RecordType {
                $crate::RecordType::new($name, [$(stringify!($field)),*])
            }
        }
    };
    ($ty:ident { $($field:ident),* $(,)? }) => {
        $crate::impl_record!(@impl $ty, stringify!($ty), $($field),*);
    };
    ($ty:path as $name:literal { $($field:ident),* $(,)? }) => {
        $crate::impl_record!(@impl $ty, $name, $($field),*);
    };
}

/// A record backed by a JSON object, for payloads that have no Rust struct.
#[derive(Debug, Clone)]
pub struct JsonRecord {
    type_name: String,
    fields: Map<String, Value>,
}

impl JsonRecord {
    pub fn new(type_name: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
        }
    }

    /// Wrap a JSON value. Returns `None` unless the value is an object.
    pub fn from_value(type_name: impl Into<String>, value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(type_name, fields)),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Record for JsonRecord {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).map(FieldValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone)]
    struct Profile {
        nickname: Option<String>,
        age: u32,
        tags: Vec<String>,
    }

    impl_record!(Profile { nickname, age, tags });

    #[test]
    fn test_macro_record_fields() {
        let profile = Profile {
            nickname: None,
            age: 30,
            tags: vec!["a".to_string()],
        };

        assert_eq!(profile.type_name(), "Profile");
        assert_eq!(profile.field("nickname"), Some(FieldValue::Null));
        assert_eq!(profile.field("age"), Some(FieldValue::Int(30)));
        assert_eq!(
            profile.field("tags"),
            Some(FieldValue::List(vec![FieldValue::from("a")]))
        );
        assert_eq!(profile.field("missing"), None);
    }

    #[test]
    fn test_macro_record_type() {
        let ty = Profile::record_type();
        assert_eq!(ty.name(), "Profile");
        assert_eq!(ty.fields(), ["nickname", "age", "tags"]);
    }

    mod admin {
        #[derive(Clone)]
        pub struct Profile {
            pub nickname: Option<String>,
        }
    }

    impl_record!(admin::Profile as "admin::Profile" { nickname });

    #[test]
    fn test_explicit_type_name_keeps_same_named_structs_apart() {
        let admin = admin::Profile { nickname: None };

        assert_eq!(admin.type_name(), "admin::Profile");
        assert_eq!(admin::Profile::record_type().name(), "admin::Profile");
        assert_eq!(Profile::record_type().name(), "Profile");
    }

    #[test]
    fn test_json_record() {
        let record = JsonRecord::from_value("User", json!({"username": "ab", "password": null}))
            .expect("object payload");

        assert_eq!(record.type_name(), "User");
        assert_eq!(record.field("username"), Some(FieldValue::from("ab")));
        assert_eq!(record.field("password"), Some(FieldValue::Null));
        assert_eq!(record.field("email"), None);
    }

    #[test]
    fn test_json_record_nested_object() {
        let record = JsonRecord::from_value("User", json!({"username": {"x": 1}})).unwrap();

        assert!(matches!(record.field("username"), Some(FieldValue::Object(_))));
    }

    #[test]
    fn test_json_record_rejects_non_objects() {
        assert!(JsonRecord::from_value("User", json!([1, 2])).is_none());
    }
}
