#![deny(missing_docs)]

//! # Type Descriptors
//!
//! Read-only views of declared types, supplied by whatever enumerates the
//! endpoints. Types reference each other by qualified name through the
//! [`TypeRegistry`](super::registry::TypeRegistry), which keeps cyclic
//! object graphs representable.

use serde::{Deserialize, Serialize};

/// Declared shape of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// `true`/`false`.
    Boolean,
    /// Any integral width.
    Integer,
    /// Any floating point width.
    Floating,
    /// Text.
    String,
    /// Enumeration of named literals.
    Enum,
    /// Fixed element type sequence (`T[]`).
    Array,
    /// Generic container (`Vec<T>`, `Map<K, V>`, ...).
    Collection,
    /// No value (`()`).
    Void,
    /// Raw or wildcard generic type with no usable shape.
    Wildcard,
    /// Anything with declared fields.
    #[default]
    Object,
}

/// Receiver of a declared method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Receiver {
    /// Called on a value (`&self`).
    #[default]
    Instance,
    /// Associated function.
    Static,
}

/// A declared method, as far as wrapper detection cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name (e.g. `to_string`, `from_str`).
    pub name: String,
    /// Instance method or associated function.
    #[serde(default)]
    pub receiver: Receiver,
    /// Qualified names of parameter types, receiver excluded.
    #[serde(default)]
    pub params: Vec<String>,
    /// Qualified name of the return type, `None` for `()`.
    #[serde(default)]
    pub returns: Option<String>,
    /// Whether the method is publicly visible.
    #[serde(default = "default_true")]
    pub public: bool,
    /// True when the method is only inherited from the universal base type.
    #[serde(default)]
    pub inherited: bool,
}

impl MethodDescriptor {
    /// A public, non-inherited instance method.
    pub fn instance(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: Receiver::Instance,
            params: Vec::new(),
            returns: Some(returns.into()),
            public: true,
            inherited: false,
        }
    }

    /// A public associated function.
    pub fn factory(
        name: impl Into<String>,
        params: Vec<String>,
        returns: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            receiver: Receiver::Static,
            params,
            returns: Some(returns.into()),
            public: true,
            inherited: false,
        }
    }

    /// Marks the method as inherited from the universal base type.
    pub fn inherited(mut self) -> Self {
        self.inherited = true;
        self
    }
}

/// A declared field of an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Serialized field name.
    pub name: String,
    /// Qualified name of the value type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Static fields are not part of instances.
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Transient fields are never serialized.
    #[serde(default, rename = "transient")]
    pub is_transient: bool,
    /// Explicit example value, verbatim.
    #[serde(default)]
    pub example: Option<String>,
    /// Human readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit JSON Schema override, as JSON text.
    #[serde(default)]
    pub schema: Option<String>,
}

impl FieldDescriptor {
    /// Creates a plain field.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_static: false,
            is_transient: false,
            example: None,
            description: None,
            schema: None,
        }
    }

    /// Sets an explicit example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Sets a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a schema override.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Marks the field static.
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Marks the field transient.
    pub fn as_transient(mut self) -> Self {
        self.is_transient = true;
        self
    }

    /// Whether the field takes part in instance serialization.
    pub fn is_serialized(&self) -> bool {
        !self.is_static && !self.is_transient
    }
}

/// Opaque description of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully qualified name, unique within a registry.
    pub name: String,
    /// Declared shape.
    #[serde(default)]
    pub kind: TypeKind,
    /// Element type of arrays.
    #[serde(default)]
    pub element: Option<String>,
    /// Type arguments of generic containers.
    #[serde(default)]
    pub type_args: Vec<String>,
    /// Declared fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Enumeration literals, in declaration order.
    #[serde(default)]
    pub enum_values: Vec<String>,
    /// Declared methods relevant for wrapper detection.
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Declared to serialize as a plain string.
    #[serde(default)]
    pub serialize_as_string: bool,
    /// Qualified names of supertypes and implemented traits.
    #[serde(default)]
    pub supertypes: Vec<String>,
}

impl TypeDescriptor {
    /// Creates a descriptor of the given shape with nothing else declared.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            element: None,
            type_args: Vec::new(),
            fields: Vec::new(),
            enum_values: Vec::new(),
            methods: Vec::new(),
            serialize_as_string: false,
            supertypes: Vec::new(),
        }
    }

    /// An object type with the given fields.
    pub fn object(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        let mut ty = Self::new(name, TypeKind::Object);
        ty.fields = fields;
        ty
    }

    /// An enumeration with the given literals.
    pub fn enumeration(name: impl Into<String>, values: &[&str]) -> Self {
        let mut ty = Self::new(name, TypeKind::Enum);
        ty.enum_values = values.iter().map(|v| v.to_string()).collect();
        ty
    }

    /// An array of `element`, named `element[]`.
    pub fn array_of(element: impl Into<String>) -> Self {
        let element = element.into();
        let mut ty = Self::new(format!("{}[]", element), TypeKind::Array);
        ty.element = Some(element);
        ty
    }

    /// A generic container with the given type arguments.
    pub fn collection(name: impl Into<String>, type_args: &[&str]) -> Self {
        let mut ty = Self::new(name, TypeKind::Collection);
        ty.type_args = type_args.iter().map(|a| a.to_string()).collect();
        ty
    }

    /// Adds a declared method.
    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds a supertype.
    pub fn with_supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    /// Marks the type as serialized through its string form.
    pub fn serialized_as_string(mut self) -> Self {
        self.serialize_as_string = true;
        self
    }

    /// Fields that take part in serialization, in declaration order.
    pub fn declared_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_serialized())
    }

    /// Element type of an array, or the single type argument of a collection.
    pub fn element_type(&self) -> Option<&str> {
        match self.kind {
            TypeKind::Array => self.element.as_deref(),
            TypeKind::Collection if self.type_args.len() == 1 => {
                self.type_args.first().map(String::as_str)
            }
            _ => None,
        }
    }

    /// Last path component of the qualified name, generic arguments removed.
    ///
    /// `crate::model::UserNotFound` -> `UserNotFound`
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    /// Whether the type documents no value at all.
    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Void
    }

    /// Looks up a method by name and receiver.
    pub fn find_methods<'a>(
        &'a self,
        receiver: Receiver,
    ) -> impl Iterator<Item = &'a MethodDescriptor> + 'a {
        self.methods.iter().filter(move |m| m.receiver == receiver)
    }
}

/// Last path component of a qualified name, generic arguments removed.
pub fn simple_name(qualified: &str) -> &str {
    let base = qualified.split('<').next().unwrap_or(qualified);
    base.rsplit(|c| c == ':' || c == '.')
        .find(|s| !s.is_empty())
        .unwrap_or(base)
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_fields_skip_static_and_transient() {
        let ty = TypeDescriptor::object(
            "model::User",
            vec![
                FieldDescriptor::new("id", "i64"),
                FieldDescriptor::new("COUNT", "i64").as_static(),
                FieldDescriptor::new("cache", "String").as_transient(),
                FieldDescriptor::new("name", "String"),
            ],
        );
        let names: Vec<_> = ty.declared_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("crate::model::UserNotFound"), "UserNotFound");
        assert_eq!(simple_name("com.example.Problem"), "Problem");
        assert_eq!(simple_name("Vec<model::User>"), "Vec");
        assert_eq!(simple_name("String"), "String");
    }

    #[test]
    fn test_element_type() {
        assert_eq!(TypeDescriptor::array_of("User").element_type(), Some("User"));
        assert_eq!(
            TypeDescriptor::collection("Vec<User>", &["User"]).element_type(),
            Some("User")
        );
        assert_eq!(
            TypeDescriptor::collection("Map<String, User>", &["String", "User"]).element_type(),
            None
        );
    }

    #[test]
    fn test_deserialize_field_flags() {
        let json = r#"{"name": "secret", "type": "String", "transient": true}"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert!(field.is_transient);
        assert!(!field.is_serialized());
    }
}
