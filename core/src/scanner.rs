#![deny(missing_docs)]

//! # API Scanner
//!
//! Entry point for drivers. Endpoint declarations go in one at a time; the
//! finished resource tree and the diagnostics of the run come out.
//!
//! The base path of every endpoint is (re)registered with replace semantics.
//! Operation paths are resolved get-or-create below it, so operations of
//! one endpoint accumulate on shared sub-resources.

use crate::config::GeneratorConfig;
use crate::declarations::{
    EndpointDeclaration, OperationDeclaration, ParameterDeclaration, ParameterLocation,
};
use crate::diagnostics::Diagnostics;
use crate::error::AppResult;
use crate::resources::operation::Parameter;
use crate::resources::path::ResourcePath;
use crate::resources::tree::{ResourceNode, ResourceTree};
use crate::responses::resolver::ResponseResolver;
use crate::types::capabilities::Introspector;
use crate::types::classifier::{classify, ScalarType};
use crate::types::registry::TypeRegistry;

/// Result of a run.
#[derive(Debug, Clone)]
pub struct ApiDocumentation {
    /// The resource hierarchy.
    pub tree: ResourceTree,
    /// Everything reported along the way.
    pub diagnostics: Diagnostics,
}

/// Accumulates endpoint declarations into a resource tree.
pub struct ApiScanner<'a> {
    registry: &'a TypeRegistry,
    config: &'a GeneratorConfig,
    tree: ResourceTree,
    diagnostics: Diagnostics,
}

impl<'a> ApiScanner<'a> {
    /// Creates a scanner over a populated registry.
    pub fn new(registry: &'a TypeRegistry, config: &'a GeneratorConfig) -> Self {
        Self {
            registry,
            config,
            tree: ResourceTree::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Registers one endpoint and all of its operations.
    ///
    /// Conflicts are recorded as diagnostics. Unknown type names abort.
    pub fn add_endpoint(&mut self, endpoint: &EndpointDeclaration) -> AppResult<()> {
        let base = ResourcePath::of(&endpoint.path);
        tracing::info!(path = %base, operations = endpoint.operations.len(), "adding endpoint");
        self.tree.set_resource(
            &base,
            ResourceNode::new(endpoint.display_name.clone(), endpoint.description.clone()),
        );

        for operation in &endpoint.operations {
            let declaration = inherit_media_types(operation, endpoint);
            self.add_operation(&base, &declaration)?;
        }
        Ok(())
    }

    fn add_operation(&mut self, base: &ResourcePath, declaration: &OperationDeclaration) -> AppResult<()> {
        let path = base.and(&declaration.path);
        let origin = format!("{} {}", declaration.method, path);
        let caps = Introspector::new(self.config);

        let mut resolved = Vec::with_capacity(declaration.parameters.len());
        for param in &declaration.parameters {
            let ty = self.registry.resolve(&param.type_name)?;
            resolved.push((param, to_parameter(param, classify(ty, &caps).scalar())));
        }

        self.tree.resolve(&path);
        let vars = path.vars();
        for (decl, param) in resolved.iter().filter(|(d, _)| d.location == ParameterLocation::Path) {
            match vars.iter().find(|v| v.name == decl.name) {
                Some(var) => {
                    if let Some(owner) = self.tree.get_mut_by_key(&var.owner) {
                        owner.uri_parameters.insert(
                            decl.name.clone(),
                            Parameter {
                                pattern: var.pattern.clone(),
                                ..param.clone()
                            },
                        );
                    }
                }
                None => self.diagnostics.warning(
                    &origin,
                    format!("Path parameter {} is not part of {}", decl.name, path),
                ),
            }
        }

        let node = self.tree.resolve(&path);
        let operation = node.declare_operation(declaration.method, &origin, &mut self.diagnostics);
        if declaration.display_name.is_some() {
            operation.display_name = declaration.display_name.clone();
        }
        if declaration.description.is_some() {
            operation.description = declaration.description.clone();
        }
        for (decl, param) in resolved {
            let target = match decl.location {
                ParameterLocation::Path => &mut operation.path_parameters,
                ParameterLocation::Query => &mut operation.query_parameters,
                ParameterLocation::Header => &mut operation.header_parameters,
            };
            target.insert(decl.name.clone(), param);
        }

        ResponseResolver::new(self.registry, self.config).resolve(
            declaration,
            operation,
            &origin,
            &mut self.diagnostics,
        )
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Finishes the run.
    pub fn finish(self) -> ApiDocumentation {
        tracing::info!(
            resources = self.tree.len(),
            diagnostics = self.diagnostics.len(),
            "scan finished"
        );
        ApiDocumentation {
            tree: self.tree,
            diagnostics: self.diagnostics,
        }
    }
}

fn inherit_media_types(
    operation: &OperationDeclaration,
    endpoint: &EndpointDeclaration,
) -> OperationDeclaration {
    let mut operation = operation.clone();
    if operation.consumes.is_empty() {
        operation.consumes = endpoint.consumes.clone();
    }
    if operation.produces.is_empty() {
        operation.produces = endpoint.produces.clone();
    }
    operation
}

fn to_parameter(decl: &ParameterDeclaration, ty: ScalarType) -> Parameter {
    Parameter {
        name: decl.name.clone(),
        ty,
        description: decl.description.clone(),
        default: decl.default.clone(),
        required: decl.location == ParameterLocation::Path || decl.required.unwrap_or(false),
        pattern: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::resources::operation::HttpMethod;
    use crate::types::descriptor::{FieldDescriptor, TypeDescriptor};

    fn registry() -> TypeRegistry {
        TypeRegistry::from_iter([TypeDescriptor::object(
            "model::User",
            vec![FieldDescriptor::new("name", "String")],
        )])
    }

    fn param(name: &str, location: ParameterLocation, ty: &str) -> ParameterDeclaration {
        ParameterDeclaration {
            name: name.into(),
            location,
            type_name: ty.into(),
            description: None,
            default: None,
            required: None,
        }
    }

    #[test]
    fn test_operations_share_sub_resources() {
        let registry = registry();
        let config = GeneratorConfig::default();
        let mut scanner = ApiScanner::new(&registry, &config);

        let mut get = OperationDeclaration::new(HttpMethod::Get);
        get.path = "/{id}".into();
        get.result = Some("model::User".into());
        let mut delete = OperationDeclaration::new(HttpMethod::Delete);
        delete.path = "/{id}".into();

        scanner
            .add_endpoint(&EndpointDeclaration {
                path: "/users".into(),
                display_name: Some("Users".into()),
                operations: vec![get, delete],
                ..EndpointDeclaration::default()
            })
            .unwrap();
        let doc = scanner.finish();

        let user = doc.tree.get(&ResourcePath::of("/users/{id}")).unwrap();
        let verbs: Vec<_> = user.operations.keys().copied().collect();
        assert_eq!(verbs, vec![HttpMethod::Get, HttpMethod::Delete]);
        assert!(doc.diagnostics.is_empty());
    }

    #[test]
    fn test_path_parameters_enrich_resource() {
        let registry = registry();
        let config = GeneratorConfig::default();
        let mut scanner = ApiScanner::new(&registry, &config);

        let mut get = OperationDeclaration::new(HttpMethod::Get);
        get.path = "/{id:[0-9]+}".into();
        get.parameters = vec![
            param("id", ParameterLocation::Path, "u64"),
            param("verbose", ParameterLocation::Query, "bool"),
            param("ghost", ParameterLocation::Path, "String"),
        ];
        scanner
            .add_endpoint(&EndpointDeclaration {
                path: "/items".into(),
                operations: vec![get],
                ..EndpointDeclaration::default()
            })
            .unwrap();
        let doc = scanner.finish();

        let node = doc.tree.get(&ResourcePath::of("/items/{id}")).unwrap();
        let id = &node.uri_parameters["id"];
        assert_eq!(id.ty, ScalarType::Integer);
        assert_eq!(id.pattern.as_deref(), Some("[0-9]+"));

        let op = &node.operations[&HttpMethod::Get];
        assert_eq!(op.query_parameters["verbose"].ty, ScalarType::Boolean);
        assert!(!op.query_parameters["verbose"].required);
        assert_eq!(
            doc.diagnostics.messages(Severity::Warning),
            vec!["Path parameter ghost is not part of /items/{id}"]
        );
    }

    #[test]
    fn test_endpoint_media_types_are_inherited() {
        let registry = registry();
        let config = GeneratorConfig::default();
        let mut scanner = ApiScanner::new(&registry, &config);

        let mut post = OperationDeclaration::new(HttpMethod::Post);
        post.request_body = Some("model::User".into());
        post.result = Some("model::User".into());
        scanner
            .add_endpoint(&EndpointDeclaration {
                path: "/users".into(),
                consumes: vec!["application/xml".into()],
                produces: vec!["application/yaml".into()],
                operations: vec![post],
                ..EndpointDeclaration::default()
            })
            .unwrap();
        let doc = scanner.finish();

        let op = &doc.tree.get(&ResourcePath::of("/users")).unwrap().operations[&HttpMethod::Post];
        assert!(op.request_bodies.contains_key("application/xml"));
        assert!(op.response(200).unwrap().bodies.contains_key("application/yaml"));
    }

    #[test]
    fn test_reregistered_endpoint_replaces_previous() {
        let registry = registry();
        let config = GeneratorConfig::default();
        let mut scanner = ApiScanner::new(&registry, &config);
        let endpoint = |name: &str| EndpointDeclaration {
            path: "/a".into(),
            display_name: Some(name.into()),
            operations: vec![OperationDeclaration::new(HttpMethod::Get)],
            ..EndpointDeclaration::default()
        };
        scanner.add_endpoint(&endpoint("first")).unwrap();
        scanner.add_endpoint(&endpoint("second")).unwrap();
        let doc = scanner.finish();

        let node = doc.tree.get(&ResourcePath::of("/a")).unwrap();
        assert_eq!(node.display_name.as_deref(), Some("second"));
        assert_eq!(node.operations.len(), 1);
        assert!(!doc.diagnostics.has_errors());
    }

    #[test]
    fn test_unknown_parameter_type_aborts() {
        let registry = registry();
        let config = GeneratorConfig::default();
        let mut scanner = ApiScanner::new(&registry, &config);
        let mut get = OperationDeclaration::new(HttpMethod::Get);
        get.parameters = vec![param("q", ParameterLocation::Query, "model::Missing")];
        let err = scanner
            .add_endpoint(&EndpointDeclaration {
                path: "/search".into(),
                operations: vec![get],
                ..EndpointDeclaration::default()
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Unresolved type: model::Missing");
    }
}
