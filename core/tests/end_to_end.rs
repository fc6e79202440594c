use apidoc_core::declarations::EndpointDeclaration;
use apidoc_core::resources::HttpMethod;
use apidoc_core::{
    ApiScanner, GeneratorConfig, ResourcePath, Severity, TypeDescriptor, TypeRegistry,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const TYPES: &str = r#"
- name: model::Item
  fields:
    - name: f
      type: String
- name: model::User
  fields:
    - name: id
      type: u64
    - name: email
      type: model::Email
      description: Primary address
    - name: role
      type: model::Role
    - name: homepage
      type: url::Url
    - name: tags
      type: Vec<String>
    - name: secret
      type: String
      transient: true
- name: model::Email
  methods:
    - name: to_string
      returns: String
    - name: parse
      receiver: static
      params: [String]
      returns: model::Email
- name: model::Role
  kind: enum
  enum_values: [ADMIN, GUEST]
- name: url::Url
- name: Vec<String>
  kind: collection
  type_args: [String]
- name: api::UserNotFound
  supertypes: [problem::Problem]
  fields:
    - name: detail
      type: String
"#;

fn registry() -> TypeRegistry {
    let types: Vec<TypeDescriptor> = serde_yaml::from_str(TYPES).unwrap();
    TypeRegistry::from_iter(types)
}

fn endpoint(yaml: &str) -> EndpointDeclaration {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_get_without_declared_responses() {
    let registry = registry();
    let config = GeneratorConfig::default();
    let mut scanner = ApiScanner::new(&registry, &config);
    scanner
        .add_endpoint(&endpoint(
            r#"
path: /items
operations:
  - method: GET
    result: model::Item
"#,
        ))
        .unwrap();
    let doc = scanner.finish();

    let node = doc.tree.get(&ResourcePath::of("/items")).unwrap();
    let op = &node.operations[&HttpMethod::Get];
    assert_eq!(op.responses.len(), 1);
    let response = op.response(200).unwrap();
    assert_eq!(response.bodies.len(), config.default_media_types.len());

    let body = &response.bodies["application/json"];
    assert_eq!(
        body.schema.as_ref().unwrap().to_json(),
        json!({
            "$schema": "http://json-schema.org/draft-04/schema#",
            "type": "object",
            "properties": {"f": {"type": "string"}}
        })
    );
    assert_eq!(body.example.as_ref().unwrap().to_json(), json!({"f": "foo"}));
    assert!(doc.diagnostics.is_empty());
}

#[test]
fn test_rich_object_documents() {
    let registry = registry();
    let config = GeneratorConfig::default();
    let mut scanner = ApiScanner::new(&registry, &config);
    scanner
        .add_endpoint(&endpoint(
            r#"
path: /users
operations:
  - method: GET
    path: /{id}
    result: model::User
"#,
        ))
        .unwrap();
    let doc = scanner.finish();

    let op = &doc.tree.get(&ResourcePath::of("/users/{id}")).unwrap().operations[&HttpMethod::Get];
    let body = &op.response(200).unwrap().bodies["application/json"];

    assert_eq!(
        body.example.as_ref().unwrap().to_json(),
        json!({
            "id": 12345,
            "email": "foo",
            "role": "ADMIN",
            "homepage": "https://example.com/foo",
            "tags": ["foo"]
        })
    );

    let schema = body.schema.as_ref().unwrap().to_json();
    assert_eq!(
        schema["properties"]["email"],
        json!({
            "type": "string",
            "id": "urn:jsonschema:model:Email",
            "description": "Primary address"
        })
    );
    assert_eq!(
        schema["properties"]["role"],
        json!({"type": "string", "enum": ["ADMIN", "GUEST"]})
    );
    assert_eq!(
        schema["properties"]["tags"],
        json!({"type": "array", "items": {"type": "string"}})
    );
    assert!(schema["properties"].get("secret").is_none());
}

#[test]
fn test_conflicting_status_still_documents_response() {
    let registry = registry();
    let config = GeneratorConfig::default();
    let mut scanner = ApiScanner::new(&registry, &config);
    scanner
        .add_endpoint(&endpoint(
            r#"
path: /users
produces: [application/json, application/xml]
operations:
  - method: POST
    result: model::User
    responses:
      - status: UNAUTHORIZED
        status_code: 201
      - status: NOT_FOUND
        body: api::UserNotFound
        title: Missing
        detail: The user does not exist
"#,
        ))
        .unwrap();
    let doc = scanner.finish();

    assert!(doc.diagnostics.has_errors());
    assert_eq!(
        doc.diagnostics.messages(Severity::Error),
        vec!["Conflicting specification: status = UNAUTHORIZED but statusCode = 201 (CREATED)"]
    );

    let op = &doc.tree.get(&ResourcePath::of("/users")).unwrap().operations[&HttpMethod::Post];
    let codes: Vec<_> = op.responses.keys().cloned().collect();
    assert_eq!(codes, vec!["201", "404"]);

    let created = op.response(201).unwrap();
    let media: Vec<_> = created.bodies.keys().cloned().collect();
    assert_eq!(media, vec!["application/json", "application/xml"]);

    let not_found = op.response(404).unwrap();
    assert_eq!(
        not_found.description.as_deref(),
        Some("Missing\n\nThe user does not exist")
    );
    let media: Vec<_> = not_found.bodies.keys().cloned().collect();
    assert_eq!(media, vec!["application/problem+json", "application/problem+xml"]);
}

#[test]
fn test_endpoints_merge_into_one_tree() {
    let registry = registry();
    let config = GeneratorConfig::default();
    let mut scanner = ApiScanner::new(&registry, &config);
    scanner
        .add_endpoint(&endpoint(
            r#"
path: /api/users
display_name: Users
operations:
  - method: GET
"#,
        ))
        .unwrap();
    scanner
        .add_endpoint(&endpoint(
            r#"
path: /api/items
display_name: Items
operations:
  - method: GET
  - method: GET
"#,
        ))
        .unwrap();
    let doc = scanner.finish();

    let api = doc.tree.roots().next().unwrap();
    assert_eq!(api.path(), "/api");
    let children: Vec<_> = doc
        .tree
        .children(api)
        .map(|n| n.display_name.clone().unwrap_or_default())
        .collect();
    assert_eq!(children, vec!["Users", "Items"]);
    assert_eq!(
        doc.diagnostics.messages(Severity::Error),
        vec!["Duplicate operation GET /api/items"]
    );
}
