#![deny(missing_docs)]

//! # Response Resolution
//!
//! Turns an operation's declared responses into its response map, and its
//! request payload into request bodies.
//!
//! Status policy, per declaration:
//! - symbol only: the symbol.
//! - known code: the code's symbol. A different explicit symbol is an error,
//!   otherwise the code is flagged with a warning recommending the symbol.
//! - unknown code: a non-standard status carrying just the code.
//!
//! Conflicts never abort resolution; the tie-break above always yields a
//! response entry. Two declarations resolving to the same status are an
//! error and the later one is documented.

use crate::config::GeneratorConfig;
use crate::declarations::{HeaderDeclaration, OperationDeclaration, ResponseDeclaration};
use crate::diagnostics::Diagnostics;
use crate::document::{Document, DocumentGenerator};
use crate::error::AppResult;
use crate::resources::operation::{Body, Operation, Response, ResponseHeader};
use crate::responses::media::{is_problem_family, resolve_media_types};
use crate::responses::status::{ResolvedStatus, StatusSymbol};
use crate::types::capabilities::Introspector;
use crate::types::classifier::classify;
use crate::types::descriptor::TypeDescriptor;
use crate::types::registry::TypeRegistry;
use indexmap::IndexMap;

/// Description of the synthetic response of operations without declarations.
pub const SUCCESS_DESCRIPTION: &str = "Success";

const TITLE_SEPARATOR: &str = "\n\n";

/// Resolves responses and bodies against a registry.
pub struct ResponseResolver<'a> {
    registry: &'a TypeRegistry,
    config: &'a GeneratorConfig,
}

impl<'a> ResponseResolver<'a> {
    /// Creates a resolver.
    pub fn new(registry: &'a TypeRegistry, config: &'a GeneratorConfig) -> Self {
        Self { registry, config }
    }

    /// Populates `operation` with its request bodies and responses.
    pub fn resolve(
        &self,
        declaration: &OperationDeclaration,
        operation: &mut Operation,
        origin: &str,
        diagnostics: &mut Diagnostics,
    ) -> AppResult<()> {
        if let Some(request) = self.non_void(declaration.request_body.as_deref())? {
            let bodies = self.materialize(request, &declaration.consumes, origin, diagnostics)?;
            operation.request_bodies.extend(bodies);
        }

        if declaration.responses.is_empty() {
            let response = self.success_response(declaration, origin, diagnostics)?;
            operation.responses.insert(response.status.key(), response);
            return Ok(());
        }

        for response in &declaration.responses {
            let resolved = self.resolve_response(response, declaration, origin, diagnostics)?;
            tracing::debug!(
                origin,
                status = resolved.status.code(),
                bodies = resolved.bodies.len(),
                "resolved response"
            );
            let key = resolved.status.key();
            if operation.responses.contains_key(&key) {
                diagnostics.error(origin, format!("Duplicate response {} for {}", key, origin));
            }
            operation.responses.insert(key, resolved);
        }
        Ok(())
    }

    fn success_response(
        &self,
        declaration: &OperationDeclaration,
        origin: &str,
        diagnostics: &mut Diagnostics,
    ) -> AppResult<Response> {
        let bodies = match self.non_void(declaration.result.as_deref())? {
            Some(ty) => self.materialize(ty, &declaration.produces, origin, diagnostics)?,
            None => IndexMap::new(),
        };
        Ok(Response {
            status: ResolvedStatus::Known(self.config.default_status),
            description: Some(SUCCESS_DESCRIPTION.to_string()),
            headers: IndexMap::new(),
            bodies,
        })
    }

    /// Resolves one declared response.
    pub fn resolve_response(
        &self,
        response: &ResponseDeclaration,
        operation: &OperationDeclaration,
        origin: &str,
        diagnostics: &mut Diagnostics,
    ) -> AppResult<Response> {
        let status = self.resolve_status(response, origin, diagnostics);
        let declared_body = self.non_void(response.body.as_deref())?;
        let body = match declared_body {
            Some(ty) => Some(ty),
            None => self.non_void(operation.result.as_deref())?,
        };

        let media_types = if response.media_types.is_empty() {
            &operation.produces
        } else {
            &response.media_types
        };
        let bodies = match body {
            Some(ty) => self.materialize(ty, media_types, origin, diagnostics)?,
            None => IndexMap::new(),
        };

        Ok(Response {
            status,
            description: describe(response, declared_body),
            headers: self.resolve_headers(&response.headers)?,
            bodies,
        })
    }

    /// Applies the status policy to one declaration.
    pub fn resolve_status(
        &self,
        response: &ResponseDeclaration,
        origin: &str,
        diagnostics: &mut Diagnostics,
    ) -> ResolvedStatus {
        let Some(code) = response.status_code else {
            return ResolvedStatus::Known(response.status.unwrap_or(self.config.default_status));
        };
        match StatusSymbol::from_code(code) {
            Some(mapped) => {
                match response.status {
                    Some(symbol) if symbol != mapped => diagnostics.error(
                        origin,
                        format!(
                            "Conflicting specification: status = {} but statusCode = {} ({})",
                            symbol, code, mapped
                        ),
                    ),
                    _ => diagnostics.warning(
                        origin,
                        format!("Use status = {} instead of statusCode = {}", mapped, code),
                    ),
                }
                ResolvedStatus::Known(mapped)
            }
            None => {
                diagnostics.note(origin, format!("Non-standard status code {}", code));
                ResolvedStatus::NonStandard(code)
            }
        }
    }

    /// Materializes headers, collapsing their types to scalars.
    pub fn resolve_headers(
        &self,
        headers: &[HeaderDeclaration],
    ) -> AppResult<IndexMap<String, ResponseHeader>> {
        let caps = Introspector::new(self.config);
        headers
            .iter()
            .map(|header| {
                let ty = self.registry.resolve(&header.type_name)?;
                Ok((
                    header.name.clone(),
                    ResponseHeader {
                        name: header.name.clone(),
                        description: header.description.clone(),
                        ty: classify(ty, &caps).scalar(),
                    },
                ))
            })
            .collect()
    }

    /// Materializes one payload type for every negotiated media type.
    ///
    /// A failed example or schema conversion is recorded as an error and
    /// leaves the corresponding document empty; other failures abort.
    pub fn materialize(
        &self,
        ty: &TypeDescriptor,
        declared_media_types: &[String],
        origin: &str,
        diagnostics: &mut Diagnostics,
    ) -> AppResult<IndexMap<String, Body>> {
        let problem = is_problem_family(ty, self.registry, self.config);
        let media_types = resolve_media_types(declared_media_types, self.config, problem);

        let schema = self.recover(
            DocumentGenerator::schema(self.registry, self.config).generate(ty),
            origin,
            diagnostics,
        )?;
        let example = self.recover(
            DocumentGenerator::example(self.registry, self.config).generate(ty),
            origin,
            diagnostics,
        )?;

        Ok(media_types
            .into_iter()
            .map(|media_type| {
                let body = Body {
                    media_type: media_type.clone(),
                    type_name: ty.name.clone(),
                    schema: schema.clone(),
                    example: example.clone(),
                };
                (media_type, body)
            })
            .collect())
    }

    fn recover(
        &self,
        generated: AppResult<Document>,
        origin: &str,
        diagnostics: &mut Diagnostics,
    ) -> AppResult<Option<Document>> {
        match generated {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.is_value_conversion() => {
                diagnostics.error(origin, err.to_string());
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn non_void(&self, type_name: Option<&str>) -> AppResult<Option<&'a TypeDescriptor>> {
        match type_name {
            None => Ok(None),
            Some(name) => {
                let ty = self.registry.resolve(name)?;
                Ok((!ty.is_void()).then_some(ty))
            }
        }
    }
}

/// Composes the description of a declared response.
///
/// An explicit title wins; otherwise the declared body type is turned into a
/// phrase (`UserNotFound` -> `User not found`).
pub fn describe(response: &ResponseDeclaration, body: Option<&TypeDescriptor>) -> Option<String> {
    let detail = response.detail.as_deref().filter(|d| !d.is_empty());
    if let Some(title) = response.title.as_deref().filter(|t| !t.is_empty()) {
        return Some(match detail {
            Some(detail) => format!("{}{}{}", title, TITLE_SEPARATOR, detail),
            None => title.to_string(),
        });
    }
    body.map(|ty| {
        let phrase = humanize(ty.simple_name());
        match detail {
            Some(detail) => format!("{}: {}", phrase, detail),
            None => phrase,
        }
    })
}

/// Splits a CamelCase name into a sentence; acronyms keep their case.
pub fn humanize(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        let boundary = c.is_uppercase()
            && i > 0
            && (chars[i - 1].is_lowercase()
                || chars[i - 1].is_ascii_digit()
                || chars.get(i + 1).is_some_and(|n| n.is_lowercase()) && chars[i - 1].is_uppercase());
        if (boundary || c == '_') && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        if c != '_' {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let acronym = word.len() > 1 && word.chars().all(|c| !c.is_lowercase());
            if i == 0 || acronym {
                word.clone()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
