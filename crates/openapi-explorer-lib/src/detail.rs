//! Markdown-like report for a single operation.

use std::fmt::Write;

use indexmap::IndexMap;
use serde_json::Value;

use crate::document::{
    HttpMethod, MediaType, Operation, Parameter, RequestBody, Response, Schema, JSON_CONTENT_TYPE,
};

const FALLBACK_TITLE: &str = "API Details";
const NO_DESCRIPTION: &str = "No description";
const UNKNOWN_TYPE: &str = "unknown";

/// Render the detail report for `operation` found at `path`/`method`.
///
/// `shared` holds the path-level parameters; they are listed after the
/// operation's own parameters unless the operation redeclares the same
/// name and location.
pub fn render_operation(
    path: &str,
    method: HttpMethod,
    operation: &Operation,
    shared: &[Parameter],
) -> String {
    let mut buffer = String::new();

    let title = operation.summary.as_deref().unwrap_or(FALLBACK_TITLE);
    let _ = writeln!(buffer, "# {title}\n");
    let _ = writeln!(buffer, "**Path**: {path}");
    let _ = writeln!(buffer, "**Method**: {}", method.upper());

    if !operation.tags.is_empty() {
        let _ = writeln!(buffer, "**Tags**: {}", operation.tags.join(", "));
    }

    if let Some(description) = &operation.description {
        let _ = writeln!(buffer, "\n## Description\n{description}");
    }

    let parameters = effective_parameters(&operation.parameters, shared);
    if !parameters.is_empty() {
        render_parameters(&mut buffer, &parameters);
    }

    if let Some(json) = operation
        .request_body
        .as_ref()
        .and_then(RequestBody::json_content)
    {
        render_request_body(&mut buffer, json);
    }

    if let Some(responses) = operation.responses.as_ref().filter(|r| !r.is_empty()) {
        render_responses(&mut buffer, responses);
    }

    buffer
}

fn effective_parameters<'a>(own: &'a [Parameter], shared: &'a [Parameter]) -> Vec<&'a Parameter> {
    own.iter()
        .chain(
            shared
                .iter()
                .filter(|inherited| !own.iter().any(|p| p.same_slot(inherited))),
        )
        .collect()
}

fn render_parameters(buffer: &mut String, parameters: &[&Parameter]) {
    let _ = writeln!(buffer, "\n## Parameters");
    for param in parameters {
        let _ = writeln!(
            buffer,
            "- **{}** ({}) - {}: {}",
            param.name,
            param.location,
            requirement(param.required),
            param.description.as_deref().unwrap_or(NO_DESCRIPTION)
        );
        if let Some(schema) = &param.schema {
            let _ = writeln!(buffer, "  - Type: {}", type_label(schema));
            if let Some(values) = &schema.enum_values {
                let joined = values.iter().map(scalar_text).collect::<Vec<_>>().join(", ");
                let _ = writeln!(buffer, "  - Enum: {joined}");
            }
        }
    }
}

fn render_request_body(buffer: &mut String, json: &MediaType) {
    let _ = writeln!(buffer, "\n## Request Body");
    let _ = writeln!(buffer, "Content-Type: {JSON_CONTENT_TYPE}");
    if let Some(schema) = &json.schema {
        render_schema(buffer, schema, 3);
    }
}

fn render_responses(buffer: &mut String, responses: &IndexMap<String, Response>) {
    let _ = writeln!(buffer, "\n## Responses");
    for (code, response) in responses {
        let description = response.description.as_deref().unwrap_or(NO_DESCRIPTION);
        let _ = writeln!(buffer, "### {code} - {description}");

        let Some(json) = response.json_content() else {
            continue;
        };
        if let Some(schema) = &json.schema {
            render_schema(buffer, schema, 4);
        }
        if !json.examples.is_empty() {
            let _ = writeln!(buffer, "\n#### Examples");
            for (name, example) in &json.examples {
                let value = example.value.as_ref().unwrap_or(&Value::Null);
                let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
                let _ = writeln!(buffer, "**{name}**:\n```json\n{pretty}\n```");
            }
        }
    }
}

/// Schema heading at `level`, properties one level deeper.
fn render_schema(buffer: &mut String, schema: &Schema, level: usize) {
    let heading = "#".repeat(level);
    let _ = writeln!(buffer, "\n{heading} Schema");
    if let Some(title) = &schema.title {
        let _ = writeln!(buffer, "Title: {title}");
    }

    if schema.properties.is_empty() {
        return;
    }
    let _ = writeln!(buffer, "\n{heading}# Properties");
    for (name, property) in &schema.properties {
        let _ = writeln!(
            buffer,
            "- **{name}** ({}): {}",
            requirement(schema.requires(name)),
            property.description.as_deref().unwrap_or(NO_DESCRIPTION)
        );
        let _ = writeln!(buffer, "  - Type: {}", type_label(property));
        if let Some(example) = &property.example {
            let _ = writeln!(buffer, "  - Example: {}", scalar_text(example));
        }
    }
}

fn requirement(required: bool) -> &'static str {
    if required {
        "required"
    } else {
        "optional"
    }
}

fn type_label(schema: &Schema) -> String {
    schema
        .schema_type
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string())
}

/// Strings print verbatim; everything else as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PathItem;
    use serde_json::json;

    fn operation(value: Value) -> Operation {
        serde_json::from_value(value).expect("valid operation")
    }

    #[test]
    fn minimal_operation_uses_fallback_title() {
        let text = render_operation("/ping", HttpMethod::Head, &Operation::default(), &[]);
        assert_eq!(text, "# API Details\n\n**Path**: /ping\n**Method**: HEAD\n");
    }

    #[test]
    fn renders_header_tags_and_description() {
        let op = operation(json!({
            "summary": "List users",
            "description": "Returns every user.",
            "tags": ["users", "admin"]
        }));
        let text = render_operation("/v1/users", HttpMethod::Get, &op, &[]);
        assert_eq!(
            text,
            "# List users\n\n**Path**: /v1/users\n**Method**: GET\n**Tags**: users, admin\n\n## Description\nReturns every user.\n"
        );
    }

    #[test]
    fn renders_parameters_with_type_and_enum() {
        let op = operation(json!({
            "parameters": [
                {
                    "name": "status",
                    "in": "query",
                    "required": true,
                    "description": "Filter by status",
                    "schema": { "type": "string", "enum": ["active", "disabled", 3] }
                },
                { "name": "trace", "in": "header", "schema": {} },
                { "name": "raw", "in": "cookie" }
            ]
        }));
        let text = render_operation("/v1/users", HttpMethod::Get, &op, &[]);
        assert!(text.contains(
            "\n## Parameters\n- **status** (query) - required: Filter by status\n  - Type: string\n  - Enum: active, disabled, 3\n"
        ));
        assert!(text.contains("- **trace** (header) - optional: No description\n  - Type: unknown\n"));
        assert!(text.ends_with("- **raw** (cookie) - optional: No description\n"));
    }

    #[test]
    fn merges_shared_parameters_after_own() {
        let op = operation(json!({
            "parameters": [{ "name": "tenant", "in": "header", "description": "override" }]
        }));
        let item = PathItem::new()
            .with_operation(HttpMethod::Get, op.clone())
            .with_parameter(Parameter {
                name: "tenant".into(),
                location: "header".into(),
                description: Some("shared".into()),
                ..Parameter::default()
            })
            .with_parameter(Parameter {
                name: "id".into(),
                location: "path".into(),
                required: true,
                ..Parameter::default()
            });
        let text = render_operation("/v1/users/{id}", HttpMethod::Get, &op, item.parameters());
        assert!(text.contains("- **tenant** (header) - optional: override\n"));
        assert!(!text.contains("shared"));
        assert!(text.contains("- **id** (path) - required: No description\n"));
    }

    #[test]
    fn renders_request_body_properties_in_order() {
        let op = operation(json!({
            "requestBody": {
                "content": {
                    "application/json": {
                        "schema": {
                            "title": "Token request",
                            "properties": {
                                "refreshToken": {
                                    "type": "string",
                                    "description": "Refresh token",
                                    "example": "0d880675"
                                },
                                "scope": { "type": "object", "example": { "b": 1, "a": [true] } },
                                "ttl": { "example": 30 }
                            },
                            "required": ["refreshToken"]
                        }
                    }
                }
            }
        }));
        let text = render_operation("/v1/auth/token", HttpMethod::Post, &op, &[]);
        let expected = "\n## Request Body\nContent-Type: application/json\n\n### Schema\nTitle: Token request\n\n#### Properties\n\
- **refreshToken** (required): Refresh token\n  - Type: string\n  - Example: 0d880675\n\
- **scope** (optional): No description\n  - Type: object\n  - Example: {\"b\":1,\"a\":[true]}\n\
- **ttl** (optional): No description\n  - Type: unknown\n  - Example: 30\n";
        assert!(text.ends_with(expected), "unexpected report:\n{text}");
    }

    #[test]
    fn skips_request_body_without_json_content() {
        let op = operation(json!({
            "requestBody": { "content": { "text/plain": { "schema": { "type": "string" } } } }
        }));
        let text = render_operation("/v1/upload", HttpMethod::Put, &op, &[]);
        assert!(!text.contains("Request Body"));
    }

    #[test]
    fn renders_responses_with_schema_and_examples() {
        let op = operation(json!({
            "responses": {
                "200": {
                    "description": "OK",
                    "content": {
                        "application/json": {
                            "schema": {
                                "title": "Token response",
                                "properties": { "accessToken": { "type": "string" } },
                                "required": ["accessToken"]
                            },
                            "examples": {
                                "normal": { "value": { "accessToken": "abc", "expiresIn": 3600 } }
                            }
                        }
                    }
                },
                "404": {}
            }
        }));
        let text = render_operation("/v1/auth/token", HttpMethod::Post, &op, &[]);
        let expected = "\n## Responses\n### 200 - OK\n\n#### Schema\nTitle: Token response\n\n##### Properties\n\
- **accessToken** (required): No description\n  - Type: string\n\
\n#### Examples\n**normal**:\n```json\n{\n  \"accessToken\": \"abc\",\n  \"expiresIn\": 3600\n}\n```\n\
### 404 - No description\n";
        assert!(text.ends_with(expected), "unexpected report:\n{text}");
    }

    #[test]
    fn empty_responses_are_omitted() {
        let op = operation(json!({ "responses": {} }));
        let text = render_operation("/v1/users", HttpMethod::Get, &op, &[]);
        assert!(!text.contains("Responses"));
    }
}
