//! Request rendering: one catalogue descriptor in, one Postman request item out.
//!
//! Rendering is a total function over descriptors. It never fails and never
//! consults anything outside the descriptor, so the same input always yields
//! byte-identical output.

use serde::Serialize;

use crate::catalog::{pretty_json, BodySpec, Endpoint, FormField};

/// Default test script attached to every request unless the descriptor
/// suppresses scripts entirely. Per-endpoint lines are appended after these.
pub const DEFAULT_TESTS: [&str; 9] = [
    "pm.test(\"Status code is 2xx\", function () {",
    "  pm.expect(pm.response.code).to.be.within(200, 299);",
    "});",
    "const contentType = pm.response.headers.get(\"Content-Type\") || \"\";",
    "if (contentType.includes(\"application/json\")) {",
    "  pm.test(\"Response is JSON\", function () {",
    "    pm.expect(pm.response.json()).to.be.an(\"object\");",
    "  });",
    "}",
];

/// A single `key: value` request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub key: &'static str,
    pub value: &'static str,
}

/// The `request` object of a collection item. Field order matches the
/// serialized document.
#[derive(Debug, Clone, Serialize)]
pub struct RequestSpec {
    pub method: String,
    pub url: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BodySpec>,
}

/// Embedded script hook, always a test script in this collection.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub listen: &'static str,
    pub script: Script,
}

#[derive(Debug, Clone, Serialize)]
pub struct Script {
    #[serde(rename = "type")]
    pub script_type: &'static str,
    pub exec: Vec<String>,
}

/// A leaf item in the collection tree: one named request, optionally with
/// a test-script event.
#[derive(Debug, Clone, Serialize)]
pub struct RequestItem {
    pub name: &'static str,
    pub request: RequestSpec,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
}

/// Render one descriptor into a request item.
pub fn render_request(endpoint: &Endpoint) -> RequestItem {
    let url = format!("{{{{baseUrl}}}}{}", endpoint.path);
    let header = build_headers(endpoint);
    let description = make_description(endpoint, &url, &header);

    RequestItem {
        name: endpoint.name,
        request: RequestSpec {
            method: endpoint.method.to_string(),
            url,
            description,
            header,
            body: endpoint.body.clone(),
        },
        event: build_event(endpoint),
    }
}

/// Authorization first when the endpoint needs a token, then Content-Type
/// when the request carries a raw JSON body. Nothing else.
fn build_headers(endpoint: &Endpoint) -> Vec<Header> {
    let mut headers = Vec::new();
    if endpoint.auth_required {
        headers.push(Header {
            key: "Authorization",
            value: "Bearer {{accessToken}}",
        });
    }
    if matches!(endpoint.body, Some(BodySpec::Raw { .. })) {
        headers.push(Header {
            key: "Content-Type",
            value: "application/json",
        });
    }
    headers
}

/// Human-readable summary embedded in each request. Section order is fixed:
/// notes, method, URL, headers, body, success example, error example.
fn make_description(endpoint: &Endpoint, url: &str, headers: &[Header]) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !endpoint.notes.is_empty() {
        lines.push("Notes:".to_string());
        for note in &endpoint.notes {
            lines.push(format!("- {note}"));
        }
        lines.push(String::new());
    }

    lines.push(format!("Method: {}", endpoint.method));
    lines.push(format!("URL: {url}"));

    if headers.is_empty() {
        lines.push("Headers: (none)".to_string());
    } else {
        lines.push("Headers:".to_string());
        for header in headers {
            lines.push(format!("- {}: {}", header.key, header.value));
        }
    }

    match &endpoint.body {
        Some(BodySpec::Raw { raw, .. }) => {
            lines.push("Body:".to_string());
            lines.push(raw.clone());
        }
        Some(BodySpec::FormData { formdata }) => {
            lines.push("Body:".to_string());
            lines.push("form-data:".to_string());
            for field in formdata {
                match field {
                    FormField::File { key, .. } => lines.push(format!("- {key}: <file>")),
                    FormField::Text { key, value } => lines.push(format!("- {key}: {value}")),
                }
            }
        }
        None => lines.push("Body: (none)".to_string()),
    }

    if let Some(success) = &endpoint.success {
        lines.push("Success Response Example:".to_string());
        lines.push(pretty_json(success));
    }

    if let Some(error) = &endpoint.error {
        lines.push("Error Response Example:".to_string());
        lines.push(pretty_json(error));
    }

    lines.join("\n")
}

fn build_event(endpoint: &Endpoint) -> Vec<Event> {
    if endpoint.skip_tests {
        return Vec::new();
    }
    let mut exec: Vec<String> = DEFAULT_TESTS.iter().map(|s| s.to_string()).collect();
    exec.extend(endpoint.tests.iter().cloned());
    vec![Event {
        listen: "test",
        script: Script {
            script_type: "text/javascript",
            exec,
        },
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Module, ALL, PATIENT_ONLY};
    use http::Method;
    use serde_json::json;

    fn basic(name: &'static str) -> Endpoint {
        Endpoint::new(name, Module::Auth, Method::GET, "/api/demo", ALL)
    }

    #[test]
    fn url_prepends_base_url_placeholder() {
        let item = render_request(&basic("Demo"));
        assert_eq!(item.request.url, "{{baseUrl}}/api/demo");
    }

    #[test]
    fn auth_header_comes_before_content_type() {
        let endpoint = basic("Demo").json_body(json!({"a": 1}));
        let item = render_request(&endpoint);
        let keys: Vec<_> = item.request.header.iter().map(|h| h.key).collect();
        assert_eq!(keys, ["Authorization", "Content-Type"]);
    }

    #[test]
    fn no_auth_no_body_yields_no_headers() {
        let item = render_request(&basic("Demo").no_auth());
        assert!(item.request.header.is_empty());
        assert!(item.request.description.contains("Headers: (none)"));
    }

    #[test]
    fn form_body_does_not_add_content_type() {
        let endpoint = basic("Demo").form_body(vec![crate::catalog::FormField::file("avatar")]);
        let item = render_request(&endpoint);
        let keys: Vec<_> = item.request.header.iter().map(|h| h.key).collect();
        assert_eq!(keys, ["Authorization"]);
    }

    #[test]
    fn description_sections_in_order() {
        let endpoint = basic("Demo")
            .json_body(json!({"a": 1}))
            .success(json!({"ok": true}))
            .error(json!({"ok": false}))
            .notes(&["First note"]);
        let desc = render_request(&endpoint).request.description;
        let idx = |needle: &str| desc.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
        assert!(desc.starts_with("Notes:\n- First note\n\nMethod: GET"));
        assert!(idx("URL: {{baseUrl}}/api/demo") < idx("Headers:"));
        assert!(idx("Headers:") < idx("Body:"));
        assert!(idx("Body:") < idx("Success Response Example:"));
        assert!(idx("Success Response Example:") < idx("Error Response Example:"));
    }

    #[test]
    fn form_fields_render_as_bullets() {
        let endpoint = basic("Upload").form_body(vec![
            crate::catalog::FormField::file("avatar"),
            crate::catalog::FormField::text("caption", "hello"),
        ]);
        let desc = render_request(&endpoint).request.description;
        assert!(desc.contains("form-data:\n- avatar: <file>\n- caption: hello"));
    }

    #[test]
    fn raw_body_is_reproduced_verbatim_in_description() {
        let endpoint = basic("Demo").json_body(json!({"email": "a@b.c"}));
        let desc = render_request(&endpoint).request.description;
        assert!(desc.contains("Body:\n{\n  \"email\": \"a@b.c\"\n}"));
    }

    #[test]
    fn default_tests_precede_custom_lines() {
        let endpoint = basic("Demo").tests(&["pm.environment.set(\"x\", 1);"]);
        let item = render_request(&endpoint);
        let exec = &item.event[0].script.exec;
        assert_eq!(exec.len(), DEFAULT_TESTS.len() + 1);
        assert_eq!(exec[..DEFAULT_TESTS.len()], DEFAULT_TESTS.map(String::from));
        assert_eq!(exec[DEFAULT_TESTS.len()], "pm.environment.set(\"x\", 1);");
    }

    #[test]
    fn suppressed_scripts_produce_no_event() {
        let endpoint = Endpoint::new(
            "OAuth",
            Module::Auth,
            Method::GET,
            "/api/auth/oauth/google",
            PATIENT_ONLY,
        )
        .skip_tests();
        let item = render_request(&endpoint);
        assert!(item.event.is_empty());
        let value = serde_json::to_value(&item).unwrap_or_default();
        assert!(value.get("event").is_none());
    }

    #[test]
    fn rendering_is_deterministic() {
        let endpoint = basic("Demo")
            .json_body(json!({"a": 1, "b": 2}))
            .success(json!({"ok": true}));
        let first = serde_json::to_string(&render_request(&endpoint)).unwrap_or_default();
        let second = serde_json::to_string(&render_request(&endpoint)).unwrap_or_default();
        assert_eq!(first, second);
    }
}
