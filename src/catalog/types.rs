use http::Method;
use serde::Serialize;
use serde_json::Value;

/// One of the four access roles the DemoApp backend distinguishes.
///
/// The declaration order here is incidental; the output ordering of the
/// role folders is fixed by [`Role::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Doctor,
    Receptionist,
    Patient,
}

impl Role {
    /// Fixed top-level ordering of role folders in the collection.
    pub const ORDER: [Role; 4] = [Role::Admin, Role::Doctor, Role::Receptionist, Role::Patient];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Doctor => "DOCTOR",
            Role::Receptionist => "RECEPTIONIST",
            Role::Patient => "PATIENT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Common role combinations used by the catalogue.
pub const ALL: &[Role] = &[Role::Admin, Role::Doctor, Role::Receptionist, Role::Patient];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const DOCTOR_ONLY: &[Role] = &[Role::Doctor];
pub const RECEPTIONIST_ONLY: &[Role] = &[Role::Receptionist];
pub const PATIENT_ONLY: &[Role] = &[Role::Patient];
pub const ADMIN_RECEPTIONIST: &[Role] = &[Role::Admin, Role::Receptionist];
pub const ADMIN_DOCTOR_RECEPTIONIST: &[Role] = &[Role::Admin, Role::Doctor, Role::Receptionist];
pub const ADMIN_DOCTOR_PATIENT: &[Role] = &[Role::Admin, Role::Doctor, Role::Patient];
pub const ADMIN_RECEPTIONIST_PATIENT: &[Role] = &[Role::Admin, Role::Receptionist, Role::Patient];
pub const RECEPTIONIST_PATIENT: &[Role] = &[Role::Receptionist, Role::Patient];
pub const PATIENT_DOCTOR: &[Role] = &[Role::Patient, Role::Doctor];

/// Closed set of backend modules a request can belong to.
///
/// Grouping and ordering of module folders is driven entirely by
/// [`Module::ORDER`]; a module that is not listed there cannot exist.
/// `System` is the sentinel placeholder: it is emitted for every role even
/// when empty, while every other empty module folder is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Auth,
    Profile,
    User,
    Patient,
    Doctor,
    Appointment,
    Visit,
    Billing,
    Inventory,
    Attendance,
    Notification,
    Search,
    Specialty,
    Payroll,
    Permission,
    Admin,
    System,
}

impl Module {
    /// Fixed ordering of module folders inside each role folder.
    pub const ORDER: [Module; 17] = [
        Module::Auth,
        Module::Profile,
        Module::User,
        Module::Patient,
        Module::Doctor,
        Module::Appointment,
        Module::Visit,
        Module::Billing,
        Module::Inventory,
        Module::Attendance,
        Module::Notification,
        Module::Search,
        Module::Specialty,
        Module::Payroll,
        Module::Permission,
        Module::Admin,
        Module::System,
    ];

    /// Folder label as it appears in the collection.
    pub fn label(&self) -> &'static str {
        match self {
            Module::Auth => "AUTH",
            Module::Profile => "PROFILE",
            Module::User => "USER",
            Module::Patient => "PATIENT",
            Module::Doctor => "DOCTOR",
            Module::Appointment => "APPOINTMENT",
            Module::Visit => "VISIT / MEDICAL RECORD",
            Module::Billing => "BILLING / INVOICE",
            Module::Inventory => "INVENTORY / MEDICINE",
            Module::Attendance => "ATTENDANCE / SHIFT",
            Module::Notification => "NOTIFICATION",
            Module::Search => "SEARCH",
            Module::Specialty => "SPECIALTY",
            Module::Payroll => "PAYROLL",
            Module::Permission => "PERMISSION",
            Module::Admin => "ADMIN",
            Module::System => "SYSTEM",
        }
    }

    /// The sentinel module folder is emitted even when it has no requests.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Module::System)
    }

    /// Fixed description attached to the sentinel folder.
    pub fn sentinel_description(&self) -> Option<&'static str> {
        if self.is_sentinel() {
            Some("Chua trien khai")
        } else {
            None
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single field of a multipart form body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormField {
    File {
        key: String,
        #[serde(rename = "type")]
        field_type: String,
        src: String,
    },
    Text {
        key: String,
        value: String,
    },
}

impl FormField {
    pub fn file(key: &str) -> Self {
        FormField::File {
            key: key.to_string(),
            field_type: "file".to_string(),
            src: String::new(),
        }
    }

    pub fn text(key: &str, value: &str) -> Self {
        FormField::Text {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawOptions {
    pub raw: RawLanguage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawLanguage {
    pub language: String,
}

/// Request body specification. At most one representation is active; the
/// renderer matches exhaustively so adding a variant is a compile-time
/// visible change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode")]
pub enum BodySpec {
    #[serde(rename = "raw")]
    Raw { raw: String, options: RawOptions },
    #[serde(rename = "formdata")]
    FormData { formdata: Vec<FormField> },
}

impl BodySpec {
    /// Raw JSON body, pretty-printed with 2-space indentation at
    /// construction time so the description can embed it verbatim.
    pub fn json(value: &Value) -> Self {
        BodySpec::Raw {
            raw: pretty_json(value),
            options: RawOptions {
                raw: RawLanguage {
                    language: "json".to_string(),
                },
            },
        }
    }

    pub fn form(fields: Vec<FormField>) -> Self {
        BodySpec::FormData { formdata: fields }
    }
}

/// Pretty-print a JSON value with 2-space indentation.
///
/// Returns `"null"` for values that cannot serialize; the catalogue is
/// built from `json!` literals, so that branch is unreachable in practice.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

/// The static declaration of one API operation: where it lives in the
/// role/module tree plus the documentation and test metadata attached to
/// its request item. Constructed once by the catalogue, never mutated.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: &'static str,
    pub module: Module,
    pub method: Method,
    /// URL path template; `{{var}}` placeholders are passed through
    /// verbatim and resolved by the request runner, not here.
    pub path: &'static str,
    /// Roles whose folder includes this request. Never empty.
    pub roles: &'static [Role],
    pub auth_required: bool,
    pub body: Option<BodySpec>,
    pub success: Option<Value>,
    pub error: Option<Value>,
    /// Extra assertion-script lines appended after the default checks.
    pub tests: Vec<String>,
    /// When set, no test script is attached at all.
    pub skip_tests: bool,
    pub notes: Vec<String>,
}

impl Endpoint {
    pub fn new(
        name: &'static str,
        module: Module,
        method: Method,
        path: &'static str,
        roles: &'static [Role],
    ) -> Self {
        debug_assert!(!roles.is_empty(), "endpoint {name} has no roles");
        Endpoint {
            name,
            module,
            method,
            path,
            roles,
            auth_required: true,
            body: None,
            success: None,
            error: None,
            tests: Vec::new(),
            skip_tests: false,
            notes: Vec::new(),
        }
    }

    pub fn no_auth(mut self) -> Self {
        self.auth_required = false;
        self
    }

    pub fn json_body(mut self, value: Value) -> Self {
        self.body = Some(BodySpec::json(&value));
        self
    }

    pub fn form_body(mut self, fields: Vec<FormField>) -> Self {
        self.body = Some(BodySpec::form(fields));
        self
    }

    pub fn success(mut self, value: Value) -> Self {
        self.success = Some(value);
        self
    }

    pub fn error(mut self, value: Value) -> Self {
        self.error = Some(value);
        self
    }

    pub fn tests(mut self, lines: &[&str]) -> Self {
        self.tests = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn skip_tests(mut self) -> Self {
        self.skip_tests = true;
        self
    }

    pub fn notes(mut self, notes: &[&str]) -> Self {
        self.notes = notes.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn module_order_covers_every_variant_once() {
        for module in Module::ORDER {
            assert_eq!(
                Module::ORDER.iter().filter(|m| **m == module).count(),
                1,
                "{module} listed more than once"
            );
        }
        // Exhaustive match: adding a variant breaks compilation here until
        // ORDER is extended too.
        for module in Module::ORDER {
            let _ = match module {
                Module::Auth
                | Module::Profile
                | Module::User
                | Module::Patient
                | Module::Doctor
                | Module::Appointment
                | Module::Visit
                | Module::Billing
                | Module::Inventory
                | Module::Attendance
                | Module::Notification
                | Module::Search
                | Module::Specialty
                | Module::Payroll
                | Module::Permission
                | Module::Admin
                | Module::System => module.label(),
            };
        }
        assert_eq!(Module::ORDER.len(), 17);
    }

    #[test]
    fn role_order_is_fixed() {
        assert_eq!(
            Role::ORDER.map(|r| r.as_str()),
            ["ADMIN", "DOCTOR", "RECEPTIONIST", "PATIENT"]
        );
    }

    #[test]
    fn only_system_is_sentinel() {
        for module in Module::ORDER {
            assert_eq!(module.is_sentinel(), module == Module::System);
        }
        assert_eq!(
            Module::System.sentinel_description(),
            Some("Chua trien khai")
        );
        assert_eq!(Module::Auth.sentinel_description(), None);
    }

    #[test]
    fn json_body_pretty_prints_in_authoring_order() {
        let body = BodySpec::json(&json!({"email": "a@b.c", "password": "x"}));
        match body {
            BodySpec::Raw { raw, options } => {
                assert_eq!(raw, "{\n  \"email\": \"a@b.c\",\n  \"password\": \"x\"\n}");
                assert_eq!(options.raw.language, "json");
            }
            BodySpec::FormData { .. } => panic!("expected raw body"),
        }
    }

    #[test]
    fn form_field_serialization_shapes() {
        let file = serde_json::to_value(FormField::file("avatar")).unwrap();
        assert_eq!(file, json!({"key": "avatar", "type": "file", "src": ""}));
        let text = serde_json::to_value(FormField::text("caption", "front")).unwrap();
        assert_eq!(text, json!({"key": "caption", "value": "front"}));
    }

    #[test]
    fn builder_defaults() {
        let ep = Endpoint::new("X", Module::Auth, Method::GET, "/api/x", ALL);
        assert!(ep.auth_required);
        assert!(ep.body.is_none());
        assert!(!ep.skip_tests);
        assert!(ep.tests.is_empty());
        assert!(ep.notes.is_empty());
        assert!(ep.visible_to(Role::Patient));
        assert!(!Endpoint::new("Y", Module::Auth, Method::GET, "/y", ADMIN_ONLY)
            .visible_to(Role::Patient));
    }
}
