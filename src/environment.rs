//! Companion environment document: every `{{placeholder}}` the collection
//! references, with local-development defaults.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub const ENVIRONMENT_NAME: &str = "DemoApp Backend (local)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Default,
    Secret,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvValue {
    pub key: &'static str,
    pub value: &'static str,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub enabled: bool,
}

impl EnvValue {
    fn new(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value,
            kind: ValueKind::Default,
            enabled: true,
        }
    }

    fn secret(key: &'static str) -> Self {
        Self {
            key,
            value: "",
            kind: ValueKind::Secret,
            enabled: true,
        }
    }
}

/// Root of the environment document. The export timestamp is the only
/// non-deterministic field in either output.
#[derive(Debug, Clone, Serialize)]
pub struct Environment {
    pub name: &'static str,
    pub values: Vec<EnvValue>,
    #[serde(rename = "_postman_variable_scope")]
    pub variable_scope: &'static str,
    #[serde(rename = "_postman_exported_at")]
    pub exported_at: String,
    #[serde(rename = "_postman_exported_using")]
    pub exported_using: &'static str,
}

pub fn build_environment() -> Environment {
    Environment {
        name: ENVIRONMENT_NAME,
        values: vec![
            EnvValue::new("baseUrl", "http://localhost:3000"),
            EnvValue::secret("accessToken"),
            EnvValue::secret("refreshToken"),
            EnvValue::new("userId", ""),
            EnvValue::new("doctorId", ""),
            EnvValue::new("patientId", ""),
            EnvValue::new("appointmentId", "1"),
            EnvValue::new("visitId", "1"),
            EnvValue::new("invoiceId", "1"),
            EnvValue::new("prescriptionId", "1"),
            EnvValue::new("medicineId", "1"),
            EnvValue::new("shiftId", "1"),
            EnvValue::new("doctorShiftId", "1"),
            EnvValue::new("payrollId", "1"),
            EnvValue::new("roleId", "1"),
            EnvValue::new("permissionId", "1"),
            EnvValue::new("specialtyId", "1"),
            EnvValue::new("attendanceId", "1"),
            EnvValue::new("notificationId", "1"),
            EnvValue::new("tableName", "appointments"),
            EnvValue::new("recordId", "1"),
        ],
        variable_scope: "environment",
        exported_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        exported_using: "Postman/10.x",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_lists_every_placeholder() {
        let env = build_environment();
        assert_eq!(env.values.len(), 21);
        assert_eq!(env.values[0].key, "baseUrl");
        assert_eq!(env.values[0].value, "http://localhost:3000");
        assert!(env.values.iter().all(|v| v.enabled));
    }

    #[test]
    fn tokens_are_secret_and_blank() {
        let env = build_environment();
        for key in ["accessToken", "refreshToken"] {
            let value = env
                .values
                .iter()
                .find(|v| v.key == key)
                .unwrap_or_else(|| panic!("missing {key}"));
            assert_eq!(value.kind, ValueKind::Secret);
            assert_eq!(value.value, "");
        }
    }

    #[test]
    fn export_metadata_is_fixed() {
        let env = build_environment();
        assert_eq!(env.variable_scope, "environment");
        assert_eq!(env.exported_using, "Postman/10.x");
        assert!(env.exported_at.ends_with('Z'));
    }

    #[test]
    fn kind_serializes_lowercase() {
        let value = serde_json::to_value(ValueKind::Secret).unwrap_or_default();
        assert_eq!(value, serde_json::json!("secret"));
    }
}
