use postgen::build_environment;

#[test]
fn document_shape_matches_postman_export() {
    let env = build_environment();
    let value = serde_json::to_value(&env).expect("serialize environment");
    let keys: Vec<_> = value
        .as_object()
        .expect("object root")
        .keys()
        .cloned()
        .collect();
    assert_eq!(
        keys,
        [
            "name",
            "values",
            "_postman_variable_scope",
            "_postman_exported_at",
            "_postman_exported_using",
        ]
    );
    assert_eq!(value["name"], "DemoApp Backend (local)");
    assert_eq!(value["_postman_variable_scope"], "environment");
    assert_eq!(value["_postman_exported_using"], "Postman/10.x");
}

#[test]
fn value_entries_serialize_with_type_field() {
    let env = build_environment();
    let value = serde_json::to_value(&env).expect("serialize environment");
    let first = &value["values"][0];
    let keys: Vec<_> = first
        .as_object()
        .expect("value object")
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, ["key", "value", "type", "enabled"]);
    assert_eq!(first["type"], "default");
    let token = &value["values"][1];
    assert_eq!(token["key"], "accessToken");
    assert_eq!(token["type"], "secret");
}

#[test]
fn id_placeholders_default_to_one() {
    let env = build_environment();
    for key in [
        "appointmentId",
        "visitId",
        "invoiceId",
        "prescriptionId",
        "medicineId",
        "shiftId",
        "doctorShiftId",
        "payrollId",
        "roleId",
        "permissionId",
        "specialtyId",
        "attendanceId",
        "notificationId",
        "recordId",
    ] {
        let entry = env
            .values
            .iter()
            .find(|v| v.key == key)
            .unwrap_or_else(|| panic!("missing {key}"));
        assert_eq!(entry.value, "1", "unexpected default for {key}");
    }
    let table = env
        .values
        .iter()
        .find(|v| v.key == "tableName")
        .expect("tableName entry");
    assert_eq!(table.value, "appointments");
}

#[test]
fn exported_at_is_utc_iso8601() {
    let env = build_environment();
    assert!(env.exported_at.ends_with('Z'));
    chrono::DateTime::parse_from_rfc3339(&env.exported_at).expect("parseable timestamp");
}
