//! The literal endpoint catalogue for the DemoApp backend.
//!
//! Pure data: one function per backend module, concatenated by
//! [`build_catalog`] in logical build-up order (auth first). The assembler
//! does not rely on this order for folder structure, only for the relative
//! order of requests inside the same (role, module) folder.

use http::Method;
use serde_json::json;

use super::types::{
    Endpoint, FormField, Module, ADMIN_DOCTOR_PATIENT, ADMIN_DOCTOR_RECEPTIONIST, ADMIN_ONLY,
    ADMIN_RECEPTIONIST, ADMIN_RECEPTIONIST_PATIENT, ALL, DOCTOR_ONLY, PATIENT_DOCTOR,
    PATIENT_ONLY, RECEPTIONIST_ONLY, RECEPTIONIST_PATIENT,
};

/// Build the full catalogue. Descriptors are immutable once returned.
pub fn build_catalog() -> Vec<Endpoint> {
    let mut catalog = Vec::new();
    catalog.extend(auth_endpoints());
    catalog.extend(profile_endpoints());
    catalog.extend(user_endpoints());
    catalog.extend(patient_endpoints());
    catalog.extend(doctor_endpoints());
    catalog.extend(appointment_endpoints());
    catalog.extend(visit_endpoints());
    catalog.extend(billing_endpoints());
    catalog.extend(inventory_endpoints());
    catalog.extend(attendance_endpoints());
    catalog.extend(notification_endpoints());
    catalog.extend(search_endpoints());
    catalog.extend(specialty_endpoints());
    catalog.extend(payroll_endpoints());
    catalog.extend(permission_endpoints());
    catalog.extend(admin_endpoints());
    catalog
}

fn auth_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new("Register", Module::Auth, Method::POST, "/api/auth/register", ALL)
            .no_auth()
            .json_body(json!({
                "email": "patient1@example.com",
                "password": "Password123",
                "fullName": "Patient One",
                "roleId": 3
            }))
            .success(json!({
                "success": true,
                "message": "REGISTER_SUCCESS",
                "user": {
                    "id": 1,
                    "email": "patient1@example.com",
                    "fullName": "Patient One",
                    "roleId": 3
                }
            }))
            .error(json!({"success": false, "message": "EMAIL_ALREADY_EXISTS"}))
            .tests(&[
                "const json = pm.response.json();",
                "if (json.user && json.user.id) { pm.environment.set(\"userId\", json.user.id); }",
            ]),
        Endpoint::new("Login", Module::Auth, Method::POST, "/api/auth/login", ALL)
            .no_auth()
            .json_body(json!({"email": "patient1@example.com", "password": "Password123"}))
            .success(json!({
                "success": true,
                "message": "LOGIN_SUCCESS",
                "tokens": {"accessToken": "<token>", "refreshToken": "<token>"},
                "user": {
                    "userId": 1,
                    "email": "patient1@example.com",
                    "fullName": "Patient One",
                    "roleId": 3
                }
            }))
            .error(json!({"success": false, "message": "INVALID_CREDENTIALS"}))
            .tests(&[
                "const json = pm.response.json();",
                "pm.test(\"Login returns tokens\", function () {",
                "  pm.expect(json.tokens).to.have.property(\"accessToken\");",
                "  pm.expect(json.tokens).to.have.property(\"refreshToken\");",
                "});",
                "pm.environment.set(\"accessToken\", json.tokens.accessToken);",
                "pm.environment.set(\"refreshToken\", json.tokens.refreshToken);",
                "if (json.user && json.user.userId) { pm.environment.set(\"userId\", json.user.userId); }",
            ]),
        Endpoint::new(
            "Refresh token",
            Module::Auth,
            Method::POST,
            "/api/auth/refresh-token",
            ALL,
        )
        .json_body(json!({"refreshToken": "{{refreshToken}}"}))
        .success(json!({"success": true, "message": "REFRESH_SUCCESS", "accessToken": "<token>"}))
        .error(json!({"success": false, "message": "INVALID_REFRESH_TOKEN"}))
        .tests(&[
            "const json = pm.response.json();",
            "if (json.accessToken) { pm.environment.set(\"accessToken\", json.accessToken); }",
        ]),
        Endpoint::new("Logout", Module::Auth, Method::POST, "/api/auth/logout", ALL)
            .success(json!({"success": true, "message": "LOGOUT_SUCCESS"}))
            .error(json!({"success": false, "message": "NO_TOKEN_PROVIDED"})),
        Endpoint::new(
            "Forgot password",
            Module::Auth,
            Method::POST,
            "/api/auth/forgot-password",
            ALL,
        )
        .no_auth()
        .json_body(json!({"email": "patient1@example.com"}))
        .success(json!({"message": "If email exists, reset link was sent"}))
        .error(json!({"message": "INTERNAL_SERVER_ERROR"})),
        Endpoint::new(
            "Reset password",
            Module::Auth,
            Method::POST,
            "/api/auth/reset-password",
            ALL,
        )
        .no_auth()
        .json_body(json!({"token": "reset-token-here", "newPassword": "NewPassword123"}))
        .success(json!({"message": "Password reset successfully"}))
        .error(json!({"message": "INVALID_OR_EXPIRED_TOKEN"})),
        Endpoint::new(
            "OAuth - Google Login",
            Module::Auth,
            Method::GET,
            "/api/auth/oauth/google",
            ALL,
        )
        .no_auth()
        .success(json!({"message": "Redirect to Google OAuth"}))
        .error(json!({"success": false, "message": "OAuth authentication failed"}))
        .skip_tests()
        .notes(&["Browser redirect (302) to Google OAuth consent screen"]),
        Endpoint::new(
            "OAuth - Google Callback",
            Module::Auth,
            Method::GET,
            "/api/auth/oauth/google/callback",
            ALL,
        )
        .no_auth()
        .success(json!({
            "success": true,
            "message": "OAuth login successful",
            "data": {
                "token": "<token>",
                "user": {
                    "id": 1,
                    "email": "user@example.com",
                    "fullName": "User One",
                    "roleId": 3,
                    "oauth2Provider": "google"
                }
            }
        }))
        .error(json!({"success": false, "message": "OAuth authentication failed"}))
        .skip_tests(),
        Endpoint::new(
            "OAuth - Failure",
            Module::Auth,
            Method::GET,
            "/api/auth/oauth/failure",
            ALL,
        )
        .no_auth()
        .success(json!({"success": false, "message": "OAuth authentication failed"}))
        .tests(&[
            "pm.test(\"Status code is 401\", function () {",
            "  pm.expect(pm.response.code).to.eql(401);",
            "});",
        ]),
    ]
}

fn profile_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new("Get my profile", Module::Profile, Method::GET, "/api/profile", ALL)
            .success(json!({"success": true, "data": {"id": 1, "email": "user@example.com"}}))
            .error(json!({"success": false, "message": "User not found"})),
        Endpoint::new("Update profile", Module::Profile, Method::PUT, "/api/profile", ALL)
            .json_body(json!({"fullName": "Updated User", "avatar": "/uploads/users/avatar.png"}))
            .success(json!({"success": true, "message": "Profile updated successfully", "data": {"id": 1}}))
            .error(json!({"success": false, "message": "User not found"})),
        Endpoint::new(
            "Change password",
            Module::Profile,
            Method::PUT,
            "/api/profile/password",
            ALL,
        )
        .json_body(json!({"currentPassword": "OldPassword123", "newPassword": "NewPassword123"}))
        .success(json!({"success": true, "message": "Password changed successfully"}))
        .error(json!({"success": false, "message": "Current password is incorrect"})),
        Endpoint::new(
            "Upload avatar",
            Module::Profile,
            Method::POST,
            "/api/profile/avatar",
            ALL,
        )
        .form_body(vec![FormField::file("avatar")])
        .success(json!({
            "success": true,
            "message": "Avatar uploaded successfully",
            "data": {"avatar": "/uploads/users/avatar.png"}
        }))
        .error(json!({"success": false, "message": "No file uploaded"})),
    ]
}

fn user_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Get my notification settings",
            Module::User,
            Method::GET,
            "/api/users/me/notification-settings",
            ALL,
        )
        .success(json!({
            "success": true,
            "message": "Notification settings retrieved successfully",
            "data": {"emailEnabled": true, "smsEnabled": false, "pushEnabled": true, "inAppEnabled": true}
        }))
        .error(json!({"success": false, "message": "Failed to retrieve notification settings"})),
        Endpoint::new(
            "Update my notification settings",
            Module::User,
            Method::PUT,
            "/api/users/me/notification-settings",
            ALL,
        )
        .json_body(json!({"emailEnabled": true, "smsEnabled": false, "pushEnabled": true, "inAppEnabled": true}))
        .success(json!({
            "success": true,
            "message": "Notification settings updated successfully",
            "data": {"emailEnabled": true, "smsEnabled": false, "pushEnabled": true, "inAppEnabled": true}
        }))
        .error(json!({"success": false, "message": "No valid settings provided"})),
        Endpoint::new("Get all users", Module::User, Method::GET, "/api/users", ADMIN_ONLY)
            .success(json!({"success": true, "count": 2, "data": [{"id": 1, "email": "admin@example.com"}]}))
            .error(json!({"success": false, "message": "Failed to get users"})),
        Endpoint::new(
            "Get user by ID",
            Module::User,
            Method::GET,
            "/api/users/{{userId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": {"id": 1, "email": "user@example.com"}}))
        .error(json!({"success": false, "message": "User not found"})),
        Endpoint::new("Create user", Module::User, Method::POST, "/api/users", ADMIN_ONLY)
            .json_body(json!({
                "email": "staff1@example.com",
                "password": "Password123",
                "fullName": "Staff One",
                "roleId": 2
            }))
            .success(json!({
                "success": true,
                "message": "User created successfully",
                "data": {"id": 2, "email": "staff1@example.com"}
            }))
            .error(json!({"success": false, "message": "Email already exists"})),
        Endpoint::new(
            "Update user",
            Module::User,
            Method::PUT,
            "/api/users/{{userId}}",
            ADMIN_ONLY,
        )
        .json_body(json!({"email": "staff1@example.com", "fullName": "Staff One", "roleId": 2, "isActive": true}))
        .success(json!({"success": true, "message": "User updated successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "User not found"})),
        Endpoint::new(
            "Activate user",
            Module::User,
            Method::PUT,
            "/api/users/{{userId}}/activate",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "User activated successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "User is already active"})),
        Endpoint::new(
            "Deactivate user",
            Module::User,
            Method::PUT,
            "/api/users/{{userId}}/deactivate",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "User deactivated successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "User is already inactive"})),
        Endpoint::new(
            "Change user role",
            Module::User,
            Method::PUT,
            "/api/users/{{userId}}/role",
            ADMIN_ONLY,
        )
        .json_body(json!({"roleId": 4}))
        .success(json!({"success": true, "message": "User role changed successfully", "data": {"id": 1, "roleId": 4}}))
        .error(json!({"success": false, "message": "roleId is required"})),
        Endpoint::new(
            "Delete user",
            Module::User,
            Method::DELETE,
            "/api/users/{{userId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "User deleted successfully"}))
        .error(json!({"success": false, "message": "User not found"})),
    ]
}

fn patient_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Setup patient profile",
            Module::Patient,
            Method::POST,
            "/api/patients/setup",
            PATIENT_ONLY,
        )
        .json_body(json!({
            "fullName": "Patient One",
            "gender": "MALE",
            "dateOfBirth": "1990-01-01",
            "cccd": "012345678901",
            "profiles": [
                {"type": "phone", "value": "0901234567"}
            ]
        }))
        .success(json!({"success": true, "message": "Patient profile setup successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "PATIENT_ALREADY_SETUP"}))
        .tests(&[
            "const json = pm.response.json();",
            "if (json.data && json.data.id) { pm.environment.set(\"patientId\", json.data.id); }",
        ]),
        Endpoint::new(
            "Get patients",
            Module::Patient,
            Method::GET,
            "/api/patients?page=1&limit=10",
            ADMIN_DOCTOR_RECEPTIONIST,
        )
        .success(json!({"success": true, "page": 1, "limit": 10, "patients": []}))
        .error(json!({"success": false, "message": "Failed to get patients"})),
        Endpoint::new(
            "Get patient by ID",
            Module::Patient,
            Method::GET,
            "/api/patients/{{patientId}}",
            ADMIN_DOCTOR_RECEPTIONIST,
        )
        .success(json!({"success": true, "patient": {"id": 1, "fullName": "Patient One"}}))
        .error(json!({"success": false, "message": "Patient not found"})),
        Endpoint::new(
            "Update patient",
            Module::Patient,
            Method::PUT,
            "/api/patients/{{patientId}}",
            ALL,
        )
        .json_body(json!({"fullName": "Patient One", "gender": "MALE", "dateOfBirth": "1990-01-01"}))
        .success(json!({"success": true, "message": "Patient updated successfully", "patient": {"id": 1}}))
        .error(json!({"success": false, "message": "Patient not found"})),
        Endpoint::new(
            "Delete patient",
            Module::Patient,
            Method::DELETE,
            "/api/patients/{{patientId}}",
            ADMIN_DOCTOR_RECEPTIONIST,
        )
        .success(json!({"success": true, "message": "Patient deleted successfully"}))
        .error(json!({"success": false, "message": "Patient not found"})),
        Endpoint::new(
            "Upload patient avatar",
            Module::Patient,
            Method::POST,
            "/api/patients/{{patientId}}/avatar",
            PATIENT_ONLY,
        )
        .form_body(vec![FormField::file("avatar")])
        .success(json!({
            "success": true,
            "message": "Patient avatar uploaded successfully",
            "data": {"avatar": "/uploads/patients/avatar.png"}
        }))
        .error(json!({"success": false, "message": "No file uploaded"})),
        Endpoint::new(
            "Get patient medical history",
            Module::Patient,
            Method::GET,
            "/api/patients/{{patientId}}/medical-history",
            ADMIN_DOCTOR_PATIENT,
        )
        .success(json!({
            "success": true,
            "data": {"visits": [], "prescriptions": [], "totalVisits": 0, "totalPrescriptions": 0}
        }))
        .error(json!({"success": false, "message": "FORBIDDEN"})),
        Endpoint::new(
            "Get patient prescriptions",
            Module::Patient,
            Method::GET,
            "/api/patients/{{patientId}}/prescriptions",
            ADMIN_DOCTOR_PATIENT,
        )
        .success(json!({"success": true, "data": [], "total": 0}))
        .error(json!({"success": false, "message": "FORBIDDEN"})),
    ]
}

fn doctor_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new("Get all doctors", Module::Doctor, Method::GET, "/api/doctors", ADMIN_ONLY)
            .success(json!({"success": true, "data": []}))
            .error(json!({"success": false, "message": "Get doctors failed"})),
        Endpoint::new(
            "Get doctor by ID",
            Module::Doctor,
            Method::GET,
            "/api/doctors/{{doctorId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": {"id": 1, "userId": 1}}))
        .error(json!({"success": false, "message": "Doctor not found"})),
        Endpoint::new("Create doctor", Module::Doctor, Method::POST, "/api/doctors", ADMIN_ONLY)
            .json_body(json!({
                "userId": "{{userId}}",
                "specialtyId": 1,
                "position": "Attending",
                "degree": "MD",
                "description": "General medicine"
            }))
            .success(json!({"success": true, "data": {"id": 1, "userId": 1}}))
            .error(json!({"success": false, "message": "User not found"}))
            .tests(&[
                "const json = pm.response.json();",
                "if (json.data && json.data.id) { pm.environment.set(\"doctorId\", json.data.id); }",
            ]),
        Endpoint::new(
            "Update doctor",
            Module::Doctor,
            Method::PUT,
            "/api/doctors/{{doctorId}}",
            ADMIN_ONLY,
        )
        .json_body(json!({"specialtyId": 1, "position": "Senior", "degree": "MD", "description": "Updated"}))
        .success(json!({"success": true, "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Doctor not found"})),
        Endpoint::new(
            "Delete doctor",
            Module::Doctor,
            Method::DELETE,
            "/api/doctors/{{doctorId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Doctor deleted"}))
        .error(json!({"success": false, "message": "Doctor not found"})),
        Endpoint::new(
            "Get shifts by doctor",
            Module::Doctor,
            Method::GET,
            "/api/doctors/{{doctorId}}/shifts",
            ALL,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Get shifts by doctor failed"})),
    ]
}

fn appointment_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Create appointment (online)",
            Module::Appointment,
            Method::POST,
            "/api/appointments",
            PATIENT_ONLY,
        )
        .json_body(json!({
            "doctorId": "{{doctorId}}",
            "shiftId": 1,
            "date": "2026-02-01",
            "symptomInitial": "Mild fever"
        }))
        .success(json!({"success": true, "message": "APPOINTMENT_CREATED", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "MISSING_INPUT"})),
        Endpoint::new(
            "Create appointment (offline)",
            Module::Appointment,
            Method::POST,
            "/api/appointments/offline",
            RECEPTIONIST_ONLY,
        )
        .json_body(json!({
            "patientId": "{{patientId}}",
            "doctorId": "{{doctorId}}",
            "shiftId": 1,
            "date": "2026-02-01",
            "symptomInitial": "Mild fever"
        }))
        .success(json!({"success": true, "message": "APPOINTMENT_CREATED", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "MISSING_INPUT"})),
        Endpoint::new(
            "Cancel appointment",
            Module::Appointment,
            Method::PUT,
            "/api/appointments/{{appointmentId}}/cancel",
            RECEPTIONIST_PATIENT,
        )
        .success(json!({"success": true, "message": "APPOINTMENT_CANCELLED", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "APPOINTMENT_NOT_FOUND"})),
        Endpoint::new(
            "Get appointments",
            Module::Appointment,
            Method::GET,
            "/api/appointments?date=2026-02-01&doctorId={{doctorId}}&shiftId=1&status=WAITING",
            ALL,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "DATE_INVALID"})),
        Endpoint::new(
            "Get my appointments",
            Module::Appointment,
            Method::GET,
            "/api/appointments/my",
            PATIENT_DOCTOR,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "PATIENT_NOT_SETUP"})),
        Endpoint::new(
            "Get upcoming appointments",
            Module::Appointment,
            Method::GET,
            "/api/appointments/upcoming",
            ALL,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "FAILED_TO_GET_UPCOMING"})),
        Endpoint::new(
            "Get appointment by ID",
            Module::Appointment,
            Method::GET,
            "/api/appointments/{{appointmentId}}",
            ALL,
        )
        .success(json!({"success": true, "data": {"id": 1}}))
        .error(json!({"success": false, "message": "APPOINTMENT_NOT_FOUND"})),
        Endpoint::new(
            "Update appointment (reschedule)",
            Module::Appointment,
            Method::PUT,
            "/api/appointments/{{appointmentId}}",
            ADMIN_RECEPTIONIST_PATIENT,
        )
        .json_body(json!({
            "doctorId": "{{doctorId}}",
            "shiftId": 1,
            "date": "2026-02-02",
            "symptomInitial": "Updated symptom"
        }))
        .success(json!({"success": true, "message": "APPOINTMENT_UPDATED", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "CAN_ONLY_UPDATE_WAITING_APPOINTMENTS"})),
        Endpoint::new(
            "Mark appointment no-show",
            Module::Appointment,
            Method::PUT,
            "/api/appointments/{{appointmentId}}/no-show",
            ADMIN_RECEPTIONIST,
        )
        .success(json!({"success": true, "message": "APPOINTMENT_MARKED_NO_SHOW", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "APPOINTMENT_NOT_FOUND"})),
    ]
}

fn visit_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Start visit (check-in)",
            Module::Visit,
            Method::POST,
            "/api/visits/checkin/{{appointmentId}}",
            RECEPTIONIST_ONLY,
        )
        .json_body(json!({
            "vitalSigns": {"bloodPressure": "120/80", "heartRate": 80, "temperature": 37.0, "weight": 70}
        }))
        .success(json!({"success": true, "message": "Check-in successful", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "APPOINTMENT_ALREADY_CHECKED_IN"})),
        Endpoint::new(
            "Complete visit",
            Module::Visit,
            Method::PUT,
            "/api/visits/{{visitId}}/complete",
            DOCTOR_ONLY,
        )
        .json_body(json!({
            "diagnosis": "Upper respiratory infection",
            "diseaseCategoryId": 1,
            "treatment": "Rest and fluids",
            "notes": "Follow up in 1 week"
        }))
        .success(json!({
            "success": true,
            "message": "Visit completed and invoice created",
            "data": {"visit": {"id": 1}}
        }))
        .error(json!({"success": false, "message": "VISIT_NOT_FOUND"})),
        Endpoint::new("Visit history", Module::Visit, Method::GET, "/api/visits", ALL)
            .success(json!({"success": true, "data": []}))
            .error(json!({"success": false, "message": "Failed to get visits"})),
        Endpoint::new(
            "Get visits by patient",
            Module::Visit,
            Method::GET,
            "/api/visits/patient/{{patientId}}",
            ALL,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "FORBIDDEN"})),
        Endpoint::new(
            "Get visit by ID",
            Module::Visit,
            Method::GET,
            "/api/visits/{{visitId}}",
            ALL,
        )
        .success(json!({"success": true, "data": {"id": 1}}))
        .error(json!({"success": false, "message": "VISIT_NOT_FOUND"})),
        Endpoint::new(
            "Create prescription",
            Module::Visit,
            Method::POST,
            "/api/prescriptions",
            DOCTOR_ONLY,
        )
        .json_body(json!({
            "visitId": "{{visitId}}",
            "patientId": "{{patientId}}",
            "medicines": [
                {"medicineId": 1, "quantity": 10, "dosageMorning": 1, "dosageNoon": 0, "dosageAfternoon": 1, "dosageEvening": 0}
            ],
            "note": "Take after meals"
        }))
        .success(json!({"success": true, "message": "Prescription created successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "VISIT_NOT_FOUND"})),
        Endpoint::new(
            "Update prescription",
            Module::Visit,
            Method::PUT,
            "/api/prescriptions/{{prescriptionId}}",
            DOCTOR_ONLY,
        )
        .json_body(json!({
            "medicines": [
                {"medicineId": 1, "quantity": 8, "dosageMorning": 1, "dosageNoon": 0, "dosageAfternoon": 1, "dosageEvening": 0}
            ],
            "note": "Updated dosage"
        }))
        .success(json!({"success": true, "message": "Prescription updated successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "PRESCRIPTION_NOT_FOUND"})),
        Endpoint::new(
            "Cancel prescription",
            Module::Visit,
            Method::POST,
            "/api/prescriptions/{{prescriptionId}}/cancel",
            DOCTOR_ONLY,
        )
        .success(json!({"success": true, "message": "Prescription cancelled successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "PRESCRIPTION_NOT_FOUND"})),
        Endpoint::new(
            "Dispense prescription",
            Module::Visit,
            Method::PUT,
            "/api/prescriptions/{{prescriptionId}}/dispense",
            ADMIN_RECEPTIONIST,
        )
        .json_body(json!({"dispensedBy": "{{userId}}"}))
        .success(json!({"success": true, "message": "Prescription dispensed successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "PRESCRIPTION_NOT_FOUND"})),
        Endpoint::new(
            "Get prescription by visit",
            Module::Visit,
            Method::GET,
            "/api/prescriptions/visit/{{visitId}}",
            DOCTOR_ONLY,
        )
        .success(json!({"success": true, "data": {"id": 1}}))
        .error(json!({"success": false, "message": "No prescription found for this visit"})),
        Endpoint::new(
            "Get prescription by ID",
            Module::Visit,
            Method::GET,
            "/api/prescriptions/{{prescriptionId}}",
            ALL,
        )
        .success(json!({"success": true, "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Prescription not found"})),
        Endpoint::new(
            "Get prescriptions by patient",
            Module::Visit,
            Method::GET,
            "/api/prescriptions/patient/{{patientId}}",
            ALL,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get prescriptions"})),
        Endpoint::new(
            "Export prescription PDF",
            Module::Visit,
            Method::GET,
            "/api/prescriptions/{{prescriptionId}}/pdf",
            ALL,
        )
        .success(json!({"success": true, "message": "PDF generated"}))
        .error(json!({"success": false, "message": "Prescription not found"}))
        .notes(&["Returns application/pdf on success"]),
    ]
}

fn billing_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Create invoice",
            Module::Billing,
            Method::POST,
            "/api/invoices",
            ADMIN_RECEPTIONIST,
        )
        .json_body(json!({
            "patientId": "{{patientId}}",
            "doctorId": "{{doctorId}}",
            "visitId": "{{visitId}}",
            "examinationFee": 200000,
            "items": [
                {"description": "Consultation", "quantity": 1, "unitPrice": 200000}
            ]
        }))
        .success(json!({"success": true, "message": "Invoice created successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "visitId and examinationFee are required"}))
        .notes(&["Validator also requires patientId, doctorId, items"]),
        Endpoint::new(
            "Get invoices",
            Module::Billing,
            Method::GET,
            "/api/invoices?page=1&limit=10&patientId={{patientId}}",
            ADMIN_RECEPTIONIST,
        )
        .success(json!({
            "success": true,
            "message": "Invoices retrieved successfully",
            "data": [],
            "pagination": {"page": 1, "limit": 10}
        }))
        .error(json!({"success": false, "message": "Failed to retrieve invoices"})),
        Endpoint::new(
            "Get invoice by ID",
            Module::Billing,
            Method::GET,
            "/api/invoices/{{invoiceId}}",
            ALL,
        )
        .success(json!({"success": true, "message": "Invoice retrieved successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Invoice not found"}))
        .notes(&["Authorization check inside controller"]),
        Endpoint::new(
            "Update invoice",
            Module::Billing,
            Method::PUT,
            "/api/invoices/{{invoiceId}}",
            ADMIN_RECEPTIONIST,
        )
        .json_body(json!({
            "discount": 50000,
            "note": "Membership discount",
            "items": [
                {"description": "Consultation", "quantity": 1, "unitPrice": 200000}
            ]
        }))
        .success(json!({"success": true, "message": "Invoice updated successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Failed to update invoice"})),
        Endpoint::new(
            "Pay invoice (add payment)",
            Module::Billing,
            Method::POST,
            "/api/invoices/{{invoiceId}}/payments",
            ADMIN_RECEPTIONIST,
        )
        .json_body(json!({
            "amount": 150000,
            "paymentMethod": "CASH",
            "reference": "RCPT-001",
            "note": "Partial payment"
        }))
        .success(json!({"success": true, "message": "Payment added successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "amount and paymentMethod are required"})),
        Endpoint::new(
            "Get invoice payments",
            Module::Billing,
            Method::GET,
            "/api/invoices/{{invoiceId}}/payments",
            ADMIN_RECEPTIONIST,
        )
        .success(json!({"success": true, "message": "Payments retrieved successfully", "data": []}))
        .error(json!({"success": false, "message": "Invoice not found"})),
        Endpoint::new(
            "Export invoice PDF",
            Module::Billing,
            Method::GET,
            "/api/invoices/{{invoiceId}}/pdf",
            ALL,
        )
        .success(json!({"success": true, "message": "PDF generated"}))
        .error(json!({"success": false, "message": "Failed to export PDF"}))
        .notes(&[
            "Returns application/pdf on success",
            "Authorization check inside controller",
        ]),
        Endpoint::new(
            "Get invoices by patient",
            Module::Billing,
            Method::GET,
            "/api/invoices/patient/{{patientId}}",
            ALL,
        )
        .success(json!({"success": true, "message": "Invoices retrieved successfully", "data": []}))
        .error(json!({"success": false, "message": "Failed to retrieve invoices"}))
        .notes(&["Authorization check inside controller"]),
        Endpoint::new(
            "Get unpaid invoices",
            Module::Billing,
            Method::GET,
            "/api/invoices/unpaid?limit=50",
            ADMIN_RECEPTIONIST,
        )
        .success(json!({
            "success": true,
            "message": "Unpaid invoices retrieved successfully",
            "data": [],
            "pagination": {"limit": 50}
        }))
        .error(json!({"success": false, "message": "Failed to retrieve unpaid invoices"})),
        Endpoint::new(
            "Get invoice statistics",
            Module::Billing,
            Method::GET,
            "/api/invoices/statistics?fromDate=2026-01-01&toDate=2026-01-31",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Statistics retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to retrieve statistics"})),
    ]
}

fn inventory_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Create medicine",
            Module::Inventory,
            Method::POST,
            "/api/medicines",
            ADMIN_ONLY,
        )
        .json_body(json!({
            "name": "Paracetamol",
            "group": "Analgesic",
            "unit": "VIEN",
            "importPrice": 1000,
            "salePrice": 1500,
            "quantity": 100,
            "expiryDate": "2026-12-31"
        }))
        .success(json!({"success": true, "message": "Medicine created successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Medicine name is required"})),
        Endpoint::new(
            "Update medicine",
            Module::Inventory,
            Method::PUT,
            "/api/medicines/{{medicineId}}",
            ADMIN_ONLY,
        )
        .json_body(json!({"salePrice": 1600, "quantity": 120}))
        .success(json!({"success": true, "message": "Medicine updated successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Medicine not found"})),
        Endpoint::new(
            "Import medicine",
            Module::Inventory,
            Method::POST,
            "/api/medicines/{{medicineId}}/import",
            ADMIN_ONLY,
        )
        .json_body(json!({"quantity": 50, "importPrice": 1000}))
        .success(json!({"success": true, "message": "Medicine imported successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Medicine not found"})),
        Endpoint::new(
            "Get low stock medicines",
            Module::Inventory,
            Method::GET,
            "/api/medicines/low-stock?page=1&limit=10",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get low stock medicines"})),
        Endpoint::new(
            "Get expiring medicines",
            Module::Inventory,
            Method::GET,
            "/api/medicines/expiring?days=30",
            ADMIN_ONLY,
        )
        .success(json!({
            "success": true,
            "message": "Found 0 medicine(s) expiring within 30 day(s)",
            "data": []
        }))
        .error(json!({"success": false, "message": "Failed to get expiring medicines"})),
        Endpoint::new(
            "Auto mark expired medicines",
            Module::Inventory,
            Method::POST,
            "/api/medicines/auto-mark-expired",
            ADMIN_ONLY,
        )
        .success(json!({
            "success": true,
            "message": "Marked 0 medicine(s) as expired",
            "data": {"markedCount": 0}
        }))
        .error(json!({"success": false, "message": "Failed to auto-mark expired medicines"})),
        Endpoint::new(
            "Get medicine import history",
            Module::Inventory,
            Method::GET,
            "/api/medicines/{{medicineId}}/imports",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get import history"})),
        Endpoint::new(
            "Get medicine export history",
            Module::Inventory,
            Method::GET,
            "/api/medicines/{{medicineId}}/exports",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get export history"})),
        Endpoint::new(
            "Mark medicine as expired",
            Module::Inventory,
            Method::POST,
            "/api/medicines/{{medicineId}}/mark-expired",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Medicine marked as expired", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Medicine not found"})),
        Endpoint::new(
            "Delete medicine",
            Module::Inventory,
            Method::DELETE,
            "/api/medicines/{{medicineId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Medicine removed successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Cannot remove medicine with remaining stock"})),
        Endpoint::new(
            "Get all medicines",
            Module::Inventory,
            Method::GET,
            "/api/medicines?page=1&limit=10",
            ALL,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get medicines"})),
        Endpoint::new(
            "Get medicine by ID",
            Module::Inventory,
            Method::GET,
            "/api/medicines/{{medicineId}}",
            ALL,
        )
        .success(json!({"success": true, "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Medicine not found"})),
    ]
}

fn attendance_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Check-in",
            Module::Attendance,
            Method::POST,
            "/api/attendance/check-in",
            ALL,
        )
        .success(json!({"success": true, "message": "CHECK_IN_SUCCESS", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "ALREADY_CHECKED_IN_TODAY"})),
        Endpoint::new(
            "Check-out",
            Module::Attendance,
            Method::POST,
            "/api/attendance/check-out",
            ALL,
        )
        .success(json!({"success": true, "message": "CHECK_OUT_SUCCESS", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "MUST_CHECK_IN_FIRST"})),
        Endpoint::new(
            "Get my attendance",
            Module::Attendance,
            Method::GET,
            "/api/attendance/my?startDate=2026-02-01&endDate=2026-02-28&limit=30",
            ALL,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get attendance"})),
        Endpoint::new(
            "Request leave",
            Module::Attendance,
            Method::POST,
            "/api/attendance/leave-request",
            ALL,
        )
        .json_body(json!({"date": "2026-02-15", "leaveType": "sick", "reason": "Fever"}))
        .success(json!({"success": true, "message": "LEAVE_REQUEST_CREATED", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "CANNOT_REQUEST_LEAVE_FOR_PAST_DATE"})),
        Endpoint::new(
            "Get all attendance",
            Module::Attendance,
            Method::GET,
            "/api/attendance?userId={{userId}}&status=PRESENT&limit=100",
            ADMIN_RECEPTIONIST,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get attendance"})),
        Endpoint::new(
            "Update attendance",
            Module::Attendance,
            Method::PUT,
            "/api/attendance/{{attendanceId}}",
            ADMIN_ONLY,
        )
        .json_body(json!({
            "status": "PRESENT",
            "note": "Adjusted",
            "checkInTime": "2026-02-01T08:00:00Z",
            "checkOutTime": "2026-02-01T17:00:00Z"
        }))
        .success(json!({"success": true, "message": "ATTENDANCE_UPDATED", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "ATTENDANCE_NOT_FOUND"})),
        Endpoint::new("Get all shifts", Module::Attendance, Method::GET, "/api/shifts", ALL)
            .success(json!({"success": true, "data": []}))
            .error(json!({"success": false, "message": "Get shifts failed"})),
        Endpoint::new(
            "Get shift schedule",
            Module::Attendance,
            Method::GET,
            "/api/shifts/schedule?startDate=2026-02-01&endDate=2026-02-28",
            ALL,
        )
        .success(json!({
            "success": true,
            "message": "Shift schedule retrieved successfully",
            "data": {"totalEntries": 0}
        }))
        .error(json!({"success": false, "message": "Invalid date format. Use YYYY-MM-DD"})),
        Endpoint::new(
            "Get shift by ID",
            Module::Attendance,
            Method::GET,
            "/api/shifts/{{shiftId}}",
            ALL,
        )
        .success(json!({"success": true, "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Shift not found"})),
        Endpoint::new("Create shift", Module::Attendance, Method::POST, "/api/shifts", ADMIN_ONLY)
            .json_body(json!({"name": "Morning", "startTime": "08:00", "endTime": "12:00"}))
            .success(json!({"success": true, "data": {"id": 1}}))
            .error(json!({"success": false, "message": "Create shift failed"})),
        Endpoint::new(
            "Update shift",
            Module::Attendance,
            Method::PUT,
            "/api/shifts/{{shiftId}}",
            ADMIN_ONLY,
        )
        .json_body(json!({"name": "Morning", "startTime": "08:00", "endTime": "12:00"}))
        .success(json!({"success": true, "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Shift not found"})),
        Endpoint::new(
            "Delete shift",
            Module::Attendance,
            Method::DELETE,
            "/api/shifts/{{shiftId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Shift deleted"}))
        .error(json!({"success": false, "message": "Shift not found"})),
        Endpoint::new(
            "Get doctors on duty",
            Module::Attendance,
            Method::GET,
            "/api/doctor-shifts/on-duty?shiftId={{shiftId}}&workDate=2026-02-01",
            ALL,
        )
        .no_auth()
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Missing shiftId or workDate"})),
        Endpoint::new(
            "Get available shifts",
            Module::Attendance,
            Method::GET,
            "/api/doctor-shifts/available?workDate=2026-02-01&specialtyId={{specialtyId}}",
            ALL,
        )
        .no_auth()
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "workDate is required (YYYY-MM-DD)"})),
        Endpoint::new(
            "Assign doctor to shift",
            Module::Attendance,
            Method::POST,
            "/api/doctor-shifts",
            ADMIN_ONLY,
        )
        .json_body(json!({"doctorId": "{{doctorId}}", "shiftId": "{{shiftId}}", "workDate": "2026-02-01"}))
        .success(json!({"success": true, "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Missing doctorId/shiftId/workDate"})),
        Endpoint::new(
            "Get doctor shifts",
            Module::Attendance,
            Method::GET,
            "/api/doctor-shifts/doctor/{{doctorId}}",
            ALL,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Get shifts by doctor failed"})),
        Endpoint::new(
            "Unassign doctor from shift",
            Module::Attendance,
            Method::DELETE,
            "/api/doctor-shifts/{{doctorShiftId}}",
            ADMIN_ONLY,
        )
        .json_body(json!({"cancelReason": "Schedule change"}))
        .success(json!({
            "success": true,
            "message": "Doctor unassigned from shift successfully",
            "data": {"totalAppointments": 0}
        }))
        .error(json!({"success": false, "message": "Assignment not found"})),
        Endpoint::new(
            "Preview shift reschedule",
            Module::Attendance,
            Method::GET,
            "/api/doctor-shifts/{{doctorShiftId}}/reschedule-preview",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": {"doctorShiftId": 1, "affectedAppointments": 0}}))
        .error(json!({"success": false, "message": "Shift not found"})),
        Endpoint::new(
            "Cancel and reschedule shift",
            Module::Attendance,
            Method::POST,
            "/api/doctor-shifts/{{doctorShiftId}}/cancel-and-reschedule",
            ADMIN_ONLY,
        )
        .json_body(json!({
            "replacementDoctorId": "{{doctorId}}",
            "reason": "Emergency",
            "cancelReason": "Emergency"
        }))
        .success(json!({"success": true, "message": "Reschedule completed", "data": {"totalAppointments": 0}}))
        .error(json!({"success": false, "message": "Cancel reason is required"}))
        .notes(&["Controller expects cancelReason; validator expects replacementDoctorId and reason"]),
        Endpoint::new(
            "Restore cancelled shift",
            Module::Attendance,
            Method::POST,
            "/api/doctor-shifts/{{doctorShiftId}}/restore",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Shift restored successfully"}))
        .error(json!({"success": false, "message": "Failed to restore shift"})),
    ]
}

fn notification_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Get notifications",
            Module::Notification,
            Method::GET,
            "/api/notifications?page=1&limit=10&isRead=false",
            ALL,
        )
        .success(json!({"success": true, "data": [], "pagination": {"page": 1, "limit": 10}}))
        .error(json!({"success": false, "message": "Failed to get notifications"})),
        Endpoint::new(
            "Get unread count",
            Module::Notification,
            Method::GET,
            "/api/notifications/unread-count",
            ALL,
        )
        .success(json!({"success": true, "count": 0}))
        .error(json!({"success": false, "message": "Failed to get unread count"})),
        Endpoint::new(
            "Mark all as read",
            Module::Notification,
            Method::PUT,
            "/api/notifications/read-all",
            ALL,
        )
        .success(json!({"success": true, "message": "Marked all as read", "count": 10}))
        .error(json!({"success": false, "message": "Failed to mark all as read"})),
        Endpoint::new(
            "Mark notification as read",
            Module::Notification,
            Method::PUT,
            "/api/notifications/{{notificationId}}/read",
            ALL,
        )
        .success(json!({"success": true, "message": "Marked as read"}))
        .error(json!({"success": false, "message": "Notification not found"})),
        Endpoint::new(
            "Delete notification",
            Module::Notification,
            Method::DELETE,
            "/api/notifications/{{notificationId}}",
            ALL,
        )
        .success(json!({"success": true, "message": "Notification deleted"}))
        .error(json!({"success": false, "message": "Notification not found"})),
    ]
}

fn search_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Search patients",
            Module::Search,
            Method::POST,
            "/api/search/patients",
            ADMIN_DOCTOR_RECEPTIONIST,
        )
        .json_body(json!({"keyword": "patient", "gender": "MALE", "page": 1, "limit": 10}))
        .success(json!({
            "success": true,
            "message": "Patients search completed successfully",
            "data": [],
            "pagination": {"page": 1, "limit": 10}
        }))
        .error(json!({"success": false, "message": "Invalid date format in filters"})),
        Endpoint::new(
            "Search appointments",
            Module::Search,
            Method::POST,
            "/api/search/appointments",
            ADMIN_DOCTOR_RECEPTIONIST,
        )
        .json_body(json!({
            "keyword": "patient",
            "status": "WAITING",
            "doctorId": "{{doctorId}}",
            "page": 1,
            "limit": 10
        }))
        .success(json!({
            "success": true,
            "message": "Appointments search completed successfully",
            "data": [],
            "pagination": {"page": 1, "limit": 10}
        }))
        .error(json!({"success": false, "message": "Invalid date format in filters"})),
        Endpoint::new(
            "Search invoices",
            Module::Search,
            Method::POST,
            "/api/search/invoices",
            ADMIN_RECEPTIONIST,
        )
        .json_body(json!({"keyword": "INV", "paymentStatus": "UNPAID", "page": 1, "limit": 10}))
        .success(json!({
            "success": true,
            "message": "Invoices search completed successfully",
            "data": [],
            "pagination": {"page": 1, "limit": 10}
        }))
        .error(json!({"success": false, "message": "Invalid date format in filters"})),
    ]
}

fn specialty_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new("Get specialties", Module::Specialty, Method::GET, "/api/specialties", ALL)
            .no_auth()
            .success(json!({"success": true, "data": []}))
            .error(json!({"success": false, "message": "Get specialties failed"})),
        Endpoint::new(
            "Get doctors by specialty",
            Module::Specialty,
            Method::GET,
            "/api/specialties/{{specialtyId}}/doctors",
            ALL,
        )
        .no_auth()
        .success(json!({
            "success": true,
            "message": "Doctors retrieved successfully",
            "data": {"doctors": []}
        }))
        .error(json!({"success": false, "message": "Specialty not found"})),
    ]
}

fn payroll_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Calculate payroll",
            Module::Payroll,
            Method::POST,
            "/api/payrolls/calculate",
            ADMIN_ONLY,
        )
        .json_body(json!({"userId": "{{userId}}", "month": 1, "year": 2026, "calculateAll": false}))
        .success(json!({"success": true, "message": "Payroll calculated successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "month and year are required"})),
        Endpoint::new(
            "Get payroll statistics",
            Module::Payroll,
            Method::GET,
            "/api/payrolls/statistics?month=1&year=2026",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Payroll statistics retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to retrieve statistics"})),
        Endpoint::new("Get my payrolls", Module::Payroll, Method::GET, "/api/payrolls/my", ALL)
            .success(json!({"success": true, "message": "Your payrolls retrieved successfully", "data": []}))
            .error(json!({"success": false, "message": "Failed to retrieve payrolls"})),
        Endpoint::new(
            "Get payrolls by period",
            Module::Payroll,
            Method::GET,
            "/api/payrolls/period?month=1&year=2026",
            ADMIN_ONLY,
        )
        .success(json!({
            "success": true,
            "message": "Payrolls for period retrieved successfully",
            "data": [],
            "pagination": {}
        }))
        .error(json!({"success": false, "message": "Both month and year are required"})),
        Endpoint::new(
            "Get doctor payrolls",
            Module::Payroll,
            Method::GET,
            "/api/payrolls/doctor/{{doctorId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Doctor payrolls retrieved successfully", "data": []}))
        .error(json!({"success": false, "message": "Doctor not found"})),
        Endpoint::new(
            "Get user payroll history",
            Module::Payroll,
            Method::GET,
            "/api/payrolls/user/{{userId}}",
            ALL,
        )
        .success(json!({"success": true, "message": "Payroll history retrieved successfully", "data": []}))
        .error(json!({"success": false, "message": "You can only view your own payroll history"}))
        .notes(&["Authorization check inside controller"]),
        Endpoint::new(
            "Get payrolls",
            Module::Payroll,
            Method::GET,
            "/api/payrolls?page=1&limit=10",
            ADMIN_ONLY,
        )
        .success(json!({
            "success": true,
            "message": "Payrolls retrieved successfully",
            "data": [],
            "pagination": {"page": 1, "limit": 10}
        }))
        .error(json!({"success": false, "message": "Failed to retrieve payrolls"})),
        Endpoint::new(
            "Get payroll by ID",
            Module::Payroll,
            Method::GET,
            "/api/payrolls/{{payrollId}}",
            ALL,
        )
        .success(json!({"success": true, "message": "Payroll retrieved successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Payroll not found"}))
        .notes(&["Authorization check inside controller"]),
        Endpoint::new(
            "Approve payroll",
            Module::Payroll,
            Method::PUT,
            "/api/payrolls/{{payrollId}}/approve",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Payroll approved successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Failed to approve payroll"})),
        Endpoint::new(
            "Pay payroll",
            Module::Payroll,
            Method::PUT,
            "/api/payrolls/{{payrollId}}/pay",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Payroll marked as paid successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "Failed to mark payroll as paid"})),
        Endpoint::new(
            "Export payroll PDF",
            Module::Payroll,
            Method::GET,
            "/api/payrolls/{{payrollId}}/pdf",
            ALL,
        )
        .success(json!({"success": true, "message": "PDF generated"}))
        .error(json!({"success": false, "message": "Failed to export PDF"}))
        .notes(&[
            "Returns application/pdf on success",
            "Authorization check inside controller",
        ]),
    ]
}

fn permission_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Get all permissions",
            Module::Permission,
            Method::GET,
            "/api/permissions",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Permissions retrieved successfully", "data": {"all": []}}))
        .error(json!({"success": false, "message": "Failed to get permissions"})),
        Endpoint::new(
            "Get modules with permissions",
            Module::Permission,
            Method::GET,
            "/api/permissions/modules",
            ADMIN_ONLY,
        )
        .success(json!({
            "success": true,
            "message": "Modules with permissions retrieved successfully",
            "data": []
        }))
        .error(json!({"success": false, "message": "Failed to get modules"})),
        Endpoint::new(
            "Get role permissions",
            Module::Permission,
            Method::GET,
            "/api/permissions/role/{{roleId}}",
            ADMIN_ONLY,
        )
        .success(json!({
            "success": true,
            "message": "Role permissions retrieved successfully",
            "data": {"role": {"id": 1}, "permissions": []}
        }))
        .error(json!({"success": false, "message": "Role not found"})),
        Endpoint::new(
            "Assign permissions to role",
            Module::Permission,
            Method::POST,
            "/api/permissions/role/{{roleId}}/assign",
            ADMIN_ONLY,
        )
        .json_body(json!({"permissionIds": [1, 2, 3]}))
        .success(json!({
            "success": true,
            "message": "Permissions assigned successfully",
            "data": {"role": {"id": 1}, "permissions": []}
        }))
        .error(json!({"success": false, "message": "permissionIds must be an array"})),
        Endpoint::new(
            "Add permission to role",
            Module::Permission,
            Method::POST,
            "/api/permissions/role/{{roleId}}/add",
            ADMIN_ONLY,
        )
        .json_body(json!({"permissionId": 1}))
        .success(json!({"success": true, "message": "Permission added successfully", "data": {"roleId": 1}}))
        .error(json!({"success": false, "message": "permissionId is required"})),
        Endpoint::new(
            "Remove permission from role",
            Module::Permission,
            Method::DELETE,
            "/api/permissions/role/{{roleId}}/remove/{{permissionId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Permission removed successfully"}))
        .error(json!({"success": false, "message": "Permission not found for this role"})),
        Endpoint::new(
            "Create permission",
            Module::Permission,
            Method::POST,
            "/api/permissions",
            ADMIN_ONLY,
        )
        .json_body(json!({"name": "medicines.view", "description": "View medicines", "module": "medicines"}))
        .success(json!({"success": true, "message": "Permission created successfully", "data": {"id": 1}}))
        .error(json!({"success": false, "message": "name and module are required"})),
        Endpoint::new(
            "Delete permission",
            Module::Permission,
            Method::DELETE,
            "/api/permissions/{{permissionId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Permission deleted successfully"}))
        .error(json!({"success": false, "message": "Permission not found"})),
    ]
}

fn admin_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(
            "Dashboard stats",
            Module::Admin,
            Method::GET,
            "/api/dashboard/stats",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": {}}))
        .error(json!({"success": false, "message": "Failed to get dashboard stats"})),
        Endpoint::new(
            "Dashboard appointments by date",
            Module::Admin,
            Method::GET,
            "/api/dashboard/appointments/2026-02-01",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get dashboard appointments"})),
        Endpoint::new(
            "Dashboard overview",
            Module::Admin,
            Method::GET,
            "/api/dashboard/overview",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": {}}))
        .error(json!({"success": false, "message": "Failed to get dashboard overview"})),
        Endpoint::new(
            "Dashboard recent activities",
            Module::Admin,
            Method::GET,
            "/api/dashboard/recent-activities",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get recent activities"})),
        Endpoint::new(
            "Dashboard quick stats",
            Module::Admin,
            Method::GET,
            "/api/dashboard/quick-stats",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": {}}))
        .error(json!({"success": false, "message": "Failed to get quick stats"})),
        Endpoint::new(
            "Dashboard alerts",
            Module::Admin,
            Method::GET,
            "/api/dashboard/alerts",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "data": []}))
        .error(json!({"success": false, "message": "Failed to get alerts"})),
        Endpoint::new("Dashboard summary", Module::Admin, Method::GET, "/api/dashboard", ADMIN_ONLY)
            .success(json!({"success": true, "data": {}}))
            .error(json!({"success": false, "message": "Failed to get dashboard data"})),
        Endpoint::new(
            "Get audit logs",
            Module::Admin,
            Method::GET,
            "/api/audit-logs?page=1&limit=20",
            ADMIN_ONLY,
        )
        .success(json!({
            "success": true,
            "message": "Audit logs retrieved successfully",
            "data": [],
            "pagination": {"page": 1, "limit": 20}
        }))
        .error(json!({"success": false, "message": "Failed to retrieve audit logs"})),
        Endpoint::new(
            "Get audit trail by record",
            Module::Admin,
            Method::GET,
            "/api/audit-logs/{{tableName}}/{{recordId}}",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Audit trail retrieved successfully", "data": []}))
        .error(json!({"success": false, "message": "Failed to retrieve audit trail"})),
        Endpoint::new(
            "Get user activity logs",
            Module::Admin,
            Method::GET,
            "/api/audit-logs/user/{{userId}}?limit=50",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "User activity retrieved successfully", "data": []}))
        .error(json!({"success": false, "message": "Failed to retrieve user activity"})),
        Endpoint::new(
            "Get my audit logs",
            Module::Admin,
            Method::GET,
            "/api/audit-logs/me?limit=50",
            ALL,
        )
        .success(json!({"success": true, "message": "Your activity retrieved successfully", "data": []}))
        .error(json!({"success": false, "message": "Failed to retrieve your activity"})),
        Endpoint::new(
            "Revenue report",
            Module::Admin,
            Method::GET,
            "/api/reports/revenue?year=2026&month=1",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Revenue report retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to get revenue report"})),
        Endpoint::new(
            "Appointment report",
            Module::Admin,
            Method::GET,
            "/api/reports/appointments?year=2026&month=1",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Appointment report retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to get appointment report"})),
        Endpoint::new(
            "Patient statistics report",
            Module::Admin,
            Method::GET,
            "/api/reports/patient-statistics",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Patient statistics retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to get patient statistics"})),
        Endpoint::new(
            "Expense report",
            Module::Admin,
            Method::GET,
            "/api/reports/expense?year=2026&month=1",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Expense report retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to get expense report"})),
        Endpoint::new(
            "Top medicines report",
            Module::Admin,
            Method::GET,
            "/api/reports/top-medicines?year=2026&month=1&limit=10",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Top medicines report retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to get top medicines report"})),
        Endpoint::new(
            "Medicine alerts report",
            Module::Admin,
            Method::GET,
            "/api/reports/medicine-alerts?daysUntilExpiry=30&minStock=10",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Medicine alerts report retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to get medicine alerts report"})),
        Endpoint::new(
            "Patients by gender report",
            Module::Admin,
            Method::GET,
            "/api/reports/patients-by-gender",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Patients by gender report retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to get patients by gender report"})),
        Endpoint::new(
            "Profit report",
            Module::Admin,
            Method::GET,
            "/api/reports/profit?year=2026&month=1",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "Profit report retrieved successfully", "data": {}}))
        .error(json!({"success": false, "message": "Failed to get profit report"})),
        Endpoint::new(
            "Revenue report PDF",
            Module::Admin,
            Method::GET,
            "/api/reports/revenue/pdf?year=2026&month=1",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "PDF generated"}))
        .error(json!({"success": false, "message": "Failed to get revenue report"}))
        .notes(&["Returns application/pdf on success"]),
        Endpoint::new(
            "Expense report PDF",
            Module::Admin,
            Method::GET,
            "/api/reports/expense/pdf?year=2026&month=1",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "PDF generated"}))
        .error(json!({"success": false, "message": "Failed to get expense report"}))
        .notes(&["Returns application/pdf on success"]),
        Endpoint::new(
            "Profit report PDF",
            Module::Admin,
            Method::GET,
            "/api/reports/profit/pdf?year=2026&month=1",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "PDF generated"}))
        .error(json!({"success": false, "message": "Failed to get profit report"}))
        .notes(&["Returns application/pdf on success"]),
        Endpoint::new(
            "Top medicines report PDF",
            Module::Admin,
            Method::GET,
            "/api/reports/top-medicines/pdf?year=2026&month=1&limit=10",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "PDF generated"}))
        .error(json!({"success": false, "message": "Failed to get top medicines report"}))
        .notes(&["Returns application/pdf on success"]),
        Endpoint::new(
            "Patients by gender report PDF",
            Module::Admin,
            Method::GET,
            "/api/reports/patients-by-gender/pdf",
            ADMIN_ONLY,
        )
        .success(json!({"success": true, "message": "PDF generated"}))
        .error(json!({"success": false, "message": "Failed to get patients by gender report"}))
        .notes(&["Returns application/pdf on success"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Role;

    #[test]
    fn catalog_covers_every_real_module() {
        let catalog = build_catalog();
        for module in Module::ORDER {
            let count = catalog.iter().filter(|e| e.module == module).count();
            if module.is_sentinel() {
                assert_eq!(count, 0, "sentinel module must stay empty");
            } else {
                assert!(count > 0, "module {module} has no endpoints");
            }
        }
    }

    #[test]
    fn every_endpoint_has_roles() {
        for endpoint in build_catalog() {
            assert!(
                !endpoint.roles.is_empty(),
                "endpoint {} has no roles",
                endpoint.name
            );
        }
    }

    #[test]
    fn names_unique_within_role_module_pair() {
        let catalog = build_catalog();
        for role in Role::ORDER {
            for module in Module::ORDER {
                let names: Vec<_> = catalog
                    .iter()
                    .filter(|e| e.module == module && e.visible_to(role))
                    .map(|e| e.name)
                    .collect();
                let mut deduped = names.clone();
                deduped.sort_unstable();
                deduped.dedup();
                assert_eq!(names.len(), deduped.len(), "duplicate name in {role}/{module}");
            }
        }
    }

    #[test]
    fn catalog_size_is_stable() {
        assert_eq!(build_catalog().len(), 154);
    }
}
