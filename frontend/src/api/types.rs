use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::utils::time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Teacher => "TEACHER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn can_approve(&self) -> bool {
        matches!(self, Role::Teacher | Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub role: Role,
    pub user_id: String,
    pub name: String,
    pub email: String,
}

impl LoginResponse {
    pub fn user(&self) -> User {
        User {
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_department_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub confirmation_code: String,
    pub new_password: String,
}

/// Lifecycle status of a leave. Values outside the contract are kept in
/// `Unknown` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Unknown(String),
}

impl LeaveStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
            LeaveStatus::Unknown(raw) => raw.as_str(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }
}

impl From<&str> for LeaveStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "PENDING" => LeaveStatus::Pending,
            "APPROVED" => LeaveStatus::Approved,
            "REJECTED" => LeaveStatus::Rejected,
            other => LeaveStatus::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LeaveStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LeaveStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(LeaveStatus::from(raw.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveResponse {
    pub leave_id: String,
    #[serde(default)]
    pub applicant_id: Option<String>,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub applicant_role: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub subject: String,
    pub reason: String,
    pub status: LeaveStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub reported_to_name: Option<String>,
    #[serde(default)]
    pub approved_by_name: Option<String>,
    #[serde(default)]
    pub rejected_by_name: Option<String>,
    #[serde(default)]
    pub applied_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub rejected_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
}

impl LeaveResponse {
    pub fn total_days(&self) -> i64 {
        time::inclusive_days(self.from_date, self.to_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeaveRequest {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub subject: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalAction {
    Approve,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub leave_id: String,
    pub action: ApprovalAction,
    pub rejection_reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub departments: u64,
    pub classes: u64,
    pub teachers: u64,
    pub students: u64,
    pub class_teachers: u64,
    pub total_leaves: u64,
    pub pending_leaves: u64,
    pub approved_leaves: u64,
    pub rejected_leaves: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveStatistics {
    pub total_leaves: u64,
    pub pending_leaves: u64,
    pub approved_leaves: u64,
    pub rejected_leaves: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: String,
    pub department_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    pub department_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub class_id: String,
    pub class_name: String,
    #[serde(default)]
    pub department: Option<Department>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRequest {
    pub class_name: String,
    pub department_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub teacher_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<Department>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub class_entity: Option<ClassRecord>,
    #[serde(default)]
    pub department: Option<Department>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTeacher {
    pub class_teacher_id: String,
    #[serde(default)]
    pub class_entity: Option<ClassRecord>,
    #[serde(default)]
    pub teacher: Option<Teacher>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTeacherRequest {
    pub class_id: String,
    pub teacher_id: String,
}

/// Class entry from the unauthenticated registration lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicClass {
    pub class_id: String,
    pub class_name: String,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditEntityType {
    Leave,
    User,
    Class,
    Department,
    Teacher,
    Student,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub audit_id: String,
    pub entity_type: AuditEntityType,
    pub entity_id: String,
    pub action: String,
    #[serde(default)]
    pub old_value: Option<Value>,
    #[serde(default)]
    pub new_value: Option<Value>,
    #[serde(default)]
    pub action_by: Option<String>,
    #[serde(default)]
    pub action_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub children: Vec<HierarchyNode>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl ToastPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "top-right",
            ToastPosition::TopLeft => "top-left",
            ToastPosition::BottomRight => "bottom-right",
            ToastPosition::BottomLeft => "bottom-left",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "top-right" => Some(ToastPosition::TopRight),
            "top-left" => Some(ToastPosition::TopLeft),
            "bottom-right" => Some(ToastPosition::BottomRight),
            "bottom-left" => Some(ToastPosition::BottomLeft),
            _ => None,
        }
    }
}

pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    pub theme: Theme,
    pub toast_position: ToastPosition,
    pub toast_duration: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            toast_position: ToastPosition::TopRight,
            toast_duration: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

/// Server payload for `/api/settings`; every field is optional so a partial
/// document merges over the current settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettingsPatch {
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub toast_position: Option<ToastPosition>,
    #[serde(default)]
    pub toast_duration: Option<u32>,
}

impl UiSettings {
    pub fn merged(&self, patch: &UiSettingsPatch) -> UiSettings {
        UiSettings {
            theme: patch.theme.unwrap_or(self.theme),
            toast_position: patch.toast_position.unwrap_or(self.toast_position),
            toast_duration: patch.toast_duration.unwrap_or(self.toast_duration),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsEnvelope<T> {
    #[serde(default)]
    pub ui_settings: Option<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, VALIDATION_ERROR)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, UNKNOWN)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, REQUEST_FAILED)
    }

    /// Error for a non-success HTTP status. `message` is the server's
    /// `message` field when one was sent.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let code = if status == 401 {
            UNAUTHORIZED.to_string()
        } else {
            format!("HTTP_{}", status)
        };
        let error = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Request failed (HTTP {})", status));
        Self {
            error,
            code,
            status: Some(status),
            details: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == VALIDATION_ERROR
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == UNAUTHORIZED
    }
}
