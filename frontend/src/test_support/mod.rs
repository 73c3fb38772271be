#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, LeaveResponse, LeaveStatus, Role, User};
    use crate::state::{Store, StoreHandle};
    use crate::utils::storage::MemoryStorage;
    use chrono::NaiveDate;
    use httpmock::MockServer;
    use serde_json::{json, Value};

    pub fn api_client(server: &MockServer) -> ApiClient {
        ApiClient::new_with_base_url(server.url("/api"))
    }

    pub fn memory_store() -> StoreHandle {
        StoreHandle::new(Store::hydrate(Box::new(MemoryStorage::new())))
    }

    pub fn user(role: Role) -> User {
        User {
            user_id: format!("u-{}", role.as_str().to_lowercase()),
            name: "Asha Verma".into(),
            email: "asha@example.edu".into(),
            role,
        }
    }

    pub fn login_json(role: &str) -> Value {
        json!({
            "accessToken": "tok-1",
            "refreshToken": "refresh-1",
            "role": role,
            "userId": "u-1",
            "name": "Asha Verma",
            "email": "asha@example.edu"
        })
    }

    pub fn leave_json(id: &str, status: &str) -> Value {
        let mut value = json!({
            "leaveId": id,
            "applicantId": "u-1",
            "applicantName": "Asha Verma",
            "applicantRole": "STUDENT",
            "fromDate": "2024-01-10",
            "toDate": "2024-01-12",
            "subject": "Medical",
            "reason": "Fever",
            "status": status,
            "reportedToName": "Mr. Rao",
            "className": "BSc-1",
            "departmentName": "Science"
        });
        if status == "REJECTED" {
            value["rejectionReason"] = json!("Insufficient notice");
        }
        value
    }

    pub fn leave(id: &str, status: LeaveStatus) -> LeaveResponse {
        LeaveResponse {
            leave_id: id.into(),
            applicant_id: Some("u-1".into()),
            applicant_name: Some("Asha Verma".into()),
            applicant_role: Some("STUDENT".into()),
            from_date: date(2024, 1, 10),
            to_date: date(2024, 1, 12),
            subject: "Medical".into(),
            reason: "Fever".into(),
            rejection_reason: matches!(status, LeaveStatus::Rejected)
                .then(|| "Insufficient notice".to_string()),
            status,
            reported_to_name: Some("Mr. Rao".into()),
            approved_by_name: None,
            rejected_by_name: None,
            applied_at: None,
            approved_at: None,
            rejected_at: None,
            class_name: Some("BSc-1".into()),
            department_name: Some("Science".into()),
        }
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
