use crate::{
    api::{ApiError, ApplyLeaveRequest, LeaveResponse},
    utils::time::{format_display_date, parse_input_date},
};
use chrono::NaiveDate;

/// Raw text of the apply-leave form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveForm {
    pub from_date: String,
    pub to_date: String,
    pub subject: String,
    pub reason: String,
}

impl LeaveForm {
    pub fn new(
        from_date: impl Into<String>,
        to_date: impl Into<String>,
        subject: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            from_date: from_date.into(),
            to_date: to_date.into(),
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    pub fn reset(&mut self) {
        *self = LeaveForm::default();
    }

    pub fn to_request(&self) -> Result<ApplyLeaveRequest, ApiError> {
        let from_date = required_date(&self.from_date, "From date")?;
        let to_date = required_date(&self.to_date, "To date")?;
        if to_date < from_date {
            return Err(ApiError::validation("To date cannot be before from date"));
        }
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(ApiError::validation("Subject is required"));
        }
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(ApiError::validation("Reason is required"));
        }
        Ok(ApplyLeaveRequest {
            from_date,
            to_date,
            subject: subject.to_string(),
            reason: reason.to_string(),
        })
    }
}

fn required_date(raw: &str, label: &str) -> Result<NaiveDate, ApiError> {
    if raw.trim().is_empty() {
        return Err(ApiError::validation(format!("{label} is required")));
    }
    parse_input_date(raw)
        .ok_or_else(|| ApiError::validation(format!("{label} must be in YYYY-MM-DD format")))
}

/// Fields searched on the applicant's own list.
pub fn applicant_fields(leave: &LeaveResponse) -> Vec<String> {
    vec![
        leave.subject.clone(),
        leave.reason.clone(),
        leave.status.to_string(),
        leave.reported_to_name.clone().unwrap_or_default(),
        format_display_date(leave.from_date),
        format_display_date(leave.to_date),
    ]
}

/// Fields searched on approver lists.
pub fn approver_fields(leave: &LeaveResponse) -> Vec<String> {
    vec![
        leave.applicant_name.clone().unwrap_or_default(),
        leave.class_name.clone().unwrap_or_default(),
        leave.subject.clone(),
        leave.reason.clone(),
        format_display_date(leave.from_date),
        format_display_date(leave.to_date),
    ]
}

/// Approver fields plus the rejection reason, for the processed-leave history.
pub fn history_fields(leave: &LeaveResponse) -> Vec<String> {
    let mut fields = approver_fields(leave);
    fields.push(leave.rejection_reason.clone().unwrap_or_default());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LeaveStatus;
    use crate::components::search::filter_by_query;
    use crate::test_support::helpers::{date, leave};

    #[test]
    fn valid_form_is_trimmed_into_request() {
        let request = LeaveForm::new("2024-01-10", "2024-01-12", "  Medical ", "Fever\n")
            .to_request()
            .unwrap();
        assert_eq!(request.from_date, date(2024, 1, 10));
        assert_eq!(request.to_date, date(2024, 1, 12));
        assert_eq!(request.subject, "Medical");
        assert_eq!(request.reason, "Fever");
    }

    #[test]
    fn invalid_forms_are_rejected_with_messages() {
        let cases = [
            (LeaveForm::new("", "2024-01-12", "s", "r"), "From date is required"),
            (
                LeaveForm::new("10/01/2024", "2024-01-12", "s", "r"),
                "From date must be in YYYY-MM-DD format",
            ),
            (
                LeaveForm::new("2024-01-12", "2024-01-10", "s", "r"),
                "To date cannot be before from date",
            ),
            (LeaveForm::new("2024-01-10", "2024-01-10", "  ", "r"), "Subject is required"),
            (LeaveForm::new("2024-01-10", "2024-01-10", "s", ""), "Reason is required"),
        ];
        for (form, message) in cases {
            let err = form.to_request().unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.error, message);
        }
    }

    #[test]
    fn approver_search_matches_applicant_and_formatted_date() {
        let mut other = leave("l-2", LeaveStatus::Pending);
        other.applicant_name = Some("Ravi Kumar".into());
        other.from_date = date(2024, 3, 4);
        other.to_date = date(2024, 3, 4);
        let items = vec![leave("l-1", LeaveStatus::Pending), other];

        let hits = filter_by_query(&items, "ravi", approver_fields);
        assert_eq!(hits.len(), 1);
        let hits = filter_by_query(&items, "jan 10", approver_fields);
        assert_eq!(hits[0].leave_id, "l-1");
    }

    #[test]
    fn applicant_search_includes_status_and_reporter() {
        let items = vec![
            leave("l-1", LeaveStatus::Approved),
            leave("l-2", LeaveStatus::Rejected),
        ];
        let hits = filter_by_query(&items, "reject", applicant_fields);
        assert_eq!(hits.len(), 1);
        assert_eq!(filter_by_query(&items, "rao", applicant_fields).len(), 2);
    }

    #[test]
    fn history_search_includes_rejection_reason() {
        let items = vec![
            leave("l-1", LeaveStatus::Approved),
            leave("l-2", LeaveStatus::Rejected),
        ];
        let hits = filter_by_query(&items, "insufficient", history_fields);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].leave_id, "l-2");
        assert!(filter_by_query(&items, "insufficient", approver_fields).is_empty());
    }
}
