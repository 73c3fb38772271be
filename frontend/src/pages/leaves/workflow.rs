use crate::api::{ApiError, ApprovalAction, ApprovalRequest, LeaveStatus};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn action(self) -> ApprovalAction {
        match self {
            Decision::Approve => ApprovalAction::Approve,
            Decision::Reject => ApprovalAction::Reject,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approve => f.write_str("approve"),
            Decision::Reject => f.write_str("reject"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot {decision} a leave that is {from}")]
pub struct InvalidTransition {
    pub from: LeaveStatus,
    pub decision: Decision,
}

/// Only a pending leave can be decided; approved and rejected are terminal.
pub fn transition(from: &LeaveStatus, decision: Decision) -> Result<LeaveStatus, InvalidTransition> {
    match (from, decision) {
        (LeaveStatus::Pending, Decision::Approve) => Ok(LeaveStatus::Approved),
        (LeaveStatus::Pending, Decision::Reject) => Ok(LeaveStatus::Rejected),
        _ => Err(InvalidTransition {
            from: from.clone(),
            decision,
        }),
    }
}

/// Decisions to offer for a leave in `status`.
pub fn available_decisions(status: &LeaveStatus) -> Vec<Decision> {
    [Decision::Approve, Decision::Reject]
        .into_iter()
        .filter(|decision| transition(status, *decision).is_ok())
        .collect()
}

/// Builds the approval body. Rejections need a reason; approvals always send
/// an empty one.
pub fn approval_request(
    leave_id: &str,
    decision: Decision,
    reason: &str,
) -> Result<ApprovalRequest, ApiError> {
    if leave_id.trim().is_empty() {
        return Err(ApiError::validation("Leave id is required"));
    }
    let rejection_reason = match decision {
        Decision::Approve => String::new(),
        Decision::Reject => {
            let reason = reason.trim();
            if reason.is_empty() {
                return Err(ApiError::validation("Rejection reason is required"));
            }
            reason.to_string()
        }
    };
    Ok(ApprovalRequest {
        leave_id: leave_id.to_string(),
        action: decision.action(),
        rejection_reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_the_only_decidable_state() {
        assert_eq!(
            transition(&LeaveStatus::Pending, Decision::Approve),
            Ok(LeaveStatus::Approved)
        );
        assert_eq!(
            transition(&LeaveStatus::Pending, Decision::Reject),
            Ok(LeaveStatus::Rejected)
        );
        for terminal in [LeaveStatus::Approved, LeaveStatus::Rejected] {
            for decision in [Decision::Approve, Decision::Reject] {
                assert!(transition(&terminal, decision).is_err());
            }
        }
        let err = transition(&LeaveStatus::Unknown("CANCELLED".into()), Decision::Approve)
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot approve a leave that is CANCELLED");
    }

    #[test]
    fn only_pending_leaves_offer_actions() {
        assert_eq!(
            available_decisions(&LeaveStatus::Pending),
            vec![Decision::Approve, Decision::Reject]
        );
        assert!(available_decisions(&LeaveStatus::Rejected).is_empty());
    }

    #[test]
    fn reject_requires_trimmed_reason() {
        let err = approval_request("l-1", Decision::Reject, "   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.error, "Rejection reason is required");

        let request = approval_request("l-1", Decision::Reject, " Short notice ").unwrap();
        assert_eq!(request.rejection_reason, "Short notice");
        assert_eq!(request.action, ApprovalAction::Reject);
    }

    #[test]
    fn approve_ignores_any_reason() {
        let request = approval_request("l-1", Decision::Approve, "ignored").unwrap();
        assert_eq!(request.rejection_reason, "");
        assert_eq!(request.action, ApprovalAction::Approve);
    }
}
