use crate::api::LeaveStatus;

pub fn status_rank(status: &LeaveStatus) -> u8 {
    match status {
        LeaveStatus::Pending => 1,
        LeaveStatus::Approved => 2,
        LeaveStatus::Rejected => 3,
        LeaveStatus::Unknown(_) => 99,
    }
}

/// Stable: records with equal rank keep their relative order.
pub fn sort_by_status<T, F>(items: &mut [T], status: F)
where
    F: Fn(&T) -> &LeaveStatus,
{
    items.sort_by_key(|item| status_rank(status(item)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(u32, LeaveStatus)> {
        vec![
            (1, LeaveStatus::Rejected),
            (2, LeaveStatus::Unknown("CANCELLED".into())),
            (3, LeaveStatus::Pending),
            (4, LeaveStatus::Approved),
            (5, LeaveStatus::Pending),
            (6, LeaveStatus::Rejected),
        ]
    }

    #[test]
    fn orders_pending_approved_rejected_then_unknown() {
        let mut rows = sample();
        sort_by_status(&mut rows, |row| &row.1);
        let ids: Vec<u32> = rows.iter().map(|row| row.0).collect();
        assert_eq!(ids, vec![3, 5, 4, 1, 6, 2]);
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let mut once = sample();
        sort_by_status(&mut once, |row| &row.1);
        let mut twice = once.clone();
        sort_by_status(&mut twice, |row| &row.1);
        assert_eq!(once, twice);
    }
}
