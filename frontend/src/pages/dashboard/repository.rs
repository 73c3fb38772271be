use crate::api::{ApiClient, ApiError, DashboardStats, LeaveStatistics};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Runs the six admin reads concurrently. A failed read only zeroes its
    /// own metrics; the result is built once every read has settled.
    pub async fn fetch_admin_stats(&self) -> DashboardStats {
        let (departments, classes, teachers, students, class_teachers, statistics) = futures::join!(
            self.client.list_departments(),
            self.client.list_classes(),
            self.client.list_teachers(),
            self.client.list_students(),
            self.client.list_class_teachers(),
            self.client.get_leave_statistics(),
        );
        let statistics: LeaveStatistics = degrade("leave-statistics", statistics).unwrap_or_default();
        DashboardStats {
            departments: count("departments", departments),
            classes: count("classes", classes),
            teachers: count("teachers", teachers),
            students: count("students", students),
            class_teachers: count("class-teachers", class_teachers),
            total_leaves: statistics.total_leaves,
            pending_leaves: statistics.pending_leaves,
            approved_leaves: statistics.approved_leaves,
            rejected_leaves: statistics.rejected_leaves,
        }
    }

    pub async fn fetch_user_stats(&self) -> Result<DashboardStats, ApiError> {
        self.client.get_dashboard_stats().await
    }

    /// Stats for the profile card. Errors are swallowed and show as zeros.
    pub async fn fetch_profile_stats(&self) -> DashboardStats {
        match self.fetch_user_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                tracing::debug!(error = %err, "profile stats unavailable");
                DashboardStats::default()
            }
        }
    }
}

fn degrade<T>(metric: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(metric, code = %err.code, error = %err, "dashboard metric unavailable");
            None
        }
    }
}

fn count<T>(metric: &str, result: Result<Vec<T>, ApiError>) -> u64 {
    degrade(metric, result).map_or(0, |items| items.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::api_client;
    use httpmock::prelude::*;
    use serde_json::json;

    async fn mock_admin_reads(server: &MockServer, failing: &str) {
        let bodies = [
            (
                "departments",
                json!([
                    { "departmentId": "d1", "departmentName": "Science" },
                    { "departmentId": "d2", "departmentName": "Arts" }
                ]),
            ),
            ("classes", json!([{ "classId": "c1", "className": "BSc-1" }])),
            (
                "teachers",
                json!([{ "teacherId": "t1", "name": "Mr. Rao", "email": "rao@example.edu" }]),
            ),
            (
                "students",
                json!([
                    { "studentId": "s1", "name": "Asha", "email": "asha@example.edu" },
                    { "studentId": "s2", "name": "Ravi", "email": "ravi@example.edu" },
                    { "studentId": "s3", "name": "Meera", "email": "meera@example.edu" }
                ]),
            ),
            ("class-teachers", json!([{ "classTeacherId": "ct1" }])),
            (
                "leave-statistics",
                json!({
                    "totalLeaves": 9,
                    "pendingLeaves": 4,
                    "approvedLeaves": 3,
                    "rejectedLeaves": 2
                }),
            ),
        ];
        for (name, body) in bodies {
            let path = format!("/api/admin/{name}");
            if name == failing {
                server
                    .mock_async(|when, then| {
                        when.method(GET).path(path);
                        then.status(500).json_body(json!({ "message": "boom" }));
                    })
                    .await;
            } else {
                server
                    .mock_async(|when, then| {
                        when.method(GET).path(path);
                        then.status(200).json_body(body);
                    })
                    .await;
            }
        }
    }

    #[tokio::test]
    async fn all_admin_reads_succeed() {
        let server = MockServer::start_async().await;
        mock_admin_reads(&server, "").await;

        let stats = DashboardRepository::new(api_client(&server))
            .fetch_admin_stats()
            .await;
        assert_eq!(
            stats,
            DashboardStats {
                departments: 2,
                classes: 1,
                teachers: 1,
                students: 3,
                class_teachers: 1,
                total_leaves: 9,
                pending_leaves: 4,
                approved_leaves: 3,
                rejected_leaves: 2,
            }
        );
    }

    #[tokio::test]
    async fn one_failed_read_degrades_only_its_metric() {
        let server = MockServer::start_async().await;
        mock_admin_reads(&server, "teachers").await;

        let stats = DashboardRepository::new(api_client(&server))
            .fetch_admin_stats()
            .await;
        assert_eq!(stats.teachers, 0);
        assert_eq!(stats.departments, 2);
        assert_eq!(stats.students, 3);
        assert_eq!(stats.class_teachers, 1);
        assert_eq!(stats.pending_leaves, 4);
    }

    #[tokio::test]
    async fn failed_statistics_zero_the_leave_counts() {
        let server = MockServer::start_async().await;
        mock_admin_reads(&server, "leave-statistics").await;

        let stats = DashboardRepository::new(api_client(&server))
            .fetch_admin_stats()
            .await;
        assert_eq!(stats.total_leaves, 0);
        assert_eq!(stats.rejected_leaves, 0);
        assert_eq!(stats.classes, 1);
    }

    #[tokio::test]
    async fn profile_stats_fail_silently() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/dashboard/stats");
                then.status(500);
            })
            .await;

        let stats = DashboardRepository::new(api_client(&server))
            .fetch_profile_stats()
            .await;
        assert_eq!(stats, DashboardStats::default());
    }
}
