/// Keeps the records where the lower-cased `query` appears in at least one
/// of the lower-cased values returned by `fields`. A blank query keeps
/// everything. Order is preserved.
///
/// Only the blank check trims; a query with surrounding spaces must match
/// them literally.
pub fn filter_by_query<T, F>(items: &[T], query: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<String>,
{
    if query.trim().is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields(item)
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        subject: &'static str,
        owner: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { subject: "Medical leave", owner: "Asha" },
            Row { subject: "Family event", owner: "Ravi" },
            Row { subject: "Sports meet", owner: "Meera" },
        ]
    }

    fn fields(row: &Row) -> Vec<String> {
        vec![row.subject.to_string(), row.owner.to_string()]
    }

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(filter_by_query(&rows(), "", fields), rows());
        assert_eq!(filter_by_query(&rows(), "   ", fields), rows());
    }

    #[test]
    fn match_is_case_insensitive_over_any_field() {
        let hits = filter_by_query(&rows(), "RAVI", fields);
        assert_eq!(hits, vec![rows()[1].clone()]);
        let hits = filter_by_query(&rows(), "e", fields);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn result_is_an_ordered_subset_and_idempotent() {
        let once = filter_by_query(&rows(), "me", fields);
        assert_eq!(
            once.iter().map(|r| r.owner).collect::<Vec<_>>(),
            vec!["Asha", "Meera"]
        );
        assert!(once.iter().all(|r| rows().contains(r)));
        assert_eq!(filter_by_query(&once, "me", fields), once);
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_needle() {
        assert!(filter_by_query(&rows(), " asha", fields).is_empty());
        assert_eq!(filter_by_query(&rows(), "y e", fields).len(), 1);
    }
}
