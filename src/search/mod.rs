//! Catalog search filter.
//!
//! A stable, case-insensitive, literal-substring filter over the
//! searchable text fields of a record sequence: name, description/reason,
//! and location. This is a direct transcription of the frontend's
//! `toLowerCase().includes(...)` predicate, so there is no tokenization,
//! no fuzzy matching, and no query syntax; a query like `"."` matches
//! only records whose fields literally contain a dot.

use crate::catalog::Record;

/// Keep the records whose name, details, or location contains `query` as
/// a case-insensitive substring.
///
/// The empty query is the identity. Input order is preserved, and a record
/// without a details field matches only on name or location.
pub fn filter<'a, R, I>(records: I, query: &str) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            field_matches(record.name(), &needle)
                || record.details().is_some_and(|d| field_matches(d, &needle))
                || field_matches(record.location(), &needle)
        })
        .collect()
}

fn field_matches(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        id: u32,
        name: String,
        details: Option<String>,
        location: String,
    }

    impl Record for Entry {
        fn id(&self) -> u32 {
            self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn details(&self) -> Option<&str> {
            self.details.as_deref()
        }

        fn location(&self) -> &str {
            &self.location
        }
    }

    fn entry(id: u32, name: &str, details: Option<&str>, location: &str) -> Entry {
        Entry {
            id,
            name: name.to_string(),
            details: details.map(str::to_string),
            location: location.to_string(),
        }
    }

    fn fixture() -> Vec<Entry> {
        vec![
            entry(1, "Yosemite National Park", None, "California, USA"),
            entry(2, "Iceland Highlands", Some("Northern Lights and glaciers"), "Iceland"),
            entry(3, "Climate Action Network", Some("Ver. 2 initiatives"), "Global"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = fixture();
        let result = filter(&records, "");
        let ids: Vec<u32> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive() {
        let records = fixture();
        let upper = filter(&records, "YOSEMITE");
        let lower = filter(&records, "yosemite");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id, 1);
        let upper_ids: Vec<u32> = upper.iter().map(|r| r.id).collect();
        let lower_ids: Vec<u32> = lower.iter().map(|r| r.id).collect();
        assert_eq!(upper_ids, lower_ids);
    }

    #[test]
    fn test_matches_any_searchable_field() {
        let records = fixture();
        // name
        assert_eq!(filter(&records, "highlands")[0].id, 2);
        // details
        assert_eq!(filter(&records, "glaciers")[0].id, 2);
        // location
        assert_eq!(filter(&records, "california")[0].id, 1);
    }

    #[test]
    fn test_missing_details_never_matches() {
        // Entry 1 has no details field; a query that would only hit a
        // details text must not match it.
        let records = vec![entry(1, "Yosemite National Park", None, "California, USA")];
        assert!(filter(&records, "glaciers").is_empty());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let records = fixture();
        assert!(filter(&records, "zzz").is_empty());
    }

    #[test]
    fn test_query_is_literal_not_a_pattern() {
        let records = fixture();
        // "." must match only a literal dot, which only entry 3 contains.
        let dot = filter(&records, ".");
        assert_eq!(dot.len(), 1);
        assert_eq!(dot[0].id, 3);
        // Other regex metacharacters match nothing here.
        assert!(filter(&records, ".*").is_empty());
        assert!(filter(&records, "a|b").is_empty());
    }

    #[test]
    fn test_filter_is_subset_and_idempotent() {
        let records = fixture();
        let once = filter(&records, "land");
        assert!(once.len() <= records.len());

        let twice = filter(once.iter().copied(), "land");
        let once_ids: Vec<u32> = once.iter().map(|r| r.id).collect();
        let twice_ids: Vec<u32> = twice.iter().map(|r| r.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_order_preserved() {
        let records = vec![
            entry(5, "Alpha Lake", None, "North"),
            entry(2, "Lake Beta", None, "South"),
            entry(9, "Lakeshore", None, "East"),
        ];
        let ids: Vec<u32> = filter(&records, "lake").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let records = fixture();
        // A single space matches records whose fields contain a space,
        // mirroring the frontend's untrimmed input handling.
        let result = filter(&records, " ");
        let ids: Vec<u32> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
