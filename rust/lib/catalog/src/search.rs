//! Name filtering for lists and candidate pickers.
//!
//! One policy everywhere: case-insensitive substring match on the name,
//! with the query trimmed. A blank query matches everything.

use crate::record::EntityRecord;

pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

pub fn filter_by_name<'a, I>(records: I, query: &str) -> Vec<&'a EntityRecord>
where
    I: IntoIterator<Item = &'a EntityRecord>,
{
    records
        .into_iter()
        .filter(|r| matches_query(&r.name, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models() -> Vec<EntityRecord> {
        ["Camry", "Land Cruiser", "Corolla", "كامري"]
            .iter()
            .enumerate()
            .map(|(i, n)| EntityRecord::new(i.to_string(), *n, i as u32 + 1))
            .collect()
    }

    #[test]
    fn case_insensitive() {
        let all = models();
        let hits: Vec<_> = filter_by_name(&all, "CAM").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(hits, vec!["Camry"]);
        let hits: Vec<_> = filter_by_name(&all, "cruiser").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(hits, vec!["Land Cruiser"]);
    }

    #[test]
    fn substring_anywhere() {
        let all = models();
        let hits: Vec<_> = filter_by_name(&all, "la").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(hits, vec!["Land Cruiser", "Corolla"]);
    }

    #[test]
    fn arabic_names() {
        let all = models();
        let hits = filter_by_name(&all, "كام");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "كامري");
    }

    #[test]
    fn blank_query_matches_all() {
        let all = models();
        assert_eq!(filter_by_name(&all, "").len(), 4);
        assert_eq!(filter_by_name(&all, "   ").len(), 4);
    }

    #[test]
    fn no_match() {
        let all = models();
        assert!(filter_by_name(&all, "tesla").is_empty());
    }
}
