//! Local search over the loaded profile list. There is no server-side
//! search; every query filters the list already in memory.

use api::Profile;

/// Case-insensitive substring match over the fields a query can hit: plate
/// number, alias, owner first name, and description. An empty or
/// whitespace-only query returns the full list.
pub fn filter_profiles<'a>(profiles: &'a [Profile], query: &str) -> Vec<&'a Profile> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return profiles.iter().collect();
    }

    profiles
        .iter()
        .filter(|p| {
            p.plate_number.to_lowercase().contains(&query)
                || p.first_name.to_lowercase().contains(&query)
                || p
                    .alias
                    .as_ref()
                    .is_some_and(|a| a.to_lowercase().contains(&query))
                || p
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(plate: &str, name: &str, alias: Option<&str>, description: Option<&str>) -> Profile {
        Profile {
            id: format!("CA_{plate}"),
            plate_number: plate.to_string(),
            first_name: name.to_string(),
            state: "California".to_string(),
            description: description.map(str::to_string),
            alias: alias.map(str::to_string),
            created_at: None,
        }
    }

    fn sample() -> Vec<Profile> {
        vec![
            profile("ABC123", "Sam", None, Some("Daily driver")),
            profile("XYZ789", "Riley", Some("ROADTRIP"), None),
            profile("MYPLATE", "Alex", None, Some("Track weekends")),
        ]
    }

    #[test]
    fn test_empty_query_returns_full_list() {
        let profiles = sample();
        assert_eq!(filter_profiles(&profiles, "").len(), 3);
        assert_eq!(filter_profiles(&profiles, "   ").len(), 3);
    }

    #[test]
    fn test_case_insensitive_plate_match() {
        let profiles = sample();
        let results = filter_profiles(&profiles, "abc");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].plate_number, "ABC123");
    }

    #[test]
    fn test_matches_alias_name_and_description() {
        let profiles = sample();
        assert_eq!(filter_profiles(&profiles, "roadtrip").len(), 1);
        assert_eq!(filter_profiles(&profiles, "riley").len(), 1);
        assert_eq!(filter_profiles(&profiles, "track")[0].plate_number, "MYPLATE");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let profiles = sample();
        assert!(filter_profiles(&profiles, "zzzzzz").is_empty());
    }

    #[test]
    fn test_result_is_exact_subset() {
        let profiles = sample();
        let results = filter_profiles(&profiles, "a");
        for p in &profiles {
            let should_match = p.plate_number.to_lowercase().contains('a')
                || p.first_name.to_lowercase().contains('a')
                || p.alias.as_ref().is_some_and(|a| a.to_lowercase().contains('a'))
                || p.description.as_ref().is_some_and(|d| d.to_lowercase().contains('a'));
            assert_eq!(results.iter().any(|r| r.id == p.id), should_match);
        }
    }
}
