//! Property tests for the search/category filter.

use directory::{categories, filter, Provider, ProviderId, Snapshot};
use proptest::prelude::*;

const SPECIALITIES: &[&str] = &["Cardiology", "Dermatology", "ENT", "Neurology", "cardiology"];
const HOSPITALS: &[&str] = &["St. Mary", "City Clinic", "North General", "Lakeside"];

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    prop::collection::vec(
        (
            "[A-Za-z]{1,8}( [A-Za-z]{1,8})?",
            prop::sample::select(SPECIALITIES),
            prop::sample::select(HOSPITALS),
            any::<bool>(),
        ),
        0..12,
    )
    .prop_map(|rows| {
        let providers = rows
            .into_iter()
            .enumerate()
            .map(|(i, (name, speciality, hospital, available))| Provider {
                id: ProviderId(i as i64),
                name,
                speciality: speciality.to_string(),
                hospital: hospital.to_string(),
                profile_image: None,
                available: Some(available),
            })
            .collect();
        Snapshot::new(providers).unwrap()
    })
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(SPECIALITIES).prop_map(str::to_string),
    ]
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Za-z. ]{1,4}"]
}

fn satisfies(p: &Provider, query: &str, category: &str) -> bool {
    let q = query.to_lowercase();
    let category_ok = category.is_empty() || p.speciality == category;
    let query_ok = q.is_empty()
        || p.name.to_lowercase().contains(&q)
        || p.speciality.to_lowercase().contains(&q)
        || p.hospital.to_lowercase().contains(&q);
    category_ok && query_ok
}

proptest! {
    #[test]
    fn empty_criteria_is_identity(snapshot in snapshot_strategy()) {
        prop_assert_eq!(filter(&snapshot, "", ""), snapshot.to_vec());
    }

    #[test]
    fn filter_is_sound_and_complete(
        snapshot in snapshot_strategy(),
        query in query_strategy(),
        category in category_strategy(),
    ) {
        let result = filter(&snapshot, &query, &category);
        let expected: Vec<Provider> = snapshot
            .iter()
            .filter(|p| satisfies(p, &query, &category))
            .cloned()
            .collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn filter_preserves_snapshot_order(
        snapshot in snapshot_strategy(),
        query in query_strategy(),
        category in category_strategy(),
    ) {
        // Ids are assigned in snapshot order, so retained ids must ascend.
        let ids: Vec<ProviderId> = filter(&snapshot, &query, &category)
            .iter()
            .map(|p| p.id)
            .collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn categories_are_distinct_and_complete(snapshot in snapshot_strategy()) {
        let cats = categories(&snapshot);
        for p in &snapshot {
            prop_assert_eq!(cats.iter().filter(|c| **c == p.speciality).count(), 1);
        }
        prop_assert!(cats.iter().all(|c| snapshot.iter().any(|p| &p.speciality == c)));
    }
}

#[test]
fn concrete_scenario() {
    let snapshot = Snapshot::new(vec![
        Provider {
            id: ProviderId(1),
            name: "Alice".into(),
            speciality: "Cardiology".into(),
            hospital: "St. Mary".into(),
            profile_image: None,
            available: Some(true),
        },
        Provider {
            id: ProviderId(2),
            name: "Bob".into(),
            speciality: "Dermatology".into(),
            hospital: "City Clinic".into(),
            profile_image: None,
            available: None,
        },
    ])
    .unwrap();

    let ids = |v: Vec<Provider>| v.into_iter().map(|p| p.id.0).collect::<Vec<_>>();
    assert_eq!(ids(filter(&snapshot, "derm", "")), vec![2]);
    assert_eq!(ids(filter(&snapshot, "", "Cardiology")), vec![1]);
    assert_eq!(ids(filter(&snapshot, "city", "Dermatology")), vec![2]);
    assert!(filter(&snapshot, "xyz", "").is_empty());
}
