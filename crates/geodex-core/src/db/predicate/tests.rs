use crate::{
    config::QueryConfig,
    db::{
        predicate::{BoundingBox, FilterProgram, RatingRange, filter},
        query::{QueryParams, validate},
    },
    model::{building::Building, rating::RatingScale},
    test_fixtures::{fixture_records, ids},
};

// Validate, compile and filter the fixture set, returning matching ids.
fn matching(params: &QueryParams) -> Vec<String> {
    let records = fixture_records();
    let config = QueryConfig::default();
    let query = validate(params, &config).expect("fixture params should validate");
    let program = FilterProgram::compile(&query, &config.rating_scale);

    ids(&filter(&records, &program))
}

fn id_list(expected: &[&str]) -> Vec<String> {
    expected.iter().map(ToString::to_string).collect()
}

#[test]
fn no_filters_match_everything_in_input_order() {
    let all = matching(&QueryParams::new());

    assert_eq!(all.len(), 13);
    assert_eq!(all.first().map(String::as_str), Some("b-01"));
    assert_eq!(all.last().map(String::as_str), Some("b-13"));
}

#[test]
fn usage_values_are_alternatives() {
    assert_eq!(
        matching(&QueryParams::new().usage(["residential"])),
        id_list(&["b-02", "b-04", "b-06", "b-10"])
    );
    assert_eq!(
        matching(&QueryParams::new().usage(["industrial", "health"])),
        id_list(&["b-05", "b-09", "b-12"])
    );
}

#[test]
fn usage_match_is_exact() {
    assert!(matching(&QueryParams::new().usage(["Residential"])).is_empty());
    assert!(matching(&QueryParams::new().usage(["resid"])).is_empty());
}

#[test]
fn rating_min_keeps_grades_at_least_as_good() {
    assert_eq!(
        matching(&QueryParams::new().dpe_min("B")),
        id_list(&["b-02", "b-04", "b-10", "b-12"])
    );
}

#[test]
fn rating_max_keeps_grades_at_least_as_bad() {
    assert_eq!(
        matching(&QueryParams::new().dpe_max("E")),
        id_list(&["b-03", "b-05", "b-08", "b-09"])
    );
}

#[test]
fn both_rating_bounds_apply_together() {
    // best bound C keeps A..C, worst bound B keeps B..G
    assert_eq!(
        matching(&QueryParams::new().dpe_min("C").dpe_max("B")),
        id_list(&["b-01", "b-02", "b-07", "b-12"])
    );

    // disjoint bounds match nothing
    assert!(matching(&QueryParams::new().dpe_min("A").dpe_max("G")).is_empty());
    assert!(matching(&QueryParams::new().dpe_min("B").dpe_max("C")).is_empty());
}

#[test]
fn unknown_rating_only_passes_an_inactive_range() {
    assert!(matching(&QueryParams::new()).contains(&"b-13".to_string()));
    assert!(!matching(&QueryParams::new().dpe_max("A")).contains(&"b-13".to_string()));
    assert!(!matching(&QueryParams::new().dpe_min("G")).contains(&"b-13".to_string()));
}

#[test]
fn inactive_range_admits_unrecognized_ratings() {
    let range = RatingRange::default();

    assert!(!range.is_active());
    assert!(range.admits(None));
}

#[test]
fn search_is_case_insensitive_over_name_address_and_city() {
    // name
    assert_eq!(matching(&QueryParams::new().search("HORIZON")), id_list(&["b-01"]));
    // address
    assert_eq!(matching(&QueryParams::new().search("quai")), id_list(&["b-01", "b-04"]));
    // city
    assert_eq!(matching(&QueryParams::new().search("lyon")), id_list(&["b-04"]));
    // non-ASCII text folds too
    assert_eq!(matching(&QueryParams::new().search("RÉSIDENCE")), id_list(&["b-02"]));
}

#[test]
fn search_matches_any_of_the_three_fields() {
    assert_eq!(
        matching(&QueryParams::new().search("paris")),
        id_list(&["b-02", "b-03", "b-07", "b-11", "b-12", "b-13"])
    );
}

#[test]
fn bbox_keeps_points_inside() {
    let bbox = BoundingBox::new(2.2, 48.8, 2.4, 48.9);

    assert_eq!(
        matching(&QueryParams::new().bbox(bbox)),
        id_list(&["b-01", "b-02", "b-03", "b-07", "b-12", "b-13"])
    );
}

#[test]
fn bbox_edges_are_inclusive() {
    let point = BoundingBox::new(4.8344, 45.7676, 4.8344, 45.7676);

    assert_eq!(matching(&QueryParams::new().bbox(point)), id_list(&["b-04"]));
}

#[test]
fn filters_combine_conjunctively() {
    let params = QueryParams::new()
        .usage(["residential", "education", "health"])
        .dpe_min("C")
        .search("paris")
        .bbox(BoundingBox::new(2.2, 48.8, 2.4, 48.9));

    assert_eq!(matching(&params), id_list(&["b-02", "b-07", "b-12"]));
}

#[test]
fn no_match_yields_empty_set() {
    assert!(matching(&QueryParams::new().search("nowhere-at-all")).is_empty());
    assert!(matching(&QueryParams::new().usage(["warehouse"])).is_empty());
}

#[test]
fn custom_scale_drives_rating_bounds() {
    let scale = RatingScale::new(["G", "F", "E", "D", "C", "B", "A"]).expect("reversed scale");
    let config = QueryConfig {
        rating_scale: scale,
        ..QueryConfig::default()
    };
    let records: Vec<Building> = fixture_records();
    let query = validate(&QueryParams::new().dpe_min("F"), &config).expect("F is on the scale");
    let program = FilterProgram::compile(&query, &config.rating_scale);

    assert_eq!(ids(&filter(&records, &program)), id_list(&["b-05", "b-08"]));
}
