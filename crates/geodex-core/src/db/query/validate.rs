use crate::{
    config::QueryConfig,
    db::{
        order::SortField,
        predicate::RatingRange,
        query::{QueryParams, ValidatedQuery, ValidationError},
    },
    model::rating::{Rating, RatingScale},
};

/// Validate caller input against `config`.
///
/// Checks run in a fixed order (`dpeMin`, `dpeMax`, `sort`, `bbox`) and the
/// first failure is returned; nothing is partially applied.
pub fn validate(params: &QueryParams, config: &QueryConfig) -> Result<ValidatedQuery, ValidationError> {
    let scale = &config.rating_scale;

    let best = resolve_rating_bound("dpeMin", params.dpe_min.as_deref(), scale)?;
    let worst = resolve_rating_bound("dpeMax", params.dpe_max.as_deref(), scale)?;
    let sort = resolve_sort_field(params.sort.as_deref())?;

    if let Some(bbox) = &params.bbox {
        bbox.validate()?;
    }

    Ok(ValidatedQuery {
        usage: params.usage.clone(),
        rating: RatingRange { best, worst },
        search: params.search.clone().filter(|term| !term.is_empty()),
        bbox: params.bbox,
        sort,
        page_size: config.resolve_page_size(params.limit),
        cursor: params.cursor.clone().filter(|cursor| !cursor.is_empty()),
    })
}

// Empty strings count as absent bounds.
fn resolve_rating_bound(
    param: &'static str,
    value: Option<&str>,
    scale: &RatingScale,
) -> Result<Option<Rating>, ValidationError> {
    let Some(label) = value.filter(|label| !label.is_empty()) else {
        return Ok(None);
    };

    scale
        .rating(label)
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidRatingBound {
            param,
            value: label.to_string(),
            allowed: scale.to_string(),
        })
}

fn resolve_sort_field(value: Option<&str>) -> Result<SortField, ValidationError> {
    let Some(name) = value.filter(|name| !name.is_empty()) else {
        return Ok(SortField::default());
    };

    SortField::parse(name).ok_or_else(|| ValidationError::InvalidSortField {
        value: name.to_string(),
        allowed: SortField::selectable_names(),
    })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::predicate::{BoundingBox, BoundingBoxError};

    fn check(params: &QueryParams) -> Result<ValidatedQuery, ValidationError> {
        validate(params, &QueryConfig::default())
    }

    #[test]
    fn empty_params_validate_to_defaults() {
        let query = check(&QueryParams::new()).expect("empty params are valid");

        assert!(query.usage.is_empty());
        assert!(!query.rating.is_active());
        assert_eq!(query.sort, SortField::Id);
        assert_eq!(query.page_size, 20);
        assert_eq!(query.bbox, None);
    }

    #[test]
    fn rating_bounds_resolve_to_ordinals() {
        let query = check(&QueryParams::new().dpe_min("B").dpe_max("D")).expect("valid bounds");
        let scale = RatingScale::default();

        assert_eq!(query.rating.best, scale.rating("B"));
        assert_eq!(query.rating.worst, scale.rating("D"));
    }

    #[test]
    fn invalid_rating_bounds_name_the_parameter() {
        let err = check(&QueryParams::new().dpe_min("X")).expect_err("X is not a grade");
        assert_eq!(
            err.to_string(),
            "Invalid dpeMin: X. Must be one of: A, B, C, D, E, F, G"
        );

        let err = check(&QueryParams::new().dpe_max("Z")).expect_err("Z is not a grade");
        assert!(err.to_string().starts_with("Invalid dpeMax: Z"));

        // lowercase labels are not grades either
        check(&QueryParams::new().dpe_min("b")).expect_err("labels are case-sensitive");
    }

    #[test]
    fn invalid_sort_lists_selectable_fields() {
        let err = check(&QueryParams::new().sort("surface")).expect_err("unknown sort field");

        assert_eq!(
            err,
            ValidationError::InvalidSortField {
                value: "surface".to_string(),
                allowed: "name, dpe, city, constructionYear".to_string(),
            }
        );
    }

    #[test]
    fn bounding_box_is_validated() {
        let err = check(&QueryParams::new().bbox(BoundingBox::new(2.4, 48.9, 2.2, 48.8)))
            .expect_err("inverted bbox must fail");
        assert_eq!(err, ValidationError::InvalidBoundingBox(BoundingBoxError::Inverted));
        assert!(err.to_string().contains("Invalid bbox"));

        let query = check(&QueryParams::new().bbox(BoundingBox::new(2.3, 48.8, 2.3, 48.8)))
            .expect("zero-width bbox is valid");
        assert!(query.bbox.is_some());
    }

    #[test]
    fn first_failure_wins_in_fixed_order() {
        let params = QueryParams::new()
            .dpe_min("X")
            .sort("surface")
            .bbox(BoundingBox::new(10.0, 0.0, 0.0, 0.0));
        let err = check(&params).expect_err("invalid params must fail");

        assert!(matches!(
            err,
            ValidationError::InvalidRatingBound { param: "dpeMin", .. }
        ));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let params = QueryParams::new().dpe_min("").sort("").search("").cursor("");
        let query = check(&params).expect("empty strings are absent");

        assert!(!query.rating.is_active());
        assert_eq!(query.sort, SortField::Id);
        assert_eq!(query.search, None);
        assert_eq!(query.cursor, None);
    }

    #[test]
    fn id_is_the_default_order_but_not_selectable() {
        let err = check(&QueryParams::new().sort("id")).expect_err("id is not selectable");

        assert_eq!(
            err,
            ValidationError::InvalidSortField {
                value: "id".to_string(),
                allowed: "name, dpe, city, constructionYear".to_string(),
            }
        );
        assert!(err.to_string().starts_with("Invalid sort: id"));
        assert_eq!(check(&QueryParams::new()).map(|q| q.sort), Ok(SortField::Id));
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(check(&QueryParams::new().limit(0)).map(|q| q.page_size), Ok(1));
        assert_eq!(check(&QueryParams::new().limit(250)).map(|q| q.page_size), Ok(100));
    }

    #[test]
    fn custom_scale_validates_its_own_labels() {
        let config = QueryConfig {
            rating_scale: RatingScale::new(["gold", "silver", "bronze"]).expect("scale"),
            ..QueryConfig::default()
        };

        validate(&QueryParams::new().dpe_min("silver"), &config).expect("silver is a grade");
        let err = validate(&QueryParams::new().dpe_min("A"), &config)
            .expect_err("A is not on the custom scale");
        assert_eq!(
            err.to_string(),
            "Invalid dpeMin: A. Must be one of: gold, silver, bronze"
        );
    }
}
