use crate::Rating;

use std::str::FromStr;

#[test]
fn test_rating_round_trips_through_str() {
    for rating in [Rating::Up, Rating::Down] {
        assert_eq!(Rating::from_str(rating.as_str()).unwrap(), rating);
    }
}

#[test]
fn test_rating_from_str_rejects_unknown() {
    let err = Rating::from_str("sideways").unwrap_err();
    assert!(err.to_string().contains("sideways"));
}

#[test]
fn test_rating_name_outlives_the_value() {
    let names: Vec<&'static str> = [Some(Rating::Up), None, Some(Rating::Down)]
        .iter()
        .map(|rating| rating.map(|r| r.as_str()).unwrap_or("unrated"))
        .collect();

    assert_eq!(names, ["up", "unrated", "down"]);
}
