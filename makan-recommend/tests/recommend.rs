//! Integration coverage for the ranked recommendation flow, from snapshot
//! construction through scoring to JSON serialisation.

use geo::Coord;
use makan_core::test_support::MemoryStore;
use makan_core::{CampusStore, Canteen, LocationBlock, Stall, User, UserPreferences};
use makan_recommend::{Confidence, RecommendationEngine, StallSnapshot};
use rstest::rstest;

// One degree of latitude on the reference sphere.
const METERS_PER_LAT_DEGREE: f64 = 111_194.926_644_558_74;

const ORIGIN: Coord<f64> = Coord {
    x: 103.6831,
    y: 1.3483,
};

#[expect(
    clippy::float_arithmetic,
    reason = "tests position blocks at known distances"
)]
fn north_of_origin(meters: f64) -> Coord<f64> {
    Coord {
        x: ORIGIN.x,
        y: ORIGIN.y + meters / METERS_PER_LAT_DEGREE,
    }
}

fn two_canteen_campus() -> (Vec<Canteen>, Vec<LocationBlock>) {
    let canteens = vec![
        Canteen::new(1, "North Spine Food Court", "North Spine"),
        Canteen::new(2, "South Spine Food Court", "South Spine"),
    ];
    let blocks = vec![
        LocationBlock::new(100, "Hall 7").with_coords(ORIGIN),
        LocationBlock::new(51, "North Spine")
            .with_coords(north_of_origin(200.0))
            .with_nearest_canteen(1),
        LocationBlock::new(52, "South Spine")
            .with_coords(north_of_origin(800.0))
            .with_nearest_canteen(2),
    ];
    (canteens, blocks)
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
fn weighted_scenario_ranks_the_preferred_nearby_stall_first() {
    // Stall A: Chinese, 10 min wait, rating 4.5, 200 m away.
    // Stall B: Western, 25 min wait, rating 3.0, 800 m away.
    let stalls = vec![
        Stall::new(1, 1, "Ah Hock Noodles", "Chinese")
            .expect("valid stall")
            .with_queue(8, 10)
            .with_rating("4.5"),
        Stall::new(2, 2, "Campus Grill", "Western")
            .expect("valid stall")
            .with_queue(12, 25)
            .with_rating("3.0"),
    ];
    let (canteens, blocks) = two_canteen_campus();
    let preferences = UserPreferences::new()
        .with_cuisine("Chinese")
        .with_max_queue_minutes(30)
        .with_max_walk_meters(1000.0);
    let user = User::new(1).at_block(100);
    let snapshot = StallSnapshot {
        stalls: &stalls,
        canteens: &canteens,
        blocks: &blocks,
    };

    let ranked = RecommendationEngine::new().recommend(&user, Some(&preferences), None, &snapshot);

    assert_eq!(ranked.len(), 2);
    let first = ranked.first().expect("two entries");
    let second = ranked.get(1).expect("two entries");
    assert_eq!(first.stall.id, 1);
    assert_eq!(second.stall.id, 2);

    assert!((first.score - 0.863_3).abs() < 1e-3, "got {}", first.score);
    assert!((second.score - 0.308_3).abs() < 1e-3, "got {}", second.score);
    assert!((first.breakdown.preference - 1.0).abs() < 1e-6);
    assert!((first.breakdown.proximity - 0.8).abs() < 1e-3);
    assert!((second.breakdown.preference - 0.3).abs() < 1e-6);
    assert!((second.breakdown.proximity - 0.2).abs() < 1e-3);

    let first_distance = first.distance_m.expect("distance known");
    let second_distance = second.distance_m.expect("distance known");
    assert!((first_distance - 200.0).abs() < 0.5);
    assert!((second_distance - 800.0).abs() < 0.5);
    assert!(ranked.iter().all(|s| s.confidence == Confidence::High));
}

#[rstest]
fn overlong_wait_is_excluded_regardless_of_other_scores() {
    let stalls = vec![
        Stall::new(1, 1, "Slow Wok", "Chinese")
            .expect("valid stall")
            .with_queue(30, 45)
            .with_rating("5.0"),
    ];
    let (canteens, blocks) = two_canteen_campus();
    let preferences = UserPreferences::new()
        .with_cuisine("Chinese")
        .with_max_queue_minutes(30);
    let user = User::new(1).at_block(100);
    let snapshot = StallSnapshot {
        stalls: &stalls,
        canteens: &canteens,
        blocks: &blocks,
    };

    let ranked = RecommendationEngine::new().recommend(&user, Some(&preferences), None, &snapshot);
    assert!(ranked.is_empty());
}

#[rstest]
fn store_snapshot_drives_the_engine_end_to_end() {
    let (canteens, blocks) = two_canteen_campus();
    let stalls = vec![
        Stall::new(1, 1, "Ah Hock Noodles", "Chinese")
            .expect("valid stall")
            .with_queue(8, 10)
            .with_rating("4.5"),
        Stall::new(2, 2, "Campus Grill", "Western")
            .expect("valid stall")
            .with_queue(12, 25)
            .with_rating("3.0"),
    ];
    let store = MemoryStore::default()
        .with_stalls(stalls)
        .with_canteens(canteens)
        .with_blocks(blocks)
        .with_user(User::new(7).at_block(100))
        .with_preferences(7, UserPreferences::new().with_cuisine("Chinese"));

    let stalls: Vec<Stall> = store.stalls().collect();
    let canteens: Vec<Canteen> = store.canteens().collect();
    let blocks: Vec<LocationBlock> = store.blocks().collect();
    let user = store.user(7).expect("seeded user");
    let preferences = store.preferences(7);
    let snapshot = StallSnapshot {
        stalls: &stalls,
        canteens: &canteens,
        blocks: &blocks,
    };

    let ranked =
        RecommendationEngine::new().recommend(&user, preferences.as_ref(), None, &snapshot);

    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|s| s.confidence == Confidence::High));
    assert!(
        ranked
            .iter()
            .zip(ranked.iter().skip(1))
            .all(|(a, b)| a.score >= b.score)
    );
}

#[rstest]
fn scored_stalls_serialise_one_json_object_each() {
    let stalls = vec![
        Stall::new(1, 1, "Ah Hock Noodles", "Chinese")
            .expect("valid stall")
            .with_queue(8, 10)
            .with_rating("4.5"),
    ];
    let (canteens, blocks) = two_canteen_campus();
    let user = User::new(1).at_block(100);
    let snapshot = StallSnapshot {
        stalls: &stalls,
        canteens: &canteens,
        blocks: &blocks,
    };

    let ranked = RecommendationEngine::new().recommend(&user, None, None, &snapshot);
    let json = serde_json::to_value(&ranked).expect("serialisable");

    let entries = json.as_array().expect("a JSON array");
    assert_eq!(entries.len(), 1);
    let entry = entries.first().expect("one entry");
    for field in ["stall", "canteen", "distance_m", "score", "breakdown", "confidence"] {
        assert!(entry.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(
        entry.get("confidence").and_then(|v| v.as_str()),
        Some("medium"),
    );
}
