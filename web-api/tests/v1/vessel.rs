use chrono::Duration;
use web_api::routes::v1::vessel::VesselStatus;

use super::helper::TestHelper;

#[tokio::test]
async fn test_vessels_returns_the_full_seeded_fleet() {
    let helper = TestHelper::spawn().await;

    let vessels = helper.get_vessels().await;

    assert_eq!(vessels.len(), 44);

    let adagio = &vessels[0];
    assert_eq!(adagio.id, 1);
    assert_eq!(adagio.name, "Adagio");
    assert_eq!(adagio.location, "Beit Hanoun");
    assert_eq!(adagio.tracker_id, "GARMIN-0001");
    assert_eq!(adagio.status, VesselStatus::Sailing);
    assert_eq!(adagio.trajectory.len(), 1);
}

#[tokio::test]
async fn test_latest_vessels_advances_the_simulation() {
    let helper = TestHelper::spawn().await;

    let before = helper.get_vessels().await;
    let after = helper.get_latest_vessels().await;

    for (a, b) in before.iter().zip(&after) {
        assert_eq!(a.id, b.id);
        assert!(b.last_update >= a.last_update);
        assert_eq!(b.trajectory.len(), 2);
        assert!((4.0..=12.0).contains(&b.speed));
        assert!((0.0..360.0).contains(&b.heading));
    }
}

#[tokio::test]
async fn test_vessel_track_follows_the_live_trail() {
    let helper = TestHelper::spawn().await;

    helper.get_latest_vessels().await;
    helper.get_latest_vessels().await;

    let track = helper.get_vessel_track(1).await;

    assert_eq!(track.len(), 3);
}

#[tokio::test]
async fn test_vessel_track_is_empty_for_unknown_ids() {
    let helper = TestHelper::spawn().await;

    assert!(helper.get_vessel_track(9999).await.is_empty());
}

#[tokio::test]
async fn test_vessels_at_time_clamps_before_mission_start() {
    let helper = TestHelper::spawn().await;
    let mission = helper.get_mission().await;

    let at_start = helper.get_vessels_at_time(mission.start).await;
    let before_start = helper
        .get_vessels_at_time(mission.start - Duration::days(3))
        .await;

    assert_eq!(at_start.len(), 44);
    for (a, b) in at_start.iter().zip(&before_start) {
        assert_eq!(a.latitude, b.latitude);
        assert_eq!(a.longitude, b.longitude);
        assert_eq!(a.last_update, b.last_update);
    }
}

#[tokio::test]
async fn test_vessels_at_time_at_mission_end_has_a_full_trail() {
    let helper = TestHelper::spawn().await;
    let mission = helper.get_mission().await;

    let vessels = helper.get_vessels_at_time(mission.end).await;

    for vessel in &vessels {
        assert_eq!(vessel.trajectory.len(), 50);
        assert_eq!(vessel.last_update, mission.end);
        assert!((4.0..=12.0).contains(&vessel.speed));
        assert_eq!(vessel.status, VesselStatus::Sailing);
    }
}

#[tokio::test]
async fn test_vessels_at_time_is_stable_for_the_same_timestamp() {
    let helper = TestHelper::spawn().await;
    let mission = helper.get_mission().await;
    let halfway = mission.start + Duration::days(15);

    let first = helper.get_vessels_at_time(halfway).await;
    let second = helper.get_vessels_at_time(halfway).await;

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.latitude, b.latitude);
        assert_eq!(a.longitude, b.longitude);
        assert_eq!(a.heading, b.heading);
        assert_eq!(a.speed, b.speed);
    }
}
