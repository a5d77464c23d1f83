use chrono::{Duration, TimeZone, Utc};

use super::helper::TestHelper;

#[tokio::test]
async fn test_mission_returns_the_configured_window() {
    let helper = TestHelper::spawn().await;

    let mission = helper.get_mission().await;

    let start = Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();
    assert_eq!(mission.start, start);
    assert_eq!(mission.end, start + Duration::days(30));
}
