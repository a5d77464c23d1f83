use flotilla_core::{Coordinates, SeedVessel, VesselId, VesselStatus};

const fn seed(
    id: i64,
    name: &'static str,
    location: &'static str,
    latitude: f64,
    longitude: f64,
    speed: f64,
    heading: f64,
) -> SeedVessel {
    SeedVessel {
        id: VesselId::new(id),
        name,
        location,
        position: Coordinates {
            latitude,
            longitude,
        },
        status: VesselStatus::Sailing,
        speed,
        heading,
    }
}

/// The fixed fleet roster the engine is seeded with. Literal configuration
/// data, never fetched.
pub const SEED_ROSTER: &[SeedVessel] = &[
    seed(1, "Adagio", "Beit Hanoun", 31.5123, 32.0, 8.0, 90.0),
    seed(2, "Adara", "Beit Lahia", 31.542, 31.9, 7.0, 85.0),
    seed(3, "Ahed Tamimi", "", 31.5531, 32.1, 9.0, 95.0),
    seed(4, "All In", "Khan Yunis", 31.3478, 31.8, 6.0, 80.0),
    seed(5, "Allakatalla", "Rafah", 31.2914, 31.7, 7.0, 75.0),
    seed(6, "Alma", "Deir al-Balah", 31.4168, 31.85, 8.0, 88.0),
    seed(7, "Amsterdam", "Al Tantura", 31.4991, 32.05, 9.0, 92.0),
    seed(8, "Aurora", "Heidi sails to Gaza", 31.3982, 31.82, 7.0, 83.0),
    seed(9, "Australe", "", 31.521, 31.95, 8.0, 87.0),
    seed(10, "Captain Nikos", "Akka", 32.933, 32.5, 6.0, 180.0),
    seed(11, "Catalina", "Al Khalil", 31.5301, 32.15, 9.0, 94.0),
    seed(12, "Dir yassine", "Deir Yassin", 31.7915, 32.3, 7.0, 135.0),
    seed(13, "Estrella Y Manuel", "Al Lydd", 31.9497, 32.4, 8.0, 145.0),
    seed(14, "Fair Lady", "Al Qudse", 31.7767, 32.25, 6.0, 130.0),
    seed(15, "Florida", "Arwas al Sharif", 31.927, 32.35, 7.0, 140.0),
    seed(16, "Free Willy", "Tilza - Gaza city", 31.5234, 31.98, 8.0, 89.0),
    seed(17, "Grande Blu", "Arhia", 31.911, 32.38, 9.0, 142.0),
    seed(18, "Hio", "Beit Lahm", 31.705, 32.22, 7.0, 125.0),
    seed(19, "Huga", "Haifa", 32.8191, 32.48, 6.0, 175.0),
    seed(20, "Inana", "Jenia", 32.4606, 32.7, 8.0, 160.0),
    seed(21, "Jeannot III", "Nablus", 32.2211, 32.65, 7.0, 155.0),
    seed(22, "Karma", "Yafa", 32.0853, 32.42, 9.0, 147.0),
    seed(23, "Mango", "Hind - Tal al Hawa - Gaza", 31.4992, 31.93, 8.0, 86.0),
    seed(24, "Maria Cristina", "Tulkarem", 32.3115, 32.55, 7.0, 152.0),
    seed(25, "Marinette", "Safad", 32.9658, 32.85, 6.0, 185.0),
    seed(26, "Meteque", "Qalqilya", 32.1896, 32.45, 8.0, 150.0),
    seed(27, "Narigado", "", 31.5555, 32.08, 9.0, 93.0),
    seed(28, "Nefertiti", "Al Ramla", 31.929, 32.39, 7.0, 143.0),
    seed(29, "Olive Branch", "", 31.4682, 31.88, 8.0, 84.0),
    seed(30, "Peace Runner", "", 31.5834, 31.97, 7.0, 88.0),
    seed(31, "Pisces", "Sabra & Shatila", 33.8547, 33.1, 6.0, 200.0),
    seed(32, "Queen", "", 31.5012, 31.96, 8.0, 87.0),
    seed(33, "Rachel Corrie", "", 31.4445, 31.87, 9.0, 82.0),
    seed(34, "Raggamuffin", "Rahat", 31.3931, 32.18, 7.0, 100.0),
    seed(35, "Saphira", "", 31.5223, 31.99, 8.0, 88.0),
    seed(36, "Sea Gull", "", 31.4956, 31.92, 7.0, 85.0),
    seed(37, "Sebbe Als", "Taanekh", 32.5589, 32.72, 6.0, 165.0),
    seed(38, "Sentiero Selvaggio", "", 31.5134, 31.94, 8.0, 86.0),
    seed(39, "Shaima", "Al Jabalia", 31.532, 32.02, 9.0, 91.0),
    seed(40, "Spirit of Humanity", "", 31.4734, 31.91, 7.0, 85.0),
    seed(41, "Taurus", "", 31.5456, 32.06, 8.0, 92.0),
    seed(42, "Unity", "", 31.5089, 32.03, 9.0, 90.0),
    seed(43, "Victoria", "Bir al-Saba", 31.2519, 32.2, 7.0, 105.0),
    seed(44, "Zephyr", "", 31.4867, 31.89, 8.0, 84.0),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_roster_ids_are_unique_and_dense() {
        let ids: HashSet<i64> = SEED_ROSTER.iter().map(|s| s.id.into_inner()).collect();

        assert_eq!(ids.len(), SEED_ROSTER.len());
        assert_eq!(SEED_ROSTER.len(), 44);
        assert!((1..=44).all(|id| ids.contains(&id)));
    }

    #[test]
    fn test_roster_speeds_and_headings_are_in_range() {
        assert!(
            SEED_ROSTER
                .iter()
                .all(|s| (4.0..=12.0).contains(&s.speed) && (0.0..360.0).contains(&s.heading))
        );
    }
}
