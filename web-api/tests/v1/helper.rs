use chrono::{DateTime, SecondsFormat, Utc};
use web_api::{
    routes::v1::{
        mission::MissionDateRange,
        vessel::{TrackPosition, Vessel},
    },
    settings::{ApiSettings, Environment, Settings},
    startup::App,
};

pub struct TestHelper {
    address: String,
    client: reqwest::Client,
}

impl TestHelper {
    pub async fn spawn() -> TestHelper {
        let settings = Settings {
            log_level: "debug".into(),
            api: ApiSettings {
                ip: "127.0.0.1".into(),
                port: 0,
                num_workers: Some(1),
            },
            engine: engine::Settings {
                fetch_delay: std::time::Duration::ZERO,
                ..Default::default()
            },
            environment: Environment::Test,
        };

        let app = App::build(&settings).await;
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(app.run());

        TestHelper {
            address,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_vessels(&self) -> Vec<Vessel> {
        self.get("vessels").await
    }

    pub async fn get_latest_vessels(&self) -> Vec<Vessel> {
        self.get("vessels/latest").await
    }

    pub async fn get_vessels_at_time(&self, timestamp: DateTime<Utc>) -> Vec<Vessel> {
        self.get(&format!(
            "vessels_at_time?timestamp={}",
            timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
        ))
        .await
    }

    pub async fn get_vessel_track(&self, vessel_id: i64) -> Vec<TrackPosition> {
        self.get(&format!("vessel_track/{vessel_id}")).await
    }

    pub async fn get_mission(&self) -> MissionDateRange {
        self.get("mission").await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> T {
        let response = self
            .client
            .get(format!("{}/v1.0/{path}", self.address))
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());

        response.json().await.unwrap()
    }
}
