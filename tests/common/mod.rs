use cicd_demo_service::config::AppConfig;
use cicd_demo_service::metrics::init_metrics;
use cicd_demo_service::startup::Application;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Use random port for testing (port 0)
        let config = AppConfig {
            app_version: "0.0.0-test".to_string(),
            build_date: "2024-01-01T00:00:00+00:00".to_string(),
            git_commit: "deadbeef".to_string(),
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            debug: false,
            hostname: "test-host".to_string(),
            aws_region: "us-east-1".to_string(),
        };

        let metrics_handle = init_metrics();

        let app = Application::build(config, metrics_handle)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let address = format!("http://127.0.0.1:{}", port);
        let client = reqwest::Client::new();

        // Wait for the server to be ready by polling the health endpoint
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address, client }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
