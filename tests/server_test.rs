use chrono::Duration;
use ltp_proxy::{
    api::server::bind_listener,
    config::{AppEnv, Config, DEFAULT_UPSTREAM_URL},
    market::service::MarketService,
    router::router_with_service,
};
use serde_json::Value;

fn config_with_host(host: &str) -> Config {
    Config {
        port: 0,
        host: host.into(),
        app_env: AppEnv::Test,
        upstream_url: DEFAULT_UPSTREAM_URL.into(),
        upstream_timeout: Duration::seconds(2),
    }
}

#[tokio::test]
async fn binds_hostname() {
    let listener = bind_listener(&config_with_host("localhost")).await.unwrap();
    assert!(listener.local_addr().unwrap().ip().is_loopback());
}

#[tokio::test]
async fn binds_ipv4_literal() {
    let listener = bind_listener(&config_with_host("127.0.0.1")).await.unwrap();
    assert_ne!(listener.local_addr().unwrap().port(), 0);
}

#[tokio::test]
async fn serves_health_over_tcp() {
    let config = config_with_host("localhost");
    let listener = bind_listener(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = router_with_service(MarketService::from_config(&config).unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let body: Value = reqwest::get(format!("http://{}/api/v1/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "success");
}
