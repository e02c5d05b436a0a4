use super::*;

use std::fs;

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn config_for(assets_dir: &Path) -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        assets_dir: assets_dir.to_path_buf(),
    }
}

#[tokio::test]
async fn healthz_returns_ok() {
    let assets = tempfile::tempdir().unwrap();
    let site = tempfile::tempdir().unwrap();
    let base = spawn(static_routes(&config_for(assets.path()), site.path())).await;

    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn serves_files_from_assets_dir() {
    let assets = tempfile::tempdir().unwrap();
    fs::create_dir_all(assets.path().join("logos")).unwrap();
    fs::write(assets.path().join("logos/mark.svg"), "<svg/>").unwrap();
    let site = tempfile::tempdir().unwrap();
    let base = spawn(static_routes(&config_for(assets.path()), site.path())).await;

    let resp = reqwest::get(format!("{base}/assets/logos/mark.svg")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "<svg/>");
}

#[tokio::test]
async fn serves_build_output_under_pkg() {
    let assets = tempfile::tempdir().unwrap();
    let site = tempfile::tempdir().unwrap();
    fs::create_dir_all(site.path().join("pkg")).unwrap();
    fs::write(site.path().join("pkg/urban-ritual.css"), "body{}").unwrap();
    let base = spawn(static_routes(&config_for(assets.path()), site.path())).await;

    let resp = reqwest::get(format!("{base}/pkg/urban-ritual.css")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "body{}");
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let assets = tempfile::tempdir().unwrap();
    let site = tempfile::tempdir().unwrap();
    let base = spawn(static_routes(&config_for(assets.path()), site.path())).await;

    let resp = reqwest::get(format!("{base}/assets/nope.png")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
