//! Live tests for the Chromium session.
//!
//! These tests launch a real Chrome/Chromium and load small pages served
//! from a local TCP listener. No external network access is needed.
//!
//! # Running
//!
//! The tests are gated behind the `browser-tests` feature flag and are
//! marked with `#[ignore]` so a plain `cargo test` never starts a browser.
//!
//! ```bash
//! cargo test --features browser-tests --test chromium_live_tests -- --ignored
//! ```
//!
//! Set `CHROME` to the browser binary if it is not on the default search
//! path. The sandbox is disabled so the tests also run as root in CI
//! containers.

#![cfg(feature = "browser-tests")]

use std::path::PathBuf;
use std::time::Duration;

use defi_probe::adapter::chromium::ChromiumSession;
use defi_probe::app::expect_visible;
use defi_probe::config::RenderConfig;
use defi_probe::domain::Locator;
use defi_probe::error::{Error, RenderError};
use defi_probe::port::BrowserSession;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const POSITIONS_PAGE: &str = r#"<!doctype html>
<html>
  <body>
    <h1>DeFi   Borrowed Positions</h1>
    <h2>DeFi Borrowed Positions Overview</h2>
    <h3 style="display:none">Hidden Heading</h3>
    <div id="total">Total <span>Borrowed</span> (All <b>Chains</b>)</div>
    <div style="visibility:hidden">Invisible Total</div>
  </body>
</html>"#;

/// Serve `html` for every request until the test ends. Returns the base URL.
async fn serve(html: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 4096];
                let _ = stream.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{html}",
                    html.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}/")
}

fn render_config() -> RenderConfig {
    RenderConfig {
        sandbox: false,
        chrome_executable: std::env::var_os("CHROME").map(PathBuf::from),
        ..RenderConfig::default()
    }
}

async fn open(html: &'static str) -> ChromiumSession {
    let url = serve(html).await;
    let mut session = ChromiumSession::launch(&render_config()).await.unwrap();
    session.goto(&url).await.unwrap();
    session
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn heading_matches_exact_accessible_name() {
    let mut session = open(POSITIONS_PAGE).await;

    let exact = Locator::role("heading", "DeFi Borrowed Positions");
    let substring = Locator::role("heading", "Borrowed Positions");
    let hidden = Locator::role("heading", "Hidden Heading");

    assert!(session.is_visible(&exact).await.unwrap());
    assert!(!session.is_visible(&substring).await.unwrap());
    assert!(!session.is_visible(&hidden).await.unwrap());

    session.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn text_matches_across_elements_ignoring_case() {
    let mut session = open(POSITIONS_PAGE).await;

    assert!(session
        .is_visible(&Locator::text("Total Borrowed (All Chains)"))
        .await
        .unwrap());
    assert!(session
        .is_visible(&Locator::text("total borrowed (all chains)"))
        .await
        .unwrap());
    assert!(!session
        .is_visible(&Locator::text("Invisible Total"))
        .await
        .unwrap());
    assert!(!session
        .is_visible(&Locator::text("Total Lent"))
        .await
        .unwrap());

    session.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn missing_heading_times_out_and_screenshot_is_written() {
    let mut session = open(POSITIONS_PAGE).await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("error.png");

    let result = expect_visible(
        &mut session,
        &Locator::role("heading", "Hidden Heading"),
        Duration::from_millis(300),
        Duration::from_millis(50),
    )
    .await;
    assert!(matches!(
        result,
        Err(Error::Render(RenderError::Timeout { .. }))
    ));

    session.screenshot(&path).await.unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));

    session.close().await.unwrap();
}
