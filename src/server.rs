//! HTTP dispatch boundary
//!
//! Thin glue around the render core: `GET /` serves a static page whose
//! JavaScript polls for fresh ticks, and `GET /tick?time=<secs>` returns one
//! rendered clock as plain text. The page shifts the timestamp by the
//! browser's zone offset before sending it, so the core can treat every
//! timestamp as UTC.
//!
//! Each tick builds an independent scene and renderer; no render state is
//! shared between requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use log::{error, info};
use serde::Deserialize;

use crate::RenderConfig;

/// Polling page: black background, monospace, one XHR tick every 900 ms.
/// A failed tick pauses polling for five intervals before retrying.
const INDEX_PAGE: &str = r#"<html>
<head>
    <meta charset="utf-8" />
    <title>ASCII Art Clock</title>
    <style type="text/css">
        body {
            background: #000;
            color: #fff;
            font-family: "courier new", monospace;
            font-size: 8px;
            font-weight: bold;
        }
    </style>
    <script type="text/javascript">
        window.onload = function () {
            var pauseClock = 0;
            var xhr = new XMLHttpRequest();
            xhr.onreadystatechange = function () {
                if (xhr.readyState == 4) {
                    if (xhr.status == 200) {
                        document.getElementById("clock").textContent = xhr.responseText;
                    } else {
                        pauseClock = 5;
                    }
                }
            };

            setInterval(function () {
                if (pauseClock > 0) {
                    pauseClock--;
                    return;
                }

                // Shift to local wall time; the server reads timestamps as UTC.
                var date = new Date();
                var time = (date.getTime() / 1000) - (date.getTimezoneOffset() * 60);

                xhr.open("GET", "/tick?time=" + time, true);
                xhr.send();
            }, 900);
        };
    </script>
</head>
<body>
    <h1>ASCII Art Clock</h1>
    <p>Rendered server-side, polled every 900ms.</p>
    <pre id="clock">Clock goes here</pre>
</body>
</html>"#;

#[derive(Debug, Deserialize)]
struct TickQuery {
    time: Option<String>,
}

/// Seconds since the epoch, for ticks that do not supply a timestamp.
fn now_unix() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(_) => 0,
    }
}

/// Coerce the `time` query parameter to whole seconds. The page sends a
/// fractional float; anything unparsable is treated as absent.
fn parse_time_param(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    let secs = raw.parse::<f64>().ok()?;
    if !secs.is_finite() {
        return None;
    }
    Some(secs.trunc() as i64)
}

/// Build the two-route application router.
pub fn app(config: RenderConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/tick", get(tick))
        .with_state(Arc::new(config))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn tick(
    State(config): State<Arc<RenderConfig>>,
    Query(query): Query<TickQuery>,
) -> (StatusCode, String) {
    let time = parse_time_param(query.time.as_deref()).unwrap_or_else(now_unix);
    match crate::render_clock(time, &config) {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => {
            error!("tick render failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}

/// Bind and serve on localhost. The configuration is validated with one
/// throwaway render up front, so a bad grid fails at startup instead of on
/// the first tick.
pub async fn serve(config: RenderConfig, port: u16) -> anyhow::Result<()> {
    crate::render_clock(now_unix(), &config)?;

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let router = app(config);

    info!("ASCII clock listening at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_param_coercion() {
        assert_eq!(parse_time_param(Some("30")), Some(30));
        assert_eq!(parse_time_param(Some("1756000000.75")), Some(1_756_000_000));
        assert_eq!(parse_time_param(Some("-5")), Some(-5));
        assert_eq!(parse_time_param(Some("garbage")), None);
        assert_eq!(parse_time_param(Some("")), None);
        assert_eq!(parse_time_param(None), None);
    }

    #[tokio::test]
    async fn tick_renders_requested_time() {
        let state = State(Arc::new(RenderConfig::default()));
        let query = Query(TickQuery {
            time: Some("30".to_string()),
        });

        let (status, body) = tick(state, query).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.lines().count(), 60);
        assert!(body.lines().all(|line| line.chars().count() == 120));
    }

    #[tokio::test]
    async fn tick_with_garbage_time_still_renders() {
        let state = State(Arc::new(RenderConfig::default()));
        let query = Query(TickQuery {
            time: Some("not-a-number".to_string()),
        });

        let (status, body) = tick(state, query).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.lines().count(), 60);
    }

    #[tokio::test]
    async fn tick_with_bad_config_is_internal_error() {
        let state = State(Arc::new(RenderConfig {
            width: 0,
            ..Default::default()
        }));
        let query = Query(TickQuery { time: None });

        let (status, body) = tick(state, query).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
    }

    #[test]
    fn index_page_polls_tick_route() {
        assert!(INDEX_PAGE.contains("/tick?time="));
        assert!(INDEX_PAGE.contains("getTimezoneOffset"));
    }
}
