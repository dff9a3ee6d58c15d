//! Click counter calls made by the page
//!
//! Fire-and-forget: failures are logged and never reach the simulation.

use stats_proto::{decode, encode, ClickRequest, StatsResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub const CLICK_URL: &str = "/game/click";
pub const STATS_URL: &str = "/game/stats";

const FOR_PONG_ID: &str = "forPongScore";
const NOT_FOR_PONG_ID: &str = "notForPongScore";

/// Display text for the two page counters
pub fn stats_lines(stats: &StatsResponse) -> (String, String) {
    (
        format!("For ping pong: {}", stats.for_pong),
        format!("Not for pong: {}", stats.not_for_pong),
    )
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

async fn fetch(request: &Request) -> Result<Response, JsValue> {
    let response: Response = JsFuture::from(window()?.fetch_with_request(request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "{} returned {}",
            response.url(),
            response.status()
        )));
    }
    Ok(response)
}

/// Record one play-intent click
pub async fn record_click() -> Result<(), JsValue> {
    let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
    let body = encode(&ClickRequest {
        timestamp: Some(timestamp),
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(CLICK_URL, &init)?;
    request.headers().set("Content-Type", "application/json")?;

    fetch(&request).await?;
    Ok(())
}

pub async fn fetch_stats() -> Result<StatsResponse, JsValue> {
    let request = Request::new_with_str(STATS_URL)?;
    let response = fetch(&request).await?;
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("stats body is not text"))?;
    decode(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Pull the latest counts into the page, if the counter elements exist
pub async fn refresh_stats() {
    let stats = match fetch_stats().await {
        Ok(stats) => stats,
        Err(err) => {
            crate::console_error!("Failed to fetch scores: {:?}", err);
            return;
        }
    };

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (for_pong, not_for_pong) = stats_lines(&stats);
    if let Some(el) = document.get_element_by_id(FOR_PONG_ID) {
        el.set_text_content(Some(&for_pong));
    }
    if let Some(el) = document.get_element_by_id(NOT_FOR_PONG_ID) {
        el.set_text_content(Some(&not_for_pong));
    }
}

/// Record a click, then refresh the counters either way
pub async fn record_and_refresh() {
    if let Err(err) = record_click().await {
        crate::console_error!("Failed to record click: {:?}", err);
    }
    refresh_stats().await;
}
