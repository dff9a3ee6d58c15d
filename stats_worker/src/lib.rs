//! Game page and click counter service
//!
//! `GET /` and `GET /initial` serve the page that loads the wasm client.
//! Two endpoints are backed by the `game_clicks` table in D1:
//! `POST /game/click` records a play-intent click, `GET /game/stats` reads
//! the total.

use serde::Deserialize;
use stats_proto::{ClickRequest, ClickResponse, ErrorResponse, StatsResponse};
use wasm_bindgen::JsValue;
use worker::*;

const DB_BINDING: &str = "DB";

const INSERT_CLICK: &str =
    "INSERT INTO game_clicks (user_agent, ip_address) VALUES (?, ?) RETURNING id";
const COUNT_CLICKS: &str = "SELECT COUNT(*) as count FROM game_clicks";

#[derive(Debug, Deserialize)]
struct InsertedRow {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: worker::Context) -> Result<Response> {
    let router = Router::new();

    router
        .get_async("/", handle_index)
        .get_async("/initial", handle_index)
        .post_async("/game/click", handle_click)
        .get_async("/game/stats", handle_stats)
        .run(req, env)
        .await
}

/// Page markup: decorative background game, counters, and the play button
/// that starts the interactive game
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pong</title>
</head>
<body>
    <div id="forPongScore">For ping pong: 0</div>
    <div id="notForPongScore">Not for pong: ??</div>
    <div id="intro">
        <canvas id="pongCanvas" width="800" height="400"></canvas>
        <p>Want to play pong?</p>
        <button id="yesBtn">YES</button>
    </div>
    <div id="game" hidden>
        <div><span id="player-score">0</span> : <span id="ai-score">0</span></div>
        <canvas id="gameCanvas"></canvas>
    </div>
    <script type="module">
        import init, { start_game, record_play_intent, refresh_stats, GameMode } from './pkg/client_wasm.js';

        // Handles own the frame loops; keep them for the page's lifetime
        const games = [];

        async function main() {
            await init();
            games.push(start_game('pongCanvas', GameMode.Background));
            refresh_stats();

            document.getElementById('yesBtn').addEventListener('click', () => {
                record_play_intent();
                document.getElementById('intro').hidden = true;
                document.getElementById('game').hidden = false;
                games.push(start_game('gameCanvas', GameMode.Interactive));
            }, { once: true });
        }

        main().catch((err) => console.error('Failed to start:', err));
    </script>
</body>
</html>
"#;

async fn handle_index(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    Response::from_html(INDEX_HTML)
}

async fn handle_click(mut req: Request, ctx: RouteContext<()>) -> Result<Response> {
    // Body carries only an optional client timestamp; it must still be JSON
    if let Err(err) = req.json::<ClickRequest>().await {
        console_log!("click: rejecting malformed body: {:?}", err);
        return invalid_input();
    }

    let headers = req.headers();
    let user_agent = non_empty(headers.get("User-Agent")?);
    let ip_address = client_ip(
        headers.get("CF-Connecting-IP")?,
        headers.get("X-Forwarded-For")?,
    );

    match insert_click(&ctx.env, user_agent, ip_address).await {
        Ok(id) => Response::from_json(&ClickResponse { success: true, id }),
        Err(err) => {
            console_error!("click: insert failed: {:?}", err);
            internal_error()
        }
    }
}

async fn handle_stats(_req: Request, ctx: RouteContext<()>) -> Result<Response> {
    match count_clicks(&ctx.env).await {
        Ok(count) => Response::from_json(&StatsResponse::from_count(count)),
        Err(err) => {
            console_error!("stats: count failed: {:?}", err);
            internal_error()
        }
    }
}

fn internal_error() -> Result<Response> {
    Ok(Response::from_json(&ErrorResponse::internal())?.with_status(500))
}

fn invalid_input() -> Result<Response> {
    Ok(Response::from_json(&ErrorResponse::invalid_input())?.with_status(400))
}

async fn insert_click(
    env: &Env,
    user_agent: Option<String>,
    ip_address: Option<String>,
) -> Result<i64> {
    let db = env.d1(DB_BINDING)?;
    let row = db
        .prepare(INSERT_CLICK)
        .bind(&[js_text(user_agent), js_text(ip_address)])?
        .first::<InsertedRow>(None)
        .await?;

    row.map(|r| r.id)
        .ok_or_else(|| Error::RustError("insert returned no row".to_string()))
}

async fn count_clicks(env: &Env) -> Result<Option<u64>> {
    let db = env.d1(DB_BINDING)?;
    let row = db.prepare(COUNT_CLICKS).first::<CountRow>(None).await?;
    Ok(row.map(|r| r.count))
}

/// Client address: Cloudflare's header first, then the proxy chain
fn client_ip(cf_connecting_ip: Option<String>, forwarded_for: Option<String>) -> Option<String> {
    non_empty(cf_connecting_ip).or_else(|| non_empty(forwarded_for))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn js_text(value: Option<String>) -> JsValue {
    match value {
        Some(text) => JsValue::from(text),
        None => JsValue::NULL,
    }
}
