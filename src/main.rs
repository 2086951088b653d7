// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr, process};

use tracing_subscriber::EnvFilter;

use userorg_server::{
    api::router, auth::TokenCodec, config::AppConfig, state::AppState, store::InMemoryStore,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Configuration is read from the environment exactly once, here.
    let config = AppConfig::from_env().unwrap_or_else(|error| {
        tracing::error!(%error, "invalid configuration");
        process::exit(1);
    });

    let codec = TokenCodec::new(config.secret_key.as_bytes(), config.token_ttl);
    let state = AppState::new(InMemoryStore::new(), codec);
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!(%addr, "userorg server listening (docs at /docs)");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .expect("HTTP server failed");
}
