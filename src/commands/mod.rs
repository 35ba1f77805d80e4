//! Browser Bindings
//!
//! The HTTP gateway handle plus thin wrappers over browser APIs, organized by concern.

pub mod history;
pub mod media;

use std::cell::OnceCell;

use reels_core::{GatewayConfig, GatewayResult, HttpGateway};

thread_local! {
    static GATEWAY: OnceCell<HttpGateway> = const { OnceCell::new() };
}

/// Build the shared gateway once at startup
pub fn init_api(config: GatewayConfig) -> GatewayResult<()> {
    let gateway = HttpGateway::new(config)?;
    log::info!("[api] base url: {:?}", gateway.config().base_url);
    GATEWAY.with(|cell| {
        if cell.set(gateway).is_err() {
            log::warn!("[api] gateway already initialised");
        }
    });
    Ok(())
}

/// Shared gateway handle (cheap clone)
pub fn api() -> HttpGateway {
    GATEWAY
        .with(|cell| cell.get().cloned())
        .expect("init_api runs before mount")
}
