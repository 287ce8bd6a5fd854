//! Food Menu Frontend Entry Point

mod app;
mod commands;
mod components;
mod store;

use app::App;
use leptos::prelude::*;
use menu_core::ApiConfig;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let config = ApiConfig::from_build_env();

    let wasm_config = WASMLayerConfigBuilder::default()
        .set_max_level(config.log_level)
        .build();
    tracing_wasm::set_as_global_default_with_config(wasm_config);

    tracing::info!(api = config.base_url(), "Starting food menu");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
