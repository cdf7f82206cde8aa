#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod catalog;
mod clock;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod confetti;
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod cooldown;
mod logging;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod nav_menu;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod relay;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod routes;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod theme;

#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
