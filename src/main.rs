// Only the browser build renders the page; native builds exist to run tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod content;
mod error;
#[cfg(target_arch = "wasm32")]
mod frontend;
mod log;
mod scroll;
mod style;
mod theme;
mod typewriter;
mod view_state;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(err) = frontend::run() {
        frontend::logger().event(
            log::LogLevel::Error,
            "mount_failed",
            serde_json::json!({ "error": err.to_string() }),
        );
    }
}
