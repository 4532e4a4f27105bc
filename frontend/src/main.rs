//! EventBoard frontend - Dioxus app.
//! Web: dx serve (or cargo run, which hands off to dx). Desktop: cargo run --features desktop.

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn main() {
    use eventboard_frontend::app::App;
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialized: {}", e);
    }
    dioxus::launch(App);
}

/// Extra flags for the wasm build: wasm-bindgen on Rust 1.82+ rejects modules built with
/// reference-types enabled.
#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn wasm_rustflags(existing: Option<String>) -> String {
    const NO_REFERENCE_TYPES: &str = "-C target-feature=-reference-types";
    match existing {
        Some(flags) if !flags.trim().is_empty() => format!("{flags} {NO_REFERENCE_TYPES}"),
        _ => NO_REFERENCE_TYPES.to_string(),
    }
}

/// Native `cargo run` on the web build: hand off to the Dioxus CLI.
#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    let code = match std::process::Command::new("dx")
        .arg("serve")
        .env("RUSTFLAGS", wasm_rustflags(std::env::var("RUSTFLAGS").ok()))
        .status()
    {
        Ok(status) => status.code().unwrap_or(1),
        Err(e) => {
            eprintln!("eventboard: cannot start `dx serve` ({e}); install it with `cargo install dioxus-cli`");
            1
        }
    };
    std::process::exit(code);
}
