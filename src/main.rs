//! Spincube - rotating cube demo

use tracing_subscriber::EnvFilter;

use spincube::app;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = app::run() {
        tracing::error!("Application error: {}", e);
        std::process::exit(1);
    }
}
