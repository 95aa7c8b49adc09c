use eframe::NativeOptions;
use ident_core::ApiClient;

mod app;
mod cycle;
mod worker;

use app::UiApp;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

fn main() {
    tracing_subscriber::fmt::init();
    let base_url =
        std::env::var("TAXONLENS_API").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
    tracing::info!(%base_url, "starting Taxon Lens");
    let client = ApiClient::new(base_url);
    let options = NativeOptions::default();
    if let Err(e) = eframe::run_native(
        "Taxon Lens",
        options,
        Box::new(move |_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(client)))
        }),
    ) {
        eprintln!("Application stopped with error: {e}");
    }
}
