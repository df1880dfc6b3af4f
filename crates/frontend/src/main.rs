mod app;
mod auth_guard;
mod hooks;
mod layouts;
mod mock;
mod pages;
mod routes;

use app::App;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(fmt_layer)
        .init();
}

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    tracing::info!(
        api = alshifa_frontend_common::ApiConfig::base_url(),
        "starting Al-Shifa portal"
    );
    yew::Renderer::<App>::new().render();
}
