use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod render;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    logger::init(&cfg);

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    // Template and helper registration happens exactly once, before the
    // listener exists; the registry is read-only afterwards.
    let templates = render::TemplateEngine::from_config(&cfg.resources)?;

    let addr = cfg.socket_addr()?;
    // A port that cannot be bound is fatal
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(cfg, templates));

    logger::log_server_start(&addr, &state.config);

    server::run(listener, state).await
}
