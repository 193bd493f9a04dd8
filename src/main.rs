use std::sync::Arc;

use formserve::config::Config;
use formserve::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    // Single-threaded event-driven dispatch: one worker thread, connections
    // handled as local tasks. No shared mutable state between requests.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind failure (port already in use, privileged port) is fatal and
    // propagates out of main, terminating the process non-zero.
    let listener = server::bind_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    let config = Arc::new(cfg);
    let local = tokio::task::LocalSet::new();
    local.run_until(server::run(listener, config)).await
}
