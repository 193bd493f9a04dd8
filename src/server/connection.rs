// Connection handling module
// Serves a single accepted TCP connection on a local task

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Accept a connection and serve it on a spawned local task.
///
/// The connection runs HTTP/1.1 with keep-alive; every request on it is
/// dispatched through `handler::handle_request`. Serve errors are logged,
/// the connection is dropped by the transport with no further handling.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    config: &Arc<Config>,
) {
    if config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    let config = Arc::clone(config);
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let config = Arc::clone(&config);
            async move { handler::handle_request(req, config).await }
        });

        if let Err(err) = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service)
            .await
        {
            logger::log_connection_error(&err);
        }
    });
}
