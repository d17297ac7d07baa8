//! Standalone web server binary
//!
//! Usage: cargo run -p showdown_web --bin showdown-web-server -- [--host H] [--port P] [--strict]

use showdown_web::{LogFormat, ServerArgs, ServerConfig, WebServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    showdown_web::init_logging(LogFormat::from_env())?;

    let config = match ServerConfig::from_args(std::env::args().skip(1)) {
        Ok(ServerArgs::Run(config)) => config,
        Ok(ServerArgs::Help) => {
            print_help();
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            print_help();
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = config.host(),
        port = config.port(),
        strict = config.strict(),
        "starting showdown web server"
    );

    let handle = WebServer::new(config).start().await?;
    println!("Server running at http://{}", handle.address());
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c().await?;

    tracing::info!("shutting down");
    handle.shutdown().await?;
    Ok(())
}

fn print_help() {
    println!("Showdown Web Server");
    println!();
    println!("Usage: showdown-web-server [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --host, -h <HOST>   Host to bind to (default: 127.0.0.1)");
    println!("  --port, -p <PORT>   Port to bind to (default: 8080)");
    println!("  --strict            Reject hands that share a card");
    println!("  --help              Show this help message");
    println!();
    println!("Environment:");
    println!("  RUST_LOG              Log filter (default: info,showdown_web=debug)");
    println!("  SHOWDOWN_LOG_FORMAT   'json' for JSON log lines");
}
