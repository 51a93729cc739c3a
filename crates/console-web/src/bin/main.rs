//! Likes console shell server binary
//!
//! Serves the HTML shell and health endpoint for the Leptos client.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result};
    use clap::{Parser, ValueEnum};
    use likeit_console_web::server;
    use std::net::SocketAddr;
    use tracing::info;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;

    #[derive(Parser, Debug)]
    #[command(name = "likeit-console-web")]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Bind address for the HTTP server (e.g., "0.0.0.0:3000");
        /// falls back to LIKEIT_CONSOLE_BIND
        #[arg(short, long)]
        bind: Option<String>,

        /// GraphQL backend endpoint advertised to the client;
        /// falls back to LIKEIT_GRAPHQL_ENDPOINT
        #[arg(short, long)]
        graphql_endpoint: Option<String>,

        /// Log level (debug, info, warn, error)
        #[arg(short, long, default_value = "info")]
        log_level: LogLevel,
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
    enum LogLevel {
        Debug,
        Info,
        Warn,
        Error,
    }

    impl From<LogLevel> for LevelFilter {
        fn from(val: LogLevel) -> Self {
            match val {
                LogLevel::Debug => LevelFilter::DEBUG,
                LogLevel::Info => LevelFilter::INFO,
                LogLevel::Warn => LevelFilter::WARN,
                LogLevel::Error => LevelFilter::ERROR,
            }
        }
    }

    #[tokio::main]
    pub async fn run() -> Result<()> {
        let args = Args::parse();

        fmt().with_max_level(args.log_level).init();

        // Flags win over environment variables, which win over defaults
        let bind = args.bind.unwrap_or_else(server::bind_from_env);
        let graphql_endpoint = args
            .graphql_endpoint
            .unwrap_or_else(|| server::ServerState::from_env().graphql_endpoint);

        let addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;

        info!("Bind address: {}", addr);
        info!("GraphQL endpoint: {}", graphql_endpoint);

        server::run_with_config(addr, graphql_endpoint)
            .await
            .context("Failed to start server")?;

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
