//! Server configuration from command-line flags and environment.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server", version, about = "In-memory TODO list API")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `todo_server=debug`).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
