//! Command-line interface for the fake data API server.

use clap::Parser;

/// Start a multithreaded fake data generation API server.
#[derive(Parser, Debug)]
#[command(name = "fake-data-api", version, about)]
pub struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port number to listen on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// The socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["fake-data-api"]);
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 8000);
        assert!(!cli.verbose);
        assert_eq!(cli.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["fake-data-api", "-H", "127.0.0.1", "-p", "9000", "-v"]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 9000);
        assert!(cli.verbose);
    }
}
