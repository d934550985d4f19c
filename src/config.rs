use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Socket address string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Loads configuration with the usual precedence: CLI flags beat
    /// environment variables, which beat the config file, which beats the
    /// built-in defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.static_dir", "static")?
            .set_default("server.request_timeout_secs", 30)?;

        // An explicitly named config file must exist; the cwd fallback is
        // optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("finbud").required(false)),
        };

        // Environment variables, e.g. FINBUD_SERVER__PORT=8000. The prefix
        // separator is a single underscore; left unset it would inherit the
        // "__" key separator and the documented spelling would stop matching.
        builder = builder.add_source(
            Environment::with_prefix("FINBUD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (and their env fallbacks) win over everything else
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(dir) = cli.static_dir {
            builder = builder.set_override("server.static_dir", dir)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "server.host cannot be empty".to_string(),
            ));
        }
        if self.server.static_dir.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "server.static_dir cannot be empty".to_string(),
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
