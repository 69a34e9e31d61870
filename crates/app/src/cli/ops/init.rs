use clap::Args;
use dotkit_app::state::{AppConfig, AppState, StateError};

/// Write a config file with the given settings
#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Default log level (error, warn, info, debug, trace)
    #[arg(long = "default-log-level", default_value = "warn")]
    pub default_log_level: tracing::Level,

    /// Print compact JSON by default
    #[arg(long)]
    pub compact: bool,

    /// Make get/pop lenient by default
    #[arg(long)]
    pub lenient: bool,

    /// Default template for stringified integers
    #[arg(long)]
    pub out_format: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = AppConfig {
            log_level: self.default_log_level.to_string().to_lowercase(),
            pretty: !self.compact,
            strict: !self.lenient,
            out_format: self.out_format.clone(),
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        let output = format!(
            "Initialized dotkit directory at: {}\n\
             - Config: {}\n\
             - Log level: {}\n\
             - Pretty output: {}\n\
             - Strict lookups: {}\n\
             - Out format: {}",
            state.dotkit_dir.display(),
            state.config_path.display(),
            state.config.log_level,
            state.config.pretty,
            state.config.strict,
            state.config.out_format.as_deref().unwrap_or("(none)"),
        );

        Ok(output)
    }
}
