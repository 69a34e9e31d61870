use std::error::Error;
use std::path::PathBuf;

use dotkit_app::state::{AppConfig, AppState, StateError};

#[derive(Clone, Debug)]
pub struct OpContext {
    /// Loaded configuration (defaults when no config file exists)
    pub config: AppConfig,
    /// Optional custom config path (defaults to ~/.dotkit)
    pub config_path: Option<PathBuf>,
}

impl OpContext {
    /// Create context from an optional config directory
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, StateError> {
        let config = AppState::load_config(config_path.clone())?;
        Ok(Self {
            config,
            config_path,
        })
    }

    /// Create context around an already loaded configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            config_path: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_falls_back_to_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = OpContext::new(Some(dir.path().join("missing"))).unwrap();
        assert_eq!(ctx.config, AppConfig::default());
    }

    #[test]
    fn test_context_loads_initialized_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            pretty: false,
            ..AppConfig::default()
        };
        AppState::init(Some(dir.path().to_path_buf()), Some(config.clone())).unwrap();

        let ctx = OpContext::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(ctx.config, config);
        assert_eq!(ctx.config_path, Some(dir.path().to_path_buf()));
    }
}
