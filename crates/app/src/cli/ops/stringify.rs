use clap::Args;
use common::structure::{stringify_large_ints, FormatError, OutFormat};
use dotkit_app::{render, InputError};

use super::InputArgs;

/// Turn integers with magnitude of 2^32 or more into strings
#[derive(Args, Debug, Clone)]
pub struct Stringify {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output template, e.g. "'{}" (falls back to the config's out_format)
    #[arg(long, short)]
    pub format: Option<OutFormat>,
}

#[derive(Debug, thiserror::Error)]
pub enum StringifyError {
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Stringify {
    type Error = StringifyError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let out_format = match &self.format {
            Some(format) => Some(format.clone()),
            None => ctx.config.out_format()?,
        };

        let doc = self.input.read().await?;
        let converted = stringify_large_ints(&doc, out_format.as_ref());
        Ok(render(&converted, ctx.config.pretty)?)
    }
}
