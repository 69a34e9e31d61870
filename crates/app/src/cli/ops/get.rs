use clap::Args;
use common::structure::{get, AccessError};
use dotkit_app::{render, InputError};

use super::{AccessArgs, InputArgs};

#[derive(Args, Debug, Clone)]
pub struct Get {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub access: AccessArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum GetError {
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    Access(#[from] AccessError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Get {
    type Error = GetError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let doc = self.input.read().await?;
        let options = self.access.options(&ctx.config);
        let value = get(&doc, &self.access.path, &options)?;
        Ok(render(&value, ctx.config.pretty)?)
    }
}
