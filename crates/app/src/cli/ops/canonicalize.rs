use clap::Args;
use common::structure::{canonicalize, expect_mapping, fingerprint, Structure, TypeMismatchError};
use dotkit_app::{render, InputError};

use super::InputArgs;

/// Sort keys through every nested mapping
#[derive(Args, Debug, Clone)]
pub struct Canonicalize {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the hex fingerprint of the canonical form instead
    #[arg(long)]
    pub fingerprint: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CanonicalizeError {
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),
    #[error("cannot canonicalize input: {0}")]
    NotAMapping(#[from] TypeMismatchError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Canonicalize {
    type Error = CanonicalizeError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let doc = self.input.read().await?;
        let mapping = expect_mapping(&doc)?;

        if self.fingerprint {
            return Ok(fingerprint(mapping));
        }
        let canonical = Structure::Object(canonicalize(mapping));
        Ok(render(&canonical, ctx.config.pretty)?)
    }
}
