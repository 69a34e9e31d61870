use std::path::PathBuf;

use clap::Args;
use common::structure::{translate_value, TranslateOptions, TranslationTable, TypeMismatchError};
use dotkit_app::{read_document, render, InputError};

use super::InputArgs;

/// Rename keys according to a translation table
#[derive(Args, Debug, Clone)]
pub struct Translate {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON object mapping source keys to destination keys
    #[arg(long, short)]
    pub table: PathBuf,

    /// Also rename keys inside nested mappings and sequences of mappings
    #[arg(long)]
    pub nested: bool,

    /// Drop keys the table does not mention
    #[arg(long)]
    pub ignore_extra: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),
    #[error("invalid translation table: {0}")]
    Table(#[from] serde_json::Error),
    #[error("cannot translate input: {0}")]
    NotAMapping(#[from] TypeMismatchError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Translate {
    type Error = TranslateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let table = read_document(Some(self.table.as_path())).await?;
        let table: TranslationTable = serde_json::from_value(table)?;
        tracing::debug!(entries = table.len(), "loaded translation table");

        let doc = self.input.read().await?;
        let options = TranslateOptions::default()
            .nested(self.nested)
            .ignore_extra(self.ignore_extra);
        let translated = translate_value(&doc, &table, options)?;
        Ok(render(&translated, ctx.config.pretty)?)
    }
}
