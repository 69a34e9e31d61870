use clap::Args;
use common::structure::{expect_sequence, Structure, TypeMismatchError};
use common::util::{chunks, ChunkSizeError};
use dotkit_app::{render, InputError};

use super::InputArgs;

/// Split a JSON array into consecutive chunks
#[derive(Args, Debug, Clone)]
pub struct Chunks {
    #[command(flatten)]
    pub input: InputArgs,

    /// Items per chunk
    #[arg(long, short)]
    pub size: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ChunksError {
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),
    #[error("cannot chunk input: {0}")]
    NotASequence(#[from] TypeMismatchError),
    #[error(transparent)]
    Size(#[from] ChunkSizeError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Chunks {
    type Error = ChunksError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let doc = self.input.read().await?;
        let items = expect_sequence(&doc)?;

        let batches = chunks(items.iter().cloned(), self.size)?
            .map(Structure::Array)
            .collect();
        Ok(render(&Structure::Array(batches), ctx.config.pretty)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::op::Op;
    use crate::cli::ops::testutil::{compact_ctx, input_file, parse};
    use serde_json::json;

    #[tokio::test]
    async fn test_chunks_last_is_shorter() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_file(&dir, "doc.json", &json!([1, 2, 3, 4, 5]));

        let output = Chunks { input, size: 2 }.execute(&compact_ctx()).await.unwrap();
        assert_eq!(parse(&output), json!([[1, 2], [3, 4], [5]]));
    }

    #[tokio::test]
    async fn test_chunks_zero_size_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_file(&dir, "doc.json", &json!([1]));

        let err = Chunks { input, size: 0 }.execute(&compact_ctx()).await.unwrap_err();
        assert!(matches!(err, ChunksError::Size(_)));
    }

    #[tokio::test]
    async fn test_chunks_rejects_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_file(&dir, "doc.json", &json!({"a": 1}));

        let err = Chunks { input, size: 2 }.execute(&compact_ctx()).await.unwrap_err();
        assert!(matches!(err, ChunksError::NotASequence(_)));
    }
}
