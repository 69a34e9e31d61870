use clap::Args;
use common::structure::{pop_at, AccessError};
use dotkit_app::{render, InputError};
use serde_json::json;

use super::{AccessArgs, InputArgs};

/// Remove the value at a path and print it alongside what remains
#[derive(Args, Debug, Clone)]
pub struct Pop {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub access: AccessArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum PopError {
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    Access(#[from] AccessError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Pop {
    type Error = PopError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut doc = self.input.read().await?;
        let options = self.access.options(&ctx.config);
        let value = pop_at(&mut doc, &self.access.path, &options)?;

        let output = json!({ "value": value, "document": doc });
        Ok(render(&output, ctx.config.pretty)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::op::Op;
    use crate::cli::ops::testutil::{compact_ctx, input_file, parse};

    fn pop_op(input: InputArgs, path: &str, lenient: bool) -> Pop {
        Pop {
            input,
            access: AccessArgs {
                path: path.to_string(),
                lenient,
                default: None,
            },
        }
    }

    #[tokio::test]
    async fn test_pop_returns_value_and_remaining_document() {
        let dir = tempfile::tempdir().unwrap();
        let doc = json!({"success": true, "data": {"rank": "student", "age": 20}});
        let input = input_file(&dir, "doc.json", &doc);

        let output = pop_op(input, "data.rank", false)
            .execute(&compact_ctx())
            .await
            .unwrap();
        assert_eq!(
            parse(&output),
            json!({"value": "student", "document": {"success": true, "data": {"age": 20}}})
        );
    }

    #[tokio::test]
    async fn test_pop_missing_final_key_returns_null() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_file(&dir, "doc.json", &json!({"data": {"age": 20}}));

        let output = pop_op(input, "data.rank", false)
            .execute(&compact_ctx())
            .await
            .unwrap();
        assert_eq!(
            parse(&output),
            json!({"value": null, "document": {"data": {"age": 20}}})
        );
    }

    #[tokio::test]
    async fn test_pop_through_scalar_fails_when_strict() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_file(&dir, "doc.json", &json!({"data": 5}));

        let err = pop_op(input, "data.rank", false)
            .execute(&compact_ctx())
            .await
            .unwrap_err();
        assert!(matches!(err, PopError::Access(ref e) if e.is_traversal()));
    }
}
