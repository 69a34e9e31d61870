use clap::Args;
use common::structure::{expect_sequence, Mapping, TypeMismatchError};
use common::util::search_by_parts;
use dotkit_app::InputError;

use super::InputArgs;

/// Find the first mapping in a JSON array that contains a partial mapping
#[derive(Args, Debug, Clone)]
pub struct Search {
    #[command(flatten)]
    pub input: InputArgs,

    /// Key/value pairs to look for, as a JSON object
    #[arg(long)]
    pub part: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),
    #[error("invalid part, expected a JSON object: {0}")]
    Part(#[from] serde_json::Error),
    #[error("cannot search input: {0}")]
    NotASequence(#[from] TypeMismatchError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Search {
    type Error = SearchError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let part: Mapping = serde_json::from_str(&self.part)?;
        let doc = self.input.read().await?;
        let items = expect_sequence(&doc)?;

        Ok(match search_by_parts(items, &part) {
            Some(index) => index.to_string(),
            None => "null".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::op::Op;
    use crate::cli::ops::testutil::{compact_ctx, input_file};
    use serde_json::json;

    fn people(dir: &tempfile::TempDir) -> InputArgs {
        input_file(
            dir,
            "people.json",
            &json!([
                {"name": "ann", "age": 30},
                "not a mapping",
                {"name": "bob", "age": 40, "city": "oslo"}
            ]),
        )
    }

    #[tokio::test]
    async fn test_search_finds_first_match() {
        let dir = tempfile::tempdir().unwrap();
        let op = Search {
            input: people(&dir),
            part: r#"{"age": 40}"#.to_string(),
        };
        assert_eq!(op.execute(&compact_ctx()).await.unwrap(), "2");
    }

    #[tokio::test]
    async fn test_search_no_match_is_null() {
        let dir = tempfile::tempdir().unwrap();
        let op = Search {
            input: people(&dir),
            part: r#"{"name": "ann", "age": 40}"#.to_string(),
        };
        assert_eq!(op.execute(&compact_ctx()).await.unwrap(), "null");
    }

    #[tokio::test]
    async fn test_search_rejects_non_object_part() {
        let dir = tempfile::tempdir().unwrap();
        let op = Search {
            input: people(&dir),
            part: "[1]".to_string(),
        };
        let err = op.execute(&compact_ctx()).await.unwrap_err();
        assert!(matches!(err, SearchError::Part(_)));
    }
}
