pub mod bits;
pub mod canonicalize;
pub mod chunks;
pub mod get;
pub mod init;
pub mod pop;
pub mod search;
pub mod stringify;
pub mod translate;
pub mod version;

pub use bits::Bits;
pub use canonicalize::Canonicalize;
pub use chunks::Chunks;
pub use get::Get;
pub use init::Init;
pub use pop::Pop;
pub use search::Search;
pub use stringify::Stringify;
pub use translate::Translate;
pub use version::Version;

use std::path::PathBuf;

use clap::Args;
use common::structure::{AccessOptions, Structure};
use dotkit_app::{parse_inline, read_document, AppConfig, InputError};

/// Where the input document comes from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON document to read (stdin when omitted or `-`)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    pub async fn read(&self) -> Result<Structure, InputError> {
        read_document(self.input.as_deref()).await
    }
}

/// Path and failure mode shared by `get` and `pop`
#[derive(Args, Debug, Clone)]
pub struct AccessArgs {
    /// Dotted path to the value, e.g. `data.rank`
    #[arg(long, short)]
    pub path: String,

    /// Return the default instead of failing when a lookup fails
    #[arg(long)]
    pub lenient: bool,

    /// Default value, as JSON or a bare string (null when omitted)
    #[arg(long)]
    pub default: Option<String>,
}

impl AccessArgs {
    pub fn options(&self, config: &AppConfig) -> AccessOptions {
        let strict = config.strict && !self.lenient;
        let default = self
            .default
            .as_deref()
            .map(parse_inline)
            .unwrap_or(Structure::Null);
        AccessOptions { strict, default }
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::path::PathBuf;

    use common::structure::Structure;
    use tempfile::TempDir;

    use super::InputArgs;
    use crate::cli::op::OpContext;
    use dotkit_app::AppConfig;

    /// Write `doc` to a temp file and point an `InputArgs` at it
    pub fn input_file(dir: &TempDir, name: &str, doc: &Structure) -> InputArgs {
        let path: PathBuf = dir.path().join(name);
        std::fs::write(&path, serde_json::to_string(doc).unwrap()).unwrap();
        InputArgs { input: Some(path) }
    }

    pub fn compact_ctx() -> OpContext {
        OpContext::with_config(AppConfig {
            pretty: false,
            ..AppConfig::default()
        })
    }

    pub fn parse(output: &str) -> Structure {
        serde_json::from_str(output).unwrap()
    }
}
