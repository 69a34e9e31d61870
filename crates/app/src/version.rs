use std::fmt;

/// Build information baked in by `build.rs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_profile: &'static str,
    pub build_timestamp: &'static str,
    pub target: &'static str,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("REPO_VERSION"),
        build_profile: env!("BUILD_PROFILE"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        target: env!("BUILD_TARGET"),
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {}, built {})",
            crate::state::APP_NAME,
            self.version,
            self.target,
            self.build_profile,
            self.build_timestamp
        )
    }
}

/// Log build information at startup
pub fn report_build_info() {
    let build = build_info();

    tracing::debug!(
        version = build.version,
        build_profile = build.build_profile,
        build_timestamp = build.build_timestamp,
        target = build.target,
        "build info"
    );
}
