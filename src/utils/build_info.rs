use chrono::{DateTime, Utc};
use serde::Serialize;

/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    /// One-line summary printed by `--version`.
    pub fn summary(&self) -> String {
        format!(
            "BanquetHub {} ({} {}, {} {})",
            self.version, self.git_hash, self.git_status, self.target, self.profile
        )
    }

    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.timestamp)
            .ok()
            .map(|stamp| stamp.with_timezone(&Utc))
    }

    /// Build time as `YYYY-MM-DD HH:MM UTC`, or the raw value when it does not parse.
    pub fn built_at_display(&self) -> String {
        self.built_at()
            .map(|stamp| stamp.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| self.timestamp.to_string())
    }
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("BANQUET_HUB_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("BANQUET_HUB_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("BANQUET_HUB_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("BANQUET_HUB_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("BANQUET_HUB_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("BANQUET_HUB_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: &'static str) -> BuildMetadata {
        BuildMetadata {
            version: "0.1.0",
            git_hash: "abc1234",
            git_status: "clean",
            timestamp,
            target: "x86_64-unknown-linux-gnu",
            profile: "debug",
            rustc: "rustc 1.80.0",
        }
    }

    #[test]
    fn timestamp_renders_in_utc() {
        let meta = sample("2030-06-01T14:05:09Z");
        assert_eq!(meta.built_at_display(), "2030-06-01 14:05 UTC");
        assert_eq!(
            meta.summary(),
            "BanquetHub 0.1.0 (abc1234 clean, x86_64-unknown-linux-gnu debug)"
        );
    }

    #[test]
    fn unparsable_timestamp_is_shown_verbatim() {
        let meta = sample("unknown");
        assert!(meta.built_at().is_none());
        assert_eq!(meta.built_at_display(), "unknown");
    }

    #[test]
    fn metadata_serializes_with_field_names() {
        let json = serde_json::to_value(sample("unknown")).expect("serialize");
        assert_eq!(json["git_hash"], "abc1234");
        assert_eq!(json["profile"], "debug");
    }
}
