//! Domain error types.
//!
//! The lot engine itself never returns errors: bad data degrades per
//! transaction. These errors belong to the edges: stores, config files,
//! price sources, report rendering.

/// Top-level error type for lotfolio.
#[derive(Debug, thiserror::Error)]
pub enum LotfolioError {
    #[error("store error: {reason}")]
    Store { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("price source error: {reason}")]
    Price { reason: String },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&LotfolioError> for std::process::ExitCode {
    fn from(err: &LotfolioError) -> Self {
        let code: u8 = match err {
            LotfolioError::Io(_) => 1,
            LotfolioError::ConfigParse { .. }
            | LotfolioError::ConfigMissing { .. }
            | LotfolioError::ConfigInvalid { .. } => 2,
            LotfolioError::Store { .. } | LotfolioError::Price { .. } => 3,
            LotfolioError::Report { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let err = LotfolioError::Store {
            reason: "bad row".into(),
        };
        assert_eq!(err.to_string(), "store error: bad row");

        let err = LotfolioError::ConfigMissing {
            section: "data".into(),
            key: "transactions".into(),
        };
        assert_eq!(err.to_string(), "missing config key [data] transactions");
    }

    #[test]
    fn exit_codes_group_by_category() {
        let io: std::process::ExitCode =
            (&LotfolioError::Io(std::io::Error::other("x"))).into();
        let config: std::process::ExitCode = (&LotfolioError::ConfigMissing {
            section: "data".into(),
            key: "assets".into(),
        })
            .into();
        let store: std::process::ExitCode = (&LotfolioError::Store {
            reason: "x".into(),
        })
            .into();
        // ExitCode has no accessor; formatting is the observable surface
        assert_eq!(format!("{:?}", io), format!("{:?}", std::process::ExitCode::from(1)));
        assert_eq!(format!("{:?}", config), format!("{:?}", std::process::ExitCode::from(2)));
        assert_eq!(format!("{:?}", store), format!("{:?}", std::process::ExitCode::from(3)));
    }
}
