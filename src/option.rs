use once_cell::sync::Lazy;

use crate::{codec::CodecStrategy, logging::rowscope_log};

/// Environment variable selecting [`CodecStrategy::Custom`] when set to a
/// truthy value (`1`, `true`, `yes`, `on`; case-insensitive).
pub const CUSTOM_CODEC_ENV: &str = "ROWSCOPE_CUSTOM_CODEC";

static PROCESS_DEFAULT: Lazy<CodecOption> = Lazy::new(|| {
    let option = CodecOption::from_env();
    rowscope_log!(
        log::Level::Info,
        "codec_strategy_resolved",
        "strategy={} env={}",
        option.strategy,
        CUSTOM_CODEC_ENV
    );
    option
});

/// Codec configuration, threaded explicitly into [`crate::codec::ValueCodec::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOption {
    pub(crate) strategy: CodecStrategy,
}

impl CodecOption {
    /// Select the byte layout.
    pub fn strategy(mut self, strategy: CodecStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The selected byte layout.
    pub fn codec_strategy(&self) -> CodecStrategy {
        self.strategy
    }

    /// Read [`CUSTOM_CODEC_ENV`] now. Unset or unrecognised values select the
    /// standard layout.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(CUSTOM_CODEC_ENV).ok().as_deref())
    }

    /// The process-wide configuration: resolved from the environment on first
    /// use and fixed for the rest of the process.
    pub fn process_default() -> Self {
        *PROCESS_DEFAULT
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let custom = value.is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        });
        let strategy = if custom {
            CodecStrategy::Custom
        } else {
            CodecStrategy::Standard
        };
        CodecOption::default().strategy(strategy)
    }
}
