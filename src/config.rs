use std::env;

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reject workbooks containing text cells that fail numeric parsing
    /// instead of coercing them to `0.0`.
    pub strict_import: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            strict_import: env::var("STEAM_TABLES_STRICT")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the variable is process-global and tests run in parallel.
    #[test]
    fn strict_flag_from_env() {
        env::remove_var("STEAM_TABLES_STRICT");
        assert!(!Config::from_env().strict_import);

        env::set_var("STEAM_TABLES_STRICT", "true");
        assert!(Config::from_env().strict_import);

        env::set_var("STEAM_TABLES_STRICT", "0");
        assert!(!Config::from_env().strict_import);

        env::remove_var("STEAM_TABLES_STRICT");
    }
}
