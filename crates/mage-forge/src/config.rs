//! Configuration for a generation pipeline.

/// Configuration for a [`Forge`](crate::Forge).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    /// Reject generated characters that break a rule instead of keeping
    /// them with their issues attached.
    pub strict: bool,
    /// Request a portrait after the character body.
    pub portraits: bool,
    /// Portrait reference recorded when no portrait could be produced.
    pub placeholder_portrait: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            strict: false,
            portraits: true,
            placeholder_portrait: String::new(),
        }
    }
}

impl ForgeConfig {
    /// Turn strict rule enforcement on or off.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Turn portrait requests on or off.
    pub fn with_portraits(mut self, portraits: bool) -> Self {
        self.portraits = portraits;
        self
    }

    /// Set the placeholder portrait reference.
    pub fn with_placeholder_portrait(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder_portrait = placeholder.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ForgeConfig::default();
        assert!(!cfg.strict);
        assert!(cfg.portraits);
        assert!(cfg.placeholder_portrait.is_empty());
    }

    #[test]
    fn builder_methods() {
        let cfg = ForgeConfig::default()
            .with_strict(true)
            .with_portraits(false)
            .with_placeholder_portrait("placeholder.png");
        assert!(cfg.strict);
        assert!(!cfg.portraits);
        assert_eq!(cfg.placeholder_portrait, "placeholder.png");
    }
}
