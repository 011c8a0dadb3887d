pub type GlimmerResult<T> = Result<T, GlimmerError>;

#[derive(thiserror::Error, Debug)]
pub enum GlimmerError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlimmerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            GlimmerError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            GlimmerError::render("x")
                .to_string()
                .contains("render error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = GlimmerError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
