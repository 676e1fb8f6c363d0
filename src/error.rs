pub type PointmorphResult<T> = Result<T, PointmorphError>;

#[derive(thiserror::Error, Debug)]
pub enum PointmorphError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("shape error: {0}")]
    Shape(String),

    #[error("morph error: {0}")]
    Morph(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PointmorphError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    pub fn morph(msg: impl Into<String>) -> Self {
        Self::Morph(msg.into())
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
            PointmorphError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            PointmorphError::shape("x")
                .to_string()
                .contains("shape error:")
        );
        assert!(
            PointmorphError::morph("x")
                .to_string()
                .contains("morph error:")
        );
        assert!(
            PointmorphError::render("x")
                .to_string()
                .contains("render error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = PointmorphError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
