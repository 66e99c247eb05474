#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    #[error("unknown menu category `{0}`")]
    UnknownCategory(String),
    #[error("unknown diet filter `{0}`, expected one of all, veg, nonveg")]
    UnknownDiet(String),
    #[error("slide {index} is out of range, showcase has {len} slides")]
    SlideOutOfRange { index: usize, len: usize },
    #[error("no showcase named `{0}`")]
    UnknownShowcase(String),
    #[error("no outlet with id {0}")]
    UnknownOutlet(u32),
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl SiteError {
    /// Whether the error names something that does not exist, as opposed to a malformed request.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownShowcase(_) | Self::UnknownOutlet(_))
    }
}
