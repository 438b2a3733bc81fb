use thiserror::Error;

/// Failures of the shorthand pipeline, one per stage.
///
/// Every stage fails fast, so a pipeline run either yields a whole command or one of these.
#[derive(Error, Debug)]
pub enum ShorthandError {
    /// No lexical rule matches the start of the remaining input
    #[error("no such token can be found at the start of '{remainder}'")]
    Lex { remainder: String },

    /// An abbreviated or full branch/remote reference has no candidate
    #[error("no such remote or branch found matching the entity '{needle}'")]
    Resolution { needle: String },

    /// No template can reduce the front of the remaining tokens
    #[error(
        "no tokens are able to be pulled off the front of the token stack {}",
        .remaining.join(",")
    )]
    Reduction { remaining: Vec<String> },

    /// A lexical rule failed to compile
    #[error("invalid lexical rule: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ShorthandError {
    pub fn lex(remainder: impl Into<String>) -> Self {
        Self::Lex {
            remainder: remainder.into(),
        }
    }

    pub fn resolution(needle: impl Into<String>) -> Self {
        Self::Resolution {
            needle: needle.into(),
        }
    }

    pub fn reduction<I, S>(remaining: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Reduction {
            remaining: remaining.into_iter().map(Into::into).collect(),
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::Lex { .. } | Self::InvalidPattern(_) => "Tokenizer",
            Self::Resolution { .. } => "Rewriter",
            Self::Reduction { .. } => "Parser",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShorthandError>;
