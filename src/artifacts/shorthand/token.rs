use crate::artifacts::shorthand::entity::Entity;

/// A classified fragment of a shorthand string.
///
/// The tokenizer only produces the lexical variants. The rewriter then turns `Abbreviated` and
/// `Full` into `Entity`, and the three flag spellings into either `Flag` or `Pull`, so the
/// generator only ever sees `Flag`, `Pull`, `PushTo`, `CurrentBranch`, `Whitespace` and `Entity`.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `--name`
    Flag(String),
    /// `-x`
    ShortFlag(String),
    /// `-name`, only as the last thing in the input
    FlagAtEnd(String),
    /// `pull ` or `,`
    Pull,
    /// `:`
    PushTo,
    /// `.`
    CurrentBranch,
    /// A spelled out branch or remote name
    Full(String),
    /// A single character standing in for a branch or remote
    Abbreviated(char),
    Whitespace,
    Entity(Entity),
}

impl Token {
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::Flag(_) => "FLAG",
            Token::ShortFlag(_) => "SHORT_FLAG",
            Token::FlagAtEnd(_) => "FLAG_AT_END",
            Token::Pull => "PULL",
            Token::PushTo => "PUSH_TO",
            Token::CurrentBranch => "CURRENT_BRANCH",
            Token::Full(_) => "FULL",
            Token::Abbreviated(_) => "ABBREVIATED",
            Token::Whitespace => "WHITESPACE",
            Token::Entity(_) => "ENTITY",
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Token::Entity(entity) if entity.is_branch())
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Token::Entity(entity) if entity.is_remote())
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Token::Flag(_))
    }

    pub fn is_pull(&self) -> bool {
        matches!(self, Token::Pull)
    }

    pub fn is_push_to(&self) -> bool {
        matches!(self, Token::PushTo)
    }

    pub fn is_current_branch(&self) -> bool {
        matches!(self, Token::CurrentBranch)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}
