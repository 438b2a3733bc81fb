use crate::artifacts::shorthand::error::{Result, ShorthandError};
use crate::artifacts::shorthand::token::Token;
use regex::Regex;
use tracing::debug;

/// Name of the capture group holding text a rule looks at but does not consume
const LOOKAHEAD_GROUP: &str = "lookahead";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    ShortFlag,
    Flag,
    FlagAtEnd,
    Pull,
    PushTo,
    CurrentBranch,
    Full,
    Abbreviated,
    Whitespace,
}

/// Lexical rules in priority order. The first rule matching the start of the remaining input
/// wins, even when a later one would match more, so the order must not change: the three flag
/// rules overlap, and `pull ` would otherwise lex as a full name.
const LEXICAL_RULES: [(Lexeme, &str); 9] = [
    (Lexeme::ShortFlag, r"^-([a-zA-Z0-9])"),
    (Lexeme::Flag, r"^--([a-zA-Z0-9-]{2,})"),
    (Lexeme::FlagAtEnd, r"^-([a-zA-Z0-9-]{2,})$"),
    (Lexeme::Pull, r"^(pull |,)"),
    (Lexeme::PushTo, r"^:"),
    (Lexeme::CurrentBranch, r"^\."),
    (
        Lexeme::Full,
        r"^([^()+:,& -]{3,})(?: |$|(?P<lookahead>[:()]))",
    ),
    (Lexeme::Abbreviated, r"^([^()+:,& ])"),
    (Lexeme::Whitespace, r"^ "),
];

impl Lexeme {
    fn token(self, capture: &str) -> Token {
        match self {
            Lexeme::ShortFlag => Token::ShortFlag(capture.to_string()),
            Lexeme::Flag => Token::Flag(capture.to_string()),
            Lexeme::FlagAtEnd => Token::FlagAtEnd(capture.to_string()),
            Lexeme::Pull => Token::Pull,
            Lexeme::PushTo => Token::PushTo,
            Lexeme::CurrentBranch => Token::CurrentBranch,
            Lexeme::Full => Token::Full(capture.to_string()),
            // the rule captures exactly one character
            Lexeme::Abbreviated => Token::Abbreviated(capture.chars().next().unwrap_or(' ')),
            Lexeme::Whitespace => Token::Whitespace,
        }
    }
}

#[derive(Debug)]
struct LexicalRule {
    lexeme: Lexeme,
    pattern: Regex,
}

/// Splits a shorthand string into tokens by first-match rule dispatch
#[derive(Debug)]
pub struct Tokenizer {
    rules: Vec<LexicalRule>,
}

impl Tokenizer {
    pub fn try_new() -> Result<Self> {
        let rules = LEXICAL_RULES
            .iter()
            .map(|(lexeme, pattern)| -> Result<LexicalRule> {
                Ok(LexicalRule {
                    lexeme: *lexeme,
                    pattern: Regex::new(pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Tokenize the whole input, or fail on the first position no rule accepts
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut rest = input;

        while !rest.is_empty() {
            let (token, consumed) = self
                .next_token(rest)
                .ok_or_else(|| ShorthandError::lex(rest))?;

            tokens.push(token);
            rest = &rest[consumed..];
        }

        debug!(input, tokens = ?tokens, "tokenized shorthand");
        Ok(tokens)
    }

    fn next_token(&self, rest: &str) -> Option<(Token, usize)> {
        self.rules.iter().find_map(|rule| {
            let captures = rule.pattern.captures(rest)?;
            let whole = captures.get(0)?;
            let consumed = captures
                .name(LOOKAHEAD_GROUP)
                .map_or(whole.end(), |lookahead| lookahead.start());
            let capture = captures.get(1).map_or("", |group| group.as_str());

            Some((rule.lexeme.token(capture), consumed))
        })
    }
}

/// Tokenize `input` with a freshly built [`Tokenizer`]
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Tokenizer::try_new()?.tokenize(input)
}
