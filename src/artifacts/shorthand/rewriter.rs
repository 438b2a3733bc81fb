use crate::artifacts::shorthand::entity::{Entity, entity_match};
use crate::artifacts::shorthand::error::{Result, ShorthandError};
use crate::artifacts::shorthand::token::Token;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagAlias {
    Flag(&'static str),
    Pull,
}

/// Short and abbreviated flag spellings and what they stand for
const FLAG_ALIASES: phf::Map<&'static str, FlagAlias> = phf::phf_map! {
    "v" => FlagAlias::Flag("verbose"),
    "f" => FlagAlias::Flag("force"),
    "t" => FlagAlias::Flag("tags"),
    "n" => FlagAlias::Flag("dry-run"),
    "dry" => FlagAlias::Flag("dry-run"),
    "l" => FlagAlias::Pull,
    "pull" => FlagAlias::Pull,
    "nf" => FlagAlias::Flag("no-ff"),
    "no-ff" => FlagAlias::Flag("no-ff"),
    "ff" => FlagAlias::Flag("ff-only"),
    "ff-only" => FlagAlias::Flag("ff-only"),
};

/// Resolve entity references and normalize flags, token by token.
///
/// After a successful rewrite no `Abbreviated`, `Full`, `ShortFlag` or `FlagAtEnd` token is left.
pub fn rewrite(entities: &[Entity], tokens: Vec<Token>) -> Result<Vec<Token>> {
    tokens
        .into_iter()
        .map(|token| rewrite_token(entities, token))
        .collect()
}

fn rewrite_token(entities: &[Entity], token: Token) -> Result<Token> {
    match token {
        Token::Abbreviated(needle) => resolve_abbreviated(entities, needle).map(Token::Entity),
        Token::Full(text) => resolve_full(entities, &text).map(Token::Entity),
        Token::Flag(name) | Token::ShortFlag(name) | Token::FlagAtEnd(name) => {
            Ok(normalize_flag(name))
        }
        token => Ok(token),
    }
}

/// Pick the entity scoring strictly highest against `needle`; the first declared wins ties
fn resolve_abbreviated(entities: &[Entity], needle: char) -> Result<Entity> {
    let needle = needle.to_string();
    let mut best: Option<(&Entity, f64)> = None;

    for entity in entities {
        let score = entity_match(entity.name(), &needle);
        trace!(entity = entity.name(), needle = needle.as_str(), score, "scored entity");

        if score > best.map_or(0.0, |(_, best_score)| best_score) {
            best = Some((entity, score));
        }
    }

    best.map(|(entity, _)| entity.clone())
        .ok_or_else(|| ShorthandError::resolution(needle))
}

/// Pick the first entity named exactly `text`, or whose name after its first separator is `text`
fn resolve_full(entities: &[Entity], text: &str) -> Result<Entity> {
    entities
        .iter()
        .find(|entity| entity.name() == text || entity.suffix() == Some(text))
        .cloned()
        .ok_or_else(|| ShorthandError::resolution(text))
}

fn normalize_flag(name: String) -> Token {
    match FLAG_ALIASES.get(name.as_str()) {
        Some(FlagAlias::Flag(long_name)) => Token::Flag(long_name.to_string()),
        Some(FlagAlias::Pull) => Token::Pull,
        None => Token::Flag(name),
    }
}
