use crate::artifacts::shorthand::error::{Result, ShorthandError};
use crate::artifacts::shorthand::token::Token;
use tracing::debug;

/// Branch assumed when the caller does not know the current one
pub const DEFAULT_CURRENT_BRANCH: &str = "master";

/// Remote assumed when the shorthand names none
pub const DEFAULT_REMOTE: &str = "origin";

type Predicate = fn(&Token) -> bool;
type Render = fn(&[Token], &mut Reduction<'_>) -> String;

/// A generator rule: predicates for consecutive tokens and how to print what they matched
struct Template {
    pattern: &'static [Predicate],
    render: Render,
}

/// State carried through a single reduction
#[derive(Debug)]
struct Reduction<'a> {
    current_branch: &'a str,
    is_pulling: bool,
}

/// Templates in declaration order. The longest matching template wins and the earliest declared
/// breaks ties, so reordering changes the output.
static TEMPLATES: [Template; 10] = [
    Template {
        pattern: &[Token::is_whitespace],
        render: |_, _| String::new(),
    },
    Template {
        pattern: &[Token::is_flag],
        render: |tokens, _| render_flag(&tokens[0]),
    },
    Template {
        pattern: &[Token::is_branch],
        render: |tokens, _| format!("{} ", entity_name(&tokens[0])),
    },
    Template {
        pattern: &[Token::is_remote],
        render: |tokens, _| format!("{} ", entity_name(&tokens[0])),
    },
    Template {
        pattern: &[Token::is_branch, Token::is_push_to, Token::is_branch],
        render: |tokens, _| {
            format!(
                "{}:{} ",
                entity_name(&tokens[0]),
                entity_name(&tokens[2])
            )
        },
    },
    Template {
        pattern: &[Token::is_push_to, Token::is_branch],
        render: |tokens, _| format!(":{} ", entity_name(&tokens[1])),
    },
    Template {
        pattern: &[Token::is_current_branch, Token::is_push_to, Token::is_branch],
        render: |tokens, reduction| {
            format!(
                "{}:{} ",
                reduction.current_branch,
                entity_name(&tokens[2])
            )
        },
    },
    Template {
        pattern: &[Token::is_branch, Token::is_push_to, Token::is_current_branch],
        render: |tokens, reduction| {
            format!(
                "{}:{} ",
                entity_name(&tokens[0]),
                reduction.current_branch
            )
        },
    },
    Template {
        pattern: &[Token::is_pull],
        render: |_, reduction| {
            reduction.is_pulling = true;
            String::new()
        },
    },
    Template {
        pattern: &[Token::is_current_branch],
        render: |_, reduction| reduction.current_branch.to_string(),
    },
];

impl Template {
    fn matches(&self, tokens: &[Token]) -> bool {
        self.pattern.len() <= tokens.len()
            && self
                .pattern
                .iter()
                .zip(tokens)
                .all(|(predicate, token)| predicate(token))
    }
}

fn entity_name(token: &Token) -> &str {
    match token {
        Token::Entity(entity) => entity.name(),
        _ => "",
    }
}

fn render_flag(token: &Token) -> String {
    match token {
        Token::Flag(name) if name.chars().count() == 1 => format!("-{name}"),
        Token::Flag(name) => format!("--{name}"),
        _ => String::new(),
    }
}

/// Longest template matching the front of `tokens`, earliest declared on a tie
fn best_template(tokens: &[Token]) -> Option<&'static Template> {
    TEMPLATES
        .iter()
        .filter(|template| template.matches(tokens))
        .fold(None, |best: Option<&Template>, template| match best {
            Some(best) if best.pattern.len() >= template.pattern.len() => Some(best),
            _ => Some(template),
        })
}

/// Reduce resolved tokens to a git command line, without the leading `git`.
///
/// A missing branch defaults to `current_branch` and a missing remote to `origin`. The verb is
/// `pull` if any pull token was consumed and `push` otherwise.
pub fn generate(tokens: Vec<Token>, current_branch: Option<&str>) -> Result<String> {
    let current_branch = current_branch.unwrap_or(DEFAULT_CURRENT_BRANCH);
    let has_origin = tokens.iter().any(Token::is_remote);
    let has_branch = tokens
        .iter()
        .any(|token| token.is_branch() || token.is_current_branch());

    let mut reduction = Reduction {
        current_branch,
        is_pulling: false,
    };
    let mut result = String::new();
    let mut rest = tokens.as_slice();

    while !rest.is_empty() {
        let template = best_template(rest).ok_or_else(|| {
            ShorthandError::reduction(rest.iter().map(Token::type_name))
        })?;
        let (matched, remaining) = rest.split_at(template.pattern.len());

        result.push_str(&(template.render)(matched, &mut reduction));
        rest = remaining;
    }

    if !has_branch {
        result = format!("{current_branch} {result}");
    }
    if !has_origin {
        result = format!("{DEFAULT_REMOTE} {result}");
    }

    let verb = if reduction.is_pulling { "pull" } else { "push" };
    let command = format!("{verb} {result}").trim().to_string();

    debug!(command = command.as_str(), "generated command");
    Ok(command)
}
