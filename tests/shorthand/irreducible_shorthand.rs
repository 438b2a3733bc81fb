use crate::common::entities;
use gpp::artifacts::shorthand::entity::Entity;
use gpp::artifacts::shorthand::error::ShorthandError;
use gpp::artifacts::shorthand::translate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adjacent_push_to_tokens_are_irreducible(entities: Vec<Entity>) {
    let result = translate("om::t", &entities, None);

    match result {
        Err(ShorthandError::Reduction { remaining }) => {
            assert_eq!(remaining, vec!["PUSH_TO", "PUSH_TO", "ENTITY"]);
        }
        other => panic!("expected a reduction error, got {other:?}"),
    }
}

#[rstest]
fn dangling_push_to_is_irreducible(entities: Vec<Entity>) {
    let result = translate("om:", &entities, None);

    assert!(
        matches!(&result, Err(ShorthandError::Reduction { remaining }) if remaining == &["PUSH_TO"]),
        "unexpected result: {result:?}"
    );
}

#[rstest]
fn push_to_a_remote_is_irreducible(entities: Vec<Entity>) {
    let result = translate("m:o", &entities, None);

    assert_eq!(
        result.map_err(|error| error.to_string()),
        Err(
            "no tokens are able to be pulled off the front of the token stack PUSH_TO,ENTITY"
                .to_string()
        )
    );
}
