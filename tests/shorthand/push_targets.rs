use crate::common::entities;
use gpp::artifacts::shorthand::entity::Entity;
use gpp::artifacts::shorthand::translate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::remote_and_branch("origin master", "push origin master")]
#[case::abbreviated_remote_and_branch("om", "push origin master")]
#[case::see_through_prefix("ot", "push origin feature-test")]
#[case::fall_back_to_prefix("of", "push origin feature-test")]
#[case::alternate_destination("om:t", "push origin master:feature-test")]
#[case::full_source_abbreviated_destination("o master:t", "push origin master:feature-test")]
#[case::full_destination("om:test", "push origin master:feature-test")]
#[case::destination_without_source("o:m", "push origin :master")]
fn push_to_target(
    entities: Vec<Entity>,
    #[case] shorthand: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let command = translate(shorthand, &entities, None)?;

    assert_eq!(command, expected);

    Ok(())
}

#[rstest]
#[case::implicit("", "push origin current-branch")]
#[case::explicit(".", "push origin current-branch")]
#[case::as_source(".:m", "push origin current-branch:master")]
#[case::as_destination("m:.", "push origin master:current-branch")]
fn push_current_branch(
    entities: Vec<Entity>,
    #[case] shorthand: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let command = translate(shorthand, &entities, Some("current-branch"))?;

    assert_eq!(command, expected);

    Ok(())
}

#[test]
fn push_defaults_without_any_entities() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        translate("", &[], Some("current-branch"))?,
        "push origin current-branch"
    );
    assert_eq!(translate("", &[], None)?, "push origin master");

    Ok(())
}

#[test]
fn push_resolves_abbreviations_against_declaration_order() -> Result<(), Box<dyn std::error::Error>>
{
    let entities = vec![
        Entity::branch("main"),
        Entity::branch("mint"),
        Entity::remote("upstream"),
    ];

    assert_eq!(translate("um", &entities, None)?, "push upstream main");

    Ok(())
}
