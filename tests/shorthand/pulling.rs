use crate::common::entities;
use gpp::artifacts::shorthand::entity::Entity;
use gpp::artifacts::shorthand::translate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::full_names("pull origin master")]
#[case::abbreviated_names("pull om")]
#[case::leading_short_flag("-lom")]
#[case::trailing_short_flag("om-l")]
#[case::comma("om,")]
#[case::long_flag("om --pull")]
fn pull_from_origin_master(
    entities: Vec<Entity>,
    #[case] shorthand: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let command = translate(shorthand, &entities, None)?;

    assert_eq!(command, "pull origin master");

    Ok(())
}

#[rstest]
fn pull_current_branch_from_default_remote(
    entities: Vec<Entity>,
) -> Result<(), Box<dyn std::error::Error>> {
    let command = translate(",", &entities, Some("feature-test"))?;

    assert_eq!(command, "pull origin feature-test");

    Ok(())
}
