// Integration tests for cli/init.rs: environment-driven start-up settings.

use image_convert::cli::init::{
    init_display_level_from, init_invert_policy_from, init_viewer_from, CliInit,
};
use image_convert::InvertPolicy;

#[test]
fn display_level_table() {
    let cases: &[(Option<&str>, u32)] = &[
        (None, 2),
        (Some("0"), 0),
        (Some("1"), 1),
        (Some("4"), 4),
        (Some("100"), 4),
        (Some(""), 2),
        (Some("two"), 2),
    ];
    for (input, expected) in cases {
        assert_eq!(init_display_level_from(*input), *expected, "input {:?}", input);
    }
}

#[test]
fn invert_policy_names() {
    assert_eq!(init_invert_policy_from(Some("preserve-alpha"), 2), InvertPolicy::PreserveAlpha);
    assert_eq!(init_invert_policy_from(Some(" flatten "), 2), InvertPolicy::Flatten);
    assert_eq!(init_invert_policy_from(Some(""), 2), InvertPolicy::PreserveAlpha);
    assert_eq!(init_invert_policy_from(Some("bogus"), 0), InvertPolicy::PreserveAlpha);
}

#[test]
fn viewer_is_trimmed() {
    assert_eq!(init_viewer_from(Some("  eog  ")).as_deref(), Some("eog"));
    assert_eq!(init_viewer_from(Some("")), None);
}

#[test]
fn exe_name_without_directories() {
    assert_eq!(CliInit::from_env("image_convert").exe_name, "image_convert");
    assert_eq!(CliInit::from_env("./target/debug/image_convert").exe_name, "image_convert");
}
