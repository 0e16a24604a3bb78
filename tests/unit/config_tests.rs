use std::path::PathBuf;

use design_catalog::config::{CONFIG_ENV, PROJECT_CONFIG_FILE};
use design_catalog::test_utils::fixtures::CatalogFixture;
use design_catalog::test_utils::{TestCase, run_table_tests};
use design_catalog::{CatalogError, Config, GroupOrder};

use crate::fixture_path;

fn no_env(_: &str) -> Option<String> {
    None
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(&format!("tests/fixtures/configs/{name}"))).unwrap()
}

#[test]
fn fixture_configs_parse() -> Result<(), String> {
    let cases = vec![
        TestCase::new(
            "default",
            "default.toml",
            Ok((5, 5, "shuffled".to_string(), None)),
        ),
        TestCase::new(
            "custom",
            "custom.toml",
            Ok((3, 2, "insertion".to_string(), Some(42))),
        ),
        TestCase::new("invalid order", "invalid_order.toml", Err(())),
    ];

    run_table_tests(cases, |name| {
        Config::from_toml(&read_fixture(name))
            .map(|config| {
                (
                    config.search.max_results,
                    config.quick_wins.max_results,
                    config.quick_wins.order,
                    config.quick_wins.seed,
                )
            })
            .map_err(|_| ())
    })
}

#[test]
fn custom_config_renames_store_files() {
    let config = Config::from_toml(&read_fixture("custom.toml")).unwrap();
    assert_eq!(config.data.dir, PathBuf::from("catalog-data"));
    assert_eq!(
        config.data.landing_path(),
        PathBuf::from("catalog-data").join("pages.csv")
    );
    assert_eq!(
        config.data.ux_path(),
        PathBuf::from("catalog-data").join("guidelines.csv")
    );
    assert_eq!(
        config.data.practices_path(),
        PathBuf::from("catalog-data").join("tech_practices.csv")
    );
    assert_eq!(config.quick_wins.group_order().unwrap(), GroupOrder::Insertion);
}

#[test]
fn empty_toml_is_the_default() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = Config::from_toml("[search\nmax_results = 3").unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}

#[test]
fn zero_max_results_is_rejected() {
    let err = Config::from_toml("[search]\nmax_results = 0").unwrap_err();
    assert!(err.to_string().contains("max_results"));
}

#[test]
fn explicit_file_resolves_relative_dir_against_root() {
    let fixture = CatalogFixture::new();
    let path = fixture.create_file("cfg/custom.toml", &read_fixture("custom.toml"));

    let config = Config::load_with_env(Some(&path), fixture.root(), no_env).unwrap();
    assert_eq!(config.data.dir, fixture.root().join("catalog-data"));
    assert_eq!(config.search.max_results, 3);
}

#[test]
fn explicit_file_from_environment() {
    let fixture = CatalogFixture::new();
    let path = fixture.create_file("elsewhere.toml", "[search]\nmax_results = 9\n");
    let path_str = path.display().to_string();

    let config = Config::load_with_env(None, fixture.root(), |key| {
        (key == CONFIG_ENV).then(|| path_str.clone())
    })
    .unwrap();
    assert_eq!(config.search.max_results, 9);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let fixture = CatalogFixture::new();
    let missing = fixture.root().join("nope.toml");
    let err = Config::load_with_env(Some(&missing), fixture.root(), no_env).unwrap_err();
    assert!(matches!(err, CatalogError::MissingConfig(_)));
}

#[test]
fn project_file_is_picked_up() {
    let fixture = CatalogFixture::new();
    fixture.create_file(
        PROJECT_CONFIG_FILE,
        "[data]\ndir = \"/srv/design\"\n\n[quick_wins]\norder = \"insertion\"\n",
    );

    let config = Config::load_with_env(None, fixture.root(), no_env).unwrap();
    assert_eq!(config.data.dir, PathBuf::from("/srv/design"));
    assert_eq!(config.quick_wins.group_order().unwrap(), GroupOrder::Insertion);
}

#[test]
fn environment_overrides_files() {
    let fixture = CatalogFixture::new();
    fixture.create_file(PROJECT_CONFIG_FILE, "[search]\nmax_results = 2\n");

    let config = Config::load_with_env(None, fixture.root(), |key| match key {
        "DESIGN_CATALOG_MAX_RESULTS" => Some("7".to_string()),
        "DESIGN_CATALOG_QUICK_WINS_SEED" => Some("11".to_string()),
        "DESIGN_CATALOG_DATA_DIR" => Some("stores".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.search.max_results, 7);
    assert_eq!(
        config.quick_wins.group_order().unwrap(),
        GroupOrder::Shuffled { seed: Some(11) }
    );
    assert_eq!(config.data.dir, fixture.root().join("stores"));
}

#[test]
fn bad_environment_values_are_rejected() {
    let fixture = CatalogFixture::new();
    let err = Config::load_with_env(None, fixture.root(), |key| {
        (key == "DESIGN_CATALOG_QUICK_WINS_MAX").then(|| "many".to_string())
    })
    .unwrap_err();
    assert!(err.to_string().contains("DESIGN_CATALOG_QUICK_WINS_MAX"));

    let err = Config::load_with_env(None, fixture.root(), |key| {
        (key == "DESIGN_CATALOG_QUICK_WINS_ORDER").then(|| "alphabetical".to_string())
    })
    .unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}
