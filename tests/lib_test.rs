//! Library integration tests.

use catalog_lint::CatalogError;

#[test]
fn error_types_are_public() {
    let err = CatalogError::CatalogNotFound {
        path: "gradle/libs.versions.toml".into(),
    };
    assert!(err.to_string().contains("gradle/libs.versions.toml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> catalog_lint::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use catalog_lint::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["catalog-lint", "format", "--stdout"]);

    if let Some(Commands::Format(args)) = cli.command {
        assert!(args.stdout);
        assert!(!args.check);
    } else {
        panic!("Expected Format command");
    }
}

#[test]
fn custom_rule_registry_can_be_built() {
    use catalog_lint::catalog::segment;
    use catalog_lint::config::BomRegistry;
    use catalog_lint::lint::{CatalogLinter, LeadingWhitespaceRule, RuleRegistry};

    let mut registry = RuleRegistry::new();
    registry.register(Box::new(LeadingWhitespaceRule));
    let linter = CatalogLinter::with_registry(registry, BomRegistry::default());

    let diagnostics = linter
        .lint(&segment("[versions]\nb = \"1\"\n a = \"2\"\n"))
        .unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule_id.0, "leading-whitespace");
}

#[test]
fn config_round_trips_through_yaml() {
    use catalog_lint::config::{parse_config, LinterConfig};
    use std::path::Path;

    let config = parse_config(
        "catalog: gradle/deps.toml\nboms:\n  springBom:\n    - springCore\n    - springWeb\n",
        Path::new(".catalog-lint.yml"),
    )
    .unwrap();

    assert_eq!(config.catalog_path(), Path::new("gradle/deps.toml"));
    assert!(config.boms.is_bom("springBom"));
    assert!(config.boms.is_dependent("springWeb"));
    assert_ne!(config, LinterConfig::default());
}
