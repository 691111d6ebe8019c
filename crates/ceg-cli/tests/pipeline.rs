//! End-to-end runs of the generation pipeline against temporary folders.

use std::fs;
use std::path::{Path, PathBuf};

use ceg_cli::pipeline::{RunOptions, inspect, load_config_file, resolve_config, run};
use ceg_model::GeneratorConfig;
use ceg_output::OverwritePolicy;
use tempfile::TempDir;

const METADATA: &str = r#"[
    {
        "LogicalName": "account",
        "DisplayName": "Account",
        "Attributes": [
            {"LogicalName": "name", "VariableName": "Name", "Type": "String"},
            {
                "LogicalName": "statuscode",
                "VariableName": "StatusCode",
                "Type": 13,
                "Options": [{"Label": "Active", "Value": 1}, {"Label": "Inactive", "Value": 2}]
            }
        ]
    },
    {
        "LogicalName": "contact",
        "DisplayName": "Contact",
        "Attributes": [
            {
                "LogicalName": "donotemail",
                "VariableName": "DoNotEMail",
                "DisplayName": "Do not allow Emails",
                "Type": "Boolean",
                "Options": [{"Label": "Allow", "Value": 0}, {"Label": "Do Not Allow", "Value": 1}]
            }
        ]
    }
]"#;

fn write_metadata(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("metadata.json");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn generate_writes_both_artifacts_per_entity() {
    let dir = TempDir::new().unwrap();
    let input = write_metadata(dir.path(), METADATA);
    let output = dir.path().join("out");

    let result = run(&GeneratorConfig::new(&input, &output), &RunOptions::default()).unwrap();

    assert_eq!(result.entities.len(), 2);
    assert_eq!(result.written.len(), 4);
    assert_eq!(result.files_label(), "4 written");
    assert_eq!(result.written[0], output.join("constants/Account.ts"));
    assert_eq!(result.written[1], output.join("enums/Account.ts"));

    let constants = fs::read_to_string(output.join("constants/Account.ts")).unwrap();
    assert!(constants.contains("export const Name = \"name\";"), "{constants}");
    let enums = fs::read_to_string(output.join("enums/Account.ts")).unwrap();
    assert!(enums.contains("export const enum StatusCode {"), "{enums}");
    assert!(enums.contains("    Inactive = 2,"), "{enums}");
    let flags = fs::read_to_string(output.join("enums/Contact.ts")).unwrap();
    assert!(flags.contains("export class DoNotAllowEmails {"), "{flags}");
    assert!(
        flags.contains("public static readonly DoNotAllow = true;"),
        "{flags}"
    );

    let contact = &result.entities[1];
    assert_eq!(contact.name, "Contact");
    assert_eq!(contact.flag_holders, 1);
    assert_eq!(contact.enums, 0);
    assert_eq!(contact.enums_path, output.join("enums/Contact.ts"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_metadata(dir.path(), METADATA);
    let output = dir.path().join("out");
    let options = RunOptions {
        dry_run: true,
        ..RunOptions::default()
    };

    let result = run(&GeneratorConfig::new(&input, &output), &options).unwrap();

    assert!(result.dry_run);
    assert!(result.written.is_empty());
    assert_eq!(result.planned_file_count(), 4);
    assert_eq!(result.files_label(), "4 planned");
    assert!(!output.exists());
}

#[test]
fn no_overwrite_refuses_existing_targets() {
    let dir = TempDir::new().unwrap();
    let input = write_metadata(dir.path(), METADATA);
    let output = dir.path().join("out");
    fs::create_dir_all(output.join("enums")).unwrap();
    fs::write(output.join("enums/Contact.ts"), "// hand written\n").unwrap();
    let options = RunOptions {
        overwrite: OverwritePolicy::Fail,
        ..RunOptions::default()
    };

    let err = run(&GeneratorConfig::new(&input, &output), &options).unwrap_err();

    assert!(format!("{err:#}").contains("refusing to overwrite"), "{err:#}");
    assert!(!output.join("constants").exists());
    assert_eq!(
        fs::read_to_string(output.join("enums/Contact.ts")).unwrap(),
        "// hand written\n"
    );
}

#[test]
fn failed_generation_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_metadata(
        dir.path(),
        r#"[
            {"LogicalName": "account", "DisplayName": "Account"},
            {"LogicalName": "new_account", "DisplayName": "account"}
        ]"#,
    );
    let output = dir.path().join("out");

    let err = run(&GeneratorConfig::new(&input, &output), &RunOptions::default()).unwrap_err();

    assert!(format!("{err:#}").contains("generate entity code"), "{err:#}");
    assert!(!output.exists());
}

#[test]
fn config_file_paths_resolve_against_its_folder() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("ceg.json");
    fs::write(
        &config_path,
        r#"{"input": "metadata.json", "outputFolder": "src/generated"}"#,
    )
    .unwrap();

    let config = load_config_file(&config_path).unwrap();
    assert_eq!(config.input, dir.path().join("metadata.json"));
    assert_eq!(config.output_folder, dir.path().join("src/generated"));
}

#[test]
fn explicit_paths_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("ceg.json");
    fs::write(
        &config_path,
        r#"{"input": "metadata.json", "outputFolder": "out"}"#,
    )
    .unwrap();

    let config = resolve_config(
        Some(config_path.as_path()),
        None,
        Some(Path::new("/tmp/elsewhere")),
    )
    .unwrap();
    assert_eq!(config.input, dir.path().join("metadata.json"));
    assert_eq!(config.output_folder, PathBuf::from("/tmp/elsewhere"));
}

#[test]
fn missing_paths_are_reported() {
    let err = resolve_config(None, Some(Path::new("metadata.json")), None).unwrap_err();
    assert!(err.to_string().contains("--output-dir"), "{err}");
    let err = resolve_config(None, None, Some(Path::new("out"))).unwrap_err();
    assert!(err.to_string().contains("--input"), "{err}");
}

#[test]
fn inspect_flags_colliding_entities() {
    let dir = TempDir::new().unwrap();
    let input = write_metadata(
        dir.path(),
        r#"[
            {"LogicalName": "account", "DisplayName": "Account"},
            {"LogicalName": "contact", "DisplayName": "Contact",
             "Attributes": [{"LogicalName": "x", "VariableName": "X", "Type": 11, "Options": []}]},
            {"LogicalName": "new_account", "DisplayName": "ACCOUNT"}
        ]"#,
    );

    let rows = inspect(&input).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].collides);
    assert!(!rows[1].collides);
    assert_eq!(rows[1].option_attributes, 1);
    assert_eq!(rows[2].name.as_deref(), Ok("ACCOUNT"));
    assert!(rows[2].collides);
}
