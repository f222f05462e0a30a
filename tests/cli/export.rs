use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, FR_CATALOG, stderr, stdout};

#[test]
fn test_export_writes_task_file() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;

    let output = test.export_command().arg("fr").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("Extraction complete!"));
    assert!(out.contains("- Untranslated entries: 3\n"));
    assert!(out.contains("- Fuzzy entries: 1\n"));
    assert!(out.contains("1. app.py:1"));

    let content = test.read_file("fr_untranslated.json")?;
    insta::assert_snapshot!(content, @r##"
    {
      "locale": "fr",
      "untranslated_count": 3,
      "fuzzy_count": 1,
      "total_untranslated": 3,
      "total_fuzzy": 1,
      "excluded_count": 0,
      "entries": [
        {
          "locations": [
            "app.py:1"
          ],
          "msgid": "Hello",
          "comments": [
            "#. Greeting"
          ],
          "translation": ""
        },
        {
          "locations": [
            "app.py:3"
          ],
          "msgid": "Copy",
          "translation": ""
        },
        {
          "locations": [
            "app.py:5"
          ],
          "msgid": "One file",
          "msgid_plural": "%d files",
          "translation": "",
          "translations": {}
        }
      ],
      "fuzzy_entries": [
        {
          "locations": [
            "app.py:4"
          ],
          "msgid": "Delete",
          "current_translation": "Supprimer ?",
          "translation": ""
        }
      ]
    }
    "##);

    Ok(())
}

#[test]
fn test_export_limit_keeps_totals() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;

    let output = test.export_command().args(["fr", "--limit", "1"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("- Untranslated entries: 1 (limited from 3)"));

    let file: Value = serde_json::from_str(&test.read_file("fr_untranslated.json")?)?;
    assert_eq!(file["untranslated_count"], 1);
    assert_eq!(file["total_untranslated"], 3);
    assert_eq!(file["entries"].as_array().map(Vec::len), Some(1));
    assert_eq!(file["entries"][0]["msgid"], "Hello");

    Ok(())
}

#[test]
fn test_export_counts_excluded_entries() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    test.write_file(
        "technical_exclusions.json",
        r#"{ "exclusions": ["Copy"] }"#,
    )?;

    let output = test.export_command().arg("fr").output()?;
    assert!(stdout(&output).contains("- Excluded technical terms: 1"));

    let file: Value = serde_json::from_str(&test.read_file("fr_untranslated.json")?)?;
    assert_eq!(file["excluded_count"], 1);
    assert_eq!(file["untranslated_count"], 2);

    // --include-excluded ignores the exclusions file.
    test.export_command()
        .args(["fr", "--include-excluded"])
        .output()?;
    let file: Value = serde_json::from_str(&test.read_file("fr_untranslated.json")?)?;
    assert_eq!(file["excluded_count"], 0);
    assert_eq!(file["untranslated_count"], 3);

    Ok(())
}

#[test]
fn test_export_custom_output() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;

    let output = test
        .export_command()
        .args(["fr", "-o", "tasks.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join("tasks.json").exists());
    assert!(stdout(&output).contains("- Output saved to: tasks.json"));
    assert!(!test.root().join("fr_untranslated.json").exists());

    Ok(())
}

#[test]
fn test_export_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.export_command().arg("fr").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Catalog not found"));
    assert!(!test.root().join("fr_untranslated.json").exists());

    Ok(())
}
