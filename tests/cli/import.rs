use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::{CliTest, FR_CATALOG, stderr, stdout};

const TASK_FILE: &str = r#"{
  "locale": "fr",
  "entries": [
    { "locations": ["app.py:1"], "msgid": "Hello", "translation": "Bonjour" },
    { "locations": ["app.py:3"], "msgid": "Copy", "translation": "" },
    {
      "locations": ["app.py:5"],
      "msgid": "One file",
      "msgid_plural": "%d files",
      "translation": "",
      "translations": { "1": "%d fichiers" }
    }
  ],
  "fuzzy_entries": [
    {
      "locations": ["app.py:4"],
      "msgid": "Delete",
      "current_translation": "Supprimer ?",
      "translation": "Supprimer"
    }
  ]
}
"#;

const UPDATED_CATALOG: &str = r#"msgid ""
msgstr ""
"Language: fr\n"
"Plural-Forms: nplurals=2; plural=(n > 1);\n"

#. Greeting
#: app.py:1
msgid "Hello"
msgstr "Bonjour"

#: app.py:2
msgid "Save"
msgstr "Enregistrer"

#: app.py:3
msgid "Copy"
msgstr "Copy"

#: app.py:4
msgid "Delete"
msgstr "Supprimer"

#: app.py:5
msgid "One file"
msgid_plural "%d files"
msgstr[0] "Un fichier"
msgstr[1] "%d fichiers"
"#;

#[test]
fn test_import_updates_catalog() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    test.write_file("fr_untranslated.json", TASK_FILE)?;

    let output = test
        .import_command()
        .arg("fr_untranslated.json")
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(out.contains("Created backup: locale/fr/LC_MESSAGES/messages.po.backup."));
    assert!(out.contains("- Translations updated: 3"));
    assert!(out.contains("- Fuzzy flags cleared: 1"));
    assert!(out.contains("msgfmt locale/fr/LC_MESSAGES/messages.po"));
    assert_eq!(test.read_catalog("fr")?, UPDATED_CATALOG);

    let backups = test.backups("fr")?;
    assert_eq!(backups.len(), 1);
    assert_eq!(std::fs::read_to_string(&backups[0])?, FR_CATALOG);

    Ok(())
}

#[test]
fn test_import_then_check_is_clean_for_filled_entries() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    test.write_file("fr_untranslated.json", TASK_FILE)?;
    test.import_command().arg("fr_untranslated.json").output()?;

    let output = test.check_command().arg("fr").output()?;

    // Only "Copy" was left untranslated by the translator.
    assert!(stdout(&output).contains("  fr      : 0 empty, 1 untranslated (msgstr=msgid)"));

    Ok(())
}

#[test]
fn test_export_and_import_with_root_from_another_directory() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    let elsewhere = TempDir::new()?;

    let output = test
        .export_command()
        .current_dir(elsewhere.path())
        .arg("fr")
        .arg("--root")
        .arg(test.root())
        .output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(test.root().join("fr_untranslated.json").exists());

    test.write_file("fr_untranslated.json", TASK_FILE)?;
    let output = test
        .import_command()
        .current_dir(elsewhere.path())
        .arg("fr_untranslated.json")
        .arg("--root")
        .arg(test.root())
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Loaded translations from fr_untranslated.json"));
    assert_eq!(test.read_catalog("fr")?, UPDATED_CATALOG);

    Ok(())
}

#[test]
fn test_import_dry_run_leaves_catalog_untouched() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    test.write_file("fr_untranslated.json", TASK_FILE)?;

    let output = test
        .import_command()
        .args(["fr_untranslated.json", "--dry-run"])
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("Would update locale/fr/LC_MESSAGES/messages.po"));
    assert!(out.contains("- Translations updated: 3"));
    assert_eq!(test.read_catalog("fr")?, FR_CATALOG);
    assert!(test.backups("fr")?.is_empty());

    Ok(())
}

#[test]
fn test_import_exported_file_without_translations_is_noop() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    test.export_command().arg("fr").output()?;

    let output = test
        .import_command()
        .arg("fr_untranslated.json")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("- Translations updated: 0"));
    assert_eq!(test.read_catalog("fr")?, FR_CATALOG);

    Ok(())
}

#[test]
fn test_import_requires_locale() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    test.write_file("tasks.json", r#"{ "entries": [] }"#)?;

    let output = test.import_command().arg("tasks.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Invalid translation payload"));
    assert_eq!(test.read_catalog("fr")?, FR_CATALOG);

    Ok(())
}

#[test]
fn test_import_missing_task_file() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;

    let output = test.import_command().arg("missing.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Task file not found"));

    Ok(())
}

#[test]
fn test_import_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("it_untranslated.json", r#"{ "locale": "it" }"#)?;

    let output = test
        .import_command()
        .arg("it_untranslated.json")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Catalog not found"));

    Ok(())
}
