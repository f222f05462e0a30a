use anyhow::Result;

use crate::{CliTest, FR_CATALOG, stderr, stdout};

const DE_CATALOG: &str = r#"msgid ""
msgstr ""
"Language: de\n"

#: app.py:1
msgid "Hello"
msgstr "Hallo"
"#;

#[test]
fn test_check_reports_incomplete_locale() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    test.write_catalog("de", DE_CATALOG)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("Checking translations in locale/"));
    assert!(out.contains("  de      : OK\n"));
    assert!(out.contains("  fr      : 2 empty, 1 untranslated (msgstr=msgid)\n"));
    assert!(out.contains("Summary: 2 locales, 1 clean, 3 total issues"));
    assert!(out.contains("Run with --verbose"));

    Ok(())
}

#[test]
fn test_check_verbose_lists_each_issue() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;

    let output = test.check_command().arg("-v").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("[empty] app.py:1"));
    assert!(out.contains("[untranslated] app.py:3"));
    assert!(out.contains("[empty_plural] app.py:5"));
    assert!(out.contains("\"One file\"  msgstr[1] is empty"));
    assert!(stderr(&output).contains("Note: No .pofillrc.json found"));

    Ok(())
}

#[test]
fn test_check_complete_catalog() -> Result<()> {
    let test = CliTest::with_catalog("de", DE_CATALOG)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("All translations are complete."));

    Ok(())
}

#[test]
fn test_check_selected_locale_only() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    test.write_catalog("de", DE_CATALOG)?;

    let output = test.check_command().arg("de").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("Summary: 1 locales, 1 clean, 0 total issues"));
    assert!(!out.contains("fr"));

    Ok(())
}

#[test]
fn test_check_source_locale_may_copy_msgids() -> Result<()> {
    let test = CliTest::with_catalog(
        "en_EN",
        r#"#: app.py:1
msgid "Hello"
msgstr "Hello"
"#,
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("  en_EN   : OK"));

    Ok(())
}

#[test]
fn test_check_skips_technical_exclusions() -> Result<()> {
    let test = CliTest::with_catalog("fr", FR_CATALOG)?;
    test.write_file(
        "technical_exclusions.json",
        r#"{ "exclusions": ["Copy"] }"#,
    )?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert!(out.contains("Loaded 1 technical exclusions"));
    assert!(out.contains("  fr      : 2 empty, 0 untranslated (msgstr=msgid)"));
    assert!(!stderr(&output).contains("warning:"));

    Ok(())
}

#[test]
fn test_check_warns_on_missing_exclusions() -> Result<()> {
    let test = CliTest::with_catalog("de", DE_CATALOG)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: Exclusions file not found"));

    Ok(())
}

#[test]
fn test_check_module_catalogs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/Module/Shop/locale/fr/messages.po", FR_CATALOG)?;

    let output = test.check_command().args(["--module", "Shop"]).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("Checking translations in lib/Module/Shop/locale/"));
    assert!(out.contains("  fr      : 2 empty, 1 untranslated"));

    Ok(())
}

#[test]
fn test_check_locale_root_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".pofillrc.json", r#"{ "localeRoot": "i18n" }"#)?;
    test.write_file("i18n/de/LC_MESSAGES/messages.po", DE_CATALOG)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checking translations in i18n/"));

    Ok(())
}

#[test]
fn test_check_missing_locale_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Locale directory not found"));

    Ok(())
}

#[test]
fn test_check_missing_catalog() -> Result<()> {
    let test = CliTest::with_catalog("de", DE_CATALOG)?;

    let output = test.check_command().arg("it").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Catalog not found"));

    Ok(())
}
