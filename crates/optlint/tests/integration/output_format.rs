use std::process::Command;

use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

fn setup(directory: &std::path::Path) -> anyhow::Result<()> {
    std::fs::write(
        directory.join("optlint.toml"),
        r#"
[lint.severity]
normalize_null_check = "silent"

[options]
"roslynator.RCS1248.invert" = true

[[overrides]]
files = ["Legacy.cs"]
options = { "roslynator.RCS1078.invert" = true }
severity = { obsolete_option = "error" }
"#,
    )?;
    std::fs::write(directory.join("Program.cs"), "class Program {}")?;
    std::fs::write(directory.join("Legacy.cs"), "class Legacy {}")?;
    Ok(())
}

#[test]
fn test_output_github() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();
    setup(directory)?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--output-format")
            .arg("github")
            .run()
            .normalize_os_executable_name(),
        @r"
success: false
exit_code: 1
----- stdout -----
::error title=optlint (obsolete_option),file=Legacy.cs,line=1,col=1::Option 'roslynator.RCS1078.invert' is obsolete. Use option 'roslynator_empty_string_style' with value 'field' instead.
::error title=optlint (obsolete_option),file=Legacy.cs,line=1,col=1::Option 'roslynator.RCS1248.invert' is obsolete. Use option 'roslynator_null_check_style' with value 'equality_operator' instead.
::warning title=optlint (obsolete_option),file=Program.cs,line=1,col=1::Option 'roslynator.RCS1248.invert' is obsolete. Use option 'roslynator_null_check_style' with value 'equality_operator' instead.

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_output_json() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();
    setup(directory)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--output-format")
        .arg("json")
        .output()?;

    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let diagnostics = value.as_array().map(Vec::as_slice).unwrap_or_default();
    assert_eq!(diagnostics.len(), 3);

    let first = &diagnostics[0];
    assert_eq!(first["filename"], "Legacy.cs");
    assert_eq!(first["severity"], "error");
    assert_eq!(first["option"]["legacy_key"], "roslynator.RCS1078.invert");
    assert_eq!(first["option"]["current_key"], "roslynator_empty_string_style");
    assert_eq!(first["option"]["recommended_value"], "field");
    assert_eq!(first["option"]["rule"], "use_empty_string_literal_or_string_empty");
    assert_eq!(first["message"]["suggestion"], "roslynator_empty_string_style = field");
    assert_eq!(first["location"]["row"], 1);
    assert_eq!(first["location"]["column"], 1);

    assert_eq!(diagnostics[2]["filename"], "Program.cs");
    assert_eq!(diagnostics[2]["severity"], "warning");
    Ok(())
}
