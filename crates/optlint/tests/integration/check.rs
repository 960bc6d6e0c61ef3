use std::process::Command;

use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

const OPTIONS: &str = r#"
[options]
"roslynator.RCS1090.invert" = true
"roslynator.RCS1016.invert" = true
"roslynator.RCS1016.use_block_body_when_expression_is_multiline" = true
"#;

#[test]
fn test_obsolete_options_are_reported() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("optlint.toml"), OPTIONS)?;
    std::fs::write(directory.join("A.cs"), "class A {}")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run()
            .normalize_os_executable_name(),
        @r"
success: false
exit_code: 1
----- stdout -----
A.cs [1:1] obsolete_option Option 'roslynator.RCS1016.invert' is obsolete. Use option 'roslynator_body_style' with value 'block' instead.
A.cs [1:1] obsolete_option Option 'roslynator.RCS1090.invert' is obsolete. Use option 'roslynator_configure_await' with value 'false' instead.

Found 2 errors.

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_no_obsolete_option() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("optlint.toml"),
        "[options]\n\"roslynator.RCS1090.invert\" = false\nroslynator_configure_await = false\n",
    )?;
    std::fs::write(directory.join("A.cs"), "class A {}")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run()
            .normalize_os_executable_name(),
        @r"
success: true
exit_code: 0
----- stdout -----
All checks passed!

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_ignore_rule_on_cli() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("optlint.toml"), OPTIONS)?;
    std::fs::write(directory.join("A.cs"), "class A {}")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--ignore")
            .arg("configure_await")
            .run()
            .normalize_os_executable_name(),
        @r"
success: false
exit_code: 1
----- stdout -----
A.cs [1:1] obsolete_option Option 'roslynator.RCS1016.invert' is obsolete. Use option 'roslynator_body_style' with value 'block' instead.

Found 1 error.

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_ignore_obsolete_option() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("optlint.toml"), OPTIONS)?;
    std::fs::write(directory.join("A.cs"), "class A {}")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--ignore")
            .arg("obsolete_option")
            .run()
            .normalize_os_executable_name(),
        @r"
success: true
exit_code: 0
----- stdout -----
All checks passed!

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_select_keeps_obsolete_option() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("optlint.toml"), OPTIONS)?;
    std::fs::write(directory.join("A.cs"), "class A {}")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--select")
            .arg("configure_await")
            .run()
            .normalize_os_executable_name(),
        @r"
success: false
exit_code: 1
----- stdout -----
A.cs [1:1] obsolete_option Option 'roslynator.RCS1090.invert' is obsolete. Use option 'roslynator_configure_await' with value 'false' instead.

Found 1 error.

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_unknown_rule() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("A.cs"), "class A {}")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--select")
            .arg("configure_await,foo")
            .run()
            .normalize_os_executable_name(),
        @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
error: Unknown rule `foo` in the command line arguments.
"
    );

    Ok(())
}

#[test]
fn test_generated_code_is_skipped() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("optlint.toml"), OPTIONS)?;
    std::fs::write(directory.join("Form1.Designer.cs"), "partial class Form1 {}")?;
    std::fs::write(
        directory.join("Service.cs"),
        "// <auto-generated>\n// Generated by a tool.\n// </auto-generated>\nclass Service {}\n",
    )?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run()
            .normalize_os_executable_name(),
        @r"
success: true
exit_code: 0
----- stdout -----
All checks passed!

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_no_cs_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("README.md"), "# Hello")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run()
            .normalize_os_executable_name(),
        @r"
success: true
exit_code: 0
----- stdout -----
Warning: No C# files found under the given path(s).

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_missing_path() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let output = Command::new(binary_path())
        .current_dir(directory)
        .env("NO_COLOR", "1")
        .arg("check")
        .arg("does_not_exist")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Error: "));
    Ok(())
}

#[test]
fn test_explicit_file_is_checked() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("optlint.toml"), OPTIONS)?;
    std::fs::write(directory.join("A.cs"), "class A {}")?;
    std::fs::write(directory.join("B.cs"), "class B {}")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg("B.cs")
            .arg("--ignore")
            .arg("use_block_body_or_expression_body")
            .run()
            .normalize_os_executable_name(),
        @r"
success: false
exit_code: 1
----- stdout -----
B.cs [1:1] obsolete_option Option 'roslynator.RCS1090.invert' is obsolete. Use option 'roslynator_configure_await' with value 'false' instead.

Found 1 error.

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_with_timing() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("A.cs"), "class A {}")?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .env("NO_COLOR", "1")
        .arg("check")
        .arg(".")
        .arg("--with-timing")
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("All checks passed!\n\nChecked files in: "));
    Ok(())
}

#[test]
fn test_debug_log_reports_groups() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("optlint.toml"), OPTIONS)?;
    std::fs::write(directory.join("A.cs"), "class A {}")?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .env("NO_COLOR", "1")
        .env_remove("OPTLINT_LOG")
        .arg("check")
        .arg(".")
        .arg("--log-level")
        .arg("debug")
        .output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("grouped files by configuration"));
    assert!(stderr.contains("files=1"));
    Ok(())
}
