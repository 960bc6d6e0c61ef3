use std::process::Command;

use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

#[test]
fn test_stats() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("optlint.toml"),
        r#"
[options]
"roslynator.RCS1090.invert" = true

[[overrides]]
files = ["B.cs"]
options = { "roslynator.RCS1018.invert" = true }
"#,
    )?;
    std::fs::write(directory.join("A.cs"), "class A {}")?;
    std::fs::write(directory.join("B.cs"), "class B {}")?;
    std::fs::write(directory.join("C.cs"), "class C {}")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--statistics")
            .run()
            .normalize_os_executable_name(),
        @r"
success: false
exit_code: 1
----- stdout -----
    3 roslynator.RCS1090.invert
    1 roslynator.RCS1018.invert

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_stats_no_violation() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("A.cs"), "class A {}")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--statistics")
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
