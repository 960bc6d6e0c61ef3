use std::process::Command;

use crate::helpers::binary_path;

#[test]
fn test_list_options() -> anyhow::Result<()> {
    let output = Command::new(binary_path())
        .env("NO_COLOR", "1")
        .arg("options")
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(output.status.success());
    assert_eq!(lines.len(), 15);
    assert_eq!(
        lines[0],
        "roslynator.RCS1096.invert = true -> roslynator_enum_has_flag_style = method (use_has_flag_method_or_bitwise_operator)"
    );
    assert!(lines.contains(
        &"roslynator.RCS1213.suppress_unity_script_methods = true|false -> roslynator_suppress_unity_script_methods = <same value> (remove_unused_member_declaration)"
    ));
    Ok(())
}

#[test]
fn test_list_options_json() -> anyhow::Result<()> {
    let output = Command::new(binary_path()).arg("options").arg("--json").output()?;

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let entries = value.as_array().map(Vec::as_slice).unwrap_or_default();

    assert!(output.status.success());
    assert_eq!(entries.len(), 15);
    assert_eq!(entries[5]["legacy_key"], "roslynator.RCS1090.invert");
    assert_eq!(entries[5]["reported_values"], serde_json::json!(["true"]));
    assert_eq!(entries[5]["recommended_value"], "false");
    assert_eq!(entries[5]["rule"], "configure_await");
    Ok(())
}
