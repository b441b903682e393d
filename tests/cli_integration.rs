//! CLI integration tests for gitdeps.
//!
//! These tests drive the binary against a host project laid out in a temp
//! directory, from start-up through removal events.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const MARKER: &str = "GIT_DEPENDENCIES_LOADED";

const MANIFEST: &str = r#"{
  "name": "com.x.pkg",
  "version": "1.0.0",
  "gitDependencies": {
    "libA": "https://host/a.git",
    "libB": "https://host/b.git"
  }
}
"#;

/// Get the gitdeps binary command, isolated from the user's global config.
fn gitdeps(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitdeps").unwrap();
    cmd.env("HOME", project.path())
        .env_remove("GITDEPS_PROJECT")
        .args(["--color", "never", "--project"])
        .arg(project.path());
    cmd
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn package_dir(project: &TempDir) -> PathBuf {
    project.path().join("Packages/com.x.pkg")
}

/// Create a host project with the gitdeps package and one gated candidate.
fn create_project(manifest: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let pkg = package_dir(&tmp);

    write(&pkg.join("package.json"), manifest);
    write(
        &pkg.join("Editor/GitDependencyResolver.asmdef"),
        r#"{"name": "GitDependencyResolver"}"#,
    );
    write(
        &pkg.join("Runtime/Runtime.asmdef"),
        r#"{"name": "Runtime", "references": []}"#,
    );
    write(
        &tmp.path().join("Assets/Game/Game.asmdef"),
        r#"{"name": "Game"}"#,
    );

    tmp
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// ============================================================================
// gitdeps startup
// ============================================================================

#[test]
fn test_startup_gates_units_and_defines_marker() {
    let project = create_project(MANIFEST);

    gitdeps(&project)
        .args(["--dry-run", "startup"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unit Runtime"))
        .stderr(predicate::str::contains("https://host/a.git"));

    let runtime = read(&package_dir(&project).join("Runtime/Runtime.asmdef"));
    assert!(runtime.contains(MARKER));

    let resolver = read(&package_dir(&project).join("Editor/GitDependencyResolver.asmdef"));
    assert!(!resolver.contains(MARKER));

    let game = read(&project.path().join("Assets/Game/Game.asmdef"));
    assert!(!game.contains(MARKER));

    let defines = read(&project.path().join("ProjectSettings/ScriptingDefines.toml"));
    assert!(defines.contains("[defines]"));
    assert!(defines.contains(&format!("Standalone = \"{}\"", MARKER)));
}

#[test]
fn test_startup_twice_is_idempotent() {
    let project = create_project(MANIFEST);
    let runtime_path = package_dir(&project).join("Runtime/Runtime.asmdef");
    let defines_path = project.path().join("ProjectSettings/ScriptingDefines.toml");

    gitdeps(&project).args(["--dry-run", "startup"]).assert().success();
    let runtime = read(&runtime_path);
    let defines = read(&defines_path);

    gitdeps(&project)
        .args(["--dry-run", "startup"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unit Runtime").not());

    assert_eq!(read(&runtime_path), runtime);
    assert_eq!(read(&defines_path), defines);
    assert_eq!(read(&defines_path).matches(MARKER).count(), 1);
}

#[test]
fn test_startup_without_resolver_descriptor_fails() {
    let project = TempDir::new().unwrap();

    gitdeps(&project)
        .args(["--dry-run", "startup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GitDependencyResolver"));
}

#[test]
fn test_startup_reports_invalid_manifest_but_still_gates() {
    let project = create_project(r#"{"name": "com.x.pkg"}"#);

    gitdeps(&project)
        .args(["--dry-run", "startup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gitDependencies"));

    let runtime = read(&package_dir(&project).join("Runtime/Runtime.asmdef"));
    assert!(runtime.contains(MARKER));
}

// ============================================================================
// gitdeps add / remove
// ============================================================================

#[test]
fn test_add_lists_sources() {
    let project = create_project(MANIFEST);

    gitdeps(&project)
        .args(["--dry-run", "add"])
        .assert()
        .success()
        .stderr(predicate::str::contains("https://host/a.git"))
        .stderr(predicate::str::contains("https://host/b.git"));
}

#[test]
fn test_add_with_invalid_manifest_fails() {
    let project = create_project(r#"{"name": "com.x.pkg"}"#);

    gitdeps(&project)
        .args(["--dry-run", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("package manifest is invalid"));
}

#[test]
fn test_remove_lists_names() {
    let project = create_project(MANIFEST);

    gitdeps(&project)
        .args(["--dry-run", "remove"])
        .assert()
        .success()
        .stderr(predicate::str::contains("libA"))
        .stderr(predicate::str::contains("libB"));
}

#[cfg(unix)]
#[test]
fn test_configured_installer_receives_batches() {
    use std::os::unix::fs::PermissionsExt;

    let project = create_project(MANIFEST);
    let log = project.path().join("installer.log");
    let script = project.path().join("installer.sh");
    write(
        &script,
        &format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n", log.display()),
    );
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    write(
        &project.path().join(".gitdeps/config.toml"),
        &format!(
            "[registry]\ncommand = \"{}\"\nadd-args = [\"install\"]\n",
            script.display()
        ),
    );

    gitdeps(&project).arg("add").assert().success();
    gitdeps(&project)
        .args(["removed", "com.x.pkg"])
        .assert()
        .success();

    let calls = read(&log);
    let lines: Vec<&str> = calls.lines().collect();
    assert_eq!(
        lines,
        vec![
            "install https://host/a.git https://host/b.git",
            "remove libA libB"
        ]
    );
}

// ============================================================================
// gitdeps removed
// ============================================================================

#[test]
fn test_removed_own_package() {
    let project = create_project(MANIFEST);

    gitdeps(&project)
        .args(["--dry-run", "removed", "com.x.pkg"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed"));
}

#[test]
fn test_removed_other_package_is_ignored() {
    let project = create_project(MANIFEST);

    gitdeps(&project)
        .args(["--dry-run", "removed", "com.other.pkg"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped"));
}

#[cfg(unix)]
#[test]
fn test_removed_fails_when_installer_fails() {
    use std::os::unix::fs::PermissionsExt;

    let project = create_project(MANIFEST);
    let script = project.path().join("installer.sh");
    write(&script, "#!/bin/sh\nexit 1\n");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    write(
        &project.path().join(".gitdeps/config.toml"),
        &format!("[registry]\ncommand = \"{}\"\n", script.display()),
    );

    gitdeps(&project)
        .args(["removed", "com.x.pkg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("registry request failed"))
        .stderr(predicate::str::contains("Removed").not());
}

// ============================================================================
// gitdeps reload / inject / define
// ============================================================================

#[test]
fn test_reload_prints_dependencies() {
    let project = create_project(MANIFEST);

    gitdeps(&project)
        .arg("reload")
        .assert()
        .success()
        .stdout(predicate::str::contains("libA = https://host/a.git"))
        .stdout(predicate::str::contains("libB = https://host/b.git"));
}

#[test]
fn test_inject_only_touches_units() {
    let project = create_project(MANIFEST);

    gitdeps(&project).arg("inject").assert().success();

    let runtime = read(&package_dir(&project).join("Runtime/Runtime.asmdef"));
    assert!(runtime.contains(MARKER));
    assert!(!project
        .path()
        .join("ProjectSettings/ScriptingDefines.toml")
        .exists());
}

#[test]
fn test_define_uses_configured_target() {
    let project = create_project(MANIFEST);
    write(
        &project.path().join(".gitdeps/config.toml"),
        "[build]\nactive-target = \"Android\"\nsymbols-file = \"defines.toml\"\n",
    );
    write(
        &project.path().join("defines.toml"),
        "[defines]\nStandalone = \"KEEP\"\nAndroid = \"A\"\n",
    );

    gitdeps(&project).arg("define").assert().success();

    let defines = read(&project.path().join("defines.toml"));
    assert!(defines.contains("Standalone = \"KEEP\""));
    assert!(defines.contains(&format!("Android = \"A;{}\"", MARKER)));
}

// ============================================================================
// gitdeps completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let project = TempDir::new().unwrap();

    gitdeps(&project)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitdeps"));
}
