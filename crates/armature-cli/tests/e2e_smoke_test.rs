use std::{fs, path::PathBuf};

use tempfile::tempdir;

use armature_cli::{Args, run};

/// Collects all .toml scheme files from a directory
fn collect_scheme_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo schemes live at the workspace root, relative to the workspace not
/// the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

#[test]
fn e2e_smoke_test_valid_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_scheme_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            check: false,
            log_level: "off".to_string(),
        };

        if let Err(e) = run(&args) {
            failed_demos.push((demo_path.clone(), e));
        } else {
            let document = fs::read_to_string(&output_path).expect("output document exists");
            assert!(
                document.contains("\"positions\""),
                "document for {} has a positions map",
                demo_path.display()
            );
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_scheme_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            check: false,
            log_level: "off".to_string(),
        };

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_check_mode_accepts_valid_scheme() {
    let demo = demos_path().join("reducer.toml");

    let args = Args {
        input: demo.to_string_lossy().to_string(),
        output: "unused.json".to_string(),
        config: None,
        check: true,
        log_level: "off".to_string(),
    };

    run(&args).expect("check mode passes for a valid scheme");
}

#[test]
fn e2e_check_mode_rejects_invalid_scheme() {
    let demo = demos_path().join("errors").join("missing_parent.toml");

    let args = Args {
        input: demo.to_string_lossy().to_string(),
        output: "unused.json".to_string(),
        config: None,
        check: true,
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err(), "check mode fails for an invalid scheme");
}
