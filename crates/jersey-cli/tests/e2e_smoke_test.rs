use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use jersey_cli::{Args, run};

/// Collects all files with the given extension from a directory
fn collect_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension)
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo inputs live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: Some(input.to_string_lossy().to_string()),
        output: output.to_string_lossy().to_string(),
        log_level: "off".to_string(),
        ..Default::default()
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_files(&demos_dir(), "jersey");
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("output written");
                assert!(svg.starts_with("<?xml"), "{}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_files(&demos_dir().join("errors"), "jersey");
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(!output_path.exists(), "{}", demo_path.display());
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
fn e2e_json_design_records() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let records = collect_files(&demos_dir(), "json");
    assert!(!records.is_empty(), "No design records found in demos/");

    for record in &records {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            record.file_stem().unwrap().to_string_lossy()
        ));
        let args = Args {
            from_json: true,
            ..args_for(record, &output_path)
        };

        run(&args).unwrap_or_else(|e| panic!("{}: {e}", record.display()));
        assert!(output_path.exists());
    }
}

#[test]
fn e2e_inspection_skips_rendering() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input = temp_dir.path().join("kit.jersey");
    // Passes tokenizing and parsing but would fail validation.
    fs::write(&input, r#"jersey { team: "Only"; }"#).unwrap();
    let output_path = temp_dir.path().join("kit.svg");

    let args = Args {
        write_tokens: true,
        show_ast: true,
        ..args_for(&input, &output_path)
    };
    run(&args).expect("inspection succeeds");

    assert!(!output_path.exists());
    let listing = fs::read_to_string(format!("{}.tokens.txt", input.to_string_lossy())).unwrap();
    assert!(listing.contains("1:10\tTEAM\tteam"));
}

#[test]
fn e2e_debug_flag_draws_overlay() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input = temp_dir.path().join("kit.jersey");
    fs::write(&input, "jersey { primary: #F00; secondary: #0F0; tertiary: #00F; }").unwrap();
    let output_path = temp_dir.path().join("kit.svg");

    let args = Args {
        debug: true,
        ..args_for(&input, &output_path)
    };
    run(&args).expect("render succeeds");

    assert!(fs::read_to_string(&output_path).unwrap().contains("magenta"));
}

#[test]
fn e2e_show_grammar_needs_no_input() {
    let args = Args {
        show_grammar: true,
        log_level: "off".to_string(),
        ..Default::default()
    };
    assert!(run(&args).is_ok());
}
