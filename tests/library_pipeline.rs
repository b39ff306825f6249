// tests/library_pipeline.rs

mod common;

use chrono::NaiveDate;
use common::{create_file, numbered_lines};
use exhibit::cancellation::CancellationToken;
use exhibit::config::ConfigBuilder;
use exhibit::core_types::Category;
use exhibit::output::render_document;
use exhibit::processing::format_file_header;
use exhibit::{execute, extract, paginate, scan, select};
use std::fs;
use tempfile::tempdir;

fn fixed_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap()
}

#[test]
fn test_execute_reports_stage_counts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "main.dart", "void main() {}")?;
    create_file(temp.path(), "core/router/routes.dart", "const routes = [];")?;
    create_file(temp.path(), "models.freezed.dart", "// generated")?;
    create_file(temp.path(), "README.md", "# readme")?;

    let config = ConfigBuilder::new()
        .source_dir(temp.path().to_str().unwrap())
        .build()?;
    let result = execute(&config, &CancellationToken::new(), None, fixed_time())?;

    assert_eq!(result.scanned_count, 4);
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.excluded_count(), 2);
    assert_eq!(result.files[0].category, Category::Entry);
    assert_eq!(result.files[1].category, Category::Core);
    assert_eq!(result.extraction.success_count, 2);
    assert_eq!(result.extraction.error_count, 0);
    assert!(!result.document.is_windowed());

    let text = render_document(&result.document);
    assert!(text.contains("Generated at: 2024-05-01 09:30:00"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_merged_stream_is_lossless() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let contents = [
        ("main.dart", "void main() {\n  run();\n}\n"),
        ("features/shop/data/api.dart", "class Api {}"),
        ("widgets/empty.dart", ""),
    ];
    for (path, content) in contents {
        create_file(temp.path(), path, content)?;
    }

    let config = ConfigBuilder::new()
        .source_dir(temp.path().to_str().unwrap())
        .build()?;
    let result = execute(&config, &CancellationToken::new(), None, fixed_time())?;

    let expected = contents
        .iter()
        .map(|(path, content)| format!("{}{}", format_file_header(path), content))
        .collect::<Vec<_>>()
        .join("\n\n");
    assert_eq!(result.extraction.merged, expected);
    assert_eq!(
        result.extraction.total_lines,
        expected.split('\n').count()
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_unreadable_file_is_isolated() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // Same category, so the ranking follows size: five, four, three, two, one.
    let names = ["five", "four", "three", "two", "one"];
    for (index, name) in names.iter().enumerate() {
        let path = format!("widgets/{}.dart", name);
        create_file(temp.path(), &path, &numbered_lines(name, 5 - index))?;
    }

    let config = ConfigBuilder::new()
        .source_dir(temp.path().to_str().unwrap())
        .build()?;
    let token = CancellationToken::new();
    let files = select(scan(&config, &token)?, &config, &token)?;
    assert_eq!(files[2].relative_path(), "widgets/three.dart");

    // The third-ranked file disappears between selection and extraction.
    fs::remove_file(temp.path().join("widgets/three.dart"))?;
    let extraction = extract(&files, &config, &token, None)?;

    assert_eq!(extraction.success_count, 4);
    assert_eq!(extraction.error_count, 1);
    assert_eq!(extraction.failures[0].file_path, "widgets/three.dart");
    let order: Vec<&str> = extraction.blocks.iter().map(|b| b.file_path.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "widgets/five.dart",
            "widgets/four.dart",
            "widgets/two.dart",
            "widgets/one.dart"
        ]
    );
    assert!(!extraction.merged.contains("three"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_same_input_renders_identical_documents() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    for name in ["b.dart", "a.dart", "C.dart", "core/models/m.dart"] {
        create_file(temp.path(), name, "class X {}")?;
    }

    let config = ConfigBuilder::new()
        .source_dir(temp.path().to_str().unwrap())
        .build()?;
    let first = execute(&config, &CancellationToken::new(), None, fixed_time())?;
    let second = execute(&config, &CancellationToken::new(), None, fixed_time())?;

    assert_eq!(
        render_document(&first.document),
        render_document(&second.document)
    );
    let order: Vec<&str> = first.files.iter().map(|f| f.relative_path()).collect();
    assert_eq!(order, vec!["core/models/m.dart", "C.dart", "a.dart", "b.dart"]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_paginate_windows_large_stream() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "main.dart", &numbered_lines("line", 4997))?;

    let config = ConfigBuilder::new()
        .source_dir(temp.path().to_str().unwrap())
        .build()?;
    let token = CancellationToken::new();
    let files = select(scan(&config, &token)?, &config, &token)?;
    let extraction = extract(&files, &config, &token, None)?;
    let document = paginate(&extraction, &config, fixed_time());

    assert_eq!(document.total_source_lines, 5000);
    assert_eq!(document.front_window.len(), 1500);
    assert_eq!(document.back_window.len(), 1500);
    assert_eq!(document.back_start_line(), Some(3501));
    assert_eq!(document.back_window[0], "line 3498");
    assert_eq!(document.back_window[1499], "line 4997");

    let text = render_document(&document);
    assert!(text.contains("Front 30 pages (lines 1 - 1500)"));
    assert!(text.contains("Back 30 pages (lines 3501 - 5000)"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_cancelled_token_stops_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "main.dart", "void main() {}")?;

    let config = ConfigBuilder::new()
        .source_dir(temp.path().to_str().unwrap())
        .build()?;
    let token = CancellationToken::new();
    token.cancel();

    let result = execute(&config, &token, None, fixed_time());
    assert!(matches!(result, Err(exhibit::errors::Error::Interrupted)));

    temp.close()?;
    Ok(())
}
