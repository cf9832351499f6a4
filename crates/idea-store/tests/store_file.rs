use idea_core::entities::{AiAnalysis, Idea};
use idea_store::{StoreError, collection, file};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn idea(title: &str, impact: u8, confidence: u8, ease: u8) -> Idea {
    Idea {
        id: 0,
        title: title.into(),
        problem: format!("{title} problem"),
        solution: format!("{title} solution"),
        impact,
        confidence,
        ease,
        score: f64::from(u16::from(impact) * u16::from(confidence) * u16::from(ease)) / 10.0,
        date: "15/03/2025 14:05".into(),
        ai_analysis: None,
        description: None,
    }
}

fn analysis() -> AiAnalysis {
    AiAnalysis {
        market_trends: "Remote teams keep growing".into(),
        risks: vec!["Crowded market".into(), "Churn".into(), "Pricing pressure".into()],
        naming: vec!["Onboardly".into(), "FirstDay".into(), "Ramp".into()],
        steps: vec!["Interview users".into(), "Build MVP".into(), "Pilot".into()],
    }
}

#[test]
fn load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let ideas = file::load(&dir.path().join("nope.json")).unwrap();
    assert!(ideas.is_empty());
}

#[test]
fn load_blank_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.json");
    std::fs::write(&path, "  \n").unwrap();
    assert!(file::load(&path).unwrap().is_empty());
}

#[test]
fn save_then_load_roundtrips_including_analysis() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.json");

    let ideas = collection::append(Vec::new(), idea("A", 8, 6, 9));
    let ideas = collection::append(ideas, idea("B", 1, 1, 1));
    let ideas = collection::update_analysis(ideas, "B", analysis());

    file::save(&path, &ideas).unwrap();
    let loaded = file::load(&path).unwrap();
    assert_eq!(loaded, ideas);
    assert_eq!(loaded[1].ai_analysis, Some(analysis()));
}

#[test]
fn saved_file_is_four_space_indented_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.json");
    let ideas = collection::append(Vec::new(), idea("A", 8, 6, 9));

    file::save(&path, &ideas).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();

    assert!(raw.starts_with("[\n    {\n        \"id\": 1,"));
    assert!(raw.contains("\n        \"score\": 43.2,"));
    assert!(raw.contains("\n        \"ai_analysis\": null"));
    assert!(!raw.contains("description"));
    assert!(raw.ends_with("]\n"));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/ideas.json");
    file::save(&path, &[]).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
}

#[test]
fn save_replaces_previous_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.json");
    let first = collection::append(Vec::new(), idea("A", 2, 2, 2));
    file::save(&path, &first).unwrap();

    let second = collection::append(first, idea("B", 3, 3, 3));
    file::save(&path, &second).unwrap();

    assert_eq!(file::load(&path).unwrap().len(), 2);
    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1, "temp files must not be left behind");
}

#[test]
fn corrupt_file_is_reported_and_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = file::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }), "got {err:?}");
    assert!(err.to_string().contains("ideas.json"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn object_instead_of_array_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.json");
    std::fs::write(&path, r#"{"id": 1}"#).unwrap();
    assert!(matches!(file::load(&path), Err(StoreError::Corrupt { .. })));
}

#[test]
fn legacy_record_without_analysis_key_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "title": "Old", "problem": "p", "solution": "s",
             "impact": 5, "confidence": 5, "ease": 5, "score": 12.5,
             "date": "01/01/2024 08:00"}]"#,
    )
    .unwrap();

    let ideas = file::load(&path).unwrap();
    assert_eq!(ideas[0].title, "Old");
    assert_eq!(ideas[0].ai_analysis, None);
}

#[test]
fn unwritable_destination_is_write_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a plain file").unwrap();

    let err = file::save(&blocker.join("ideas.json"), &[]).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }), "got {err:?}");
}

#[cfg(unix)]
#[test]
fn save_keeps_existing_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.json");
    std::fs::write(&path, "[]\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    file::save(&path, &[idea("Kept", 5, 5, 5)]).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert_eq!(file::load(&path).unwrap().len(), 1);
}

#[cfg(unix)]
#[test]
fn save_writes_through_symlinked_store() {
    let dir = TempDir::new().unwrap();
    let real = dir.path().join("shared").join("ideas.json");
    std::fs::create_dir_all(real.parent().unwrap()).unwrap();
    std::fs::write(&real, "[]\n").unwrap();
    let link = dir.path().join("ideas_db.json");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    file::save(&link, &[idea("Linked", 4, 4, 4)]).unwrap();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    let stored = file::load(&real).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Linked");
}
