use semver_bump::boundary::{BoundaryWarning, PatternKind};
use semver_bump::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_no_release_tag_display() {
    let warning = BoundaryWarning::NoReleaseTag {
        initial_version: "1.0.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No release tag found"),
        "Message should contain 'No release tag found', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("1.0.0"),
        "Message should contain the initial version, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_new_commits_display() {
    let warning = BoundaryWarning::NoNewCommits {
        latest_tag: "v1.0.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No new commits"),
        "Message should contain 'No new commits', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("v1.0.0"),
        "Message should contain tag 'v1.0.0', got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_invalid_include_pattern_display() {
    let warning = BoundaryWarning::InvalidPathPattern {
        kind: PatternKind::Include,
        pattern: "src/[".to_string(),
        reason: "invalid range pattern".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "include filter pattern 'src/[' is invalid (invalid range pattern), it never matches"
    );
}

#[test]
fn test_boundary_warning_invalid_exclude_pattern_display() {
    let warning = BoundaryWarning::InvalidPathPattern {
        kind: PatternKind::Exclude,
        pattern: "[".to_string(),
        reason: "invalid range pattern".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "exclude filter pattern '[' is invalid (invalid range pattern), it matches every path"
    );
}

#[test]
fn test_display_boundary_warning_without_subscriber() {
    // no subscriber installed, the warning is dropped silently
    ui::display_boundary_warning(&BoundaryWarning::NoNewCommits {
        latest_tag: "1.2.3".to_string(),
    });
}
