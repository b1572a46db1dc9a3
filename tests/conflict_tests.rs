use keyslate::{BindingEntry, ConflictDetector, EntryId};

fn entry(schema: &str, key: &str, raw: &[&str]) -> BindingEntry {
    let strings: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
    BindingEntry::from_raw(EntryId::new(schema, key), &strings)
}

#[test]
fn test_two_entries_on_same_accelerator_conflict() {
    let entries = vec![
        entry("org.gnome.shell.keybindings", "toggle-overview", &["<Super>Return"]),
        entry(
            "org.gnome.desktop.wm.keybindings",
            "begin-move",
            &["<Super>Return"],
        ),
    ];

    let conflicts = ConflictDetector::detect(&entries);
    assert_eq!(conflicts.len(), 1);

    let conflict = &conflicts[0];
    assert_eq!(conflict.accelerator.to_string(), "<Super>Return");
    assert_eq!(conflict.members.len(), 2);
    assert_eq!(
        conflict.members[0],
        EntryId::new("org.gnome.desktop.wm.keybindings", "begin-move")
    );
    assert_eq!(
        conflict.members[1],
        EntryId::new("org.gnome.shell.keybindings", "toggle-overview")
    );
}

#[test]
fn test_no_conflicts_on_distinct_accelerators() {
    let entries = vec![
        entry("wm", "close", &["<Alt>F4"]),
        entry("wm", "minimize", &["<Super>h"]),
    ];
    assert!(ConflictDetector::detect(&entries).is_empty());
}

#[test]
fn test_disabled_entries_never_conflict() {
    let entries = vec![
        entry("wm", "close", &[]),
        entry("wm", "minimize", &["disabled"]),
        entry("wm", "maximize", &[]),
    ];
    assert!(ConflictDetector::detect(&entries).is_empty());
}

#[test]
fn test_spelling_variants_group_together() {
    // <Primary>c and <Control>c are the same canonical accelerator.
    let entries = vec![
        entry("a", "copy", &["<Primary>c"]),
        entry("b", "interrupt", &["<Control>c"]),
    ];

    let conflicts = ConflictDetector::detect(&entries);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].accelerator.to_string(), "<Control>c");
}

#[test]
fn test_multi_accel_entry_contributes_each_accelerator() {
    let entries = vec![
        entry("wm", "switch-windows", &["<Alt>Tab", "<Super>Tab"]),
        entry("wm", "switch-group", &["<Super>Tab"]),
        entry("shell", "toggle-overview", &["<Alt>Tab"]),
    ];

    let conflicts = ConflictDetector::detect(&entries);
    assert_eq!(conflicts.len(), 2);
    // Sorted by canonical accelerator string.
    assert_eq!(conflicts[0].accelerator.to_string(), "<Alt>Tab");
    assert_eq!(conflicts[1].accelerator.to_string(), "<Super>Tab");
}

#[test]
fn test_entry_does_not_conflict_with_itself() {
    // Same accelerator listed twice on one entry is not a conflict.
    let entries = vec![entry("wm", "close", &["<Alt>F4", "<Alt>F4"])];
    assert!(ConflictDetector::detect(&entries).is_empty());
}

#[test]
fn test_group_of_three_reports_one_group_with_all_members() {
    let entries = vec![
        entry("a", "x", &["<Super>d"]),
        entry("b", "y", &["<Super>d"]),
        entry("c", "z", &["<Super>d"]),
    ];

    let conflicts = ConflictDetector::detect(&entries);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].members.len(), 3);
    // Pairwise expansion covers all unordered pairs.
    assert_eq!(conflicts[0].pairs().len(), 3);
}

#[test]
fn test_detection_is_deterministic() {
    let entries = vec![
        entry("b", "y", &["<Super>b"]),
        entry("a", "x", &["<Super>b"]),
        entry("d", "w", &["<Super>a"]),
        entry("c", "z", &["<Super>a"]),
    ];

    let first = ConflictDetector::detect(&entries);
    let second = ConflictDetector::detect(&entries);
    assert_eq!(first, second);
    assert_eq!(first[0].accelerator.to_string(), "<Super>a");
    assert!(first[0].members[0] < first[0].members[1]);
}
