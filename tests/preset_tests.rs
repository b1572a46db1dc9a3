use keyslate::{BindingEntry, EntryId, PresetAssignment, PresetDefinition, PresetError};

const VALID_PRESET: &str = r#"
[preset]
id = "vanilla-gnome"
label = "Vanilla GNOME"
version = "1"
protected = ["org.gnome.settings-daemon.plugins.media-keys.volume-up"]

[shortcuts]
"org.gnome.desktop.wm.keybindings.close" = ["<Alt>F4"]
"org.gnome.desktop.wm.keybindings.minimize" = []
"org.gnome.shell.keybindings.toggle-overview" = ["<Super>s"]
"#;

#[test]
fn test_load_valid_preset() {
    let preset = PresetDefinition::from_toml_str(VALID_PRESET).unwrap();

    assert_eq!(preset.id, "vanilla-gnome");
    assert_eq!(preset.label, "Vanilla GNOME");
    assert_eq!(preset.version, "1");
    assert_eq!(preset.assignments.len(), 3);
    assert!(preset
        .protected
        .contains(&EntryId::new("org.gnome.settings-daemon.plugins.media-keys", "volume-up")));
    assert!(preset.validate().is_empty());
}

#[test]
fn test_empty_assignment_means_disabled() {
    let preset = PresetDefinition::from_toml_str(VALID_PRESET).unwrap();
    let minimize = preset
        .assignments
        .iter()
        .find(|a| a.id.key_name == "minimize")
        .unwrap();
    assert!(minimize.bindings.is_empty());
}

#[test]
fn test_assignments_are_normalized_at_load() {
    let content = r#"
[preset]
id = "p"
label = "P"

[shortcuts]
"wm.close" = ["<Primary><Shift>Q"]
"#;
    let preset = PresetDefinition::from_toml_str(content).unwrap();
    assert_eq!(preset.assignments[0].bindings[0].to_string(), "<Control><Shift>q");
}

#[test]
fn test_version_defaults_when_omitted() {
    let content = r#"
[preset]
id = "p"
label = "P"

[shortcuts]
"wm.close" = ["<Alt>F4"]
"#;
    let preset = PresetDefinition::from_toml_str(content).unwrap();
    assert_eq!(preset.version, "1");
}

#[test]
fn test_protected_overlap_is_rejected() {
    let content = r#"
[preset]
id = "p"
label = "P"
protected = ["wm.close"]

[shortcuts]
"wm.close" = ["<Alt>F4"]
"#;
    let err = PresetDefinition::from_toml_str(content).unwrap_err();
    assert!(matches!(err, PresetError::ProtectedOverlap(_)));
}

#[test]
fn test_malformed_accelerator_is_rejected() {
    let content = r#"
[preset]
id = "p"
label = "P"

[shortcuts]
"wm.close" = ["<Super>"]
"#;
    let err = PresetDefinition::from_toml_str(content).unwrap_err();
    assert!(matches!(err, PresetError::InvalidAccelerator { .. }));
}

#[test]
fn test_storage_key_without_dot_is_rejected() {
    let content = r#"
[preset]
id = "p"
label = "P"

[shortcuts]
"close" = ["<Alt>F4"]
"#;
    let err = PresetDefinition::from_toml_str(content).unwrap_err();
    assert!(matches!(err, PresetError::InvalidStorageKey(_)));
}

#[test]
fn test_empty_id_is_rejected() {
    let content = r#"
[preset]
id = ""
label = "P"
"#;
    let err = PresetDefinition::from_toml_str(content).unwrap_err();
    assert!(matches!(err, PresetError::EmptyId));
}

#[test]
fn test_invalid_toml_is_rejected() {
    let err = PresetDefinition::from_toml_str("not toml at [[[").unwrap_err();
    assert!(matches!(err, PresetError::Document(_)));
}

#[test]
fn test_validate_reports_duplicates_without_throwing() {
    // A definition built programmatically can hold duplicates the loader
    // would never produce; validate() reports them all.
    let preset = PresetDefinition {
        id: "p".to_string(),
        label: "P".to_string(),
        version: "1".to_string(),
        assignments: vec![
            PresetAssignment {
                id: EntryId::new("wm", "close"),
                bindings: vec!["<Alt>F4".parse().unwrap()],
            },
            PresetAssignment {
                id: EntryId::new("wm", "close"),
                bindings: vec![],
            },
        ],
        protected: [EntryId::new("wm", "close")].into_iter().collect(),
    };

    let errors = preset.validate();
    assert!(errors
        .iter()
        .any(|e| matches!(e, PresetError::DuplicateAssignment(_))));
    assert!(errors
        .iter()
        .any(|e| matches!(e, PresetError::ProtectedOverlap(_))));
}

#[test]
fn test_from_entries_captures_disabled_and_sorts() {
    let entries = vec![
        BindingEntry::new(EntryId::new("wm", "minimize"), vec![]),
        BindingEntry::new(
            EntryId::new("wm", "close"),
            vec!["<Alt>F4".parse().unwrap()],
        ),
    ];

    let preset = PresetDefinition::from_entries("snap", "Snapshot", &entries);

    assert_eq!(preset.id, "snap");
    assert_eq!(preset.version, "1");
    assert!(preset.protected.is_empty());
    assert_eq!(preset.assignments.len(), 2);
    // Storage-key order, with the disabled entry captured explicitly.
    assert_eq!(preset.assignments[0].id, EntryId::new("wm", "close"));
    assert_eq!(preset.assignments[1].id, EntryId::new("wm", "minimize"));
    assert!(preset.assignments[1].bindings.is_empty());
    assert!(preset.validate().is_empty());
}

#[test]
fn test_document_round_trip() {
    let preset = PresetDefinition::from_toml_str(VALID_PRESET).unwrap();
    let serialized = toml::to_string_pretty(&preset.to_document()).unwrap();
    let reloaded = PresetDefinition::from_toml_str(&serialized).unwrap();
    assert_eq!(preset, reloaded);
}
