use std::str::FromStr;

use keyslate::{canonicalize, AccelError, Accelerator, Binding, Modifier};

#[test]
fn test_parse_simple_accelerator() {
    let accel = Accelerator::from_str("<Super>Return").unwrap();
    assert_eq!(accel.key, "Return");
    assert!(accel.modifiers.contains(&Modifier::Super));
    assert_eq!(accel.modifiers.len(), 1);
}

#[test]
fn test_parse_multiple_modifiers() {
    let accel = Accelerator::from_str("<Control><Shift>p").unwrap();
    assert!(accel.modifiers.contains(&Modifier::Control));
    assert!(accel.modifiers.contains(&Modifier::Shift));
    assert_eq!(accel.key, "p");
}

#[test]
fn test_serialize_uses_fixed_modifier_order() {
    // Modifiers given out of order serialize as Control < Shift < Alt < Super.
    let accel = Accelerator::from_str("<Super><Shift><Control><Alt>q").unwrap();
    assert_eq!(accel.to_string(), "<Control><Shift><Alt><Super>q");
}

#[test]
fn test_primary_alias_collapses_to_control() {
    let primary = Accelerator::from_str("<Primary>c").unwrap();
    let control = Accelerator::from_str("<Control>c").unwrap();
    let ctrl = Accelerator::from_str("<Ctrl>c").unwrap();
    assert_eq!(primary, control);
    assert_eq!(ctrl, control);
    assert_eq!(primary.to_string(), "<Control>c");
}

#[test]
fn test_single_letter_keys_are_lowercased() {
    let upper = Accelerator::from_str("<Super>Q").unwrap();
    let lower = Accelerator::from_str("<Super>q").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.to_string(), "<Super>q");
}

#[test]
fn test_named_keys_kept_verbatim() {
    let accel = Accelerator::from_str("XF86AudioRaiseVolume").unwrap();
    assert_eq!(accel.key, "XF86AudioRaiseVolume");
    assert!(accel.modifiers.is_empty());

    let f4 = Accelerator::from_str("<Alt>F4").unwrap();
    assert_eq!(f4.key, "F4");
}

#[test]
fn test_modifier_only_accelerator_is_malformed() {
    // "<Super>" has no base key; it must not mean "any key".
    let err = Accelerator::from_str("<Super>").unwrap_err();
    assert!(matches!(err, AccelError::MissingBaseKey(_)));
}

#[test]
fn test_unknown_modifier_is_malformed() {
    let err = Accelerator::from_str("<Hyper2>x").unwrap_err();
    assert_eq!(err, AccelError::UnknownModifier("Hyper2".to_string()));
}

#[test]
fn test_unterminated_modifier_is_malformed() {
    let err = Accelerator::from_str("<Superq").unwrap_err();
    assert!(matches!(err, AccelError::UnterminatedModifier(_)));
}

#[test]
fn test_empty_string_is_not_a_valid_accelerator() {
    assert_eq!(Accelerator::from_str("").unwrap_err(), AccelError::Empty);
    assert_eq!(Accelerator::from_str("   ").unwrap_err(), AccelError::Empty);
}

#[test]
fn test_binding_sentinel_states() {
    assert_eq!(Binding::parse("disabled").unwrap(), Binding::Disabled);
    assert_eq!(Binding::parse("DISABLED").unwrap(), Binding::Disabled);
    assert_eq!(Binding::parse("").unwrap(), Binding::Disabled);
    assert!(Binding::parse("disabled").unwrap().is_disabled());

    let bound = Binding::parse("<Super>e").unwrap();
    assert!(!bound.is_disabled());
    assert_eq!(bound.as_accelerator().unwrap().key, "e");
}

#[test]
fn test_canonicalize_normalizes_spelling_and_order() {
    assert_eq!(canonicalize("<Primary><Shift>T").unwrap(), "<Control><Shift>t");
    assert_eq!(canonicalize("<Shift><Control>a").unwrap(), "<Control><Shift>a");
    assert_eq!(canonicalize("disabled").unwrap(), "disabled");
}

#[test]
fn test_round_trip_preserves_token() {
    for raw in [
        "<Super>Return",
        "<Control><Shift>p",
        "<Alt>F4",
        "<Control><Shift><Alt><Super>z",
        "XF86AudioPlay",
        "slash",
    ] {
        let accel = Accelerator::from_str(raw).unwrap();
        let reparsed = Accelerator::from_str(&accel.to_string()).unwrap();
        assert_eq!(accel, reparsed, "round trip failed for {raw}");
    }
}
