//! Checks on the fixed substitute table that keep rule combinations injective.

use encoder::{QUOTE, RuleFlag, RuleScope, is_substitute, original_for, substitute_for};

fn substitutes(flag: RuleFlag) -> Vec<char> {
    flag.triggers()
        .iter()
        .map(|&ch| substitute_for(ch).unwrap_or_else(|| panic!("{flag} has no substitute for {ch:?}")))
        .collect()
}

#[test]
fn substitutes_never_trigger_another_rule() {
    for flag in RuleFlag::ALL {
        for other in RuleFlag::ALL {
            for substitute in substitutes(flag) {
                assert!(
                    !other.is_trigger(substitute),
                    "{flag} substitute {substitute:?} triggers {other}"
                );
            }
        }
    }
}

#[test]
fn substitutes_are_not_ascii_and_not_the_quote() {
    for flag in RuleFlag::ALL {
        for substitute in substitutes(flag) {
            assert!(!substitute.is_ascii(), "{flag} maps into ASCII");
            assert_ne!(substitute, QUOTE);
        }
    }
    assert!(!is_substitute(QUOTE));
    assert_eq!(substitute_for(QUOTE), None);
}

#[test]
fn overlapping_rules_share_substitutes() {
    assert_eq!(substitutes(RuleFlag::LeftSpace), substitutes(RuleFlag::RightSpace));
    assert_eq!(substitutes(RuleFlag::LeftPeriod), substitutes(RuleFlag::RightPeriod));
    assert_eq!(
        substitutes(RuleFlag::LeftCrLfHtVt),
        substitutes(RuleFlag::RightCrLfHtVt)
    );
    for ch in RuleFlag::LeftCrLfHtVt.triggers() {
        assert!(RuleFlag::Ctl.is_trigger(*ch));
    }
}

#[test]
fn each_substitute_maps_back_to_its_trigger() {
    for flag in RuleFlag::ALL {
        for &trigger in flag.triggers() {
            let substitute = substitute_for(trigger).expect("trigger has substitute");
            assert_eq!(original_for(substitute), Some(trigger), "{flag}");
        }
    }
}

#[test]
fn byte_rule_has_no_character_triggers() {
    assert!(RuleFlag::InvalidUtf8.triggers().is_empty());
    assert_eq!(RuleFlag::InvalidUtf8.scope(), RuleScope::Bytes);
}

#[test]
fn windows_set_matches_reserved_characters() {
    let mut triggers = RuleFlag::Win.triggers().to_vec();
    triggers.sort_unstable();
    assert_eq!(triggers, vec!['"', '*', ':', '<', '>', '?', '|']);
}

#[test]
fn control_rule_covers_c0_except_nul() {
    assert_eq!(RuleFlag::Ctl.triggers().len(), 31);
    assert!(!RuleFlag::Ctl.is_trigger('\0'));
    assert!(RuleFlag::Ctl.is_trigger('\u{1F}'));
    assert!(RuleFlag::Zero.is_trigger('\0'));
    assert!(!RuleFlag::Del.is_trigger('\u{1F}'));
}
