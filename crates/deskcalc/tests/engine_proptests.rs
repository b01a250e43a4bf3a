//! Property-based tests for the calculator engine
//!
//! Error prevention: property tests catch key sequences nobody thought to try

#![allow(clippy::unwrap_used)]

use deskcalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Any digit key
fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0u8..=9u8).prop_map(|d| Digit::new(d).unwrap())
}

/// Any operator key
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Any key on the keypad, digits weighted up so entries get long
fn event_strategy() -> impl Strategy<Value = CalculatorEvent> {
    prop_oneof![
        6 => digit_strategy().prop_map(CalculatorEvent::Digit),
        2 => operator_strategy().prop_map(CalculatorEvent::Operator),
        1 => Just(CalculatorEvent::Equals),
        1 => Just(CalculatorEvent::Clear),
        1 => Just(CalculatorEvent::ClearEntry),
        2 => Just(CalculatorEvent::DecimalPoint),
        1 => Just(CalculatorEvent::Backspace),
        1 => Just(CalculatorEvent::SquareRoot),
        1 => Just(CalculatorEvent::Percent),
        1 => Just(CalculatorEvent::Sign),
    ]
}

/// Typed number without a leading zero
fn typed_number_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,20}"
}

fn run(events: &[CalculatorEvent]) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    for &event in events {
        engine.apply(event);
    }
    engine
}

fn type_number(engine: &mut CalculatorEngine, number: &str) {
    for c in number.chars() {
        engine.apply(CalculatorEvent::from_symbol(c).unwrap());
    }
}

/// Numeral, general-format result, a lone minus left by backspace, or the error token
fn is_display_text(text: &str) -> bool {
    if text == ERROR_TOKEN {
        return true;
    }
    let body = text.strip_prefix('-').unwrap_or(text);
    let (mantissa, exponent) = match body.split_once('e') {
        Some((m, e)) => (m, Some(e)),
        None => (body, None),
    };
    let mantissa_ok = mantissa.chars().all(|c| c.is_ascii_digit() || c == '.')
        && mantissa.matches('.').count() <= 1;
    let exponent_ok = exponent.map_or(true, |e| {
        e.len() >= 3
            && (e.starts_with('+') || e.starts_with('-'))
            && e[1..].chars().all(|c| c.is_ascii_digit())
    });
    mantissa_ok && exponent_ok
}

// ===== Invariants over arbitrary key sequences =====

proptest! {
    #[test]
    fn prop_display_is_always_displayable(events in prop::collection::vec(event_strategy(), 0..60)) {
        let engine = run(&events);
        prop_assert!(!engine.display().is_empty());
        prop_assert!(is_display_text(engine.display()), "bad display {:?}", engine.display());
    }

    #[test]
    fn prop_decimal_flag_tracks_typed_entry(events in prop::collection::vec(event_strategy(), 0..60)) {
        let engine = run(&events);
        if !engine.is_fresh_entry() {
            prop_assert_eq!(engine.has_decimal_point(), engine.display().contains('.'));
        }
    }

    #[test]
    fn prop_pending_operator_and_operand_move_together(events in prop::collection::vec(event_strategy(), 0..60)) {
        let engine = run(&events);
        prop_assert_eq!(engine.pending_operator().is_some(), !engine.stored_operand().is_empty());
    }

    #[test]
    fn prop_typed_entry_stays_bounded(events in prop::collection::vec(event_strategy(), 0..80)) {
        let engine = run(&events);
        if !engine.is_fresh_entry() {
            // The sign may sit in front of a full-length entry
            prop_assert!(engine.display().len() <= EngineConfig::DEFAULT_MAX_ENTRY_LEN + 1);
        }
    }

    #[test]
    fn prop_clear_restores_initial_state(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut engine = run(&events);
        engine.apply(CalculatorEvent::Clear);
        prop_assert_eq!(engine, CalculatorEngine::new());
    }

    #[test]
    fn prop_repeated_equals_is_noop(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut engine = run(&events);
        engine.apply(CalculatorEvent::Equals);
        let once = engine.clone();
        engine.apply(CalculatorEvent::Equals);
        prop_assert_eq!(engine, once);
    }
}

// ===== Entry editing =====

proptest! {
    #[test]
    fn prop_fresh_digits_concatenate_up_to_cap(number in typed_number_strategy()) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &number);
        let expected: String = number.chars().take(EngineConfig::DEFAULT_MAX_ENTRY_LEN).collect();
        prop_assert_eq!(engine.display(), expected.as_str());
    }

    #[test]
    fn prop_leading_zeros_collapse(zeros in 1usize..5, digit in 1u8..=9) {
        let mut engine = CalculatorEngine::new();
        for _ in 0..zeros {
            engine.apply(CalculatorEvent::Digit(Digit::ZERO));
        }
        engine.apply(CalculatorEvent::Digit(Digit::new(digit).unwrap()));
        prop_assert_eq!(engine.display(), digit.to_string());
    }

    #[test]
    fn prop_second_decimal_point_has_no_effect(before in "[1-9][0-9]{0,5}", after in "[0-9]{0,5}") {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &before);
        engine.apply(CalculatorEvent::DecimalPoint);
        type_number(&mut engine, &after);
        let once = engine.clone();
        engine.apply(CalculatorEvent::DecimalPoint);
        prop_assert_eq!(engine, once);
    }

    #[test]
    fn prop_sign_twice_restores_entry(number in typed_number_strategy()) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &number);
        let original = engine.clone();
        engine.apply(CalculatorEvent::Sign);
        prop_assert_ne!(engine.display(), original.display());
        engine.apply(CalculatorEvent::Sign);
        prop_assert_eq!(engine, original);
    }

    #[test]
    fn prop_backspace_undoes_digit(number in "[1-9][0-9]{0,12}", digit in digit_strategy()) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &number);
        let before = engine.display().to_string();
        engine.apply(CalculatorEvent::Digit(digit));
        engine.apply(CalculatorEvent::Backspace);
        prop_assert_eq!(engine.display(), before.as_str());
    }
}

// ===== Evaluation =====

proptest! {
    #[test]
    fn prop_binary_operation_matches_calculate(
        a in 0u32..1_000_000,
        b in 0u32..1_000_000,
        op in operator_strategy(),
    ) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &a.to_string());
        engine.apply(CalculatorEvent::Operator(op));
        type_number(&mut engine, &b.to_string());
        engine.apply(CalculatorEvent::Equals);

        let expected = format_general(calculate(f64::from(a), f64::from(b), op), 10);
        prop_assert_eq!(engine.display(), expected.as_str());
    }

    #[test]
    fn prop_chain_evaluates_left_to_right(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &a.to_string());
        engine.apply(CalculatorEvent::Operator(Operator::Add));
        type_number(&mut engine, &b.to_string());
        engine.apply(CalculatorEvent::Operator(Operator::Multiply));
        type_number(&mut engine, &c.to_string());
        engine.apply(CalculatorEvent::Equals);

        let expected = (u64::from(a) + u64::from(b)) * u64::from(c);
        prop_assert_eq!(engine.display(), expected.to_string());
    }

    #[test]
    fn prop_division_by_zero_shows_zero(number in typed_number_strategy()) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &number);
        KeyScript::parse("÷0=").unwrap().apply_to(&mut engine);
        prop_assert_eq!(engine.display(), "0");
    }

    #[test]
    fn prop_negative_square_root_errors_then_heals(number in typed_number_strategy(), digit in digit_strategy()) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &number);
        engine.apply(CalculatorEvent::Sign);
        engine.apply(CalculatorEvent::SquareRoot);
        prop_assert!(engine.is_error());
        engine.apply(CalculatorEvent::Digit(digit));
        prop_assert_eq!(engine.display(), digit.to_string());
    }
}

// ===== Key scripts =====

proptest! {
    #[test]
    fn prop_script_text_reparses(events in prop::collection::vec(event_strategy(), 0..30)) {
        let script = KeyScript::from(events);
        let reparsed = KeyScript::parse(&script.to_string()).unwrap();
        prop_assert_eq!(reparsed, script);
    }
}
