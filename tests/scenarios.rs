//! End-to-end keypad scenarios driven through a session.

use keycalc::config::{CalculatorBuilder, ConsecutiveOperators, EngineConfig, EqualsPolicy};
use keycalc::engine::{CalcError, Phase};
use keycalc::input::Key;
use keycalc::shell::{DisplayLog, Session};
use keycalc::Digit;

fn session() -> Session<DisplayLog> {
    Session::new(DisplayLog::new())
}

fn press(session: &mut Session<DisplayLog>, labels: &[&str]) -> String {
    for label in labels {
        session.handle_label(label).unwrap();
    }
    session.calculator().display().to_string()
}

#[test]
fn button_panel_evaluates_left_to_right() {
    let mut session = session();
    let display = press(&mut session, &["2", "+", "3", "×", "4", "="]);

    assert_eq!(display, "20");
    assert_eq!(
        session.display().frames(),
        ["0", "2", "2", "3", "5", "4", "20"]
    );
}

#[test]
fn divide_by_zero_shows_error_and_recovers() {
    let mut session = session();
    assert_eq!(press(&mut session, &["5", "÷", "0", "="]), "Error");

    let calculator = session.calculator();
    assert_eq!(calculator.accumulator(), None);
    assert_eq!(calculator.pending_operator(), None);
    assert!(matches!(
        calculator.phase(),
        Phase::Error {
            error: CalcError::DivisionByZero
        }
    ));

    assert_eq!(press(&mut session, &["9", "−", "4", "="]), "5");
}

#[test]
fn backspace_clears_a_fresh_result() {
    let mut session = session();
    assert_eq!(press(&mut session, &["2", "+", "3", "×", "4", "="]), "20");
    assert_eq!(press(&mut session, &["⌫"]), "0");
}

#[test]
fn keyboard_session_uses_key_bindings() {
    let mut session = session();
    let keys = [
        Key::Char('1'),
        Key::Numpad(Digit::new(2).unwrap()),
        Key::NumpadDecimal,
        Key::Char('5'),
        Key::Char('*'),
        Key::Char('2'),
        Key::Enter,
    ];
    for key in keys {
        session.handle_key(key);
    }
    assert_eq!(session.calculator().display(), "25");

    session.handle_key(Key::Char('s'));
    assert_eq!(session.calculator().display(), "-25");

    session.handle_key(Key::Delete);
    assert_eq!(session.calculator().display(), "0");
    assert_eq!(session.calculator().phase(), &Phase::Idle);
}

#[test]
fn unary_buttons_act_on_the_entry() {
    let mut session = session();
    assert_eq!(press(&mut session, &["8", "1", "√"]), "9");
    assert_eq!(press(&mut session, &["x²"]), "81");
    assert_eq!(press(&mut session, &["C", "4", "1/x"]), "0.25");
    assert_eq!(press(&mut session, &["C", "2", "±", "√"]), "Error");
}

#[test]
fn typing_after_a_result_starts_over() {
    let mut session = session();
    session.feed("6*7=").unwrap();
    assert_eq!(session.feed("12+1=").unwrap(), "13");
}

#[test]
fn json_config_drives_a_session() {
    let config = EngineConfig::from_json(
        r#"{
            "error_marker": "Cannot divide",
            "equals_policy": "repeat_last",
            "consecutive_operators": "replace"
        }"#,
    )
    .unwrap();
    let calculator = CalculatorBuilder::from_config(config).build().unwrap();
    let mut session = Session::with_calculator(calculator, DisplayLog::new());

    assert_eq!(session.feed("2*+3==").unwrap(), "8");
    assert_eq!(session.feed("/0=").unwrap(), "Cannot divide");
}

#[test]
fn builder_options_compose() {
    let calculator = CalculatorBuilder::new()
        .equals_policy(EqualsPolicy::RepeatLast)
        .consecutive_operators(ConsecutiveOperators::Evaluate)
        .precision(6)
        .build()
        .unwrap();
    let mut session = Session::with_calculator(calculator, DisplayLog::new());

    assert_eq!(session.feed("1/3=").unwrap(), "0.333333");
    assert_eq!(session.feed("=").unwrap(), "0.111111");
}

#[test]
fn history_records_every_handled_input() {
    let mut session = session();
    session.feed("1+2=").unwrap();

    let inputs: Vec<String> = session
        .history()
        .transitions()
        .map(|t| t.input.to_string())
        .collect();
    assert_eq!(inputs, vec!["1", "+", "2", "="]);
    assert!(session.history().duration().is_some());
}

#[test]
fn typed_clear_and_delete_reach_the_engine() {
    let mut session = session();
    assert_eq!(session.feed("125\u{7f}").unwrap(), "12");
    assert_eq!(session.feed("+3=").unwrap(), "15");
    assert_eq!(session.feed("c").unwrap(), "0");
    assert_eq!(session.calculator().phase(), &Phase::Idle);
}

#[test]
fn chained_results_keep_full_precision() {
    let mut session = session();
    assert_eq!(session.feed("1/3=").unwrap(), "0.3333333333333333");
    assert_eq!(session.feed("*3=").unwrap(), "1");
}
