//! 세션 상태(입력 네 칸 + 결과) 수명 주기 테스트.
use evaporator_toolbox::geometry::{Field, InputError};
use evaporator_toolbox::session::{CalculateOutcome, EvaporatorSession};

fn fill(session: &mut EvaporatorSession, values: [&str; 4]) {
    for (field, v) in Field::ALL.into_iter().zip(values) {
        session.set_field(field, v);
    }
}

#[test]
fn no_result_before_first_calculation() {
    let mut s = EvaporatorSession::new();
    fill(&mut s, ["1.2", "3.5", "120", "2.5"]);
    assert!(s.result().is_none());
}

#[test]
fn calculate_creates_result() {
    let mut s = EvaporatorSession::new();
    fill(&mut s, ["1.2", "3.5", "120", "2.5"]);
    let outcome = s.calculate();
    let result = *s.result().expect("result");
    assert_eq!(outcome, CalculateOutcome::Updated(result));
    assert_eq!(result.volume_m3, 3.9584);
}

#[test]
fn next_calculation_replaces_result_wholesale() {
    let mut s = EvaporatorSession::new();
    fill(&mut s, ["1.2", "3.5", "120", "2.5"]);
    s.calculate();
    fill(&mut s, ["2", "4", "250", "3"]);
    s.calculate();
    let result = s.result().unwrap();
    assert_eq!(result.surface_area_m2, 31.4159);
    assert_eq!(result.volume_m3, 12.5664);
    assert_eq!(result.heat_transfer_area_m2, 58.9049);
}

#[test]
fn invalid_calculation_without_prior_result_stays_absent() {
    let mut s = EvaporatorSession::new();
    fill(&mut s, ["1.2", "3.5", "", "2.5"]);
    assert_eq!(
        s.calculate(),
        CalculateOutcome::Skipped(InputError::Empty(Field::TubeCount))
    );
    assert!(s.result().is_none());
}

#[test]
fn zero_tube_count_is_skipped() {
    let mut s = EvaporatorSession::new();
    fill(&mut s, ["1.2", "3.5", "0", "2.5"]);
    assert_eq!(
        s.calculate(),
        CalculateOutcome::Skipped(InputError::Zero(Field::TubeCount))
    );
    assert!(s.result().is_none());
}

#[test]
fn editing_a_field_discards_stale_result() {
    let mut s = EvaporatorSession::new();
    fill(&mut s, ["1.2", "3.5", "120", "2.5"]);
    s.calculate();
    s.set_field(Field::Diameter, "1.3");
    assert!(s.result().is_none());
    assert_eq!(s.input().diameter, "1.3");
}

#[test]
fn latest_value_wins() {
    let mut s = EvaporatorSession::new();
    fill(&mut s, ["1.2", "3.5", "120", "2.5"]);
    s.set_field(Field::TubeLength, "5");
    s.set_field(Field::TubeLength, "2.5");
    s.calculate();
    assert_eq!(s.result().unwrap().heat_transfer_area_m2, 23.5619);
}

#[test]
fn widget_edit_then_mark_edited_clears_result() {
    let mut s = EvaporatorSession::new();
    fill(&mut s, ["1.2", "3.5", "120", "2.5"]);
    s.calculate();
    s.field_mut(Field::Height).push('0');
    s.mark_edited();
    assert!(s.result().is_none());
    s.calculate();
    assert_eq!(s.result().unwrap().volume_m3, 39.5841);
}

#[test]
fn repeated_calculation_keeps_same_result() {
    let mut s = EvaporatorSession::new();
    fill(&mut s, ["1.2", "3.5", "120", "2.5"]);
    let first = s.calculate();
    let second = s.calculate();
    assert_eq!(first, second);
}
