//! 기하 계산 공식, 반올림 규칙, 입력 파싱 회귀 테스트.
use approx::assert_relative_eq;
use evaporator_toolbox::geometry::{
    calculate, calculate_raw, heat_transfer_area, round_result, surface_area, volume,
    CalculationInput, Field, InputError, RawInput, TUBE_OUTER_DIAMETER_M,
};
use std::f64::consts::PI;

fn input(d: f64, h: f64, n: f64, l: f64) -> CalculationInput {
    CalculationInput {
        diameter_m: d,
        height_m: h,
        tube_count: n,
        tube_length_m: l,
    }
}

#[test]
fn reference_vessel_values() {
    // D=1.2 m, H=3.5 m, n=120, L=2.5 m
    let res = calculate(&input(1.2, 3.5, 120.0, 2.5));
    assert_eq!(res.volume_m3, 3.9584);
    assert_eq!(res.surface_area_m2, 15.4566);
    assert_eq!(res.heat_transfer_area_m2, 23.5619);
}

#[test]
fn second_vessel_values() {
    let res = calculate(&input(2.0, 4.0, 250.0, 3.0));
    assert_eq!(res.surface_area_m2, 31.4159);
    assert_eq!(res.volume_m3, 12.5664);
    assert_eq!(res.heat_transfer_area_m2, 58.9049);
}

#[test]
fn formulas_hold_across_dimensions() {
    for d in [0.3, 0.8, 1.2, 2.5, 4.0] {
        for h in [0.5, 1.0, 3.5, 7.25] {
            let r = d / 2.0;
            assert_relative_eq!(volume(d, h), PI * r * r * h, max_relative = 1e-12);
            assert_relative_eq!(
                surface_area(d, h),
                PI * d * h + 2.0 * PI * r * r,
                max_relative = 1e-12
            );
        }
    }
    for n in [1.0, 12.0, 120.0, 900.0] {
        for l in [0.5, 2.5, 6.0] {
            assert_relative_eq!(
                heat_transfer_area(n, l),
                n * PI * 0.025 * l,
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn cap_term_is_two_pi_r_squared() {
    // H→0에서 남는 항은 2·π·(D/2)² 하나다
    let d = 1.0;
    assert_relative_eq!(surface_area(d, 0.0), 2.0 * PI * 0.25, max_relative = 1e-12);
}

#[test]
fn tube_diameter_is_25_mm() {
    assert_eq!(TUBE_OUTER_DIAMETER_M, 0.025);
}

#[test]
fn results_are_rounded_to_four_places() {
    let res = calculate(&input(1.0, 1.0, 1.0, 1.0));
    assert_eq!(res.surface_area_m2, 4.7124);
    assert_eq!(res.volume_m3, 0.7854);
    assert_eq!(res.heat_transfer_area_m2, 0.0785);
}

#[test]
fn exact_ties_round_away_from_zero() {
    // 1.03125는 이진수로 정확히 표현되므로 10⁴배 하면 정확히 .5가 된다
    assert_eq!(round_result(1.03125), 1.0313);
    assert_eq!(round_result(-1.03125), -1.0313);
    assert_eq!(round_result(2.00004), 2.0);
}

#[test]
fn values_just_below_midpoint_round_down() {
    // 리터럴 2.00045는 실제로 2.000449999…이다
    assert_eq!(round_result(2.00045), 2.0004);
    assert_eq!(round_result(-2.00045), -2.0004);
    assert_eq!(round_result(0.00015), 0.0001);
}

#[test]
fn rounding_happens_after_computation() {
    let d: f64 = 0.33333;
    let h: f64 = 0.77777;
    let res = calculate(&input(d, h, 1.0, 1.0));
    assert_eq!(res.volume_m3, round_result(PI * (d / 2.0).powi(2) * h));
}

#[test]
fn repeated_calculation_is_identical() {
    let raw = RawInput::new("1.2", "3.5", "120", "2.5");
    let first = calculate_raw(&raw).unwrap();
    let second = calculate_raw(&raw).unwrap();
    assert_eq!(first, second);
}

#[test]
fn whitespace_around_values_is_ignored() {
    let raw = RawInput::new(" 1.2", "3.5 ", "\t120", "2.5\n");
    assert_eq!(
        calculate_raw(&raw),
        calculate_raw(&RawInput::new("1.2", "3.5", "120", "2.5"))
    );
}

#[test]
fn fractional_tube_count_is_truncated() {
    let a = calculate_raw(&RawInput::new("1.2", "3.5", "120.9", "2.5")).unwrap();
    assert_eq!(a.heat_transfer_area_m2, 23.5619);
}

#[test]
fn tube_count_beyond_i64_is_computed() {
    let res = calculate_raw(&RawInput::new("1.2", "3.5", "99999999999999999999", "2.5")).unwrap();
    assert_eq!(res.volume_m3, 3.9584);
    assert_relative_eq!(
        res.heat_transfer_area_m2,
        1e20 * PI * 0.025 * 2.5,
        max_relative = 1e-12
    );
}

#[test]
fn overflowing_dimension_gives_infinite_result() {
    let res = calculate_raw(&RawInput::new("1.2", "1e400", "120", "2.5")).unwrap();
    assert_eq!(res.volume_m3, f64::INFINITY);
    assert_eq!(res.surface_area_m2, f64::INFINITY);
    assert_eq!(res.heat_transfer_area_m2, 23.5619);
    assert_eq!(
        RawInput::new("1.2", "NaN", "120", "2.5").parse(),
        Err(InputError::NotANumber(Field::Height))
    );
}

#[test]
fn negative_values_pass_presence_check() {
    let res = calculate_raw(&RawInput::new("-1.2", "3.5", "-120", "2.5")).unwrap();
    assert_eq!(res.volume_m3, 3.9584);
    assert_eq!(res.surface_area_m2, -10.9327);
    assert_eq!(res.heat_transfer_area_m2, -23.5619);
}

#[test]
fn each_empty_field_yields_no_result() {
    let full = RawInput::new("1.2", "3.5", "120", "2.5");
    for field in Field::ALL {
        let mut raw = full.clone();
        raw.get_mut(field).clear();
        assert_eq!(calculate_raw(&raw), None, "{field:?}");
        assert_eq!(raw.parse(), Err(InputError::Empty(field)));
    }
}

#[test]
fn each_zero_field_yields_no_result() {
    let full = RawInput::new("1.2", "3.5", "120", "2.5");
    for field in Field::ALL {
        let mut raw = full.clone();
        *raw.get_mut(field) = "0".into();
        assert_eq!(calculate_raw(&raw), None, "{field:?}");
        assert_eq!(raw.parse(), Err(InputError::Zero(field)));
    }
}

#[test]
fn each_non_numeric_field_yields_no_result() {
    let full = RawInput::new("1.2", "3.5", "120", "2.5");
    for field in Field::ALL {
        let mut raw = full.clone();
        *raw.get_mut(field) = "abc".into();
        assert_eq!(calculate_raw(&raw), None, "{field:?}");
        assert_eq!(raw.parse(), Err(InputError::NotANumber(field)));
    }
}

#[test]
fn zero_tube_count_is_rejected_not_computed() {
    let raw = RawInput::new("1.2", "3.5", "0", "2.5");
    assert_eq!(raw.parse(), Err(InputError::Zero(Field::TubeCount)));
    assert!(calculate_raw(&raw).is_none());
}

#[test]
fn first_invalid_field_is_reported() {
    let raw = RawInput::new("1.2", "x", "", "0");
    assert_eq!(raw.parse(), Err(InputError::NotANumber(Field::Height)));
}
