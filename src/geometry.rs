//! 증발기 동체/전열관 기하 계산.
//!
//! 입력 네 개(동체 직경, 동체 높이, 전열관 개수, 전열관 길이)로부터
//! 동체 표면적, 동체 체적, 전열 면적을 구한다. 상수는 고정값이며 설정으로 바꾸지 않는다.

use std::f64::consts::PI;
use std::fmt;

use thiserror::Error;

/// 전열관 외경 [m] (25 mm 표준관).
pub const TUBE_OUTER_DIAMETER_M: f64 = 0.025;

/// 결과 반올림 자릿수.
pub const RESULT_DECIMALS: i32 = 4;

/// 파싱이 끝난 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    /// 동체 직경 D [m]
    pub diameter_m: f64,
    /// 동체 높이 H [m]
    pub height_m: f64,
    /// 전열관 개수 n [개]. 정수 접두부만 읽은 값이며 i64 범위를 넘을 수 있어 f64로 둔다.
    pub tube_count: f64,
    /// 전열관 길이 L [m]
    pub tube_length_m: f64,
}

/// 기하 계산 결과. 모든 값은 소수점 4자리로 반올림되어 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// 동체 표면적 S [m²]
    pub surface_area_m2: f64,
    /// 동체 체적 V [m³]
    pub volume_m3: f64,
    /// 전열 면적 F [m²]
    pub heat_transfer_area_m2: f64,
}

/// 입력 필드 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Diameter,
    Height,
    TubeCount,
    TubeLength,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Diameter,
        Field::Height,
        Field::TubeCount,
        Field::TubeLength,
    ];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Diameter => "диаметр корпуса",
            Field::Height => "высота корпуса",
            Field::TubeCount => "количество трубок",
            Field::TubeLength => "длина трубок",
        };
        f.write_str(name)
    }
}

/// 입력 필드가 계산에 쓰일 수 없는 이유.
///
/// 계산 경로에서는 오류로 올리지 않고 결과를 갱신하지 않는 것으로 끝난다.
/// 화면에 안내를 띄울지는 프런트엔드가 설정(`input_feedback`)을 보고 결정한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("поле «{0}» не заполнено")]
    Empty(Field),
    #[error("поле «{0}» не является числом")]
    NotANumber(Field),
    #[error("поле «{0}» равно нулю")]
    Zero(Field),
}

impl InputError {
    pub fn field(&self) -> Field {
        match self {
            InputError::Empty(f) | InputError::NotANumber(f) | InputError::Zero(f) => *f,
        }
    }
}

/// 사용자가 입력한 그대로의 문자열 네 개.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub diameter: String,
    pub height: String,
    pub tube_count: String,
    pub tube_length: String,
}

impl RawInput {
    pub fn new(
        diameter: impl Into<String>,
        height: impl Into<String>,
        tube_count: impl Into<String>,
        tube_length: impl Into<String>,
    ) -> Self {
        Self {
            diameter: diameter.into(),
            height: height.into(),
            tube_count: tube_count.into(),
            tube_length: tube_length.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Diameter => &self.diameter,
            Field::Height => &self.height,
            Field::TubeCount => &self.tube_count,
            Field::TubeLength => &self.tube_length,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Diameter => &mut self.diameter,
            Field::Height => &mut self.height,
            Field::TubeCount => &mut self.tube_count,
            Field::TubeLength => &mut self.tube_length,
        }
    }

    /// 네 필드를 순서대로 파싱한다. 첫 번째로 실패한 필드의 이유를 돌려준다.
    pub fn parse(&self) -> Result<CalculationInput, InputError> {
        Ok(CalculationInput {
            diameter_m: parse_decimal(&self.diameter, Field::Diameter)?,
            height_m: parse_decimal(&self.height, Field::Height)?,
            tube_count: parse_count(&self.tube_count, Field::TubeCount)?,
            tube_length_m: parse_decimal(&self.tube_length, Field::TubeLength)?,
        })
    }
}

fn parse_decimal(raw: &str, field: Field) -> Result<f64, InputError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(InputError::Empty(field));
    }
    let value: f64 = s.parse().map_err(|_| InputError::NotANumber(field))?;
    // 무한대("inf", "1e400")는 숫자로 받는다
    if value.is_nan() {
        return Err(InputError::NotANumber(field));
    }
    if value == 0.0 {
        return Err(InputError::Zero(field));
    }
    Ok(value)
}

/// 정수 접두부만 읽는다: 부호 뒤의 연속된 숫자까지. "2.7" → 2, "12шт" → 12.
fn parse_count(raw: &str, field: Field) -> Result<f64, InputError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(InputError::Empty(field));
    }
    let (negative, digits) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(InputError::NotANumber(field));
    }
    let magnitude: f64 = digits[..end]
        .parse()
        .map_err(|_| InputError::NotANumber(field))?;
    if magnitude == 0.0 {
        return Err(InputError::Zero(field));
    }
    Ok(if negative { -magnitude } else { magnitude })
}

/// 소수점 4자리로 반올림한다.
///
/// f64가 나타내는 정확한 십진값 기준으로 가장 가까운 쪽을 고른다(2.00045는 실제로
/// 2.000449…이므로 2.0004). 정확히 중간인 값은 0에서 먼 쪽으로 올린다(1.03125 → 1.0313).
pub fn round_result(value: f64) -> f64 {
    // 4자리 기준 정확한 중간값은 홀수/32 꼴뿐이고, 32배는 오차 없이 계산된다
    let by_32 = value * 32.0;
    if by_32.fract() == 0.0 && by_32 % 2.0 != 0.0 {
        let scale = 10f64.powi(RESULT_DECIMALS);
        return (value * scale).round() / scale;
    }
    format!("{value:.prec$}", prec = RESULT_DECIMALS as usize)
        .parse()
        .unwrap_or(value)
}

/// 동체 표면적(반올림 전): S = π·D·H + 2·π·(D/2)²
pub fn surface_area(diameter_m: f64, height_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    PI * diameter_m * height_m + 2.0 * PI * radius.powi(2)
}

/// 동체 체적(반올림 전): V = π·(D/2)²·H
pub fn volume(diameter_m: f64, height_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    PI * radius.powi(2) * height_m
}

/// 전열 면적(반올림 전): F = n·π·d·L, d = 0.025 m
pub fn heat_transfer_area(tube_count: f64, tube_length_m: f64) -> f64 {
    tube_count * PI * TUBE_OUTER_DIAMETER_M * tube_length_m
}

/// 세 값을 계산하고 반올림한다. 상태가 없는 순수 함수.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    CalculationResult {
        surface_area_m2: round_result(surface_area(input.diameter_m, input.height_m)),
        volume_m3: round_result(volume(input.diameter_m, input.height_m)),
        heat_transfer_area_m2: round_result(heat_transfer_area(
            input.tube_count,
            input.tube_length_m,
        )),
    }
}

/// 원시 문자열에서 바로 계산한다. 입력이 불완전하면 `None`.
pub fn calculate_raw(raw: &RawInput) -> Option<CalculationResult> {
    raw.parse().ok().map(|input| calculate(&input))
}
