//! 한 화면(세션) 동안 유지되는 입력/결과 상태.
//!
//! 프런트엔드(GUI/CLI)가 이 구조체 하나를 소유하고, 계산은 `geometry`의 순수 함수에 맡긴다.

use tracing::debug;

use crate::geometry::{self, CalculationResult, Field, InputError, RawInput};

/// 계산 버튼을 눌렀을 때의 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculateOutcome {
    /// 새 결과로 교체됨
    Updated(CalculationResult),
    /// 입력이 불완전하여 아무것도 바꾸지 않음
    Skipped(InputError),
}

/// 입력 필드 네 개와 마지막 계산 결과.
#[derive(Debug, Clone, Default)]
pub struct EvaporatorSession {
    input: RawInput,
    result: Option<CalculationResult>,
}

impl EvaporatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &RawInput {
        &self.input
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// 필드를 새 값으로 바꾼다. 값이 실제로 달라지면 이전 결과는 버린다.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let slot = self.input.get_mut(field);
        if *slot != value {
            *slot = value;
            self.result = None;
        }
    }

    /// 외부에서 이미 필드 문자열을 고친 경우(위젯이 직접 편집) 호출해 결과를 무효화한다.
    pub fn mark_edited(&mut self) {
        self.result = None;
    }

    /// 위젯 바인딩용 가변 참조. 편집 후에는 `mark_edited`를 불러야 한다.
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        self.input.get_mut(field)
    }

    /// 현재 입력으로 계산한다. 입력이 불완전하면 결과를 그대로 둔다.
    pub fn calculate(&mut self) -> CalculateOutcome {
        match self.input.parse() {
            Ok(parsed) => {
                let result = geometry::calculate(&parsed);
                debug!(
                    diameter_m = parsed.diameter_m,
                    height_m = parsed.height_m,
                    tube_count = parsed.tube_count,
                    tube_length_m = parsed.tube_length_m,
                    surface_area_m2 = result.surface_area_m2,
                    volume_m3 = result.volume_m3,
                    heat_transfer_area_m2 = result.heat_transfer_area_m2,
                    "evaporator geometry calculated"
                );
                self.result = Some(result);
                CalculateOutcome::Updated(result)
            }
            Err(err) => CalculateOutcome::Skipped(err),
        }
    }
}
