//! 결과 패널 표시용 문자열. GUI와 CLI가 같은 라벨/단위를 쓰도록 모아둔다.

use crate::geometry::{CalculationResult, Field};

/// 결과 카드 한 장: (라벨, 값, 단위).
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

pub fn result_rows(result: &CalculationResult) -> [ResultRow; 3] {
    [
        ResultRow {
            label: "Площадь поверхности корпуса",
            value: result.surface_area_m2,
            unit: "м²",
        },
        ResultRow {
            label: "Объём корпуса",
            value: result.volume_m3,
            unit: "м³",
        },
        ResultRow {
            label: "Площадь теплообмена",
            value: result.heat_transfer_area_m2,
            unit: "м²",
        },
    ]
}

/// 반올림된 값을 끝자리 0 없이 보여준다 (4.0 → "4", 0.785 → "0.785").
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// 입력 라벨.
pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Diameter => "Диаметр корпуса, м",
        Field::Height => "Высота корпуса, м",
        Field::TubeCount => "Количество трубок, шт",
        Field::TubeLength => "Длина трубок, м",
    }
}

/// 입력 칸 예시값.
pub fn field_placeholder(field: Field) -> &'static str {
    match field {
        Field::Diameter => "1.2",
        Field::Height => "3.5",
        Field::TubeCount => "120",
        Field::TubeLength => "2.5",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_zeros_are_dropped() {
        assert_eq!(format_value(4.0), "4");
        assert_eq!(format_value(0.785), "0.785");
        assert_eq!(format_value(3.9584), "3.9584");
    }
}
