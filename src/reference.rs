//! 화면에 표시하는 고정 참고 자료(참고표, 아코디언 항목, 운전 범위, 도식 범례).
//! 계산 로직은 이 데이터를 읽지 않는다. 값은 참고용이다.

#[derive(Debug)]
pub struct ReferenceRow {
    pub parameter: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

#[derive(Debug)]
pub struct InfoSection {
    pub id: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// 도식 탭 하단의 기술 파라미터 카드.
#[derive(Debug)]
pub struct TechParameter {
    pub title: &'static str,
    pub range: &'static str,
    pub caption: &'static str,
}

pub const APP_TITLE: &str = "Расчёт испарителя";
pub const APP_SUBTITLE: &str = "Система инженерных расчётов геометрических параметров";

pub fn reference_rows() -> &'static [ReferenceRow] {
    REFERENCE_ROWS
}

pub fn info_sections() -> &'static [InfoSection] {
    INFO_SECTIONS
}

pub fn find_section(id: &str) -> Option<&'static InfoSection> {
    INFO_SECTIONS.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}

pub fn tech_parameters() -> &'static [TechParameter] {
    TECH_PARAMETERS
}

/// 결과 패널 아래에 보여주는 공식 표기.
pub fn formula_lines() -> &'static [&'static str] {
    FORMULA_LINES
}

/// 동체 구조도 범례.
pub fn vessel_legend() -> &'static [&'static str] {
    VESSEL_LEGEND
}

/// 흐름도 블록 이름.
pub fn flow_labels() -> FlowLabels {
    FlowLabels {
        feed: "Сырьё",
        evaporator: "ИСПАРИТЕЛЬ",
        heat_exchange: "Теплообмен",
        vapour: "Пар",
        concentrate: "Концентрат",
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlowLabels {
    pub feed: &'static str,
    pub evaporator: &'static str,
    pub heat_exchange: &'static str,
    pub vapour: &'static str,
    pub concentrate: &'static str,
}

/// 구조도에 그리는 전열관 선 개수.
pub const VESSEL_TUBE_LINES: usize = 6;
/// 흐름도의 전열관 격자 (행, 열).
pub const FLOW_TUBE_GRID: (usize, usize) = (3, 3);

const REFERENCE_ROWS: &[ReferenceRow] = &[
    ReferenceRow {
        parameter: "Теплоёмкость воды",
        value: "4.186 кДж/(кг·K)",
        note: "При 20°C",
    },
    ReferenceRow {
        parameter: "Плотность воды",
        value: "998 кг/м³",
        note: "При 20°C",
    },
    ReferenceRow {
        parameter: "Теплота парообразования",
        value: "2257 кДж/кг",
        note: "При 100°C",
    },
    ReferenceRow {
        parameter: "Коэффициент теплопроводности стали",
        value: "50 Вт/(м·K)",
        note: "Нержавеющая сталь",
    },
    ReferenceRow {
        parameter: "Диаметр трубки стандартный",
        value: "25 мм",
        note: "Наружный диаметр",
    },
];

const INFO_SECTIONS: &[InfoSection] = &[
    InfoSection {
        id: "types",
        title: "Типы испарителей",
        items: &[
            "Кожухотрубные — наиболее распространённые в промышленности",
            "Пластинчатые — компактные, высокая эффективность теплообмена",
            "Плёночные — для термочувствительных продуктов",
            "Выпарные аппараты — для концентрирования растворов",
        ],
    },
    InfoSection {
        id: "materials",
        title: "Материалы конструкций",
        items: &[
            "Нержавеющая сталь AISI 304, 316 — устойчивость к коррозии",
            "Углеродистая сталь — экономичный вариант для нейтральных сред",
            "Титан — для агрессивных сред и морской воды",
            "Медные сплавы — высокая теплопроводность",
        ],
    },
    InfoSection {
        id: "norms",
        title: "Нормативные документы",
        items: &[
            "ГОСТ 9931-79 — Корпуса цилиндрические стальных сварных сосудов",
            "ГОСТ 14249-89 — Сосуды и аппараты. Нормы и методы расчёта",
            "ПБ 03-576-03 — Правила устройства и безопасной эксплуатации",
            "ASME Section VIII — Международный стандарт на сосуды под давлением",
        ],
    },
];

const TECH_PARAMETERS: &[TechParameter] = &[
    TechParameter {
        title: "Температура",
        range: "80-120°C",
        caption: "Рабочий диапазон",
    },
    TechParameter {
        title: "Давление",
        range: "0.3-0.8 МПа",
        caption: "Номинальное",
    },
    TechParameter {
        title: "Производительность",
        range: "1-5 т/ч",
        caption: "По испарению",
    },
    TechParameter {
        title: "КПД",
        range: "85-95%",
        caption: "Эффективность",
    },
];

const FORMULA_LINES: &[&str] = &[
    "S = π·D·H + 2·π·(D/2)²",
    "V = π·(D/2)²·H",
    "F = n·π·d·L (d = 0.025 м)",
];

const VESSEL_LEGEND: &[&str] = &[
    "D — Диаметр корпуса",
    "H — Высота корпуса",
    "Трубный пучок внутри",
];
