use std::fmt::Write as _;
use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::display;
use crate::geometry::{CalculationResult, Field, RawInput};
use crate::reference::{self, InfoSection};
use crate::session::{CalculateOutcome, EvaporatorSession};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculator,
    Reference,
    Schemes,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== {} ===", reference::APP_TITLE);
    println!("{}", reference::APP_SUBTITLE);
    println!("1) Калькулятор");
    println!("2) Справочник");
    println!("3) Схемы");
    println!("4) Настройки");
    println!("0) Выход");
    loop {
        let sel = read_line("Выберите пункт: ")?;
        if let Some(choice) = parse_menu(&sel) {
            return Ok(choice);
        }
        println!("Неверный ввод. Повторите выбор.");
    }
}

fn parse_menu(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Calculator),
        "2" => Some(MenuChoice::Reference),
        "3" => Some(MenuChoice::Schemes),
        "4" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 계산기 메뉴. 네 칸을 입력받아 계산하고, 결과가 있으면 결과 패널을 출력한다.
pub fn handle_calculator(cfg: &Config, session: &mut EvaporatorSession) -> Result<(), AppError> {
    println!("\n-- Исходные данные --");
    println!("Введите геометрические параметры испарителя для расчёта");
    for field in Field::ALL {
        let prompt = format!(
            "{} (например, {}): ",
            display::field_label(field),
            display::field_placeholder(field)
        );
        let value = read_line(&prompt)?;
        session.set_field(field, value.trim());
    }
    let outcome = session.calculate();
    if let CalculateOutcome::Skipped(err) = &outcome {
        if cfg.input_feedback {
            println!("{err}");
        }
    }
    if let Some(result) = session.result() {
        print!("{}", render_result(result));
    }
    Ok(())
}

/// 일회성 계산(`calc`)에서 출력할 내용.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcReport {
    /// stdout으로 보낼 결과 패널
    Panel(String),
    /// stderr로 보낼 입력 안내 (`input_feedback`가 켜진 경우만)
    Diagnostic(String),
    /// 입력이 불완전하고 안내도 꺼져 있음: 아무것도 출력하지 않는다
    Silent,
}

/// 새 세션에 네 값을 채워 한 번 계산한다.
pub fn one_shot_calc(cfg: &Config, raw: &RawInput) -> CalcReport {
    let mut session = EvaporatorSession::new();
    for field in Field::ALL {
        session.set_field(field, raw.get(field));
    }
    match session.calculate() {
        CalculateOutcome::Updated(result) => CalcReport::Panel(render_result(&result)),
        CalculateOutcome::Skipped(err) if cfg.input_feedback => {
            CalcReport::Diagnostic(err.to_string())
        }
        CalculateOutcome::Skipped(_) => CalcReport::Silent,
    }
}

/// 참고 자료 메뉴.
pub fn handle_reference() {
    print!("{}", render_reference());
}

/// 추가 정보 항목 하나만 출력한다. id는 대소문자를 구분하지 않는다.
pub fn handle_reference_section(id: &str) -> Result<(), AppError> {
    let section =
        reference::find_section(id).ok_or_else(|| AppError::UnknownSection(id.to_string()))?;
    print!("{}", render_section(section));
    Ok(())
}

/// 도식 메뉴.
pub fn handle_schemes() {
    print!("{}", render_schemes());
}

/// 설정 메뉴. 입력 안내 표시 여부를 바꾼다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Настройки --");
    let state = if cfg.input_feedback { "вкл" } else { "выкл" };
    println!("Подсказки при неполном вводе: {state}");
    println!("1) Включить  2) Выключить");
    let sel = read_line("Номер (Enter — без изменений): ")?;
    match sel.trim() {
        "" => {}
        "1" => cfg.input_feedback = true,
        "2" => cfg.input_feedback = false,
        _ => println!("Неверный ввод, настройки не изменены."),
    }
    Ok(())
}

/// 결과 패널과 공식 표기를 문자열로 만든다.
pub fn render_result(result: &CalculationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n-- Результаты расчёта --");
    for row in display::result_rows(result) {
        let _ = writeln!(
            out,
            "{}: {} {}",
            row.label,
            display::format_value(row.value),
            row.unit
        );
    }
    let _ = writeln!(out, "Формулы расчёта:");
    for line in reference::formula_lines() {
        let _ = writeln!(out, "  {line}");
    }
    out
}

/// 참고표와 추가 정보 항목을 문자열로 만든다.
pub fn render_reference() -> String {
    let rows = reference::reference_rows();
    let w_param = rows
        .iter()
        .map(|r| r.parameter.chars().count())
        .max()
        .unwrap_or(0)
        .max("Параметр".chars().count());
    let w_value = rows
        .iter()
        .map(|r| r.value.chars().count())
        .max()
        .unwrap_or(0)
        .max("Значение".chars().count());

    let mut out = String::new();
    let _ = writeln!(out, "\n-- Справочные данные --");
    let _ = writeln!(out, "Технические характеристики и константы для расчётов");
    let _ = writeln!(
        out,
        "{}  {}  Примечание",
        pad("Параметр", w_param),
        pad("Значение", w_value)
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{}  {}  {}",
            pad(row.parameter, w_param),
            pad(row.value, w_value),
            row.note
        );
    }
    let _ = writeln!(out, "\nДополнительная информация");
    for section in reference::info_sections() {
        out.push_str(&render_section(section));
    }
    out
}

pub fn render_section(section: &InfoSection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{} [{}]", section.title, section.id);
    for item in section.items {
        let _ = writeln!(out, "  • {item}");
    }
    out
}

/// 구조도, 흐름도, 기술 파라미터를 문자열로 만든다.
pub fn render_schemes() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n-- Конструкция испарителя --");
    let _ = writeln!(out, "        ↑");
    let _ = writeln!(out, "   +----D----+");
    for i in 0..reference::VESSEL_TUBE_LINES {
        let side = if i == reference::VESSEL_TUBE_LINES / 2 { 'H' } else { ' ' };
        let _ = writeln!(out, " {side} | ─────── |");
    }
    let _ = writeln!(out, "   +---------+");
    let _ = writeln!(out, "        ↓");
    for line in reference::vessel_legend() {
        let _ = writeln!(out, "{line}");
    }

    let labels = reference::flow_labels();
    let (rows, cols) = reference::FLOW_TUBE_GRID;
    let _ = writeln!(out, "\n-- Схема потоков --");
    let _ = writeln!(out, "[{}] →", labels.feed);
    let _ = writeln!(out, "  +=================+");
    let _ = writeln!(out, "  |  {:^13}  |", labels.evaporator);
    for _ in 0..rows {
        let cells = vec!["▒▒▒"; cols].join(" ");
        let _ = writeln!(out, "  |  {cells:^13}  |");
    }
    let _ = writeln!(out, "  |  {:^13}  |", labels.heat_exchange);
    let _ = writeln!(out, "  +=================+");
    let _ = writeln!(out, "→ [{}]", labels.vapour);
    let _ = writeln!(out, "→ [{}]", labels.concentrate);

    let _ = writeln!(out, "\n-- Технические параметры --");
    for p in reference::tech_parameters() {
        let _ = writeln!(out, "{}: {} ({})", p.title, p.range, p.caption);
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(len)))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}
