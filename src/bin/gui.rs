#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use evaporator_toolbox::{
    config::{self, Config},
    display,
    geometry::{Field, InputError},
    logging, reference,
    session::{CalculateOutcome, EvaporatorSession},
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

#[derive(Debug, Parser)]
#[command(name = "evaporator_toolbox", version, about = "Расчёт испарителя")]
struct GuiArgs {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let loaded = config::load_or_default(&args.config);
    let app_cfg = match &loaded {
        Ok((cfg, _)) => cfg.clone().clamped(),
        Err(_) => Config::default(),
    };
    logging::init(&app_cfg.log_filter);
    match loaded {
        Ok((_, origin)) => origin.log(&args.config),
        Err(e) => warn!(error = %e, "config not loaded, using defaults"),
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(reference::APP_TITLE)
        .with_inner_size(egui::vec2(1000.0, 760.0))
        .with_transparent(true);
    if app_cfg.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let config_path = args.config;
    eframe::run_native(
        reference::APP_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_pixels_per_point(app_cfg.ui_scale);
            if let Some(path) = app_cfg.custom_font_path.as_deref() {
                if let Err(e) = load_custom_font(&cc.egui_ctx, path) {
                    warn!(error = %e, "custom font not applied");
                }
            }
            Box::new(GuiApp::new(app_cfg.clone(), config_path.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui 기본 글꼴 앞에 등록한다. 기본 글꼴도 키릴 문자를 표시한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Файл шрифта не найден: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Не удалось прочитать шрифт: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Calculator,
    Reference,
    Schemes,
}

/// 아코디언은 한 번에 한 항목만 열린다. 열린 항목을 다시 누르면 닫힌다.
fn toggle_section(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

struct GuiApp {
    config: Config,
    config_path: PathBuf,
    session: EvaporatorSession,
    tab: Tab,
    open_section: Option<usize>,
    // input_feedback가 켜져 있을 때만 채워진다
    feedback: Option<InputError>,
    show_settings: bool,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
            session: EvaporatorSession::new(),
            tab: Tab::Calculator,
            open_section: None,
            feedback: None,
            show_settings: false,
            settings_status: None,
        }
    }

    fn calculate(&mut self) {
        match self.session.calculate() {
            CalculateOutcome::Updated(_) => self.feedback = None,
            CalculateOutcome::Skipped(err) => {
                if self.config.input_feedback {
                    self.feedback = Some(err);
                }
            }
        }
    }

    fn ui_tabs(&mut self, ui: &mut egui::Ui) {
        ui.columns(3, |cols| {
            for (col, (tab, label)) in cols.iter_mut().zip([
                (Tab::Calculator, "Калькулятор"),
                (Tab::Reference, "Справочник"),
                (Tab::Schemes, "Схемы"),
            ]) {
                let selected = self.tab == tab;
                let button = egui::Button::new(label)
                    .fill(if selected {
                        col.visuals().selection.bg_fill
                    } else {
                        col.visuals().extreme_bg_color
                    })
                    .min_size(egui::vec2(col.available_width(), 32.0));
                if col.add(button).clicked() {
                    self.tab = tab;
                }
            }
        });
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading("Исходные данные");
            ui.label(
                egui::RichText::new("Введите геометрические параметры испарителя для расчёта")
                    .weak(),
            );
            ui.add_space(8.0);

            let mut edited = false;
            let flagged = self.feedback.as_ref().map(InputError::field);
            let warn = ui.visuals().warn_fg_color;
            let session = &mut self.session;
            egui::Grid::new("calc_inputs")
                .num_columns(2)
                .spacing([24.0, 10.0])
                .show(ui, |ui| {
                    for (i, field) in Field::ALL.into_iter().enumerate() {
                        ui.vertical(|ui| {
                            let label = egui::RichText::new(display::field_label(field));
                            if flagged == Some(field) {
                                ui.label(label.color(warn));
                            } else {
                                ui.label(label);
                            }
                            let edit = egui::TextEdit::singleline(session.field_mut(field))
                                .hint_text(display::field_placeholder(field))
                                .desired_width(240.0);
                            if ui.add(edit).changed() {
                                edited = true;
                            }
                        });
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
            if edited {
                self.session.mark_edited();
                self.feedback = None;
            }

            ui.add_space(12.0);
            let button = egui::Button::new(egui::RichText::new("Рассчитать").strong())
                .min_size(egui::vec2(180.0, 36.0));
            if ui.add(button).clicked() {
                self.calculate();
            }
            if let Some(err) = &self.feedback {
                ui.colored_label(warn, err.to_string());
            }
        });

        let Some(result) = self.session.result().copied() else {
            return;
        };
        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading("Результаты расчёта");
            ui.add_space(8.0);
            ui.columns(3, |cols| {
                for (col, row) in cols.iter_mut().zip(display::result_rows(&result)) {
                    col.group(|ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(egui::RichText::new(row.label).weak());
                        ui.label(
                            egui::RichText::new(display::format_value(row.value))
                                .size(28.0)
                                .strong(),
                        );
                        ui.label(egui::RichText::new(row.unit).small().weak());
                    });
                }
            });
            ui.add_space(8.0);
            egui::Frame::none()
                .fill(ui.visuals().faint_bg_color)
                .inner_margin(egui::Margin::same(10.0))
                .rounding(6.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Формулы расчёта:").strong());
                    for line in reference::formula_lines() {
                        ui.label(egui::RichText::new(*line).monospace().small().weak());
                    }
                });
        });
    }

    fn ui_reference(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading("Справочные данные");
            ui.label(
                egui::RichText::new("Технические характеристики и константы для расчётов").weak(),
            );
            ui.add_space(8.0);
            let accent = ui.visuals().hyperlink_color;
            egui::Grid::new("reference_table")
                .num_columns(3)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Параметр");
                    ui.strong("Значение");
                    ui.strong("Примечание");
                    ui.end_row();
                    for row in reference::reference_rows() {
                        ui.label(row.parameter);
                        ui.label(egui::RichText::new(row.value).monospace().color(accent));
                        ui.label(egui::RichText::new(row.note).weak());
                        ui.end_row();
                    }
                });

            ui.add_space(16.0);
            ui.heading("Дополнительная информация");
            for (i, section) in reference::info_sections().iter().enumerate() {
                let open = self.open_section == Some(i);
                let marker = if open { "▼" } else { "▶" };
                if ui
                    .selectable_label(open, format!("{marker} {}", section.title))
                    .clicked()
                {
                    self.open_section = toggle_section(self.open_section, i);
                }
                if open {
                    ui.indent(section.id, |ui| {
                        for item in section.items {
                            ui.label(egui::RichText::new(format!("• {item}")).weak());
                        }
                    });
                }
                ui.separator();
            }
        });
    }

    fn ui_schemes(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |cols| {
            cols[0].group(|ui| {
                ui.heading("Конструкция испарителя");
                let size = ui.available_width().min(360.0);
                paint_vessel(ui, size);
                for line in reference::vessel_legend() {
                    ui.small(*line);
                }
            });
            cols[1].group(|ui| {
                ui.heading("Схема потоков");
                let size = ui.available_width().min(360.0);
                paint_flow(ui, size);
            });
        });

        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading("Технические параметры");
            let accent = ui.visuals().hyperlink_color;
            ui.columns(4, |cols| {
                for (col, p) in cols.iter_mut().zip(reference::tech_parameters()) {
                    col.group(|ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(egui::RichText::new(p.title).color(accent).strong());
                        ui.label(egui::RichText::new(p.range).size(22.0).strong());
                        ui.label(egui::RichText::new(p.caption).small().weak());
                    });
                }
            });
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        egui::Window::new("Настройки")
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Масштаб интерфейса");
                let scale = egui::Slider::new(&mut self.config.ui_scale, 0.8..=1.6).suffix(" x");
                if ui.add(scale).changed() {
                    ctx.set_pixels_per_point(self.config.ui_scale);
                }
                ui.separator();
                ui.checkbox(&mut self.config.always_on_top, "Поверх всех окон");
                ui.label("Прозрачность окна");
                ui.add(egui::Slider::new(&mut self.config.window_alpha, 0.3..=1.0).text("alpha"));
                ui.separator();
                ui.checkbox(
                    &mut self.config.input_feedback,
                    "Показывать подсказку при неполном вводе",
                );
                ui.separator();
                ui.label("Пользовательский шрифт (.ttf/.ttc)");
                ui.horizontal(|ui| {
                    ui.label(self.config.custom_font_path.as_deref().unwrap_or("—"));
                    if ui.button("Выбрать…").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Font", &["ttf", "ttc", "otf"])
                            .pick_file()
                        {
                            let path = path.display().to_string();
                            match load_custom_font(ctx, &path) {
                                Ok(()) => self.config.custom_font_path = Some(path),
                                Err(e) => self.settings_status = Some(e),
                            }
                        }
                    }
                });
                ui.separator();
                if ui.button("Сохранить настройки").clicked() {
                    self.settings_status = Some(match self.config.save(&self.config_path) {
                        Ok(()) => "Сохранено.".to_string(),
                        Err(e) => format!("Ошибка сохранения: {e}"),
                    });
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings = open;
    }
}

fn paint_vessel(ui: &mut egui::Ui, size: f32) {
    let accent = ui.visuals().hyperlink_color;
    let text_color = ui.visuals().text_color();
    let border = ui.visuals().weak_text_color();
    let (response, painter) = ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
    let area = response.rect;
    painter.rect_stroke(area, 8.0, egui::Stroke::new(1.0, border));

    let body = egui::Rect::from_center_size(area.center(), egui::vec2(size * 0.45, size * 0.62));
    painter.rect_stroke(body, 6.0, egui::Stroke::new(4.0, accent));
    let font = egui::FontId::proportional(12.0);
    painter.text(
        body.center_top() - egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        "D",
        font.clone(),
        text_color,
    );
    painter.text(
        body.left_center() - egui::vec2(12.0, 0.0),
        egui::Align2::CENTER_CENTER,
        "H",
        font,
        text_color,
    );

    let tube = egui::Stroke::new(2.0, accent.gamma_multiply(0.6));
    let first_y = body.top() + body.height() / 3.0;
    for i in 0..reference::VESSEL_TUBE_LINES {
        let y = first_y + i as f32 * 6.0;
        painter.line_segment(
            [egui::pos2(body.left() + 20.0, y), egui::pos2(body.right() - 20.0, y)],
            tube,
        );
    }
    let arrow = egui::Stroke::new(2.0, accent);
    let cx = body.center().x;
    painter.arrow(egui::pos2(cx, body.top() + 28.0), egui::vec2(0.0, -16.0), arrow);
    painter.arrow(egui::pos2(cx, body.bottom() - 28.0), egui::vec2(0.0, 16.0), arrow);
}

fn paint_tag(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: &str,
    color: egui::Color32,
    text_color: egui::Color32,
) {
    painter.rect_filled(rect, 4.0, color.gamma_multiply(0.15));
    painter.rect_stroke(rect, 4.0, egui::Stroke::new(1.0, color));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(13.0),
        text_color,
    );
}

/// 흐름도 블록 위치. 모든 좌표는 그림 영역 기준.
struct FlowLayout {
    feed: egui::Rect,
    vessel: egui::Rect,
    grid: egui::Rect,
    vapour: egui::Rect,
    concentrate: egui::Rect,
}

impl FlowLayout {
    fn new(area: egui::Rect) -> Self {
        let size = area.width();
        let at = |x: f32, y: f32| area.min + egui::vec2(x * size, y * size);
        Self {
            feed: egui::Rect::from_min_max(at(0.06, 0.05), at(0.42, 0.15)),
            vessel: egui::Rect::from_min_max(at(0.08, 0.22), at(0.92, 0.68)),
            grid: egui::Rect::from_min_max(at(0.14, 0.31), at(0.86, 0.59)),
            vapour: egui::Rect::from_min_max(at(0.56, 0.71), at(0.94, 0.81)),
            concentrate: egui::Rect::from_min_max(at(0.56, 0.85), at(0.94, 0.95)),
        }
    }

    /// 원료 → 증발기: 원료 칸 오른쪽 끝에서 나와 동체 윗면으로 꺾여 내려간다.
    fn feed_path(&self) -> [egui::Pos2; 3] {
        let start = self.feed.right_center();
        let elbow = egui::pos2(self.vessel.center().x, start.y);
        [start, elbow, egui::pos2(elbow.x, self.vessel.top())]
    }

    /// 증발기 → 출구 칸: 동체 아랫면에서 내려와 칸 왼쪽 끝으로 들어간다.
    fn outlet_path(&self, target: egui::Rect, x: f32) -> [egui::Pos2; 3] {
        let start = egui::pos2(x, self.vessel.bottom());
        let end = target.left_center();
        [start, egui::pos2(x, end.y), end]
    }
}

fn paint_connector(painter: &egui::Painter, path: [egui::Pos2; 3], stroke: egui::Stroke) {
    let [start, elbow, end] = path;
    painter.line_segment([start, elbow], stroke);
    painter.arrow(elbow, end - elbow, stroke);
}

fn paint_flow(ui: &mut egui::Ui, size: f32) {
    let accent = ui.visuals().hyperlink_color;
    let secondary = ui.visuals().warn_fg_color;
    let text_color = ui.visuals().text_color();
    let border = ui.visuals().weak_text_color();
    let (response, painter) = ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
    let area = response.rect;
    painter.rect_stroke(area, 8.0, egui::Stroke::new(1.0, border));
    let layout = FlowLayout::new(area);
    let labels = reference::flow_labels();
    let arrow = egui::Stroke::new(2.0, accent);

    paint_tag(&painter, layout.feed, labels.feed, accent, text_color);
    paint_connector(&painter, layout.feed_path(), arrow);

    let vessel = layout.vessel;
    painter.rect_stroke(vessel, 6.0, egui::Stroke::new(4.0, accent));
    painter.text(
        egui::pos2(vessel.center().x, vessel.top() + 0.05 * size),
        egui::Align2::CENTER_CENTER,
        labels.evaporator,
        egui::FontId::proportional(13.0),
        text_color,
    );
    let (rows, cols) = reference::FLOW_TUBE_GRID;
    let grid = layout.grid;
    let gap = 0.02 * size;
    let cell_w = (grid.width() - gap * (cols as f32 - 1.0)) / cols as f32;
    let cell_h = (grid.height() - gap * (rows as f32 - 1.0)) / rows as f32;
    for r in 0..rows {
        for c in 0..cols {
            let min = grid.min + egui::vec2(c as f32 * (cell_w + gap), r as f32 * (cell_h + gap));
            let cell = egui::Rect::from_min_size(min, egui::vec2(cell_w, cell_h));
            painter.rect_filled(cell, 3.0, accent.gamma_multiply(0.25));
        }
    }
    painter.text(
        egui::pos2(vessel.center().x, vessel.bottom() - 0.045 * size),
        egui::Align2::CENTER_CENTER,
        labels.heat_exchange,
        egui::FontId::proportional(11.0),
        accent,
    );

    // 증발기 → 증기, 농축액
    paint_tag(&painter, layout.vapour, labels.vapour, accent, text_color);
    paint_connector(
        &painter,
        layout.outlet_path(layout.vapour, area.min.x + 0.30 * size),
        arrow,
    );
    paint_tag(&painter, layout.concentrate, labels.concentrate, secondary, text_color);
    paint_connector(
        &painter,
        layout.outlet_path(layout.concentrate, area.min.x + 0.20 * size),
        arrow,
    );
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.config.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        let alpha = self.config.window_alpha;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(alpha);
        ctx.set_style(style);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(egui::RichText::new(reference::APP_TITLE).strong());
                    ui.label(egui::RichText::new(reference::APP_SUBTITLE).small().weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Настройки").clicked() {
                        self.show_settings = true;
                    }
                });
            });
            ui.add_space(6.0);
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_tabs(ui);
            ui.add_space(12.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculator => self.ui_calculator(ui),
                    Tab::Reference => self.ui_reference(ui),
                    Tab::Schemes => self.ui_schemes(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(cfg: Config) -> GuiApp {
        GuiApp::new(cfg, PathBuf::from(config::DEFAULT_CONFIG_PATH))
    }

    #[test]
    fn starts_on_calculator_without_result() {
        let app = app_with(Config::default());
        assert_eq!(app.tab, Tab::Calculator);
        assert!(app.session.result().is_none());
        assert!(app.open_section.is_none());
    }

    #[test]
    fn calculate_fills_result_panel() {
        let mut app = app_with(Config::default());
        for (field, v) in Field::ALL.into_iter().zip(["2", "4", "250", "3"]) {
            app.session.set_field(field, v);
        }
        app.calculate();
        let result = app.session.result().copied().unwrap();
        assert_eq!(result.volume_m3, 12.5664);
        assert_eq!(result.heat_transfer_area_m2, 58.9049);
    }

    #[test]
    fn incomplete_input_is_silent_by_default() {
        let mut app = app_with(Config::default());
        app.calculate();
        assert!(app.feedback.is_none());
        assert!(app.session.result().is_none());
    }

    #[test]
    fn incomplete_input_reports_field_when_enabled() {
        let mut app = app_with(Config {
            input_feedback: true,
            ..Config::default()
        });
        app.session.set_field(Field::Diameter, "1.2");
        app.calculate();
        let err = app.feedback.clone().expect("feedback");
        assert_eq!(err.field(), Field::Height);
        assert_eq!(err.to_string(), "поле «высота корпуса» не заполнено");
    }

    #[test]
    fn flow_arrows_join_blocks() {
        let area = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0));
        let layout = FlowLayout::new(area);
        let [start, elbow, end] = layout.feed_path();
        assert_eq!(start, layout.feed.right_center());
        assert_eq!(elbow.y, start.y);
        assert_eq!(end.y, layout.vessel.top());
        assert!(layout.vessel.x_range().contains(end.x));

        for target in [layout.vapour, layout.concentrate] {
            let [start, _, end] = layout.outlet_path(target, area.min.x + 60.0);
            assert_eq!(start.y, layout.vessel.bottom());
            assert_eq!(end, target.left_center());
        }
    }

    #[test]
    fn accordion_keeps_single_section_open() {
        assert_eq!(toggle_section(None, 1), Some(1));
        assert_eq!(toggle_section(Some(1), 2), Some(2));
        assert_eq!(toggle_section(Some(2), 2), None);
    }
}
