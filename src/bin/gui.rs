#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use std::env;
use molarity_calculator::{
    calculator, config,
    form::FormState,
    i18n::{self, keys},
    logging,
    quantity::{Classification, Quantity},
    units,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        eprintln!("config error: {e}");
        config::Config::default()
    });
    logging::init(app_cfg.log_filter().unwrap_or(log::LevelFilter::Info));

    let lang = i18n::resolve_language(
        cli_lang.as_deref().unwrap_or("auto"),
        Some(app_cfg.language.as_str()),
    );
    let tr = i18n::Translator::new_with_pack(&lang, app_cfg.language_pack_dir.as_deref());
    let title = tr.t(keys::APP_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([520.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, tr))),
    )
}

struct GuiApp {
    tr: i18n::Translator,
    form: FormState,
    // 다음 프레임에 포커스를 줄 행 (엔터 이동)
    pending_focus: Option<Quantity>,
    error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, tr: i18n::Translator) -> Self {
        Self {
            tr,
            form: config.new_form(),
            pending_focus: Some(Quantity::Mass),
            error: None,
        }
    }

    fn calculate(&mut self, q: Quantity) {
        self.error = match calculator::calculate(&mut self.form, Some(q)) {
            Ok(_) => None,
            Err(e) => Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))),
        };
    }

    fn clear(&mut self) {
        calculator::clear(&mut self.form);
        self.error = None;
    }

    fn ui_row(&mut self, ui: &mut egui::Ui, q: Quantity) {
        let header = row_header(&self.tr.quantity(q), self.form.row(q).classification);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(header);
        });

        let input = egui::TextEdit::singleline(&mut self.form.row_mut(q).text).desired_width(140.0);
        let resp = ui.add(input);
        if self.pending_focus == Some(q) {
            resp.request_focus();
            self.pending_focus = None;
        }
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            if ui.input(|i| i.modifiers.ctrl) {
                self.calculate(q);
                self.pending_focus = Some(q);
            } else {
                self.pending_focus = Some(q.next());
            }
        }

        let row = self.form.row_mut(q);
        egui::ComboBox::from_id_source(("unit", q.index()))
            .selected_text(row.unit.clone())
            .show_ui(ui, |ui| {
                for entry in units::units_for(q) {
                    ui.selectable_value(&mut row.unit, entry.label.to_string(), entry.label);
                }
            });

        if ui.button(self.tr.t(keys::BUTTON_CALCULATE)).clicked() {
            self.calculate(q);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::CTRL, egui::Key::D)) {
            self.clear();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("calc_grid")
                .num_columns(4)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    for q in Quantity::ALL {
                        self.ui_row(ui, q);
                        ui.end_row();
                    }
                });

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.label(self.tr.t(keys::INSTRUCTIONS));
                ui.add_space(10.0);
                if ui.button(self.tr.t(keys::BUTTON_CLEAR)).clicked() {
                    self.clear();
                }
                if let Some(msg) = &self.error {
                    ui.colored_label(egui::Color32::RED, msg);
                }
            });
        });
    }
}

/// 행 머리글. used=굵은 짙은 녹색, missing=굵은 빨강, result=굵은 파랑.
fn row_header(text: &str, class: Classification) -> egui::RichText {
    let rt = egui::RichText::new(text);
    match class {
        Classification::Neutral => rt,
        Classification::Used => rt.strong().color(egui::Color32::DARK_GREEN),
        Classification::Missing => rt.strong().color(egui::Color32::RED),
        Classification::Result => rt.strong().color(egui::Color32::BLUE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(config::Config::default(), i18n::Translator::new("en"))
    }

    #[test]
    fn new_app_uses_configured_default_units() {
        let app = app();
        assert_eq!(app.form.row(Quantity::Mass).unit, "milligrams");
        assert_eq!(app.pending_focus, Some(Quantity::Mass));
    }

    #[test]
    fn calculate_button_fills_result_row() {
        let mut app = app();
        app.form.select_unit(Quantity::Mass, "grams").unwrap();
        app.form.set_text(Quantity::Mass, "10");
        app.form.set_text(Quantity::MolarMass, "2");
        app.calculate(Quantity::Moles);
        assert_eq!(app.form.row(Quantity::Moles).text, "5.000000");
        assert_eq!(
            app.form.row(Quantity::Moles).classification,
            Classification::Result
        );
        assert!(app.error.is_none());
    }

    #[test]
    fn unknown_unit_is_reported_not_applied() {
        let mut app = app();
        app.form.row_mut(Quantity::Volume).unit = "gallons".into();
        app.form.set_text(Quantity::Volume, "1");
        app.calculate(Quantity::Molarity);
        assert!(app.error.as_deref().unwrap_or_default().contains("gallons"));
    }

    #[test]
    fn clear_resets_rows_and_error() {
        let mut app = app();
        app.form.set_text(Quantity::Moles, "3");
        app.error = Some("x".into());
        app.clear();
        assert!(app.form.rows().iter().all(|r| r.text.is_empty()));
        assert!(app.error.is_none());
    }
}
