use eframe::egui::{self, RichText, Ui};
use egui_extras::syntax_highlighting::{CodeTheme, code_view_ui};

use super::super::navigation::NavState;
use super::super::solution::SolutionText;
use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_detail(&mut self, ui: &mut Ui, nav: NavState) {
        let mut target = None;
        let mut back = false;

        ui.horizontal(|ui| {
            back = ui.button("Back to problems").clicked();
            ui.separator();
            if ui
                .add_enabled(nav.can_go_previous(), egui::Button::new("Previous"))
                .clicked()
            {
                target = nav.previous();
            }
            if ui
                .add_enabled(nav.can_go_next(), egui::Button::new("Next"))
                .clicked()
            {
                target = nav.next();
            }
        });
        ui.add_space(10.0);

        if back {
            self.back_to_list();
            return;
        }
        if let Some(index) = target {
            self.open_detail(index);
            return;
        }

        let Some(record) = self.catalog.get(nav.index) else {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("Problem not found").size(18.0));
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(record.code.as_str()).monospace().strong());
            ui.heading(record.name.as_str());
            ui.label(format!("Rating: {}", record.rating));
        });
        ui.separator();

        ui.label(RichText::new("Hint").strong());
        ui.label(record.hint.as_str());
        ui.add_space(6.0);
        ui.label(RichText::new("Explanation").strong());
        ui.label(record.explanation.as_str());
        ui.separator();

        let now = ui.input(|input| input.time);
        let mut copy_requested = false;
        ui.horizontal(|ui| {
            ui.label(RichText::new("Solution").strong());
            let label = self.copy_feedback.label(now);
            copy_requested = ui.button(label).clicked();
        });

        match self.solutions.current() {
            Some(solution) if solution.index == nav.index => {
                if solution.text == SolutionText::Loading {
                    ui.spinner();
                } else {
                    let theme = CodeTheme::from_style(ui.style());
                    egui::ScrollArea::vertical()
                        .id_salt("solution_scroll")
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            code_view_ui(ui, &theme, solution.display_text(), solution.language);
                        });
                }
            }
            _ => {
                ui.spinner();
            }
        }

        if copy_requested {
            self.copy_solution(now);
        }
    }
}
