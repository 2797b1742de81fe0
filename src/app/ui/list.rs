use eframe::egui::{self, Align, Key, Layout, RichText, Ui};

use crate::catalog::CatalogState;

use super::super::ViewModel;

const RATING_INPUT_WIDTH: f32 = 96.0;

/// The table and the no-results notice are never shown together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListContent {
    Table,
    NoResults,
}

impl ListContent {
    fn for_catalog(catalog: &CatalogState) -> Self {
        if catalog.filtered_indices().is_empty() {
            Self::NoResults
        } else {
            Self::Table
        }
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_list(&mut self, ui: &mut Ui) {
        ui.heading("Problems");
        ui.add_space(8.0);

        self.draw_filters(ui);
        ui.add_space(10.0);

        if let Some(error) = self.catalog.load_error() {
            ui.colored_label(ui.visuals().warn_fg_color, "Problem catalog unavailable")
                .on_hover_text(error);
        }

        match ListContent::for_catalog(&self.catalog) {
            ListContent::NoResults => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new("No problems found").size(18.0));
                });
            }
            ListContent::Table => self.draw_table(ui),
        }
    }

    fn draw_filters(&mut self, ui: &mut Ui) {
        let mut refilter = false;
        let mut reset = false;

        ui.horizontal_wrapped(|ui| {
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.catalog.search)
                    .hint_text("Search by code or name")
                    .desired_width(260.0),
            );
            refilter |= search.changed();

            ui.separator();

            let min = ui.add(
                egui::TextEdit::singleline(&mut self.catalog.min_rating_input)
                    .hint_text("Min rating")
                    .desired_width(RATING_INPUT_WIDTH),
            );
            let max = ui.add(
                egui::TextEdit::singleline(&mut self.catalog.max_rating_input)
                    .hint_text("Max rating")
                    .desired_width(RATING_INPUT_WIDTH),
            );
            let enter_pressed = ui.input(|input| input.key_pressed(Key::Enter));
            refilter |= (min.lost_focus() || max.lost_focus()) && enter_pressed;

            refilter |= ui.button("Filter").clicked();
            reset |= ui.button("Reset").clicked();
        });

        if reset {
            self.catalog.reset();
        } else if refilter {
            self.catalog.apply_filters();
        }
    }

    fn draw_table(&mut self, ui: &mut Ui) {
        let mut open = None;

        egui::ScrollArea::vertical()
            .id_salt("problems_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("problems_table")
                    .num_columns(4)
                    .striped(true)
                    .spacing([24.0, 8.0])
                    .show(ui, |ui| {
                        ui.strong("Code");
                        ui.strong("Name");
                        ui.strong("Rating");
                        ui.label("");
                        ui.end_row();

                        for (index, record) in self.catalog.filtered_records() {
                            ui.monospace(record.code.as_str());
                            ui.horizontal(|ui| {
                                ui.label(record.name.as_str());
                                ui.weak("(Hint)").on_hover_text(record.hint.as_str());
                            });
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(record.rating.to_string());
                            });
                            if ui.button("Show Code").clicked() {
                                open = Some(index);
                            }
                            ui.end_row();
                        }
                    });
            });

        if let Some(index) = open {
            self.open_detail(index);
        }
    }
}
