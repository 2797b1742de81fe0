use std::path::PathBuf;

use eframe::egui::{self, Context, Ui};
use tracing::{debug, error};

use crate::catalog::{CatalogState, resolve_solution_path};

use super::super::clipboard::{Clipboard, CopyFeedback, copy_with_feedback};
use super::super::navigation::{NavState, resolve_index};
use super::super::solution::SolutionLoader;
use super::super::{LIST_TITLE, Page, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(
        catalog: CatalogState,
        catalog_path: PathBuf,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            catalog,
            catalog_path,
            page: Page::List,
            solutions: SolutionLoader::new(),
            clipboard,
            copy_feedback: CopyFeedback::default(),
            copy_failure: None,
            window_title: String::new(),
        }
    }

    pub(in crate::app) fn show(&mut self, ui: &mut Ui) {
        self.solutions.poll();
        self.sync_window_title(ui.ctx());

        match self.page {
            Page::List => self.draw_list(ui),
            Page::Detail(nav) => self.draw_detail(ui, nav),
        }
    }

    fn sync_window_title(&mut self, ctx: &Context) {
        let title = match self.page {
            Page::Detail(nav) => self
                .catalog
                .get(nav.index)
                .map(|record| record.window_title())
                .unwrap_or_else(|| LIST_TITLE.to_owned()),
            Page::List => LIST_TITLE.to_owned(),
        };

        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    /// Opens the detail page from an untrusted `id` value.
    pub(in crate::app) fn open_detail_raw(&mut self, raw_id: &str) {
        let index = resolve_index(Some(raw_id), self.catalog.len());
        self.open_detail(index);
    }

    pub(in crate::app) fn open_detail(&mut self, index: usize) {
        let nav = NavState::new(index, self.catalog.len());
        debug!(index = nav.index, "opening problem detail");
        self.page = Page::Detail(nav);
        self.copy_feedback.clear();

        if let Some(record) = self.catalog.get(nav.index) {
            let path = resolve_solution_path(&self.catalog_path, &record.solution_file);
            self.solutions.request(nav.index, path);
        }
    }

    pub(in crate::app) fn back_to_list(&mut self) {
        self.page = Page::List;
    }

    pub(in crate::app) fn copy_solution(&mut self, now: f64) {
        let Some(solution) = self.solutions.current() else {
            return;
        };
        let text = solution.display_text().to_owned();

        if let Err(error) =
            copy_with_feedback(self.clipboard.as_mut(), &mut self.copy_feedback, &text, now)
        {
            error!("error copying code: {error:#}");
            self.copy_failure = Some(format!("{error:#}"));
        }
    }

    pub(in crate::app) fn show_copy_failure(&mut self, ctx: &Context) {
        let Some(message) = self.copy_failure.as_deref() else {
            return;
        };

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("copy_failure")).show(ctx, |ui| {
            ui.heading("Failed to copy code");
            ui.add_space(6.0);
            ui.label(message);
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

        if dismissed || modal.should_close() {
            self.copy_failure = None;
        }
    }
}
