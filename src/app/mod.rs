use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Color32, Context};
use tracing::{error, info};

use crate::catalog::{CatalogState, ProblemRecord, load_catalog};

mod clipboard;
mod navigation;
mod particles;
mod render_loop;
mod solution;
mod ui;

use clipboard::{Clipboard, CopyFeedback, SystemClipboard};
use navigation::NavState;
use particles::PainterSurface;
use render_loop::RenderLoop;
use solution::SolutionLoader;
use ui::FrameCounter;

pub use particles::PARTICLE_COUNT;

const BACKGROUND: Color32 = Color32::from_rgb(19, 23, 29);
const LIST_TITLE: &str = "Problems | Sdmist";

#[derive(Clone, Debug)]
pub struct AppOptions {
    pub catalog_path: PathBuf,
    pub initial_id: Option<String>,
    pub particle_count: usize,
    pub show_fps: bool,
}

pub struct CatalogApp {
    options: AppOptions,
    state: AppState,
    render_loop: RenderLoop,
    frame_counter: Option<FrameCounter>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Vec<ProblemRecord>, String>>,
    },
    Ready(Box<ViewModel>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    List,
    Detail(NavState),
}

struct ViewModel {
    catalog: CatalogState,
    catalog_path: PathBuf,
    page: Page,
    solutions: SolutionLoader,
    clipboard: Box<dyn Clipboard>,
    copy_feedback: CopyFeedback,
    copy_failure: Option<String>,
    window_title: String,
}

impl CatalogApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: AppOptions) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let state = AppState::Loading {
            rx: Self::spawn_load(options.catalog_path.clone()),
        };
        let render_loop = RenderLoop::new(options.particle_count);
        let frame_counter = options.show_fps.then(FrameCounter::default);

        Self {
            options,
            state,
            render_loop,
            frame_counter,
        }
    }

    fn spawn_load(catalog_path: PathBuf) -> Receiver<Result<Vec<ProblemRecord>, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_catalog(&catalog_path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn finish_load(&self, result: Result<Vec<ProblemRecord>, String>) -> AppState {
        let catalog = match result {
            Ok(records) => {
                info!(
                    problems = records.len(),
                    path = %self.options.catalog_path.display(),
                    "catalog loaded"
                );
                CatalogState::loaded(records)
            }
            Err(message) => {
                error!("error loading problems: {message}");
                CatalogState::unavailable(message)
            }
        };

        let mut model = ViewModel::new(
            catalog,
            self.options.catalog_path.clone(),
            Box::new(SystemClipboard::default()),
        );
        if let Some(raw_id) = self.options.initial_id.as_deref() {
            model.open_detail_raw(raw_id);
        }

        AppState::Ready(Box::new(model))
    }

    fn draw_background(&mut self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter_at(rect);
        let mut surface = PainterSurface::new(&painter, rect, BACKGROUND);
        let viewport = surface.size();
        let stats = self.render_loop.frame(&mut surface, viewport);

        if let Some(counter) = self.frame_counter.as_mut() {
            counter.record(ui.ctx(), stats);
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        if let AppState::Loading { rx } = &self.state {
            match rx.try_recv() {
                Ok(result) => transition = Some(result),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    transition = Some(Err("catalog load worker disconnected".to_owned()));
                }
            }
        }

        if let Some(result) = transition {
            self.state = self.finish_load(result);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_background(ui);

                egui::Frame::NONE
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| match &mut self.state {
                        AppState::Loading { .. } => {
                            ui.vertical_centered(|ui| {
                                ui.add_space(120.0);
                                ui.heading("Loading problems...");
                                ui.add_space(8.0);
                                ui.spinner();
                            });
                        }
                        AppState::Ready(model) => model.show(ui),
                    });

                if let Some(counter) = &self.frame_counter {
                    counter.draw(ui);
                }
            });

        if let AppState::Ready(model) = &mut self.state {
            model.show_copy_failure(ctx);
        }

        ctx.request_repaint();
    }
}
