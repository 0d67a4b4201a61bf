use std::collections::HashSet;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Vec2};

use crate::taxonomy::{NodeId, TaxonomyTree, load_taxonomy};
use crate::layout::{IndentedLayout, RadialLayout};
use crate::viewport::Viewport;
use crate::visibility::VisibilityState;

mod canvas;
mod render_utils;
mod ui;

pub struct TaxoscopeApp {
    taxonomy_path: String,
    state: AppState,
    reload_rx: Option<Receiver<Result<TaxonomyTree, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<TaxonomyTree, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewMode {
    Indented,
    Radial,
}

struct ViewModel {
    tree: TaxonomyTree,
    mode: ViewMode,
    visibility: VisibilityState,
    viewport: Viewport,
    radial_zoom: f32,
    radial_pan: Vec2,
    indented_pan: Vec2,
    ring_spacing: f64,
    selected: Option<NodeId>,
    search: String,
    layout_dirty: bool,
    layout_revision: u64,
    indented_cache: Option<IndentedLayout>,
    radial_cache: Option<RadialLayout>,
    search_match_cache: Option<SearchMatchCache>,
    visible_rows: usize,
    visible_connectors: usize,
}

struct SearchMatchCache {
    query: String,
    layout_revision: u64,
    matches: Arc<HashSet<NodeId>>,
}

impl TaxoscopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, taxonomy_path: String) -> Self {
        let state = Self::start_load(taxonomy_path.clone());
        Self {
            taxonomy_path,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(taxonomy_path: String) -> Receiver<Result<TaxonomyTree, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_taxonomy(&taxonomy_path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(taxonomy_path: String) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(taxonomy_path),
        }
    }
}

impl eframe::App for TaxoscopeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(tree) => AppState::Ready(Box::new(ViewModel::new(tree))),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading taxonomy document...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load taxonomy");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.taxonomy_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.taxonomy_path, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.taxonomy_path.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => {
                            transition = Some(match result {
                                Ok(tree) => AppState::Ready(Box::new(ViewModel::new(tree))),
                                Err(error) => AppState::Error(error),
                            });
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(AppState::Error("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
