//! Main window implemented with egui/eframe

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{info, warn};

use super::components::{entity_form, entity_list};
use super::constants::*;
use crate::config::Config;
use crate::state::{Action, AppState, LoadStatus, ViewMode};
use crate::sync::{HttpSyncClient, SyncWorker};

struct ManagerApp {
    state: AppState,
    worker: SyncWorker,
}

impl ManagerApp {
    fn new(cc: &CreationContext<'_>, client: HttpSyncClient) -> Result<Self> {
        info!(url = %client.collection_url(), "Initializing egui manager");

        let repaint = cc.egui_ctx.clone();
        let worker = SyncWorker::spawn(client, move || repaint.request_repaint())?;

        let mut app = Self {
            state: AppState::new(),
            worker,
        };
        app.apply(Action::Initialize);
        Ok(app)
    }

    fn apply(&mut self, action: Action) {
        if let Some(request) = self.state.dispatch(action) {
            if !self.worker.submit(request) {
                warn!("Request not sent, sync worker unavailable");
            }
        }
    }

    /// Feed every completed request back into state (UI thread only)
    fn poll_sync(&mut self) {
        for response in self.worker.drain() {
            self.state.resolve(response);
        }
    }

    fn tabs(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        ui.horizontal(|ui| {
            let on_list = self.state.mode() == ViewMode::List;
            if ui.selectable_label(on_list, LIST_TAB).clicked() {
                action = Some(Action::ShowList);
            }
            let form_label = if self.state.form().is_editing() {
                EDIT_TAB
            } else {
                ADD_TAB
            };
            if ui.selectable_label(!on_list, form_label).clicked() {
                action = Some(Action::BeginCreate);
            }
        });
        action
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        match self.state.last_outcome() {
            Some(outcome) if outcome.is_failure() => {
                ui.colored_label(STATUS_ERROR, outcome.summary());
            }
            Some(outcome) => {
                ui.colored_label(STATUS_OK, outcome.summary());
            }
            None => {
                ui.colored_label(STATUS_MUTED, "Ready");
            }
        }
    }
}

impl eframe::App for ManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_sync();

        let mut actions = Vec::new();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.add_space(PADDING / 2.0);
            self.status_line(ui);
            ui.add_space(PADDING / 2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.heading(APP_TITLE);
            ui.add_space(SECTION_SPACING);

            match self.state.store().status() {
                LoadStatus::Loading => {
                    ui.label("Loading Transformers...");
                }
                LoadStatus::Failed(message) => {
                    ui.colored_label(STATUS_ERROR, format!("Error fetching data: {message}"));
                    ui.add_space(ITEM_SPACING);
                    if ui.button("Retry").clicked() {
                        actions.push(Action::Reload);
                    }
                }
                LoadStatus::Ready => {
                    actions.extend(self.tabs(ui));
                    ui.add_space(ITEM_SPACING);
                    ui.separator();
                    ui.add_space(ITEM_SPACING);

                    let view_actions = match self.state.mode() {
                        ViewMode::List => entity_list::ui(ui, &self.state),
                        ViewMode::Form => entity_form::ui(ui, self.state.form()),
                    };
                    actions.extend(view_actions);
                }
            }
        });

        for action in actions {
            self.apply(action);
        }
    }
}

pub fn run_gui(config: &Config, client: HttpSyncClient) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                f32::from(config.window.width),
                f32::from(config.window.height),
            ])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ManagerApp::new(cc, client)?))),
    )
    .map_err(|err| anyhow!("Failed to launch egui manager: {err}"))?;

    info!("Manager exiting");
    Ok(())
}
