// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
    thread,
};

use eframe::egui;

use crate::{logd, loge, logf};

use crate::{
    config::state::AppState,
    core::fetch,
    data::ViewState,
};

use super::{components, logos::LogoStore};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "HR Insight Jobs",
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::default(), &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // fetch lifecycle; the worker thread writes here
    view: Arc<Mutex<ViewState>>,
    fetch_gen: Arc<AtomicU64>,

    // logo downloads + texture cache
    pub logos: LogoStore,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let app = Self {
            state,
            view: Arc::new(Mutex::new(ViewState::Loading)),
            fetch_gen: Arc::new(AtomicU64::new(0)),
            logos: LogoStore::new(),
        };

        logf!("Init: data_url={}", app.state.options.data_url);
        app.spawn_fetch(ctx);
        app
    }

    /// Start a background fetch of the feed.
    ///
    /// Bumps the fetch generation first, so a still-pending older fetch
    /// that resolves late finds itself stale and drops its result
    /// instead of overwriting the newer one.
    pub fn spawn_fetch(&self, ctx: &egui::Context) {
        let generation = self.fetch_gen.fetch_add(1, Ordering::SeqCst) + 1;
        *self.view.lock().unwrap() = ViewState::Loading;

        let url = self.state.options.data_url.clone();
        let view = self.view.clone();
        let current_gen = self.fetch_gen.clone();
        let ctx = ctx.clone();

        thread::spawn(move || {
            logf!("Fetch: Begin gen={generation} url={url}");
            let res = fetch::fetch(&url);
            match &res {
                Ok(ds) => logf!("Fetch: OK gen={generation}, jobs={}", ds.jobs.len()),
                Err(e) => loge!("Fetch: Error gen={generation}: {e}"),
            }

            commit_fetch(&view, &current_gen, generation, res);
            ctx.request_repaint();
        });
    }

    /// Clone of the current view state for this frame. Datasets are
    /// small; cloning keeps the lock out of the render code.
    pub fn view_snapshot(&self) -> ViewState {
        self.view.lock().unwrap().clone()
    }
}

/// Commit a finished fetch unless a newer fetch has since started.
///
/// The generation re-check happens while holding the view lock: a
/// worker that went stale between finishing its download and reaching
/// the lock still cannot overwrite a newer commit.
fn commit_fetch(
    view: &Mutex<ViewState>,
    current_gen: &AtomicU64,
    generation: u64,
    res: Result<crate::data::Dataset, fetch::FetchError>,
) {
    let mut view = view.lock().unwrap();
    if current_gen.load(Ordering::SeqCst) != generation {
        logd!("Fetch: Stale gen={generation}, result dropped");
        return;
    }
    *view = ViewState::from_fetch(res);
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::job_list::draw(ui, self);
        });
    }
}
