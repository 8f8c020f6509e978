// src/gui/components/job_list.rs
//
// Dispatches on the view state: busy indicator, error notice, "no
// matches", or the scrolling card list. Errors and the empty-result
// affordance are deliberately distinct; no partial list is ever shown
// next to an error.

use chrono::Utc;
use eframe::egui::{self, Align, Layout, RichText};

use crate::{core::filter, data::ViewState, gui::app::App, logf};

use super::job_card;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.view_snapshot();

    ui.horizontal(|ui| {
        ui.heading("Latest Openings");
        if let ViewState::Ready(ds) = &view {
            ui.label(RichText::new(format!("Updated: {}", ds.last_updated)).weak());
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                logf!("UI: Refresh clicked");
                app.spawn_fetch(ui.ctx());
            }
        });
    });
    ui.separator();

    match view {
        ViewState::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.spinner();
                ui.label("Loading jobs...");
            });
        }
        ViewState::Error(msg) => draw_notice(ui, &msg),
        ViewState::Ready(ds) => {
            let term = app.state.gui.search_term.clone();
            let visible = filter::filter(&ds.jobs, &term);

            if visible.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    let text = if term.is_empty() {
                        s!("No openings right now. Check back after the next scrape.")
                    } else {
                        format!("No matches found for \"{term}\"")
                    };
                    ui.label(RichText::new(text).weak());
                });
                return;
            }

            let now = Utc::now();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (ix, job) in visible.iter().copied().enumerate() {
                    // Key by position: the feed makes no uniqueness
                    // promise for job_id.
                    ui.push_id(ix, |ui| {
                        job_card::draw(ui, app, job, now);
                    });
                    ui.add_space(8.0);
                }
            });
        }
    }
}

fn draw_notice(ui: &mut egui::Ui, msg: &str) {
    ui.add_space(60.0);
    ui.vertical_centered(|ui| {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.strong("Notice");
                ui.label(msg);
            });
    });
}
