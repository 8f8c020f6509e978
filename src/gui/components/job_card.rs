// src/gui/components/job_card.rs
//
// One posting, rendered statelessly from normalized fields. The only
// per-card variability is the logo: Image while the download is good,
// employer initial while it is missing, pending, or failed.

use chrono::{DateTime, Utc};
use eframe::egui::{self, Align, Align2, FontId, Layout, RichText, Sense, Vec2};

use crate::{
    core::normalize::{self, LogoDisplay},
    data::JobPosting,
    logf,
    gui::{app::App, logos::LogoStore},
};

const LOGO_SIDE: f32 = 48.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App, job: &JobPosting, now: DateTime<Utc>) {
    let min_year = app.state.options.min_plausible_year;

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                draw_logo(ui, &mut app.logos, job);

                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&job.job_title).size(16.0).strong());
                    ui.label(RichText::new(&job.employer_name).weak());
                    ui.add_space(4.0);
                    ui.label(normalize::location(job));
                    ui.label(format!(
                        "Posted {}",
                        normalize::freshness(
                            job.job_posted_at_datetime_utc.as_deref(),
                            now,
                            min_year,
                        )
                    ));
                });

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Apply Now").clicked() {
                        logf!("UI: Apply → {}", job.job_apply_link);
                        // New browsing context; the target gets no
                        // opener handle back to us.
                        ui.ctx().open_url(egui::OpenUrl::new_tab(&job.job_apply_link));
                    }
                });
            });
        });
}

fn draw_logo(ui: &mut egui::Ui, logos: &mut LogoStore, job: &JobPosting) {
    let tex = match normalize::resolve_logo(job) {
        LogoDisplay::Image(url) => logos.texture(ui.ctx(), &url),
        LogoDisplay::Initial(_) => None,
    };

    match tex {
        Some(tex) => {
            ui.add(
                egui::Image::new(&tex).fit_to_exact_size(Vec2::splat(LOGO_SIDE)),
            );
        }
        None => {
            let ch = normalize::initial(&job.employer_name);
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(LOGO_SIDE), Sense::hover());
            ui.painter()
                .rect_filled(rect, 6.0, ui.visuals().faint_bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                ch,
                FontId::proportional(24.0),
                ui.visuals().weak_text_color(),
            );
        }
    }
}
