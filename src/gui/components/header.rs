// src/gui/components/header.rs
//
// App title + the search box. The search term mutates synchronously on
// every keystroke; the visible list re-derives next frame. No debounce:
// datasets are a few dozen records.

use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new("HR Insight Jobs").size(28.0).strong());
        ui.label(RichText::new("Curated opportunities for HR Data Analysts & Tech").weak());
        ui.add_space(8.0);

        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search_term)
                .hint_text("Search by title or company...")
                .desired_width(420.0),
        );
    });
    ui.add_space(10.0);
}
