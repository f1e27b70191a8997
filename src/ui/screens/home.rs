//! Home screen: the calculator menu.

use egui::{RichText, Ui, Vec2};

use super::Screen;

/// Home screen UI.
pub struct HomeScreen;

impl HomeScreen {
    /// Render the home screen and return the next screen if navigation requested.
    pub fn show(ui: &mut Ui) -> Option<Screen> {
        let mut next_screen = None;

        ui.vertical_centered(|ui| {
            ui.add_space(32.0);

            ui.label(RichText::new("RustRun").size(48.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new("Running and fitness calculators")
                    .size(18.0)
                    .weak(),
            );

            ui.add_space(40.0);

            let button_size = Vec2::new(320.0, 52.0);

            for screen in Screen::CALCULATORS {
                let response = ui
                    .add_sized(
                        button_size,
                        egui::Button::new(RichText::new(screen.title()).size(18.0)),
                    )
                    .on_hover_text(screen.blurb());

                if response.clicked() {
                    next_screen = Some(screen);
                }
                ui.add_space(8.0);
            }

            ui.add_space(24.0);

            if ui
                .add_sized(
                    Vec2::new(160.0, 40.0),
                    egui::Button::new(RichText::new("Settings").size(16.0)),
                )
                .clicked()
            {
                next_screen = Some(Screen::Settings);
            }
        });

        next_screen
    }
}
