//! Heart rate zone band with the current zone highlighted.

use egui::{Color32, Pos2, Rect, RichText, Ui, Vec2};

use crate::formulas::KarvonenZones;
use crate::ui::theme::zone_colors::hr_zone_color;

const ZONE_COUNT: u8 = 5;

/// A zone indicator that shows the current zone with a color band.
pub struct ZoneIndicator;

impl ZoneIndicator {
    /// Render the five Karvonen zones as a horizontal bar.
    ///
    /// Zones other than `current_zone` are dimmed. When `zones` is given the
    /// bpm range of the current zone is written under the bar.
    pub fn hr_zone(ui: &mut Ui, current_zone: Option<u8>, zones: Option<&KarvonenZones>) {
        let available_width = ui.available_width();
        let bar_height = 24.0;
        let zone_width = available_width / ZONE_COUNT as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(available_width, bar_height + 20.0),
            egui::Sense::hover(),
        );

        let rect = response.rect;
        let bar_rect = Rect::from_min_size(rect.min, Vec2::new(available_width, bar_height));

        for zone in 1..=ZONE_COUNT {
            let zone_x = rect.min.x + (zone - 1) as f32 * zone_width;
            let zone_rect = Rect::from_min_size(
                Pos2::new(zone_x, bar_rect.min.y),
                Vec2::new(zone_width, bar_height),
            );

            let color = hr_zone_color(zone);
            let is_current = current_zone == Some(zone);

            let fill_color = if is_current {
                color
            } else {
                color.linear_multiply(0.3)
            };
            painter.rect_filled(zone_rect, 0.0, fill_color);

            let text_color = if is_current {
                Color32::WHITE
            } else {
                Color32::from_gray(100)
            };
            painter.text(
                zone_rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("Z{}", zone),
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        let Some(zone) = current_zone else {
            return;
        };

        let caption = match zones.and_then(|z| z.get_zone_range(zone)) {
            Some(range) => format!(
                "{} {}: {}-{} bpm",
                range.name, range.label, range.min_bpm, range.max_bpm
            ),
            None => default_hr_zone_name(zone).to_string(),
        };

        painter.text(
            Pos2::new(rect.center().x, bar_rect.max.y + 12.0),
            egui::Align2::CENTER_CENTER,
            caption,
            egui::FontId::proportional(14.0),
            hr_zone_color(zone),
        );
    }

    /// Compact zone badge: a label followed by the coloured zone number.
    pub fn zone_badge(ui: &mut Ui, label: &str, zone: Option<u8>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(label).size(12.0).weak());

            match zone {
                Some(z) if (1..=ZONE_COUNT).contains(&z) => {
                    ui.label(
                        RichText::new(format!("Z{}", z))
                            .color(hr_zone_color(z))
                            .strong()
                            .size(14.0),
                    );
                }
                _ => {
                    ui.label(RichText::new("-").weak().size(14.0));
                }
            }
        });
    }
}

/// Zone label when no calculated zones are at hand.
fn default_hr_zone_name(zone: u8) -> &'static str {
    match zone {
        1 => "Recovery",
        2 => "Endurance",
        3 => "Tempo",
        4 => "Threshold",
        5 => "VO2max",
        _ => "Unknown",
    }
}
