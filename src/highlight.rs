//! Syntax highlighting for generated Go code using syntect.

use egui::Color32;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Cached syntax highlighting resources.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: "base16-ocean.dark".to_string(),
        }
    }

    /// Highlight Go code and return a list of (text, color) spans.
    pub fn highlight_go(&self, code: &str) -> Vec<(String, Color32)> {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension("go")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let Some(theme) = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
        else {
            return vec![(code.to_string(), Color32::LIGHT_GRAY)];
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut result = Vec::new();

        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    for (style, text) in ranges {
                        result.push((text.to_string(), style_to_color32(style)));
                    }
                }
                Err(e) => {
                    tracing::debug!("Highlighting failed, showing plain line: {}", e);
                    result.push((line.to_string(), Color32::LIGHT_GRAY));
                }
            }
        }

        result
    }

    /// Render highlighted code as a LayoutJob for egui.
    pub fn layout_job(&self, code: &str) -> egui::text::LayoutJob {
        let mut job = egui::text::LayoutJob::default();

        for (text, color) in self.highlight_go(code) {
            job.append(
                &text,
                0.0,
                egui::TextFormat {
                    font_id: egui::FontId::monospace(12.0),
                    color,
                    ..Default::default()
                },
            );
        }

        job
    }
}

/// Convert syntect Style to egui Color32.
fn style_to_color32(style: Style) -> Color32 {
    Color32::from_rgb(style.foreground.r, style.foreground.g, style.foreground.b)
}

/// Read-only code view; highlighted when a highlighter is given.
pub fn code_viewer(ui: &mut egui::Ui, highlighter: Option<&Highlighter>, code: &str) {
    egui::ScrollArea::both()
        .id_salt("generated_code_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| match highlighter {
            Some(h) if !code.is_empty() => {
                ui.add(egui::Label::new(h.layout_job(code)).selectable(true));
            }
            _ => {
                ui.add(egui::Label::new(egui::RichText::new(code).monospace()).selectable(true));
            }
        });
}
