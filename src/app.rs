use crate::highlight::{self, Highlighter};
use anyhow::{Context, Result};
use rad_export::registry;
use rad_export::widget::{Metadata, Node};
use rad_export::{Design, Exporter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Read-only viewer: shows a design's outline next to the Go code exported from it.
pub(crate) struct ExportViewerApp {
    design: Design,
    /// Design file currently shown
    current_file: Option<PathBuf>,
    exporter: Exporter,
    /// Append the runnable `main` block
    preview: bool,
    /// Cached generated code
    generated: String,
    highlighter: Highlighter,
    /// Whether to show syntax highlighting (can be toggled for performance)
    syntax_highlighting: bool,
    /// Error/status message to display
    status_message: Option<(String, Instant)>,
}

impl ExportViewerApp {
    pub(crate) fn new(exporter: Exporter, file: Option<(PathBuf, Design)>) -> Self {
        let (current_file, design) = match file {
            Some((path, design)) => (Some(path), design),
            None => (None, Design::default()),
        };
        let mut app = Self {
            design,
            current_file,
            exporter,
            preview: false,
            generated: String::new(),
            highlighter: Highlighter::new(),
            syntax_highlighting: true,
            status_message: None,
        };
        app.regenerate();
        app
    }

    fn regenerate(&mut self) {
        self.generated = if self.preview {
            self.exporter
                .generate_preview(&self.design.root, &self.design.meta)
        } else {
            self.exporter.generate(&self.design.root, &self.design.meta)
        };
    }

    fn load_design(&mut self, path: PathBuf) {
        match Design::load(&path) {
            Ok(design) => {
                self.design = design;
                self.set_status(format!("Loaded {}", path.display()));
                self.current_file = Some(path);
                self.regenerate();
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                self.set_status(format!("Load failed: {}", e));
            }
        }
    }

    fn write_code(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        let (root, meta) = (&self.design.root, &self.design.meta);
        if self.preview {
            self.exporter.export_preview(root, meta, &mut out)?;
        } else {
            self.exporter.export(root, meta, &mut out)?;
        }
        out.flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn save_code(&mut self, path: PathBuf) {
        match self.write_code(&path) {
            Ok(()) => self.set_status(format!("Saved to {}", path.display())),
            Err(e) => {
                tracing::warn!("{:#}", e);
                self.set_status(format!("Save failed: {:#}", e));
            }
        }
    }

    /// Set a status message that will auto-clear after a few seconds
    fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open design…").clicked()
                && let Some(path) = rfd::FileDialog::new()
                    .add_filter("Design", &["json"])
                    .pick_file()
            {
                self.load_design(path);
            }

            if ui.button("Save Go…").clicked()
                && let Some(path) = rfd::FileDialog::new()
                    .add_filter("Go", &["go"])
                    .set_file_name("main.go")
                    .save_file()
            {
                self.save_code(path);
            }

            if ui.button("Reload").clicked()
                && let Some(path) = self.current_file.clone()
            {
                self.load_design(path);
            }

            ui.separator();
            if ui
                .checkbox(&mut self.preview, "Runnable preview")
                .on_hover_text("Append a main function that opens the UI in a window")
                .changed()
            {
                self.regenerate();
            }
            ui.checkbox(&mut self.syntax_highlighting, "Syntax Highlighting");

            if self
                .status_message
                .as_ref()
                .is_some_and(|(_, at)| at.elapsed() >= STATUS_TIMEOUT)
            {
                self.status_message = None;
            }
            if let Some((msg, _)) = &self.status_message {
                ui.separator();
                ui.label(msg.as_str());
            }
        });
    }

    fn outline_ui(&self, ui: &mut egui::Ui) {
        ui.heading("Outline");
        match &self.current_file {
            Some(path) => ui.small(path.display().to_string()),
            None => ui.small("(empty design)"),
        };
        ui.separator();
        egui::ScrollArea::vertical()
            .id_salt("outline_scroll")
            .show(ui, |ui| show_node(ui, &self.design.root, &self.design.meta));
    }
}

fn show_node(ui: &mut egui::Ui, node: &Node, meta: &Metadata) {
    let label = outline_label(node, meta);
    if node.children().is_empty() {
        ui.label(label);
    } else {
        egui::CollapsingHeader::new(label)
            .id_salt(node.id())
            .default_open(true)
            .show(ui, |ui| {
                for child in node.children() {
                    show_node(ui, child, meta);
                }
            });
    }
}

/// One outline row: kind, layout for plain containers, and the assigned name.
pub(crate) fn outline_label(node: &Node, meta: &Metadata) -> String {
    let kind = match node {
        Node::Container(c) => format!("Container ({})", meta.layout(c.id)),
        Node::Widget(w) => match registry::lookup(&w.class) {
            Some(kind) => kind.display_name().to_string(),
            None => format!("{} (unregistered)", w.class),
        },
    };
    match meta.name(node.id()) {
        Some(name) => format!("{kind} · {name}"),
        None => kind,
    }
}

impl eframe::App for ExportViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Ctrl+R: reload the design from disk
        let reload = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::R));
        if reload && let Some(path) = self.current_file.clone() {
            self.load_design(path);
        }

        egui::TopBottomPanel::top("menubar").show(ctx, |ui| self.top_bar(ui));
        egui::SidePanel::left("outline")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| self.outline_ui(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            let highlighter = self.syntax_highlighting.then_some(&self.highlighter);
            highlight::code_viewer(ui, highlighter, &self.generated);
        });
    }
}
