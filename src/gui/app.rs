// src/gui/app.rs
use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    csv,
    fetch::HttpFetcher,
    file,
    params::DEFAULT_OUT_FILE,
    runner::{ResultRow, SchemaCache},
};

use super::progress::GuiProgress;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = HttpFetcher::with_default_timeout()?;
    eframe::run_native(
        "ItemList Schema Generator",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(fetcher)))),
    )?;
    Ok(())
}

pub struct App {
    fetcher: HttpFetcher,

    // URL input UX (one URL per line)
    url_input: String,

    // output text field
    out_path_text: String,

    // current result table + the notifications from the last run
    rows: Vec<ResultRow>,
    errors: Vec<String>,

    // status line (progress sink writes here)
    status: Arc<Mutex<String>>,

    // whole-batch memoization, process lifetime
    cache: SchemaCache,
}

impl App {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self {
            fetcher,
            url_input: String::new(),
            out_path_text: DEFAULT_OUT_FILE.to_string(),
            rows: Vec::new(),
            errors: Vec::new(),
            status: Arc::new(Mutex::new("Idle".to_string())),
            cache: SchemaCache::new(),
        }
    }

    #[inline]
    fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /* ---------- actions ---------- */

    fn generate(&mut self) {
        self.errors.clear();

        let lines: Vec<String> = self.url_input.lines().map(|l| l.to_string()).collect();
        if lines.iter().all(|l| l.trim().is_empty()) {
            self.errors.push("No URL provided.".to_string());
            self.status("Nothing to do");
            return;
        }

        log::info!("Generate: Begin urls={}", lines.len());
        let mut prog = GuiProgress::new(self.status.clone());

        let Self { cache, fetcher, .. } = self;
        let rows = cache.get_or_generate(&*fetcher, &lines, Some(&mut prog));

        self.errors = prog.into_errors();
        log::info!("Generate: OK rows={} errors={}", rows.len(), self.errors.len());
        self.rows = rows;
        self.status(format!(
            "Ready: {} schema(s), {} problem(s)",
            self.rows.len(),
            self.errors.len()
        ));
    }

    fn export(&mut self) {
        if self.rows.is_empty() {
            self.status("Nothing to export");
            log::debug!("Export: Clicked, but there's nothing to export");
            return;
        }

        match file::write_schemas_csv(Path::new(&self.out_path_text), &self.rows) {
            Ok(path) => {
                log::info!("Export: OK rows={} path={}", self.rows.len(), path.display());
                self.status(format!("Exported {} row(s) to {}", self.rows.len(), path.display()));
            }
            Err(e) => {
                log::error!("Export: Error: {}", e);
                self.status(format!("Export error: {e}"));
            }
        }
    }

    fn copy(&mut self, ctx: &egui::Context) {
        if self.rows.is_empty() {
            self.status("Nothing to copy");
            return;
        }
        ctx.copy_text(csv::to_export_string(&self.rows));
        self.status("Copied CSV to clipboard");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("JSON-LD ItemList Schema Generator");
            ui.label("Enter the list of blog URLs (one per line):");

            ui.add(
                egui::TextEdit::multiline(&mut self.url_input)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );

            ui.horizontal(|ui| {
                let red = Color32::from_rgb(220, 30, 30);
                if ui
                    .add(
                        egui::Button::new(
                            RichText::new("Generate JSON-LD").color(Color32::BLACK).strong(),
                        )
                        .fill(red),
                    )
                    .clicked()
                {
                    self.generate();
                }

                ui.label("Output:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.out_path_text)
                        .font(egui::TextStyle::Monospace),
                );

                if ui.button("Export CSV").clicked() {
                    self.export();
                }
                if ui.button("Copy").clicked() {
                    self.copy(ui.ctx());
                }

                let status = self.status.lock().unwrap().clone();
                ui.label(format!("Status: {status}"));
            });

            if !self.errors.is_empty() {
                ui.separator();
                for err in &self.errors {
                    ui.colored_label(Color32::from_rgb(220, 80, 60), err);
                }
            }

            ui.separator();

            draw_result_table(ui, &self.rows);
        });
    }
}

/// Two-column view of the result table. The schema cells are whole script
/// blocks; they render clipped on one line, the CSV export has the full text.
fn draw_result_table(ui: &mut egui::Ui, rows: &[ResultRow]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(260.0).resizable(true).clip(true).at_least(80.0))
        .column(Column::remainder().clip(true))
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.label(RichText::new("Blog URL").strong());
            });
            header.col(|ui| {
                ui.label(RichText::new("Schema").strong());
            });
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let ix = row.index();
                if let Some(data) = rows.get(ix) {
                    row.col(|ui| {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.label(data.blog_url.as_str());
                        });
                    });
                    row.col(|ui| {
                        ui.scope(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(
                                RichText::new(data.schema.replace('\n', " "))
                                    .monospace(),
                            );
                        });
                    });
                }
            });
        });
}
