use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::error::Result;
use crate::model::Project;

const PAGE_WIDTH: f64 = 210.0; // A4 portrait
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 18.0;
const MARGIN_TOP: f64 = 18.0;
const MARGIN_BOTTOM: f64 = 20.0;
const LINE_HEIGHT: f64 = 6.0;

/// Cursor that walks down the page and starts a new one when vertical
/// space runs out.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f64,
}

impl<'a> PageCursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN_TOP,
        }
    }

    fn line(&mut self, text: &str, size: f64, indent: f64, font: &IndirectFontRef) {
        if self.y < MARGIN_BOTTOM {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN_TOP;
        }
        self.layer
            .use_text(text, size, Mm(MARGIN_LEFT + indent), Mm(self.y), font);
        self.y -= LINE_HEIGHT;
    }

    fn gap(&mut self) {
        self.y -= LINE_HEIGHT * 0.5;
    }
}

/// Export one section per project: its milestones (title, status, due date)
/// followed by its tasks (title, status, start–end).
pub fn export_pdf(projects: &[Project], path: &Path) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new("Planboard Export", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut cursor = PageCursor::new(&doc, doc.get_page(page).get_layer(layer));

    for project in projects {
        cursor.line(&project.name, 14.0, 0.0, &bold);
        cursor.line(
            &format!(
                "{} – {}",
                project.start.format("%Y-%m-%d"),
                project.end.format("%Y-%m-%d")
            ),
            9.0,
            0.0,
            &font,
        );
        cursor.gap();

        if !project.milestones.is_empty() {
            cursor.line("Milestones", 11.0, 2.0, &bold);
            for m in &project.milestones {
                let due = m
                    .due
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "no due date".to_string());
                cursor.line(
                    &format!("{}  [{}]  {}", m.title, m.status.label(), due),
                    10.0,
                    4.0,
                    &font,
                );
            }
            cursor.gap();
        }

        if !project.tasks.is_empty() {
            cursor.line("Tasks", 11.0, 2.0, &bold);
            for t in &project.tasks {
                cursor.line(
                    &format!(
                        "{}  [{}]  {} – {}",
                        t.title,
                        t.status.label(),
                        t.start.format("%Y-%m-%d"),
                        t.end.format("%Y-%m-%d")
                    ),
                    10.0,
                    4.0,
                    &font,
                );
            }
        }
        cursor.gap();
        cursor.gap();
    }

    doc.save(&mut BufWriter::new(File::create(path)?))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Milestone, Task};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn writes_a_pdf_file() {
        let mut p = Project::new("Launch", date(2024, 1, 1), date(2024, 6, 30));
        p.milestones.push(Milestone::new("Beta", Some(date(2024, 3, 1))));
        p.tasks.push(Task::new("Build", date(2024, 1, 1), date(2024, 1, 10)));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.pdf");
        export_pdf(&[p], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn many_entities_paginate_without_panicking() {
        let mut p = Project::new("Big", date(2024, 1, 1), date(2024, 12, 31));
        for i in 0..120 {
            p.tasks.push(Task::new(
                format!("Task {i}"),
                date(2024, 1, 1),
                date(2024, 1, 2),
            ));
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.pdf");
        export_pdf(&[p], &path).unwrap();
        assert!(path.exists());
    }
}
