use crate::error::{MullaiError, Result};
use mullai_common::{build_report_lines, Decision, ReportLayout};
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const DOCUMENT_TITLE: &str = "Decision Report";

/// 判定レポートのPDFドキュメントを組み立てる（1ページ、組み込みHelvetica）
pub fn render_report(decision: Option<&Decision>, layout: &ReportLayout) -> Result<PdfDocumentReference> {
    let (doc, page1, layer1) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(layout.page_width_mm),
        Mm(layout.page_height_mm),
        "Layer 1",
    );

    let current_layer = doc.get_page(page1).get_layer(layer1);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| MullaiError::PdfGeneration(format!("font error: {:?}", e)))?;

    for line in build_report_lines(decision, layout) {
        current_layer.use_text(
            line.text,
            layout.font_size_pt,
            Mm(line.left_mm),
            Mm(layout.to_pdf_y_mm(line.top_mm)),
            &font,
        );
    }

    Ok(doc)
}

pub fn generate_report_pdf(decision: Option<&Decision>, output_path: &Path) -> Result<()> {
    let doc = render_report(decision, &ReportLayout::default())?;

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| MullaiError::PdfGeneration(format!("save error: {:?}", e)))?;

    Ok(())
}
