//! レポートのページレイアウト設定（mm単位、左上原点）

/// A4縦
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// 本文の左端
pub const TEXT_LEFT_MM: f32 = 20.0;
/// タイトル行の位置（上端から）
pub const TITLE_TOP_MM: f32 = 20.0;
/// 本文1行目の位置（上端から）
pub const BODY_TOP_MM: f32 = 40.0;
/// 本文の行送り
pub const LINE_SPACING_MM: f32 = 10.0;

pub const FONT_SIZE_PT: f32 = 16.0;

/// レポートのレイアウト
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub left_mm: f32,
    pub title_top_mm: f32,
    pub body_top_mm: f32,
    pub line_spacing_mm: f32,
    pub font_size_pt: f32,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            page_width_mm: PAGE_WIDTH_MM,
            page_height_mm: PAGE_HEIGHT_MM,
            left_mm: TEXT_LEFT_MM,
            title_top_mm: TITLE_TOP_MM,
            body_top_mm: BODY_TOP_MM,
            line_spacing_mm: LINE_SPACING_MM,
            font_size_pt: FONT_SIZE_PT,
        }
    }
}

impl ReportLayout {
    /// 本文 `index` 行目の上端からの位置
    pub fn body_line_top_mm(&self, index: usize) -> f32 {
        self.body_top_mm + index as f32 * self.line_spacing_mm
    }

    /// 上端基準の位置をPDF座標（下端基準）に変換
    pub fn to_pdf_y_mm(&self, top_mm: f32) -> f32 {
        self.page_height_mm - top_mm
    }
}
