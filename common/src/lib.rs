//! Mullai Common Library
//!
//! CLIと対話セッションで共有される型・判定ルール・状態遷移

pub mod types;
pub mod layout;
pub mod error;
pub mod parser;
pub mod evaluator;
pub mod workflow;
pub mod view;
pub mod export;

pub use types::{Coordinate, Decision, Purpose, Verdict, View};
pub use layout::ReportLayout;
pub use error::{Error, Result};
pub use parser::parse_coordinate_pair;
pub use evaluator::evaluate;
pub use workflow::{Action, WorkflowState};
pub use view::{render_view, view_label, ViewContent};
pub use export::pdf_core::{build_report_lines, ReportLine};
