//! 対話セッション
//!
//! ヘッダーのタブ移動・地点検索・目的選択・申請・異議・レポート出力を
//! 1つの `WorkflowState` に対して順に適用する。
//! エラーはブロッキングの通知として表示し、状態は変えずに続行する。
//!
//! ## 変更履歴
//! - 2026-09-05: 初期作成
//! - 2026-09-20: レポート出力失敗も通知扱いに変更

use crate::error::Result;
use crate::export;
use crate::geocode::{self, PlaceSearch};
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use mullai_common::view::APP_NAME;
use mullai_common::{render_view, view_label, Action, Purpose, View, WorkflowState};
use std::path::PathBuf;
use std::time::Duration;

/// セッションで選べる操作
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Navigate(View),
    Search(String),
    SetPurpose(Purpose),
    Claim,
    Appeal,
    DownloadReport,
    Quit,
}

impl SessionCommand {
    pub fn label(&self) -> String {
        match self {
            SessionCommand::Navigate(view) => format!("Go to {}", view_label(*view)),
            SessionCommand::Search(_) => "Search (lat, lon or place name)".to_string(),
            SessionCommand::SetPurpose(_) => "Change purpose of land".to_string(),
            SessionCommand::Claim => "Claim Now".to_string(),
            SessionCommand::Appeal => "Appeal Decision".to_string(),
            SessionCommand::DownloadReport => "Download Report (PDF)".to_string(),
            SessionCommand::Quit => "Quit".to_string(),
        }
    }
}

/// 操作の結果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue,
    /// ブロッキング通知（閉じるまで待つ）
    Notice(String),
    Exported(PathBuf),
    Quit,
}

/// 現在のタブで表示する操作一覧（ヘッダーのタブ移動は常に含む）
pub fn available_commands(state: &WorkflowState) -> Vec<SessionCommand> {
    let mut commands = Vec::new();

    match state.active_view {
        View::Map => {
            commands.push(SessionCommand::Search(String::new()));
            commands.push(SessionCommand::SetPurpose(state.purpose));
            commands.push(SessionCommand::Claim);
        }
        View::Decision if state.has_claim() => {
            commands.push(SessionCommand::DownloadReport);
            commands.push(SessionCommand::Appeal);
        }
        _ => {}
    }

    commands.extend(
        View::ALL
            .iter()
            .filter(|v| **v != state.active_view)
            .map(|v| SessionCommand::Navigate(*v)),
    );
    commands.push(SessionCommand::Quit);
    commands
}

pub struct Session<'a> {
    state: WorkflowState,
    search: &'a dyn PlaceSearch,
    report_dir: PathBuf,
    report_file_name: String,
}

impl<'a> Session<'a> {
    pub fn new(
        state: WorkflowState,
        search: &'a dyn PlaceSearch,
        report_dir: PathBuf,
        report_file_name: String,
    ) -> Self {
        Self {
            state,
            search,
            report_dir,
            report_file_name,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// 操作を1つ実行
    ///
    /// 利用者向けのエラー（未選択・地名なし・検索失敗）とレポート出力の失敗は
    /// `Outcome::Notice` として返し、状態は変えない。
    pub async fn handle(&mut self, command: SessionCommand) -> Result<Outcome> {
        tracing::debug!(?command, view = %self.state.active_view, "session command");

        let result = match command {
            SessionCommand::Navigate(view) => self.apply(Action::SwitchView(view)),
            SessionCommand::SetPurpose(purpose) => self.apply(Action::SetPurpose(purpose)),
            SessionCommand::Search(text) => match geocode::resolve(&text, self.search).await {
                Ok(coordinate) => self.apply(Action::SelectLocation(coordinate)),
                Err(e) => Err(e),
            },
            SessionCommand::Claim => self.apply(Action::SubmitClaim),
            SessionCommand::Appeal => self.apply(Action::Appeal),
            SessionCommand::DownloadReport => {
                match export::export_report(
                    self.state.decision.as_ref(),
                    &self.report_dir,
                    &self.report_file_name,
                ) {
                    Ok(path) => Ok(Outcome::Exported(path)),
                    Err(e) => {
                        tracing::warn!(error = %e, "report export failed");
                        Ok(Outcome::Notice(e.to_string()))
                    }
                }
            }
            SessionCommand::Quit => Ok(Outcome::Quit),
        };

        match result {
            Err(e) if e.is_user_notice() => Ok(Outcome::Notice(e.to_string())),
            other => other,
        }
    }

    /// 状態遷移を適用。失敗時は状態を変えない
    fn apply(&mut self, action: Action) -> Result<Outcome> {
        self.state = self.state.apply(&action)?;
        Ok(Outcome::Continue)
    }

    /// 端末で対話ループを実行
    pub async fn run_interactive(&mut self) -> Result<()> {
        loop {
            print_screen(&self.state);

            let commands = available_commands(&self.state);
            let labels: Vec<String> = commands.iter().map(|c| c.label()).collect();
            let selection = Select::new()
                .with_prompt("Action")
                .items(&labels)
                .default(0)
                .interact()?;

            let command = match &commands[selection] {
                SessionCommand::Search(_) => {
                    let text: String = Input::new()
                        .with_prompt("Enter coordinates (lat, lon) or place name")
                        .allow_empty(true)
                        .interact_text()?;
                    SessionCommand::Search(text)
                }
                SessionCommand::SetPurpose(current) => {
                    let names: Vec<&str> = Purpose::ALL.iter().map(|p| p.as_str()).collect();
                    let default = Purpose::ALL.iter().position(|p| p == current).unwrap_or(0);
                    let index = Select::new()
                        .with_prompt("Purpose of Land")
                        .items(&names)
                        .default(default)
                        .interact()?;
                    SessionCommand::SetPurpose(Purpose::ALL[index])
                }
                other => other.clone(),
            };

            let spinner = matches!(command, SessionCommand::Search(_)).then(search_spinner);
            let outcome = self.handle(command).await?;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            match outcome {
                Outcome::Continue => {}
                Outcome::Notice(message) => show_notice(&message)?,
                Outcome::Exported(path) => println!("✔ Report saved: {}", path.display()),
                Outcome::Quit => return Ok(()),
            }
        }
    }
}

fn print_screen(state: &WorkflowState) {
    let tabs: Vec<String> = View::ALL
        .iter()
        .map(|v| {
            if *v == state.active_view {
                format!("[{}]", view_label(*v))
            } else {
                view_label(*v).to_string()
            }
        })
        .collect();

    println!();
    println!("🌱 {}    {}", APP_NAME, tabs.join("  "));
    println!("────────────────────────────────────────");

    let content = render_view(state);
    println!("{}", content.title);
    for line in &content.lines {
        println!("  {}", line);
    }
    println!();
}

fn search_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Searching...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn show_notice(message: &str) -> Result<()> {
    println!("⚠ {}", message);
    let _: String = Input::new()
        .with_prompt("Press Enter to dismiss")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
