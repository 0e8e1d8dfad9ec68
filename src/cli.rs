use clap::{Parser, Subcommand};
use mullai_common::Purpose;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mullai")]
#[command(about = "Land claim decisions under the Forest Rights Act", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 座標と目的から判定だけを行う
    Evaluate {
        /// 緯度
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// 経度
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// 土地の利用目的 (commercial/protected/industrial/agricultural)
        #[arg(short, long)]
        purpose: Option<Purpose>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 座標 "lat, lon" または地名を地点に解決
    Search {
        /// 検索テキスト
        #[arg(required = true, allow_hyphen_values = true)]
        text: String,
    },

    /// 地点を選択して申請し、判定を表示
    Claim {
        /// 座標 "lat, lon" または地名
        #[arg(required = true, allow_hyphen_values = true)]
        location: String,

        /// 土地の利用目的
        #[arg(short, long)]
        purpose: Option<Purpose>,

        /// 判定後に異議申し立てを行う
        #[arg(long)]
        appeal: bool,

        /// 判定結果をJSONで保存
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// 判定レポート(PDF)の出力先（既存ディレクトリまたは末尾 "/" なら report.pdf を作成）
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// 保存済みの判定からPDFレポートを生成
    Report {
        /// 判定結果JSON（省略時は「判定なし」レポート）
        input: Option<PathBuf>,

        /// 出力ファイル（既存ディレクトリまたは末尾 "/" なら report.pdf を作成）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 対話セッション（Map / Decision / Appeal / About）
    Session,

    /// 設定を表示/編集
    Config {
        /// 地名検索サービスのURLを設定
        #[arg(long)]
        set_geocoder_url: Option<String>,

        /// 地名検索で送るUser-Agentを設定
        #[arg(long)]
        set_user_agent: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
