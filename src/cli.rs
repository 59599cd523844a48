use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "salary-lookup")]
#[command(about = "Consulta de salarios mínimos por puesto con análisis IA", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 給与一覧を表示
    List,

    /// 検索語で絞り込んで表示
    Search {
        /// 職名・コード・正式名称・給与のいずれかに含まれる文字列
        #[arg(required = true)]
        query: String,
    },

    /// 最初に一致した職種の詳細を表示
    Show {
        /// 検索語
        #[arg(required = true)]
        query: String,

        /// 続けてAI解析を実行
        #[arg(short, long)]
        analyze: bool,
    },

    /// 職名を指定してAI解析
    Analyze {
        /// 職名
        #[arg(required = true)]
        job_title: String,
    },

    /// 対話的に検索・選択・解析
    Browse,

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
