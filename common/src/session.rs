//! 画面の状態管理
//!
//! 読み込み → 検索 → 詳細表示 → AI解析 の流れを1つの値で保持する。
//! ブラウザ版（Leptos）とCLI版の両方がこの状態遷移を使う。
//!
//! 非同期処理（読み込み・解析）はチケットを発行し、完了時に返してもらう。
//! 世代番号が古いチケットの結果は画面に反映しない。

use crate::analysis::{AnalysisError, AnalysisReport, MISSING_TITLE_WARNING};
use crate::filter::filter_records;
use crate::format::CurrencyFormat;
use crate::load::LoadError;
use crate::render::{render_records, ListMessage, ListView};
use crate::types::{DetailView, SalaryRecord};

/// AI解析欄の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisPanel {
    #[default]
    Hidden,
    Loading,
    /// 職名なし（リクエストは送らない）
    Warning(String),
    Report(AnalysisReport),
    Failed(AnalysisError),
}

impl AnalysisPanel {
    pub fn is_visible(&self) -> bool {
        !matches!(self, AnalysisPanel::Hidden)
    }
}

/// 読み込み要求のチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    load_id: u64,
}

/// 解析要求のチケット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub job_title: String,
    generation: u64,
}

/// 反映結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Yes,
    /// 古い要求の結果なので破棄した
    Stale,
}

/// 画面全体の状態
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    format: CurrencyFormat,
    records: Vec<SalaryRecord>,
    list: ListView,
    selected: Option<SalaryRecord>,
    analysis: AnalysisPanel,
    analyzing: bool,
    generation: u64,
    load_id: u64,
}

impl SessionState {
    pub fn new(format: CurrencyFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// 最後に読み込んだ全レコード
    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    /// 一覧欄
    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// 詳細パネルの表示内容（未選択ならNone）
    pub fn detail(&self) -> Option<DetailView> {
        self.selected
            .as_ref()
            .map(|r| DetailView::from_record(r, &self.format))
    }

    pub fn analysis(&self) -> &AnalysisPanel {
        &self.analysis
    }

    /// 解析ボタンが押せるか
    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && !self.analyzing
    }

    fn clear_detail(&mut self) {
        self.selected = None;
        self.analysis = AnalysisPanel::Hidden;
        self.generation += 1;
    }

    /// 読み込み開始: 詳細・解析欄を閉じて「読み込み中」を表示
    pub fn begin_load(&mut self) -> LoadTicket {
        self.clear_detail();
        self.load_id += 1;
        self.list = ListView::Message(ListMessage::Loading);
        LoadTicket {
            load_id: self.load_id,
        }
    }

    /// 読み込み完了
    ///
    /// 失敗時はストアを空にする。後から開始された読み込みがあれば破棄。
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<SalaryRecord>, LoadError>,
    ) -> Applied {
        if ticket.load_id != self.load_id {
            return Applied::Stale;
        }

        match outcome {
            Ok(records) if records.is_empty() => {
                self.records = Vec::new();
                self.list = ListView::Message(ListMessage::NoData);
            }
            Ok(records) => {
                self.records = records;
                self.list = render_records(&self.records, &self.format);
            }
            Err(err) => {
                self.records = Vec::new();
                self.list = ListView::Message(ListMessage::LoadFailed(err.to_string()));
            }
        }
        Applied::Yes
    }

    /// 検索: 詳細・解析欄を閉じて絞り込み結果を表示
    pub fn search(&mut self, query: &str) {
        self.clear_detail();
        let filtered = filter_records(&self.records, query, &self.format);
        self.list = render_records(&filtered, &self.format);
    }

    /// 行の選択: 詳細パネルを差し替え、前の解析結果を消す
    pub fn select(&mut self, record: SalaryRecord) {
        self.clear_detail();
        self.selected = Some(record);
    }

    /// 解析開始
    ///
    /// 職名がなければ警告を表示してNone（リクエストは送らない）。
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        let title = self
            .selected
            .as_ref()
            .and_then(|r| r.analysis_title())
            .map(str::to_string);

        let Some(job_title) = title else {
            self.analysis = AnalysisPanel::Warning(MISSING_TITLE_WARNING.to_string());
            return None;
        };

        self.analyzing = true;
        self.analysis = AnalysisPanel::Loading;
        Some(AnalysisTicket {
            job_title,
            generation: self.generation,
        })
    }

    /// 解析完了
    ///
    /// ボタンは結果に関係なく再度有効にする。
    /// 要求後に選択・検索・再読み込みがあった場合は結果を破棄。
    pub fn finish_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisReport, AnalysisError>,
    ) -> Applied {
        self.analyzing = false;

        if ticket.generation != self.generation {
            return Applied::Stale;
        }

        self.analysis = match outcome {
            Ok(report) => AnalysisPanel::Report(report),
            Err(err) => AnalysisPanel::Failed(err),
        };
        Applied::Yes
    }
}
