use serde::{Deserialize, Serialize};

/// 率（pct）が未入力・不正な場合のデフォルト値
pub const DEFAULT_PCT: i64 = 20;

fn default_pct() -> i64 {
    DEFAULT_PCT
}

/// 経費のステータス（ストアに保存される生の値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// 審査待ち
    #[default]
    Pending,
    /// 承認済み
    Accepted,
    /// 却下
    Refused,
    /// 未知の値（一覧全体の読み込みを失敗させないため）
    #[serde(other)]
    Unknown,
}

/// 経費データモデル（ストアに保存されるレコード）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// ストアが割り当てるID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    /// 経費の種類（選択肢はUI側で制限される）
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub name: String,
    /// 金額。入力が数値として解釈できない場合はNone（JSONではnull）
    #[serde(default)]
    pub amount: Option<i64>,
    /// YYYY-MM-DD形式の日付（入力値のまま保存）
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub vat: String,
    #[serde(default = "default_pct")]
    pub pct: i64,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
    /// 管理者コメント
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

/// 表示用の経費データ
///
/// `date`は表示用にフォーマットされ（失敗時は元の値）、`status`は表示ラベルになる
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBill {
    pub id: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Option<i64>,
    pub date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: String,
    pub comment_admin: Option<String>,
}

/// 領収書アップロードのペイロード（マルチパート送信用）
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    /// 表示用ファイル名
    pub file_name: String,
    /// Content-Type
    pub content_type: String,
    /// ファイルの内容
    pub data: Vec<u8>,
    /// ログイン中のユーザーのメールアドレス
    pub email: String,
}

/// 領収書アップロード（仮レコード作成）のレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBill {
    pub file_url: String,
    /// 仮レコードのキー。送信時の更新対象になる
    pub key: String,
}
