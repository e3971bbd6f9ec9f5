//! 領収書ファイルの選択と検証

use crate::shared::utils::last_path_segment;
use once_cell::sync::Lazy;
use regex::Regex;

/// 拡張子が不正な場合にユーザーに表示するメッセージ
pub const INVALID_RECEIPT_FORMAT_MESSAGE: &str =
    "Veuillez télécharger un fichier au format jpg, jpeg, ou png uniquement.";

/// 受け付ける拡張子（大文字小文字を区別しない）
static ALLOWED_EXTENSIONS: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)(\.jpg|\.jpeg|\.png)$").ok());

/// ファイル名が受け付け可能な画像形式かどうかを判定する
pub fn is_allowed_receipt(file_name: &str) -> bool {
    ALLOWED_EXTENSIONS
        .as_ref()
        .is_some_and(|regex| regex.is_match(file_name))
}

/// 拡張子からContent-Typeを取得する
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

/// ファイル入力で選択されたファイル
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// ファイル名
    pub name: String,
    /// ファイルの内容
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new<S: Into<String>>(name: S, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// ファイル入力の変更イベント
#[derive(Debug, Clone)]
pub struct FileChangeEvent {
    /// 入力欄の値（ブラウザによっては`C:\fakepath\receipt.png`のような絶対パス）
    pub value: String,
    /// 選択されたファイル
    pub file: Option<SelectedFile>,
    default_prevented: bool,
}

impl FileChangeEvent {
    pub fn new<S: Into<String>>(value: S, file: Option<SelectedFile>) -> Self {
        Self {
            value: value.into(),
            file,
            default_prevented: false,
        }
    }

    /// ファイルを選択したイベントを作成する（入力値はファイル名）
    pub fn with_file(file: SelectedFile) -> Self {
        Self::new(file.name.clone(), Some(file))
    }

    /// 既定動作を抑止する
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// 表示用のファイル名（入力値の最後のパス要素）
    pub fn display_file_name(&self) -> String {
        last_path_segment(&self.value).to_string()
    }
}

/// アップロード完了後に送信まで保持する領収書情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedReceipt {
    pub file_url: String,
    pub file_name: String,
    /// 仮レコードのID
    pub bill_id: String,
}
