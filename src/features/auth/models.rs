use serde::{Deserialize, Serialize};

/// ユーザーの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    /// 従業員（経費を提出する）
    Employee,
    /// 管理者（提出された経費を確認する）
    Administrator,
}

/// ログイン中のユーザー情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// ユーザー種別
    #[serde(rename = "type")]
    pub user_type: UserType,
    /// メールアドレス
    #[serde(default)]
    pub email: String,
}

impl User {
    /// 従業員ユーザーを作成
    pub fn employee<S: Into<String>>(email: S) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }

    /// 管理者ユーザーを作成
    pub fn administrator<S: Into<String>>(email: S) -> Self {
        Self {
            user_type: UserType::Administrator,
            email: email.into(),
        }
    }
}

/// セッションとして永続化される内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// ログイン中のユーザー
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// APIサーバー用の認証トークン
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt: Option<String>,
}
