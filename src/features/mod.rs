/// 機能別モジュール
///
/// 各機能モジュールは、その機能に関連するモデル・ストア・コントローラーを含む
/// 自己完結型のユニットです。
// 機能モジュールの宣言
pub mod auth;
pub mod bills;
pub mod new_bill;
