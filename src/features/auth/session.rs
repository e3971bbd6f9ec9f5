//! セッションアクセサー
//!
//! ログイン中のユーザー情報と認証トークンを永続化されたキー・バリューストアから読み書きする。
//! 各コントローラーには生成時に注入する。

use super::models::{StoredSession, User};
use crate::shared::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// セッション情報へのアクセス
pub trait SessionAccessor: Send + Sync {
    /// ログイン中のユーザーを取得する
    ///
    /// # エラー
    /// ユーザーが保存されていない場合は`AppError::Session`
    fn get_user(&self) -> AppResult<User>;

    /// ログイン中のユーザーを保存する
    fn set_user(&self, user: &User) -> AppResult<()>;

    /// 認証トークンを取得する
    fn get_token(&self) -> AppResult<Option<String>>;

    /// 認証トークンを保存する
    fn set_token(&self, token: &str) -> AppResult<()>;

    /// セッションをすべて削除する
    fn clear(&self) -> AppResult<()>;
}

fn missing_user() -> AppError {
    AppError::session("ログイン中のユーザー情報がありません")
}

/// JSONファイルにセッションを保存するストア
pub struct FileSessionStore {
    /// セッションファイルのパス
    path: PathBuf,
    /// ファイルアクセスの直列化用
    lock: Mutex<()>,
}

impl FileSessionStore {
    /// 新しいFileSessionStoreを作成する
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// セッションファイルのパスを取得
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルからセッションを読み込む（ファイルがない場合は空のセッション）
    fn read(&self) -> AppResult<StoredSession> {
        if !self.path.exists() {
            return Ok(StoredSession::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StoredSession::default());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// セッションをファイルに書き込む
    fn write(&self, session: &StoredSession) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
                log::debug!("セッションディレクトリを作成しました: {}", parent.display());
            }
        }

        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// ロックを取得した状態でセッションを更新する
    fn modify<F>(&self, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut StoredSession),
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| AppError::concurrency(format!("セッションロック取得エラー: {e}")))?;

        let mut session = self.read()?;
        f(&mut session);
        self.write(&session)
    }

    fn snapshot(&self) -> AppResult<StoredSession> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| AppError::concurrency(format!("セッションロック取得エラー: {e}")))?;
        self.read()
    }
}

impl SessionAccessor for FileSessionStore {
    fn get_user(&self) -> AppResult<User> {
        self.snapshot()?.user.ok_or_else(missing_user)
    }

    fn set_user(&self, user: &User) -> AppResult<()> {
        self.modify(|session| session.user = Some(user.clone()))?;
        log::info!("ユーザー情報を保存しました: email={}", user.email);
        Ok(())
    }

    fn get_token(&self) -> AppResult<Option<String>> {
        Ok(self.snapshot()?.jwt)
    }

    fn set_token(&self, token: &str) -> AppResult<()> {
        self.modify(|session| session.jwt = Some(token.to_string()))?;
        log::debug!("認証トークンを保存しました");
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.modify(|session| *session = StoredSession::default())?;
        log::info!("セッションを削除しました");
        Ok(())
    }
}

/// メモリ上にセッションを保持するストア
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<StoredSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// ユーザーがログイン済みのストアを作成
    pub fn with_user(user: User) -> Self {
        Self {
            session: Mutex::new(StoredSession {
                user: Some(user),
                jwt: None,
            }),
        }
    }

    fn with_session<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut StoredSession) -> T,
    {
        let mut session = self
            .session
            .lock()
            .map_err(|e| AppError::concurrency(format!("セッションロック取得エラー: {e}")))?;
        Ok(f(&mut *session))
    }
}

impl SessionAccessor for MemorySessionStore {
    fn get_user(&self) -> AppResult<User> {
        self.with_session(|session| session.user.clone())?
            .ok_or_else(missing_user)
    }

    fn set_user(&self, user: &User) -> AppResult<()> {
        self.with_session(|session| session.user = Some(user.clone()))
    }

    fn get_token(&self) -> AppResult<Option<String>> {
        self.with_session(|session| session.jwt.clone())
    }

    fn set_token(&self, token: &str) -> AppResult<()> {
        self.with_session(|session| session.jwt = Some(token.to_string()))
    }

    fn clear(&self) -> AppResult<()> {
        self.with_session(|session| *session = StoredSession::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_file_store() -> (TempDir, FileSessionStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("nested").join("session.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_file_store_missing_user_is_error() {
        let (_temp_dir, store) = create_file_store();

        // 未ログイン状態での読み込みは呼び出し側のエラー
        let result = store.get_user();
        assert!(matches!(result, Err(AppError::Session(_))));
        assert_eq!(store.get_token().unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_user_and_token() {
        let (_temp_dir, store) = create_file_store();

        store.set_user(&User::employee("e@e")).unwrap();
        store.set_token("jwt-token").unwrap();

        // 別インスタンスから同じファイルを読み込む
        let reopened = FileSessionStore::new(store.path().to_path_buf());
        assert_eq!(reopened.get_user().unwrap(), User::employee("e@e"));
        assert_eq!(reopened.get_token().unwrap().as_deref(), Some("jwt-token"));
    }

    #[test]
    fn test_file_store_clear() {
        let (_temp_dir, store) = create_file_store();

        store.set_user(&User::administrator("admin@test.tld")).unwrap();
        store.clear().unwrap();

        assert!(store.get_user().is_err());
        assert_eq!(store.get_token().unwrap(), None);
    }

    #[test]
    fn test_file_store_invalid_json() {
        let (_temp_dir, store) = create_file_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.get_user(), Err(AppError::Json(_))));
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert!(store.get_user().is_err());

        store.set_user(&User::employee("e@e")).unwrap();
        assert_eq!(store.get_user().unwrap().email, "e@e");

        store.clear().unwrap();
        assert!(store.get_user().is_err());
    }

    #[test]
    fn test_memory_store_with_user() {
        let store = MemorySessionStore::with_user(User::employee("a@a"));
        assert_eq!(store.get_user().unwrap(), User::employee("a@a"));
    }
}
