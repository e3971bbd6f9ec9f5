/// 認証機能のモジュール
///
/// ログインそのものは扱わず、セッションの参照とログアウトのみを提供する
pub mod logout;
pub mod models;
pub mod session;

pub use logout::Logout;
pub use models::{StoredSession, User, UserType};
pub use session::{FileSessionStore, MemorySessionStore, SessionAccessor};
