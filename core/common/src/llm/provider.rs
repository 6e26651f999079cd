//! 補完プロバイダのトレイト定義
//!
//! 各プロバイダ（OpenAI 互換・モック）はこのトレイトを実装する。
//! 呼び出し側はプロバイダの種別を意識せず `complete` だけを使う。

use crate::error::Error;
use async_trait::async_trait;

/// 単発のテキスト補完を行うプロバイダ
///
/// system 指示とユーザーメッセージを渡し、補完テキスト 1 件を受け取る。
/// 会話履歴はユーザーメッセージ側の文面に畳み込む前提で、
/// メッセージ列の組み立てはプロバイダ内部に閉じる。
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// プロバイダ名を返す（ログ・ヘルスチェック用）
    fn name(&self) -> &str;

    /// 記録用のモデル識別子を返す（モックの場合は "mock"）
    fn model(&self) -> &str;

    /// 補完リクエストを 1 回実行し、生成テキストを返す
    ///
    /// # Arguments
    /// * `system_instruction` - system ロールに入れる指示文
    /// * `user_message` - user ロールに入れる本文
    async fn complete(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> Result<String, Error>;
}
