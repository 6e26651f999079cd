//! 補完プロバイダ
//!
//! プロンプトを受け取りテキスト 1 件を返す抽象と、その実装
//! （OpenAI 互換 API / ネットワーク不要のモック）を提供する。

pub mod mock;
pub mod openai;
pub mod provider;

pub use mock::MockProvider;
pub use openai::OpenAiProvider;
pub use provider::CompletionProvider;
