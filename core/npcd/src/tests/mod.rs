//! サービスレベルのフローテスト
