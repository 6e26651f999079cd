//! NPC プロファイルの読み込み（adapter 層）
//!
//! JSON ドキュメントを 1 ファイル読むだけ。存在しない・壊れている
//! 場合はエラーを返し、既存プロファイルの扱いは usecase 側に任せる。

use crate::domain::NpcProfile;
use common::error::Error;
use std::fs;
use std::path::Path;

/// プロファイル JSON を読み込む
pub fn load_profile(path: &Path) -> Result<NpcProfile, Error> {
    if !path.exists() {
        return Err(Error::config(format!(
            "NPC profile not found at {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    let profile: NpcProfile = serde_json::from_str(&content)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_profile_ok() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("current_npc.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{"name":"Rocio","role":"data analyst","personality":"curious","interests":["python"]}}"#
        )
        .unwrap();

        let p = load_profile(&path).unwrap();
        assert_eq!(p.name, "Rocio");
        assert_eq!(p.interests, vec!["python"]);
    }

    #[test]
    fn test_load_profile_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_profile(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_profile_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
