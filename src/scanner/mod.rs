use crate::error::{EvalError, Result};
use pet_eval_common::is_hidden_file;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

/// フォルダ直下の画像ファイルを列挙
///
/// 隠しファイル（`.` で始まる名前）は画像として扱わない。
/// 形式の判定は分類器に任せるため拡張子では絞り込まない。
pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(EvalError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if is_hidden_file(&file_name) {
            tracing::debug!(file = %file_name, "skipping hidden file");
            continue;
        }

        images.push(ImageInfo {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_folder_empty() {
        let temp_dir = std::env::temp_dir().join("pet-eval-test-empty");
        fs::create_dir_all(&temp_dir).unwrap();

        let result = scan_folder(&temp_dir).unwrap();
        assert!(result.is_empty());

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_scan_folder_skips_hidden_and_dirs() {
        let temp_dir = std::env::temp_dir().join("pet-eval-test-hidden");
        fs::create_dir_all(temp_dir.join("nested")).unwrap();

        File::create(temp_dir.join("beagle_01.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join(".DS_Store")).unwrap().write_all(b"meta").unwrap();
        File::create(temp_dir.join("nested").join("pug_01.jpg")).unwrap();

        let result = scan_folder(&temp_dir).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "beagle_01.jpg");

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_images_sorted_by_filename() {
        let temp_dir = std::env::temp_dir().join("pet-eval-test-sort");
        fs::create_dir_all(&temp_dir).unwrap();

        File::create(temp_dir.join("c.jpg")).unwrap();
        File::create(temp_dir.join("a.jpg")).unwrap();
        File::create(temp_dir.join("b.jpg")).unwrap();

        let result = scan_folder(&temp_dir).unwrap();
        assert_eq!(result[0].file_name, "a.jpg");
        assert_eq!(result[1].file_name, "b.jpg");
        assert_eq!(result[2].file_name, "c.jpg");

        fs::remove_dir_all(&temp_dir).ok();
    }
}
