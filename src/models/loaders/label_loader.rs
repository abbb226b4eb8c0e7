use crate::models::label::{LabelFile, UploadBatch};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 读取单个标签文件
pub async fn load_label_file(path: &Path) -> Result<LabelFile> {
    let content = fs::read(path)
        .await
        .with_context(|| format!("无法读取标签文件: {}", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .with_context(|| format!("无效的文件路径: {}", path.display()))?;

    Ok(LabelFile::new(name, content))
}

/// 从文件夹中加载所有 PDF 标签，按文件名排序
pub async fn load_label_batch(folder_path: &str) -> Result<UploadBatch> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut pdf_paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            pdf_paths.push(path);
        }
    }

    pdf_paths.sort();

    let mut batch = Vec::with_capacity(pdf_paths.len());
    for path in pdf_paths {
        match load_label_file(&path).await {
            Ok(file) => {
                tracing::debug!("已加载: {} ({} 字节)", file.name, file.content.len());
                batch.push(file);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(batch)
}
