//! 单文件传输与校验模块
//!
//! 固定顺序：建目录 → 复制（含修改时间）→ 确认目标存在 → 比对字节大小
//! → 大小一致才删除本地文件。任何一步不满足都保留本地文件。

use crate::error::Result;
use filetime::FileTime;
use std::path::Path;

/// 单文件归档结果
#[derive(Debug, Clone, PartialEq)]
pub enum TransferOutcome {
    /// 复制成功且大小一致，本地文件已删除
    Archived { bytes: u64 },
    /// 大小不一致，本地文件保留（远端副本不清理）
    SizeMismatch { local: u64, remote: u64 },
    /// 复制后目标文件不存在，本地文件保留
    CopyMissing,
}

/// 把一个本地文件归档到目标目录
///
/// 目录创建是幂等的（已存在不报错）。IO错误向上传播，由调用方
/// 按文件隔离处理。
pub fn archive_file(src: &Path, dest_dir: &Path) -> Result<TransferOutcome> {
    let file_name = src
        .file_name()
        .ok_or_else(|| crate::error::ArchiveError::InvalidPath(src.display().to_string()))?;
    let dest = dest_dir.join(file_name);

    std::fs::create_dir_all(dest_dir)?;

    // 复制时点的源文件大小，作为校验基准
    let src_meta = std::fs::metadata(src)?;
    std::fs::copy(src, &dest)?;

    // 保留修改时间
    let mtime = FileTime::from_last_modification_time(&src_meta);
    filetime::set_file_mtime(&dest, mtime)?;

    verify_and_finalize(src, &dest, src_meta.len())
}

/// 校验目标文件并在大小一致时删除源文件
fn verify_and_finalize(src: &Path, dest: &Path, src_len: u64) -> Result<TransferOutcome> {
    if !dest.exists() {
        return Ok(TransferOutcome::CopyMissing);
    }

    let dest_len = std::fs::metadata(dest)?.len();
    if dest_len == src_len {
        std::fs::remove_file(src)?;
        Ok(TransferOutcome::Archived { bytes: src_len })
    } else {
        Ok(TransferOutcome::SizeMismatch {
            local: src_len,
            remote: dest_len,
        })
    }
}
