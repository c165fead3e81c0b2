//! 归档流水线模块
//!
//! 单次扫描，严格顺序处理：每个文件走完 匹配 → 解析目标 → 复制校验删除
//! 之后才处理下一个。单个文件出错只跳过该文件，不会中断整批。

use crate::classifier::Classifier;
use crate::error::{ArchiveError, Result};
use crate::resolver::{self, Category};
use crate::transfer::{self, TransferOutcome};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 一次运行的统计（成功与各类跳过分开计数）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArchiveStats {
    /// 成功归档（复制、校验、删除本地均完成）
    pub archived: usize,
    /// 预览模式下可归档的文件数
    pub planned: usize,
    /// 文件名不符合规则，静默跳过
    pub unmatched: usize,
    /// 匹配成功但关键字不在分类表中
    pub unknown_category: usize,
    /// 复制后大小不一致，本地保留
    pub size_mismatch: usize,
    /// 复制失败或处理出错
    pub failed: usize,
}

/// 流水线运行选项
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// 打印被静默跳过的文件
    pub verbose: bool,
    /// 预览模式：只计算目标路径，不复制不删除
    pub dry_run: bool,
}

/// 扫描目录并处理所有顶层文件
///
/// 不递归子目录；跳过程序自身的可执行文件。文件按名称排序，
/// 保证输出顺序稳定。
pub fn process_dir(
    scan_dir: &Path,
    remote_root: &Path,
    classifier: &Classifier,
    categories: &[Category],
    opts: &RunOptions,
) -> Result<ArchiveStats> {
    if !scan_dir.is_dir() {
        return Err(ArchiveError::DirNotFound(scan_dir.display().to_string()));
    }

    let files = list_files(scan_dir);
    let mut stats = ArchiveStats::default();

    if files.is_empty() {
        println!("   当前目录下没有文件。");
        return Ok(stats);
    }

    let own_exe = own_executable_name();

    for (path, file_name) in files {
        if own_exe.as_deref() == Some(file_name.as_str()) || file_name.ends_with(".exe") {
            continue;
        }

        process_file(&path, &file_name, remote_root, classifier, categories, opts, &mut stats);
    }

    Ok(stats)
}

/// 处理单个文件；任何错误都只影响该文件
fn process_file(
    path: &Path,
    file_name: &str,
    remote_root: &Path,
    classifier: &Classifier,
    categories: &[Category],
    opts: &RunOptions,
    stats: &mut ArchiveStats,
) {
    let case = match classifier.classify(file_name) {
        Some(case) => case,
        None => {
            if opts.verbose {
                println!("   跳过非目标文件: {}", file_name);
            }
            stats.unmatched += 1;
            return;
        }
    };

    println!("\n🔍 处理文件: {}", file_name);

    let dest_dir = match resolver::resolve(remote_root, categories, &case) {
        Some(dir) => dir,
        None => {
            println!("   ⚠️ 未知分类，跳过。");
            stats.unknown_category += 1;
            return;
        }
    };

    println!("   📂 目标: {}", dest_dir.display());

    if opts.dry_run {
        stats.planned += 1;
        return;
    }

    println!("   🚀 上传中...");
    match transfer::archive_file(path, &dest_dir) {
        Ok(TransferOutcome::Archived { .. }) => {
            println!("   ✅ 成功！本地文件已删除。");
            stats.archived += 1;
        }
        Ok(TransferOutcome::SizeMismatch { local, remote }) => {
            println!("   ⚠️ 大小不一致（本地 {} 字节，远端 {} 字节），已保留本地文件。", local, remote);
            stats.size_mismatch += 1;
        }
        Ok(TransferOutcome::CopyMissing) => {
            println!("   ❌ 上传失败。");
            stats.failed += 1;
        }
        Err(e) => {
            println!("   ❌ 出错: {}", e);
            stats.failed += 1;
        }
    }
}

/// 列出目录顶层的普通文件，按文件名排序
fn list_files(scan_dir: &Path) -> Vec<(PathBuf, String)> {
    let mut files: Vec<(PathBuf, String)> = WalkDir::new(scan_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            (e.path().to_path_buf(), name)
        })
        .collect();

    files.sort_by(|a, b| a.1.cmp(&b.1));
    files
}

/// 程序自身可执行文件的名称（归档时排除）
fn own_executable_name() -> Option<String> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
}
