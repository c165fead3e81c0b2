//! NAS 连接预检模块
//!
//! 在任何文件传输之前确认共享目录可达。只尝试一次，不重试：
//! 这是一个快速失败的前置检查，不是连接管理器。

use crate::error::{ArchiveError, Result};
use std::path::{Path, PathBuf};

/// 拼接共享根路径: \\host\share
pub fn remote_root(host: &str, share: &str) -> PathBuf {
    PathBuf::from(format!(r"\\{}\{}", host, share))
}

/// 连接共享目录
///
/// Windows 下先清理指向同一服务器的已有连接（避免错误1219：
/// 同一服务器多凭据冲突），再用系统已保存的凭据建立新连接。
/// 失败时把底层命令的原始错误文本放进错误信息。
#[cfg(windows)]
pub fn connect(host: &str, root: &Path) -> Result<()> {
    use regex::Regex;
    use std::process::Command;

    let list = Command::new("net").arg("use").output()?;
    if list.status.success() {
        // 匹配所有指向该服务器的共享路径，例如 \\192.168.0.180\案件
        let pattern = Regex::new(&format!(r"(\\\\{}\\\S+)", regex::escape(host)))
            .map_err(|e| ArchiveError::Pattern(e.to_string()))?;
        let stdout = String::from_utf8_lossy(&list.stdout);
        let shares: std::collections::HashSet<&str> =
            pattern.find_iter(&stdout).map(|m| m.as_str()).collect();
        for share in shares {
            let _ = Command::new("net")
                .args(["use", share, "/delete", "/y"])
                .output();
        }
    }

    let root_str = root.display().to_string();
    let result = Command::new("net").args(["use", &root_str]).output()?;

    if result.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&result.stderr);
        let stdout = String::from_utf8_lossy(&result.stdout);
        let text = if stderr.trim().is_empty() { stdout } else { stderr };
        Err(ArchiveError::Connection(text.trim().to_string()))
    }
}

/// 非 Windows 平台：共享目录应已由系统挂载，只验证根目录可达
#[cfg(not(windows))]
pub fn connect(_host: &str, root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(ArchiveError::Connection(format!(
            "共享目录不可达: {}",
            root.display()
        )))
    }
}
