//! 目标路径解析模块
//!
//! 根据分类表和文件名解析出的案件信息，计算归档目标目录。
//! 纯函数，不产生任何文件系统副作用。

use crate::classifier::CaseId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 案件分类
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// 文件名中的关键字（如「临鉴字」）
    pub keyword: String,
    /// 共享目录中的分类文件夹名（如「1.法医临床」）
    pub folder: String,
    /// 特殊分类在案件文件夹之前插入的固定子目录（如「鉴定」）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Category {
    pub fn new(keyword: &str, folder: &str) -> Self {
        Self {
            keyword: keyword.into(),
            folder: folder.into(),
            extra: None,
        }
    }

    pub fn with_extra(keyword: &str, folder: &str, extra: &str) -> Self {
        Self {
            keyword: keyword.into(),
            folder: folder.into(),
            extra: Some(extra.into()),
        }
    }
}

/// 默认分类表（当前部署的三个分类）
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("临鉴字", "1.法医临床"),
        Category::new("精鉴字", "2.法医精神"),
        Category::with_extra("物鉴字", "3.法医物证", "鉴定"),
    ]
}

/// 按关键字查找分类
pub fn lookup<'a>(categories: &'a [Category], keyword: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.keyword == keyword)
}

/// 案件文件夹名: (年份)关键字第N号
pub fn case_folder_name(case: &CaseId) -> String {
    format!("({}){}第{}号", case.year, case.keyword, case.number)
}

/// 计算归档目标目录
///
/// 路径结构: 根目录/年份/分类文件夹[/特殊子目录]/案件文件夹
/// 关键字不在分类表中时返回None（未知分类，由调用方跳过）。
pub fn resolve(root: &Path, categories: &[Category], case: &CaseId) -> Option<PathBuf> {
    let category = lookup(categories, &case.keyword)?;

    let mut dir = root.join(&case.year).join(&category.folder);
    if let Some(ref extra) = category.extra {
        dir = dir.join(extra);
    }
    Some(dir.join(case_folder_name(case)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(year: &str, keyword: &str, number: &str) -> CaseId {
        CaseId {
            year: year.into(),
            keyword: keyword.into(),
            number: number.into(),
        }
    }

    #[test]
    fn test_case_folder_name() {
        let name = case_folder_name(&case("2025", "临鉴字", "7"));
        assert_eq!(name, "(2025)临鉴字第7号");
    }

    #[test]
    fn test_resolve_normal_category() {
        let categories = default_categories();
        let dir = resolve(Path::new("/nas"), &categories, &case("2025", "临鉴字", "7")).unwrap();
        assert_eq!(dir, Path::new("/nas/2025/1.法医临床/(2025)临鉴字第7号"));
    }

    #[test]
    fn test_resolve_special_category_has_extra_segment() {
        let categories = default_categories();
        let dir = resolve(Path::new("/nas"), &categories, &case("2025", "物鉴字", "9")).unwrap();
        assert_eq!(dir, Path::new("/nas/2025/3.法医物证/鉴定/(2025)物鉴字第9号"));
    }

    #[test]
    fn test_resolve_other_categories_have_no_extra_segment() {
        let categories = default_categories();
        for keyword in ["临鉴字", "精鉴字"] {
            let dir = resolve(Path::new("/nas"), &categories, &case("2024", keyword, "1")).unwrap();
            assert!(!dir.to_string_lossy().contains("鉴定"));
        }
    }

    #[test]
    fn test_resolve_unknown_keyword() {
        let categories = default_categories();
        assert!(resolve(Path::new("/nas"), &categories, &case("2025", "未知字", "3")).is_none());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let categories = default_categories();
        let c = case("2025", "精鉴字", "12");
        let a = resolve(Path::new("/nas"), &categories, &c);
        let b = resolve(Path::new("/nas"), &categories, &c);
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_serde_roundtrip() {
        let categories = default_categories();
        let json = serde_json::to_string(&categories).unwrap();
        let parsed: Vec<Category> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, categories);
        // extra为None时不输出该字段
        assert!(!json.contains("\"extra\":null"));
    }
}
