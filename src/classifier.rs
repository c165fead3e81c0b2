//! 文件名分类模块
//!
//! 判断文件名是否包含可识别的案件编号并提取字段。
//! 匹配规则: 4位年份 + 任意字符(非贪婪) + 关键字 + 任意字符(非贪婪)
//! + 可选的「第」 + 数字案号 + 「号」。只取最左侧的第一个匹配。

use crate::error::{ArchiveError, Result};
use crate::resolver::Category;
use regex::Regex;

/// 从文件名提取出的案件信息（仅在处理单个文件期间存在）
#[derive(Debug, Clone, PartialEq)]
pub struct CaseId {
    /// 4位年份
    pub year: String,
    /// 案件类型关键字
    pub keyword: String,
    /// 案号（数字串）
    pub number: String,
}

/// 文件名分类器
pub struct Classifier {
    pattern: Regex,
}

impl Classifier {
    /// 根据关键字列表构建分类器
    pub fn new(keywords: &[&str]) -> Result<Self> {
        if keywords.is_empty() {
            return Err(ArchiveError::Pattern("关键字列表为空".into()));
        }

        let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
        let source = format!(r"(\d{{4}}).*?({}).*?第?(\d+)号", alternatives.join("|"));
        let pattern = Regex::new(&source)
            .map_err(|e| ArchiveError::Pattern(e.to_string()))?;

        Ok(Self { pattern })
    }

    /// 根据分类表构建分类器（关键字取分类表中的全部关键字）
    pub fn for_categories(categories: &[Category]) -> Result<Self> {
        let keywords: Vec<&str> = categories.iter().map(|c| c.keyword.as_str()).collect();
        Self::new(&keywords)
    }

    /// 对文件名分类；不符合规则时返回None（不是错误）
    pub fn classify(&self, filename: &str) -> Option<CaseId> {
        let caps = self.pattern.captures(filename)?;
        Some(CaseId {
            year: caps[1].to_string(),
            keyword: caps[2].to_string(),
            number: caps[3].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&["临鉴字", "精鉴字", "物鉴字"]).unwrap()
    }

    #[test]
    fn test_classify_full_form() {
        let case = classifier().classify("2025年临鉴字第7号.pdf").unwrap();
        assert_eq!(case.year, "2025");
        assert_eq!(case.keyword, "临鉴字");
        assert_eq!(case.number, "7");
    }

    #[test]
    fn test_classify_without_marker() {
        // 「第」是可选的
        let case = classifier().classify("2025物鉴字9号.doc").unwrap();
        assert_eq!(case.year, "2025");
        assert_eq!(case.keyword, "物鉴字");
        assert_eq!(case.number, "9");
    }

    #[test]
    fn test_classify_with_noise_between_fields() {
        let case = classifier().classify("副本-2024年度精鉴字(加急)第123号-最终版.docx").unwrap();
        assert_eq!(case.year, "2024");
        assert_eq!(case.keyword, "精鉴字");
        assert_eq!(case.number, "123");
    }

    #[test]
    fn test_classify_unmatched() {
        assert!(classifier().classify("report_final.pdf").is_none());
        assert!(classifier().classify("临鉴字第7号.pdf").is_none()); // 缺年份
        assert!(classifier().classify("2025年临鉴字.pdf").is_none()); // 缺案号
    }

    #[test]
    fn test_classify_uses_leftmost_match() {
        // 多个候选时取最左侧的匹配
        let case = classifier().classify("1999备份2025临鉴字第3号.pdf").unwrap();
        assert_eq!(case.year, "1999");
        assert_eq!(case.number, "3");
    }

    #[test]
    fn test_classify_first_keyword_wins() {
        let case = classifier().classify("2025临鉴字第1号物鉴字第2号.pdf").unwrap();
        assert_eq!(case.keyword, "临鉴字");
        assert_eq!(case.number, "1");
    }

    #[test]
    fn test_empty_keywords_rejected() {
        assert!(Classifier::new(&[]).is_err());
    }

    #[test]
    fn test_keywords_are_escaped() {
        // 关键字中的正则元字符按字面处理
        let c = Classifier::new(&["a.b字"]).unwrap();
        assert!(c.classify("2025axb字第1号").is_none());
        assert!(c.classify("2025a.b字第1号").is_some());
    }
}
