//! 成绩单汇总计算
//!
//! 总分、满分、百分比与及格判定，全部由当前成绩列表即时计算，不落库。

use serde::Serialize;
use ts_rs::TS;

/// 及格线（百分比）
pub const PASS_PERCENTAGE: f64 = 33.0;

/// 参与汇总的一行成绩
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkLine {
    pub obtained: f64,
    pub max: f64,
}

impl MarkLine {
    pub fn new(obtained: f64, max: f64) -> Self {
        Self { obtained, max }
    }

    /// 从存储的十进制字符串构造，无法解析的得分按 0 计
    pub fn from_stored(obtained: &str, max_marks: i32) -> Self {
        let obtained = obtained
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        Self::new(obtained, f64::from(max_marks))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../frontend/src/types/generated/marksheet.ts")]
pub enum ResultStatus {
    Passed,
    Failed,
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultStatus::Passed => write!(f, "PASSED"),
            ResultStatus::Failed => write!(f, "FAILED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marksheet.ts")]
pub struct MarkSummary {
    pub total_obtained: f64,
    pub total_max: f64,
    pub percentage: f64,
    // 保留两位小数的百分比，直接用于显示
    pub percentage_display: String,
    pub status: ResultStatus,
}

impl MarkSummary {
    pub fn compute<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = MarkLine>,
    {
        let (total_obtained, total_max) = lines
            .into_iter()
            .fold((0.0, 0.0), |(obtained, max), line| {
                (obtained + line.obtained, max + line.max)
            });

        let percentage = if total_max > 0.0 {
            total_obtained * 100.0 / total_max
        } else {
            0.0
        };

        let status = if percentage >= PASS_PERCENTAGE {
            ResultStatus::Passed
        } else {
            ResultStatus::Failed
        };

        Self {
            total_obtained,
            total_max,
            percentage,
            percentage_display: format!("{percentage:.2}"),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_marks_fail_with_zero_percentage() {
        let summary = MarkSummary::compute(Vec::<MarkLine>::new());
        assert_eq!(summary.total_obtained, 0.0);
        assert_eq!(summary.total_max, 0.0);
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.status, ResultStatus::Failed);
    }

    #[test]
    fn test_passed_summary() {
        let summary =
            MarkSummary::compute([MarkLine::new(40.0, 80.0), MarkLine::new(20.0, 20.0)]);
        assert_eq!(summary.total_obtained, 60.0);
        assert_eq!(summary.total_max, 100.0);
        assert!((summary.percentage - 60.0).abs() < 1e-9);
        assert_eq!(summary.percentage_display, "60.00");
        assert_eq!(summary.status, ResultStatus::Passed);
    }

    #[test]
    fn test_failed_summary() {
        let summary = MarkSummary::compute([MarkLine::new(10.0, 100.0)]);
        assert_eq!(summary.percentage_display, "10.00");
        assert_eq!(summary.status, ResultStatus::Failed);
    }

    #[test]
    fn test_pass_line_is_inclusive() {
        let summary = MarkSummary::compute([MarkLine::new(33.0, 100.0)]);
        assert_eq!(summary.status, ResultStatus::Passed);

        let summary = MarkSummary::compute([MarkLine::new(32.99, 100.0)]);
        assert_eq!(summary.status, ResultStatus::Failed);
    }

    #[test]
    fn test_unparseable_obtained_counts_as_zero() {
        assert_eq!(MarkLine::from_stored("abc", 50), MarkLine::new(0.0, 50.0));
        assert_eq!(MarkLine::from_stored(" 12.5 ", 50), MarkLine::new(12.5, 50.0));
        assert_eq!(MarkLine::from_stored("NaN", 50), MarkLine::new(0.0, 50.0));
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&ResultStatus::Passed).unwrap();
        assert_eq!(json, "\"PASSED\"");
        assert_eq!(ResultStatus::Failed.to_string(), "FAILED");
    }
}
