use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 受众类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub enum AudienceKind {
    Class,      // 按班级下发
    Group,      // 按小组下发
    Individual, // 指定学习者下发
}

impl AudienceKind {
    pub const CLASS: &'static str = "class";
    pub const GROUP: &'static str = "group";
    pub const INDIVIDUAL: &'static str = "individual";
}

impl<'de> Deserialize<'de> for AudienceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AudienceKind::CLASS => Ok(AudienceKind::Class),
            AudienceKind::GROUP => Ok(AudienceKind::Group),
            AudienceKind::INDIVIDUAL => Ok(AudienceKind::Individual),
            _ => Err(serde::de::Error::custom(format!(
                "无效的受众类型: '{s}'. 支持的类型: class, group, individual"
            ))),
        }
    }
}

impl std::fmt::Display for AudienceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudienceKind::Class => write!(f, "{}", AudienceKind::CLASS),
            AudienceKind::Group => write!(f, "{}", AudienceKind::GROUP),
            AudienceKind::Individual => write!(f, "{}", AudienceKind::INDIVIDUAL),
        }
    }
}

impl std::str::FromStr for AudienceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AudienceKind::CLASS => Ok(AudienceKind::Class),
            AudienceKind::GROUP => Ok(AudienceKind::Group),
            AudienceKind::INDIVIDUAL => Ok(AudienceKind::Individual),
            _ => Err(format!("Invalid audience kind: {s}")),
        }
    }
}

// 测评管理状态（教师视角生命周期）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub enum AssessmentStatus {
    Draft,     // 草稿，学习者不可见
    Scheduled, // 已排期，按日期窗口生效
    Active,    // 已下发（立即生效，无视开始日期）
    Cancelled, // 已取消，终态
}

impl AssessmentStatus {
    pub const DRAFT: &'static str = "draft";
    pub const SCHEDULED: &'static str = "scheduled";
    pub const ACTIVE: &'static str = "active";
    pub const CANCELLED: &'static str = "cancelled";

    /// 学习者是否可见该状态下的测评
    pub fn is_learner_visible(self) -> bool {
        matches!(self, AssessmentStatus::Scheduled | AssessmentStatus::Active)
    }

    /// 状态机合法迁移判断
    ///
    /// draft -> scheduled -> active，单向；cancelled 仅可自 scheduled/active
    /// 进入且为终态。cancelled -> cancelled 视为幂等取消，放行。
    pub fn can_transition_to(self, next: AssessmentStatus) -> bool {
        use AssessmentStatus::*;
        matches!(
            (self, next),
            (Draft, Scheduled)
                | (Scheduled, Active)
                | (Scheduled, Cancelled)
                | (Active, Cancelled)
                | (Cancelled, Cancelled)
        )
    }

    /// 日期是否仍可调整（仅草稿与已排期）
    pub fn allows_reschedule(self) -> bool {
        matches!(self, AssessmentStatus::Draft | AssessmentStatus::Scheduled)
    }
}

impl<'de> Deserialize<'de> for AssessmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AssessmentStatus::DRAFT => Ok(AssessmentStatus::Draft),
            AssessmentStatus::SCHEDULED => Ok(AssessmentStatus::Scheduled),
            AssessmentStatus::ACTIVE => Ok(AssessmentStatus::Active),
            AssessmentStatus::CANCELLED => Ok(AssessmentStatus::Cancelled),
            _ => Err(serde::de::Error::custom(format!(
                "无效的测评状态: '{s}'. 支持的状态: draft, scheduled, active, cancelled"
            ))),
        }
    }
}

impl std::fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentStatus::Draft => write!(f, "{}", AssessmentStatus::DRAFT),
            AssessmentStatus::Scheduled => write!(f, "{}", AssessmentStatus::SCHEDULED),
            AssessmentStatus::Active => write!(f, "{}", AssessmentStatus::ACTIVE),
            AssessmentStatus::Cancelled => write!(f, "{}", AssessmentStatus::CANCELLED),
        }
    }
}

impl std::str::FromStr for AssessmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AssessmentStatus::DRAFT => Ok(AssessmentStatus::Draft),
            AssessmentStatus::SCHEDULED => Ok(AssessmentStatus::Scheduled),
            AssessmentStatus::ACTIVE => Ok(AssessmentStatus::Active),
            AssessmentStatus::CANCELLED => Ok(AssessmentStatus::Cancelled),
            _ => Err(format!("Invalid assessment status: {s}")),
        }
    }
}

// 学习者视角进度状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub enum AssessmentProgressStatus {
    Upcoming,   // 未开始
    InProgress, // 进行中
    Missed,     // 已错过
    Completed,  // 已完成
}

impl std::fmt::Display for AssessmentProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentProgressStatus::Upcoming => write!(f, "upcoming"),
            AssessmentProgressStatus::InProgress => write!(f, "in_progress"),
            AssessmentProgressStatus::Missed => write!(f, "missed"),
            AssessmentProgressStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct Assessment {
    // 唯一 ID
    pub id: i64,
    // 关联的题组 ID（题目内容归属题组）
    pub review_id: i64,
    // 测评标题
    pub title: String,
    // 学科
    pub subject: String,
    // 年级
    pub grade: String,
    // 测评说明
    pub description: Option<String>,
    // 开始日期（含当日）
    pub start_date: NaiveDate,
    // 截止日期（含当日）
    pub end_date: NaiveDate,
    // 管理状态
    pub status: AssessmentStatus,
    // 受众类型，决定下列三个集合中哪一个生效
    pub audience: AudienceKind,
    // 目标班级 ID 集合
    pub class_ids: Vec<i64>,
    // 目标小组 ID 集合
    pub group_ids: Vec<i64>,
    // 目标学习者 ID 集合
    pub learner_ids: Vec<i64>,
    // 创建者 ID
    pub created_by: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assessment {
    /// 受众解析：该测评是否适用于指定学习者
    ///
    /// 仅与受众类型匹配的集合参与判断，其余两个集合一概忽略；
    /// 自身集合为空时不适用于任何人。纯谓词，无副作用。
    pub fn applies_to(&self, learner_id: i64, classroom_ids: &[i64], group_ids: &[i64]) -> bool {
        match self.audience {
            AudienceKind::Class => self.class_ids.iter().any(|id| classroom_ids.contains(id)),
            AudienceKind::Group => self.group_ids.iter().any(|id| group_ids.contains(id)),
            AudienceKind::Individual => self.learner_ids.contains(&learner_id),
        }
    }

    /// 受众类型对应的目标集合
    pub fn audience_targets(&self) -> &[i64] {
        match self.audience {
            AudienceKind::Class => &self.class_ids,
            AudienceKind::Group => &self.group_ids,
            AudienceKind::Individual => &self.learner_ids,
        }
    }

    /// 时间分类：按注入的"今天"与完成情况得出学习者视角状态
    ///
    /// 已完成优先于日期判断；日期比较按自然日（含边界）。
    /// 前置条件：调用方已确认 applies_to 为真。
    pub fn progress_status(
        &self,
        today: NaiveDate,
        has_completed: bool,
    ) -> AssessmentProgressStatus {
        if has_completed {
            return AssessmentProgressStatus::Completed;
        }
        if today < self.start_date {
            AssessmentProgressStatus::Upcoming
        } else if today <= self.end_date {
            AssessmentProgressStatus::InProgress
        } else {
            AssessmentProgressStatus::Missed
        }
    }

    /// 学习者列表与统计使用的最终状态
    ///
    /// 在纯日期分类之上叠加"立即下发"语义：active 状态的测评即便
    /// 未到开始日期，也按进行中呈现。
    pub fn effective_progress_status(
        &self,
        today: NaiveDate,
        has_completed: bool,
    ) -> AssessmentProgressStatus {
        let progress = self.progress_status(today, has_completed);
        if self.status == AssessmentStatus::Active
            && progress == AssessmentProgressStatus::Upcoming
        {
            return AssessmentProgressStatus::InProgress;
        }
        progress
    }

    /// 距截止日期的有符号天数：正数为剩余天数，负数为已过期天数
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }

    /// 日期窗口是否合法（截止不得早于开始）
    pub fn has_valid_window(&self) -> bool {
        self.end_date >= self.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_assessment(audience: AudienceKind) -> Assessment {
        Assessment {
            id: 1,
            review_id: 10,
            title: "期中测评".to_string(),
            subject: "math".to_string(),
            grade: "grade-8".to_string(),
            description: None,
            start_date: date(2025, 3, 20),
            end_date: date(2025, 3, 27),
            status: AssessmentStatus::Scheduled,
            audience,
            class_ids: vec![5, 9],
            group_ids: vec![3],
            learner_ids: vec![42],
            created_by: 7,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_applies_to_class_intersection() {
        let assessment = sample_assessment(AudienceKind::Class);
        assert!(assessment.applies_to(100, &[9, 12], &[]));
        assert!(!assessment.applies_to(100, &[1, 2], &[]));
    }

    #[test]
    fn test_applies_to_group_intersection() {
        let assessment = sample_assessment(AudienceKind::Group);
        assert!(assessment.applies_to(100, &[], &[3, 8]));
        assert!(!assessment.applies_to(100, &[], &[8]));
    }

    #[test]
    fn test_applies_to_individual() {
        let assessment = sample_assessment(AudienceKind::Individual);
        assert!(assessment.applies_to(42, &[], &[]));
        assert!(!assessment.applies_to(43, &[], &[]));
    }

    #[test]
    fn test_applies_to_ignores_other_sets() {
        // 受众为班级时，小组/个人集合即使匹配也不生效
        let mut assessment = sample_assessment(AudienceKind::Class);
        assessment.class_ids = vec![5];
        assert!(!assessment.applies_to(42, &[1], &[3]));
    }

    #[test]
    fn test_empty_target_set_applies_to_nobody() {
        let mut assessment = sample_assessment(AudienceKind::Class);
        assessment.class_ids.clear();
        assert!(!assessment.applies_to(100, &[9], &[]));

        let mut assessment = sample_assessment(AudienceKind::Individual);
        assessment.learner_ids.clear();
        assert!(!assessment.applies_to(42, &[], &[]));
    }

    #[test]
    fn test_progress_status_completed_wins() {
        let assessment = sample_assessment(AudienceKind::Class);
        // 无论日期落在窗口前、内、后，已完成一律视为已完成
        for today in [date(2025, 3, 1), date(2025, 3, 22), date(2025, 4, 10)] {
            assert_eq!(
                assessment.progress_status(today, true),
                AssessmentProgressStatus::Completed
            );
        }
    }

    #[test]
    fn test_progress_status_window() {
        let assessment = sample_assessment(AudienceKind::Class);
        assert_eq!(
            assessment.progress_status(date(2025, 3, 19), false),
            AssessmentProgressStatus::Upcoming
        );
        assert_eq!(
            assessment.progress_status(date(2025, 3, 20), false),
            AssessmentProgressStatus::InProgress
        );
        assert_eq!(
            assessment.progress_status(date(2025, 3, 22), false),
            AssessmentProgressStatus::InProgress
        );
        assert_eq!(
            assessment.progress_status(date(2025, 3, 27), false),
            AssessmentProgressStatus::InProgress
        );
        assert_eq!(
            assessment.progress_status(date(2025, 3, 28), false),
            AssessmentProgressStatus::Missed
        );
    }

    #[test]
    fn test_progress_status_single_day_window() {
        let mut assessment = sample_assessment(AudienceKind::Class);
        assessment.start_date = date(2025, 5, 1);
        assessment.end_date = date(2025, 5, 1);
        assert_eq!(
            assessment.progress_status(date(2025, 5, 1), false),
            AssessmentProgressStatus::InProgress
        );
    }

    #[test]
    fn test_progress_status_missed_then_completed() {
        let assessment = sample_assessment(AudienceKind::Class);
        assert_eq!(
            assessment.progress_status(date(2025, 3, 30), false),
            AssessmentProgressStatus::Missed
        );
        assert_eq!(
            assessment.progress_status(date(2025, 3, 30), true),
            AssessmentProgressStatus::Completed
        );
    }

    #[test]
    fn test_effective_status_send_now_bypasses_upcoming() {
        let mut assessment = sample_assessment(AudienceKind::Class);
        let before_window = date(2025, 3, 10);
        // 已排期且未开始：保持未开始
        assert_eq!(
            assessment.effective_progress_status(before_window, false),
            AssessmentProgressStatus::Upcoming
        );
        // 立即下发后：未到开始日期也按进行中
        assessment.status = AssessmentStatus::Active;
        assert_eq!(
            assessment.effective_progress_status(before_window, false),
            AssessmentProgressStatus::InProgress
        );
        // 已完成与已错过不受影响
        assert_eq!(
            assessment.effective_progress_status(before_window, true),
            AssessmentProgressStatus::Completed
        );
        assert_eq!(
            assessment.effective_progress_status(date(2025, 4, 1), false),
            AssessmentProgressStatus::Missed
        );
    }

    #[test]
    fn test_days_until_due_signed() {
        let assessment = sample_assessment(AudienceKind::Class);
        assert_eq!(assessment.days_until_due(date(2025, 3, 22)), 5);
        assert_eq!(assessment.days_until_due(date(2025, 3, 27)), 0);
        assert_eq!(assessment.days_until_due(date(2025, 3, 30)), -3);
    }

    #[test]
    fn test_status_transitions() {
        use AssessmentStatus::*;
        assert!(Draft.can_transition_to(Scheduled));
        assert!(Scheduled.can_transition_to(Active));
        assert!(Scheduled.can_transition_to(Cancelled));
        assert!(Active.can_transition_to(Cancelled));
        // 幂等取消
        assert!(Cancelled.can_transition_to(Cancelled));

        // 非法迁移
        assert!(!Draft.can_transition_to(Active));
        assert!(!Draft.can_transition_to(Cancelled));
        assert!(!Active.can_transition_to(Scheduled));
        assert!(!Cancelled.can_transition_to(Scheduled));
        assert!(!Cancelled.can_transition_to(Active));
        assert!(!Scheduled.can_transition_to(Draft));
    }

    #[test]
    fn test_learner_visibility() {
        assert!(!AssessmentStatus::Draft.is_learner_visible());
        assert!(AssessmentStatus::Scheduled.is_learner_visible());
        assert!(AssessmentStatus::Active.is_learner_visible());
        assert!(!AssessmentStatus::Cancelled.is_learner_visible());
    }

    #[test]
    fn test_applies_to_matches_set_intersection() {
        // 受众解析与朴素集合交集逐一对照，集合由确定性伪随机序列生成
        fn xorshift(seed: &mut u64) -> u64 {
            *seed ^= *seed << 13;
            *seed ^= *seed >> 7;
            *seed ^= *seed << 17;
            *seed
        }
        fn pick_ids(seed: &mut u64) -> Vec<i64> {
            let count = xorshift(seed) % 5;
            (0..count).map(|_| (xorshift(seed) % 20) as i64).collect()
        }

        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        for _ in 0..200 {
            let mut assessment = sample_assessment(AudienceKind::Class);
            assessment.class_ids = pick_ids(&mut seed);
            assessment.group_ids = pick_ids(&mut seed);
            assessment.learner_ids = pick_ids(&mut seed);
            let classroom_ids = pick_ids(&mut seed);
            let group_ids = pick_ids(&mut seed);
            let learner_id = (xorshift(&mut seed) % 20) as i64;

            let class_hit = assessment
                .class_ids
                .iter()
                .any(|id| classroom_ids.contains(id));
            let group_hit = assessment.group_ids.iter().any(|id| group_ids.contains(id));
            let individual_hit = assessment.learner_ids.contains(&learner_id);

            assessment.audience = AudienceKind::Class;
            assert_eq!(
                assessment.applies_to(learner_id, &classroom_ids, &group_ids),
                class_hit
            );
            assessment.audience = AudienceKind::Group;
            assert_eq!(
                assessment.applies_to(learner_id, &classroom_ids, &group_ids),
                group_hit
            );
            assessment.audience = AudienceKind::Individual;
            assert_eq!(
                assessment.applies_to(learner_id, &classroom_ids, &group_ids),
                individual_hit
            );
        }
    }

    #[test]
    fn test_audience_kind_parse() {
        use std::str::FromStr;
        assert_eq!(AudienceKind::from_str("class"), Ok(AudienceKind::Class));
        assert_eq!(AudienceKind::from_str("group"), Ok(AudienceKind::Group));
        assert_eq!(
            AudienceKind::from_str("individual"),
            Ok(AudienceKind::Individual)
        );
        assert!(AudienceKind::from_str("school").is_err());
    }
}
