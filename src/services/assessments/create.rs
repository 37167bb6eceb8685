use tracing::info;

use super::AssessmentService;
use crate::errors::{AssessmentError, Result};
use crate::models::assessments::{
    entities::{Assessment, AssessmentStatus, AudienceKind},
    requests::CreateAssessmentRequest,
};
use crate::utils::validate::{validate_date_range, validate_title};

/// 创建测评
///
/// as_scheduled 为 true 时直接进入 scheduled，否则保存为草稿。
/// 受众类型对应的目标集合必须非空，引用的题组必须存在且至少一题。
pub async fn create_assessment(
    service: &AssessmentService,
    created_by: i64,
    req: CreateAssessmentRequest,
) -> Result<Assessment> {
    let storage = service.storage();

    validate_title(&req.title).map_err(AssessmentError::validation)?;
    validate_date_range(req.start_date, req.end_date).map_err(AssessmentError::validation)?;

    // 受众集合校验：只看与受众类型匹配的集合
    let targets = match req.audience {
        AudienceKind::Class => req.class_ids.as_deref(),
        AudienceKind::Group => req.group_ids.as_deref(),
        AudienceKind::Individual => req.learner_ids.as_deref(),
    };
    if targets.is_none_or(|ids| ids.is_empty()) {
        return Err(AssessmentError::validation(format!(
            "受众类型为 {} 时对应的目标集合不能为空",
            req.audience
        )));
    }

    // 题组校验：存在且至少一题
    let review = storage
        .get_review_by_id(req.review_id)
        .await?
        .ok_or_else(|| AssessmentError::not_found(format!("题组不存在: {}", req.review_id)))?;
    let questions = storage.list_review_questions(review.id).await?;
    if questions.is_empty() {
        return Err(AssessmentError::validation(format!(
            "题组 {} 暂无题目，不能创建测评",
            review.id
        )));
    }

    let status = if req.as_scheduled {
        AssessmentStatus::Scheduled
    } else {
        AssessmentStatus::Draft
    };

    let assessment = storage.create_assessment(created_by, status, req).await?;
    info!(
        assessment_id = assessment.id,
        review_id = assessment.review_id,
        status = %assessment.status,
        "Assessment created"
    );

    Ok(assessment)
}
