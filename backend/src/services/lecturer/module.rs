use crate::error::ApiError;
use crate::services::data_sources::csv::parse_int;
use crate::services::data_sources::{DataFile, TableSource};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::summary::ModuleSummary;
use common::model::table::{RecordSet, Table};
use common::model::trend::DailyClicks;
use common::requests::ModuleQuery;
use std::collections::HashSet;
use std::sync::Arc;

const MODULE_CODE_REQUIRED: &str = "Module code is required";
const ASSESSMENT_DATA_NOT_FOUND: &str = "Assessment data not found";

/// Actix web handler for `GET /lecturer/{module_code}`.
pub(crate) async fn process(
    module_code: web::Path<String>,
    source: web::Data<dyn TableSource>,
) -> impl Responder {
    respond(Some(module_code.into_inner()), source.into_inner()).await
}

/// Actix web handler for `GET /lecturer`, reading `moduleCode` from the query string.
pub(crate) async fn process_query(
    query: web::Query<ModuleQuery>,
    source: web::Data<dyn TableSource>,
) -> impl Responder {
    respond(query.into_inner().module_code, source.into_inner()).await
}

async fn respond(module_code: Option<String>, source: Arc<dyn TableSource>) -> HttpResponse {
    match build_summary(module_code, source).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => e.error_response(),
    }
}

async fn build_summary(
    module_code: Option<String>,
    source: Arc<dyn TableSource>,
) -> Result<ModuleSummary, ApiError> {
    let module_code = module_code
        .filter(|code| !code.is_empty())
        .ok_or(ApiError::BadRequest(MODULE_CODE_REQUIRED))?;
    web::block(move || load_and_summarize(module_code, source.as_ref())).await?
}

fn load_and_summarize(
    module_code: String,
    source: &dyn TableSource,
) -> Result<ModuleSummary, ApiError> {
    let (assessment, vle) = rayon::join(
        || source.table(DataFile::StudentAssessment),
        || source.table(DataFile::StudentVle),
    );

    let assessment = assessment.map_err(|e| {
        if e.is_missing() {
            ApiError::NotFound(ASSESSMENT_DATA_NOT_FOUND)
        } else {
            e.into()
        }
    })?;
    let vle = vle?;

    Ok(summarize(module_code, assessment, &vle))
}

/// Builds the module summary: every assessment row of `module_code`, the distinct
/// students among them, and the module's VLE clicks summed per day.
pub fn summarize(module_code: String, assessment: Arc<Table>, vle: &Table) -> ModuleSummary {
    let module = assessment.column("code_module");
    let student = assessment.column("id_student");
    let mut rows = Vec::new();
    let mut students = HashSet::new();
    for (idx, record) in assessment.records().enumerate() {
        if record.value(module) == module_code {
            rows.push(idx);
            students.insert(record.value(student));
        }
    }
    let students = students.len();

    let vle_module = vle.column("code_module");
    let date = vle.column("date");
    let sum_click = vle.column("sum_click");
    let mut daily = DailyClicks::new();
    for record in vle.records().filter(|r| r.value(vle_module) == module_code) {
        daily.add(parse_int(record.value(date)), parse_int(record.value(sum_click)));
    }

    let total_assessments = rows.len();
    ModuleSummary {
        module_code,
        scores: RecordSet::new(assessment, rows),
        trends: daily.into_trend(),
        students,
        total_assessments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::data_sources::csv::decode;
    use common::model::trend::TrendPoint;

    const ASSESSMENTS: &str = "\
code_module,id_assessment,id_student,score
AAA,1752,11391,78
AAA,1752,28400,70
BBB,1800,11391,55
AAA,1753,11391,80";

    fn summary_of(module: &str, vle: &str) -> ModuleSummary {
        summarize(module.to_string(), Arc::new(decode(ASSESSMENTS)), &decode(vle))
    }

    #[test]
    fn same_day_clicks_are_summed_for_the_requested_module_only() {
        let summary = summary_of(
            "AAA",
            "code_module,date,sum_click\nAAA,1,5\nAAA,1,3\nBBB,2,9",
        );
        assert_eq!(summary.trends, vec![TrendPoint { day: 1, clicks: 8 }]);
    }

    #[test]
    fn trend_days_sort_numerically() {
        let summary = summary_of(
            "AAA",
            "code_module,date,sum_click\nAAA,10,1\nAAA,9,2\nAAA,-5,3\nAAA,x,4\nAAA,9,bad",
        );
        let days: Vec<i64> = summary.trends.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![-5, 0, 9, 10]);
        let clicks: i64 = summary.trends.iter().map(|p| p.clicks).sum();
        assert_eq!(clicks, 10);
        assert_eq!(summary.trends[2], TrendPoint { day: 9, clicks: 2 });
    }

    #[test]
    fn scores_keep_matching_rows_in_file_order() {
        let summary = summary_of("AAA", "code_module,date,sum_click");
        assert_eq!(summary.total_assessments, 3);
        assert_eq!(summary.scores.len(), 3);
        let scores: Vec<&str> = summary
            .scores
            .records()
            .filter_map(|r| r.get("score"))
            .collect();
        assert_eq!(scores, vec!["78", "70", "80"]);
        assert!(summary.trends.is_empty());
    }

    #[test]
    fn students_are_counted_once_per_id() {
        let summary = summary_of("AAA", "code_module,date,sum_click");
        assert_eq!(summary.students, 2);
    }

    #[test]
    fn module_match_is_exact() {
        let summary = summary_of("aaa", "code_module,date,sum_click\nAAA,1,1");
        assert_eq!(summary.total_assessments, 0);
        assert_eq!(summary.students, 0);
        assert!(summary.trends.is_empty());
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let summary = summary_of("BBB", "code_module,date,sum_click\nBBB,2,9");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["moduleCode"], "BBB");
        assert_eq!(json["totalAssessments"], 1);
        assert_eq!(json["students"], 1);
        assert_eq!(json["trends"], serde_json::json!([{"day": 2, "clicks": 9}]));
        assert_eq!(json["scores"][0]["id_student"], "11391");
    }
}
