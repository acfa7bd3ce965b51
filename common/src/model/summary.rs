//! Response bodies served to the dashboards.

use crate::model::distribution::Distribution;
use crate::model::table::RecordSet;
use crate::model::trend::TrendPoint;
use serde::Serialize;

/// Institution-wide overview served by `GET /admin`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    /// Students per `final_result`, with blanks under `"Unknown"`.
    pub outcomes: Distribution,
    /// Registrations per `{code_module}_{code_presentation}`.
    pub enrolments: Distribution,
    pub gender: Distribution,
    /// Always exactly the buckets `0-35`, `35-55` and `55<=`.
    pub age: Distribution,
    /// A bounded sample of raw student rows, in file order.
    pub students: RecordSet,
    /// Row count of the whole student table, not of the sample.
    pub total_students: usize,
}

/// Per-module activity served by `GET /lecturer/{moduleCode}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSummary {
    pub module_code: String,
    /// Every assessment row for the module.
    pub scores: RecordSet,
    /// Daily VLE clicks for the module, ascending by day.
    pub trends: Vec<TrendPoint>,
    /// Distinct `id_student` values among `scores`.
    pub students: usize,
    pub total_assessments: usize,
}
