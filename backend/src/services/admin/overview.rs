use crate::error::ApiError;
use crate::services::data_sources::{DataFile, TableSource};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::distribution::Distribution;
use common::model::summary::AdminSummary;
use common::model::table::{Record, RecordSet, Table};
use std::sync::Arc;

const STUDENT_DATA_NOT_FOUND: &str = "Student data files not found";
const UNKNOWN: &str = "Unknown";
const STUDENT_SAMPLE_SIZE: usize = 100;

/// The only age bands reported; other values in `age_band` are not counted.
pub const AGE_BANDS: [&str; 3] = ["0-35", "35-55", "55<="];

/// Actix web handler for `GET /admin`.
pub(crate) async fn process(source: web::Data<dyn TableSource>) -> impl Responder {
    match build_summary(source.into_inner()).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => e.error_response(),
    }
}

async fn build_summary(source: Arc<dyn TableSource>) -> Result<AdminSummary, ApiError> {
    web::block(move || load_and_summarize(source.as_ref())).await?
}

/// Fetches the three tables concurrently, then aggregates them.
///
/// A missing `studentInfo.csv` is reported as not found regardless of the other files.
/// The assessment table is not part of the summary but must still be readable.
fn load_and_summarize(source: &dyn TableSource) -> Result<AdminSummary, ApiError> {
    let (info, (registration, assessment)) = rayon::join(
        || source.table(DataFile::StudentInfo),
        || {
            rayon::join(
                || source.table(DataFile::StudentRegistration),
                || source.table(DataFile::StudentAssessment),
            )
        },
    );

    let info = info.map_err(|e| {
        if e.is_missing() {
            ApiError::NotFound(STUDENT_DATA_NOT_FOUND)
        } else {
            e.into()
        }
    })?;
    let registration = registration?;
    assessment?;

    Ok(summarize(info, &registration))
}

/// Columns of the student-info table the overview reads.
struct StudentInfoColumns {
    final_result: Option<usize>,
    gender: Option<usize>,
    age_band: Option<usize>,
}

struct StudentInfoRow<'a> {
    final_result: &'a str,
    gender: &'a str,
    age_band: &'a str,
}

impl StudentInfoColumns {
    fn resolve(table: &Table) -> Self {
        Self {
            final_result: table.column("final_result"),
            gender: table.column("gender"),
            age_band: table.column("age_band"),
        }
    }

    fn project<'a>(&self, record: Record<'a>) -> StudentInfoRow<'a> {
        StudentInfoRow {
            final_result: record.value(self.final_result),
            gender: record.value(self.gender),
            age_band: record.value(self.age_band),
        }
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Builds the admin overview from decoded tables.
pub fn summarize(info: Arc<Table>, registration: &Table) -> AdminSummary {
    let columns = StudentInfoColumns::resolve(&info);
    let mut outcomes = Distribution::new();
    let mut gender = Distribution::new();
    let mut age = Distribution::with_buckets(AGE_BANDS);

    for row in info.records().map(|r| columns.project(r)) {
        outcomes.increment(or_default(row.final_result, UNKNOWN));
        gender.increment(or_default(row.gender, UNKNOWN));
        age.increment_existing(or_default(row.age_band, AGE_BANDS[0]));
    }

    let module = registration.column("code_module");
    let presentation = registration.column("code_presentation");
    let mut enrolments = Distribution::new();
    for record in registration.records() {
        let key = format!("{}_{}", record.value(module), record.value(presentation));
        enrolments.increment(&key);
    }

    let total_students = info.len();
    AdminSummary {
        outcomes,
        enrolments,
        gender,
        age,
        students: RecordSet::head(info, STUDENT_SAMPLE_SIZE),
        total_students,
    }
}
