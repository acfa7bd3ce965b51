use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
/// Query string accepted by the lecturer endpoint when the module code is not part of
/// the path, e.g. `/lecturer?moduleCode=AAA`.
pub struct ModuleQuery {
    #[serde(rename = "moduleCode")]
    pub module_code: Option<String>,
}
