use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProblemRecord {
    pub code: String,
    pub name: String,
    pub rating: i64,
    pub hint: String,
    pub explanation: String,
    #[serde(rename = "solutionFile")]
    pub solution_file: String,
}

impl ProblemRecord {
    pub fn window_title(&self) -> String {
        format!("{} - {} | Sdmist", self.code, self.name)
    }
}
