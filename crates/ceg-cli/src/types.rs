use std::path::PathBuf;

/// Outcome of a `generate` run.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_root: PathBuf,
    pub dry_run: bool,
    pub entities: Vec<EntitySummary>,
    /// Files written, in write order. Empty for a dry run.
    pub written: Vec<PathBuf>,
}

impl RunResult {
    /// Files the run produces: two per entity, written or not.
    pub fn planned_file_count(&self) -> usize {
        self.entities.len() * 2
    }

    /// File count for the summary, distinguishing a dry run from written files.
    pub fn files_label(&self) -> String {
        if self.dry_run {
            format!("{} planned", self.planned_file_count())
        } else {
            format!("{} written", self.written.len())
        }
    }
}

#[derive(Debug)]
pub struct EntitySummary {
    pub logical_name: String,
    pub display_name: Option<String>,
    /// Normalized artifact name.
    pub name: String,
    pub constants_path: PathBuf,
    pub enums_path: PathBuf,
    pub fields: usize,
    pub enums: usize,
    pub flag_holders: usize,
}

/// One row of `inspect` output.
#[derive(Debug)]
pub struct EntityInspection {
    pub logical_name: String,
    pub display_name: Option<String>,
    /// Normalized artifact name, or the reason it cannot be derived.
    pub name: Result<String, String>,
    pub attributes: usize,
    pub option_attributes: usize,
    /// Another entity normalizes to the same artifact name (ignoring case).
    pub collides: bool,
}
