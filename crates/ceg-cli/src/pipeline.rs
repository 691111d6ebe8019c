//! Generation run with explicit stages.
//!
//! 1. **Load**: read the metadata document
//! 2. **Generate**: plan the artifacts of every entity
//! 3. **Render**: turn every artifact into TypeScript source
//! 4. **Persist**: write all files in one pass (skipped for a dry run)
//!
//! Nothing is written unless every entity generated successfully.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use ceg_core::{GenerationPlan, entity_name, generate_all};
use ceg_ingest::load_metadata;
use ceg_model::GeneratorConfig;
use ceg_output::{OverwritePolicy, RenderOptions, persist, render_plan};

use crate::types::{EntityInspection, EntitySummary, RunResult};

/// Options of a run that are not part of [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Render everything but write nothing.
    pub dry_run: bool,
    pub overwrite: OverwritePolicy,
    pub render: RenderOptions,
}

/// Read a JSON config file, resolving relative paths against its folder.
pub fn load_config_file(path: &Path) -> Result<GeneratorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse config file {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolved_against(base))
}

/// Combine the optional config file with explicit paths; explicit paths win.
pub fn resolve_config(
    config_path: Option<&Path>,
    input: Option<&Path>,
    output_dir: Option<&Path>,
) -> Result<GeneratorConfig> {
    let from_file = config_path.map(load_config_file).transpose()?;

    let input = match (input, &from_file) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(config)) => config.input.clone(),
        (None, None) => bail!("no metadata input given (use --input or --config)"),
    };
    let output_folder = match (output_dir, &from_file) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(config)) => config.output_folder.clone(),
        (None, None) => bail!("no output folder given (use --output-dir or --config)"),
    };
    Ok(GeneratorConfig::new(input, output_folder))
}

/// Load, generate, render and persist every entity of `config.input`.
pub fn run(config: &GeneratorConfig, options: &RunOptions) -> Result<RunResult> {
    let run_span = info_span!("run", input = %config.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let entities = load_metadata(&config.input).context("load metadata")?;
    let plan = generate_all(&entities).context("generate entity code")?;
    let rendered = render_plan(&plan, &options.render);

    let written = if options.dry_run {
        info!(file_count = rendered.len(), "dry run, nothing written");
        Vec::new()
    } else {
        persist(&rendered, &config.output_folder, options.overwrite).with_context(|| {
            format!("write artifacts to {}", config.output_folder.display())
        })?
    };

    info!(
        entity_count = plan.entities.len(),
        file_count = written.len(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        input: config.input.clone(),
        output_root: config.output_folder.clone(),
        dry_run: options.dry_run,
        entities: summarize(&plan, &config.output_folder),
        written,
    })
}

fn summarize(plan: &GenerationPlan, output_root: &Path) -> Vec<EntitySummary> {
    plan.entities
        .iter()
        .map(|entity| EntitySummary {
            logical_name: entity.logical_name.clone(),
            display_name: entity.display_name.clone(),
            name: entity.name.clone(),
            constants_path: output_root.join(entity.constants.relative_path()),
            enums_path: output_root.join(entity.enums.relative_path()),
            fields: entity.field_count(),
            enums: entity.enum_count(),
            flag_holders: entity.flag_holder_count(),
        })
        .collect()
}

/// Load a metadata document and describe each entity without generating code.
pub fn inspect(input: &Path) -> Result<Vec<EntityInspection>> {
    let entities = load_metadata(input).context("load metadata")?;

    let mut rows: Vec<EntityInspection> = entities
        .iter()
        .map(|entity| EntityInspection {
            logical_name: entity.logical_name.clone(),
            display_name: entity.display_name.clone(),
            name: entity_name(entity).map_err(|error| error.to_string()),
            attributes: entity.attributes.len(),
            option_attributes: entity.option_attributes().count(),
            collides: false,
        })
        .collect();

    let mut claims: BTreeMap<String, usize> = BTreeMap::new();
    for row in &rows {
        if let Ok(name) = &row.name {
            *claims.entry(name.to_ascii_lowercase()).or_default() += 1;
        }
    }
    for row in &mut rows {
        if let Ok(name) = &row.name {
            row.collides = claims.get(&name.to_ascii_lowercase()).is_some_and(|n| *n > 1);
            if row.collides {
                warn!(entity = %row.logical_name, artifact = %name, "artifact name collision");
            }
        }
    }
    Ok(rows)
}
