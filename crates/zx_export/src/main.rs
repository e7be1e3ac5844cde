use std::{fs, path::PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use zx_engine::formats::project::ProjectDocument;
use zx_engine::{ExportOptions, MaskInterleaving, Profile, ProjectKind};
use zx_engine_edit::{EditState, LevelEditState, project_name_from_file};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Assembly source with DEFB/DEFW data
    Asm,
    /// Pixel bytes followed by attribute bytes
    Bin,
    /// 6912 byte screen dump (scenes only)
    Scr,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Asm => "asm",
            Format::Bin => "bin",
            Format::Scr => "scr",
        }
    }
}

#[derive(Parser)]
#[command(version, about = "Exports ZX Spectrum graphics projects")]
pub struct Cli {
    #[arg(help = "Project file to export.", long, short)]
    input: PathBuf,

    #[arg(help = "Output file. Defaults to the input file with the format's extension.", long, short)]
    output: Option<PathBuf>,

    #[arg(help = "Output format.", long, short, value_enum, default_value_t = Format::Asm)]
    format: Format,

    #[arg(help = "Emit a mask byte for every pixel byte.", long, default_value_t = false)]
    mask: bool,

    #[arg(help = "Emit 8 pre-shifted copies of every sprite frame.", long, default_value_t = false)]
    pre_shifts: bool,

    #[arg(help = "Put masks in a separate block instead of interleaving them.", long, default_value_t = false)]
    separate_masks: bool,

    #[arg(help = "Emit a DEFW address table.", long, default_value_t = false)]
    lookup_table: bool,

    #[arg(help = "Label prefix. Defaults to the project name.", long)]
    name: Option<String>,

    #[arg(help = "Write a rotating log file to this directory.", long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn export_options(&self) -> ExportOptions {
        ExportOptions {
            include_mask: self.mask,
            include_pre_shifts: self.pre_shifts,
            interleaving: if self.separate_masks {
                MaskInterleaving::SeparateBlocks
            } else {
                MaskInterleaving::SpriteMask
            },
            generate_lookup_table: self.lookup_table,
        }
    }
}

/// Export data of a loaded project, in whatever editor can hold it
enum Project {
    Canvas(EditState),
    Level(LevelEditState),
}

impl Project {
    fn load(doc: &ProjectDocument) -> anyhow::Result<Self> {
        let Some(kind) = doc.project_kind() else {
            bail!("unknown project type '{}'", doc.kind.as_deref().unwrap_or_default());
        };
        let profile = match kind {
            ProjectKind::Level => return Ok(Project::Level(LevelEditState::from_document(doc)?)),
            ProjectKind::Udg => Profile::Udg,
            ProjectKind::Tile => Profile::Tile,
            ProjectKind::Scene => Profile::Scene,
            ProjectKind::SoftwareSprite => Profile::Sprite,
        };
        Ok(Project::Canvas(EditState::from_document(profile, doc)?))
    }

    fn set_name(&mut self, name: String) {
        match self {
            Project::Canvas(state) => state.set_project_name(name),
            Project::Level(state) => state.set_project_name(name),
        }
    }

    fn export(&self, format: Format, options: &ExportOptions) -> anyhow::Result<Vec<u8>> {
        let data = match (self, format) {
            (Project::Canvas(state), Format::Asm) => state.export_asm(options)?.into_bytes(),
            (Project::Canvas(state), Format::Bin) => state.export_binary()?,
            (Project::Canvas(state), Format::Scr) => state.export_scr()?,
            (Project::Level(state), Format::Asm) => state.export_asm(options)?.into_bytes(),
            (Project::Level(state), Format::Bin) => state.export_binary()?,
            (Project::Level(_), Format::Scr) => bail!("levels cannot be exported as screen dumps"),
        };
        Ok(data)
    }
}

fn start_logger(log_dir: Option<&PathBuf>) -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str("info") {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Failed to configure logging: {err}");
            return None;
        }
    };
    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("zx_export").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn),
        None => logger.log_to_stderr(),
    };
    logger.start().map_err(|err| eprintln!("Failed to start logging: {err}")).ok()
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    let doc = ProjectDocument::from_json(&text).with_context(|| format!("parsing {}", args.input.display()))?;
    let mut project = Project::load(&doc)?;

    let name = match (&args.name, &doc.name) {
        (Some(name), _) => name.clone(),
        (None, Some(name)) if !name.is_empty() => name.clone(),
        _ => {
            let file_name = args.input.file_name().map(|f| f.to_string_lossy().to_string()).unwrap_or_default();
            project_name_from_file(&file_name, doc.project_kind().unwrap_or(ProjectKind::Udg))
        }
    };
    project.set_name(name);

    let data = project.export(args.format, &args.export_options())?;
    let output = args.output.clone().unwrap_or_else(|| args.input.with_extension(args.format.extension()));
    fs::write(&output, &data).with_context(|| format!("writing {}", output.display()))?;
    log::info!("wrote {} bytes to {}", data.len(), output.display());
    Ok(())
}

fn main() {
    let args = Cli::parse();
    let _logger = start_logger(args.log_dir.as_ref());

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
