mod catalog;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::loader::load_catalog;
use crate::input::load_profile;
use crate::pipeline::stage1_profile::run_stage1;
use crate::pipeline::stage2_complete::{run_stage2, CompletionStrategy};
use crate::pipeline::stage3_rank::run_stage3;
use crate::pipeline::stage4_assemble::{run_stage4, Stage4Inputs};
use crate::pipeline::stage5_report::{write_reports, ReportMode, Stage5Input};

#[derive(Debug, Parser)]
#[command(
    name = "fitpick",
    version,
    about = "Content-based outfit recommendation from a preference profile"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Complete the profile scores, rank preferences and assemble outfits.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Preference profile (TOML).
    #[arg(long)]
    profile: PathBuf,

    /// Output directory for reports.
    #[arg(long)]
    out: PathBuf,

    /// Which report files to write.
    #[arg(long, value_enum, default_value = "both")]
    mode: ReportMode,

    /// RNG seed; the same seed reproduces the same outfits.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// How unrated categories are filled in.
    #[arg(long, value_enum, default_value = "similarity")]
    completion: CompletionStrategy,

    /// Number of top genres (and colors) to recommend.
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Custom outfit library overlay (JSON).
    #[arg(long)]
    library: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),
    #[error(transparent)]
    Profile(#[from] input::ProfileError),
    #[error(transparent)]
    Report(#[from] report::ReportError),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run(args) => run(&args),
    };
    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), RunError> {
    let catalog = load_catalog(args.library.as_deref())?;
    let profile = load_profile(&args.profile, &catalog)?;

    let stage1 = run_stage1(&profile, &catalog);
    let stage2 = run_stage2(
        &stage1.genre_ratings,
        &stage1.color_ratings,
        &catalog,
        args.completion,
    );
    let stage3 = run_stage3(&stage2.genres, &stage2.colors, &catalog, args.top);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let outfits = run_stage4(
        &Stage4Inputs {
            catalog: &catalog,
            top_genres: &stage3.top_genres,
            top_colors: &stage3.top_colors,
            silhouette: profile.silhouette,
            wear_outer: profile.wear_outer,
        },
        &mut rng,
    );

    let input = Stage5Input {
        catalog: &catalog,
        genre_ratings: &stage1.genre_ratings,
        color_ratings: &stage1.color_ratings,
        genres: &stage2.genres,
        colors: &stage2.colors,
        top_genres: &stage3.top_genres,
        top_colors: &stage3.top_colors,
        outfits: &outfits,
        silhouette: profile.silhouette,
        wear_outer: profile.wear_outer,
        completion: args.completion,
        seed: args.seed,
        tool_name: "fitpick".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out, args.mode)?;

    Ok(())
}
