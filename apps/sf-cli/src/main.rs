use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use sf_balance::{DesignBasis, solve_mass_balance};
use sf_core::units::atm;
use sf_curve::{CurveGenerator, CurveOutcome};
use sf_project::{DesignSpecs, load_specs};
use sf_results::{CurveManifest, CurveRequest, format_curve_csv, plot_equilibrium_diagram,
    write_curve_csv, write_manifest};
use sf_thermo::{AntoineModel, MoleFraction, VaporPressureModel};
use tracing::info;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "stillflow CLI - ethanol-water distillation design tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a design-specs file
    Validate {
        /// Path to the design-specs JSON file
        specs_path: PathBuf,
    },
    /// Solve the global mass balance
    Balance {
        /// Path to the design-specs JSON file
        specs_path: PathBuf,
    },
    /// Generate the vapor-liquid equilibrium curve
    Curve {
        /// Path to the design-specs JSON file
        specs_path: PathBuf,
        /// Output CSV file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also render the y-x diagram to this PNG path
        #[arg(long)]
        plot: Option<PathBuf>,
        /// Override the grid size from the specs
        #[arg(long)]
        points: Option<usize>,
        /// Override the total pressure [atm] from the specs
        #[arg(long)]
        pressure: Option<f64>,
        /// Solve grid points on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] sf_project::ProjectError),

    #[error(transparent)]
    Thermo(#[from] sf_thermo::ThermoError),

    #[error(transparent)]
    Balance(#[from] sf_balance::BalanceError),

    #[error(transparent)]
    Curve(#[from] sf_curve::CurveError),

    #[error(transparent)]
    Results(#[from] sf_results::ResultsError),
}

fn main() -> Result<(), CliError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { specs_path } => cmd_validate(&specs_path),
        Commands::Balance { specs_path } => cmd_balance(&specs_path),
        Commands::Curve {
            specs_path,
            output,
            plot,
            points,
            pressure,
            parallel,
        } => cmd_curve(
            &specs_path,
            output.as_deref(),
            plot.as_deref(),
            points,
            pressure,
            parallel,
        ),
    }
}

fn cmd_validate(specs_path: &Path) -> Result<(), CliError> {
    println!("Validating design specs: {}", specs_path.display());
    load_specs(specs_path)?;
    println!("✓ Design specs are valid");
    Ok(())
}

fn cmd_balance(specs_path: &Path) -> Result<(), CliError> {
    let specs = load_specs(specs_path)?;
    let basis = design_basis(&specs)?;
    let flows = solve_mass_balance(&basis)?;

    println!("Overall material balance:");
    println!(
        "  Feed (F):       {:>10.2} kg/h  ({:.2} kg/day)",
        flows.feed_kg_per_h(),
        flows.feed_kg_per_day
    );
    println!(
        "  Distillate (D): {:>10.2} kg/h  ({:.2} kg/day)",
        flows.distillate_kg_per_h(),
        flows.distillate_kg_per_day
    );
    println!(
        "  Bottoms (B):    {:>10.2} kg/h  ({:.2} kg/day)",
        flows.bottoms_kg_per_h(),
        flows.bottoms_kg_per_day
    );
    println!();
    println!("Compositions:");
    println!("  xF = {}", basis.x_f.value());
    println!("  xD = {}", basis.x_d.value());
    println!("  xB = {}", basis.x_b.value());
    Ok(())
}

fn cmd_curve(
    specs_path: &Path,
    output: Option<&Path>,
    plot: Option<&Path>,
    points: Option<usize>,
    pressure: Option<f64>,
    parallel: bool,
) -> Result<(), CliError> {
    let specs = load_specs(specs_path)?;
    let num_points = points.unwrap_or(specs.vle.num_points);
    let pressure_atm = pressure.unwrap_or(specs.vle.pressure_atm);

    let model = AntoineModel::new();
    let generator = CurveGenerator::new(&model);
    let outcome = if parallel {
        generator.generate_parallel(num_points, atm(pressure_atm))?
    } else {
        generator.generate(num_points, atm(pressure_atm))?
    };

    report_outcome(&outcome, num_points);

    match output {
        Some(path) => {
            write_curve_csv(&outcome.curve, path)?;
            info!(path = %path.display(), "curve table written");

            let manifest = CurveManifest::new(
                CurveRequest {
                    model: model.name().to_string(),
                    num_points,
                    pressure_atm,
                },
                outcome.curve.len(),
                outcome.warnings.len(),
            );
            let manifest_path = path.with_extension("manifest.json");
            write_manifest(&manifest, &manifest_path)?;
            info!(path = %manifest_path.display(), "manifest written");
        }
        None => print!("{}", format_curve_csv(&outcome.curve)),
    }

    if let Some(path) = plot {
        plot_equilibrium_diagram(&outcome.curve, path)?;
        info!(path = %path.display(), "diagram written");
    }

    Ok(())
}

fn report_outcome(outcome: &CurveOutcome, num_points: usize) {
    eprintln!(
        "Solved {} of {} grid points",
        outcome.curve.len(),
        num_points
    );
    for warning in &outcome.warnings {
        eprintln!("  warning: x = {}: {}", warning.x_ethanol, warning.error);
    }
}

fn design_basis(specs: &DesignSpecs) -> Result<DesignBasis, CliError> {
    Ok(DesignBasis {
        product_rate_l_per_day: specs.basis.product_rate_l_per_day,
        density_ethanol_kg_per_l: specs.basis.density_ethanol_kg_per_l,
        x_f: MoleFraction::new(specs.basis.feed_composition_x_f)?,
        x_d: MoleFraction::new(specs.basis.distillate_composition_x_d)?,
        x_b: MoleFraction::new(specs.basis.bottoms_composition_x_b)?,
    })
}
