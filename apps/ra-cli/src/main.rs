use clap::{Args, Parser, Subcommand};
use ra_aero::{AlphaSweep, FlowState, run_alpha_sweep};
use ra_core::{deg, rad, to_degrees};
use ra_project::{ProjectResult, load_config, load_evaluator};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ra-cli")]
#[command(about = "RotorAero CLI - blade section lift and drag coefficients", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file and build its evaluator
    Validate {
        /// Path to the aerodynamic config (YAML or JSON)
        config_path: PathBuf,
    },
    /// Lift-curve slope and zero-lift angle
    Lift {
        /// Path to the aerodynamic config (YAML or JSON)
        config_path: PathBuf,
        #[command(flatten)]
        flow: FlowArgs,
    },
    /// Lift and drag coefficients at one angle of attack
    Coeffs {
        /// Path to the aerodynamic config (YAML or JSON)
        config_path: PathBuf,
        /// Angle of attack in degrees
        #[arg(long, allow_hyphen_values = true)]
        alpha_deg: f64,
        #[command(flatten)]
        flow: FlowArgs,
    },
    /// Section polar over a range of angles of attack
    Sweep {
        /// Path to the aerodynamic config (YAML or JSON)
        config_path: PathBuf,
        /// First angle in degrees
        #[arg(long, allow_hyphen_values = true, default_value_t = -10.0)]
        start_deg: f64,
        /// Last angle in degrees
        #[arg(long, allow_hyphen_values = true, default_value_t = 20.0)]
        end_deg: f64,
        /// Number of angles
        #[arg(long, default_value_t = 31)]
        points: usize,
        #[command(flatten)]
        flow: FlowArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct FlowArgs {
    /// Mach number
    #[arg(long, default_value_t = 0.0)]
    mach: f64,
    /// Local Reynolds number
    #[arg(long, default_value_t = 1e6)]
    re: f64,
    /// Reference Reynolds number of the polar data
    #[arg(long, default_value_t = 1e6)]
    re_ref: f64,
    /// Span fraction r/R (required by xfoil_table configs)
    #[arg(long)]
    span: Option<f64>,
}

impl FlowArgs {
    fn at(&self, alpha_deg: f64) -> ProjectResult<FlowState> {
        Ok(FlowState::from_angle(
            deg(alpha_deg),
            self.mach,
            self.re,
            self.re_ref,
        )?)
    }
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Lift { config_path, flow } => cmd_lift(&config_path, &flow),
        Commands::Coeffs {
            config_path,
            alpha_deg,
            flow,
        } => cmd_coeffs(&config_path, alpha_deg, &flow),
        Commands::Sweep {
            config_path,
            start_deg,
            end_deg,
            points,
            flow,
            output,
        } => cmd_sweep(
            &config_path,
            start_deg,
            end_deg,
            points,
            &flow,
            output.as_deref(),
        ),
    }
}

fn cmd_validate(config_path: &Path) -> ProjectResult<()> {
    let config = load_config(config_path)?;
    let aero = config.build(config_path.parent())?;
    println!("✓ Config is valid: {}", config_path.display());
    println!("  Method: {}", aero.variant());
    println!("  Mach correction: {}", config.mach_correction);
    println!("  Reynolds correction: {}", config.reynolds_correction);
    Ok(())
}

fn cmd_lift(config_path: &Path, flow: &FlowArgs) -> ProjectResult<()> {
    let aero = load_evaluator(config_path)?;
    let props = aero.lift_properties(&flow.at(0.0)?, flow.span)?;
    println!("Cl_alpha:     {:.6} /rad", props.cl_alpha);
    println!(
        "alpha_0_lift: {:.6} rad ({:.4} deg)",
        props.alpha_0_lift,
        to_degrees(rad(props.alpha_0_lift))
    );
    Ok(())
}

fn cmd_coeffs(config_path: &Path, alpha_deg: f64, flow: &FlowArgs) -> ProjectResult<()> {
    let aero = load_evaluator(config_path)?;
    let c = aero.coefficients(&flow.at(alpha_deg)?, flow.span)?;
    println!("Cl: {:.6}", c.cl);
    println!("Cd: {:.6}", c.cd);
    Ok(())
}

fn cmd_sweep(
    config_path: &Path,
    start_deg: f64,
    end_deg: f64,
    points: usize,
    flow: &FlowArgs,
    output: Option<&Path>,
) -> ProjectResult<()> {
    let aero = load_evaluator(config_path)?;
    let sweep = AlphaSweep::from_degrees(start_deg, end_deg, points)?;
    let result = run_alpha_sweep(&aero, &sweep, &flow.at(0.0)?, flow.span);

    let mut csv = String::from("alpha_deg,cl,cd\n");
    for (alpha, point) in result.alpha.iter().zip(result.points.iter()) {
        match point {
            Ok(c) => csv.push_str(&format!(
                "{:.4},{:.6},{:.6}\n",
                to_degrees(rad(*alpha)),
                c.cl,
                c.cd
            )),
            Err(e) => tracing::warn!(alpha_rad = *alpha, error = %e, "sweep point failed"),
        }
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        eprintln!(
            "✓ Wrote {} of {} points to {}",
            result.num_successful(),
            result.points.len(),
            path.display()
        );
    } else {
        io::stdout().write_all(csv.as_bytes())?;
    }
    Ok(())
}
