//! Impact Effects - command-line front end
//!
//! Computes the consequences of one impact and prints a summary with selected
//! rows of the effects table, or the whole outcome as JSON.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use impact_effects::effects::EffectsRow;
use impact_effects::scenarios::{self, SCENARIOS};
use impact_effects::{
    ImpactConfig, ImpactOutcome, ImpactorSpec, TargetMaterial, compute_impact_with,
};

#[derive(Parser)]
#[command(about = "Estimate the physical consequences of an asteroid impact")]
struct CliArgs {
    /// Start from a preset scenario. Explicit parameters override its values.
    #[arg(long)]
    scenario: Option<String>,

    /// Impactor diameter in meters.
    #[arg(long)]
    diameter: Option<f64>,

    /// Impactor density in kg/m³.
    #[arg(long)]
    density: Option<f64>,

    /// Entry velocity in m/s.
    #[arg(long)]
    velocity: Option<f64>,

    /// Impact angle from the horizontal in degrees.
    #[arg(long)]
    angle: Option<f64>,

    /// Target surface density in kg/m³.
    #[arg(long)]
    target_density: Option<f64>,

    /// Use the water-target crater constant.
    #[arg(long)]
    water: bool,

    /// Distances from ground zero to report, in km.
    #[arg(long = "distance", default_values_t = [1u32, 10, 100, 1000])]
    distances: Vec<u32>,

    /// Print the full outcome, including all 20 000 rows, as JSON.
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,

    /// Build the effects table on a single thread.
    #[arg(long)]
    sequential: bool,

    /// List the preset scenarios and exit.
    #[arg(long)]
    list_scenarios: bool,
}

impl CliArgs {
    /// Merge the preset (if any) with explicit parameters.
    fn impactor(&self) -> Result<ImpactorSpec, String> {
        let base = match &self.scenario {
            Some(id) => Some(
                scenarios::find(id)
                    .ok_or_else(|| format!("unknown scenario '{id}', see --list-scenarios"))?
                    .impactor,
            ),
            None => None,
        };

        let field = |explicit: Option<f64>, preset: Option<f64>, name: &str| {
            explicit
                .or(preset)
                .ok_or_else(|| format!("missing --{name} (or pass --scenario)"))
        };
        Ok(ImpactorSpec {
            diameter: field(self.diameter, base.map(|b| b.diameter), "diameter")?,
            density: field(self.density, base.map(|b| b.density), "density")?,
            velocity: field(self.velocity, base.map(|b| b.velocity), "velocity")?,
            angle: field(self.angle, base.map(|b| b.angle), "angle")?,
            target_density: field(
                self.target_density,
                base.map(|b| b.target_density),
                "target-density",
            )?,
        })
    }
}

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    if args.list_scenarios {
        for s in SCENARIOS {
            println!("{:<16} {:<22} {}", s.id, s.name, s.description);
        }
        return;
    }

    let spec = match args.impactor() {
        Ok(spec) => spec,
        Err(msg) => CliArgs::command()
            .error(ErrorKind::MissingRequiredArgument, msg)
            .exit(),
    };

    let target = if args.water {
        TargetMaterial::Water
    } else {
        TargetMaterial::Rock
    };
    let config = ImpactConfig::default()
        .with_target(target)
        .with_parallel(!args.sequential);

    let outcome = match compute_impact_with(&spec, &config) {
        Ok(outcome) => outcome,
        Err(err) => CliArgs::command()
            .error(ErrorKind::ValueValidation, err)
            .exit(),
    };
    tracing::info!(
        regime = outcome.regime.name(),
        megatons = outcome.megatons(),
        "impact computed"
    );

    #[cfg(feature = "serde")]
    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!("failed to serialize outcome: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_summary(&outcome);
    println!();
    for &km in &args.distances {
        match outcome.effects.get(km as usize) {
            Some(row) => print_row(row),
            None => tracing::warn!(km, "distance outside the effects table"),
        }
    }
}

fn print_summary(outcome: &ImpactOutcome) {
    let fmt_opt = |v: Option<f64>, unit: &str| match v {
        Some(v) => format!("{v:.4e} {unit}"),
        None => "n/a".to_string(),
    };

    println!("Impactor mass:      {:.4e} kg", outcome.impactor.mass());
    println!("Regime:             {}", outcome.regime.name());
    println!(
        "Initial energy:     {:.4e} J ({:.3} Mt)",
        outcome.initial_energy,
        outcome.megatons()
    );
    println!("Ground energy:      {:.4e} J", outcome.ground_energy);
    println!("Air energy:         {:.4e} J", outcome.air_energy);
    println!("Ground velocity:    {}", fmt_opt(outcome.ground_velocity(), "m/s"));
    println!("Breakup altitude:   {:.1} m", outcome.breakup_altitude());
    println!("Burst altitude:     {:.1} m", outcome.burst_altitude());
    println!("Crater diameter:    {}", fmt_opt(outcome.crater_diameter(), "m"));
    println!("Crater depth:       {}", fmt_opt(outcome.crater_depth(), "m"));
    if let Some(crater) = &outcome.crater {
        println!("Crater morphology:  {:?}", crater.morphology);
        println!("Fireball radius:    {:.4e} m", crater.fireball_radius);
        println!("Melt volume:        {:.4e} m³", crater.melt_volume);
    }
    println!("Seismic magnitude:  {}", fmt_opt(outcome.seismic_magnitude, ""));
}

fn print_row(row: &EffectsRow) {
    println!("-- {} km --", row.distance_km);
    println!("  thermal exposure:  {:.4e} J/m²", row.thermal_exposure);
    match (row.effective_magnitude, row.intensity) {
        (Some(m), Some(band)) => println!("  shaking:           M {m:.2}, {band}"),
        _ => println!("  shaking:           none"),
    }
    if let (Some(t), Some(d)) = (row.ejecta_thickness, row.ejecta_mean_size) {
        println!("  ejecta:            {t:.4e} m thick, {d:.4e} m fragments");
    }
    println!(
        "  blast:             {:.4e} Pa ({:?}), wind {:.1} m/s",
        row.overpressure, row.blast_model, row.peak_wind
    );
}
