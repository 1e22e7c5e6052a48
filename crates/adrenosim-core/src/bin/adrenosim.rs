//! AdrenoSim CLI Tool
//!
//! Run adrenergic pharmacology simulations from the command line.
//!
//! Usage:
//!   adrenosim scenarios
//!   adrenosim drugs
//!   adrenosim simulate --scenario <id> --drug <id> --dose <dose>
//!   adrenosim analyze --drug <id> --dose <dose> [--points <n>]
//!   adrenosim curve --drug <id> --receptor <code> [--points <n>]
//!   adrenosim sweep --scenario <id> [--drug <id>] [--steps <n>]
//!   adrenosim export

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use adrenosim_core::sweep::{best_for_drug, best_overall};
use adrenosim_core::*;
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "adrenosim")]
#[command(author = "AdrenoSim")]
#[command(version = "0.1.0")]
#[command(about = "Adrenergic receptor pharmacology simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalogue JSON file (built-in catalogue if not specified)
    #[arg(short, long, global = true)]
    catalogue: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json", global = true)]
    format: Format,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Compact,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// List clinical scenarios
    Scenarios,

    /// List drugs
    Drugs,

    /// Simulate one drug and dose in a scenario
    Simulate {
        /// Scenario id
        #[arg(short, long)]
        scenario: String,

        /// Drug id (omit to view the untreated baseline)
        #[arg(short, long)]
        drug: Option<String>,

        /// Dose in the drug's unit (typical dose if not specified)
        #[arg(long)]
        dose: Option<f64>,
    },

    /// Receptor occupancy and response at a dose
    Analyze {
        /// Drug id
        #[arg(short, long)]
        drug: String,

        /// Dose in the drug's unit (typical dose if not specified)
        #[arg(long)]
        dose: Option<f64>,

        /// Curve resolution
        #[arg(short, long, default_value_t = DEFAULT_CURVE_POINTS)]
        points: usize,
    },

    /// Dose-response curve at one receptor
    Curve {
        /// Drug id
        #[arg(short, long)]
        drug: String,

        /// Receptor code: α1, α2, β1, β2, V1, PDE3 (or a1, beta2, ...)
        #[arg(short, long)]
        receptor: String,

        /// Curve resolution
        #[arg(short, long, default_value_t = DEFAULT_CURVE_POINTS)]
        points: usize,
    },

    /// Score every dose on a grid
    Sweep {
        /// Scenario id
        #[arg(short, long)]
        scenario: String,

        /// Restrict to one drug
        #[arg(short, long)]
        drug: Option<String>,

        /// Grid intervals per drug
        #[arg(long, default_value = "20")]
        steps: usize,
    },

    /// Write the catalogue as JSON
    Export,
}

/// A command result in both machine and human form
struct Report {
    value: serde_json::Value,
    text: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    let catalogue = match &cli.catalogue {
        Some(path) => Catalogue::from_path(path)
            .with_context(|| format!("loading catalogue from {}", path.display()))?,
        None => Catalogue::builtin().context("building the built-in catalogue")?,
    };

    let report = match cli.command {
        Commands::Scenarios => list_scenarios(&catalogue)?,
        Commands::Drugs => list_drugs(&catalogue)?,
        Commands::Simulate {
            scenario,
            drug,
            dose,
        } => simulate(&catalogue, &scenario, drug.as_deref(), dose)?,
        Commands::Analyze { drug, dose, points } => analyze(&catalogue, &drug, dose, points)?,
        Commands::Curve {
            drug,
            receptor,
            points,
        } => curve(&catalogue, &drug, &receptor, points)?,
        Commands::Sweep {
            scenario,
            drug,
            steps,
        } => sweep(&catalogue, &scenario, drug.as_deref(), steps)?,
        Commands::Export => Report {
            value: serde_json::to_value(&catalogue)?,
            text: catalogue.to_json()?,
        },
    };

    let output_str = match cli.format {
        Format::Json => serde_json::to_string_pretty(&report.value)?,
        Format::Compact => serde_json::to_string(&report.value)?,
        Format::Text => report.text,
    };

    if let Some(output_path) = cli.output {
        fs::write(&output_path, &output_str)
            .with_context(|| format!("writing {}", output_path.display()))?;
        eprintln!("Output written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn init_logging(verbose: u8, json: bool) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn find_scenario<'a>(catalogue: &'a Catalogue, id: &str) -> Result<&'a Scenario> {
    catalogue
        .scenario(id)
        .ok_or_else(|| anyhow!("unknown scenario '{}'", id))
}

fn find_drug<'a>(catalogue: &'a Catalogue, id: &str) -> Result<&'a Drug> {
    catalogue
        .drug(id)
        .ok_or_else(|| anyhow!("unknown drug '{}'", id))
}

fn list_scenarios(catalogue: &Catalogue) -> Result<Report> {
    let mut text = String::new();
    let mut rows = Vec::new();
    for s in catalogue.scenarios() {
        writeln!(text, "{:<24} {}", s.id, s.name)?;
        rows.push(json!({
            "id": s.id,
            "name": s.name,
            "description": s.description,
            "target_receptors": s.target_receptors,
            "optimal_drug": s.optimal_drug,
        }));
    }
    Ok(Report {
        value: serde_json::to_value(rows)?,
        text,
    })
}

fn list_drugs(catalogue: &Catalogue) -> Result<Report> {
    let mut text = String::new();
    let mut rows = Vec::new();
    for d in catalogue.drugs() {
        writeln!(
            text,
            "{:<16} {:<36} {} - {} {} ({})",
            d.id, d.class, d.dose.min, d.dose.max, d.dose.unit, d.dose.route
        )?;
        rows.push(json!({
            "id": d.id,
            "name": d.name,
            "class": d.class,
            "dose": d.dose,
            "receptors": d.receptors,
        }));
    }
    Ok(Report {
        value: serde_json::to_value(rows)?,
        text,
    })
}

fn simulate(
    catalogue: &Catalogue,
    scenario_id: &str,
    drug_id: Option<&str>,
    dose: Option<f64>,
) -> Result<Report> {
    let scenario = find_scenario(catalogue, scenario_id)?;
    let drug = drug_id.map(|id| find_drug(catalogue, id)).transpose()?;
    let dose = dose.or(drug.map(|d| d.dose.typical)).unwrap_or(0.0);

    if let Some(drug) = drug {
        if !drug.dose.contains(dose) {
            info!(drug = %drug.id, dose, "dose outside labelled range");
        }
    }

    let vitals = calculate_drug_effect(drug, dose, &scenario.baseline, scenario);
    let activation = calculate_receptor_activation(drug, dose);
    let monitor = vitals.monitor_status();
    let assessment = assess_treatment_quality(scenario, &vitals, drug);

    let mut text = String::new();
    writeln!(text, "Scenario: {}", scenario.name)?;
    match drug {
        Some(d) => writeln!(text, "Drug:     {} {}", d.name, d.format_dose(dose))?,
        None => writeln!(text, "Drug:     none")?,
    }
    writeln!(
        text,
        "Vitals:   HR {:.0}  BP {:.0}/{:.0}  MAP {:.0}  SpO2 {:.0}%  CO {:.1}  SVR {:.0}",
        vitals.hr, vitals.sbp, vitals.dbp, vitals.map, vitals.spo2, vitals.co, vitals.svr
    )?;
    write!(text, "Receptors:")?;
    for (receptor, value) in activation.iter() {
        write!(
            text,
            "  {} {:+.0} ({})",
            receptor,
            value,
            ActivationBand::from_activation(value).description()
        )?;
    }
    writeln!(text)?;
    writeln!(text, "Score:    {} ({})", assessment.score, assessment.grade)?;
    for fb in &assessment.feedback {
        writeln!(text, "  [{:?}] {}", fb.kind, fb.message)?;
    }

    Ok(Report {
        value: json!({
            "scenario": scenario.id,
            "drug": drug.map(|d| d.id.as_str()),
            "dose": dose,
            "vitals": vitals,
            "receptor_activation": activation,
            "monitor": monitor,
            "assessment": assessment,
        }),
        text,
    })
}

fn analyze(
    catalogue: &Catalogue,
    drug_id: &str,
    dose: Option<f64>,
    points: usize,
) -> Result<Report> {
    let drug = find_drug(catalogue, drug_id)?;
    let dose = dose.unwrap_or(drug.dose.typical);
    let analysis = analyze_drug(drug, dose, points)
        .ok_or_else(|| anyhow!("drug '{}' has no Hill pharmacology", drug_id))?;

    let mut text = String::new();
    writeln!(
        text,
        "{} {} → {:.1} nM",
        drug.name,
        drug.format_dose(dose),
        analysis.concentration_nm
    )?;
    for r in &analysis.receptors {
        writeln!(
            text,
            "  {:<4} occupancy {:>5.1}%  response {:>5.1}%  pEC50 {:.2}  {}",
            r.receptor.code(),
            r.occupancy_pct,
            r.response,
            r.pec50,
            r.agonist_class.label()
        )?;
    }

    Ok(Report {
        value: serde_json::to_value(&analysis)?,
        text,
    })
}

fn curve(catalogue: &Catalogue, drug_id: &str, receptor: &str, points: usize) -> Result<Report> {
    let drug = find_drug(catalogue, drug_id)?;
    let receptor = Receptor::from_code(receptor)
        .ok_or_else(|| anyhow!("unknown receptor code '{}'", receptor))?;
    let Some(pharmacology) = drug.pharmacology_at(receptor) else {
        bail!("drug '{}' has no {} pharmacology", drug_id, receptor);
    };

    let curve = generate_dose_response_curve(pharmacology, points);
    let mut text = String::new();
    writeln!(text, "log[C]\tC (nM)\tresponse %\toccupancy %")?;
    for p in &curve {
        writeln!(
            text,
            "{:.3}\t{:.3}\t{:.2}\t{:.2}",
            p.log_concentration, p.concentration, p.response, p.occupancy
        )?;
    }

    Ok(Report {
        value: json!({
            "drug": drug.id,
            "receptor": receptor,
            "pharmacology": pharmacology,
            "curve": curve,
        }),
        text,
    })
}

fn sweep(
    catalogue: &Catalogue,
    scenario_id: &str,
    drug_id: Option<&str>,
    steps: usize,
) -> Result<Report> {
    let scenario = find_scenario(catalogue, scenario_id)?;
    let drugs = match drug_id {
        Some(id) => vec![find_drug(catalogue, id)?.clone()],
        None => catalogue.drugs().to_vec(),
    };

    let config = SweepConfig::default().with_steps(steps);
    let points = DoseSweep::new(config).run(scenario, &drugs);

    let mut text = String::new();
    let mut best_rows = Vec::new();
    for drug in &drugs {
        if let Some(best) = best_for_drug(&points, &drug.id) {
            writeln!(
                text,
                "{:<16} best {:>4} ({}) at {}",
                drug.id,
                best.assessment.score,
                best.assessment.grade,
                drug.format_dose(best.dose)
            )?;
            best_rows.push(json!({
                "drug": drug.id,
                "dose": best.dose,
                "score": best.assessment.score,
                "grade": best.assessment.grade,
            }));
        }
    }
    let overall = best_overall(&points);
    if let Some(best) = overall {
        writeln!(text, "Overall: {} at {}", best.drug_id, best.dose)?;
    }

    Ok(Report {
        value: json!({
            "scenario": scenario.id,
            "steps": steps,
            "best": best_rows,
            "overall": overall,
            "points": points,
        }),
        text,
    })
}
