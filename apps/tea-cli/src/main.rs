use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tea_app::{
    AppResult, BaseCaseReport, InputOverrides, evaluate_base_case, resolve_scenario,
    run_for_scenario, save_scenario, sensitivity_csv, to_json,
};
use tea_econ::{CAPEX, ExpenditureTable, OPEX};
use tea_process::ProcessStage;
use tea_project::Scenario;
use tea_sensitivity::{SensitivityParameter, SensitivityTable};
use tracing::info;

#[derive(Parser)]
#[command(name = "tea-cli")]
#[command(about = "Corn stover to ethanol techno-economic analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Evaluate the base case: flow rates and financial metrics
    Run {
        /// Optional scenario file; defaults are used without one
        scenario_path: Option<PathBuf>,
        #[command(flatten)]
        inputs: InputArgs,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep one input around its base value
    Sensitivity {
        /// Optional scenario file; defaults are used without one
        scenario_path: Option<PathBuf>,
        #[command(flatten)]
        inputs: InputArgs,
        /// Parameter to sweep (e.g. "Ethanol Price" or ethanol_price)
        #[arg(short, long)]
        parameter: Option<SensitivityParameter>,
        /// Sweep range in percent either side of the base value
        #[arg(short, long)]
        range: Option<u32>,
        /// Step between rows in percent
        #[arg(long)]
        step: Option<u32>,
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
        /// Write the table as CSV to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the capital and operating expenditure tables
    Tables {
        /// Print the tables as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the process flow diagram
    Diagram {
        /// Optional scenario file; defaults are used without one
        scenario_path: Option<PathBuf>,
        #[command(flatten)]
        inputs: InputArgs,
        /// Emit Graphviz DOT instead of text
        #[arg(long)]
        dot: bool,
    },
    /// Write a scenario file with default inputs
    Init {
        /// Output path (.yaml or .json)
        scenario_path: PathBuf,
        /// Scenario name
        #[arg(long, default_value = "Base case")]
        name: String,
    },
}

/// Base-case inputs that override the scenario file.
#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Annual feedstock in tons
    #[arg(long)]
    feedstock: Option<f64>,
    /// Ethanol price in USD/gal
    #[arg(long)]
    price: Option<f64>,
    /// Pretreatment efficiency (0.5 to 1.0)
    #[arg(long)]
    pretreatment: Option<f64>,
    /// Hydrolysis efficiency (0.5 to 1.0)
    #[arg(long)]
    hydrolysis: Option<f64>,
    /// Fermentation efficiency (0.5 to 1.0)
    #[arg(long)]
    fermentation: Option<f64>,
    /// Distillation efficiency (0.5 to 1.0)
    #[arg(long)]
    distillation: Option<f64>,
}

impl InputArgs {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            annual_feedstock_tons: self.feedstock,
            ethanol_price_usd_per_gal: self.price,
            pretreatment: self.pretreatment,
            hydrolysis: self.hydrolysis,
            fermentation: self.fermentation,
            distillation: self.distillation,
            ..Default::default()
        }
    }
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            inputs,
            json,
        } => cmd_run(scenario_path.as_deref(), &inputs, json),
        Commands::Sensitivity {
            scenario_path,
            inputs,
            parameter,
            range,
            step,
            json,
            output,
        } => {
            let overrides = InputOverrides {
                parameter,
                range_percent: range,
                step_percent: step,
                ..inputs.overrides()
            };
            cmd_sensitivity(
                scenario_path.as_deref(),
                &overrides,
                json,
                output.as_deref(),
            )
        }
        Commands::Tables { json } => cmd_tables(json),
        Commands::Diagram {
            scenario_path,
            inputs,
            dot,
        } => cmd_diagram(scenario_path.as_deref(), &inputs, dot),
        Commands::Init {
            scenario_path,
            name,
        } => cmd_init(&scenario_path, &name),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = tea_app::load_scenario(scenario_path)?;
    tea_app::validate_scenario(&scenario)?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}

fn cmd_run(scenario_path: Option<&Path>, inputs: &InputArgs, json: bool) -> AppResult<()> {
    let scenario = resolve_scenario(scenario_path, &inputs.overrides())?;
    let report = evaluate_base_case(&scenario)?;

    if json {
        println!("{}", to_json(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &BaseCaseReport) {
    let p = &report.parameters;
    println!("Scenario: {}", report.scenario);
    println!("\nInputs:");
    println!("  Annual feedstock:        {:.0} tons", report.annual_feedstock_tons);
    println!(
        "  Ethanol price:           ${:.2}/gal",
        report.ethanol_price_usd_per_gal
    );
    println!("  Pretreatment efficiency: {:.2}", p.pretreatment_efficiency());
    println!("  Hydrolysis efficiency:   {:.2}", p.hydrolysis_efficiency());
    println!("  Fermentation efficiency: {:.2}", p.fermentation_efficiency());
    println!("  Distillation efficiency: {:.2}", p.distillation_efficiency());

    println!("\nFlow rates:");
    for stage in ProcessStage::ALL {
        println!(
            "  {:<13} {:>10.2} {}",
            stage.name(),
            report.flow_rates.stage_rate(stage),
            stage.rate_unit()
        );
    }

    let m = &report.metrics;
    println!("\nFinancial metrics:");
    println!("  Annual production:    {:>14.2} gal", m.annual_production_gal);
    println!("  Annual revenue:       {:>14.2} USD", m.annual_revenue_usd);
    println!("  Total CAPEX:          {:>14.2} USD", m.total_capex_usd);
    println!("  Annual OPEX:          {:>14.2} USD", m.annual_opex_usd);
    println!(
        "  Simple annual profit: {:>14.2} USD",
        m.simple_annual_profit_usd
    );
}

fn cmd_sensitivity(
    scenario_path: Option<&Path>,
    overrides: &InputOverrides,
    json: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let scenario = resolve_scenario(scenario_path, overrides)?;
    let table = run_for_scenario(&scenario)?;

    if let Some(path) = output {
        std::fs::write(path, sensitivity_csv(&table))?;
        info!(path = %path.display(), rows = table.rows.len(), "wrote sensitivity csv");
        println!(
            "✓ Exported {} sensitivity rows to {}",
            table.rows.len(),
            path.display()
        );
    } else if json {
        println!("{}", to_json(&table)?);
    } else {
        print_sensitivity(&table);
    }
    Ok(())
}

fn print_sensitivity(table: &SensitivityTable) {
    println!(
        "Sensitivity of {} (base value {})",
        table.parameter, table.base_value
    );
    println!(
        "{:>6}  {:>14}  {:>16}  {:>16}  {:>16}",
        "Change", "Value", "Production (gal)", "Revenue (USD)", "Profit (USD)"
    );
    for row in &table.rows {
        println!(
            "{:>6}  {:>14.4}  {:>16.2}  {:>16.2}  {:>16.2}",
            row.change,
            row.value,
            row.annual_production_gal,
            row.annual_revenue_usd,
            row.simple_annual_profit_usd
        );
    }
}

fn cmd_tables(json: bool) -> AppResult<()> {
    if json {
        println!("{}", to_json(&[CAPEX, OPEX])?);
        return Ok(());
    }
    print_table(&CAPEX);
    println!();
    print_table(&OPEX);
    Ok(())
}

fn print_table(table: &ExpenditureTable) {
    let kind = table.kind();
    println!("{kind}:");
    println!("  {:<22} {:>14}", kind.item_header(), format!("Cost ({})", kind.cost_unit()));
    for item in table.items() {
        println!("  {:<22} {:>14.0}", item.name, item.cost);
    }
    println!("  {:<22} {:>14.0}", "Total", table.total());
}

fn cmd_diagram(scenario_path: Option<&Path>, inputs: &InputArgs, dot: bool) -> AppResult<()> {
    let scenario = resolve_scenario(scenario_path, &inputs.overrides())?;
    let diagram = evaluate_base_case(&scenario)?.diagram();

    if dot {
        print!("{}", diagram.to_dot());
    } else {
        println!("{}", diagram.chain_text());
    }
    Ok(())
}

fn cmd_init(scenario_path: &Path, name: &str) -> AppResult<()> {
    let scenario = Scenario::new(name);
    save_scenario(scenario_path, &scenario)?;
    println!("✓ Wrote default scenario to {}", scenario_path.display());
    Ok(())
}
