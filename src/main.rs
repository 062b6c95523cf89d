//! solar-sizer entry point — CLI wiring and config-driven sizing.

use std::path::Path;
use std::process;

use solar_sizer::config::SiteConfig;
use solar_sizer::demand::aggregate::DemandSummary;
use solar_sizer::io::export::export_csv;
use solar_sizer::sizing::size_system;
use solar_sizer::solar::irradiance::worst_month_daily_yield;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    backup_hours: Option<f32>,
    latitude: Option<f32>,
    bom_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("solar-sizer — off-grid/hybrid solar power system sizing");
    eprintln!();
    eprintln!("Usage: solar-sizer [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load site from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (home_basic)");
    eprintln!("  --backup-hours <f32>     Override backup duration");
    eprintln!("  --latitude <f32>         Override site latitude");
    eprintln!("  --bom-out <path>         Export component bill to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after sizing");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the home_basic preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        backup_hours: None,
        latitude: None,
        bom_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--backup-hours" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --backup-hours requires a value");
                    process::exit(1);
                }
                if let Ok(h) = args[i].parse::<f32>() {
                    cli.backup_hours = Some(h);
                } else {
                    eprintln!(
                        "error: --backup-hours value \"{}\" is not a valid number",
                        args[i]
                    );
                    process::exit(1);
                }
            }
            "--latitude" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --latitude requires a value");
                    process::exit(1);
                }
                if let Ok(lat) = args[i].parse::<f32>() {
                    cli.latitude = Some(lat);
                } else {
                    eprintln!(
                        "error: --latitude value \"{}\" is not a valid number",
                        args[i]
                    );
                    process::exit(1);
                }
            }
            "--bom-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --bom-out requires a path argument");
                    process::exit(1);
                }
                cli.bom_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then home_basic
    let mut site = if let Some(ref path) = cli.scenario_path {
        match SiteConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match SiteConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        SiteConfig::home_basic()
    };

    // Apply overrides
    if let Some(hours) = cli.backup_hours {
        site.site.backup_hours = hours;
    }
    if let Some(lat) = cli.latitude {
        site.site.latitude = Some(lat);
    }

    // Validate
    let errors = site.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Aggregate demand and reduce the irradiance series
    let appliances = site.build_appliances();
    let demand = DemandSummary::from_appliances(&appliances);
    let series = site.irradiance_series();
    let yield_kwh = worst_month_daily_yield(series.as_deref());

    println!("{demand}");
    println!("Worst-month yield:   {yield_kwh:.2} kWh/kWp/day");

    // Size the system
    let design = match size_system(
        demand.total_kwh,
        site.site.backup_hours,
        yield_kwh,
        &site.policy,
    ) {
        Ok(design) => design,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    println!("\n{design}");

    // Export component bill if requested
    if let Some(ref path) = cli.bom_out {
        if let Err(e) = export_csv(&design, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Component bill written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(solar_sizer::api::AppState { demand, design });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(solar_sizer::api::serve(state, addr));
    }
}
