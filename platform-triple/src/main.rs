use axoasset::{serde_json, SourceFile};
use camino::Utf8Path;
use clap::Parser;
use miette::{IntoDiagnostic, Report};
use platform_triple::platforms::{triple_to_display_name, KNOWN_TRIPLES};
use platform_triple::{platform_report, PlatformReport, SdkInfo, Triple};
use tracing::info;

use cli::{ClassifyArgs, Cli, Commands, OutputFormat};

mod cli;

fn main() {
    let config = Cli::parse();
    axocli::CliAppBuilder::new("platform-triple")
        .verbose(config.verbose)
        .json_errors(config.output_format == OutputFormat::Json)
        .start(config, real_main);
}

fn real_main(app: &axocli::CliApp<Cli>) -> Result<(), Report> {
    let config = &app.config;
    match &config.command {
        Commands::Classify(args) => {
            let reports = classify(args)?;
            print_reports(config.output_format, &reports)
        }
        Commands::Known => {
            let reports = known()?;
            print_reports(config.output_format, &reports)
        }
        Commands::Schema => {
            let schema = PlatformReport::json_schema();
            let json = serde_json::to_string_pretty(&schema).into_diagnostic()?;
            println!("{json}");
            Ok(())
        }
    }
}

fn classify(args: &ClassifyArgs) -> Result<Vec<PlatformReport>, Report> {
    let sdk = args.sdk_info.as_deref().map(load_sdk_info).transpose()?;
    let variant = args.zipper_with.as_deref().map(parse_triple).transpose()?;

    let mut reports = Vec::with_capacity(args.triples.len());
    for triple in &args.triples {
        let triple = parse_triple(triple)?;
        reports.push(platform_report(&triple, sdk.as_ref(), variant.as_ref())?);
    }
    Ok(reports)
}

fn known() -> Result<Vec<PlatformReport>, Report> {
    let mut reports = vec![];
    for triple in KNOWN_TRIPLES.iter().flat_map(|triples| triples.iter()) {
        let triple = parse_triple(triple)?;
        reports.push(platform_report(&triple, None, None)?);
    }
    Ok(reports)
}

fn parse_triple(triple: &str) -> platform_triple::Result<Triple> {
    Ok(triple.parse()?)
}

fn load_sdk_info(path: &Utf8Path) -> platform_triple::Result<SdkInfo> {
    info!("loading SDK info from {path}");
    let source = SourceFile::load_local(path)?;
    Ok(source.deserialize_json()?)
}

fn print_reports(format: OutputFormat, reports: &[PlatformReport]) -> Result<(), Report> {
    match format {
        OutputFormat::Human => {
            for report in reports {
                print_report(report);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(reports).into_diagnostic()?;
            println!("{json}");
        }
    }
    Ok(())
}

fn print_report(report: &PlatformReport) {
    let heading_sty = console::Style::new().bold();
    let missing_sty = console::Style::new().dim();
    let missing = missing_sty.apply_to("(none)");

    match triple_to_display_name(&report.target) {
        Some(display_name) => eprintln!(
            "{} ({display_name})",
            heading_sty.apply_to(&report.target)
        ),
        None => eprintln!("{}", heading_sty.apply_to(&report.target)),
    }
    match &report.platform_name {
        Some(name) => eprintln!("  platform: {name}"),
        None => eprintln!("  platform: {missing}"),
    }
    if let Some(kind) = &report.darwin_platform {
        eprintln!("  apple platform: {kind:?}");
    }
    eprintln!("  architecture: {}", report.major_architecture);
    eprintln!("  module triple: {}", report.module_triple);
    eprintln!("  unversioned triple: {}", report.unversioned_triple);
    if report.simulator {
        if report.infers_simulator {
            eprintln!("  simulator (inferred from the architecture)");
        } else {
            eprintln!("  simulator");
        }
    }
    if report.mac_catalyst {
        eprintln!("  mac catalyst");
    }
    match &report.runtime_compatibility_version {
        Some(version) => eprintln!("  runtime compatibility version: {version}"),
        None => eprintln!("  runtime compatibility version: {missing}"),
    }
    if report.requires_runtime_rpath {
        eprintln!("  requires an rpath to the runtime");
    }
    if let Some(version) = &report.target_sdk_version {
        eprintln!("  target SDK version: {version}");
    }
    if let Some(zippering) = &report.zippering {
        let verdict = if zippering.compatible {
            "can"
        } else {
            "can't"
        };
        eprintln!("  {verdict} zipper with {}", zippering.variant);
    }
    eprintln!();
}
