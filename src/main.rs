use anyhow::{Context, Result, bail};
use log::info;
use std::env;
use std::path::PathBuf;

use wiratan::{HouseholdStore, SheetConfig, export_file, occupation_breakdown, read_sheet_file};

struct Args {
    sheet: PathBuf,
    year: Option<i32>,
    export: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut sheet = None;
    let mut year = None;
    let mut export = None;
    let mut json = false;

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--year" => {
                let value = iter.next().context("--year needs a value")?;
                year = Some(value.parse().context("--year must be a number")?);
            }
            "--export" => {
                export = Some(PathBuf::from(iter.next().context("--export needs a path")?));
            }
            "--json" => json = true,
            other if sheet.is_none() && !other.starts_with('-') => {
                sheet = Some(PathBuf::from(other));
            }
            other => bail!("unexpected argument: {other}"),
        }
    }

    let sheet =
        sheet.context("usage: wiratan <master-sheet.csv> [--year N] [--export <path>] [--json]")?;
    Ok(Args {
        sheet,
        year,
        export,
        json,
    })
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = match args.year {
        Some(year) => SheetConfig::for_year(year),
        None => SheetConfig::default(),
    };

    info!("loading master sheet from {}", args.sheet.display());
    let batch = read_sheet_file(&args.sheet, &config)
        .with_context(|| format!("failed to read {}", args.sheet.display()))?;

    let mut store = HouseholdStore::new();
    store.import(batch);

    let stats = store.stats();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", stats.summary());
        let breakdown = occupation_breakdown(store.records());
        if !breakdown.is_empty() {
            println!("  Pekerjaan:");
            for (occupation, count) in breakdown {
                println!("    {occupation}: {count}");
            }
        }
    }

    if let Some(path) = args.export {
        export_file(store.records(), &path)
            .with_context(|| format!("failed to export to {}", path.display()))?;
        info!("export written to {}", path.display());
    }

    Ok(())
}
