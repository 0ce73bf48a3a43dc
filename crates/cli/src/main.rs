// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use meteringpoint_api::{
    ChangeMasterDataRequest, CreateMeteringPointRequest, MasterDataResponse, ParentLookup,
    Rejection, Settings, change_master_data, create_master_data,
};
use meteringpoint_domain::{GsrnNumber, MasterData, MeteringPoint};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use time::OffsetDateTime;
use tracing::{error, info};

/// Validates metering point master data requests and prints the outcome as
/// JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON settings file. Defaults apply when omitted.
    #[arg(short, long)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the master data of a new metering point.
    Create {
        /// Path to the JSON request.
        #[arg(short, long)]
        request: PathBuf,
        /// Path to a JSON array of metering points that may be parents.
        #[arg(short, long)]
        parents: Option<PathBuf>,
    },
    /// Validate a change to an existing metering point.
    Change {
        /// Path to the JSON request.
        #[arg(short, long)]
        request: PathBuf,
        /// Path to the JSON snapshot of the metering point being changed.
        #[arg(short, long)]
        current: PathBuf,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let text: String = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    let value: T = serde_json::from_str(&text)
        .map_err(|err| format!("Failed to parse {}: {err}", path.display()))?;
    Ok(value)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_parents(
    path: Option<&Path>,
) -> Result<HashMap<GsrnNumber, MasterData>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(HashMap::new());
    };
    let points: Vec<MeteringPoint> = read_json(path)?;
    let parents: HashMap<GsrnNumber, MasterData> = points
        .into_iter()
        .map(|point| (point.gsrn_number, point.master_data))
        .collect();
    Ok(parents)
}

/// Prints the accepted record or the rejection. Returns whether the request
/// was accepted.
fn report(
    gsrn_number: &str,
    outcome: Result<MasterData, Rejection>,
) -> Result<bool, Box<dyn std::error::Error>> {
    match outcome {
        Ok(master_data) => {
            print_json(&MasterDataResponse {
                gsrn_number: gsrn_number.to_string(),
                master_data,
                message: String::from("Master data accepted"),
            })?;
            Ok(true)
        }
        Err(rejection) => {
            print_json(&rejection.to_message())?;
            Ok(false)
        }
    }
}

fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let settings: Settings = Settings::load(args.settings.as_deref())?;

    match args.command {
        Command::Create { request, parents } => {
            let request: CreateMeteringPointRequest = read_json(&request)?;
            let parents: HashMap<GsrnNumber, MasterData> = load_parents(parents.as_deref())?;
            let lookup: &dyn ParentLookup = &parents;
            let gsrn_number: String = request.gsrn_number.clone().unwrap_or_default();
            report(&gsrn_number, create_master_data(&request, lookup))
        }
        Command::Change { request, current } => {
            let request: ChangeMasterDataRequest = read_json(&request)?;
            let metering_point: MeteringPoint = read_json(&current)?;
            let outcome: Result<MasterData, Rejection> = change_master_data(
                &request,
                &metering_point,
                &settings.policy,
                OffsetDateTime::now_utc(),
            );
            report(metering_point.gsrn_number.value(), outcome)
        }
    }
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting metering point master data validation");

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
