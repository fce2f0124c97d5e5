// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

extern crate clap;
extern crate clap_derive;
extern crate tokio;
extern crate tracing;
extern crate tracing_subscriber;

use clap::Parser;
use clap_derive::Parser;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::fmt::format::FmtSpan;

use users_contract::{Config, ScenarioOutcome, ScenarioRunner, UsersClient};

#[derive(Parser, Debug)]
#[command(
    name = "users-contract",
    about = "Run the users API contract suite in declaration order"
)]
struct Args {
    #[arg(long, help = "Base URL of the API, overrides USERS_API_URL")]
    base_url: Option<String>,

    #[arg(
        long,
        help = "Page size requested by the listing scenario, overrides USERS_PER_PAGE",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    per_page: Option<u32>,

    #[arg(
        long,
        help = "Per-request timeout in seconds, overrides USERS_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: Option<u64>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma separated scenario names to run; order stays fixed"
    )]
    only: Vec<String>,

    #[arg(long, help = "Print the scenarios and exit", default_value = "false")]
    list: bool,

    #[arg(long, help = "Enable debug logging", default_value = "false")]
    debug: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api_url = base_url.clone();
        }
        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Some(Duration::from_secs(secs));
        }
        if self.debug {
            config.debug = true;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), eyre::Error> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let mut config = Config::from_env()?;
    args.apply(&mut config);

    let main_subscriber = tracing_subscriber::fmt()
        .compact()
        .with_ansi(true)
        .with_file(true)
        .with_target(false)
        .with_line_number(true)
        .with_span_events(FmtSpan::NONE)
        .with_max_level(if config.is_debug_enabled() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(main_subscriber)?;

    let mut runner = ScenarioRunner::with_default_suite(config.per_page);
    if !args.only.is_empty() {
        runner.retain_only(&args.only);
        if runner.is_empty() {
            eyre::bail!("No scenario matches --only {}", args.only.join(","));
        }
    }

    if args.list {
        for (name, description) in runner.descriptions() {
            println!("{name:<22} {description}");
        }
        return Ok(());
    }

    config.log_summary();
    let client = UsersClient::new(&config)?;
    let report = runner.run(&client).await;

    for scenario in &report.scenarios {
        match &scenario.outcome {
            ScenarioOutcome::Passed => info!("ok     {}", scenario.description),
            ScenarioOutcome::Failed(message) => {
                error!("FAILED {}: {}", scenario.description, message)
            }
        }
    }

    if !report.all_passed() {
        error!(
            "{} of {} scenarios failed (run {})",
            report.failed_count(),
            report.scenarios.len(),
            report.run_id
        );
        std::process::exit(1);
    }

    info!("All {} scenarios passed", report.scenarios.len());
    Ok(())
}
