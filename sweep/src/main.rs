// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fs,
    io::{self, BufWriter, Write},
};

use clap::{App, Arg, ArgMatches};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use subsweeper::{Field, Mission, Step};

fn main() -> io::Result<()> {
    let matches = App::new("Sweep")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Runs a mine-clearing script against a mine field and reports the score.")
        .arg(
            Arg::with_name("field")
                .value_name("FIELD")
                .help("path to the field file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("script")
                .value_name("SCRIPT")
                .help("path to the script file")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("show_ship")
                .short("s")
                .long("show-ship")
                .help("mark the ship's cell with # in every frame"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("print only the final verdict"),
        )
        .get_matches();

    init_tracing();

    let mut mission = load_mission(&matches)?;
    let quiet = matches.is_present("quiet");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for step in &mut mission {
        if !quiet {
            show_step(&mut out, &step)?;
        }
    }
    writeln!(out, "{}", mission.final_verdict())?;
    out.flush()
}

/// Install the stderr log subscriber, filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the field and script named on the command line and set up the mission.
fn load_mission(matches: &ArgMatches) -> io::Result<Mission> {
    // Both arguments are required, so clap guarantees they are present.
    let field_path = matches.value_of("field").unwrap_or_default();
    let script_path = matches.value_of("script").unwrap_or_default();

    let field: Field = fs::read_to_string(field_path)?.parse().map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {}", field_path, err),
        )
    })?;
    let script: Vec<String> = fs::read_to_string(script_path)?
        .lines()
        .map(|line| line.trim().to_owned())
        .collect();
    debug!(
        field = field_path,
        script = script_path,
        commands = script.len(),
        "loaded mission"
    );

    Ok(Mission::new(field, script).show_marker(matches.is_present("show_ship")))
}

/// Print one step: its number, the frame before, the command, and the frame after.
fn show_step(out: &mut impl Write, step: &Step) -> io::Result<()> {
    writeln!(out, "Step {}", step.number)?;
    writeln!(out)?;
    writeln!(out, "{}", step.before)?;
    writeln!(out)?;
    writeln!(out, "{}", step.command)?;
    writeln!(out)?;
    writeln!(out, "{}", step.after)?;
    writeln!(out)
}
