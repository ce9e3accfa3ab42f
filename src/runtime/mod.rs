use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use songbook::config::{DiagnosticStream, Settings};
use songbook::library::TrackEntry;
use songbook::report::{Action, Diagnostics};

mod args;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Outcome {
    Printed,
    Rejected,
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let invocation = match args::parse(env::args().skip(1)) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("songbook: {e}");
            eprintln!("{}", args::USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    let settings = Settings::load_or_default();
    let sink: Box<dyn Write> = match settings.diagnostics.stream {
        DiagnosticStream::Stdout => Box::new(io::stdout()),
        DiagnosticStream::Stderr => Box::new(io::stderr()),
    };
    let mut diagnostics = Diagnostics::new(sink, settings.diagnostics);

    let outcome = execute(&invocation, &mut diagnostics, &mut io::stdout())?;
    Ok(match outcome {
        Outcome::Printed => ExitCode::SUCCESS,
        Outcome::Rejected => ExitCode::FAILURE,
    })
}

fn execute<D: Write, W: Write>(
    inv: &args::Invocation,
    diagnostics: &mut Diagnostics<D>,
    out: &mut W,
) -> io::Result<Outcome> {
    let created = TrackEntry::new(&inv.title, &inv.artist, inv.seconds, inv.rating);
    let Some(mut entry) = diagnostics.check(Action::Create, created)? else {
        return Ok(Outcome::Rejected);
    };

    for tag in &inv.tags {
        diagnostics.check(Action::Update, entry.add_tag(tag))?;
    }

    writeln!(out, "{entry}")?;
    if let Some(keyword) = &inv.keyword {
        let verdict = if entry.matches_keyword(keyword) {
            "match"
        } else {
            "no match"
        };
        writeln!(out, "{keyword:?}: {verdict}")?;
    }
    Ok(Outcome::Printed)
}
