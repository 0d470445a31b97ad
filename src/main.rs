use clap::Parser;
use rutherford::cli::{self, Args, OutputFormat};
use rutherford::error::Result;
use rutherford::events::{SimulationCommand, SimulationEvent};
use rutherford::worker::EngineWorker;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = cli::load_and_apply_config(args)?;

    if args.print_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let settings = config.settings();
    let worker = EngineWorker::spawn(config, true)?;
    worker.send(SimulationCommand::Reset(settings))?;
    worker.send(SimulationCommand::Start)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    loop {
        let event = worker.recv()?;
        match (&event, args.output) {
            (_, OutputFormat::Json) => cli::write_json_line(&mut out, &event)?,
            (SimulationEvent::Finished(finished), OutputFormat::Summary) => {
                cli::write_summary(&mut out, &settings, finished)?;
            }
            (_, OutputFormat::Summary) => {}
        }
        if matches!(event, SimulationEvent::Finished(_)) {
            break;
        }
    }
    out.flush()?;

    worker.shutdown()
}
