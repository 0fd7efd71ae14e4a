//! Binary entrypoint: read one JSON request from stdin, write one verdict to stdout.
//!
//! Invalid input produces an ErrorOutput object on stdout and exit status 1.

use bot_engine::types::ErrorOutput;
use bot_engine::{Engine, EngineError, EvaluateRequest};
use std::io::{self, Read, Write};

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "bot-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let engine = Engine::with_defaults();
  let result = serde_json::from_str::<EvaluateRequest>(&raw)
    .map_err(EngineError::from)
    .and_then(|req| engine.process(req));

  let mut out = io::stdout().lock();
  match result {
    Ok(verdict) => {
      serde_json::to_writer(&mut out, &verdict)?;
      writeln!(out)?;
      Ok(())
    }
    Err(e) => {
      let err = match &e {
        EngineError::Validation { field, reason } => {
          ErrorOutput::new(reason.clone()).with_field(field.clone())
        }
        EngineError::Json(_) => ErrorOutput::new(e.to_string()),
      };
      serde_json::to_writer(&mut out, &err)?;
      writeln!(out)?;
      out.flush()?;
      std::process::exit(1);
    }
  }
}
