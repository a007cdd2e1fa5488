//! # Lazuri CLI
//!
//! A command line front end for [`lazuri_conjugation`]. It loads a lexicon
//! (the built-in sample entries unless `--lexicon` names a JSON file), an
//! optional engine configuration, and prints conjugations either as
//! region-grouped lines or as the JSON response body.

pub mod cli;

use std::fs;

use anyhow::{Context, Result};
use lazuri_conjugation::{Engine, EngineConfig, Lexicon, MemoryLexicon, Response, sample};
use tracing::debug;

use cli::{Command, ConjugateArgs, LazuriCli};

/// Build the engine the invocation describes.
pub fn engine(cli: &LazuriCli) -> Result<Engine<MemoryLexicon>> {
    let lexicon = match &cli.lexicon {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading lexicon {}", path.display()))?;
            MemoryLexicon::from_json(&json)
                .with_context(|| format!("loading lexicon {}", path.display()))?
        }
        None => sample::lexicon(),
    };
    debug!(verbs = lexicon.len(), "lexicon loaded");

    let config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading configuration {}", path.display()))?;
            EngineConfig::from_json(&json)
                .with_context(|| format!("loading configuration {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    Ok(Engine::new(lexicon).with_config(config))
}

/// Run the invocation and return what it prints.
pub fn run(cli: &LazuriCli) -> Result<String> {
    let engine = engine(cli)?;
    match &cli.command {
        Command::Conjugate(args) => conjugate(&engine, args),
        Command::Verbs { language } => Ok(list_verbs(&engine, language)),
    }
}

fn conjugate(engine: &Engine<MemoryLexicon>, args: &ConjugateArgs) -> Result<String> {
    match engine.conjugate(&args.to_request()) {
        Ok(response) if args.json => Ok(serde_json::to_string_pretty(&response)?),
        Ok(response) => Ok(render(&response)),
        Err(error) if args.json => Ok(serde_json::to_string_pretty(&error.to_body())?),
        Err(error) => Err(error.into()),
    }
}

/// Region headers followed by indented lines.
pub fn render(response: &Response) -> String {
    let mut out = String::new();
    for (region, lines) in response.iter() {
        out.push_str(&format!("{region}\n"));
        for line in lines {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

fn list_verbs(engine: &Engine<MemoryLexicon>, language: &str) -> String {
    engine
        .lexicon()
        .verbs()
        .map(|verb| {
            let regions: Vec<String> = verb.regions().map(|region| region.to_string()).collect();
            let entry = format!("{} ({}; {})", verb.infinitive(), verb.class(), regions.join(", "));
            match verb.translation(language) {
                Some(translation) => format!("{entry}: {translation}\n"),
                None => format!("{entry}\n"),
            }
        })
        .collect()
}
