use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lazuri_conjugation::RawRequest;

#[derive(Debug, Parser)]
#[command(name = "lazuri")]
#[command(bin_name = "lazuri")]
#[command(about = "Conjugate Laz verbs across the dialect regions", long_about = None)]
pub struct LazuriCli {
    /// JSON lexicon to load instead of the built-in sample entries
    #[arg(short, long, global = true)]
    pub lexicon: Option<PathBuf>,

    /// JSON engine configuration (dispatch routes and exception sets)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Conjugate one verb
    Conjugate(ConjugateArgs),
    /// List the verbs in the lexicon
    Verbs {
        /// Translation language to show next to each infinitive
        #[arg(long, default_value = "en")]
        language: String,
    },
}

#[derive(Debug, Args)]
pub struct ConjugateArgs {
    pub infinitive: String,

    /// S1_Singular .. S3_Plural, or "all"
    #[arg(short, long, default_value = "all")]
    pub subject: String,

    /// O1_Singular .. O3_Plural, or "all"
    #[arg(short, long)]
    pub obj: Option<String>,

    #[arg(short, long)]
    pub tense: Option<String>,

    #[arg(short, long)]
    pub aspect: Option<String>,

    #[arg(long)]
    pub applicative: bool,

    #[arg(long)]
    pub causative: bool,

    #[arg(long)]
    pub optative: bool,

    #[arg(long, conflicts_with = "neg_imperative")]
    pub imperative: bool,

    #[arg(long)]
    pub neg_imperative: bool,

    /// Comma separated region codes (FA, AŞ, PZ, HO)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConjugateArgs {
    pub fn to_request(&self) -> RawRequest {
        let mut raw = RawRequest::new()
            .infinitive(self.infinitive.as_str())
            .subject(self.subject.as_str());
        raw.obj = self.obj.clone();
        raw.tense = self.tense.clone();
        raw.aspect = self.aspect.clone();
        raw.region = self.region.clone();
        for (set, flag) in [
            (self.applicative, &mut raw.applicative),
            (self.causative, &mut raw.causative),
            (self.optative, &mut raw.optative),
            (self.imperative, &mut raw.imperative),
            (self.neg_imperative, &mut raw.neg_imperative),
        ] {
            if set {
                *flag = Some("true".into());
            }
        }
        raw
    }
}
