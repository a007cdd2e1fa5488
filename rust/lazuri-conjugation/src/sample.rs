//! A small built-in lexicon covering each verb class, the preverbs, the
//! standard exception sets and a compound verb.

use crate::lexicon::{MemoryLexicon, Verb, VerbClass};
use crate::region::Region;

fn ergative(infinitive: &str, root: &str, en: &str, tr: &str) -> Verb {
    Verb::builder(infinitive, VerbClass::Ergative)
        .everywhere(root)
        .translation("en", en)
        .translation("tr", tr)
        .build()
}

pub fn lexicon() -> MemoryLexicon {
    use Region::*;
    use VerbClass::*;

    [
        ergative("ot̆axu", "t̆axums", "to break", "kırmak"),
        ergative("oç̌aru", "ç̌arums", "to write", "yazmak"),
        ergative("oç̌k̆omu", "ç̌k̆omums", "to eat", "yemek"),
        ergative("dok̆vatu", "dok̆vatums", "to cut", "kesmek"),
        ergative("meçamu", "meçams", "to give", "vermek"),
        ergative("geçamu", "geçams", "to hit", "vurmak"),
        ergative("okosu", "kosums", "to sweep", "süpürmek"),
        ergative("coxons", "coxons", "to be called", "adı olmak"),
        ergative("nena oç̌aru", "ç̌arums", "to write a letter", "mektup yazmak"),
        Verb::builder("gamaçamu", Ergative)
            .root(Fa, "gamaçams")
            .root(As, "gamçams")
            .root(Pz, "gamaçams")
            .root(Ho, "gamçams")
            .translation("en", "to take out")
            .translation("tr", "çıkarmak")
            .build(),
        Verb::builder("obgaru", Nominative)
            .everywhere("ibgars")
            .translation("en", "to cry")
            .translation("tr", "ağlamak")
            .build(),
        Verb::builder("ogzalu", Nominative)
            .root(As, "igzals")
            .root(Pz, "igzals")
            .translation("en", "to walk")
            .translation("tr", "yürümek")
            .build(),
        Verb::builder("egzalu", Nominative)
            .everywhere("yigzals")
            .root(Pz, "eyigzals")
            .translation("en", "to go up")
            .translation("tr", "çıkmak")
            .build(),
        Verb::builder("ulva", Nominative)
            .everywhere("ulun")
            .translation("en", "to go")
            .translation("tr", "gitmek")
            .build(),
        Verb::builder("oyoropu", Dative)
            .everywhere("uyors")
            .translation("en", "to love")
            .translation("tr", "sevmek")
            .build(),
        Verb::builder("oşkinu", Dative)
            .root(Fa, "uçkins")
            .root(As, "uşkuns")
            .root(Pz, "uşkuns")
            .root(Ho, "uçkins")
            .translation("en", "to know")
            .translation("tr", "bilmek")
            .build(),
    ]
    .into_iter()
    .collect()
}
