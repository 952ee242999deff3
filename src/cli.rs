// =============================================================================
// CLI — La ligne de commande
// =============================================================================
//
// Une sous-commande par chapitre :
//   composition | memoize | random | purity | category | all
//
// Les options deviennent un `StudyConfig` ; `try_parse_from` sert aux tests.
//
// =============================================================================

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::styling;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::config::{Chapter, StudyConfig, DEFAULT_LIMIT, DEFAULT_SEED};

fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_name("N")
        .help("Argument de large_sum dans l'expérience de chronométrage.")
        .value_parser(value_parser!(u64))
        .default_value(DEFAULT_LIMIT.to_string())
}

fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .value_name("S")
        .help("Graine de l'expérience aléatoire reproductible.")
        .value_parser(value_parser!(u64))
        .default_value(DEFAULT_SEED.to_string())
}

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .value_name("FILE")
        .help("Fichier lu par getchar dans l'expérience de pureté (\"ab\" par défaut).")
        .value_parser(value_parser!(PathBuf))
}

pub fn build_cli() -> Command {
    let styles = styling::Styles::styled()
        .header(styling::AnsiColor::Yellow.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Yellow.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default());

    Command::new("catlearn")
        .version(std::env!("CARGO_PKG_VERSION"))
        .about("Exercices de théorie des catégories : identité, composition, mémoïsation")
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Trace chaque calcul de la mémoïsation."),
        )
        .subcommand(
            Command::new("composition")
                .about("Scénarios de composition et d'identité, puis les lois."),
        )
        .subcommand(
            Command::new("memoize")
                .about("Reconnaître la fonction mémoïsée au chronomètre.")
                .arg(limit_arg()),
        )
        .subcommand(
            Command::new("random")
                .about("Tenter de mémoïser un générateur aléatoire.")
                .arg(seed_arg()),
        )
        .subcommand(
            Command::new("purity")
                .about("Mémoïser des fonctions pures et impures, puis comparer.")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("category").about("Lister toutes les flèches entre Void, () et Bool."),
        )
        .subcommand(
            Command::new("all")
                .about("Exécuter tous les chapitres.")
                .arg(limit_arg())
                .arg(seed_arg())
                .arg(input_arg()),
        )
}

fn config_from_matches(matches: &ArgMatches) -> StudyConfig {
    let mut config = StudyConfig::default();

    let (chapter, sub) = match matches.subcommand() {
        Some(("composition", sub)) => (Chapter::Composition, sub),
        Some(("memoize", sub)) => (Chapter::Memoize, sub),
        Some(("random", sub)) => (Chapter::Random, sub),
        Some(("purity", sub)) => (Chapter::Purity, sub),
        Some(("category", sub)) => (Chapter::Category, sub),
        Some(("all", sub)) => (Chapter::All, sub),
        _ => unreachable!(),
    };
    config.chapter = chapter;
    config.verbose = matches.get_flag("verbose") || sub.get_flag("verbose");

    if let Ok(Some(&limit)) = sub.try_get_one::<u64>("limit") {
        config.limit = limit;
    }
    if let Ok(Some(&seed)) = sub.try_get_one::<u64>("seed") {
        config.seed = seed;
    }
    if let Ok(Some(input)) = sub.try_get_one::<PathBuf>("input") {
        config.input = Some(input.clone());
    }

    config
}

pub fn parse_args() -> StudyConfig {
    config_from_matches(&build_cli().get_matches())
}

pub fn try_parse_from<I, T>(args: I) -> Result<StudyConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    Ok(config_from_matches(&matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = try_parse_from(["catlearn", "all"]).unwrap();
        assert_eq!(config, StudyConfig::default());
    }

    #[test]
    fn test_memoize_limit() {
        let config = try_parse_from(["catlearn", "memoize", "--limit", "42"]).unwrap();
        assert_eq!(config.chapter, Chapter::Memoize);
        assert_eq!(config.limit, 42);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_verbose_is_global() {
        let config = try_parse_from(["catlearn", "random", "--seed", "7", "-v"]).unwrap();
        assert_eq!(config.chapter, Chapter::Random);
        assert_eq!(config.seed, 7);
        assert!(config.verbose);
    }

    #[test]
    fn test_purity_input() {
        let config = try_parse_from(["catlearn", "purity", "--input", "notes.txt"]).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_chapter_required() {
        assert!(try_parse_from(["catlearn"]).is_err());
        assert!(try_parse_from(["catlearn", "memoize", "--limit", "nope"]).is_err());
    }

    #[test]
    fn test_help_is_in_french() {
        let help = build_cli().render_long_help().to_string();
        assert!(help.contains("Exercices de théorie des catégories"));
        assert!(help.contains("Exécuter tous les chapitres."));
    }

    #[test]
    fn test_cli_is_consistent() {
        build_cli().debug_assert();
    }
}
