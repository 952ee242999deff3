// =============================================================================
// CATLEARN — Point d'entrée : les exercices, chapitre par chapitre
// =============================================================================
//
// Chapitre 1 : composition et identité (+ vérification des lois)
// Chapitre 2 : mémoïsation (chronomètre, aléatoire, pureté) et la petite
//              catégorie Void / () / Bool
//
// =============================================================================

use std::fs::File;
use std::process::ExitCode;

use tracing::{error, Level};

use catlearn::cli;
use catlearn::config::{Chapter, StudyConfig};
use catlearn::core::finite::{self, FiniteObject, BOOL_ENDOMORPHISMS};
use catlearn::experiments::{composition, purity, random, timing};
use catlearn::StudyResult;

fn section(title: &str) {
    println!("\n═══ {} ═══\n", title);
}

fn composition_chapter() -> StudyResult<()> {
    section("CHAPITRE 1 : Composition et identité");
    let samples: Vec<i64> = (-100..=100).collect();
    println!("{}", composition::run(&samples)?);
    Ok(())
}

fn memoize_chapter(config: &StudyConfig) {
    section("CHAPITRE 2.1 : Mémoïsation au chronomètre");
    println!("{}", timing::run(config.limit));
}

fn random_chapter(config: &StudyConfig) {
    section("CHAPITRE 2.2-2.3 : Mémoïser le hasard");
    println!("{}", random::run(config.seed));
}

fn purity_chapter(config: &StudyConfig) -> StudyResult<()> {
    section("CHAPITRE 2.4 : Pureté");
    let report = match &config.input {
        Some(path) => purity::run_with_input(File::open(path)?)?,
        None => purity::run()?,
    };
    println!("{}", report);
    Ok(())
}

fn category_chapter() {
    section("CHAPITRE 2.5-2.6 : La catégorie Void, (), Bool");

    println!("Les fonctions Bool → Bool :");
    for (name, f) in BOOL_ENDOMORPHISMS {
        println!("  {:<6} false ↦ {:<5}  true ↦ {}", name, f(false), f(true));
    }

    println!("\nNombre de flèches |Hom(A, B)| :");
    for a in FiniteObject::ALL {
        for b in FiniteObject::ALL {
            println!("  {:>4} → {:<4} : {}", a, b, finite::hom_count(a, b));
        }
    }

    let arrows = finite::all_arrows();
    println!("\nToutes les flèches ({}) :", arrows.len());
    for arrow in &arrows {
        println!("  {}", arrow);
    }
}

fn run(config: &StudyConfig) -> StudyResult<()> {
    match config.chapter {
        Chapter::Composition => composition_chapter()?,
        Chapter::Memoize => memoize_chapter(config),
        Chapter::Random => random_chapter(config),
        Chapter::Purity => purity_chapter(config)?,
        Chapter::Category => category_chapter(),
        Chapter::All => {
            composition_chapter()?;
            memoize_chapter(config);
            random_chapter(config);
            purity_chapter(config)?;
            category_chapter();
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = cli::parse_args();

    let level = if config.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
