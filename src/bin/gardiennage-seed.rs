#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use gardiennage::{
    fixtures, generate_shifts, io, parse_reference_date, seed, DocumentId, DocumentStore,
    JsonStore, MemoryStore, SeedOptions, Seeder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Seed d'une base de démonstration de planning de gardiennage
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`, filtre via RUST_LOG)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

/// Répertoire du store JSON quand --store n'est pas fourni.
#[cfg(not(feature = "mongo"))]
const DEFAULT_STORE_DIR: &str = "seed-data";

#[derive(Args, Debug)]
struct StoreArgs {
    /// Répertoire du store JSON (prioritaire sur MongoDB quand il est fourni)
    #[arg(long, env = "GARDIENNAGE_STORE")]
    store: Option<PathBuf>,

    /// URI MongoDB
    #[cfg(feature = "mongo")]
    #[arg(long, env = "MONGODB_URI", default_value = gardiennage::mongo::DEFAULT_URI)]
    mongo_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backend {
    Json(PathBuf),
    #[cfg(feature = "mongo")]
    Mongo(String),
}

impl StoreArgs {
    /// `--store` explicite > MongoDB (feature `mongo`) > `seed-data`.
    fn backend(&self) -> Backend {
        match &self.store {
            Some(dir) => Backend::Json(dir.clone()),
            None => self.default_backend(),
        }
    }

    #[cfg(feature = "mongo")]
    fn default_backend(&self) -> Backend {
        Backend::Mongo(self.mongo_uri.clone())
    }

    #[cfg(not(feature = "mongo"))]
    fn default_backend(&self) -> Backend {
        Backend::Json(PathBuf::from(DEFAULT_STORE_DIR))
    }
}

#[derive(Args, Debug)]
struct GenArgs {
    /// Date de référence `YYYY-MM-DD` ou `YYYY-MM` (défaut : aujourd'hui)
    #[arg(long)]
    date: Option<String>,

    /// Graine du générateur aléatoire (sortie reproductible)
    #[arg(long)]
    seed: Option<u64>,

    /// Export CSV des gardes générées
    #[arg(long)]
    export_csv: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Vider puis peupler la base (utilisateurs, gardes, événements)
    Run {
        #[command(flatten)]
        store: StoreArgs,
        #[command(flatten)]
        generation: GenArgs,
        #[arg(long, default_value_t = gardiennage::password::SEED_COST)]
        bcrypt_cost: u32,
        /// N'écrit rien : store en mémoire
        #[arg(long)]
        dry_run: bool,
    },

    /// Vider les collections seulement
    Clear {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Générer et afficher les gardes du mois sans toucher au store
    Preview {
        #[command(flatten)]
        generation: GenArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    match execute(cli.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "seeding failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run {
            store,
            generation,
            bcrypt_cost,
            dry_run,
        } => {
            let mut target: Box<dyn DocumentStore> = if dry_run {
                Box::new(MemoryStore::new())
            } else {
                open_store(&store)?
            };
            let mut opts = SeedOptions::at(Utc::now());
            opts.bcrypt_cost = bcrypt_cost;
            if let Some(raw) = generation.date.as_deref() {
                opts.reference_date = parse_reference_date(raw)?;
            }
            let mut rng = make_rng(generation.seed);
            let report = Seeder::new(opts)
                .run(target.as_mut(), &mut rng)
                .context("seeding database")?;

            println!("Cleared {} document(s)", report.cleared);
            println!(
                "Users: {} | Shifts: {} | Events: {}",
                report.users(),
                report.shifts.len(),
                report.events
            );
            if let Some(path) = generation.export_csv {
                let names: HashMap<DocumentId, String> = report
                    .guards
                    .iter()
                    .map(|(id, user)| (id.clone(), user.name.clone()))
                    .collect();
                io::export_shifts_csv(&path, &report.shifts, &names)
                    .with_context(|| format!("exporting {}", path.display()))?;
            }
            print!("{}", report.credentials_summary());
            Ok(())
        }
        Commands::Clear { store } => {
            let mut target = open_store(&store)?;
            let removed = seed::clear(target.as_mut())?;
            println!("Cleared {removed} document(s)");
            Ok(())
        }
        Commands::Preview { generation } => {
            let guards: Vec<(DocumentId, String)> = fixtures::guard_names()
                .map(|name| (DocumentId::random(), name.to_string()))
                .collect();
            let ids: Vec<DocumentId> = guards.iter().map(|(id, _)| id.clone()).collect();
            let names: HashMap<DocumentId, String> = guards.into_iter().collect();

            let reference = reference_date(generation.date.as_deref())?;
            let mut rng = make_rng(generation.seed);
            let shifts = generate_shifts(&ids, reference, &mut rng)?;
            for shift in &shifts {
                println!("{}", io::shift_line(shift, &names));
            }
            if let Some(path) = generation.export_csv {
                io::export_shifts_csv(&path, &shifts, &names)
                    .with_context(|| format!("exporting {}", path.display()))?;
            }
            println!("{} shift(s)", shifts.len());
            Ok(())
        }
    }
}

fn open_store(args: &StoreArgs) -> Result<Box<dyn DocumentStore>> {
    match args.backend() {
        Backend::Json(dir) => Ok(Box::new(JsonStore::open(dir)?)),
        #[cfg(feature = "mongo")]
        Backend::Mongo(uri) => Ok(Box::new(gardiennage::mongo::MongoStore::connect(&uri)?)),
    }
}

fn reference_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => Ok(parse_reference_date(raw)?),
        None => Ok(Local::now().date_naive()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
