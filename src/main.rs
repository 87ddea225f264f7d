use clap::Parser;
use roster::application::Registry;
use roster::cli::{format_student, with_extension, Cli, Commands, ExportFormat};
use roster::error::{Result, RosterError};
use roster::infrastructure::logging::init_logging;
use roster::infrastructure::{Config, ExportCapabilities, JsonFileStore};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = Config::load_from_dir(&current_dir)?.with_overrides(cli.file);

    // Logging problems are reported but never stop the command
    let _logger = match init_logging(cli.log_level.as_deref(), &config.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    let capabilities = ExportCapabilities::detect();
    let mut registry = Registry::open(JsonFileStore::new(&config.data_file));

    match cli.command {
        Commands::Add {
            name,
            age,
            gender,
            id,
        } => {
            println!("{}", registry.try_create(&name, age, &gender, &id)?);
        }
        Commands::List => {
            println!("{}", registry.read_all());
        }
        Commands::Show { id } => {
            let student = registry
                .find_by_id(&id)
                .ok_or(RosterError::StudentNotFound(id))?;
            println!("{}", format_student(student));
        }
        Commands::Update {
            id,
            name,
            age,
            gender,
            enroll,
            drop,
        } => {
            for course in &enroll {
                println!("{}", registry.try_enroll_course(&id, course)?);
            }
            for course in &drop {
                println!("{}", registry.try_remove_course(&id, course)?);
            }
            println!(
                "{}",
                registry.try_update(&id, name.as_deref(), age, gender.as_deref())?
            );
        }
        Commands::Remove { id } => {
            println!("{}", registry.try_delete(&id)?);
        }
        Commands::Search { query } => {
            println!("{}", registry.search(&query));
        }
        Commands::Export { format, path } => {
            if registry.students().is_empty() {
                println!("No students to export. Please add students first.");
                return Ok(());
            }

            let default_path = match format {
                ExportFormat::Csv => &config.csv_file,
                ExportFormat::Xlsx => &config.xlsx_file,
            };
            let target = with_extension(
                path.as_deref().unwrap_or(default_path.as_path()),
                format.extension(),
            );

            let message = match format {
                ExportFormat::Csv => registry.export_csv(&target),
                ExportFormat::Xlsx => registry.export_spreadsheet(&target, capabilities),
            };
            println!("{}", message);
        }
        Commands::Save => {
            println!("{}", registry.persist());
        }
    }

    Ok(())
}
