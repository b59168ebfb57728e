use cardmeta::application::{init, ConfigService, RenderBatchService, RenderCardService};
use cardmeta::cli::{format_batch_list, format_context_list, Cli, Commands};
use cardmeta::error::CardmetaError;
use cardmeta::infrastructure::FileSystemRepository;
use clap::Parser;
use std::fs;

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

fn run(cli: Cli) -> Result<(), CardmetaError> {
    match cli.command {
        Commands::Init {
            path,
            handle,
            base_url,
        } => init(&path, handle, base_url),
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!(
                    "social_handle = {}",
                    config.social_handle.unwrap_or_default()
                );
                println!("base_url = {}", config.base_url.unwrap_or_default());
                println!("locale = {}", config.locale);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: cardmeta config [--list | <key> [<value>]]");
                println!("Valid keys: social_handle, base_url, locale, created");
                Ok(())
            }
        }
        Commands::Render {
            context,
            output,
            handle,
        } => {
            let repo = FileSystemRepository::discover()?;
            let service = RenderCardService::new(repo);
            let rendered = service.execute(&context, handle.as_deref())?;

            match output {
                Some(path) => {
                    fs::write(&path, &rendered)?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", rendered),
            }
            Ok(())
        }
        Commands::Batch { out_dir } => {
            let repo = FileSystemRepository::discover()?;
            let service = RenderBatchService::new(repo);
            let outcomes = service.execute(out_dir.as_deref())?;
            print!("{}", format_batch_list(&outcomes));
            Ok(())
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            let entries = repo.list_contexts()?;
            print!("{}", format_context_list(&entries));
            Ok(())
        }
    }
}
