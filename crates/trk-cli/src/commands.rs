use anyhow::{bail, Context};
use colored::Colorize;
use tracing::debug;
use trk_config::KindRegistry;
use trk_profiles::ProfileDocument;
use trk_provider::{ConfigProvider, ProviderSettings};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let provider = build_provider(&cli)?;
    let registry = KindRegistry::with_builtin_kinds();
    match cli.command {
        Command::Profiles => cmd_profiles(&provider),
        Command::Kinds => cmd_kinds(&registry),
        Command::Moods(args) => cmd_moods(&provider, args),
        Command::Show(args) => cmd_show(&provider, &registry, args, cli.format),
        Command::Check(args) => cmd_check(&provider, &registry, args),
    }
}

/// Settings layers: defaults, settings file, environment, then flags.
fn build_provider(cli: &Cli) -> anyhow::Result<ConfigProvider> {
    let mut settings = ProviderSettings::load_optional(&cli.settings)
        .with_context(|| format!("loading settings from {}", cli.settings.display()))?
        .with_env();
    if let Some(dir) = &cli.config_dir {
        settings = settings.with_user_config_dir(dir);
    }
    if cli.no_bundled {
        settings = settings.with_bundled(false);
    }
    debug!(?settings, "provider settings");
    Ok(ConfigProvider::new(settings))
}

fn cmd_profiles(provider: &ConfigProvider) -> anyhow::Result<()> {
    let profiles = provider.available_profiles()?;
    if profiles.is_empty() {
        println!("No profiles found.");
    }
    for profile in profiles {
        println!("{}", profile.bold());
    }
    Ok(())
}

fn cmd_kinds(registry: &KindRegistry) -> anyhow::Result<()> {
    for entry in registry.iter() {
        println!("{:<10} {}", entry.name.bold(), entry.file_name.dimmed());
    }
    Ok(())
}

fn cmd_moods(provider: &ConfigProvider, args: MoodsArgs) -> anyhow::Result<()> {
    let moods = provider.available_moods(&args.profiles)?;
    if moods.is_empty() {
        println!("No moods offered by the selected profiles.");
    }
    for mood in moods {
        println!("{}", mood.cyan());
    }
    Ok(())
}

fn cmd_show(
    provider: &ConfigProvider,
    registry: &KindRegistry,
    args: ShowArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mood = args.mood.as_deref();
    let config = provider
        .load_by_name(registry, &args.kind, &args.profiles, mood)
        .with_context(|| format!("loading {}", args.kind))?;

    if args.sources {
        // The kind resolved above, so the lookup cannot miss.
        if let Some(entry) = registry.get(&args.kind) {
            let documents = provider.loader().overlays(entry.file_name, &args.profiles, mood)?;
            print_sources(&documents);
        }
    }

    let value = config.to_json()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        OutputFormat::Text | OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&value)?),
    }
    Ok(())
}

fn print_sources(documents: &[ProfileDocument]) {
    if documents.is_empty() {
        eprintln!("{}", "No overlays applied; showing defaults.".dimmed());
    }
    for document in documents {
        eprintln!(
            "{} {} {}",
            "overlay".green(),
            format!("[{}]", document.origin).dimmed(),
            document.path.display()
        );
    }
}

fn cmd_check(provider: &ConfigProvider, registry: &KindRegistry, args: CheckArgs) -> anyhow::Result<()> {
    let profiles = if args.profiles.is_empty() {
        provider.available_profiles()?
    } else {
        args.profiles
    };
    let moods = provider.available_moods(&profiles)?;

    let mut failures = 0usize;
    for profile in &profiles {
        let selection = [profile.as_str()];
        let variants = std::iter::once(None).chain(moods.iter().map(|mood| Some(mood.as_str())));
        for mood in variants {
            for entry in registry.iter() {
                let label = match mood {
                    Some(mood) => format!("{profile} ({mood}) {}", entry.name),
                    None => format!("{profile} {}", entry.name),
                };
                match provider.load_by_name(registry, entry.name, &selection, mood) {
                    Ok(_) => println!("  {} {}", "✓".green(), label),
                    Err(err) => {
                        failures += 1;
                        let tag = if err.is_content_error() { "✗".red() } else { "✗ internal".red().bold() };
                        println!("  {} {}: {}", tag, label, err);
                    }
                }
            }
        }
    }

    if failures > 0 {
        bail!("{failures} configuration load(s) failed");
    }
    println!("{} {} profile(s) loaded cleanly.", "✓".green().bold(), profiles.len());
    Ok(())
}
