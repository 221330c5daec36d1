use anyhow::{Context, Result, bail};
use csdl_embed_config::Config;
use csdl_embed_engine::{
    CONTENT_TYPE, DirectorySource, EmbedScript, EmbedService, HtmlOptions, RenderOptions,
};
use csdl_embed_syntax::{classify, tokenize_with};
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

mod preview;

const USAGE: &str = "\
Usage:
  csdl-embed html <file|->              Highlight a CSDL file as an HTML fragment
  csdl-embed preview <file|->           Highlight a CSDL file in the terminal
  csdl-embed page <gist-id>             Render the widgets page for a gist
  csdl-embed script <gist-id> [--data]  Render the embed script for a gist
                                        (--data: raw snippet records via the template)
  csdl-embed init <snippets-path>       Write a config file pointing at a gist directory";

/// Read a whole file, or stdin for `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read CSDL from stdin")?;
        return Ok(content);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read CSDL file '{path}'"))
}

fn load_config() -> Result<Config> {
    let config_path = Config::config_path();
    match Config::load().context("Failed to load config file")? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None => bail!(
            "No config file found at {}. Create one with `csdl-embed init <snippets-path>`",
            config_path.display()
        ),
    }
}

/// Config if one exists, otherwise built-in defaults.
fn config_or_default() -> Result<Config> {
    Ok(Config::load()
        .context("Failed to load config file")?
        .unwrap_or_else(|| Config::new(PathBuf::from("."))))
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        html: HtmlOptions {
            escape_text: config.escape_text,
        },
        attribution_name: config.attribution_name.clone(),
        attribution_url: config.attribution_url.clone(),
    }
}

fn embed_script(config: &Config) -> Result<EmbedScript> {
    match &config.template_path {
        Some(path) => {
            let template = fs::read_to_string(path).with_context(|| {
                format!("Failed to read embed template '{}'", path.display())
            })?;
            Ok(EmbedScript::new(template))
        }
        None => Ok(EmbedScript::default()),
    }
}

fn embed_service(config: &Config) -> Result<EmbedService<DirectorySource>> {
    validate_snippets_dir(&config.snippets_path)?;
    let service = EmbedService::new(
        DirectorySource::new(&config.snippets_path),
        embed_script(config)?,
    );
    log::debug!("Serving gists from {}", service.source().root().display());
    Ok(service)
}

fn validate_snippets_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        bail!("Snippets path '{}' is not a directory", path.display());
    }
    Ok(())
}

fn run(args: &[String]) -> Result<()> {
    let command = args.get(1).map(String::as_str);
    let operand = args.get(2).map(String::as_str);
    let mut stdout = io::stdout().lock();

    match (command, operand) {
        (Some("html"), Some(path)) => {
            let config = config_or_default()?;
            let options = render_options(&config).html;
            writeln!(stdout, "{}", tokenize_with(&read_input(path)?, &options))?;
        }
        (Some("preview"), Some(path)) => {
            let events = classify(&read_input(path)?);
            let plain = !io::stdout().is_terminal();
            preview::write_preview(&mut stdout, &events, plain)?;
        }
        (Some("page"), Some(id)) => {
            let config = load_config()?;
            let page = embed_service(&config)?.page_for(id, &render_options(&config));
            writeln!(stdout, "{page}")?;
        }
        (Some("script"), Some(id)) => {
            let config = load_config()?;
            let service = embed_service(&config)?;
            let data = args.iter().skip(3).any(|arg| arg == "--data");
            let script = if data {
                service.data_script_for(id)
            } else {
                service.script_for(id, &render_options(&config))
            };
            log::debug!("Writing script ({CONTENT_TYPE})");
            write!(stdout, "{script}")?;
        }
        (Some("init"), Some(path)) => {
            let snippets_path = fs::canonicalize(path)
                .with_context(|| format!("Failed to resolve snippets path '{path}'"))?;
            validate_snippets_dir(&snippets_path)?;
            Config::new(snippets_path).save()?;
            log::info!("Wrote config file to {}", Config::config_path().display());
        }
        _ => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
