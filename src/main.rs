use std::io::Read;

use anyhow::Context;
use lsp_wire::UnionKind;
use lsp_wire::config::{Config, OutputStyle};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(first) = args.next() else {
        print_usage();
        return Err(anyhow::anyhow!("missing union kind"));
    };

    match first.as_str() {
        "kinds" => {
            print_kinds();
            Ok(())
        }
        "-V" | "--version" => {
            print_version();
            Ok(())
        }
        "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        name => {
            let kind = UnionKind::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("unknown union kind {name}"))?;
            run_transcode(kind, args)
        }
    }
}

fn run_transcode<I>(kind: UnionKind, mut args: I) -> anyhow::Result<()>
where
    I: Iterator<Item = String>,
{
    let mut path = None;
    let mut settings_path = None;
    let mut pretty = false;
    let mut report_variant = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--pretty" => pretty = true,
            "--report-variant" => report_variant = true,
            "--settings" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--settings requires a file"))?;
                settings_path = Some(value);
            }
            "-" => path = None,
            other if other.starts_with("--") => {
                return Err(anyhow::anyhow!("unknown flag {other}"));
            }
            other => path = Some(other.to_string()),
        }
    }

    let mut config = Config::default();
    if let Some(settings_path) = &settings_path {
        let text = std::fs::read_to_string(settings_path)
            .with_context(|| format!("read {settings_path}"))?;
        let settings: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("parse settings {settings_path}"))?;
        if config.apply_settings(&settings) {
            log::debug!("applied settings from {settings_path}");
        }
    }
    config.apply_env()?;
    if pretty {
        config.tool_mut().output = OutputStyle::Pretty;
    }
    if report_variant {
        config.tool_mut().report_variant = true;
    }

    let input = match &path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("read {path}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read stdin")?;
            buffer
        }
    };

    let transcoded = lsp_wire::transcode(kind, &input, config.tool())?;
    if config.tool().report_variant {
        eprintln!("variant: {}", transcoded.variant);
    }
    println!("{}", transcoded.output);
    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage:\n  lsp-wire <kind> [FILE|-] [--pretty] [--report-variant] [--settings FILE]\n  lsp-wire kinds\n  lsp-wire --version\n"
    );
}

fn print_kinds() {
    for kind in UnionKind::ALL {
        println!("{kind}");
    }
}

fn print_version() {
    println!("lsp-wire {}", env!("CARGO_PKG_VERSION"));
}
