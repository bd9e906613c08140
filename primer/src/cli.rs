use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "primer", about = "Classic algorithms and containers demo", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run every demo section and print the results.
    Demo {
        #[arg(long = "data-file", default_value = "sample.json")]
        data_file: PathBuf,
        #[arg(long = "random-len", default_value_t = 12)]
        random_len: usize,
    },
    /// Save KEY=VALUE pairs as a JSON record.
    Save {
        #[arg(long)]
        out: PathBuf,
        #[arg(value_parser = parse_key_value, required = true)]
        pairs: Vec<(String, String)>,
    },
    /// Load a JSON record and pretty-print it.
    Load { path: PathBuf },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_splits_on_first_equals() {
        assert_eq!(
            parse_key_value("expr=a=b"),
            Ok(("expr".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn demo_defaults() {
        let cli = Cli::try_parse_from(["primer", "demo"]).unwrap();
        match cli.command {
            Command::Demo { data_file, random_len } => {
                assert_eq!(data_file, PathBuf::from("sample.json"));
                assert_eq!(random_len, 12);
            }
            _ => panic!("expected demo"),
        }
    }
}
