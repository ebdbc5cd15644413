use clap::{Parser, Subcommand};
use navmark::model::Totals;
use navmark::{config, convert, output, render, table, tree};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "navmark")]
#[command(about = "Bookmark collection converter and navigation site generator")]
#[command(long_about = "\
Bookmark collection converter and navigation site generator

Bookmarks live in two interchangeable forms plus one rendering target:

  CSV table       one row per bookmark, category/subcategory denormalized
  YAML tree       categories > subcategories > bookmarks
  HTML page       one static, self-contained, client-side-searchable page

Each transform reads one input file and writes one output file:

  navmark to-yaml bookmarks.csv bookmarks.yaml
  navmark to-csv  bookmarks.yaml bookmarks.csv
  navmark render  bookmarks.yaml index.html
  navmark build   bookmarks.csv            # full pipeline: csv > yaml > html

CSV headers are recognized in English (category, subcategory, name, url,
icon, tags, description) or Chinese (一级分类, 二级分类, 网站名称, 网址,
图标URL, 标签, 简介). The tags column is a comma-separated list.

Run 'navmark gen-config' to print a documented config.toml controlling the
rendered page's title and theme colors.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Group a CSV bookmark table into a nested YAML tree
    ToYaml {
        /// Input CSV table
        #[arg(default_value = "bookmarks.csv")]
        input: PathBuf,
        /// Output YAML tree
        #[arg(default_value = "bookmarks.yaml")]
        output: PathBuf,
    },
    /// Flatten a YAML bookmark tree back into a CSV table
    ToCsv {
        /// Input YAML tree
        #[arg(default_value = "bookmarks.yaml")]
        input: PathBuf,
        /// Output CSV table
        #[arg(default_value = "bookmarks.csv")]
        output: PathBuf,
    },
    /// Render a YAML bookmark tree into a static navigation page
    Render {
        /// Input YAML tree
        #[arg(default_value = "bookmarks.yaml")]
        input: PathBuf,
        /// Output HTML page
        #[arg(default_value = "index.html")]
        output: PathBuf,
        /// Site config file (defaults are used when it doesn't exist)
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
    /// Run the full pipeline: CSV → YAML tree → HTML page
    Build {
        /// Input CSV table
        #[arg(default_value = "bookmarks.csv")]
        input: PathBuf,
        /// Intermediate YAML tree path
        #[arg(long = "tree", default_value = "bookmarks.yaml")]
        tree_path: PathBuf,
        /// Output HTML page
        #[arg(long, default_value = "index.html")]
        site: PathBuf,
        /// Site config file (defaults are used when it doesn't exist)
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
    /// Validate an input file (.csv or .yaml) without writing anything
    Check {
        /// Input file to validate
        #[arg(default_value = "bookmarks.csv")]
        input: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::ToYaml { input, output: out } => {
            let rows = table::read_rows(&input)?;
            let data = convert::rows_to_tree(&rows)?;
            tree::write_tree(&out, &data)?;
            output::print_tree_summary(&data);
            println!("Wrote {}", out.display());
        }
        Command::ToCsv { input, output: out } => {
            let data = tree::load_tree(&input)?;
            let rows = convert::tree_to_rows(&data);
            if rows.is_empty() {
                return Err(tree::TreeError::Empty(input).into());
            }
            table::write_rows(&out, &rows)?;
            println!(
                "Exported {} to {}",
                output::format_totals(Totals::of(&data)),
                out.display()
            );
        }
        Command::Render {
            input,
            output: out,
            config,
        } => {
            let totals = render::render(&input, &out, &config)?;
            println!(
                "Rendered {} into {}",
                output::format_totals(totals),
                out.display()
            );
        }
        Command::Build {
            input,
            tree_path,
            site,
            config,
        } => {
            println!("==> Stage 1: Grouping {}", input.display());
            let rows = table::read_rows(&input)?;
            let data = convert::rows_to_tree(&rows)?;
            tree::write_tree(&tree_path, &data)?;
            output::print_tree_summary(&data);
            println!("Wrote {}", tree_path.display());

            println!("==> Stage 2: Rendering {}", site.display());
            let totals = render::render(&tree_path, &site, &config)?;
            println!(
                "Rendered {} into {}",
                output::format_totals(totals),
                site.display()
            );

            println!("==> Build complete: {}", site.display());
        }
        Command::Check { input } => {
            let ext = input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default()
                .to_lowercase();
            println!("==> Checking {}", input.display());
            let data = match ext.as_str() {
                "csv" => {
                    let rows = table::read_rows(&input)?;
                    convert::rows_to_tree(&rows)?
                }
                "yaml" | "yml" => tree::load_tree(&input)?,
                other => {
                    return Err(format!(
                        "unsupported input extension '.{other}' (expected .csv, .yaml, or .yml)"
                    )
                    .into());
                }
            };
            output::print_tree_summary(&data);
            println!("==> Input is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
