use clap::{Parser, Subcommand};
use shelf_core::{
    category_filter_from_param, config::resolve_catalog_path, BookRecord, Catalog, CatalogQuery,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Shelf book catalogue CLI")]
struct Cli {
    /// Catalogue YAML file (defaults to catalog/books.yaml)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books
    List {
        /// Only list books in this category ("All" for every book)
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one book
    Show {
        /// Exact title of the book
        title: String,
    },
    /// List categories
    Categories,
    /// List titles
    Titles,
}

fn summary_line(book: &BookRecord) -> String {
    match &book.author {
        Some(author) => format!("{} [{}] by {}", book.title, book.category, author),
        None => format!("{} [{}]", book.title, book.category),
    }
}

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

/// Execute one command against the catalogue, writing results to `out` and failures to `err`.
///
/// Returns the process exit status.
fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> io::Result<u8> {
    let catalog = match resolve_catalog_path(cli.catalog).and_then(|p| Catalog::load(&p)) {
        Ok(catalog) => catalog,
        Err(e) => {
            writeln!(err, "Error loading catalogue: {}", e)?;
            return Ok(FAILURE);
        }
    };
    let query = CatalogQuery::new(Arc::new(catalog));

    match cli.command {
        Commands::List { category } => {
            let filter = category_filter_from_param(category.as_deref());
            let books = query.get_all_books(filter.as_ref());
            if books.is_empty() {
                writeln!(out, "No books found.")?;
            } else {
                for book in books {
                    writeln!(out, "{}", summary_line(book))?;
                }
            }
        }
        Commands::Show { title } => match query.get_book_by_title(&title) {
            Ok(book) => {
                writeln!(out, "Title: {}", book.title)?;
                writeln!(out, "Category: {}", book.category)?;
                if let Some(author) = &book.author {
                    writeln!(out, "Author: {}", author)?;
                }
                if let Some(cover) = &book.cover {
                    writeln!(out, "Cover: {}", cover)?;
                }
                if let Some(summary) = &book.summary {
                    writeln!(out, "Summary: {}", summary)?;
                }
            }
            Err(_) => {
                writeln!(err, "Book not found: {}", title)?;
                return Ok(FAILURE);
            }
        },
        Commands::Categories => {
            for category in query.categories() {
                writeln!(out, "{}", category)?;
            }
        }
        Commands::Titles => {
            for title in query.titles() {
                writeln!(out, "{}", title)?;
            }
        }
    }

    Ok(SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            ExitCode::FAILURE
        }
    }
}
