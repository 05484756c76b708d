//! Command-line surface. Each subcommand drives the sync layer end to end:
//! transport call, view model update, and for mutations the follow-up
//! refresh.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use bookgrader::api::{
    ApiError, Book, BookCreate, BookId, BookUpdate, CatalogClient, Genre, ReviewCreate,
};
use bookgrader::config::Config;
use bookgrader::feed::StatsFeed;
use bookgrader::mutations::{DeleteOutcome, MutationCoordinator};
use bookgrader::view::{CatalogIntent, CatalogViewModel, DetailState};

#[derive(Debug, Parser)]
#[command(name = "bookgrader", version, about = "Catalog client for the Book Grader server")]
pub struct Cli {
    /// Server origin override (e.g. http://127.0.0.1:8000).
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Explicit config file path.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog books.
    List {
        /// Only books tagged with this genre.
        #[arg(long)]
        genre: Option<Genre>,
    },
    /// Show one book with its reviews.
    Show { id: BookId },
    /// Add a book to the catalog.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        pages: u32,
        /// Repeat for multiple genres.
        #[arg(long = "genre")]
        genres: Vec<Genre>,
    },
    /// Update fields on an existing book. Omitted fields keep their values.
    Edit {
        id: BookId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        pages: Option<u32>,
        /// Replaces the full genre set when given.
        #[arg(long = "genre")]
        genres: Option<Vec<Genre>>,
    },
    /// Delete a book.
    Delete {
        id: BookId,
        /// Confirm the deletion; without this flag nothing is sent.
        #[arg(long)]
        yes: bool,
    },
    /// Review a book.
    Review {
        id: BookId,
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        comment: String,
    },
    /// Follow the live stats feed until interrupted.
    Watch,
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let client = CatalogClient::new(&config.server);
    let mut vm = CatalogViewModel::new(client.clone());
    let mutations = MutationCoordinator::new(client.clone());

    match cli.command {
        Command::List { genre } => list(&client, &mut vm, genre).await,
        Command::Show { id } => show(&mut vm, id).await,
        Command::Add {
            title,
            author,
            description,
            year,
            pages,
            genres,
        } => {
            let draft = BookCreate {
                title,
                author,
                description,
                year_published: year,
                pages,
                genres,
            };
            let book = mutations.create(&mut vm, draft).await?;
            println!("created book {} ({})", book.id, book.title);
            Ok(())
        }
        Command::Edit {
            id,
            title,
            author,
            description,
            year,
            pages,
            genres,
        } => {
            let patch = BookUpdate {
                title,
                author,
                description,
                year_published: year,
                pages,
                genres,
            };
            let book = mutations.update(&mut vm, id, patch).await?;
            println!("updated book {} ({})", book.id, book.title);
            Ok(())
        }
        Command::Delete { id, yes } => {
            match mutations.remove(&mut vm, id, yes).await? {
                DeleteOutcome::Deleted => println!("deleted book {id}"),
                DeleteOutcome::Declined => println!("not deleted; pass --yes to confirm"),
            }
            Ok(())
        }
        Command::Review {
            id,
            rating,
            comment,
        } => review(&mutations, &mut vm, id, rating, comment).await,
        Command::Watch => watch(&config, &mut vm).await,
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path.clone()).context("Loading config file")?,
        None => Config::load().context("Loading config file")?,
    };

    if let Some(origin) = &cli.server {
        config.server.origin = origin.clone();
        config.validate().context("Invalid --server origin")?;
    }

    Ok(config)
}

async fn list(
    client: &CatalogClient,
    vm: &mut CatalogViewModel,
    genre: Option<Genre>,
) -> anyhow::Result<()> {
    // The filtered listing is a plain query; only the unfiltered one is
    // the view model's catalog.
    let books: Vec<Book> = match genre {
        Some(genre) => client.list_books_by_genre(genre).await?,
        None => {
            vm.load_list().await?;
            vm.state().books.clone()
        }
    };

    if books.is_empty() {
        println!("no books");
        return Ok(());
    }

    for book in &books {
        let genres = book
            .genres
            .iter()
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "#{:<4} {} by {} [{}]",
            book.id,
            book.title,
            book.author,
            if genres.is_empty() {
                "untagged"
            } else {
                genres.as_str()
            }
        );
    }

    Ok(())
}

async fn show(vm: &mut CatalogViewModel, id: BookId) -> anyhow::Result<()> {
    match vm.load_detail(id).await {
        Ok(()) => {}
        Err(ApiError::NotFound) => {
            println!("book {id} not found");
            return Ok(());
        }
        Err(other) => return Err(other.into()),
    }

    if let DetailState::Loaded(book) = &vm.state().detail {
        print_book(book);
    }

    Ok(())
}

fn print_book(book: &Book) {
    let genres = if book.genres.is_empty() {
        "untagged".to_string()
    } else {
        book.genres
            .iter()
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("{} by {} ({})", book.title, book.author, book.year_published);
    println!("{} pages; genres: {genres}", book.pages);
    println!("{}", book.description);

    if book.reviews.is_empty() {
        println!("no reviews yet");
    } else {
        println!("reviews:");
        for review in &book.reviews {
            println!("  [{}/5] {}", review.rating, review.comment);
        }
    }
}

async fn review(
    mutations: &MutationCoordinator,
    vm: &mut CatalogViewModel,
    id: BookId,
    rating: u8,
    comment: String,
) -> anyhow::Result<()> {
    vm.apply(CatalogIntent::SetReviewRating(rating));
    vm.apply(CatalogIntent::SetReviewComment(comment));

    let draft: ReviewCreate = vm.state().review_form.draft();
    let review = mutations.review(vm, id, draft).await?;
    println!("review {} recorded", review.id);

    if let DetailState::Loaded(book) = &vm.state().detail {
        println!("{} now has {} review(s)", book.title, book.reviews.len());
    }

    Ok(())
}

/// Follow the stats feed, printing each snapshot, until ctrl-c or the feed
/// ends. The connection is released on every exit path: explicitly here,
/// by drop anywhere else.
async fn watch(config: &Config, vm: &mut CatalogViewModel) -> anyhow::Result<()> {
    let url = config.server.feed_url();
    let connect_timeout = Duration::from_secs(u64::from(config.server.connect_timeout_seconds));
    let mut feed = StatsFeed::connect(&url, connect_timeout)
        .await
        .with_context(|| format!("Connecting stats feed at {url}"))?;
    println!("watching {url} (ctrl-c to stop)");

    loop {
        tokio::select! {
            snapshot = feed.recv() => match snapshot {
                Some(snapshot) => {
                    vm.on_stats_message(snapshot);
                    println!(
                        "books: {:>5}  reviews: {:>5}",
                        snapshot.total_books, snapshot.total_reviews
                    );
                }
                None => {
                    vm.on_feed_closed();
                    println!("feed closed by server");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    feed.close().await;
    Ok(())
}
