/// Ohohub - command-line client for the audio-sharing board
use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use ohohub_cli::config::{AppConfig, DEFAULT_LOG_FILTER};
use ohohub_cli::display;
use ohohub_client::{load_audio_file, OhohubClient, PostsApi, UploadForm};
use ohohub_core::{password, Gender, Post, Theme};
use ohohub_search::{HomeFeed, SearchFilters, SearchQuery, SearchSession};
use ohohub_storage::{BookmarkStore, FileBackend, ThemeStore};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ohohub")]
#[command(about = "Browse, bookmark and upload Ohohub voice posts", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing page sections
    Home,
    /// Search posts
    Search {
        /// Title filter
        #[arg(short, long)]
        title: Option<String>,
        /// X account filter
        #[arg(short = 'x', long)]
        x_id: Option<String>,
        /// Gender filter
        #[arg(short, long, value_enum)]
        gender: Option<GenderArg>,
        /// Tag filter
        #[arg(long)]
        tag: Option<i64>,
        /// Page number
        #[arg(short, long)]
        page: Option<u32>,
        /// Raw search querystring, e.g. "gender=female&page=2"
        #[arg(long, conflicts_with_all = ["title", "x_id", "gender", "tag", "page"])]
        url: Option<String>,
    },
    /// Show one post
    Post {
        /// Post ID
        id: String,
    },
    /// List all tags
    Tags,
    /// Manage local bookmarks
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkAction,
    },
    /// Upload an audio file
    Upload {
        /// Audio file path (mp3, wav, m4a)
        file: PathBuf,
        /// Post title
        #[arg(short, long)]
        title: String,
        /// X account to credit
        #[arg(short = 'x', long, default_value = "")]
        x_id: String,
        /// Password required to delete the post later
        #[arg(short, long, env = "OHOHUB_DELETE_PASSWORD")]
        password: String,
        /// Voice gender
        #[arg(short, long, value_enum)]
        gender: GenderArg,
        /// Allow the post to be promoted
        #[arg(long)]
        allow_promotion: bool,
    },
    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
        /// Fall back to dark when no theme is stored
        #[arg(long, global = true)]
        system_dark: bool,
    },
    /// Encode a delete-password the way uploads store it
    HashPassword {
        password: String,
    },
    /// Check a password against a stored `salt:hash` value
    VerifyPassword {
        password: String,
        stored: String,
    },
}

#[derive(Subcommand)]
enum BookmarkAction {
    /// List bookmarks, newest first
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Bookmark a post
    Add { id: String },
    /// Remove a bookmark
    Remove { id: String },
    /// Bookmark a post, or remove it if already bookmarked
    Toggle { id: String },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the effective theme
    Show,
    /// Store a theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
    /// Switch between light and dark
    Toggle,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    All,
}

impl GenderArg {
    fn filter(self) -> Option<Gender> {
        match self {
            GenderArg::Male => Some(Gender::Male),
            GenderArg::Female => Some(Gender::Female),
            GenderArg::All => None,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Home => home(&config).await?,
        Commands::Search {
            title,
            x_id,
            gender,
            tag,
            page,
            url,
        } => {
            let querystring = match url {
                Some(url) => url,
                None => SearchQuery::new(
                    SearchFilters {
                        post_title: title.unwrap_or_default(),
                        x_id: x_id.unwrap_or_default(),
                        gender: gender.and_then(GenderArg::filter),
                        tag_id: tag,
                    },
                    page.unwrap_or(1),
                )
                .to_query_string(),
            };
            search(&config, &querystring).await?;
        }
        Commands::Post { id } => show_post(&config, &id).await?,
        Commands::Tags => list_tags(&config).await?,
        Commands::Bookmarks { action } => bookmarks(&config, action).await?,
        Commands::Upload {
            file,
            title,
            x_id,
            password,
            gender,
            allow_promotion,
        } => {
            let gender = gender.filter().map(Gender::as_str).unwrap_or_default();
            let form = UploadForm {
                audio_file: Some(load_audio_file(&file).await?),
                post_title: title,
                x_id,
                delete_password: password,
                allow_promotion,
                gender: gender.to_string(),
            };
            upload(&config, form).await?;
        }
        Commands::Theme {
            action,
            system_dark,
        } => theme(&config, action.unwrap_or(ThemeAction::Show), system_dark)?,
        Commands::HashPassword { password } => {
            println!("{}", password::prepare_for_storage(&password));
        }
        Commands::VerifyPassword { password, stored } => {
            if password::verify(&password, &stored) {
                println!("match");
            } else {
                bail!("password does not match");
            }
        }
    }

    Ok(())
}

fn client(config: &AppConfig) -> anyhow::Result<OhohubClient> {
    OhohubClient::new(config.api()).context("Invalid API URL")
}

fn backend(config: &AppConfig) -> anyhow::Result<FileBackend> {
    FileBackend::open(&config.data_dir)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))
}

async fn home(config: &AppConfig) -> anyhow::Result<()> {
    let client = client(config)?;
    let feed = HomeFeed::load(&client).await;
    let now = Utc::now();

    if feed.is_empty() {
        println!("No posts yet.");
        return Ok(());
    }

    for (heading, posts) in [
        ("Female voices", &feed.female),
        ("Male voices", &feed.male),
        ("Latest", &feed.latest),
    ] {
        println!("{heading}:");
        for post in posts {
            println!("  {}", display::post_line(post, now));
        }
    }

    Ok(())
}

async fn search(config: &AppConfig, querystring: &str) -> anyhow::Result<()> {
    let mut session = SearchSession::new(client(config)?);
    session.hydrate_from_url(querystring).await;
    let state = session.state();
    let results = state.results();
    let now = Utc::now();

    println!("{}", state.query().to_url("/search"));

    if let Some(error) = &results.error {
        println!("Search failed: {error}");
        return Ok(());
    }

    for post in &results.posts {
        println!("  {}", display::post_line(post, now));
    }
    println!("{}", display::pager(&results.pagination));

    Ok(())
}

async fn fetch_post(client: &OhohubClient, id: &str) -> anyhow::Result<Post> {
    let response = client.get_post(id).await;
    match response.post {
        Some(post) if response.success => Ok(post),
        _ => bail!(
            "Post {id} unavailable: {}",
            response.error.as_deref().unwrap_or("not found")
        ),
    }
}

async fn show_post(config: &AppConfig, id: &str) -> anyhow::Result<()> {
    let client = client(config)?;
    let post = fetch_post(&client, id).await?;
    let tags = client.get_post_tags(id).await;
    let bookmarked = BookmarkStore::new(backend(config)?).contains(id);

    println!("{}", display::post_line(&post, Utc::now()));
    println!("  audio: {}", post.audio_url);
    if tags.success && !tags.tags.is_empty() {
        println!("  tags: {}", display::tag_list(&tags.tags));
    }
    if post.allow_promotion {
        println!("  promotion allowed");
    }
    println!("  bookmarked: {}", if bookmarked { "yes" } else { "no" });

    Ok(())
}

async fn list_tags(config: &AppConfig) -> anyhow::Result<()> {
    let response = client(config)?.get_tags().await;
    if !response.success {
        bail!(
            "Failed to load tags: {}",
            response.error.as_deref().unwrap_or("unknown error")
        );
    }

    println!("Tags:");
    for tag in response.tags {
        println!("  {} - {}", tag.id, tag.name);
    }

    Ok(())
}

async fn bookmarks(config: &AppConfig, action: BookmarkAction) -> anyhow::Result<()> {
    let store = BookmarkStore::new(backend(config)?);

    match action {
        BookmarkAction::List { page } => {
            let page = store.paginate(page, config.page_size);
            let now = Utc::now();

            if page.pagination.total_items == 0 {
                println!("No bookmarks.");
                return Ok(());
            }
            for item in &page.bookmarks {
                println!("  {}", display::bookmark_line(item, now));
            }
            println!("{}", display::pager(&page.pagination));
        }
        BookmarkAction::Add { id } => {
            let post = fetch_post(&client(config)?, &id).await?;
            if store.add(&post) {
                println!("Bookmarked {}", post.title);
            } else if store.contains(&id) {
                println!("Already bookmarked");
            } else {
                bail!("Failed to save bookmark");
            }
        }
        BookmarkAction::Remove { id } => {
            store.remove(&id);
            println!("Removed {id}");
        }
        BookmarkAction::Toggle { id } => {
            let post = fetch_post(&client(config)?, &id).await?;
            if store.toggle(&post) {
                println!("Bookmarked {}", post.title);
            } else {
                println!("Removed {id}");
            }
        }
    }

    Ok(())
}

async fn upload(config: &AppConfig, form: UploadForm) -> anyhow::Result<()> {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            for error in &errors.errors {
                eprintln!("  {}: {}", error.field, error.message);
            }
            bail!("Upload form is invalid");
        }
    };

    let ack = client(config)?.upload_audio(&request).await?;
    if !ack.success {
        bail!(
            "Upload rejected: {}",
            ack.error.as_deref().unwrap_or("unknown error")
        );
    }

    println!("Uploaded {}", request.post_title);
    Ok(())
}

fn theme(config: &AppConfig, action: ThemeAction, system_dark: bool) -> anyhow::Result<()> {
    let store = ThemeStore::new(backend(config)?);

    let theme = match action {
        ThemeAction::Show => store.resolve(system_dark),
        ThemeAction::Set { theme } => {
            let theme = Theme::from(theme);
            store.set(theme);
            theme
        }
        ThemeAction::Toggle => store.toggle(system_dark),
    };

    println!("{theme}");
    Ok(())
}
