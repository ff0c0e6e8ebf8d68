use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{BlogClient, HttpRemoteStore};
use shared::domain::{Post, PostId};

mod config;

#[derive(Parser, Debug)]
#[command(name = "blogctl", about = "Manage blog posts in a remote store")]
struct Args {
    /// API root; overrides blogctl.toml and BLOGCTL_SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List posts, optionally restricted to one category.
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the distinct categories currently in use.
    Categories,
    /// Create a post.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        category: String,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Rewrite an existing post; omitted fields keep their current values.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Comma-separated tags.
        #[arg(long)]
        tags: Option<String>,
    },
    /// Delete a post.
    Delete { id: String },
    /// Add a comment to a post.
    Comment {
        id: String,
        #[arg(long, default_value = "")]
        user: String,
        #[arg(long)]
        content: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let settings = config::load_settings();
    let server_url = args.server_url.unwrap_or(settings.server_url);
    tracing::debug!(server_url = %server_url, "using remote store");

    let client = BlogClient::new(Arc::new(HttpRemoteStore::new(server_url)));
    client.load_posts().await?;

    match args.command {
        Command::List { category } => {
            if let Some(category) = category {
                client.select_category(category).await;
            }
            for post in client.visible_posts().await {
                print_post(&post);
            }
        }
        Command::Categories => {
            for category in client.categories().await {
                println!("{category}");
            }
        }
        Command::Create {
            title,
            content,
            category,
            tags,
        } => {
            client.begin_create().await;
            client
                .with_form_mut(|form| {
                    form.title = title;
                    form.content = content;
                    form.category = category;
                    form.tags_text = tags;
                })
                .await;
            client.submit_form().await?;
            println!("created; {} posts cached", client.posts().await.len());
        }
        Command::Update {
            id,
            title,
            content,
            category,
            tags,
        } => {
            let id = PostId::new(id);
            client.begin_edit(&id).await?;
            client
                .with_form_mut(|form| {
                    if let Some(title) = title {
                        form.title = title;
                    }
                    if let Some(content) = content {
                        form.content = content;
                    }
                    if let Some(category) = category {
                        form.category = category;
                    }
                    if let Some(tags) = tags {
                        form.tags_text = tags;
                    }
                })
                .await;
            client.submit_form().await?;
            println!("updated {id}");
        }
        Command::Delete { id } => {
            let id = PostId::new(id);
            client.delete_post(&id).await?;
            println!("deleted {id}; {} posts cached", client.posts().await.len());
        }
        Command::Comment { id, user, content } => {
            let id = PostId::new(id);
            client
                .with_form_mut(|form| {
                    form.comment_user = user;
                    form.comment_content = content;
                })
                .await;
            client.add_comment(&id).await?;
            println!("comment added to {id}");
        }
    }

    Ok(())
}

fn print_post(post: &Post) {
    println!("[{}] {} ({})", post.id, post.title, post.category);
    println!("  {}", post.content);
    if !post.tags.is_empty() {
        println!("  tags: {}", post.tags.join(", "));
    }
    for comment in &post.comments {
        let user = if comment.user.is_empty() {
            "anonymous"
        } else {
            comment.user.as_str()
        };
        println!("  {user}: {}", comment.content);
    }
}
