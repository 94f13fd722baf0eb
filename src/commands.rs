//! CLI commands for the `instalite` binary.
//!
//! Each subcommand performs exactly one API call and prints the response
//! body as pretty JSON. Errors are flattened to strings at this boundary.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Serialize;

use instalite_client::api::types::{ImageUpload, NewPost, RegisterRequest};
use instalite_client::api::{admin, auth, comments, likes, posts, users, ApiClient};
use instalite_client::avatar_url;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the access token
    Login { username: String, password: String },
    /// Create an account
    Register {
        username: String,
        email: String,
        password: String,
    },
    /// Show the logged-in user
    Me,
    /// Show the personal feed
    Feed {
        /// Maximum number of posts
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Publish a post
    Post {
        #[arg(long)]
        caption: Option<String>,
        /// PNG, JPEG or WEBP file to attach
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// List your own posts
    Posts,
    ShowPost { post_id: i64 },
    DeletePost { post_id: i64 },
    Like { post_id: i64 },
    Unlike { post_id: i64 },
    /// Show a user's public profile
    Profile { username: String },
    Follow { username: String },
    Unfollow { username: String },
    /// List comments on a post
    Comments { post_id: i64 },
    /// Comment on a post
    Comment { post_id: i64, text: String },
    DeleteComment { comment_id: i64 },
    /// Print a user's avatar URL (no request is made)
    Avatar { username: String },
    /// List all users (admin only)
    AdminUsers,
    /// List all posts (admin only)
    AdminPosts,
}

/// Run a single command against the API.
pub async fn run(client: &ApiClient, command: Command) -> Result<(), String> {
    match command {
        Command::Login { username, password } => {
            let token = auth::login(client, &username, &password)
                .await
                .map_err(|e| format!("Login failed: {}", e))?;
            print_json(&token)
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let payload = RegisterRequest {
                username,
                email,
                password,
            };
            let user = auth::register(client, &payload)
                .await
                .map_err(|e| format!("Registration failed: {}", e))?;
            print_json(&user)
        }
        Command::Me => {
            let user = auth::me(client)
                .await
                .map_err(|e| format!("Fetching current user failed: {}", e))?;
            print_json(&user)
        }
        Command::Feed { limit } => {
            let feed = match limit {
                Some(limit) => posts::feed_with_limit(client, limit).await,
                None => posts::feed(client).await,
            }
            .map_err(|e| format!("Feed fetch failed: {}", e))?;
            print_json(&feed)
        }
        Command::Post { caption, image } => {
            let image = match image {
                Some(path) => Some(load_image(&path).await?),
                None => None,
            };
            let post = posts::create_post(client, NewPost { caption, image })
                .await
                .map_err(|e| format!("Post creation failed: {}", e))?;
            print_json(&post)
        }
        Command::Posts => {
            let mine = posts::my_posts(client)
                .await
                .map_err(|e| format!("Post listing failed: {}", e))?;
            print_json(&mine)
        }
        Command::ShowPost { post_id } => {
            let post = posts::get_post(client, post_id)
                .await
                .map_err(|e| format!("Post {} fetch failed: {}", post_id, e))?;
            print_json(&post)
        }
        Command::DeletePost { post_id } => posts::delete_post(client, post_id)
            .await
            .map_err(|e| format!("Post {} delete failed: {}", post_id, e)),
        Command::Like { post_id } => likes::like(client, post_id)
            .await
            .map_err(|e| format!("Like failed: {}", e)),
        Command::Unlike { post_id } => likes::unlike(client, post_id)
            .await
            .map_err(|e| format!("Unlike failed: {}", e)),
        Command::Profile { username } => {
            let user = users::user_profile(client, &username)
                .await
                .map_err(|e| format!("Profile fetch failed: {}", e))?;
            print_json(&user)
        }
        Command::Follow { username } => users::follow(client, &username)
            .await
            .map_err(|e| format!("Follow failed: {}", e)),
        Command::Unfollow { username } => users::unfollow(client, &username)
            .await
            .map_err(|e| format!("Unfollow failed: {}", e)),
        Command::Comments { post_id } => {
            let list = comments::list_comments(client, post_id)
                .await
                .map_err(|e| format!("Comment listing failed: {}", e))?;
            print_json(&list)
        }
        Command::Comment { post_id, text } => {
            let comment = comments::add_comment(client, post_id, &text)
                .await
                .map_err(|e| format!("Comment failed: {}", e))?;
            print_json(&comment)
        }
        Command::DeleteComment { comment_id } => comments::delete_comment(client, comment_id)
            .await
            .map_err(|e| format!("Comment {} delete failed: {}", comment_id, e)),
        Command::Avatar { username } => {
            println!("{}", avatar_url(&username));
            Ok(())
        }
        Command::AdminUsers => {
            let all = admin::list_users(client)
                .await
                .map_err(|e| format!("Admin user listing failed: {}", e))?;
            print_json(&all)
        }
        Command::AdminPosts => {
            let all = admin::list_posts(client)
                .await
                .map_err(|e| format!("Admin post listing failed: {}", e))?;
            print_json(&all)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to render response: {}", e))?;
    println!("{}", out);
    Ok(())
}

/// Read an image from disk for upload.
async fn load_image(path: &Path) -> Result<ImageUpload, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    Ok(ImageUpload {
        bytes,
        file_name,
        mime: mime_for_path(path).to_string(),
    })
}

/// MIME type from the file extension. Only PNG/JPEG/WEBP are accepted by the
/// backend; anything else is sent as-is and rejected there.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for_path(Path::new("a/cat.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("dog.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("dog.jpg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("x.webp")), "image/webp");
    }

    #[test]
    fn test_mime_for_unknown_extension() {
        assert_eq!(mime_for_path(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(mime_for_path(Path::new("README")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_load_image_missing_file() {
        let err = load_image(Path::new("/definitely/not/here.png"))
            .await
            .unwrap_err();
        assert!(err.contains("Failed to read"));
    }
}
