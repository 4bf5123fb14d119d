//! Subcommand handlers for config, users and data.

use std::path::Path;

use super::args::{ConfigAction, UsersAction};
use crate::api::{ApiClient, DataSummary, NewUser, User};
use crate::config::{default_path, write_default, Config};

type CommandResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config: &Config,
    config_path: Option<&Path>,
) -> CommandResult {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Auto-advance: {} ms", config.carousel.auto_advance_ms);
            println!("  Stagger: {} ms", config.carousel.stagger_ms);
            println!("  Swipe threshold: {}", config.carousel.swipe_threshold);
            println!("  Transition: {} ms", config.carousel.transition_ms);
            println!(
                "  Status bar: {}",
                if config.ui.status_bar { "yes" } else { "no" }
            );
            println!("  API: {}", config.api_base_url());
            println!("  Reviews: {}", config.reviews_or_default().len());
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
        }
        ConfigAction::Init => {
            write_default(&path)?;
            println!("Created config file: {}", path.display());
        }
    }
    Ok(())
}

/// Handle users subcommand actions against the configured service.
pub async fn handle_users_action(action: UsersAction, client: &ApiClient) -> CommandResult {
    match action {
        UsersAction::List => {
            let users = client.list_users().await?;
            if users.is_empty() {
                println!("No users found.");
            } else {
                for user in &users {
                    println!("{}", format_user(user));
                }
            }
        }
        UsersAction::Add { name, email, age } => {
            let user = client.add_user(&NewUser::new(&name, &email, age)).await?;
            println!("User added:");
            println!("{}", format_user(&user));
        }
    }
    Ok(())
}

/// Fetch and print the data summary.
pub async fn handle_data(client: &ApiClient) -> CommandResult {
    let data = client.fetch_data().await?;
    println!("{}", format_data(&data));
    Ok(())
}

/// One user as a short multi-line block.
pub fn format_user(user: &User) -> String {
    let mut out = format!("{}\n  Email: {}", user.name, user.email);
    if let Some(age) = user.age {
        out.push_str(&format!("\n  Age: {}", age));
    }
    if let Some(date) = &user.registration_date {
        out.push_str(&format!("\n  Registered: {}", date));
    }
    out
}

/// Data summary as message, bullet list, and status line.
pub fn format_data(data: &DataSummary) -> String {
    let mut out = data.message.clone();
    for user in &data.users {
        out.push_str(&format!("\n  - {}", user));
    }
    out.push_str(&format!("\nStatus: {}", data.status));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_user_optional_fields() {
        let user = User {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: None,
            registration_date: None,
        };
        assert_eq!(format_user(&user), "Ada\n  Email: ada@example.com");

        let user = User {
            age: Some(36),
            registration_date: Some("2024-05-01".to_string()),
            ..user
        };
        assert_eq!(
            format_user(&user),
            "Ada\n  Email: ada@example.com\n  Age: 36\n  Registered: 2024-05-01"
        );
    }

    #[test]
    fn test_format_data() {
        let data = DataSummary {
            message: "Hello".to_string(),
            users: vec!["ada".to_string()],
            status: "ok".to_string(),
        };
        assert_eq!(format_data(&data), "Hello\n  - ada\nStatus: ok");
    }
}
