//! Bloom CLI
//!
//! Command-line client for a running Bloom API server:
//! - Browse and filter forum topics, comment on the open post
//! - Log mood, energy and sleep; view the calendar and trends
//! - Write journal entries from prompts
//! - Search the resource directory

use anyhow::{bail, Context};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bloom-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client for the Bloom peer-support community")]
#[command(long_about = "Bloom is a peer-support space for mental wellness.\nShare in the forums, track your mood, journal, and find helpful resources.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8086", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show server status
    Status,

    /// List forum topics
    Topics {
        /// Case-insensitive text to find in titles and descriptions
        #[arg(short, long)]
        search: Option<String>,
        /// Category (all, anxiety, mindfulness, self-care, relationships, digital-wellbeing, resilience)
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// Show the open discussion post and its comments
    Post,

    /// Comment anonymously on the open post
    Comment {
        /// Comment text
        content: String,
    },

    /// Like or unlike a comment
    LikeComment {
        /// Comment ID
        id: i64,
    },

    /// Mood tracker
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },

    /// Guided journal
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Search the resource directory
    Resources {
        /// Text to find in titles and descriptions
        #[arg(short, long)]
        search: Option<String>,
        /// Resource types, comma-separated (article, video, podcast, tool)
        #[arg(short, long)]
        types: Option<String>,
        /// Categories, comma-separated
        #[arg(short, long)]
        categories: Option<String>,
    },

    /// Mark a resource as helpful, or take it back
    LikeResource {
        /// Resource ID
        id: u32,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum MoodAction {
    /// Show the selected date and its draft
    Show,
    /// Select a date (YYYY-MM-DD)
    Select { date: String },
    /// Edit the draft for the selected date
    Set {
        /// Mood 0-4
        #[arg(long)]
        mood: Option<i64>,
        /// Energy 0-4
        #[arg(long)]
        energy: Option<i64>,
        /// Hours of sleep 0-12
        #[arg(long)]
        sleep: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Save the draft for the selected date
    Save,
    /// Show a month calendar (defaults to the selected month)
    Calendar {
        #[arg(long, requires = "month")]
        year: Option<i32>,
        #[arg(long, requires = "year")]
        month: Option<u32>,
    },
    /// Show the trend strip
    Trends,
}

#[derive(Subcommand)]
pub enum JournalAction {
    /// Show the prompt and entries
    Show,
    /// Switch prompt category (gratitude, reflection, growth)
    Category { category: String },
    /// Draw a new prompt
    Prompt,
    /// Save an entry for the current prompt
    Write { content: String },
    /// Open an entry by ID
    Open { id: i64 },
}

/// Thin JSON client over the REST API
struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    fn new(base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<Value> {
        let request = self.http.get(format!("{}{}", self.base, path)).query(query);
        Self::handle(request.send().await).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> anyhow::Result<Value> {
        let mut request = self.http.post(format!("{}{}", self.base, path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        Self::handle(request.send().await).await
    }

    async fn put(&self, path: &str, body: Value) -> anyhow::Result<Value> {
        let request = self.http.put(format!("{}{}", self.base, path)).json(&body);
        Self::handle(request.send().await).await
    }

    async fn handle(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<Value> {
        let response = response.context("Cannot connect to the Bloom API (is `bloom` running?)")?;
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            let message = body["error"]["message"].as_str().unwrap_or("unknown error");
            bail!("Request failed ({}): {}", status, message);
        }
        Ok(body)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let api = ApiClient::new(&cli.api_url);
    let as_json = cli.format == "json";

    match cli.command {
        Commands::Status => {
            let health = api.get("/health", &[]).await?;
            if as_json {
                return print_json(&health);
            }

            println!("Bloom v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("API Status: {}", health["status"].as_str().unwrap_or("unknown"));
            println!();
            println!("Community:");
            println!("  Topics: {}", health["topics"]);
            println!("  Comments: {}", health["comments"]);
            println!("  Mood entries: {}", health["mood_entries"]);
            println!("  Journal entries: {}", health["journal_entries"]);
            println!("  Resources: {}", health["resources"]);

            if let Some(uptime) = health["uptime_seconds"].as_u64() {
                println!();
                println!("Uptime: {}", format_duration(uptime));
            }
        }

        Commands::Topics { search, category } => {
            let mut query = vec![("category", category)];
            if let Some(search) = search {
                query.push(("search", search));
            }
            let data = api.get("/api/v1/forums/topics", &query).await?;
            if as_json {
                return print_json(&data);
            }

            print_message_or(&data, |topics| {
                println!("{:<4} {:<36} {:<14} {:>5}  {}", "ID", "Title", "Category", "Posts", "Active");
                println!("{}", "-".repeat(76));
                for t in topics {
                    println!(
                        "{:<4} {:<36} {:<14} {:>5}  {}",
                        t["id"].as_u64().unwrap_or(0),
                        text(&t["title"]),
                        text(&t["category"]),
                        t["posts"].as_u64().unwrap_or(0),
                        text(&t["last_active"])
                    );
                }
            }, "topics");
        }

        Commands::Post => {
            let data = api.get("/api/v1/forums/post", &[]).await?;
            if as_json {
                return print_json(&data);
            }

            let post = &data["post"];
            println!("{}", text(&post["title"]));
            println!("by {} · {} · {} likes", text(&post["author"]), text(&post["posted"]), post["likes"]);
            println!();
            println!("{}", text(&post["body"]));
            println!();
            println!("Comments ({})", data["comment_count"]);
            for c in data["comments"].as_array().into_iter().flatten() {
                print_comment(c);
            }
        }

        Commands::Comment { content } => {
            let data = api
                .post("/api/v1/forums/post/comments", Some(json!({ "content": content })))
                .await?;
            if as_json {
                return print_json(&data);
            }

            if data["submitted"] == true {
                println!("Comment posted ({} comments)", data["comment_count"]);
            } else {
                println!("Nothing posted: comment was empty");
            }
        }

        Commands::LikeComment { id } => {
            let comment = api
                .post(&format!("/api/v1/forums/post/comments/{}/like", id), None)
                .await?;
            if as_json {
                return print_json(&comment);
            }
            print_like(&comment);
        }

        Commands::Mood { action } => run_mood(&api, action, as_json).await?,

        Commands::Journal { action } => run_journal(&api, action, as_json).await?,

        Commands::Resources {
            search,
            types,
            categories,
        } => {
            let query: Vec<(&str, String)> = [("search", search), ("types", types), ("categories", categories)]
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect();
            let data = api.get("/api/v1/resources", &query).await?;
            if as_json {
                return print_json(&data);
            }

            print_message_or(&data, |resources| {
                for r in resources {
                    let tags: Vec<&str> = r["categories"]
                        .as_array()
                        .into_iter()
                        .flatten()
                        .filter_map(Value::as_str)
                        .collect();
                    println!("[{}] {} ({})", r["id"], text(&r["title"]), text(&r["type"]));
                    println!("    {}", text(&r["description"]));
                    println!("    {} · {}", tags.join(", "), text(&r["helpful_label"]));
                }
            }, "resources");
        }

        Commands::LikeResource { id } => {
            let resource = api.post(&format!("/api/v1/resources/{}/like", id), None).await?;
            if as_json {
                return print_json(&resource);
            }
            print_like(&resource);
        }

        Commands::Config { output } => {
            let config = bloom::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

async fn run_mood(api: &ApiClient, action: MoodAction, as_json: bool) -> anyhow::Result<()> {
    let data = match action {
        MoodAction::Show => api.get("/api/v1/tracker", &[]).await?,
        MoodAction::Select { date } => {
            api.post("/api/v1/tracker/select", Some(json!({ "date": date }))).await?
        }
        MoodAction::Set {
            mood,
            energy,
            sleep,
            notes,
        } => {
            let body = json!({ "mood": mood, "energy": energy, "sleep": sleep, "notes": notes });
            api.put("/api/v1/tracker/draft", body).await?
        }
        MoodAction::Save => {
            let data = api.post("/api/v1/tracker/save", None).await?;
            if as_json {
                return print_json(&data);
            }
            println!(
                "Entry {} for {} ({} entries)",
                text(&data["outcome"]),
                text(&data["entry"]["date"]),
                data["entry_count"]
            );
            return Ok(());
        }
        MoodAction::Calendar { year, month } => {
            let query: Vec<(&str, String)> = match (year, month) {
                (Some(y), Some(m)) => vec![("year", y.to_string()), ("month", m.to_string())],
                _ => Vec::new(),
            };
            let data = api.get("/api/v1/tracker/calendar", &query).await?;
            if as_json {
                return print_json(&data);
            }
            print_calendar(&data);
            return Ok(());
        }
        MoodAction::Trends => {
            let data = api.get("/api/v1/tracker/trends", &[]).await?;
            if as_json {
                return print_json(&data);
            }
            println!("{:<12} {:<6} {:<8} {}", "Date", "Mood", "Energy", "Sleep");
            println!("{}", "-".repeat(36));
            for p in data["points"].as_array().into_iter().flatten() {
                println!(
                    "{:<12} {:<6} {:<8} {}h",
                    text(&p["date"]),
                    text(&p["mood_emoji"]),
                    format!("{}/5", p["energy_level"]),
                    p["sleep_hours"]
                );
            }
            return Ok(());
        }
    };

    if as_json {
        return print_json(&data);
    }

    let draft = &data["draft"];
    let saved = if data["has_entry"] == true { "saved" } else { "not saved" };
    println!("{} ({})", text(&data["selected_date"]), saved);
    println!("  Mood:   {} ({}/4)", text(&data["mood_emoji"]), draft["mood"]);
    println!("  Energy: {}/4", draft["energy"]);
    println!("  Sleep:  {}h", draft["sleep"]);
    if let Some(notes) = draft["notes"].as_str().filter(|n| !n.is_empty()) {
        println!("  Notes:  {}", notes);
    }
    Ok(())
}

async fn run_journal(api: &ApiClient, action: JournalAction, as_json: bool) -> anyhow::Result<()> {
    match action {
        JournalAction::Show => {
            let data = api.get("/api/v1/journal", &[]).await?;
            if as_json {
                return print_json(&data);
            }

            println!("{} prompt: {}", text(&data["category_label"]), text(&data["prompt"]));
            println!();
            if let Some(message) = data["message"].as_str() {
                println!("{}", message);
            }
            for e in data["entries"].as_array().into_iter().flatten() {
                println!("[{}] {} ({})", e["id"], text(&e["formatted_date"]), text(&e["category"]));
                println!("    {}", text(&e["prompt"]));
            }
        }
        JournalAction::Category { category } => {
            let data = api
                .post("/api/v1/journal/category", Some(json!({ "category": category })))
                .await?;
            if as_json {
                return print_json(&data);
            }
            println!("{}: {}", text(&data["category"]), text(&data["prompt"]));
        }
        JournalAction::Prompt => {
            let data = api.post("/api/v1/journal/prompt", None).await?;
            if as_json {
                return print_json(&data);
            }
            println!("{}", text(&data["prompt"]));
        }
        JournalAction::Write { content } => {
            let data = api
                .post("/api/v1/journal/entries", Some(json!({ "content": content })))
                .await?;
            if as_json {
                return print_json(&data);
            }
            if data["saved"] == true {
                println!("Saved entry {} ({} entries)", data["entry"]["id"], data["total"]);
            } else {
                println!("Nothing saved: entry was empty");
            }
        }
        JournalAction::Open { id } => {
            let entry = api
                .post(&format!("/api/v1/journal/entries/{}/select", id), None)
                .await?;
            if as_json {
                return print_json(&entry);
            }
            println!("{}", text(&entry["formatted_date"]));
            println!("Prompt: {}", text(&entry["prompt"]));
            println!();
            println!("{}", text(&entry["content"]));
        }
    }
    Ok(())
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or("-")
}

/// Print the empty-result message, or the rows under `key`
fn print_message_or(data: &Value, rows: impl FnOnce(&[Value]), key: &str) {
    match (data["message"].as_str(), data[key].as_array()) {
        (Some(message), _) => println!("{}", message),
        (None, Some(items)) => rows(items),
        (None, None) => println!("No data"),
    }
}

fn print_comment(comment: &Value) {
    println!();
    println!(
        "  [{}] {} ({}) · {}",
        comment["id"],
        text(&comment["author"]),
        text(&comment["author_initials"]),
        text(&comment["timestamp"])
    );
    println!("  {}", text(&comment["content"]));
    print!("  ");
    print_like(comment);
}

fn print_like(item: &Value) {
    let marker = if item["is_liked"] == true { "♥" } else { "♡" };
    println!("{} {}", marker, item["likes"]);
}

fn print_calendar(data: &Value) {
    println!("{}-{:02}", data["year"], data["month"].as_u64().unwrap_or(0));
    let header: Vec<String> = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        .iter()
        .map(|d| format!(" {:<width$}", d, width = CELL_WIDTH - 1))
        .collect();
    println!("{}", header.join(" ").trim_end());
    for line in calendar_lines(data) {
        println!("{}", line);
    }
    println!();
    println!("[ ] selected  + has entry  * today");
}

/// Width of one rendered day cell
const CELL_WIDTH: usize = 6;

/// One day: selection brackets around the number, then an entry mark and a
/// today mark. Each flag owns its own column so they can all show at once.
fn day_cell(day: &Value) -> String {
    let number = day["day"].as_u64().unwrap_or(0);
    let (open, close) = if day["selected"] == true { ('[', ']') } else { (' ', ' ') };
    let entry = if day["has_entry"] == true { '+' } else { ' ' };
    let today = if day["is_today"] == true { '*' } else { ' ' };
    format!("{}{:>2}{}{}{}", open, number, close, entry, today)
}

/// Calendar rows starting on Sunday, the first row padded to the first
/// day's weekday
fn calendar_lines(data: &Value) -> Vec<String> {
    let days = data["days"].as_array().cloned().unwrap_or_default();
    let lead = days
        .first()
        .and_then(|d| d["date"].as_str())
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0);

    let mut cells: Vec<String> = vec![" ".repeat(CELL_WIDTH); lead];
    cells.extend(days.iter().map(day_cell));

    cells
        .chunks(7)
        .map(|week| week.join(" ").trim_end().to_string())
        .collect()
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, day: u64, selected: bool, has_entry: bool, is_today: bool) -> Value {
        json!({
            "date": date,
            "day": day,
            "selected": selected,
            "has_entry": has_entry,
            "is_today": is_today,
        })
    }

    #[test]
    fn test_selected_day_keeps_entry_mark() {
        let both = day_cell(&day("2024-03-01", 1, true, true, false));
        assert_eq!(both, "[ 1]+ ");

        let entry_only = day_cell(&day("2024-03-02", 2, false, true, false));
        assert_eq!(entry_only, "  2 + ");

        let everything = day_cell(&day("2024-03-15", 15, true, true, true));
        assert_eq!(everything, "[15]+*");
    }

    #[test]
    fn test_cells_have_equal_width() {
        for cell in [
            day_cell(&day("2024-03-01", 1, false, false, false)),
            day_cell(&day("2024-03-21", 21, true, true, true)),
        ] {
            assert_eq!(cell.chars().count(), CELL_WIDTH);
        }
    }

    #[test]
    fn test_first_row_aligned_to_weekday() {
        // March 2024 starts on a Friday
        let days: Vec<Value> = (1..=31)
            .map(|d| day(&format!("2024-03-{:02}", d), d, false, false, false))
            .collect();
        let lines = calendar_lines(&json!({ "year": 2024, "month": 3, "days": days }));

        assert_eq!(lines.len(), 6);
        let blanks = 5 * (CELL_WIDTH + 1);
        assert!(lines[0][..blanks].trim().is_empty());
        assert!(lines[0][blanks..].starts_with("  1"));
        assert!(lines[1].starts_with("  3"));
    }

    #[test]
    fn test_sunday_start_has_no_padding() {
        // September 2024 starts on a Sunday
        let days: Vec<Value> = (1..=30)
            .map(|d| day(&format!("2024-09-{:02}", d), d, false, false, false))
            .collect();
        let lines = calendar_lines(&json!({ "days": days }));
        assert!(lines[0].starts_with("  1"));
        assert_eq!(lines.len(), 5);
    }
}
