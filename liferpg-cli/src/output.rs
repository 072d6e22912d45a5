//! Output formatting.

use chrono::{DateTime, Local, Utc};
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use liferpg::models::*;
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table format
    Table,
    /// JSON format
    Json,
    /// Plain text format
    #[default]
    Plain,
}

/// Trait for plain text output.
pub trait PlainPrint {
    /// Print as plain text with formatting.
    fn plain_print(&self);
}

/// Trait for table row generation.
pub trait TableRow {
    /// Get table headers.
    fn headers() -> Vec<&'static str>;
    /// Get row data as strings.
    fn row(&self) -> Vec<String>;
}

/// Print items in plain text format.
pub fn print_plain<T: PlainPrint>(items: &[T]) {
    if items.is_empty() {
        println!("No results");
        return;
    }
    for item in items {
        item.plain_print();
    }
}

/// Format a backend timestamp for display, in local time.
pub fn format_time(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => "-".to_string(),
    }
}

/// Print a table of items with proper formatting for each output mode.
pub fn print_table<T: TableRow + Serialize + PlainPrint>(items: Vec<T>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items).unwrap_or_default());
        }
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results");
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(T::headers());
            for item in &items {
                table.add_row(item.row());
            }
            println!("{table}");
        }
        OutputFormat::Plain => {
            print_plain(&items);
        }
    }
}

fn active_label(is_active: bool) -> &'static str {
    if is_active {
        "active"
    } else {
        "inactive"
    }
}

// ============================================================================
// Display implementations for models
// ============================================================================

/// Row for user list display.
#[derive(Serialize)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub nickname: String,
    pub role: String,
    pub gold: i64,
    pub exp: i64,
    pub level: i32,
    pub status: i32,
    pub created: String,
}

impl From<&UserInfo> for UserRow {
    fn from(u: &UserInfo) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username.clone(),
            nickname: u.nickname.clone(),
            role: u.role.as_ref().map(|r| r.name.clone()).unwrap_or_default(),
            gold: u.gold,
            exp: u.exp,
            level: u.level,
            status: u.status,
            created: format_time(u.created_at),
        }
    }
}

impl TableRow for UserRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Username", "Nickname", "Role", "Gold", "Exp", "Lv", "Created"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.username.clone(),
            self.nickname.clone(),
            self.role.clone(),
            self.gold.to_string(),
            self.exp.to_string(),
            self.level.to_string(),
            self.created.clone(),
        ]
    }
}

impl PlainPrint for UserRow {
    fn plain_print(&self) {
        println!(
            "[{}] {} {}",
            self.id.cyan(),
            self.username.bold(),
            if self.nickname.is_empty() {
                String::new()
            } else {
                format!("({})", self.nickname)
            }
        );
        println!(
            "   Lv.{}  {} gold  {} exp  {}",
            self.level,
            self.gold.to_string().yellow(),
            self.exp.to_string().green(),
            self.role.dimmed()
        );
    }
}

/// Row for role list display.
#[derive(Serialize)]
pub struct RoleRow {
    pub id: String,
    pub name: String,
    pub key: String,
    pub status: i32,
    pub remark: String,
}

impl From<&Role> for RoleRow {
    fn from(r: &Role) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name.clone(),
            key: r.key.clone(),
            status: r.status,
            remark: r.remark.clone(),
        }
    }
}

impl TableRow for RoleRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Key", "Status", "Remark"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.key.clone(),
            self.status.to_string(),
            self.remark.clone(),
        ]
    }
}

impl PlainPrint for RoleRow {
    fn plain_print(&self) {
        println!("[{}] {} ({})", self.id.cyan(), self.name.bold(), self.key);
        if !self.remark.is_empty() {
            println!("   {}", self.remark.dimmed());
        }
    }
}

/// Row for menu display, flat or indented by depth.
#[derive(Serialize)]
pub struct MenuRow {
    pub id: String,
    pub name: String,
    pub path: String,
    pub kind: i32,
    pub sort: i32,
    pub depth: usize,
}

impl MenuRow {
    /// Flatten a menu tree into depth-annotated rows, children after parents.
    pub fn flatten(menus: &[MenuItem]) -> Vec<Self> {
        fn walk(items: &[MenuItem], depth: usize, out: &mut Vec<MenuRow>) {
            for item in items {
                out.push(MenuRow {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    path: item.path.clone(),
                    kind: item.kind,
                    sort: item.sort,
                    depth,
                });
                walk(&item.children, depth + 1, out);
            }
        }
        let mut rows = Vec::new();
        walk(menus, 0, &mut rows);
        rows
    }
}

impl TableRow for MenuRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Path", "Type", "Sort"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            format!("{}{}", "  ".repeat(self.depth), self.name),
            self.path.clone(),
            self.kind.to_string(),
            self.sort.to_string(),
        ]
    }
}

impl PlainPrint for MenuRow {
    fn plain_print(&self) {
        println!(
            "{}[{}] {} {}",
            "  ".repeat(self.depth),
            self.id.cyan(),
            self.name.bold(),
            self.path.dimmed()
        );
    }
}

/// Row for task list display.
#[derive(Serialize)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub gold: i64,
    pub exp: i64,
    pub category: String,
    pub state: String,
}

impl From<&Task> for TaskRow {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title.clone(),
            kind: t.kind.as_str().to_string(),
            gold: t.gold_reward,
            exp: t.exp_reward,
            category: t.category.clone(),
            state: active_label(t.is_active).to_string(),
        }
    }
}

impl From<&TaskEntry> for TaskRow {
    fn from(e: &TaskEntry) -> Self {
        let mut row = TaskRow::from(&e.task);
        row.state = if e.completed { "completed" } else { "open" }.to_string();
        row
    }
}

impl TableRow for TaskRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Type", "Gold", "Exp", "Category", "State"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.kind.clone(),
            self.gold.to_string(),
            self.exp.to_string(),
            self.category.clone(),
            self.state.clone(),
        ]
    }
}

impl PlainPrint for TaskRow {
    fn plain_print(&self) {
        println!(
            "[{}] {} ({}, {})",
            self.id.cyan(),
            self.title.bold(),
            self.kind,
            self.state
        );
        println!(
            "   +{} gold  +{} exp",
            self.gold.to_string().yellow(),
            self.exp.to_string().green()
        );
    }
}

/// Row for reward list display.
#[derive(Serialize)]
pub struct RewardRow {
    pub id: String,
    pub title: String,
    pub cost: i64,
    pub stock: String,
    pub category: String,
    pub state: String,
}

impl From<&Reward> for RewardRow {
    fn from(r: &Reward) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title.clone(),
            cost: r.cost,
            stock: if r.is_unlimited() {
                "∞".to_string()
            } else {
                r.stock.to_string()
            },
            category: r.category.clone(),
            state: active_label(r.is_active).to_string(),
        }
    }
}

impl TableRow for RewardRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Cost", "Stock", "Category", "State"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.cost.to_string(),
            self.stock.clone(),
            self.category.clone(),
            self.state.clone(),
        ]
    }
}

impl PlainPrint for RewardRow {
    fn plain_print(&self) {
        println!("[{}] {}", self.id.cyan(), self.title.bold());
        println!(
            "   {} gold  stock: {}  {}",
            self.cost.to_string().yellow(),
            self.stock,
            self.state.dimmed()
        );
    }
}

/// Row for announcement list display.
#[derive(Serialize)]
pub struct AnnouncementRow {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub state: String,
    pub created: String,
}

impl From<&Announcement> for AnnouncementRow {
    fn from(a: &Announcement) -> Self {
        Self {
            id: a.id.to_string(),
            title: a.title.clone(),
            kind: format!("{:?}", a.kind).to_lowercase(),
            state: active_label(a.is_active).to_string(),
            created: format_time(a.created_at),
        }
    }
}

impl TableRow for AnnouncementRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Type", "State", "Created"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.kind.clone(),
            self.state.clone(),
            self.created.clone(),
        ]
    }
}

impl PlainPrint for AnnouncementRow {
    fn plain_print(&self) {
        println!(
            "[{}] {} ({}, {})",
            self.id.cyan(),
            self.title.bold(),
            self.kind,
            self.created.dimmed()
        );
    }
}

/// Row for ledger display.
#[derive(Serialize)]
pub struct LogRow {
    pub id: String,
    pub kind: String,
    pub amount: i64,
    pub balance: i64,
    pub description: String,
    pub created: String,
}

impl From<&UserLog> for LogRow {
    fn from(l: &UserLog) -> Self {
        Self {
            id: l.id.to_string(),
            kind: l.kind.as_str().to_string(),
            amount: l.amount,
            balance: l.balance,
            description: l.description.clone(),
            created: format_time(l.created_at),
        }
    }
}

impl TableRow for LogRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Type", "Amount", "Balance", "Description", "Time"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind.clone(),
            self.amount.to_string(),
            self.balance.to_string(),
            self.description.clone(),
            self.created.clone(),
        ]
    }
}

impl PlainPrint for LogRow {
    fn plain_print(&self) {
        let amount = if self.kind.ends_with("_in") {
            format!("+{}", self.amount).green()
        } else {
            format!("-{}", self.amount).red()
        };
        println!(
            "[{}] {} {} (balance {}) {}",
            self.created.dimmed(),
            amount,
            self.kind,
            self.balance,
            self.description
        );
    }
}
