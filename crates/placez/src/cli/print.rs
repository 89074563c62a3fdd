use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use placezapp::api::{CmdMessage, MessageLevel, PageInfo};
use placezapp::auth::Session;
use placezapp::model::{Category, Place, Status};
use placezapp::query::{Filter, ViewParams};
use placezapp::stats::Statistics;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const STATUS_WIDTH: usize = 9;
const RATING_WIDTH: usize = 5;
const PRICE_WIDTH: usize = 5;
const STAR: &str = "★";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Heading for a listing, picked by the same precedence as the query:
/// search, then category, then status.
pub(super) fn list_title(view: &ViewParams, total: usize) -> String {
    if let Some(term) = view.active_search() {
        return format!("Search Results: \"{}\" ({})", term, total);
    }
    let label = match (view.category, view.status) {
        (Filter::Only(category), _) => category.plural_label(),
        (Filter::All, Filter::Only(status)) => status.plural_label(),
        (Filter::All, Filter::All) => "All Travel Places",
    };
    format!("{} ({})", label, total)
}

pub(super) fn print_place_list(title: &str, places: &[Place], page: Option<PageInfo>) {
    println!("{}", title.bold());
    println!();
    print_places(places);
    if let Some(info) = page {
        if info.total_pages > 1 {
            println!();
            println!(
                "{}",
                format!("page {}/{}", info.page, info.total_pages).dimmed()
            );
        }
    }
}

fn status_colored(status: Status, text: String) -> ColoredString {
    match status {
        Status::Visited => text.green(),
        Status::Planned => text.cyan(),
        Status::Wishlist => text.magenta(),
    }
}

fn print_places(places: &[Place]) {
    if places.is_empty() {
        println!("No places found.");
        return;
    }

    let id_width = places.iter().map(|p| p.id.width()).max().unwrap_or(0);

    for place in places {
        let id_str = format!("{:<width$}  ", place.id, width = id_width);
        let status = format!("{:<width$} ", place.status.as_str(), width = STATUS_WIDTH);
        let rating = format!("{:>width$} ", format!("{:.1}{}", place.rating, STAR), width = RATING_WIDTH);
        let price = format!("{:<width$}", place.price_range.as_str(), width = PRICE_WIDTH);
        let time_ago = format_time_ago(place.last_updated);

        let fixed_width = 2 + id_str.width() + status.width() + rating.width() + PRICE_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title = format!("{} · {}", place.name, place.location);
        let title_display = truncate_to_width(&title, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "  {}{}{}{}{}{}{}",
            id_str.yellow(),
            title_display,
            " ".repeat(padding),
            status_colored(place.status, status),
            rating,
            price.dimmed(),
            time_ago.dimmed()
        );
    }
}

pub(super) fn print_full_places(places: &[Place]) {
    for (i, place) in places.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", place.id.yellow(), place.name.bold());
        println!("--------------------------------");
        println!("{}", place.description);
        println!();
        println!("  {:<12}{}", "Location", place.location);
        println!("  {:<12}{}", "Category", category_label(place.category));
        println!(
            "  {:<12}{}",
            "Status",
            status_colored(place.status, place.status.as_str().to_string())
        );
        println!("  {:<12}{:.1}{}", "Rating", place.rating, STAR);
        println!("  {:<12}{}", "Visitors", place.visitors);
        println!("  {:<12}{}", "Price", place.price_range);
        println!("  {:<12}{}", "Best time", place.best_time);
        println!("  {:<12}{}", "Image", place.image);
        if !place.amenities.is_empty() {
            println!("  {:<12}{}", "Amenities", place.amenities.join(", "));
        }
        println!(
            "  {:<12}{}",
            "Added",
            place.date_added.format("%Y-%m-%d").to_string().dimmed()
        );
        println!(
            "  {:<12}{}",
            "Updated",
            format_time_ago(place.last_updated).trim_start().dimmed()
        );
    }
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Beach => "Beach",
        Category::Mountain => "Mountain",
        Category::City => "City",
        Category::Historical => "Historical",
        Category::Forest => "Forest",
    }
}

pub(super) fn print_statistics(stats: &Statistics) {
    println!("{}", "Travel Statistics".bold());
    println!();
    println!("  {:<18}{}", "Total places", stats.total_places);
    println!("  {:<18}{}", "Top rated", stats.top_rated);
    println!("  {:<18}{}", "Upcoming trips", stats.upcoming);
    println!("  {:<18}{}", "Most visited", stats.most_visited);
    println!("  {:<18}{}", "Total visitors", stats.total_visitors);
    println!("  {:<18}{:.1}{}", "Average rating", stats.average_rating, STAR);

    println!();
    println!("{}", "By category".bold());
    for (category, count) in &stats.categories {
        println!("  {:<18}{}", category.plural_label(), count);
    }

    println!();
    println!("{}", "By status".bold());
    for (status, count) in &stats.statuses {
        println!(
            "  {}{}",
            status_colored(*status, format!("{:<18}", status.plural_label())),
            count
        );
    }

    println!();
    println!(
        "{}",
        format!("Updated {}", format_time_ago(stats.last_updated).trim_start()).dimmed()
    );
}

pub(super) fn print_session(session: &Session) {
    println!(
        "{} {}",
        session.username.bold(),
        format!("(logged in {})", format_time_ago(session.login_time).trim_start()).dimmed()
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
