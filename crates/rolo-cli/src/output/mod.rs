use owo_colors::OwoColorize;

use rolo_core::GroupedContacts;
use rolo_types::{Contact, Origin};

/// The single user-facing message for any remote fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load contacts. Please try again.";

/// Empty-state line, distinguishing "nothing matched" from "nothing there".
pub fn empty_message(query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("No contacts found for \"{}\".", q),
        _ => "No contacts available.".to_string(),
    }
}

fn origin_tag(contact: &Contact) -> &'static str {
    match contact.origin {
        Origin::Local => "local",
        Origin::Remote => "",
    }
}

/// Truncate respecting UTF-8 character boundaries.
fn truncate_for_display(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

pub fn print_contacts_table(contacts: &[Contact]) {
    // Pad before styling; ANSI escapes would otherwise throw off the columns.
    println!(
        "{} {} {} {}",
        format!("{:<28}", "NAME").bold(),
        format!("{:<32}", "EMAIL").bold(),
        format!("{:<16}", "PHONE").bold(),
        "ORIGIN".bold()
    );
    for contact in contacts {
        print_contact_row(contact);
    }
    println!();
    println!("{} contact(s)", contacts.len());
}

fn print_contact_row(contact: &Contact) {
    let name = format!("{:<28}", truncate_for_display(&contact.full_name(), 28));
    let email = format!("{:<32}", truncate_for_display(&contact.email, 32));
    let phone = format!("{:<16}", truncate_for_display(&contact.phone, 16));
    println!(
        "{} {} {} {}",
        name.cyan(),
        email,
        phone,
        origin_tag(contact).yellow()
    );
}

pub fn print_grouped(grouped: &GroupedContacts) {
    let index: String = grouped
        .index()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{} {}", "Index:".bold(), index.cyan());
    println!();

    for group in &grouped.groups {
        println!("{}", group.letter.to_string().bold().underline());
        for contact in &group.contacts {
            print_contact_row(contact);
        }
        println!();
    }
    println!("{} contact(s)", grouped.len());
}

pub fn print_contact_card(contact: &Contact) {
    println!("{}", contact.full_name().bold());
    println!("  ID:     {}", contact.id.as_str().dimmed());
    println!("  Email:  {}", contact.email);
    println!("  Phone:  {}", contact.phone);
    match contact.origin {
        Origin::Local => println!("  Origin: {}", "local (never synced)".yellow()),
        Origin::Remote => println!("  Origin: remote"),
    }
    if let Some(avatar) = &contact.avatar {
        let preview = if avatar.large.starts_with("data:") {
            format!("embedded image ({} bytes)", avatar.large.len())
        } else {
            avatar.large.clone()
        };
        println!("  Avatar: {}", preview);
    }
}
