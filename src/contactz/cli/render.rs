//! # Rendering
//!
//! Terminal output for the CLI. Column layout is computed with `unicode-width` so names
//! with wide characters still line up; colors come from `colored`, which turns itself off
//! when stdout is not a terminal.

use colored::Colorize;
use contactz::api::{CmdMessage, ContactStats, MessageLevel};
use contactz::model::Contact;
use contactz::query::DisplayContact;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NUMBER_WIDTH: usize = 5;
const NAME_WIDTH: usize = 24;
const PHONE_WIDTH: usize = 16;
const EMAIL_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 11;

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

pub(super) fn print_contact_table(contacts: &[DisplayContact], total: usize) {
    if contacts.is_empty() {
        println!("No contacts found.");
    } else {
        let header = format!(
            "{}{}{}{}{}{}",
            pad("#", NUMBER_WIDTH),
            pad("Name", NAME_WIDTH),
            pad("Phone", PHONE_WIDTH),
            pad("Email", EMAIL_WIDTH),
            pad("Category", CATEGORY_WIDTH),
            "ID"
        );
        println!("{}", header.bold());

        for dc in contacts {
            let c = &dc.contact;
            println!(
                "{}{}{}{}{}{}",
                pad(&format!("{}.", dc.number()), NUMBER_WIDTH).yellow(),
                pad(&c.name, NAME_WIDTH),
                pad(&c.phone, PHONE_WIDTH),
                pad(&c.email, EMAIL_WIDTH),
                pad(&c.category, CATEGORY_WIDTH).cyan(),
                c.id.dimmed()
            );
        }
    }
    println!();
    println!("{}", format!("Total Contacts: {}", total).dimmed());
}

pub(super) fn print_stats(stats: &ContactStats) {
    println!("{}", "Contact Statistics".bold());
    println!();
    println!("Total: {}", stats.total);
    for (category, count) in &stats.by_category {
        println!("{}: {}", category, count);
    }
}

pub(super) fn print_contact_card(title: &str, contact: &Contact) {
    println!("{}", title.bold());
    println!();
    println!("Name: {}", contact.name);
    println!("Phone: {}", contact.phone);
    println!("Email: {}", contact.email);
}

/// Truncate to `width - 1` columns and pad to `width`, leaving one column of gutter.
fn pad(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
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
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
