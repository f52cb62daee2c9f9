use crate::attendance::summary::{DISPLAY_LIMIT, MonthlySummary, SummaryEntry};
use poise::serenity_prelude as serenity;

/// Hours with two decimals.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Money rounded to a whole amount, halves away from zero.
pub fn format_amount(amount: f64) -> String {
    format!("{:.0}", amount.round())
}

pub fn format_error_message(error: &str) -> String {
    format!("❌ **Error**: {}", error)
}

pub fn format_success_message(message: &str) -> String {
    format!("✅ {}", message)
}

pub fn create_error_embed(title: &str, description: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .color(0xff0000) // Red
        .timestamp(chrono::Utc::now())
}

fn format_week_field(entries: &[SummaryEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let mut line = format!(
                "`{}` {} → {} ({} h)",
                entry.date_label, entry.clock_in, entry.clock_out, entry.working_hours
            );
            if entry.overtime_hours != "0" {
                line.push_str(&format!(
                    " ⏱️ {} h / {}",
                    entry.overtime_hours, entry.overtime_amount
                ));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn create_summary_embed(
    username: &str,
    summary: &MonthlySummary,
    currency: &str,
) -> serenity::CreateEmbed {
    let weeks = summary.weeks(DISPLAY_LIMIT);

    let mut description = format!(
        "**Overtime this month**: {} h\n**Overtime pay**: {} {}",
        summary.total_overtime_hours_display(),
        currency,
        summary.total_overtime_amount_display()
    );
    if weeks.is_empty() {
        description.push_str("\n\nNo attendance records this month");
    }

    let mut embed = serenity::CreateEmbed::new()
        .title("📅 Monthly overtime")
        .description(description)
        .color(0x9b59b6) // Purple
        .author(serenity::CreateEmbedAuthor::new(format!(
            "{}'s records",
            username
        )))
        .timestamp(chrono::Utc::now());

    for week in &weeks {
        embed = embed.field(
            format!("Week of {}", week.week_start.format("%m/%d")),
            format_week_field(&week.entries),
            false,
        );
    }

    let mut footer = format!(
        "{} ～ {}",
        summary.month_start.format("%Y-%m-%d"),
        summary.month_end.format("%Y-%m-%d")
    );
    if summary.is_truncated(DISPLAY_LIMIT) {
        footer.push_str(&format!(" (first {} days shown)", DISPLAY_LIMIT));
    }

    embed.footer(serenity::CreateEmbedFooter::new(footer))
}
