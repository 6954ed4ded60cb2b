//! Plain-text rendering of a fetched profile.

use crate::profile::ProfileData;

/// Formats `n` with a comma between every group of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

fn stat_row(key: &str, value: &str) -> String {
    format!("{key}: {value}")
}

/// Summary lines, in print order.
pub fn summary_lines(profile: &ProfileData) -> Vec<String> {
    let mut lines = vec![
        "User Profile:".to_string(),
        stat_row("Name", &profile.user.nickname),
        stat_row("Username", &format!("@{}", profile.user.unique_id)),
        stat_row("Followers", &group_thousands(profile.stats.followers)),
        stat_row("Videos", &group_thousands(profile.stats.videos)),
        stat_row("Likes", &group_thousands(profile.stats.likes)),
        stat_row("URL", &profile.url),
    ];

    if let Some(ts) = profile.scraped_at {
        lines.push(stat_row("Scraped", &ts.format("%Y-%m-%d %H:%M UTC").to_string()));
    }

    lines
}
