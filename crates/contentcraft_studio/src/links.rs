//! Post-now and scheduling deep links.
//!
//! Neither action calls a publishing API: "post now" opens a prefilled
//! external site (with the composed text on the clipboard where the site
//! offers no prefill), and "schedule" produces a calendar-event deep link.

use chrono::{DateTime, Duration, Utc};
use contentcraft_core::{Platform, Post};

/// What the user-facing surface should do to hand a post off to a platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareAction {
    /// The page to open in a new tab
    pub url: String,
    /// Text to place on the clipboard first, when the page has no prefill
    pub clipboard: Option<String>,
}

/// Compose a post for the clipboard: `"Title: …"` plus body for
/// title-bearing platforms, body only elsewhere.
pub fn clipboard_text(platform: Platform, post: &Post) -> String {
    if platform.requires_title() {
        format!(
            "Title: {}\n\n{}",
            post.title.as_deref().unwrap_or_default(),
            post.content
        )
    } else {
        post.content.clone()
    }
}

/// The share action for posting right now.
///
/// Twitter prefills through its intent URL; the other destinations open
/// their compose or upload page with the composed text on the clipboard.
/// Script ideas are not postable and yield `None`.
pub fn post_now(platform: Platform, post: &Post) -> Option<ShareAction> {
    match platform {
        Platform::Twitter => Some(ShareAction {
            url: format!(
                "https://twitter.com/intent/tweet?text={}",
                urlencoding::encode(&post.content)
            ),
            clipboard: None,
        }),
        Platform::LinkedIn => Some(ShareAction {
            url: "https://www.linkedin.com/feed/".to_string(),
            clipboard: Some(post.content.clone()),
        }),
        Platform::Instagram => Some(ShareAction {
            url: "https://www.instagram.com/".to_string(),
            clipboard: Some(post.content.clone()),
        }),
        Platform::Reddit => Some(ShareAction {
            url: "https://www.reddit.com/submit".to_string(),
            clipboard: Some(clipboard_text(platform, post)),
        }),
        Platform::YouTube => Some(ShareAction {
            url: "https://www.youtube.com/upload".to_string(),
            clipboard: Some(clipboard_text(platform, post)),
        }),
        Platform::ScriptIdeas => None,
    }
}

/// A Google Calendar deep link reminding the user to publish at `start`.
///
/// The event lasts fifteen minutes and carries the composed post text in
/// its details. No scheduling is executed server-side.
pub fn calendar_link(platform: Platform, post: &Post, start: DateTime<Utc>) -> String {
    let end = start + Duration::minutes(15);
    let stamp = |t: DateTime<Utc>| t.format("%Y%m%dT%H%M%SZ").to_string();

    let title = format!("Publish Post to {platform}");
    let details = format!(
        "Time to publish the scheduled post on {platform}.\n\nContent:\n{}",
        clipboard_text(platform, post)
    );

    format!(
        "https://www.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}",
        urlencoding::encode(&title),
        stamp(start),
        stamp(end),
        urlencoding::encode(&details)
    )
}
