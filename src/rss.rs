use chrono::{NaiveDate, NaiveTime};
use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::content::{derive_summary, ContentItem};

const SITE_URL: &str = "https://yuvarajguru.dev";

pub fn build_channel(posts: &[ContentItem]) -> Channel {
    let items = posts
        .iter()
        .map(|post| {
            let link = format!("{SITE_URL}/blog/{}", post.slug);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            let author = post
                .author
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default();
            ItemBuilder::default()
                .title(post.title.clone())
                .description(derive_summary(post))
                .author(author)
                .pub_date(pub_date(&post.date))
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE_URL}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title("Yuvaraj Guru's Blog")
        .description("Notes on frontend architecture, backend plumbing, and everything in between.")
        .link(format!("{SITE_URL}/blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

// Store dates are validated YYYY-MM-DD; publish them at midnight UTC.
fn pub_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .expect("store dates are validated at load")
        .and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc2822()
}
