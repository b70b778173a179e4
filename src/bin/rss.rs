use std::fs::File;

use portfolio_site::content::blog_posts;
use portfolio_site::rss::build_channel;

fn main() {
    let channel = build_channel(blog_posts().items());

    let file = File::create("public/rss.xml").expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
}
