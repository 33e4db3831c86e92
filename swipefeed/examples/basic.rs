use swipefeed::{Feed, FeedItem, FeedOptions, ScrollRequest, SoundIcons, ViewToken};

fn main() {
    // Example: a host list reports visibility, the user taps to unmute, and the first video ends.
    let items = vec![
        FeedItem::new("https://cdn.example.com/a.mp4"),
        FeedItem::new("https://cdn.example.com/b.mp4"),
        FeedItem::new("https://cdn.example.com/c.mp4"),
    ];
    let options = FeedOptions::new()
        .with_go_to_next(true)
        .with_mute(swipefeed::MuteMode::Uncontrolled(true))
        .with_on_end(Some(|index: usize| println!("video {index} ended")));
    let mut feed = Feed::new(items, options, 0);
    let icons = SoundIcons::new("🔊", "🔇");

    feed.on_viewable_items_changed(&[ViewToken::new(0)]);
    for index in 0..feed.count() {
        println!("{index}: {:?}", feed.surface_props(index));
    }

    feed.tap(0, 1_000);
    println!("after tap: muted={} overlay={:?}", feed.muted(), feed.render_overlay(&icons));
    feed.tick(1_500);
    println!("after 500ms: overlay={:?}", feed.render_overlay(&icons));

    let mut list: Vec<ScrollRequest> = Vec::new();
    feed.on_video_end(0, &mut list);
    println!("list commands: {list:?}");

    // The host list scrolls, then reports the new page.
    feed.on_viewable_items_changed(&[ViewToken::new(1)]);
    println!("now playing: {:?}", feed.playback_state(1));
}
