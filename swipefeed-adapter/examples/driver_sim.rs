use swipefeed::{FeedItem, FeedOptions};
use swipefeed_adapter::Driver;

fn frame(driver: &mut Driver, now_ms: &mut u64, frames: u64) {
    for _ in 0..frames {
        *now_ms += 16;
        driver.tick(*now_ms);
    }
}

fn main() {
    // Example: a frame loop driving a feed without any UI objects.
    //
    // An adapter would:
    // - forward drags/releases and presses from its input layer
    // - call tick(now_ms) once per frame
    // - render the pager offset and the feed's surface props / overlay
    let items = (0..5)
        .map(|i| FeedItem::new(format!("https://cdn.example.com/clip-{i}.mp4")))
        .collect();
    let mut driver = Driver::new(items, FeedOptions::new().with_go_to_next(true), 800, 0);

    let mut now_ms = 0u64;

    driver.video_ended(0);
    frame(&mut driver, &mut now_ms, 30);
    println!(
        "t={now_ms} off={} current={:?}",
        driver.pager().offset(),
        driver.feed().current_index()
    );

    driver.on_drag(1_300, now_ms);
    driver.on_release(now_ms);
    frame(&mut driver, &mut now_ms, 30);
    println!(
        "t={now_ms} off={} current={:?}",
        driver.pager().offset(),
        driver.feed().current_index()
    );

    driver.press_in(now_ms);
    frame(&mut driver, &mut now_ms, 2);
    println!("tap -> muted={:?}", driver.press_release(now_ms));
    println!("overlay={:?}", driver.feed().overlay_icon());
}
