//! Demo: video reference normalization
//!
//! Run with: cargo run -p earthview-models --example embed_demo

use earthview_models::{normalize, AppOrigin, PlaybackSurface};

fn main() {
    let origin = AppOrigin::parse("http://localhost:8080").expect("demo origin is valid");

    let test_urls = [
        "https://www.youtube.com/watch?v=p4pWafuvdrY&list=PL123&start=10",
        "https://youtu.be/xx-0pMlleTM?si=Q0ioBySz_199FsKJ",
        "https://www.youtube.com/embed/JyjjiEQq6uI?si=P84C85U7NSg8xqWH&autoplay=0",
        "/src/components/Glaciervideo.mp4",
        "https://player.vimeo.com/video/123456789",
        "",
    ];

    for url in test_urls {
        println!("\n{}", "=".repeat(60));
        println!("INPUT: {:?}", url);
        println!("{}", "=".repeat(60));

        let reference = normalize(url, &origin);
        println!(
            "{}",
            reference
                .to_json_pretty()
                .expect("serialization should be infallible")
        );

        match PlaybackSurface::for_reference(&reference) {
            Some(surface) if surface.is_native() => println!("SURFACE: <video src={:?}>", surface.src()),
            Some(surface) => println!("SURFACE: <iframe src={:?}>", surface.src()),
            None => println!("SURFACE: nothing to play"),
        }
    }
}
