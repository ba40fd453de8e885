use magnet_uri_rs::{encode, EncoderOptions, MagnetLink};

fn main() {
    println!("=== MagnetLink to URI Examples ===\n");

    // Example 1: Single info hash
    println!("1. Single info hash:");
    let link = MagnetLink {
        exact_topics: vec!["urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a".to_string()],
        ..MagnetLink::default()
    };
    println!("{}\n", encode(&link, &EncoderOptions::default()));

    // Example 2: Display name and trackers (percent-encoded)
    println!("2. Display name and trackers:");
    let link = MagnetLink {
        display_name: "Example File (2024).mkv".to_string(),
        exact_topics: vec!["urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a".to_string()],
        exact_length: 734003200,
        trackers: vec![
            "udp://tracker.example.com:80/announce".to_string(),
            "http://tracker.example.org/announce".to_string(),
        ],
        ..MagnetLink::default()
    };
    println!("{}\n", encode(&link, &EncoderOptions::default()));

    // Example 3: Keyword and manifest topics
    println!("3. Keyword and manifest topics:");
    let link = MagnetLink {
        exact_topics: vec!["urn:sha1:XRX2PEFXOOEJFRVUCX6HMZMKS5TWG4K5".to_string()],
        keyword_topic: vec!["linux".to_string(), "iso".to_string()],
        manifest_topic: "http://weblog.foo/all-my-favorites.rss".to_string(),
        ..MagnetLink::default()
    };
    println!("{}\n", encode(&link, &EncoderOptions::default()));

    // Example 4: Vendor parameters, escaped on request
    println!("4. Vendor parameters:");
    let mut link = MagnetLink::new();
    link.exact_topics = vec!["urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a".to_string()];
    link.addition_params.insert(
        "x.pe".to_string(),
        vec!["10.0.0.1:6881".to_string(), "[::1]:6881".to_string()],
    );
    let options = EncoderOptions {
        always_emit_display_name: false,
        escape_addition_params: true,
    };
    println!("{}\n", encode(&link, &options));
}
