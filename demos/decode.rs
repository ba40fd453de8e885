use magnet_uri_rs::{decode, DecoderOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "magnet_uri_rs=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Magnet URI Decode Examples ===\n");

    let inputs = [
        // Example 1: Multiple hash topics, sources and a vendor key
        "magnet:?xt=urn:ed2k:354B15E68FB8F36D7CD88FF94116CDC1\
         &xt=urn:btih:QHQXPYWMACKDWKP47RRVIV7VOURXFE5Q\
         &xl=10826029\
         &dn=mediawiki-1.15.1.tar.gz\
         &tr=udp%3A%2F%2Ftracker.openbittorrent.com%3A80%2Fannounce\
         &xs=dchub%3A%2F%2Fexample.org\
         &kt=tag1+tag2\
         &x.some=qwerty",
        // Example 2: Repeated and valueless parameters
        "magnet:?xt=urn:btih:ABC&xt=urn:btih:ABC&xs=A&xs=B&xs=A&k=&g",
        // Example 3: Prefix in the middle of surrounding text
        "Download: magnet:?xt=urn:btih:ABC&dn=test.txt",
        // Example 4: Failures
        "https://example.com/file",
        "magnet:?dn=q%w%erty",
        "magnet:?xl=notanumber",
    ];

    for (i, input) in inputs.iter().enumerate() {
        println!("{}. Input:\n{}\n", i + 1, input);
        match decode(input, &DecoderOptions::default()) {
            Ok(link) => match serde_json::to_string_pretty(&link) {
                Ok(json) => println!("Parsed:\n{}\n", json),
                Err(e) => println!("Serialization error: {}\n", e),
            },
            Err(e) => println!("Error: {}\n", e),
        }
    }

    // Lenient decoding keeps undecodable values as written
    println!("Lenient decode of a bad escape:");
    let options = DecoderOptions {
        strict: false,
        ..DecoderOptions::default()
    };
    match decode("magnet:?dn=q%w%erty", &options) {
        Ok(link) => println!("display_name = {:?}", link.display_name),
        Err(e) => println!("Error: {}", e),
    }
}
